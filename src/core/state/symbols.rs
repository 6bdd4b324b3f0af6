use rand::{rngs::StdRng, Rng, SeedableRng};

/// Field coordinates run in percent, matching the original layout math.
pub const FIELD_MAX: f64 = 100.0;
/// Glyphs occupy roughly this much of the field; bounces happen early enough
/// that a glyph never pokes past the edge.
pub const GLYPH_MARGIN: f64 = 4.0;
/// Velocity magnitude bound per axis, in percent per tick.
pub const MAX_SPEED: f64 = 0.19;

/// One drifting glyph of the decorative background.
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    pub symbol: String,
    pub x: f64,
    pub y: f64,
    pub dx: f64,
    pub dy: f64,
}

/// The decorative math-symbol field behind the hero view.
///
/// Tick-driven and owned by the view lifecycle: the runtime calls [`step`]
/// from its tick message while the field is started, and stops it on
/// teardown. The field reads and writes only its own positions.
///
/// [`step`]: SymbolFieldState::step
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolFieldState {
    glyphs: Vec<Glyph>,
    running: bool,
}

impl SymbolFieldState {
    pub fn new(symbols: &[String]) -> Self {
        Self::with_rng(symbols, &mut StdRng::from_entropy())
    }

    /// Deterministic construction for tests.
    pub fn with_seed(symbols: &[String], seed: u64) -> Self {
        Self::with_rng(symbols, &mut StdRng::seed_from_u64(seed))
    }

    fn with_rng(symbols: &[String], rng: &mut StdRng) -> Self {
        let upper = FIELD_MAX - GLYPH_MARGIN;
        let glyphs = symbols
            .iter()
            .map(|symbol| Glyph {
                symbol: symbol.clone(),
                x: rng.gen_range(0.0..upper * 0.8),
                y: rng.gen_range(0.0..upper * 0.8),
                dx: rng.gen_range(-MAX_SPEED..=MAX_SPEED),
                dy: rng.gen_range(-MAX_SPEED..=MAX_SPEED),
            })
            .collect();
        Self {
            glyphs,
            running: false,
        }
    }

    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Advance every glyph by one tick, bouncing at the field edges.
    /// A stopped field ignores ticks entirely.
    pub fn step(&mut self) {
        if !self.running {
            return;
        }
        let upper = FIELD_MAX - GLYPH_MARGIN;
        for glyph in &mut self.glyphs {
            glyph.x += glyph.dx;
            glyph.y += glyph.dy;

            if glyph.x < 0.0 {
                glyph.x = 0.0;
                glyph.dx = -glyph.dx;
            } else if glyph.x > upper {
                glyph.x = upper;
                glyph.dx = -glyph.dx;
            }

            if glyph.y < 0.0 {
                glyph.y = 0.0;
                glyph.dy = -glyph.dy;
            } else if glyph.y > upper {
                glyph.y = upper;
                glyph.dy = -glyph.dy;
            }
        }
    }
}
