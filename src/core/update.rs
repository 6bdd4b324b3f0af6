use crate::core::cmd::Cmd;
use crate::core::msg::{system::SystemMsg, Msg};
use crate::core::state::AppState;

/// The top-level update function: routes a message to the sub-state that
/// owns it and returns the next state plus any commands to run.
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    let cmds = match msg {
        Msg::System(msg) => {
            // Ticks also drive the animated sub-states
            if msg == SystemMsg::Tick {
                state.symbols.step();
                state.carousel.tick();
            }
            state.system.update(msg)
        }
        Msg::Carousel(msg) => state.carousel.update(msg),
        Msg::Chat(msg) => state.chat.update(msg),
        Msg::Gallery(msg) => state.gallery.update(msg),
        Msg::Form(msg) => state.form.update(msg),
    };

    (state, cmds)
}
