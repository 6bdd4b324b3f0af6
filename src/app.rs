//! Runtime event loop: terminal events in, messages through the pure update,
//! commands out to the executor.

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use crate::components::Screen;
use crate::content::Content;
use crate::core::cmd_executor::CmdExecutor;
use crate::core::msg::{
    carousel::CarouselMsg, chat::ChatMsg, form::FormMsg, gallery::GalleryMsg, system::SystemMsg,
    Msg,
};
use crate::core::state::chat::ChatView;
use crate::core::state::{ActiveSection, AppState};
use crate::core::update::update;
use crate::relay::{RelayOutcome, RelaySubmission};
use crate::tui;

pub struct App {
    content: Content,
    tick_rate: f64,
    frame_rate: f64,
}

impl App {
    pub fn new(content: Content, tick_rate: f64, frame_rate: f64) -> Self {
        Self {
            content,
            tick_rate,
            frame_rate,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        let (msg_tx, mut msg_rx) = mpsc::unbounded_channel::<Msg>();
        let (relay_tx, mut relay_rx) = mpsc::unbounded_channel::<RelaySubmission>();
        let executor = CmdExecutor::new_with_relay(msg_tx.clone(), relay_tx);

        // Stand-in relay consumer: accepts the hand-off and reports it.
        // A real deployment replaces this task with the HTTP relay client.
        let relay_msg_tx = msg_tx.clone();
        tokio::spawn(async move {
            while let Some(submission) = relay_rx.recv().await {
                log::info!("relay hand-off accepted: {}", submission.subject);
                let outcome = RelayOutcome::Success;
                let delivered = relay_msg_tx
                    .send(Msg::Form(FormMsg::SubmissionFinished {
                        success: outcome.is_success(),
                    }))
                    .is_ok();
                if !delivered {
                    break;
                }
            }
        });

        let mut state = AppState::new(self.content.clone())?;
        state.symbols.start();

        let screen = Screen::new();
        let mut tui = tui::Tui::new()?
            .tick_rate(self.tick_rate)
            .frame_rate(self.frame_rate);
        tui.enter()?;

        loop {
            tokio::select! {
                maybe_event = tui.next() => {
                    let Some(event) = maybe_event else { break };
                    match event {
                        tui::Event::Quit => {
                            state = Self::dispatch(&executor, state, Msg::System(SystemMsg::Quit))?;
                        }
                        tui::Event::Tick => {
                            state = Self::dispatch(&executor, state, Msg::System(SystemMsg::Tick))?;
                        }
                        tui::Event::Render => {
                            tui.draw(|f| {
                                if let Err(e) = screen.draw(&state, f, f.area()) {
                                    log::error!("draw failed: {e}");
                                }
                            })?;
                        }
                        tui::Event::Resize(w, h) => {
                            tui.resize(ratatui::prelude::Rect::new(0, 0, w, h))?;
                        }
                        tui::Event::Key(key) => {
                            if let Some(msg) = Self::msg_for_key(key, &state) {
                                state = Self::dispatch(&executor, state, msg)?;
                            }
                        }
                        tui::Event::Error => {
                            state = Self::dispatch(
                                &executor,
                                state,
                                Msg::System(SystemMsg::ShowError("terminal event error".to_string())),
                            )?;
                        }
                        _ => {}
                    }
                }
                Some(msg) = msg_rx.recv() => {
                    state = Self::dispatch(&executor, state, msg)?;
                }
            }

            // The symbol field animates only while the hero is on screen
            if state.system.active_section == ActiveSection::Hero {
                state.symbols.start();
            } else {
                state.symbols.stop();
            }

            if state.system.should_suspend {
                tui.suspend()?;
                state = Self::dispatch(&executor, state, Msg::System(SystemMsg::Resume))?;
                tui.resume()?;
            }

            if state.system.should_quit {
                break;
            }
        }

        tui.exit()?;
        Ok(())
    }

    fn dispatch(executor: &CmdExecutor, state: AppState, msg: Msg) -> Result<AppState> {
        let (next_state, cmds) = update(msg, state);
        executor.execute_commands(&cmds)?;
        Ok(next_state)
    }

    /// Context-aware key mapping. The chat overlay captures keys while open;
    /// the contact form captures text input while active.
    fn msg_for_key(key: KeyEvent, state: &AppState) -> Option<Msg> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Some(Msg::System(SystemMsg::Quit)),
                KeyCode::Char('z') => Some(Msg::System(SystemMsg::Suspend)),
                _ => None,
            };
        }

        if state.chat.is_visible() {
            return Self::chat_key(key, state);
        }

        if state.system.active_section == ActiveSection::Contact {
            return Self::form_key(key, state);
        }

        match key.code {
            KeyCode::Char('q') => Some(Msg::System(SystemMsg::Quit)),
            KeyCode::Tab => Some(Msg::System(SystemMsg::NextSection)),
            KeyCode::BackTab => Some(Msg::System(SystemMsg::PrevSection)),
            KeyCode::Char('c') => Some(Msg::Chat(ChatMsg::Open)),
            _ => Self::section_key(key, state),
        }
    }

    fn chat_key(key: KeyEvent, state: &AppState) -> Option<Msg> {
        match key.code {
            KeyCode::Esc => Some(Msg::Chat(ChatMsg::Close)),
            KeyCode::Char('b') => match state.chat.view() {
                ChatView::Answered(_) => Some(Msg::Chat(ChatMsg::BackToQuestions)),
                ChatView::Questions(_) => Some(Msg::Chat(ChatMsg::BackToCategories)),
                ChatView::Categories => None,
            },
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                match state.chat.view() {
                    ChatView::Categories => state
                        .chat
                        .knowledge_base()
                        .category_at(index)
                        .map(|category| Msg::Chat(ChatMsg::SelectCategory(category.to_string()))),
                    ChatView::Questions(category) => state
                        .chat
                        .knowledge_base()
                        .question_at(category, index)
                        .map(|question| Msg::Chat(ChatMsg::SelectQuestion(question.to_string()))),
                    ChatView::Answered(_) => None,
                }
            }
            _ => None,
        }
    }

    fn form_key(key: KeyEvent, state: &AppState) -> Option<Msg> {
        let field = state.form.focused();
        match key.code {
            KeyCode::Tab => Some(Msg::Form(FormMsg::FocusNext)),
            KeyCode::BackTab => Some(Msg::Form(FormMsg::FocusPrev)),
            KeyCode::Enter => Some(Msg::Form(FormMsg::Submit)),
            KeyCode::Esc => Some(Msg::System(SystemMsg::PrevSection)),
            KeyCode::Backspace => {
                let mut value = state.form.fields().get(field).to_string();
                value.pop();
                Some(Msg::Form(FormMsg::UpdateField { field, value }))
            }
            KeyCode::Char(c) => {
                let mut value = state.form.fields().get(field).to_string();
                value.push(c);
                Some(Msg::Form(FormMsg::UpdateField { field, value }))
            }
            _ => None,
        }
    }

    fn section_key(key: KeyEvent, state: &AppState) -> Option<Msg> {
        match state.system.active_section {
            ActiveSection::Story => match key.code {
                KeyCode::Right | KeyCode::Char(' ') => Some(Msg::Carousel(CarouselMsg::Advance)),
                KeyCode::Char(c @ '1'..='9') => {
                    Some(Msg::Carousel(CarouselMsg::JumpTo(c as usize - '1' as usize)))
                }
                _ => None,
            },
            ActiveSection::Gallery => match key.code {
                KeyCode::Left => Some(Msg::Gallery(GalleryMsg::ScrollLeft)),
                KeyCode::Right => Some(Msg::Gallery(GalleryMsg::ScrollRight)),
                KeyCode::Char(c @ '1'..='9') => {
                    Some(Msg::Gallery(GalleryMsg::JumpTo(c as usize - '1' as usize)))
                }
                _ => None,
            },
            _ => None,
        }
    }
}
