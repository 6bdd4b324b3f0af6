use serde::{Deserialize, Serialize};

use crate::core::{cmd::Cmd, msg::system::SystemMsg};

/// The top-level sections of the kiosk, in page order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum ActiveSection {
    #[default]
    Hero,
    Story,
    Courses,
    Features,
    Gallery,
    Contact,
}

impl ActiveSection {
    pub fn next(self) -> Self {
        match self {
            ActiveSection::Hero => ActiveSection::Story,
            ActiveSection::Story => ActiveSection::Courses,
            ActiveSection::Courses => ActiveSection::Features,
            ActiveSection::Features => ActiveSection::Gallery,
            ActiveSection::Gallery => ActiveSection::Contact,
            ActiveSection::Contact => ActiveSection::Hero,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ActiveSection::Hero => ActiveSection::Contact,
            ActiveSection::Story => ActiveSection::Hero,
            ActiveSection::Courses => ActiveSection::Story,
            ActiveSection::Features => ActiveSection::Courses,
            ActiveSection::Gallery => ActiveSection::Features,
            ActiveSection::Contact => ActiveSection::Gallery,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ActiveSection::Hero => "Home",
            ActiveSection::Story => "Our Story",
            ActiveSection::Courses => "Courses",
            ActiveSection::Features => "Why Us",
            ActiveSection::Gallery => "Gallery",
            ActiveSection::Contact => "Admissions",
        }
    }
}

/// Runtime housekeeping: lifecycle flags, the active section, and the
/// transient status line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SystemState {
    pub should_quit: bool,
    pub should_suspend: bool,
    pub status_message: Option<String>,
    pub active_section: ActiveSection,
}

impl SystemState {
    pub fn new() -> Self {
        Self::default()
    }

    /// System-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: SystemMsg) -> Vec<Cmd> {
        match msg {
            SystemMsg::Quit => {
                self.should_quit = true;
                vec![]
            }
            SystemMsg::Suspend => {
                self.should_suspend = true;
                vec![]
            }
            SystemMsg::Resume => {
                self.should_suspend = false;
                vec![]
            }
            // Tick work belongs to the animated sub-states; nothing here.
            SystemMsg::Tick => vec![],
            SystemMsg::NextSection => {
                self.active_section = self.active_section.next();
                vec![]
            }
            SystemMsg::PrevSection => {
                self.active_section = self.active_section.prev();
                vec![]
            }
            SystemMsg::UpdateStatusMessage(message) => {
                self.status_message = Some(message);
                vec![]
            }
            SystemMsg::ClearStatusMessage => {
                self.status_message = None;
                vec![]
            }
            SystemMsg::ShowError(message) => {
                self.status_message = Some(message.clone());
                vec![Cmd::LogError { message }]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_section_cycle_is_closed() {
        use strum::IntoEnumIterator;
        for section in ActiveSection::iter() {
            assert_eq!(section.next().prev(), section);
            assert_eq!(section.prev().next(), section);
        }
    }

    #[test]
    fn test_next_section_wraps() {
        let mut system = SystemState::new();
        for _ in 0..6 {
            system.update(SystemMsg::NextSection);
        }
        assert_eq!(system.active_section, ActiveSection::Hero);
    }

    #[test]
    fn test_quit_sets_flag() {
        let mut system = SystemState::new();
        let cmds = system.update(SystemMsg::Quit);

        assert!(system.should_quit);
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_suspend_and_resume() {
        let mut system = SystemState::new();

        system.update(SystemMsg::Suspend);
        assert!(system.should_suspend);

        system.update(SystemMsg::Resume);
        assert!(!system.should_suspend);
    }

    #[test]
    fn test_status_message_roundtrip() {
        let mut system = SystemState::new();

        system.update(SystemMsg::UpdateStatusMessage("saved".to_string()));
        assert_eq!(system.status_message.as_deref(), Some("saved"));

        system.update(SystemMsg::ClearStatusMessage);
        assert_eq!(system.status_message, None);
    }

    #[test]
    fn test_show_error_logs_and_displays() {
        let mut system = SystemState::new();
        let cmds = system.update(SystemMsg::ShowError("boom".to_string()));

        assert_eq!(system.status_message.as_deref(), Some("boom"));
        assert!(matches!(cmds.as_slice(), [Cmd::LogError { .. }]));
    }
}
