use serde::{Deserialize, Serialize};

use crate::relay::RelaySubmission;

/// Elm-like command definitions
/// Represents side effects (timers, relay hand-off, logging) that must not
/// happen inside the pure update path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    /// Deliver a chat session reset after the close animation has settled.
    /// The generation lets the widget ignore resets that were superseded by
    /// a reopen before the timer fired.
    ScheduleChatReset { generation: u64, delay_ms: u64 },

    /// Return the form status banner to idle after its display window.
    ScheduleFormIdle { generation: u64, delay_ms: u64 },

    /// Hand a completed form to the external relay collaborator.
    SubmitForm { submission: RelaySubmission },

    // Logging related
    LogError { message: String },
    LogInfo { message: String },

    // Batch command (execute multiple commands together)
    Batch(Vec<Cmd>),

    // Do nothing (for testing)
    None,
}

impl Cmd {
    /// Combine multiple commands into one
    pub fn batch(commands: Vec<Cmd>) -> Cmd {
        match commands.len() {
            0 => Cmd::None,
            1 => commands.into_iter().next().unwrap_or(Cmd::None),
            _ => Cmd::Batch(commands),
        }
    }

    /// Whether the command requires asynchronous processing
    pub fn is_async(&self) -> bool {
        match self {
            Cmd::ScheduleChatReset { .. }
            | Cmd::ScheduleFormIdle { .. }
            | Cmd::SubmitForm { .. } => true,

            Cmd::LogError { .. } | Cmd::LogInfo { .. } | Cmd::None => false,

            Cmd::Batch(cmds) => cmds.iter().any(|cmd| cmd.is_async()),
        }
    }

    /// Get command priority (smaller numbers = higher priority)
    pub fn priority(&self) -> u8 {
        match self {
            // User-visible outcomes first
            Cmd::SubmitForm { .. } => 1,

            // Timers are latency-tolerant by definition
            Cmd::ScheduleChatReset { .. } | Cmd::ScheduleFormIdle { .. } => 2,

            // Logging has lowest priority
            Cmd::LogError { .. } | Cmd::LogInfo { .. } => 4,

            // Batch takes highest priority of contained commands
            Cmd::Batch(cmds) => cmds.iter().map(|cmd| cmd.priority()).min().unwrap_or(255),

            Cmd::None => 255,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn log_cmd() -> Cmd {
        Cmd::LogInfo {
            message: "test".to_string(),
        }
    }

    #[test]
    fn test_cmd_batch_empty() {
        let cmd = Cmd::batch(vec![]);
        assert_eq!(cmd, Cmd::None);
    }

    #[test]
    fn test_cmd_batch_single() {
        let original_cmd = log_cmd();
        let cmd = Cmd::batch(vec![original_cmd.clone()]);
        assert_eq!(cmd, original_cmd);
    }

    #[test]
    fn test_cmd_batch_multiple() {
        // Batch should wrap when there are 2+ commands
        let cmds = vec![
            log_cmd(),
            Cmd::ScheduleChatReset {
                generation: 1,
                delay_ms: 300,
            },
        ];
        let batch_cmd = Cmd::batch(cmds.clone());
        assert_eq!(batch_cmd, Cmd::Batch(cmds));
    }

    #[test]
    fn test_cmd_is_async() {
        assert!(Cmd::ScheduleChatReset {
            generation: 0,
            delay_ms: 300
        }
        .is_async());
        assert!(!log_cmd().is_async());
        assert!(!Cmd::None.is_async());
    }

    #[test]
    fn test_cmd_priority() {
        assert_eq!(
            Cmd::ScheduleFormIdle {
                generation: 0,
                delay_ms: 3000
            }
            .priority(),
            2
        );
        assert_eq!(log_cmd().priority(), 4);
        assert_eq!(Cmd::None.priority(), 255);
    }

    #[test]
    fn test_cmd_batch_priority() {
        let batch = Cmd::Batch(vec![
            log_cmd(), // priority 4
            Cmd::ScheduleChatReset {
                generation: 0,
                delay_ms: 300,
            }, // priority 2
        ]);

        // Batch priority should be the minimum of its children (lower = higher priority)
        assert_eq!(batch.priority(), 2);
    }

    #[test]
    fn test_cmd_batch_is_async() {
        let sync_batch = Cmd::Batch(vec![log_cmd()]);
        assert!(!sync_batch.is_async());

        let async_batch = Cmd::Batch(vec![Cmd::ScheduleFormIdle {
            generation: 0,
            delay_ms: 3000,
        }]);
        assert!(async_batch.is_async());
    }

    #[test]
    fn test_cmd_serialization() {
        let cmd = Cmd::ScheduleChatReset {
            generation: 7,
            delay_ms: 300,
        };

        let serialized = serde_json::to_string(&cmd).unwrap();
        let deserialized: Cmd = serde_json::from_str(&serialized).unwrap();
        assert_eq!(cmd, deserialized);
    }
}
