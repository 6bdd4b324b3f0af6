use std::time::Duration;

use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::{
    core::cmd::Cmd,
    core::msg::{chat::ChatMsg, form::FormMsg, Msg},
    relay::RelaySubmission,
};

/// Command executor that bridges Elm commands to timers and the relay channel
#[derive(Clone)]
pub struct CmdExecutor {
    msg_sender: mpsc::UnboundedSender<Msg>,
    relay_sender: Option<mpsc::UnboundedSender<RelaySubmission>>,
}

impl CmdExecutor {
    /// Create a new command executor with message delivery only
    pub fn new(msg_sender: mpsc::UnboundedSender<Msg>) -> Self {
        Self {
            msg_sender,
            relay_sender: None,
        }
    }

    /// Create a new command executor with both message delivery and relay hand-off
    pub fn new_with_relay(
        msg_sender: mpsc::UnboundedSender<Msg>,
        relay_sender: mpsc::UnboundedSender<RelaySubmission>,
    ) -> Self {
        Self {
            msg_sender,
            relay_sender: Some(relay_sender),
        }
    }

    /// Add relay hand-off support to existing executor
    pub fn set_relay_sender(&mut self, relay_sender: mpsc::UnboundedSender<RelaySubmission>) {
        self.relay_sender = Some(relay_sender);
    }

    /// Execute a single command
    pub fn execute_command(&self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::None => {
                // No-op command, nothing to execute
            }

            Cmd::ScheduleChatReset {
                generation,
                delay_ms,
            } => {
                self.schedule(
                    Msg::Chat(ChatMsg::ResetFired {
                        generation: *generation,
                    }),
                    *delay_ms,
                );
            }

            Cmd::ScheduleFormIdle {
                generation,
                delay_ms,
            } => {
                self.schedule(
                    Msg::Form(FormMsg::IdleFired {
                        generation: *generation,
                    }),
                    *delay_ms,
                );
            }

            Cmd::SubmitForm { submission } => {
                if let Some(relay_sender) = &self.relay_sender {
                    relay_sender.send(submission.clone())?;
                } else {
                    // No relay configured: drop with warning
                    log::warn!("SubmitForm ignored: relay not available");
                }
            }

            Cmd::LogError { message } => {
                log::error!("Elm command error: {}", message);
            }

            Cmd::LogInfo { message } => {
                log::info!("Elm command info: {}", message);
            }

            Cmd::Batch(commands) => {
                for cmd in commands {
                    self.execute_command(cmd)?;
                }
            }
        }

        Ok(())
    }

    /// Execute multiple commands
    pub fn execute_commands(&self, commands: &[Cmd]) -> Result<Vec<String>> {
        let mut execution_log = Vec::new();

        for cmd in commands {
            match self.execute_command(cmd) {
                Ok(()) => {
                    execution_log.push(format!("✓ Executed: {}", cmd.name()));
                }
                Err(e) => {
                    let error_msg = format!("✗ Failed to execute {}: {}", cmd.name(), e);
                    log::error!("{}", error_msg);
                    execution_log.push(error_msg);
                }
            }
        }

        Ok(execution_log)
    }

    /// Deliver a message back into the update loop after a delay.
    /// The timer is fire-and-forget; staleness is decided by the receiving
    /// sub-state via its generation counter.
    fn schedule(&self, msg: Msg, delay_ms: u64) {
        let sender = self.msg_sender.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            if sender.send(msg).is_err() {
                log::debug!("timer fired after the update loop shut down");
            }
        });
    }

    /// Get execution statistics
    pub fn get_stats(&self) -> CmdExecutorStats {
        CmdExecutorStats {
            is_msg_sender_closed: self.msg_sender.is_closed(),
            has_relay_sender: self.relay_sender.is_some(),
            is_relay_sender_closed: self.relay_sender.as_ref().map(|sender| sender.is_closed()),
        }
    }
}

/// Command executor statistics
#[derive(Debug, Clone)]
pub struct CmdExecutorStats {
    pub is_msg_sender_closed: bool,
    pub has_relay_sender: bool,
    pub is_relay_sender_closed: Option<bool>,
}

/// Extension trait for Cmd to get human-readable names
trait CmdName {
    fn name(&self) -> String;
}

impl CmdName for Cmd {
    fn name(&self) -> String {
        match self {
            Cmd::None => "None".to_string(),
            Cmd::ScheduleChatReset { .. } => "ScheduleChatReset".to_string(),
            Cmd::ScheduleFormIdle { .. } => "ScheduleFormIdle".to_string(),
            Cmd::SubmitForm { .. } => "SubmitForm".to_string(),
            Cmd::LogError { .. } => "LogError".to_string(),
            Cmd::LogInfo { .. } => "LogInfo".to_string(),
            Cmd::Batch(cmds) => format!("Batch({})", cmds.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::form::AdmissionFields;
    use tokio::sync::mpsc;

    fn create_test_executor() -> (CmdExecutor, mpsc::UnboundedReceiver<Msg>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let executor = CmdExecutor::new(tx);
        (executor, rx)
    }

    #[test]
    fn test_execute_none() {
        let (executor, mut rx) = create_test_executor();

        executor.execute_command(&Cmd::None).unwrap();

        // Should not send any message
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_submit_form_without_relay_is_dropped() {
        let (executor, mut rx) = create_test_executor();
        let cmd = Cmd::SubmitForm {
            submission: AdmissionFields::default().to_submission(),
        };

        // No relay sender configured: dropped with warn, no message either
        executor.execute_command(&cmd).unwrap();
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_submit_form_routes_to_relay() {
        let (msg_tx, _msg_rx) = mpsc::unbounded_channel();
        let (relay_tx, mut relay_rx) = mpsc::unbounded_channel::<RelaySubmission>();
        let executor = CmdExecutor::new_with_relay(msg_tx, relay_tx);

        let submission = AdmissionFields::default().to_submission();
        executor
            .execute_command(&Cmd::SubmitForm {
                submission: submission.clone(),
            })
            .unwrap();

        assert_eq!(relay_rx.try_recv().unwrap(), submission);
    }

    #[tokio::test(start_paused = true)]
    async fn test_chat_reset_timer_delivers_message() {
        let (executor, mut rx) = create_test_executor();

        executor
            .execute_command(&Cmd::ScheduleChatReset {
                generation: 3,
                delay_ms: 300,
            })
            .unwrap();

        let msg = rx.recv().await.unwrap();
        assert!(matches!(
            msg,
            Msg::Chat(ChatMsg::ResetFired { generation: 3 })
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_form_idle_timer_delivers_message() {
        let (executor, mut rx) = create_test_executor();

        executor
            .execute_command(&Cmd::ScheduleFormIdle {
                generation: 1,
                delay_ms: 3000,
            })
            .unwrap();

        let msg = rx.recv().await.unwrap();
        assert!(matches!(msg, Msg::Form(FormMsg::IdleFired { generation: 1 })));
    }

    #[test]
    fn test_execute_multiple_commands() {
        let (executor, _rx) = create_test_executor();

        let commands = vec![
            Cmd::LogInfo {
                message: "test".to_string(),
            },
            Cmd::None,
        ];

        let log = executor.execute_commands(&commands).unwrap();

        assert_eq!(log.len(), 2);
        assert!(log[0].contains("✓ Executed: LogInfo"));
        assert!(log[1].contains("✓ Executed: None"));
    }

    #[test]
    fn test_cmd_name_trait() {
        let batch_cmd = Cmd::Batch(vec![
            Cmd::LogInfo {
                message: "test".to_string(),
            },
            Cmd::None,
        ]);
        assert_eq!(batch_cmd.name(), "Batch(2)");
    }

    #[test]
    fn test_executor_stats() {
        let (executor, _rx) = create_test_executor();
        let stats = executor.get_stats();

        assert!(!stats.is_msg_sender_closed);
        assert!(!stats.has_relay_sender);
        assert!(stats.is_relay_sender_closed.is_none());
    }

    #[test]
    fn test_executor_with_relay_sender() {
        let (msg_tx, _msg_rx) = mpsc::unbounded_channel();
        let (relay_tx, _relay_rx) = mpsc::unbounded_channel::<RelaySubmission>();
        let executor = CmdExecutor::new_with_relay(msg_tx, relay_tx);

        let stats = executor.get_stats();
        assert!(stats.has_relay_sender);
        assert_eq!(stats.is_relay_sender_closed, Some(false));
    }
}
