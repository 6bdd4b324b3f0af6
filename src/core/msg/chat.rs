use serde::{Deserialize, Serialize};

/// Messages specific to the FAQ chat widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatMsg {
    Open,
    Close,
    SelectCategory(String),
    SelectQuestion(String),
    BackToQuestions,
    BackToCategories,

    /// Delivered by the command executor once the settle delay after a close
    /// has elapsed. Carries the generation it was scheduled for; stale
    /// generations are ignored.
    ResetFired { generation: u64 },
}

#[cfg(test)]
mod tests {
    use color_eyre::Result;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn chat_msg_serde() -> Result<()> {
        let msg = ChatMsg::SelectQuestion("How much are the fees?".to_string());
        let s = serde_json::to_string(&msg)?;
        let back: ChatMsg = serde_json::from_str(&s)?;
        assert_eq!(msg, back);

        Ok(())
    }

    #[test]
    fn reset_fired_carries_generation() -> Result<()> {
        let msg = ChatMsg::ResetFired { generation: 42 };
        let s = serde_json::to_string(&msg)?;
        assert_eq!(msg, serde_json::from_str(&s)?);

        Ok(())
    }
}
