use serde::{Deserialize, Serialize};

use crate::core::state::form::FormField;

/// Messages specific to the admission form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormMsg {
    UpdateField { field: FormField, value: String },
    FocusNext,
    FocusPrev,
    Submit,

    /// Reported by whatever consumed the relay hand-off. Success and every
    /// flavor of failure collapse to this one boolean.
    SubmissionFinished { success: bool },

    /// Delivered by the command executor when the status banner window ends.
    IdleFired { generation: u64 },
}

#[cfg(test)]
mod tests {
    use color_eyre::Result;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn form_msg_serde() -> Result<()> {
        let msg = FormMsg::UpdateField {
            field: FormField::StudentName,
            value: "Asha".to_string(),
        };
        let s = serde_json::to_string(&msg)?;
        let back: FormMsg = serde_json::from_str(&s)?;
        assert_eq!(msg, back);

        Ok(())
    }
}
