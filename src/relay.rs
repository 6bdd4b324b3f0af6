//! Contract for the external form-relay collaborator.
//!
//! The admission and contact forms hand completed submissions to a hosted
//! form-relay service. The exchange is:
//!
//! 1. The submission is serialized as a `multipart/form-data` body, one part
//!    per field, plus a `subject` part and a composed `message` part.
//! 2. A single POST is issued to the relay endpoint. There is no retry.
//! 3. The relay answers with a JSON body of the shape `{ "success": bool }`.
//! 4. A `success: false` field, a rejected request, and a transport error all
//!    map uniformly to the same generic failure outcome.
//!
//! The relay itself is not part of this crate. The kiosk only produces
//! [`RelaySubmission`] values and hands them off over a channel (see
//! `core::cmd_executor`); whatever consumes the channel owns the transport.

use serde::{Deserialize, Serialize};

/// One completed form, ready to be relayed.
///
/// `fields` preserves the order the form presents them in; the relay does not
/// care, but the composed message body does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelaySubmission {
    pub subject: String,
    pub fields: Vec<(String, String)>,
    /// Human-readable summary of all fields, sent as the `message` part.
    pub message: String,
}

impl RelaySubmission {
    /// The multipart parts this submission expands to, in wire order.
    pub fn parts(&self) -> Vec<(String, String)> {
        let mut parts = vec![("subject".to_string(), self.subject.clone())];
        parts.extend(self.fields.iter().cloned());
        parts.push(("message".to_string(), self.message.clone()));
        parts
    }
}

/// Outcome reported back by a relay consumer.
///
/// All failure modes collapse into `Failure`; callers show one generic error
/// message and never retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelayOutcome {
    Success,
    Failure,
}

impl RelayOutcome {
    pub fn is_success(self) -> bool {
        self == RelayOutcome::Success
    }
}
