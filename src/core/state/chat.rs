use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{cmd::Cmd, msg::chat::ChatMsg};

/// How long the close animation is given before the session is reset.
pub const SETTLE_DELAY_MS: u64 = 300;

/// Static two-level mapping backing the FAQ widget: category → question →
/// answer. Loaded once from content, never mutated at runtime. Lookups are
/// exact-string-match, case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnowledgeBase(IndexMap<String, IndexMap<String, String>>);

impl KnowledgeBase {
    pub fn new(entries: IndexMap<String, IndexMap<String, String>>) -> Self {
        Self(entries)
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn category_at(&self, index: usize) -> Option<&str> {
        self.0.get_index(index).map(|(name, _)| name.as_str())
    }

    pub fn contains_category(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn questions(&self, category: &str) -> Option<impl Iterator<Item = &str>> {
        self.0
            .get(category)
            .map(|questions| questions.keys().map(String::as_str))
    }

    pub fn question_at(&self, category: &str, index: usize) -> Option<&str> {
        self.0
            .get(category)?
            .get_index(index)
            .map(|(question, _)| question.as_str())
    }

    pub fn answer(&self, category: &str, question: &str) -> Option<&str> {
        self.0.get(category)?.get(question).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChatError {
    #[error("unknown category: {0}")]
    UnknownCategory(String),
    #[error("unknown question under {category}: {question}")]
    UnknownQuestion { category: String, question: String },
    #[error("no category selected")]
    NoCategorySelected,
}

/// Which sub-view the chat body shows, derived purely from navigation state.
/// The transcript renders above all three.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatView<'a> {
    Categories,
    Questions(&'a str),
    Answered(&'a str),
}

/// Session state of the FAQ widget.
///
/// The transcript is append-only while a session is open; a close resets it
/// after the settle delay, so the content never visibly vanishes mid
/// animation.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatState {
    kb: KnowledgeBase,
    visible: bool,
    selected_category: Option<String>,
    showing_questions: bool,
    transcript: Vec<ChatMessage>,
    reset_generation: u64,
    pending_reset: Option<u64>,
}

impl ChatState {
    pub fn new(kb: KnowledgeBase) -> Self {
        Self {
            kb,
            visible: false,
            selected_category: None,
            showing_questions: true,
            transcript: Vec::new(),
            reset_generation: 0,
            pending_reset: None,
        }
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.kb
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn selected_category(&self) -> Option<&str> {
        self.selected_category.as_deref()
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    pub fn has_pending_reset(&self) -> bool {
        self.pending_reset.is_some()
    }

    /// The sub-view to render, as a pure function of navigation state.
    pub fn view(&self) -> ChatView<'_> {
        match (&self.selected_category, self.showing_questions) {
            (None, _) => ChatView::Categories,
            (Some(category), true) => ChatView::Questions(category),
            (Some(category), false) => ChatView::Answered(category),
        }
    }

    /// Show the widget. Session state carries over from before the close,
    /// unless the deferred reset already fired. A still-pending reset is
    /// cancelled here so it cannot clobber the reopened session.
    pub fn open(&mut self) {
        self.visible = true;
        if self.pending_reset.take().is_some() {
            tracing::debug!("cancelled pending chat reset on reopen");
        }
    }

    /// Hide the widget and schedule the session reset for after the close
    /// animation has settled. Returns the generation the caller must attach
    /// to the deferred [`ChatMsg::ResetFired`].
    pub fn close(&mut self) -> u64 {
        self.visible = false;
        self.reset_generation += 1;
        self.pending_reset = Some(self.reset_generation);
        self.reset_generation
    }

    pub fn select_category(&mut self, name: &str) -> Result<(), ChatError> {
        if !self.kb.contains_category(name) {
            return Err(ChatError::UnknownCategory(name.to_string()));
        }
        self.selected_category = Some(name.to_string());
        self.showing_questions = true;
        Ok(())
    }

    /// Answer a question from the selected category. On success the question
    /// and its answer are appended to the transcript as one pair; a failed
    /// lookup appends nothing.
    pub fn select_question(&mut self, question: &str) -> Result<(), ChatError> {
        let category = self
            .selected_category
            .as_deref()
            .ok_or(ChatError::NoCategorySelected)?;
        let answer = self.kb.answer(category, question).ok_or_else(|| {
            ChatError::UnknownQuestion {
                category: category.to_string(),
                question: question.to_string(),
            }
        })?;

        let pair = [ChatMessage::user(question), ChatMessage::bot(answer)];
        self.transcript.extend(pair);
        self.showing_questions = false;
        Ok(())
    }

    pub fn back_to_questions(&mut self) -> Result<(), ChatError> {
        if self.selected_category.is_none() {
            return Err(ChatError::NoCategorySelected);
        }
        self.showing_questions = true;
        Ok(())
    }

    pub fn back_to_categories(&mut self) {
        self.selected_category = None;
        self.showing_questions = true;
    }

    fn reset_session(&mut self) {
        self.selected_category = None;
        self.showing_questions = true;
        self.transcript.clear();
    }

    /// Chat-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: ChatMsg) -> Vec<Cmd> {
        match msg {
            ChatMsg::Open => {
                self.open();
                vec![]
            }

            ChatMsg::Close => {
                let generation = self.close();
                vec![Cmd::ScheduleChatReset {
                    generation,
                    delay_ms: SETTLE_DELAY_MS,
                }]
            }

            ChatMsg::SelectCategory(name) => match self.select_category(&name) {
                Ok(()) => vec![],
                Err(e) => vec![Cmd::LogError {
                    message: format!("chat category rejected: {e}"),
                }],
            },

            ChatMsg::SelectQuestion(question) => match self.select_question(&question) {
                Ok(()) => vec![],
                Err(e) => vec![Cmd::LogError {
                    message: format!("chat question rejected: {e}"),
                }],
            },

            ChatMsg::BackToQuestions => match self.back_to_questions() {
                Ok(()) => vec![],
                Err(e) => vec![Cmd::LogError {
                    message: format!("chat back rejected: {e}"),
                }],
            },

            ChatMsg::BackToCategories => {
                self.back_to_categories();
                vec![]
            }

            ChatMsg::ResetFired { generation } => {
                if self.pending_reset == Some(generation) {
                    self.pending_reset = None;
                    self.reset_session();
                    vec![]
                } else {
                    // A reopen (or a newer close) superseded this timer.
                    vec![Cmd::LogInfo {
                        message: format!("ignored stale chat reset (generation {generation})"),
                    }]
                }
            }
        }
    }
}
