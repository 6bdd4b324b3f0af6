//! Static site content: everything the kiosk displays that is data, not
//! behavior. Ships embedded; a file in the config directory overrides it.

use serde::{Deserialize, Serialize};

use crate::core::state::carousel::Card;
use crate::core::state::chat::KnowledgeBase;
use crate::core::state::gallery::GalleryItem;
use crate::utils;

const CONTENT: &str = include_str!("../.config/content.json5");

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    #[error("content failed to parse: {0}")]
    Parse(String),
    #[error("content needs at least one story card")]
    EmptyStoryDeck,
    #[error("content needs at least one knowledge base category")]
    EmptyKnowledgeBase,
}

/// Academy identity and contact details shown in the hero and contact views.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Academy {
    pub name: String,
    pub tagline: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

/// One board of education and the courses offered under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    pub courses: Vec<String>,
}

/// One teaching-philosophy card in the features view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub bio: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Content {
    pub academy: Academy,
    pub story_cards: Vec<Card>,
    pub knowledge_base: KnowledgeBase,
    pub boards: Vec<Board>,
    pub philosophy: Vec<Feature>,
    pub team: Vec<TeamMember>,
    pub gallery: Vec<GalleryItem>,
    pub symbols: Vec<String>,
}

impl Content {
    /// The content compiled into the binary.
    pub fn embedded_default() -> Result<Self, ContentError> {
        let content: Content =
            json5::from_str(CONTENT).map_err(|e| ContentError::Parse(e.to_string()))?;
        content.validate()?;
        Ok(content)
    }

    /// Load content, preferring a user override from the config directory
    /// over the embedded default. A malformed override is an error rather
    /// than a silent fallback.
    pub fn load() -> Result<Self, ContentError> {
        let config_dir = utils::get_config_dir();
        let content_files = [
            ("content.json5", config::FileFormat::Json5),
            ("content.json", config::FileFormat::Json),
            ("content.yaml", config::FileFormat::Yaml),
            ("content.toml", config::FileFormat::Toml),
        ];

        let mut builder = config::Config::builder();
        let mut found_override = false;
        for (file, format) in &content_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_override = true;
            }
        }

        if !found_override {
            return Self::embedded_default();
        }

        let content: Content = builder
            .build()
            .and_then(|cfg| cfg.try_deserialize())
            .map_err(|e| ContentError::Parse(e.to_string()))?;
        content.validate()?;
        Ok(content)
    }

    fn validate(&self) -> Result<(), ContentError> {
        if self.story_cards.is_empty() {
            return Err(ContentError::EmptyStoryDeck);
        }
        if self.knowledge_base.is_empty() {
            return Err(ContentError::EmptyKnowledgeBase);
        }
        Ok(())
    }
}
