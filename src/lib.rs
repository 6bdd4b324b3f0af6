//! # Saankhya Kiosk
//!
//! An interactive terminal kiosk for Sāṅkhya Academy, built with Rust and Ratatui.
//! This library implements an Elm-like architecture for predictable state management.
//!
//! ## Architecture Overview
//!
//! This crate is organized around the Elm architecture pattern:
//!
//! - **Model** (`core::state`): Application state, one sub-state per widget
//! - **Message** (`core::msg`): Events that can change the state
//! - **Update** (`core::update`): Pure functions that transform state
//! - **Command** (`core::cmd`): Side effects (timers, relay hand-off, logging)
//! - **View** (`components`): UI rendering based on current state
//!
//! ## Example Usage
//!
//! ```rust
//! use saankhya_kiosk::content::Content;
//! use saankhya_kiosk::core::msg::{chat::ChatMsg, Msg};
//! use saankhya_kiosk::core::state::AppState;
//! use saankhya_kiosk::core::update::update;
//!
//! // Initialize state from the embedded site content
//! let content = Content::embedded_default().unwrap();
//! let initial_state = AppState::new(content).unwrap();
//!
//! // Process messages
//! let (new_state, commands) = update(Msg::Chat(ChatMsg::Open), initial_state);
//!
//! // State is now updated and commands contain side effects to execute
//! assert!(new_state.chat.is_visible());
//! assert!(commands.is_empty());
//! ```
//!
//! ## Modules
//!
//! - [`core`] - State, messages, update functions and commands
//! - [`components`] - UI components
//! - [`content`] - Static site content (story cards, knowledge base, listings)
//! - [`relay`] - Contract for the external form-relay collaborator
//! - [`app`] - Runtime event loop

pub mod app;
pub mod cli;
pub mod components;
pub mod content;
pub mod core;
pub mod relay;
pub mod tui;
pub mod utils;

// Re-exports for convenience
pub use crate::core::cmd::Cmd;
pub use crate::core::msg::Msg;
pub use crate::core::state::AppState;
pub use crate::core::update::update;

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
