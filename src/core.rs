//! Elm-like core: state, messages, pure update and commands.

pub mod cmd;
pub mod cmd_executor;
pub mod msg;
pub mod state;
pub mod update;

pub use cmd::Cmd;
pub use cmd_executor::CmdExecutor;
pub use msg::Msg;
pub use state::AppState;
pub use update::update;
