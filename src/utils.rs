pub mod logging;
pub mod panic;
pub mod paths;

pub use logging::initialize_logging;
pub use panic::initialize_panic_handler;
pub use paths::{get_config_dir, get_data_dir};

/// Version string shown by the CLI, enriched with git metadata when available
pub fn version() -> String {
    let author = clap::crate_authors!();
    let commit = option_env!("_GIT_INFO").unwrap_or(env!("CARGO_PKG_VERSION"));
    let config_dir_path = get_config_dir().display().to_string();
    let data_dir_path = get_data_dir().display().to_string();

    format!(
        "\
{commit}

Authors: {author}

Config directory: {config_dir_path}
Data directory: {data_dir_path}"
    )
}
