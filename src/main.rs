#![deny(warnings)]

use clap::Parser;
use color_eyre::eyre::Result;

use saankhya_kiosk::{
    app::App,
    cli::Cli,
    content::Content,
    utils::{initialize_logging, initialize_panic_handler},
};

async fn tokio_main() -> Result<()> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let args = <Cli as Parser>::parse();

    let content = Content::load()?;

    let mut app = App::new(content, args.tick_rate, args.frame_rate);
    app.run().await?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = tokio_main().await {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}
