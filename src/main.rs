// ABOUTME: Binary entry point for the stencil CLI
// ABOUTME: Parses arguments and hands control to the application

use anyhow::Result;
use stencil::cli::{App, Args};

fn main() -> Result<()> {
    let args = Args::parse_args();
    let mut app = App::from_args(&args)?;
    app.run(args)
}
