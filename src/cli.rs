use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Default, Parser)]
#[command(name = "scribe")]
#[command(version = "0.1.0")]
#[command(about = "A minimal terminal text editor")]
pub struct CliArgs {
    /// File to open; start with an empty, unnamed document when omitted
    pub file: Option<PathBuf>,
}

pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
