use anyhow::Context;
use scribe::cli;
use scribe::editor::EditorSession;
use scribe::ui::{TerminalInput, TerminalSession};

/// Parse arguments, load the document, and run the editor until quit.
///
/// The document is loaded before the terminal switches to raw mode so a
/// missing or unreadable file is reported on a normal screen. The terminal
/// guard is dropped before an error leaves `main`, so the message prints on
/// a restored terminal and the process exits non-zero.
fn main() -> anyhow::Result<()> {
    let cli_args = cli::parse_args();

    // Initialize logger (set RUST_LOG env var to control verbosity)
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let mut session = match &cli_args.file {
        Some(path) => EditorSession::open(path)
            .with_context(|| format!("failed to open '{}'", path.display()))?,
        None => EditorSession::new(),
    };

    let result = {
        let mut screen = TerminalSession::enter().context("failed to set up terminal")?;
        session.run(&mut TerminalInput, &mut screen)
    };

    result.context("editor session failed")
}
