use anyhow::Result;
use stark_chat::{
    config::Config,
    constants::BOT_NAME,
    logging,
    session::Session,
    ui::{run_chat_tui, run_repl},
};
use std::io::{self, IsTerminal};

fn main() -> Result<()> {
    let config = Config::from_cli();
    logging::init(config.tui);

    let mut session = Session::from_config(&config);
    let mut startup = Vec::new();
    if !config.quiet {
        startup.push(format!(
            "Chat with {BOT_NAME}! Load a corpus first with /load <file>. Type /help for commands."
        ));
    }
    // A bad --corpus is reported like any other load, not fatal.
    if !config.corpus.is_empty() {
        startup.push(session.load(&config.corpus));
    }

    if config.tui {
        return run_chat_tui(&mut session, &startup);
    }
    let stdin = io::stdin();
    let echo = !stdin.is_terminal();
    let mut stdout = io::stdout().lock();
    run_repl(&mut session, &startup, stdin.lock(), &mut stdout, echo)
}
