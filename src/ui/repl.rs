use crate::constants::{BOT_PREFIX, USER_PREFIX};
use crate::session::Session;
use anyhow::Result;
use rand::Rng;
use std::io::{BufRead, Write};

/// Line-oriented chat loop: one turn per input line until `bye` or EOF.
///
/// `echo` repeats each input after the prompt, for piped stdin where the
/// terminal does not show what was typed.
pub fn run_repl<G: Rng, I: BufRead, W: Write>(
    session: &mut Session<G>,
    startup: &[String],
    mut input: I,
    out: &mut W,
    echo: bool,
) -> Result<()> {
    for line in startup {
        writeln!(out, "{BOT_PREFIX}{line}")?;
    }
    while session.is_open() {
        write!(out, "{USER_PREFIX}")?;
        out.flush()?;
        let mut buf = String::new();
        if input.read_line(&mut buf)? == 0 {
            writeln!(out)?;
            break;
        }
        let text = buf.trim_end_matches(['\r', '\n']);
        if echo {
            writeln!(out, "{text}")?;
        }
        if let Some(reply) = session.handle(text) {
            writeln!(out, "{BOT_PREFIX}{reply}")?;
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn run(script: &str) -> String {
        let mut session = Session::with_rng(StdRng::seed_from_u64(0), u64::MAX);
        let mut out = Vec::new();
        run_repl(&mut session, &[], script.as_bytes(), &mut out, true).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn bye_ends_the_loop_early() {
        let out = run("bye\nthanks\n");
        assert!(out.contains("BOT: Goodbye! Take care <3"));
        assert!(!out.contains("You are welcome"));
    }

    #[test]
    fn eof_ends_the_loop() {
        let out = run("thank you\n");
        assert!(out.contains("You: thank you\nBOT: You are welcome!\n"));
    }

    #[test]
    fn queries_without_corpus_ask_for_one() {
        let out = run("what is rust\n");
        assert!(out.contains("BOT: Please load a corpus first."));
    }

    #[test]
    fn startup_lines_come_first() {
        let mut session = Session::with_rng(StdRng::seed_from_u64(0), u64::MAX);
        let mut out = Vec::new();
        run_repl(&mut session, &["ready".to_string()], "".as_bytes(), &mut out, false).unwrap();
        assert!(String::from_utf8(out).unwrap().starts_with("BOT: ready\n"));
    }
}
