//! Interactive prompt loop: one infix expression per line.

use std::io::{self, BufRead, Write};

use rpnc_infix::{ConverterConfig, InfixConverter};
use rpnc_stack::GrowableStack;

/// State of one interactive session: the converter, its reusable working
/// stack and the word that ends the session.
pub struct ReplSession {
    converter: InfixConverter,
    // One working stack for the whole session; the converter clears it
    // before every line.
    stack: GrowableStack<char>,
    quit_word: String,
}

impl ReplSession {
    pub const PROMPT: &'static str = "infix > ";

    /// Session with the default converter that ends on `quit`.
    pub fn new() -> Self {
        Self::with_config("quit", ConverterConfig::default())
    }

    pub fn with_config<S: Into<String>>(quit_word: S, config: ConverterConfig) -> Self {
        Self {
            converter: InfixConverter::with_config(config),
            stack: GrowableStack::new(),
            quit_word: quit_word.into(),
        }
    }

    /// First line printed, naming the quit word.
    pub fn banner(&self) -> String {
        format!(
            "Enter an infix equation.  Type \"{}\" when done.",
            self.quit_word
        )
    }

    /// Handle one line of input. Returns the lines to print and whether the
    /// session should end.
    pub fn handle_line(&mut self, line: &str) -> (Vec<String>, bool) {
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim() == self.quit_word {
            return (Vec::new(), true);
        }

        let mut postfix = String::new();
        let out = match self
            .converter
            .convert_with_stack(line, &mut self.stack, &mut postfix)
        {
            Ok(()) => vec![format!("\tpostfix:  {postfix}"), String::new()],
            Err(err) => {
                log::info!("rejected {line:?}: {err}");
                let mut out = vec![format!("\terror: {err}")];
                if let Some(help) = err.help() {
                    out.push(format!("\t= help: {help}"));
                }
                out.push(String::new());
                out
            }
        };
        (out, false)
    }
}

impl Default for ReplSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Drive `session` from `input` until the quit word or end of input.
pub fn run_repl<R: BufRead, W: Write>(
    session: &mut ReplSession,
    mut input: R,
    output: &mut W,
) -> io::Result<()> {
    writeln!(output, "{}", session.banner())?;
    let mut line = String::new();
    loop {
        write!(output, "{}", ReplSession::PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(());
        }

        let (out, exit) = session.handle_line(&line);
        for l in out {
            writeln!(output, "{l}")?;
        }
        if exit {
            return Ok(());
        }
    }
}
