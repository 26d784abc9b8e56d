use std::io;

use clap::{Args, Parser, Subcommand};
use rpnc::{init_logger, run_repl, ReplSession};
use rpnc_infix::{render_snippet, ConverterConfig, InfixConverter};

#[derive(Debug, Parser)]
#[command(
    name = "rpnc",
    version,
    about = "Convert infix arithmetic to postfix (reverse Polish) notation",
    long_about = "rpnc rewrites expressions such as `3+4*2` into postfix form such as `342*+`.\n\n\
        Operands are single characters; the operators are + - * / and the\n\
        right-associative ^. Parentheses group as usual.\n\n\
        EXAMPLES:\n\
        \n  rpnc                       Start the interactive prompt\n\
        \n  rpnc convert '(1+2)*3'     Convert one expression\n\
        \n  echo '2^3^2' | rpnc repl   Convert lines from stdin"
)]
struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Operator stack capacity to pre-allocate for each conversion
    #[arg(long = "stack-capacity", value_name = "N", default_value_t = 0, global = true)]
    stack_capacity: usize,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Read one expression per line and print its postfix form
    Repl(ReplArgs),

    /// Convert the given expressions and exit
    Convert(ConvertArgs),
}

#[derive(Debug, Args, Clone)]
struct ReplArgs {
    /// Line that ends the session
    #[arg(long = "quit-word", value_name = "WORD", default_value = "quit")]
    quit_word: String,
}

impl Default for ReplArgs {
    fn default() -> Self {
        Self {
            quit_word: "quit".to_string(),
        }
    }
}

#[derive(Debug, Args, Clone)]
struct ConvertArgs {
    /// Infix expressions to convert
    #[arg(value_name = "EXPR", required = true)]
    expressions: Vec<String>,
}

fn run_convert(args: &ConvertArgs, config: ConverterConfig) -> i32 {
    let converter = InfixConverter::with_config(config);
    let mut rc = 0;
    for expression in &args.expressions {
        match converter.convert(expression) {
            Ok(postfix) => println!("{postfix}"),
            Err(err) => {
                eprintln!("{}", render_snippet(&err, expression));
                rc = 1;
            }
        }
    }
    rc
}

fn run_interactive(args: &ReplArgs, config: ConverterConfig) -> i32 {
    let mut session = ReplSession::with_config(args.quit_word.clone(), config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    match run_repl(&mut session, stdin.lock(), &mut stdout) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("error: repl failed: {e}");
            2
        }
    }
}

fn run_cli() -> i32 {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let config = ConverterConfig {
        initial_stack_capacity: cli.stack_capacity,
    };
    log::debug!("starting with {config:?}");

    match cli.command {
        None => run_interactive(&ReplArgs::default(), config),
        Some(Command::Repl(args)) => run_interactive(&args, config),
        Some(Command::Convert(args)) => run_convert(&args, config),
    }
}

fn main() {
    std::process::exit(run_cli());
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_repl() {
        let cli = Cli::try_parse_from(["rpnc"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn convert_collects_expressions() {
        let cli = Cli::try_parse_from(["rpnc", "-vv", "convert", "1+2", "(a)"]).unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Some(Command::Convert(args)) => assert_eq!(args.expressions, vec!["1+2", "(a)"]),
            other => panic!("expected convert, got {other:?}"),
        }
    }

    #[test]
    fn convert_requires_an_expression() {
        assert!(Cli::try_parse_from(["rpnc", "convert"]).is_err());
    }

    #[test]
    fn repl_quit_word_and_stack_capacity() {
        let cli =
            Cli::try_parse_from(["rpnc", "repl", "--quit-word", "exit", "--stack-capacity", "16"])
                .unwrap();
        assert_eq!(cli.stack_capacity, 16);
        match cli.command {
            Some(Command::Repl(args)) => assert_eq!(args.quit_word, "exit"),
            other => panic!("expected repl, got {other:?}"),
        }
    }

    #[test]
    fn run_convert_reports_failures_in_exit_code() {
        let config = ConverterConfig::default();
        let ok = ConvertArgs {
            expressions: vec!["3+4*2".to_string()],
        };
        assert_eq!(run_convert(&ok, config), 0);
        let bad = ConvertArgs {
            expressions: vec!["1".to_string(), "(1+2".to_string()],
        };
        assert_eq!(run_convert(&bad, config), 1);
    }
}
