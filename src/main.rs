use std::{
    error::Error,
    fs,
    io::{self, BufRead, IsTerminal, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use reckon::{analyze, calculate, evaluate, interpreter::lexer::Scanner, parse, render};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// reckon evaluates arithmetic expressions: numbers, operators, constants and
/// builtin functions.
///
/// Without an expression or an input file, reckon reads standard input when it
/// is piped, or starts an interactive prompt otherwise.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Read the expression from this file.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Print the tokens of the expression instead of evaluating it.
    #[arg(short, long)]
    scan: bool,

    /// Print the analyzed expression tree instead of evaluating it.
    #[arg(short, long)]
    parse: bool,

    /// Log pipeline details to stderr.
    #[arg(short, long)]
    verbose: bool,

    /// The expression to evaluate.
    expression: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_filter = if args.verbose { "reckon=debug" } else { "reckon=warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
                  .unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let source = match (&args.input, &args.expression) {
        (Some(_), Some(_)) => return Err("too many arguments".into()),
        (Some(path), None) => fs::read_to_string(path).map_err(|e| {
                                  format!("Failed to read the input file '{}': {e}",
                                          path.display())
                              })?,
        (None, Some(expression)) => expression.clone(),
        (None, None) if !io::stdin().is_terminal() => io::read_to_string(io::stdin())?,
        (None, None) => return repl(),
    };

    if args.scan {
        for token in Scanner::new(&source) {
            let token = token?;
            println!("{:<12}: {}", token.kind.to_string(), token.text);
        }
        return Ok(());
    }

    let expr = parse(&source)?;
    analyze(&expr)?;

    if args.parse {
        print!("{}", render(&expr));
    } else {
        println!("{}", evaluate(&expr));
    }
    Ok(())
}

/// Reads expressions line by line, printing each result or diagnostic.
fn repl() -> Result<(), Box<dyn Error>> {
    let mut stdout = io::stdout();
    let mut lines = io::stdin().lock().lines();

    loop {
        print!("> ");
        stdout.flush()?;

        let Some(line) = lines.next() else {
            println!();
            return Ok(());
        };
        let line = line?;
        let text = line.trim();

        match text {
            "" => {},
            "exit" | "quit" => return Ok(()),
            _ => match calculate(text) {
                Ok(value) => println!("{value}"),
                Err(e) => eprintln!("{e}"),
            },
        }
    }
}
