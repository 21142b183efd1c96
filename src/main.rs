use std::io::{self, BufRead, Write};

use calq::{evaluate, parse};
use clap::Parser;

/// calq is an easy to use, interactive evaluator for integer arithmetic
/// expressions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print the parse tree in Lisp-style prefix notation instead of
    /// evaluating.
    #[arg(short, long)]
    lisp: bool,

    /// Expression to evaluate. When omitted, calq starts an interactive
    /// prompt.
    expression: Option<String>,
}

fn main() {
    let args = Args::parse();

    match args.expression {
        Some(expression) => {
            if let Err(e) = run_line(&expression, args.lisp) {
                eprintln!("{e}");
                std::process::exit(1);
            }
        },
        None => repl(args.lisp),
    }
}

/// Runs the pipeline on one line and prints the outcome.
fn run_line(line: &str, lisp: bool) -> Result<(), Box<dyn std::error::Error>> {
    if lisp {
        let expr = parse(line)?;
        println!("{}", expr.to_lisp());
    } else {
        println!("{}", evaluate(line)?);
    }
    Ok(())
}

/// The interactive read-evaluate-print loop.
///
/// Reads one expression per line, prints its value or the error, and keeps
/// going. A malformed expression never terminates the process; the loop
/// ends on end of input (Ctrl-D).
fn repl(lisp: bool) {
    let stdin = io::stdin();

    loop {
        print!("calc> ");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {},
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Err(e) = run_line(line, lisp) {
            eprintln!("{e}");
        }
    }
}
