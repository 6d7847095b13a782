use std::{
    fs,
    io::{self, BufRead},
    process::ExitCode,
};

use clap::Parser;
use rdcalc::{
    Observer,
    ast::Expr,
    calculate_observed,
    interpreter::{
        lexer::Spanned,
        parser::core::{DEFAULT_MAX_DEPTH, ParserOptions},
    },
};
use tracing::info;
use tracing_subscriber::filter::LevelFilter;

/// rdcalc evaluates arithmetic expressions built from integers, `+ - * /`
/// and parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat the argument as the path of a file holding the expression.
    #[arg(short, long)]
    file: bool,

    /// Reject tokens left over after a complete expression instead of
    /// ignoring them.
    #[arg(long)]
    strict: bool,

    /// Maximum nesting depth of parentheses.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Print the token stream before the result.
    #[arg(long)]
    tokens: bool,

    /// Print the fully parenthesized syntax tree before the result.
    #[arg(long)]
    ast: bool,

    /// Raise the log level; repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// The expression to evaluate. Without it, every line of standard input
    /// is evaluated on its own.
    contents: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level)
                             .with_target(false)
                             .with_writer(io::stderr)
                             .init();

    let options = ParserOptions { reject_trailing: args.strict,
                                  max_depth:       args.max_depth, };

    let Some(contents) = args.contents.as_deref() else {
        return run_lines(&args, &options);
    };

    let source = if args.file {
        match fs::read_to_string(contents) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("Failed to read the input file '{contents}': {e}");
                return ExitCode::FAILURE;
            },
        }
    } else {
        contents.to_string()
    };

    if run_one(&source, &args, &options) { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

/// Evaluates each non-blank line of standard input.
fn run_lines(args: &Args, options: &ParserOptions) -> ExitCode {
    info!("reading expressions from standard input");
    let mut ok = true;

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("Failed to read standard input: {e}");
                return ExitCode::FAILURE;
            },
        };
        if line.trim().is_empty() {
            continue;
        }
        ok &= run_one(&line, args, options);
    }

    if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

/// Prints the intermediate results the command line asked for.
struct Printer {
    tokens: bool,
    ast:    bool,
}

impl Observer for Printer {
    fn on_tokens(&mut self, tokens: &[Spanned]) {
        if self.tokens {
            let rendered = tokens.iter()
                                 .map(|(token, span)| format!("{token}@{}", span.start))
                                 .collect::<Vec<_>>();
            println!("tokens: {}", rendered.join(" "));
        }
    }

    fn on_ast(&mut self, ast: &Expr) {
        if self.ast {
            println!("ast: {ast}");
        }
    }
}

/// Evaluates one expression and prints the result or a diagnostic.
///
/// Returns whether evaluation succeeded.
fn run_one(source: &str, args: &Args, options: &ParserOptions) -> bool {
    let mut printer = Printer { tokens: args.tokens,
                                ast:    args.ast, };

    match calculate_observed(source, options, &mut printer) {
        Ok(value) => {
            println!("{value}");
            true
        },
        Err(e) => {
            eprintln!("{e}");
            eprintln!("{}", e.caret(source));
            false
        },
    }
}
