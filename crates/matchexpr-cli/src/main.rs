//! Command line front end for matchexpr.
//!
//! Compiles the expression argument, evaluates it against the remaining
//! item arguments and reports the outcome both visually and through the
//! exit status: 0 on match, 1 on non-match. A compile error is a fatal
//! startup failure rendered with a caret diagnostic.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use eyre::{Result, WrapErr, eyre};
use matchexpr::Matcher;

/// Test whether a collection of items satisfies a boolean filter expression.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Filter expression, e.g. "foo and not bar".
    expression: String,
    /// Candidate items the expression is tested against.
    items: Vec<String>,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let matcher =
        Matcher::new(Some(&cli.expression)).map_err(|err| eyre!(err.caret_diagnostic()))?;
    let is_match = matcher.matches(&cli.items);

    let mut stdout = io::stdout();
    writeln!(stdout, "{}", if is_match { "✅" } else { "❌" })
        .wrap_err("failed to write match outcome to stdout")?;

    Ok(if is_match {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
