//! The read-eval loop behind the `smarket` binary.

use std::io::{BufRead, Write};

use clap::error::ErrorKind;
use clap::Parser;
use smarket_core::{Clock, Market};
use tracing::{debug, warn};

use crate::cli::{Cli, OutputFormat, ShellCommand, ShellLine};
use crate::commands::{self, CommandResult};
use crate::error::CliError;
use crate::output;

pub const PROMPT: &str = "Type `help` for instructions:";

#[derive(Debug, Clone, Copy)]
pub struct ShellSettings {
    pub format: OutputFormat,
    pub pretty: bool,
    pub prompt: bool,
}

impl From<&Cli> for ShellSettings {
    fn from(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            pretty: cli.pretty,
            prompt: !cli.no_prompt,
        }
    }
}

enum Step {
    Skip,
    Exit,
    Text(String),
    Done(CommandResult),
}

/// Reads commands until `exit` or end of input.
///
/// A failing command is reported on `output` and the loop carries on; only
/// I/O and serialization failures end the session early.
pub fn run<R, W, C>(
    input: R,
    mut output: W,
    market: &mut Market<C>,
    settings: ShellSettings,
) -> Result<(), CliError>
where
    R: BufRead,
    W: Write,
    C: Clock,
{
    let mut lines = input.lines();
    loop {
        if settings.prompt {
            writeln!(output, "{PROMPT}")?;
            output.flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };

        match step(&line?, market) {
            Step::Skip => continue,
            Step::Exit => break,
            Step::Text(text) => writeln!(output, "{}", text.trim_end())?,
            Step::Done(result) => {
                output::render(&result, settings.format, settings.pretty, &mut output)?
            }
        }
        writeln!(output)?;
    }

    debug!(stocks = market.len(), "shell closed");
    output.flush()?;
    Ok(())
}

fn step<C: Clock>(line: &str, market: &mut Market<C>) -> Step {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Step::Skip;
    }

    let parsed = match ShellLine::try_parse_from(tokens) {
        Ok(parsed) => parsed,
        Err(error) => {
            if !matches!(
                error.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ) {
                debug!(kind = ?error.kind(), "unparsable shell line");
            }
            return Step::Text(error.render().to_string());
        }
    };

    if matches!(parsed.command, ShellCommand::Exit) {
        return Step::Exit;
    }

    match commands::run(&parsed.command, market) {
        Ok(result) => Step::Done(result),
        Err(error) => {
            warn!(%error, "command failed");
            Step::Text(format!("error: {error}"))
        }
    }
}
