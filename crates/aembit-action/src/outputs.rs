//! GitHub Actions output and secret-masking sink.

use aembit_core::{OutputSink, Result};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;
use uuid::Uuid;

/// Output sink writing workflow commands and the step output file.
///
/// Masking goes to the command stream (`::add-mask::`); named outputs go to
/// the file named by `GITHUB_OUTPUT`, falling back to the legacy
/// `::set-output` command on runners without one. The command stream is
/// generic so tests can capture it.
pub struct GithubActionsSink<W = io::Stdout> {
    commands: W,
    output_path: Option<PathBuf>,
}

impl GithubActionsSink<io::Stdout> {
    /// Sink wired to stdout and `GITHUB_OUTPUT`.
    pub fn from_env() -> Self {
        Self::new(
            io::stdout(),
            std::env::var_os("GITHUB_OUTPUT").map(PathBuf::from),
        )
    }
}

impl<W: Write> GithubActionsSink<W> {
    pub fn new(commands: W, output_path: Option<PathBuf>) -> Self {
        Self {
            commands,
            output_path,
        }
    }
}

impl<W: Write> OutputSink for GithubActionsSink<W> {
    fn mask_secret(&mut self, value: &str) -> Result<()> {
        writeln!(self.commands, "::add-mask::{value}")?;
        Ok(())
    }

    fn set_output(&mut self, name: &str, value: &str) -> Result<()> {
        match &self.output_path {
            Some(path) => {
                // Heredoc form so multiline values survive the file format.
                let delimiter = format!("ghadelimiter_{}", Uuid::new_v4());
                let mut file = OpenOptions::new().create(true).append(true).open(path)?;
                writeln!(file, "{name}<<{delimiter}")?;
                writeln!(file, "{value}")?;
                writeln!(file, "{delimiter}")?;
            }
            None => {
                writeln!(self.commands, "::set-output name={name}::{value}")?;
            }
        }
        Ok(())
    }
}

/// Report the step's terminal failure.
pub fn set_failed(message: &str) {
    println!("::error::{message}");
}
