//! Running the connection command outside the TUI.
//!
//! The configured program (default `ssh`) and the record's command are both
//! split with shell quoting rules, so `ssh_program = "ssh -t"` and commands
//! such as `-p 2222 admin@host` work without a shell in between.

use std::process::{Command, ExitStatus};
use thiserror::Error;
use tracing::{info, warn};

/// Errors building or running a connection command.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// Program and command together produced no words.
    #[error("Connection command is empty")]
    EmptyCommand,

    /// Unbalanced quotes or a trailing escape.
    #[error("Cannot split {text:?}: {source}")]
    Unsplittable {
        /// Text that failed to split.
        text: String,
        /// Underlying parse error.
        #[source]
        source: shell_words::ParseError,
    },

    /// The program could not be started.
    #[error("Failed to start {program}: {source}")]
    Spawn {
        /// Program that failed to start.
        program: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// A ready-to-run connection: program plus arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Launch {
    program: String,
    args: Vec<String>,
}

impl Launch {
    /// Combine `ssh_program` and a record `command` into one argument vector.
    pub fn new(ssh_program: &str, command: &str) -> Result<Self, LaunchError> {
        let mut words = split(ssh_program)?;
        words.extend(split(command)?);

        let mut words = words.into_iter();
        let program = words.next().ok_or(LaunchError::EmptyCommand)?;
        Ok(Self {
            program,
            args: words.collect(),
        })
    }

    /// Executable name or path.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments after the program.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Shell-quoted form for display.
    pub fn display(&self) -> String {
        let words = std::iter::once(&self.program).chain(&self.args);
        shell_words::join(words)
    }

    /// Run to completion with the current terminal's stdio.
    ///
    /// Blocks until the program exits. A non-zero exit status is returned,
    /// not treated as an error.
    pub fn run(&self) -> Result<ExitStatus, LaunchError> {
        info!(command = %self.display(), "Starting connection");
        let status = Command::new(&self.program)
            .args(&self.args)
            .status()
            .map_err(|source| LaunchError::Spawn {
                program: self.program.clone(),
                source,
            })?;
        if status.success() {
            info!(%status, "Connection ended");
        } else {
            warn!(%status, "Connection ended with failure status");
        }
        Ok(status)
    }
}

fn split(text: &str) -> Result<Vec<String>, LaunchError> {
    shell_words::split(text).map_err(|source| LaunchError::Unsplittable {
        text: text.to_string(),
        source,
    })
}
