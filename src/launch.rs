//! The launch sequence: locate script, locate interpreter, run.
//!
//! Each step is a one-way gate. The first failure ends the run with a
//! [`LaunchError`]; nothing is retried.

use std::io::Write;
use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, info};

use crate::config::{ConfigError, LauncherConfig};
use crate::discover::{default_candidates, find_interpreter, Candidate};
use crate::exec::{run_script, ChildRun, ExecError, Streams};
use crate::exit_codes;
use crate::messages::Messages;

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error(transparent)]
    PathResolution(#[from] ConfigError),
    #[error("script not found: {}", .0.display())]
    ScriptNotFound(PathBuf),
    #[error("no python interpreter found")]
    InterpreterNotFound,
    #[error("failed to start {}: {source}", .interpreter.display())]
    Spawn {
        interpreter: PathBuf,
        #[source]
        source: ExecError,
    },
    #[error("python script failed: {}", .run.status)]
    ChildFailed { run: ChildRun },
}

impl LaunchError {
    pub fn exit_code(&self) -> i32 {
        match self {
            LaunchError::PathResolution(_) => exit_codes::PATH_RESOLUTION,
            LaunchError::ScriptNotFound(_) => exit_codes::SCRIPT_NOT_FOUND,
            LaunchError::InterpreterNotFound => exit_codes::INTERPRETER_NOT_FOUND,
            LaunchError::Spawn { .. } => exit_codes::SPAWN_FAILED,
            LaunchError::ChildFailed { run } => exit_codes::for_child(run.status),
        }
    }

    /// Localized, human-readable text for this failure.
    pub fn diagnostic(&self, messages: &Messages) -> String {
        match self {
            LaunchError::PathResolution(ConfigError::PathResolution(reason)) => {
                messages.path_resolution(reason)
            }
            LaunchError::ScriptNotFound(path) => messages.script_not_found(path),
            LaunchError::InterpreterNotFound => messages.interpreter_not_found().to_string(),
            LaunchError::Spawn { source, .. } => messages.child_failed(source),
            LaunchError::ChildFailed { run } => messages.child_failed(run.status),
        }
    }

    /// Write the diagnostic to `stderr`, and also to `stdout` when no interpreter was found.
    pub fn report(
        &self,
        messages: &Messages,
        stdout: &mut impl Write,
        stderr: &mut impl Write,
    ) -> std::io::Result<()> {
        let text = self.diagnostic(messages);
        writeln!(stderr, "{text}")?;
        if matches!(self, LaunchError::InterpreterNotFound) {
            writeln!(stdout, "{text}")?;
        }
        Ok(())
    }
}

/// A completed launch.
#[derive(Debug)]
pub struct Launched {
    pub interpreter: PathBuf,
    pub run: ChildRun,
}

impl Launched {
    pub fn exit_code(&self) -> i32 {
        exit_codes::for_child(self.run.status)
    }
}

pub struct Launcher<'a, R> {
    config: &'a LauncherConfig,
    candidates: Vec<Candidate>,
    resolve: R,
    streams: Streams,
}

impl<'a, R> Launcher<'a, R>
where
    R: FnMut(&Candidate) -> Option<PathBuf>,
{
    /// Launcher using the default candidate order for `config.bundled_dir`.
    pub fn new(config: &'a LauncherConfig, resolve: R) -> Self {
        Self {
            config,
            candidates: default_candidates(&config.bundled_dir),
            resolve,
            streams: Streams::Inherit,
        }
    }

    pub fn streams(mut self, streams: Streams) -> Self {
        self.streams = streams;
        self
    }

    pub fn run(mut self) -> Result<Launched, LaunchError> {
        debug!(base_dir = %self.config.base_dir.display(), "locating script");
        let script = &self.config.script_path;
        if !script.is_file() {
            return Err(LaunchError::ScriptNotFound(script.clone()));
        }

        debug!(script = %script.display(), "locating interpreter");
        let interpreter = find_interpreter(&self.candidates, &mut self.resolve)
            .ok_or(LaunchError::InterpreterNotFound)?;

        info!(interpreter = %interpreter.display(), "starting bot script");
        let run = match run_script(&interpreter, script, self.streams) {
            Ok(run) => run,
            Err(source) => return Err(LaunchError::Spawn { interpreter, source }),
        };
        if !run.status.success() {
            return Err(LaunchError::ChildFailed { run });
        }
        Ok(Launched { interpreter, run })
    }
}
