use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use thiserror::Error;
use tracing::{debug, instrument};

/// Forces UTF-8 mode in the child interpreter.
pub const UTF8_ENV: (&str, &str) = ("PYTHONUTF8", "1");

/// Where the child's stdout/stderr go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Streams {
    /// Share the launcher's own handles; output is never seen by the launcher.
    Inherit,
    /// Collect both streams into memory.
    Capture,
}

#[derive(Debug)]
pub struct ChildRun {
    pub status: ExitStatus,
    /// Empty unless run with [`Streams::Capture`].
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

#[derive(Debug, Error)]
pub enum ExecError {
    #[error("{0}")]
    Spawn(#[from] std::io::Error),
}

/// Run `interpreter script` to completion.
///
/// The script path is the only argument. The environment is inherited with
/// `PYTHONUTF8=1` added. The child's stdin is the null device in both modes.
/// There is no timeout.
#[instrument(skip_all, fields(interpreter = %interpreter.display(), script = %script.display()))]
pub fn run_script(interpreter: &Path, script: &Path, streams: Streams) -> Result<ChildRun, ExecError> {
    let mut cmd = Command::new(interpreter);
    cmd.arg(script)
        .env(UTF8_ENV.0, UTF8_ENV.1)
        .stdin(Stdio::null());

    debug!(?streams, "spawning child process");
    let run = match streams {
        Streams::Inherit => {
            let status = cmd
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit())
                .status()?;
            ChildRun {
                status,
                stdout: Vec::new(),
                stderr: Vec::new(),
            }
        }
        Streams::Capture => {
            let output = cmd.output()?;
            ChildRun {
                status: output.status,
                stdout: output.stdout,
                stderr: output.stderr,
            }
        }
    };
    debug!(status = %run.status, "child exited");
    Ok(run)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn nonexistent_interpreter_returns_spawn_error() {
        let path = Path::new("/nonexistent/python/python-does-not-exist");
        let result = run_script(path, Path::new("main.py"), Streams::Capture);
        assert!(matches!(result, Err(ExecError::Spawn(_))));
    }

    #[cfg(unix)]
    fn fake_python(dir: &Path, body: &str) -> std::path::PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = dir.join("python.exe");
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[cfg(unix)]
    #[test]
    fn child_gets_script_as_sole_argument() {
        let dir = tempdir().unwrap();
        let python = fake_python(dir.path(), r#"echo "argc=$#"; printf '%s\n' "$@""#);
        let script = dir.path().join("bot_app").join("main.py");

        let run = run_script(&python, &script, Streams::Capture).unwrap();
        assert!(run.status.success());
        let stdout = String::from_utf8(run.stdout).unwrap();
        assert_eq!(stdout, format!("argc=1\n{}\n", script.display()));
    }

    #[cfg(unix)]
    #[test]
    fn child_environment_has_utf8_mode_and_inherits_parent() {
        let dir = tempdir().unwrap();
        let python = fake_python(dir.path(), r#"echo "utf8=$PYTHONUTF8"; echo "path=$PATH""#);

        let run = run_script(&python, Path::new("main.py"), Streams::Capture).unwrap();
        let stdout = String::from_utf8(run.stdout).unwrap();
        assert!(stdout.contains("utf8=1\n"), "stdout: {stdout}");
        let parent_path = std::env::var("PATH").unwrap_or_default();
        assert!(stdout.contains(&format!("path={parent_path}\n")), "stdout: {stdout}");
    }

    #[cfg(unix)]
    #[test]
    fn captured_streams_are_verbatim() {
        let dir = tempdir().unwrap();
        let python = fake_python(dir.path(), "printf 'марker\\r\\nout'; printf 'err-bytes' >&2");

        let run = run_script(&python, Path::new("main.py"), Streams::Capture).unwrap();
        assert_eq!(run.stdout, "марker\r\nout".as_bytes());
        assert_eq!(run.stderr, b"err-bytes");
    }

    #[cfg(unix)]
    #[test]
    fn child_stdin_is_at_eof() {
        let dir = tempdir().unwrap();
        let python = fake_python(dir.path(), r#"if read line; then echo "got=[$line]"; else echo eof; fi"#);

        let run = run_script(&python, Path::new("main.py"), Streams::Capture).unwrap();
        assert_eq!(run.stdout, b"eof\n");
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_is_reported_not_an_error() {
        let dir = tempdir().unwrap();
        let python = fake_python(dir.path(), "exit 7");

        let run = run_script(&python, Path::new("main.py"), Streams::Capture).unwrap();
        assert_eq!(run.status.code(), Some(7));
    }
}
