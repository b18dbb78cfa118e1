use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::debug;

/// One place an interpreter may live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidate {
    /// A concrete file shipped next to the launcher.
    Bundled(PathBuf),
    /// A bare executable name looked up on the search path.
    OnSearchPath(&'static str),
}

impl std::fmt::Display for Candidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Candidate::Bundled(path) => write!(f, "{}", path.display()),
            Candidate::OnSearchPath(name) => write!(f, "{name} (search path)"),
        }
    }
}

/// The fixed candidate order: bundled `pythonw.exe`, bundled `python.exe`,
/// then `pythonw` and `python` from the search path.
pub fn default_candidates(bundled_dir: &Path) -> Vec<Candidate> {
    vec![
        Candidate::Bundled(bundled_dir.join("pythonw.exe")),
        Candidate::Bundled(bundled_dir.join("python.exe")),
        Candidate::OnSearchPath("pythonw"),
        Candidate::OnSearchPath("python"),
    ]
}

/// Evaluate `candidates` in order and return the first one `resolve` accepts.
///
/// Candidates after the first hit are never passed to `resolve`.
pub fn find_interpreter<F>(candidates: &[Candidate], mut resolve: F) -> Option<PathBuf>
where
    F: FnMut(&Candidate) -> Option<PathBuf>,
{
    for candidate in candidates {
        match resolve(candidate) {
            Some(path) => {
                debug!(%candidate, path = %path.display(), "interpreter candidate resolved");
                return Some(path);
            }
            None => debug!(%candidate, "interpreter candidate rejected"),
        }
    }
    None
}

/// Resolves candidates against the filesystem and a search path.
#[derive(Debug, Clone, Default)]
pub struct SearchPath {
    /// `None` means the process `PATH`.
    paths: Option<OsString>,
}

impl SearchPath {
    /// Use the launcher's own `PATH`.
    pub fn from_env() -> Self {
        Self::default()
    }

    /// Use an explicit `PATH`-style list instead of the environment.
    pub fn with_paths(paths: impl Into<OsString>) -> Self {
        Self {
            paths: Some(paths.into()),
        }
    }

    pub fn resolve(&self, candidate: &Candidate) -> Option<PathBuf> {
        match candidate {
            Candidate::Bundled(path) => is_executable_file(path).then(|| path.clone()),
            Candidate::OnSearchPath(name) => match &self.paths {
                Some(paths) => {
                    let cwd = std::env::current_dir().ok()?;
                    which::which_in(*name, Some(paths), cwd).ok()
                }
                None => which::which(*name).ok(),
            },
        }
    }
}

#[cfg(unix)]
fn is_executable_file(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    std::fs::metadata(path)
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable_file(path: &Path) -> bool {
    path.is_file()
}
