//! Stable exit codes for the launcher process.
//!
//! When the child ran, its own exit code is passed through unchanged; the
//! constants below are used only when no child exit code exists.

use std::process::ExitStatus;

/// Child exited successfully (or passed through its own code 0).
pub const OK: i32 = 0;
/// The launcher could not determine its own location.
pub const PATH_RESOLUTION: i32 = 64;
/// `bot_app/main.py` is missing.
pub const SCRIPT_NOT_FOUND: i32 = 65;
/// No interpreter candidate resolved.
pub const INTERPRETER_NOT_FOUND: i32 = 66;
/// The interpreter could not be started or waited on.
pub const SPAWN_FAILED: i32 = 67;
/// The child ended without an exit code on a platform with no signal number.
pub const CHILD_TERMINATED: i32 = 70;

/// Exit code the launcher should use after the child finished with `status`.
pub fn for_child(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    CHILD_TERMINATED
}
