//! Bootstrap launcher for the bundled Python bot.
//!
//! Finds `bot_app/main.py` next to the launcher binary, picks the first
//! available interpreter from a fixed candidate list and runs the script with
//! the launcher's own stdout/stderr.

pub mod config;
pub mod discover;
pub mod exec;
pub mod exit_codes;
pub mod launch;
pub mod logging;
pub mod messages;
