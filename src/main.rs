// main.rs — orchestration only.
// Path resolution, discovery and process spawning live in the library modules.
use anyhow::Context;

use bot_launcher::config::{launcher_config, locale_from_env};
use bot_launcher::discover::{Candidate, SearchPath};
use bot_launcher::launch::{LaunchError, Launched, Launcher};
use bot_launcher::logging;

fn main() -> anyhow::Result<()> {
    logging::init();
    // Read separately so a failed base-dir lookup is still reported in the right language.
    let locale = locale_from_env();

    let code = match launch() {
        Ok(launched) => {
            tracing::debug!(interpreter = %launched.interpreter.display(), "bot script finished");
            launched.exit_code()
        }
        Err(err) => {
            tracing::debug!(error = %err, "launch aborted");
            err.report(locale.messages(), &mut std::io::stdout(), &mut std::io::stderr())
                .context("write diagnostic")?;
            err.exit_code()
        }
    };
    std::process::exit(code)
}

fn launch() -> Result<Launched, LaunchError> {
    let config = launcher_config()?;
    let search_path = SearchPath::from_env();
    Launcher::new(&config, |c: &Candidate| search_path.resolve(c)).run()
}
