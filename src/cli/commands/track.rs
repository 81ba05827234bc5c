use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::SessionController;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::ui::runtime::{FixedTicker, Runner, StdinEventSource};
use crate::ui::shell::Shell;
use crate::utils::time::SystemClock;

/// Handle the `track` command: open the store once and hand it to the
/// shell for the whole run. The connection is closed when the shell ends.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Track { name } = cmd {
        let store = SqliteStore::open(&cfg.database)?;
        let ctl = SessionController::new(store, SystemClock)
            .with_end_time_refresh(cfg.refresh_end_time_on_resume);

        let runner = Runner::new(
            StdinEventSource::new(),
            FixedTicker::from_millis(cfg.tick_interval_ms),
        );

        header("rPlaytime");
        let mut shell = Shell::new(ctl, &cfg.time_format);
        shell.run(&runner, name.as_deref())?;
    }

    Ok(())
}
