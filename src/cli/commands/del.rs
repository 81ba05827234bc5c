use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::store::{RecordStore, SqliteStore};
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let mut store = SqliteStore::open(&cfg.database)?;

        // Fail early on unknown ids, before asking anything.
        let record = store.get(*id)?;

        let prompt = format!(
            "Are you sure you want to delete the record for {} (#{}, {})? This action is irreversible.",
            record.activity_name,
            record.id,
            record.total_readable()
        );

        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let gone = DeleteLogic::apply(&mut store, *id)?;
        success(format!(
            "Record #{} for {} has been deleted.",
            gone.id, gone.activity_name
        ));
    }

    Ok(())
}
