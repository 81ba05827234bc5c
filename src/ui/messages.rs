use crate::core::session::Notice;
use crate::errors::AppError;
use crate::utils::time::format_duration;
use std::fmt;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_BLUE, BOLD, ICON_INFO, RESET, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_GREEN, BOLD, ICON_OK, RESET, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_YELLOW, BOLD, ICON_WARN, RESET, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}{}{} {}{}", FG_RED, BOLD, ICON_ERR, RESET, msg);
}

/// Formatted section header
pub fn header<T: fmt::Display>(msg: T) {
    println!(
        "{}{}====================== {}\n{}",
        FG_BLUE, BOLD, msg, RESET
    );
}

/// Text shown for a controller notice.
pub fn notice_text(n: &Notice) -> String {
    match n {
        Notice::Started {
            name,
            resumed: false,
        } => format!("Tracking started for '{}'.", name),
        Notice::Started {
            name,
            resumed: true,
        } => format!("Resumed tracking on '{}'.", name),
        Notice::Stopped {
            record_id,
            name,
            total_seconds,
            created: true,
        } => format!(
            "Saved new record #{} for '{}': {}",
            record_id,
            name,
            format_duration(*total_seconds)
        ),
        Notice::Stopped {
            record_id,
            name,
            total_seconds,
            created: false,
        } => format!(
            "Updated record #{} for '{}': {}",
            record_id,
            name,
            format_duration(*total_seconds)
        ),
        Notice::Deleted { record_id, name } => {
            format!("Deleted record #{} for '{}'.", record_id, name)
        }
        Notice::Reset => "Timer reset.".to_string(),
        Notice::AlreadyTracking => "Tracking is already in progress.".to_string(),
        Notice::NotTracking => "Tracking is not in progress.".to_string(),
        Notice::NothingSelected => "No record selected.".to_string(),
    }
}

/// Print a notice at the level it deserves: no-ops warn, transitions succeed.
pub fn notice(n: &Notice) {
    let text = notice_text(n);
    match n {
        Notice::Reset => info(text),
        n if n.is_noop() => warning(text),
        _ => success(text),
    }
}

/// Print a rejected transition. Recoverable errors only warn.
pub fn report(e: &AppError) {
    match e {
        AppError::Validation(_) => warning("Please enter a game name."),
        AppError::NotFound(id) => warning(format!(
            "Record #{} no longer exists. The timer has been reset.",
            id
        )),
        e if e.is_recoverable() => warning(e),
        e => error(e),
    }
}
