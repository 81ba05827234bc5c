/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Grey for records that never accumulated time, plain otherwise.
pub fn color_for_total(secs: i64) -> &'static str {
    if secs > 0 { RESET } else { GREY }
}

/// Status line color: green while tracking, grey when idle.
pub fn color_for_tracking(tracking: bool) -> &'static str {
    if tracking { GREEN } else { GREY }
}
