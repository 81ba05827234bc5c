pub mod messages;
pub mod runtime;
pub mod shell;
