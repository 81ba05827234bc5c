//! Interactive tracking shell.
//!
//! Reads one command per line, drives the session controller and redraws
//! the elapsed time on every tick while a session is running.

use crate::core::session::{Notice, SessionController};
use crate::db::store::RecordStore;
use crate::errors::{AppError, AppResult};
use crate::models::record::RecordList;
use crate::ui::messages::{self, info, warning};
use crate::ui::runtime::{Runner, ShellEvent, ShellEventSource, Ticker};
use crate::utils::colors::{GREY, RESET, color_for_tracking};
use crate::utils::time::Clock;
use std::io::{self, Write};

const CLEAR_LINE: &str = "\r\x1b[2K";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Start(String),
    Stop,
    Toggle(String),
    Select(usize),
    Delete,
    Reset,
    List,
    Status,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((w, r)) => (w, r.trim()),
        None => (line, ""),
    };

    match word.to_lowercase().as_str() {
        "" => Command::Empty,
        "start" => Command::Start(rest.to_string()),
        "stop" => Command::Stop,
        "toggle" | "t" => Command::Toggle(rest.to_string()),
        "select" | "s" => match rest.parse::<usize>() {
            Ok(n) => Command::Select(n),
            Err(_) => Command::Unknown(line.to_string()),
        },
        "delete" | "del" => Command::Delete,
        "reset" => Command::Reset,
        "list" | "ls" => Command::List,
        "status" => Command::Status,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => Command::Unknown(line.to_string()),
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

pub struct Shell<S: RecordStore, C: Clock> {
    ctl: SessionController<S, C>,
    list: RecordList,
    time_format: String,
}

impl<S: RecordStore, C: Clock> Shell<S, C> {
    pub fn new(ctl: SessionController<S, C>, time_format: &str) -> Self {
        Self {
            ctl,
            list: RecordList::default(),
            time_format: time_format.to_string(),
        }
    }

    pub fn controller(&self) -> &SessionController<S, C> {
        &self.ctl
    }

    pub fn list(&self) -> &RecordList {
        &self.list
    }

    /// Run until `quit` or end of input. Controller errors are reported and
    /// the shell keeps going.
    pub fn run<E: ShellEventSource, T: Ticker>(
        &mut self,
        runner: &Runner<E, T>,
        initial_name: Option<&str>,
    ) -> AppResult<()> {
        self.refresh_list();
        self.print_list();
        info("Type 'help' for the list of commands.");

        if let Some(name) = initial_name {
            let r = self.ctl.start(name);
            self.outcome(r);
        }
        self.draw_prompt();

        loop {
            match runner.step() {
                ShellEvent::Tick => {
                    if self.ctl.is_tracking() {
                        self.draw_prompt();
                    }
                }
                ShellEvent::Eof => {
                    println!();
                    self.warn_discarded();
                    break;
                }
                ShellEvent::Line(line) => match parse_command(&line) {
                    Command::Quit => {
                        self.warn_discarded();
                        break;
                    }
                    Command::Delete => {
                        self.delete(runner);
                        self.draw_prompt();
                    }
                    cmd => {
                        self.apply(cmd);
                        self.draw_prompt();
                    }
                },
            }
        }

        Ok(())
    }

    /// Execute one command that needs no further input.
    pub fn apply(&mut self, cmd: Command) {
        match cmd {
            Command::Start(name) => {
                let r = self.ctl.start(&name);
                self.outcome(r);
            }
            Command::Stop => {
                let r = self.ctl.stop();
                self.outcome(r);
            }
            Command::Toggle(name) => {
                let r = self.ctl.toggle(&name);
                self.outcome(r);
            }
            Command::Select(pos) => {
                let r = match self.list.record_id_at(pos) {
                    Some(id) => self.ctl.select(id),
                    None => Err(AppError::InvalidSelection(pos)),
                };
                self.outcome(r);
            }
            Command::Reset => {
                let n = self.ctl.reset();
                self.outcome(Ok(n));
            }
            Command::List => {
                self.refresh_list();
                self.print_list();
            }
            Command::Status => self.print_status(),
            Command::Help => print_help(),
            Command::Unknown(text) => warning(format!("Unknown command: '{}'", text)),
            Command::Delete | Command::Quit | Command::Empty => {}
        }
    }

    fn delete<E: ShellEventSource, T: Ticker>(&mut self, runner: &Runner<E, T>) {
        let Some(name) = self.ctl.selected_name().map(str::to_string) else {
            self.outcome(Ok(Notice::NothingSelected));
            return;
        };

        warning(format!(
            "Are you sure you want to delete the record for {}?",
            name
        ));
        print!("Confirm [y/N]: ");
        let _ = io::stdout().flush();

        if !is_yes(&wait_for_line(runner)) {
            info("Operation cancelled.");
            return;
        }

        let r = self.ctl.confirm_delete();
        self.outcome(r);
    }

    fn outcome(&mut self, result: AppResult<Notice>) {
        print!("{}", CLEAR_LINE);
        match result {
            Ok(n) => {
                messages::notice(&n);
                if matches!(n, Notice::Stopped { .. } | Notice::Deleted { .. }) {
                    self.refresh_list();
                    self.print_list();
                }
            }
            Err(e) => {
                messages::report(&e);
                if matches!(e, AppError::NotFound(_)) {
                    self.refresh_list();
                }
            }
        }
    }

    fn refresh_list(&mut self) {
        match self.ctl.store().list_all() {
            Ok(records) => self.list = RecordList::new(records),
            Err(e) => messages::report(&e),
        }
    }

    fn print_list(&self) {
        if self.list.is_empty() {
            println!("{}No records yet.{}", GREY, RESET);
            return;
        }
        for line in self.list.lines(&self.time_format) {
            println!("{}", line);
        }
    }

    fn print_status(&self) {
        let st = self.ctl.state();
        let state = if st.tracking { "RUNNING" } else { "IDLE" };
        let name = if st.activity_name.is_empty() {
            "-"
        } else {
            st.activity_name.as_str()
        };
        let selected = st
            .selected_record_id
            .map(|id| format!("#{}", id))
            .unwrap_or_else(|| "none".to_string());

        println!(
            "{}{}{} | Game: {} | Selected: {} | Elapsed Time: {}",
            color_for_tracking(st.tracking),
            state,
            RESET,
            name,
            selected,
            self.ctl.displayed()
        );
    }

    fn draw_prompt(&self) {
        print!(
            "{}{}Elapsed Time: {}{} > ",
            CLEAR_LINE,
            color_for_tracking(self.ctl.is_tracking()),
            self.ctl.displayed(),
            RESET
        );
        let _ = io::stdout().flush();
    }

    fn warn_discarded(&self) {
        if self.ctl.is_tracking() {
            warning(format!(
                "Session for '{}' was still running and has not been saved.",
                self.ctl.state().activity_name
            ));
        }
    }
}

/// Block until the user enters a line; ticks are ignored, end of input
/// counts as an empty answer.
fn wait_for_line<E: ShellEventSource, T: Ticker>(runner: &Runner<E, T>) -> String {
    loop {
        match runner.step() {
            ShellEvent::Line(l) => return l,
            ShellEvent::Eof => return String::new(),
            ShellEvent::Tick => {}
        }
    }
}

fn print_help() {
    println!(
        "Commands:
  start <name>   start tracking a new game
  stop           stop tracking and save the session
  toggle [name]  start or stop, whichever applies
  select <n>     resume tracking on the record at list position n
  delete         delete the selected record (asks for confirmation)
  reset          clear the timer and the selection
  list           show all records, newest first
  status         show the current session
  quit           leave the shell"
    );
}
