//! Line-oriented stand-in for the group generator view.

use crate::naming::GroupNamer;
use crate::partitioner::RandomSource;
use crate::render::{render_outcome, render_roster};
use crate::roster::{AppState, RosterError};
use std::io::{self, BufRead, Write};
use thiserror::Error;

const HELP: &str = "\
Commands:
  toggle <name>   mark a student present/absent
  + / -           increase or decrease the group size
  generate        shuffle present students into groups
  show            print students and the last result
  help            this message
  quit            leave the session
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Toggle(String),
    Increment,
    Decrement,
    Generate,
    Show,
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0} (try `help`)")]
    Unknown(String),

    #[error("Usage: toggle <name>")]
    MissingName,
}

impl Command {
    /// Parse one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_lowercase().as_str() {
            "toggle" | "t" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingName);
                }
                Command::Toggle(rest.to_string())
            }
            "+" | "inc" => Command::Increment,
            "-" | "dec" => Command::Decrement,
            "generate" | "g" => Command::Generate,
            "show" | "s" => Command::Show,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        Ok(Some(command))
    }
}

/// Interactive session owning the state and its randomness capabilities.
pub struct Session {
    state: AppState,
    source: Box<dyn RandomSource>,
    namer: Box<dyn GroupNamer>,
}

impl Session {
    pub fn new(
        state: AppState,
        source: Box<dyn RandomSource>,
        namer: Box<dyn GroupNamer>,
    ) -> Self {
        Self {
            state,
            source,
            namer,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run one command, writing its feedback to `out`.
    ///
    /// The state is updated before any output is written, so a failing
    /// writer never loses it. Returns false once the session should end.
    pub fn handle<W: Write>(&mut self, command: Command, out: &mut W) -> io::Result<bool> {
        let state = std::mem::take(&mut self.state);
        let keep_going = command != Command::Quit;

        let (state, feedback) = match command {
            Command::Toggle(name) => match state.roster.position(&name) {
                Some(index) => {
                    let state = state.toggle_attendance(index);
                    let feedback = render_roster(&state.roster);
                    (state, feedback)
                }
                None => {
                    let e = RosterError::UnknownStudent(name);
                    tracing::warn!(error = %e, "toggle ignored");
                    (state, format!("{e}\n"))
                }
            },
            Command::Increment => {
                let state = state.increment_group_size();
                let feedback = format!("Group size: {}\n", state.group_size);
                (state, feedback)
            }
            Command::Decrement => {
                let state = state.decrement_group_size();
                let feedback = format!("Group size: {}\n", state.group_size);
                (state, feedback)
            }
            Command::Generate => {
                let state = state.generate(self.source.as_mut(), self.namer.as_mut());
                let feedback = render_outcome(&state);
                (state, feedback)
            }
            Command::Show => {
                let feedback = format!("{}\n{}", render_roster(&state.roster), render_outcome(&state));
                (state, feedback)
            }
            Command::Help => (state, HELP.to_string()),
            Command::Quit => (state, String::new()),
        };

        self.state = state;
        out.write_all(feedback.as_bytes())?;
        Ok(keep_going)
    }

    /// Read commands until `quit` or end of input, then return the final state.
    pub fn run<R: BufRead, W: Write>(mut self, input: R, out: &mut W) -> io::Result<AppState> {
        write!(out, "{}", render_roster(&self.state.roster))?;
        writeln!(out, "Group size: {}  (type `help` for commands)", self.state.group_size)?;

        for line in input.lines() {
            let line = line?;
            match Command::parse(&line) {
                Ok(Some(command)) => {
                    if !self.handle(command, out)? {
                        break;
                    }
                }
                Ok(None) => {}
                Err(e) => writeln!(out, "{e}")?,
            }
            out.flush()?;
        }

        Ok(self.state)
    }
}
