mod error;
mod state;
mod student;

#[cfg(test)]
mod tests;

pub use error::RosterError;
pub use state::{Action, AppState, Outcome};
pub use student::{Roster, Student, DEFAULT_STUDENTS};
