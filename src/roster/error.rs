use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("Duplicate student: {0}")]
    DuplicateStudent(String),

    #[error("Student name must not be blank")]
    BlankName,

    #[error("Unknown student: {0}")]
    UnknownStudent(String),
}
