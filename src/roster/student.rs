use super::error::RosterError;
use serde::Serialize;
use std::collections::HashSet;

/// Class list the tool starts with when nothing is configured.
pub const DEFAULT_STUDENTS: &[&str] = &[
    "RČ", "AČ", "DK", "RL", "TL", "KL", "KN", "VO", "TP", "DR", "MR",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Student {
    pub name: String,
    pub is_present: bool,
}

/// Fixed, ordered list of uniquely named students.
///
/// Entries are created once and never removed; only attendance changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    /// Build a roster with everyone marked present.
    pub fn new<I, S>(names: I) -> Result<Self, RosterError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut students = Vec::new();

        for name in names {
            let name: String = name.into();
            let name = name.trim().to_string();

            if name.is_empty() {
                return Err(RosterError::BlankName);
            }
            if !seen.insert(name.clone()) {
                return Err(RosterError::DuplicateStudent(name));
            }

            students.push(Student {
                name,
                is_present: true,
            });
        }

        Ok(Self { students })
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.students.iter().position(|s| s.name == name)
    }

    /// Flip attendance of the student at `index`.
    ///
    /// Returns false (and changes nothing) when the index is out of range.
    pub fn toggle(&mut self, index: usize) -> bool {
        match self.students.get_mut(index) {
            Some(student) => {
                student.is_present = !student.is_present;
                true
            }
            None => false,
        }
    }

    pub fn toggle_by_name(&mut self, name: &str) -> Result<bool, RosterError> {
        let index = self
            .position(name)
            .ok_or_else(|| RosterError::UnknownStudent(name.to_string()))?;
        self.toggle(index);
        Ok(self.students[index].is_present)
    }

    /// Names of present students, in roster order.
    pub fn present(&self) -> Vec<String> {
        self.students
            .iter()
            .filter(|s| s.is_present)
            .map(|s| s.name.clone())
            .collect()
    }

    pub fn present_count(&self) -> usize {
        self.students.iter().filter(|s| s.is_present).count()
    }

    /// "present/total", as shown above the student list.
    pub fn summary(&self) -> String {
        format!("{}/{}", self.present_count(), self.len())
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self {
            students: DEFAULT_STUDENTS
                .iter()
                .map(|name| Student {
                    name: name.to_string(),
                    is_present: true,
                })
                .collect(),
        }
    }
}
