//! Students and the validated roster.

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{AllocError, AllocResult};

/// A single student record. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub name: String,
    /// Cohort label. Compared case-insensitively, see [`Student::class_key`].
    pub class: String,
}

impl Student {
    pub fn new(id: impl Into<String>, name: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            class: class.into(),
        }
    }

    /// Normalized class label used for diversity checks.
    pub fn class_key(&self) -> String {
        self.class.to_lowercase()
    }
}

/// Ordered list of students eligible for seating.
///
/// Ids are guaranteed non-empty and unique. Students are held behind `Arc`
/// so that seats can share them without copying.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    students: Vec<Arc<Student>>,
}

impl Roster {
    /// Build a roster, rejecting empty and repeated ids.
    pub fn new<I>(students: I) -> AllocResult<Self>
    where
        I: IntoIterator<Item = Student>,
    {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for (row, student) in students.into_iter().enumerate() {
            if student.id.is_empty() {
                return Err(AllocError::EmptyStudentId { row });
            }
            if !seen.insert(student.id.clone()) {
                return Err(AllocError::DuplicateStudentId(student.id));
            }
            out.push(Arc::new(student));
        }
        Ok(Self { students: out })
    }

    pub fn students(&self) -> &[Arc<Student>] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Look up a student by id.
    pub fn get(&self, id: &str) -> Option<&Arc<Student>> {
        self.students.iter().find(|s| s.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Student>> {
        self.students.iter()
    }
}
