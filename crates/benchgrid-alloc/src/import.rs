//! Roster import from spreadsheet-style JSON rows.
//!
//! Accepts the row shape a sheet-to-JSON export produces: an array of
//! objects keyed by column header. Headers vary between schools, so each
//! field is looked up under a few common spellings.

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{AllocError, AllocResult};
use crate::roster::{Roster, Student};

const ID_COLUMNS: &[&str] = &["ID", "Id", "id", "Student ID"];
const NAME_COLUMNS: &[&str] = &["Name", "name", "Student Name", "Student"];
const CLASS_COLUMNS: &[&str] = &["Class", "class", "ClassName"];

impl Roster {
    /// Parse a JSON array of roster rows.
    ///
    /// Rows without both id and name are skipped. A row with a name but no
    /// id is rejected, as are repeated ids.
    pub fn from_json_str(input: &str) -> AllocResult<Self> {
        let value: Value =
            serde_json::from_str(input).map_err(|e| AllocError::RosterFormat(e.to_string()))?;
        let Value::Array(rows) = value else {
            return Err(AllocError::RosterFormat(
                "expected a JSON array of rows".to_string(),
            ));
        };

        let mut students = Vec::with_capacity(rows.len());
        for (row, item) in rows.iter().enumerate() {
            let Value::Object(fields) = item else {
                return Err(AllocError::RosterFormat(format!("row {row} is not an object")));
            };
            if let Some(student) = row_to_student(row, fields)? {
                students.push(student);
            } else {
                debug!(row, "skipping blank roster row");
            }
        }

        Roster::new(students)
    }
}

/// Convert one row into a [`Student`]; `None` for blank rows.
fn row_to_student(row: usize, fields: &Map<String, Value>) -> AllocResult<Option<Student>> {
    let id = column(fields, ID_COLUMNS);
    let name = column(fields, NAME_COLUMNS);
    let class = column(fields, CLASS_COLUMNS);

    match (id.is_empty(), name.is_empty()) {
        (true, true) => Ok(None),
        (true, false) => Err(AllocError::MissingStudentId { row }),
        _ => Ok(Some(Student { id, name, class })),
    }
}

/// First non-null value among `names`, stringified and trimmed.
fn column(fields: &Map<String, Value>, names: &[&str]) -> String {
    names
        .iter()
        .filter_map(|n| fields.get(*n))
        .find_map(|v| match v {
            Value::Null => None,
            Value::String(s) => Some(s.trim().to_string()),
            other => Some(other.to_string().trim().to_string()),
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_header_variants() {
        let json = r#"[
            {"ID": "1", "Name": "Ana", "Class": "7A"},
            {"Student ID": 2, "Student Name": " Bo ", "ClassName": "7B"},
            {"id": "3", "name": "Cy", "class": "7a"}
        ]"#;
        let roster = Roster::from_json_str(json).unwrap();

        assert_eq!(roster.len(), 3);
        assert_eq!(roster.students()[1].as_ref(), &Student::new("2", "Bo", "7B"));
        assert_eq!(roster.students()[2].class, "7a");
    }

    #[test]
    fn skips_blank_rows() {
        let json = r#"[{"ID": "1", "Name": "Ana"}, {"Notes": "n/a"}, {"ID": null, "Name": ""}]"#;
        let roster = Roster::from_json_str(json).unwrap();

        assert_eq!(roster.len(), 1);
        assert_eq!(roster.students()[0].class, "");
    }

    #[test]
    fn id_only_rows_are_kept() {
        let roster = Roster::from_json_str(r#"[{"ID": "9"}]"#).unwrap();
        assert_eq!(roster.students()[0].id, "9");
        assert_eq!(roster.students()[0].name, "");
    }

    #[test]
    fn null_falls_through_to_next_alias() {
        let roster = Roster::from_json_str(r#"[{"ID": null, "id": "5", "Name": "E"}]"#).unwrap();
        assert_eq!(roster.students()[0].id, "5");
    }

    #[test]
    fn rejects_named_row_without_id() {
        let json = r#"[{"ID": "1", "Name": "Ana"}, {"Name": "Nobody"}]"#;
        let err = Roster::from_json_str(json).unwrap_err();
        assert_eq!(err, AllocError::MissingStudentId { row: 1 });
    }

    #[test]
    fn rejects_duplicate_ids() {
        let json = r#"[{"ID": "1", "Name": "Ana"}, {"ID": 1, "Name": "Ana again"}]"#;
        let err = Roster::from_json_str(json).unwrap_err();
        assert_eq!(err, AllocError::DuplicateStudentId("1".to_string()));
    }

    #[test]
    fn rejects_non_array_payload() {
        assert!(matches!(
            Roster::from_json_str(r#"{"ID": "1"}"#),
            Err(AllocError::RosterFormat(_))
        ));
        assert!(matches!(
            Roster::from_json_str("not json"),
            Err(AllocError::RosterFormat(_))
        ));
        assert!(matches!(
            Roster::from_json_str("[1, 2]"),
            Err(AllocError::RosterFormat(_))
        ));
    }
}
