use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::RosterError;

/// One named group of students, in the order the selection screen lists them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Batch {
    pub id: String,
    pub students: Vec<String>,
}

/// Read-only batch configuration injected by the embedding application.
///
/// Deserializes from the shape the UI supplies,
/// `[{ "id": "Batch-A", "students": ["…"] }, …]`, and validation runs on the
/// way in: a `Roster` that exists holds its uniqueness invariants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<Batch>", try_from = "Vec<Batch>")]
pub struct Roster {
    batches: Vec<Batch>,
}

impl Roster {
    /// Builds a roster, rejecting duplicate batch ids and duplicate student
    /// names within a batch. Empty batches are legal.
    pub fn new(batches: Vec<Batch>) -> Result<Self, RosterError> {
        let mut seen_batches = HashSet::new();
        for batch in &batches {
            if !seen_batches.insert(batch.id.as_str()) {
                return Err(RosterError::DuplicateBatch {
                    batch: batch.id.clone(),
                });
            }
            let mut seen_students = HashSet::new();
            for student in &batch.students {
                if !seen_students.insert(student.as_str()) {
                    return Err(RosterError::DuplicateStudent {
                        batch: batch.id.clone(),
                        student: student.clone(),
                    });
                }
            }
        }
        Ok(Roster { batches })
    }

    /// Parses a roster from the JSON configuration string the embedding
    /// application ships.
    pub fn from_json_str(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    /// The two batches hardcoded in the classic widget.
    pub fn builtin() -> Self {
        let batch = |id: &str, students: &[&str]| Batch {
            id: id.to_string(),
            students: students.iter().map(|s| s.to_string()).collect(),
        };
        Roster {
            batches: vec![
                batch(
                    "Batch-A",
                    &[
                        "Arjun Kumar",
                        "Karthik Raja",
                        "Surya Prakash",
                        "Vijay Shankar",
                        "Arun Vel",
                        "Dinesh Murugan",
                        "Harish Kannan",
                        "Naveen Ravi",
                        "Praveen Anand",
                        "Ramesh Siva",
                        "Sanjay Mani",
                        "Vikram Selva",
                    ],
                ),
                batch(
                    "Batch-B",
                    &[
                        "Ajith Krishna",
                        "Bharath Ganesan",
                        "Dheepan Senthil",
                        "Ezhil Arasu",
                        "Gowtham Cheran",
                        "Ilango Pandian",
                        "Jayaram Saravanan",
                        "Kavin Madhavan",
                        "Manikandan Subbu",
                        "Nithin Vimal",
                        "Prabhu Bala",
                        "Rajesh Thiru",
                    ],
                ),
            ],
        }
    }

    pub fn batches(&self) -> &[Batch] {
        &self.batches
    }

    pub fn batch_ids(&self) -> impl Iterator<Item = &str> {
        self.batches.iter().map(|b| b.id.as_str())
    }

    pub fn contains_batch(&self, id: &str) -> bool {
        self.batches.iter().any(|b| b.id == id)
    }

    /// The ordered student list of a batch, or `None` for an unknown id.
    pub fn students(&self, id: &str) -> Option<&[String]> {
        self.batches
            .iter()
            .find(|b| b.id == id)
            .map(|b| b.students.as_slice())
    }
}

impl TryFrom<Vec<Batch>> for Roster {
    type Error = RosterError;

    fn try_from(batches: Vec<Batch>) -> Result<Self, Self::Error> {
        Roster::new(batches)
    }
}

impl From<Roster> for Vec<Batch> {
    fn from(roster: Roster) -> Self {
        roster.batches
    }
}
