use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::SessionError;
use crate::roster::Roster;

/// Per-student marking. Serializes as the lowercase strings the widget's
/// radio buttons carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Present,
    Absent,
}

/// Tally shown in the summary modal after a successful submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub batch_name: String,
    pub total_students: usize,
    pub present: usize,
    pub absent: usize,
    /// Present share of the whole batch as an integer percentage, rounded
    /// half-up (ties toward positive infinity).
    pub percentage: u8,
}

/// Half-up integer percentage: `floor(100 * present / total + 0.5)`.
/// Matches the classic widget's `Math.round` output for every tally.
fn percent_rounded_half_up(present: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((100.0 * present as f64 / total as f64) + 0.5).floor() as u8
}

/// One attendance-taking pass: pick a batch, mark every student, submit,
/// read the summary. Exclusively owned by the context driving the UI; every
/// operation runs to completion and either fully applies or fails with the
/// session untouched.
///
/// Lifecycle is NoBatch -> Marking (`select_batch`) -> Submitted (`submit`)
/// -> NoBatch (`reset`). `record_marking` and a repeated `select_batch` stay
/// within Marking; `reset` works from any state.
#[derive(Debug, Clone)]
pub struct AttendanceSession {
    roster: Roster,
    selected_batch: Option<String>,
    markings: HashMap<String, Status>,
    submitted: bool,
}

impl AttendanceSession {
    pub fn new(roster: Roster) -> Self {
        AttendanceSession {
            roster,
            selected_batch: None,
            markings: HashMap::new(),
            submitted: false,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn selected_batch(&self) -> Option<&str> {
        self.selected_batch.as_deref()
    }

    /// True once a summary has been handed out; the UI disables inputs on it.
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn marking_of(&self, student: &str) -> Option<Status> {
        self.markings.get(student).copied()
    }

    pub fn markings(&self) -> &HashMap<String, Status> {
        &self.markings
    }

    pub fn marked_count(&self) -> usize {
        self.markings.len()
    }

    /// Switches to a batch and starts it from scratch: any markings and any
    /// earlier submit are discarded, even when re-selecting the same batch.
    pub fn select_batch(&mut self, batch_id: &str) -> Result<(), SessionError> {
        if !self.roster.contains_batch(batch_id) {
            return Err(SessionError::UnknownBatch {
                batch: batch_id.to_string(),
            });
        }
        self.selected_batch = Some(batch_id.to_string());
        self.markings.clear();
        self.submitted = false;
        info!(batch = batch_id, "batch selected");
        Ok(())
    }

    /// Upserts one student's marking; a repeated marking overwrites, last
    /// write wins. Stays allowed after submission (the UI is expected to
    /// have disabled its inputs by then), but roster membership is always
    /// enforced.
    pub fn record_marking(&mut self, student: &str, status: Status) -> Result<(), SessionError> {
        let students = self
            .selected_students()
            .ok_or(SessionError::NoBatchSelected)?;
        if !students.iter().any(|s| s == student) {
            return Err(SessionError::UnknownStudent {
                student: student.to_string(),
            });
        }
        self.markings.insert(student.to_string(), status);
        debug!(student, ?status, "marking recorded");
        Ok(())
    }

    /// True iff every student of the selected batch has a marking. With no
    /// batch selected this is trivially incomplete, not an error.
    pub fn is_complete(&self) -> bool {
        match self.selected_students() {
            Some(students) => students.iter().all(|s| self.markings.contains_key(s)),
            None => false,
        }
    }

    /// Students of the selected batch still without a marking, in roster
    /// order. Backs the "mark everyone before submitting" message.
    pub fn unmarked_students(&self) -> Vec<&str> {
        self.selected_students()
            .map(|students| {
                students
                    .iter()
                    .filter(|s| !self.markings.contains_key(s.as_str()))
                    .map(|s| s.as_str())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Closes the marking phase. Fails with `IncompleteAttendance` while any
    /// student is unmarked (state untouched, the user keeps marking) and
    /// with `AlreadySubmitted` on a duplicate trigger, which never
    /// recomputes the tally. On success flips the session to submitted and
    /// returns the one summary this session will ever produce.
    pub fn submit(&mut self) -> Result<Summary, SessionError> {
        let batch_id = self
            .selected_batch
            .as_deref()
            .ok_or(SessionError::NoBatchSelected)?;
        if self.submitted {
            return Err(SessionError::AlreadySubmitted);
        }
        let missing = self.unmarked_students().len();
        if missing > 0 {
            return Err(SessionError::IncompleteAttendance { missing });
        }

        let summary = self.tally(batch_id);
        self.submitted = true;
        info!(
            batch = %summary.batch_name,
            present = summary.present,
            absent = summary.absent,
            percentage = summary.percentage,
            "attendance submitted"
        );
        Ok(summary)
    }

    /// Drops everything and returns to batch selection. Idempotent, valid in
    /// any state.
    pub fn reset(&mut self) {
        self.selected_batch = None;
        self.markings.clear();
        self.submitted = false;
        debug!("session reset");
    }

    fn selected_students(&self) -> Option<&[String]> {
        // selected_batch is only ever set through select_batch, which
        // validated it against the roster, so the lookup cannot miss.
        self.selected_batch
            .as_deref()
            .and_then(|id| self.roster.students(id))
    }

    /// Pure tally of the current markings; completeness makes
    /// `present + absent == total_students` hold in every returned summary.
    fn tally(&self, batch_id: &str) -> Summary {
        let total = self.selected_students().map_or(0, |s| s.len());
        let present = self
            .markings
            .values()
            .filter(|s| **s == Status::Present)
            .count();
        let absent = self
            .markings
            .values()
            .filter(|s| **s == Status::Absent)
            .count();
        Summary {
            batch_name: batch_id.to_string(),
            total_students: total,
            present,
            absent,
            percentage: percent_rounded_half_up(present, total),
        }
    }
}
