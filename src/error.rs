use thiserror::Error;

/// Failures surfaced by session operations. All of them are recoverable and
/// none leaves the session partially mutated: every operation validates
/// first and only then touches state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("unknown batch: {batch}")]
    UnknownBatch { batch: String },
    #[error("no batch selected")]
    NoBatchSelected,
    #[error("student not in the selected batch: {student}")]
    UnknownStudent { student: String },
    #[error("attendance incomplete: {missing} student(s) unmarked")]
    IncompleteAttendance { missing: usize },
    #[error("attendance already submitted")]
    AlreadySubmitted,
}

impl SessionError {
    /// Stable code for presentation-layer dispatch, so the UI can route on a
    /// string instead of matching the Rust enum.
    pub fn code(&self) -> &'static str {
        match self {
            SessionError::UnknownBatch { .. } => "unknown_batch",
            SessionError::NoBatchSelected => "no_batch_selected",
            SessionError::UnknownStudent { .. } => "unknown_student",
            SessionError::IncompleteAttendance { .. } => "incomplete_attendance",
            SessionError::AlreadySubmitted => "already_submitted",
        }
    }
}

/// Rejected roster configurations. The session assumes batch ids and student
/// names are unique, so the roster boundary enforces it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("duplicate batch id: {batch}")]
    DuplicateBatch { batch: String },
    #[error("duplicate student {student} in batch {batch}")]
    DuplicateStudent { batch: String, student: String },
}
