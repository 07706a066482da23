//! Attendance session core for the batch attendance widget. The presentation
//! layer owns rendering and gesture handling; all attendance state and the
//! rules over it live here.

mod error;
mod roster;
mod session;

pub use error::{RosterError, SessionError};
pub use roster::{Batch, Roster};
pub use session::{AttendanceSession, Status, Summary};
