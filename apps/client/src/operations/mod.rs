//! User-triggered operations. Each is one linear pass:
//! gather input → request → branch on status → render or notify.
//!
//! Transport and decode faults are returned as `Err` without touching the
//! notification port.

pub mod exams;
pub mod guard;
pub mod health;
pub mod list;
pub mod recommend;
pub mod show;
pub mod streams;
pub mod submit;
pub mod update;

/// How an operation ended when no fault occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// 2xx from the backend; `rendered` list lines were appended.
    Succeeded { rendered: usize },
    /// The backend answered with a non-success status.
    Rejected { status: u16 },
    /// The same operation already had a request in flight; nothing was done.
    Skipped,
}
