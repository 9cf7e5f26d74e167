//! UI ports: the slices of the user-facing surface each operation touches.
//!
//! Operations never reach for global UI state. They receive the ports they
//! read from and write to, so the same operation drives a terminal or an
//! in-memory recorder. Ports take `&self`; adapters use interior mutability
//! because everything runs on one cooperative thread.

pub mod terminal;

#[cfg(test)]
pub mod memory;

/// The twelve profile form inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProfileField {
    Name,
    Age,
    CurrentClass,
    CurrentStream,
    Subjects,
    Interests,
    Skills,
    CareerAspirations,
    AcademicPerformance,
    Location,
    FamilyBackground,
    EconomicStatus,
}

/// Read-only access to the profile form.
pub trait ProfileFormPort {
    /// Current raw text of `field`. Empty when the field was left blank.
    fn value(&self, field: ProfileField) -> String;
}

/// Read-only access to the profile-id input (the recommendation id field).
pub trait IdInputPort {
    fn profile_id(&self) -> String;
}

/// A list area owned by exactly one operation.
pub trait ListRenderPort {
    /// Removes every rendered line.
    fn clear(&self);
    fn append(&self, line: String);
}

/// A blocking, user-visible message.
pub trait NotifyPort {
    fn notify(&self, message: &str);
}
