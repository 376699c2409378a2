//! Asynchronous operation lifecycle.

/// Lifecycle of a store's most recent asynchronous operation.
///
/// A store is idle, waiting on a request, settled successfully, or settled
/// with an error message. Folding the loading flag and the error message
/// into one tag means a store can never be loading and failed at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Status {
    /// No operation has run since the store was created or last reset.
    #[default]
    Idle,

    /// A request is in flight.
    Pending,

    /// The last operation settled successfully.
    Succeeded,

    /// The last operation settled with the given error message.
    Failed(String),
}

impl Status {
    /// Whether a request is currently in flight.
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// The error message from the last operation, if it failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Drop a failure back to [`Status::Idle`]. Other phases are untouched;
    /// stores never clear their own errors, the UI does after surfacing them.
    pub fn clear_error(&mut self) {
        if matches!(self, Self::Failed(_)) {
            *self = Self::Idle;
        }
    }
}
