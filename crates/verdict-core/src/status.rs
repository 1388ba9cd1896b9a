use std::fmt;

use crate::{Code, Error};

/// Outcome of an operation: a canonical code, a human readable message, and
/// free form detail strings kept in insertion order.
///
/// A `Status` whose code is [`Code::Ok`] carries no error semantics; its
/// message and details are informational only. The value is owned outright,
/// never shared: `Clone` copies the details buffer, and the only mutation
/// ([`Status::with_detail`]) consumes the value, so two owners can never
/// observe each other's appends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    code: Code,
    message: String,
    details: Vec<String>,
}

/// Whether a derived [`Status`] reflects the failure's own canonical code or
/// was synthesized from an opaque error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Success, or a classified failure round tripped exactly.
    Exact,
    /// An opaque failure collapsed to [`Code::Unknown`].
    Synthesized,
}

impl Classification {
    pub const fn is_exact(self) -> bool {
        matches!(self, Self::Exact)
    }
}

impl Status {
    /// Builds a status with no details.
    pub fn new(code: Code, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: Vec::new(),
        }
    }

    /// The success status: [`Code::Ok`], empty message, no details.
    pub fn ok() -> Self {
        Self::new(Code::Ok, "")
    }

    /// Appends one detail string, preserving insertion order.
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.details.push(detail.into());
        self
    }

    pub const fn code(&self) -> Code {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn details(&self) -> &[String] {
        &self.details
    }

    /// True iff the code is [`Code::Ok`].
    pub const fn is_ok(&self) -> bool {
        matches!(self.code, Code::Ok)
    }

    /// Converts a non OK status into a raised failure.
    ///
    /// Returns `None` for an OK status, mirroring [`Error::raise`]: success
    /// must never masquerade as a failure value.
    pub fn into_error(self) -> Option<Error> {
        if self.is_ok() {
            None
        } else {
            Some(Error::Classified(self))
        }
    }

    /// Derives the status describing an optional failure.
    ///
    /// Total over all three outcomes: an absent failure is the OK status, a
    /// classified failure round trips exactly, and an opaque one collapses to
    /// [`Code::Unknown`] carrying the error's display text and no details.
    /// The returned [`Classification`] says which of those happened.
    pub fn from_failure(failure: Option<&Error>) -> (Self, Classification) {
        match failure {
            None => (Self::ok(), Classification::Exact),
            Some(Error::Classified(status)) => (status.clone(), Classification::Exact),
            Some(Error::Opaque(error)) => (
                Self::new(Code::Unknown, error.to_string()),
                Classification::Synthesized,
            ),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "{}", self.code)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}
