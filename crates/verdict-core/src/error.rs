use std::io;

use crate::{Code, Status};

pub type Result<T> = std::result::Result<T, Error>;

/// A raised failure.
///
/// Either classified with an exact canonical code, or opaque, meaning it was
/// produced outside this crate and only its display text is known. Success
/// has no representation here: fallible operations use [`Result`], and an
/// absent error is the success sentinel.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Raised through this crate; carries an exact canonical code.
    #[error("{0}")]
    Classified(Status),
    /// Any other failure, ingested as is.
    #[error(transparent)]
    Opaque(#[from] anyhow::Error),
}

impl Error {
    /// Raises a classified failure, or `None` when `code` is [`Code::Ok`].
    ///
    /// Absence of an error is the success sentinel, so an OK raise must not
    /// produce a value that could be mistaken for a failure.
    pub fn raise(code: Code, message: impl Into<String>) -> Option<Self> {
        Status::new(code, message).into_error()
    }

    fn classified(code: Code, message: impl Into<String>) -> Self {
        Self::Classified(Status::new(code, message))
    }

    // Shorthands for raising each non OK code directly. Infallible, unlike
    // `raise`, because their codes are never `Ok`.

    pub fn canceled(message: impl Into<String>) -> Self {
        Self::classified(Code::Canceled, message)
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::classified(Code::Unknown, message)
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::classified(Code::InvalidArgument, message)
    }

    pub fn deadline_exceeded(message: impl Into<String>) -> Self {
        Self::classified(Code::DeadlineExceeded, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::classified(Code::NotFound, message)
    }

    pub fn already_exists(message: impl Into<String>) -> Self {
        Self::classified(Code::AlreadyExists, message)
    }

    pub fn permission_denied(message: impl Into<String>) -> Self {
        Self::classified(Code::PermissionDenied, message)
    }

    pub fn resource_exhausted(message: impl Into<String>) -> Self {
        Self::classified(Code::ResourceExhausted, message)
    }

    pub fn failed_precondition(message: impl Into<String>) -> Self {
        Self::classified(Code::FailedPrecondition, message)
    }

    pub fn aborted(message: impl Into<String>) -> Self {
        Self::classified(Code::Aborted, message)
    }

    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::classified(Code::OutOfRange, message)
    }

    pub fn unimplemented(message: impl Into<String>) -> Self {
        Self::classified(Code::Unimplemented, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::classified(Code::Internal, message)
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::classified(Code::Unavailable, message)
    }

    pub fn data_loss(message: impl Into<String>) -> Self {
        Self::classified(Code::DataLoss, message)
    }

    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::classified(Code::Unauthenticated, message)
    }

    /// Appends one detail string to a classified failure.
    ///
    /// Details describe the specific occurrence (offending field, exhausted
    /// quota) and surface to clients in insertion order. An opaque failure
    /// has nowhere to keep them; attaching one is a caller bug and debug
    /// builds assert on it.
    #[must_use]
    pub fn with_detail(self, detail: impl Into<String>) -> Self {
        debug_assert!(
            self.is_classified(),
            "details attach to classified failures only"
        );
        match self {
            Self::Classified(status) => Self::Classified(status.with_detail(detail)),
            Self::Opaque(error) => Self::Opaque(error),
        }
    }

    /// Canonical code of this failure; [`Code::Unknown`] when opaque.
    pub const fn code(&self) -> Code {
        match self {
            Self::Classified(status) => status.code(),
            Self::Opaque(_) => Code::Unknown,
        }
    }

    /// True when this failure carries an exact canonical code.
    pub const fn is_classified(&self) -> bool {
        matches!(self, Self::Classified(_))
    }

    /// The status describing this failure alone; see [`Status::from_failure`]
    /// for the full three way conversion.
    pub fn to_status(&self) -> Status {
        Status::from_failure(Some(self)).0
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        let code = match error.kind() {
            io::ErrorKind::NotFound => Code::NotFound,
            io::ErrorKind::PermissionDenied => Code::PermissionDenied,
            io::ErrorKind::AlreadyExists => Code::AlreadyExists,
            io::ErrorKind::TimedOut => Code::DeadlineExceeded,
            io::ErrorKind::InvalidInput => Code::InvalidArgument,
            _ => Code::Unknown,
        };
        Self::classified(code, error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{Error, Result};
    use crate::Code;

    #[test]
    fn raise_returns_none_for_ok() {
        assert!(Error::raise(Code::Ok, "fine").is_none());
    }

    #[test]
    fn raise_classifies_any_other_code() {
        let error = Error::raise(Code::Unavailable, "backend down").expect("non ok code");
        assert!(error.is_classified());
        assert_eq!(error.code(), Code::Unavailable);
        assert_eq!(error.to_status().message(), "backend down");
    }

    #[test]
    fn constructors_pick_their_code() {
        assert_eq!(Error::canceled("m").code(), Code::Canceled);
        assert_eq!(Error::unknown("m").code(), Code::Unknown);
        assert_eq!(Error::invalid_argument("m").code(), Code::InvalidArgument);
        assert_eq!(Error::deadline_exceeded("m").code(), Code::DeadlineExceeded);
        assert_eq!(Error::not_found("m").code(), Code::NotFound);
        assert_eq!(Error::already_exists("m").code(), Code::AlreadyExists);
        assert_eq!(Error::permission_denied("m").code(), Code::PermissionDenied);
        assert_eq!(Error::resource_exhausted("m").code(), Code::ResourceExhausted);
        assert_eq!(Error::failed_precondition("m").code(), Code::FailedPrecondition);
        assert_eq!(Error::aborted("m").code(), Code::Aborted);
        assert_eq!(Error::out_of_range("m").code(), Code::OutOfRange);
        assert_eq!(Error::unimplemented("m").code(), Code::Unimplemented);
        assert_eq!(Error::internal("m").code(), Code::Internal);
        assert_eq!(Error::unavailable("m").code(), Code::Unavailable);
        assert_eq!(Error::data_loss("m").code(), Code::DataLoss);
        assert_eq!(Error::unauthenticated("m").code(), Code::Unauthenticated);
    }

    #[test]
    fn with_detail_appends_to_the_classified_status() {
        let error = Error::invalid_argument("bad field")
            .with_detail("field=x")
            .with_detail("reason=empty");
        assert_eq!(error.to_status().details(), ["field=x", "reason=empty"]);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "details attach to classified failures only")]
    fn with_detail_on_an_opaque_failure_asserts_in_debug() {
        let _ = Error::from(anyhow::anyhow!("boom")).with_detail("lost");
    }

    #[test]
    fn opaque_failures_keep_their_display_text() {
        let error = Error::from(anyhow::anyhow!("boom"));
        assert!(!error.is_classified());
        assert_eq!(error.code(), Code::Unknown);
        assert_eq!(error.to_string(), "boom");
    }

    #[test]
    fn question_mark_ingests_foreign_errors_as_opaque() {
        fn parse() -> Result<i32> {
            let n: i32 = "not a number".parse().map_err(anyhow::Error::from)?;
            Ok(n)
        }

        let error = parse().expect_err("parse cannot succeed");
        assert!(!error.is_classified());
        assert_eq!(error.code(), Code::Unknown);
    }

    #[test]
    fn io_errors_classify_by_kind() {
        use std::io;

        let gone = Error::from(io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert_eq!(gone.code(), Code::NotFound);
        assert!(gone.is_classified());

        let slow = Error::from(io::Error::new(io::ErrorKind::TimedOut, "slow"));
        assert_eq!(slow.code(), Code::DeadlineExceeded);

        let pipe = Error::from(io::Error::new(io::ErrorKind::BrokenPipe, "pipe"));
        assert_eq!(pipe.code(), Code::Unknown);
        assert!(pipe.is_classified());
    }

    #[test]
    fn display_matches_the_status_rendering() {
        let error = Error::failed_precondition("index not ready");
        assert_eq!(error.to_string(), "FAILED_PRECONDITION: index not ready");
    }
}
