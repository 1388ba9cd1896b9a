#![allow(clippy::missing_errors_doc, clippy::must_use_candidate)]

//! Transport independent status model.
//!
//! Failures travel as [`Error`]: classified ones carry an exact canonical
//! [`Code`] plus a message and detail strings, opaque ones wrap any foreign
//! error as is. [`Status::from_failure`] folds success, classified, and
//! opaque outcomes into one [`Status`] value that boundary layers (see the
//! `verdict-http` crate) can serialize.

mod code;
mod error;
mod status;

pub use code::Code;
pub use error::{Error, Result};
pub use status::{Classification, Status};
