#![allow(clippy::missing_errors_doc, clippy::must_use_candidate)]

//! HTTP side of the error bridge.
//!
//! Maps canonical codes to status lines through a fixed table and renders
//! any failure, classified or not, as a JSON `{code, message, details}`
//! response. The core entry point is [`to_http_response`], expressed on
//! [`http`] types; with the default `axum` feature, handlers can instead
//! return [`HttpError`] and let the framework drive the same rendering.

mod body;
mod map;
mod render;

pub use body::ErrorBody;
pub use map::http_status;
pub use render::{CODE_HEADER, to_http_response};

#[cfg(feature = "axum")]
pub use render::HttpError;
