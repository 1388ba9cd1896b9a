use http::{Response, StatusCode, header};
use verdict_core::{Code, Error, Status};

use crate::body::ErrorBody;
use crate::map::http_status;

/// Response header carrying the canonical code's name, e.g. `NOT_FOUND`.
///
/// The body's `code` member holds the HTTP status number, so without this
/// header the exact canonical category would be lost on the wire. The
/// unclassified fallback reports `INTERNAL`.
pub const CODE_HEADER: &str = "x-verdict-code";

/// Renders an optional failure as a complete HTTP response.
///
/// Success and classified failures go through the fixed table and carry the
/// full `{code, message, details}` body. An opaque failure never consults
/// the table: it becomes a generic 500 whose body has no `details` member,
/// which keeps it distinguishable from a classified INTERNAL result. Total
/// over every input.
///
/// Expressed on [`http`] types so any server stack can use it; with the
/// `axum` feature, [`HttpError`] drives the same rendering through
/// `IntoResponse`.
pub fn to_http_response(failure: Option<&Error>) -> Response<String> {
    if let Some(Error::Opaque(error)) = failure {
        tracing::warn!(error = %error, "rendering unclassified error as a generic 500");
        let body = serde_json::json!({
            "code": StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
            "message": error.to_string(),
        });
        return build(
            StatusCode::INTERNAL_SERVER_ERROR,
            Code::Internal,
            body.to_string(),
        );
    }

    let (status, _) = Status::from_failure(failure);
    let line = http_status(status.code());
    let body = serde_json::to_string(&ErrorBody::from_status(&status)).unwrap_or_default();
    build(line, status.code(), body)
}

fn build(line: StatusCode, code: Code, body: String) -> Response<String> {
    Response::builder()
        .status(line)
        .header(header::CONTENT_TYPE, "application/json")
        .header(CODE_HEADER, code.as_str())
        .body(body)
        .expect("static header names and values are valid")
}

/// Failure wrapper for axum handlers.
///
/// Anything convertible into [`Error`] converts into this, so a handler can
/// return `Result<T, HttpError>` and use `?` on classified raises, `anyhow`
/// chains, and I/O errors alike. Rendering matches [`to_http_response`].
#[cfg(feature = "axum")]
#[derive(Debug)]
pub struct HttpError(Error);

#[cfg(feature = "axum")]
impl<E: Into<Error>> From<E> for HttpError {
    fn from(error: E) -> Self {
        Self(error.into())
    }
}

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for HttpError {
    fn into_response(self) -> axum::response::Response {
        let (parts, body) = to_http_response(Some(&self.0)).into_parts();
        axum::response::Response::from_parts(parts, axum::body::Body::from(body))
    }
}
