use serde::{Deserialize, Serialize};
use verdict_core::Status;

use crate::map::http_status;

/// JSON wire shape of a rendered status.
///
/// `code` carries the HTTP status number of the response it rides on, not
/// the canonical code, so clients that only speak HTTP can interpret the
/// body without knowing the canonical space. `details` always serializes,
/// possibly empty; on input it defaults to empty so the unclassified
/// fallback body, which omits the member entirely, still parses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: u16,
    pub message: String,
    #[serde(default)]
    pub details: Vec<String>,
}

impl ErrorBody {
    /// Builds the body for a status, overwriting `code` with the HTTP status
    /// number the fixed table picks for the canonical code.
    pub fn from_status(status: &Status) -> Self {
        Self {
            code: http_status(status.code()).as_u16(),
            message: status.message().to_owned(),
            details: status.details().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use verdict_core::{Code, Status};

    use super::ErrorBody;

    #[test]
    fn serializes_with_the_http_code_and_fixed_member_names() {
        let status = Status::new(Code::NotFound, "no such profile").with_detail("id=42");
        let value = serde_json::to_value(ErrorBody::from_status(&status)).expect("body serializes");
        assert_eq!(
            value,
            json!({"code": 404, "message": "no such profile", "details": ["id=42"]})
        );
    }

    #[test]
    fn empty_details_still_serialize() {
        let body = ErrorBody::from_status(&Status::new(Code::Internal, "write failed"));
        let value = serde_json::to_value(body).expect("body serializes");
        assert_eq!(value["details"], json!([]));
    }

    #[test]
    fn the_ok_status_becomes_a_200_body() {
        let body = ErrorBody::from_status(&Status::ok());
        assert_eq!(body.code, 200);
        assert_eq!(body.message, "");
        assert!(body.details.is_empty());
    }

    #[test]
    fn parses_a_fallback_body_that_omits_details() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"code":500,"message":"boom"}"#).expect("fallback body parses");
        assert_eq!(body.code, 500);
        assert_eq!(body.message, "boom");
        assert!(body.details.is_empty());
    }
}
