//! Request body encoding and response decoding.

use serde::Serialize;
use serde::de::DeserializeOwned;

use resolume_types::{ApiErrorBody, Parameter};

use crate::catalog::RequestKind;
use crate::error::{Error, Result};

/// Field name used for file uploads.
pub(crate) const UPLOAD_FIELD: &str = "file";

/// Body attached to a request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequestBody {
    Empty,
    /// Serialized JSON.
    Json(Vec<u8>),
    /// Raw string sent as `text/plain`.
    Text(String),
    /// Single-file `multipart/form-data` upload.
    Multipart { file_name: String, bytes: Vec<u8> },
}

impl RequestBody {
    pub fn json<T: Serialize + ?Sized>(payload: &T) -> Result<Self> {
        serde_json::to_vec(payload)
            .map(RequestBody::Json)
            .map_err(Error::Encode)
    }

    pub fn text(value: impl Into<String>) -> Self {
        RequestBody::Text(value.into())
    }

    /// `None` sends no body at all, letting the remote apply its default
    /// (toggle) behaviour.
    pub fn optional_flag(flag: Option<bool>) -> Result<Self> {
        match flag {
            Some(flag) => RequestBody::json(&flag),
            None => Ok(RequestBody::Empty),
        }
    }

    pub fn optional_text(value: Option<&str>) -> Self {
        match value {
            Some(value) => RequestBody::text(value),
            None => RequestBody::Empty,
        }
    }

    pub fn upload(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        RequestBody::Multipart {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// Whether this body has the shape a route expects.
    pub fn fits(&self, kind: RequestKind) -> bool {
        matches!(
            (kind, self),
            (RequestKind::Empty, RequestBody::Empty)
                | (RequestKind::Json, RequestBody::Json(_))
                | (RequestKind::OptionalJson, RequestBody::Json(_) | RequestBody::Empty)
                | (RequestKind::Text, RequestBody::Text(_))
                | (RequestKind::OptionalText, RequestBody::Text(_) | RequestBody::Empty)
                | (RequestKind::Multipart, RequestBody::Multipart { .. })
        )
    }
}

/// Decode a successful JSON response.
pub fn decode<T: DeserializeOwned>(body: &[u8], what: &str) -> Result<T> {
    serde_json::from_slice(body).map_err(|source| Error::Decode {
        what: what.to_string(),
        source,
    })
}

/// Decode a parameter whose kind is not known up front.
pub fn decode_parameter(body: &[u8], what: &str) -> Result<Parameter> {
    let value: serde_json::Value = decode(body, what)?;
    Parameter::from_value(value).map_err(|source| Error::Decode {
        what: what.to_string(),
        source,
    })
}

/// Turn a failing response into an error, using the `{code, message}` body
/// when the server sent one.
pub fn decode_failure(status: u16, body: &[u8]) -> Error {
    match serde_json::from_slice::<ApiErrorBody>(body) {
        Ok(ApiErrorBody { code, message }) => Error::Api {
            status,
            code,
            message,
        },
        Err(_) => Error::Status { status },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_body_is_decoded_when_present() {
        let err = decode_failure(404, br#"{"code":404,"message":"Layer not found"}"#);
        match err {
            Error::Api {
                status,
                code,
                message,
            } => {
                assert_eq!(status, 404);
                assert_eq!(code, 404);
                assert_eq!(message, "Layer not found");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn failure_without_json_keeps_status_only() {
        let err = decode_failure(502, b"<html>Bad Gateway</html>");
        assert!(matches!(err, Error::Status { status: 502 }));
        let err = decode_failure(404, b"");
        assert!(matches!(err, Error::Status { status: 404 }));
    }

    #[test]
    fn optional_flag_omits_body_for_toggle() {
        assert_eq!(RequestBody::optional_flag(None).unwrap(), RequestBody::Empty);
        assert_eq!(
            RequestBody::optional_flag(Some(false)).unwrap(),
            RequestBody::Json(b"false".to_vec())
        );
    }

    #[test]
    fn body_shapes_match_request_kinds() {
        assert!(RequestBody::Empty.fits(RequestKind::OptionalText));
        assert!(RequestBody::text("x").fits(RequestKind::Text));
        assert!(!RequestBody::Empty.fits(RequestKind::Text));
        assert!(!RequestBody::text("x").fits(RequestKind::Json));
        assert!(RequestBody::upload("a.png", vec![1]).fits(RequestKind::Multipart));
    }

    #[test]
    fn decode_error_names_the_response() {
        let err = decode::<resolume_types::Layer>(b"{\"id\":\"x\"}", "get layer").unwrap_err();
        assert!(err.to_string().starts_with("decode get layer response"));
    }

    #[test]
    fn untyped_parameter_is_dispatched() {
        let param = decode_parameter(
            br#"{"id":3,"valuetype":"ParamString","value":"Intro"}"#,
            "get parameter",
        )
        .unwrap();
        assert_eq!(param.kind(), Some(resolume_types::ParameterKind::String));
    }
}
