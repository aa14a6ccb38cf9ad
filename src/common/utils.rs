use lambda_http::http::StatusCode;
use lambda_http::{Body, Request, RequestExt, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::common::errors::{Error, RequestError};

/// Parses the request body as JSON. The `content-type` header is not consulted.
pub fn extract_payload<T: DeserializeOwned>(request: &Request) -> Result<T, RequestError> {
    let body: &[u8] = match request.body() {
        Body::Empty => return Err(RequestError::EmptyBody),
        body => body.as_ref(),
    };
    if body.is_empty() {
        return Err(RequestError::EmptyBody);
    }

    Ok(serde_json::from_slice(body)?)
}

pub fn extract_query_param(request: &Request, name: &str) -> Option<String> {
    request
        .query_string_parameters_ref()
        .and_then(|params| params.first(name))
        .map(ToString::to_string)
}

pub fn json_response<T: Serialize + ?Sized>(
    status: StatusCode,
    value: &T,
) -> Result<Response<String>, Error> {
    let body = serde_json::to_string(value)?;
    let response = Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(body)?;

    Ok(response)
}

pub fn text_response(status: StatusCode, text: &str) -> Result<Response<String>, Error> {
    let response = Response::builder()
        .status(status)
        .header("content-type", "text/plain")
        .body(text.to_string())?;

    Ok(response)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use lambda_http::http;
    use serde_json::Value;

    use super::*;

    #[test]
    fn empty_body_is_rejected() {
        let request: Request = http::Request::builder()
            .method("POST")
            .body(Body::Empty)
            .unwrap();

        let err = extract_payload::<Value>(&request).unwrap_err();
        assert!(matches!(err, RequestError::EmptyBody));
    }

    #[test]
    fn body_is_parsed_without_content_type() {
        let request: Request = http::Request::builder()
            .method("POST")
            .body(Body::from(r#"{"a":1}"#))
            .unwrap();

        let value: Value = extract_payload(&request).unwrap();
        assert_eq!(value, serde_json::json!({"a": 1}));
    }

    #[test]
    fn invalid_json_is_rejected() {
        let request: Request = http::Request::builder()
            .method("POST")
            .body(Body::from("not json"))
            .unwrap();

        let err = extract_payload::<Value>(&request).unwrap_err();
        assert!(matches!(err, RequestError::InvalidBody(_)));
    }

    #[test]
    fn query_param_lookup() {
        let request: Request = http::Request::builder()
            .method("GET")
            .body(Body::Empty)
            .unwrap();
        assert_eq!(extract_query_param(&request, "id"), None);

        let request = request.with_query_string_parameters(HashMap::from([(
            "id".to_string(),
            "42".to_string(),
        )]));
        assert_eq!(extract_query_param(&request, "id").as_deref(), Some("42"));
        assert_eq!(extract_query_param(&request, "other"), None);
    }

    #[test]
    fn json_response_encodes_string_as_json() {
        let response = json_response(StatusCode::OK, "Data saved").unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["content-type"], "application/json");
        assert_eq!(response.body(), "\"Data saved\"");
    }
}
