//! Validating extractors
//!
//! Thin wrappers over axum's `Path`, `Query` and `Json` extractors. A value
//! that fails to decode, or decodes but breaks a [`Validate`] constraint, is
//! rejected with [`AppError::Validation`] (422) instead of axum's default
//! plain-text rejection. Every error location starts with the request part
//! it came from: `path`, `query` or `body`.

use axum::extract::path::ErrorKind;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::Json;
use serde::de::DeserializeOwned;
use types::errors::{FieldError, Loc};
use types::validate::Validate;

use crate::error::AppError;

/// Path parameters, decoded and validated
#[derive(Debug, Clone)]
pub struct ValidPath<T>(pub T);

/// Query string, decoded and validated
#[derive(Debug, Clone)]
pub struct ValidQuery<T>(pub T);

/// JSON body, decoded and validated
#[derive(Debug, Clone)]
pub struct ValidJson<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidPath<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(path_error)?;
        validated(value, "path").map(Self)
    }
}

impl<T, S> FromRequestParts<S> for ValidQuery<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(query_error)?;
        validated(value, "query").map(Self)
    }
}

impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(json_error)?;
        validated(value, "body").map(Self)
    }
}

fn validated<T: Validate>(value: T, part: &'static str) -> Result<T, AppError> {
    value.validate().map_err(|errors| {
        AppError::Validation(errors.into_iter().map(|e| e.prefixed(part)).collect())
    })?;
    Ok(value)
}

fn path_error(rejection: PathRejection) -> AppError {
    let error = match &rejection {
        PathRejection::FailedToDeserializePathParams(inner) => match inner.kind() {
            ErrorKind::ParseErrorAtKey {
                key, expected_type, ..
            } => type_error(vec![Loc::from(key.as_str())], expected_type),
            ErrorKind::ParseErrorAtIndex {
                index,
                expected_type,
                ..
            } => type_error(vec![Loc::Index(*index)], expected_type),
            ErrorKind::ParseError { expected_type, .. } => type_error(Vec::new(), expected_type),
            _ => decode_error(Vec::new(), rejection.body_text()),
        },
        _ => decode_error(Vec::new(), rejection.body_text()),
    };
    AppError::field(error.prefixed("path"))
}

fn query_error(rejection: QueryRejection) -> AppError {
    let text = rejection.body_text();
    let (loc, msg) = split_field_path(strip_context(&text));
    let error = match (missing_field(msg), parse_failure_label(msg)) {
        (Some(field), _) => FieldError::missing(field),
        (None, Some(label)) => labeled_type_error(loc, label),
        (None, None) => decode_error(loc, msg),
    };
    AppError::field(error.prefixed("query"))
}

fn json_error(rejection: JsonRejection) -> AppError {
    let error = match &rejection {
        JsonRejection::JsonDataError(_) => {
            let text = rejection.body_text();
            let (mut loc, msg) = split_field_path(strip_context(&text));
            match missing_field(msg) {
                Some(field) => {
                    loc.push(Loc::from(field));
                    FieldError {
                        loc,
                        ..FieldError::missing(field)
                    }
                }
                None => decode_error(loc, msg),
            }
        }
        JsonRejection::JsonSyntaxError(_) => FieldError {
            loc: Vec::new(),
            msg: strip_context(&rejection.body_text()).to_string(),
            kind: "value_error.jsondecode".to_string(),
            ctx: None,
        },
        JsonRejection::MissingJsonContentType(_) => FieldError {
            loc: Vec::new(),
            msg: rejection.body_text(),
            kind: "value_error.content_type".to_string(),
            ctx: None,
        },
        // Over the body size limit: not a decode failure
        JsonRejection::BytesRejection(_)
            if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE =>
        {
            return AppError::PayloadTooLarge(rejection.body_text());
        }
        _ => decode_error(Vec::new(), rejection.body_text()),
    };
    AppError::field(error.prefixed("body"))
}

fn type_error(loc: Vec<Loc>, expected_type: &str) -> FieldError {
    labeled_type_error(loc, type_label(expected_type))
}

fn labeled_type_error(loc: Vec<Loc>, label: &str) -> FieldError {
    FieldError {
        loc,
        msg: format!("value is not a valid {}", label),
        kind: format!("type_error.{}", label),
        ctx: None,
    }
}

fn decode_error(loc: Vec<Loc>, msg: impl Into<String>) -> FieldError {
    let msg = msg.into();
    let kind = if msg.starts_with("invalid type") {
        "type_error"
    } else {
        "value_error"
    };
    FieldError {
        loc,
        msg,
        kind: kind.to_string(),
        ctx: None,
    }
}

fn type_label(expected_type: &str) -> &'static str {
    match expected_type {
        "i8" | "i16" | "i32" | "i64" | "i128" | "isize" | "u8" | "u16" | "u32" | "u64"
        | "u128" | "usize" => "integer",
        "f32" | "f64" => "float",
        "bool" => "boolean",
        _ => "value",
    }
}

/// Type label for a std number parse failure, as reported by the query
/// string decoder (which does not name the expected type).
fn parse_failure_label(msg: &str) -> Option<&'static str> {
    match msg {
        "invalid digit found in string"
        | "cannot parse integer from empty string"
        | "number too large to fit in target type"
        | "number too small to fit in target type" => Some("integer"),
        "invalid float literal" | "cannot parse float from empty string" => Some("float"),
        "provided string was not `true` or `false`" => Some("boolean"),
        _ => None,
    }
}

/// Drops axum's leading "Failed to deserialize ...: " sentence.
fn strip_context(text: &str) -> &str {
    ["target type: ", "query string: "]
        .iter()
        .find_map(|marker| text.split_once(marker).map(|(_, rest)| rest))
        .unwrap_or(text)
}

/// Field name from a serde "missing field `name`" message.
fn missing_field(text: &str) -> Option<&str> {
    let (_, rest) = text.split_once("missing field `")?;
    rest.split_once('`').map(|(field, _)| field)
}

/// Splits `[0].amount: invalid type ...` or `limit: invalid digit ...`
/// into its location and message.
fn split_field_path(text: &str) -> (Vec<Loc>, &str) {
    let Some((path, msg)) = text.split_once(": ") else {
        return (Vec::new(), text);
    };
    let is_path = !path.is_empty()
        && path
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '[' | ']'));
    if !is_path {
        return (Vec::new(), text);
    }

    let mut loc = Vec::new();
    for piece in path.split('.').filter(|p| !p.is_empty()) {
        let (name, indices) = piece.split_once('[').map_or((piece, ""), |(n, i)| (n, i));
        if !name.is_empty() {
            loc.push(Loc::from(name));
        }
        for index in indices.split('[') {
            if let Ok(index) = index.trim_end_matches(']').parse::<usize>() {
                loc.push(Loc::Index(index));
            }
        }
    }
    (loc, msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field() {
        assert_eq!(missing_field("missing field `new_name`"), Some("new_name"));
        assert_eq!(missing_field("invalid digit found in string"), None);
    }

    #[test]
    fn test_strip_context() {
        assert_eq!(
            strip_context("Failed to deserialize query string: missing field `new_name`"),
            "missing field `new_name`"
        );
        assert_eq!(strip_context("plain"), "plain");
    }

    #[test]
    fn test_split_field_path() {
        let (loc, msg) = split_field_path("[1].amount: invalid type: string \"x\", expected f64");
        assert_eq!(loc, vec![Loc::Index(1), Loc::from("amount")]);
        assert_eq!(msg, "invalid type: string \"x\", expected f64");

        let (loc, msg) = split_field_path("limit: invalid digit found in string");
        assert_eq!(loc, vec![Loc::from("limit")]);
        assert_eq!(msg, "invalid digit found in string");

        let (loc, msg) = split_field_path("invalid type: map, expected a sequence");
        assert!(loc.is_empty());
        assert_eq!(msg, "invalid type: map, expected a sequence");
    }

    #[test]
    fn test_parse_failure_label() {
        assert_eq!(parse_failure_label("invalid digit found in string"), Some("integer"));
        assert_eq!(parse_failure_label("invalid float literal"), Some("float"));
        assert_eq!(parse_failure_label("missing field `new_name`"), None);
    }

    #[test]
    fn test_type_label() {
        assert_eq!(type_label("i64"), "integer");
        assert_eq!(type_label("f64"), "float");
        assert_eq!(type_label("alloc::string::String"), "value");
    }
}
