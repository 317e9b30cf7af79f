use std::collections::BTreeSet;

use anyhow::anyhow;
use axum::{
    Json,
    extract::{
        FromRequest, Request,
        rejection::{JsonDataError, JsonRejection},
    },
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use storefront_core::AppError;

/// Expected JSON type of each product body field, used to word type errors.
fn expected_type(field: &str) -> Option<&'static str> {
    match field {
        "name" | "description" => Some("a string"),
        "price" => Some("a number"),
        "stock_quantity" => Some("an integer"),
        _ => None,
    }
}

/// Turns a deserialization failure into a message naming the offending field.
///
/// The serde detail reads `<path>: <message>`, or just the message for
/// errors at the document root (such as a missing field).
fn describe_data_error(err: &JsonDataError) -> String {
    let text = err.body_text();
    let detail = text
        .split_once("target type: ")
        .map(|(_, detail)| detail)
        .unwrap_or(&text);

    if let Some(field) = detail
        .split_once("missing field `")
        .and_then(|(_, rest)| rest.split_once('`'))
        .map(|(field, _)| field)
    {
        return format!("{field} is required");
    }

    match detail.split_once(": ") {
        Some((field, _)) if !field.contains(' ') => match expected_type(field) {
            Some(kind) => format!("{field} must be {kind}"),
            None => format!("{field} has an invalid value"),
        },
        _ => "Invalid request body".to_string(),
    }
}

fn json_rejection(rejection: JsonRejection) -> AppError {
    let message = match &rejection {
        JsonRejection::JsonDataError(err) => describe_data_error(err),
        JsonRejection::JsonSyntaxError(_) => "Request body is not valid JSON".to_string(),
        JsonRejection::MissingJsonContentType(_) => {
            "Content-Type must be application/json".to_string()
        }
        _ => "Invalid request body".to_string(),
    };

    tracing::debug!(rejection = %rejection.body_text(), "rejected request body");
    AppError::bad_request(anyhow!(message))
}

/// Messages of every failed rule, ordered and deduplicated.
fn format_errors(errors: &ValidationErrors) -> String {
    let mut messages = BTreeSet::new();
    for (field, failures) in errors.field_errors() {
        for failure in failures {
            let message = match &failure.message {
                Some(msg) => msg.to_string(),
                None => format!("{field} is invalid"),
            };
            messages.insert(message);
        }
    }

    messages.into_iter().collect::<Vec<_>>().join(", ")
}

/// JSON body extractor that also runs `validator` rules.
///
/// Bodies that cannot be read into `T` are rejected with 400; bodies that
/// parse but break a field rule are rejected with 422. Both as
/// `{"error": ...}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(json_rejection)?;

        value
            .validate()
            .map_err(|errors| AppError::unprocessable(anyhow!(format_errors(&errors))))?;

        Ok(ValidatedJson(value))
    }
}
