//! Request body validation.
//!
//! Bodies are parsed from raw JSON so that every problem can be reported as a
//! structured [`FieldError`] instead of a bare deserialization message.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email regex is valid")
});

/// Kind of validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    /// Field missing or of the wrong JSON type.
    InvalidType,
    /// String shorter than the required minimum.
    TooSmall,
    /// String with the wrong format.
    InvalidString,
}

/// One problem with a request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Location of the offending value; empty for the body itself.
    pub path: Vec<String>,
    pub code: IssueCode,
    pub message: String,
}

impl FieldError {
    fn new(path: &[&str], code: IssueCode, message: impl Into<String>) -> Self {
        Self {
            path: path.iter().map(|p| p.to_string()).collect(),
            code,
            message: message.into(),
        }
    }

    /// Error for a body that could not be read as JSON at all.
    pub fn malformed_body(detail: impl Into<String>) -> Self {
        Self::new(&[], IssueCode::InvalidType, detail)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn as_object(body: &Value) -> Result<&Map<String, Value>, Vec<FieldError>> {
    body.as_object().ok_or_else(|| {
        vec![FieldError::new(
            &[],
            IssueCode::InvalidType,
            format!("Expected object, received {}", json_type_name(body)),
        )]
    })
}

/// Read a string field of at least `min_len` UTF-16 code units, the unit
/// browsers use for string length.
fn required_string(
    object: &Map<String, Value>,
    field: &str,
    min_len: usize,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    let value = match object.get(field) {
        None => {
            errors.push(FieldError::new(&[field], IssueCode::InvalidType, "Required"));
            return None;
        }
        Some(Value::String(s)) => s,
        Some(other) => {
            errors.push(FieldError::new(
                &[field],
                IssueCode::InvalidType,
                format!("Expected string, received {}", json_type_name(other)),
            ));
            return None;
        }
    };

    if value.encode_utf16().count() < min_len {
        errors.push(FieldError::new(
            &[field],
            IssueCode::TooSmall,
            format!("String must contain at least {} character(s)", min_len),
        ));
        return None;
    }

    Some(value.clone())
}

fn is_valid_email(email: &str) -> bool {
    !email.starts_with('.') && !email.contains("..") && EMAIL_RE.is_match(email)
}

/// Validated body of a chat request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    pub message: String,
}

impl ChatRequest {
    pub fn parse(body: &Value) -> Result<Self, Vec<FieldError>> {
        let object = as_object(body)?;
        let mut errors = Vec::new();
        match required_string(object, "message", 1, &mut errors) {
            Some(message) => Ok(Self { message }),
            None => Err(errors),
        }
    }
}

/// Validated contact form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn parse(body: &Value) -> Result<Self, Vec<FieldError>> {
        let object = as_object(body)?;
        let mut errors = Vec::new();

        let name = required_string(object, "name", 2, &mut errors);
        let email = required_string(object, "email", 0, &mut errors);
        if let Some(ref email) = email {
            if !is_valid_email(email) {
                errors.push(FieldError::new(
                    &["email"],
                    IssueCode::InvalidString,
                    "Invalid email",
                ));
            }
        }
        let message = required_string(object, "message", 10, &mut errors);

        match (name, email, message) {
            (Some(name), Some(email), Some(message)) if errors.is_empty() => Ok(Self {
                name,
                email,
                message,
            }),
            _ => Err(errors),
        }
    }
}
