use axum::{
    Json,
    http::{Method, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};

#[derive(Debug)]
pub enum ApiError {
    /// A required creation field was absent, empty, or zero. Carries the
    /// received body so the caller can see what arrived.
    MissingFields { received: Value },
    InvalidFormat(String),
    MethodNotAllowed(Method),
}

impl ApiError {
    pub fn missing_fields(received: Value) -> Self {
        Self::MissingFields { received }
    }

    pub fn invalid_format(msg: impl Into<String>) -> Self {
        Self::InvalidFormat(msg.into())
    }

    pub fn method_not_allowed(method: Method) -> Self {
        Self::MethodNotAllowed(method)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingFields { .. } => StatusCode::BAD_REQUEST,
            ApiError::InvalidFormat(_) => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::MissingFields { .. } => {
                "Missing required fields: amount, description, category, and date are all necessary."
                    .to_string()
            }
            ApiError::InvalidFormat(msg) => msg.clone(),
            ApiError::MethodNotAllowed(method) => {
                format!("Method {} Not Allowed. Only GET and POST are supported.", method)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let mut body = json!({ "error": self.message() });
        if let ApiError::MissingFields { received } = &self {
            body["received"] = received.clone();
        }

        match self {
            ApiError::MethodNotAllowed(_) => {
                (status, [(header::ALLOW, "GET, POST")], Json(body)).into_response()
            }
            _ => (status, Json(body)).into_response(),
        }
    }
}
