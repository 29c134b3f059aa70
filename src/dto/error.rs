use serde::{Deserialize, Serialize};

/// JSON body returned by the proxy on failure: `{ "error": "..." }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub const INTERNAL: &'static str = "Internal server error";

    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }

    pub fn internal() -> Self {
        Self::new(Self::INTERNAL)
    }
}
