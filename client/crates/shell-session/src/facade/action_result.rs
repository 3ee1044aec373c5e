use crate::SessionResult;

use serde::Serialize;

/// Outcome handed to presentation code instead of an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ActionResult {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
        }
    }

    pub fn from_result<T>(result: &SessionResult<T>) -> Self {
        match result {
            Ok(_) => Self::ok(),
            Err(e) => Self::failed(e.message()),
        }
    }
}
