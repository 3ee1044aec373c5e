//! Response envelope shared by every backend endpoint.

use serde::{Deserialize, Serialize};

/// `{ data, message?, success }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub success: bool,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            data,
            message: Some(message.into()),
            success: true,
        }
    }

    pub fn into_data(self) -> T {
        self.data
    }
}
