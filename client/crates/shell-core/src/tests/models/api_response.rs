use crate::{ApiResponse, AuthResponse};

use serde_json::json;

#[test]
fn test_envelope_without_message() {
    let envelope: ApiResponse<u32> =
        serde_json::from_value(json!({ "data": 7, "success": true })).unwrap();

    assert_eq!(envelope.message, None);
    assert!(envelope.success);
    assert_eq!(envelope.into_data(), 7);
}

#[test]
fn test_auth_response_envelope() {
    let envelope: ApiResponse<AuthResponse> = serde_json::from_value(json!({
        "data": {
            "user": {
                "id": "2",
                "email": "user@example.com",
                "name": "John Doe",
                "role": "user",
                "createdAt": "2024-01-01T00:00:00Z",
                "updatedAt": "2024-01-01T00:00:00Z"
            },
            "token": "mock_token_2_1"
        },
        "message": "Login successful",
        "success": true
    }))
    .unwrap();

    assert_eq!(envelope.message.as_deref(), Some("Login successful"));
    assert_eq!(envelope.data.user.name, "John Doe");
    assert_eq!(envelope.data.token, "mock_token_2_1");
}
