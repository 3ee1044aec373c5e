use crate::{Identity, UserRole};

use serde_json::json;

fn identity_json() -> serde_json::Value {
    json!({
        "id": "1",
        "email": "admin@example.com",
        "name": "Admin User",
        "role": "admin",
        "avatar": "https://i.pravatar.cc/150?img=1",
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-02T00:00:00Z"
    })
}

#[test]
fn test_identity_parses_camel_case_wire_format() {
    let identity: Identity = serde_json::from_value(identity_json()).unwrap();

    assert_eq!(identity.id, "1");
    assert_eq!(identity.role, UserRole::Admin);
    assert_eq!(identity.created_at.to_rfc3339(), "2024-01-01T00:00:00+00:00");
}

#[test]
fn test_identity_without_avatar() {
    let mut value = identity_json();
    value.as_object_mut().unwrap().remove("avatar");

    let identity: Identity = serde_json::from_value(value).unwrap();
    assert!(identity.avatar.is_none());

    let out = serde_json::to_value(&identity).unwrap();
    assert!(out.get("avatar").is_none());
    assert!(out.get("createdAt").is_some());
}
