use crate::{AuthCredentials, ProfileUpdate, SocialLinks};

use serde_json::json;

#[test]
fn test_profile_update_serializes_only_set_fields() {
    let update = ProfileUpdate {
        bio: Some("x".into()),
        social_links: Some(SocialLinks {
            github: Some("octocat".into()),
            ..Default::default()
        }),
        ..Default::default()
    };

    let value = serde_json::to_value(&update).unwrap();
    assert_eq!(
        value,
        json!({ "bio": "x", "socialLinks": { "github": "octocat" } })
    );
}

#[test]
fn test_empty_profile_update_is_rejected() {
    assert!(ProfileUpdate::default().is_empty());
    assert!(ProfileUpdate::default().validate().is_err());
}

#[test]
fn test_credentials_debug_redacts_password() {
    let credentials = AuthCredentials::new("user@example.com", "hunter2");
    let debug = format!("{credentials:?}");

    assert!(debug.contains("user@example.com"));
    assert!(!debug.contains("hunter2"));
}
