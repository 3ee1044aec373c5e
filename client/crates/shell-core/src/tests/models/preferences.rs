use crate::{Preferences, PreferencesUpdate, ProfileVisibility, Theme};

use serde_json::json;

#[test]
fn test_preferences_parses_nested_settings() {
    let preferences: Preferences = serde_json::from_value(json!({
        "id": "p1",
        "userId": "1",
        "theme": "dark",
        "language": "en",
        "notifications": { "email": true, "push": false, "sms": false },
        "privacy": { "profileVisibility": "friends", "showEmail": false, "showLocation": true },
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-01T00:00:00Z"
    }))
    .unwrap();

    assert_eq!(preferences.theme, Theme::Dark);
    assert!(preferences.notifications.email);
    assert_eq!(
        preferences.privacy.profile_visibility,
        ProfileVisibility::Friends
    );
    assert!(preferences.privacy.show_location);
}

#[test]
fn test_preferences_update_serializes_only_set_fields() {
    let update = PreferencesUpdate {
        theme: Some(Theme::Light),
        ..Default::default()
    };

    let value = serde_json::to_value(&update).unwrap();
    assert_eq!(value, json!({ "theme": "light" }));
}

#[test]
fn test_preferences_update_validation() {
    assert!(PreferencesUpdate::default().validate().is_err());

    let blank_language = PreferencesUpdate {
        language: Some("  ".into()),
        ..Default::default()
    };
    assert!(blank_language.validate().is_err());

    let ok = PreferencesUpdate {
        language: Some("fr".into()),
        ..Default::default()
    };
    assert!(ok.validate().is_ok());
}
