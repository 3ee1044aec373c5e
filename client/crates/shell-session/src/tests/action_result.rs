use crate::{ActionResult, SessionError, SessionResult};

use serde_json::json;

#[test]
fn test_ok_omits_error() {
    let value = serde_json::to_value(ActionResult::ok()).unwrap();

    assert_eq!(value, json!({ "success": true }));
}

#[test]
fn test_failure_carries_display_message() {
    let result: SessionResult<()> = Err(SessionError::validation("profile update contains no fields"));

    let action = ActionResult::from_result(&result);

    assert!(!action.success);
    assert_eq!(
        serde_json::to_value(&action).unwrap(),
        json!({ "success": false, "error": "profile update contains no fields" })
    );
}
