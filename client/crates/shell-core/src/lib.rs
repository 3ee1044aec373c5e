pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::api_response::ApiResponse;
pub use models::auth_credentials::AuthCredentials;
pub use models::auth_response::AuthResponse;
pub use models::identity::Identity;
pub use models::notification_settings::NotificationSettings;
pub use models::preferences::Preferences;
pub use models::preferences_update::PreferencesUpdate;
pub use models::privacy_settings::PrivacySettings;
pub use models::profile::Profile;
pub use models::profile_update::ProfileUpdate;
pub use models::profile_visibility::ProfileVisibility;
pub use models::social_links::SocialLinks;
pub use models::theme::Theme;
pub use models::user_role::UserRole;

#[cfg(test)]
mod tests;
