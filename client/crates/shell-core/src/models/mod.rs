pub mod api_response;
pub mod auth_credentials;
pub mod auth_response;
pub mod identity;
pub mod notification_settings;
pub mod preferences;
pub mod preferences_update;
pub mod privacy_settings;
pub mod profile;
pub mod profile_update;
pub mod profile_visibility;
pub mod social_links;
pub mod theme;
pub mod user_role;
