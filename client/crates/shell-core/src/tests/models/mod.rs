mod api_response;
mod identity;
mod preferences;
mod profile_update;
mod user_role;
