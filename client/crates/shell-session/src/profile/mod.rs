mod persisted_profile;
mod profile_state;
mod user_profile_store;

pub use profile_state::ProfileState;
pub use user_profile_store::UserProfileStore;

pub(crate) use persisted_profile::PersistedProfile;
