use shell_core::ProfileUpdate;

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum ProfileCommands {
    /// Fetch a user's profile
    Get {
        /// User ID
        user_id: String,
    },
    /// Update the signed-in user's profile
    Update {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        bio: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        website: Option<String>,
        /// Avatar URL
        #[arg(long)]
        avatar: Option<String>,
    },
}

impl ProfileCommands {
    /// Partial for `update`; `None` for other actions.
    pub fn to_update(&self) -> Option<ProfileUpdate> {
        match self {
            Self::Get { .. } => None,
            Self::Update {
                name,
                bio,
                location,
                website,
                avatar,
            } => Some(ProfileUpdate {
                name: name.clone(),
                bio: bio.clone(),
                location: location.clone(),
                website: website.clone(),
                avatar: avatar.clone(),
                ..ProfileUpdate::default()
            }),
        }
    }
}
