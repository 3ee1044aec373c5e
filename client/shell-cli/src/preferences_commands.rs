use shell_core::{Preferences, PreferencesUpdate, ProfileVisibility, Theme};

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum PreferencesCommands {
    /// Update the signed-in user's preferences
    Update {
        /// light, dark or system
        #[arg(long)]
        theme: Option<Theme>,
        /// Language code, e.g. en or pt-BR
        #[arg(long)]
        language: Option<String>,
        #[arg(long)]
        email_notifications: Option<bool>,
        #[arg(long)]
        push_notifications: Option<bool>,
        #[arg(long)]
        sms_notifications: Option<bool>,
        /// public, private or friends
        #[arg(long)]
        visibility: Option<ProfileVisibility>,
        #[arg(long)]
        show_email: Option<bool>,
        #[arg(long)]
        show_location: Option<bool>,
    },
}

impl PreferencesCommands {
    /// Build the partial sent to the backend.
    ///
    /// Notification and privacy settings travel as whole objects, so any flag
    /// in a group is applied on top of `current` (the last preferences this
    /// host saw) and the complete group is sent.
    pub fn to_update(&self, current: Option<&Preferences>) -> PreferencesUpdate {
        let Self::Update {
            theme,
            language,
            email_notifications,
            push_notifications,
            sms_notifications,
            visibility,
            show_email,
            show_location,
        } = self;

        let notifications = [email_notifications, push_notifications, sms_notifications]
            .iter()
            .any(|flag| flag.is_some())
            .then(|| {
                let mut settings = current.map(|p| p.notifications).unwrap_or_default();
                settings.email = email_notifications.unwrap_or(settings.email);
                settings.push = push_notifications.unwrap_or(settings.push);
                settings.sms = sms_notifications.unwrap_or(settings.sms);
                settings
            });

        let privacy = (visibility.is_some() || show_email.is_some() || show_location.is_some())
            .then(|| {
                let mut settings = current.map(|p| p.privacy).unwrap_or_default();
                settings.profile_visibility = visibility.unwrap_or(settings.profile_visibility);
                settings.show_email = show_email.unwrap_or(settings.show_email);
                settings.show_location = show_location.unwrap_or(settings.show_location);
                settings
            });

        PreferencesUpdate {
            theme: *theme,
            language: language.clone(),
            notifications,
            privacy,
        }
    }
}
