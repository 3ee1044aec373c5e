use crate::Cli;
use crate::commands::Commands;
use crate::preferences_commands::PreferencesCommands;

use shell_core::{
    NotificationSettings, Preferences, PrivacySettings, ProfileVisibility, Theme,
};

use chrono::Utc;
use clap::Parser;

fn parse(args: &[&str]) -> PreferencesCommands {
    let mut argv = vec!["shell", "preferences", "update"];
    argv.extend_from_slice(args);
    match Cli::try_parse_from(argv).unwrap().command {
        Commands::Preferences { action } => action,
        other => panic!("unexpected command {other:?}"),
    }
}

fn current() -> Preferences {
    let now = Utc::now();
    Preferences {
        id: "p1".into(),
        user_id: "1".into(),
        theme: Theme::Light,
        language: "en".into(),
        notifications: NotificationSettings {
            email: true,
            push: true,
            sms: true,
        },
        privacy: PrivacySettings {
            profile_visibility: ProfileVisibility::Friends,
            show_email: true,
            show_location: true,
        },
        created_at: now,
        updated_at: now,
    }
}

#[test]
fn test_groups_without_flags_are_omitted() {
    let update = parse(&["--theme", "dark", "--language", "pt-BR"]).to_update(None);

    assert_eq!(update.theme, Some(Theme::Dark));
    assert_eq!(update.language.as_deref(), Some("pt-BR"));
    assert_eq!(update.notifications, None);
    assert_eq!(update.privacy, None);
}

#[test]
fn test_notification_flag_overlays_current_settings() {
    let current = current();
    let update = parse(&["--sms-notifications", "false"]).to_update(Some(&current));

    assert_eq!(
        update.notifications,
        Some(NotificationSettings {
            email: true,
            push: true,
            sms: false,
        })
    );
}

#[test]
fn test_privacy_flag_without_current_starts_from_defaults() {
    let update = parse(&["--visibility", "private"]).to_update(None);

    let privacy = update.privacy.unwrap();
    assert_eq!(privacy.profile_visibility, ProfileVisibility::Private);
    assert!(!privacy.show_email);
}
