use crate::commands::Commands;
use crate::error::Result as CliResult;
use crate::preferences_commands::PreferencesCommands;
use crate::profile_commands::ProfileCommands;

use shell_config::{AuthBackendKind, Config};
use shell_session::{
    ActionResult, AuthBackend, AuthSessionStore, MockAuthBackend, ProfileFacade, RestAuthBackend,
    SessionFacade, UserProfileStore,
};
use shell_storage::{DurableStorage, FileStorage};
use shell_transport::{
    CredentialTransport, LogNavigator, Navigator, StorageCredentialSource, TransportSettings,
};

use std::sync::Arc;

use log::info;
use serde_json::{Value, json};

/// Everything a command needs, wired from configuration.
pub struct App {
    session: SessionFacade,
    profile: ProfileFacade,
}

impl App {
    pub fn from_config(config: &Config) -> CliResult<Self> {
        let storage: Arc<dyn DurableStorage> = Arc::new(FileStorage::open(config.storage_path()?)?);
        Self::build(config, storage, Arc::new(LogNavigator))
    }

    /// Wire the stores over an explicit storage and navigator.
    pub fn build(
        config: &Config,
        storage: Arc<dyn DurableStorage>,
        navigator: Arc<dyn Navigator>,
    ) -> CliResult<Self> {
        let transport = Arc::new(CredentialTransport::new(
            TransportSettings::from(&config.api),
            Arc::new(StorageCredentialSource::new(storage.clone())),
            navigator,
        )?);

        let backend: Arc<dyn AuthBackend> = match config.auth.backend {
            AuthBackendKind::Mock => Arc::new(MockAuthBackend::new(storage.clone())),
            AuthBackendKind::Rest => Arc::new(RestAuthBackend::new(transport.clone())),
        };
        info!("Using {:?} auth backend", config.auth.backend);

        let session = SessionFacade::new(Arc::new(AuthSessionStore::new(
            backend,
            storage.clone(),
        )));
        let profile = ProfileFacade::new(Arc::new(UserProfileStore::new(transport, storage)));

        Ok(Self { session, profile })
    }

    pub fn session(&self) -> &SessionFacade {
        &self.session
    }

    pub fn profile(&self) -> &ProfileFacade {
        &self.profile
    }

    /// Run one command and return its JSON output with the success flag.
    pub async fn execute(&self, command: Commands) -> CliResult<(bool, Value)> {
        let (result, output) = match command {
            Commands::Login { email, password } => {
                let result = self.session.login(&email, &password).await;
                let view = serde_json::to_value(self.session.view())?;
                (result.clone(), json!({ "result": result, "session": view }))
            }

            // The process is about to exit, so wait for the backend call
            Commands::Logout => {
                self.session.store().logout().await;
                (ActionResult::ok(), json!({ "result": ActionResult::ok() }))
            }

            Commands::Status => (
                ActionResult::ok(),
                json!({ "session": serde_json::to_value(self.session.view())? }),
            ),

            Commands::Profile { action } => {
                let result = match &action {
                    ProfileCommands::Get { user_id } => self.profile.load(user_id).await,
                    ProfileCommands::Update { .. } => {
                        let update = action.to_update().unwrap_or_default();
                        self.profile.update_profile(&update).await
                    }
                };
                let profile = serde_json::to_value(self.profile.profile())?;
                (result.clone(), json!({ "result": result, "profile": profile }))
            }

            Commands::Preferences { action } => {
                let result = match &action {
                    PreferencesCommands::Update { .. } => {
                        let current = self.profile.preferences();
                        let update = action.to_update(current.as_ref());
                        self.profile.update_preferences(&update).await
                    }
                };
                let preferences = serde_json::to_value(self.profile.preferences())?;
                (
                    result.clone(),
                    json!({ "result": result, "preferences": preferences }),
                )
            }
        };

        Ok((result.success, output))
    }
}
