use log::warn;

/// Moves the application to a route. Routing itself lives outside this crate.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: &str);
}

/// Navigator for hosts without a router: records the redirect in the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate(&self, route: &str) {
        warn!("Session is no longer valid, sign in again at {route}");
    }
}
