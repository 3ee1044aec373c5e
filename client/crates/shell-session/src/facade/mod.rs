mod action_result;
mod auth_view;
mod profile_facade;
mod session_facade;

pub use action_result::ActionResult;
pub use auth_view::AuthView;
pub use profile_facade::ProfileFacade;
pub use session_facade::SessionFacade;
