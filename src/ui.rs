//! Trait seams for the rendering layer this crate deliberately does not own:
//! toast notifications and post-submit navigation.

/// Target views a successful form submission navigates to. Advisory only;
/// the router owns the actual page change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    Login,
    Register,
    ForgotPassword,
    Dashboard,
    Admin,
}

impl View {
    pub fn path(&self) -> &'static str {
        match self {
            View::Home => "/",
            View::Login => "/login",
            View::Register => "/register",
            View::ForgotPassword => "/forgot-password",
            View::Dashboard => "/dashboard",
            View::Admin => "/admin",
        }
    }
}

/// Fire-and-forget notification display (the toast surface). No delivery
/// guarantee beyond "shown once".
pub trait Notifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Default notifier: routes toasts to the log.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn success(&self, message: &str) {
        log::info!("{message}");
    }

    fn error(&self, message: &str) {
        log::warn!("{message}");
    }
}
