use crate::error::AppError;
use dioxus::router::Navigator;
use std::process::Command;

/// The host facility that opens a URI with whatever handler the operating
/// system has registered for its scheme (mail client, dialer, browser).
pub trait UrlDispatcher: Clone + 'static {
    fn open(&self, uri: &str) -> Result<(), AppError>;
}

/// The external component owning the screen stack. Popping an empty stack
/// is a host-defined no-op.
pub trait NavigationHost: Clone + 'static {
    fn go_back(&self);
}

/// Shells out to the platform opener and detaches. The spawned process is
/// never awaited; whether the URI resolves is the host's business.
#[derive(Clone, Copy, PartialEq)]
pub struct SystemDispatcher;

impl UrlDispatcher for SystemDispatcher {
    fn open(&self, uri: &str) -> Result<(), AppError> {
        #[cfg(target_os = "windows")]
        let spawned = Command::new("cmd").args(["/C", "start", "", uri]).spawn();

        #[cfg(target_os = "macos")]
        let spawned = Command::new("open").arg(uri).spawn();

        #[cfg(all(unix, not(target_os = "macos")))]
        let spawned = Command::new("xdg-open").arg(uri).spawn();

        spawned
            .map(|_| ())
            .map_err(|e| AppError::Host(format!("failed to open '{}': {}", uri, e)))
    }
}

#[derive(Clone, Copy)]
pub struct RouterNavigation(pub Navigator);

impl NavigationHost for RouterNavigation {
    fn go_back(&self) {
        self.0.go_back();
    }
}
