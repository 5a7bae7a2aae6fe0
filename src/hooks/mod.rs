mod tests;

use crate::data;
use crate::models::{ThemeMode, ThemePalette};
use crate::services::{NavigationHost, RouterNavigation, SystemDispatcher, UrlDispatcher};
use crate::state::AppState;
use dioxus::prelude::*;

/// The support screen's outbound handlers.
///
/// Every handler is fire and forget: one host request per invocation,
/// nothing retained between calls. Dispatch failures are logged and
/// swallowed; a support screen has no business surfacing them.
#[derive(Clone, Copy)]
pub struct SupportActions<D: UrlDispatcher, N: NavigationHost> {
    dispatcher: D,
    nav: N,
}

impl<D: UrlDispatcher, N: NavigationHost> SupportActions<D, N> {
    pub fn new(dispatcher: D, nav: N) -> Self {
        Self { dispatcher, nav }
    }

    /// Pops the current screen.
    pub fn go_back(&self) {
        self.nav.go_back();
    }

    /// Opens the default mail composer pre-addressed to support.
    pub fn contact_by_email(&self) {
        self.dispatch(&data::mailto_uri());
    }

    /// Opens the default dialer pre-filled with the support number.
    pub fn contact_by_phone(&self) {
        self.dispatch(&data::tel_uri());
    }

    /// Opens the organization website in the default browser.
    pub fn visit_website(&self) {
        self.dispatch(data::WEBSITE_URL);
    }

    fn dispatch(&self, uri: &str) {
        if let Err(e) = self.dispatcher.open(uri) {
            tracing::warn!("Host dispatch failed for {}: {}", uri, e);
        }
    }
}

pub fn use_support_actions() -> SupportActions<SystemDispatcher, RouterNavigation> {
    let nav = use_navigator();
    SupportActions::new(SystemDispatcher, RouterNavigation(nav))
}

#[derive(Clone, Copy)]
pub struct Theme {
    pub mode: ThemeMode,
    pub palette: &'static ThemePalette,
}

pub fn use_theme() -> Theme {
    let state = use_context::<AppState>();
    let mode = (state.theme)();
    Theme {
        mode,
        palette: ThemePalette::for_mode(mode),
    }
}
