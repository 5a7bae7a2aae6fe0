#![allow(non_snake_case)]

pub mod components;
pub mod data;
pub mod error;
pub mod hooks;
pub mod icons;
pub mod layouts;
pub mod models;
pub mod services;
pub mod state;
pub mod storage;
pub mod views;
pub mod window;

use dioxus::prelude::*;

use layouts::MainLayout;
use state::AppStateProvider;
use views::{help_support::HelpSupport, home::Home};
use window::{desktop_config, WINDOW_HEIGHT, WINDOW_WIDTH};

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(MainLayout)]
        #[route("/")]
        Home {},
        #[route("/help-support")]
        HelpSupport {},
}

impl Route {
    pub fn title(&self) -> Option<&'static str> {
        match self {
            Route::HelpSupport {} => Some("Help & Support"),
            _ => None,
        }
    }
}

pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/tailwind.css") }
        AppStateProvider { AppContent {} }
    }
}

fn AppContent() -> Element {
    let theme = hooks::use_theme();
    let theme_style = theme.palette.css_vars();

    rsx! {
        div { class: if theme.mode.is_dark() { "dark" },
            div {
                class: "bg-background text-foreground transition-colors duration-300",
                style: "height: {WINDOW_HEIGHT}px; width: {WINDOW_WIDTH}px; position: relative; display: flex; flex-direction: column; overflow: hidden; {theme_style}",
                Router::<Route> {}
            }
        }
    }
}

pub fn run_app() {
    tracing_subscriber::fmt::init();

    LaunchBuilder::new().with_cfg(desktop_config()).launch(App);
}
