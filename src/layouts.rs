use crate::components::BackButton;
use crate::hooks::use_theme;
use crate::icons::{Moon, Sun};
use crate::state::AppState;
use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn MainLayout() -> Element {
    let mut state = use_context::<AppState>();
    let theme = use_theme();

    let route = use_route::<Route>();
    let is_sub_page = !matches!(route, Route::Home {});
    let title = route.title();

    rsx! {
        div { class: "flex flex-col h-full bg-background text-foreground font-sans select-none overflow-hidden relative",
            div { class: "decor-overlay" }

            // Top header
            div { class: "flex items-center gap-3 px-4 py-2 bg-card backdrop-blur-md z-50 border-b border-border/50",
                if is_sub_page {
                    BackButton {}
                    if let Some(t) = title {
                        h2 { class: "text-lg font-bold tracking-tight", "{t}" }
                    }
                } else {
                    Link {
                        to: Route::Home {},
                        class: "flex items-center gap-2 hover:opacity-80 transition-opacity",
                        span { class: "font-bold text-lg tracking-tight", "Bethel AG Dubai" }
                    }
                }

                div { class: "flex-1" }

                button {
                    class: "w-12 flex items-center justify-center hover:bg-accent rounded-xl transition-all text-foreground active:scale-90 shrink-0",
                    style: "height: 48px !important; min-height: 48px !important;",
                    onclick: move |_| {
                        let next = theme.mode.toggled();
                        state.theme.set(next);
                    },
                    if theme.mode.is_dark() {
                        Sun { size: 20 }
                    } else {
                        Moon { size: 20 }
                    }
                }
            }

            // Content area
            div { class: "flex-1 relative overflow-hidden flex flex-col", Outlet::<Route> {} }
        }
    }
}
