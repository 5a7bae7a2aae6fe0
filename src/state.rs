use crate::models::ThemeMode;
use crate::storage::{load_config, save_theme};
use dioxus::prelude::*;

#[derive(Clone, Copy)]
pub struct AppState {
    pub theme: Signal<ThemeMode>,
}

#[component]
pub fn AppStateProvider(children: Element) -> Element {
    let config = use_hook(load_config);

    let theme = use_signal(|| config.get_theme());

    // Persist the mode whenever it flips. Writing happens off the render
    // thread; a failed write only costs the preference on next launch.
    use_effect(move || {
        let mode = theme();
        spawn(async move {
            let result = tokio::task::spawn_blocking(move || save_theme(mode)).await;
            if let Ok(Err(e)) = result {
                tracing::error!("Failed to persist theme: {}", e);
            }
        });
    });

    use_context_provider(|| AppState { theme });

    rsx! {
        {children}
    }
}
