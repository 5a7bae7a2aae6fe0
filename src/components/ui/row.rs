use crate::icons::ChevronRight;
use dioxus::prelude::*;

#[component]
pub fn SectionTitle(label: String) -> Element {
    rsx! {
        h4 { class: "text-[10px] font-bold text-muted-foreground uppercase tracking-widest mb-3 ml-1",
            "{label}"
        }
    }
}

/// One contact row. Rows without a handler render as plain information
/// and get no chevron.
#[component]
pub fn ContactRow(
    label: String,
    value: String,
    icon: Element,
    onclick: Option<EventHandler<MouseEvent>>,
) -> Element {
    let actionable = onclick.is_some();

    rsx! {
        div {
            class: "flex items-center justify-between px-4 transition-colors shrink-0 bg-card border border-border rounded-2xl shadow-sm",
            class: if actionable { "hover:bg-accent/30 cursor-pointer" },
            style: "height: 56px !important; min-height: 56px !important;",
            onclick: move |e| {
                if let Some(handler) = onclick {
                    handler.call(e);
                }
            },
            div { class: "flex items-center gap-3",
                div { class: "text-muted-foreground flex items-center", {icon} }
                div { class: "flex flex-col",
                    span { class: "font-bold text-sm text-foreground", "{label}" }
                    span { class: "text-[11px] text-muted-foreground font-medium", "{value}" }
                }
            }
            if actionable {
                ChevronRight { size: 16, class: Some("text-muted-foreground".to_string()) }
            }
        }
    }
}
