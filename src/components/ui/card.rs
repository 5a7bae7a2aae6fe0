use crate::icons::CircleHelp;
use dioxus::prelude::*;

#[component]
pub fn FaqCard(question: String, answer: String) -> Element {
    rsx! {
        div { class: "bg-card rounded-2xl p-4 border border-border shadow-sm",
            div { class: "flex items-start gap-3",
                div { class: "text-primary mt-0.5 shrink-0",
                    CircleHelp { size: 16 }
                }
                div { class: "flex-1",
                    h5 { class: "font-bold text-sm text-foreground mb-1", "{question}" }
                    p { class: "text-xs text-muted-foreground leading-relaxed", "{answer}" }
                }
            }
        }
    }
}
