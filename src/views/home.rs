use crate::icons::*;
use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    let nav = use_navigator();

    rsx! {
        div { class: "h-full p-4 overflow-y-auto bg-background text-foreground custom-scrollbar",
            div { class: "flex flex-col items-center mb-8 mt-6",
                div { class: "w-16 h-16 bg-accent-gradient rounded-2xl flex items-center justify-center text-primary-foreground shadow-lg mb-4",
                    House { size: 32 }
                }
                h3 { class: "text-2xl font-bold text-foreground", "Welcome" }
                p { class: "text-muted-foreground text-xs font-bold uppercase tracking-widest mt-1",
                    "Bethel AG Dubai"
                }
            }

            div { class: "space-y-3",
                button {
                    class: "w-full bg-card hover:bg-accent/40 border border-border rounded-2xl p-4 flex items-center gap-4 transition-all group text-left active:scale-95 shadow-sm",
                    onclick: move |_| {
                        nav.push(Route::HelpSupport {});
                    },
                    div { class: "p-3 rounded-xl bg-accent/30 text-primary transition-colors",
                        LifeBuoy { size: 24 }
                    }
                    div { class: "flex-1",
                        div { class: "font-bold mb-0.5 text-foreground", "Help & Support" }
                        div { class: "text-[11px] text-muted-foreground font-medium",
                            "Contact our team, browse FAQs"
                        }
                    }
                    ChevronRight { size: 18, class: Some("text-muted-foreground group-hover:text-foreground".to_string()) }
                }
            }
        }
    }
}
