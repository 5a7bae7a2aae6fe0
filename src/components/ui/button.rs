use crate::icons::ArrowLeft;
use dioxus::prelude::*;

#[component]
pub fn BackButton() -> Element {
    let nav = use_navigator();
    rsx! {
        button {
            class: "w-12 flex items-center justify-center hover:bg-accent rounded-xl transition-all text-foreground active:scale-90 shadow-sm border border-transparent hover:border-border shrink-0",
            style: "height: 48px !important; min-height: 48px !important;",
            onclick: move |_| { nav.go_back(); },
            ArrowLeft { size: 24 }
        }
    }
}

#[component]
pub fn PrimaryButton(label: String, icon: Element, onclick: EventHandler<MouseEvent>) -> Element {
    rsx! {
        button {
            class: "w-full bg-accent-gradient hover:brightness-110 text-primary-foreground font-bold rounded-xl transition-all active:scale-95 shadow-lg flex items-center justify-center gap-2 shrink-0",
            style: "height: 48px !important; min-height: 48px !important;",
            onclick: move |e| onclick.call(e),
            {icon}
            "{label}"
        }
    }
}
