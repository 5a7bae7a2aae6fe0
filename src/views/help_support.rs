use crate::components::{ContactRow, FaqCard, PrimaryButton, SectionTitle};
use crate::data;
use crate::hooks::use_support_actions;
use crate::icons::*;
use dioxus::prelude::*;

#[component]
pub fn HelpSupport() -> Element {
    let actions = use_support_actions();

    rsx! {
        div { class: "h-full p-4 overflow-y-auto bg-background text-foreground custom-scrollbar",
            div { class: "mb-6",
                h3 { class: "text-2xl font-bold text-foreground mb-2", "Need Assistance?" }
                p { class: "text-xs text-muted-foreground font-medium leading-relaxed",
                    "We're here to help with anything about the app, events, or your account. Reach out and our team will get back to you as soon as possible."
                }
            }

            // Primary contact card
            div { class: "bg-card rounded-2xl p-5 border border-border shadow-sm mb-6",
                div { class: "flex flex-col items-center text-center",
                    div { class: "p-4 bg-accent-gradient rounded-2xl text-primary-foreground shadow-lg mb-3",
                        Headphones { size: 28 }
                    }
                    h4 { class: "font-bold text-lg text-foreground mb-1", "Reach out to us" }
                    p { class: "text-xs text-muted-foreground font-medium mb-4", "{data::SUPPORT_EMAIL}" }
                    PrimaryButton {
                        label: "Contact Support".to_string(),
                        icon: rsx! { Mail { size: 18 } },
                        onclick: move |_| actions.contact_by_email(),
                    }
                }
            }

            div { class: "mb-6",
                SectionTitle { label: "Other Ways to Contact".to_string() }
                div { class: "space-y-3",
                    ContactRow {
                        label: "Phone Support".to_string(),
                        value: data::SUPPORT_PHONE.to_string(),
                        icon: rsx! { Phone { size: 18 } },
                        onclick: move |_: MouseEvent| actions.contact_by_phone(),
                    }
                    ContactRow {
                        label: "Visit Website".to_string(),
                        value: data::WEBSITE_LABEL.to_string(),
                        icon: rsx! { Globe { size: 18 } },
                        onclick: move |_: MouseEvent| actions.visit_website(),
                    }
                    ContactRow {
                        label: "Support Hours".to_string(),
                        value: data::SUPPORT_HOURS.to_string(),
                        icon: rsx! { Clock { size: 18 } },
                    }
                }
            }

            FaqSection {}
        }
    }
}

#[component]
pub fn FaqSection() -> Element {
    rsx! {
        div { class: "pb-4",
            SectionTitle { label: "Frequently Asked Questions".to_string() }
            div { class: "space-y-3",
                for entry in data::FAQ_ENTRIES {
                    FaqCard {
                        question: entry.question.to_string(),
                        answer: entry.answer.to_string(),
                    }
                }
            }
        }
    }
}
