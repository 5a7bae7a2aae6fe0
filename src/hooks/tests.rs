#[cfg(test)]
mod tests {
    use crate::error::AppError;
    use crate::hooks::SupportActions;
    use crate::models::ThemeMode;
    use crate::services::{NavigationHost, UrlDispatcher};
    use crate::state::AppState;
    use dioxus::prelude::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone)]
    struct RecordingDispatcher {
        opened: Arc<Mutex<Vec<String>>>,
    }

    impl RecordingDispatcher {
        fn new() -> Self {
            Self {
                opened: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn opened(&self) -> Vec<String> {
            self.opened.lock().unwrap().clone()
        }
    }

    impl UrlDispatcher for RecordingDispatcher {
        fn open(&self, uri: &str) -> Result<(), AppError> {
            self.opened.lock().unwrap().push(uri.to_string());
            Ok(())
        }
    }

    #[derive(Clone)]
    struct FailingDispatcher;

    impl UrlDispatcher for FailingDispatcher {
        fn open(&self, uri: &str) -> Result<(), AppError> {
            Err(AppError::Host(format!("no handler for '{}'", uri)))
        }
    }

    #[derive(Clone)]
    struct RecordingNav {
        back_calls: Arc<Mutex<usize>>,
    }

    impl RecordingNav {
        fn new() -> Self {
            Self {
                back_calls: Arc::new(Mutex::new(0)),
            }
        }

        fn back_calls(&self) -> usize {
            *self.back_calls.lock().unwrap()
        }
    }

    impl NavigationHost for RecordingNav {
        fn go_back(&self) {
            *self.back_calls.lock().unwrap() += 1;
        }
    }

    fn actions() -> (
        SupportActions<RecordingDispatcher, RecordingNav>,
        RecordingDispatcher,
        RecordingNav,
    ) {
        let dispatcher = RecordingDispatcher::new();
        let nav = RecordingNav::new();
        (
            SupportActions::new(dispatcher.clone(), nav.clone()),
            dispatcher,
            nav,
        )
    }

    #[test]
    fn email_action_opens_exact_mailto_uri() {
        let (actions, dispatcher, _) = actions();
        actions.contact_by_email();
        assert_eq!(dispatcher.opened(), vec!["mailto:support@bethelagdubai.com"]);
    }

    #[test]
    fn phone_action_opens_exact_tel_uri() {
        let (actions, dispatcher, _) = actions();
        actions.contact_by_phone();
        assert_eq!(dispatcher.opened(), vec!["tel:+971-50-123-4567"]);
    }

    #[test]
    fn website_action_opens_exact_https_uri() {
        let (actions, dispatcher, _) = actions();
        actions.visit_website();
        assert_eq!(dispatcher.opened(), vec!["https://bethelagdubai.com"]);
    }

    #[test]
    fn back_action_pops_exactly_once() {
        let (actions, dispatcher, nav) = actions();
        actions.go_back();
        assert_eq!(nav.back_calls(), 1);
        assert!(dispatcher.opened().is_empty());
    }

    #[test]
    fn repeated_invocations_issue_independent_requests() {
        let (actions, dispatcher, nav) = actions();

        actions.contact_by_email();
        actions.contact_by_email();
        actions.contact_by_phone();
        actions.visit_website();
        actions.contact_by_email();
        actions.go_back();
        actions.go_back();

        assert_eq!(
            dispatcher.opened(),
            vec![
                "mailto:support@bethelagdubai.com",
                "mailto:support@bethelagdubai.com",
                "tel:+971-50-123-4567",
                "https://bethelagdubai.com",
                "mailto:support@bethelagdubai.com",
            ]
        );
        assert_eq!(nav.back_calls(), 2);
    }

    #[test]
    fn dispatch_failures_are_swallowed() {
        let actions = SupportActions::new(FailingDispatcher, RecordingNav::new());
        actions.contact_by_email();
        actions.contact_by_phone();
        actions.visit_website();
    }

    #[test]
    fn faq_section_renders() {
        fn app() -> Element {
            use_context_provider(|| AppState {
                theme: Signal::new(ThemeMode::Light),
            });
            rsx! {
                crate::views::help_support::FaqSection {}
            }
        }

        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
    }
}
