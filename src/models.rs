use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

// The stored mode is "dark" or "light"; anything else renders light.
impl From<String> for ThemeMode {
    fn from(value: String) -> Self {
        if value == "dark" {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }
}

impl ThemeMode {
    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    pub fn toggled(&self) -> ThemeMode {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

/// Color set consumed by the views. Only `text` and `text_secondary` are
/// contractual for content; the rest feed the decorative gradients.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ThemePalette {
    pub background_from: &'static str,
    pub background_to: &'static str,
    pub overlay: &'static str,
    pub card_tint: &'static str,
    pub accent_from: &'static str,
    pub accent_to: &'static str,
    pub text: &'static str,
    pub text_secondary: &'static str,
}

const LIGHT_PALETTE: ThemePalette = ThemePalette {
    background_from: "#F5F3FF",
    background_to: "#EDE9FE",
    overlay: "rgba(124, 58, 237, 0.08)",
    card_tint: "rgba(255, 255, 255, 0.72)",
    accent_from: "#7C3AED",
    accent_to: "#6D28D9",
    text: "#1E1B2E",
    text_secondary: "#6B7280",
};

const DARK_PALETTE: ThemePalette = ThemePalette {
    background_from: "#0F0A1F",
    background_to: "#1E1533",
    overlay: "rgba(139, 92, 246, 0.12)",
    card_tint: "rgba(30, 21, 51, 0.62)",
    accent_from: "#8B5CF6",
    accent_to: "#7C3AED",
    text: "#F4F1FA",
    text_secondary: "#A79FBC",
};

impl ThemePalette {
    pub fn for_mode(mode: ThemeMode) -> &'static ThemePalette {
        if mode.is_dark() {
            &DARK_PALETTE
        } else {
            &LIGHT_PALETTE
        }
    }

    /// CSS custom properties injected on the app root, the same way the
    /// views reference them in the stylesheet.
    pub fn css_vars(&self) -> String {
        format!(
            "--color-bg-from: {}; --color-bg-to: {}; --color-overlay: {}; --color-card: {}; \
             --color-accent-from: {}; --color-accent-to: {}; --color-text: {}; --color-text-secondary: {};",
            self.background_from,
            self.background_to,
            self.overlay,
            self.card_tint,
            self.accent_from,
            self.accent_to,
            self.text,
            self.text_secondary,
        )
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_mode_is_dark() {
        assert!(ThemeMode::Dark.is_dark());
        assert!(!ThemeMode::Light.is_dark());
    }

    #[test]
    fn theme_mode_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ThemeMode::Dark).unwrap(), "\"dark\"");
        assert_eq!(serde_json::to_string(&ThemeMode::Light).unwrap(), "\"light\"");
    }

    #[test]
    fn unknown_theme_string_falls_back_to_light() {
        let mode: ThemeMode = serde_json::from_str("\"sepia\"").unwrap();
        assert_eq!(mode, ThemeMode::Light);
        assert!(!mode.is_dark());

        let mode: ThemeMode = serde_json::from_str("\"dark\"").unwrap();
        assert!(mode.is_dark());
    }

    #[test]
    fn palette_follows_mode() {
        assert_ne!(
            ThemePalette::for_mode(ThemeMode::Dark),
            ThemePalette::for_mode(ThemeMode::Light)
        );
        let vars = ThemePalette::for_mode(ThemeMode::Light).css_vars();
        assert!(vars.contains("--color-text:"));
        assert!(vars.contains("--color-text-secondary:"));
    }

    #[test]
    fn toggle_flips_mode() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
    }
}
