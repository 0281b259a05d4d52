//! Light/dark theme preference.
//!
//! The preference is stored in `localStorage` and reflected as a `data-theme`
//! attribute on `<html>`. Without the `hydrate` feature every function is a
//! no-op returning the light theme, which keeps SSR output deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "brigade_theme";

/// Page color scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value written to `data-theme` and to storage.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Glyph for the toggle button: it shows the theme you would switch to.
    #[must_use]
    pub fn toggle_glyph(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }
}

/// Stored preference, falling back to the system color scheme.
pub fn read_preference() -> Theme {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return Theme::Light;
        };
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(stored)) = storage.get_item(STORAGE_KEY) {
                if let Some(theme) = Theme::parse(&stored) {
                    return theme;
                }
            }
        }
        let prefers_dark = window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .is_some_and(|mq| mq.matches());
        if prefers_dark { Theme::Dark } else { Theme::Light }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Theme::Light
    }
}

/// Set `data-theme` on the document element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        if let Some(el) = root {
            if let Err(e) = el.set_attribute("data-theme", theme.as_str()) {
                log::warn!("failed to set data-theme: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Flip the theme, apply it, and persist it.
pub fn toggle(current: Theme) -> Theme {
    let next = current.flipped();
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
            if let Err(e) = storage.set_item(STORAGE_KEY, next.as_str()) {
                log::warn!("failed to persist theme: {e:?}");
            }
        }
    }
    next
}
