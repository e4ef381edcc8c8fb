use leptos::prelude::*;

/// Presentation mode for the whole site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Light => "◐",
            Self::Dark => "◑",
        }
    }
}

/// One application-wide theme store, provided once by `App` and read through
/// [`use_theme`] by every consumer. The current value is mirrored onto the
/// root element as a `data-theme` attribute so CSS scoped to that marker
/// restyles all mounted pages at once; no component watches the document to
/// re-derive the theme.
#[derive(Clone, Copy)]
pub struct ThemeStore(RwSignal<Theme>);

impl ThemeStore {
    pub fn theme(&self) -> Theme {
        self.0.get()
    }

    pub fn is_dark(&self) -> bool {
        self.0.get().is_dark()
    }

    pub fn toggle(&self) {
        self.0.update(|theme| *theme = theme.toggled());
    }
}

/// Not persisted across reloads; every session starts dark.
pub fn provide_theme() {
    let store = ThemeStore(RwSignal::new(Theme::Dark));

    // Runs on the client only; the SSR shell carries the initial marker.
    Effect::new(move |_| {
        let theme = store.0.get();
        if let Some(root) = document().document_element() {
            let _ = root.set_attribute("data-theme", theme.as_str());
        }
    });

    provide_context(store);
}

pub fn use_theme() -> ThemeStore {
    expect_context::<ThemeStore>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_round_trips() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(theme.toggled().toggled(), theme);
            assert_eq!(theme.toggled().toggled().as_str(), theme.as_str());
        }
    }

    #[test]
    fn marker_values_match_css_contract() {
        assert_eq!(Theme::Dark.as_str(), "dark");
        assert_eq!(Theme::Light.as_str(), "light");
        assert!(Theme::Dark.is_dark());
        assert!(!Theme::Light.is_dark());
    }
}
