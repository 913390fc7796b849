use std::collections::HashMap;

use tracing::{debug, warn};

pub const THEME_KEY: &str = "theme";

// key/value preference storage
//
// the browser's localStorage in the webapp, a plain map in tests
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str);
}

impl PreferenceStore for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.insert(key.to_owned(), value.to_owned());
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn parse(value: &str) -> Option<Theme> {
        match value {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

#[derive(Debug)]
pub struct ThemeController<S: PreferenceStore> {
    store: S,
    theme: Theme,
}

impl<S: PreferenceStore> ThemeController<S> {
    // the stored value is only read here; a missing or unreadable value means dark
    pub fn load(store: S) -> Self {
        let theme = match store.get(THEME_KEY) {
            Some(value) => Theme::parse(&value).unwrap_or_else(|| {
                warn!(value = %value, "ignoring unknown stored theme");
                Theme::default()
            }),
            None => Theme::default(),
        };

        debug!(theme = theme.as_str(), "loaded theme preference");
        ThemeController { store, theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.store.set(THEME_KEY, self.theme.as_str());

        debug!(theme = self.theme.as_str(), "theme toggled");
        self.theme
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
