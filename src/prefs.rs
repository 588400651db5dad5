//! Page preferences persisted in `localStorage`.

use std::rc::Rc;
use yew::Reducible;

pub const THEME_KEY: &str = "theme";
pub const GRADIENT_KEY: &str = "gradientEnabled";
pub const DEFAULT_THEME: &str = "default";
pub const THEMES: [&str; 4] = ["default", "dark", "ocean", "forest"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Preferences {
    pub theme: String,
    pub gradient_enabled: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            gradient_enabled: false,
        }
    }
}

impl Preferences {
    /// Builds preferences from raw stored values; unknown themes fall back to
    /// the default and only the exact string `"true"` enables the gradient.
    pub fn from_stored(theme: Option<String>, gradient: Option<String>) -> Self {
        let theme = theme
            .filter(|t| THEMES.contains(&t.as_str()))
            .unwrap_or_else(|| DEFAULT_THEME.to_string());
        Self {
            theme,
            gradient_enabled: gradient.as_deref() == Some("true"),
        }
    }

    pub fn load() -> Self {
        if let Some(win) = web_sys::window() {
            if let Ok(Some(store)) = win.local_storage() {
                let theme = store.get_item(THEME_KEY).ok().flatten();
                let gradient = store.get_item(GRADIENT_KEY).ok().flatten();
                return Self::from_stored(theme, gradient);
            }
        }
        Self::default()
    }

    pub fn save(&self) {
        if let Some(win) = web_sys::window() {
            if let Ok(Some(store)) = win.local_storage() {
                let _ = store.set_item(THEME_KEY, &self.theme);
                let _ = store.set_item(
                    GRADIENT_KEY,
                    if self.gradient_enabled { "true" } else { "false" },
                );
            }
        }
    }

    /// Mirrors the theme onto `<html data-theme=..>`.
    pub fn apply_theme(&self) {
        if let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = root.set_attribute("data-theme", &self.theme);
        }
    }
}

#[derive(Clone, Debug)]
pub enum PrefsAction {
    SetTheme(String),
    ToggleGradient,
}

impl Reducible for Preferences {
    type Action = PrefsAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        match action {
            PrefsAction::SetTheme(theme) => {
                if !THEMES.contains(&theme.as_str()) || theme == new.theme {
                    return self;
                }
                new.theme = theme;
            }
            PrefsAction::ToggleGradient => {
                new.gradient_enabled = !new.gradient_enabled;
            }
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_values_are_parsed_defensively() {
        let p = Preferences::from_stored(Some("ocean".into()), Some("true".into()));
        assert_eq!(p.theme, "ocean");
        assert!(p.gradient_enabled);

        let p = Preferences::from_stored(Some("neon".into()), Some("1".into()));
        assert_eq!(p, Preferences::default());

        assert_eq!(Preferences::from_stored(None, None), Preferences::default());
    }

    #[test]
    fn reducer_switches_theme_and_toggles_gradient() {
        let p = Rc::new(Preferences::default());
        let p = p.reduce(PrefsAction::SetTheme("dark".into()));
        assert_eq!(p.theme, "dark");
        let p = p.reduce(PrefsAction::ToggleGradient);
        assert!(p.gradient_enabled);
        let p = p.reduce(PrefsAction::ToggleGradient);
        assert!(!p.gradient_enabled);
    }

    #[test]
    fn unknown_theme_is_ignored() {
        let p = Rc::new(Preferences::default());
        let same = p.clone().reduce(PrefsAction::SetTheme("neon".into()));
        assert!(Rc::ptr_eq(&p, &same));
    }
}
