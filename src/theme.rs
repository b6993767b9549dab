//! Light/dark theme preference
//!
//! The preference is a single boolean kept in client-side storage as the
//! string `"true"` (dark) or `"false"` (light). Everything the theme changes
//! on screen is derived from it here, so templates never branch on raw flags.

use serde::Serialize;

use crate::section::Section;

/// Storage key for the persisted preference.
pub const THEME_STORAGE_KEY: &str = "darkMode";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark_flag(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Read a stored value. Anything other than `"true"` is light, including
    /// a missing entry.
    pub fn from_stored(value: Option<&str>) -> Self {
        Self::from_dark_flag(value.map(str::trim) == Some("true"))
    }

    pub fn to_stored(&self) -> &'static str {
        if self.is_dark() {
            "true"
        } else {
            "false"
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn toggle(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn logo_src(&self) -> &'static str {
        match self {
            Theme::Light => "/logo/logo.png",
            Theme::Dark => "/logo/logoblack.png",
        }
    }

    /// Glyph on the floating toggle button.
    pub fn toggle_icon(&self) -> &'static str {
        match self {
            Theme::Light => "☀️",
            Theme::Dark => "🌙",
        }
    }

    pub fn page_class(&self) -> &'static str {
        match self {
            Theme::Light => "bg-white text-gray-800",
            Theme::Dark => "bg-gray-900 text-white",
        }
    }

    pub fn nav_class(&self) -> &'static str {
        match self {
            Theme::Light => "bg-white text-gray-800",
            Theme::Dark => "bg-gray-800 text-white",
        }
    }

    pub fn menu_button_class(&self) -> &'static str {
        match self {
            Theme::Light => "text-gray-800",
            Theme::Dark => "text-white",
        }
    }

    /// Background of the given section.
    pub fn section_background(&self, section: Section) -> &'static str {
        match (self, section) {
            (Theme::Light, Section::Hero) => "bg-gradient-to-br from-pink-100 via-purple-50 to-blue-100",
            (Theme::Light, Section::About) => "bg-gradient-to-br from-blue-50 via-purple-50 to-pink-50",
            (Theme::Light, Section::Portfolio) => "bg-gradient-to-br from-purple-50 via-pink-50 to-blue-50",
            (Theme::Light, Section::Contact) => "bg-gradient-to-br from-pink-50 via-purple-50 to-blue-50",
            (Theme::Dark, Section::Hero | Section::Contact) => "bg-gradient-to-br from-gray-800 via-gray-900 to-black",
            (Theme::Dark, Section::About | Section::Portfolio) => "bg-gray-900",
        }
    }

    pub fn heading_class(&self) -> &'static str {
        match self {
            Theme::Light => "text-gray-800",
            Theme::Dark => "text-white",
        }
    }

    pub fn body_class(&self) -> &'static str {
        match self {
            Theme::Light => "text-gray-600",
            Theme::Dark => "text-gray-300",
        }
    }

    pub fn muted_class(&self) -> &'static str {
        match self {
            Theme::Light => "text-gray-600",
            Theme::Dark => "text-gray-400",
        }
    }

    pub fn card_class(&self) -> &'static str {
        match self {
            Theme::Light => "bg-white",
            Theme::Dark => "bg-gray-800",
        }
    }

    pub fn modal_class(&self) -> &'static str {
        match self {
            Theme::Light => "bg-white text-gray-800",
            Theme::Dark => "bg-gray-800 text-white",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Theme::Light => "bg-purple-100 text-purple-800",
            Theme::Dark => "bg-purple-700 text-purple-100",
        }
    }

    pub fn arrow_class(&self) -> &'static str {
        match self {
            Theme::Light => "bg-white text-gray-600",
            Theme::Dark => "bg-gray-800 text-gray-300",
        }
    }

    pub fn label_class(&self) -> &'static str {
        match self {
            Theme::Light => "text-gray-700",
            Theme::Dark => "text-gray-300",
        }
    }

    pub fn input_class(&self) -> &'static str {
        match self {
            Theme::Light => "border-gray-300",
            Theme::Dark => "border-gray-700 bg-gray-800 text-white",
        }
    }

    /// Colours of the three decorative shapes behind the hero copy.
    pub fn hero_shapes(&self) -> [&'static str; 3] {
        match self {
            Theme::Light => ["bg-pink-300", "bg-purple-300", "bg-blue-300"],
            Theme::Dark => ["bg-purple-600", "bg-blue-600", "bg-indigo-600"],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_values() {
        assert_eq!(Theme::from_stored(Some("true")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("false")), Theme::Light);
        assert_eq!(Theme::from_stored(None), Theme::Light);
        // Only the exact string enables dark mode
        assert_eq!(Theme::from_stored(Some("TRUE")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("1")), Theme::Light);

        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::from_stored(Some(theme.to_stored())), theme);
        }
    }

    #[test]
    fn test_double_toggle_restores_visuals() {
        for theme in [Theme::Light, Theme::Dark] {
            let back = theme.toggle().toggle();
            assert_eq!(back.logo_src(), theme.logo_src());
            assert_eq!(back.page_class(), theme.page_class());
            for section in Section::ALL {
                assert_eq!(back.section_background(section), theme.section_background(section));
            }
        }
    }

    #[test]
    fn test_single_toggle_changes_logo() {
        assert_eq!(Theme::Light.logo_src(), "/logo/logo.png");
        assert_eq!(Theme::Light.toggle().logo_src(), "/logo/logoblack.png");
        assert_ne!(Theme::Dark.page_class(), Theme::Light.page_class());
    }
}
