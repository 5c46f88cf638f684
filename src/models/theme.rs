use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Color theme of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The literal persisted in storage.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Value of the toggle's `aria-pressed` attribute.
    pub fn aria_pressed(self) -> &'static str {
        if self.is_dark() { "true" } else { "false" }
    }

    /// Icon shown on the toggle: the theme a click switches to.
    pub fn toggle_icon(self) -> ThemeIcon {
        match self {
            Theme::Dark => ThemeIcon::Sun,
            Theme::Light => ThemeIcon::Moon,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a string that is not a theme literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme (expected \"light\" or \"dark\")")]
pub struct UnknownTheme;

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(UnknownTheme),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeIcon {
    Sun,
    Moon,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_literals() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert_eq!("Dark".parse::<Theme>(), Err(UnknownTheme));
        assert_eq!("".parse::<Theme>(), Err(UnknownTheme));
    }

    #[test]
    fn test_unknown_theme_message() {
        let err = "sepia".parse::<Theme>().unwrap_err();
        assert_eq!(err.to_string(), r#"unknown theme (expected "light" or "dark")"#);
    }

    #[test]
    fn test_toggle_attributes() {
        assert_eq!(Theme::Dark.aria_pressed(), "true");
        assert_eq!(Theme::Light.aria_pressed(), "false");
        assert_eq!(Theme::Dark.toggle_icon(), ThemeIcon::Sun);
        assert_eq!(Theme::Light.toggle_icon(), ThemeIcon::Moon);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }
}
