pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
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

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Stored preference first, then the system color scheme.
    pub fn resolve(stored: Option<&str>, system_prefers_dark: bool) -> Self {
        stored.and_then(Self::from_str).unwrap_or(if system_prefers_dark {
            Self::Dark
        } else {
            Self::Light
        })
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }

    pub fn pressed(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "◐",
            Self::Dark => "◑",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_value_wins_over_system_preference() {
        assert_eq!(Theme::resolve(Some("light"), true), Theme::Light);
        assert_eq!(Theme::resolve(Some("dark"), false), Theme::Dark);
    }

    #[test]
    fn unknown_or_missing_value_uses_system_preference() {
        assert_eq!(Theme::resolve(Some("sepia"), true), Theme::Dark);
        assert_eq!(Theme::resolve(None, false), Theme::Light);
    }

    #[test]
    fn toggling_twice_round_trips() {
        let theme = Theme::Light.toggled();
        assert_eq!(theme, Theme::Dark);
        assert_eq!(theme.toggle_label(), "Switch to light theme");
        assert!(theme.pressed());
        assert_eq!(theme.toggled(), Theme::Light);
    }
}
