use std::fmt;

/// Color theme, stored as `"dark"`/`"light"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parses a stored value; anything unrecognized falls back to light.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text scale multiplier, clamped to 0.9–2.0 and stepped by 0.1.
///
/// Stored as its decimal string form (e.g. `"1.1"`), one digit after the
/// point, so the persisted value round-trips exactly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextSize(f32);

impl TextSize {
    pub const MIN: f32 = 0.9;
    pub const MAX: f32 = 2.0;
    const STEP: f32 = 0.1;

    #[must_use]
    pub fn new(multiplier: f32) -> Self {
        Self(round1(multiplier.clamp(Self::MIN, Self::MAX)))
    }

    /// Parses a stored value; non-numeric input falls back to 1.0.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        value
            .and_then(|raw| raw.trim().parse::<f32>().ok())
            .map_or_else(Self::default, Self::new)
    }

    #[must_use]
    pub fn multiplier(self) -> f32 {
        self.0
    }

    #[must_use]
    pub fn increased(self) -> Self {
        Self::new(self.0 + Self::STEP)
    }

    #[must_use]
    pub fn decreased(self) -> Self {
        Self::new(self.0 - Self::STEP)
    }

    /// Whole-percent form used in announcements ("Tekststørrelse 110 prosent").
    #[must_use]
    pub fn percent(self) -> u32 {
        (self.0 * 100.0).round() as u32
    }
}

impl Default for TextSize {
    fn default() -> Self {
        Self(1.0)
    }
}

impl fmt::Display for TextSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

fn round1(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}

/// User-adjustable presentation settings.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct UserSettings {
    pub theme: Theme,
    pub text_size: TextSize,
    pub high_contrast: bool,
}

impl UserSettings {
    /// Rebuilds settings from the three stored key values.
    #[must_use]
    pub fn from_stored(
        theme: Option<&str>,
        text_size: Option<&str>,
        high_contrast: Option<&str>,
    ) -> Self {
        Self {
            theme: Theme::from_stored(theme),
            text_size: TextSize::from_stored(text_size),
            high_contrast: high_contrast == Some("true"),
        }
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_parses_and_defaults() {
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("sepia")), Theme::Light);
        assert_eq!(Theme::from_stored(None), Theme::Light);
    }

    #[test]
    fn text_size_clamps_and_rounds() {
        assert_eq!(TextSize::new(0.5), TextSize::new(0.9));
        assert_eq!(TextSize::new(3.0), TextSize::new(2.0));
        assert_eq!(TextSize::new(1.25).to_string(), "1.2");
    }

    #[test]
    fn text_size_steps_stay_in_bounds() {
        let max = TextSize::new(2.0);
        assert_eq!(max.increased(), max);
        let min = TextSize::new(0.9);
        assert_eq!(min.decreased(), min);
        assert_eq!(TextSize::default().increased().to_string(), "1.1");
    }

    #[test]
    fn text_size_stored_round_trip() {
        let size = TextSize::new(1.3);
        assert_eq!(TextSize::from_stored(Some(&size.to_string())), size);
        assert_eq!(TextSize::from_stored(Some("not a number")), TextSize::default());
    }

    #[test]
    fn settings_from_stored_values() {
        let settings =
            UserSettings::from_stored(Some("dark"), Some("1.4"), Some("true"));
        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(settings.text_size, TextSize::new(1.4));
        assert!(settings.high_contrast);

        let defaults = UserSettings::from_stored(None, None, None);
        assert_eq!(defaults, UserSettings::default());
    }

    #[test]
    fn text_size_percent_for_announcements() {
        assert_eq!(TextSize::new(1.1).percent(), 110);
    }
}
