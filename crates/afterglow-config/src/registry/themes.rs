//! Bundled theme registry
//!
//! Themes pair a background and foreground color in plain-sequence form.
//! Theme-driven savers store the theme name and validate it against this
//! table.

/// Default theme used when a requested theme is not installed.
pub const DEFAULT_THEME: &str = "synthwave";

/// A bundled theme definition.
pub struct BundledTheme {
    pub name: &'static str,
    /// Background color as a plain `R;G;B` sequence.
    pub background: &'static str,
    /// Foreground color as a plain `R;G;B` sequence.
    pub foreground: &'static str,
}

pub const THEMES: &[BundledTheme] = &[
    BundledTheme { name: "synthwave", background: "26;16;37", foreground: "255;56;221" },
    BundledTheme { name: "minimal", background: "0;0;0", foreground: "204;204;204" },
    BundledTheme { name: "dracula", background: "40;42;54", foreground: "248;248;242" },
    BundledTheme { name: "solarized", background: "0;43;54", foreground: "131;148;150" },
    BundledTheme { name: "phosphor", background: "0;10;0", foreground: "51;255;51" },
];

/// Look a theme up by name.
pub fn get(name: &str) -> Option<&'static BundledTheme> {
    THEMES.iter().find(|theme| theme.name == name)
}

/// Check whether a theme is installed.
pub fn contains(name: &str) -> bool {
    get(name).is_some()
}

/// List all installed theme names.
pub fn names() -> Vec<&'static str> {
    THEMES.iter().map(|theme| theme.name).collect()
}

/// Keep a known theme name, substitute the default otherwise.
pub fn existing_or_fallback(name: impl Into<String>) -> String {
    let name = name.into();
    if contains(&name) {
        name
    } else {
        DEFAULT_THEME.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_exists() {
        assert!(contains(DEFAULT_THEME));
    }

    #[test]
    fn test_existing_or_fallback() {
        assert_eq!(existing_or_fallback("dracula"), "dracula");
        assert_eq!(existing_or_fallback("nonexistent"), "synthwave");
    }

    #[test]
    fn test_theme_colors_parse() {
        for theme in THEMES {
            assert!(theme.background.parse::<afterglow_color::Color>().is_ok());
            assert!(theme.foreground.parse::<afterglow_color::Color>().is_ok());
        }
    }
}
