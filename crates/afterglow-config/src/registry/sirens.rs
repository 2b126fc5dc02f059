//! Bundled siren style registry
//!
//! Each style is a pair of alternating tones with a sweep period. The Siren
//! saver only stores the style name; renderers look the tones up here.

/// Default siren style.
pub const DEFAULT_STYLE: &str = "Cop";

/// A two-tone siren definition.
pub struct SirenStyle {
    pub name: &'static str,
    /// Alternating tone frequencies in Hz.
    pub tones: [u32; 2],
    /// Time spent on each tone in milliseconds.
    pub sweep_ms: u32,
}

pub const STYLES: &[SirenStyle] = &[
    SirenStyle { name: "Cop", tones: [635, 912], sweep_ms: 280 },
    SirenStyle { name: "Ambulance", tones: [650, 750], sweep_ms: 340 },
    SirenStyle { name: "Fire", tones: [500, 1000], sweep_ms: 500 },
    SirenStyle { name: "Civil Defense", tones: [360, 512], sweep_ms: 2000 },
    SirenStyle { name: "Air Raid", tones: [440, 680], sweep_ms: 1500 },
];

/// Look a style up by name.
pub fn get(name: &str) -> Option<&'static SirenStyle> {
    STYLES.iter().find(|style| style.name == name)
}

/// Check whether a style exists.
pub fn contains(name: &str) -> bool {
    get(name).is_some()
}

/// List all style names.
pub fn names() -> Vec<&'static str> {
    STYLES.iter().map(|style| style.name).collect()
}

/// Keep a known style name, substitute the default otherwise.
pub fn existing_or_fallback(name: impl Into<String>) -> String {
    let name = name.into();
    if contains(&name) {
        name
    } else {
        DEFAULT_STYLE.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style_exists() {
        assert!(contains(DEFAULT_STYLE));
    }

    #[test]
    fn test_existing_or_fallback() {
        assert_eq!(existing_or_fallback("Ambulance"), "Ambulance");
        assert_eq!(existing_or_fallback("Kazoo"), "Cop");
    }

    #[test]
    fn test_tones_are_ordered() {
        for style in STYLES {
            assert!(style.tones[0] < style.tones[1], "style {}", style.name);
        }
    }
}
