//! Bundled figlet font registry

/// Fallback font used when a requested font is not bundled.
pub const FALLBACK_FONT: &str = "small";

/// Fonts available to the text-rendering savers.
pub const FONTS: &[&str] = &[
    "banner",
    "big",
    "block",
    "bubble",
    "digital",
    "lean",
    "mini",
    "script",
    "shadow",
    "slant",
    "small",
    "smscript",
    "smshadow",
    "smslant",
    "standard",
    "term",
];

/// Check whether a font is bundled.
pub fn contains(name: &str) -> bool {
    FONTS.contains(&name)
}

/// List all bundled font names.
pub fn names() -> &'static [&'static str] {
    FONTS
}

/// Keep a known font name, substitute the fallback otherwise.
pub fn existing_or_fallback(name: impl Into<String>) -> String {
    let name = name.into();
    if contains(&name) {
        name
    } else {
        FALLBACK_FONT.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_is_bundled() {
        assert!(contains(FALLBACK_FONT));
    }

    #[test]
    fn test_existing_or_fallback() {
        assert_eq!(existing_or_fallback("standard"), "standard");
        assert_eq!(existing_or_fallback("nonexistent"), "small");
    }
}
