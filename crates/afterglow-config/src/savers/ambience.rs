//! Ambience savers driven by the bundled registries.

use crate::rules::saver_settings;

saver_settings! {
    /// Emergency-light flasher with a matching two-tone siren.
    pub struct SirenSettings {
        delay, set_delay: i32 = 500 => delay,
        /// Siren style; must exist in the siren registry.
        style, set_style: String = "Cop" => siren,
    }
}

saver_settings! {
    /// Cycles the terminal through the installed themes.
    pub struct ThemeCycleSettings {
        delay, set_delay: i32 = 5000 => delay,
        /// Theme to start the cycle from; must be installed.
        theme, set_theme: String = "synthwave" => theme,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{sirens, themes};

    #[test]
    fn test_siren_style_fallback() {
        let mut siren = SirenSettings::default();
        siren.set_style("Fire");
        assert_eq!(siren.style(), "Fire");
        siren.set_style("Kazoo");
        assert_eq!(siren.style(), sirens::DEFAULT_STYLE);
    }

    #[test]
    fn test_theme_cycle_fallback() {
        let mut cycle = ThemeCycleSettings::default();
        cycle.set_theme("dracula");
        assert_eq!(cycle.theme(), "dracula");
        cycle.set_theme("missing-theme");
        assert_eq!(cycle.theme(), themes::DEFAULT_THEME);
    }
}
