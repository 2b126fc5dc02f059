//! Field validation rules for saver settings
//!
//! Every settings field is governed by exactly one of these rules. Setters are
//! total: invalid input is coerced to a valid value, never rejected. The
//! `saver_settings!` macro wires a rule to each declared field so the rule set
//! here is the single place clamping behavior lives.

use afterglow_color::Color;

/// Positive integer with a fallback: delays, step counts, BPM values.
pub fn positive_or(value: i32, default: i32) -> i32 {
    if value <= 0 { default } else { value }
}

/// Positive float with a fallback: wave frequency levels.
pub fn positive_f64_or(value: f64, default: f64) -> f64 {
    if value <= 0.0 { default } else { value }
}

/// Color channel intensity, clamped to the 8-bit range.
pub fn channel(value: i32) -> i32 {
    value.clamp(0, 255)
}

/// Color channel intensity where zero is not usable (the value feeds a
/// division, e.g. fade step sizing).
pub fn channel_nonzero(value: i32) -> i32 {
    value.clamp(1, 255)
}

/// Maximum channel intensity: clamped to 8 bits and floored at the paired
/// minimum as it stands right now. Lowering the minimum later does not
/// re-clamp an already stored maximum.
pub fn channel_max(value: i32, minimum: i32) -> i32 {
    value.clamp(0, 255).max(minimum)
}

/// Display text with a fallback phrase for empty input.
pub fn non_empty_or(value: impl Into<String>, default: &str) -> String {
    let value = value.into();
    if value.trim().is_empty() {
        default.to_string()
    } else {
        value
    }
}

/// Color value in any accepted spelling, normalized to its plain sequence.
/// Unparsable input falls back to the field default.
pub fn color_or(value: impl Into<String>, default: &str) -> String {
    let value = value.into();
    match value.parse::<Color>() {
        Ok(color) => color.plain_sequence(),
        Err(_) => default.to_string(),
    }
}

/// Toggle that is only honored on Unix-like hosts.
pub fn unix_only(value: bool) -> bool {
    if cfg!(unix) { value } else { false }
}

/// Declares one saver settings group: the struct, its defaults, a getter and
/// a validating setter per field, and a `sanitize` pass that re-applies every
/// rule in declaration order (used after deserializing hand-edited files).
///
/// Field syntax: `getter, setter: Type = default => rule`. Rules map to the
/// functions above; `max_level(sibling)` floors at the named minimum field,
/// `font`/`siren`/`theme` consult the bundled registries.
macro_rules! saver_settings {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident, $setter:ident : $ty:ty = $default:expr => $rule:ident $(( $($rarg:ident)* ))?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(default)]
        pub struct $name {
            $(
                $(#[$fmeta])*
                $field: $ty,
            )*
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    $( $field: $default.into(), )*
                }
            }
        }

        impl $name {
            $(
                saver_settings!(@methods $field, $setter, $default, $rule $(( $($rarg)* ))?);
            )*

            /// Re-applies every field rule, coercing out-of-range values the
            /// same way the setters do.
            pub fn sanitize(&mut self) {
                $( saver_settings!(@sanitize self, $field, $setter, $rule); )*
            }
        }
    };

    // Stored verbatim: plain toggles and display characters.
    (@methods $field:ident, $setter:ident, $default:expr, verbatim_bool) => {
        pub fn $field(&self) -> bool {
            self.$field
        }
        pub fn $setter(&mut self, value: bool) {
            self.$field = value;
        }
    };
    (@methods $field:ident, $setter:ident, $default:expr, verbatim_char) => {
        pub fn $field(&self) -> char {
            self.$field
        }
        pub fn $setter(&mut self, value: char) {
            self.$field = value;
        }
    };

    (@methods $field:ident, $setter:ident, $default:expr, delay) => {
        pub fn $field(&self) -> i32 {
            self.$field
        }
        pub fn $setter(&mut self, value: i32) {
            self.$field = $crate::rules::positive_or(value, $default);
        }
    };

    (@methods $field:ident, $setter:ident, $default:expr, frequency) => {
        pub fn $field(&self) -> f64 {
            self.$field
        }
        pub fn $setter(&mut self, value: f64) {
            self.$field = $crate::rules::positive_f64_or(value, $default);
        }
    };

    (@methods $field:ident, $setter:ident, $default:expr, min_level) => {
        pub fn $field(&self) -> i32 {
            self.$field
        }
        pub fn $setter(&mut self, value: i32) {
            self.$field = $crate::rules::channel(value);
        }
    };

    (@methods $field:ident, $setter:ident, $default:expr, min_level_nonzero) => {
        pub fn $field(&self) -> i32 {
            self.$field
        }
        pub fn $setter(&mut self, value: i32) {
            self.$field = $crate::rules::channel_nonzero(value);
        }
    };

    (@methods $field:ident, $setter:ident, $default:expr, max_level($minimum:ident)) => {
        pub fn $field(&self) -> i32 {
            self.$field
        }
        pub fn $setter(&mut self, value: i32) {
            self.$field = $crate::rules::channel_max(value, self.$minimum);
        }
    };

    (@methods $field:ident, $setter:ident, $default:expr, text) => {
        pub fn $field(&self) -> &str {
            &self.$field
        }
        pub fn $setter(&mut self, value: impl Into<String>) {
            self.$field = $crate::rules::non_empty_or(value, $default);
        }
    };

    (@methods $field:ident, $setter:ident, $default:expr, color) => {
        pub fn $field(&self) -> &str {
            &self.$field
        }
        pub fn $setter(&mut self, value: impl Into<String>) {
            self.$field = $crate::rules::color_or(value, $default);
        }
    };

    (@methods $field:ident, $setter:ident, $default:expr, font) => {
        pub fn $field(&self) -> &str {
            &self.$field
        }
        pub fn $setter(&mut self, value: impl Into<String>) {
            self.$field = $crate::registry::fonts::existing_or_fallback(value);
        }
    };

    (@methods $field:ident, $setter:ident, $default:expr, siren) => {
        pub fn $field(&self) -> &str {
            &self.$field
        }
        pub fn $setter(&mut self, value: impl Into<String>) {
            self.$field = $crate::registry::sirens::existing_or_fallback(value);
        }
    };

    (@methods $field:ident, $setter:ident, $default:expr, theme) => {
        pub fn $field(&self) -> &str {
            &self.$field
        }
        pub fn $setter(&mut self, value: impl Into<String>) {
            self.$field = $crate::registry::themes::existing_or_fallback(value);
        }
    };

    (@methods $field:ident, $setter:ident, $default:expr, unix_gated) => {
        pub fn $field(&self) -> bool {
            self.$field
        }
        pub fn $setter(&mut self, value: bool) {
            self.$field = $crate::rules::unix_only(value);
        }
    };

    // Sanitize steps. Verbatim fields have nothing to re-check; string rules
    // take the stored value back through the setter.
    (@sanitize $self:ident, $field:ident, $setter:ident, verbatim_bool) => {};
    (@sanitize $self:ident, $field:ident, $setter:ident, verbatim_char) => {};
    (@sanitize $self:ident, $field:ident, $setter:ident, text) => {
        let value = ::std::mem::take(&mut $self.$field);
        $self.$setter(value);
    };
    (@sanitize $self:ident, $field:ident, $setter:ident, color) => {
        let value = ::std::mem::take(&mut $self.$field);
        $self.$setter(value);
    };
    (@sanitize $self:ident, $field:ident, $setter:ident, font) => {
        let value = ::std::mem::take(&mut $self.$field);
        $self.$setter(value);
    };
    (@sanitize $self:ident, $field:ident, $setter:ident, siren) => {
        let value = ::std::mem::take(&mut $self.$field);
        $self.$setter(value);
    };
    (@sanitize $self:ident, $field:ident, $setter:ident, theme) => {
        let value = ::std::mem::take(&mut $self.$field);
        $self.$setter(value);
    };
    (@sanitize $self:ident, $field:ident, $setter:ident, $rule:ident) => {
        $self.$setter($self.$field);
    };
}

pub(crate) use saver_settings;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_or() {
        assert_eq!(positive_or(0, 10), 10);
        assert_eq!(positive_or(-50, 10), 10);
        assert_eq!(positive_or(37, 10), 37);
    }

    #[test]
    fn test_positive_f64_or() {
        assert_eq!(positive_f64_or(0.0, 2.0), 2.0);
        assert_eq!(positive_f64_or(-1.5, 2.0), 2.0);
        assert_eq!(positive_f64_or(3.5, 2.0), 3.5);
    }

    #[test]
    fn test_channel() {
        assert_eq!(channel(-5), 0);
        assert_eq!(channel(300), 255);
        assert_eq!(channel(128), 128);
    }

    #[test]
    fn test_channel_nonzero() {
        assert_eq!(channel_nonzero(0), 1);
        assert_eq!(channel_nonzero(-5), 1);
        assert_eq!(channel_nonzero(255), 255);
    }

    #[test]
    fn test_channel_max_floors_at_minimum() {
        assert_eq!(channel_max(50, 100), 100);
        assert_eq!(channel_max(200, 100), 200);
        assert_eq!(channel_max(300, 100), 255);
        assert_eq!(channel_max(-5, 0), 0);
    }

    #[test]
    fn test_non_empty_or() {
        assert_eq!(non_empty_or("", "Afterglow"), "Afterglow");
        assert_eq!(non_empty_or("   ", "Afterglow"), "Afterglow");
        assert_eq!(non_empty_or("hello", "Afterglow"), "hello");
    }

    #[test]
    fn test_color_or_normalizes() {
        assert_eq!(color_or("red", "0;0;0"), "255;0;0");
        assert_eq!(color_or("10;20;30", "0;0;0"), "10;20;30");
        assert_eq!(color_or("not a color", "0;0;0"), "0;0;0");
    }

    #[cfg(unix)]
    #[test]
    fn test_unix_only_passes_through() {
        assert!(unix_only(true));
        assert!(!unix_only(false));
    }

    #[cfg(not(unix))]
    #[test]
    fn test_unix_only_forced_off() {
        assert!(!unix_only(true));
        assert!(!unix_only(false));
    }
}
