//! Motion savers: bouncing, spinning, sweeping, and filling effects.

use crate::rules::saver_settings;

saver_settings! {
    /// A colored block bouncing off the screen edges.
    pub struct BouncingBlockSettings {
        true_color, set_true_color: bool = true => verbatim_bool,
        delay, set_delay: i32 = 10 => delay,
        foreground_color, set_foreground_color: String = "0;255;0" => color,
        background_color, set_background_color: String = "0;0;0" => color,
        minimum_red_color_level, set_minimum_red_color_level: i32 = 0 => min_level,
        minimum_green_color_level, set_minimum_green_color_level: i32 = 0 => min_level,
        minimum_blue_color_level, set_minimum_blue_color_level: i32 = 0 => min_level,
        minimum_color_level, set_minimum_color_level: i32 = 0 => min_level,
        maximum_red_color_level, set_maximum_red_color_level: i32 = 255 => max_level(minimum_red_color_level),
        maximum_green_color_level, set_maximum_green_color_level: i32 = 255 => max_level(minimum_green_color_level),
        maximum_blue_color_level, set_maximum_blue_color_level: i32 = 255 => max_level(minimum_blue_color_level),
        maximum_color_level, set_maximum_color_level: i32 = 255 => max_level(minimum_color_level),
    }
}

saver_settings! {
    /// A line of cells spinning around the screen center.
    pub struct SpinSettings {
        delay, set_delay: i32 = 10 => delay,
    }
}

saver_settings! {
    /// Sine curves swiveling horizontally and vertically at once.
    pub struct SwivelSettings {
        delay, set_delay: i32 = 100 => delay,
        /// Horizontal wave frequency divisor.
        horizontal_frequency_level, set_horizontal_frequency_level: f64 = 3.0 => frequency,
        /// Vertical wave frequency divisor.
        vertical_frequency_level, set_vertical_frequency_level: f64 = 8.0 => frequency,
        minimum_red_color_level, set_minimum_red_color_level: i32 = 0 => min_level,
        minimum_green_color_level, set_minimum_green_color_level: i32 = 0 => min_level,
        minimum_blue_color_level, set_minimum_blue_color_level: i32 = 0 => min_level,
        maximum_red_color_level, set_maximum_red_color_level: i32 = 255 => max_level(minimum_red_color_level),
        maximum_green_color_level, set_maximum_green_color_level: i32 = 255 => max_level(minimum_green_color_level),
        maximum_blue_color_level, set_maximum_blue_color_level: i32 = 255 => max_level(minimum_blue_color_level),
    }
}

saver_settings! {
    /// A dot wandering the screen, leaving a fading trail.
    pub struct TrailsSettings {
        delay, set_delay: i32 = 10 => delay,
        /// Cells kept lit behind the head.
        trail_length, set_trail_length: i32 = 10 => delay,
        minimum_red_color_level, set_minimum_red_color_level: i32 = 0 => min_level,
        minimum_green_color_level, set_minimum_green_color_level: i32 = 0 => min_level,
        minimum_blue_color_level, set_minimum_blue_color_level: i32 = 0 => min_level,
        maximum_red_color_level, set_maximum_red_color_level: i32 = 255 => max_level(minimum_red_color_level),
        maximum_green_color_level, set_maximum_green_color_level: i32 = 255 => max_level(minimum_green_color_level),
        maximum_blue_color_level, set_maximum_blue_color_level: i32 = 255 => max_level(minimum_blue_color_level),
    }
}

saver_settings! {
    /// A marker tracking a moving point along a sine path.
    pub struct PointTrackSettings {
        delay, set_delay: i32 = 100 => delay,
        minimum_red_color_level, set_minimum_red_color_level: i32 = 0 => min_level,
        minimum_green_color_level, set_minimum_green_color_level: i32 = 0 => min_level,
        minimum_blue_color_level, set_minimum_blue_color_level: i32 = 0 => min_level,
        maximum_red_color_level, set_maximum_red_color_level: i32 = 255 => max_level(minimum_red_color_level),
        maximum_green_color_level, set_maximum_green_color_level: i32 = 255 => max_level(minimum_green_color_level),
        maximum_blue_color_level, set_maximum_blue_color_level: i32 = 255 => max_level(minimum_blue_color_level),
    }
}

saver_settings! {
    /// A chaser cell following a leader around the screen.
    pub struct FollowingSettings {
        delay, set_delay: i32 = 100 => delay,
        minimum_red_color_level, set_minimum_red_color_level: i32 = 0 => min_level,
        minimum_green_color_level, set_minimum_green_color_level: i32 = 0 => min_level,
        minimum_blue_color_level, set_minimum_blue_color_level: i32 = 0 => min_level,
        maximum_red_color_level, set_maximum_red_color_level: i32 = 255 => max_level(minimum_red_color_level),
        maximum_green_color_level, set_maximum_green_color_level: i32 = 255 => max_level(minimum_green_color_level),
        maximum_blue_color_level, set_maximum_blue_color_level: i32 = 255 => max_level(minimum_blue_color_level),
    }
}

saver_settings! {
    /// Concentric colored rings breathing in and out.
    pub struct MesmerizeSettings {
        delay, set_delay: i32 = 10 => delay,
        minimum_red_color_level, set_minimum_red_color_level: i32 = 0 => min_level,
        minimum_green_color_level, set_minimum_green_color_level: i32 = 0 => min_level,
        minimum_blue_color_level, set_minimum_blue_color_level: i32 = 0 => min_level,
        minimum_color_level, set_minimum_color_level: i32 = 0 => min_level,
        maximum_red_color_level, set_maximum_red_color_level: i32 = 255 => max_level(minimum_red_color_level),
        maximum_green_color_level, set_maximum_green_color_level: i32 = 255 => max_level(minimum_green_color_level),
        maximum_blue_color_level, set_maximum_blue_color_level: i32 = 255 => max_level(minimum_blue_color_level),
        maximum_color_level, set_maximum_color_level: i32 = 255 => max_level(minimum_color_level),
    }
}

saver_settings! {
    /// A snake filling the screen row by row.
    pub struct SnakeFillSettings {
        true_color, set_true_color: bool = true => verbatim_bool,
        delay, set_delay: i32 = 10 => delay,
        minimum_red_color_level, set_minimum_red_color_level: i32 = 0 => min_level,
        minimum_green_color_level, set_minimum_green_color_level: i32 = 0 => min_level,
        minimum_blue_color_level, set_minimum_blue_color_level: i32 = 0 => min_level,
        minimum_color_level, set_minimum_color_level: i32 = 0 => min_level,
        maximum_red_color_level, set_maximum_red_color_level: i32 = 255 => max_level(minimum_red_color_level),
        maximum_green_color_level, set_maximum_green_color_level: i32 = 255 => max_level(minimum_green_color_level),
        maximum_blue_color_level, set_maximum_blue_color_level: i32 = 255 => max_level(minimum_blue_color_level),
        maximum_color_level, set_maximum_color_level: i32 = 255 => max_level(minimum_color_level),
    }
}

saver_settings! {
    /// Screen halves sliding apart like opening doors.
    pub struct DoorShiftSettings {
        true_color, set_true_color: bool = true => verbatim_bool,
        delay, set_delay: i32 = 10 => delay,
        background_color, set_background_color: String = "0;0;0" => color,
        minimum_red_color_level, set_minimum_red_color_level: i32 = 0 => min_level,
        minimum_green_color_level, set_minimum_green_color_level: i32 = 0 => min_level,
        minimum_blue_color_level, set_minimum_blue_color_level: i32 = 0 => min_level,
        minimum_color_level, set_minimum_color_level: i32 = 0 => min_level,
        maximum_red_color_level, set_maximum_red_color_level: i32 = 255 => max_level(minimum_red_color_level),
        maximum_green_color_level, set_maximum_green_color_level: i32 = 255 => max_level(minimum_green_color_level),
        maximum_blue_color_level, set_maximum_blue_color_level: i32 = 255 => max_level(minimum_blue_color_level),
        maximum_color_level, set_maximum_color_level: i32 = 255 => max_level(minimum_color_level),
    }
}

saver_settings! {
    /// Colored columns wiping across and reversing direction.
    pub struct WipeSettings {
        true_color, set_true_color: bool = true => verbatim_bool,
        delay, set_delay: i32 = 10 => delay,
        /// Wipes performed before the sweep direction flips.
        wipes_needed_to_change_direction, set_wipes_needed_to_change_direction: i32 = 10 => delay,
        background_color, set_background_color: String = "0;0;0" => color,
        minimum_red_color_level, set_minimum_red_color_level: i32 = 0 => min_level,
        minimum_green_color_level, set_minimum_green_color_level: i32 = 0 => min_level,
        minimum_blue_color_level, set_minimum_blue_color_level: i32 = 0 => min_level,
        minimum_color_level, set_minimum_color_level: i32 = 0 => min_level,
        maximum_red_color_level, set_maximum_red_color_level: i32 = 255 => max_level(minimum_red_color_level),
        maximum_green_color_level, set_maximum_green_color_level: i32 = 255 => max_level(minimum_green_color_level),
        maximum_blue_color_level, set_maximum_blue_color_level: i32 = 255 => max_level(minimum_blue_color_level),
        maximum_color_level, set_maximum_color_level: i32 = 255 => max_level(minimum_color_level),
    }
}

saver_settings! {
    /// Random cells lit one at a time, then snuffed out oldest-first.
    pub struct LighterSettings {
        true_color, set_true_color: bool = true => verbatim_bool,
        delay, set_delay: i32 = 100 => delay,
        /// Cells kept lit before the oldest is extinguished.
        max_positions, set_max_positions: i32 = 10 => delay,
        minimum_red_color_level, set_minimum_red_color_level: i32 = 0 => min_level,
        minimum_green_color_level, set_minimum_green_color_level: i32 = 0 => min_level,
        minimum_blue_color_level, set_minimum_blue_color_level: i32 = 0 => min_level,
        minimum_color_level, set_minimum_color_level: i32 = 0 => min_level,
        maximum_red_color_level, set_maximum_red_color_level: i32 = 255 => max_level(minimum_red_color_level),
        maximum_green_color_level, set_maximum_green_color_level: i32 = 255 => max_level(minimum_green_color_level),
        maximum_blue_color_level, set_maximum_blue_color_level: i32 = 255 => max_level(minimum_blue_color_level),
        maximum_color_level, set_maximum_color_level: i32 = 255 => max_level(minimum_color_level),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Swivel, Trails, PointTrack, Following and Mesmerize share the uniform
    // maximum rule with every other group; these tests pin that down since
    // their ancestors were the usual suspects for per-field clamp drift.
    #[test]
    fn test_swivel_max_floors_at_min() {
        let mut swivel = SwivelSettings::default();
        swivel.set_minimum_red_color_level(100);
        swivel.set_maximum_red_color_level(50);
        assert_eq!(swivel.maximum_red_color_level(), 100);
    }

    #[test]
    fn test_trails_max_floors_at_min() {
        let mut trails = TrailsSettings::default();
        trails.set_minimum_blue_color_level(80);
        trails.set_maximum_blue_color_level(10);
        assert_eq!(trails.maximum_blue_color_level(), 80);
    }

    #[test]
    fn test_mesmerize_max_floors_at_min() {
        let mut mesmerize = MesmerizeSettings::default();
        mesmerize.set_minimum_color_level(42);
        mesmerize.set_maximum_color_level(0);
        assert_eq!(mesmerize.maximum_color_level(), 42);
    }

    // Lighter and Wipe historically skipped bounds checking; they now clamp
    // like everyone else.
    #[test]
    fn test_lighter_clamps_channels() {
        let mut lighter = LighterSettings::default();
        lighter.set_minimum_green_color_level(-40);
        assert_eq!(lighter.minimum_green_color_level(), 0);
        lighter.set_maximum_green_color_level(9000);
        assert_eq!(lighter.maximum_green_color_level(), 255);
    }

    #[test]
    fn test_wipe_direction_count_clamp() {
        let mut wipe = WipeSettings::default();
        wipe.set_wipes_needed_to_change_direction(0);
        assert_eq!(wipe.wipes_needed_to_change_direction(), 10);
    }

    #[test]
    fn test_swivel_frequency_clamp() {
        let mut swivel = SwivelSettings::default();
        swivel.set_horizontal_frequency_level(0.0);
        assert_eq!(swivel.horizontal_frequency_level(), 3.0);
        swivel.set_vertical_frequency_level(-2.5);
        assert_eq!(swivel.vertical_frequency_level(), 8.0);
        swivel.set_horizontal_frequency_level(5.5);
        assert_eq!(swivel.horizontal_frequency_level(), 5.5);
    }
}
