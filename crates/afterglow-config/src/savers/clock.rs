//! Clock savers: time readouts and the three-bar progress clock.

use crate::rules::saver_settings;

saver_settings! {
    /// Three framed progress bars tracking hours, minutes, and seconds.
    pub struct ProgressClockSettings {
        true_color, set_true_color: bool = true => verbatim_bool,
        /// Re-roll the bar colors every `cycle_colors_ticks` ticks.
        cycle_colors, set_cycle_colors: bool = true => verbatim_bool,
        delay, set_delay: i32 = 500 => delay,
        cycle_colors_ticks, set_cycle_colors_ticks: i32 = 20 => delay,
        /// Bar colors, overridden while color cycling is off.
        hours_color, set_hours_color: String = "255;0;0" => color,
        minutes_color, set_minutes_color: String = "255;255;0" => color,
        seconds_color, set_seconds_color: String = "0;255;0" => color,
        progress_color, set_progress_color: String = "0;255;255" => color,
        upper_left_corner_char, set_upper_left_corner_char: char = '╔' => verbatim_char,
        upper_right_corner_char, set_upper_right_corner_char: char = '╗' => verbatim_char,
        lower_left_corner_char, set_lower_left_corner_char: char = '╚' => verbatim_char,
        lower_right_corner_char, set_lower_right_corner_char: char = '╝' => verbatim_char,
        upper_frame_char, set_upper_frame_char: char = '═' => verbatim_char,
        lower_frame_char, set_lower_frame_char: char = '═' => verbatim_char,
        left_frame_char, set_left_frame_char: char = '║' => verbatim_char,
        right_frame_char, set_right_frame_char: char = '║' => verbatim_char,
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
    /// Current time across world time zones.
    pub struct WorldClockSettings {
        true_color, set_true_color: bool = true => verbatim_bool,
        delay, set_delay: i32 = 1000 => delay,
        /// Time zones shown per refresh.
        zones_shown, set_zones_shown: i32 = 3 => delay,
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
    /// The local date and time in a random color.
    pub struct DateAndTimeSettings {
        true_color, set_true_color: bool = true => verbatim_bool,
        delay, set_delay: i32 = 1000 => delay,
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

    #[test]
    fn test_progress_clock_colors_normalize() {
        let mut clock = ProgressClockSettings::default();
        clock.set_hours_color("maroon");
        assert_eq!(clock.hours_color(), "128;0;0");
        clock.set_minutes_color("nonsense");
        assert_eq!(clock.minutes_color(), "255;255;0");
    }

    #[test]
    fn test_progress_clock_frame_chars() {
        let mut clock = ProgressClockSettings::default();
        clock.set_left_frame_char('|');
        clock.set_right_frame_char('|');
        assert_eq!(clock.left_frame_char(), '|');
        assert_eq!(clock.right_frame_char(), '|');
        // Untouched glyphs keep their defaults.
        assert_eq!(clock.upper_frame_char(), '═');
    }

    #[test]
    fn test_world_clock_delay() {
        let mut clock = WorldClockSettings::default();
        clock.set_delay(0);
        assert_eq!(clock.delay(), 1000);
    }
}
