//! Bar, wave, and box savers.

use crate::rules::saver_settings;

saver_settings! {
    /// Vertical bars rippling to a wave function.
    pub struct BarWaveSettings {
        true_color, set_true_color: bool = true => verbatim_bool,
        delay, set_delay: i32 = 100 => delay,
        /// Wave frequency divisor; higher is slower.
        frequency_level, set_frequency_level: f64 = 2.0 => frequency,
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
    /// A sine wave of colored cells sweeping the screen.
    pub struct WaveSettings {
        delay, set_delay: i32 = 100 => delay,
        frequency_level, set_frequency_level: f64 = 3.0 => frequency,
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
    /// A color gradient ramp sweeping between two random endpoints.
    pub struct RampSettings {
        delay, set_delay: i32 = 20 => delay,
        /// Pause before the next ramp is drawn, in milliseconds.
        next_ramp_delay, set_next_ramp_delay: i32 = 250 => delay,
        upper_left_corner_char, set_upper_left_corner_char: char = '╔' => verbatim_char,
        upper_right_corner_char, set_upper_right_corner_char: char = '╗' => verbatim_char,
        lower_left_corner_char, set_lower_left_corner_char: char = '╚' => verbatim_char,
        lower_right_corner_char, set_lower_right_corner_char: char = '╝' => verbatim_char,
        upper_frame_char, set_upper_frame_char: char = '═' => verbatim_char,
        lower_frame_char, set_lower_frame_char: char = '═' => verbatim_char,
        left_frame_char, set_left_frame_char: char = '║' => verbatim_char,
        right_frame_char, set_right_frame_char: char = '║' => verbatim_char,
        /// Use the frame colors below instead of the terminal defaults.
        use_border_colors, set_use_border_colors: bool = false => verbatim_bool,
        frame_color, set_frame_color: String = "192;192;192" => color,
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
    /// Boxes stacking up from the bottom of the screen.
    pub struct StackBoxSettings {
        true_color, set_true_color: bool = true => verbatim_bool,
        delay, set_delay: i32 = 10 => delay,
        /// Draw filled boxes instead of outlines.
        fill, set_fill: bool = true => verbatim_bool,
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
    /// A square growing from a corner, fading, and moving on.
    pub struct SquareCornerSettings {
        delay, set_delay: i32 = 10 => delay,
        fade_out_delay, set_fade_out_delay: i32 = 3000 => delay,
        max_steps, set_max_steps: i32 = 25 => delay,
        minimum_red_color_level, set_minimum_red_color_level: i32 = 0 => min_level,
        minimum_green_color_level, set_minimum_green_color_level: i32 = 0 => min_level,
        minimum_blue_color_level, set_minimum_blue_color_level: i32 = 0 => min_level,
        maximum_red_color_level, set_maximum_red_color_level: i32 = 255 => max_level(minimum_red_color_level),
        maximum_green_color_level, set_maximum_green_color_level: i32 = 255 => max_level(minimum_green_color_level),
        maximum_blue_color_level, set_maximum_blue_color_level: i32 = 255 => max_level(minimum_blue_color_level),
    }
}

saver_settings! {
    /// Every cell repainted with an independent random color.
    pub struct ColorMixSettings {
        true_color, set_true_color: bool = true => verbatim_bool,
        delay, set_delay: i32 = 1 => delay,
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
    /// The whole screen strobing through colors.
    pub struct DiscoSettings {
        true_color, set_true_color: bool = true => verbatim_bool,
        /// Walk the palette in order instead of picking at random.
        cycle_colors, set_cycle_colors: bool = false => verbatim_bool,
        /// Frame delay in milliseconds, or beats per minute when
        /// `use_beats_per_minute` is on.
        delay, set_delay: i32 = 100 => delay,
        use_beats_per_minute, set_use_beats_per_minute: bool = false => verbatim_bool,
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

    // BarWave and Wave ancestors compared the incoming maximum against the
    // maximum itself; the shared rule compares against the minimum.
    #[test]
    fn test_barwave_max_floors_at_min() {
        let mut barwave = BarWaveSettings::default();
        barwave.set_minimum_red_color_level(100);
        barwave.set_maximum_red_color_level(50);
        assert_eq!(barwave.maximum_red_color_level(), 100);
    }

    #[test]
    fn test_wave_max_floors_at_min() {
        let mut wave = WaveSettings::default();
        wave.set_minimum_color_level(30);
        wave.set_maximum_color_level(5);
        assert_eq!(wave.maximum_color_level(), 30);
    }

    #[test]
    fn test_wave_frequency_level() {
        let mut wave = WaveSettings::default();
        wave.set_frequency_level(-1.0);
        assert_eq!(wave.frequency_level(), 3.0);
        wave.set_frequency_level(6.0);
        assert_eq!(wave.frequency_level(), 6.0);
    }

    #[test]
    fn test_ramp_frame_chars_verbatim() {
        let mut ramp = RampSettings::default();
        assert_eq!(ramp.upper_left_corner_char(), '╔');
        ramp.set_upper_left_corner_char('+');
        assert_eq!(ramp.upper_left_corner_char(), '+');
    }

    #[test]
    fn test_ramp_frame_color_normalizes() {
        let mut ramp = RampSettings::default();
        ramp.set_frame_color("silver");
        assert_eq!(ramp.frame_color(), "192;192;192");
        ramp.set_frame_color("?!");
        assert_eq!(ramp.frame_color(), "192;192;192");
    }

    #[test]
    fn test_disco_idempotent_valid_writes() {
        let mut disco = DiscoSettings::default();
        disco.set_delay(128);
        disco.set_minimum_color_level(12);
        disco.set_maximum_color_level(200);
        assert_eq!(disco.delay(), 128);
        assert_eq!(disco.minimum_color_level(), 12);
        assert_eq!(disco.maximum_color_level(), 200);
    }
}
