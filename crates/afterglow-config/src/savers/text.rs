//! Text-centric savers: marquees, typing simulators, figlet banners.

use crate::rules::saver_settings;

saver_settings! {
    /// Text scrolling across the screen.
    pub struct MarqueeSettings {
        true_color, set_true_color: bool = true => verbatim_bool,
        delay, set_delay: i32 = 10 => delay,
        write, set_write: String = "Afterglow" => text,
        /// Keep the marquee on the middle row instead of a random one.
        always_centered, set_always_centered: bool = true => verbatim_bool,
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
    /// Text bouncing around the screen DVD-logo style.
    pub struct BouncingTextSettings {
        true_color, set_true_color: bool = true => verbatim_bool,
        delay, set_delay: i32 = 10 => delay,
        write, set_write: String = "Afterglow" => text,
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
    /// Flash a text banner in random colors.
    pub struct FlashTextSettings {
        true_color, set_true_color: bool = true => verbatim_bool,
        delay, set_delay: i32 = 20 => delay,
        write, set_write: String = "Afterglow" => text,
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
    /// Simulated human typing, typos included.
    pub struct TypoSettings {
        delay, set_delay: i32 = 50 => delay,
        /// Pause before the text is typed again, in milliseconds.
        write_again_delay, set_write_again_delay: i32 = 3000 => delay,
        write, set_write: String = "The quick brown fox jumps over the lazy dog" => text,
        /// Lower bound of the simulated words-per-minute speed.
        writing_speed_min, set_writing_speed_min: i32 = 50 => delay,
        /// Upper bound of the simulated words-per-minute speed.
        writing_speed_max, set_writing_speed_max: i32 = 80 => delay,
        /// Chance (out of 100) that a keystroke lands on a neighbor key.
        missed_strikes_possibility, set_missed_strikes_possibility: i32 = 20 => delay,
    }
}

saver_settings! {
    /// Clean typewriter output with a moving carriage indicator.
    pub struct TypewriterSettings {
        delay, set_delay: i32 = 50 => delay,
        /// Pause before the screen is wiped and retyped, in milliseconds.
        new_screen_delay, set_new_screen_delay: i32 = 3000 => delay,
        write, set_write: String = "The quick brown fox jumps over the lazy dog" => text,
    }
}

saver_settings! {
    /// Linotype operator simulation, etaoin shrdlu and all.
    pub struct LinotypoSettings {
        delay, set_delay: i32 = 50 => delay,
        new_screen_delay, set_new_screen_delay: i32 = 3000 => delay,
        write, set_write: String = "The quick brown fox jumps over the lazy dog" => text,
        /// Chance (out of 100) of striking a wrong matrix.
        missed_strikes_possibility, set_missed_strikes_possibility: i32 = 1 => delay,
        /// Chance (out of 100) of filling the rest of a botched line with
        /// the etaoin sequence.
        etaoin_possibility, set_etaoin_possibility: i32 = 5 => delay,
        /// Number of text columns typed side by side.
        text_columns, set_text_columns: i32 = 1 => delay,
    }
}

saver_settings! {
    /// Figlet-rendered banner in a random color.
    pub struct FigletTextSettings {
        true_color, set_true_color: bool = true => verbatim_bool,
        delay, set_delay: i32 = 1000 => delay,
        write, set_write: String = "Afterglow" => text,
        /// Figlet font; must be bundled, falls back to "small".
        font, set_font: String = "small" => font,
        /// Cycle the banner through the hue wheel instead of one color.
        rainbow_mode, set_rainbow_mode: bool = false => verbatim_bool,
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
    /// Text drifting around the screen one step at a time.
    pub struct TextWanderSettings {
        true_color, set_true_color: bool = true => verbatim_bool,
        delay, set_delay: i32 = 1000 => delay,
        write, set_write: String = "Afterglow" => text,
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
