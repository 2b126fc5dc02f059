//! Particle and rain savers: falling code, glitter, starfields, fireworks.

use crate::rules::saver_settings;

saver_settings! {
    /// Matrix-style falling code rain.
    pub struct MatrixSettings {
        /// Frame delay in milliseconds.
        delay, set_delay: i32 = 10 => delay,
        /// Number of brightness steps in a trail before a cell goes dark.
        fade_steps, set_fade_steps: i32 = 25 => delay,
    }
}

saver_settings! {
    /// Falling code rain drawn in theme colors over a custom backdrop.
    pub struct GlitterMatrixSettings {
        delay, set_delay: i32 = 1 => delay,
        background_color, set_background_color: String = "0;0;0" => color,
        foreground_color, set_foreground_color: String = "0;255;0" => color,
    }
}

saver_settings! {
    /// Random cells lighting up in random colors.
    pub struct GlitterColorSettings {
        true_color, set_true_color: bool = true => verbatim_bool,
        delay, set_delay: i32 = 1 => delay,
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
    /// Stars streaking toward the viewer.
    pub struct StarfieldSettings {
        delay, set_delay: i32 = 10 => delay,
    }
}

saver_settings! {
    /// Pinpoint stars blinking in and out.
    pub struct TwinkleSettings {
        true_color, set_true_color: bool = true => verbatim_bool,
        delay, set_delay: i32 = 50 => delay,
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
    /// Shells bursting into colored sparks.
    pub struct FireworksSettings {
        true_color, set_true_color: bool = true => verbatim_bool,
        delay, set_delay: i32 = 50 => delay,
        /// Burst radius in cells.
        radius, set_radius: i32 = 5 => delay,
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
    /// Horizontal beams sweeping across the screen.
    pub struct LaserbeamsSettings {
        true_color, set_true_color: bool = true => verbatim_bool,
        delay, set_delay: i32 = 500 => delay,
        /// Glyph used to draw each beam.
        line_char, set_line_char: char = '-' => verbatim_char,
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
    /// A single colored line redrawn at a new row each tick.
    pub struct LinesSettings {
        true_color, set_true_color: bool = true => verbatim_bool,
        delay, set_delay: i32 = 500 => delay,
        line_char, set_line_char: char = '-' => verbatim_char,
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
    /// Color bands accelerating past like a hyperspace jump.
    pub struct LightspeedSettings {
        /// Cycle through the whole hue wheel instead of random picks.
        cycle_colors, set_cycle_colors: bool = false => verbatim_bool,
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_delay_clamp() {
        let mut matrix = MatrixSettings::default();
        matrix.set_delay(0);
        assert_eq!(matrix.delay(), 10);
        matrix.set_delay(37);
        assert_eq!(matrix.delay(), 37);
        matrix.set_delay(-100);
        assert_eq!(matrix.delay(), 10);
    }

    #[test]
    fn test_glitter_matrix_color_normalization() {
        let mut glitter = GlitterMatrixSettings::default();
        glitter.set_foreground_color("lime");
        assert_eq!(glitter.foreground_color(), "0;255;0");
        glitter.set_background_color("bogus");
        assert_eq!(glitter.background_color(), "0;0;0");
    }

    #[test]
    fn test_glitter_color_channel_bounds() {
        let mut glitter = GlitterColorSettings::default();
        glitter.set_minimum_red_color_level(-5);
        assert_eq!(glitter.minimum_red_color_level(), 0);
        glitter.set_minimum_red_color_level(300);
        assert_eq!(glitter.minimum_red_color_level(), 255);
        glitter.set_minimum_red_color_level(128);
        assert_eq!(glitter.minimum_red_color_level(), 128);
    }

    #[test]
    fn test_glitter_color_max_floors_at_min() {
        let mut glitter = GlitterColorSettings::default();
        glitter.set_minimum_green_color_level(100);
        glitter.set_maximum_green_color_level(50);
        assert_eq!(glitter.maximum_green_color_level(), 100);
        glitter.set_maximum_green_color_level(200);
        assert_eq!(glitter.maximum_green_color_level(), 200);
    }

    #[test]
    fn test_lines_char_verbatim() {
        let mut lines = LinesSettings::default();
        lines.set_line_char('═');
        assert_eq!(lines.line_char(), '═');
    }
}
