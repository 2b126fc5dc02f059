//! Pulsing and fading savers, including the beat-synchronized family.
//!
//! Beat savers interpret `delay` as beats per minute rather than a frame
//! delay; the validation rule is the same either way. Their minimum color
//! level is floored at 1 because the level divides the fade step size.

use crate::rules::saver_settings;

saver_settings! {
    /// Whole-screen brightness pulse.
    pub struct PulseSettings {
        delay, set_delay: i32 = 50 => delay,
        /// Brightness steps per fade-in or fade-out ramp.
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
    /// Brightness pulse drawn only along the screen edges.
    pub struct EdgePulseSettings {
        delay, set_delay: i32 = 50 => delay,
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
    /// Fade the screen color in and out on a beat.
    pub struct BeatFaderSettings {
        true_color, set_true_color: bool = true => verbatim_bool,
        /// Walk the palette instead of flashing one beat color.
        cycle_colors, set_cycle_colors: bool = true => verbatim_bool,
        beat_color, set_beat_color: String = "0;0;255" => color,
        /// Beats per minute.
        delay, set_delay: i32 = 120 => delay,
        max_steps, set_max_steps: i32 = 25 => delay,
        minimum_red_color_level, set_minimum_red_color_level: i32 = 0 => min_level,
        minimum_green_color_level, set_minimum_green_color_level: i32 = 0 => min_level,
        minimum_blue_color_level, set_minimum_blue_color_level: i32 = 0 => min_level,
        minimum_color_level, set_minimum_color_level: i32 = 1 => min_level_nonzero,
        maximum_red_color_level, set_maximum_red_color_level: i32 = 255 => max_level(minimum_red_color_level),
        maximum_green_color_level, set_maximum_green_color_level: i32 = 255 => max_level(minimum_green_color_level),
        maximum_blue_color_level, set_maximum_blue_color_level: i32 = 255 => max_level(minimum_blue_color_level),
        maximum_color_level, set_maximum_color_level: i32 = 255 => max_level(minimum_color_level),
    }
}

saver_settings! {
    /// Pulse the whole screen on a beat.
    pub struct BeatPulseSettings {
        true_color, set_true_color: bool = true => verbatim_bool,
        cycle_colors, set_cycle_colors: bool = true => verbatim_bool,
        beat_color, set_beat_color: String = "0;0;255" => color,
        /// Beats per minute.
        delay, set_delay: i32 = 120 => delay,
        max_steps, set_max_steps: i32 = 25 => delay,
        minimum_red_color_level, set_minimum_red_color_level: i32 = 0 => min_level,
        minimum_green_color_level, set_minimum_green_color_level: i32 = 0 => min_level,
        minimum_blue_color_level, set_minimum_blue_color_level: i32 = 0 => min_level,
        minimum_color_level, set_minimum_color_level: i32 = 1 => min_level_nonzero,
        maximum_red_color_level, set_maximum_red_color_level: i32 = 255 => max_level(minimum_red_color_level),
        maximum_green_color_level, set_maximum_green_color_level: i32 = 255 => max_level(minimum_green_color_level),
        maximum_blue_color_level, set_maximum_blue_color_level: i32 = 255 => max_level(minimum_blue_color_level),
        maximum_color_level, set_maximum_color_level: i32 = 255 => max_level(minimum_color_level),
    }
}

saver_settings! {
    /// Pulse the screen edges on a beat.
    pub struct BeatEdgePulseSettings {
        true_color, set_true_color: bool = true => verbatim_bool,
        cycle_colors, set_cycle_colors: bool = true => verbatim_bool,
        beat_color, set_beat_color: String = "0;0;255" => color,
        /// Beats per minute.
        delay, set_delay: i32 = 120 => delay,
        max_steps, set_max_steps: i32 = 25 => delay,
        minimum_red_color_level, set_minimum_red_color_level: i32 = 0 => min_level,
        minimum_green_color_level, set_minimum_green_color_level: i32 = 0 => min_level,
        minimum_blue_color_level, set_minimum_blue_color_level: i32 = 0 => min_level,
        minimum_color_level, set_minimum_color_level: i32 = 1 => min_level_nonzero,
        maximum_red_color_level, set_maximum_red_color_level: i32 = 255 => max_level(minimum_red_color_level),
        maximum_green_color_level, set_maximum_green_color_level: i32 = 255 => max_level(minimum_green_color_level),
        maximum_blue_color_level, set_maximum_blue_color_level: i32 = 255 => max_level(minimum_blue_color_level),
        maximum_color_level, set_maximum_color_level: i32 = 255 => max_level(minimum_color_level),
    }
}

saver_settings! {
    /// Fade a text banner from black to a random color and back.
    pub struct FaderSettings {
        delay, set_delay: i32 = 50 => delay,
        /// How long the faded-in text stays before fading out, in milliseconds.
        fade_out_delay, set_fade_out_delay: i32 = 3000 => delay,
        write, set_write: String = "Afterglow" => text,
        max_steps, set_max_steps: i32 = 25 => delay,
        background_color, set_background_color: String = "0;0;0" => color,
        minimum_red_color_level, set_minimum_red_color_level: i32 = 0 => min_level,
        minimum_green_color_level, set_minimum_green_color_level: i32 = 0 => min_level,
        minimum_blue_color_level, set_minimum_blue_color_level: i32 = 0 => min_level,
        maximum_red_color_level, set_maximum_red_color_level: i32 = 255 => max_level(minimum_red_color_level),
        maximum_green_color_level, set_maximum_green_color_level: i32 = 255 => max_level(minimum_green_color_level),
        maximum_blue_color_level, set_maximum_blue_color_level: i32 = 255 => max_level(minimum_blue_color_level),
    }
}

saver_settings! {
    /// Fade the whole background through random colors.
    pub struct FaderBackSettings {
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
    /// Flash the screen with a random color, then blank it.
    pub struct FlashColorSettings {
        true_color, set_true_color: bool = true => verbatim_bool,
        delay, set_delay: i32 = 20 => delay,
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
    /// Melt the screen contents cell by cell into colored noise.
    pub struct DissolveSettings {
        true_color, set_true_color: bool = true => verbatim_bool,
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
    /// Sword-beat flasher. Trance mode doubles the tick rate, which relies
    /// on sub-ten-millisecond timers and is therefore Unix-only.
    pub struct ExcaliBeatsSettings {
        true_color, set_true_color: bool = true => verbatim_bool,
        /// Only honored on Unix-like hosts; forced off elsewhere.
        trance_mode, set_trance_mode: bool = false => unix_gated,
        /// Flash on the explicit beat only.
        explicit, set_explicit: bool = true => verbatim_bool,
        beat_color, set_beat_color: String = "0;0;255" => color,
        /// Beats per minute.
        delay, set_delay: i32 = 140 => delay,
        max_steps, set_max_steps: i32 = 25 => delay,
        cycle_colors, set_cycle_colors: bool = false => verbatim_bool,
        minimum_red_color_level, set_minimum_red_color_level: i32 = 0 => min_level,
        minimum_green_color_level, set_minimum_green_color_level: i32 = 0 => min_level,
        minimum_blue_color_level, set_minimum_blue_color_level: i32 = 0 => min_level,
        minimum_color_level, set_minimum_color_level: i32 = 1 => min_level_nonzero,
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
    fn test_beat_fader_level_disallows_zero() {
        let mut fader = BeatFaderSettings::default();
        fader.set_minimum_color_level(0);
        assert_eq!(fader.minimum_color_level(), 1);
        fader.set_minimum_color_level(-10);
        assert_eq!(fader.minimum_color_level(), 1);
        fader.set_minimum_color_level(64);
        assert_eq!(fader.minimum_color_level(), 64);
    }

    #[test]
    fn test_beat_fader_bpm_clamp() {
        let mut fader = BeatFaderSettings::default();
        fader.set_delay(-3);
        assert_eq!(fader.delay(), 120);
    }

    #[test]
    fn test_beat_color_accepts_palette_index() {
        let mut pulse = BeatPulseSettings::default();
        pulse.set_beat_color("196");
        assert_eq!(pulse.beat_color(), "255;0;0");
    }

    #[cfg(unix)]
    #[test]
    fn test_trance_mode_on_unix() {
        let mut beats = ExcaliBeatsSettings::default();
        beats.set_trance_mode(true);
        assert!(beats.trance_mode());
        beats.set_trance_mode(false);
        assert!(!beats.trance_mode());
    }

    #[cfg(not(unix))]
    #[test]
    fn test_trance_mode_forced_off() {
        let mut beats = ExcaliBeatsSettings::default();
        beats.set_trance_mode(true);
        assert!(!beats.trance_mode());
    }

    #[test]
    fn test_fader_text_default() {
        let mut fader = FaderSettings::default();
        fader.set_write("");
        assert_eq!(fader.write(), "Afterglow");
        fader.set_write("hello there");
        assert_eq!(fader.write(), "hello there");
    }

    #[test]
    fn test_min_raise_does_not_reclamp_max() {
        let mut pulse = PulseSettings::default();
        pulse.set_maximum_red_color_level(120);
        pulse.set_minimum_red_color_level(200);
        // Maximum keeps its stored value; flooring happens at assignment only.
        assert_eq!(pulse.maximum_red_color_level(), 120);
    }
}
