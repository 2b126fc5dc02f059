//! Afterglow saver configuration
//!
//! Holds the parameter groups for every screensaver in the pack and enforces
//! per-field validity on write. Loading and saving goes through
//! ~/.config/afterglow/savers.toml; every group is sanitized after parse so
//! the stored state is always renderable. Supports hot-reloading via
//! [`watcher::ConfigWatcher`].

pub mod entries;
pub mod registry;
pub mod rules;
pub mod savers;
pub mod watcher;

pub use entries::{SettingsEntry, entry_for, settings_entries};
pub use savers::*;
pub use watcher::{ConfigEvent, ConfigWatcher};

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default configuration directory name, under ~/.config
const CONFIG_DIR_NAME: &str = "afterglow";
/// Default configuration file name
const CONFIG_FILE_NAME: &str = "savers.toml";

/// The full saver configuration: one section per screensaver effect.
///
/// Groups are independent siblings. Mutation happens through each group's
/// validated setters; [`SaversConfig::sanitize`] re-applies every rule after
/// deserializing, so a hand-edited file is coerced exactly like setter input.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SaversConfig {
    // Rain and particles
    pub matrix: MatrixSettings,
    pub glitter_matrix: GlitterMatrixSettings,
    pub glitter_color: GlitterColorSettings,
    pub starfield: StarfieldSettings,
    pub twinkle: TwinkleSettings,
    pub fireworks: FireworksSettings,
    pub laserbeams: LaserbeamsSettings,
    pub lines: LinesSettings,
    pub lightspeed: LightspeedSettings,

    // Pulses and fades
    pub pulse: PulseSettings,
    pub edge_pulse: EdgePulseSettings,
    pub beat_fader: BeatFaderSettings,
    pub beat_pulse: BeatPulseSettings,
    pub beat_edge_pulse: BeatEdgePulseSettings,
    pub fader: FaderSettings,
    pub fader_back: FaderBackSettings,
    pub flash_color: FlashColorSettings,
    pub dissolve: DissolveSettings,
    pub excali_beats: ExcaliBeatsSettings,

    // Text
    pub marquee: MarqueeSettings,
    pub bouncing_text: BouncingTextSettings,
    pub flash_text: FlashTextSettings,
    pub typo: TypoSettings,
    pub typewriter: TypewriterSettings,
    pub linotypo: LinotypoSettings,
    pub figlet_text: FigletTextSettings,
    pub text_wander: TextWanderSettings,

    // Motion
    pub bouncing_block: BouncingBlockSettings,
    pub spin: SpinSettings,
    pub swivel: SwivelSettings,
    pub trails: TrailsSettings,
    pub point_track: PointTrackSettings,
    pub following: FollowingSettings,
    pub mesmerize: MesmerizeSettings,
    pub snake_fill: SnakeFillSettings,
    pub door_shift: DoorShiftSettings,
    pub wipe: WipeSettings,
    pub lighter: LighterSettings,

    // Bars and boxes
    pub bar_wave: BarWaveSettings,
    pub wave: WaveSettings,
    pub ramp: RampSettings,
    pub stack_box: StackBoxSettings,
    pub square_corner: SquareCornerSettings,
    pub color_mix: ColorMixSettings,
    pub disco: DiscoSettings,

    // Clocks
    pub progress_clock: ProgressClockSettings,
    pub world_clock: WorldClockSettings,
    pub date_and_time: DateAndTimeSettings,

    // Ambience
    pub siren: SirenSettings,
    pub theme_cycle: ThemeCycleSettings,
}

impl SaversConfig {
    /// Load configuration from the default path, creating it if missing.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            log::info!("Savers config not found, creating default at {:?}", config_path);
            Self::create_default_config()?;
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific path and sanitize it.
    pub fn load_from(path: &PathBuf) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::Read(path.clone(), e))?;

        let mut config: SaversConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(path.clone(), e))?;
        config.sanitize();

        log::info!("Loaded savers configuration from {:?}", path);
        Ok(config)
    }

    /// Re-apply every field rule across every group.
    pub fn sanitize(&mut self) {
        self.matrix.sanitize();
        self.glitter_matrix.sanitize();
        self.glitter_color.sanitize();
        self.starfield.sanitize();
        self.twinkle.sanitize();
        self.fireworks.sanitize();
        self.laserbeams.sanitize();
        self.lines.sanitize();
        self.lightspeed.sanitize();
        self.pulse.sanitize();
        self.edge_pulse.sanitize();
        self.beat_fader.sanitize();
        self.beat_pulse.sanitize();
        self.beat_edge_pulse.sanitize();
        self.fader.sanitize();
        self.fader_back.sanitize();
        self.flash_color.sanitize();
        self.dissolve.sanitize();
        self.excali_beats.sanitize();
        self.marquee.sanitize();
        self.bouncing_text.sanitize();
        self.flash_text.sanitize();
        self.typo.sanitize();
        self.typewriter.sanitize();
        self.linotypo.sanitize();
        self.figlet_text.sanitize();
        self.text_wander.sanitize();
        self.bouncing_block.sanitize();
        self.spin.sanitize();
        self.swivel.sanitize();
        self.trails.sanitize();
        self.point_track.sanitize();
        self.following.sanitize();
        self.mesmerize.sanitize();
        self.snake_fill.sanitize();
        self.door_shift.sanitize();
        self.wipe.sanitize();
        self.lighter.sanitize();
        self.bar_wave.sanitize();
        self.wave.sanitize();
        self.ramp.sanitize();
        self.stack_box.sanitize();
        self.square_corner.sanitize();
        self.color_mix.sanitize();
        self.disco.sanitize();
        self.progress_clock.sanitize();
        self.world_clock.sanitize();
        self.date_and_time.sanitize();
        self.siren.sanitize();
        self.theme_cycle.sanitize();
    }

    /// Get the configuration directory path (~/.config/afterglow)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDirectory)?;
        Ok(home.join(".config").join(CONFIG_DIR_NAME))
    }

    /// Get the configuration file path (~/.config/afterglow/savers.toml)
    pub fn config_file_path() -> Result<PathBuf, ConfigError> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Create the default configuration file and directory structure
    pub fn create_default_config() -> Result<(), ConfigError> {
        let config_dir = Self::config_dir()?;
        let config_path = Self::config_file_path()?;

        fs::create_dir_all(&config_dir)
            .map_err(|e| ConfigError::CreateDir(config_dir.clone(), e))?;

        let default_config = SaversConfig::default();
        default_config.save_to(&config_path)?;

        log::info!("Created default savers configuration at {:?}", config_path);
        Ok(())
    }

    /// Save the configuration to the default path.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Save the configuration to a specific path as commented TOML.
    pub fn save_to(&self, path: &PathBuf) -> Result<(), ConfigError> {
        let toml_content =
            toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;

        let content = format!(
            "# Afterglow screensaver settings\n\
             #\n\
             # Color levels are 0-255; a maximum is floored at its paired\n\
             # minimum. Delays are positive milliseconds (beats per minute\n\
             # for the beat savers). Out-of-range values are coerced on load.\n\
             \n\
             {toml_content}"
        );

        fs::write(path, content).map_err(|e| ConfigError::Write(path.clone(), e))?;
        Ok(())
    }
}

/// Configuration errors
#[derive(Debug)]
pub enum ConfigError {
    /// Home directory not found
    NoHomeDirectory,
    /// Failed to read config file
    Read(PathBuf, std::io::Error),
    /// Failed to parse config file
    Parse(PathBuf, toml::de::Error),
    /// Failed to serialize config
    Serialize(toml::ser::Error),
    /// Failed to write config file
    Write(PathBuf, std::io::Error),
    /// Failed to create directory
    CreateDir(PathBuf, std::io::Error),
    /// Failed to set up file watcher
    Watch(String),
    /// Failed to parse the settings-entry resource
    Entries(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NoHomeDirectory => write!(f, "Could not determine home directory"),
            ConfigError::Read(path, e) => write!(f, "Failed to read {:?}: {}", path, e),
            ConfigError::Parse(path, e) => write!(f, "Failed to parse {:?}: {}", path, e),
            ConfigError::Serialize(e) => write!(f, "Failed to serialize config: {}", e),
            ConfigError::Write(path, e) => write!(f, "Failed to write {:?}: {}", path, e),
            ConfigError::CreateDir(path, e) => write!(f, "Failed to create {:?}: {}", path, e),
            ConfigError::Watch(e) => write!(f, "Failed to watch files: {}", e),
            ConfigError::Entries(e) => write!(f, "Failed to parse settings entries: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SaversConfig::default();
        assert_eq!(config.matrix.delay(), 10);
        assert_eq!(config.disco.delay(), 100);
        assert_eq!(config.figlet_text.font(), "small");
        assert_eq!(config.siren.style(), "Cop");
        assert!(!config.excali_beats.trance_mode());
        assert_eq!(config.marquee.write(), "Afterglow");
    }

    #[test]
    fn test_serialize_deserialize() {
        let config = SaversConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: SaversConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_config() {
        let partial = r#"
            [matrix]
            delay = 42
        "#;
        let mut config: SaversConfig = toml::from_str(partial).unwrap();
        config.sanitize();
        assert_eq!(config.matrix.delay(), 42);
        // Other sections keep their defaults
        assert_eq!(config.disco.delay(), 100);
    }

    #[test]
    fn test_sanitize_coerces_out_of_range() {
        let edited = r#"
            [matrix]
            delay = -5

            [glitter_color]
            minimum_red_color_level = 300
            maximum_red_color_level = -1

            [figlet_text]
            font = "imaginary"
        "#;
        let mut config: SaversConfig = toml::from_str(edited).unwrap();
        config.sanitize();
        assert_eq!(config.matrix.delay(), 10);
        assert_eq!(config.glitter_color.minimum_red_color_level(), 255);
        // Maximum is clamped, then floored at the sanitized minimum.
        assert_eq!(config.glitter_color.maximum_red_color_level(), 255);
        assert_eq!(config.figlet_text.font(), "small");
    }

    #[test]
    fn test_every_group_has_a_settings_entry() {
        let toml_str = toml::to_string(&SaversConfig::default()).unwrap();
        let document: toml::Table = toml::from_str(&toml_str).unwrap();
        for section in document.keys() {
            assert!(
                entry_for(section).unwrap().is_some(),
                "no settings entry for section {section}"
            );
        }
    }
}
