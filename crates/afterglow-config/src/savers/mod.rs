//! Saver settings groups
//!
//! One struct per screensaver effect, declared through the `saver_settings!`
//! macro so every field carries an explicit validation rule. Groups are
//! independent siblings; the only cross-field coupling is a maximum color
//! level flooring at its paired minimum.

pub mod ambience;
pub mod bars;
pub mod clock;
pub mod motion;
pub mod pulse;
pub mod rain;
pub mod text;

pub use ambience::{SirenSettings, ThemeCycleSettings};
pub use bars::{
    BarWaveSettings, ColorMixSettings, DiscoSettings, RampSettings, SquareCornerSettings,
    StackBoxSettings, WaveSettings,
};
pub use clock::{DateAndTimeSettings, ProgressClockSettings, WorldClockSettings};
pub use motion::{
    BouncingBlockSettings, DoorShiftSettings, FollowingSettings, LighterSettings,
    MesmerizeSettings, PointTrackSettings, SnakeFillSettings, SpinSettings, SwivelSettings,
    TrailsSettings, WipeSettings,
};
pub use pulse::{
    BeatEdgePulseSettings, BeatFaderSettings, BeatPulseSettings, DissolveSettings,
    EdgePulseSettings, ExcaliBeatsSettings, FaderBackSettings, FaderSettings, FlashColorSettings,
    PulseSettings,
};
pub use rain::{
    FireworksSettings, GlitterColorSettings, GlitterMatrixSettings, LaserbeamsSettings,
    LightspeedSettings, LinesSettings, MatrixSettings, StarfieldSettings, TwinkleSettings,
};
pub use text::{
    BouncingTextSettings, FigletTextSettings, FlashTextSettings, LinotypoSettings,
    MarqueeSettings, TextWanderSettings, TypewriterSettings, TypoSettings,
};
