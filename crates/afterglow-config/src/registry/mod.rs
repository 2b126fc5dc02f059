//! Bundled name registries
//!
//! The figlet fonts, siren styles, and themes that ship with the pack. Saver
//! settings that select a resource by name validate against these tables and
//! fall back to the registry default when the name is unknown.

pub mod fonts;
pub mod sirens;
pub mod themes;
