//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod build_profile;
mod config_warning;
mod embed_source;
mod hash;

pub use build_profile::BuildProfile;
pub use config_warning::ConfigWarning;
pub use embed_source::EmbedSource;
pub use hash::ContentHash;
