pub mod profile;

pub use profile::{LocalProfiles, PlatformProfile, ProfileConfig, VirtualProfiles};
