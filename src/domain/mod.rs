//! Domain logic - pure version and tag rules independent of git and the filesystem

pub mod prerelease;
pub mod tag;
pub mod timestamp;
pub mod version;

pub use prerelease::PreReleaseType;
pub use tag::{Tag, TagScheme};
pub use timestamp::VersionSource;
pub use version::{classify, normalize, Channel, ReleaseVersion};
