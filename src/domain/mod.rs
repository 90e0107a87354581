//! Domain logic - pure version rules independent of git operations

pub mod bump;
pub mod tag;
pub mod version;

pub use bump::BumpKind;
pub use tag::{TagSet, VERSION_TAG_GLOB};
pub use version::Version;
