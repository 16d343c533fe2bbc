//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the validation core and an
//! external system (time, filesystem, git, file templates).
//! Implementations live in `src/adapters/`.

pub mod clock;
pub mod filesystem;
pub mod git;
pub mod templates;

pub use clock::Clock;
pub use filesystem::{DirEntry, DirStats, FileSystem, WalkStats};
pub use git::GitRepo;
pub use templates::{ProjectTemplates, RenderedFile};
