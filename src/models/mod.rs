//! Plain data shared by the kernel and the adapters.

pub mod handle;
pub mod ids;
pub mod stats;
pub mod theme;

pub use handle::FileHandle;
pub use ids::{FolderId, IdAllocator, TabId};
pub use stats::DocumentStats;
pub use theme::Theme;

#[cfg(test)]
#[path = "../../tests/unit/models/stats.rs"]
mod tests;
