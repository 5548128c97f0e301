pub mod diff;
pub mod error;
pub mod merge;
pub mod store;
pub mod tree;

pub use diff::detect_missing;
pub use error::StoreError;
pub use merge::merge_into;
pub use tree::{LocaleTree, Mapping};
