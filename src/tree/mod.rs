//! Folder Hierarchy
//!
//! Flattens the nested folder tree served by the API into an id-keyed index
//! and rebuilds root-first ancestor paths from it.

pub mod flatten;
pub mod index;
pub mod path;

pub use flatten::{duplicate_ids, flatten, flatten_root};
pub use index::{FolderMatch, HierarchyIndex};
pub use path::{resolve_path, resolve_path_names};
