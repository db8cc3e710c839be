//! Foldertrail: client-side navigation cache for folder/file trees
//!
//! Keeps an id-keyed index of a server-hosted folder tree so a browsing UI
//! can render breadcrumbs, folder listings, file details and colored
//! category chips without refetching the tree on every navigation.

pub mod api;
pub mod cache;
pub mod colors;
pub mod config;
pub mod error;
pub mod logging;
pub mod session;
pub mod tree;
pub mod types;

pub use error::ApiError;
pub use session::{NavigationSession, OpenOutcome};
