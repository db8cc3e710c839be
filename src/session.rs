//! Navigation Session
//!
//! One [`NavigationSession`] per browsing session. It owns the hierarchy
//! index, the file detail cache, the category colors and the current view
//! state, and is the only thing that writes them.
//!
//! Every operation fetches first and commits after, so a failed fetch leaves
//! the previous state in place. Locks are only held for the commit itself,
//! never across an `.await`; overlapping calls on one task therefore
//! interleave at their fetches.

use crate::api::{HttpTreeApi, TreeApi};
use crate::cache::DetailCache;
use crate::colors::CategoryColors;
use crate::config::{NavConfig, SessionConfig};
use crate::error::ApiError;
use crate::tree::{duplicate_ids, flatten, resolve_path, FolderMatch, HierarchyIndex};
use crate::types::{Breadcrumb, EntityId, FileDetail, FolderListing};
use parking_lot::{Mutex, RwLock};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// What happened to a successfully fetched folder listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    /// Listing and breadcrumb now show the opened folder
    Applied,
    /// A newer `open_folder` had already been applied; this response was dropped
    DiscardedStale,
}

#[derive(Debug, Default)]
struct ViewState {
    current_folder_id: Option<EntityId>,
    listing: FolderListing,
    breadcrumb: Breadcrumb,
    current_file: Option<Arc<FileDetail>>,
    file_breadcrumbs: Vec<Breadcrumb>,
    /// Sequence number of the last applied `open_folder`
    applied_open_seq: u64,
}

/// Navigation state for a single browsing session
pub struct NavigationSession {
    api: Arc<dyn TreeApi>,
    /// `None` until the first successful full-tree load
    index: RwLock<Option<Arc<HierarchyIndex>>>,
    details: RwLock<DetailCache<FileDetail>>,
    colors: Mutex<CategoryColors>,
    view: RwLock<ViewState>,
    open_seq: AtomicU64,
    discard_stale_responses: bool,
}

impl NavigationSession {
    pub fn new(api: Arc<dyn TreeApi>, config: &SessionConfig) -> Result<Self, ApiError> {
        config.validate()?;
        Ok(Self {
            api,
            index: RwLock::new(None),
            details: RwLock::new(DetailCache::new()),
            colors: Mutex::new(CategoryColors::with_palette(config.palette.clone())?),
            view: RwLock::new(ViewState::default()),
            open_seq: AtomicU64::new(0),
            discard_stale_responses: config.discard_stale_responses,
        })
    }

    /// Build a session talking HTTP to the configured API
    pub fn from_config(config: &NavConfig) -> Result<Self, ApiError> {
        config.validate()?;
        let api = HttpTreeApi::new(&config.api)?;
        Self::new(Arc::new(api), &config.session)
    }

    /// Fetch the full tree and replace the hierarchy index.
    ///
    /// Returns the number of folders in the new index.
    pub async fn load_full_tree(&self) -> Result<usize, ApiError> {
        let forest = self.api.fetch_tree().await?;
        let entries = flatten(&forest);
        let duplicates = duplicate_ids(&entries);
        if !duplicates.is_empty() {
            warn!(ids = ?duplicates, "Folder tree repeats ids; last entry wins");
        }
        let index = Arc::new(HierarchyIndex::build(entries));
        let folders = index.len();
        let overwritten = index.duplicate_count();
        *self.index.write() = Some(index);
        info!(folders, overwritten, "Hierarchy index rebuilt");
        Ok(folders)
    }

    /// Fetch a folder's children and show them with the folder's breadcrumb.
    ///
    /// The breadcrumb is resolved against the index as it is when the
    /// response arrives; it is empty if the index was never built or does not
    /// know the folder. Overlapping calls apply in the order they settle,
    /// unless stale-response discarding is enabled; a call's place in the
    /// issue order is taken when its future is first polled.
    pub async fn open_folder(&self, folder_id: EntityId) -> Result<OpenOutcome, ApiError> {
        let seq = self.open_seq.fetch_add(1, Ordering::SeqCst) + 1;
        let listing = self.api.fetch_children(&folder_id).await?;
        let breadcrumb = self.resolve_path(&folder_id);

        let mut view = self.view.write();
        if self.discard_stale_responses && seq < view.applied_open_seq {
            warn!(
                folder_id = %folder_id,
                seq,
                applied = view.applied_open_seq,
                "Discarding stale folder listing"
            );
            return Ok(OpenOutcome::DiscardedStale);
        }
        debug!(
            folder_id = %folder_id,
            folders = listing.folders.len(),
            files = listing.files.len(),
            depth = breadcrumb.len(),
            "Opened folder"
        );
        view.current_folder_id = Some(folder_id);
        view.listing = listing;
        view.breadcrumb = breadcrumb;
        view.applied_open_seq = seq;
        Ok(OpenOutcome::Applied)
    }

    /// Load a file's detail, from cache when possible.
    ///
    /// On a miss the detail is fetched, and the full tree too if the index
    /// has never been built, before anything is stored. The file's
    /// breadcrumbs (one per folder it is filed under) are recomputed either way.
    pub async fn load_file_detail(&self, file_id: EntityId) -> Result<Arc<FileDetail>, ApiError> {
        let cached = self.details.read().get(&file_id);
        let detail = match cached {
            Some(detail) => {
                debug!(file_id = %file_id, "File detail cache hit");
                detail
            }
            None => {
                debug!(file_id = %file_id, "File detail cache miss");
                let fetched = self.api.fetch_file_detail(&file_id).await?;
                if !self.is_index_built() {
                    self.load_full_tree().await?;
                }
                let detail = Arc::new(fetched);
                self.details.write().store(file_id.clone(), detail.clone());
                detail
            }
        };

        let breadcrumbs: Vec<Breadcrumb> = detail
            .folder_ids
            .iter()
            .map(|folder_id| self.resolve_path(folder_id))
            .collect();
        let mut view = self.view.write();
        view.current_file = Some(detail.clone());
        view.file_breadcrumbs = breadcrumbs;
        Ok(detail)
    }

    /// Color token for a category chip
    pub fn color_for(&self, category: &str) -> String {
        self.colors.lock().color_for(category)
    }

    /// Ancestor path of any folder against the current index
    pub fn resolve_path(&self, folder_id: &EntityId) -> Breadcrumb {
        match self.index() {
            Some(index) => resolve_path(folder_id, &index),
            None => Vec::new(),
        }
    }

    /// Folders whose name contains `query`, with their full paths
    pub fn search_folders(&self, query: &str) -> Vec<FolderMatch> {
        self.index()
            .map(|index| index.search(query))
            .unwrap_or_default()
    }

    /// Snapshot of the current index; stays valid across later rebuilds
    pub fn index(&self) -> Option<Arc<HierarchyIndex>> {
        self.index.read().clone()
    }

    pub fn is_index_built(&self) -> bool {
        self.index.read().is_some()
    }

    pub fn cached_detail(&self, file_id: &EntityId) -> Option<Arc<FileDetail>> {
        self.details.read().get(file_id)
    }

    pub fn current_folder_id(&self) -> Option<EntityId> {
        self.view.read().current_folder_id.clone()
    }

    pub fn listing(&self) -> FolderListing {
        self.view.read().listing.clone()
    }

    pub fn breadcrumb(&self) -> Breadcrumb {
        self.view.read().breadcrumb.clone()
    }

    pub fn breadcrumb_names(&self) -> Vec<String> {
        self.view
            .read()
            .breadcrumb
            .iter()
            .map(|entry| entry.name.clone())
            .collect()
    }

    pub fn current_file(&self) -> Option<Arc<FileDetail>> {
        self.view.read().current_file.clone()
    }

    pub fn file_breadcrumbs(&self) -> Vec<Breadcrumb> {
        self.view.read().file_breadcrumbs.clone()
    }
}
