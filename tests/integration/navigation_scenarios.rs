use std::sync::atomic::Ordering;
use std::sync::Arc;

use foldertrail::colors::DEFAULT_PALETTE;
use foldertrail::config::SessionConfig;
use foldertrail::tree::{flatten, resolve_path, HierarchyIndex};
use foldertrail::types::{EntityId, FolderNode};
use foldertrail::{ApiError, NavigationSession, OpenOutcome};

use super::support::{listing, sample_tree, ScriptedApi};

fn session_with(api: Arc<ScriptedApi>) -> NavigationSession {
    NavigationSession::new(api, &SessionConfig::default()).unwrap()
}

#[test]
fn flattened_sample_tree_resolves_root_first() {
    let index = HierarchyIndex::build(flatten(&sample_tree()));
    let path = resolve_path(&EntityId::from("3"), &index);
    let ids: Vec<&str> = path.iter().map(|e| e.id.as_str()).collect();
    let names: Vec<&str> = path.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
    assert_eq!(names, vec!["root", "docs", "reports"]);
    assert!(resolve_path(&EntityId::from("99"), &index).is_empty());
}

#[tokio::test]
async fn open_folder_shows_listing_and_breadcrumb() {
    let api = Arc::new(ScriptedApi::with_tree(sample_tree()));
    api.children.lock().insert(
        EntityId::from("3"),
        listing("3", &["2023", "2024"], &["q3.pdf"]),
    );
    let session = session_with(api.clone());

    assert_eq!(session.load_full_tree().await.unwrap(), 3);
    let outcome = session.open_folder(EntityId::from("3")).await.unwrap();

    assert_eq!(outcome, OpenOutcome::Applied);
    assert_eq!(session.breadcrumb_names(), vec!["root", "docs", "reports"]);
    let shown = session.listing();
    assert_eq!(shown.folders.len(), 2);
    assert_eq!(shown.files[0].name, "q3.pdf");
}

#[tokio::test]
async fn open_folder_does_not_refetch_tree() {
    let api = Arc::new(ScriptedApi::with_tree(sample_tree()));
    let session = session_with(api.clone());
    session.load_full_tree().await.unwrap();

    for id in ["1", "2", "3", "2"] {
        session.open_folder(EntityId::from(id)).await.unwrap();
    }

    assert_eq!(api.tree_calls.load(Ordering::SeqCst), 1);
    assert_eq!(api.children_calls.load(Ordering::SeqCst), 4);
    assert_eq!(session.breadcrumb_names(), vec!["root", "docs"]);
}

#[tokio::test]
async fn unknown_folder_gets_empty_breadcrumb() {
    let api = Arc::new(ScriptedApi::with_tree(sample_tree()));
    let session = session_with(api);
    session.load_full_tree().await.unwrap();

    session.open_folder(EntityId::from("99")).await.unwrap();
    assert_eq!(session.current_folder_id(), Some(EntityId::from("99")));
    assert!(session.breadcrumb().is_empty());
}

#[tokio::test]
async fn failed_tree_load_keeps_previous_index() {
    let api = Arc::new(ScriptedApi::with_tree(sample_tree()));
    let session = session_with(api.clone());
    session.load_full_tree().await.unwrap();
    let before = session.index().unwrap();

    api.fail_tree.store(true, Ordering::SeqCst);
    let err = session.load_full_tree().await.unwrap_err();

    assert!(matches!(err, ApiError::Transport(_)));
    assert!(Arc::ptr_eq(&before, &session.index().unwrap()));
}

#[tokio::test]
async fn failed_children_fetch_keeps_listing() {
    let api = Arc::new(ScriptedApi::with_tree(sample_tree()));
    api.children
        .lock()
        .insert(EntityId::from("2"), listing("2", &["reports"], &[]));
    let session = session_with(api.clone());
    session.load_full_tree().await.unwrap();
    session.open_folder(EntityId::from("2")).await.unwrap();

    api.fail_children.store(true, Ordering::SeqCst);
    assert!(session.open_folder(EntityId::from("3")).await.is_err());

    assert_eq!(session.current_folder_id(), Some(EntityId::from("2")));
    assert_eq!(session.listing().folders[0].name, "reports");
    assert_eq!(session.breadcrumb_names(), vec!["root", "docs"]);
}

#[tokio::test]
async fn rebuild_swaps_index_without_touching_old_snapshot() {
    let api = Arc::new(ScriptedApi::with_tree(sample_tree()));
    let session = session_with(api.clone());
    session.load_full_tree().await.unwrap();
    let old = session.index().unwrap();

    *api.tree.lock() = vec![FolderNode::new("1", "renamed root", None)];
    assert_eq!(session.load_full_tree().await.unwrap(), 1);

    assert_eq!(old.len(), 3);
    assert_eq!(old.get(&EntityId::from("1")).unwrap().name, "root");
    let new = session.index().unwrap();
    assert_eq!(new.get(&EntityId::from("1")).unwrap().name, "renamed root");
    assert!(session.resolve_path(&EntityId::from("3")).is_empty());
}

#[tokio::test]
async fn duplicate_ids_resolve_to_last_entry() {
    let tree = vec![
        FolderNode::new("a", "first a", None),
        FolderNode::new("b", "b", None)
            .with_children(vec![FolderNode::new("a", "second a", Some(EntityId::from("b")))]),
    ];
    let session = session_with(Arc::new(ScriptedApi::with_tree(tree)));
    assert_eq!(session.load_full_tree().await.unwrap(), 2);

    let index = session.index().unwrap();
    assert_eq!(index.duplicate_count(), 1);
    let names: Vec<String> = session
        .resolve_path(&EntityId::from("a"))
        .into_iter()
        .map(|e| e.name)
        .collect();
    assert_eq!(names, vec!["b", "second a"]);
}

#[tokio::test]
async fn search_folders_reports_full_paths() {
    let session = session_with(Arc::new(ScriptedApi::with_tree(sample_tree())));
    assert!(session.search_folders("rep").is_empty());

    session.load_full_tree().await.unwrap();
    let hits = session.search_folders("REP");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].full_path, vec!["root", "docs", "reports"]);
}

#[tokio::test]
async fn category_colors_follow_first_sighting() {
    let session = session_with(Arc::new(ScriptedApi::default()));
    let seen: Vec<String> = ["Invoice", "Report", "Invoice"]
        .iter()
        .map(|c| session.color_for(c))
        .collect();
    assert_eq!(seen, vec![DEFAULT_PALETTE[0], DEFAULT_PALETTE[1], DEFAULT_PALETTE[0]]);

    for i in 2..8 {
        session.color_for(&format!("extra-{}", i));
    }
    assert_eq!(session.color_for("ninth"), DEFAULT_PALETTE[0]);
}
