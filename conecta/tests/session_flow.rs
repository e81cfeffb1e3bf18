//! End-to-end flows over a real on-disk session database: a seeded demo
//! session survives a store restart, and the discovery screen queries behave
//! as the UI expects.

use conecta::database::SessionDatabase;
use conecta::models::StoredProfile;
use conecta::{ConectaStore, ConectaStoreApi, FilterCriteria};
use demo_data::{DEMO_COMPLETIONS, DEMO_PROFILE};
use tempfile::TempDir;

// Nothing listens here; these tests never reach the network
const UNREACHABLE_API: &str = "http://127.0.0.1:1/api/usuario";

fn demo_profile() -> StoredProfile {
    StoredProfile::new(
        DEMO_PROFILE.user_id,
        DEMO_PROFILE.name.to_string(),
        DEMO_PROFILE.email.to_string(),
        Some(DEMO_PROFILE.role.to_string()),
    )
}

#[test]
fn seeded_session_is_visible_to_a_fresh_store() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("session.sqlite");

    // Seed the database the way the data-gen tool does
    {
        let db = SessionDatabase::open(&db_path).unwrap();
        db.save_profile(&demo_profile()).unwrap();
        for completion in DEMO_COMPLETIONS {
            db.set_tutorial_completed(completion.tutorial_id, true).unwrap();
        }
    }

    let store = ConectaStore::new(
        db_path.to_string_lossy().to_string(),
        UNREACHABLE_API.to_string(),
    )
    .unwrap();

    let profile = store.current_profile().unwrap().expect("seeded profile");
    assert_eq!(profile.name, DEMO_PROFILE.name);
    assert_eq!(profile.initials, "AS");

    let stats = store.profile_stats().unwrap();
    assert_eq!(stats.completed_tutorials as usize, DEMO_COMPLETIONS.len());
}

#[test]
fn sign_out_clears_the_persisted_session() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("session.sqlite");

    {
        let db = SessionDatabase::open(&db_path).unwrap();
        db.save_profile(&demo_profile()).unwrap();
    }

    let path_string = db_path.to_string_lossy().to_string();
    let store = ConectaStore::new(path_string.clone(), UNREACHABLE_API.to_string()).unwrap();
    assert!(store.current_profile().unwrap().is_some());
    store.sign_out().unwrap();
    assert!(store.current_profile().unwrap().is_none());
    drop(store);

    // A fresh store sees the cleared session too
    let reopened = ConectaStore::new(path_string, UNREACHABLE_API.to_string()).unwrap();
    assert!(reopened.current_profile().unwrap().is_none());
}

#[test]
fn tutorial_progress_survives_restart() {
    let dir = TempDir::new().unwrap();
    let path_string = dir
        .path()
        .join("session.sqlite")
        .to_string_lossy()
        .to_string();

    {
        let store = ConectaStore::new(path_string.clone(), UNREACHABLE_API.to_string()).unwrap();
        store.set_tutorial_completed(1, true).unwrap();
        store.set_tutorial_completed(102, true).unwrap();
    }

    let store = ConectaStore::new(path_string, UNREACHABLE_API.to_string()).unwrap();
    let mut completed = store.completed_tutorial_ids().unwrap();
    completed.sort_unstable();
    assert_eq!(completed, vec![1, 102]);
}

#[test]
fn discovery_screen_filter_scenarios() {
    let dir = TempDir::new().unwrap();
    let path_string = dir
        .path()
        .join("session.sqlite")
        .to_string_lossy()
        .to_string();
    let store = ConectaStore::new(path_string, UNREACHABLE_API.to_string()).unwrap();

    // Typing "gpt" in the search box finds ChatGPT
    let by_text = store.search_catalog(FilterCriteria {
        search_text: "gpt".to_string(),
        ..Default::default()
    });
    assert_eq!(by_text.len(), 1);
    assert_eq!(by_text[0].title, "ChatGPT");

    // Image + Free chips together keep only free image tools
    let image_free = store.search_catalog(FilterCriteria {
        category: Some("Image".to_string()),
        price_tier: Some("Free".to_string()),
        ..Default::default()
    });
    assert!(!image_free.is_empty());
    assert!(image_free.iter().all(|e| e.category == conecta::Category::Image));

    // A query matching nothing is an empty list, not an error
    let nothing = store.search_catalog(FilterCriteria {
        search_text: "definitely not a tool".to_string(),
        ..Default::default()
    });
    assert!(nothing.is_empty());

    // Clearing filters brings the whole catalog back
    let everything = store.search_catalog(FilterCriteria::default());
    assert_eq!(everything.len(), store.category_summaries().iter().map(|s| s.count as usize).sum::<usize>());
}
