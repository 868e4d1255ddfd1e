use super::*;
use crate::storage::MemoryStore;

fn store() -> ProfileStore<MemoryStore> {
    ProfileStore::new(MemoryStore::new())
}

#[test]
fn load_creates_and_persists_fresh_profile() {
    let store = store();
    let profile = store.load().unwrap();

    assert_eq!(profile.metric("explore_page_views"), 0);
    assert_eq!(profile.metric("view_stay_clicks"), 0);
    assert_eq!(profile.metric("searches"), 0);
    assert!(profile.ux.is_none());
    assert_eq!(profile.created_at, profile.last_seen_at);

    let again = store.load().unwrap();
    assert_eq!(again.user_id, profile.user_id);
}

#[test]
fn fresh_user_id_is_a_uuid() {
    let profile = store().load().unwrap();
    assert!(
        uuid::Uuid::parse_str(&profile.user_id).is_ok(),
        "expected a UUID, got {}",
        profile.user_id
    );
}

#[test]
fn fallback_user_id_shape() {
    let id = fallback_user_id();
    let parts: Vec<&str> = id.split('_').collect();
    assert_eq!(parts.len(), 3, "unexpected id {id}");
    assert_eq!(parts[0], "uid");
    assert!(parts[1].parse::<i64>().is_ok());
    assert!(u64::from_str_radix(parts[2], 16).is_ok());
}

#[test]
fn corrupt_profile_is_replaced_not_returned_as_error() {
    let storage = MemoryStore::new();
    storage.set(PROFILE_KEY, "{not json".to_string()).unwrap();
    let store = ProfileStore::new(storage);

    let profile = store.load().unwrap();
    assert_eq!(profile.metric("searches"), 0);

    let persisted = store.storage.get(PROFILE_KEY).unwrap().unwrap();
    let reparsed: Profile = serde_json::from_str(&persisted).unwrap();
    assert_eq!(reparsed.user_id, profile.user_id);
}

#[test]
fn increment_metric_three_times_keeps_user_id() {
    let store = store();
    let user_id = store.load().unwrap().user_id;

    for _ in 0..3 {
        store.increment_metric("searches").unwrap();
    }

    let profile = store.load().unwrap();
    assert_eq!(profile.metric("searches"), 3);
    assert_eq!(profile.user_id, user_id);
}

#[test]
fn increment_metric_creates_unknown_counter() {
    let store = store();
    assert_eq!(store.increment_metric("favorites_added").unwrap(), 1);
    assert_eq!(store.increment_metric("favorites_added").unwrap(), 2);
    assert_eq!(store.load().unwrap().metric("explore_page_views"), 0);
}

#[test]
fn set_ux_score_keeps_running_mean() {
    let store = store();
    store.set_ux_score(4.0).unwrap();
    let stats = store.set_ux_score(2.0).unwrap();

    assert!((stats.avg_score - 3.0).abs() < f64::EPSILON);
    assert_eq!(stats.num_submissions, 2);
    assert!((stats.last_score - 2.0).abs() < f64::EPSILON);
    assert_eq!(store.load().unwrap().ux, Some(stats));
}

#[test]
fn save_bumps_last_seen_at() {
    let store = store();
    let mut profile = store.load().unwrap();
    let created = profile.created_at;
    std::thread::sleep(std::time::Duration::from_millis(5));
    store.save(&mut profile).unwrap();

    assert!(profile.last_seen_at > created);
    assert_eq!(store.load().unwrap().last_seen_at, profile.last_seen_at);
}

#[test]
fn profile_json_uses_wire_field_names() {
    let store = store();
    store.set_ux_score(5.0).unwrap();
    let raw = store.storage.get(PROFILE_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    for field in ["user_id", "created_at", "last_seen_at", "metrics", "ux"] {
        assert!(value.get(field).is_some(), "missing {field} in {raw}");
    }
    assert_eq!(value["ux"]["num_submissions"], 1);
}

#[test]
fn profile_without_ux_omits_block() {
    let store = store();
    store.load().unwrap();
    let raw = store.storage.get(PROFILE_KEY).unwrap().unwrap();
    assert!(!raw.contains("\"ux\""));
}

#[test]
fn loosely_typed_profile_keeps_user_id() {
    let storage = MemoryStore::new();
    storage
        .set(
            PROFILE_KEY,
            r#"{"user_id":"keep-me","created_at":"yesterday","metrics":{"searches":2.0,"view_stay_clicks":"x"},"ux":{"last_score":"bad"}}"#
                .to_string(),
        )
        .unwrap();
    let store = ProfileStore::new(storage);

    let profile = store.load().unwrap();
    assert_eq!(profile.user_id, "keep-me");
    assert_eq!(profile.metric("searches"), 2);
    assert!(!profile.metrics.contains_key("view_stay_clicks"));
    assert!(profile.ux.is_none());

    assert_eq!(store.increment_metric("searches").unwrap(), 3);
    assert_eq!(store.load().unwrap().user_id, "keep-me");
}

#[test]
fn profile_without_user_id_is_replaced() {
    let storage = MemoryStore::new();
    storage
        .set(PROFILE_KEY, r#"{"metrics":{"searches":4}}"#.to_string())
        .unwrap();
    let profile = ProfileStore::new(storage).load().unwrap();
    assert_eq!(profile.metric("searches"), 0);
}
