// Integration tests for catalog loading and interaction tracking

use std::fs;

use serde_json::json;
use tempfile::tempdir;

use meeple::storage::{load_catalog, load_projection};
use meeple::track::InteractionTracker;

fn game(id: u64, name: &str) -> serde_json::Value {
	json!({
		"id": id,
		"name": name,
		"embedding": [0.1, 0.2, 0.7],
		"themes": [1.0, 0.0],
		"categories": [0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
		"cluster_tag": [0.0, 1.0],
		"num_user_ratings": 321,
		"bayes_avg_rating": 7.4
	})
}

#[test]
fn catalog_round_trips_through_json() {
	let dir = tempdir().unwrap();
	let path = dir.path().join("games.json");
	fs::write(
		&path,
		serde_json::to_string(&json!([game(1, "Root"), game(2, "Scythe")])).unwrap(),
	)
	.unwrap();

	let catalog = load_catalog(&path).unwrap();
	assert_eq!(catalog.len(), 2);
	assert_eq!(catalog.get(2).unwrap().name, "Scythe");
	assert_eq!(catalog.embedding_dim(), Some(3));
}

#[test]
fn mismatched_dimensions_fail_validation() {
	let dir = tempdir().unwrap();
	let path = dir.path().join("games.json");

	let mut bad = game(2, "Scythe");
	bad["embedding"] = json!([0.1, 0.2]);
	fs::write(
		&path,
		serde_json::to_string(&json!([game(1, "Root"), bad])).unwrap(),
	)
	.unwrap();

	let err = load_catalog(&path).unwrap_err();
	assert!(err.to_string().contains("Invalid catalog"));
}

#[test]
fn duplicate_ids_fail_validation() {
	let dir = tempdir().unwrap();
	let path = dir.path().join("games.json");
	fs::write(
		&path,
		serde_json::to_string(&json!([game(1, "Root"), game(1, "Scythe")])).unwrap(),
	)
	.unwrap();

	assert!(load_catalog(&path).is_err());
}

#[test]
fn projection_files_map_ids_to_points() {
	let dir = tempdir().unwrap();
	let path = dir.path().join("points.json");
	fs::write(&path, r#"{"1": [0.5, -1.5], "2": [3.0, 4.0]}"#).unwrap();

	let projection = load_projection(&path).unwrap();
	assert_eq!(projection.len(), 2);
	assert_eq!(projection[&1], [0.5, -1.5]);
}

#[test]
fn tracker_appends_one_json_line_per_event() {
	let dir = tempdir().unwrap();
	let path = dir.path().join("events.jsonl");

	let mut tracker = InteractionTracker::create(&path, "user-7").unwrap();
	tracker
		.track("games_selected", json!({ "names": ["Root"] }))
		.unwrap();
	tracker
		.track("recommendations_displayed", json!({ "Root": ["Scythe"] }))
		.unwrap();

	let content = fs::read_to_string(&path).unwrap();
	let lines: Vec<&str> = content.lines().collect();
	assert_eq!(lines.len(), 2);

	let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
	assert_eq!(first["event_type"], "games_selected");
	assert_eq!(first["user_id"], "user-7");
	assert_eq!(first["session_id"], tracker.session_id());
	assert!(first["timestamp"].as_str().unwrap().contains('T'));

	let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
	assert_eq!(second["details"]["Root"][0], "Scythe");
	assert_ne!(first["event_id"], second["event_id"]);
}

#[test]
fn tracker_sessions_append_to_the_same_file() {
	let dir = tempdir().unwrap();
	let path = dir.path().join("events.jsonl");

	let mut a = InteractionTracker::create(&path, "user-7").unwrap();
	a.track("games_selected", json!({})).unwrap();
	drop(a);

	let mut b = InteractionTracker::create(&path, "user-7").unwrap();
	b.track("games_selected", json!({})).unwrap();

	let content = fs::read_to_string(&path).unwrap();
	assert_eq!(content.lines().count(), 2);
}
