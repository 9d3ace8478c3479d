//! End-to-end training and snapshot round-trip tests

use tempfile::tempdir;
use ticlearn::{
    PolicyTable,
    training::{TrainingConfig, TrainingSession},
};

fn train(episodes: usize, seed: u64) -> PolicyTable {
    let config = TrainingConfig {
        episodes,
        seed: Some(seed),
        ..Default::default()
    };
    let mut table = PolicyTable::new();
    TrainingSession::new(config)
        .run(&mut table)
        .expect("training should succeed");
    table
}

#[test]
fn trained_table_survives_save_and_reload_unchanged() {
    let table = train(200, 42);
    assert!(table.len() > 10, "200 episodes should discover many states");

    let tmp = tempdir().unwrap();
    let path = tmp.path().join("policy.txt");

    table.save_to_path(&path).unwrap();
    let reloaded = PolicyTable::load_from_path(&path).unwrap();

    assert_eq!(reloaded, table);
}

#[test]
fn saving_a_reloaded_table_produces_an_identical_file() {
    let table = train(100, 7);

    let tmp = tempdir().unwrap();
    let first = tmp.path().join("first.txt");
    let second = tmp.path().join("second.txt");

    table.save_to_path(&first).unwrap();
    let reloaded = PolicyTable::load_from_path(&first).unwrap();
    reloaded.save_to_path(&second).unwrap();

    let a = std::fs::read_to_string(&first).unwrap();
    let b = std::fs::read_to_string(&second).unwrap();
    assert_eq!(a, b);
}

#[test]
fn training_continues_from_a_loaded_snapshot() {
    let table = train(50, 3);

    let tmp = tempdir().unwrap();
    let path = tmp.path().join("policy.txt");
    table.save_to_path(&path).unwrap();

    let mut resumed = PolicyTable::load_from_path(&path).unwrap();
    let states_before = resumed.len();

    let config = TrainingConfig {
        episodes: 50,
        seed: Some(4),
        ..Default::default()
    };
    let result = TrainingSession::new(config).run(&mut resumed).unwrap();

    assert_eq!(result.total_episodes, 50);
    assert!(resumed.len() >= states_before);
}

#[test]
fn summary_json_matches_training_result() {
    let config = TrainingConfig {
        episodes: 25,
        seed: Some(9),
        ..Default::default()
    };
    let mut table = PolicyTable::new();
    let result = TrainingSession::new(config).run(&mut table).unwrap();

    let tmp = tempdir().unwrap();
    let path = tmp.path().join("summary.json");
    result.save(&path).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(parsed["total_episodes"], 25);
    assert_eq!(
        parsed["wins"].as_u64().unwrap()
            + parsed["losses"].as_u64().unwrap()
            + parsed["draws"].as_u64().unwrap(),
        25
    );
}
