//! Unit tests for the task board.


use crate::board::{
    domain::{Lane, RemoteTodo, Task},
    services::{LaneProjector, TaskStore},
};
use std::collections::HashSet;

/// Upstream records used across tests: ids 1..=5, two of them completed.
pub(super) fn sample_records() -> Vec<RemoteTodo> {
    vec![
        RemoteTodo::new(1, "Do something nice for someone you care about", false),
        RemoteTodo::new(2, "Memorize a poem", true),
        RemoteTodo::new(3, "Watch a classic movie", false),
        RemoteTodo::new(4, "Watch a documentary", true),
        RemoteTodo::new(5, "Invest in cryptocurrency", false),
    ]
}

/// Returns a store loaded with [`sample_records`].
pub(super) fn loaded_store() -> TaskStore {
    let mut store = TaskStore::new();
    store
        .load(sample_records())
        .expect("sample records should load");
    store
}

/// Checks status consistency, identifier uniqueness, and lane partitioning.
pub(super) fn assert_board_invariants(store: &TaskStore) {
    for task in store.tasks() {
        assert_eq!(task.completed(), task.lane() == Lane::Completed);
        let record = serde_json::to_value(task).expect("task serialises");
        let completed = record.get("completed").and_then(serde_json::Value::as_bool);
        let status = record.get("status").and_then(serde_json::Value::as_str);
        assert_eq!(completed, Some(status == Some("completed")));
    }

    let unique: HashSet<_> = store.tasks().iter().map(Task::id).collect();
    assert_eq!(unique.len(), store.len(), "task identifiers must be unique");

    let board = LaneProjector::project(store.tasks());
    assert_eq!(board.total(), store.len());
    let mut seen = HashSet::new();
    for lane in Lane::ALL {
        for task in board.lane(lane).iter() {
            assert_eq!(task.lane(), lane);
            assert!(seen.insert(task.id()), "task {} in two lanes", task.id());
        }
    }
}
