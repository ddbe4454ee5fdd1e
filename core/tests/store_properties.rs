//! Property-based tests for store invariants
//!
//! These tests use proptest to check id assignment, copy isolation and the
//! transition table across many random inputs.

#![allow(clippy::unwrap_used)] // Tests can unwrap

use proptest::prelude::*;
use todo_store_core::transition::{apply, is_legal};
use todo_store_core::{AddInput, Todo, TodoId, TodoState, TodoStateChanger, TodoStore, Utc};
use todo_store_testing::properties::{
    any_changer, any_todo_state, invalid_add_input, valid_add_input,
};

/// One step in a random store workload
#[derive(Clone, Debug)]
enum Op {
    Add(AddInput),
    Delete(usize),
    Change(usize, TodoStateChanger),
    ClearCompleted,
}

fn any_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => prop_oneof![valid_add_input(), invalid_add_input()].prop_map(Op::Add),
        1 => any::<usize>().prop_map(Op::Delete),
        2 => (any::<usize>(), any_changer()).prop_map(|(i, c)| Op::Change(i, c)),
        1 => Just(Op::ClearCompleted),
    ]
}

/// Picks an existing id by index, if the store has any todos
fn pick(store: &TodoStore, index: usize) -> Option<TodoId> {
    let todos = store.get_all();
    if todos.is_empty() {
        None
    } else {
        Some(todos[index % todos.len()].id())
    }
}

proptest! {
    #[test]
    fn prop_added_ids_strictly_increase(ops in prop::collection::vec(any_op(), 0..40)) {
        let mut store = TodoStore::new();
        let mut last: Option<TodoId> = None;
        let mut seen = Vec::new();

        for op in ops {
            match op {
                Op::Add(input) => {
                    if let Ok(todo) = store.add(input) {
                        if let Some(prev) = last {
                            prop_assert!(todo.id() > prev);
                        }
                        prop_assert!(!seen.contains(&todo.id()));
                        seen.push(todo.id());
                        last = Some(todo.id());
                    }
                },
                Op::Delete(i) => {
                    if let Some(id) = pick(&store, i) {
                        store.delete(id).unwrap();
                    }
                },
                Op::Change(i, changer) => {
                    if let Some(id) = pick(&store, i) {
                        store.transition(id, changer).unwrap();
                    }
                },
                Op::ClearCompleted => {
                    store.clear_completed();
                },
            }
        }
    }

    #[test]
    fn prop_invalid_input_never_stored(input in invalid_add_input()) {
        let mut store = TodoStore::new();
        prop_assert!(store.add(input).is_err());
        prop_assert!(store.is_empty());
    }

    #[test]
    fn prop_query_results_are_copies(
        inputs in prop::collection::vec(valid_add_input(), 1..10),
        changer in any_changer(),
        index in any::<usize>(),
    ) {
        let mut store = TodoStore::with_todos(inputs).unwrap();
        let snapshot = store.get_all();
        let id = snapshot[index % snapshot.len()].id();
        let single = store.get_by_id(id).unwrap();

        // Store writes never reach earlier snapshots
        let changed = store.transition(id, changer).unwrap();
        store.delete(snapshot[0].id()).unwrap();
        prop_assert_eq!(snapshot.len(), store.len() + 1);
        prop_assert_eq!(single.state(), TodoState::New);
        prop_assert!(snapshot.iter().all(|todo| todo.state() == TodoState::New));

        // Changes to a snapshot never reach the store
        let store_before = store.get_all();
        for todo in snapshot {
            let _ = TodoStateChanger::Delete.change_state(todo);
        }
        prop_assert_eq!(store.get_all(), store_before);
        if let Some(stored) = store.get_by_id(id) {
            prop_assert_eq!(stored.state(), changed.state());
        }
    }

    #[test]
    fn prop_clear_completed_removes_exactly_complete(
        inputs in prop::collection::vec(valid_add_input(), 0..10),
        targets in prop::collection::vec(any_todo_state(), 0..10),
    ) {
        let mut store = TodoStore::with_todos(inputs).unwrap();
        let ids: Vec<TodoId> = store.get_all().iter().map(Todo::id).collect();
        for (id, target) in ids.iter().zip(targets) {
            store.transition(*id, TodoStateChanger::for_target(target)).unwrap();
        }

        let expected: Vec<Todo> = store
            .get_all()
            .into_iter()
            .filter(|todo| todo.state() != TodoState::Complete)
            .collect();
        let complete = store.count_in(TodoState::Complete);

        prop_assert_eq!(store.clear_completed(), complete);
        prop_assert_eq!(store.get_all(), expected);
    }

    #[test]
    fn prop_deleted_is_absorbing(changers in prop::collection::vec(any_changer(), 0..10)) {
        let todo = Todo::new(TodoId::new(1), "A".to_string(), Utc::now());
        let mut todo = TodoStateChanger::Delete.change_state(todo);

        for changer in changers {
            todo = changer.change_state(todo);
        }

        prop_assert_eq!(todo.state(), TodoState::Deleted);
    }

    #[test]
    fn prop_apply_agrees_with_table(from_changer in any_changer(), target in any_todo_state()) {
        let todo = Todo::new(TodoId::new(1), "A".to_string(), Utc::now());
        let mut todo = from_changer.change_state(todo);
        let from = todo.state();

        let changed = apply(&mut todo, target);

        prop_assert_eq!(changed, is_legal(from, target));
        prop_assert_eq!(todo.state(), if changed { target } else { from });
    }
}
