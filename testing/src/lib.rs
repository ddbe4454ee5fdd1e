//! # Todo Store Testing
//!
//! Testing utilities and helpers for the todo store.
//!
//! This crate provides:
//! - A fixed [`Clock`] for deterministic timestamps
//! - [`StoreTest`], a Given-When-Then harness for store commands
//! - Fixtures and tracing setup for tests
//! - proptest strategies for domain types
//!
//! ## Example
//!
//! ```
//! use todo_store_core::{TodoCommand, TodoId, TodoStateChanger};
//! use todo_store_testing::{assertions, StoreTest};
//!
//! StoreTest::new()
//!     .given_todos(["A", "B", "C"])
//!     .when_command(TodoCommand::Transition {
//!         id: TodoId::new(2),
//!         changer: TodoStateChanger::Complete,
//!     })
//!     .when_command(TodoCommand::ClearCompleted)
//!     .then_store(|store| assertions::assert_names(store, &["A", "C"]))
//!     .run();
//! ```

use chrono::{DateTime, Utc};
use todo_store_core::environment::Clock;


pub use store_test::{StoreTest, assertions};

/// Clock stand-ins for stamping `created_at`
pub mod mocks {
    use super::{Clock, DateTime, Utc};

    /// Clock that always reports the same instant
    ///
    /// Every todo added through a store using this clock gets an identical
    /// `created_at`, so tests can compare whole `Todo` values.
    ///
    /// # Example
    ///
    /// ```
    /// use std::sync::Arc;
    /// use todo_store_core::{Clock, TodoStore};
    /// use todo_store_testing::mocks::FixedClock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// let mut store = TodoStore::new().with_clock(Arc::new(clock.clone()));
    /// let todo = store.add("Buy milk").unwrap();
    /// assert_eq!(todo.created_at(), clock.now());
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Clock pinned to `time`
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Clock pinned to 2025-01-01 00:00:00 UTC, used by the store fixtures
    #[must_use]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(DateTime::from_timestamp(1_735_689_600, 0).unwrap_or_default())
    }
}

/// Test helpers and fixtures
pub mod helpers {
    use super::mocks::test_clock;
    use std::sync::Arc;
    use todo_store_core::{AddInput, Todo, TodoStore};

    /// Install a `tracing` subscriber that writes through the test harness.
    ///
    /// Honors `RUST_LOG`, defaulting to `todo_store_core=debug`. Safe to call
    /// from every test; only the first call installs anything.
    pub fn init_test_tracing() {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "todo_store_core=debug".into());
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    }

    /// Store stamped by [`test_clock`] and pre-populated with `inputs`.
    ///
    /// # Panics
    ///
    /// Panics if any input is rejected by the store.
    #[must_use]
    #[allow(clippy::panic)] // Fixture misuse should fail the test loudly
    pub fn store_with<I>(inputs: I) -> TodoStore
    where
        I: IntoIterator,
        I::Item: Into<AddInput>,
    {
        let mut store = TodoStore::new().with_clock(Arc::new(test_clock()));
        if let Err(e) = store.extend(inputs) {
            panic!("fixture input rejected: {e}");
        }
        store
    }

    /// Names of `todos`, in order.
    #[must_use]
    pub fn names_of(todos: &[Todo]) -> Vec<String> {
        todos.iter().map(|todo| todo.name().to_string()).collect()
    }
}

/// Property-based testing utilities using proptest.
pub mod properties {
    use proptest::prelude::*;
    use todo_store_core::{AddInput, TodoDraft, TodoState, TodoStateChanger};

    /// Any lifecycle state
    pub fn any_todo_state() -> impl Strategy<Value = TodoState> {
        prop_oneof![
            Just(TodoState::New),
            Just(TodoState::Active),
            Just(TodoState::Complete),
            Just(TodoState::Deleted),
        ]
    }

    /// Any state changer
    pub fn any_changer() -> impl Strategy<Value = TodoStateChanger> {
        any_todo_state().prop_map(TodoStateChanger::for_target)
    }

    /// A name the default store configuration accepts
    pub fn valid_name() -> impl Strategy<Value = String> {
        "[A-Za-z][A-Za-z0-9 ]{0,39}"
    }

    /// Add input in either form, always carrying a valid name
    pub fn valid_add_input() -> impl Strategy<Value = AddInput> {
        prop_oneof![
            valid_name().prop_map(AddInput::Name),
            valid_name().prop_map(|name| AddInput::Draft(TodoDraft::named(name))),
        ]
    }

    /// Add input that the store must reject
    pub fn invalid_add_input() -> impl Strategy<Value = AddInput> {
        prop_oneof![
            "[ \t\n]{0,8}".prop_map(AddInput::Name),
            Just(AddInput::Draft(TodoDraft::default())),
            "[ \t]{0,8}".prop_map(|blank| AddInput::Draft(TodoDraft::named(blank))),
        ]
    }
}

// Re-export commonly used items
pub use helpers::{init_test_tracing, names_of, store_with};
pub use mocks::{FixedClock, test_clock};
