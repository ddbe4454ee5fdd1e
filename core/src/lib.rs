//! # Todo Store Core
//!
//! An in-memory todo list manager with typed lifecycle transitions.
//!
//! ## Core Concepts
//!
//! - **Todo**: a task record with an id, a name and a lifecycle state
//! - **`TodoStore`**: owns the collection and is the single writer of ids
//! - **`TodoStateChanger`**: a transition policy that validates and applies a
//!   state change to one todo
//! - **Clock**: injected time source used to stamp new todos
//!
//! ## Lifecycle
//!
//! ```text
//! New ⇄ Active ⇄ Complete
//!  └───────┴───────┴──→ Deleted (terminal)
//! ```
//!
//! ## Example
//!
//! ```
//! use todo_store_core::{TodoState, TodoStateChanger, TodoStore};
//!
//! # fn main() -> todo_store_core::Result<()> {
//! let mut store = TodoStore::new();
//!
//! let milk = store.add("Buy milk")?;
//! let docs = store.add("Write documentation")?;
//!
//! store.transition(milk.id(), TodoStateChanger::Complete)?;
//! assert_eq!(store.clear_completed(), 1);
//!
//! let remaining = store.get_all();
//! assert_eq!(remaining.len(), 1);
//! assert_eq!(remaining[0].id(), docs.id());
//! assert_eq!(remaining[0].state(), TodoState::New);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod environment;
pub mod error;
pub mod store;
pub mod todo;
pub mod transition;

// Re-export commonly used types
pub use chrono::{DateTime, Utc};
pub use config::StoreConfig;
pub use environment::{Clock, SystemClock};
pub use error::{Result, TodoError};
pub use store::{CommandOutcome, TodoCommand, TodoStore};
pub use todo::{AddInput, Todo, TodoDraft, TodoId, TodoState};
pub use transition::TodoStateChanger;
