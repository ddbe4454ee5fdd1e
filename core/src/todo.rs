//! Domain types for the todo store.
//!
//! A todo is a named task with a lifecycle state. Ids are handed out by the
//! store, and the state only moves through the [`transition`](crate::transition)
//! module.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a todo item
///
/// Assigned by the store from a monotonic counter starting at 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(u64);

impl TodoId {
    /// Creates a `TodoId` from a raw value
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw value
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle state of a todo.
///
/// `New`, `Active` and `Complete` are mutually reachable; `Deleted` is
/// absorbing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TodoState {
    /// Freshly created
    #[default]
    New,
    /// Being worked on
    Active,
    /// Done
    Complete,
    /// Soft-deleted; no transition leaves this state
    Deleted,
}

impl TodoState {
    /// All states, in lifecycle order.
    pub const ALL: [Self; 4] = [Self::New, Self::Active, Self::Complete, Self::Deleted];

    /// Returns true for the absorbing `Deleted` state.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Deleted)
    }
}

impl std::fmt::Display for TodoState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::New => "new",
            Self::Active => "active",
            Self::Complete => "complete",
            Self::Deleted => "deleted",
        };
        f.write_str(name)
    }
}

/// A single todo item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    id: TodoId,
    name: String,
    state: TodoState,
    created_at: DateTime<Utc>,
}

impl Todo {
    /// Creates a todo in the `New` state.
    ///
    /// The store is the usual source of todos; this is for callers that run
    /// state changers over standalone values.
    #[must_use]
    pub const fn new(id: TodoId, name: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            state: TodoState::New,
            created_at,
        }
    }

    /// Unique identifier
    #[must_use]
    pub const fn id(&self) -> TodoId {
        self.id
    }

    /// Label given at creation
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current lifecycle state
    #[must_use]
    pub const fn state(&self) -> TodoState {
        self.state
    }

    /// When the todo was created
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub(crate) const fn set_state(&mut self, state: TodoState) {
        self.state = state;
    }
}

/// Object form of an add request.
///
/// `name` is optional so that a payload such as `{}` can be represented and
/// rejected instead of failing to deserialize.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoDraft {
    /// Requested name
    #[serde(default)]
    pub name: Option<String>,
}

impl TodoDraft {
    /// Creates a draft carrying a name
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

/// Input accepted by [`TodoStore::add`](crate::TodoStore::add): either a bare
/// name or a draft object.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AddInput {
    /// A plain name
    Name(String),
    /// An object that may carry a name
    Draft(TodoDraft),
}

impl AddInput {
    /// Returns the candidate name, if the input carries one.
    #[must_use]
    pub fn into_name(self) -> Option<String> {
        match self {
            Self::Name(name) => Some(name),
            Self::Draft(draft) => draft.name,
        }
    }
}

impl From<&str> for AddInput {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for AddInput {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<TodoDraft> for AddInput {
    fn from(draft: TodoDraft) -> Self {
        Self::Draft(draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_id_display() {
        assert_eq!(TodoId::new(42).to_string(), "42");
    }

    #[test]
    fn todo_new_starts_in_new_state() {
        let now = Utc::now();
        let todo = Todo::new(TodoId::new(1), "Test todo".to_string(), now);

        assert_eq!(todo.id(), TodoId::new(1));
        assert_eq!(todo.name(), "Test todo");
        assert_eq!(todo.state(), TodoState::New);
        assert_eq!(todo.created_at(), now);
    }

    #[test]
    fn only_deleted_is_terminal() {
        for state in TodoState::ALL {
            assert_eq!(state.is_terminal(), state == TodoState::Deleted);
        }
    }

    #[test]
    fn add_input_resolves_name() {
        assert_eq!(AddInput::from("a").into_name().as_deref(), Some("a"));
        assert_eq!(
            AddInput::from(TodoDraft::named("b")).into_name().as_deref(),
            Some("b")
        );
        assert_eq!(AddInput::from(TodoDraft::default()).into_name(), None);
    }

    #[test]
    fn draft_without_name_deserializes() {
        let draft: TodoDraft = serde_json::from_str("{}").unwrap();
        assert_eq!(draft.name, None);

        let draft: TodoDraft = serde_json::from_str(r#"{"name":"Buy milk"}"#).unwrap();
        assert_eq!(draft.name.as_deref(), Some("Buy milk"));
    }

    #[test]
    fn state_serializes_snake_case() {
        let json = serde_json::to_string(&TodoState::Complete).unwrap();
        assert_eq!(json, r#""complete""#);
    }
}
