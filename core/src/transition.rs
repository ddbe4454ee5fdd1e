//! State transitions for a single todo.
//!
//! Every state change goes through [`apply`], which consults the legality
//! table in [`is_legal`]. Illegal transitions are a silent no-op: callers
//! observe them only by comparing the resulting state.

use crate::todo::{Todo, TodoState};

/// Transition policy, one variant per target state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TodoStateChanger {
    /// Move back to `New`
    Reset,
    /// Move to `Active`
    Activate,
    /// Move to `Complete`
    Complete,
    /// Move to `Deleted`
    Delete,
}

impl TodoStateChanger {
    /// The state this changer moves a todo into.
    #[must_use]
    pub const fn target(self) -> TodoState {
        match self {
            Self::Reset => TodoState::New,
            Self::Activate => TodoState::Active,
            Self::Complete => TodoState::Complete,
            Self::Delete => TodoState::Deleted,
        }
    }

    /// The changer whose target is `state`.
    #[must_use]
    pub const fn for_target(state: TodoState) -> Self {
        match state {
            TodoState::New => Self::Reset,
            TodoState::Active => Self::Activate,
            TodoState::Complete => Self::Complete,
            TodoState::Deleted => Self::Delete,
        }
    }

    /// Whether this changer may move `todo` out of its current state.
    #[must_use]
    pub const fn can_change_state(self, todo: &Todo) -> bool {
        is_legal(todo.state(), self.target())
    }

    /// Applies the transition if it is legal and hands the todo back.
    ///
    /// Never fails; an illegal transition returns the todo unchanged.
    #[must_use]
    pub fn change_state(self, mut todo: Todo) -> Todo {
        apply(&mut todo, self.target());
        todo
    }
}

/// Transition legality table.
///
/// | from \ to | New | Active | Complete | Deleted |
/// |-----------|-----|--------|----------|---------|
/// | New       |  -  |   ✓    |    ✓     |    ✓    |
/// | Active    |  ✓  |   -    |    ✓     |    ✓    |
/// | Complete  |  ✓  |   ✓    |    -     |    ✓    |
/// | Deleted   |  -  |   -    |    -     |    -    |
#[must_use]
pub const fn is_legal(from: TodoState, to: TodoState) -> bool {
    match (from, to) {
        (TodoState::Deleted, _)
        | (TodoState::New, TodoState::New)
        | (TodoState::Active, TodoState::Active)
        | (TodoState::Complete, TodoState::Complete) => false,
        _ => true,
    }
}

/// Moves `todo` into `target` if the table allows it.
///
/// Returns whether the state changed.
pub fn apply(todo: &mut Todo, target: TodoState) -> bool {
    let from = todo.state();
    if !is_legal(from, target) {
        tracing::debug!(id = %todo.id(), %from, to = %target, "Transition rejected");
        return false;
    }

    todo.set_state(target);
    tracing::debug!(id = %todo.id(), %from, to = %target, "Todo transitioned");
    true
}

/// Target for a toggle: `Complete` flips back to `Active`, `New` and
/// `Active` flip to `Complete`. `Deleted` has no toggle target.
#[must_use]
pub const fn toggle_target(state: TodoState) -> Option<TodoState> {
    match state {
        TodoState::New | TodoState::Active => Some(TodoState::Complete),
        TodoState::Complete => Some(TodoState::Active),
        TodoState::Deleted => None,
    }
}
