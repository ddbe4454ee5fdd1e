//! The todo store.
//!
//! [`TodoStore`] owns the canonical collection, assigns ids from its own
//! counter, and hands out owned copies so callers never alias its storage.

use crate::config::StoreConfig;
use crate::environment::{Clock, SystemClock};
use crate::error::{Result, TodoError};
use crate::todo::{AddInput, Todo, TodoId, TodoState};
use crate::transition::{self, TodoStateChanger};
use std::sync::Arc;

/// Commands accepted by [`TodoStore::execute`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TodoCommand {
    /// Add a todo
    Add(AddInput),
    /// Hard-remove a todo
    Delete {
        /// Todo to remove
        id: TodoId,
    },
    /// Remove every completed todo
    ClearCompleted,
    /// Apply a state changer to a stored todo
    Transition {
        /// Todo to change
        id: TodoId,
        /// Policy to apply
        changer: TodoStateChanger,
    },
    /// Flip a todo between complete and not complete
    Toggle {
        /// Todo to toggle
        id: TodoId,
    },
}

/// What a successfully executed [`TodoCommand`] did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    /// A todo was added
    Added(Todo),
    /// A todo went through a transition (possibly a no-op)
    Changed(Todo),
    /// A todo was removed
    Deleted(TodoId),
    /// Completed todos were removed
    Cleared(usize),
}

/// In-memory todo collection.
#[derive(Clone)]
pub struct TodoStore {
    todos: Vec<Todo>,
    last_id: u64,
    config: StoreConfig,
    clock: Arc<dyn Clock>,
}

impl TodoStore {
    /// Creates an empty store with the default configuration and system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Creates an empty store with the given configuration.
    #[must_use]
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            todos: Vec::new(),
            last_id: 0,
            config,
            clock: Arc::new(SystemClock),
        }
    }

    /// Replaces the clock used to stamp new todos.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Creates a store pre-populated with `inputs`, added in order.
    ///
    /// # Errors
    ///
    /// Returns the first [`TodoError::InvalidInput`] raised by [`Self::add`].
    pub fn with_todos<I>(inputs: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<AddInput>,
    {
        let mut store = Self::new();
        store.extend(inputs)?;
        Ok(store)
    }

    /// Adds every input in order.
    ///
    /// # Errors
    ///
    /// Stops at, and returns, the first [`TodoError::InvalidInput`]. Todos
    /// added before the failing input stay in the store.
    pub fn extend<I>(&mut self, inputs: I) -> Result<Vec<Todo>>
    where
        I: IntoIterator,
        I::Item: Into<AddInput>,
    {
        inputs.into_iter().map(|input| self.add(input)).collect()
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Adds a todo and returns a copy of the stored record.
    ///
    /// The id is reserved before the input is checked, so a rejected input
    /// still consumes one id.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::InvalidInput`] if the input carries no name, the
    /// name is blank, or it exceeds a configured [`StoreConfig::max_name_len`].
    /// Without configuration the name is stored exactly as given.
    pub fn add(&mut self, input: impl Into<AddInput>) -> Result<Todo> {
        let id = self.next_id();
        let name = self.resolve_name(input.into())?;

        let todo = Todo::new(id, name, self.clock.now());
        tracing::debug!(id = %id, name = todo.name(), "Todo added");
        self.todos.push(todo.clone());

        Ok(todo)
    }

    /// Returns a copy of the todo with `id`, if present.
    #[must_use]
    pub fn get_by_id(&self, id: TodoId) -> Option<Todo> {
        self.find(id).cloned()
    }

    /// Returns copies of every todo in insertion order.
    #[must_use]
    pub fn get_all(&self) -> Vec<Todo> {
        self.todos.clone()
    }

    /// Removes the todo with `id`. Its id is never handed out again.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::NotFound`] if no todo has that id.
    pub fn delete(&mut self, id: TodoId) -> Result<()> {
        let index = self.position(id).ok_or(TodoError::NotFound(id))?;
        self.todos.remove(index);
        tracing::debug!(id = %id, "Todo deleted");
        Ok(())
    }

    /// Removes every todo in the `Complete` state and returns how many went.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.todos.len();
        self.todos.retain(|todo| todo.state() != TodoState::Complete);
        let removed = before - self.todos.len();
        tracing::debug!(removed, "Cleared completed todos");
        removed
    }

    /// Applies `changer` to the stored todo and returns a copy of the result.
    ///
    /// An illegal transition leaves the todo unchanged and still succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::NotFound`] if no todo has that id.
    pub fn transition(&mut self, id: TodoId, changer: TodoStateChanger) -> Result<Todo> {
        let todo = self.find_mut(id).ok_or(TodoError::NotFound(id))?;
        transition::apply(todo, changer.target());
        Ok(todo.clone())
    }

    /// Flips a todo between complete and not complete.
    ///
    /// `New` and `Active` become `Complete`; `Complete` becomes `Active`;
    /// `Deleted` stays put.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::NotFound`] if no todo has that id.
    pub fn toggle(&mut self, id: TodoId) -> Result<Todo> {
        let todo = self.find_mut(id).ok_or(TodoError::NotFound(id))?;
        if let Some(target) = transition::toggle_target(todo.state()) {
            transition::apply(todo, target);
        }
        Ok(todo.clone())
    }

    /// Runs a command against the store.
    ///
    /// # Errors
    ///
    /// Propagates the error of the underlying operation.
    pub fn execute(&mut self, command: TodoCommand) -> Result<CommandOutcome> {
        match command {
            TodoCommand::Add(input) => self.add(input).map(CommandOutcome::Added),
            TodoCommand::Delete { id } => self.delete(id).map(|()| CommandOutcome::Deleted(id)),
            TodoCommand::ClearCompleted => Ok(CommandOutcome::Cleared(self.clear_completed())),
            TodoCommand::Transition { id, changer } => {
                self.transition(id, changer).map(CommandOutcome::Changed)
            },
            TodoCommand::Toggle { id } => self.toggle(id).map(CommandOutcome::Changed),
        }
    }

    /// Returns the number of todos
    #[must_use]
    pub fn len(&self) -> usize {
        self.todos.len()
    }

    /// Returns true if the store holds no todos
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Returns the number of todos in `state`
    #[must_use]
    pub fn count_in(&self, state: TodoState) -> usize {
        self.todos.iter().filter(|todo| todo.state() == state).count()
    }

    /// Checks if a todo exists
    #[must_use]
    pub fn contains(&self, id: TodoId) -> bool {
        self.position(id).is_some()
    }

    const fn next_id(&mut self) -> TodoId {
        self.last_id += 1;
        TodoId::new(self.last_id)
    }

    fn resolve_name(&self, input: AddInput) -> Result<String> {
        let Some(name) = input.into_name() else {
            return Err(TodoError::invalid_input("input has no name"));
        };

        if name.trim().is_empty() {
            return Err(TodoError::invalid_input("name cannot be empty"));
        }

        let name = if self.config.trim_names {
            name.trim().to_string()
        } else {
            name
        };

        if let Some(max) = self.config.max_name_len {
            let len = name.chars().count();
            if len > max {
                return Err(TodoError::invalid_input(format!(
                    "name too long ({len} characters, max {max})"
                )));
            }
        }

        Ok(name)
    }

    fn position(&self, id: TodoId) -> Option<usize> {
        self.todos.iter().position(|todo| todo.id() == id)
    }

    fn find(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id() == id)
    }

    fn find_mut(&mut self, id: TodoId) -> Option<&mut Todo> {
        self.todos.iter_mut().find(|todo| todo.id() == id)
    }
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

// Manual Debug implementation since the clock is a trait object
impl std::fmt::Debug for TodoStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoStore")
            .field("todos", &self.todos)
            .field("last_id", &self.last_id)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
