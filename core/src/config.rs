//! Store configuration.
//!
//! Values are provided by the application. [`StoreConfig::default`] stores
//! names exactly as given and places no cap on their length; both checks are
//! opt-in.

/// Name handling settings for a [`TodoStore`](crate::TodoStore).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StoreConfig {
    /// Maximum number of characters in a todo name, if capped.
    ///
    /// Default: `None` (no cap)
    pub max_name_len: Option<usize>,

    /// Whether leading and trailing whitespace is stripped before storing.
    ///
    /// Whitespace-only names are rejected either way.
    ///
    /// Default: false
    pub trim_names: bool,
}

impl StoreConfig {
    /// Create a configuration that keeps names as given.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_name_len: None,
            trim_names: false,
        }
    }

    /// Reject names longer than `max_name_len` characters.
    #[must_use]
    pub const fn with_max_name_len(mut self, max_name_len: usize) -> Self {
        self.max_name_len = Some(max_name_len);
        self
    }

    /// Strip leading and trailing whitespace before storing names.
    #[must_use]
    pub const fn with_trim_names(mut self, trim_names: bool) -> Self {
        self.trim_names = trim_names;
        self
    }
}
