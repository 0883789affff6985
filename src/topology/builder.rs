//! Builder pattern for creating Topology instances.
//!
//! The `TopologyBuilder` provides a fluent API for constructing
//! `Topology` instances with validation.

use crate::topology::{InvalidParameterError, Topology};

/// Builder for constructing a `Topology` with a fluent API.
///
/// # Example
///
/// ```rust
/// use levenshtein_anml::prelude::*;
///
/// let topology = TopologyBuilder::new()
///     .pattern("kitten")
///     .edit_distance(2)
///     .build()?;
/// assert_eq!(topology.grid().height(), 3);
/// # Ok::<(), levenshtein_anml::topology::BuilderError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct TopologyBuilder {
    pattern: Option<String>,
    edit_distance: Option<usize>,
}

/// Error type for builder validation failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuilderError {
    /// No pattern was provided
    #[error("Pattern is required. Use .pattern() to set it.")]
    MissingPattern,
    /// No edit distance was provided
    #[error("Edit distance is required. Use .edit_distance() to set it.")]
    MissingEditDistance,
    /// The parameters were provided but cannot form an automaton
    #[error(transparent)]
    InvalidParameter(#[from] InvalidParameterError),
}

impl TopologyBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        TopologyBuilder {
            pattern: None,
            edit_distance: None,
        }
    }

    /// Set the search pattern.
    ///
    /// # Arguments
    ///
    /// * `pattern` - The string the automaton approximately matches
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Set the maximum accepted edit distance.
    ///
    /// # Arguments
    ///
    /// * `edit_distance` - At least 1, and less than the pattern length minus 1
    pub fn edit_distance(mut self, edit_distance: usize) -> Self {
        self.edit_distance = Some(edit_distance);
        self
    }

    /// Build the `Topology`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Pattern was not set (use `.pattern()`)
    /// - Edit distance was not set (use `.edit_distance()`)
    /// - The pair violates the construction preconditions
    pub fn build(self) -> Result<Topology, BuilderError> {
        let pattern = self.pattern.ok_or(BuilderError::MissingPattern)?;
        let edit_distance = self.edit_distance.ok_or(BuilderError::MissingEditDistance)?;

        Ok(Topology::build(&pattern, edit_distance)?)
    }
}
