//! Error types for extended containers.

/// A seedless reduction was attempted over an empty container.
///
/// Returned by [`Extended::reduce`](super::Extended::reduce) and
/// [`Extended::reduce_ref`](super::Extended::reduce_ref), which use the first
/// element as the seed. Use the seeded forms when the container may be empty.
///
/// # Examples
///
/// ```rust
/// use rebound::EmptySequenceError;
///
/// let error = EmptySequenceError { operation: "reduce" };
/// assert_eq!(
///     format!("{error}"),
///     "reduce: the sequence is empty. Provide a seed with reduce_with."
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptySequenceError {
    /// The name of the operation that failed.
    pub operation: &'static str,
}

impl std::fmt::Display for EmptySequenceError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}: the sequence is empty. Provide a seed with reduce_with.",
            self.operation
        )
    }
}

impl std::error::Error for EmptySequenceError {}
