//! Error types for the `Maybe` combinator library.
//!
//! Extraction through [`from_just`](super::from_just) is the only
//! operation in the library that can fail; everything else is total.

/// Represents an attempt to extract a value from `Empty`.
///
/// Returned by [`from_just`](super::from_just) when applied to an `Empty`
/// value; the same diagnostic is used as the panic message of
/// [`Maybe::unwrap_present`](super::Maybe::unwrap_present).
///
/// # Examples
///
/// ```rust
/// use mayhaps::maybe::EmptyValueError;
///
/// let error = EmptyValueError {
///     operation: "from_just",
/// };
/// assert_eq!(
///     format!("{}", error),
///     "from_just: cannot extract a value from `Empty`"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyValueError {
    /// The name of the operation that attempted the extraction.
    pub operation: &'static str,
}

impl std::fmt::Display for EmptyValueError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}: cannot extract a value from `Empty`",
            self.operation
        )
    }
}

impl std::error::Error for EmptyValueError {}
