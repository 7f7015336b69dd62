//! Identity wrapper type - a value with no added behavior.
//!
//! `Identity<A>` holds exactly one value, set at construction and
//! immutable through the public API unless a caller asks for a mutable
//! reference. It has no emptiness concept and performs no validation:
//! any value is acceptable.
//!
//! It earns its place as the simplest possible model of the monadic
//! vocabulary (`pure`, `bind`, `chain`, `join`): everything the richer
//! containers do, minus the interesting part.

use super::TypeConstructor;

/// The identity container - wraps a single value and nothing else.
///
/// # Examples
///
/// ```rust
/// use mayhaps::typeclass::Identity;
///
/// let wrapped = Identity::new(42);
/// assert_eq!(wrapped.into_inner(), 42);
///
/// // Tuple-struct syntax also works
/// let wrapped = Identity(42);
/// assert_eq!(wrapped.0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Creates a new `Identity` wrapping the given value.
    ///
    /// This is the injection operation: no classification is applied.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Identity` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }

    /// Returns a mutable reference to the inner value.
    #[inline]
    pub const fn as_inner_mut(&mut self) -> &mut A {
        &mut self.0
    }

    /// Applies a container-returning function to the wrapped value.
    ///
    /// Inherent form of [`Monad::flat_map`](super::Monad::flat_map); for
    /// `Identity` there is no failure case, so this always invokes
    /// `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mayhaps::typeclass::Identity;
    ///
    /// let result = Identity::new(5).bind(|n| Identity::new(n * 2));
    /// assert_eq!(result, Identity::new(10));
    /// ```
    #[inline]
    pub fn bind<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> Identity<B>,
    {
        function(self.into_inner())
    }

    /// Sequences a computation that does not need the wrapped value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mayhaps::typeclass::Identity;
    ///
    /// let result = Identity::new(5).chain(|| Identity::new("next"));
    /// assert_eq!(result, Identity::new("next"));
    /// ```
    #[inline]
    pub fn chain<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce() -> Identity<B>,
    {
        let Self(_) = self;
        function()
    }
}

impl<A> Identity<Identity<A>> {
    /// Collapses one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mayhaps::typeclass::Identity;
    ///
    /// let nested = Identity::new(Identity::new(42));
    /// assert_eq!(nested.join(), Identity::new(42));
    /// ```
    #[inline]
    pub fn join(self) -> Identity<A> {
        self.into_inner()
    }
}

impl<A> TypeConstructor for Identity<A> {
    type Inner = A;
    type WithType<B> = Identity<B>;
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn identity_new_creates_wrapper() {
        let wrapped = Identity::new(42);
        assert_eq!(wrapped.0, 42);
    }

    #[rstest]
    fn identity_into_inner_unwraps() {
        let wrapped = Identity::new(String::from("hello"));
        assert_eq!(wrapped.into_inner(), "hello");
    }

    #[rstest]
    fn identity_as_inner_returns_reference() {
        let wrapped = Identity::new(vec![1, 2, 3]);
        assert_eq!(wrapped.as_inner(), &vec![1, 2, 3]);
    }

    #[rstest]
    fn identity_as_inner_mut_allows_modification() {
        let mut wrapped = Identity::new(42);
        *wrapped.as_inner_mut() = 100;
        assert_eq!(wrapped.into_inner(), 100);
    }

    // =========================================================================
    // Monadic Operations
    // =========================================================================

    #[rstest]
    fn identity_bind_always_invokes_function() {
        let result = Identity::new(5).bind(|n| Identity::new(n + 1));
        assert_eq!(result, Identity::new(6));
    }

    #[rstest]
    fn identity_chain_discards_value() {
        let result = Identity::new(5).chain(|| Identity::new("ran"));
        assert_eq!(result, Identity::new("ran"));
    }

    #[rstest]
    fn identity_join_collapses_one_level() {
        let nested = Identity::new(Identity::new(42));
        assert_eq!(nested.join(), Identity::new(42));
    }

    #[rstest]
    fn identity_join_collapses_only_one_level() {
        let doubly_nested = Identity::new(Identity::new(Identity::new(42)));
        assert_eq!(doubly_nested.join(), Identity::new(Identity::new(42)));
    }

    // =========================================================================
    // Derive and Conversion Traits
    // =========================================================================

    #[rstest]
    fn identity_equality_is_structural() {
        assert_eq!(Identity::new(42), Identity::new(42));
        assert_ne!(Identity::new(42), Identity::new(100));
    }

    #[rstest]
    fn identity_default_wraps_default() {
        let default_int: Identity<i32> = Identity::default();
        assert_eq!(default_int.into_inner(), 0);
    }

    #[rstest]
    fn identity_from_value() {
        let wrapped: Identity<i32> = 42.into();
        assert_eq!(wrapped.into_inner(), 42);
    }

    #[rstest]
    #[case(0)]
    #[case(-1)]
    #[case(i32::MIN)]
    #[case(i32::MAX)]
    fn identity_preserves_integer_values(#[case] value: i32) {
        assert_eq!(Identity::new(value).into_inner(), value);
    }
}
