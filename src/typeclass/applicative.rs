//! Applicative type class - injecting values and combining contexts.
//!
//! `Applicative` extends `Functor` with `pure`, which lifts a plain value
//! into the container, and `map2`, which combines two independent
//! containers with a binary function. `pure` is the injection operation
//! of the monadic vocabulary: it is how a caller first gets a value into
//! a container without knowing its representation.
//!
//! # Laws
//!
//! All `Applicative` implementations must satisfy:
//!
//! ## Identity Law
//!
//! ```text
//! pure(()).map2(v, |_, x| x) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(a).map2(pure(b), f) == pure(f(a, b))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use mayhaps::typeclass::{Applicative, Identity};
//!
//! let injected: Identity<i32> = <Identity<()>>::pure(42);
//! assert_eq!(injected, Identity::new(42));
//!
//! let sum = Identity::new(1).map2(Identity::new(2), |x, y| x + y);
//! assert_eq!(sum, Identity::new(3));
//! ```

use super::functor::Functor;
use super::identity::Identity;

/// A type class for containers that support value injection and pairwise
/// combination.
///
/// # Examples
///
/// ```rust
/// use mayhaps::typeclass::{Applicative, Identity};
///
/// let pair = Identity::new(1).product(Identity::new("one"));
/// assert_eq!(pair, Identity::new((1, "one")));
/// ```
pub trait Applicative: Functor {
    /// Lifts a plain value into the container.
    ///
    /// This is the injection operation: any value becomes a container
    /// holding that value, with no classification or validation applied.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mayhaps::typeclass::{Applicative, Identity};
    ///
    /// let x: Identity<i32> = <Identity<()>>::pure(42);
    /// assert_eq!(x.into_inner(), 42);
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two containers with a binary function.
    ///
    /// # Arguments
    ///
    /// * `other` - The second container
    /// * `function` - A function combining both inner values
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mayhaps::typeclass::{Applicative, Identity};
    ///
    /// let sum = Identity::new(3).map2(Identity::new(4), |x, y| x + y);
    /// assert_eq!(sum, Identity::new(7));
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Pairs up the values of two containers.
    ///
    /// Equivalent to `map2(other, |a, b| (a, b))`.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |first, second| (first, second))
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Applicative for Identity<A> {
    #[inline]
    fn pure<B>(value: B) -> Identity<B> {
        Identity::new(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Identity<B>, function: F) -> Identity<C>
    where
        F: FnOnce(A, B) -> C,
    {
        Identity(function(self.into_inner(), other.into_inner()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn identity_pure_injects_value() {
        let injected: Identity<i32> = <Identity<()>>::pure(42);
        assert_eq!(injected, Identity::new(42));
    }

    #[rstest]
    fn identity_map2_combines_values() {
        let sum = Identity::new(1).map2(Identity::new(2), |x, y| x + y);
        assert_eq!(sum, Identity::new(3));
    }

    #[rstest]
    fn identity_product_pairs_values() {
        let pair = Identity::new(1).product(Identity::new("one"));
        assert_eq!(pair, Identity::new((1, "one")));
    }

    /// Homomorphism law: pure(a).map2(pure(b), f) == pure(f(a, b))
    #[rstest]
    fn homomorphism_law() {
        let left = <Identity<()>>::pure(3).map2(<Identity<()>>::pure(4), |x, y| x + y);
        let right: Identity<i32> = <Identity<()>>::pure(7);
        assert_eq!(left, right);
    }
}
