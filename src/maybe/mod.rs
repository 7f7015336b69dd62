//! Maybe type - an optional value as a genuine sum type.
//!
//! This module provides [`Maybe<T>`], a two-variant sum type representing
//! either a present value (`Present(T)`) or its absence (`Empty`), plus
//! the combinator library that operates over it.
//!
//! `Empty` is a zero-payload enum tag, not a shared sentinel object:
//! emptiness is compared structurally by the type system, so copying or
//! serializing a `Maybe` can never break emptiness detection.
//!
//! Construction normally goes through the smart constructor
//! [`Maybe::of`], which classifies raw values by the [`Nullish`] rules
//! (NaN floats, `None`, already-empty `Maybe`s). Callers that are certain
//! a value is valid may build `Present` directly.
//!
//! Chaining is strict: each `bind`/`chain` call site evaluates in
//! sequence and tests only its own input. To run a whole pipeline of
//! steps with a halt at the first `Empty`, use [`Maybe::bind_all`].
//!
//! # Examples
//!
//! ```rust
//! use mayhaps::maybe::{Maybe, from_maybe};
//!
//! let classified = Maybe::of(5);
//! assert_eq!(classified, Maybe::Present(5));
//!
//! let chained = classified
//!     .bind(|n| Maybe::of(n * 2))
//!     .bind(|n| if n > 5 { Maybe::Present(n) } else { Maybe::Empty });
//! assert_eq!(from_maybe(0, chained), 10);
//!
//! let empty = Maybe::of(f64::NAN);
//! assert!(empty.is_empty());
//! ```

mod combinators;
mod error;
mod nullish;

pub use combinators::{
    cat_maybes, from_just, from_maybe, list_to_maybe, map_maybe, maybe, maybe_to_list,
};
pub use error::EmptyValueError;
pub use nullish::Nullish;

use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};
use std::fmt;

/// An optional value: either `Present(T)` or `Empty`.
///
/// Exactly one variant matches any given `Maybe`; the predicates
/// [`is_present`](Self::is_present) and [`is_empty`](Self::is_empty) are
/// total tag tests. A `Present` payload is never itself something the
/// smart constructor would classify as empty, because [`Maybe::of`]
/// refuses to wrap such values.
///
/// # Examples
///
/// ```rust
/// use mayhaps::maybe::Maybe;
///
/// let present = Maybe::Present(42);
/// let empty: Maybe<i32> = Maybe::Empty;
///
/// assert_eq!(present.bind(|n| Maybe::Present(n + 1)), Maybe::Present(43));
/// assert_eq!(empty.bind(|n| Maybe::Present(n + 1)), Maybe::Empty);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// The variant carrying a value.
    Present(T),
    /// The variant carrying no value.
    Empty,
}

impl<T: Nullish> Maybe<T> {
    /// The smart constructor: classifies a raw value.
    ///
    /// Returns `Empty` if the value is nullish (NaN, `None`, an empty
    /// `Maybe`), otherwise `Present(value)`. Total; classification is the
    /// only logic.
    ///
    /// Because an empty `Maybe` is itself nullish, re-applying the
    /// constructor to an already-classified value never wraps an empty
    /// layer inside a present one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mayhaps::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::of(5), Maybe::Present(5));
    /// assert!(Maybe::of(f32::NAN).is_empty());
    /// assert!(Maybe::of(None::<i32>).is_empty());
    /// ```
    #[inline]
    pub fn of(value: T) -> Self {
        if value.is_nullish() {
            Self::Empty
        } else {
            Self::Present(value)
        }
    }
}

impl<T> Maybe<T> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Present` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mayhaps::maybe::Maybe;
    ///
    /// assert!(Maybe::Present(42).is_present());
    /// assert!(!Maybe::<i32>::Empty.is_present());
    /// ```
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if this is `Empty`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mayhaps::maybe::Maybe;
    ///
    /// assert!(Maybe::<i32>::Empty.is_empty());
    /// assert!(!Maybe::Present(42).is_empty());
    /// ```
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Converts the `Maybe` into an `Option<T>`, consuming it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mayhaps::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::Present(42).present(), Some(42));
    /// assert_eq!(Maybe::<i32>::Empty.present(), None);
    /// ```
    #[inline]
    pub fn present(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Empty => None,
        }
    }

    /// Returns a reference to the present value, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mayhaps::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::Present(42).present_ref(), Some(&42));
    /// assert_eq!(Maybe::<i32>::Empty.present_ref(), None);
    /// ```
    #[inline]
    pub const fn present_ref(&self) -> Option<&T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Empty => None,
        }
    }

    /// Returns the present value, consuming the `Maybe`.
    ///
    /// For callers that have already tested the tag. Potentially-empty
    /// values should go through [`from_just`] or [`from_maybe`] instead.
    ///
    /// # Panics
    ///
    /// Panics if this is `Empty`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mayhaps::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::Present(42).unwrap_present(), 42);
    /// ```
    #[inline]
    pub fn unwrap_present(self) -> T {
        match self {
            Self::Present(value) => value,
            Self::Empty => panic!(
                "{}",
                EmptyValueError {
                    operation: "Maybe::unwrap_present",
                }
            ),
        }
    }

    // =========================================================================
    // Chaining Operations
    // =========================================================================

    /// Applies a `Maybe`-returning function to the present value.
    ///
    /// On `Present(x)` the result of `function(x)` is returned as-is; on
    /// `Empty` the function is not invoked and `Empty` is returned. Faults
    /// raised by `function` are never intercepted; the explicit opt-in for
    /// failure conversion is [`bind_or_empty`](Self::bind_or_empty).
    ///
    /// This short-circuits only this single step. Later calls in a
    /// hand-written chain still execute (each testing its own input); use
    /// [`bind_all`](Self::bind_all) to fold a pipeline that halts outright.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mayhaps::maybe::Maybe;
    ///
    /// let result = Maybe::Present(5).bind(|n| Maybe::Present(n * 2));
    /// assert_eq!(result, Maybe::Present(10));
    ///
    /// let skipped = Maybe::<i32>::Empty.bind(|n| Maybe::Present(n * 2));
    /// assert_eq!(skipped, Maybe::Empty);
    /// ```
    #[inline]
    pub fn bind<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Empty => Maybe::Empty,
        }
    }

    /// Sequences a computation that does not need the present value.
    ///
    /// The value-discarding variant of [`bind`](Self::bind), used for
    /// steps that only matter for their result. On `Empty` the thunk is
    /// not invoked, symmetric with `bind`, so a side-effecting step never
    /// runs against an absent value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mayhaps::maybe::Maybe;
    ///
    /// let result = Maybe::Present(5).chain(|| Maybe::Present("next"));
    /// assert_eq!(result, Maybe::Present("next"));
    ///
    /// let skipped = Maybe::<i32>::Empty.chain(|| Maybe::Present("next"));
    /// assert_eq!(skipped, Maybe::Empty);
    /// ```
    #[inline]
    pub fn chain<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce() -> Maybe<U>,
    {
        match self {
            Self::Present(_) => function(),
            Self::Empty => Maybe::Empty,
        }
    }

    /// The failure injection: yields `Empty` for any diagnostic.
    ///
    /// `Empty` carries no payload, so the message is discarded; it exists
    /// for call sites that want to spell out why a chain step gave up.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mayhaps::maybe::Maybe;
    ///
    /// let result = Maybe::Present(5)
    ///     .bind(|n| if n > 10 { Maybe::Present(n) } else { Maybe::fail("too small") });
    /// assert_eq!(result, Maybe::Empty);
    /// ```
    #[inline]
    pub const fn fail(_message: &str) -> Self {
        Self::Empty
    }

    /// Applies a fallible step, converting its failure to `Empty`.
    ///
    /// The explicit opt-in counterpart to [`bind`](Self::bind): the step
    /// returns `Result<Maybe<U>, E>`, and an `Err` collapses to `Empty`
    /// with the error discarded. Panics are still never caught.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mayhaps::maybe::Maybe;
    ///
    /// let parsed = Maybe::Present("42")
    ///     .bind_or_empty(|text| text.parse::<i32>().map(Maybe::Present));
    /// assert_eq!(parsed, Maybe::Present(42));
    ///
    /// let failed = Maybe::Present("not a number")
    ///     .bind_or_empty(|text| text.parse::<i32>().map(Maybe::Present));
    /// assert_eq!(failed, Maybe::Empty);
    /// ```
    #[inline]
    pub fn bind_or_empty<U, E, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Result<Maybe<U>, E>,
    {
        match self {
            Self::Present(value) => function(value).unwrap_or(Maybe::Empty),
            Self::Empty => Maybe::Empty,
        }
    }

    /// Folds an ordered sequence of steps, halting at the first `Empty`.
    ///
    /// Each step maps the current value to a new `Maybe<T>`. Once a step
    /// yields `Empty`, no later step is invoked. This is the whole-chain
    /// short-circuit that hand-written `.bind(...).bind(...)` call chains
    /// do not provide.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mayhaps::maybe::Maybe;
    ///
    /// let steps: Vec<fn(i32) -> Maybe<i32>> = vec![
    ///     |n| Maybe::Present(n + 1),
    ///     |_| Maybe::Empty,
    ///     |n| Maybe::Present(n * 1000),
    /// ];
    /// assert_eq!(Maybe::Present(5).bind_all(steps), Maybe::Empty);
    /// ```
    pub fn bind_all<I, F>(self, steps: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: FnOnce(T) -> Self,
    {
        let mut current = self;
        for step in steps {
            match current {
                Self::Present(value) => current = step(value),
                Self::Empty => return Self::Empty,
            }
        }
        current
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Collapses one level of nesting.
    ///
    /// `Present(inner)` returns `inner` directly; `Empty` stays `Empty`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mayhaps::maybe::Maybe;
    ///
    /// let nested = Maybe::Present(Maybe::Present(42));
    /// assert_eq!(nested.join(), Maybe::Present(42));
    ///
    /// let hollow: Maybe<Maybe<i32>> = Maybe::Present(Maybe::Empty);
    /// assert_eq!(hollow.join(), Maybe::Empty);
    /// ```
    #[inline]
    pub fn join(self) -> Maybe<T> {
        match self {
            Self::Present(inner) => inner,
            Self::Empty => Maybe::Empty,
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => formatter.debug_tuple("Present").field(value).finish(),
            Self::Empty => formatter.write_str("Empty"),
        }
    }
}

// =============================================================================
// Default Implementation
// =============================================================================

impl<T> Default for Maybe<T> {
    /// The default `Maybe` is `Empty`, for any payload type.
    #[inline]
    fn default() -> Self {
        Self::Empty
    }
}

// =============================================================================
// Option Conversions
// =============================================================================

impl<T> From<Option<T>> for Maybe<T> {
    /// Converts an `Option` to a `Maybe`.
    ///
    /// `Some(x)` becomes `Present(x)`, and `None` becomes `Empty`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mayhaps::maybe::Maybe;
    ///
    /// let present: Maybe<i32> = Some(42).into();
    /// assert_eq!(present, Maybe::Present(42));
    ///
    /// let empty: Maybe<i32> = None.into();
    /// assert_eq!(empty, Maybe::Empty);
    /// ```
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Present(value),
            None => Self::Empty,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    /// Converts a `Maybe` to an `Option`.
    ///
    /// `Present(x)` becomes `Some(x)`, and `Empty` becomes `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mayhaps::maybe::Maybe;
    ///
    /// let some: Option<i32> = Maybe::Present(42).into();
    /// assert_eq!(some, Some(42));
    /// ```
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.present()
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for Maybe<T> {
    type Inner = T;
    type WithType<B> = Maybe<B>;
}

impl<T> Functor for Maybe<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> B,
    {
        match self {
            Self::Present(value) => Maybe::Present(function(value)),
            Self::Empty => Maybe::Empty,
        }
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&T) -> B,
    {
        match self {
            Self::Present(value) => Maybe::Present(function(value)),
            Self::Empty => Maybe::Empty,
        }
    }
}

impl<T> Applicative for Maybe<T> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Present(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Self::Present(first), Maybe::Present(second)) => {
                Maybe::Present(function(first, second))
            }
            _ => Maybe::Empty,
        }
    }
}

impl<T> Monad for Maybe<T> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> Maybe<B>,
    {
        // Delegate to the inherent bind
        self.bind(function)
    }
}

// =============================================================================
// Compile-time Guarantees
// =============================================================================

static_assertions::assert_impl_all!(Maybe<i32>: Send, Sync, Copy);
static_assertions::assert_eq_size!(Maybe<u64>, Option<u64>);
static_assertions::assert_eq_size!(Maybe<Box<u64>>, Box<u64>);
