//! The free-function combinator library over [`Maybe`].
//!
//! These functions operate on `Maybe` values without needing to know
//! their representation; the inherent methods on [`Maybe`] are thin
//! wrappers over the same dispatch. The set follows `Data.Maybe`:
//! case analysis ([`maybe`]), extraction ([`from_just`], [`from_maybe`])
//! and the list bridge ([`list_to_maybe`], [`maybe_to_list`],
//! [`cat_maybes`], [`map_maybe`]).
//!
//! Every function here is total except [`from_just`], whose `Err` case is
//! the library's only failure path. Faults raised by caller-supplied
//! functions propagate unchanged.

use super::Maybe;
use super::error::EmptyValueError;
use super::nullish::Nullish;

/// Case analysis: applies a function to a present value or falls back to
/// a default.
///
/// `Present(x)` yields `function(x)`; `Empty` yields `default`. The
/// default is evaluated eagerly by the caller, like every argument in
/// this library. Faults raised by `function` propagate uncaught.
///
/// # Examples
///
/// ```rust
/// use mayhaps::maybe::{Maybe, maybe};
///
/// let described = maybe("nothing".to_string(), |n: i32| n.to_string(), Maybe::Present(42));
/// assert_eq!(described, "42");
///
/// let fallback = maybe("nothing".to_string(), |n: i32| n.to_string(), Maybe::Empty);
/// assert_eq!(fallback, "nothing");
/// ```
#[inline]
pub fn maybe<T, U, F>(default: U, function: F, value: Maybe<T>) -> U
where
    F: FnOnce(T) -> U,
{
    match value {
        Maybe::Present(inner) => function(inner),
        Maybe::Empty => default,
    }
}

/// Extracts the present value, or reports the attempt on `Empty`.
///
/// This is the only combinator with a failure path. Callers that cannot
/// rule out `Empty` should prefer [`from_maybe`], which never fails.
///
/// # Errors
///
/// Returns [`EmptyValueError`] if the value is `Empty`.
///
/// # Examples
///
/// ```rust
/// use mayhaps::maybe::{Maybe, from_just};
///
/// assert_eq!(from_just(Maybe::Present(42)), Ok(42));
/// assert!(from_just(Maybe::<i32>::Empty).is_err());
/// ```
#[inline]
pub fn from_just<T>(value: Maybe<T>) -> Result<T, EmptyValueError> {
    match value {
        Maybe::Present(inner) => Ok(inner),
        Maybe::Empty => Err(EmptyValueError {
            operation: "from_just",
        }),
    }
}

/// Extracts the present value, or returns the default. Total.
///
/// # Examples
///
/// ```rust
/// use mayhaps::maybe::{Maybe, from_maybe};
///
/// assert_eq!(from_maybe(0, Maybe::Present(42)), 42);
/// assert_eq!(from_maybe(0, Maybe::Empty), 0);
/// ```
#[inline]
pub fn from_maybe<T>(default: T, value: Maybe<T>) -> T {
    match value {
        Maybe::Present(inner) => inner,
        Maybe::Empty => default,
    }
}

/// Classifies the first element of a sequence, or `Empty` for an empty
/// sequence.
///
/// The head goes through the smart constructor, so a first element that
/// is itself an absence sentinel (a NaN, a `None`) yields `Empty` rather
/// than `Present(sentinel)`.
///
/// # Examples
///
/// ```rust
/// use mayhaps::maybe::{Maybe, list_to_maybe};
///
/// assert_eq!(list_to_maybe(vec![1, 2, 3]), Maybe::Present(1));
/// assert_eq!(list_to_maybe(Vec::<i32>::new()), Maybe::Empty);
/// assert_eq!(list_to_maybe(vec![f64::NAN, 2.0]), Maybe::Empty);
/// ```
#[inline]
pub fn list_to_maybe<T, I>(values: I) -> Maybe<T>
where
    T: Nullish,
    I: IntoIterator<Item = T>,
{
    values.into_iter().next().map_or(Maybe::Empty, Maybe::of)
}

/// Converts a `Maybe` into a sequence of zero or one elements.
///
/// # Examples
///
/// ```rust
/// use mayhaps::maybe::{Maybe, maybe_to_list};
///
/// assert_eq!(maybe_to_list(Maybe::Present(42)), vec![42]);
/// assert_eq!(maybe_to_list(Maybe::<i32>::Empty), Vec::<i32>::new());
/// ```
#[inline]
pub fn maybe_to_list<T>(value: Maybe<T>) -> Vec<T> {
    match value {
        Maybe::Present(inner) => vec![inner],
        Maybe::Empty => Vec::new(),
    }
}

/// Collects the present values of a sequence, in order, dropping every
/// `Empty`.
///
/// # Examples
///
/// ```rust
/// use mayhaps::maybe::{Maybe, cat_maybes};
///
/// let values = vec![
///     Maybe::Present(5),
///     Maybe::Empty,
///     Maybe::Present(10),
/// ];
/// assert_eq!(cat_maybes(values), vec![5, 10]);
/// ```
#[inline]
pub fn cat_maybes<T, I>(values: I) -> Vec<T>
where
    I: IntoIterator<Item = Maybe<T>>,
{
    values.into_iter().filter_map(Maybe::present).collect()
}

/// Maps a `Maybe`-returning function over a sequence, keeping the present
/// results in order.
///
/// Equivalent to `cat_maybes` over the mapped sequence, but the function
/// is invoked exactly once per element, so an impure step observes each
/// element a single time.
///
/// # Examples
///
/// ```rust
/// use mayhaps::maybe::{Maybe, map_maybe};
///
/// let halved = map_maybe(
///     |n: i32| if n % 2 == 0 { Maybe::Present(n / 2) } else { Maybe::Empty },
///     vec![2, 3, 4],
/// );
/// assert_eq!(halved, vec![1, 2]);
/// ```
#[inline]
pub fn map_maybe<T, U, I, F>(function: F, values: I) -> Vec<U>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Maybe<U>,
{
    values
        .into_iter()
        .map(function)
        .filter_map(Maybe::present)
        .collect()
}
