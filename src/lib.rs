//! # mayhaps
//!
//! An optional-value library for Rust built around the `Maybe` monad.
//!
//! ## Overview
//!
//! This library provides two monadic containers and the combinator
//! vocabulary they share:
//!
//! - **`Maybe<T>`**: a two-variant sum type (`Present(T)` / `Empty`) with a
//!   smart constructor that classifies raw values by absence, plus the full
//!   `Data.Maybe`-style combinator set (`maybe`, `from_just`, `from_maybe`,
//!   `list_to_maybe`, `maybe_to_list`, `cat_maybes`, `map_maybe`)
//! - **`Identity<A>`**: the trivial wrapper that carries a value with no
//!   added behavior, the simplest model of the type classes
//! - **Type Classes**: `Functor`, `Applicative`, and `Monad` traits that
//!   define `fmap`, `pure`, and `flat_map` generically over both containers
//!
//! Chaining is strict: each `bind`/`chain` call site in a hand-written
//! chain is evaluated in sequence and tests its own input for emptiness.
//! To fold a whole pipeline of steps with a halt at the first `Empty`,
//! use [`Maybe::bind_all`](maybe::Maybe::bind_all).
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits and the `Identity` wrapper
//! - `maybe`: The `Maybe` type and its combinator library
//! - `serde`: `Serialize`/`Deserialize` for `Maybe` and `Identity`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use mayhaps::prelude::*;
//!
//! let present = Maybe::of(21).bind(|n| Maybe::of(n * 2));
//! assert_eq!(from_maybe(0, present), 42);
//!
//! let empty = Maybe::of(f64::NAN);
//! assert!(empty.is_empty());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use mayhaps::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "maybe")]
    pub use crate::maybe::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "maybe")]
pub mod maybe;

#[cfg(test)]
mod tests {
    #[test]
    fn library_compiles() {
        // Basic smoke test to ensure the library compiles
        assert!(true);
    }
}
