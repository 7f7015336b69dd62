//! Type class traits shared by the containers in this crate.
//!
//! The containers (`Identity`, and `Maybe` behind the `maybe` feature)
//! have no structural relationship, but they speak the same vocabulary:
//!
//! - [`Functor`]: mapping a function over the wrapped value
//! - [`Applicative`]: injecting plain values (`pure`) and combining
//!   independent containers
//! - [`Monad`]: sequencing computations where each step can depend on the
//!   previous result (`flat_map`)
//!
//! Rather than forcing an inheritance relationship between the concrete
//! types, each implements these traits independently.
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust has no native higher-kinded types, so the traits are written
//! against [`TypeConstructor`], which uses Generic Associated Types to
//! abstract over "the same container holding a different payload".
//!
//! # Examples
//!
//! ```rust
//! use mayhaps::typeclass::{Applicative, Functor, Identity, Monad};
//!
//! let wrapped = Identity::new(5);
//! let doubled = wrapped.fmap(|n| n * 2);
//! assert_eq!(doubled, Identity::new(10));
//!
//! let chained = Identity::new(5).flat_map(|n| Identity::new(n + 1));
//! assert_eq!(chained, Identity::new(6));
//!
//! let injected: Identity<i32> = <Identity<()>>::pure(42);
//! assert_eq!(injected, Identity::new(42));
//! ```

mod applicative;
mod functor;
mod higher;
mod identity;
mod monad;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use identity::Identity;
pub use monad::Monad;
