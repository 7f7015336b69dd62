//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a bare type constructor such as `Maybe<_>`;
//! a trait bound always names a fully applied type. [`TypeConstructor`]
//! works around this with a Generic Associated Type: an implementing type
//! knows its current payload (`Inner`) and can name "the same container
//! with a different payload" (`WithType<B>`). That is enough to express
//! `Functor`, `Applicative`, and `Monad` generically.

/// A trait representing a type constructor.
///
/// Implemented by a container applied to some payload type, for example
/// `Identity<A>` or `Maybe<A>`. The two associated items recover the
/// pieces of the application:
///
/// - `Inner`: the payload the container currently holds
/// - `WithType<B>`: the same container re-applied to `B`
///
/// # Laws
///
/// For any `F: TypeConstructor`:
///
/// 1. **Consistency**: `F::WithType<F::Inner>` is the same type as `F`.
/// 2. **Stability**: `WithType` changes only the payload, never the
///    container.
///
/// # Examples
///
/// ```rust
/// use mayhaps::typeclass::{Identity, TypeConstructor};
///
/// fn assert_payload<T: TypeConstructor<Inner = i32>>() {}
/// assert_payload::<Identity<i32>>();
/// ```
pub trait TypeConstructor {
    /// The payload type this container is currently applied to.
    type Inner;

    /// The same container applied to a different payload type `B`.
    ///
    /// The `TypeConstructor<Inner = B>` constraint keeps the result usable
    /// as a type constructor itself, so transformations can be chained.
    type WithType<B>: TypeConstructor<Inner = B>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::Identity;

    // Type-level checks; these only need to compile.

    #[test]
    fn identity_inner_type_is_correct() {
        fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
        assert_inner::<Identity<i32>>();
    }

    #[test]
    fn identity_with_type_produces_correct_type() {
        fn transform<T: TypeConstructor>(_value: T) -> T::WithType<String>
        where
            T::WithType<String>: Default,
        {
            Default::default()
        }

        let result: Identity<String> = transform(Identity::new(42));
        assert_eq!(result, Identity::new(String::new()));
    }

    #[test]
    fn chained_with_type_transformations() {
        type Step1 = <Identity<i32> as TypeConstructor>::WithType<String>;
        type Step2 = <Step1 as TypeConstructor>::WithType<bool>;

        fn assert_is_identity_bool<T: TypeConstructor<Inner = bool>>() {}
        assert_is_identity_bool::<Step2>();
    }

    #[test]
    fn nested_type_constructor_works() {
        fn assert_inner<T: TypeConstructor<Inner = Identity<i32>>>() {}
        assert_inner::<Identity<Identity<i32>>>();
    }
}
