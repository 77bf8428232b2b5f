//! Macros for defining assertion types with minimal boilerplate.
//!
//! - `assert_type!` (crate-internal): a concrete validator struct plus its
//!   `Assert`, `Validate` and `Debug` impls
//! - [`zero_value_by_default!`](crate::zero_value_by_default): opt a type into
//!   [`ZeroValue`](crate::foundation::ZeroValue) by comparing against `Default`

// ============================================================================
// ASSERT TYPE MACRO
// ============================================================================

/// Declares a concrete validator: the struct owning a `Rules<Input>` (plus
/// any extra fields), the `Assert<Input>` impl, a `Validate` impl that
/// delegates to fail-fast evaluation, and a `Debug` impl.
///
/// Mixins are opted into separately with empty `impl` blocks, and the
/// constructor function is written by hand next to the invocation.
///
/// ```rust,ignore
/// assert_type! {
///     /// Rules for numbers.
///     pub struct NumAssert<T> for T where { T: Numeric };
/// }
///
/// assert_type! {
///     pub struct OrdAssert<T> for T where { T: PartialEq + Debug + Send + Sync + 'static } {
///         is_greater: Comparator<T>,
///     };
/// }
/// ```
macro_rules! assert_type {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident $(<$($gen:ident),+ $(,)?>)? for $input:ty
        $(where { $($bounds:tt)* })?
        $({ $($field:ident: $fty:ty),* $(,)? })?
        ;
    ) => {
        $(#[$meta])*
        $vis struct $name $(<$($gen),+>)?
        $(where $($bounds)*)?
        {
            rules: $crate::foundation::Rules<$input>,
            $($($field: $fty,)*)?
        }

        impl $(<$($gen),+>)? $crate::foundation::Assert<$input> for $name $(<$($gen),+>)?
        $(where $($bounds)*)?
        {
            fn rules(&self) -> &$crate::foundation::Rules<$input> {
                &self.rules
            }

            fn rules_mut(&mut self) -> &mut $crate::foundation::Rules<$input> {
                &mut self.rules
            }
        }

        impl $(<$($gen),+>)? $crate::foundation::Validate for $name $(<$($gen),+>)?
        $(where $($bounds)*)?
        {
            type Input = $input;

            fn validate(&self, input: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                self.rules.check(input)
            }
        }

        impl $(<$($gen),+>)? ::std::fmt::Debug for $name $(<$($gen),+>)?
        $(where $($bounds)*)?
        {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("rules", &self.rules)
                    .finish_non_exhaustive()
            }
        }
    };
}

pub(crate) use assert_type;

// ============================================================================
// ZERO VALUE MACRO
// ============================================================================

/// Implements [`ZeroValue`](crate::foundation::ZeroValue) for types whose
/// zero value is their `Default`, so they work with
/// [`AnyAssert::not_zero`](crate::validators::AnyAssert::not_zero).
///
/// The types must implement `Default` and `PartialEq`. Such values are never
/// nil-deep.
///
/// # Examples
///
/// ```
/// use nebula_assert::prelude::*;
/// use nebula_assert::zero_value_by_default;
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// zero_value_by_default!(Point);
///
/// let origin_rejected = any::<Point>().not_zero();
/// assert!(origin_rejected.check(&Point { x: 1, y: 0 }).is_ok());
/// assert!(origin_rejected.check(&Point::default()).is_err());
/// ```
#[macro_export]
macro_rules! zero_value_by_default {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::foundation::ZeroValue for $ty {
                fn is_zero_value(&self) -> bool {
                    *self == <$ty as ::core::default::Default>::default()
                }
            }
        )+
    };
}
