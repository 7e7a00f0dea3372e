// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tagged unions: extraction by type and visitation by overload set.
//!
//! A variant here is any enum whose alternatives each carry a distinct payload
//! type. [`Alternative<T>`] says "this enum may hold a `T`", which is all
//! [`try_extract`] needs. [`Visit<T>`] is one overload of a visitor; a type that
//! implements it for every alternative is an overload set, and the generated
//! `visit` method picks the right overload for whatever the variant holds.
//!
//! The [`variant!`](crate::variant!) macro declares such an enum and writes the
//! impls for you:
//!
//! ```
//! use expected::{try_extract, variant, Visit};
//!
//! variant! {
//!     #[derive(Debug, Clone, PartialEq)]
//!     pub enum Number {
//!         Int(i32),
//!         Double(f64),
//!     }
//! }
//!
//! let n = Number::Int(1);
//! assert_eq!(*try_extract::<i32, _>(&n).value(), 1);
//! assert!(!try_extract::<f64, _>(&n).is_success());
//!
//! struct Describe;
//! impl Visit<i32> for Describe {
//!     type Output = String;
//!     fn visit(&mut self, value: &i32) -> String { format!("int:{}", value) }
//! }
//! impl Visit<f64> for Describe {
//!     type Output = String;
//!     fn visit(&mut self, value: &f64) -> String { format!("double:{}", value) }
//! }
//!
//! assert_eq!(n.visit(&mut Describe), "int:1");
//! ```

use crate::expected::Expected;

/// Failure message returned by [`try_extract`] when the alternative is absent.
pub const MISSING_ALTERNATIVE: &str = "variant doesn't contain the desired type";

/// A tagged union with an alternative of type `T`.
pub trait Alternative<T> {
    /// Borrow the payload if the `T` alternative is the one currently held.
    fn get_if(&self) -> Option<&T>;

    /// True if the `T` alternative is the one currently held.
    fn holds(&self) -> bool {
        self.get_if().is_some()
    }
}

/// One overload of a visitor: how to handle a `T` payload.
pub trait Visit<T: ?Sized> {
    type Output;

    fn visit(&mut self, value: &T) -> Self::Output;
}

/// Copy the `T` payload out of `variant`.
///
/// Returns a success holding a clone of the payload when `variant` holds the
/// `T` alternative, and a failure carrying [`MISSING_ALTERNATIVE`] otherwise.
/// Never panics.
pub fn try_extract<T, V>(variant: &V) -> Expected<T, String>
where
    T: Clone,
    V: Alternative<T> + ?Sized,
{
    match variant.get_if() {
        Some(payload) => Expected::success(payload.clone()),
        None => Expected::failure(MISSING_ALTERNATIVE.to_string()),
    }
}

/// Declare a tagged union.
///
/// Every alternative is a tuple variant with exactly one payload, and all
/// payload types must be distinct. For each alternative the macro implements
/// [`Alternative`](crate::Alternative) and `From<Payload>`, and it adds an
/// inherent `visit` method dispatching to a [`Visit`](crate::Visit) overload set.
#[macro_export]
macro_rules! variant {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($alt:ident($ty:ty)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $($alt($ty)),+
        }

        $(
            impl $crate::Alternative<$ty> for $name {
                fn get_if(&self) -> ::core::option::Option<&$ty> {
                    match self {
                        $name::$alt(payload) => ::core::option::Option::Some(payload),
                        #[allow(unreachable_patterns)]
                        _ => ::core::option::Option::None,
                    }
                }
            }

            impl ::core::convert::From<$ty> for $name {
                fn from(payload: $ty) -> Self {
                    $name::$alt(payload)
                }
            }
        )+

        impl $name {
            /// Dispatch the held payload to the matching overload of `visitor`.
            #[allow(dead_code)]
            $vis fn visit<__Visitor, __Output>(&self, visitor: &mut __Visitor) -> __Output
            where
                $(__Visitor: $crate::Visit<$ty, Output = __Output>,)+
            {
                match self {
                    $($name::$alt(payload) => {
                        <__Visitor as $crate::Visit<$ty>>::visit(visitor, payload)
                    })+
                }
            }
        }
    };
}
