//! Rules: how a composite type decomposes into ordered components.
//!
//! A rule lists the component types that, decoded one after another, rebuild
//! the target type. Components may be primitives, byte arrays, views, padding
//! or other ruled types. Rules are declared once per type with [`rule!`]:
//!
//! ```rust
//! use fixed_layout::{rule, Decoder};
//!
//! #[derive(Debug, PartialEq)]
//! struct Version {
//!     major: u16,
//!     minor: u16,
//! }
//!
//! // brace form: components fill the named fields in order
//! rule! { Version { major: u16, minor: u16 } }
//!
//! #[derive(Debug, PartialEq)]
//! struct Tag(u32);
//!
//! // constructor form: components are passed positionally to a function
//! rule! { Tag = (u32,) => Tag }
//!
//! let bytes = [0x00, 0x01, 0x00, 0x02, 0xCA, 0xFE, 0xBA, 0xBE];
//! let mut decoder = Decoder::network(&bytes[..]);
//! assert_eq!(decoder.decode::<Version>().unwrap(), Version { major: 1, minor: 2 });
//! assert_eq!(decoder.decode::<Tag>().unwrap(), Tag(0xCAFE_BABE));
//! ```
//!
//! Types borrowing the buffer take a leading `impl<'a>`:
//!
//! ```rust
//! use fixed_layout::{rule, Decoder};
//!
//! struct Record<'a> {
//!     kind: u8,
//!     payload: &'a [u8; 3],
//! }
//!
//! rule! { impl<'a> Record<'a> { kind: u8, payload: &'a [u8; 3] } }
//!
//! let bytes = [7, b'a', b'b', b'c'];
//! let record: Record<'_> = Decoder::network(&bytes[..]).decode().unwrap();
//! assert_eq!(record.kind, 7);
//! assert_eq!(record.payload, b"abc");
//! ```
//!
//! A type without a rule, a type with two rules, and a rule that contains its
//! own type (directly or through other rules) are all compile errors.
//!
//! No rule:
//!
//! ```compile_fail,E0277
//! use fixed_layout::Decoder;
//!
//! struct Unruled(u16);
//!
//! let bytes = [0u8; 2];
//! let _ = Decoder::network(&bytes[..]).decode::<Unruled>();
//! ```
//!
//! Two rules for one type:
//!
//! ```compile_fail,E0119
//! use fixed_layout::rule;
//!
//! struct Port(u16);
//!
//! rule! { Port = (u16,) => Port }
//! rule! { Port = (u16,) => Port }
//! ```
//!
//! Rules that contain each other:
//!
//! ```compile_fail,E0391
//! use fixed_layout::{length_of, rule};
//!
//! struct Outer(Inner);
//! struct Inner(Box<Outer>);
//!
//! rule! { Outer = (Inner,) => Outer }
//! rule! { Inner = (Outer,) => |outer| Inner(Box::new(outer)) }
//!
//! let buf = [0u8; length_of::<Outer>()];
//! ```

use crate::shape::Component;

/// The ordered decomposition of a composite type.
///
/// Usually implemented through [`rule!`], which also implements
/// [`Layout`](crate::Layout) and [`Decode`](crate::Decode) for the type.
pub trait Rule: Sized {
    /// Component types, in wire order.
    type Components;

    /// Runtime description of each component, in wire order.
    const COMPONENTS: &'static [Component];

    /// Build the value from its decoded components.
    fn assemble(parts: Self::Components) -> Self;
}

/// Call a function with the elements of a tuple as positional arguments.
pub trait Apply<F, R> {
    fn apply(self, f: F) -> R;
}

macro_rules! impl_apply {
    ($($t:ident),+) => {
        impl<Func, Ret, $($t),+> Apply<Func, Ret> for ($($t,)+)
        where
            Func: FnOnce($($t),+) -> Ret,
        {
            #[inline]
            #[allow(non_snake_case)]
            fn apply(self, f: Func) -> Ret {
                let ($($t,)+) = self;
                f($($t),+)
            }
        }
    };
}

impl_apply!(A);
impl_apply!(A, B);
impl_apply!(A, B, C);
impl_apply!(A, B, C, D);
impl_apply!(A, B, C, D, E);
impl_apply!(A, B, C, D, E, F);
impl_apply!(A, B, C, D, E, F, G);
impl_apply!(A, B, C, D, E, F, G, H);
impl_apply!(A, B, C, D, E, F, G, H, I);
impl_apply!(A, B, C, D, E, F, G, H, I, J);
impl_apply!(A, B, C, D, E, F, G, H, I, J, K);
impl_apply!(A, B, C, D, E, F, G, H, I, J, K, L);
impl_apply!(A, B, C, D, E, F, G, H, I, J, K, L, M);
impl_apply!(A, B, C, D, E, F, G, H, I, J, K, L, M, N);
impl_apply!(A, B, C, D, E, F, G, H, I, J, K, L, M, N, O);
impl_apply!(A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P);

/// Declare the decode rule of a composite type.
///
/// Two forms are accepted, each optionally prefixed by `impl<'a, ...>`:
///
/// * `Type { field: Component, ... }` fills the named fields, in order;
/// * `Type = (Component, ...) => constructor` calls `constructor` with the
///   decoded components as positional arguments.
///
/// The rule implements [`Rule`], [`Layout`](crate::Layout) and
/// [`Decode`](crate::Decode) for the type. See the [module docs](crate::rule).
#[macro_export]
macro_rules! rule {
    (impl<$($lt:lifetime),+ $(,)?> $ty:ty { $($field:ident : $c:ty),+ $(,)? }) => {
        $crate::__rule_fields!([$($lt),+] $ty { $($field : $c),+ });
    };
    (impl<$($lt:lifetime),+ $(,)?> $ty:ty = ($($c:ty),+ $(,)?) => $ctor:expr $(;)?) => {
        $crate::__rule_ctor!([$($lt),+] $ty = ($($c),+) => $ctor);
    };
    ($ty:ty { $($field:ident : $c:ty),+ $(,)? }) => {
        $crate::__rule_fields!([] $ty { $($field : $c),+ });
    };
    ($ty:ty = ($($c:ty),+ $(,)?) => $ctor:expr $(;)?) => {
        $crate::__rule_ctor!([] $ty = ($($c),+) => $ctor);
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __rule_fields {
    ([$($lt:lifetime),*] $ty:ty { $($field:ident : $c:ty),+ }) => {
        impl<$($lt),*> $crate::Rule for $ty {
            type Components = ($($c,)+);

            const COMPONENTS: &'static [$crate::Component] = &[
                $($crate::Component::of::<$c>(stringify!($field), stringify!($c))),+
            ];

            #[inline]
            fn assemble(parts: Self::Components) -> Self {
                let ($($field,)+) = parts;
                Self { $($field),+ }
            }
        }

        $crate::__rule_decode!([$($lt),*] $ty = ($($c),+));
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __rule_ctor {
    ([$($lt:lifetime),*] $ty:ty = ($($c:ty),+) => $ctor:expr) => {
        impl<$($lt),*> $crate::Rule for $ty {
            type Components = ($($c,)+);

            const COMPONENTS: &'static [$crate::Component] = &[
                $($crate::Component::of::<$c>("", stringify!($c))),+
            ];

            #[inline]
            fn assemble(parts: Self::Components) -> Self {
                $crate::Apply::apply(parts, $ctor)
            }
        }

        $crate::__rule_decode!([$($lt),*] $ty = ($($c),+));
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __rule_decode {
    ([$($lt:lifetime),*] $ty:ty = ($($c:ty),+)) => {
        impl<$($lt),*> $crate::Layout for $ty {
            const SHAPE: $crate::Shape = $crate::Shape::Composite;
            const LEN: usize = <($($c,)+) as $crate::Layout>::LEN;
        }

        impl<$($lt,)* __B: $crate::Bytes> $crate::Decode<__B> for $ty
        where
            ($($c,)+): $crate::Decode<__B>,
        {
            #[inline]
            fn decode(cursor: &mut $crate::Cursor<__B>, endian: $crate::Endian) -> Self {
                <Self as $crate::Rule>::assemble(
                    <($($c,)+) as $crate::Decode<__B>>::decode(cursor, endian),
                )
            }
        }
    };
}
