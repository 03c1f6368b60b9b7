//! # compact-tuple
//!
//! A fixed-arity heterogeneous container whose storage layout is decided at compile time. Every element lives in
//! its own index-tagged [`Slot`]. Stateless elements fold away and take no space. Indices are checked when the
//! program is built, never at run time.
//!
//! Example:
//!
//! ```rust
//! use compact_tuple::{get, make, tie, tuple_size, Element, Strategy, Tuple};
//!
//! #[derive(Clone, Copy, Debug, Default, PartialEq)]
//! struct Stateless;
//!
//! type Mixed = Tuple<(u8, Stateless, i32, Stateless, f64)>;
//!
//! // Stateless elements do not add to the size.
//! assert!(size_of::<Mixed>() <= size_of::<(u8, i32, f64)>());
//! assert_eq!(Mixed::field_backed(), 3);
//! assert_eq!(Mixed::strategy::<1>(), Strategy::Folded);
//! assert_eq!(tuple_size::<Mixed>(), 5);
//!
//! // Elements are accessed by a compile-time index.
//! let mut tuple = Mixed::new((1_u8, Stateless, 2, Stateless, 3.5));
//!
//! *tuple.get_mut::<2>() = 20;
//!
//! assert_eq!(*get::<2, _>(&tuple), 20);
//!
//! // The element type at an index can be named.
//! let value: Element<Mixed, 4> = *tuple.get::<4>();
//!
//! assert_eq!(value, 3.5);
//!
//! // `make` infers the element types, `tie` builds a container of references.
//! let owned = make((String::from("abc"), 'x'));
//! let mut count = 0;
//! let mut tied = tie((&mut count,));
//!
//! **tied.get_mut::<0>() += 1;
//!
//! assert_eq!(owned.get::<0>(), "abc");
//! assert_eq!(count, 1);
//! ```

#![cfg_attr(not(test), no_std)]

pub use self::access::{Arity, Element, Tie, TupleElement, get, get_mut, make, tie, tuple_size};
pub use self::layout::{Forward, Layout, SlotAt};
pub use self::slot::{Slot, Strategy};
pub use self::tuple::Tuple;
pub use type_list::{Nth, TypeAt, TypeList};

mod access;
mod layout;
mod slot;
mod tuple;

/// Builds a [`Tuple`] that owns the given values. See [`make`].
///
/// ```rust
/// let tuple = compact_tuple::make!(1, 'b', "c");
///
/// assert_eq!(tuple.into_inner(), (1, 'b', "c"));
/// ```
#[macro_export]
macro_rules! make {
    ($($value:expr),* $(,)?) => {
        $crate::make(($($value,)*))
    };
}

/// Builds a [`Tuple`] of exclusive references to the given places. See [`tie`].
///
/// ```rust
/// let mut a = 1;
/// let mut b = 2;
///
/// {
///     let mut tied = compact_tuple::tie!(a, b);
///     let (first, second) = tied.as_mut_refs();
///
///     core::mem::swap(*first, *second);
/// }
///
/// assert_eq!((a, b), (2, 1));
/// ```
#[macro_export]
macro_rules! tie {
    ($($place:expr),* $(,)?) => {
        $crate::tie(($(&mut $place,)*))
    };
}
