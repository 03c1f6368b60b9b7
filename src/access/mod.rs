use crate::layout::{Layout, SlotAt};
use crate::tuple::Tuple;
use type_list::{Nth, TypeAt};


/// Element lists made only of exclusive references, the shape produced by [`tie`].
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be tied",
    note = "every element passed to `tie` must be a `&mut` reference"
)]
pub trait Tie: Layout {}

/// Compile-time element count of a container type.
pub trait Arity {
    /// Number of elements.
    const ARITY: usize;
}

impl<L> Arity for Tuple<L>
where
    L: Layout,
{
    const ARITY: usize = L::LEN;
}

/// Element type at index `I` of a container type.
#[diagnostic::on_unimplemented(message = "`{Self}` has no element at index {I}")]
pub trait TupleElement<const I: usize> {
    /// The element type.
    type Type;
}

impl<L, const I: usize> TupleElement<I> for Tuple<L>
where
    L: Layout + TypeAt<I>,
{
    type Type = Nth<L, I>;
}

/// Element type at index `I` of the container type `T`.
pub type Element<T, const I: usize> = <T as TupleElement<I>>::Type;

/// Returns the element count of `T`.
///
/// ```rust
/// use compact_tuple::{tuple_size, Tuple};
///
/// assert_eq!(tuple_size::<Tuple<()>>(), 0);
/// assert_eq!(tuple_size::<Tuple<(u8, (), (), i32)>>(), 4);
/// ```
#[must_use]
pub const fn tuple_size<T>() -> usize
where
    T: Arity,
{
    T::ARITY
}

/// Shared access to the element at index `I`. The index is checked at compile time.
///
/// ```rust
/// use compact_tuple::{get, Tuple};
///
/// let tuple = Tuple::<(i32, char)>::new((5, 'a'));
///
/// assert_eq!(*get::<0, _>(&tuple), 5);
/// assert_eq!(*get::<1, _>(&tuple), 'a');
/// ```
///
/// ```compile_fail
/// use compact_tuple::{get, Tuple};
///
/// let tuple = Tuple::<(i32, char)>::new((5, 'a'));
///
/// get::<2, _>(&tuple);
/// ```
#[must_use]
pub fn get<const I: usize, L>(tuple: &Tuple<L>) -> &Nth<L, I>
where
    L: SlotAt<I>,
{
    tuple.get::<I>()
}

/// Exclusive access to the element at index `I`. The index is checked at compile time.
pub fn get_mut<const I: usize, L>(tuple: &mut Tuple<L>) -> &mut Nth<L, I>
where
    L: SlotAt<I>,
{
    tuple.get_mut::<I>()
}

/// Builds a container that owns `values`, with the element types inferred from the values.
///
/// Values are taken by value: owned values move in and `Copy` values are copied. Element types must be `'static`, so
/// the container owns independent copies and never holds a reference into the caller's variables. Use [`tie`] to
/// build a container of references.
///
/// ```rust
/// use compact_tuple::{make, Tuple};
///
/// let name = String::from("abc");
/// let tuple: Tuple<(i32, String, f64)> = make((1, name, 2.5));
///
/// assert_eq!(tuple.get::<1>(), "abc");
/// ```
///
/// ```compile_fail
/// use compact_tuple::make;
///
/// let mut source = 1;
/// let tuple = make((&mut source,));
///
/// drop(tuple);
/// ```
#[must_use]
pub fn make<L>(values: L) -> Tuple<L>
where
    L: Layout + 'static,
{
    Tuple::from_values(values)
}

/// Builds a container of exclusive references to existing variables. Writing through the container writes the
/// variables, and the borrow checker keeps the container from outliving them.
///
/// ```rust
/// use compact_tuple::tie;
///
/// let mut a = 1;
/// let mut b = 'b';
/// let mut tied = tie((&mut a, &mut b));
///
/// **tied.get_mut::<0>() = 10;
/// **tied.get_mut::<1>() = 'c';
///
/// assert_eq!((a, b), (10, 'c'));
/// ```
///
/// ```compile_fail
/// use compact_tuple::tie;
///
/// let a = 1;
///
/// tie((a,));
/// ```
#[must_use]
pub fn tie<R>(refs: R) -> Tuple<R>
where
    R: Tie,
{
    Tuple::from_values(refs)
}
