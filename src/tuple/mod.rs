use crate::layout::{Forward, Layout, SlotAt};
use crate::slot::{Slot, Strategy};
use core::cmp::Ordering;
use core::fmt::{self, Debug, Formatter};
use core::hash::{Hash, Hasher};
use type_list::Nth;


/// Fixed-arity heterogeneous container over the element list `L`, written as a native tuple type.
///
/// Stateless elements take no space, the index of every element is checked at compile time, and elements drop in
/// reverse index order.
///
/// ```rust
/// use compact_tuple::Tuple;
///
/// #[derive(Default)]
/// struct Stateless;
///
/// let mut tuple = Tuple::<(u8, Stateless, i32, Stateless, f64)>::new((1_u8, Stateless, 2, Stateless, 3.5));
///
/// *tuple.get_mut::<2>() += 40;
///
/// assert_eq!(*tuple.get::<2>(), 42);
/// assert_eq!(size_of_val(&tuple), 16);
/// ```
#[repr(transparent)]
pub struct Tuple<L>
where
    L: Layout,
{
    slots: L::Slots,
}

impl<L> Tuple<L>
where
    L: Layout,
{
    /// Number of elements.
    pub const ARITY: usize = L::LEN;

    /// Builds the container from one argument per element, converting each argument into its element type.
    ///
    /// ```rust
    /// use compact_tuple::Tuple;
    ///
    /// let tuple = Tuple::<(i64, String)>::new((1_i32, "abc"));
    ///
    /// assert_eq!(*tuple.get::<0>(), 1);
    /// assert_eq!(tuple.get::<1>(), "abc");
    /// ```
    ///
    /// ```compile_fail
    /// use compact_tuple::Tuple;
    ///
    /// let tuple = Tuple::<(i64, String)>::new((1_i32,));
    /// ```
    #[must_use]
    pub fn new<A>(args: A) -> Self
    where
        L: Forward<A>,
    {
        Self {
            slots: L::forward(args),
        }
    }

    /// Builds the container from exactly one value per element.
    #[must_use]
    pub fn from_values(values: L) -> Self {
        Self {
            slots: values.into_slots(),
        }
    }

    /// Moves the elements out into a native tuple.
    #[must_use]
    pub fn into_inner(self) -> L {
        L::from_slots(self.slots)
    }

    /// Borrows every element, for destructuring.
    ///
    /// ```rust
    /// use compact_tuple::Tuple;
    ///
    /// let tuple = Tuple::<(i32, String)>::new((1, "abc"));
    /// let (number, text) = tuple.as_refs();
    ///
    /// assert_eq!((*number, text.as_str()), (1, "abc"));
    /// ```
    #[must_use]
    pub fn as_refs(&self) -> L::Refs<'_> {
        L::refs(&self.slots)
    }

    /// Borrows every element exclusively, for destructuring.
    pub fn as_mut_refs(&mut self) -> L::RefsMut<'_> {
        L::refs_mut(&mut self.slots)
    }

    /// Shared access to the element at index `I`.
    ///
    /// ```compile_fail
    /// use compact_tuple::Tuple;
    ///
    /// let tuple = Tuple::<(u8,)>::new((1,));
    ///
    /// tuple.get::<1>();
    /// ```
    #[must_use]
    pub fn get<const I: usize>(&self) -> &Nth<L, I>
    where
        L: SlotAt<I>,
    {
        L::slot(&self.slots).get()
    }

    /// Exclusive access to the element at index `I`.
    pub fn get_mut<const I: usize>(&mut self) -> &mut Nth<L, I>
    where
        L: SlotAt<I>,
    {
        L::slot_mut(&mut self.slots).get_mut()
    }

    /// Stores `value` at index `I` and returns the previous element.
    pub fn replace<const I: usize>(&mut self, value: Nth<L, I>) -> Nth<L, I>
    where
        L: SlotAt<I>,
    {
        L::slot_mut(&mut self.slots).replace(value)
    }

    /// Layout strategy of the element at index `I`.
    #[must_use]
    pub const fn strategy<const I: usize>() -> Strategy
    where
        L: SlotAt<I>,
    {
        Slot::<I, Nth<L, I>>::STRATEGY
    }

    /// Layout strategies of all elements, in index order.
    #[must_use]
    pub const fn strategies() -> &'static [Strategy] {
        L::STRATEGIES
    }

    /// Number of elements stored as fields, that is, the ones that are not folded away.
    #[must_use]
    pub fn field_backed() -> usize {
        L::STRATEGIES.iter().filter(|strategy| !strategy.is_folded()).count()
    }
}

impl<L> From<L> for Tuple<L>
where
    L: Layout,
{
    fn from(values: L) -> Self {
        Self::from_values(values)
    }
}

impl<L> Default for Tuple<L>
where
    L: Layout + Default,
{
    fn default() -> Self {
        Self::from_values(L::default())
    }
}

impl<L> Clone for Tuple<L>
where
    L: Layout,
    L::Slots: Clone,
{
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
        }
    }
}

impl<L> Copy for Tuple<L>
where
    L: Layout,
    L::Slots: Copy,
{
}

// Comparison, hashing and formatting go through `as_refs` so that they follow index order rather than storage order.

macro_rules! impl_std_traits {
    ($(($($type:ident $binding:ident)*),)*) => {$(
        impl<$($type),*> PartialEq for Tuple<($($type,)*)>
        where
            $($type: PartialEq,)*
        {
            fn eq(&self, other: &Self) -> bool {
                self.as_refs() == other.as_refs()
            }
        }

        impl<$($type),*> Eq for Tuple<($($type,)*)> where $($type: Eq,)* {}

        impl<$($type),*> PartialOrd for Tuple<($($type,)*)>
        where
            $($type: PartialOrd,)*
        {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                self.as_refs().partial_cmp(&other.as_refs())
            }
        }

        impl<$($type),*> Ord for Tuple<($($type,)*)>
        where
            $($type: Ord,)*
        {
            fn cmp(&self, other: &Self) -> Ordering {
                self.as_refs().cmp(&other.as_refs())
            }
        }

        impl<$($type),*> Hash for Tuple<($($type,)*)>
        where
            $($type: Hash,)*
        {
            fn hash<H>(&self, state: &mut H)
            where
                H: Hasher,
            {
                self.as_refs().hash(state);
            }
        }

        impl<$($type),*> Debug for Tuple<($($type,)*)>
        where
            $($type: Debug,)*
        {
            fn fmt(&self, f: &mut Formatter) -> fmt::Result {
                let ($($binding,)*) = self.as_refs();

                f.debug_tuple("Tuple")$(.field($binding))*.finish()
            }
        }
    )*};
}

impl_std_traits![
    (),
    (T0 e0),
    (T0 e0 T1 e1),
    (T0 e0 T1 e1 T2 e2),
    (T0 e0 T1 e1 T2 e2 T3 e3),
    (T0 e0 T1 e1 T2 e2 T3 e3 T4 e4),
    (T0 e0 T1 e1 T2 e2 T3 e3 T4 e4 T5 e5),
    (T0 e0 T1 e1 T2 e2 T3 e3 T4 e4 T5 e5 T6 e6),
    (T0 e0 T1 e1 T2 e2 T3 e3 T4 e4 T5 e5 T6 e6 T7 e7),
    (T0 e0 T1 e1 T2 e2 T3 e3 T4 e4 T5 e5 T6 e6 T7 e7 T8 e8),
    (T0 e0 T1 e1 T2 e2 T3 e3 T4 e4 T5 e5 T6 e6 T7 e7 T8 e8 T9 e9),
    (T0 e0 T1 e1 T2 e2 T3 e3 T4 e4 T5 e5 T6 e6 T7 e7 T8 e8 T9 e9 T10 e10),
    (T0 e0 T1 e1 T2 e2 T3 e3 T4 e4 T5 e5 T6 e6 T7 e7 T8 e8 T9 e9 T10 e10 T11 e11),
];
