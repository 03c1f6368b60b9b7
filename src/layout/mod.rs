use crate::access::Tie;
use crate::slot::{Slot, Strategy};
use type_list::{Nth, TypeAt, TypeList};


/// Storage plan for a list of element types, implemented for native tuples of up to 12 elements.
///
/// Every element gets its own [`Slot`], tagged with its index. The slots form one record whose fields are declared
/// in reverse index order, so they drop from the last index to the first. The compiler is free to pack the record,
/// and folded slots take no space in it.
pub trait Layout: TypeList + Sized {
    /// The record of slots.
    type Slots;

    /// Shared references to every element, in index order.
    type Refs<'a>
    where
        Self: 'a;

    /// Exclusive references to every element, in index order.
    type RefsMut<'a>
    where
        Self: 'a;

    /// The strategy of every slot, in index order.
    const STRATEGIES: &'static [Strategy];

    /// Moves the values into their slots. Values are taken in index order.
    fn into_slots(self) -> Self::Slots;

    /// Moves the values back out of their slots.
    fn from_slots(slots: Self::Slots) -> Self;

    /// Borrows every element.
    fn refs(slots: &Self::Slots) -> Self::Refs<'_>;

    /// Borrows every element exclusively.
    fn refs_mut(slots: &mut Self::Slots) -> Self::RefsMut<'_>;
}

/// Builds the slots of `Self` from an argument tuple of the same arity, converting each argument into its element
/// type.
#[diagnostic::on_unimplemented(
    message = "cannot build a tuple of `{Self}` from `{Args}`",
    note = "the arguments must have one entry per element, each convertible into its element type with `Into`"
)]
pub trait Forward<Args>: Layout {
    /// Converts `args` into slots. Arguments are converted in index order.
    fn forward(args: Args) -> Self::Slots;
}

/// Access to the slot at index `I`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no slot at index {I}",
    label = "index {I} is out of range for this tuple"
)]
pub trait SlotAt<const I: usize>: Layout + TypeAt<I> {
    /// Resolves the slot through [`TypeAt`] and borrows it.
    fn slot(slots: &Self::Slots) -> &Slot<I, Nth<Self, I>>;

    /// Resolves the slot through [`TypeAt`] and borrows it exclusively.
    fn slot_mut(slots: &mut Self::Slots) -> &mut Slot<I, Nth<Self, I>>;
}

impl Layout for () {
    type Slots = ();
    type Refs<'a> = ();
    type RefsMut<'a> = ();

    const STRATEGIES: &'static [Strategy] = &[];

    fn into_slots(self) -> Self::Slots {}

    fn from_slots(slots: Self::Slots) -> Self {
        slots
    }

    fn refs(#[expect(unused_variables, reason = "for documentation")] slots: &Self::Slots) -> Self::Refs<'_> {}

    fn refs_mut(
        #[expect(unused_variables, reason = "for documentation")] slots: &mut Self::Slots,
    ) -> Self::RefsMut<'_> {
    }
}

impl Forward<()> for () {
    fn forward(args: ()) -> Self::Slots {
        args
    }
}

impl Tie for () {}

// Macros for implementing `SlotAt` trait.

macro_rules! impl_slot_at_single {
    ([$($all_types:ident)*] $index:tt $type:ident $position:tt) => {
        impl<$($all_types),*> SlotAt<$index> for ($($all_types,)*) {
            fn slot(slots: &Self::Slots) -> &Slot<$index, $type> {
                &slots.$position
            }

            fn slot_mut(slots: &mut Self::Slots) -> &mut Slot<$index, $type> {
                &mut slots.$position
            }
        }
    };
}

macro_rules! impl_slot_at {
    ($all_types:tt [$(($index:tt $type:ident))*] [$($position:tt)*]) => {
        $(impl_slot_at_single!($all_types $index $type $position);)*
    };
}

// Macros for implementing `Layout`, `Forward` and `Tie` traits. The second list holds the entries of the first one in
// reverse, so the slot of index `i` sits at position `n - 1 - i` of the record.

macro_rules! impl_layout {
    (
        [$(($index:tt $type:ident $arg:ident $slot:ident))*]
        [$(($rev_index:tt $rev_type:ident $rev_slot:ident))*]
    ) => {
        impl<$($type),*> Layout for ($($type,)*) {
            type Slots = ($(Slot<$rev_index, $rev_type>,)*);
            type Refs<'a> = ($(&'a $type,)*) where Self: 'a;
            type RefsMut<'a> = ($(&'a mut $type,)*) where Self: 'a;

            const STRATEGIES: &'static [Strategy] = &[$(Slot::<$index, $type>::STRATEGY),*];

            fn into_slots(self) -> Self::Slots {
                $(let $slot = Slot::new(self.$index);)*

                ($($rev_slot,)*)
            }

            fn from_slots(slots: Self::Slots) -> Self {
                let ($($rev_slot,)*) = slots;

                ($($slot.into_inner(),)*)
            }

            fn refs(slots: &Self::Slots) -> Self::Refs<'_> {
                ($(slots.$rev_index.get(),)*)
            }

            fn refs_mut(slots: &mut Self::Slots) -> Self::RefsMut<'_> {
                ($(slots.$rev_index.get_mut(),)*)
            }
        }

        impl<$($type, $arg),*> Forward<($($arg,)*)> for ($($type,)*)
        where
            $($arg: Into<$type>,)*
        {
            fn forward(args: ($($arg,)*)) -> Self::Slots {
                $(let $slot = Slot::from_arg(args.$index);)*

                ($($rev_slot,)*)
            }
        }

        impl<$($type: ?Sized),*> Tie for ($(&mut $type,)*) {}

        impl_slot_at!([$($type)*] [$(($index $type))*] [$($rev_index)*]);
    };
}

macro_rules! impl_layouts_helper {
    ($entries:tt $reversed:tt) => {
        impl_layout!($entries $reversed);
    };
    ([$($entries:tt)*] [$($reversed:tt)*] $index:tt $type:ident $arg:ident $slot:ident $($rest:tt)*) => {
        impl_layout!([$($entries)*] [$($reversed)*]);

        impl_layouts_helper!(
            [$($entries)* ($index $type $arg $slot)]
            [($index $type $slot) $($reversed)*]
            $($rest)*
        );
    };
}

macro_rules! impl_layouts {
    (
        ($first_index:tt, $first_type:ident, $first_arg:ident, $first_slot:ident),
        $(($index:tt, $type:ident, $arg:ident, $slot:ident),)*
    ) => {
        impl_layouts_helper!(
            [($first_index $first_type $first_arg $first_slot)]
            [($first_index $first_type $first_slot)]
            $($index $type $arg $slot)*
        );
    };
}

impl_layouts![
    (0, T0, A0, slot_0),
    (1, T1, A1, slot_1),
    (2, T2, A2, slot_2),
    (3, T3, A3, slot_3),
    (4, T4, A4, slot_4),
    (5, T5, A5, slot_5),
    (6, T6, A6, slot_6),
    (7, T7, A7, slot_7),
    (8, T8, A8, slot_8),
    (9, T9, A9, slot_9),
    (10, T10, A10, slot_10),
    (11, T11, A11, slot_11),
];
