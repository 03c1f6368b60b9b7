use core::fmt::{self, Debug, Formatter};
use core::mem;

#[cfg(test)]
mod tests;

/// How a [`Slot`] lays out its value.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Strategy {
    /// The value is stored as a field and occupies `size_of::<T>()` bytes.
    Field,
    /// The value has no state and folds into the enclosing container without occupying any bytes.
    Folded,
}

impl Strategy {
    /// Selects the strategy for `T`. Every zero-sized type folds.
    #[must_use]
    pub const fn of<T>() -> Self {
        if size_of::<T>() == 0 {
            Self::Folded
        } else {
            Self::Field
        }
    }

    /// Returns `true` for [`Strategy::Folded`].
    #[must_use]
    pub const fn is_folded(self) -> bool {
        matches!(self, Self::Folded)
    }
}

/// Storage cell for the element at index `I`.
///
/// The index is part of the cell type, so two slots holding the same type at different positions are different
/// types and can never be confused for one another. The cell is transparent over its value: a stateless element
/// contributes nothing to the size of the container that holds it.
#[derive(Clone, Copy, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Slot<const I: usize, T> {
    value: T,
}

impl<const I: usize, T> Slot<I, T> {
    /// Position of this cell inside its container.
    pub const INDEX: usize = I;

    /// Layout strategy of this cell, decided from `T` alone.
    pub const STRATEGY: Strategy = Strategy::of::<T>();

    /// Wraps `value`.
    pub const fn new(value: T) -> Self {
        Self { value }
    }

    /// Builds the cell from anything convertible into its element type.
    pub fn from_arg<A>(arg: A) -> Self
    where
        A: Into<T>,
    {
        Self::new(arg.into())
    }

    /// Shared access to the value.
    pub const fn get(&self) -> &T {
        &self.value
    }

    /// Exclusive access to the value.
    pub const fn get_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Stores `value` and returns the previous one.
    pub const fn replace(&mut self, value: T) -> T {
        mem::replace(&mut self.value, value)
    }

    /// Unwraps the value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<const I: usize, T> Debug for Slot<I, T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("Slot")
            .field("index", &I)
            .field("value", &self.value)
            .finish()
    }
}
