//! Fixtures shared by the tests and fuzz targets of `compact-tuple`.

use std::cell::RefCell;
use std::mem;
use std::rc::Rc;

#[cfg(test)]
mod tests;

/// A stateless type.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Empty;

/// A family of distinct stateless types.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Tag<const N: usize>;

/// A value that can be moved but not copied. The default value marks a moved-from state.
#[derive(Debug, Eq, PartialEq)]
pub struct MoveOnly {
    pub value: i32,
}

impl MoveOnly {
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self { value }
    }
}

impl Default for MoveOnly {
    fn default() -> Self {
        Self::new(-1)
    }
}

/// A large stateful type.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Big {
    pub data: [i32; 100],
}

impl Default for Big {
    fn default() -> Self {
        Self { data: [0; 100] }
    }
}

/// Records the order in which tracked values are dropped.
#[derive(Clone, Debug, Default)]
pub struct DropLog {
    dropped: Rc<RefCell<Vec<usize>>>,
}

impl DropLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a value that appends `id` to this log when dropped.
    #[must_use]
    pub fn track(&self, id: usize) -> Tracked {
        Tracked {
            id,
            log: Rc::clone(&self.dropped),
        }
    }

    /// Drains the recorded ids, oldest first.
    #[must_use]
    pub fn take(&self) -> Vec<usize> {
        mem::take(&mut *self.dropped.borrow_mut())
    }
}

/// See [`DropLog::track`].
#[derive(Debug)]
pub struct Tracked {
    id: usize,
    log: Rc<RefCell<Vec<usize>>>,
}

impl Tracked {
    #[must_use]
    pub const fn id(&self) -> usize {
        self.id
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.log.borrow_mut().push(self.id);
    }
}

/// Size and alignment of one member of a sequential layout.
#[derive(Clone, Copy, Debug)]
pub struct Member {
    size: usize,
    align: usize,
}

impl Member {
    #[must_use]
    pub const fn of<T>() -> Self {
        Self {
            size: size_of::<T>(),
            align: align_of::<T>(),
        }
    }
}

/// Size of a record that keeps `members` in declaration order and gives every empty member its own byte, which is
/// how a tuple without empty-member folding is laid out.
#[must_use]
pub const fn sequential_layout_size(members: &[Member]) -> usize {
    let mut offset: usize = 0;
    let mut align = 1;
    let mut i = 0;

    while i < members.len() {
        let member = members[i];
        let size = if member.size == 0 { 1 } else { member.size };

        offset = offset.next_multiple_of(member.align) + size;

        if member.align > align {
            align = member.align;
        }

        i += 1;
    }

    if offset == 0 { 1 } else { offset.next_multiple_of(align) }
}
