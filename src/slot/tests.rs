use super::{Slot, Strategy};
use core::any::TypeId;
use test_utilities::{Big, Empty, MoveOnly, Tag};

#[test]
fn test_strategy_of() {
    assert_eq!(Strategy::of::<Empty>(), Strategy::Folded);
    assert_eq!(Strategy::of::<Tag<3>>(), Strategy::Folded);
    assert_eq!(Strategy::of::<()>(), Strategy::Folded);
    assert_eq!(Strategy::of::<[u64; 0]>(), Strategy::Folded);

    assert_eq!(Strategy::of::<u8>(), Strategy::Field);
    assert_eq!(Strategy::of::<Big>(), Strategy::Field);
    assert_eq!(Strategy::of::<&mut Empty>(), Strategy::Field);
    assert_eq!(Strategy::of::<Option<Empty>>(), Strategy::Field);
}

#[test]
fn test_slot_constants() {
    assert_eq!(Slot::<0, Empty>::INDEX, 0);
    assert_eq!(Slot::<7, u32>::INDEX, 7);
    assert!(Slot::<0, Empty>::STRATEGY.is_folded());
    assert!(!Slot::<1, u32>::STRATEGY.is_folded());
}

#[test]
fn test_slot_size() {
    assert_eq!(size_of::<Slot<0, Empty>>(), 0);
    assert_eq!(size_of::<Slot<0, u32>>(), size_of::<u32>());
    assert_eq!(align_of::<Slot<0, u32>>(), align_of::<u32>());
    assert_eq!(size_of::<Slot<0, Big>>(), size_of::<Big>());
}

#[test]
fn test_slot_identity_includes_index() {
    assert_ne!(TypeId::of::<Slot<0, Empty>>(), TypeId::of::<Slot<1, Empty>>());
    assert_eq!(TypeId::of::<Slot<2, Empty>>(), TypeId::of::<Slot<2, Empty>>());
}

#[test]
fn test_slot_access() {
    let mut slot = Slot::<0, i32>::new(3);

    assert_eq!(*slot.get(), 3);

    *slot.get_mut() = 5;

    assert_eq!(*slot.get(), 5);
    assert_eq!(slot.replace(8), 5);
    assert_eq!(slot.into_inner(), 8);
}

#[test]
fn test_slot_folded_access() {
    let mut slot = Slot::<4, Empty>::default();

    assert_eq!(*slot.get(), Empty);
    assert_eq!(slot.replace(Empty), Empty);
    assert_eq!(slot.into_inner(), Empty);
}

#[test]
fn test_slot_from_arg() {
    let slot = Slot::<0, String>::from_arg("abc");
    let widened = Slot::<1, i64>::from_arg(7_i32);

    assert_eq!(slot.get(), "abc");
    assert_eq!(*widened.get(), 7);
}

#[test]
fn test_slot_move_only() {
    let slot = Slot::<0, MoveOnly>::new(MoveOnly::new(10));
    let moved = slot;

    assert_eq!(moved.get().value, 10);
}

#[test]
fn test_slot_debug() {
    assert_eq!(format!("{:?}", Slot::<2, u8>::new(9)), "Slot { index: 2, value: 9 }");
    assert_eq!(format!("{:?}", Slot::<0, Empty>::new(Empty)), "Slot { index: 0, value: Empty }");
}
