#![no_main]

use compact_tuple::Tuple;
use test_utilities::{Empty, Tag};

type Elements = (u8, Empty, i32, Tag<1>, u16, Empty, i64);

fn read<const N: usize>(data: &mut &[u8]) -> Option<[u8; N]> {
    let (head, rest) = data.split_first_chunk::<N>()?;

    *data = rest;

    Some(*head)
}

fn elements_from(data: &mut &[u8]) -> Option<Elements> {
    Some((
        read::<1>(data)?[0],
        Empty,
        i32::from_le_bytes(read(data)?),
        Tag,
        u16::from_le_bytes(read(data)?),
        Empty,
        i64::from_le_bytes(read(data)?),
    ))
}

fn fuzz_with(mut data: &[u8]) {
    let (Some(lhs), Some(rhs)) = (elements_from(&mut data), elements_from(&mut data)) else {
        return;
    };

    let mut compact_lhs = Tuple::from_values(lhs);
    let compact_rhs = Tuple::from_values(rhs);

    assert_eq!(*compact_lhs.get::<0>(), lhs.0);
    assert_eq!(*compact_lhs.get::<2>(), lhs.2);
    assert_eq!(*compact_lhs.get::<4>(), lhs.4);
    assert_eq!(*compact_lhs.get::<6>(), lhs.6);
    assert_eq!(compact_lhs == compact_rhs, lhs == rhs);
    assert_eq!(compact_lhs.cmp(&compact_rhs), lhs.cmp(&rhs));

    *compact_lhs.get_mut::<2>() = rhs.2;
    compact_lhs.replace::<6>(rhs.6);

    assert_eq!(compact_lhs.into_inner(), (lhs.0, Empty, rhs.2, Tag, lhs.4, Empty, rhs.6));
}

libfuzzer_sys::fuzz_target!(|data: &[u8]| {
    fuzz_with(data);
});
