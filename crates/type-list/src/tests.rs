use super::{Nth, TypeList};

#[test]
fn test_len() {
    assert_eq!(<() as TypeList>::LEN, 0);
    assert_eq!(<(u8,) as TypeList>::LEN, 1);
    assert_eq!(<(u8, (), u16, (), u32) as TypeList>::LEN, 5);
    assert_eq!(<((), (), (), i32) as TypeList>::LEN, 4);
    assert_eq!(
        <(u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8) as TypeList>::LEN,
        12
    );
}

#[test]
fn test_nth() {
    let first: Nth<(u8, u16, u32), 0> = 1_u8;
    let second: Nth<(u8, u16, u32), 1> = 2_u16;
    let third: Nth<(u8, u16, u32), 2> = 3_u32;

    assert_eq!((first, second, third), (1, 2, 3));

    let (): Nth<(u8, (), char), 1> = ();
    let reference: Nth<(&mut i32, char), 0> = &mut 4;

    assert_eq!(*reference, 4);
}

#[test]
fn test_nth_longest_list() {
    type Longest = (u8, u16, u32, u64, i8, i16, i32, i64, char, bool, (), f64);

    let last: Nth<Longest, 11> = 1.5;
    let (): Nth<Longest, 10> = ();
    let middle: Nth<Longest, 6> = -7_i32;

    assert_eq!((last, middle), (1.5, -7));
}
