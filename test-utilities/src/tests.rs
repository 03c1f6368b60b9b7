use super::{Big, Empty, Member, sequential_layout_size};

#[test]
fn test_sequential_layout_size() {
    assert_eq!(sequential_layout_size(&[]), 1);
    assert_eq!(sequential_layout_size(&[Member::of::<Empty>()]), 1);
    assert_eq!(sequential_layout_size(&[Member::of::<Empty>(), Member::of::<Empty>()]), 2);
    assert_eq!(sequential_layout_size(&[Member::of::<u32>()]), 4);

    assert_eq!(
        sequential_layout_size(&[
            Member::of::<u8>(),
            Member::of::<Empty>(),
            Member::of::<i32>(),
            Member::of::<Empty>(),
            Member::of::<f64>(),
        ]),
        24
    );

    assert_eq!(
        sequential_layout_size(&[Member::of::<Empty>(), Member::of::<Big>(), Member::of::<Empty>()]),
        408
    );
}
