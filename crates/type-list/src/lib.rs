#![no_std]
#![expect(missing_docs, reason = "internal crate")]

#[cfg(test)]
mod tests;

pub trait TypeList {
    const LEN: usize;
}

/// Resolves the element type stored at position `I`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no element at index {I}",
    label = "index {I} is out of range for this type list"
)]
pub trait TypeAt<const I: usize>: TypeList {
    type Output;
}

pub type Nth<L, const I: usize> = <L as TypeAt<I>>::Output;

impl TypeList for () {
    const LEN: usize = 0;
}

// `$list` is the bracketed type list of one arity, forwarded as a single token tree so it can be repeated once per
// position.

macro_rules! impl_type_at {
    ([$($list:ident)*] $position:tt $output:ident) => {
        impl<$($list),*> TypeAt<$position> for ($($list,)*) {
            type Output = $output;
        }
    };
}

macro_rules! impl_type_list {
    (@len [$($element:ident)+] [$($position:tt)+]) => {
        impl<$($element),+> TypeList for ($($element,)+) {
            const LEN: usize = [$($position),+].len();
        }
    };
    ($list:tt $($position:tt $element:ident)+) => {
        impl_type_list!(@len $list [$($position)+]);

        $(impl_type_at!($list $position $element);)+
    };
}

// Grows the list one element at a time, implementing the traits for every prefix.

macro_rules! impl_type_lists {
    ([$($position:tt $element:ident)+]) => {
        impl_type_list!([$($element)+] $($position $element)+);
    };
    ([$($position:tt $element:ident)+] $next_position:tt $next_element:ident $($rest:tt)*) => {
        impl_type_list!([$($element)+] $($position $element)+);
        impl_type_lists!([$($position $element)+ $next_position $next_element] $($rest)*);
    };
}

impl_type_lists!([0 T0] 1 T1 2 T2 3 T3 4 T4 5 T5 6 T6 7 T7 8 T8 9 T9 10 T10 11 T11);
