use std::iter::{Sum, Product};
use std::hash::Hash;
use std::ops::{AddAssign, SubAssign};
use num::{NumCast, FromPrimitive, ToPrimitive, Zero, One};
use num_traits::{AsPrimitive, Bounded};
use std::fmt::{Debug, Display};

#[macro_export]
macro_rules! trait_combiner {
	($combination_name: ident $([$($g: tt: $gc1: tt $(+ $gcn: tt)*),+])? $(: $t: tt $(+ $ts: tt)*)?) => {
		pub trait $combination_name$(<$($g: $gc1 $(+ $gcn)*,)+>)? $(: $t $(+ $ts)*)? {}
		impl<$($($g: $gc1 $(+ $gcn)*,)+)?T $(: $t $(+ $ts)*)?> $combination_name$(<$($g,)+>)? for T {}
	};
}
pub use trait_combiner;

trait_combiner!(Number: Bounded+NumCast+FromPrimitive+ToPrimitive+Zero+One+Sum+Product+SubAssign+AddAssign+Copy+Clone+Debug);
trait_combiner!(Integer: Number+(num::Integer));
/* Keys of an indexed heap. `AsPrimitive<usize>` is the direct index into the key->slot array. */
trait_combiner!(UnsignedInteger: Hash+Display+Integer+(num::Unsigned)+(AsPrimitive<usize>));
trait_combiner!(Float: Number+(num::Float));

/// Position of a key in any key-indexed array.
#[inline(always)]
pub fn key_index<R: UnsignedInteger>(key: R) -> usize {
	key.as_()
}

#[test]
fn test_key_index() {
	assert_eq!(key_index(0u8), 0);
	assert_eq!(key_index(255u8), 255);
	assert_eq!(key_index(70_000u32), 70_000);
	assert_eq!(key_index(12usize), 12);
}
