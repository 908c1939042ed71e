use std::hash::BuildHasher;

use crate::types::UnsignedInteger;

/// Receiver for keys reported by heap queries such as `IndexedHeap::find_le`.
/// Keys are appended; a sink is never cleared by the heap.
pub trait KeySink<R: UnsignedInteger> {
	fn put_key(&mut self, key: R);
}

impl<R: UnsignedInteger> KeySink<R> for Vec<R> {
	#[inline(always)]
	fn put_key(&mut self, key: R) {
		self.push(key);
	}
}

/* Covers foldhash::HashSet as well as std sets with any hasher */
impl<R: UnsignedInteger, S: BuildHasher> KeySink<R> for std::collections::HashSet<R, S> {
	#[inline(always)]
	fn put_key(&mut self, key: R) {
		self.insert(key);
	}
}

impl<R: UnsignedInteger> KeySink<R> for roaring::RoaringBitmap {
	#[inline(always)]
	fn put_key(&mut self, key: R) {
		let value = key.to_u32();
		debug_assert!(value.is_some(), "Key {} does not fit into a RoaringBitmap", key);
		if let Some(value) = value {
			self.insert(value);
		}
	}
}

impl<R: UnsignedInteger> KeySink<R> for roaring::RoaringTreemap {
	#[inline(always)]
	fn put_key(&mut self, key: R) {
		let value = key.to_u64();
		debug_assert!(value.is_some(), "Key {} does not fit into a RoaringTreemap", key);
		if let Some(value) = value {
			self.insert(value);
		}
	}
}



#[test]
fn test_vec_sink() {
	let mut sink: Vec<u16> = vec![7];
	sink.put_key(3);
	sink.put_key(3);
	assert_eq!(sink, vec![7, 3, 3]);
}
#[test]
fn test_set_sinks() {
	let mut hash_set = foldhash::HashSet::<u32>::default();
	let mut bitmap = roaring::RoaringBitmap::new();
	let mut treemap = roaring::RoaringTreemap::new();
	[5u32, 1, 5, 9].into_iter().for_each(|k| {
		hash_set.put_key(k);
		KeySink::<u32>::put_key(&mut bitmap, k);
		KeySink::<u32>::put_key(&mut treemap, k);
	});
	assert_eq!(hash_set.len(), 3);
	assert_eq!(bitmap.iter().collect::<Vec<_>>(), vec![1, 5, 9]);
	assert_eq!(treemap.iter().collect::<Vec<_>>(), vec![1, 5, 9]);
}
