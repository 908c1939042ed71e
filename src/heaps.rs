use std::{fmt, io};

use crate::{orders::{KeyOrder, ScoreOrder}, sinks::KeySink, types::{key_index, Float, UnsignedInteger}};

/* Full O(n) invariant check after every mutation, in tests and with the "check_invariants" feature */
macro_rules! check_heap {
	($heap: expr) => {
		if cfg!(any(test, feature="check_invariants")) {
			debug_assert!($heap.check_invariant(), "Indexed heap invariant violated");
		}
	};
}

#[inline(always)]
fn _left(idx: usize) -> usize { idx << 1 }
#[inline(always)]
fn _right(idx: usize) -> usize { (idx << 1) + 1 }
#[inline(always)]
fn _parent(idx: usize) -> usize { idx >> 1 }


/// Binary min-heap over integer keys in `[0, capacity)` ordered by a [`KeyOrder`].
///
/// Next to the heap-ordered key array (1-based, slot 0 is an unused sentinel) the heap
/// keeps for every key its current slot (0 = absent). This allows to check membership
/// in O(1) and to erase or re-prioritize any key in O(log n) without searching.
///
/// All misuse (keys out of bounds, inserting present keys, touching absent keys,
/// reading from an empty heap) is a programming error checked by debug assertions only.
#[derive(Debug,Clone)]
pub struct IndexedHeap<R: UnsignedInteger, O: KeyOrder<R>> {
	keys: Vec<R>,
	indices: Vec<usize>,
	order: O,
}
impl<R: UnsignedInteger, O: KeyOrder<R>> IndexedHeap<R,O> {
	/// Creates an empty heap accepting keys in `[0, capacity)`
	#[inline(always)]
	pub fn new(capacity: usize, order: O) -> Self {
		let ret = IndexedHeap{
			keys: vec![R::max_value()],
			indices: vec![0; capacity],
			order: order,
		};
		check_heap!(ret);
		ret
	}
	/// Builds a heap from distinct keys in O(n) by appending all of them and heapifying once
	pub fn from_keys<I: IntoIterator<Item=R>>(capacity: usize, order: O, keys: I) -> Self {
		let mut ret = Self::new(capacity, order);
		let keys = keys.into_iter();
		ret.keys.reserve(keys.size_hint().0);
		keys.for_each(|key| ret._push_end(key));
		ret.heapify();
		ret
	}
	/// Verifies that the index array inverts the key array and that no key sorts
	/// before its parent. O(n), meant for tests and debugging.
	pub fn check_invariant(&self) -> bool {
		!self.keys.is_empty() && self._check_invariant_core(1)
	}
	fn _check_invariant_core(&self, idx: usize) -> bool {
		if idx >= self.keys.len() { return true; }
		let key = self.keys[idx];
		let key_idx = key_index(key);
		if key_idx >= self.indices.len() || self.indices[key_idx] != idx { return false; }
		let parent_idx = _parent(idx);
		if parent_idx != 0 && self.order.less_than(key, self.keys[parent_idx]) { return false; }
		self._check_invariant_core(_left(idx)) && self._check_invariant_core(_right(idx))
	}
	#[inline(always)]
	pub fn less_than(&self, a: R, b: R) -> bool {
		self.order.less_than(a, b)
	}
	#[inline(always)]
	pub fn order(&self) -> &O {
		&self.order
	}
	/// Mutable access to the order. Every present key whose priority changes must be
	/// reported through `decreased`, `increased` or `update` before the next heap operation.
	#[inline(always)]
	pub fn order_mut(&mut self) -> &mut O {
		&mut self.order
	}
	/// Key stored at a heap slot (slot 1 is the root)
	#[inline(always)]
	pub fn get_key(&self, slot: usize) -> R {
		self.keys[slot]
	}
	/// Heap slot of a key, 0 if the key is absent
	#[inline(always)]
	pub fn get_index(&self, key: R) -> usize {
		self.indices[key_index(key)]
	}
	#[inline(always)]
	pub fn empty(&self) -> bool {
		self.keys.len() == 1
	}
	/// Number of keys currently in the heap
	#[inline(always)]
	pub fn len(&self) -> usize {
		self.keys.len() - 1
	}
	/// **Capacity**, i.e. the exclusive upper bound for keys, NOT the number of keys
	/// in the heap. Use [`IndexedHeap::len`] for the element count.
	#[inline(always)]
	pub fn size(&self) -> usize {
		self.indices.len()
	}
	/// Same as [`IndexedHeap::size`]
	#[inline(always)]
	pub fn get_bounds(&self) -> usize {
		self.indices.len()
	}
	/// True iff `key` is within bounds and currently in the heap
	#[inline(always)]
	pub fn contains(&self, key: R) -> bool {
		let key_idx = key_index(key);
		key_idx < self.indices.len() && self.indices[key_idx] != 0
	}
	/// Grows the key bounds to at least `capacity`, never shrinks
	#[inline(always)]
	pub fn reserve(&mut self, capacity: usize) {
		if capacity > self.indices.len() {
			self.indices.resize(capacity, 0);
		}
		check_heap!(self);
	}
	/// Removes all keys but keeps the bounds
	pub fn reset(&mut self) {
		if self.empty() { return; }
		let indices = &mut self.indices;
		self.keys[1..].iter().for_each(|&key| indices[key_index(key)] = 0);
		self.keys.truncate(1);
		check_heap!(self);
	}
	#[inline(always)]
	pub fn clear(&mut self) {
		self.reset();
	}
	/// Root key, the heap must not be empty
	#[inline(always)]
	pub fn min_value(&self) -> R {
		debug_assert!(!self.empty(), "Cannot read the minimum of an empty heap");
		self.keys[1]
	}
	/// Root key or None if the heap is empty
	#[inline(always)]
	pub fn peek(&self) -> Option<R> {
		self.keys.get(1).copied()
	}
	/// Internal helper function to move the key at `idx` towards the root
	#[inline(always)]
	fn _sift_up(&mut self, mut idx: usize) {
		let key = self.keys[idx];
		loop {
			let parent_idx = _parent(idx);
			if parent_idx == 0 { break; }
			let parent_key = self.keys[parent_idx];
			if !self.order.less_than(key, parent_key) { break; }
			/* Shift parent into the hole */
			self.keys[idx] = parent_key;
			self.indices[key_index(parent_key)] = idx;
			idx = parent_idx;
		}
		self.keys[idx] = key;
		self.indices[key_index(key)] = idx;
	}
	/// Internal helper function to move the key at `idx` towards the leaves
	#[inline(always)]
	fn _sift_down(&mut self, mut idx: usize) {
		let key = self.keys[idx];
		let n = self.keys.len();
		loop {
			let lc = _left(idx);
			/* No children */
			if lc >= n { break; }
			let rc = lc+1;
			let min_child = if rc < n && self.order.less_than(self.keys[rc], self.keys[lc]) { rc } else { lc };
			let min_key = self.keys[min_child];
			/* Ties stay where they are */
			if !self.order.less_than(min_key, key) { break; }
			/* Shift child into the hole */
			self.keys[idx] = min_key;
			self.indices[key_index(min_key)] = idx;
			idx = min_child;
		}
		self.keys[idx] = key;
		self.indices[key_index(key)] = idx;
	}
	/// Internal helper function to append a key without restoring heap order
	#[inline(always)]
	fn _push_end(&mut self, key: R) {
		debug_assert!(key_index(key) < self.indices.len(), "Key {} exceeds the heap bounds {}", key, self.indices.len());
		debug_assert!(!self.contains(key), "Key {} is already in the heap", key);
		self.indices[key_index(key)] = self.keys.len();
		self.keys.push(key);
	}
	/// Restores heap order over the whole key array in O(n)
	pub fn heapify(&mut self) {
		let n = self.len();
		(1..=n/2).rev().for_each(|i| self._sift_down(i));
		check_heap!(self);
	}
	/// Inserts a key that is within bounds and not yet in the heap
	#[inline(always)]
	pub fn insert(&mut self, key: R) {
		let idx = self.keys.len();
		self._push_end(key);
		self._sift_up(idx);
		check_heap!(self);
	}
	/// Removes and returns the root key, the heap must not be empty
	pub fn erase_min(&mut self) -> R {
		debug_assert!(!self.empty(), "Cannot erase the minimum of an empty heap");
		let result = self.keys[1];
		let last = self.len();
		self.indices[key_index(result)] = 0;
		if last == 1 {
			self.keys.truncate(1);
		} else {
			let last_key = self.keys[last];
			self.keys[1] = last_key;
			self.indices[key_index(last_key)] = 1;
			self.keys.truncate(last);
			self._sift_down(1);
		}
		check_heap!(self);
		result
	}
	/// Removes and returns the root key or None if the heap is empty
	#[inline(always)]
	pub fn pop(&mut self) -> Option<R> {
		if self.empty() { None } else { Some(self.erase_min()) }
	}
	/// Removes a key that is currently in the heap
	pub fn erase(&mut self, key: R) {
		debug_assert!(self.contains(key), "Key {} is not in the heap", key);
		let idx = self.indices[key_index(key)];
		let last = self.len();
		self.indices[key_index(key)] = 0;
		if idx == last {
			self.keys.truncate(last);
		} else {
			let last_key = self.keys[last];
			self.keys[idx] = last_key;
			self.indices[key_index(last_key)] = idx;
			self.keys.truncate(last);
			let parent_idx = _parent(idx);
			if parent_idx != 0 && self.order.less_than(last_key, self.keys[parent_idx]) {
				self._sift_up(idx);
			} else {
				self._sift_down(idx);
			}
		}
		check_heap!(self);
	}
	/// Notifies the heap that a present key now sorts earlier than before
	#[inline(always)]
	pub fn decreased(&mut self, key: R) {
		debug_assert!(self.contains(key), "Key {} is not in the heap", key);
		self._sift_up(self.indices[key_index(key)]);
		check_heap!(self);
	}
	/// Notifies the heap that a present key now sorts later than before
	#[inline(always)]
	pub fn increased(&mut self, key: R) {
		debug_assert!(self.contains(key), "Key {} is not in the heap", key);
		self._sift_down(self.indices[key_index(key)]);
		check_heap!(self);
	}
	/// Notifies the heap that the priority of a present key changed in either direction
	#[inline(always)]
	pub fn update(&mut self, key: R) {
		debug_assert!(self.contains(key), "Key {} is not in the heap", key);
		let idx = self.indices[key_index(key)];
		let parent_idx = _parent(idx);
		if parent_idx != 0 && self.order.less_than(key, self.keys[parent_idx]) {
			self._sift_up(idx);
		} else {
			self._sift_down(idx);
		}
		check_heap!(self);
	}
	/// Exchanges the complete contents of two heaps in O(1)
	#[inline(always)]
	pub fn swap(&mut self, other: &mut Self) {
		std::mem::swap(self, other);
		check_heap!(self);
		check_heap!(other);
	}
	/// Collects every key `k` with `!less_than(threshold, k)`, i.e. all keys not sorting after
	/// `threshold`, into `result` (appending, unordered). Subtrees rooted at a key sorting
	/// after the threshold are skipped. The threshold must be a key the order can evaluate.
	pub fn find_le<S: KeySink<R>>(&self, threshold: R, result: &mut S) {
		let n = self.keys.len();
		let mut todo = vec![1usize];
		while let Some(idx) = todo.pop() {
			if idx < n && !self.order.less_than(threshold, self.keys[idx]) {
				result.put_key(self.keys[idx]);
				todo.push(_left(idx));
				todo.push(_right(idx));
			}
		}
	}
	/// Iterator over the present keys in heap-array order (root first, not sorted)
	#[inline(always)]
	pub fn iter(&self) -> std::slice::Iter<'_, R> {
		self.keys[1..].iter()
	}
	/// The present keys in heap-array order
	#[inline(always)]
	pub fn as_slice(&self) -> &[R] {
		&self.keys[1..]
	}
	/// Create an iterator over the heap that pops keys in order
	#[inline(always)]
	pub fn into_sorted_iter(self) -> IndexedHeapIter<R,O> {
		IndexedHeapIter::new(self)
	}
	/// Create an iterator over the heap in sorted order (empties the heap)
	#[inline(always)]
	pub fn sorted_iter(&mut self) -> IndexedHeapRefIter<'_,R,O> {
		IndexedHeapRefIter::new(self)
	}
	/// Writes the tree shape, one key per line indented by depth, for debugging
	pub fn display<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
		write!(out, "{}", self)
	}
	fn _display(&self, f: &mut fmt::Formatter<'_>, indent: usize, idx: usize) -> fmt::Result {
		if idx < self.keys.len() {
			writeln!(f, "{:indent$}{}", "", self.keys[idx], indent=indent)?;
			self._display(f, indent+1, _left(idx))?;
			self._display(f, indent+1, _right(idx))?;
		}
		Ok(())
	}
}
impl<R: UnsignedInteger, O: KeyOrder<R>> fmt::Display for IndexedHeap<R,O> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self._display(f, 0, 1)
	}
}
impl<'a, R: UnsignedInteger, O: KeyOrder<R>> IntoIterator for &'a IndexedHeap<R,O> {
	type Item = &'a R;
	type IntoIter = std::slice::Iter<'a, R>;
	#[inline(always)]
	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl<R: UnsignedInteger, F: Float, const MIN: bool> IndexedHeap<R,ScoreOrder<F,MIN>> {
	/// Sets the score of a key and, if the key is present, moves it to its new place
	pub fn rescore(&mut self, key: R, score: F) {
		let old = self.order.score(key);
		self.order.set_score(key, score);
		if self.contains(key) {
			let earlier = if MIN { score < old } else { score > old };
			if earlier { self.decreased(key); } else { self.increased(key); }
		}
	}
	/// Grows the key bounds and the score table together
	#[inline(always)]
	pub fn reserve_with_scores(&mut self, capacity: usize) {
		self.order.reserve(capacity);
		self.reserve(capacity);
	}
}


pub struct IndexedHeapIter<R: UnsignedInteger, O: KeyOrder<R>> {
	heap: IndexedHeap<R,O>
}
impl<R: UnsignedInteger, O: KeyOrder<R>> IndexedHeapIter<R,O> {
	#[inline(always)]
	fn new(heap: IndexedHeap<R,O>) -> Self { Self {heap: heap} }
}
impl<R: UnsignedInteger, O: KeyOrder<R>> Iterator for IndexedHeapIter<R,O> {
	type Item = R;
	#[inline(always)]
	fn next(&mut self) -> Option<Self::Item> {
		self.heap.pop()
	}
	#[inline(always)]
	fn size_hint(&self) -> (usize, Option<usize>) {
		(self.heap.len(), Some(self.heap.len()))
	}
}
pub struct IndexedHeapRefIter<'a, R: UnsignedInteger, O: KeyOrder<R>> {
	heap: &'a mut IndexedHeap<R,O>
}
impl<'a, R: UnsignedInteger, O: KeyOrder<R>> IndexedHeapRefIter<'a,R,O> {
	#[inline(always)]
	fn new(heap: &'a mut IndexedHeap<R,O>) -> Self { Self {heap: heap} }
}
impl<'a, R: UnsignedInteger, O: KeyOrder<R>> Iterator for IndexedHeapRefIter<'a,R,O> {
	type Item = R;
	#[inline(always)]
	fn next(&mut self) -> Option<Self::Item> {
		self.heap.pop()
	}
	#[inline(always)]
	fn size_hint(&self) -> (usize, Option<usize>) {
		(self.heap.len(), Some(self.heap.len()))
	}
}





#[cfg(test)]
use crate::{orders::{Ascending, Descending, FnOrder, MaxScoreOrder, MinScoreOrder}, random::{random_scores, random_unique_keys, shuffled_keys}};
#[cfg(test)]
use rand::Rng;

#[cfg(test)]
fn _key<R: UnsignedInteger>(k: usize) -> R {
	R::from_usize(k).unwrap()
}
#[cfg(test)]
fn _snapshot<R: UnsignedInteger, O: KeyOrder<R>>(heap: &IndexedHeap<R,O>) -> (Vec<R>, Vec<usize>) {
	(heap.as_slice().to_vec(), (0..heap.size()).map(|k| heap.get_index(_key::<R>(k))).collect())
}
#[cfg(test)]
fn _assert_membership<R: UnsignedInteger, O: KeyOrder<R>>(heap: &IndexedHeap<R,O>, expected: &foldhash::HashSet<usize>) {
	assert!(heap.check_invariant());
	assert_eq!(heap.len(), expected.len());
	(0..heap.size()).for_each(|k| {
		assert_eq!(heap.contains(_key::<R>(k)), expected.contains(&k), "Membership of {} differs", k);
	});
}
#[cfg(test)]
fn _test_extraction_order<R: UnsignedInteger>() {
	let capacity = 200;
	let keys = random_unique_keys::<R>(capacity, 150);
	let mut heap = IndexedHeap::new(capacity, Ascending);
	keys.iter().for_each(|&k| {
		heap.insert(k);
		assert!(heap.check_invariant());
	});
	let mut sorted_keys = keys.clone();
	sorted_keys.sort();
	let result = (0..keys.len()).map(|_| {
		let k = heap.erase_min();
		assert!(heap.check_invariant());
		k
	}).collect::<Vec<_>>();
	assert_eq!(result, sorted_keys);
	assert!(heap.empty());
}
#[cfg(test)]
fn _test_random_operations<R: UnsignedInteger>() {
	let capacity = 200;
	let mut heap = IndexedHeap::<R,Ascending>::new(capacity, Ascending);
	let mut model = std::collections::BTreeSet::<usize>::new();
	let mut rng = rand::thread_rng();
	for _ in 0..5_000 {
		let k = rng.gen_range(0..capacity);
		let key = _key::<R>(k);
		match rng.gen_range(0..4) {
			0 | 1 => if !heap.contains(key) {
				heap.insert(key);
				model.insert(k);
			},
			2 => if heap.contains(key) {
				heap.erase(key);
				model.remove(&k);
			},
			_ => if !heap.empty() {
				let min = key_index(heap.erase_min());
				assert_eq!(Some(&min), model.iter().next());
				model.remove(&min);
			},
		}
		assert!(heap.check_invariant());
		assert_eq!(heap.len(), model.len());
		assert_eq!(heap.peek().map(|k| key_index(k)), model.iter().next().copied());
	}
	let expected = model.into_iter().collect::<foldhash::HashSet<_>>();
	_assert_membership(&heap, &expected);
}
#[cfg(test)]
macro_rules! make_key_type_tests {
	($($t: ident),*) => { paste::paste! { $(
		#[test]
		fn [<test_extraction_order_ $t>]() { _test_extraction_order::<$t>(); }
		#[test]
		fn [<test_random_operations_ $t>]() { _test_random_operations::<$t>(); }
	)* } };
}
#[cfg(test)]
make_key_type_tests!(u8, u16, u32, u64, usize);

#[test]
fn test_scenario_small_heap() {
	let mut heap = IndexedHeap::<u32,Ascending>::new(5, Ascending);
	assert!(heap.empty());
	assert_eq!(heap.size(), 5);
	[4, 1, 3].into_iter().for_each(|k| heap.insert(k));
	assert_eq!(heap.min_value(), 1);
	assert_eq!(heap.erase_min(), 1);
	assert_eq!(heap.min_value(), 3);
	heap.insert(0);
	assert_eq!(heap.min_value(), 0);
	heap.erase(3);
	assert!(heap.check_invariant());
	assert_eq!(heap.erase_min(), 0);
	assert_eq!(heap.erase_min(), 4);
	assert!(heap.empty());
	assert_eq!(heap.peek(), None);
	assert_eq!(heap.pop(), None);
	/* Capacity, not occupancy */
	assert_eq!(heap.size(), 5);
	assert_eq!(heap.len(), 0);
}
#[test]
fn test_find_le_scenario() {
	let heap = IndexedHeap::<u32,Ascending>::from_keys(5, Ascending, [3, 0, 4, 2, 1]);
	let mut result = Vec::new();
	heap.find_le(2, &mut result);
	result.sort();
	assert_eq!(result, vec![0, 1, 2]);
	let mut bitmap = roaring::RoaringBitmap::new();
	heap.find_le(2, &mut bitmap);
	assert_eq!(bitmap.iter().collect::<Vec<_>>(), vec![0, 1, 2]);
	/* Appends without clearing */
	heap.find_le(0, &mut result);
	assert_eq!(result, vec![0, 1, 2, 0]);
}
#[test]
fn test_find_le_random() {
	let capacity = 1_000;
	let keys = random_unique_keys::<usize>(capacity, 600);
	let visits = std::cell::Cell::new(0usize);
	let order = FnOrder::new(|a: usize, b: usize| { visits.set(visits.get()+1); a < b });
	let mut heap = IndexedHeap::new(capacity, order);
	keys.iter().for_each(|&k| heap.insert(k));
	(0..20).map(|i| i * 50).for_each(|threshold| {
		visits.set(0);
		let mut result = foldhash::HashSet::default();
		heap.find_le(threshold, &mut result);
		let expected = keys.iter().copied().filter(|&k| k <= threshold).collect::<foldhash::HashSet<_>>();
		assert_eq!(result, expected);
		/* Only qualifying nodes and their children get compared */
		assert!(visits.get() <= 2*expected.len()+1, "{} visits for {} results", visits.get(), expected.len());
	});
}
#[test]
fn test_insert_erase_round_trip() {
	let capacity = 300;
	let keys = random_unique_keys::<u32>(capacity, 150);
	let mut heap = IndexedHeap::new(capacity, Ascending);
	keys.iter().for_each(|&k| heap.insert(k));
	let absent = (0..capacity as u32).filter(|&k| !heap.contains(k)).collect::<Vec<_>>();
	assert_eq!(absent.len(), capacity - keys.len());
	absent.into_iter().for_each(|k| {
		let before = _snapshot(&heap);
		heap.insert(k);
		heap.erase(k);
		assert_eq!(_snapshot(&heap), before, "Round trip of {} changed the heap", k);
	});
}
#[test]
fn test_idempotent_reprioritize() {
	let capacity = 256;
	let keys = shuffled_keys::<u16>(capacity);
	let mut heap = IndexedHeap::new(capacity, Ascending);
	keys.iter().for_each(|&k| heap.insert(k));
	let before = _snapshot(&heap);
	keys.iter().for_each(|&k| {
		heap.decreased(k);
		heap.increased(k);
		heap.update(k);
	});
	assert_eq!(_snapshot(&heap), before);
	/* Equal priorities never move */
	let mut heap = IndexedHeap::new(capacity, MinScoreOrder::<f64>::new(capacity));
	keys.iter().for_each(|&k| heap.insert(k));
	let before = _snapshot(&heap);
	assert_eq!(heap.as_slice(), keys.as_slice());
	keys.iter().for_each(|&k| {
		heap.increased(k);
		heap.decreased(k);
	});
	assert_eq!(_snapshot(&heap), before);
}
#[test]
fn test_reserve_growth() {
	let old_capacity = 40;
	let capacity = 100;
	let first = shuffled_keys::<u32>(old_capacity);
	let second = shuffled_keys::<u32>(capacity).into_iter().filter(|&k| k >= old_capacity as u32).collect::<Vec<_>>();
	let mut grown = IndexedHeap::new(old_capacity, Ascending);
	let mut fixed = IndexedHeap::new(capacity, Ascending);
	first.iter().for_each(|&k| { grown.insert(k); fixed.insert(k); });
	assert!(!grown.contains(old_capacity as u32));
	grown.reserve(capacity);
	assert_eq!(grown.size(), capacity);
	grown.reserve(10);
	assert_eq!(grown.get_bounds(), capacity);
	second.iter().for_each(|&k| { grown.insert(k); fixed.insert(k); });
	assert_eq!(_snapshot(&grown), _snapshot(&fixed));
	(0..50).for_each(|_| assert_eq!(grown.erase_min(), fixed.erase_min()));
	assert_eq!(_snapshot(&grown), _snapshot(&fixed));
}
#[test]
fn test_reset() {
	let capacity = 64;
	let mut heap = IndexedHeap::new(capacity, Ascending);
	random_unique_keys::<u8>(capacity, 30).into_iter().for_each(|k| heap.insert(k));
	heap.reset();
	_assert_membership(&heap, &foldhash::HashSet::default());
	assert_eq!(heap.size(), capacity);
	/* Reusable after reset */
	let keys = random_unique_keys::<u8>(capacity, 20);
	keys.iter().for_each(|&k| heap.insert(k));
	_assert_membership(&heap, &keys.iter().map(|&k| k as usize).collect());
	heap.clear();
	assert!(heap.empty());
	heap.clear();
	assert!(heap.empty());
}
#[test]
fn test_heapify() {
	let capacity = 1_000;
	let keys = random_unique_keys::<u32>(capacity, 700);
	let heap = IndexedHeap::from_keys(capacity, Ascending, keys.iter().copied());
	assert!(heap.check_invariant());
	assert_eq!(heap.len(), keys.len());
	let mut sorted_keys = keys.clone();
	sorted_keys.sort();
	assert_eq!(heap.into_sorted_iter().collect::<Vec<_>>(), sorted_keys);
	let empty = IndexedHeap::<u32,Ascending>::from_keys(3, Ascending, []);
	assert!(empty.empty() && empty.check_invariant());
	let single = IndexedHeap::<u32,Ascending>::from_keys(3, Ascending, [2]);
	assert_eq!(single.min_value(), 2);
}
#[test]
fn test_descending_order() {
	let capacity = 500;
	let keys = random_unique_keys::<u64>(capacity, 300);
	let mut heap = IndexedHeap::new(capacity, Descending::default());
	keys.iter().for_each(|&k| heap.insert(k));
	let mut sorted_keys = keys.clone();
	sorted_keys.sort_by(|a, b| b.cmp(a));
	assert_eq!(heap.sorted_iter().collect::<Vec<_>>(), sorted_keys);
	assert!(heap.empty());
}
#[test]
fn test_score_order_activity() {
	let capacity = 300;
	let mut heap = IndexedHeap::<u32,_>::new(capacity, MaxScoreOrder::<f64>::from_scores(random_scores(capacity)));
	shuffled_keys::<u32>(capacity).into_iter().for_each(|k| heap.insert(k));
	let mut rng = rand::thread_rng();
	(0..2_000).for_each(|i| {
		let k = rng.gen_range(0..capacity as u32);
		if i % 3 == 0 && heap.contains(k) { heap.erase(k); }
		heap.rescore(k, rng.gen::<f64>() * 2.0);
		assert!(heap.check_invariant());
	});
	let mut last = f64::INFINITY;
	while let Some(k) = heap.pop() {
		let score = heap.order().score(k);
		assert!(score <= last);
		last = score;
	}
	/* Manual score changes with update notifications */
	let mut heap = IndexedHeap::new(4, MinScoreOrder::<f32>::from_scores(vec![4.0, 3.0, 2.0, 1.0]));
	(0..4u8).for_each(|k| heap.insert(k));
	assert_eq!(heap.min_value(), 3);
	heap.order_mut().set_score(0u8, 0.5);
	heap.update(0);
	assert_eq!(heap.min_value(), 0);
	heap.order_mut().set_score(0u8, 9.0);
	heap.update(0);
	assert_eq!(heap.min_value(), 3);
	heap.reserve_with_scores(6);
	assert_eq!(heap.size(), 6);
	assert_eq!(heap.order().len(), 6);
	heap.insert(5);
	assert_eq!(heap.min_value(), 5);
	assert_eq!(heap.into_sorted_iter().collect::<Vec<_>>(), vec![5, 3, 2, 1, 0]);
}
#[test]
fn test_iteration_and_display() {
	let mut heap = IndexedHeap::<u32,Ascending>::new(5, Ascending);
	[4, 1, 3].into_iter().for_each(|k| heap.insert(k));
	assert_eq!(heap.iter().copied().collect::<Vec<_>>(), vec![1, 4, 3]);
	assert_eq!((&heap).into_iter().count(), 3);
	(1..=heap.len()).for_each(|slot| assert_eq!(heap.get_index(heap.get_key(slot)), slot));
	assert_eq!(heap.get_index(0), 0);
	let mut out = Vec::new();
	heap.display(&mut out).unwrap();
	assert_eq!(String::from_utf8(out).unwrap(), "1\n 4\n 3\n");
	heap.insert(2);
	assert_eq!(format!("{}", heap), "1\n 2\n  4\n 3\n");
	assert_eq!(format!("{}", IndexedHeap::<u32,Ascending>::new(2, Ascending)), "");
}
#[test]
fn test_swap() {
	let mut a = IndexedHeap::<u16,Ascending>::from_keys(10, Ascending, [7, 2, 5]);
	let mut b = IndexedHeap::<u16,Ascending>::from_keys(3, Ascending, [1]);
	a.swap(&mut b);
	assert_eq!((a.size(), a.len(), a.min_value()), (3, 1, 1));
	assert_eq!((b.size(), b.len(), b.min_value()), (10, 3, 2));
	assert!(a.check_invariant() && b.check_invariant());
	assert!(!a.contains(7) && b.contains(7));
}
#[test]
fn test_contains_out_of_bounds() {
	let heap = IndexedHeap::<usize,Ascending>::new(5, Ascending);
	assert!(!heap.contains(4));
	assert!(!heap.contains(5));
	assert!(!heap.contains(1_000_000));
}
#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "already in the heap")]
fn test_insert_present_key_panics() {
	let mut heap = IndexedHeap::<u32,Ascending>::new(5, Ascending);
	heap.insert(2);
	heap.insert(2);
}
#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "exceeds the heap bounds")]
fn test_insert_out_of_bounds_panics() {
	let mut heap = IndexedHeap::<u32,Ascending>::new(5, Ascending);
	heap.insert(5);
}
#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "not in the heap")]
fn test_erase_absent_key_panics() {
	let mut heap = IndexedHeap::<u32,Ascending>::new(5, Ascending);
	heap.insert(1);
	heap.erase(3);
}
#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "empty heap")]
fn test_erase_min_empty_panics() {
	let mut heap = IndexedHeap::<u32,Ascending>::new(5, Ascending);
	heap.erase_min();
}
#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "invariant violated")]
fn test_unreported_priority_change_panics() {
	let mut heap = IndexedHeap::new(6, MinScoreOrder::<f64>::from_scores(vec![0.0, 1.0, 2.0, 3.0, 5.0, 0.0]));
	(0..4u32).for_each(|k| heap.insert(k));
	assert_eq!(heap.as_slice(), &[0, 1, 2, 3]);
	/* Key 3 now sorts before its parent 1, but the heap is never told */
	heap.order_mut().set_score(3u32, -1.0);
	heap.insert(4);
}
#[test]
fn benchmark_compare_binary_heap() {
	use std::{cmp::Reverse, collections::BinaryHeap};
	/* Every mutation runs the O(n) invariant check under cfg(test), keep n small */
	let n = 3_000;
	let keys = shuffled_keys::<u32>(n);
	#[cfg(feature="count_operations")]
	crate::orders::reset_compare_counter();
	let indexed_time = std::time::Instant::now();
	let mut indexed = IndexedHeap::new(n, Ascending);
	keys.iter().for_each(|&k| indexed.insert(k));
	let indexed_result = indexed.sorted_iter().collect::<Vec<_>>();
	let indexed_time = indexed_time.elapsed();
	#[cfg(feature="count_operations")]
	println!("Comparisons: {}", crate::orders::compare_count());
	let std_time = std::time::Instant::now();
	let mut std_heap = BinaryHeap::with_capacity(n);
	keys.iter().for_each(|&k| std_heap.push(Reverse(k)));
	let std_result = (0..n).map(|_| std_heap.pop().unwrap().0).collect::<Vec<_>>();
	let std_time = std_time.elapsed();
	assert_eq!(indexed_result, std_result);
	println!("Push+pop: Indexed: {:?}, BinaryHeap: {:?}", indexed_time, std_time);
	let heapify_time = std::time::Instant::now();
	let indexed = IndexedHeap::from_keys(n, Ascending, keys.iter().copied());
	println!("Heapify: {:?}", heapify_time.elapsed());
	assert_eq!(indexed.len(), n);
}
