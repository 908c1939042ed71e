use std::marker::PhantomData;

use crate::types::{key_index, Float, UnsignedInteger};

/// Strict ordering capability over heap keys.
///
/// `less_than(a, b)` returns true iff `a` must sort before `b`. The order must be a
/// total preorder and must not change for keys held by a heap unless the heap is
/// notified through `decreased`, `increased` or `update`.
pub trait KeyOrder<R: UnsignedInteger> {
	fn less_than(&self, a: R, b: R) -> bool;
}


/* These counters are optional and solely useful for benchmarking purposes.
 * They count the comparisons performed by the stock orders below since the last reset.
 * To use them you must set the "count_operations" feature during
 * compilation with "--features count_operations". */
#[cfg(feature="count_operations")]
pub static COMPARE_COUNTER: std::sync::atomic::AtomicUsize = std::sync::atomic::AtomicUsize::new(0);
#[cfg(feature="count_operations")]
#[inline(always)]
pub fn reset_compare_counter() {
	COMPARE_COUNTER.store(0, std::sync::atomic::Ordering::Relaxed);
}
#[cfg(feature="count_operations")]
#[inline(always)]
pub fn compare_count() -> usize {
	COMPARE_COUNTER.load(std::sync::atomic::Ordering::Relaxed)
}
#[inline(always)]
fn _count_compare() {
	#[cfg(feature="count_operations")]
	COMPARE_COUNTER.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
}


/* Natural order of the key values, smallest key first. */
#[derive(Debug,Clone,Copy,Default)]
pub struct Ascending;
impl Ascending {
	pub fn new() -> Self { Ascending }
}
impl<R: UnsignedInteger> KeyOrder<R> for Ascending {
	#[inline(always)]
	fn less_than(&self, a: R, b: R) -> bool {
		_count_compare();
		a < b
	}
}


/* Flips any order, e.g. `Reversed<Ascending>` pops the largest key first. */
#[derive(Debug,Clone,Copy,Default)]
pub struct Reversed<O> { inner: O }
impl<O> Reversed<O> {
	pub fn new(inner: O) -> Self { Reversed{inner: inner} }
	#[inline(always)]
	pub fn inner(&self) -> &O { &self.inner }
	#[inline(always)]
	pub fn inner_mut(&mut self) -> &mut O { &mut self.inner }
}
impl<R: UnsignedInteger, O: KeyOrder<R>> KeyOrder<R> for Reversed<O> {
	#[inline(always)]
	fn less_than(&self, a: R, b: R) -> bool {
		self.inner.less_than(b, a)
	}
}
pub type Descending = Reversed<Ascending>;


/* Wraps a plain comparison closure `Fn(a, b) -> bool`. */
#[derive(Clone)]
pub struct FnOrder<R: UnsignedInteger, F: Fn(R,R) -> bool> {
	fun: F,
	_marker: PhantomData<R>,
}
impl<R: UnsignedInteger, F: Fn(R,R) -> bool> FnOrder<R,F> {
	pub fn new(fun: F) -> Self { FnOrder{fun: fun, _marker: PhantomData} }
}
impl<R: UnsignedInteger, F: Fn(R,R) -> bool> KeyOrder<R> for FnOrder<R,F> {
	#[inline(always)]
	fn less_than(&self, a: R, b: R) -> bool {
		_count_compare();
		(self.fun)(a, b)
	}
}


/// Orders keys by an owned score table, `scores[key]`.
///
/// With `MIN = true` the smallest score sorts first, with `MIN = false` the largest
/// (e.g. variable activities in a SAT solver). Incomparable scores (NaN) never sort
/// before anything.
#[derive(Debug,Clone)]
pub struct ScoreOrder<F: Float, const MIN: bool> {
	scores: Vec<F>,
}
impl<F: Float, const MIN: bool> ScoreOrder<F,MIN> {
	/// Creates a score table for keys in `[0, capacity)`, all scores zero
	pub fn new(capacity: usize) -> Self {
		ScoreOrder{scores: vec![F::zero(); capacity]}
	}
	pub fn from_scores(scores: Vec<F>) -> Self {
		ScoreOrder{scores: scores}
	}
	#[inline(always)]
	pub fn score<R: UnsignedInteger>(&self, key: R) -> F {
		self.scores[key_index(key)]
	}
	/// Overwrites a score. If the key is held by a heap, the heap must be notified.
	#[inline(always)]
	pub fn set_score<R: UnsignedInteger>(&mut self, key: R, score: F) {
		self.scores[key_index(key)] = score;
	}
	/// Grows the table to at least `capacity` entries, new scores are zero
	#[inline(always)]
	pub fn reserve(&mut self, capacity: usize) {
		if capacity > self.scores.len() {
			self.scores.resize(capacity, F::zero());
		}
	}
	#[inline(always)]
	pub fn as_slice(&self) -> &[F] {
		self.scores.as_slice()
	}
	/// Mutable access to all scores. If keys held by a heap change, the heap must be notified.
	#[inline(always)]
	pub fn as_mut_slice(&mut self) -> &mut [F] {
		self.scores.as_mut_slice()
	}
	#[inline(always)]
	pub fn len(&self) -> usize {
		self.scores.len()
	}
}
impl<R: UnsignedInteger, F: Float, const MIN: bool> KeyOrder<R> for ScoreOrder<F,MIN> {
	#[inline(always)]
	fn less_than(&self, a: R, b: R) -> bool {
		_count_compare();
		let (sa, sb) = (self.scores[key_index(a)], self.scores[key_index(b)]);
		if MIN { sa < sb } else { sa > sb }
	}
}
pub type MinScoreOrder<F> = ScoreOrder<F,true>;
pub type MaxScoreOrder<F> = ScoreOrder<F,false>;



#[test]
fn test_ascending_descending() {
	let asc = Ascending::new();
	let desc = Descending::default();
	assert!(asc.less_than(1u32, 2u32));
	assert!(!asc.less_than(2u32, 1u32));
	assert!(!asc.less_than(2u32, 2u32));
	assert!(desc.less_than(2u32, 1u32));
	assert!(!desc.less_than(1u32, 2u32));
	assert!(!desc.less_than(2u32, 2u32));
}
#[test]
fn test_fn_order() {
	/* Even keys before odd keys, then ascending */
	let order = FnOrder::new(|a: u16, b: u16| (a % 2, a) < (b % 2, b));
	assert!(order.less_than(4, 1));
	assert!(order.less_than(2, 4));
	assert!(!order.less_than(3, 2));
}
#[test]
fn test_score_order() {
	let mut min_order = MinScoreOrder::<f64>::new(4);
	min_order.set_score(0u8, 3.0);
	min_order.set_score(1u8, -1.0);
	min_order.set_score(2u8, f64::NAN);
	assert!(min_order.less_than(1u8, 0u8));
	assert!(!min_order.less_than(0u8, 1u8));
	assert!(!min_order.less_than(2u8, 0u8));
	assert!(!min_order.less_than(0u8, 2u8));
	let max_order = MaxScoreOrder::<f32>::from_scores(vec![0.5, 2.0, 1.0]);
	assert!(max_order.less_than(1usize, 2usize));
	assert!(max_order.less_than(2usize, 0usize));
	assert_eq!(max_order.score(1usize), 2.0);
	let mut grown = MinScoreOrder::<f32>::new(2);
	grown.reserve(10);
	assert_eq!(grown.len(), 10);
	grown.reserve(3);
	assert_eq!(grown.len(), 10);
	assert!(grown.as_slice().iter().all(|&v| v == 0.0));
}
#[cfg(feature="count_operations")]
#[test]
fn test_compare_counter() {
	let before = compare_count();
	let asc = Ascending::new();
	(0..10u32).for_each(|i| { asc.less_than(i, 5); });
	/* Other tests may compare concurrently, so only a lower bound holds */
	assert!(compare_count() >= before + 10);
}
