use rand::{random, seq::SliceRandom, thread_rng};

use crate::types::{Float, UnsignedInteger};


/// Returns `n` distinct random keys from `[0, max)` in random order.
/// If `n >= max`, all keys of the range are returned (shuffled).
/// Every value below `max` must be representable by `R`.
pub fn random_unique_keys<R: UnsignedInteger>(max: usize, n: usize) -> Vec<R> {
	assert!(max == 0 || R::from_usize(max-1).is_some(), "Keys below {} do not fit into the key type", max);
	let mut ret: Vec<R> = if n > max/2 {
		/* Dense request, shuffle the whole range and cut */
		let mut all = (0..max).filter_map(R::from_usize).collect::<Vec<R>>();
		all.shuffle(&mut thread_rng());
		all.truncate(n);
		all
	} else {
		let mut ret = Vec::with_capacity(n);
		let mut set = foldhash::HashSet::default();
		while set.len() < n {
			if let Some(val) = R::from_usize(random::<usize>() % max) {
				if set.insert(val) { ret.push(val); }
			}
		}
		ret
	};
	ret.shrink_to_fit();
	ret
}

/// Returns all keys of `[0, max)` in random order
pub fn shuffled_keys<R: UnsignedInteger>(max: usize) -> Vec<R> {
	random_unique_keys(max, max)
}

/// Returns `n` uniform random scores from the unit interval
pub fn random_scores<F: Float>(n: usize) -> Vec<F> {
	(0..n).map(|_| F::from_f64(random::<f64>()).unwrap_or_else(F::zero)).collect()
}


#[test]
fn test_random_unique_keys() {
	(0..60).for_each(|max| {
		(0..60).for_each(|n| {
			let keys = random_unique_keys::<u32>(max, n);
			assert_eq!(keys.len(), n.min(max));
			assert!(keys.iter().all(|&k| (k as usize) < max));
			let unique = keys.iter().collect::<foldhash::HashSet<_>>();
			assert_eq!(unique.len(), keys.len());
		})
	})
}
#[test]
#[should_panic(expected = "do not fit into the key type")]
fn test_random_unique_keys_sparse_overflow() {
	random_unique_keys::<u8>(1000, 300);
}
#[test]
#[should_panic(expected = "do not fit into the key type")]
fn test_random_unique_keys_dense_overflow() {
	random_unique_keys::<u8>(1000, 900);
}
#[test]
fn test_random_unique_keys_full_key_type() {
	let mut keys = random_unique_keys::<u8>(256, 256);
	keys.sort();
	assert_eq!(keys, (0..=255).collect::<Vec<u8>>());
	assert_eq!(random_unique_keys::<u8>(256, 10).len(), 10);
}
#[test]
fn test_shuffled_keys() {
	let mut keys = shuffled_keys::<u16>(500);
	keys.sort();
	assert_eq!(keys, (0..500).collect::<Vec<u16>>());
}
#[test]
fn test_random_scores() {
	let scores = random_scores::<f32>(1000);
	assert_eq!(scores.len(), 1000);
	assert!(scores.iter().all(|&s| s >= 0.0 && s <= 1.0));
}
