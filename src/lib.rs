
pub mod heaps;
pub mod orders;
pub mod random;
pub mod sinks;
pub mod types;

pub use heaps::IndexedHeap;
pub use orders::{Ascending, Descending, FnOrder, KeyOrder, MaxScoreOrder, MinScoreOrder, Reversed, ScoreOrder};
pub use sinks::KeySink;
