use std::hash::BuildHasherDefault;
use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxHasher;


/// Insertion ordered map with fast hashing, iteration order is discovery order
pub type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;

/// Insertion ordered set, used to dedup neighbors without losing their order
pub type FxIndexSet<K> = IndexSet<K, BuildHasherDefault<FxHasher>>;
