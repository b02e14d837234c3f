use std::fmt::Debug;
use std::hash::Hash;

/// Trait for types that can serve as transition labels in the automaton.
///
/// This trait is automatically implemented for any type satisfying all the
/// required bounds (`char`, `u8`, `u16`, `u32`, etc.).
///
/// - `Copy`: edges and input streams carry labels by value
/// - `Eq + Ord`: looking up children and keeping siblings sorted
/// - `Hash`: lets callers key their own maps by label
/// - `Debug`: debug printing of nodes
pub trait AutomatonChar: Copy + Eq + Ord + Hash + Debug {}

impl<T: Copy + Eq + Ord + Hash + Debug> AutomatonChar for T {}
