#[macro_use]
extern crate quickcheck_macros;

use name_lookup::tree::Node;
use quickcheck::{Arbitrary, Gen};

mod dictionary;
mod tree;

/// An enum for the various kinds of "things" to do to
/// a dictionary in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<K, V> {
    /// Add the K, V to the data structure
    Add(K, V),
    /// Remove the K from the data structure
    Remove(K),
}

impl<K, V> Arbitrary for Op<K, V>
where
    K: Arbitrary,
    V: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Op::Add(K::arbitrary(g), V::arbitrary(g))
        } else {
            Op::Remove(K::arbitrary(g))
        }
    }
}

/// Whether every key below `node` lies strictly between `low` and `high`.
pub(crate) fn is_search_tree<K: Ord, V>(
    node: Option<&Node<K, V>>,
    low: Option<&K>,
    high: Option<&K>,
) -> bool {
    match node {
        None => true,
        Some(n) => {
            let key = n.key();
            low.map_or(true, |low| low < key)
                && high.map_or(true, |high| key < high)
                && is_search_tree(n.left(), low, Some(key))
                && is_search_tree(n.right(), Some(key), high)
        }
    }
}
