use name_lookup::{Dictionary, DictionaryError};

use std::collections::HashMap;

use crate::{is_search_tree, Op};

/// Applies a set of operations to a dictionary and a hashmap.
/// This way we can ensure that after a random smattering of adds
/// and removes we have the same set of keys in the map.
fn do_ops<K, V>(
    ops: &[Op<K, V>],
    dictionary: &mut Dictionary<K, V>,
    map: &mut HashMap<K, V>,
) -> bool
where
    K: std::hash::Hash + Eq + Clone + name_lookup::key::Key,
    V: Clone,
{
    for op in ops {
        let consistent = match op {
            Op::Add(k, v) => {
                let added = dictionary.add(k.clone(), v.clone());
                if map.contains_key(k) {
                    added == Err(DictionaryError::DuplicateKey)
                } else {
                    map.insert(k.clone(), v.clone());
                    added == Ok(())
                }
            }
            Op::Remove(k) => dictionary.remove(k) == Ok(map.remove(k).is_some()),
        };
        if !consistent || !is_search_tree(dictionary.tree().root(), None, None) {
            return false;
        }
    }

    true
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8, i8>>) -> bool {
    let mut dictionary = Dictionary::new();
    let mut map = HashMap::new();

    do_ops(&ops, &mut dictionary, &mut map)
        && map
            .keys()
            .all(|key| dictionary.try_get_value(key) == Ok(map.get(key)))
}

#[quickcheck]
fn fuzz_snapshot_survives_operations(before: Vec<Op<i8, i8>>, after: Vec<Op<i8, i8>>) -> bool {
    let mut dictionary = Dictionary::new();
    let mut map = HashMap::new();
    do_ops(&before, &mut dictionary, &mut map);

    let snapshot = dictionary.clone();
    do_ops(&after, &mut dictionary, &mut map.clone());

    map.keys()
        .all(|key| snapshot.try_get_value(key) == Ok(map.get(key)))
}

#[quickcheck]
fn absent_keys_never_change_anything(keys: Vec<u8>) -> bool {
    let mut dictionary = Dictionary::new();
    for k in &keys {
        let _ = dictionary.add(Some(*k), *k);
    }
    let before = dictionary.snapshot();

    dictionary.add(None, 0) == Err(DictionaryError::InvalidKey)
        && dictionary.remove(&None) == Err(DictionaryError::InvalidKey)
        && match (before.root(), dictionary.tree().root()) {
            (None, None) => true,
            (Some(a), Some(b)) => std::ptr::eq(a, b),
            _ => false,
        }
}
