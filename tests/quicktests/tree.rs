use name_lookup::tree::Tree;

use std::collections::HashSet;

use crate::is_search_tree;

/// Builds a tree from `xs`, skipping the ones that are already in it.
fn tree_of(xs: &[i8]) -> Tree<i8, i8> {
    xs.iter().fold(Tree::new(), |tree, x| {
        tree.insert(*x, *x).unwrap_or(tree)
    })
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = tree_of(&xs);

    is_search_tree(tree.root(), None, None) && xs.iter().all(|x| tree.find(x) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = tree_of(&xs);
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x) == None)
}

#[quickcheck]
fn duplicates_are_rejected(xs: Vec<i8>) -> bool {
    let tree = tree_of(&xs);

    xs.iter().all(|x| tree.insert(*x, x.wrapping_add(1)).is_err())
        && xs.iter().all(|x| tree.find(x) == Some(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = tree_of(&xs);
    for delete in &deletes {
        tree = tree.remove(delete).0;
        if !is_search_tree(tree.root(), None, None) {
            return false;
        }
    }

    let deleted: HashSet<_> = deletes.iter().collect();
    deletes.iter().all(|x| tree.find(x).is_none())
        && xs
            .iter()
            .filter(|x| !deleted.contains(x))
            .all(|x| tree.find(x) == Some(x))
}

#[quickcheck]
fn old_versions_are_untouched(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let original = tree_of(&xs);
    let mut tree = original.clone();
    for delete in &deletes {
        tree = tree.remove(delete).0;
    }
    for x in &deletes {
        tree = tree.insert(x.wrapping_mul(3), 0).unwrap_or(tree);
    }

    xs.iter().all(|x| original.find(x) == Some(x))
}

#[quickcheck]
fn remove_min_yields_smallest(xs: Vec<i8>) -> bool {
    let tree = tree_of(&xs);
    match (tree.remove_min(), xs.iter().min()) {
        (None, None) => true,
        (Some((rest, min)), Some(smallest)) => {
            min.key() == smallest
                && rest.find(smallest).is_none()
                && is_search_tree(rest.root(), None, None)
        }
        _ => false,
    }
}
