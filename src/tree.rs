//! A persistent, unbalanced Binary Search Tree. Any operation that one would
//! expect to modify the tree (`insert` or `remove`) instead returns a new tree
//! that references every node of the original tree that wasn't on the search
//! path.
//!
//! Unlike the usual map APIs, `insert` refuses to overwrite an existing key and
//! nothing here ever rotates: the shape of the tree is purely a function of the
//! order of insertions and removals.
//!
//! # Examples
//!
//! ```
//! use name_lookup::tree::Tree;
//!
//! let tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find(&1), None);
//!
//! // This `insert` returns a new tree!
//! let new_tree = tree.insert(1, 2).unwrap();
//!
//! // The new tree has this new value but the old one doesn't.
//! assert_eq!(new_tree.find(&1), Some(&2));
//! assert_eq!(tree.find(&1), None);
//!
//! // Keys can't be inserted twice.
//! assert!(new_tree.insert(1, 3).is_err());
//!
//! // Remove it for good measure.
//! let (newer_tree, found) = new_tree.remove(&1);
//! assert!(found);
//!
//! // All history is preserved.
//! assert_eq!(newer_tree.find(&1), None);
//! assert_eq!(new_tree.find(&1), Some(&2));
//! assert_eq!(tree.find(&1), None);
//! ```

use std::cmp::Ordering;
use std::rc::Rc;

use crate::error::DictionaryError;
use crate::key::Key;

/// A link from a node (or a tree) to a child. `None` means there is no child.
type Link<K, V> = Option<Rc<Node<K, V>>>;

/// A key and the value stored with it.
#[derive(Debug)]
pub struct Entry<K, V> {
    key: K,
    value: V,
}

impl<K, V> Entry<K, V> {
    /// The key of this entry.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The value associated with [`key`][Entry::key].
    pub fn value(&self) -> &V {
        &self.value
    }
}

/// An immutable node. Its entry and children are fixed at construction, so the
/// same `Node` may be reachable from several trees at once.
#[derive(Debug)]
pub struct Node<K, V> {
    entry: Rc<Entry<K, V>>,
    left: Link<K, V>,
    right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    /// Construct a childless `Node` with the given `key` and `value`.
    fn new(key: K, value: V) -> Self {
        Self {
            entry: Rc::new(Entry { key, value }),
            left: None,
            right: None,
        }
    }

    /// Create a new Node with the same entry as this node
    /// but with the given children.
    fn with_children(&self, left: Link<K, V>, right: Link<K, V>) -> Self {
        Self {
            entry: Rc::clone(&self.entry),
            left,
            right,
        }
    }

    /// The entry stored in this node.
    pub fn entry(&self) -> &Entry<K, V> {
        &self.entry
    }

    /// Shorthand for `self.entry().key()`.
    pub fn key(&self) -> &K {
        &self.entry.key
    }

    /// Shorthand for `self.entry().value()`.
    pub fn value(&self) -> &V {
        &self.entry.value
    }

    /// The root of the left subtree, if any. Every key in it is smaller than [`key`][Node::key].
    pub fn left(&self) -> Option<&Node<K, V>> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if any. Every key in it is larger than [`key`][Node::key].
    pub fn right(&self) -> Option<&Node<K, V>> {
        self.right.as_deref()
    }

    fn find(&self, k: &K) -> Option<&V>
    where
        K: Ord,
    {
        match k.cmp(self.key()) {
            Ordering::Less => self.left.as_ref().and_then(|l| l.find(k)),
            Ordering::Equal => Some(self.value()),
            Ordering::Greater => self.right.as_ref().and_then(|r| r.find(k)),
        }
    }

    fn insert(&self, key: K, value: V) -> Result<Self, DictionaryError>
    where
        K: Ord,
    {
        match key.cmp(self.key()) {
            Ordering::Less => {
                let new_left = insert_into(&self.left, key, value)?;
                Ok(self.with_children(Some(new_left), self.right.clone()))
            }
            Ordering::Equal => Err(DictionaryError::DuplicateKey),
            Ordering::Greater => {
                let new_right = insert_into(&self.right, key, value)?;
                Ok(self.with_children(self.left.clone(), Some(new_right)))
            }
        }
    }

    /// Returns the subtree rooted here without `k`, or `None` if `k` isn't in it.
    fn remove(&self, k: &K) -> Option<Link<K, V>>
    where
        K: Ord,
    {
        match k.cmp(self.key()) {
            Ordering::Less => {
                let new_left = self.left.as_ref()?.remove(k)?;
                Some(Some(Rc::new(
                    self.with_children(new_left, self.right.clone()),
                )))
            }
            Ordering::Equal => Some(match (&self.left, &self.right) {
                (left, None) => left.clone(),
                (None, right) => right.clone(),

                // With two children the in-order successor (the smallest
                // node of the right subtree) takes this node's place.
                (Some(_), Some(right)) => {
                    let (new_right, successor) = right.remove_min();
                    Some(Rc::new(Node {
                        entry: successor,
                        left: self.left.clone(),
                        right: new_right,
                    }))
                }
            }),
            Ordering::Greater => {
                let new_right = self.right.as_ref()?.remove(k)?;
                Some(Some(Rc::new(
                    self.with_children(self.left.clone(), new_right),
                )))
            }
        }
    }

    /// Returns a new subtree without the smallest node and that node's entry.
    fn remove_min(&self) -> (Link<K, V>, Rc<Entry<K, V>>) {
        match &self.left {
            None => (self.right.clone(), Rc::clone(&self.entry)),
            Some(left) => {
                let (new_left, min) = left.remove_min();
                let new_node = self.with_children(new_left, self.right.clone());
                (Some(Rc::new(new_node)), min)
            }
        }
    }

    fn height(&self) -> usize {
        let left = self.left.as_ref().map_or(0, |l| l.height());
        let right = self.right.as_ref().map_or(0, |r| r.height());
        left.max(right) + 1
    }
}

/// Inserts into the subtree behind `link`, creating a singleton at an empty link.
fn insert_into<K, V>(
    link: &Link<K, V>,
    key: K,
    value: V,
) -> Result<Rc<Node<K, V>>, DictionaryError>
where
    K: Ord,
{
    match link {
        None => Ok(Rc::new(Node::new(key, value))),
        Some(n) => n.insert(key, value).map(Rc::new),
    }
}

/// A persistent Binary Search Tree. This can be used for inserting, finding,
/// and removing keys and values. Operations that would modify the tree
/// instead return a new tree; cloning a tree only clones a pointer.
#[derive(Debug)]
pub struct Tree<K, V> {
    root: Link<K, V>,
}

/// Manual implementation of `Clone` so we don't require `K: Clone` and `V: Clone`
/// just to copy the root pointer.
impl<K, V> Clone for Tree<K, V> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
        }
    }
}

impl<K, V> Default for Tree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Tree<K, V> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Whether this tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root node, for read-only walks over the structure of the tree
    /// (e.g. to draw it).
    ///
    /// # Examples
    ///
    /// ```
    /// use name_lookup::tree::Tree;
    ///
    /// let tree = Tree::new().insert(2, "b").unwrap().insert(1, "a").unwrap();
    /// let root = tree.root().unwrap();
    ///
    /// assert_eq!(root.key(), &2);
    /// assert_eq!(root.left().map(|n| n.value()), Some(&"a"));
    /// assert!(root.right().is_none());
    /// ```
    pub fn root(&self) -> Option<&Node<K, V>> {
        self.root.as_deref()
    }

    /// The number of levels in the tree. An empty tree has a height of 0.
    /// This walks every node.
    pub fn height(&self) -> usize {
        self.root.as_ref().map_or(0, |n| n.height())
    }

    /// Potentially finds the value associated with the given key
    /// in this tree. If no node has the corresponding key, `None`
    /// is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use name_lookup::tree::Tree;
    ///
    /// let tree = Tree::new().insert(1, 2).unwrap();
    ///
    /// assert_eq!(tree.find(&1), Some(&2));
    /// assert_eq!(tree.find(&42), None);
    /// ```
    pub fn find(&self, k: &K) -> Option<&V>
    where
        K: Ord,
    {
        self.root.as_ref().and_then(|n| n.find(k))
    }

    /// Returns a new tree that also holds `key` and `value`. Every node on the
    /// path to the new node is rebuilt and every other node is shared with `self`.
    ///
    /// Fails with [`DictionaryError::InvalidKey`] if `key` is absent and with
    /// [`DictionaryError::DuplicateKey`] if `key` is already in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use name_lookup::error::DictionaryError;
    /// use name_lookup::tree::Tree;
    ///
    /// let tree = Tree::new().insert(Some(1), 2).unwrap();
    ///
    /// assert_eq!(tree.insert(Some(1), 3).unwrap_err(), DictionaryError::DuplicateKey);
    /// assert_eq!(tree.insert(None, 3).unwrap_err(), DictionaryError::InvalidKey);
    /// assert_eq!(tree.find(&Some(1)), Some(&2));
    /// ```
    pub fn insert(&self, key: K, value: V) -> Result<Self, DictionaryError>
    where
        K: Key,
    {
        if key.is_absent() {
            return Err(DictionaryError::InvalidKey);
        }
        let root = insert_into(&self.root, key, value)?;
        Ok(Self { root: Some(root) })
    }

    /// Returns a new tree without a node with the given key, and whether such a
    /// node existed. If it didn't, the returned tree is `self` again.
    ///
    /// # Examples
    ///
    /// ```
    /// use name_lookup::tree::Tree;
    ///
    /// let tree = Tree::new().insert(1, 2).unwrap();
    /// let (new_tree, found) = tree.remove(&1);
    ///
    /// assert!(found);
    /// assert_eq!(new_tree.find(&1), None);
    /// assert_eq!(tree.find(&1), Some(&2));
    ///
    /// let (_, found) = new_tree.remove(&1);
    /// assert!(!found);
    /// ```
    pub fn remove(&self, k: &K) -> (Self, bool)
    where
        K: Ord,
    {
        match self.root.as_ref().and_then(|n| n.remove(k)) {
            Some(root) => (Self { root }, true),
            None => (self.clone(), false),
        }
    }

    /// Returns a new tree without the entry with the smallest key, along with
    /// that entry. Returns `None` for an empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use name_lookup::tree::Tree;
    ///
    /// let tree = Tree::new().insert(2, "b").unwrap().insert(1, "a").unwrap();
    /// let (rest, min) = tree.remove_min().unwrap();
    ///
    /// assert_eq!(min.key(), &1);
    /// assert_eq!(rest.find(&1), None);
    /// assert_eq!(rest.find(&2), Some(&"b"));
    /// ```
    pub fn remove_min(&self) -> Option<(Self, Rc<Entry<K, V>>)> {
        self.root.as_ref().map(|n| {
            let (root, min) = n.remove_min();
            (Self { root }, min)
        })
    }
}
