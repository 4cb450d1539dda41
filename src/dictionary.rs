//! A mutable dictionary handle over the persistent [`Tree`].
//!
//! The `Dictionary` itself is long-lived: `add` and `remove` swap its current
//! tree for the new one the operation produced. Nodes are never touched, so a
//! [`snapshot`][Dictionary::snapshot] (or a `clone` of the dictionary) taken
//! earlier keeps seeing exactly what it saw when it was taken.
//!
//! # Examples
//!
//! ```
//! use name_lookup::dictionary::Dictionary;
//! use name_lookup::error::DictionaryError;
//!
//! let mut names = Dictionary::new();
//! names.add("ada", 1815).unwrap();
//! names.add("alan", 1912).unwrap();
//!
//! assert_eq!(names.try_get_value(&"ada"), Ok(Some(&1815)));
//! assert_eq!(names.add("ada", 0), Err(DictionaryError::DuplicateKey));
//!
//! let before = names.snapshot();
//! assert_eq!(names.remove(&"ada"), Ok(true));
//!
//! assert_eq!(names.try_get_value(&"ada"), Ok(None));
//! assert_eq!(before.find(&"ada"), Some(&1815));
//! ```

use crate::error::DictionaryError;
use crate::key::Key;
use crate::tree::Tree;

/// A dictionary from keys to values stored in a persistent, unbalanced
/// Binary Search Tree.
#[derive(Debug)]
pub struct Dictionary<K, V> {
    elements: Tree<K, V>,
}

/// Manual implementation of `Clone` so we don't require `K: Clone` and `V: Clone`.
/// The clone shares every node with `self`.
impl<K, V> Clone for Dictionary<K, V> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements.clone(),
        }
    }
}

impl<K, V> Default for Dictionary<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> From<Tree<K, V>> for Dictionary<K, V> {
    fn from(elements: Tree<K, V>) -> Self {
        Self { elements }
    }
}

/// Fails with [`DictionaryError::InvalidKey`] if `key` is absent.
fn check_key<K: Key>(key: &K) -> Result<(), DictionaryError> {
    if key.is_absent() {
        tracing::debug!("rejected absent key");
        Err(DictionaryError::InvalidKey)
    } else {
        Ok(())
    }
}

impl<K, V> Dictionary<K, V> {
    /// Creates an empty `Dictionary`.
    pub fn new() -> Self {
        Self {
            elements: Tree::new(),
        }
    }

    /// Whether the dictionary holds no entries.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The current tree, for read-only inspection of its structure.
    pub fn tree(&self) -> &Tree<K, V> {
        &self.elements
    }

    /// Returns the current tree. Later changes to the dictionary don't affect it.
    pub fn snapshot(&self) -> Tree<K, V> {
        self.elements.clone()
    }

    /// Looks up the value associated with `key`. `Ok(None)` means the key isn't stored.
    ///
    /// # Errors
    ///
    /// [`DictionaryError::InvalidKey`] if `key` is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use name_lookup::dictionary::Dictionary;
    /// use name_lookup::error::DictionaryError;
    ///
    /// let mut dictionary = Dictionary::new();
    /// dictionary.add(Some(4), "e").unwrap();
    ///
    /// assert_eq!(dictionary.try_get_value(&Some(4)), Ok(Some(&"e")));
    /// assert_eq!(dictionary.try_get_value(&Some(5)), Ok(None));
    /// assert_eq!(dictionary.try_get_value(&None), Err(DictionaryError::InvalidKey));
    /// ```
    pub fn try_get_value(&self, key: &K) -> Result<Option<&V>, DictionaryError>
    where
        K: Key,
    {
        check_key(key)?;
        Ok(self.elements.find(key))
    }

    /// Whether `key` is stored in the dictionary.
    ///
    /// # Errors
    ///
    /// [`DictionaryError::InvalidKey`] if `key` is absent.
    pub fn contains_key(&self, key: &K) -> Result<bool, DictionaryError>
    where
        K: Key,
    {
        self.try_get_value(key).map(|value| value.is_some())
    }

    /// Adds `key` with its associated `value`. Existing entries are never overwritten.
    ///
    /// # Errors
    ///
    /// [`DictionaryError::InvalidKey`] if `key` is absent and
    /// [`DictionaryError::DuplicateKey`] if `key` is already stored. Either way
    /// the dictionary is unchanged.
    pub fn add(&mut self, key: K, value: V) -> Result<(), DictionaryError>
    where
        K: Key,
    {
        check_key(&key)?;
        match self.elements.insert(key, value) {
            Ok(elements) => {
                self.elements = elements;
                tracing::trace!(height = self.elements.height(), "added entry");
                Ok(())
            }
            Err(e) => {
                tracing::debug!(error = %e, "rejected entry");
                Err(e)
            }
        }
    }

    /// Removes `key` and its value, returning whether it was stored.
    ///
    /// # Errors
    ///
    /// [`DictionaryError::InvalidKey`] if `key` is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use name_lookup::dictionary::Dictionary;
    ///
    /// let mut dictionary = Dictionary::new();
    /// dictionary.add(1, "a").unwrap();
    ///
    /// assert_eq!(dictionary.remove(&1), Ok(true));
    /// assert_eq!(dictionary.remove(&1), Ok(false));
    /// assert!(dictionary.is_empty());
    /// ```
    pub fn remove(&mut self, key: &K) -> Result<bool, DictionaryError>
    where
        K: Key,
    {
        check_key(key)?;
        let (elements, found) = self.elements.remove(key);
        self.elements = elements;
        tracing::trace!(found, height = self.elements.height(), "removed entry");
        Ok(found)
    }
}
