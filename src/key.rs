//! Keys accepted by the [`Dictionary`][crate::dictionary::Dictionary].
//!
//! A key must be totally ordered and must be present. Most key types can never
//! be absent, so [`Key::is_absent`] defaults to `false` and opting in is a
//! one-liner:
//!
//! ```
//! use name_lookup::key::Key;
//!
//! #[derive(PartialEq, Eq, PartialOrd, Ord)]
//! struct StudentId(u32);
//!
//! impl Key for StudentId {}
//!
//! assert!(!StudentId(7).is_absent());
//! ```
//!
//! `Option<T>` keys treat `None` as absent, which is how callers holding a
//! possibly-missing key get an [`InvalidKey`][crate::error::DictionaryError::InvalidKey]
//! error instead of a silent miss.

use std::rc::Rc;

/// A totally ordered key that may be checked for absence before use.
pub trait Key: Ord {
    /// Whether this key stands for "no key at all". Operations given an absent
    /// key fail without touching the tree.
    fn is_absent(&self) -> bool {
        false
    }
}

macro_rules! impl_present_key {
    ($($t:ty),* $(,)?) => {
        $(impl Key for $t {})*
    };
}

impl_present_key!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char, bool, str, String,
);

/// A tuple is absent if any of its parts is.
macro_rules! impl_tuple_key {
    ($($name:ident)+) => {
        impl<$($name: Key),+> Key for ($($name,)+) {
            #[allow(non_snake_case)]
            fn is_absent(&self) -> bool {
                let ($($name,)+) = self;
                false $(|| $name.is_absent())+
            }
        }
    };
}

impl_tuple_key!(A);
impl_tuple_key!(A B);
impl_tuple_key!(A B C);
impl_tuple_key!(A B C D);
impl_tuple_key!(A B C D E);
impl_tuple_key!(A B C D E F);

impl<T: Key + ?Sized> Key for &T {
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

impl<T: Ord> Key for Option<T> {
    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

impl<T: Key + ?Sized> Key for Box<T> {
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

impl<T: Key + ?Sized> Key for Rc<T> {
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}
