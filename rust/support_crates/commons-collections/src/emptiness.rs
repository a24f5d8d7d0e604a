use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};

/// Collections that know their element count.
pub trait Len {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Len for [T] {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }
}

impl<T, const N: usize> Len for [T; N] {
    fn len(&self) -> usize {
        N
    }
}

impl Len for str {
    fn len(&self) -> usize {
        str::len(self)
    }
}

impl Len for String {
    fn len(&self) -> usize {
        String::len(self)
    }
}

macro_rules! impl_len {
    ($($t:ident<$($p:ident),+>),* $(,)?) => {
        $(impl<$($p),+> Len for $t<$($p),+> {
            #[inline]
            fn len(&self) -> usize {
                $t::len(self)
            }
        })*
    };
}

impl_len!(Vec<T>, VecDeque<T>, LinkedList<T>, BTreeSet<T>, BTreeMap<K, V>);

impl<T, S> Len for HashSet<T, S> {
    fn len(&self) -> usize {
        HashSet::len(self)
    }
}

impl<K, V, S> Len for HashMap<K, V, S> {
    fn len(&self) -> usize {
        HashMap::len(self)
    }
}

/// Returns true if `collection` is absent or has no elements.
#[inline]
pub fn is_empty<C: Len + ?Sized>(collection: Option<&C>) -> bool {
    collection.is_none_or(|c| c.is_empty())
}

#[inline]
pub fn is_not_empty<C: Len + ?Sized>(collection: Option<&C>) -> bool {
    !is_empty(collection)
}

/// Returns the collection, or a new empty one when it is absent.
#[inline]
pub fn default_collection<C: Default>(collection: Option<C>) -> C {
    collection.unwrap_or_default()
}
