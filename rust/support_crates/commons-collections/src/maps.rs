//! Map helpers and a fluent [`MapBuilder`].

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// The subset of map behavior the builder and helpers rely on.
pub trait MapLike {
    type Key;
    type Value;

    fn insert(&mut self, key: Self::Key, value: Self::Value) -> Option<Self::Value>;

    fn remove(&mut self, key: &Self::Key) -> Option<Self::Value>;

    fn get(&self, key: &Self::Key) -> Option<&Self::Value>;

    fn contains_key(&self, key: &Self::Key) -> bool {
        self.get(key).is_some()
    }

    fn clear(&mut self);

    /// Keeps only the entries for which `f` returns `true`; `f` may rewrite values.
    fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&Self::Key, &mut Self::Value) -> bool;
}

impl<K, V, S> MapLike for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    type Key = K;
    type Value = V;

    fn insert(&mut self, key: K, value: V) -> Option<V> {
        HashMap::insert(self, key, value)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        HashMap::remove(self, key)
    }

    fn get(&self, key: &K) -> Option<&V> {
        HashMap::get(self, key)
    }

    fn contains_key(&self, key: &K) -> bool {
        HashMap::contains_key(self, key)
    }

    fn clear(&mut self) {
        HashMap::clear(self)
    }

    fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        HashMap::retain(self, f)
    }
}

impl<K: Ord, V> MapLike for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    fn insert(&mut self, key: K, value: V) -> Option<V> {
        BTreeMap::insert(self, key, value)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        BTreeMap::remove(self, key)
    }

    fn get(&self, key: &K) -> Option<&V> {
        BTreeMap::get(self, key)
    }

    fn contains_key(&self, key: &K) -> bool {
        BTreeMap::contains_key(self, key)
    }

    fn clear(&mut self) {
        BTreeMap::clear(self)
    }

    fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        BTreeMap::retain(self, f)
    }
}

/// Fluent construction of a map of any [`MapLike`] type.
///
/// ```
/// use commons_collections::MapBuilder;
///
/// let map = MapBuilder::tree_map(2, "two").put(1, "one").build();
/// assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MapBuilder<M> {
    map: M,
}

impl<M: MapLike> MapBuilder<M> {
    pub fn new(map: M) -> MapBuilder<M> {
        MapBuilder { map }
    }

    pub fn put(mut self, key: M::Key, value: M::Value) -> Self {
        self.map.insert(key, value);
        self
    }

    pub fn put_if_absent(mut self, key: M::Key, value: M::Value) -> Self {
        if !self.map.contains_key(&key) {
            self.map.insert(key, value);
        }
        self
    }

    pub fn remove(mut self, key: &M::Key) -> Self {
        self.map.remove(key);
        self
    }

    /// Removes the entry for `key` only when it currently maps to `value`.
    pub fn remove_entry_if(mut self, key: &M::Key, value: &M::Value) -> Self
    where
        M::Value: PartialEq,
    {
        if self.map.get(key) == Some(value) {
            self.map.remove(key);
        }
        self
    }

    pub fn clear(mut self) -> Self {
        self.map.clear();
        self
    }

    /// Inserts every entry; an absent source leaves the map unchanged.
    pub fn put_all<I>(mut self, entries: Option<I>) -> Self
    where
        I: IntoIterator<Item = (M::Key, M::Value)>,
    {
        for (key, value) in entries.into_iter().flatten() {
            self.map.insert(key, value);
        }
        self
    }

    pub fn build(self) -> M {
        self.map
    }
}

impl<K: Eq + Hash, V> MapBuilder<HashMap<K, V>> {
    pub fn hash_map(key: K, value: V) -> Self {
        MapBuilder::new(HashMap::new()).put(key, value)
    }
}

impl<K: Ord, V> MapBuilder<BTreeMap<K, V>> {
    pub fn tree_map(key: K, value: V) -> Self {
        MapBuilder::new(BTreeMap::new()).put(key, value)
    }
}

/// Values of the keys present in `map`, in key order of `keys`.
pub fn get_map_values<'a, M, I>(map: Option<&M>, keys: I) -> Vec<M::Value>
where
    M: MapLike,
    M::Key: 'a,
    M::Value: Clone,
    I: IntoIterator<Item = &'a M::Key>,
{
    match map {
        Some(map) => keys
            .into_iter()
            .filter_map(|key| map.get(key).cloned())
            .collect(),
        None => Vec::new(),
    }
}

/// Replaces every value equal to `old_value` with a clone of `new_value`.
pub fn change_map_values<M>(map: &mut M, old_value: &M::Value, new_value: &M::Value)
where
    M: MapLike,
    M::Value: PartialEq + Clone,
{
    map.retain(|_, value| {
        if value == old_value {
            *value = new_value.clone();
        }
        true
    });
}

/// Removes every entry whose value equals one of `values`.
pub fn remove_map_values<M>(map: &mut M, values: &[M::Value])
where
    M: MapLike,
    M::Value: PartialEq,
{
    map.retain(|_, value| !values.contains(value));
}

/// Fills every absent value with a clone of `replacement`.
pub fn replace_none_values<V, M>(map: &mut M, replacement: &V)
where
    V: Clone,
    M: MapLike<Value = Option<V>>,
{
    map.retain(|_, value| {
        if value.is_none() {
            *value = Some(replacement.clone());
        }
        true
    });
}

/// Flattens the collections held as map values; an absent map yields an empty `Vec`.
pub fn combine_values<'a, K, C, T, M>(map: Option<&'a M>) -> Vec<T>
where
    K: 'a,
    C: 'a,
    T: Clone + 'a,
    &'a M: IntoIterator<Item = (&'a K, &'a C)>,
    &'a C: IntoIterator<Item = &'a T>,
{
    map.into_iter()
        .flatten()
        .flat_map(|(_, values)| values)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, BTreeSet, HashMap};

    use super::*;

    #[test]
    fn test_builder() {
        let map = MapBuilder::hash_map(1, "one")
            .put(2, "two")
            .put_if_absent(2, "deux")
            .put_if_absent(3, "three")
            .build();
        assert_eq!(map.len(), 3);
        assert_eq!(map[&2], "two");

        let map = MapBuilder::tree_map(1, "one")
            .put(2, "two")
            .remove_entry_if(&1, &"uno")
            .remove_entry_if(&2, &"two")
            .build();
        assert_eq!(map.into_iter().collect::<Vec<_>>(), vec![(1, "one")]);

        let map = MapBuilder::tree_map(1, 1)
            .put_all(Some(vec![(2, 2), (3, 3)]))
            .put_all(None::<Vec<(i32, i32)>>)
            .remove(&1)
            .build();
        assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![2, 3]);

        let map = MapBuilder::hash_map("a", 1).clear().build();
        assert!(map.is_empty());
    }

    #[test]
    fn test_get_map_values() {
        let map = MapBuilder::hash_map(1, "one").put(2, "two").build();
        assert_eq!(get_map_values(Some(&map), &[2, 5, 1]), vec!["two", "one"]);
        assert!(get_map_values(None::<&HashMap<i32, &str>>, &[1]).is_empty());
    }

    #[test]
    fn test_change_and_remove_values() {
        let mut map = MapBuilder::tree_map(1, "")
            .put(2, "two")
            .put(3, "")
            .build();
        change_map_values(&mut map, &"", &"empty");
        assert_eq!(map.values().copied().collect::<Vec<_>>(), vec!["empty", "two", "empty"]);

        let mut map = MapBuilder::tree_map(1, "")
            .put(2, "two")
            .put(3, "empty")
            .put(4, "")
            .build();
        remove_map_values(&mut map, &["", "empty"]);
        assert_eq!(map.into_iter().collect::<Vec<_>>(), vec![(2, "two")]);
    }

    #[test]
    fn test_replace_none_values() {
        let mut map = MapBuilder::hash_map(1, Some("one"))
            .put(2, None)
            .put(3, None)
            .build();
        replace_none_values(&mut map, &"empty");
        let expected = MapBuilder::hash_map(1, Some("one"))
            .put(2, Some("empty"))
            .put(3, Some("empty"))
            .build();
        assert_eq!(map, expected);
    }

    #[test]
    fn test_combine_values() {
        let map: BTreeMap<&str, Vec<i32>> = MapBuilder::tree_map("a", vec![1, 3])
            .put("b", vec![])
            .put("c", vec![2, 6, 1])
            .build();
        let set: BTreeSet<i32> = combine_values(Some(&map)).into_iter().collect();
        assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![1, 2, 3, 6]);
        assert!(combine_values::<&str, Vec<i32>, i32, _>(None::<&BTreeMap<&str, Vec<i32>>>).is_empty());
    }
}
