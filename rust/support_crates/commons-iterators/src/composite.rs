//! Pairs keys with looked-up values, skipping keys without a value.

use commons_core::{Error, Result, try_or_ret_some_err};

type HasValueFn<'a, K> = Box<dyn FnMut(&K) -> Result<bool> + 'a>;
type GetValueFn<'a, K, V> = Box<dyn FnMut(&K) -> Result<V> + 'a>;
type RemoveValueFn<'a, K, V> = Box<dyn FnMut(&K, &V) -> Result<()> + 'a>;

/// Iterates `(key, value)` pairs for the keys of a key sequence that resolve to
/// a value.
///
/// Each key is tested with `has_value`; keys that fail the test are skipped
/// and never revisited. For the others, `get_value` supplies the value. The key
/// sequence is only ever advanced forward, one lookahead pair at a time. A key
/// whose lookup returns an error stays pending and is looked up again by the
/// next call.
///
/// When an optional remove callback is configured, [`remove`](Self::remove)
/// hands it the pair most recently returned by [`next_item`](Self::next_item),
/// even if [`has_next`](Self::has_next) has already looked ahead past it.
pub struct CompositeIterator<'a, K, V, I> {
    keys: I,
    has_value: HasValueFn<'a, K>,
    get_value: GetValueFn<'a, K, V>,
    remove_value: Option<RemoveValueFn<'a, K, V>>,
    pending: Option<K>,
    lookahead: Option<(K, V)>,
    last_returned: Option<(K, V)>,
    exhausted: bool,
}

impl<'a, K, V, I> CompositeIterator<'a, K, V, I>
where
    K: Clone,
    V: Clone,
    I: Iterator<Item = K>,
{
    pub fn new<T, H, G>(keys: T, has_value: H, get_value: G) -> Self
    where
        T: IntoIterator<IntoIter = I>,
        H: FnMut(&K) -> Result<bool> + 'a,
        G: FnMut(&K) -> Result<V> + 'a,
    {
        CompositeIterator {
            keys: keys.into_iter(),
            has_value: Box::new(has_value),
            get_value: Box::new(get_value),
            remove_value: None,
            pending: None,
            lookahead: None,
            last_returned: None,
            exhausted: false,
        }
    }

    /// Enables [`remove`](Self::remove) with the given callback.
    pub fn with_remove<R>(mut self, remove_value: R) -> Self
    where
        R: FnMut(&K, &V) -> Result<()> + 'a,
    {
        self.remove_value = Some(Box::new(remove_value));
        self
    }

    /// Returns `true` if another pair is available, pulling keys until one
    /// resolves to a value.
    ///
    /// Once the key sequence runs out, the iterator stays exhausted. A lookup
    /// error is returned unchanged and the failed key is retried next time.
    pub fn has_next(&mut self) -> Result<bool> {
        if self.lookahead.is_some() {
            return Ok(true);
        }
        if self.exhausted {
            return Ok(false);
        }
        loop {
            if self.pending.is_none() {
                self.pending = self.keys.next();
            }
            let Some(key) = self.pending.as_ref() else {
                break;
            };
            if (self.has_value)(key)? {
                let value = (self.get_value)(key)?;
                if let Some(key) = self.pending.take() {
                    self.lookahead = Some((key, value));
                }
                return Ok(true);
            }
            self.pending = None;
        }
        log::debug!("composite iterator exhausted its keys");
        self.exhausted = true;
        Ok(false)
    }

    /// Returns the next pair.
    ///
    /// # Errors
    ///
    /// Returns `NoSuchElement` once the keys are exhausted, or the error of a
    /// lookup callback.
    pub fn next_item(&mut self) -> Result<(K, V)> {
        if !self.has_next()? {
            return Err(Error::no_such_element());
        }
        let pair = self.lookahead.take().ok_or_else(Error::no_such_element)?;
        self.last_returned = Some(pair.clone());
        Ok(pair)
    }

    /// Passes the last returned pair to the remove callback.
    ///
    /// # Errors
    ///
    /// - `Unsupported` if no remove callback was configured.
    /// - `IllegalState` if no pair has been returned since the last `remove`.
    /// - Any error of the callback, in which case the pair stays removable.
    pub fn remove(&mut self) -> Result<()> {
        let Some(remove_value) = self.remove_value.as_mut() else {
            return Err(Error::unsupported("remove"));
        };
        let Some((key, value)) = self.last_returned.as_ref() else {
            return Err(Error::illegal_state(
                "remove",
                "next has not been called since the last remove",
            ));
        };
        remove_value(key, value)?;
        log::trace!("composite iterator removed the last returned pair");
        self.last_returned = None;
        Ok(())
    }
}

impl<K, V, I> Iterator for CompositeIterator<'_, K, V, I>
where
    K: Clone,
    V: Clone,
    I: Iterator<Item = K>,
{
    type Item = Result<(K, V)>;

    fn next(&mut self) -> Option<Self::Item> {
        if !try_or_ret_some_err!(self.has_next()) {
            return None;
        }
        Some(self.next_item())
    }
}

#[cfg(test)]
mod tests {
    use std::{
        cell::{Cell, RefCell},
        collections::BTreeMap,
        io,
    };

    use commons_collections::MapBuilder;
    use commons_core::ErrorKind;

    use super::*;

    fn numbers() -> RefCell<BTreeMap<i64, &'static str>> {
        RefCell::new(
            MapBuilder::tree_map(1, "one")
                .put(2, "two")
                .put(3, "three")
                .build(),
        )
    }

    fn keys_of(map: &RefCell<BTreeMap<i64, &'static str>>) -> Vec<i64> {
        map.borrow().keys().copied().collect()
    }

    #[test]
    fn test_next() {
        let map = numbers();
        let mut it = CompositeIterator::new(
            keys_of(&map),
            |k: &i64| Ok(map.borrow().contains_key(k)),
            |k: &i64| Ok(map.borrow()[k]),
        );
        assert!(it.has_next().unwrap());
        assert_eq!(it.next_item().unwrap(), (1, "one"));
        assert!(it.has_next().unwrap());
        assert_eq!(it.next_item().unwrap(), (2, "two"));
        assert!(it.has_next().unwrap());
        assert_eq!(it.next_item().unwrap(), (3, "three"));
        assert!(!it.has_next().unwrap());
        assert!(it.next_item().unwrap_err().is_no_such_element());
    }

    #[test]
    fn test_skips_keys_without_value() {
        let map = numbers();
        let it = CompositeIterator::new(
            0..6,
            |k: &i64| Ok(map.borrow().contains_key(k)),
            |k: &i64| Ok(map.borrow()[k]),
        );
        let pairs = it.collect::<Result<Vec<_>>>().unwrap();
        assert_eq!(pairs, vec![(1, "one"), (2, "two"), (3, "three")]);
    }

    #[test]
    fn test_remove() {
        let map = numbers();
        let mut it = CompositeIterator::new(
            keys_of(&map),
            |k: &i64| Ok(map.borrow().contains_key(k)),
            |k: &i64| Ok(map.borrow()[k]),
        )
        .with_remove(|k, _| {
            map.borrow_mut().remove(k);
            Ok(())
        });

        for expected in [(1, "one"), (2, "two"), (3, "three")] {
            assert!(it.has_next().unwrap());
            assert_eq!(it.next_item().unwrap(), expected);
            it.remove().unwrap();
        }
        assert!(!it.has_next().unwrap());
        assert!(map.borrow().is_empty());
    }

    #[test]
    fn test_remove_after_lookahead() {
        let map = numbers();
        let removed = RefCell::new(Vec::new());
        let mut it = CompositeIterator::new(
            keys_of(&map),
            |k: &i64| Ok(map.borrow().contains_key(k)),
            |k: &i64| Ok(map.borrow()[k]),
        )
        .with_remove(|k, v| {
            removed.borrow_mut().push((*k, *v));
            Ok(())
        });

        assert_eq!(it.next_item().unwrap(), (1, "one"));
        assert!(it.has_next().unwrap());
        it.remove().unwrap();
        assert_eq!(it.next_item().unwrap(), (2, "two"));
        drop(it);
        assert_eq!(*removed.borrow(), vec![(1, "one")]);
    }

    #[test]
    fn test_remove_sequencing() {
        let mut it = CompositeIterator::new(
            vec![1, 2],
            |_: &i32| Ok(true),
            |k: &i32| Ok(k * 10),
        )
        .with_remove(|_: &i32, _: &i32| Ok(()));
        assert!(it.remove().unwrap_err().is_illegal_state());
        assert_eq!(it.next_item().unwrap(), (1, 10));
        it.remove().unwrap();
        assert!(it.remove().unwrap_err().is_illegal_state());
    }

    #[test]
    fn test_remove_unsupported() {
        let mut it = CompositeIterator::new(vec![1], |_: &i32| Ok(true), |k: &i32| Ok(*k));
        assert!(it.remove().unwrap_err().is_unsupported());
        assert_eq!(it.next_item().unwrap(), (1, 1));
        assert!(it.remove().unwrap_err().is_unsupported());
    }

    #[test]
    fn test_failed_lookup_is_retried() {
        let failing = Cell::new(true);
        let mut it = CompositeIterator::new(
            vec![1, 2],
            |_: &i32| Ok(true),
            |k: &i32| {
                if failing.get() {
                    Err(Error::external("lookup", io::Error::other("cache offline")))
                } else {
                    Ok(k * 10)
                }
            },
        );
        let err = it.has_next().unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::External { .. }));
        assert!(it.next_item().is_err());

        failing.set(false);
        assert_eq!(it.next_item().unwrap(), (1, 10));
        assert_eq!(it.next_item().unwrap(), (2, 20));
        assert!(!it.has_next().unwrap());
    }

    #[test]
    fn test_failed_key_test_is_retried() {
        let calls = Cell::new(0);
        let mut it = CompositeIterator::new(
            vec![1, 2],
            |k: &i32| {
                calls.set(calls.get() + 1);
                if calls.get() == 1 {
                    Err(Error::external("lookup", io::Error::other("timeout")))
                } else {
                    Ok(*k == 1)
                }
            },
            |k: &i32| Ok(k * 2),
        );
        assert!(it.has_next().is_err());
        assert_eq!(it.collect::<Result<Vec<_>>>().unwrap(), vec![(1, 2)]);
        assert_eq!(calls.get(), 3);
    }
}
