use std::{cell::RefCell, collections::BTreeMap};

use commons::{
    Result,
    collections::MapBuilder,
    iterators::{CompositeIterator, LazyLoadingIterator, LazyLoadingProvider},
};

/// Serves pages of a shared vector, so that deletions shift later pages.
struct VecProvider<'a> {
    data: &'a RefCell<Vec<i32>>,
    page_size: usize,
}

impl LazyLoadingProvider for VecProvider<'_> {
    type Item = i32;

    fn count_items(&self) -> Result<usize> {
        Ok(self.data.borrow().len())
    }

    fn load_items(&self, page: usize) -> Result<Vec<i32>> {
        Ok(self
            .data
            .borrow()
            .iter()
            .skip(page * self.page_size)
            .take(self.page_size)
            .copied()
            .collect())
    }
}

fn six_items() -> RefCell<Vec<i32>> {
    RefCell::new((0..6).collect())
}

#[test]
fn test_lazy_iteration_in_order() {
    let data = six_items();
    let provider = VecProvider {
        data: &data,
        page_size: 2,
    };
    let mut it = LazyLoadingIterator::new(2, provider).unwrap();
    let mut seen = Vec::new();
    while it.has_next().unwrap() {
        seen.push(it.next_item().unwrap());
    }
    assert_eq!(seen, vec![0, 1, 2, 3, 4, 5]);
    assert!(it.next_item().unwrap_err().is_no_such_element());
}

#[test]
fn test_lazy_drain_with_remove() {
    let data = six_items();
    let provider = VecProvider {
        data: &data,
        page_size: 2,
    };
    let mut it = LazyLoadingIterator::new(2, provider)
        .unwrap()
        .with_delete(|item: &i32| {
            data.borrow_mut().retain(|x| x != item);
            Ok(())
        });

    let mut seen = Vec::new();
    while it.has_next().unwrap() {
        seen.push(it.next_item().unwrap());
        it.remove().unwrap();
    }
    assert_eq!(seen, vec![0, 1, 2, 3, 4, 5]);
    assert!(!it.has_next().unwrap());
    assert!(it.is_exhausted());
    drop(it);
    assert!(data.borrow().is_empty());
}

#[test]
fn test_lazy_remove_does_not_skip_next_item() {
    let data = six_items();
    let provider = VecProvider {
        data: &data,
        page_size: 2,
    };
    let mut it = LazyLoadingIterator::new(2, provider)
        .unwrap()
        .with_delete(|item: &i32| {
            data.borrow_mut().retain(|x| x != item);
            Ok(())
        });
    assert_eq!(it.next_item().unwrap(), 0);
    assert_eq!(it.next_item().unwrap(), 1);
    assert_eq!(it.next_item().unwrap(), 2);
    it.remove().unwrap();
    assert_eq!(it.next_item().unwrap(), 3);
    drop(it);
    assert_eq!(*data.borrow(), vec![0, 1, 3, 4, 5]);
}

#[test]
fn test_lazy_remove_errors() {
    let data = six_items();
    let provider = VecProvider {
        data: &data,
        page_size: 2,
    };
    let mut it = LazyLoadingIterator::new(2, &provider)
        .unwrap()
        .with_delete(|_: &i32| Ok(()));
    assert!(it.remove().unwrap_err().is_illegal_state());

    let mut plain = LazyLoadingIterator::new(2, &provider).unwrap();
    assert_eq!(plain.next_item().unwrap(), 0);
    assert!(plain.remove().unwrap_err().is_unsupported());
}

fn numbers() -> RefCell<BTreeMap<i32, &'static str>> {
    RefCell::new(
        MapBuilder::tree_map(1, "one")
            .put(2, "two")
            .put(3, "three")
            .build(),
    )
}

#[test]
fn test_composite_pairs_in_key_order() {
    let map = numbers();
    let it = CompositeIterator::new(
        vec![1, 2, 3],
        |k: &i32| Ok(map.borrow().contains_key(k)),
        |k: &i32| Ok(map.borrow()[k]),
    );
    let pairs = it.collect::<Result<Vec<_>>>().unwrap();
    assert_eq!(pairs, vec![(1, "one"), (2, "two"), (3, "three")]);
}

#[test]
fn test_composite_remove_updates_backing_map() {
    let map = numbers();
    let mut it = CompositeIterator::new(
        vec![1, 2, 3],
        |k: &i32| Ok(map.borrow().contains_key(k)),
        |k: &i32| Ok(map.borrow()[k]),
    )
    .with_remove(|k, _| {
        map.borrow_mut().remove(k);
        Ok(())
    });

    assert!(it.remove().unwrap_err().is_illegal_state());
    assert_eq!(it.next_item().unwrap(), (1, "one"));
    assert_eq!(it.next_item().unwrap(), (2, "two"));
    it.remove().unwrap();
    assert!(!map.borrow().contains_key(&2));
    assert_eq!(it.next_item().unwrap(), (3, "three"));
    drop(it);
    assert_eq!(map.borrow().len(), 2);
}
