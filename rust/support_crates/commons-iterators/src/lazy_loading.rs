//! Page-by-page iteration over a provider with deletion of the last returned element.

use commons_core::{Error, Result, try_or_ret_some_err, verify_arg};

/// Page size used by [`LazyLoadingOptions::default`].
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// A source of paginated elements.
///
/// Pages are indexed from zero. The iterator assumes every page holds exactly
/// the configured page size of elements, except possibly the last one. The
/// element count may change between calls, e.g. after a deletion.
pub trait LazyLoadingProvider {
    type Item;

    /// The current total number of elements.
    fn count_items(&self) -> Result<usize>;

    /// The elements of the zero-based `page`.
    fn load_items(&self, page: usize) -> Result<Vec<Self::Item>>;
}

impl<P: LazyLoadingProvider + ?Sized> LazyLoadingProvider for &P {
    type Item = P::Item;

    fn count_items(&self) -> Result<usize> {
        (**self).count_items()
    }

    fn load_items(&self, page: usize) -> Result<Vec<Self::Item>> {
        (**self).load_items(page)
    }
}

/// A [`LazyLoadingProvider`] built from a counting and a loading closure.
#[derive(Clone)]
pub struct FnProvider<C, L> {
    count: C,
    load: L,
}

impl<C, L> FnProvider<C, L> {
    pub fn new(count: C, load: L) -> FnProvider<C, L> {
        FnProvider { count, load }
    }
}

impl<E, C, L> LazyLoadingProvider for FnProvider<C, L>
where
    C: Fn() -> Result<usize>,
    L: Fn(usize) -> Result<Vec<E>>,
{
    type Item = E;

    fn count_items(&self) -> Result<usize> {
        (self.count)()
    }

    fn load_items(&self, page: usize) -> Result<Vec<E>> {
        (self.load)(page)
    }
}

/// Configuration for [`LazyLoadingIterator::with_options`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LazyLoadingOptions {
    /// Number of elements the provider returns per page. Must be positive.
    pub page_size: usize,
}

impl Default for LazyLoadingOptions {
    fn default() -> Self {
        LazyLoadingOptions {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl LazyLoadingOptions {
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }
}

type DeleteFn<'a, E> = Box<dyn FnMut(&E) -> Result<()> + 'a>;

enum PageState<E> {
    /// No page in memory; the next `has_next` fetches `next_page`.
    Unloaded,
    /// The current page; `cursor` is the index of the next element to return.
    Buffered { items: Vec<E>, cursor: usize },
    /// Terminal. The provider is never queried again.
    Exhausted,
}

/// An iterator that fetches its elements from a [`LazyLoadingProvider`] one
/// page at a time, on demand.
///
/// Only the current page is held in memory and every page is fetched at most
/// once, in forward order. Once the provider reports no further elements, the
/// iterator is exhausted for good.
///
/// [`remove`](Self::remove) deletes the element most recently returned by
/// [`next_item`](Self::next_item) through the delete callback and drops it from
/// the current page. When that empties the page, the page counter steps back
/// by one: the provider's pages have shifted left by the deleted elements, so
/// the next fetch asks for the same page number again.
///
/// ```
/// use commons_core::Result;
/// use commons_iterators::{FnProvider, LazyLoadingIterator};
///
/// let data: Vec<u32> = (0..5).collect();
/// let provider = FnProvider::new(
///     || -> Result<usize> { Ok(data.len()) },
///     |page: usize| -> Result<Vec<u32>> { Ok(data.iter().copied().skip(page * 2).take(2).collect()) },
/// );
/// let items = LazyLoadingIterator::new(2, provider)?.collect::<Result<Vec<_>>>()?;
/// assert_eq!(items, data);
/// # Ok::<(), commons_core::Error>(())
/// ```
pub struct LazyLoadingIterator<'a, P: LazyLoadingProvider> {
    provider: P,
    page_size: usize,
    next_page: usize,
    state: PageState<P::Item>,
    can_remove: bool,
    delete: Option<DeleteFn<'a, P::Item>>,
}

impl<'a, P> LazyLoadingIterator<'a, P>
where
    P: LazyLoadingProvider,
    P::Item: Clone,
{
    /// Creates an iterator without deletion support.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `page_size` is zero.
    pub fn new(page_size: usize, provider: P) -> Result<Self> {
        verify_arg!(page_size, page_size > 0);
        Ok(LazyLoadingIterator {
            provider,
            page_size,
            next_page: 0,
            state: PageState::Unloaded,
            can_remove: false,
            delete: None,
        })
    }

    pub fn with_options(options: LazyLoadingOptions, provider: P) -> Result<Self> {
        Self::new(options.page_size, provider)
    }

    /// Enables [`remove`](Self::remove) with the given delete callback.
    pub fn with_delete<F>(mut self, delete: F) -> Self
    where
        F: FnMut(&P::Item) -> Result<()> + 'a,
    {
        self.delete = Some(Box::new(delete));
        self
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Index of the first element of `page` within the whole sequence.
    pub fn first_item_index(&self, page: usize) -> usize {
        page.saturating_mul(self.page_size)
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self.state, PageState::Exhausted)
    }

    /// Returns `true` if another element is available, fetching the next page
    /// when the current one has been consumed.
    ///
    /// Errors from the provider are returned unchanged and leave the iterator
    /// as it was.
    pub fn has_next(&mut self) -> Result<bool> {
        match &self.state {
            PageState::Exhausted => return Ok(false),
            PageState::Buffered { items, cursor } if *cursor < items.len() => return Ok(true),
            _ => {}
        }

        let count = self.provider.count_items()?;
        let first = self.first_item_index(self.next_page);
        if first >= count {
            log::debug!(
                "lazy loading exhausted: page {} starts at {first}, provider holds {count} items",
                self.next_page
            );
            self.exhaust();
            return Ok(false);
        }

        let items = self.provider.load_items(self.next_page)?;
        log::debug!(
            "lazy loading fetched page {}: {} items, provider holds {count} items",
            self.next_page,
            items.len()
        );
        self.next_page += 1;
        self.can_remove = false;
        if items.is_empty() {
            log::debug!("lazy loading exhausted: provider returned an empty page");
            self.exhaust();
            return Ok(false);
        }
        self.state = PageState::Buffered { items, cursor: 0 };
        Ok(true)
    }

    /// Returns the next element.
    ///
    /// # Errors
    ///
    /// Returns `NoSuchElement` once the iterator is exhausted, or the provider's
    /// error if a page fetch fails.
    pub fn next_item(&mut self) -> Result<P::Item> {
        if !self.has_next()? {
            return Err(Error::no_such_element());
        }
        let PageState::Buffered { items, cursor } = &mut self.state else {
            return Err(Error::no_such_element());
        };
        let item = items.get(*cursor).cloned().ok_or_else(Error::no_such_element)?;
        *cursor += 1;
        self.can_remove = true;
        Ok(item)
    }

    /// Deletes the element last returned by [`next_item`](Self::next_item).
    ///
    /// # Errors
    ///
    /// - `IllegalState` if no element has been returned since the last page
    ///   fetch or the last `remove`.
    /// - `Unsupported` if no delete callback was configured.
    /// - Any error of the delete callback, in which case nothing is removed.
    pub fn remove(&mut self) -> Result<()> {
        let PageState::Buffered { items, cursor } = &mut self.state else {
            return Err(Error::illegal_state("remove", "next has not been called"));
        };
        if !self.can_remove || *cursor == 0 {
            return Err(Error::illegal_state(
                "remove",
                "next has not been called since the last remove",
            ));
        }
        let Some(delete) = self.delete.as_mut() else {
            return Err(Error::unsupported("remove"));
        };

        let index = *cursor - 1;
        delete(&items[index])?;
        items.remove(index);
        *cursor = index;
        self.can_remove = false;
        log::trace!("lazy loading removed item {index} of page {}", self.next_page);

        if items.is_empty() {
            self.state = PageState::Unloaded;
            self.next_page = self.next_page.saturating_sub(1);
            log::trace!(
                "lazy loading page emptied, next fetch re-reads page {}",
                self.next_page
            );
        }
        Ok(())
    }

    fn exhaust(&mut self) {
        self.state = PageState::Exhausted;
        self.can_remove = false;
    }
}

impl<P> Iterator for LazyLoadingIterator<'_, P>
where
    P: LazyLoadingProvider,
    P::Item: Clone,
{
    type Item = Result<P::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if !try_or_ret_some_err!(self.has_next()) {
            return None;
        }
        Some(self.next_item())
    }
}
