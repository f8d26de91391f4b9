//! The [`QueryView`] search-and-filter engine.

use crate::filters::Filters;
use crate::predicate::{BoxedPredicate, QueryPredicate};
use core::fmt;

/// A filtered view over a source collection.
///
/// The view owns three inputs (the source items, a search term and a filter
/// map) and one derived output, the filtered items. Every mutator recomputes
/// the output before returning, so [`filtered()`](Self::filtered) always equals
/// the predicate applied to the current inputs.
///
/// The one exception to blindly recomputing is [`replace_source`](Self::replace_source)
/// with no active search state, where the new items are taken as-is.
///
/// # Example
///
/// ```
/// use stockroom_query::{Filters, QueryView};
///
/// let mut view = QueryView::from_fn(vec![1, 2, 3, 4], |items: &[i32], term: &str, _: &Filters| {
///     match term.parse::<i32>() {
///         Ok(min) => items.iter().copied().filter(|n| *n >= min).collect(),
///         Err(_) => items.to_vec(),
///     }
/// });
///
/// view.set_search_term("3");
/// assert_eq!(view.filtered(), &[3, 4]);
///
/// // Refreshed data keeps the active search.
/// view.replace_source(vec![5, 1]);
/// assert_eq!(view.filtered(), &[5]);
/// ```
pub struct QueryView<T> {
    source: Vec<T>,
    search_term: String,
    filters: Filters,
    filtered: Vec<T>,
    predicate: BoxedPredicate<T>,
}

impl<T: Clone> QueryView<T> {
    /// Creates a view over `items` using `predicate`.
    ///
    /// The filtered view starts out identical to `items`, since no search term
    /// or filter is active yet.
    pub fn new<P>(items: Vec<T>, predicate: P) -> Self
    where
        P: QueryPredicate<T> + 'static,
    {
        Self {
            filtered: items.clone(),
            source: items,
            search_term: String::new(),
            filters: Filters::new(),
            predicate: Box::new(predicate),
        }
    }

    /// Creates a view from a predicate closure.
    ///
    /// Equivalent to [`new`](Self::new), but lets the compiler infer the
    /// closure's argument types.
    pub fn from_fn<F>(items: Vec<T>, predicate: F) -> Self
    where
        F: Fn(&[T], &str, &Filters) -> Vec<T> + Send + Sync + 'static,
    {
        Self::new(items, predicate)
    }

    /// Replaces the search term and recomputes the view.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.recompute();
    }

    /// Sets one filter key, leaving the others as they are, and recomputes.
    pub fn set_filter(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.filters.set(key, value);
        self.recompute();
    }

    /// Resets the search term and all filters, then recomputes against the
    /// unfiltered source.
    pub fn clear_filters(&mut self) {
        self.search_term.clear();
        self.filters.clear();
        self.recompute();
    }

    /// Replaces the source collection wholesale.
    ///
    /// The current search term and filters are re-applied to the new items.
    /// When neither is set, the filtered view becomes `items` unchanged.
    pub fn replace_source(&mut self, items: Vec<T>) {
        self.source = items;
        if self.has_constraints() {
            self.recompute();
        } else {
            self.filtered = self.source.clone();
        }
    }

    /// Recomputes the view from the current inputs.
    ///
    /// Idempotent. Useful for hosts that apply the search on an explicit
    /// submit rather than on every keystroke.
    pub fn execute_search(&mut self) {
        self.recompute();
    }

    fn recompute(&mut self) {
        self.filtered = self
            .predicate
            .apply(&self.source, &self.search_term, &self.filters);
        tracing::trace!(
            source = self.source.len(),
            filtered = self.filtered.len(),
            term = %self.search_term,
            filters = self.filters.len(),
            "query view recomputed"
        );
    }
}

impl<T> QueryView<T> {
    /// The derived, filtered items.
    #[must_use]
    pub fn filtered(&self) -> &[T] {
        &self.filtered
    }

    /// The current source items.
    #[must_use]
    pub fn source(&self) -> &[T] {
        &self.source
    }

    /// The current search term.
    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// The current filter map.
    #[must_use]
    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    /// Returns `true` if a search term or any filter key is set.
    #[must_use]
    pub fn has_constraints(&self) -> bool {
        !self.search_term.is_empty() || !self.filters.is_empty()
    }
}

impl<T> fmt::Debug for QueryView<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryView")
            .field("source_len", &self.source.len())
            .field("filtered_len", &self.filtered.len())
            .field("search_term", &self.search_term)
            .field("filters", &self.filters)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn contains_term(items: &[String], term: &str, _filters: &Filters) -> Vec<String> {
        items
            .iter()
            .filter(|item| item.contains(term))
            .cloned()
            .collect()
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn starts_unfiltered() {
        let view = QueryView::new(strings(&["a", "b"]), contains_term);
        assert_eq!(view.filtered(), view.source());
        assert!(!view.has_constraints());
    }

    #[test]
    fn replace_source_without_constraints_skips_predicate() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let mut view = QueryView::from_fn(strings(&["a"]), move |items, _, _| {
            counter.fetch_add(1, Ordering::SeqCst);
            items.to_vec()
        });

        view.replace_source(strings(&["x", "y"]));

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(view.filtered(), strings(&["x", "y"]).as_slice());
    }

    #[test]
    fn replace_source_reapplies_active_term() {
        let mut view = QueryView::new(strings(&["apple", "pear"]), contains_term);
        view.set_search_term("ap");
        assert_eq!(view.filtered(), strings(&["apple"]).as_slice());

        view.replace_source(strings(&["grape", "plum", "papaya"]));

        assert_eq!(view.search_term(), "ap");
        assert_eq!(view.filtered(), strings(&["grape", "papaya"]).as_slice());
    }

    #[test]
    fn replace_source_reapplies_when_only_filters_set() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let mut view = QueryView::from_fn(strings(&["a"]), move |items, _, _| {
            counter.fetch_add(1, Ordering::SeqCst);
            items.to_vec()
        });

        view.set_filter("kind", "");
        let after_set = calls.load(Ordering::SeqCst);
        view.replace_source(strings(&["b"]));

        assert_eq!(calls.load(Ordering::SeqCst), after_set + 1);
    }

    #[test]
    fn clear_filters_resets_term_and_filters() {
        let mut view = QueryView::new(strings(&["apple", "pear"]), contains_term);
        view.set_search_term("pe");
        view.set_filter("kind", "fruit");

        view.clear_filters();

        assert_eq!(view.search_term(), "");
        assert!(view.filters().is_empty());
        assert_eq!(view.filtered(), view.source());
    }

    #[test]
    fn execute_search_is_idempotent() {
        let mut view = QueryView::new(strings(&["apple", "pear"]), contains_term);
        view.set_search_term("pe");
        let before = view.filtered().to_vec();

        view.execute_search();
        view.execute_search();

        assert_eq!(view.filtered(), before.as_slice());
    }

    #[test]
    fn debug_omits_predicate() {
        let view = QueryView::new(strings(&["a"]), contains_term);
        let debug = format!("{view:?}");
        assert!(debug.contains("source_len: 1"));
        assert!(!debug.contains("predicate"));
    }
}
