//! Predicates deriving a filtered view from a source collection.
//!
//! A [`QueryView`](crate::QueryView) never looks inside its records. Matching is
//! entirely delegated to the predicate it was created with, following the same
//! erasure pattern everywhere:
//!
//! - [`QueryPredicate<T>`] - Object-safe trait, implemented by any closure
//!   `Fn(&[T], &str, &Filters) -> Vec<T>`
//! - [`BoxedPredicate<T>`] - Boxed form stored inside a view
//! - [`FieldPredicate<T>`] - Ready-made predicate for [`Searchable`] records
//!
//! Search and filters deliberately use different semantics: the search term is
//! a case-insensitive substring match against [`Searchable::search_text`],
//! while each filter requires the named field to equal its value exactly.

use crate::filters::Filters;
use core::fmt;
use core::marker::PhantomData;
use std::borrow::Cow;

/// Derives the filtered view from the three inputs of a [`QueryView`](crate::QueryView).
///
/// Implementations must be pure: identical inputs give identical outputs, and
/// the output keeps the relative order of `items`.
pub trait QueryPredicate<T>: Send + Sync {
    /// Computes the filtered subsequence of `items`.
    fn apply(&self, items: &[T], term: &str, filters: &Filters) -> Vec<T>;
}

impl<T, F> QueryPredicate<T> for F
where
    F: Fn(&[T], &str, &Filters) -> Vec<T> + Send + Sync,
{
    fn apply(&self, items: &[T], term: &str, filters: &Filters) -> Vec<T> {
        self(items, term, filters)
    }
}

/// Type alias for predicates stored in a view.
pub type BoxedPredicate<T> = Box<dyn QueryPredicate<T>>;

/// Capability for records that can be searched and filtered by field.
pub trait Searchable {
    /// Text the search term is matched against.
    fn search_text(&self) -> Cow<'_, str>;

    /// Value of the named field, or `None` if the record has no such field.
    fn field(&self, key: &str) -> Option<Cow<'_, str>>;
}

/// Stock predicate for [`Searchable`] records.
///
/// A record is kept when its search text contains the term (ignoring case)
/// and every non-empty filter value equals the corresponding field. An empty
/// term matches everything. A filter naming a field the record lacks rejects
/// the record.
pub struct FieldPredicate<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> FieldPredicate<T> {
    /// Creates the predicate.
    #[must_use]
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for FieldPredicate<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for FieldPredicate<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for FieldPredicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldPredicate")
            .field("item_type", &core::any::type_name::<T>())
            .finish()
    }
}

impl<T> QueryPredicate<T> for FieldPredicate<T>
where
    T: Searchable + Clone,
{
    fn apply(&self, items: &[T], term: &str, filters: &Filters) -> Vec<T> {
        let needle = term.to_lowercase();
        items
            .iter()
            .filter(|item| matches_term(*item, &needle) && matches_filters(*item, filters))
            .cloned()
            .collect()
    }
}

/// Returns `true` if the item's search text contains `needle`.
///
/// `needle` must already be lowercased.
pub fn matches_term<T: Searchable + ?Sized>(item: &T, needle: &str) -> bool {
    needle.is_empty() || item.search_text().to_lowercase().contains(needle)
}

/// Returns `true` if every active filter equals the item's field exactly.
pub fn matches_filters<T: Searchable + ?Sized>(item: &T, filters: &Filters) -> bool {
    filters
        .active()
        .all(|(key, value)| item.field(key).is_some_and(|field| field == value))
}
