//! Search-and-filter views for Stockroom.
//!
//! A [`QueryView`] owns a snapshot of a source collection together with the
//! user's search term and filter map, and keeps a derived filtered view that is
//! always exactly what its predicate computes from those three inputs.
//!
//! # Overview
//!
//! - [`QueryView`] - Owns the inputs and the derived view; every mutator
//!   recomputes synchronously before returning.
//! - [`QueryPredicate`] - The injected derivation function. Any closure
//!   `Fn(&[T], &str, &Filters) -> Vec<T>` qualifies.
//! - [`FieldPredicate`] - Stock predicate for [`Searchable`] records:
//!   case-insensitive substring search, exact-match filters.
//! - [`table`] - Column descriptors and plain-text rendering of a view.
//!
//! # Example
//!
//! ```
//! use std::borrow::Cow;
//! use stockroom_query::{FieldPredicate, QueryView, Searchable};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Item {
//!     name: &'static str,
//!     category: &'static str,
//! }
//!
//! impl Searchable for Item {
//!     fn search_text(&self) -> Cow<'_, str> {
//!         Cow::Borrowed(self.name)
//!     }
//!
//!     fn field(&self, key: &str) -> Option<Cow<'_, str>> {
//!         match key {
//!             "category" => Some(Cow::Borrowed(self.category)),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let items = vec![
//!     Item { name: "Gauze", category: "C1" },
//!     Item { name: "Saline", category: "C2" },
//! ];
//!
//! let mut view = QueryView::new(items, FieldPredicate::new());
//! view.set_filter("category", "C2");
//! assert_eq!(view.filtered()[0].name, "Saline");
//! ```

mod filters;
pub mod predicate;
pub mod table;
mod view;

pub use filters::Filters;
pub use predicate::{BoxedPredicate, FieldPredicate, QueryPredicate, Searchable};
pub use view::QueryView;
