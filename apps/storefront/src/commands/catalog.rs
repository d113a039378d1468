//! # Catalog Commands
//!
//! Read-only browsing: listing, searching, detail and related books.
//!
//! ## Page Mapping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Home ─────────────► featured_books()  +  list_categories()            │
//! │  Books / Search ───► search_books(query)                               │
//! │  Search filters ───► search_options()                                  │
//! │  Category page ────► get_category(name)                                │
//! │  Book detail ──────► get_book(id)  +  related_books(id)                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use bookshelf_core::filter::{PRICE_RANGES, RATING_OPTIONS};
use bookshelf_core::{
    filter, Book, Catalog, CatalogQuery, Category, FilterCriteria, SortKey, FEATURED_BOOK_COUNT,
    RELATED_BOOK_LIMIT,
};

use crate::error::ApiError;

/// Search results plus the interpretation of the query that produced them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub books: Vec<Book>,
    pub total: usize,
    /// Criteria after lenient parsing; malformed values are absent here.
    pub criteria: FilterCriteria,
    pub sort: SortKey,
}

/// A category together with how many books are filed under it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    #[serde(flatten)]
    pub category: Category,
    pub book_count: usize,
}

/// A category and the books filed under it as their primary category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPage {
    pub category: Category,
    pub books: Vec<Book>,
}

/// One choice in a search page dropdown. `value` goes back verbatim as the
/// matching query parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOption {
    pub value: String,
    pub label: String,
}

impl SearchOption {
    fn new(value: &str, label: &str) -> Self {
        SearchOption {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

/// Dropdown contents of the search page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOptions {
    /// Values for `?price=`
    pub price_ranges: Vec<SearchOption>,
    /// Values for `?rating=`
    pub ratings: Vec<SearchOption>,
    /// Values for `?sort=`
    pub sorts: Vec<SearchOption>,
}

fn options_from(pairs: &[(&str, &str)]) -> Vec<SearchOption> {
    pairs
        .iter()
        .map(|(value, label)| SearchOption::new(value, label))
        .collect()
}

fn owned(books: Vec<&Book>) -> Vec<Book> {
    books.into_iter().cloned().collect()
}

/// Gets every book in catalog order.
pub fn list_books(catalog: &Catalog) -> Vec<Book> {
    debug!("list_books command");
    catalog.books().to_vec()
}

/// Searches the catalog with raw query parameters.
///
/// ## Behavior
/// - Every parameter is optional; none set returns the whole catalog
/// - Malformed numbers (`minPrice=abc`) are ignored, never an error
/// - Unknown sort names fall back to relevance (catalog order)
pub fn search_books(catalog: &Catalog, query: CatalogQuery) -> SearchResponse {
    let criteria = query.criteria();
    let sort = query.sort_key();
    debug!(?criteria, sort = sort.as_str(), "search_books command");

    let books = owned(filter::search(catalog.books(), &criteria, sort));
    SearchResponse {
        total: books.len(),
        books,
        criteria,
        sort,
    }
}

/// Gets a single book.
///
/// ## Errors
/// `NOT_FOUND` for an unknown id.
pub fn get_book(catalog: &Catalog, book_id: u32) -> Result<Book, ApiError> {
    debug!(book_id, "get_book command");
    Ok(catalog.book(book_id)?.clone())
}

/// Gets up to four other books from the same primary category.
pub fn related_books(catalog: &Catalog, book_id: u32) -> Result<Vec<Book>, ApiError> {
    debug!(book_id, "related_books command");
    let book = catalog.book(book_id)?;
    Ok(owned(catalog.related(book, RELATED_BOOK_LIMIT)))
}

/// Gets the books shown on the home page.
pub fn featured_books(catalog: &Catalog) -> Vec<Book> {
    debug!("featured_books command");
    catalog.featured(FEATURED_BOOK_COUNT).to_vec()
}

/// Gets all categories with their book counts.
pub fn list_categories(catalog: &Catalog) -> Vec<CategorySummary> {
    debug!("list_categories command");
    catalog
        .category_counts()
        .into_iter()
        .map(|(category, book_count)| CategorySummary {
            category: category.clone(),
            book_count,
        })
        .collect()
}

/// Gets one category with its books, in catalog order.
///
/// ## Errors
/// `NOT_FOUND` if no category has this exact name.
pub fn get_category(catalog: &Catalog, name: &str) -> Result<CategoryPage, ApiError> {
    debug!(name, "get_category command");
    let category = catalog.category(name)?.clone();
    let books = owned(catalog.books_in_category(&category.name));
    Ok(CategoryPage { category, books })
}

/// Gets the price ranges, rating thresholds and sort orders the search page
/// offers.
pub fn search_options() -> SearchOptions {
    debug!("search_options command");
    SearchOptions {
        price_ranges: options_from(PRICE_RANGES),
        ratings: options_from(RATING_OPTIONS),
        sorts: SortKey::ALL
            .iter()
            .map(|key| SearchOption::new(key.as_str(), key.label()))
            .collect(),
    }
}
