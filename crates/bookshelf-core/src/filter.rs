//! # Filter/Sort Engine
//!
//! Pure functions mapping (catalog, filter criteria, sort key) to an ordered
//! list of books.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Search Pipeline                                      │
//! │                                                                         │
//! │  ?q=dune&price=10-20&rating=4&sort=price-low                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CatalogQuery (raw strings) ──► criteria() / sort_key()                 │
//! │       │     malformed numbers become "unconstrained", never errors      │
//! │       ▼                                                                 │
//! │  filter(books, &criteria)   ALL predicates must hold (logical AND)      │
//! │       │   • term:     title | author | description, case-insensitive    │
//! │       │   • category: exact primary category                            │
//! │       │   • author:   substring, case-insensitive                       │
//! │       │   • price:    min <= price <= max (inclusive)                   │
//! │       │   • rating:   rating >= min (inclusive)                         │
//! │       ▼                                                                 │
//! │  sort(&mut results, key)    exactly one key, stable on catalog order    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Vec<&Book>  (always a subset of the catalog)                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Text matching is case-insensitive on every path. Lexicographic keys
//! (title, author) also compare case-insensitively.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Book, Rating};

// =============================================================================
// Filter Criteria
// =============================================================================

/// Optional constraints narrowing a catalog query. `None` = unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FilterCriteria {
    /// Free-text term matched against title, author and description.
    pub search: Option<String>,
    /// Exact primary category label.
    pub category: Option<String>,
    /// Substring of the author name.
    pub author: Option<String>,
    /// Inclusive lower price bound.
    pub min_price: Option<Money>,
    /// Inclusive upper price bound.
    pub max_price: Option<Money>,
    /// Inclusive lower rating bound.
    pub min_rating: Option<Rating>,
}

impl FilterCriteria {
    /// Checks if every specified predicate holds for `book`.
    pub fn matches(&self, book: &Book) -> bool {
        if let Some(term) = non_blank(self.search.as_deref()) {
            let term = term.to_lowercase();
            let hit = contains_folded(&book.title, &term)
                || contains_folded(&book.author, &term)
                || contains_folded(&book.description, &term);
            if !hit {
                return false;
            }
        }

        if let Some(category) = non_blank(self.category.as_deref()) {
            if book.category != category {
                return false;
            }
        }

        if let Some(author) = non_blank(self.author.as_deref()) {
            if !contains_folded(&book.author, &author.to_lowercase()) {
                return false;
            }
        }

        if self.min_price.is_some_and(|min| book.price < min) {
            return false;
        }
        if self.max_price.is_some_and(|max| book.price > max) {
            return false;
        }

        !self.min_rating.is_some_and(|min| book.rating < min)
    }

    /// Checks if no predicate is set.
    pub fn is_unconstrained(&self) -> bool {
        non_blank(self.search.as_deref()).is_none()
            && non_blank(self.category.as_deref()).is_none()
            && non_blank(self.author.as_deref()).is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.min_rating.is_none()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// `needle` must already be lowercase.
fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

// =============================================================================
// Sort Key
// =============================================================================

/// The single active ordering of a result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum SortKey {
    /// Catalog order.
    #[default]
    Relevance,
    /// Title, A to Z.
    Title,
    /// Author, A to Z.
    Author,
    /// Price, ascending.
    PriceLow,
    /// Price, descending.
    PriceHigh,
    /// Rating, descending.
    Rating,
    /// Review count, descending.
    Reviews,
    /// Publication year, descending.
    Newest,
    /// Publication year, ascending.
    Oldest,
}

impl SortKey {
    /// Every key, in the order the sort dropdown lists them.
    pub const ALL: [SortKey; 9] = [
        SortKey::Relevance,
        SortKey::Title,
        SortKey::Author,
        SortKey::PriceLow,
        SortKey::PriceHigh,
        SortKey::Rating,
        SortKey::Reviews,
        SortKey::Newest,
        SortKey::Oldest,
    ];

    /// Wire name, as used in `?sort=`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            SortKey::Relevance => "relevance",
            SortKey::Title => "title",
            SortKey::Author => "author",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::Rating => "rating",
            SortKey::Reviews => "reviews",
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
        }
    }

    /// Human-readable label for the sort dropdown.
    pub const fn label(&self) -> &'static str {
        match self {
            SortKey::Relevance => "Relevance",
            SortKey::Title => "Title",
            SortKey::Author => "Author",
            SortKey::PriceLow => "Price: Low to High",
            SortKey::PriceHigh => "Price: High to Low",
            SortKey::Rating => "Highest Rated",
            SortKey::Reviews => "Most Reviewed",
            SortKey::Newest => "Newest First",
            SortKey::Oldest => "Oldest First",
        }
    }

    /// Parses a wire name. Unknown or empty names fall back to relevance.
    pub fn parse_lenient(input: &str) -> SortKey {
        let input = input.trim();
        SortKey::ALL
            .into_iter()
            .find(|k| k.as_str() == input)
            .unwrap_or_default()
    }

    /// Compares two books under this key. `Equal` leaves catalog order.
    pub fn compare(&self, a: &Book, b: &Book) -> Ordering {
        match self {
            SortKey::Relevance => Ordering::Equal,
            SortKey::Title => cmp_folded(&a.title, &b.title),
            SortKey::Author => cmp_folded(&a.author, &b.author),
            SortKey::PriceLow => a.price.cmp(&b.price),
            SortKey::PriceHigh => b.price.cmp(&a.price),
            SortKey::Rating => b.rating.cmp(&a.rating),
            SortKey::Reviews => b.reviews.cmp(&a.reviews),
            SortKey::Newest => b.published_year.cmp(&a.published_year),
            SortKey::Oldest => a.published_year.cmp(&b.published_year),
        }
    }
}

fn cmp_folded(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

// =============================================================================
// Engine
// =============================================================================

/// Books satisfying `criteria`, in catalog order.
pub fn filter<'a>(books: &'a [Book], criteria: &FilterCriteria) -> Vec<&'a Book> {
    books.iter().filter(|b| criteria.matches(b)).collect()
}

/// Sorts in place by one key. Stable: ties keep their current order.
pub fn sort(results: &mut [&Book], key: SortKey) {
    if key == SortKey::Relevance {
        return;
    }
    results.sort_by(|a, b| key.compare(a, b));
}

/// Filter then sort.
///
/// ## Example
/// ```rust
/// use bookshelf_core::{filter, Catalog, FilterCriteria, Money, SortKey};
///
/// let catalog = Catalog::bundled();
/// let criteria = FilterCriteria {
///     max_price: Some(Money::from_cents(1200)),
///     ..FilterCriteria::default()
/// };
///
/// let cheapest_first = filter::search(catalog.books(), &criteria, SortKey::PriceLow);
/// assert_eq!(cheapest_first[0].title, "Charlotte's Web");
/// ```
pub fn search<'a>(books: &'a [Book], criteria: &FilterCriteria, key: SortKey) -> Vec<&'a Book> {
    let mut results = filter(books, criteria);
    sort(&mut results, key);
    results
}

// =============================================================================
// Raw Query Parameters
// =============================================================================

/// Price ranges offered by the search page, as (`price` value, label).
pub const PRICE_RANGES: &[(&str, &str)] = &[
    ("", "Any Price"),
    ("0-10", "Under $10"),
    ("10-20", "$10 - $20"),
    ("20-30", "$20 - $30"),
    ("30-", "Over $30"),
];

/// Rating thresholds offered by the search page, as (`rating` value, label).
pub const RATING_OPTIONS: &[(&str, &str)] = &[
    ("", "Any Rating"),
    ("4", "4+ Stars"),
    ("3", "3+ Stars"),
    ("2", "2+ Stars"),
];

/// Catalog query exactly as it arrives from a URL or form: every value is a
/// raw, possibly malformed string.
///
/// ## Parameters
/// - `q`, `category`, `author`: text
/// - `minPrice`, `maxPrice`: decimal amounts
/// - `price`: a range like `"10-20"` or `"30-"`; explicit `minPrice` /
///   `maxPrice` take precedence over the matching end of the range
/// - `rating`: minimum stars
/// - `sort`: a [`SortKey`] wire name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CatalogQuery {
    pub q: Option<String>,
    pub category: Option<String>,
    pub author: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub price: Option<String>,
    pub rating: Option<String>,
    pub sort: Option<String>,
}

impl CatalogQuery {
    /// Converts the raw parameters into criteria. Never fails: anything that
    /// does not parse is left unconstrained.
    pub fn criteria(&self) -> FilterCriteria {
        let (range_min, range_max) = self
            .price
            .as_deref()
            .map(parse_price_range)
            .unwrap_or((None, None));

        FilterCriteria {
            search: owned_non_blank(self.q.as_deref()),
            category: owned_non_blank(self.category.as_deref()),
            author: owned_non_blank(self.author.as_deref()),
            min_price: self.min_price.as_deref().and_then(Money::parse).or(range_min),
            max_price: self.max_price.as_deref().and_then(Money::parse).or(range_max),
            min_rating: self.rating.as_deref().and_then(Rating::parse),
        }
    }

    /// The requested sort key, relevance when absent or unknown.
    pub fn sort_key(&self) -> SortKey {
        self.sort
            .as_deref()
            .map(SortKey::parse_lenient)
            .unwrap_or_default()
    }
}

fn owned_non_blank(value: Option<&str>) -> Option<String> {
    non_blank(value).map(str::to_string)
}

/// Parses `"min-max"` or `"min-"`. Either end may be missing or malformed.
fn parse_price_range(range: &str) -> (Option<Money>, Option<Money>) {
    match range.split_once('-') {
        Some((min, max)) => (Money::parse(min), Money::parse(max)),
        None => (Money::parse(range), None),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
