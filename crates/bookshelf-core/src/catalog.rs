//! # Catalog Store
//!
//! The static, ordered collection of books and categories the storefront
//! browses. Read-only at runtime.
//!
//! ## Lookups
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Catalog Lookups                                      │
//! │                                                                         │
//! │  Home Page ─────────► featured(3) ───────────► first N books           │
//! │                     ► category_counts() ─────► "Fantasy (1 books)"     │
//! │                                                                         │
//! │  Categories Page ───► books_in_category(name) ► primary-category match │
//! │                                                                         │
//! │  Book Detail ───────► book(id) ──────────────► Ok(&Book)               │
//! │                          │                                              │
//! │                          └── absent ─────────► CoreError::BookNotFound │
//! │                     ► related(book, 4) ──────► same category, other id │
//! │                                                                         │
//! │  Books / Search ────► books() ───────────────► filter::search(...)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Book, Category, Rating};

/// Read-only catalog of books and categories.
///
/// Order matters: it is the "relevance" order of the search pipeline and
/// the tie-break order of every sort key.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    books: Vec<Book>,
    categories: Vec<Category>,
}

impl Catalog {
    /// Creates a catalog from explicit records.
    pub fn new(books: Vec<Book>, categories: Vec<Category>) -> Self {
        Catalog { books, categories }
    }

    /// The catalog bundled with the storefront: twelve books, nine categories.
    pub fn bundled() -> Self {
        Catalog {
            books: BOOK_SEEDS.iter().map(BookSeed::to_book).collect(),
            categories: CATEGORY_SEEDS
                .iter()
                .enumerate()
                .map(|(i, (name, description, icon))| Category {
                    id: i as u32 + 1,
                    name: (*name).to_string(),
                    description: (*description).to_string(),
                    icon: (*icon).to_string(),
                })
                .collect(),
        }
    }

    /// All books in catalog order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// All categories in catalog order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Looks up a book by id.
    ///
    /// ## Errors
    /// `CoreError::BookNotFound` if no book has this id.
    pub fn book(&self, id: u32) -> CoreResult<&Book> {
        self.books
            .iter()
            .find(|b| b.id == id)
            .ok_or(CoreError::BookNotFound(id))
    }

    /// Looks up a category by its unique name.
    pub fn category(&self, name: &str) -> CoreResult<&Category> {
        self.categories
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| CoreError::CategoryNotFound(name.to_string()))
    }

    /// Books whose primary category is exactly `name`, in catalog order.
    pub fn books_in_category(&self, name: &str) -> Vec<&Book> {
        self.books.iter().filter(|b| b.category == name).collect()
    }

    /// Every category with the number of books filed under it as primary.
    pub fn category_counts(&self) -> Vec<(&Category, usize)> {
        self.categories
            .iter()
            .map(|c| (c, self.books.iter().filter(|b| b.category == c.name).count()))
            .collect()
    }

    /// The first `count` books, for the home page.
    pub fn featured(&self, count: usize) -> &[Book] {
        &self.books[..count.min(self.books.len())]
    }

    /// Other books sharing `book`'s primary category, at most `limit`.
    pub fn related(&self, book: &Book, limit: usize) -> Vec<&Book> {
        self.books
            .iter()
            .filter(|b| b.category == book.category && b.id != book.id)
            .take(limit)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

// =============================================================================
// Bundled Data
// =============================================================================

const CATEGORY_SEEDS: &[(&str, &str, &str)] = &[
    ("Classic Literature", "Timeless masterpieces that have shaped literature", "📚"),
    ("Science Fiction", "Imaginative stories exploring futuristic concepts", "🚀"),
    ("Fantasy", "Magical worlds and epic adventures", "🐉"),
    ("Romance", "Love stories that touch the heart", "💕"),
    ("Coming of Age", "Stories about growing up and self-discovery", "🌱"),
    ("Philosophy", "Deep thoughts and intellectual exploration", "🤔"),
    ("Children's Literature", "Books for young readers and families", "👶"),
    ("Contemporary Fiction", "Modern stories reflecting today's world", "🌍"),
    ("Historical Fiction", "Stories set in the past with rich details", "⏰"),
];

const IMG_GATSBY: &str = "https://images.unsplash.com/photo-1543002588-bfa74002ed7e?w=400&h=500&fit=crop&crop=center&q=80";
const IMG_DUNE: &str = "https://images.unsplash.com/photo-1481627834876-b7833e8f5570?w=400&h=500&fit=crop&crop=center&q=80";
const IMG_HOBBIT: &str = "https://images.unsplash.com/photo-1512820790803-83ca734da794?w=400&h=500&fit=crop&crop=center&q=80";
const IMG_PRIDE: &str = "https://images.unsplash.com/photo-1516979187457-637abb4f9353?w=400&h=500&fit=crop&crop=center&q=80";
const IMG_CATCHER: &str = "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&h=500&fit=crop&crop=center&q=80";
const IMG_REPUBLIC: &str = "https://images.unsplash.com/photo-1456513080510-7bf3a84b82f8?w=400&h=500&fit=crop&crop=center&q=80";

struct BookSeed {
    id: u32,
    title: &'static str,
    author: &'static str,
    price: Money,
    image: &'static str,
    description: &'static str,
    category: &'static str,
    rating: Rating,
    reviews: u32,
    published_year: i32,
    pages: u32,
    isbn: &'static str,
    stock: u32,
    categories: &'static [&'static str],
}

impl BookSeed {
    fn to_book(&self) -> Book {
        Book {
            id: self.id,
            title: self.title.to_string(),
            author: self.author.to_string(),
            price: self.price,
            image: self.image.to_string(),
            description: self.description.to_string(),
            category: self.category.to_string(),
            categories: self.categories.iter().map(|c| (*c).to_string()).collect(),
            rating: self.rating,
            reviews: self.reviews,
            published_year: self.published_year,
            pages: self.pages,
            language: "English".to_string(),
            isbn: self.isbn.to_string(),
            stock: self.stock,
        }
    }
}

const BOOK_SEEDS: &[BookSeed] = &[
    BookSeed {
        id: 1,
        title: "The Great Gatsby",
        author: "F. Scott Fitzgerald",
        price: Money::from_cents(1299),
        image: IMG_GATSBY,
        description: "A story of decadence and excess, Gatsby explores the darker aspects of the Jazz Age.",
        category: "Classic Literature",
        rating: Rating::from_tenths(45),
        reviews: 1250,
        published_year: 1925,
        pages: 180,
        isbn: "978-0743273565",
        stock: 45,
        categories: &["Classic Literature", "Fiction"],
    },
    BookSeed {
        id: 2,
        title: "Dune",
        author: "Frank Herbert",
        price: Money::from_cents(1599),
        image: IMG_DUNE,
        description: "A masterpiece of science fiction, Dune is set on the desert planet Arrakis.",
        category: "Science Fiction",
        rating: Rating::from_tenths(48),
        reviews: 890,
        published_year: 1965,
        pages: 688,
        isbn: "978-0441172719",
        stock: 32,
        categories: &["Science Fiction", "Adventure"],
    },
    BookSeed {
        id: 3,
        title: "The Hobbit",
        author: "J.R.R. Tolkien",
        price: Money::from_cents(1499),
        image: IMG_HOBBIT,
        description: "A charming adventure story about Bilbo Baggins and his journey with thirteen dwarves.",
        category: "Fantasy",
        rating: Rating::from_tenths(46),
        reviews: 2100,
        published_year: 1937,
        pages: 310,
        isbn: "978-0547928241",
        stock: 67,
        categories: &["Fantasy", "Adventure"],
    },
    BookSeed {
        id: 4,
        title: "Pride and Prejudice",
        author: "Jane Austen",
        price: Money::from_cents(1199),
        image: IMG_PRIDE,
        description: "A classic romance novel about the relationship between Elizabeth Bennet and Mr. Darcy.",
        category: "Romance",
        rating: Rating::from_tenths(44),
        reviews: 1800,
        published_year: 1813,
        pages: 432,
        isbn: "978-0141439518",
        stock: 89,
        categories: &["Romance", "Classic Literature"],
    },
    BookSeed {
        id: 5,
        title: "The Catcher in the Rye",
        author: "J.D. Salinger",
        price: Money::from_cents(1399),
        image: IMG_CATCHER,
        description: "A coming-of-age story about teenage alienation and loss of innocence in post-World War II America.",
        category: "Coming of Age",
        rating: Rating::from_tenths(43),
        reviews: 950,
        published_year: 1951,
        pages: 277,
        isbn: "978-0316769488",
        stock: 54,
        categories: &["Coming of Age", "Fiction"],
    },
    BookSeed {
        id: 6,
        title: "The Republic",
        author: "Plato",
        price: Money::from_cents(1699),
        image: IMG_REPUBLIC,
        description: "Plato's masterwork of philosophy, exploring justice, the ideal state, and the nature of reality.",
        category: "Philosophy",
        rating: Rating::from_tenths(47),
        reviews: 650,
        published_year: 380,
        pages: 416,
        isbn: "978-0872201361",
        stock: 28,
        categories: &["Philosophy", "Non-Fiction"],
    },
    BookSeed {
        id: 7,
        title: "Charlotte's Web",
        author: "E.B. White",
        price: Money::from_cents(999),
        image: IMG_CATCHER,
        description: "A heartwarming story about friendship between a pig named Wilbur and a spider named Charlotte.",
        category: "Children's Literature",
        rating: Rating::from_tenths(46),
        reviews: 3200,
        published_year: 1952,
        pages: 184,
        isbn: "978-0061124952",
        stock: 76,
        categories: &["Children's Literature", "Fiction"],
    },
    BookSeed {
        id: 8,
        title: "The Kite Runner",
        author: "Khaled Hosseini",
        price: Money::from_cents(1499),
        image: IMG_DUNE,
        description: "A powerful story of friendship, betrayal, and redemption set against the backdrop of Afghanistan.",
        category: "Contemporary Fiction",
        rating: Rating::from_tenths(45),
        reviews: 1100,
        published_year: 2003,
        pages: 371,
        isbn: "978-1594631931",
        stock: 43,
        categories: &["Contemporary Fiction", "Drama"],
    },
    BookSeed {
        id: 9,
        title: "The Book Thief",
        author: "Markus Zusak",
        price: Money::from_cents(1399),
        image: IMG_HOBBIT,
        description: "A unique perspective on World War II, narrated by Death, about a girl who steals books.",
        category: "Historical Fiction",
        rating: Rating::from_tenths(44),
        reviews: 850,
        published_year: 2005,
        pages: 552,
        isbn: "978-0375842207",
        stock: 38,
        categories: &["Historical Fiction", "Drama"],
    },
    BookSeed {
        id: 10,
        title: "1984",
        author: "George Orwell",
        price: Money::from_cents(1299),
        image: IMG_GATSBY,
        description: "A dystopian novel about totalitarianism, surveillance, and the manipulation of truth.",
        category: "Science Fiction",
        rating: Rating::from_tenths(46),
        reviews: 1400,
        published_year: 1949,
        pages: 328,
        isbn: "978-0451524935",
        stock: 62,
        categories: &["Science Fiction", "Dystopian"],
    },
    BookSeed {
        id: 11,
        title: "To Kill a Mockingbird",
        author: "Harper Lee",
        price: Money::from_cents(1199),
        image: IMG_PRIDE,
        description: "A powerful story about racial injustice and the loss of innocence in the American South.",
        category: "Classic Literature",
        rating: Rating::from_tenths(45),
        reviews: 2200,
        published_year: 1960,
        pages: 376,
        isbn: "978-0446310789",
        stock: 71,
        categories: &["Classic Literature", "Fiction"],
    },
    BookSeed {
        id: 12,
        title: "The Alchemist",
        author: "Paulo Coelho",
        price: Money::from_cents(1399),
        image: IMG_REPUBLIC,
        description: "A philosophical novel about a young Andalusian shepherd who dreams of finding a worldly treasure.",
        category: "Philosophy",
        rating: Rating::from_tenths(43),
        reviews: 1200,
        published_year: 1988,
        pages: 208,
        isbn: "978-0062315007",
        stock: 55,
        categories: &["Philosophy", "Fiction"],
    },
];

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_sizes() {
        let catalog = Catalog::bundled();
        assert_eq!(catalog.len(), 12);
        assert_eq!(catalog.categories().len(), 9);
    }

    #[test]
    fn test_ids_are_unique() {
        let catalog = Catalog::bundled();
        let mut ids: Vec<u32> = catalog.books().iter().map(|b| b.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_book_lookup() {
        let catalog = Catalog::bundled();
        let hobbit = catalog.book(3).unwrap();
        assert_eq!(hobbit.title, "The Hobbit");
        assert_eq!(hobbit.price.to_string(), "$14.99");
    }

    #[test]
    fn test_missing_book_is_not_found() {
        let catalog = Catalog::bundled();
        assert!(matches!(catalog.book(99), Err(CoreError::BookNotFound(99))));
    }

    #[test]
    fn test_category_lookup() {
        let catalog = Catalog::bundled();
        assert_eq!(catalog.category("Fantasy").unwrap().icon, "🐉");
        assert!(matches!(
            catalog.category("Horror"),
            Err(CoreError::CategoryNotFound(_))
        ));
    }

    #[test]
    fn test_books_in_category_uses_primary_label() {
        let catalog = Catalog::bundled();

        let classics: Vec<&str> = catalog
            .books_in_category("Classic Literature")
            .iter()
            .map(|b| b.title.as_str())
            .collect();
        // Pride and Prejudice lists "Classic Literature" only as a secondary label
        assert_eq!(classics, vec!["The Great Gatsby", "To Kill a Mockingbird"]);
        assert!(catalog.book(4).unwrap().has_category("Classic Literature"));
    }

    #[test]
    fn test_category_counts() {
        let catalog = Catalog::bundled();
        let counts = catalog.category_counts();

        let count_of = |name: &str| {
            counts
                .iter()
                .find(|(c, _)| c.name == name)
                .map(|(_, n)| *n)
                .unwrap()
        };
        assert_eq!(count_of("Science Fiction"), 2);
        assert_eq!(count_of("Fantasy"), 1);
        assert_eq!(counts.iter().map(|(_, n)| n).sum::<usize>(), 12);
    }

    #[test]
    fn test_featured_is_catalog_prefix() {
        let catalog = Catalog::bundled();
        let featured: Vec<u32> = catalog.featured(3).iter().map(|b| b.id).collect();
        assert_eq!(featured, vec![1, 2, 3]);
        assert_eq!(catalog.featured(50).len(), 12);
    }

    #[test]
    fn test_related_excludes_self() {
        let catalog = Catalog::bundled();
        let dune = catalog.book(2).unwrap();

        let related: Vec<&str> = catalog
            .related(dune, 4)
            .iter()
            .map(|b| b.title.as_str())
            .collect();
        assert_eq!(related, vec!["1984"]);

        let hobbit = catalog.book(3).unwrap();
        assert!(catalog.related(hobbit, 4).is_empty());
    }
}
