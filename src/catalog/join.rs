//! In-memory join of books against authors.

use std::collections::HashMap;

use crate::catalog::types::{Author, AuthorId, Book, CatalogItem};

/// Name used when a book's author is not in the Authors response.
pub const UNKNOWN_AUTHOR: &str = "Desconocido";

/// Index authors by id. A later duplicate replaces an earlier one.
pub fn index_authors(authors: Vec<Author>) -> HashMap<AuthorId, Author> {
    authors.into_iter().map(|a| (a.id, a)).collect()
}

/// One item per book, in book order.
pub fn assemble(books: Vec<Book>, authors: &HashMap<AuthorId, Author>) -> Vec<CatalogItem> {
    books
        .into_iter()
        .map(|book| {
            let author_name = authors
                .get(&book.author_id)
                .map(Author::display_name)
                .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string());
            CatalogItem { book, author_name }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn author(id: AuthorId, first: &str, last: &str) -> Author {
        Author {
            id,
            first_name: first.into(),
            last_name: last.into(),
            biography: String::new(),
        }
    }

    fn book(id: i64, author_id: AuthorId) -> Book {
        Book {
            id,
            title: format!("Book {}", id),
            isbn: format!("isbn-{}", id),
            publication_year: 2000 + id,
            author_id,
        }
    }

    #[test]
    fn test_resolves_and_falls_back() {
        let authors = index_authors(vec![author(1, "Jane", "Doe")]);
        let catalog = assemble(vec![book(10, 1), book(11, 99)], &authors);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[0].book.id, 10);
        assert_eq!(catalog[0].author_name, "Jane Doe");
        assert_eq!(catalog[1].book.id, 11);
        assert_eq!(catalog[1].author_name, UNKNOWN_AUTHOR);
    }

    #[test]
    fn test_no_authors_keeps_every_book() {
        let books: Vec<Book> = (0..5).rev().map(|i| book(i, i)).collect();
        let catalog = assemble(books.clone(), &HashMap::new());

        assert_eq!(catalog.len(), books.len());
        for (item, book) in catalog.iter().zip(&books) {
            assert_eq!(&item.book, book);
            assert_eq!(item.author_name, "Desconocido");
        }
    }

    #[test]
    fn test_duplicate_author_last_wins() {
        let authors = index_authors(vec![author(1, "First", "Copy"), author(1, "Second", "Copy")]);
        assert_eq!(authors.len(), 1);

        let catalog = assemble(vec![book(1, 1)], &authors);
        assert_eq!(catalog[0].author_name, "Second Copy");
    }

    #[test]
    fn test_empty_names_keep_separator() {
        let authors = index_authors(vec![author(3, "", "")]);
        let catalog = assemble(vec![book(1, 3)], &authors);
        assert_eq!(catalog[0].author_name, " ");
    }

    #[test]
    fn test_empty_books() {
        let authors = index_authors(vec![author(1, "Jane", "Doe")]);
        assert!(assemble(Vec::new(), &authors).is_empty());
    }
}
