//! Book catalog service.
//!
//! Holds the validation routine run before every create/update: required
//! attributes in a fixed order, the non-negative value rule, then the
//! title uniqueness check (performed transactionally by the repository).

use rust_decimal::Decimal;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookInput, BookQuery, NewBook},
    repository::Repository,
};

use super::{required, required_text};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List books with filter, pagination and sorting
    pub async fn list(&self, query: &BookQuery) -> AppResult<Vec<Book>> {
        self.repository.books_search(query).await
    }

    /// Get a book by ID
    pub async fn get(&self, id: i32) -> AppResult<Book> {
        self.repository.books_get(id).await
    }

    /// Validate and create a book; the uniqueness check, the insert and the
    /// audit-log append run in one transaction
    pub async fn create(&self, input: BookInput) -> AppResult<Book> {
        let book = validate(&input)?;
        self.repository.books_create(&book).await
    }

    /// Validate and update a book; the uniqueness check excludes the row
    /// being updated, so keeping the same title succeeds
    pub async fn update(&self, id: i32, input: BookInput) -> AppResult<Book> {
        let book = validate(&input)?;
        self.repository.books_update(id, &book).await
    }

    /// Delete a book and log the action
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.books_delete(id).await
    }
}

/// Check the candidate attributes and produce the sanitized set.
///
/// The attribute order matters: the error names the first missing one.
fn validate(input: &BookInput) -> AppResult<NewBook> {
    let title = required_text(&input.title, "title")?;
    let author = required_text(&input.author, "author")?;
    let publication_year = required(&input.publication_year, "publication_year")?;
    let pages = required(&input.pages, "pages")?;
    let value = required(&input.value, "value")?;
    let category_id = required(&input.category_id, "category_id")?;
    let publisher_id = required(&input.publisher_id, "publisher_id")?;
    let format_id = required(&input.format_id, "format_id")?;

    if value < Decimal::ZERO {
        return Err(AppError::NegativeValue);
    }

    Ok(NewBook {
        title,
        author,
        publication_year,
        pages,
        value,
        category_id,
        publisher_id,
        format_id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_input() -> BookInput {
        BookInput {
            title: Some("Dune".to_string()),
            author: Some("Frank Herbert".to_string()),
            publication_year: Some(1965),
            pages: Some(412),
            value: Some(Decimal::new(2990, 2)),
            category_id: Some(1),
            publisher_id: Some(1),
            format_id: Some(1),
        }
    }

    #[test]
    fn accepts_a_complete_candidate() {
        let book = validate(&full_input()).unwrap();
        assert_eq!(book.title, "Dune");
        assert_eq!(book.pages, 412);
    }

    #[test]
    fn reports_the_first_missing_attribute_by_name() {
        let input = BookInput::default();
        let err = validate(&input).unwrap_err();
        assert_eq!(err.to_string(), "The attribute \"title\" is required.");

        let mut input = full_input();
        input.author = None;
        input.pages = None;
        let err = validate(&input).unwrap_err();
        assert_eq!(err.to_string(), "The attribute \"author\" is required.");
    }

    #[test]
    fn treats_blank_title_as_missing() {
        let mut input = full_input();
        input.title = Some("   ".to_string());
        let err = validate(&input).unwrap_err();
        assert!(matches!(err, AppError::MissingField("title")));
    }

    #[test]
    fn trims_text_attributes() {
        let mut input = full_input();
        input.title = Some("  Dune  ".to_string());
        let book = validate(&input).unwrap();
        assert_eq!(book.title, "Dune");
    }

    #[test]
    fn rejects_a_negative_value() {
        let mut input = full_input();
        input.value = Some(Decimal::new(-1, 2));
        let err = validate(&input).unwrap_err();
        assert!(matches!(err, AppError::NegativeValue));
        assert_eq!(err.to_string(), "The value cannot be negative!");
    }

    #[test]
    fn accepts_a_zero_value() {
        let mut input = full_input();
        input.value = Some(Decimal::ZERO);
        assert!(validate(&input).is_ok());
    }

    #[test]
    fn reports_missing_foreign_keys() {
        let mut input = full_input();
        input.format_id = None;
        let err = validate(&input).unwrap_err();
        assert!(matches!(err, AppError::MissingField("format_id")));
    }
}
