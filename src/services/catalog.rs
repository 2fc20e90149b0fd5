//! Catalog service: authors and the books written by them

use crate::{
    error::{AppError, AppResult},
    models::{
        author::{Author, AuthorBooks, CreateAuthor},
        book::{Book, BookShort, CreateBook},
        EntityKind,
    },
    repository::Repository,
    validation,
};

pub const NO_BOOKS_FOR_AUTHOR: &str = "No books found for this author";

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Create an author
    pub async fn create_author(&self, request: CreateAuthor) -> AppResult<Author> {
        validation::required_fields(&[("name", &request.name)])?;
        validation::field_limits(&request)?;

        let name = request.name.unwrap_or_default();

        let mut tx = self.repository.begin_write().await?;
        let author = self.repository.authors_create(&mut tx, &name).await?;
        tx.commit().await?;

        tracing::info!(author_id = author.id, "Author created");
        Ok(author)
    }

    /// List all authors
    pub async fn list_authors(&self) -> AppResult<Vec<Author>> {
        let mut conn = self.repository.acquire().await?;
        self.repository.authors_list(&mut conn).await
    }

    /// An existing author's name and books; the list may be empty
    pub async fn author_books(&self, author_id: i64) -> AppResult<AuthorBooks> {
        let mut tx = self.repository.begin_read().await?;
        let author = self
            .repository
            .authors_get_by_id(&mut tx, author_id)
            .await?
            .ok_or(AppError::NotFound(EntityKind::Author))?;
        let books = self.repository.books_by_author(&mut tx, author_id).await?;

        Ok(AuthorBooks {
            author: author.name,
            books: books.into_iter().map(BookShort::from).collect(),
        })
    }

    /// Create a book for an existing author
    pub async fn create_book(&self, request: CreateBook) -> AppResult<Book> {
        validation::required_fields(&[("title", &request.title), ("author_id", &request.author_id)])?;
        validation::field_limits(&request)?;

        let title = request.title.unwrap_or_default();
        let author_id = request.author_id.unwrap_or_default();

        let mut tx = self.repository.begin_write().await?;
        validation::reference_exists(&self.repository, &mut tx, EntityKind::Author, author_id)
            .await?;
        let book = self.repository.books_create(&mut tx, &title, author_id).await?;
        tx.commit().await?;

        tracing::info!(book_id = book.id, author_id, "Book created");
        Ok(book)
    }

    /// List all books
    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        let mut conn = self.repository.acquire().await?;
        self.repository.books_list(&mut conn).await
    }

    /// Books carrying this author_id. The author itself is not looked up:
    /// an unknown author and an author without books both yield `EmptyResult`.
    pub async fn books_by_author(&self, author_id: i64) -> AppResult<Vec<BookShort>> {
        let mut conn = self.repository.acquire().await?;
        let books = self.repository.books_by_author(&mut conn, author_id).await?;
        if books.is_empty() {
            return Err(AppError::EmptyResult(NO_BOOKS_FOR_AUTHOR.to_string()));
        }
        Ok(books.into_iter().map(BookShort::from).collect())
    }

    /// Delete a book. Its borrow records are kept.
    pub async fn delete_book(&self, id: i64) -> AppResult<()> {
        let mut tx = self.repository.begin_write().await?;
        validation::reference_exists(&self.repository, &mut tx, EntityKind::Book, id).await?;
        self.repository.books_delete(&mut tx, id).await?;
        tx.commit().await?;

        tracing::info!(book_id = id, "Book deleted");
        Ok(())
    }
}
