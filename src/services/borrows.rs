//! Borrow ledger service

use chrono::Utc;

use crate::{
    error::{AppError, AppResult},
    models::{
        borrow::{Borrow, BookBorrow, CreateBorrow, UserBorrow},
        EntityKind,
    },
    repository::Repository,
    validation,
};

pub const NO_BORROWS_FOR_USER: &str = "No borrow records found for this user";
pub const NO_BORROWS_FOR_BOOK: &str = "No borrow records found for this book";

#[derive(Clone)]
pub struct BorrowsService {
    repository: Repository,
}

impl BorrowsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Record that a user borrowed a book, dated now (UTC)
    pub async fn create_borrow(&self, request: CreateBorrow) -> AppResult<Borrow> {
        validation::required_fields(&[("user_id", &request.user_id), ("book_id", &request.book_id)])?;

        let user_id = request.user_id.unwrap_or_default();
        let book_id = request.book_id.unwrap_or_default();

        let mut tx = self.repository.begin_write().await?;
        validation::reference_exists(&self.repository, &mut tx, EntityKind::User, user_id).await?;
        validation::reference_exists(&self.repository, &mut tx, EntityKind::Book, book_id).await?;

        let borrow = self
            .repository
            .borrows_create(&mut tx, user_id, book_id, Utc::now())
            .await?;
        tx.commit().await?;

        tracing::info!(borrow_id = borrow.id, user_id, book_id, "Book borrowed");
        Ok(borrow)
    }

    /// Borrow history of a user. Unknown users and users who never borrowed
    /// both yield `EmptyResult`.
    pub async fn borrows_by_user(&self, user_id: i64) -> AppResult<Vec<UserBorrow>> {
        let mut conn = self.repository.acquire().await?;
        let borrows = self.repository.borrows_by_user(&mut conn, user_id).await?;
        if borrows.is_empty() {
            return Err(AppError::EmptyResult(NO_BORROWS_FOR_USER.to_string()));
        }
        Ok(borrows.into_iter().map(UserBorrow::from).collect())
    }

    /// Borrow history of a book, same empty-result rule as for users
    pub async fn borrows_by_book(&self, book_id: i64) -> AppResult<Vec<BookBorrow>> {
        let mut conn = self.repository.acquire().await?;
        let borrows = self.repository.borrows_by_book(&mut conn, book_id).await?;
        if borrows.is_empty() {
            return Err(AppError::EmptyResult(NO_BORROWS_FOR_BOOK.to_string()));
        }
        Ok(borrows.into_iter().map(BookBorrow::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::test_repository;

    /// Seed one user (id 1), one author and one book (id 1)
    async fn seeded() -> (BorrowsService, Repository) {
        let repository = test_repository().await;
        let mut tx = repository.begin_write().await.unwrap();
        repository.users_create(&mut tx, "Ann", "a@x.com").await.unwrap();
        let author = repository.authors_create(&mut tx, "Orwell").await.unwrap();
        repository.books_create(&mut tx, "1984", author.id).await.unwrap();
        tx.commit().await.unwrap();

        (BorrowsService::new(repository.clone()), repository)
    }

    async fn count(repository: &Repository) -> i64 {
        let mut conn = repository.acquire().await.unwrap();
        repository.borrows_count(&mut conn).await.unwrap()
    }

    fn request(user_id: i64, book_id: i64) -> CreateBorrow {
        CreateBorrow {
            user_id: Some(user_id),
            book_id: Some(book_id),
        }
    }

    #[tokio::test]
    async fn test_create_borrow_dated_now() {
        let (borrows, _) = seeded().await;
        let before = Utc::now();

        let borrow = borrows.create_borrow(request(1, 1)).await.unwrap();

        assert_eq!(borrow.id, 1);
        assert_eq!((borrow.user_id, borrow.book_id), (1, 1));
        assert!(borrow.borrow_date >= before);
        assert!(borrow.borrow_date <= Utc::now());
    }

    #[tokio::test]
    async fn test_failed_borrow_leaves_ledger_unchanged() {
        let (borrows, repository) = seeded().await;

        let err = borrows.create_borrow(request(2, 1)).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(EntityKind::User)));

        let err = borrows.create_borrow(request(1, 2)).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(EntityKind::Book)));

        let err = borrows.create_borrow(CreateBorrow::default()).await.unwrap_err();
        assert_eq!(err.to_string(), "user_id and book_id are required");

        assert_eq!(count(&repository).await, 0);
    }

    #[tokio::test]
    async fn test_histories() {
        let (borrows, _) = seeded().await;
        borrows.create_borrow(request(1, 1)).await.unwrap();
        borrows.create_borrow(request(1, 1)).await.unwrap();

        let by_user = borrows.borrows_by_user(1).await.unwrap();
        assert_eq!(by_user.len(), 2);
        assert_eq!(by_user[0].book_id, 1);

        let by_book = borrows.borrows_by_book(1).await.unwrap();
        assert_eq!(by_book.iter().map(|b| b.id).collect::<Vec<_>>(), [1, 2]);

        let err = borrows.borrows_by_user(2).await.unwrap_err();
        assert_eq!(err.to_string(), NO_BORROWS_FOR_USER);
        let err = borrows.borrows_by_book(2).await.unwrap_err();
        assert_eq!(err.to_string(), NO_BORROWS_FOR_BOOK);
    }

    #[tokio::test]
    async fn test_deleting_book_keeps_its_borrows() {
        let (borrows, repository) = seeded().await;
        borrows.create_borrow(request(1, 1)).await.unwrap();

        let mut tx = repository.begin_write().await.unwrap();
        repository.books_delete(&mut tx, 1).await.unwrap();
        tx.commit().await.unwrap();

        let history = borrows.borrows_by_book(1).await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].user_id, 1);
    }
}
