//! Data models for the lending service

pub mod author;
pub mod book;
pub mod borrow;
pub mod user;

use serde::Serialize;
use std::fmt;
use utoipa::ToSchema;

// Re-export commonly used types
pub use author::Author;
pub use book::{Book, BookShort};
pub use borrow::Borrow;
pub use user::User;

/// Kinds of entity a reference can point at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    User,
    Author,
    Book,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::User => "User",
            EntityKind::Author => "Author",
            EntityKind::Book => "Book",
        };
        f.write_str(name)
    }
}

/// Plain acknowledgement body
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}
