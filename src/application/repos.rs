//! Repository traits describing storage adapters.
//!
//! All business rules about uniqueness and ordering live behind these
//! traits; handlers only translate outcomes. The in-memory adapter is in
//! [`crate::infra::store`]; a durable backend can replace it without
//! touching the HTTP layer.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::email::EmailAddress;
use crate::domain::entities::{BlogPostRecord, SubscriberRecord};

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("persistence error: {0}")]
    Persistence(String),
    #[error("duplicate record violates unique constraint `{constraint}`")]
    Duplicate { constraint: String },
}

impl RepoError {
    pub fn duplicate(constraint: impl Into<String>) -> Self {
        Self::Duplicate {
            constraint: constraint.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePostParams {
    pub title: String,
    pub description: String,
    pub category: String,
    pub date: String,
    pub image_url: String,
    pub slug: String,
}

#[async_trait]
pub trait PostsRepo: Send + Sync {
    /// All posts, newest display date first. Equal dates keep insertion
    /// order; malformed dates sort last (see [`crate::domain::posts`]).
    async fn list_posts(&self) -> Result<Vec<BlogPostRecord>, RepoError>;

    /// First post whose slug matches exactly, in insertion order.
    async fn find_post_by_slug(&self, slug: &str) -> Result<Option<BlogPostRecord>, RepoError>;

    /// Store a new post under a fresh id and return the stored record.
    /// Slug uniqueness is not checked here; lookups resolve duplicated
    /// slugs to the first-inserted match.
    async fn create_post(&self, params: CreatePostParams) -> Result<BlogPostRecord, RepoError>;
}

#[async_trait]
pub trait SubscribersRepo: Send + Sync {
    /// Store a new subscriber unless the exact email string is already
    /// present. The duplicate check and the insert are one atomic step:
    /// concurrent calls with the same email cannot both succeed.
    async fn subscribe(&self, email: EmailAddress) -> Result<SubscriberRecord, RepoError>;

    /// Exact-match lookup, case-sensitive.
    async fn find_subscriber_by_email(
        &self,
        email: &str,
    ) -> Result<Option<SubscriberRecord>, RepoError>;

    /// All subscribers, most recent subscription first.
    async fn list_subscribers(&self) -> Result<Vec<SubscriberRecord>, RepoError>;

    async fn count_subscribers(&self) -> Result<u64, RepoError>;
}
