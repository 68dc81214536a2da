//! In-memory storage adapter.
//!
//! The authoritative holder of posts and subscribers for a single process:
//! seed data only for posts, an append-only log for subscribers. Both
//! collections keep insertion order, which is the tiebreak every stable
//! sort in the contract relies on. Lookups are linear scans over a handful
//! of records.

use async_trait::async_trait;
use time::OffsetDateTime;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::application::repos::{CreatePostParams, PostsRepo, RepoError, SubscribersRepo};
use crate::domain::email::EmailAddress;
use crate::domain::entities::{BlogPostRecord, SubscriberRecord};
use crate::domain::posts::sort_newest_first;

#[derive(Default)]
pub struct MemoryRepositories {
    posts: RwLock<Vec<BlogPostRecord>>,
    subscribers: RwLock<Vec<SubscriberRecord>>,
}

impl MemoryRepositories {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostsRepo for MemoryRepositories {
    async fn list_posts(&self) -> Result<Vec<BlogPostRecord>, RepoError> {
        let mut posts = self.posts.read().await.clone();
        sort_newest_first(&mut posts);
        Ok(posts)
    }

    async fn find_post_by_slug(&self, slug: &str) -> Result<Option<BlogPostRecord>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|post| post.slug == slug).cloned())
    }

    async fn create_post(&self, params: CreatePostParams) -> Result<BlogPostRecord, RepoError> {
        let record = BlogPostRecord {
            id: Uuid::new_v4(),
            title: params.title,
            description: params.description,
            category: params.category,
            date: params.date,
            image_url: params.image_url,
            slug: params.slug,
        };
        // Slug collisions are not rejected; find_post_by_slug resolves them
        // to the first-inserted match.
        self.posts.write().await.push(record.clone());
        Ok(record)
    }
}

#[async_trait]
impl SubscribersRepo for MemoryRepositories {
    async fn subscribe(&self, email: EmailAddress) -> Result<SubscriberRecord, RepoError> {
        // The write lock spans the whole check-then-insert, so concurrent
        // subscribes with the same email cannot both succeed.
        let mut subscribers = self.subscribers.write().await;
        if subscribers
            .iter()
            .any(|existing| existing.email == email.as_str())
        {
            return Err(RepoError::duplicate("subscribers.email"));
        }

        let record = SubscriberRecord {
            id: Uuid::new_v4(),
            email: email.into_inner(),
            subscribed_at: OffsetDateTime::now_utc(),
        };
        subscribers.push(record.clone());
        Ok(record)
    }

    async fn find_subscriber_by_email(
        &self,
        email: &str,
    ) -> Result<Option<SubscriberRecord>, RepoError> {
        let subscribers = self.subscribers.read().await;
        Ok(subscribers
            .iter()
            .find(|subscriber| subscriber.email == email)
            .cloned())
    }

    async fn list_subscribers(&self) -> Result<Vec<SubscriberRecord>, RepoError> {
        let mut subscribers = self.subscribers.read().await.clone();
        // Stable sort: equal timestamps keep insertion order.
        subscribers.sort_by(|a, b| b.subscribed_at.cmp(&a.subscribed_at));
        Ok(subscribers)
    }

    async fn count_subscribers(&self) -> Result<u64, RepoError> {
        Ok(self.subscribers.read().await.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::posts::parse_display_date;

    fn post_params(date: &str, slug: &str) -> CreatePostParams {
        CreatePostParams {
            title: slug.to_string(),
            description: String::new(),
            category: "Test".to_string(),
            date: date.to_string(),
            image_url: "/under-construction.svg".to_string(),
            slug: slug.to_string(),
        }
    }

    fn email(value: &str) -> EmailAddress {
        EmailAddress::parse(value).expect("valid test email")
    }

    #[tokio::test]
    async fn list_posts_orders_by_date_descending() {
        let store = MemoryRepositories::new();
        store.create_post(post_params("2025/01/06", "c")).await.unwrap();
        store.create_post(post_params("2025/11/10", "a")).await.unwrap();
        store.create_post(post_params("2025/09/30", "b")).await.unwrap();

        let posts = store.list_posts().await.unwrap();
        let dates: Vec<_> = posts.iter().map(|p| parse_display_date(&p.date)).collect();
        assert!(dates.windows(2).all(|pair| pair[0] >= pair[1]));
        assert_eq!(posts[0].slug, "a");
        assert_eq!(posts[2].slug, "c");
    }

    #[tokio::test]
    async fn unknown_slug_is_absent() {
        let store = MemoryRepositories::new();
        store.create_post(post_params("2025/01/06", "known")).await.unwrap();

        assert!(store.find_post_by_slug("does-not-exist").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicated_slug_resolves_to_first_inserted_match() {
        // Slug uniqueness is unenforced on write; this pins the documented
        // first-match lookup behavior so enforcing it later is a visible
        // contract change.
        let store = MemoryRepositories::new();
        let first = store.create_post(post_params("2025/01/06", "dup")).await.unwrap();
        let second = store.create_post(post_params("2025/02/06", "dup")).await.unwrap();
        assert_ne!(first.id, second.id);

        let found = store.find_post_by_slug("dup").await.unwrap().expect("a match");
        assert_eq!(found.id, first.id);
    }

    #[tokio::test]
    async fn create_post_assigns_fresh_ids() {
        let store = MemoryRepositories::new();
        let a = store.create_post(post_params("2025/01/06", "a")).await.unwrap();
        let b = store.create_post(post_params("2025/01/07", "b")).await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn second_subscribe_with_same_email_is_rejected() {
        let store = MemoryRepositories::new();
        let first = store.subscribe(email("a@b.com")).await.expect("first subscribe");
        assert_eq!(first.email, "a@b.com");

        let second = store.subscribe(email("a@b.com")).await;
        assert!(matches!(second, Err(RepoError::Duplicate { .. })));

        let found = store
            .find_subscriber_by_email("a@b.com")
            .await
            .unwrap()
            .expect("subscriber retrievable");
        assert_eq!(found.id, first.id);
    }

    #[tokio::test]
    async fn email_match_is_case_sensitive() {
        let store = MemoryRepositories::new();
        store.subscribe(email("Reader@example.org")).await.unwrap();

        assert!(store.subscribe(email("reader@example.org")).await.is_ok());
        assert!(
            store
                .find_subscriber_by_email("READER@example.org")
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn count_always_equals_list_length() {
        let store = MemoryRepositories::new();
        for address in ["a@example.org", "b@example.org", "c@example.org"] {
            store.subscribe(email(address)).await.unwrap();
            let listed = store.list_subscribers().await.unwrap();
            let count = store.count_subscribers().await.unwrap();
            assert_eq!(count, listed.len() as u64);
        }
    }

    #[tokio::test]
    async fn subscribers_are_listed_most_recent_first() {
        let store = MemoryRepositories::new();
        store.subscribe(email("a@example.org")).await.unwrap();
        store.subscribe(email("b@example.org")).await.unwrap();
        store.subscribe(email("c@example.org")).await.unwrap();

        let listed = store.list_subscribers().await.unwrap();
        assert!(
            listed
                .windows(2)
                .all(|pair| pair[0].subscribed_at >= pair[1].subscribed_at)
        );
    }

    #[tokio::test]
    async fn concurrent_subscribes_with_same_email_admit_exactly_one() {
        let store = Arc::new(MemoryRepositories::new());

        let mut handles = Vec::new();
        for _ in 0..16 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.subscribe(email("race@example.org")).await
            }));
        }

        let mut successes = 0;
        for handle in handles {
            if handle.await.expect("task completed").is_ok() {
                successes += 1;
            }
        }

        assert_eq!(successes, 1);
        assert_eq!(store.count_subscribers().await.unwrap(), 1);
    }
}
