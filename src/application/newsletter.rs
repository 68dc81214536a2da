use std::sync::Arc;

use metrics::counter;
use thiserror::Error;
use tracing::info;

use crate::application::repos::{RepoError, SubscribersRepo};
use crate::domain::email::EmailAddress;
use crate::domain::entities::SubscriberRecord;

#[derive(Debug, Error)]
pub enum SubscribeError {
    #[error("invalid email address: {0}")]
    InvalidEmail(String),
    #[error("email already subscribed")]
    AlreadySubscribed,
    #[error(transparent)]
    Repo(RepoError),
}

#[derive(Clone)]
pub struct NewsletterService {
    repo: Arc<dyn SubscribersRepo>,
}

impl NewsletterService {
    pub fn new(repo: Arc<dyn SubscribersRepo>) -> Self {
        Self { repo }
    }

    /// Validate the email shape, then register it. The shape check always
    /// runs before the uniqueness check, so a malformed address is rejected
    /// the same way whether or not it is already subscribed.
    pub async fn subscribe(&self, raw_email: &str) -> Result<SubscriberRecord, SubscribeError> {
        let email = EmailAddress::parse(raw_email)
            .map_err(|err| SubscribeError::InvalidEmail(err.to_string()))?;

        match self.repo.subscribe(email).await {
            Ok(subscriber) => {
                counter!("veranda_newsletter_subscribe_total").increment(1);
                info!(
                    target = "veranda::newsletter",
                    subscriber_id = %subscriber.id,
                    "new subscriber"
                );
                Ok(subscriber)
            }
            Err(RepoError::Duplicate { .. }) => {
                counter!("veranda_newsletter_duplicate_total").increment(1);
                Err(SubscribeError::AlreadySubscribed)
            }
            Err(err) => Err(SubscribeError::Repo(err)),
        }
    }

    pub async fn count(&self) -> Result<u64, RepoError> {
        self.repo.count_subscribers().await
    }

    /// Subscribers newest-first plus the collection size the admin view
    /// renders alongside them.
    pub async fn list_with_count(&self) -> Result<(Vec<SubscriberRecord>, u64), RepoError> {
        let subscribers = self.repo.list_subscribers().await?;
        let count = subscribers.len() as u64;
        Ok((subscribers, count))
    }
}
