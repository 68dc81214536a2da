use std::sync::Arc;

use crate::application::repos::{PostsRepo, RepoError};
use crate::domain::entities::BlogPostRecord;

#[derive(Clone)]
pub struct PostService {
    reader: Arc<dyn PostsRepo>,
}

impl PostService {
    pub fn new(reader: Arc<dyn PostsRepo>) -> Self {
        Self { reader }
    }

    pub async fn list(&self) -> Result<Vec<BlogPostRecord>, RepoError> {
        self.reader.list_posts().await
    }

    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<BlogPostRecord>, RepoError> {
        self.reader.find_post_by_slug(slug).await
    }
}
