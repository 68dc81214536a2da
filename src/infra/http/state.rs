use std::sync::Arc;

use crate::application::newsletter::NewsletterService;
use crate::application::posts::PostService;

#[derive(Clone)]
pub struct ApiState {
    pub posts: Arc<PostService>,
    pub newsletter: Arc<NewsletterService>,
}
