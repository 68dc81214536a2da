//! Fixed sample content loaded once at process start.
//!
//! Posts are the only seeded collection; subscribers start empty. Seeding
//! goes through [`PostsRepo::create_post`] so each record gets its id from
//! the same write path as any other insert.

use crate::application::repos::{CreatePostParams, PostsRepo, RepoError};

const PLACEHOLDER_IMAGE: &str = "/under-construction.svg";

pub async fn seed_posts(repo: &dyn PostsRepo) -> Result<(), RepoError> {
    for params in sample_posts() {
        repo.create_post(params).await?;
    }
    Ok(())
}

fn sample_posts() -> Vec<CreatePostParams> {
    vec![
        CreatePostParams {
            title: "Aluo AI Major Update: Smart Editor Enhanced, AI Assistant Now Live"
                .to_string(),
            description: "Aluo AI welcomes its biggest update ever: online editor supports \
                          multi-element operations, AI Assistant generates images through \
                          conversation, background removal precision enhanced, and product \
                          image generation speed increased 3x."
                .to_string(),
            category: "Product".to_string(),
            date: "2025/11/10".to_string(),
            image_url: PLACEHOLDER_IMAGE.to_string(),
            slug: "aluo-ai-update".to_string(),
        },
        CreatePostParams {
            title: "From Zero to Auto-Tweet: Building a Twitter Bot for Game Platform Updates"
                .to_string(),
            description: "A complete walkthrough of creating a Twitter Bot for automated \
                          posting, from developer account setup to API integration."
                .to_string(),
            category: "Development".to_string(),
            date: "2025/10/20".to_string(),
            image_url: PLACEHOLDER_IMAGE.to_string(),
            slug: "twitter-bot-automation".to_string(),
        },
        CreatePostParams {
            title: "Two-minute setup: One-click deploy Gost + Clash subscription (SOCKS5)"
                .to_string(),
            description: "Set up a Gost SOCKS5 proxy with Docker in minutes and publish a \
                          Clash subscription via Nginx."
                .to_string(),
            category: "Development".to_string(),
            date: "2025/09/30".to_string(),
            image_url: PLACEHOLDER_IMAGE.to_string(),
            slug: "socks5".to_string(),
        },
        CreatePostParams {
            title: "Which US State Should You Choose for Company Registration?".to_string(),
            description: "Detailed comparison of popular registration states like Delaware, \
                          Wyoming, and Colorado, helping cross-border entrepreneurs make \
                          rational choices for the best incorporation location."
                .to_string(),
            category: "Experience".to_string(),
            date: "2025/09/25".to_string(),
            image_url: PLACEHOLDER_IMAGE.to_string(),
            slug: "us-state-selection".to_string(),
        },
        CreatePostParams {
            title: "The Inevitable Path of Cross-Border Business: My Journey to Registering \
                    an Overseas Company"
                .to_string(),
            description: "From Stripe payment requirements to US company registration - \
                          sharing the complete experience and comparing three registration \
                          methods to help cross-border entrepreneurs avoid pitfalls."
                .to_string(),
            category: "Experience".to_string(),
            date: "2025/09/24".to_string(),
            image_url: PLACEHOLDER_IMAGE.to_string(),
            slug: "overseas-company".to_string(),
        },
        CreatePostParams {
            title: "Personal Plausible Analytics Setup Guide".to_string(),
            description: "A complete guide on setting up your own Plausible Analytics \
                          instance, including server deployment, HTTPS configuration, Nginx \
                          reverse proxy setup, and website integration."
                .to_string(),
            category: "Development".to_string(),
            date: "2025/04/23".to_string(),
            image_url: PLACEHOLDER_IMAGE.to_string(),
            slug: "plausible".to_string(),
        },
        CreatePostParams {
            title: "A Profound Lesson Learned".to_string(),
            description: "Today, I want to share a story about website optimization and a \
                          milestone summary of my journey after 2+ months of going global."
                .to_string(),
            category: "SEO".to_string(),
            date: "2025/03/09".to_string(),
            image_url: PLACEHOLDER_IMAGE.to_string(),
            slug: "lesson".to_string(),
        },
        CreatePostParams {
            title: "US Company Registration Experience Record".to_string(),
            description: "Stripe is a leading global online payment processing platform that \
                          provides infrastructure for businesses and individuals to receive \
                          online payments. As a domestic developer, most would choose Stripe \
                          to integrate payments into their websites, and applying for Stripe \
                          requires owning an overseas company."
                .to_string(),
            category: "Experience".to_string(),
            date: "2025/01/06".to_string(),
            image_url: PLACEHOLDER_IMAGE.to_string(),
            slug: "us-company".to_string(),
        },
    ]
}
