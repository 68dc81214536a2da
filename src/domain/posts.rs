//! Ordering rules for the post feed.

use std::cmp::Reverse;

use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::domain::entities::BlogPostRecord;

const DISPLAY_DATE_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[year]/[month]/[day]");

/// Parse a display date of the form `YYYY/MM/DD`.
///
/// A date that fails to parse falls back to [`Date::MIN`], so it orders
/// after every well-formed date in the newest-first feed; ties among
/// malformed dates keep insertion order because the feed sort is stable.
pub fn parse_display_date(value: &str) -> Date {
    Date::parse(value, DISPLAY_DATE_FORMAT).unwrap_or(Date::MIN)
}

/// Sort posts by display date descending. The sort is stable, so posts with
/// equal dates stay in insertion order.
pub fn sort_newest_first(posts: &mut [BlogPostRecord]) {
    posts.sort_by_key(|post| Reverse(parse_display_date(&post.date)));
}

#[cfg(test)]
mod tests {
    use time::macros::date;
    use uuid::Uuid;

    use super::*;

    fn post(date: &str, slug: &str) -> BlogPostRecord {
        BlogPostRecord {
            id: Uuid::new_v4(),
            title: slug.to_string(),
            description: String::new(),
            category: "Test".to_string(),
            date: date.to_string(),
            image_url: "/under-construction.svg".to_string(),
            slug: slug.to_string(),
        }
    }

    #[test]
    fn well_formed_dates_parse() {
        assert_eq!(parse_display_date("2025/11/10"), date!(2025 - 11 - 10));
    }

    #[test]
    fn malformed_dates_fall_back_to_min() {
        assert_eq!(parse_display_date("not a date"), Date::MIN);
        assert_eq!(parse_display_date("2025-11-10"), Date::MIN);
        assert_eq!(parse_display_date("2025/13/01"), Date::MIN);
    }

    #[test]
    fn feed_orders_newest_first() {
        let mut posts = vec![
            post("2025/01/06", "oldest"),
            post("2025/11/10", "newest"),
            post("2025/09/30", "middle"),
        ];
        sort_newest_first(&mut posts);
        let slugs: Vec<&str> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, ["newest", "middle", "oldest"]);
    }

    #[test]
    fn equal_dates_keep_insertion_order() {
        let mut posts = vec![
            post("2025/09/25", "first"),
            post("2025/09/25", "second"),
            post("2025/10/20", "newer"),
        ];
        sort_newest_first(&mut posts);
        let slugs: Vec<&str> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, ["newer", "first", "second"]);
    }

    #[test]
    fn malformed_dates_sort_last() {
        let mut posts = vec![
            post("garbage", "broken"),
            post("2025/03/09", "fine"),
        ];
        sort_newest_first(&mut posts);
        let slugs: Vec<&str> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, ["fine", "broken"]);
    }
}
