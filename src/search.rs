//! Case-insensitive substring filtering over the post collection.

use crate::models::Post;

/// Posts whose title, author, or content contains `query`, case-insensitively.
///
/// An empty or whitespace-only query matches everything. Input order is
/// preserved, so a date-sorted slice stays date-sorted.
pub fn filter_posts<'a>(posts: &'a [Post], query: &str) -> Vec<&'a Post> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return posts.iter().collect();
    }

    posts
        .iter()
        .filter(|post| post_matches(post, &needle))
        .collect()
}

/// `needle` must already be lowercased.
fn post_matches(post: &Post, needle: &str) -> bool {
    post.title.to_lowercase().contains(needle)
        || post.author.to_lowercase().contains(needle)
        || post.content.to_lowercase().contains(needle)
}
