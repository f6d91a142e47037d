use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single blog entry.
///
/// Posts are flat records with no relationships between them. The `date` is
/// assigned once at creation and never changes; edits rewrite the text fields
/// in place. Persisted as JSON with the date in RFC 3339 form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    /// Full post body as plain text.
    pub content: String,
    /// Creation timestamp. Preserved across edits.
    pub date: DateTime<Utc>,
}

/// How many characters of content a list excerpt keeps.
pub const EXCERPT_CHARS: usize = 140;

impl Post {
    /// Truncated content preview for list display.
    ///
    /// Cuts on a char boundary and appends an ellipsis only when content was
    /// actually dropped.
    pub fn excerpt(&self) -> String {
        let mut chars = self.content.chars();
        let head: String = chars.by_ref().take(EXCERPT_CHARS).collect();
        if chars.next().is_some() {
            format!("{}...", head.trim_end())
        } else {
            head
        }
    }

    /// Project into the shape list views render.
    pub fn to_summary(&self) -> PostSummary {
        PostSummary {
            id: self.id,
            title: self.title.clone(),
            author: self.author.clone(),
            date: self.date,
            excerpt: self.excerpt(),
        }
    }
}

/// A post as list views display it: metadata plus a content excerpt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostSummary {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub date: DateTime<Utc>,
    pub excerpt: String,
}

/// Input for creating a new post.
///
/// The id and creation timestamp are assigned by the store, never submitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostInput {
    pub title: String,
    pub author: String,
    pub content: String,
}

/// Input for updating an existing post. All fields are optional for partial updates.
///
/// A post's id and creation date are not editable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePostInput {
    pub title: Option<String>,
    pub author: Option<String>,
    pub content: Option<String>,
}
