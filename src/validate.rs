//! Field-level presence validation for the post form.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::Post;

/// The editable field set: what the new-post and edit forms submit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostForm {
    pub title: String,
    pub author: String,
    pub content: String,
}

impl PostForm {
    /// Prefill from an existing post for editing.
    pub fn from_post(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            author: post.author.clone(),
            content: post.content.clone(),
        }
    }
}

/// A form field, used to key validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Title,
    Author,
    Content,
}

impl FormField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Author => "author",
            Self::Content => "content",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "title" => Some(Self::Title),
            "author" => Some(Self::Author),
            "content" => Some(Self::Content),
            _ => None,
        }
    }
}

/// Per-field error messages. Empty when the form is valid.
pub type ValidationErrors = BTreeMap<FormField, String>;

/// Check that every field is non-empty after trimming whitespace.
pub fn validate(form: &PostForm) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if form.title.trim().is_empty() {
        errors.insert(FormField::Title, "Title is required".to_string());
    }
    if form.author.trim().is_empty() {
        errors.insert(FormField::Author, "Author is required".to_string());
    }
    if form.content.trim().is_empty() {
        errors.insert(FormField::Content, "Content is required".to_string());
    }

    errors
}
