mod backend;

use std::sync::{Arc, Mutex};

use chrono::Utc;
use uuid::Uuid;

pub use backend::{FileStore, MemoryStore, StringStore};

use crate::error::Result;
use crate::models::*;
use crate::search::filter_posts;

/// Storage key the post collection lives under.
pub const POSTS_KEY: &str = "posts";

/// The post collection and its persistence mirror.
///
/// The in-memory list is the single source of truth, kept sorted by date
/// descending: load re-sorts, create inserts at the front, and edits never
/// touch the date. The backend holds a passive JSON mirror, rewritten whole
/// after every mutation and read once at open. Handles are cheap to clone and
/// share one list.
pub struct PostStore {
    posts: Arc<Mutex<Vec<Post>>>,
    backend: Arc<dyn StringStore>,
}

impl PostStore {
    /// Open a store over `backend`, loading whatever the mirror holds.
    ///
    /// An absent key yields an empty collection. Malformed JSON is logged and
    /// also yields an empty collection; the corrupt value is overwritten by
    /// the next mutation.
    pub fn open(backend: impl StringStore + 'static) -> Result<Self> {
        let backend: Arc<dyn StringStore> = Arc::new(backend);
        let posts = load_posts(backend.as_ref())?;
        Ok(Self {
            posts: Arc::new(Mutex::new(posts)),
            backend,
        })
    }

    /// Open a file-backed store in the per-user data directory.
    pub fn open_default() -> Result<Self> {
        Self::open(FileStore::open_default()?)
    }

    /// Open a store over a fresh in-memory backend.
    pub fn open_memory() -> Result<Self> {
        Self::open(MemoryStore::new())
    }

    /// Every post, newest first.
    pub fn get_all_posts(&self) -> Result<Vec<Post>> {
        let posts = self.posts.lock().expect("post list lock poisoned");
        Ok(posts.clone())
    }

    pub fn get_post(&self, id: Uuid) -> Result<Option<Post>> {
        let posts = self.posts.lock().expect("post list lock poisoned");
        Ok(posts.iter().find(|p| p.id == id).cloned())
    }

    pub fn create_post(&self, input: CreatePostInput) -> Result<Post> {
        let post = Post {
            id: Uuid::new_v4(),
            title: input.title,
            author: input.author,
            content: input.content,
            date: Utc::now(),
        };

        let mut posts = self.posts.lock().expect("post list lock poisoned");
        // A fresh post carries the current timestamp, so inserting at the
        // front keeps the list date-descending.
        posts.insert(0, post.clone());
        self.save(posts.as_slice())?;

        Ok(post)
    }

    /// Partial update of title/author/content. Id and date are preserved.
    pub fn update_post(&self, id: Uuid, input: UpdatePostInput) -> Result<Option<Post>> {
        let mut posts = self.posts.lock().expect("post list lock poisoned");
        let Some(existing) = posts.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };

        if let Some(title) = input.title {
            existing.title = title;
        }
        if let Some(author) = input.author {
            existing.author = author;
        }
        if let Some(content) = input.content {
            existing.content = content;
        }

        let updated = existing.clone();
        self.save(posts.as_slice())?;
        Ok(Some(updated))
    }

    pub fn delete_post(&self, id: Uuid) -> Result<bool> {
        let mut posts = self.posts.lock().expect("post list lock poisoned");
        let before = posts.len();
        posts.retain(|p| p.id != id);
        if posts.len() == before {
            return Ok(false);
        }

        self.save(posts.as_slice())?;
        Ok(true)
    }

    /// Posts matching `query` (see [`filter_posts`]), newest first.
    pub fn search_posts(&self, query: &str) -> Result<Vec<Post>> {
        let posts = self.posts.lock().expect("post list lock poisoned");
        Ok(filter_posts(posts.as_slice(), query)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Serialize the full collection over the prior mirror value.
    fn save(&self, posts: &[Post]) -> Result<()> {
        let json = serde_json::to_string_pretty(posts)?;
        self.backend.write(POSTS_KEY, &json)?;
        tracing::debug!(count = posts.len(), "mirrored post collection");
        Ok(())
    }
}

impl Clone for PostStore {
    fn clone(&self) -> Self {
        Self {
            posts: self.posts.clone(),
            backend: self.backend.clone(),
        }
    }
}

/// Read and sort the persisted collection, newest first.
fn load_posts(backend: &dyn StringStore) -> Result<Vec<Post>> {
    let Some(raw) = backend.read(POSTS_KEY)? else {
        return Ok(Vec::new());
    };

    let mut posts: Vec<Post> = match serde_json::from_str(&raw) {
        Ok(posts) => posts,
        Err(e) => {
            tracing::warn!("discarding malformed post data: {}", e);
            Vec::new()
        }
    };

    posts.sort_by(|a, b| b.date.cmp(&a.date));
    Ok(posts)
}
