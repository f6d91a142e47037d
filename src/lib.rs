//! Quill: a single-user blog post manager.
//!
//! The crate is the state model behind a small blogging UI: a post collection
//! persisted as JSON text under one storage key, presence validation for the
//! post form, case-insensitive filtering, and the list/editing/viewing screen
//! transitions. There is no server and no CLI; a front end drives [`App`] (or
//! [`PostStore`] directly) and renders what comes back.
//!
//! ```
//! use quill::{App, FormField, PostStore};
//!
//! # fn main() -> quill::Result<()> {
//! let mut app = App::new(PostStore::open_memory()?);
//!
//! app.open_composer();
//! app.set_field(FormField::Title, "Hello");
//! app.set_field(FormField::Author, "Ada");
//! app.set_field(FormField::Content, "First post.");
//! let post = app.submit()?.expect("form was valid");
//!
//! assert_eq!(app.list("hello")?.len(), 1);
//! app.delete(post.id)?;
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod error;
pub mod models;
pub mod search;
pub mod store;
pub mod validate;
pub mod view;

pub use app::App;
pub use error::{Result, StoreError};
pub use models::{CreatePostInput, Post, PostSummary, UpdatePostInput};
pub use search::filter_posts;
pub use store::{FileStore, MemoryStore, PostStore, StringStore};
pub use validate::{validate, FormField, PostForm, ValidationErrors};
pub use view::ViewMode;
