//! The event-handler layer a front end drives.
//!
//! Each method corresponds to a user action: opening screens, typing into the
//! form, submitting it, deleting a post, filtering the list. The store stays
//! a pure CRUD/persistence layer; form state, validation results, and the
//! current view mode live here.

use uuid::Uuid;

use crate::error::Result;
use crate::models::{CreatePostInput, Post, PostSummary, UpdatePostInput};
use crate::store::PostStore;
use crate::validate::{validate, FormField, PostForm, ValidationErrors};
use crate::view::ViewMode;

/// Application state: one store handle, one view mode, one form in flight.
pub struct App {
    store: PostStore,
    mode: ViewMode,
    form: PostForm,
    errors: ValidationErrors,
}

impl App {
    pub fn new(store: PostStore) -> Self {
        Self {
            store,
            mode: ViewMode::List,
            form: PostForm::default(),
            errors: ValidationErrors::new(),
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Direct access to the underlying store.
    pub fn store(&self) -> &PostStore {
        &self.store
    }

    /// The in-flight form, as last typed.
    pub fn form(&self) -> &PostForm {
        &self.form
    }

    /// Validation errors from the last rejected submit.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// The list screen: post summaries filtered by `query`, newest first.
    pub fn list(&self, query: &str) -> Result<Vec<PostSummary>> {
        let posts = self.store.search_posts(query)?;
        Ok(posts.iter().map(Post::to_summary).collect())
    }

    /// Open the composer with a blank form.
    pub fn open_composer(&mut self) {
        self.form = PostForm::default();
        self.errors.clear();
        self.mode = ViewMode::Editing(None);
    }

    /// Open the editor prefilled from an existing post.
    ///
    /// Returns `false` and stays on the current screen when the id is unknown.
    pub fn open_editor(&mut self, id: Uuid) -> Result<bool> {
        let Some(post) = self.store.get_post(id)? else {
            return Ok(false);
        };

        self.form = PostForm::from_post(&post);
        self.errors.clear();
        self.mode = ViewMode::Editing(Some(id));
        Ok(true)
    }

    /// Open a single post.
    pub fn open_post(&mut self, id: Uuid) -> Result<bool> {
        if self.store.get_post(id)?.is_none() {
            return Ok(false);
        }

        self.mode = ViewMode::Viewing(id);
        Ok(true)
    }

    /// Abandon the current screen and return to the list.
    pub fn cancel(&mut self) {
        self.form = PostForm::default();
        self.errors.clear();
        self.mode = ViewMode::List;
    }

    /// Replace one field of the in-flight form.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Title => self.form.title = value,
            FormField::Author => self.form.author = value,
            FormField::Content => self.form.content = value,
        }
    }

    /// Submit the in-flight form.
    ///
    /// An invalid form blocks the submit: the mode is unchanged and per-field
    /// errors are recorded on [`App::errors`]. A valid submit creates or
    /// updates depending on the mode, clears the form, and returns to the
    /// list. Outside of editing mode this is a no-op.
    pub fn submit(&mut self) -> Result<Option<Post>> {
        let ViewMode::Editing(editing) = self.mode else {
            return Ok(None);
        };

        self.errors = validate(&self.form);
        if !self.errors.is_empty() {
            return Ok(None);
        }

        let post = match editing {
            None => self.store.create_post(CreatePostInput {
                title: self.form.title.clone(),
                author: self.form.author.clone(),
                content: self.form.content.clone(),
            })?,
            Some(id) => {
                let updated = self.store.update_post(
                    id,
                    UpdatePostInput {
                        title: Some(self.form.title.clone()),
                        author: Some(self.form.author.clone()),
                        content: Some(self.form.content.clone()),
                    },
                )?;
                match updated {
                    Some(post) => post,
                    None => {
                        // The edited post vanished underneath the form;
                        // nothing left to write.
                        self.cancel();
                        return Ok(None);
                    }
                }
            }
        };

        self.cancel();
        Ok(Some(post))
    }

    /// Delete a post. Leaves the viewer if it was showing the deleted post.
    pub fn delete(&mut self, id: Uuid) -> Result<bool> {
        let removed = self.store.delete_post(id)?;
        if removed && self.mode == ViewMode::Viewing(id) {
            self.mode = ViewMode::List;
        }
        Ok(removed)
    }
}
