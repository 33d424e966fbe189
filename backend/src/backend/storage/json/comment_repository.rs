use anyhow::{anyhow, Result};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

use super::connection::JsonConnection;
use crate::backend::domain::models::comment::Comment;
use crate::backend::storage::traits::CommentStorage;

const SLOT: &str = "comments";

/// JSON-slot comment repository.
#[derive(Clone)]
pub struct CommentRepository {
    connection: Arc<JsonConnection>,
    comments: Arc<RwLock<Vec<Comment>>>,
}

impl CommentRepository {
    pub fn new(connection: Arc<JsonConnection>) -> Self {
        let stored: Vec<shared::Comment> = connection.read_slot(SLOT);
        debug!("Loaded {} comments from slot", stored.len());
        let comments = stored.into_iter().map(Comment::from_dto).collect();
        Self {
            connection,
            comments: Arc::new(RwLock::new(comments)),
        }
    }

    fn read_guard(&self) -> Result<RwLockReadGuard<'_, Vec<Comment>>> {
        self.comments
            .read()
            .map_err(|_| anyhow!("comment collection lock poisoned"))
    }

    fn write_guard(&self) -> Result<RwLockWriteGuard<'_, Vec<Comment>>> {
        self.comments
            .write()
            .map_err(|_| anyhow!("comment collection lock poisoned"))
    }

    fn persist(&self, comments: &[Comment]) -> Result<()> {
        let dtos: Vec<shared::Comment> = comments.iter().map(Comment::to_dto).collect();
        self.connection.write_slot(SLOT, &dtos)
    }
}

impl CommentStorage for CommentRepository {
    fn store_comment(&self, comment: &Comment) -> Result<()> {
        let mut comments = self.write_guard()?;
        comments.push(comment.clone());
        self.persist(&comments)
    }

    fn get_comment(&self, comment_id: &str) -> Result<Option<Comment>> {
        let comments = self.read_guard()?;
        Ok(comments.iter().find(|c| c.id == comment_id).cloned())
    }

    fn list_comments(&self) -> Result<Vec<Comment>> {
        Ok(self.read_guard()?.clone())
    }

    fn update_comment(&self, comment: &Comment) -> Result<bool> {
        let mut comments = self.write_guard()?;
        match comments.iter_mut().find(|c| c.id == comment.id) {
            Some(existing) => {
                *existing = comment.clone();
                self.persist(&comments)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete_comment(&self, comment_id: &str) -> Result<bool> {
        let mut comments = self.write_guard()?;
        let before = comments.len();
        comments.retain(|c| c.id != comment_id);
        if comments.len() == before {
            return Ok(false);
        }
        self.persist(&comments)?;
        Ok(true)
    }

    fn delete_comments_for_family(&self, family_id: &str) -> Result<u32> {
        let mut comments = self.write_guard()?;
        let before = comments.len();
        comments.retain(|c| c.family_id != family_id);
        let removed = (before - comments.len()) as u32;
        if removed > 0 {
            self.persist(&comments)?;
        }
        Ok(removed)
    }

    fn replace_all(&self, new_comments: Vec<Comment>) -> Result<()> {
        let mut comments = self.write_guard()?;
        *comments = new_comments;
        self.persist(&comments)
    }
}
