//! File cart contents and the bulk actions the case page dispatches.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::case_record::FileRecord;
use crate::portal_const::MAX_CART_SIZE;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CartState {
    pub files: BTreeMap<String, FileRecord>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    AddAll(Vec<FileRecord>),
    Remove(Vec<FileRecord>),
}

/// What a dispatched action actually changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CartUpdate {
    pub added: usize,
    pub removed: usize,
    /// Files left out because the cart was full.
    pub rejected: usize,
}

impl CartState {
    pub fn contains(&self, file_id: &str) -> bool {
        self.files.contains_key(file_id)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn total_size(&self) -> u64 {
        self.files.values().map(|f| f.file_size).sum()
    }

    pub fn apply(&mut self, action: CartAction) -> CartUpdate {
        let mut update = CartUpdate::default();
        match action {
            CartAction::AddAll(files) => {
                for file in files {
                    if self.files.contains_key(&file.file_id) {
                        continue;
                    }
                    if self.files.len() >= MAX_CART_SIZE {
                        update.rejected += 1;
                        continue;
                    }
                    self.files.insert(file.file_id.clone(), file);
                    update.added += 1;
                }
            }
            CartAction::Remove(files) => {
                for file in files {
                    if self.files.remove(&file.file_id).is_some() {
                        update.removed += 1;
                    }
                }
            }
        }
        update
    }
}
