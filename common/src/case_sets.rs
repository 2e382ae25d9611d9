//! Row selection and named case sets built from it.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

pub fn toggle_selected(selected: &mut BTreeSet<String>, id: &str) {
    if !selected.remove(id) {
        selected.insert(id.to_string());
    }
}

pub fn all_selected(selected: &BTreeSet<String>, page_ids: &[String]) -> bool {
    !page_ids.is_empty() && page_ids.iter().all(|id| selected.contains(id))
}

/// Header checkbox: clears the page when it is fully selected, else selects it.
pub fn toggle_all_selected(selected: &mut BTreeSet<String>, page_ids: &[String]) {
    if all_selected(selected, page_ids) {
        for id in page_ids {
            selected.remove(id);
        }
    } else {
        selected.extend(page_ids.iter().cloned());
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseSetError {
    EmptyName,
    NameTaken(String),
    NoSuchSet(String),
    EmptySelection,
}

impl std::fmt::Display for CaseSetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Set name cannot be empty"),
            Self::NameTaken(name) => write!(f, "A set named \"{name}\" already exists"),
            Self::NoSuchSet(name) => write!(f, "No set named \"{name}\""),
            Self::EmptySelection => write!(f, "No cases selected"),
        }
    }
}

impl std::error::Error for CaseSetError {}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CaseSets {
    pub sets: BTreeMap<String, BTreeSet<String>>,
}

impl CaseSets {
    /// First unused "Custom Case Set N" name.
    pub fn next_default_name(&self) -> String {
        (1..)
            .map(|n| format!("Custom Case Set {n}"))
            .find(|name| !self.sets.contains_key(name))
            .unwrap_or_default()
    }

    pub fn create(&mut self, name: &str, ids: &BTreeSet<String>) -> Result<usize, CaseSetError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CaseSetError::EmptyName);
        }
        if ids.is_empty() {
            return Err(CaseSetError::EmptySelection);
        }
        if self.sets.contains_key(name) {
            return Err(CaseSetError::NameTaken(name.to_string()));
        }
        self.sets.insert(name.to_string(), ids.clone());
        Ok(ids.len())
    }

    /// Returns how many ids were new to the set.
    pub fn append(&mut self, name: &str, ids: &BTreeSet<String>) -> Result<usize, CaseSetError> {
        if ids.is_empty() {
            return Err(CaseSetError::EmptySelection);
        }
        let set = self.sets.get_mut(name).ok_or_else(|| CaseSetError::NoSuchSet(name.to_string()))?;
        let before = set.len();
        set.extend(ids.iter().cloned());
        Ok(set.len() - before)
    }

    /// Returns how many ids were removed from the set.
    pub fn remove_from(&mut self, name: &str, ids: &BTreeSet<String>) -> Result<usize, CaseSetError> {
        if ids.is_empty() {
            return Err(CaseSetError::EmptySelection);
        }
        let set = self.sets.get_mut(name).ok_or_else(|| CaseSetError::NoSuchSet(name.to_string()))?;
        let before = set.len();
        set.retain(|id| !ids.contains(id));
        Ok(before - set.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(ids: &[&str]) -> BTreeSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn header_toggle_selects_then_clears_the_page() {
        let page = vec!["a".to_string(), "b".to_string()];
        let mut selected = set(&["a", "z"]);
        toggle_all_selected(&mut selected, &page);
        assert_eq!(selected, set(&["a", "b", "z"]));
        toggle_all_selected(&mut selected, &page);
        assert_eq!(selected, set(&["z"]));
        toggle_selected(&mut selected, "z");
        assert!(selected.is_empty());
        assert!(!all_selected(&selected, &[]));
    }

    #[test]
    fn set_lifecycle() {
        let mut sets = CaseSets::default();
        let name = sets.next_default_name();
        assert_eq!(name, "Custom Case Set 1");
        assert_eq!(sets.create(&name, &set(&["a", "b"])), Ok(2));
        assert_eq!(sets.create(&name, &set(&["c"])), Err(CaseSetError::NameTaken(name.clone())));
        assert_eq!(sets.next_default_name(), "Custom Case Set 2");
        assert_eq!(sets.append(&name, &set(&["b", "c"])), Ok(1));
        assert_eq!(sets.remove_from(&name, &set(&["a", "x"])), Ok(1));
        assert_eq!(sets.sets[&name], set(&["b", "c"]));
        assert_eq!(sets.append("missing", &set(&["a"])), Err(CaseSetError::NoSuchSet("missing".to_string())));
        assert_eq!(sets.create("  ", &set(&["a"])), Err(CaseSetError::EmptyName));
        assert_eq!(sets.create("other", &BTreeSet::new()), Err(CaseSetError::EmptySelection));
    }
}
