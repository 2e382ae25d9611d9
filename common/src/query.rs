//! Navigation query objects and their merge rules.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::filters::{FilterExpr, MergeMode, Predicate, make_filter, merge_filters};
use crate::uri::{
    StateParseError, decode_state, encode_query_pairs, encode_state, parse_query_pairs,
    remove_empty_keys,
};

pub const KEY_FILTERS: &str = "filters";
pub const KEY_FACET_TAB: &str = "facetTab";
pub const KEY_SEARCH_TABLE_TAB: &str = "searchTableTab";
pub const KEY_BIO_ID: &str = "bioId";

/// Query parameters of a portal page.
///
/// Keys the portal interprets get their own field; anything else (offsets,
/// sort orders of other tables) is carried along in `params`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PageQuery {
    pub filters: Option<FilterExpr>,
    pub facet_tab: Option<String>,
    pub search_table_tab: Option<String>,
    pub bio_id: Option<String>,
    pub params: BTreeMap<String, String>,
}

impl PageQuery {
    pub fn with_filters(filters: Option<FilterExpr>) -> Self {
        Self { filters, ..Default::default() }
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    pub fn set_param(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.params.insert(key.into(), value.into());
    }

    /// Key/value pairs in URL order, with empty keys removed.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            (KEY_FILTERS.to_string(), self.filters.as_ref().map(encode_state)),
            (KEY_FACET_TAB.to_string(), self.facet_tab.clone()),
            (KEY_SEARCH_TABLE_TAB.to_string(), self.search_table_tab.clone()),
            (KEY_BIO_ID.to_string(), self.bio_id.clone()),
        ];
        pairs.extend(self.params.iter().map(|(k, v)| (k.clone(), Some(v.clone()))));
        remove_empty_keys(pairs)
    }

    pub fn to_query_string(&self) -> String {
        encode_query_pairs(&self.to_query_pairs())
    }

    /// Parses a URL query. Only a malformed `filters` value is an error.
    pub fn from_query_string(query: &str) -> Result<Self, StateParseError> {
        let mut parsed = Self::default();
        for (key, value) in parse_query_pairs(query) {
            if value.is_empty() {
                continue;
            }
            match key.as_str() {
                KEY_FILTERS => parsed.filters = Some(decode_state(&value)?),
                KEY_FACET_TAB => parsed.facet_tab = Some(value),
                KEY_SEARCH_TABLE_TAB => parsed.search_table_tab = Some(value),
                KEY_BIO_ID => parsed.bio_id = Some(value),
                _ => {
                    parsed.params.insert(key, value);
                }
            }
        }
        Ok(parsed)
    }
}

/// Wrapped form of [`make_filter`]: a query whose only key is `filters`.
pub fn make_filter_query(predicates: impl IntoIterator<Item = Predicate>) -> PageQuery {
    PageQuery::with_filters(make_filter(predicates))
}

/// Overlays `new` on `existing`. Keys set in `new` win, unrelated keys of
/// `existing` survive, and filters combine according to `mode`.
pub fn merge_query(new: &PageQuery, existing: &PageQuery, mode: MergeMode) -> PageQuery {
    let mut params = existing.params.clone();
    params.extend(
        new.params
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, v)| (k.clone(), v.clone())),
    );
    PageQuery {
        filters: merge_filters(new.filters.as_ref(), existing.filters.as_ref(), mode),
        facet_tab: overlay(&new.facet_tab, &existing.facet_tab),
        search_table_tab: overlay(&new.search_table_tab, &existing.search_table_tab),
        bio_id: overlay(&new.bio_id, &existing.bio_id),
        params,
    }
}

fn overlay(new: &Option<String>, existing: &Option<String>) -> Option<String> {
    new.clone()
        .filter(|v| !v.is_empty())
        .or_else(|| existing.clone())
}

/// A `{pathname, query}` pair handed to the router.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NavTarget {
    pub pathname: String,
    pub query: PageQuery,
}

impl NavTarget {
    pub fn new(pathname: impl Into<String>, query: PageQuery) -> Self {
        Self { pathname: pathname.into(), query }
    }

    pub fn path(pathname: impl Into<String>) -> Self {
        Self::new(pathname, PageQuery::default())
    }

    pub fn href(&self) -> String {
        let query = self.query.to_query_string();
        if query.is_empty() {
            self.pathname.clone()
        } else {
            format!("{}?{}", self.pathname, query)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{FilterField, FilterValue};
    use pretty_assertions::assert_eq;

    #[test]
    fn replace_merge_keeps_unrelated_parameters() {
        let mut existing = make_filter_query([
            Predicate::new(FilterField::PrimarySite, "Lung"),
            Predicate::new(FilterField::CaseId, "old-case"),
        ]);
        existing.bio_id = Some("sample-1".to_string());
        existing.set_param("files_offset", "20");

        let new = make_filter_query([Predicate::new(FilterField::CaseId, "new-case")]);
        let merged = merge_query(&new, &existing, MergeMode::Replace);

        let filters = merged.filters.as_ref().unwrap();
        assert_eq!(filters.values_for(FilterField::CaseId).unwrap(), &[FilterValue::from("new-case")]);
        assert_eq!(filters.values_for(FilterField::PrimarySite).unwrap(), &[FilterValue::from("Lung")]);
        assert_eq!(merged.bio_id.as_deref(), Some("sample-1"));
        assert_eq!(merged.param("files_offset"), Some("20"));
    }

    #[test]
    fn new_keys_override_existing_ones() {
        let existing = PageQuery { facet_tab: Some("cases".to_string()), ..Default::default() };
        let new = PageQuery { facet_tab: Some("files".to_string()), ..Default::default() };
        assert_eq!(merge_query(&new, &existing, MergeMode::Replace).facet_tab.as_deref(), Some("files"));
    }

    #[test]
    fn empty_new_keys_leave_existing_ones() {
        let mut existing = PageQuery { facet_tab: Some("files".to_string()), ..Default::default() };
        existing.set_param("cases_offset", "40");
        let mut new = PageQuery { facet_tab: Some(String::new()), ..Default::default() };
        new.set_param("cases_offset", "");

        let merged = merge_query(&new, &existing, MergeMode::Replace);
        assert_eq!(merged.facet_tab.as_deref(), Some("files"));
        assert_eq!(merged.param("cases_offset"), Some("40"));
        assert_eq!(merged.to_query_string(), "facetTab=files&cases_offset=40");
    }

    #[test]
    fn empty_keys_are_not_serialized() {
        let query = PageQuery {
            facet_tab: Some(String::new()),
            search_table_tab: Some("files".to_string()),
            ..Default::default()
        };
        assert_eq!(query.to_query_string(), "searchTableTab=files");
        assert_eq!(NavTarget::new("/repository", query).href(), "/repository?searchTableTab=files");
        assert_eq!(NavTarget::path("/annotations/a1").href(), "/annotations/a1");
    }

    #[test]
    fn parses_its_own_query_string() {
        let mut query = make_filter_query([Predicate::new(FilterField::CaseId, "c1")]);
        query.search_table_tab = Some("mutations".to_string());
        query.set_param("cases_offset", "40");
        let parsed = PageQuery::from_query_string(&query.to_query_string()).unwrap();
        assert_eq!(parsed, query);
    }

    #[test]
    fn malformed_filters_fail_to_parse() {
        assert!(PageQuery::from_query_string("filters=%%%").is_err());
        assert_eq!(PageQuery::from_query_string("").unwrap(), PageQuery::default());
    }
}
