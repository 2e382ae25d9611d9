//! Offset/size paging and sort order carried in `{prefix}_offset`,
//! `{prefix}_size` and `{prefix}_sort` query keys.

use crate::portal_const::{DEFAULT_PAGE_SIZE, MAX_EXPORT_ROWS};
use crate::query::{NavTarget, PageQuery};

/// `1234567` -> `"1,234,567"`.
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paging {
    pub prefix: String,
    pub offset: u64,
    pub size: u64,
    pub total: u64,
}

impl Paging {
    pub fn from_query(query: &PageQuery, prefix: &str, total: u64) -> Self {
        let read = |suffix: &str| {
            query
                .param(&format!("{prefix}_{suffix}"))
                .and_then(|v| v.parse::<u64>().ok())
        };
        Self {
            prefix: prefix.to_string(),
            offset: read("offset").unwrap_or(0),
            size: read("size").filter(|s| *s > 0).unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_EXPORT_ROWS),
            total,
        }
    }

    pub fn page_count(&self) -> u64 {
        self.total.div_ceil(self.size)
    }

    /// 1-based page containing `offset`.
    pub fn current_page(&self) -> u64 {
        (self.offset / self.size).saturating_add(1)
    }

    /// "Showing 1 - 20 of 1,234 cases"
    pub fn showing_text(&self, doc_type: &str) -> String {
        if self.total == 0 {
            return format!("Showing 0 {doc_type}");
        }
        let first = self.offset.saturating_add(1).min(self.total);
        let last = self.offset.saturating_add(self.size).min(self.total);
        format!(
            "Showing {} - {} of {} {}",
            format_count(first),
            format_count(last),
            format_count(self.total),
            doc_type
        )
    }

    pub fn offset_key(&self) -> String {
        format!("{}_offset", self.prefix)
    }

    pub fn size_key(&self) -> String {
        format!("{}_size", self.prefix)
    }

    /// Same page, but showing page `page` (1-based, clamped to the valid range).
    pub fn page_target(&self, pathname: &str, current: &PageQuery, page: u64) -> NavTarget {
        let page = page.clamp(1, self.page_count().max(1));
        let mut query = current.clone();
        query.set_param(self.offset_key(), (page - 1).saturating_mul(self.size).to_string());
        NavTarget::new(pathname, query)
    }

    /// Changing the page size goes back to the first page.
    pub fn size_target(&self, pathname: &str, current: &PageQuery, size: u64) -> NavTarget {
        let mut query = current.clone();
        query.set_param(self.size_key(), size.to_string());
        query.set_param(self.offset_key(), "0");
        NavTarget::new(pathname, query)
    }

    /// Page numbers to offer around the current one.
    pub fn page_window(&self, radius: u64) -> Vec<u64> {
        let count = self.page_count();
        if count == 0 {
            return Vec::new();
        }
        let current = self.current_page().min(count);
        let start = current.saturating_sub(radius).max(1);
        let end = current.saturating_add(radius).min(count);
        (start..=end).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub order: SortOrder,
}

impl SortSpec {
    /// Parses `field:asc` / `field:desc`; a bare field sorts ascending.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        let (field, order) = match raw.rsplit_once(':') {
            Some((field, "desc")) => (field, SortOrder::Desc),
            Some((field, "asc")) => (field, SortOrder::Asc),
            _ => (raw, SortOrder::Asc),
        };
        Some(Self { field: field.to_string(), order })
    }

    pub fn as_param(&self) -> String {
        let order = match self.order {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        };
        format!("{}:{}", self.field, order)
    }

    pub fn from_query(query: &PageQuery, prefix: &str) -> Option<Self> {
        query.param(&format!("{prefix}_sort")).and_then(Self::parse)
    }

    /// Sorting by `field` again flips the order; a new field starts descending.
    pub fn toggle_target(
        current_sort: Option<&SortSpec>,
        field: &str,
        prefix: &str,
        pathname: &str,
        current: &PageQuery,
    ) -> NavTarget {
        let order = match current_sort {
            Some(s) if s.field == field && s.order == SortOrder::Desc => SortOrder::Asc,
            _ => SortOrder::Desc,
        };
        let spec = SortSpec { field: field.to_string(), order };
        let mut query = current.clone();
        query.set_param(format!("{prefix}_sort"), spec.as_param());
        query.set_param(format!("{prefix}_offset"), "0");
        NavTarget::new(pathname, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn formats_counts_with_separators() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn paging_reads_prefixed_keys() {
        let mut query = PageQuery::default();
        query.set_param("cases_offset", "40");
        query.set_param("cases_size", "20");
        let paging = Paging::from_query(&query, "cases", 45);
        assert_eq!(paging.current_page(), 3);
        assert_eq!(paging.page_count(), 3);
        assert_eq!(paging.showing_text("cases"), "Showing 41 - 45 of 45 cases");

        let defaults = Paging::from_query(&PageQuery::default(), "cases", 1234);
        assert_eq!(defaults.size, DEFAULT_PAGE_SIZE);
        assert_eq!(defaults.showing_text("cases"), "Showing 1 - 20 of 1,234 cases");
    }

    #[test]
    fn page_targets_are_clamped() {
        let paging = Paging::from_query(&PageQuery::default(), "cases", 45);
        let target = paging.page_target("/exploration", &PageQuery::default(), 99);
        assert_eq!(target.query.param("cases_offset"), Some("40"));
        let target = paging.size_target("/exploration", &target.query, 40);
        assert_eq!(target.query.param("cases_offset"), Some("0"));
        assert_eq!(target.query.param("cases_size"), Some("40"));
    }

    #[test]
    fn hand_edited_offsets_do_not_overflow() {
        let query = PageQuery::from_query_string("cases_offset=18446744073709551615&cases_size=18446744073709551615").unwrap();
        let paging = Paging::from_query(&query, "cases", 45);
        assert_eq!(paging.size, MAX_EXPORT_ROWS);
        assert_eq!(paging.showing_text("cases"), "Showing 45 - 45 of 45 cases");
        assert_eq!(paging.page_window(2), vec![1]);
        let target = paging.page_target("/exploration", &query, 1);
        assert_eq!(target.query.param("cases_offset"), Some("0"));
    }

    #[test]
    fn page_window_stays_in_range() {
        let mut query = PageQuery::default();
        query.set_param("cases_offset", "0");
        assert_eq!(Paging::from_query(&query, "cases", 100).page_window(2), vec![1, 2, 3]);
        assert!(Paging::from_query(&query, "cases", 0).page_window(2).is_empty());
    }

    #[test]
    fn sort_toggles_direction_on_same_field() {
        let current = SortSpec::parse("summary.file_count:desc");
        assert_eq!(current, Some(SortSpec { field: "summary.file_count".to_string(), order: SortOrder::Desc }));
        let target = SortSpec::toggle_target(current.as_ref(), "summary.file_count", "cases", "/exploration", &PageQuery::default());
        assert_eq!(target.query.param("cases_sort"), Some("summary.file_count:asc"));
        let target = SortSpec::toggle_target(current.as_ref(), "primary_site", "cases", "/exploration", &PageQuery::default());
        assert_eq!(target.query.param("cases_sort"), Some("primary_site:desc"));
        assert_eq!(SortSpec::parse(""), None);
    }
}
