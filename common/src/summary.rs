//! File-count rows for the case page summary cards.
//!
//! Experimental strategies are a curated highlight list: a row appears only
//! when the case actually has files for that strategy. Data categories are
//! always listed in full, with a zero row where the case has nothing.

use crate::case_record::CaseRecord;
use crate::filters::{FilterField, MergeMode, Predicate};
use crate::portal_const::{DATA_CATEGORIES, EXPERIMENTAL_STRATEGIES, REPOSITORY_PATH};
use crate::query::{NavTarget, PageQuery, make_filter_query, merge_query};

/// What goes in the "Files" column.
#[derive(Debug, Clone, PartialEq)]
pub enum CountCell {
    Link { count: u64, target: NavTarget },
    Zero,
}

impl CountCell {
    pub fn text(&self) -> String {
        match self {
            Self::Link { count, .. } => count.to_string(),
            Self::Zero => "0".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub title: String,
    pub body: String,
}

impl Tooltip {
    fn file_count(title: &str, count: u64) -> Self {
        let plural = if count > 1 { "s" } else { "" };
        Self { title: title.to_string(), body: format!("{count} file{plural}") }
    }

    pub fn text(&self) -> String {
        format!("{}\n{}", self.title, self.body)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub id: String,
    pub file_count_value: u64,
    pub file_count: CountCell,
    pub tooltip: Tooltip,
    link_query: PageQuery,
}

impl SummaryRow {
    fn new(case_id: &str, field: FilterField, id: String, count: u64) -> Self {
        let link_query = make_filter_query([
            Predicate::new(FilterField::CaseId, case_id),
            Predicate::new(field, vec![id.clone()]),
        ]);
        let file_count = if count > 0 {
            CountCell::Link {
                count,
                target: NavTarget::new(REPOSITORY_PATH, link_query.clone()),
            }
        } else {
            CountCell::Zero
        };
        Self {
            tooltip: Tooltip::file_count(&id, count),
            id,
            file_count_value: count,
            file_count,
            link_query,
        }
    }

    /// Where a click on the row goes: the file listing, with the row's
    /// filters replacing the same fields of the current page query.
    pub fn click_target(&self, current: &PageQuery) -> NavTarget {
        NavTarget::new(REPOSITORY_PATH, merge_query(&self.link_query, current, MergeMode::Replace))
    }

    pub fn link_query(&self) -> &PageQuery {
        &self.link_query
    }
}

/// One row per canonical strategy present on the case (case-insensitive).
pub fn experimental_strategy_rows(case: &CaseRecord) -> Vec<SummaryRow> {
    EXPERIMENTAL_STRATEGIES
        .iter()
        .filter_map(|name| {
            case.summary
                .experimental_strategies
                .iter()
                .find(|s| s.experimental_strategy.eq_ignore_ascii_case(name))
        })
        .map(|s| {
            SummaryRow::new(
                &case.case_id,
                FilterField::ExperimentalStrategy,
                s.experimental_strategy.clone(),
                s.file_count,
            )
        })
        .collect()
}

/// One row per canonical data category, zero-filled.
pub fn data_category_rows(case: &CaseRecord) -> Vec<SummaryRow> {
    DATA_CATEGORIES
        .iter()
        .map(|def| {
            let count = case.data_category_count(def.full);
            SummaryRow::new(&case.case_id, FilterField::DataCategory, def.full.to_string(), count)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case_record::{CaseSummary, DataCategoryCount, ExperimentalStrategyCount};
    use crate::filters::FilterValue;
    use pretty_assertions::assert_eq;

    fn case_with(strategies: &[(&str, u64)], categories: &[(&str, u64)]) -> CaseRecord {
        CaseRecord {
            case_id: "case-1".to_string(),
            summary: CaseSummary {
                file_count: 0,
                experimental_strategies: strategies
                    .iter()
                    .map(|(n, c)| ExperimentalStrategyCount { experimental_strategy: n.to_string(), file_count: *c })
                    .collect(),
                data_categories: categories
                    .iter()
                    .map(|(n, c)| DataCategoryCount { data_category: n.to_string(), file_count: *c })
                    .collect(),
            },
            ..Default::default()
        }
    }

    #[test]
    fn strategies_are_filtered_not_filled() {
        let case = case_with(&[("rna-seq", 4), ("WXS", 1), ("Made-Up-Seq", 9)], &[]);
        let rows = experimental_strategy_rows(&case);
        let ids: Vec<_> = rows.iter().map(|r| r.id.as_str()).collect();
        // canonical order, record spelling
        assert_eq!(ids, vec!["WXS", "rna-seq"]);
        assert_eq!(rows[1].file_count_value, 4);
        assert_eq!(rows[0].tooltip.body, "1 file");
        assert_eq!(rows[1].tooltip.body, "4 files");
    }

    #[test]
    fn zero_count_strategy_does_not_link() {
        let case = case_with(&[("WGS", 0), ("WXS", 3)], &[]);
        let rows = experimental_strategy_rows(&case);
        assert_eq!(rows[0].id, "WGS");
        assert_eq!(rows[0].file_count, CountCell::Zero);
        assert!(matches!(rows[1].file_count, CountCell::Link { count: 3, .. }));
    }

    #[test]
    fn categories_are_filled_not_filtered() {
        let case = case_with(&[], &[("Clinical", 2), ("Not A Category", 5)]);
        let rows = data_category_rows(&case);
        assert_eq!(rows.len(), DATA_CATEGORIES.len());
        let clinical = rows.iter().find(|r| r.id == "Clinical").unwrap();
        assert_eq!(clinical.file_count.text(), "2");
        assert!(matches!(clinical.file_count, CountCell::Link { count: 2, .. }));
        let bio = rows.iter().find(|r| r.id == "Biospecimen").unwrap();
        assert_eq!(bio.file_count, CountCell::Zero);
        assert_eq!(bio.file_count_value, 0);

        let empty = data_category_rows(&CaseRecord::default());
        assert_eq!(empty.len(), DATA_CATEGORIES.len());
    }

    #[test]
    fn click_target_replaces_case_filters_and_keeps_other_query_keys() {
        let case = case_with(&[("WGS", 3)], &[]);
        let row = &experimental_strategy_rows(&case)[0];
        let mut current = make_filter_query([
            Predicate::new(FilterField::CaseId, "another-case"),
            Predicate::new(FilterField::PrimarySite, "Lung"),
        ]);
        current.bio_id = Some("s1".to_string());

        let target = row.click_target(&current);
        assert_eq!(target.pathname, "/repository");
        let filters = target.query.filters.as_ref().unwrap();
        assert_eq!(filters.values_for(FilterField::CaseId).unwrap(), &[FilterValue::from("case-1")]);
        assert_eq!(filters.values_for(FilterField::ExperimentalStrategy).unwrap(), &[FilterValue::from("WGS")]);
        assert_eq!(filters.values_for(FilterField::PrimarySite).unwrap(), &[FilterValue::from("Lung")]);
        assert_eq!(target.query.bio_id.as_deref(), Some("s1"));
    }
}
