//! Column model and row projection of the explore-cases table.

use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use crate::case_record::{Bucket, CaseHits, CaseRecord};
use crate::filters::{FilterExpr, FilterField, MergeMode, Predicate};
use crate::pagination::format_count;
use crate::portal_const::{
    CASES_PATH, DATA_CATEGORIES, DataCategoryDef, EXPLORATION_PATH, REPOSITORY_PATH,
    data_category_by_key,
};
use crate::query::{NavTarget, PageQuery, make_filter_query, merge_query};

pub const EMPTY_TABLE_MESSAGE: &str = "No case data found.";
pub const TABLE_DOM_ID: &str = "explore-case-table";
pub const DATA_CATEGORIES_HEADING: &str = "Available Files per Data Category";
/// Prefix of the table's `_offset`, `_size` and `_sort` query keys.
pub const CASES_TABLE_PREFIX: &str = "cases";

/// Which cell renderer a column uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Selection,
    CaseUuid,
    SubmitterId,
    Project,
    PrimarySite,
    Gender,
    Files,
    /// Spanning header over the per-category columns; has no cells.
    DataCategories,
    DataCategory(&'static str),
    Mutations,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    pub id: String,
    pub name: String,
    pub kind: ColumnKind,
    /// API field, when it differs from the id.
    pub field: Option<&'static str>,
    pub sortable: bool,
    pub downloadable: bool,
    pub hidden_by_default: bool,
    pub sub_heading: bool,
}

impl ColumnDef {
    fn new(id: &str, name: &str, kind: ColumnKind) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            kind,
            field: None,
            sortable: false,
            downloadable: false,
            hidden_by_default: false,
            sub_heading: false,
        }
    }

    fn field(mut self, field: &'static str) -> Self {
        self.field = Some(field);
        self
    }

    fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    fn downloadable(mut self) -> Self {
        self.downloadable = true;
        self
    }

    fn hidden(mut self) -> Self {
        self.hidden_by_default = true;
        self
    }

    fn sub_heading(mut self) -> Self {
        self.sub_heading = true;
        self
    }

    pub fn has_cell(&self) -> bool {
        self.kind != ColumnKind::DataCategories
    }

    /// Name of the field sent to the API for sorting and exports.
    pub fn api_field(&self) -> &str {
        self.field.unwrap_or(&self.id)
    }

    pub fn data_category(&self) -> Option<&'static DataCategoryDef> {
        match self.kind {
            ColumnKind::DataCategory(key) => data_category_by_key(key),
            _ => None,
        }
    }
}

/// Canonical column definitions, in their default order.
pub fn explore_case_columns() -> Vec<ColumnDef> {
    let mut columns = vec![
        ColumnDef::new("selected", "Select", ColumnKind::Selection),
        ColumnDef::new("case_id", "Case UUID", ColumnKind::CaseUuid).downloadable().sortable().hidden(),
        ColumnDef::new("submitter_id", "Case ID", ColumnKind::SubmitterId).downloadable().sortable(),
        ColumnDef::new("project.project_id", "Project", ColumnKind::Project).downloadable().sortable(),
        ColumnDef::new("primary_site", "Primary Site", ColumnKind::PrimarySite).downloadable().sortable(),
        ColumnDef::new("demographic.gender", "Gender", ColumnKind::Gender).downloadable().sortable(),
        ColumnDef::new("summary.file_count", "Files", ColumnKind::Files).downloadable().sortable(),
        ColumnDef::new("data_categories", DATA_CATEGORIES_HEADING, ColumnKind::DataCategories),
    ];
    columns.extend(DATA_CATEGORIES.iter().map(|def| {
        ColumnDef::new(
            &format!("data_category.{}", def.key.to_lowercase()),
            def.abbr,
            ColumnKind::DataCategory(def.key),
        )
        .field("summary.data_categories.file_count")
        .sub_heading()
    }));
    columns.push(ColumnDef::new("num_mutations", "# Mutations", ColumnKind::Mutations));
    columns
}

pub fn default_column_ids(columns: &[ColumnDef]) -> Vec<String> {
    columns.iter().filter(|c| !c.hidden_by_default).map(|c| c.id.clone()).collect()
}

/// Keeps sub-heading ids together right after their spanning column, in
/// their stored order. Without a spanning column, or without any sub-heading,
/// neither is kept, so headings and body cells stay aligned.
pub fn group_sub_headings(columns: &[ColumnDef], ids: &[String]) -> Vec<String> {
    let def = |id: &String| columns.iter().find(|c| &c.id == id);
    let is_sub = |id: &String| def(id).is_some_and(|c| c.sub_heading);
    let is_span = |id: &String| def(id).is_some_and(|c| c.kind == ColumnKind::DataCategories);

    let subs: Vec<String> = ids.iter().filter(|id| is_sub(id)).cloned().collect();
    let mut out = Vec::with_capacity(ids.len());
    for id in ids.iter().filter(|id| !is_sub(id)) {
        if is_span(id) {
            if subs.is_empty() {
                continue;
            }
            out.push(id.clone());
            out.extend(subs.iter().cloned());
        } else {
            out.push(id.clone());
        }
    }
    out
}

/// Canonical definitions re-sorted by position in `ids`, then restricted to `ids`.
pub fn ordered_columns(columns: &[ColumnDef], ids: &[String]) -> Vec<ColumnDef> {
    let position = |c: &ColumnDef| ids.iter().position(|id| id == &c.id);
    let mut sorted = columns.to_vec();
    sorted.sort_by_key(|c| position(c));
    sorted.into_iter().filter(|c| position(c).is_some()).collect()
}

/// Mutation counts keyed by case id. No aggregation means no counts.
pub fn ssm_counts_from_buckets(buckets: Option<&[Bucket]>) -> BTreeMap<String, u64> {
    buckets
        .unwrap_or_default()
        .iter()
        .map(|b| (b.key.clone(), b.doc_count))
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeadingCell {
    pub column: ColumnDef,
    pub colspan: usize,
    pub rowspan: usize,
}

/// Everything a single cell renderer gets to see.
#[derive(Debug, Clone, PartialEq)]
pub struct CellContext {
    pub column: ColumnDef,
    pub node: Rc<CaseRecord>,
    pub index: usize,
    pub total: u64,
    pub ssm_count: Option<u64>,
    pub ssm_counts_loading: bool,
    /// The count request failed; counts are unknown rather than zero.
    pub ssm_counts_unavailable: bool,
    pub filters: Option<FilterExpr>,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BodyRow {
    pub key: String,
    pub index: usize,
    pub highlighted: bool,
    pub cells: Vec<CellContext>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableProjection {
    pub total: u64,
    pub columns: Vec<ColumnDef>,
    pub headings: Vec<HeadingCell>,
    pub subheadings: Vec<ColumnDef>,
    pub rows: Vec<BodyRow>,
    pub download_fields: Vec<String>,
    pub sort_options: Vec<ColumnDef>,
}

impl TableProjection {
    pub fn page_case_ids(&self) -> Vec<String> {
        self.rows.iter().map(|r| r.key.clone()).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExploreTableView {
    Empty,
    Table(TableProjection),
}

pub struct ExploreTableInput<'a> {
    pub columns: &'a [ColumnDef],
    pub column_ids: &'a [String],
    pub hits: &'a CaseHits,
    pub ssm_counts: &'a BTreeMap<String, u64>,
    pub ssm_counts_loading: bool,
    pub ssm_counts_unavailable: bool,
    pub filters: Option<&'a FilterExpr>,
    pub selected_ids: &'a BTreeSet<String>,
}

pub fn project_explore_table(input: ExploreTableInput<'_>) -> ExploreTableView {
    if input.hits.edges.is_empty() {
        return ExploreTableView::Empty;
    }
    let columns = ordered_columns(input.columns, &group_sub_headings(input.columns, input.column_ids));

    let subheadings: Vec<ColumnDef> = columns.iter().filter(|c| c.sub_heading).cloned().collect();
    let has_subheadings = !subheadings.is_empty();
    let headings = columns
        .iter()
        .filter(|c| !c.sub_heading)
        .map(|c| match c.kind {
            ColumnKind::DataCategories => HeadingCell { column: c.clone(), colspan: subheadings.len().max(1), rowspan: 1 },
            _ => HeadingCell { column: c.clone(), colspan: 1, rowspan: if has_subheadings { 2 } else { 1 } },
        })
        .collect();

    let cell_columns: Vec<&ColumnDef> = columns.iter().filter(|c| c.has_cell()).collect();
    let rows = input
        .hits
        .edges
        .iter()
        .enumerate()
        .map(|(index, edge)| {
            let node = Rc::new(edge.node.clone());
            let selected = input.selected_ids.contains(&node.case_id);
            let ssm_count = input.ssm_counts.get(&node.case_id).copied();
            BodyRow {
                key: node.case_id.clone(),
                index,
                highlighted: selected,
                cells: cell_columns
                    .iter()
                    .map(|column| CellContext {
                        column: (*column).clone(),
                        node: node.clone(),
                        index,
                        total: input.hits.total,
                        ssm_count,
                        ssm_counts_loading: input.ssm_counts_loading,
                        ssm_counts_unavailable: input.ssm_counts_unavailable,
                        filters: input.filters.cloned(),
                        selected,
                    })
                    .collect(),
            }
        })
        .collect();

    ExploreTableView::Table(TableProjection {
        total: input.hits.total,
        download_fields: columns.iter().filter(|c| c.downloadable).map(|c| c.api_field().to_string()).collect(),
        sort_options: columns.iter().filter(|c| c.sortable).cloned().collect(),
        columns,
        headings,
        subheadings,
        rows,
    })
}

/// Plain-text value of a cell, as shown in the table and written to exports.
pub fn cell_text(cell: &CellContext) -> String {
    let node = &cell.node;
    let or_dash = |v: Option<&String>| v.cloned().unwrap_or_else(|| "--".to_string());
    match cell.column.kind {
        ColumnKind::Selection | ColumnKind::DataCategories => String::new(),
        ColumnKind::CaseUuid => node.case_id.clone(),
        ColumnKind::SubmitterId => node.submitter_id.clone(),
        ColumnKind::Project => node.project.project_id.clone(),
        ColumnKind::PrimarySite => or_dash(node.primary_site.as_ref()),
        ColumnKind::Gender => or_dash(node.demographic.as_ref().and_then(|d| d.gender.as_ref())),
        ColumnKind::Files => format_count(node.summary.file_count),
        ColumnKind::DataCategory(key) => data_category_by_key(key)
            .map(|def| format_count(node.data_category_count(def.full)))
            .unwrap_or_default(),
        ColumnKind::Mutations => match (cell.ssm_counts_loading, cell.ssm_counts_unavailable, cell.ssm_count) {
            (true, _, _) => "...".to_string(),
            (false, true, _) => "--".to_string(),
            (false, false, Some(count)) => format_count(count),
            (false, false, None) => "0".to_string(),
        },
    }
}

/// Where a cell links to, if anywhere.
pub fn cell_link(cell: &CellContext) -> Option<NavTarget> {
    let node = &cell.node;
    let case_files = |extra: Option<Predicate>| {
        let mut predicates = vec![Predicate::new(FilterField::CaseId, &node.case_id)];
        predicates.extend(extra);
        let mut query = make_filter_query(predicates);
        query.search_table_tab = Some("files".to_string());
        NavTarget::new(REPOSITORY_PATH, query)
    };
    match cell.column.kind {
        ColumnKind::SubmitterId | ColumnKind::CaseUuid => Some(case_page_link(&node.case_id)),
        ColumnKind::Project => Some(crate::case_view::project_link(&node.project.project_id)),
        ColumnKind::Files if node.summary.file_count > 0 => Some(case_files(None)),
        ColumnKind::DataCategory(key) => {
            let def = data_category_by_key(key)?;
            if node.data_category_count(def.full) == 0 {
                return None;
            }
            Some(case_files(Some(Predicate::new(FilterField::DataCategory, vec![def.full]))))
        }
        ColumnKind::Mutations if cell.ssm_count.unwrap_or(0) > 0 => {
            let case_filter = make_filter_query([Predicate::new(FilterField::CaseId, &node.case_id)]);
            let mut query = merge_query(
                &case_filter,
                &PageQuery::with_filters(cell.filters.clone()),
                MergeMode::Add,
            );
            query.search_table_tab = Some("mutations".to_string());
            Some(NavTarget::new(EXPLORATION_PATH, query))
        }
        _ => None,
    }
}

pub fn case_page_link(case_id: &str) -> NavTarget {
    NavTarget::path(format!("{CASES_PATH}/{case_id}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case_record::{CaseSummary, DataCategoryCount, Edge};
    use crate::filters::FilterValue;
    use pretty_assertions::assert_eq;

    fn hits(ids: &[&str]) -> CaseHits {
        CaseHits {
            total: 100,
            edges: ids
                .iter()
                .map(|id| Edge {
                    node: CaseRecord {
                        case_id: id.to_string(),
                        submitter_id: format!("sub-{id}"),
                        summary: CaseSummary {
                            file_count: 3,
                            data_categories: vec![DataCategoryCount { data_category: "Clinical".to_string(), file_count: 3 }],
                            ..Default::default()
                        },
                        ..Default::default()
                    },
                })
                .collect(),
        }
    }

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn project(hits: &CaseHits, column_ids: &[String], counts: &BTreeMap<String, u64>, selected: &BTreeSet<String>) -> ExploreTableView {
        let columns = explore_case_columns();
        project_explore_table(ExploreTableInput {
            columns: &columns,
            column_ids,
            hits,
            ssm_counts: counts,
            ssm_counts_loading: false,
            ssm_counts_unavailable: false,
            filters: None,
            selected_ids: selected,
        })
    }

    #[test]
    fn zero_edges_is_the_empty_view() {
        let view = project(&hits(&[]), &ids(&["submitter_id"]), &BTreeMap::new(), &BTreeSet::new());
        assert_eq!(view, ExploreTableView::Empty);
    }

    #[test]
    fn header_order_follows_persisted_ids_for_every_permutation() {
        let permutations = [
            ["primary_site", "submitter_id", "summary.file_count"],
            ["summary.file_count", "primary_site", "submitter_id"],
            ["submitter_id", "summary.file_count", "primary_site"],
        ];
        for order in permutations {
            let view = project(&hits(&["c1"]), &ids(&order), &BTreeMap::new(), &BTreeSet::new());
            let ExploreTableView::Table(table) = view else { panic!("expected a table") };
            let heading_ids: Vec<_> = table.headings.iter().map(|h| h.column.id.as_str()).collect();
            assert_eq!(heading_ids, order.to_vec());
            let cell_ids: Vec<_> = table.rows[0].cells.iter().map(|c| c.column.id.as_str()).collect();
            assert_eq!(cell_ids, order.to_vec());
        }
    }

    #[test]
    fn unknown_and_unselected_columns_are_dropped() {
        let view = project(&hits(&["c1"]), &ids(&["no_such_column", "project.project_id"]), &BTreeMap::new(), &BTreeSet::new());
        let ExploreTableView::Table(table) = view else { panic!("expected a table") };
        assert_eq!(table.columns.len(), 1);
        assert_eq!(table.download_fields, vec!["project.project_id".to_string()]);
    }

    #[test]
    fn data_categories_split_into_heading_and_subheadings() {
        let column_ids = ids(&["submitter_id", "data_categories", "data_category.clinical", "data_category.biospecimen"]);
        let view = project(&hits(&["c1"]), &column_ids, &BTreeMap::new(), &BTreeSet::new());
        let ExploreTableView::Table(table) = view else { panic!("expected a table") };
        assert_eq!(table.headings.len(), 2);
        assert_eq!(table.headings[0].rowspan, 2);
        assert_eq!(table.headings[1].colspan, 2);
        assert_eq!(table.subheadings.len(), 2);
        // the spanning header has no body cell
        assert_eq!(table.rows[0].cells.len(), 3);
        assert_eq!(cell_text(&table.rows[0].cells[1]), "3");
        assert_eq!(cell_text(&table.rows[0].cells[2]), "0");
        assert!(cell_link(&table.rows[0].cells[1]).is_some());
        assert!(cell_link(&table.rows[0].cells[2]).is_none());
    }

    #[test]
    fn rows_carry_mutation_counts_and_selection() {
        let buckets = vec![Bucket { key: "c2".to_string(), doc_count: 1234 }];
        let counts = ssm_counts_from_buckets(Some(buckets.as_slice()));
        let selected = BTreeSet::from(["c2".to_string()]);
        let view = project(&hits(&["c1", "c2"]), &ids(&["selected", "num_mutations"]), &counts, &selected);
        let ExploreTableView::Table(table) = view else { panic!("expected a table") };

        assert_eq!(table.page_case_ids(), ids(&["c1", "c2"]));
        assert!(!table.rows[0].highlighted);
        assert!(table.rows[1].highlighted);
        assert!(table.rows[1].cells[0].selected);
        assert_eq!(table.rows[1].cells[1].index, 1);
        assert_eq!(table.rows[1].cells[1].total, 100);
        assert_eq!(cell_text(&table.rows[0].cells[1]), "0");
        assert_eq!(cell_text(&table.rows[1].cells[1]), "1,234");

        let link = cell_link(&table.rows[1].cells[1]).unwrap();
        assert_eq!(link.pathname, "/exploration");
        assert_eq!(
            link.query.filters.unwrap().values_for(FilterField::CaseId).unwrap(),
            &[FilterValue::from("c2")]
        );
    }

    #[test]
    fn loading_counts_render_as_ellipsis() {
        let columns = explore_case_columns();
        let hits = hits(&["c1"]);
        let view = project_explore_table(ExploreTableInput {
            columns: &columns,
            column_ids: &ids(&["num_mutations"]),
            hits: &hits,
            ssm_counts: &BTreeMap::new(),
            ssm_counts_loading: true,
            ssm_counts_unavailable: false,
            filters: None,
            selected_ids: &BTreeSet::new(),
        });
        let ExploreTableView::Table(table) = view else { panic!("expected a table") };
        assert_eq!(cell_text(&table.rows[0].cells[0]), "...");
    }

    #[test]
    fn failed_counts_render_as_unknown() {
        let columns = explore_case_columns();
        let hits = hits(&["c1"]);
        let view = project_explore_table(ExploreTableInput {
            columns: &columns,
            column_ids: &ids(&["num_mutations"]),
            hits: &hits,
            ssm_counts: &BTreeMap::new(),
            ssm_counts_loading: false,
            ssm_counts_unavailable: true,
            filters: None,
            selected_ids: &BTreeSet::new(),
        });
        let ExploreTableView::Table(table) = view else { panic!("expected a table") };
        assert_eq!(cell_text(&table.rows[0].cells[0]), "--");
        assert!(cell_link(&table.rows[0].cells[0]).is_none());
    }

    #[test]
    fn stray_subheadings_stay_under_their_group() {
        let column_ids = ids(&["data_category.clinical", "submitter_id", "data_categories", "num_mutations", "data_category.seq"]);
        let view = project(&hits(&["c1"]), &column_ids, &BTreeMap::new(), &BTreeSet::new());
        let ExploreTableView::Table(table) = view else { panic!("expected a table") };
        let heading_ids: Vec<_> = table.headings.iter().map(|h| h.column.id.as_str()).collect();
        assert_eq!(heading_ids, vec!["submitter_id", "data_categories", "num_mutations"]);
        let cell_ids: Vec<_> = table.rows[0].cells.iter().map(|c| c.column.id.as_str()).collect();
        assert_eq!(cell_ids, vec!["submitter_id", "data_category.clinical", "data_category.seq", "num_mutations"]);
    }

    #[test]
    fn subheadings_without_their_group_are_dropped() {
        let hidden_span = project(&hits(&["c1"]), &ids(&["submitter_id", "data_category.clinical"]), &BTreeMap::new(), &BTreeSet::new());
        let ExploreTableView::Table(table) = hidden_span else { panic!("expected a table") };
        assert!(table.subheadings.is_empty());
        assert_eq!(table.rows[0].cells.len(), 1);
        assert_eq!(table.headings[0].rowspan, 1);

        let empty_span = project(&hits(&["c1"]), &ids(&["submitter_id", "data_categories"]), &BTreeMap::new(), &BTreeSet::new());
        let ExploreTableView::Table(table) = empty_span else { panic!("expected a table") };
        assert_eq!(table.headings.len(), 1);
    }

    #[test]
    fn missing_aggregation_gives_no_counts() {
        assert!(ssm_counts_from_buckets(None).is_empty());
    }

    #[test]
    fn default_columns_hide_the_case_uuid() {
        let defaults = default_column_ids(&explore_case_columns());
        assert!(!defaults.contains(&"case_id".to_string()));
        assert_eq!(defaults.first().map(String::as_str), Some("selected"));
        assert_eq!(defaults.last().map(String::as_str), Some("num_mutations"));
    }
}
