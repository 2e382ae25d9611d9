//! Derived values of the case page: cart toggle, count-card links, the
//! summary table and the somatic-mutation section.

use crate::cart::{CartAction, CartState};
use crate::case_record::{AnnotationHits, CaseRecord, FileRecord};
use crate::filters::{FilterExpr, FilterField, Predicate, make_filter};
use crate::portal_const::{ANNOTATIONS_PATH, EXPLORATION_PATH, PROJECTS_PATH, REPOSITORY_PATH};
use crate::query::{NavTarget, PageQuery, make_filter_query};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOperation {
    AddAll,
    RemoveAll,
}

impl CartOperation {
    pub fn label(&self) -> &'static str {
        match self {
            Self::AddAll => "Add all files to the cart",
            Self::RemoveAll => "Remove all files from the cart",
        }
    }

    pub fn action(&self, files: Vec<FileRecord>) -> CartAction {
        match self {
            Self::AddAll => CartAction::AddAll(files),
            Self::RemoveAll => CartAction::Remove(files),
        }
    }
}

/// Case files that are not in the cart yet.
pub fn files_to_add(files: &[FileRecord], cart: &CartState) -> usize {
    files.iter().filter(|f| !cart.contains(&f.file_id)).count()
}

pub fn cart_operation(files: &[FileRecord], cart: &CartState) -> CartOperation {
    if files_to_add(files, cart) > 0 {
        CartOperation::AddAll
    } else {
        CartOperation::RemoveAll
    }
}

pub fn annotations_link(annotations: &AnnotationHits) -> Option<NavTarget> {
    match annotations.total {
        0 => None,
        1 => {
            let first = annotations.edges.first()?;
            Some(NavTarget::path(format!("{ANNOTATIONS_PATH}/{}", first.node.annotation_id)))
        }
        _ => {
            let ids: Vec<String> = annotations.edges.iter().map(|e| e.node.annotation_id.clone()).collect();
            Some(NavTarget::new(
                ANNOTATIONS_PATH,
                make_filter_query([Predicate::new(FilterField::AnnotationId, ids)]),
            ))
        }
    }
}

pub fn files_link(case: &CaseRecord, total_files: u64) -> Option<NavTarget> {
    if total_files == 0 {
        return None;
    }
    let mut query = make_filter_query([Predicate::new(FilterField::CaseId, &case.case_id)]);
    query.facet_tab = Some("files".to_string());
    query.search_table_tab = Some("files".to_string());
    Some(NavTarget::new(REPOSITORY_PATH, query))
}

pub fn project_link(project_id: &str) -> NavTarget {
    NavTarget::path(format!("{PROJECTS_PATH}/{project_id}"))
}

/// Value cell of the summary table.
#[derive(Debug, Clone, PartialEq)]
pub enum SummaryValue {
    Text(String),
    Link { text: String, target: NavTarget },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryTableRow {
    pub th: &'static str,
    pub td: SummaryValue,
}

pub fn summary_table_rows(case: &CaseRecord) -> Vec<SummaryTableRow> {
    let text = |v: Option<&String>| SummaryValue::Text(v.cloned().unwrap_or_else(|| "--".to_string()));
    vec![
        SummaryTableRow { th: "Case UUID", td: SummaryValue::Text(case.case_id.clone()) },
        SummaryTableRow { th: "Case Submitter ID", td: SummaryValue::Text(case.submitter_id.clone()) },
        SummaryTableRow {
            th: "Project ID",
            td: SummaryValue::Link {
                text: case.project.project_id.clone(),
                target: project_link(&case.project.project_id),
            },
        },
        SummaryTableRow { th: "Project Name", td: text(case.project.name.as_ref()) },
        SummaryTableRow { th: "Disease Type", td: text(case.disease_type.as_ref()) },
        SummaryTableRow { th: "Program", td: text(case.project.program.name.as_ref()) },
        SummaryTableRow { th: "Primary Site", td: text(case.primary_site.as_ref()) },
    ]
}

/// Default filters of the frequent-mutations chart and table.
pub fn mutations_filter(case: &CaseRecord) -> Option<FilterExpr> {
    make_filter([Predicate::new(FilterField::ProjectId, &case.project.project_id)])
}

pub fn explore_mutations_link(case: &CaseRecord) -> NavTarget {
    NavTarget::new(
        EXPLORATION_PATH,
        PageQuery {
            filters: mutations_filter(case),
            search_table_tab: Some("mutations".to_string()),
            ..Default::default()
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::FilterValue;
    use pretty_assertions::assert_eq;

    fn file(id: &str) -> FileRecord {
        FileRecord { file_id: id.to_string(), ..Default::default() }
    }

    #[test]
    fn cart_toggle_follows_membership() {
        let files = vec![file("a"), file("b")];
        let mut cart = CartState::default();
        assert_eq!(files_to_add(&files, &cart), 2);
        assert_eq!(cart_operation(&files, &cart), CartOperation::AddAll);

        cart.apply(CartAction::AddAll(vec![file("a")]));
        assert_eq!(files_to_add(&files, &cart), 1);
        assert_eq!(cart_operation(&files, &cart), CartOperation::AddAll);

        cart.apply(CartOperation::AddAll.action(files.clone()));
        assert_eq!(files_to_add(&files, &cart), 0);
        assert_eq!(cart_operation(&files, &cart), CartOperation::RemoveAll);
        assert_eq!(CartOperation::RemoveAll.label(), "Remove all files from the cart");

        cart.apply(CartOperation::RemoveAll.action(files.clone()));
        assert!(cart.is_empty());
    }

    #[test]
    fn annotation_links_by_count() {
        assert_eq!(annotations_link(&AnnotationHits::default()), None);

        let one = AnnotationHits::from_ids(vec!["a".to_string()]);
        assert_eq!(annotations_link(&one).unwrap().href(), "/annotations/a");

        let two = AnnotationHits::from_ids(vec!["a".to_string(), "b".to_string()]);
        let link = annotations_link(&two).unwrap();
        assert_eq!(link.pathname, "/annotations");
        assert_eq!(
            link.query.filters.unwrap().values_for(FilterField::AnnotationId).unwrap(),
            &[FilterValue::from("a"), FilterValue::from("b")]
        );
    }

    #[test]
    fn files_link_only_when_case_has_files() {
        let case = CaseRecord { case_id: "c1".to_string(), ..Default::default() };
        assert_eq!(files_link(&case, 0), None);
        let link = files_link(&case, 12).unwrap();
        assert_eq!(link.pathname, "/repository");
        assert_eq!(link.query.facet_tab.as_deref(), Some("files"));
        assert_eq!(link.query.search_table_tab.as_deref(), Some("files"));
    }

    #[test]
    fn summary_table_lists_identity_fields() {
        let mut case = CaseRecord { case_id: "c1".to_string(), submitter_id: "TCGA-01".to_string(), ..Default::default() };
        case.project.project_id = "TCGA-LUAD".to_string();
        let rows = summary_table_rows(&case);
        let headers: Vec<_> = rows.iter().map(|r| r.th).collect();
        assert_eq!(
            headers,
            vec!["Case UUID", "Case Submitter ID", "Project ID", "Project Name", "Disease Type", "Program", "Primary Site"]
        );
        assert_eq!(
            rows[2].td,
            SummaryValue::Link { text: "TCGA-LUAD".to_string(), target: NavTarget::path("/projects/TCGA-LUAD") }
        );
        assert_eq!(rows[4].td, SummaryValue::Text("--".to_string()));
    }

    #[test]
    fn mutation_section_is_scoped_to_project() {
        let mut case = CaseRecord::default();
        case.project.project_id = "TCGA-BRCA".to_string();
        let link = explore_mutations_link(&case);
        assert_eq!(link.pathname, "/exploration");
        assert_eq!(link.query.search_table_tab.as_deref(), Some("mutations"));
        assert_eq!(
            link.query.filters.unwrap().values_for(FilterField::ProjectId).unwrap(),
            &[FilterValue::from("TCGA-BRCA")]
        );
    }
}
