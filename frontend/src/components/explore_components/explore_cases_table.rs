//! The explore-cases table: headings, body rows and per-kind cells.

use std::collections::BTreeMap;

use common::case_record::CaseHits;
use common::case_sets::{all_selected, toggle_all_selected, toggle_selected};
use common::explore_table::{
    CASES_TABLE_PREFIX, CellContext, ColumnKind, EMPTY_TABLE_MESSAGE, ExploreTableInput, ExploreTableView,
    HeadingCell, TABLE_DOM_ID, TableProjection, cell_link, cell_text, explore_case_columns, project_explore_table,
    ssm_counts_from_buckets,
};
use common::pagination::{SortOrder, SortSpec};
use common::portal_const::EXPLORATION_PATH;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::{MdArrowDownward, MdArrowUpward}};

use crate::api::portal_api::fetch_ssm_case_counts;
use crate::components::explore_components::pagination_controls::PaginationControls;
use crate::components::explore_components::table_actions::TableActions;
use crate::data_definitions::portal_state::{CaseSelection, TableColumnsContext};
use crate::pages::explore_page::ExplorePageState;
use crate::routes::navigate_to;

const TH_STYLE: &str = "text-align: left; padding: 6px 8px; background: #F1F5F9; border: 1px solid #E5E7EB; font-weight: 500; white-space: nowrap;";
const TD_STYLE: &str = "padding: 6px 8px; border: 1px solid #E5E7EB;";

#[component]
pub fn ExploreCasesTable(hits: ReadSignal<CaseHits>) -> Element {
    let state = use_context::<ExplorePageState>();
    let columns_ctx = use_context::<TableColumnsContext>();
    let selection = use_context::<CaseSelection>();

    let case_ids = use_memo(move || hits.read().edges.iter().map(|e| e.node.case_id.clone()).collect::<Vec<_>>());
    let ssm_counts = use_resource(move || fetch_ssm_case_counts(case_ids()));

    let view = use_memo(move || {
        let columns = explore_case_columns();
        let ssm = ssm_counts.read();
        let counts = match ssm.as_ref() {
            Some(Ok(buckets)) => ssm_counts_from_buckets(Some(buckets.as_slice())),
            Some(Err(e)) => {
                dioxus::logger::tracing::warn!("mutation counts unavailable: {e}");
                BTreeMap::new()
            }
            None => BTreeMap::new(),
        };
        let query = state.query.read();
        project_explore_table(ExploreTableInput {
            columns: &columns,
            column_ids: &columns_ctx.columns.read().ids,
            hits: &hits.read(),
            ssm_counts: &counts,
            ssm_counts_loading: ssm.is_none(),
            ssm_counts_unavailable: matches!(ssm.as_ref(), Some(Err(_))),
            filters: query.filters.as_ref(),
            selected_ids: &selection.selected.read(),
        })
    });

    match view() {
        ExploreTableView::Empty => rsx! {
            div {
                class: "x-empty-table",
                style: "padding: 20px; font-size: 16px; color: #6B7280;",
                "{EMPTY_TABLE_MESSAGE}"
            }
        },
        ExploreTableView::Table(projection) => rsx! {
            TableActions { projection: projection.clone() }
            CasesTable { projection: projection.clone() }
            PaginationControls { total: projection.total }
        },
    }
}

#[component]
fn CasesTable(projection: ReadSignal<TableProjection>) -> Element {
    let projection = projection.read().clone();
    let page_ids = projection.page_case_ids();
    rsx! {
        div {
            style: "width: 100%; overflow-x: auto;",
            table {
                id: TABLE_DOM_ID,
                style: "width: 100%; border-collapse: collapse; background: white; font-size: 14px;",
                thead {
                    tr {
                        for heading in projection.headings.iter() {
                            HeadingCellView { key: "{heading.column.id}", heading: heading.clone(), page_ids: page_ids.clone() }
                        }
                    }
                    if !projection.subheadings.is_empty() {
                        tr {
                            for column in projection.subheadings.iter() {
                                th { key: "{column.id}", style: TH_STYLE, title: column.data_category().map(|d| d.full).unwrap_or_default(), "{column.name}" }
                            }
                        }
                    }
                }
                tbody {
                    for row in projection.rows.iter() {
                        tr {
                            key: "{row.key}",
                            class: if row.highlighted { "x-row-highlighted" } else { "" },
                            for cell in row.cells.iter() {
                                CellView { key: "{cell.column.id}", cell: cell.clone() }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn HeadingCellView(heading: ReadSignal<HeadingCell>, page_ids: ReadSignal<Vec<String>>) -> Element {
    let state = use_context::<ExplorePageState>();
    let mut selection = use_context::<CaseSelection>().selected;
    let heading = heading.read().clone();
    let column = heading.column.clone();

    if column.kind == ColumnKind::Selection {
        let checked = all_selected(&selection.read(), &page_ids.read());
        return rsx! {
            th {
                style: TH_STYLE,
                rowspan: "{heading.rowspan}",
                "data-no-export": "true",
                input {
                    r#type: "checkbox",
                    title: "Select all cases on this page",
                    checked,
                    onchange: move |_e| toggle_all_selected(&mut selection.write(), &page_ids.read()),
                }
            }
        };
    }

    let current_sort = SortSpec::from_query(&state.query.read(), CASES_TABLE_PREFIX);
    let sort_order = current_sort
        .as_ref()
        .filter(|s| column.sortable && s.field == column.api_field())
        .map(|s| s.order);
    let sortable = column.sortable;
    rsx! {
        th {
            style: TH_STYLE,
            colspan: "{heading.colspan}",
            rowspan: "{heading.rowspan}",
            cursor: if sortable { "pointer" } else { "default" },
            onclick: move |_e| {
                if !sortable {
                    return;
                }
                let current = state.query.read().clone();
                let target = SortSpec::toggle_target(current_sort.as_ref(), column.api_field(), CASES_TABLE_PREFIX, EXPLORATION_PATH, &current);
                navigate_to(&target);
            },
            "{heading.column.name}"
            match sort_order {
                Some(SortOrder::Asc) => rsx! { Icon { icon: MdArrowUpward, style: "width: 14px; height: 14px; vertical-align: middle;" } },
                Some(SortOrder::Desc) => rsx! { Icon { icon: MdArrowDownward, style: "width: 14px; height: 14px; vertical-align: middle;" } },
                None => rsx! {},
            }
        }
    }
}

#[component]
fn CellView(cell: ReadSignal<CellContext>) -> Element {
    let mut selection = use_context::<CaseSelection>().selected;
    let cell = cell.read().clone();

    if cell.column.kind == ColumnKind::Selection {
        let case_id = cell.node.case_id.clone();
        return rsx! {
            td {
                style: TD_STYLE,
                "data-no-export": "true",
                input {
                    r#type: "checkbox",
                    checked: cell.selected,
                    onchange: move |_e| toggle_selected(&mut selection.write(), &case_id),
                }
            }
        };
    }

    let numeric = matches!(
        cell.column.kind,
        ColumnKind::Files | ColumnKind::DataCategory(_) | ColumnKind::Mutations
    );
    let text = cell_text(&cell);
    let align = if numeric { "right" } else { "left" };
    rsx! {
        td {
            style: "{TD_STYLE} text-align: {align};",
            match cell_link(&cell) {
                Some(target) => rsx! { Link { to: target.href(), "{text}" } },
                None => rsx! { "{text}" },
            }
        }
    }
}
