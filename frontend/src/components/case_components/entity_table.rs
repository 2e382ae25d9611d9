//! Plain tables of the case page.

use common::case_view::{summary_table_rows, SummaryValue};
use common::clinical::EntityTable;
use dioxus::prelude::*;

use crate::pages::case_page::CasePageState;

const TH_STYLE: &str = "text-align: left; padding: 6px 10px; background: #F1F5F9; border-bottom: 1px solid #E5E7EB; font-weight: 500;";
const TD_STYLE: &str = "padding: 6px 10px; border-bottom: 1px solid #E5E7EB;";

/// Header-per-row table identifying the case.
#[component]
pub fn CaseSummaryTable() -> Element {
    let state = use_context::<CasePageState>();
    let rows = use_memo(move || summary_table_rows(&state.data.read().node));
    rsx! {
        table {
            id: "x-case-summary-table",
            style: "width: 100%; border-collapse: collapse; background: white; font-size: 14px;",
            tbody {
                for row in rows() {
                    tr {
                        key: "{row.th}",
                        th { style: TH_STYLE, width: "200px", "{row.th}" }
                        td {
                            style: TD_STYLE,
                            match row.td {
                                SummaryValue::Text(text) => rsx! { "{text}" },
                                SummaryValue::Link { text, target } => rsx! { Link { to: target.href(), "{text}" } },
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn EntityTableView(
    table: ReadSignal<EntityTable>,
    empty_message: String,
    on_row_click: Option<Callback<String>>,
) -> Element {
    if table.read().rows.is_empty() {
        return rsx! {
            div { style: "padding: 10px; color: #6B7280;", "{empty_message}" }
        };
    }
    let table = table.read().clone();
    rsx! {
        table {
            style: "width: 100%; border-collapse: collapse; background: white; font-size: 14px;",
            thead {
                tr {
                    for heading in table.headings.iter() {
                        th { key: "{heading}", style: TH_STYLE, "{heading}" }
                    }
                }
            }
            tbody {
                for row in table.rows {
                    tr {
                        key: "{row.key}",
                        class: if row.highlighted { "x-row-highlighted" } else { "" },
                        style: if on_row_click.is_some() { "cursor: pointer;" } else { "" },
                        onclick: {
                            let key = row.key.clone();
                            move |_e| {
                                if let Some(cb) = on_row_click {
                                    cb.call(key.clone());
                                }
                            }
                        },
                        for (i, cell) in row.cells.iter().enumerate() {
                            td { key: "{i}", style: TD_STYLE, "{cell}" }
                        }
                    }
                }
            }
        }
    }
}
