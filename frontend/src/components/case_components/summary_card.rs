//! File-count summary cards: one bar and one table row per strategy or category.

use common::pagination::format_count;
use common::summary::{CountCell, SummaryRow};
use dioxus::prelude::*;

use crate::pages::case_page::CasePageState;
use crate::routes::navigate_to;

/// White card with a title row.
#[component]
pub fn CardFrame(title: String, children: Element) -> Element {
    rsx! {
        div {
            class: "x-case-card",
            style: "
                display: flex;
                flex-direction: column;
                gap: 6px;
                padding: 12px 16px;
                background: white;
                border: 1px solid #E5E7EB;
                border-radius: 8px;
                min-width: 0;
            ",
            h2 { style: "font-size: 18px; font-weight: 400; color: rgb(75, 87, 112); margin: 0 0 6px 0;", "{title}" }
            {children}
        }
    }
}

#[component]
pub fn SummaryCard(title: String, id_heading: String, footer: String, rows: ReadSignal<Vec<SummaryRow>>) -> Element {
    rsx! {
        CardFrame {
            title: title,
            if rows.read().is_empty() {
                div { style: "padding: 10px; color: #6B7280;", "No files found." }
            } else {
                SummaryBars { rows }
                SummaryTable { rows, id_heading }
            }
            div { style: "font-size: 12px; color: #6B7280; text-align: center;", "{footer}" }
        }
    }
}

#[component]
fn SummaryBars(rows: ReadSignal<Vec<SummaryRow>>) -> Element {
    let state = use_context::<CasePageState>();
    let max_count = use_memo(move || rows.read().iter().map(|r| r.file_count_value).max().unwrap_or(0).max(1));
    rsx! {
        div {
            class: "x-summary-bars",
            style: "
                display: flex;
                flex-direction: row;
                align-items: flex-end;
                gap: 4px;
                height: 120px;
                padding: 4px 0;
                border-bottom: 1px solid #CBD5E1;
            ",
            for row in rows() {
                div {
                    key: "{row.id}",
                    title: "{row.tooltip.text()}",
                    style: "
                        flex: 1;
                        min-width: 6px;
                        height: {bar_height(row.file_count_value, max_count())}%;
                        background: #1F6FB2;
                        cursor: pointer;
                    ",
                    onclick: {
                        let row = row.clone();
                        move |_e| {
                            let target = row.click_target(&state.query.read());
                            navigate_to(&target);
                        }
                    },
                }
            }
        }
    }
}

fn bar_height(count: u64, max_count: u64) -> u64 {
    if count == 0 {
        return 0;
    }
    (count * 100 / max_count).max(2)
}

#[component]
fn SummaryTable(rows: ReadSignal<Vec<SummaryRow>>, id_heading: String) -> Element {
    rsx! {
        table {
            style: "width: 100%; border-collapse: collapse; font-size: 14px;",
            thead {
                tr {
                    th { style: "text-align: left; padding: 4px 8px;", "{id_heading}" }
                    th { style: "text-align: right; padding: 4px 8px;", "Files" }
                }
            }
            tbody {
                for row in rows() {
                    tr {
                        key: "{row.id}",
                        td { style: "padding: 4px 8px; border-top: 1px solid #E5E7EB;", "{row.id}" }
                        td {
                            style: "padding: 4px 8px; border-top: 1px solid #E5E7EB; text-align: right;",
                            match row.file_count {
                                CountCell::Link { count, target } => rsx! {
                                    Link { to: target.href(), "{format_count(count)}" }
                                },
                                CountCell::Zero => rsx! { "0" },
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bars_scale_to_the_largest_count() {
        assert_eq!(bar_height(0, 10), 0);
        assert_eq!(bar_height(10, 10), 100);
        assert_eq!(bar_height(5, 10), 50);
        assert_eq!(bar_height(1, 1000), 2);
    }
}
