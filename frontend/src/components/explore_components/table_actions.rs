//! Controls above the explore-cases table: column arrangement, sorting,
//! exports and case sets.

use common::case_sets::CaseSetError;
use common::explore_table::{CASES_TABLE_PREFIX, TABLE_DOM_ID, TableProjection, explore_case_columns};
use common::export::{ExportFormat, ExportRequest};
use common::pagination::{SortOrder, SortSpec, format_count};
use common::portal_const::EXPLORATION_PATH;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_action_icons::{MdViewColumn, MdSwapVert}, md_file_icons::MdFileDownload, md_navigation_icons::{MdArrowDownward, MdArrowUpward, MdExpandLess, MdExpandMore}}};

use crate::components::explore_components::table_export::download_table_tsv;
use crate::components::notify::notify;
use crate::data_definitions::portal_state::{CaseSelection, CaseSetsContext, TableColumnsContext};
use crate::pages::explore_page::ExplorePageState;
use crate::routes::navigate_to;

const BUTTON_STYLE: &str = "
    height: 32px;
    padding: 0 10px;
    cursor: pointer;
    border: 1px solid #D1D5DB;
    border-radius: 6px;
    background: white;
    color: #111827;
    display: flex;
    align-items: center;
    gap: 4px;
    font-size: 13px;
";

const DROPDOWN_STYLE: &str = "
    position: absolute;
    top: 36px;
    right: 0px;
    z-index: 10;
    min-width: 260px;
    max-height: 420px;
    overflow-y: auto;
    background: white;
    border: 1px solid #D1D5DB;
    border-radius: 6px;
    box-shadow: 0 6px 16px rgba(0,0,0,0.12);
    padding: 6px;
";

#[component]
pub fn TableActions(projection: ReadSignal<TableProjection>) -> Element {
    let total = use_memo(move || format_count(projection.read().total));
    rsx! {
        div {
            id: "x-explore-table-actions",
            style: "
                display: flex;
                flex-direction: row;
                flex-wrap: wrap;
                align-items: center;
                gap: 8px;
                padding: 4px 0;
            ",
            h2 { style: "font-size: 18px; font-weight: 400; color: rgb(75, 87, 112); margin: 0;", "{total} Cases" }
            CaseSetControls {}
            div { style: "flex-grow: 1;" }
            ArrangeColumnsButton {}
            SortTableButton { projection }
            DownloadTableButton {}
            ExportLinks { projection }
        }
    }
}

/// Shows, hides and reorders columns; the arrangement is remembered across visits.
#[component]
fn ArrangeColumnsButton() -> Element {
    let columns_ctx = use_context::<TableColumnsContext>();
    let mut is_expanded = use_signal(|| false);
    let columns = use_hook(explore_case_columns);
    rsx! {
        div {
            style: "position: relative;",
            button {
                style: BUTTON_STYLE,
                title: "Arrange columns",
                onclick: move |_e| *is_expanded.write() ^= true,
                Icon { icon: MdViewColumn, style: "width: 18px; height: 18px;" }
                "Arrange Columns"
            }
            if is_expanded() {
                div {
                    style: DROPDOWN_STYLE,
                    for column in columns.iter().cloned() {
                        div {
                            key: "{column.id}",
                            style: "display: flex; flex-direction: row; align-items: center; gap: 6px; padding: 3px 4px;",
                            input {
                                r#type: "checkbox",
                                checked: columns_ctx.columns.read().is_visible(&column.id),
                                onchange: {
                                    let id = column.id.clone();
                                    let columns = columns.clone();
                                    move |_e| columns_ctx.update(|state| state.toggle(&id, &columns))
                                },
                            }
                            span { style: "flex-grow: 1; font-size: 13px;", "{column.name}" }
                            button {
                                style: "border: none; background: transparent; cursor: pointer; padding: 0;",
                                title: "Move up",
                                onclick: {
                                    let id = column.id.clone();
                                    let columns = columns.clone();
                                    move |_e| columns_ctx.update(|state| state.move_by(&id, -1, &columns))
                                },
                                Icon { icon: MdExpandLess, style: "width: 16px; height: 16px;" }
                            }
                            button {
                                style: "border: none; background: transparent; cursor: pointer; padding: 0;",
                                title: "Move down",
                                onclick: {
                                    let id = column.id.clone();
                                    let columns = columns.clone();
                                    move |_e| columns_ctx.update(|state| state.move_by(&id, 1, &columns))
                                },
                                Icon { icon: MdExpandMore, style: "width: 16px; height: 16px;" }
                            }
                        }
                    }
                    button {
                        style: "{BUTTON_STYLE} margin-top: 6px; width: 100%; justify-content: center;",
                        onclick: move |_e| columns_ctx.reset(),
                        "Restore Defaults"
                    }
                }
            }
        }
    }
}

#[component]
fn SortTableButton(projection: ReadSignal<TableProjection>) -> Element {
    let state = use_context::<ExplorePageState>();
    let mut is_expanded = use_signal(|| false);
    let current_sort = use_memo(move || SortSpec::from_query(&state.query.read(), CASES_TABLE_PREFIX));
    let options = use_memo(move || projection.read().sort_options.clone());
    rsx! {
        div {
            style: "position: relative;",
            button {
                style: BUTTON_STYLE,
                title: "Sort table",
                onclick: move |_e| *is_expanded.write() ^= true,
                Icon { icon: MdSwapVert, style: "width: 18px; height: 18px;" }
                "Sort Table"
            }
            if is_expanded() {
                div {
                    style: DROPDOWN_STYLE,
                    for column in options() {
                        div {
                            key: "{column.id}",
                            style: "display: flex; flex-direction: row; align-items: center; gap: 6px; padding: 4px; cursor: pointer; font-size: 13px;",
                            onclick: {
                                let field = column.api_field().to_string();
                                move |_e| {
                                    let current = state.query.read().clone();
                                    let target = SortSpec::toggle_target(current_sort.read().as_ref(), &field, CASES_TABLE_PREFIX, EXPLORATION_PATH, &current);
                                    is_expanded.set(false);
                                    navigate_to(&target);
                                }
                            },
                            span { style: "flex-grow: 1;", "{column.name}" }
                            match current_sort().filter(|s| s.field == column.api_field()).map(|s| s.order) {
                                Some(SortOrder::Asc) => rsx! { Icon { icon: MdArrowUpward, style: "width: 14px; height: 14px;" } },
                                Some(SortOrder::Desc) => rsx! { Icon { icon: MdArrowDownward, style: "width: 14px; height: 14px;" } },
                                None => rsx! {},
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Saves the rendered table as TSV.
#[component]
fn DownloadTableButton() -> Element {
    rsx! {
        button {
            style: BUTTON_STYLE,
            title: "Download the rendered table as TSV",
            onclick: move |_e| match download_table_tsv(TABLE_DOM_ID) {
                Ok(filename) => notify("Table downloaded.", format!("Saved as {filename}.")),
                Err(e) => {
                    dioxus::logger::tracing::error!("table export failed: {e:#}");
                    notify("Table download failed.", e.to_string());
                }
            },
            Icon { icon: MdFileDownload, style: "width: 18px; height: 18px;" }
            "TSV"
        }
    }
}

/// Server-side exports of every matching case with the downloadable columns.
#[component]
fn ExportLinks(projection: ReadSignal<TableProjection>) -> Element {
    let state = use_context::<ExplorePageState>();
    let href = move |format: ExportFormat| {
        let query = state.query.read();
        let sort = SortSpec::from_query(&query, CASES_TABLE_PREFIX).map(|s| s.as_param());
        ExportRequest::new(format, query.filters.as_ref(), &projection.read().download_fields, sort).href()
    };
    rsx! {
        a {
            style: BUTTON_STYLE,
            href: href(ExportFormat::Json),
            download: "",
            title: "Export all matching cases as JSON",
            Icon { icon: MdFileDownload, style: "width: 18px; height: 18px;" }
            "JSON"
        }
        a {
            style: BUTTON_STYLE,
            href: href(ExportFormat::Tsv),
            download: "",
            title: "Export all matching cases as TSV",
            Icon { icon: MdFileDownload, style: "width: 18px; height: 18px;" }
            "All as TSV"
        }
    }
}

fn report_case_set_result(action: &str, set_name: &str, result: Result<usize, CaseSetError>) {
    match result {
        Ok(n) => notify(format!("{action} \"{set_name}\"."), format!("{} cases affected.", format_count(n as u64))),
        Err(e) => notify(format!("Could not update \"{set_name}\"."), e.to_string()),
    }
}

/// Create, extend and shrink named case sets from the selected rows.
#[component]
fn CaseSetControls() -> Element {
    let mut selection = use_context::<CaseSelection>().selected;
    let sets_ctx = use_context::<CaseSetsContext>();
    let mut chosen_set = use_signal(String::new);
    let selected_count = use_memo(move || selection.read().len());
    let set_names = use_memo(move || sets_ctx.sets.read().sets.keys().cloned().collect::<Vec<_>>());

    let save_new = move |_e: MouseEvent| {
        let ids = selection.read().clone();
        let name = sets_ctx.sets.read().next_default_name();
        let result = sets_ctx.apply(|sets| sets.create(&name, &ids));
        if result.is_ok() {
            chosen_set.set(name.clone());
        }
        report_case_set_result("Created", &name, result);
    };
    let add_to_set = move |_e: MouseEvent| {
        let ids = selection.read().clone();
        let name = chosen_set.read().clone();
        report_case_set_result("Added to", &name, sets_ctx.apply(|sets| sets.append(&name, &ids)));
    };
    let remove_from_set = move |_e: MouseEvent| {
        let ids = selection.read().clone();
        let name = chosen_set.read().clone();
        report_case_set_result("Removed from", &name, sets_ctx.apply(|sets| sets.remove_from(&name, &ids)));
    };

    rsx! {
        div {
            id: "x-case-set-controls",
            style: "display: flex; flex-direction: row; align-items: center; gap: 6px; font-size: 13px;",
            span { "{selected_count} selected" }
            button { style: BUTTON_STYLE, disabled: selected_count() == 0, onclick: save_new, "Save as New Set" }
            select {
                value: "{chosen_set}",
                onchange: move |e| chosen_set.set(e.value()),
                option { value: "", "Choose a set" }
                for name in set_names() {
                    option { key: "{name}", value: "{name}", selected: *chosen_set.read() == name, "{name}" }
                }
            }
            button { style: BUTTON_STYLE, disabled: selected_count() == 0 || chosen_set.read().is_empty(), onclick: add_to_set, "Add to Set" }
            button { style: BUTTON_STYLE, disabled: selected_count() == 0 || chosen_set.read().is_empty(), onclick: remove_from_set, "Remove from Set" }
            button {
                style: BUTTON_STYLE,
                disabled: selected_count() == 0,
                onclick: move |_e| selection.write().clear(),
                "Clear Selection"
            }
        }
    }
}
