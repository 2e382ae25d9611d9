use common::case_view::{explore_mutations_link, mutations_filter};
use common::filters::FilterExpr;
use common::pagination::format_count;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdOpenInNew};

use crate::api::portal_api::fetch_frequent_mutations;
use crate::components::case_components::summary_card::CardFrame;
use crate::components::error_boundary::ComponentErrorDisplay;
use crate::pages::case_page::CasePageState;

/// "Most Frequent Somatic Mutations" among cases of the same project.
#[component]
pub fn FrequentMutationsCard() -> Element {
    let state = use_context::<CasePageState>();
    let explore_link = use_memo(move || explore_mutations_link(&state.data.read().node));
    rsx! {
        CardFrame {
            title: "Most Frequent Somatic Mutations",
            div {
                style: "display: flex; flex-direction: row; justify-content: flex-end;",
                Link {
                    to: explore_link().href(),
                    span {
                        style: "display: flex; align-items: center; gap: 4px; font-size: 14px;",
                        Icon { icon: MdOpenInNew, style: "width: 16px; height: 16px;" }
                        "Open in Exploration"
                    }
                }
            }
            MutationFrequencyTable { filters: mutations_filter(&state.data.read().node) }
        }
    }
}

/// Mutation occurrence counts under `filters`, as bars and numbers.
#[component]
pub fn MutationFrequencyTable(filters: ReadSignal<Option<FilterExpr>>) -> Element {
    let mutations = use_resource(move || {
        let filters = filters.read().clone();
        fetch_frequent_mutations(filters)
    })
    .suspend()?
    .cloned();
    let mutations = match mutations {
        Err(e) => return rsx! {ComponentErrorDisplay { error_txt: format!("{:#?}", e) }},
        Ok(m) => m,
    };
    if mutations.is_empty() {
        return rsx! {
            div { style: "padding: 10px; color: #6B7280;", "No somatic mutations found." }
        };
    }
    let max_count = mutations.iter().map(|m| m.doc_count).max().unwrap_or(1).max(1);

    rsx! {
        table {
            style: "width: 100%; border-collapse: collapse; font-size: 14px;",
            thead {
                tr {
                    th { style: "text-align: left; padding: 4px 8px;", "DNA Change" }
                    th { style: "text-align: left; padding: 4px 8px; width: 40%;", "" }
                    th { style: "text-align: right; padding: 4px 8px;", "# Occurrences" }
                }
            }
            tbody {
                for mutation in mutations {
                    tr {
                        key: "{mutation.key}",
                        td { style: "padding: 4px 8px; border-top: 1px solid #E5E7EB; font-family: monospace;", "{mutation.key}" }
                        td {
                            style: "padding: 4px 8px; border-top: 1px solid #E5E7EB;",
                            div {
                                title: "{mutation.key}\n{format_count(mutation.doc_count)} occurrences",
                                style: "height: 12px; width: {mutation.doc_count * 100 / max_count}%; background: #1F6FB2;",
                            }
                        }
                        td { style: "padding: 4px 8px; border-top: 1px solid #E5E7EB; text-align: right;", "{format_count(mutation.doc_count)}" }
                    }
                }
            }
        }
    }
}
