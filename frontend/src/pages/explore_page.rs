use dioxus::prelude::*;

use common::explore_table::CASES_TABLE_PREFIX;
use common::filters::{FieldPredicate, FilterExpr, MergeMode};
use common::pagination::{Paging, SortSpec};
use common::portal_const::EXPLORATION_PATH;
use common::query::{NavTarget, PageQuery, merge_query};
use crate::{
    api::portal_api::fetch_explore_cases,
    components::{
        case_components::frequent_mutations::MutationFrequencyTable,
        error_boundary::ComponentErrorDisplay,
        explore_components::explore_cases_table::ExploreCasesTable,
        suspend_boundary::SuspendWrapper,
    },
    data_definitions::{portal_state::use_case_selection_provider, url_param::QueryParams},
    routes::navigate_to,
};

const TAB_CASES: &str = "cases";
const TAB_MUTATIONS: &str = "mutations";

/// Exploration page
#[component]
pub fn ExplorePage(query: QueryParams) -> Element {
    rsx! {
        Title { "Case Portal: Exploration" }
        ExplorePageRootComponent { query: query.0.clone() }
    }
}

#[derive(Debug, Clone, PartialEq, Copy)]
pub struct ExplorePageState {
    pub query: ReadSignal<PageQuery>,
}

#[component]
fn ExplorePageRootComponent(query: ReadSignal<PageQuery>) -> Element {
    use_context_provider(move || ExplorePageState { query });
    use_case_selection_provider();
    let tab = use_memo(move || query.read().search_table_tab.clone().unwrap_or_else(|| TAB_CASES.to_string()));
    let filters = use_memo(move || query.read().filters.clone());

    rsx! {
        div {
            id: "x-explore-page-root-component",
            style: r#"
                display: flex;
                flex-direction: column;
                gap: 12px;
                padding: 16px 24px;
                background: #F5F6F8;
                min-height: 100%;
                box-sizing: border-box;
            "#,
            ActiveFilters {}
            div {
                style: "display: flex; flex-direction: row; gap: 4px; border-bottom: 1px solid rgb(164, 164, 164);",
                TableTab { id: TAB_CASES, label: "Cases", active: tab() == TAB_CASES }
                TableTab { id: TAB_MUTATIONS, label: "Mutations", active: tab() == TAB_MUTATIONS }
            }
            if tab() == TAB_MUTATIONS {
                SuspendWrapper { MutationFrequencyTable { filters: filters() } }
            } else {
                SuspendWrapper { ExploreCasesResults {} }
            }
        }
    }
}

#[component]
fn TableTab(id: String, label: String, active: bool) -> Element {
    let state = use_context::<ExplorePageState>();
    let border = if active { "2px solid #1F6FB2" } else { "2px solid transparent" };
    rsx! {
        button {
            style: "
                padding: 8px 16px;
                border: none;
                border-bottom: {border};
                background: transparent;
                cursor: pointer;
                font-size: 15px;
            ",
            onclick: move |_e| {
                let mut query = state.query.read().clone();
                query.search_table_tab = Some(id.clone());
                navigate_to(&NavTarget::new(EXPLORATION_PATH, query));
            },
            "{label}"
        }
    }
}

/// One chip per filter predicate; removing a chip toggles its values off.
#[component]
fn ActiveFilters() -> Element {
    let state = use_context::<ExplorePageState>();
    let predicates = use_memo(move || {
        state
            .query
            .read()
            .filters
            .as_ref()
            .map(|f| f.predicates().to_vec())
            .unwrap_or_default()
    });
    if predicates.read().is_empty() {
        return rsx! {
            div { style: "color: #6B7280; font-size: 14px;", "No filters applied. Showing all cases." }
        };
    }
    let remove = Callback::new(move |predicate: FieldPredicate| {
        let current = state.query.read().clone();
        let toggled = PageQuery::with_filters(FilterExpr::from_predicates(vec![predicate]));
        navigate_to(&NavTarget::new(EXPLORATION_PATH, merge_query(&toggled, &current, MergeMode::Toggle)));
    });
    let clear = move |_e: MouseEvent| {
        let mut query = state.query.read().clone();
        query.filters = None;
        navigate_to(&NavTarget::new(EXPLORATION_PATH, query));
    };
    rsx! {
        div {
            id: "x-explore-active-filters",
            style: "display: flex; flex-direction: row; flex-wrap: wrap; gap: 8px; align-items: center;",
            for predicate in predicates() {
                span {
                    key: "{predicate.describe()}",
                    style: "
                        background: #E0ECF7;
                        border: 1px solid #1F6FB2;
                        border-radius: 12px;
                        padding: 2px 10px;
                        font-size: 13px;
                        cursor: pointer;
                    ",
                    title: "Remove this filter",
                    onclick: {
                        let predicate = predicate.clone();
                        move |_e| remove.call(predicate.clone())
                    },
                    "{predicate.describe()} ✕"
                }
            }
            button {
                style: "border: none; background: transparent; color: #1F6FB2; cursor: pointer; font-size: 13px;",
                onclick: clear,
                "Clear all"
            }
        }
    }
}

#[component]
fn ExploreCasesResults() -> Element {
    let state = use_context::<ExplorePageState>();
    let request = use_memo(move || {
        let query = state.query.read();
        let paging = Paging::from_query(&query, CASES_TABLE_PREFIX, 0);
        let sort = SortSpec::from_query(&query, CASES_TABLE_PREFIX).map(|s| s.as_param());
        (query.filters.clone(), paging.offset, paging.size, sort)
    });
    let hits = use_resource(move || {
        let (filters, offset, size, sort) = request();
        fetch_explore_cases(filters, offset, size, sort)
    })
    .suspend()?
    .cloned();
    let hits = match hits {
        Err(e) => return rsx! {ComponentErrorDisplay { error_txt: format!("{:#?}", e) }},
        Ok(h) => h,
    };
    rsx! {
        ExploreCasesTable { hits }
    }
}
