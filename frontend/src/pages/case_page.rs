use dioxus::prelude::*;

use common::case_record::CasePageData;
use common::query::PageQuery;
use common::summary::{data_category_rows, experimental_strategy_rows};
use crate::{
    api::portal_api::fetch_case_page,
    components::{
        case_components::{
            biospecimen_card::BiospecimenCard,
            case_header::{CaseTitleBar, CountCards},
            clinical_card::ClinicalCard,
            entity_table::CaseSummaryTable,
            frequent_mutations::FrequentMutationsCard,
            summary_card::SummaryCard,
        },
        error_boundary::ComponentErrorDisplay,
        suspend_boundary::SuspendWrapper,
    },
    data_definitions::url_param::QueryParams,
};

/// Case page
#[component]
pub fn CasePage(case_id: String, query: QueryParams) -> Element {
    rsx! {
        Title { "Case Portal: {case_id}" }
        SuspendWrapper {
            CasePageRootComponent { case_id: case_id.clone(), query: query.0.clone() }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Copy)]
pub struct CasePageState {
    pub data: ReadSignal<CasePageData>,
    pub query: ReadSignal<PageQuery>,
}

#[component]
fn CasePageRootComponent(case_id: ReadSignal<String>, query: ReadSignal<PageQuery>) -> Element {
    let data = use_resource(move || {
        let case_id = case_id.read().clone();
        fetch_case_page(case_id)
    })
    .suspend()?
    .cloned();
    let data = match data {
        Err(e) => return rsx! {ComponentErrorDisplay { error_txt: format!("{:#?}", e) }},
        Ok(d) => d,
    };
    rsx! {
        CaseView { data, query }
    }
}

#[component]
fn CaseView(data: ReadSignal<CasePageData>, query: ReadSignal<PageQuery>) -> Element {
    use_context_provider(move || CasePageState { data, query });
    let strategy_rows = use_memo(move || experimental_strategy_rows(&data.read().node));
    let category_rows = use_memo(move || data_category_rows(&data.read().node));
    let ssm_tested = use_memo(move || data.read().ssm_tested);

    rsx! {
        div {
            id: "x-case-page-root-component",
            style: r#"
                display: flex;
                flex-direction: column;
                gap: 16px;
                padding: 16px 24px;
                background: #F5F6F8;
                min-height: 100%;
                box-sizing: border-box;
            "#,
            CaseTitleBar {}

            div {
                id: "x-case-summary-row",
                style: "
                    display: grid;
                    grid-template-columns: 2fr 1fr;
                    gap: 16px;
                    align-items: start;
                ",
                CaseSummaryTable {}
                CountCards {}
            }

            div {
                id: "x-case-summary-cards",
                style: "
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 16px;
                ",
                SummaryCard {
                    title: "File Counts by Experimental Strategy",
                    id_heading: "Experimental Strategy",
                    footer: "Experimental Strategies",
                    rows: strategy_rows(),
                }
                SummaryCard {
                    title: "File Counts by Data Category",
                    id_heading: "Data Category",
                    footer: "Data Categories",
                    rows: category_rows(),
                }
            }

            ClinicalCard {}
            BiospecimenCard {}

            if ssm_tested() {
                SuspendWrapper { FrequentMutationsCard {} }
            }
        }
    }
}
