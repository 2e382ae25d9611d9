use common::clinical::{demographic_table, diagnoses_table};
use dioxus::prelude::*;

use crate::components::case_components::entity_table::EntityTableView;
use crate::components::case_components::summary_card::CardFrame;
use crate::pages::case_page::CasePageState;

#[component]
pub fn ClinicalCard() -> Element {
    let state = use_context::<CasePageState>();
    let demographic = use_memo(move || demographic_table(&state.data.read().node));
    let diagnoses = use_memo(move || diagnoses_table(&state.data.read().node));
    rsx! {
        CardFrame {
            title: "Clinical",
            h3 { style: "font-size: 15px; font-weight: 500; margin: 8px 0;", "Demographic" }
            EntityTableView { table: demographic(), empty_message: "No demographic data found." }
            h3 { style: "font-size: 15px; font-weight: 500; margin: 12px 0 8px 0;", "Diagnoses" }
            EntityTableView { table: diagnoses(), empty_message: "No diagnoses found." }
        }
    }
}
