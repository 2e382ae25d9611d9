use common::clinical::{samples_table, select_sample};
use dioxus::prelude::*;

use crate::components::case_components::entity_table::EntityTableView;
use crate::components::case_components::summary_card::CardFrame;
use crate::pages::case_page::CasePageState;
use crate::routes::Route;

/// Samples of the case. Clicking a sample records it as `bioId` in the URL.
#[component]
pub fn BiospecimenCard() -> Element {
    let state = use_context::<CasePageState>();
    let samples = use_memo(move || samples_table(&state.data.read().node, state.query.read().bio_id.as_deref()));
    let select = Callback::new(move |sample_id: String| {
        let query = select_sample(&state.query.read(), &sample_id);
        navigator().replace(Route::CasePage {
            case_id: state.data.read().node.case_id.clone(),
            query: query.into(),
        });
    });
    rsx! {
        CardFrame {
            title: "Biospecimen",
            EntityTableView { table: samples(), empty_message: "No biospecimen data found.", on_row_click: select }
        }
    }
}
