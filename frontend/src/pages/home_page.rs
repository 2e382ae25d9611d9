use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::{MdExplore, MdSearch};
use dioxus_free_icons::Icon;

use common::query::PageQuery;
use crate::routes::Route;


/// Home page
#[component]
pub fn HomePage() -> Element {
    rsx! {
        Title { "Case Portal - Home" }
        div {
            id: "x-home-container",
            style: "
                display:flex;
                flex-direction: column;
                gap: 20px;
                width: 100%;
                height: 100%;
                padding: 36px 40px;
                background: #F5F6F8;
                box-sizing: border-box;
                overflow: auto;
            ",

            MainTitle {}
            SubText {}

            // Cards Row
            div {
                style: "
                    display:flex;
                    flex-direction: row;
                    gap: 20px;
                    flex-wrap: wrap;
                    align-items: stretch;
                    margin-top: 10px;
                ",
                CaseLookupCard {}
                ExploreCard {}
            }
        }
    }
}


#[component]
fn MainTitle() -> Element {
    rsx! {
        div {
            style: "
                display:flex;
                align-items: center;
                gap: 8px;
                color: #0F172A;
                font-size: 46px;
                font-weight: 500;
                letter-spacing: -0.02em;
            ",
            span { "Welcome to the" }
            span { style: "color:#1F6FB2;", "Case Portal" }
        }
    }
}

#[component]
fn SubText() -> Element {
    rsx! {
        div {
            style: "
                color: #111827;
                font-size: 24px;
                line-height: 1.6;
                max-width: 720px;
                font-weight: 500;
            ",
            "Browse cancer cases, their clinical and biospecimen data, available files and somatic mutations."
        }
    }
}

#[component]
fn CaseLookupCard() -> Element {
    rsx! {
        div {
            id: "x-card-case-lookup",
            style: "
                display:flex;
                flex-direction: column;
                gap: 14px;
                width: 520px;
                min-height: 240px;
                border-radius: 22px;
                padding: 22px 22px 26px 22px;
                background: linear-gradient(135deg, #0E3B66 0%, #1F6FB2 100%);
                color: white;
                box-shadow: 0 8px 24px rgba(0,0,0,0.12);
            ",

            div {
                style: "
                    font-size: 30px;
                    font-weight: 500;
                ",
                "Open a Case"
            }

            div {
                style: "
                    font-size: 20px;
                    font-weight: 500;
                    line-height: 1.5;
                    color: rgba(255,255,255,0.92);
                ",
                "Jump straight to a case summary: counts, files per experimental strategy and data category, clinical data and biospecimens."
            }

            div { style: "height: 8px; padding-top: 7px; margin-top:7px; border-top: 1px solid white; width: 100%; " }

            div {
                style: "
                    font-size: 16px;
                    color: rgba(255,255,255,0.9);
                    width: 100%;
                ",
                "*Paste a case UUID below and hit Enter."
            }
            CaseIdInput {}
        }
    }
}

#[component]
fn CaseIdInput() -> Element {
    let n2 = navigator();
    let mut case_id = use_signal(|| "".to_string());
    rsx! {
        div {
            style: "
                display:flex;
                align-items:center;
                gap: 10px;
                background-color: white;
                border-radius: 9999px;
                padding: 10px 14px;
                height: 42px;
                color: #111827;
            ",
            Icon { icon: MdSearch, style: "width: 20px; height: 20px; color:#6B7280;" }
            input {
                r#type: "text",
                placeholder: "Case UUID",
                style: "
                    flex:1;
                    border: none;
                    outline: none;
                    background: transparent;
                    color: #111827;
                    font-size: 14px;
                ",
                oninput: move |e| {
                    *case_id.write() = e.value();
                },
                onkeypress: move |e| {
                    if e.key() == Key::Enter {
                        e.prevent_default();
                        let case_id = case_id.read().trim().to_string();
                        if !case_id.is_empty() {
                            n2.push(Route::CasePage { case_id, query: PageQuery::default().into() });
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn ExploreCard() -> Element {
    rsx! {
        div {
            id: "x-card-explore",
            style: "
                display:flex;
                flex-direction: column;
                gap: 12px;
                width: 520px;
                min-height: 240px;
                border-radius: 22px;
                padding: 22px 22px 26px 22px;
                background: linear-gradient(135deg, #0B7A2B 0%, #23A340 60%, #178E35 100%);
                color: white;
                box-shadow: 0 8px 24px rgba(0,0,0,0.12);
            ",

            div {
                style: "
                    font-size: 26px;
                    font-weight: 500;
                ",
                "Explore Cases"
            }

            div {
                style: "
                    font-size: 20px;
                    font-weight: 500;
                    line-height: 1.6;
                    color: rgba(255,255,255,0.96);
                    max-width: 510px;
                ",
                "Page through all cases, sort and arrange columns, build case sets and export the listing."
            }

            div {
                style: "display:flex; flex-direction:row;",
                Link {
                    to: Route::explore_page_from_query(PageQuery::default()),
                    span {
                        style: "
                            display:flex;
                            align-items:center;
                            gap: 6px;
                            height: 34px;
                            padding: 0 12px;
                            font-size: 14px;
                            border-radius: 8px;
                            background: white;
                            color: #111827;
                            border: 1px solid #D1D5DB;
                        ",
                        Icon { icon: MdExplore, style: "width: 18px; height: 18px;" }
                        "Open the case table"
                    }
                }
            }
        }
    }
}
