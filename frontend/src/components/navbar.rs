//! Top navigation bar component.

use dioxus::prelude::*;

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::data_definitions::portal_state::{CartContext, CaseSetsContext};
use crate::routes::Route;
use common::portal_const::REPOSITORY_PATH;
use common::pagination::format_count;
use common::query::PageQuery;

use dioxus_free_icons::icons::md_action_icons::{MdExplore, MdHome, MdShoppingCart};
use dioxus_free_icons::icons::md_file_icons::MdFolder;
use dioxus_free_icons::{Icon, IconShape};


/// Shared navbar component.
#[component]
pub fn Navbar() -> Element {
    rsx! {

        div {
            id:"x-nav-container",

            style:"
                display:flex;
                flex-direction: column;
                width: 100%;
                height: 100%;
            ",


            div {
                id:"x-nav-topbar",
                style:"
                    display:flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 28px;
                    height: 56px;
                    background-color: #1C212D;
                    border-bottom: 1px solid #000000;
                    padding: 0 16px;
                    flex-shrink: 0;
                ",

                NavbarTitle{},
                IconLink { to: Route::HomePage { }.to_string(), icon: MdHome, label: "Home" }
                IconLink { to: Route::explore_page_from_query(PageQuery::default()).to_string(), icon: MdExplore, label: "Exploration" }
                IconLink { to: REPOSITORY_PATH.to_string(), icon: MdFolder, label: "Repository" }

                // empty space
                div {
                    style: "flex-grow:1;"
                }
                NavbarCaseSetCount{},
                NavbarCartCount{},
            },

            div {
                id:"x-page-container",
                style: "flex-grow:1; min-height: 100px; overflow: auto;",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }
        }

    }
}

#[component]
fn NavbarTitle() -> Element {
    rsx! {
        Link {
            to: Route::HomePage { },
            span { style: "color: white; font-size: 20px; font-weight: 500;", "Case Portal" }
        }
    }
}

#[component]
fn NavbarCartCount() -> Element {
    let cart = use_context::<CartContext>().cart;
    let count = use_memo(move || cart.read().len() as u64);
    rsx! {
        span {
            title: "Files in cart",
            style: "color: white; display: flex; align-items: center; gap: 6px;",
            Icon { icon: MdShoppingCart, style: "width: 22px; height: 22px;" }
            "Cart ({format_count(count())})"
        }
    }
}

#[component]
fn NavbarCaseSetCount() -> Element {
    let sets = use_context::<CaseSetsContext>().sets;
    let count = use_memo(move || sets.read().sets.len());
    rsx! {
        span {
            style: "color: rgba(255,255,255,0.8); font-size: 14px;",
            "Case sets: {count}"
        }
    }
}

#[component]
fn IconLink<T: IconShape + Clone + PartialEq + 'static> (to: String, icon: T, label: String) -> Element {
    rsx! {
        Link {
            to: to,
            span {
                title: "{label}",
                style: "color:white; display: flex; align-items: center; gap: 6px;",
                Icon { icon: icon, style: "width: 24px; height: 24px;" }
                "{label}"
            }
        }
    }
}
