//! Page navigation and page size of the explore-cases table.

use common::explore_table::CASES_TABLE_PREFIX;
use common::pagination::Paging;
use common::portal_const::{EXPLORATION_PATH, PAGE_SIZE_OPTIONS};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::{MdChevronLeft, MdChevronRight, MdFirstPage, MdLastPage}};

use crate::pages::explore_page::ExplorePageState;
use crate::routes::navigate_to;

const PAGE_WINDOW_RADIUS: u64 = 2;

#[component]
pub fn PaginationControls(total: ReadSignal<u64>) -> Element {
    let state = use_context::<ExplorePageState>();
    let paging = use_memo(move || Paging::from_query(&state.query.read(), CASES_TABLE_PREFIX, *total.read()));
    let go_to_page = Callback::new(move |page: u64| {
        let target = paging.read().page_target(EXPLORATION_PATH, &state.query.read(), page);
        navigate_to(&target);
    });
    let current = paging.read().current_page();
    let last = paging.read().page_count().max(1);
    let showing = paging.read().showing_text("cases");

    rsx! {
        div {
            id: "x-explore-pagination",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 8px;
                padding: 8px 0;
                font-size: 14px;
            ",
            span { "Show" }
            select {
                value: "{paging.read().size}",
                onchange: move |e| {
                    let Ok(size) = e.value().parse::<u64>() else { return };
                    let target = paging.read().size_target(EXPLORATION_PATH, &state.query.read(), size);
                    navigate_to(&target);
                },
                for size in PAGE_SIZE_OPTIONS.iter() {
                    option { key: "{size}", value: "{size}", selected: *size == paging.read().size, "{size}" }
                }
            }
            span { "{showing}" }

            div { style: "flex-grow: 1;" }

            PageButton { label: "First page", disabled: current <= 1, onclick: move |_| go_to_page.call(1),
                Icon { icon: MdFirstPage, style: "width: 18px; height: 18px;" }
            }
            PageButton { label: "Previous page", disabled: current <= 1, onclick: move |_| go_to_page.call(current.saturating_sub(1)),
                Icon { icon: MdChevronLeft, style: "width: 18px; height: 18px;" }
            }
            for page in paging.read().page_window(PAGE_WINDOW_RADIUS) {
                PageButton {
                    key: "{page}",
                    label: "Page {page}",
                    active: page == current,
                    onclick: move |_| go_to_page.call(page),
                    "{page}"
                }
            }
            PageButton { label: "Next page", disabled: current >= last, onclick: move |_| go_to_page.call(current + 1),
                Icon { icon: MdChevronRight, style: "width: 18px; height: 18px;" }
            }
            PageButton { label: "Last page", disabled: current >= last, onclick: move |_| go_to_page.call(last),
                Icon { icon: MdLastPage, style: "width: 18px; height: 18px;" }
            }
        }
    }
}

#[component]
fn PageButton(
    label: String,
    #[props(default)] disabled: bool,
    #[props(default)] active: bool,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let background = if active { "#1F6FB2" } else { "white" };
    let color = if active { "white" } else { "#111827" };
    rsx! {
        button {
            title: "{label}",
            disabled,
            style: "
                min-width: 30px;
                height: 30px;
                border: 1px solid #D1D5DB;
                border-radius: 6px;
                background: {background};
                color: {color};
                cursor: pointer;
                display: flex;
                align-items: center;
                justify-content: center;
            ",
            onclick: move |e| onclick.call(e),
            {children}
        }
    }
}
