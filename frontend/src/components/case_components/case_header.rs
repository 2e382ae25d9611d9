//! Case title, cart toggle and count cards.

use common::case_view::{annotations_link, cart_operation, files_link, CartOperation};
use common::pagination::format_count;
use common::query::NavTarget;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_action_icons::{MdAddShoppingCart, MdRemoveShoppingCart}, md_editor_icons::MdInsertDriveFile, md_editor_icons::MdModeComment}};

use crate::{components::notify::notify, data_definitions::portal_state::CartContext, pages::case_page::CasePageState};

#[component]
pub fn CaseTitleBar() -> Element {
    let state = use_context::<CasePageState>();
    let title = use_memo(move || {
        let data = state.data.read();
        format!("{} / {}", data.node.project.project_id, data.node.submitter_id)
    });
    rsx! {
        div {
            id: "x-case-title-bar",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 12px;
                padding: 12px 0;
                border-bottom: 1px solid rgb(164, 164, 164);
            ",
            span {
                style: "
                    background: #1F6FB2;
                    color: white;
                    border-radius: 50%;
                    width: 32px;
                    height: 32px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-weight: 600;
                ",
                "CA"
            }
            h1 { style: "font-size: 24px; font-weight: 400; color: rgb(75, 87, 112);", "{title}" }
            div { style: "flex-grow: 1;" }
            CartToggleButton {}
        }
    }
}

/// Adds every file of the case to the cart, or removes them all once they are in.
#[component]
fn CartToggleButton() -> Element {
    let state = use_context::<CasePageState>();
    let cart_ctx = use_context::<CartContext>();
    let operation = use_memo(move || cart_operation(&state.data.read().files, &cart_ctx.cart.read()));

    let on_click = use_callback(move |_: ()| {
        let op = operation();
        let files = state.data.read().files.clone();
        let update = cart_ctx.dispatch(op.action(files));
        let (title, description) = match op {
            CartOperation::AddAll => (
                format!("Added {} files to the cart.", format_count(update.added as u64)),
                if update.rejected > 0 {
                    format!("{} files were not added: the cart is full.", format_count(update.rejected as u64))
                } else {
                    "All files of this case are now in the cart.".to_string()
                },
            ),
            CartOperation::RemoveAll => (
                format!("Removed {} files from the cart.", format_count(update.removed as u64)),
                "No files of this case are left in the cart.".to_string(),
            ),
        };
        notify(title, description);
    });

    rsx! {
        button {
            class: "x-cart-toggle",
            style: "
                height: 36px;
                padding: 0 12px;
                cursor: pointer;
                border: 1px solid #1F6FB2;
                border-radius: 8px;
                background: white;
                color: #1F6FB2;
                display: flex;
                align-items: center;
                gap: 6px;
                font-size: 14px;
            ",
            disabled: state.data.read().files.is_empty(),
            onclick: move |_e| on_click.call(()),
            if operation() == CartOperation::AddAll {
                Icon { icon: MdAddShoppingCart, style: "width: 20px; height: 20px;" }
            } else {
                Icon { icon: MdRemoveShoppingCart, style: "width: 20px; height: 20px;" }
            }
            "{operation().label()}"
        }
    }
}

#[component]
pub fn CountCards() -> Element {
    let state = use_context::<CasePageState>();
    let files_target = use_memo(move || {
        let data = state.data.read();
        files_link(&data.node, data.total_files)
    });
    let annotations_target = use_memo(move || annotations_link(&state.data.read().node.annotations.hits));
    let total_files = use_memo(move || state.data.read().total_files);
    let total_annotations = use_memo(move || state.data.read().node.annotations.hits.total);

    rsx! {
        div {
            id: "x-case-count-cards",
            style: "
                display: flex;
                flex-direction: row;
                gap: 12px;
            ",
            CountCard { label: "Files", count: total_files(), target: files_target(), is_file: true }
            CountCard { label: "Annotations", count: total_annotations(), target: annotations_target(), is_file: false }
        }
    }
}

#[component]
fn CountCard(label: String, count: u64, target: Option<NavTarget>, is_file: bool) -> Element {
    let count_txt = format_count(count);
    rsx! {
        div {
            class: "x-count-card",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 12px;
                min-width: 180px;
                padding: 12px 16px;
                background: white;
                border: 1px solid #E5E7EB;
                border-radius: 8px;
            ",
            if is_file {
                Icon { icon: MdInsertDriveFile, style: "width: 28px; height: 28px; color: #6B7280;" }
            } else {
                Icon { icon: MdModeComment, style: "width: 28px; height: 28px; color: #6B7280;" }
            }
            div {
                style: "display: flex; flex-direction: column;",
                span { style: "font-size: 13px; color: #6B7280;", "{label}" }
                match target {
                    Some(target) => rsx! {
                        Link { to: target.href(), span { style: "font-size: 22px;", "{count_txt}" } }
                    },
                    None => rsx! { span { style: "font-size: 22px;", "{count_txt}" } },
                }
            }
        }
    }
}
