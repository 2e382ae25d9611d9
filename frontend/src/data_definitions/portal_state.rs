//! Application state shared through context: cart, column arrangement of
//! the explore table and case sets. Provided once by `App`, persisted to
//! browser local storage.

use std::collections::BTreeSet;

use common::cart::{CartAction, CartState, CartUpdate};
use common::case_sets::{CaseSetError, CaseSets};
use common::explore_table::explore_case_columns;
use common::table_columns::TableColumnsState;
use dioxus::prelude::*;
use serde::{Serialize, de::DeserializeOwned};

const CART_STORAGE_KEY: &str = "case-portal.cart";
const COLUMNS_STORAGE_KEY: &str = "case-portal.explore-case-table.columns";
const CASE_SETS_STORAGE_KEY: &str = "case-portal.case-sets";

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

#[cfg(not(target_arch = "wasm32"))]
fn local_storage() -> Option<web_sys::Storage> {
    None
}

fn load_stored<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = local_storage()?.get_item(key).ok()??;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            dioxus::logger::tracing::warn!("discarding stored {key}: {e}");
            None
        }
    }
}

fn store<T: Serialize>(key: &str, value: &T) {
    let Some(storage) = local_storage() else { return };
    let result = serde_json::to_string(value)
        .map_err(anyhow::Error::from)
        .and_then(|raw| storage.set_item(key, &raw).map_err(|e| anyhow::anyhow!("{e:?}")));
    if let Err(e) = result {
        dioxus::logger::tracing::error!("failed to persist {key}: {e:#}");
    }
}

#[derive(Clone, Copy, PartialEq)]
pub struct CartContext {
    pub cart: Signal<CartState>,
}

impl CartContext {
    pub fn dispatch(mut self, action: CartAction) -> CartUpdate {
        let update = self.cart.write().apply(action);
        store(CART_STORAGE_KEY, &*self.cart.peek());
        dioxus::logger::tracing::info!(
            "cart: {} added, {} removed, {} rejected",
            update.added,
            update.removed,
            update.rejected
        );
        update
    }
}

#[derive(Clone, Copy, PartialEq)]
pub struct TableColumnsContext {
    pub columns: Signal<TableColumnsState>,
}

impl TableColumnsContext {
    pub fn update(mut self, f: impl FnOnce(&mut TableColumnsState)) {
        f(&mut self.columns.write());
        store(COLUMNS_STORAGE_KEY, &*self.columns.peek());
    }

    pub fn reset(mut self) {
        self.columns.set(TableColumnsState::defaults(&explore_case_columns()));
        store(COLUMNS_STORAGE_KEY, &*self.columns.peek());
    }
}

#[derive(Clone, Copy, PartialEq)]
pub struct CaseSetsContext {
    pub sets: Signal<CaseSets>,
}

impl CaseSetsContext {
    /// Runs a set operation and persists the result when it succeeds.
    pub fn apply(
        mut self,
        f: impl FnOnce(&mut CaseSets) -> Result<usize, CaseSetError>,
    ) -> Result<usize, CaseSetError> {
        let result = f(&mut self.sets.write());
        if result.is_ok() {
            store(CASE_SETS_STORAGE_KEY, &*self.sets.peek());
        }
        result
    }
}

/// Selected case ids of one table.
#[derive(Clone, Copy, PartialEq)]
pub struct CaseSelection {
    pub selected: Signal<BTreeSet<String>>,
}

pub fn use_case_selection_provider() -> CaseSelection {
    let selected = use_signal(BTreeSet::new);
    use_context_provider(move || CaseSelection { selected })
}

/// Creates the shared state contexts. Stored values are restored after the
/// first render so server and client markup agree.
pub fn use_portal_state_provider() {
    let mut cart = use_signal(CartState::default);
    let mut columns = use_signal(|| TableColumnsState::defaults(&explore_case_columns()));
    let mut sets = use_signal(CaseSets::default);
    use_context_provider(move || CartContext { cart });
    use_context_provider(move || TableColumnsContext { columns });
    use_context_provider(move || CaseSetsContext { sets });

    use_effect(move || {
        if let Some(stored) = load_stored::<CartState>(CART_STORAGE_KEY) {
            cart.set(stored);
        }
        if let Some(stored) = load_stored::<TableColumnsState>(COLUMNS_STORAGE_KEY) {
            columns.set(stored.sanitized(&explore_case_columns()));
        }
        if let Some(stored) = load_stored::<CaseSets>(CASE_SETS_STORAGE_KEY) {
            sets.set(stored);
        }
    });
}
