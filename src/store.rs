//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use housework_form::{DoneHouseworkRequest, FamilyMember, Housework, HouseworkMember};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Houseworks of the current family
    pub houseworks: Vec<Housework>,
    /// Members selectable as completers
    pub members: Vec<FamilyMember>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Apply a completed request locally: new status, newly added members appended
pub fn store_apply_done(store: &AppStore, request: &DoneHouseworkRequest) {
    let members = store.members().get_untracked();
    if let Some(hw) = store.houseworks().write().iter_mut().find(|hw| hw.id == request.housework_id) {
        hw.status = request.status;
        for id in &request.member_ids {
            if let Some(fm) = members.iter().find(|m| m.id() == *id) {
                hw.housework_members.push(HouseworkMember { member: fm.member.clone() });
            }
        }
    }
}
