//! Housework Board App
//!
//! Loads houseworks and family members, and lists houseworks with their
//! done dialogs.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::config::load_form_config;
use crate::context::AppContext;
use crate::components::HouseworkList;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let store = Store::new(AppState::default());

    // Provide context to all children
    provide_context(AppContext::new((reload_trigger, set_reload_trigger)));
    provide_context(store);
    provide_context(load_form_config());

    // Members rarely change, load once on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match commands::list_family_members().await {
                Ok(loaded) => *store.members().write() = loaded,
                Err(e) => log::warn!("[APP] Loading members failed: {}", e),
            }
        });
    });

    // Load houseworks when trigger changes
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        log::debug!("[APP] Loading houseworks, trigger={}", trigger);
        spawn_local(async move {
            match commands::list_houseworks().await {
                Ok(loaded) => {
                    log::debug!("[APP] Loaded {} houseworks", loaded.len());
                    *store.houseworks().write() = loaded;
                }
                Err(e) => log::warn!("[APP] Loading houseworks failed: {}", e),
            }
        });
    });

    view! {
        <main class="main-content">
            <h1>"家事"</h1>
            <HouseworkList />
            <p class="item-count">{move || format!("{} houseworks", store.houseworks().read().len())}</p>
        </main>
    }
}
