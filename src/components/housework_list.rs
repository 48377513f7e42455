//! Housework List Component
//!
//! One row per housework, each with its own done-housework dialog.

use leptos::prelude::*;

use housework_form::{CompletionFuture, DoneHouseworkRequest, Housework};

use crate::commands;
use crate::components::DoneHouseworkDialog;
use crate::context::AppContext;
use crate::store::{store_apply_done, use_app_store, AppStateStoreFields};

#[component]
pub fn HouseworkList() -> impl IntoView {
    let store = use_app_store();

    view! {
        <ul class="housework-list">
            <For
                each=move || store.houseworks().get()
                key=|hw| {
                    // Mutable fields too, so a completed housework re-renders with a fresh dialog
                    (hw.id, hw.status, hw.housework_members.len())
                }
                children=move |hw| view! { <HouseworkRow housework=hw /> }
            />
        </ul>
    }
}

#[component]
fn HouseworkRow(housework: Housework) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (is_open, set_is_open) = signal(false);

    let name = housework.name.clone();
    let row_class = if housework.status { "housework-row done" } else { "housework-row" };
    let done_by = housework
        .housework_members
        .iter()
        .map(|hm| hm.member.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let done_housework = Callback::new(move |request: DoneHouseworkRequest| -> CompletionFuture {
        Box::pin(async move {
            commands::done_housework(&request).await?;
            store_apply_done(&store, &request);
            ctx.reload();
            Ok::<(), String>(())
        })
    });

    view! {
        <li class=row_class>
            <span class="housework-name">{name}</span>
            <span class="housework-members">{done_by}</span>
            <button class="done-btn" on:click=move |_| set_is_open.set(true)>"✓"</button>
            <DoneHouseworkDialog
                housework=Signal::derive(move || housework.clone())
                members=Signal::derive(move || store.members().get())
                is_open=is_open
                on_close=Callback::new(move |_: ()| set_is_open.set(false))
                done_housework=done_housework
            />
        </li>
    }
}
