//! Done Housework Dialog
//!
//! Modal form that marks a housework as done and attributes it to members.
//! Only members not yet recorded on the housework are passed to
//! `done_housework`.

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use housework_form::{
    AssignedCache, CompletionFuture, DialogSession, DoneHouseworkRequest, FamilyMember, Field,
    FormConfig, Housework, MemberId, Phase,
};

use crate::components::MemberSelect;

/// Done-housework dialog
///
/// # Arguments
/// * `housework` - Housework being completed
/// * `members` - Members selectable as completers
/// * `is_open` - Visibility; each opening starts a new session
/// * `on_close` - Called when the dialog closes itself
/// * `done_housework` - Completion callback, awaited before closing
#[component]
pub fn DoneHouseworkDialog(
    #[prop(into)] housework: Signal<Housework>,
    #[prop(into)] members: Signal<Vec<FamilyMember>>,
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] done_housework: Callback<DoneHouseworkRequest, CompletionFuture>,
) -> impl IntoView {
    let config = StoredValue::new(use_context::<FormConfig>().unwrap_or_default());
    // Outlives individual sessions so reopening the same housework reuses it
    let cache = StoredValue::new(AssignedCache::default());

    view! {
        <Show when=move || is_open.get()>
            <DialogBody
                housework=housework
                members=members
                on_close=on_close
                done_housework=done_housework
                cache=cache
                config=config
            />
        </Show>
    }
}

#[component]
fn DialogBody(
    housework: Signal<Housework>,
    members: Signal<Vec<FamilyMember>>,
    on_close: Callback<()>,
    done_housework: Callback<DoneHouseworkRequest, CompletionFuture>,
    cache: StoredValue<AssignedCache>,
    config: StoredValue<FormConfig>,
) -> impl IntoView {
    let snapshot = housework.get_untracked();
    let cfg = config.get_value();
    let opened = cache
        .try_update_value(|c| DialogSession::open(&snapshot, c, &cfg))
        .unwrap_or_else(|| DialogSession::open(&snapshot, &mut AssignedCache::default(), &cfg));
    let session = RwSignal::new(opened);
    let labels = cfg.labels;

    let submitting = move || session.with(|s| s.is_submitting());

    let cancel = move |_: MouseEvent| {
        if session.try_update(|s| s.cancel()) == Some(Phase::Closed) {
            on_close.run(());
        }
    };

    let confirm = move |_: MouseEvent| {
        let request = match session.try_update(|s| s.begin_submit()) {
            Some(Ok(request)) => request,
            Some(Err(e)) => {
                log::debug!("[DIALOG] Submit blocked: {}", e);
                return;
            }
            None => return,
        };
        spawn_local(async move {
            let result = done_housework.run(request).await;
            if session.try_update(|s| s.settle(result)) == Some(Phase::Closed) {
                on_close.run(());
            }
        });
    };

    view! {
        <div class="dialog-backdrop" on:click=cancel>
            <div class="dialog" role="dialog" aria-modal="true" on:click=|ev| ev.stop_propagation()>
                <h2 class="dialog-title">{labels.title}</h2>
                <div class="dialog-content">
                    <label class="form-control status-control">
                        <input
                            type="checkbox"
                            prop:checked=move || session.with(|s| s.form().status)
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                session.update(|s| s.set_status(checked));
                            }
                        />
                        <span>{labels.status}</span>
                    </label>
                    <MemberSelect
                        label=labels.members
                        members=members
                        selected=Signal::derive(move || session.with(|s| s.form().member_ids.clone()))
                        error=Signal::derive(move || {
                            session.with(|s| s.error(Field::MemberIds).map(str::to_string))
                        })
                        on_toggle=Callback::new(move |id: MemberId| session.update(|s| s.toggle_member(id)))
                    />
                    {move || session.with(|s| {
                        s.completion_error().map(|e| {
                            let message = e.to_string();
                            view! { <p class="form-error">{message}</p> }
                        })
                    })}
                </div>
                <div class="dialog-actions">
                    <button class="cancel-btn" disabled=submitting on:click=cancel>
                        {labels.cancel}
                    </button>
                    <span class="spacer"></span>
                    <button class="confirm-btn" disabled=submitting on:click=confirm>
                        {labels.confirm}
                    </button>
                </div>
            </div>
        </div>
    }
}
