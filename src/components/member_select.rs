//! Member Select Component
//!
//! Multi-select checkbox list of family members with a summary of the
//! current selection.

use leptos::prelude::*;

use housework_form::{selected_names, FamilyMember, MemberId};

#[component]
pub fn MemberSelect(
    #[prop(into)] label: String,
    #[prop(into)] members: Signal<Vec<FamilyMember>>,
    #[prop(into)] selected: Signal<Vec<MemberId>>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] on_toggle: Callback<MemberId>,
) -> impl IntoView {
    let summary = move || members.with(|ms| selected.with(|ids| selected_names(ms, ids)));
    let control_class = move || {
        if error.with(Option::is_some) {
            "form-control member-select error"
        } else {
            "form-control member-select"
        }
    };

    view! {
        <div class=control_class>
            <span class="input-label">{label}</span>
            <div class="member-select-value">{summary}</div>
            <ul class="member-options">
                <For
                    each=move || members.get()
                    key=|fm| fm.id()
                    children=move |fm| {
                        let id = fm.id();
                        let is_selected = move || selected.with(|ids| ids.contains(&id));
                        view! {
                            <li class="member-option">
                                <label>
                                    <input
                                        type="checkbox"
                                        prop:checked=is_selected
                                        on:change=move |_| on_toggle.run(id)
                                    />
                                    <span>{fm.member.name}</span>
                                </label>
                            </li>
                        }
                    }
                />
            </ul>
            <p class="helper-text">{move || error.get().unwrap_or_default()}</p>
        </div>
    }
}
