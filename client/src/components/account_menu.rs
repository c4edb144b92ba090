//! Avatar button with the logout dropdown.

use intake::ReportForm;
use leptos::prelude::*;

use crate::state::notices::NoticeState;

/// Avatar that toggles a dropdown holding the logout stub.
#[component]
pub fn AccountMenu(form: RwSignal<ReportForm>, #[prop(into)] initials: String) -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    let on_toggle = move |_| form.update(ReportForm::toggle_account_menu);
    let on_logout = move |_| {
        let notice = form.with(ReportForm::logout);
        notices.update(|state| state.push(notice));
    };

    view! {
        <div class="avatar-container">
            <button class="avatar" on:click=on_toggle>
                {initials}
            </button>
            <Show when=move || form.with(ReportForm::menu_open)>
                <div class="dropdown-menu">
                    <button on:click=on_logout>"Logout"</button>
                </div>
            </Show>
        </div>
    }
}
