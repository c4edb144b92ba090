//! Banner showing the latest notice.

use leptos::prelude::*;

use crate::state::notices::NoticeState;

/// Dismissable banner for the current notice, if any.
#[component]
pub fn NoticeBar() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    let current = move || notices.with(|state| state.current().cloned());
    let on_dismiss = move |_| notices.update(NoticeState::dismiss);

    view! {
        {move || {
            current()
                .map(|notice| {
                    let class = format!("notice-bar notice-bar--{}", notice.level.as_str());
                    view! {
                        <div class=class role="alert">
                            <span class="notice-bar__message">{notice.message}</span>
                            <button class="btn notice-bar__dismiss" on:click=on_dismiss>
                                "OK"
                            </button>
                        </div>
                    }
                })
        }}
    }
}
