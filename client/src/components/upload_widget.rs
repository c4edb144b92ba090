//! Image prediction widget bound to an `intake::UploadSession`.

use intake::UploadSession;
use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;

use crate::state::notices::NoticeState;
use crate::util::file::{PickedFile, picked_file, read_picked};

/// Upload state over browser file handles. `File` is not `Send`, so the
/// signal lives in local storage.
pub type UploadState = RwSignal<UploadSession<PickedFile>, LocalStorage>;

/// Pick an image, preview it, send it to `POST /predict`, show the label.
#[component]
pub fn UploadWidget(session: UploadState) -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    let on_file_change = move |ev: leptos::ev::Event| {
        let Some(file) = picked_file(&ev) else {
            log::debug!("picker emptied");
            session.update(UploadSession::clear_selection);
            return;
        };
        let Some(ticket) = session.try_update(|s| s.begin_selection(file.clone())) else {
            return;
        };
        leptos::task::spawn_local(async move {
            let name = file.name();
            let result = read_picked(&file).await.map(|image| image.data_uri());
            if let Err(err) = &result {
                log::debug!("no preview for {name}: {err}");
            }
            let applied = session
                .try_update(|s| s.finish_selection(ticket, result))
                .unwrap_or(false);
            if !applied {
                log::debug!("preview for {name} not applied");
            }
        });
    };

    let on_predict = move |_| {
        let ticket = match session.try_update(UploadSession::begin_submit) {
            Some(Ok(ticket)) => ticket,
            Some(Err(rejected)) => {
                if let Some(notice) = rejected.notice() {
                    notices.update(|state| state.push(notice));
                }
                return;
            }
            None => return,
        };
        log::debug!("predicting {}", ticket.file().name());
        leptos::task::spawn_local(async move {
            let result = crate::net::api::predict(ticket.file()).await;
            match &result {
                Ok(prediction) => log::info!("prediction: {}", prediction.label),
                Err(err) => log::warn!("prediction failed: {err}"),
            }
            if let Some(notice) = session.try_update(|s| s.finish_submit(&ticket, result)).flatten() {
                notices.update(|state| state.push(notice));
            }
        });
    };

    let trigger = move || session.with(UploadSession::trigger);
    let preview = move || session.with(|s| s.preview().map(ToOwned::to_owned));
    let result_label = move || session.with(|s| s.result_label().unwrap_or_default().to_owned());

    view! {
        <section class="upload-widget">
            <input type="file" id="fileInput" accept="image/*" on:change=on_file_change/>
            <button
                id="uploadBtn"
                class="btn btn--primary"
                disabled=move || !trigger().enabled
                on:click=on_predict
            >
                {move || trigger().label}
            </button>
            <div id="preview" class="upload-widget__preview">
                {move || preview().map(|src| view! { <img src=src alt="Selected image"/> })}
            </div>
            <div
                id="result"
                class="upload-widget__result"
                hidden=move || !session.with(UploadSession::result_visible)
            >
                <span class="upload-widget__result-title">"Prediction: "</span>
                <span id="label">{result_label}</span>
            </div>
        </section>
    }
}
