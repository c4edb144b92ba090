//! Standalone image classifier page.

use intake::UploadSession;
use leptos::prelude::*;

use crate::components::upload_widget::{UploadState, UploadWidget};

#[component]
pub fn ClassifyPage() -> impl IntoView {
    let session: UploadState = RwSignal::new_local(UploadSession::new());

    view! {
        <div class="classify-page">
            <h1 class="title">"Image Type Classifier"</h1>
            <UploadWidget session=session/>
        </div>
    }
}
