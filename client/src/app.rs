//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::notice_bar::NoticeBar;
use crate::pages::{classify::ClassifyPage, report::ReportPage};
use crate::state::notices::NoticeState;

/// Root application component.
///
/// The notice channel is the only shared context; each page owns its own
/// form or upload state.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let notices = RwSignal::new(NoticeState::default());
    provide_context(notices);

    view! {
        <Title text="Hostel Fault Reporting Portal"/>
        <NoticeBar/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ReportPage/>
                <Route path=StaticSegment("classify") view=ClassifyPage/>
            </Routes>
        </Router>
    }
}
