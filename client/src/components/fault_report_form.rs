//! Fault-report form bound to an `intake::ReportForm`.
//!
//! The upload label is derived from `selected_file_name()` at render time;
//! nothing about its markup is stored in state.

#[cfg(test)]
#[path = "fault_report_form_test.rs"]
mod fault_report_form_test;

use intake::{Category, FieldId, Hostel, ReportForm, SubmitOutcome};
use leptos::prelude::*;

use crate::state::notices::NoticeState;
use crate::util::file::{picked_file, read_picked};

const UPLOAD_PROMPT: &str = "Upload image(Optional)";

/// Marker and text of the cosmetic upload label.
pub(crate) fn upload_label(file_name: Option<&str>) -> (&'static str, String) {
    match file_name {
        Some(name) => ("✓", format!("Image: {name}")),
        None => ("+", UPLOAD_PROMPT.to_owned()),
    }
}

fn hostel_options() -> Vec<(&'static str, &'static str)> {
    Hostel::ALL.iter().map(|h| (h.as_str(), h.label())).collect()
}

fn category_options() -> Vec<(&'static str, &'static str)> {
    Category::ALL.iter().map(|c| (c.as_str(), c.label())).collect()
}

fn set_field(form: RwSignal<ReportForm>, field: FieldId, value: String) {
    if let Some(Err(err)) = form.try_update(|f| f.update_field(field, value)) {
        log::warn!("ignored form input: {err}");
    }
}

fn text_input(form: RwSignal<ReportForm>, field: FieldId) -> impl IntoView {
    view! {
        <div class="form-group">
            <input
                type="text"
                id=field.dom_id()
                placeholder=field.label()
                aria-required="true"
                prop:value=move || form.with(|f| f.draft().field_value(field).to_owned())
                on:input=move |ev| set_field(form, field, event_target_value(&ev))
            />
        </div>
    }
}

fn select_input(
    form: RwSignal<ReportForm>,
    field: FieldId,
    options: Vec<(&'static str, &'static str)>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <select
                id=field.dom_id()
                aria-required="true"
                prop:value=move || form.with(|f| f.draft().field_value(field).to_owned())
                on:change=move |ev| set_field(form, field, event_target_value(&ev))
            >
                <option value="">{field.label()}</option>
                {options
                    .into_iter()
                    .map(|(value, label)| view! { <option value=value>{label}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}

/// The report form. Validation is local and submission never leaves the
/// browser: a valid report is logged, confirmed and cleared.
#[component]
pub fn FaultReportForm(form: RwSignal<ReportForm>) -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    let on_image_change = move |ev: leptos::ev::Event| {
        let Some(file) = picked_file(&ev) else {
            form.update(|f| f.attach_image(None));
            return;
        };
        let Some(ticket) = form.try_update(ReportForm::begin_image) else {
            return;
        };
        leptos::task::spawn_local(async move {
            let name = file.name();
            let result = read_picked(&file).await;
            if let Err(err) = &result {
                log::warn!("could not attach {name}: {err}");
            }
            if !form.try_update(|f| f.finish_image(ticket, result)).unwrap_or(false) {
                log::debug!("image {name} not attached");
            }
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(outcome) = form.try_update(ReportForm::submit) else {
            return;
        };
        match &outcome {
            SubmitOutcome::Submitted(report) => log::info!(
                "report submitted: hostel={} category={} image={}",
                report.hostel.as_str(),
                report.category.as_str(),
                report.image.is_some()
            ),
            SubmitOutcome::Rejected { missing } => {
                log::debug!("report rejected: {} required fields missing", missing.len());
            }
        }
        notices.update(|state| state.push(outcome.notice()));
    };

    let label = move || form.with(|f| upload_label(f.selected_file_name()));
    let marker_class = move || {
        if form.with(|f| f.selected_file_name().is_some()) {
            "upload-icon upload-icon--attached"
        } else {
            "upload-icon"
        }
    };

    view! {
        <div class="form-container">
            <form novalidate=true on:submit=on_submit>
                <div class="form-grid">
                    {text_input(form, FieldId::RollNumber)}
                    {text_input(form, FieldId::Name)}
                    {select_input(form, FieldId::Hostel, hostel_options())}
                    {text_input(form, FieldId::RoomNo)}
                    <div class="form-group">
                        <label for="imageUpload" class="upload-btn">
                            <span class=marker_class>{move || label().0}</span>
                            " "
                            {move || label().1}
                        </label>
                        <input
                            type="file"
                            id="imageUpload"
                            class="file-input"
                            accept="image/*"
                            on:change=on_image_change
                        />
                    </div>
                    {select_input(form, FieldId::Category, category_options())}
                    <div class="form-group form-group--wide">
                        <textarea
                            id=FieldId::Queries.dom_id()
                            class="textarea-large"
                            placeholder=FieldId::Queries.label()
                            aria-required="true"
                            prop:value=move || form.with(|f| f.draft().queries.clone())
                            on:input=move |ev| {
                                set_field(form, FieldId::Queries, event_target_value(&ev));
                            }
                        ></textarea>
                    </div>
                </div>
                <button type="submit" class="submit-btn">
                    "Submit"
                </button>
            </form>
        </div>
    }
}
