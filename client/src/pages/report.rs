//! Hostel fault-report page: header with the account menu, then the form.

use intake::ReportForm;
use leptos::prelude::*;

use crate::components::account_menu::AccountMenu;
use crate::components::fault_report_form::FaultReportForm;

#[component]
pub fn ReportPage() -> impl IntoView {
    let form = RwSignal::new(ReportForm::new());

    view! {
        <div class="report-page">
            <header class="header">
                <div class="logo-section">
                    <div class="logo">"BIT"</div>
                </div>
                <h1 class="title">"Hostel Fault Reporting Portal"</h1>
                <AccountMenu form=form initials="AS"/>
            </header>
            <FaultReportForm form=form/>
        </div>
    }
}
