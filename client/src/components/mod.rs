//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components bind `intake` state machines to the DOM. Form and upload state
//! arrive as signal props from their page; feedback goes out through the
//! shared notice context.

pub mod account_menu;
pub mod fault_report_form;
pub mod notice_bar;
pub mod upload_widget;
