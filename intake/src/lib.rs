//! Client-side intake workflow model shared by the web UI and the CLI.
//!
//! This crate owns the two interaction state machines behind the hostel
//! intake front ends: the fault-report form ([`report::ReportForm`]) and the
//! image prediction widget ([`upload::UploadSession`]). It performs no I/O.
//! Callers feed it user input and settled async results, and render the
//! values it hands back, including structured [`notice::Notice`] feedback.

pub mod attachment;
pub mod notice;
pub mod predict;
pub mod report;
pub mod upload;

pub use attachment::{Attachment, DecodeError, guess_mime};
pub use notice::{Notice, NoticeLevel};
pub use predict::{PREDICT_ENDPOINT, PREDICT_FILE_FIELD, Prediction, PredictError, parse_prediction};
pub use report::{
    Category, FieldError, FieldId, Hostel, ImageTicket, Report, ReportDraft, ReportForm,
    SubmitOutcome,
};
pub use upload::{
    PredictTicket, RequestState, SelectionTicket, SubmitRejected, Trigger, UploadSession,
};
