//! Image prediction widget state.
//!
//! DESIGN
//! ======
//! Two async edges feed this state machine: reading a picked file for its
//! preview and the `POST /predict` round trip. Both are keyed by a
//! monotonically increasing generation, so a read or response that settles
//! after it was superseded is dropped instead of overwriting newer state.
//!
//! The session is generic over the selected file handle `F`. The browser
//! keeps the picked `File` itself and uploads it as is; the CLI selects an
//! in-memory [`Attachment`]. A file is selected the moment it is picked, so
//! a slow or failed preview read never blocks a submit.
//!
//! Request lifecycle: `Idle -> InFlight -> Succeeded | Failed`, and
//! `Succeeded | Failed -> InFlight` on retry. While in flight further submits
//! are ignored. Starting a submit hides any previous result.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use crate::attachment::{Attachment, DecodeError};
use crate::notice::Notice;
use crate::predict::{PredictError, Prediction};

pub const CHOOSE_FILE_MESSAGE: &str = "Please choose an image first.";
pub const IDLE_LABEL: &str = "Predict";
pub const BUSY_LABEL: &str = "Predicting...";

/// Where the prediction request stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RequestState {
    #[default]
    Idle,
    InFlight,
    Succeeded,
    Failed,
}

/// Render state of the submit button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Trigger {
    pub enabled: bool,
    pub label: &'static str,
}

/// Identifies one file pick; see [`UploadSession::begin_selection`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionTicket(u64);

/// Permission to run one prediction request for the selected file.
#[derive(Clone, Debug)]
pub struct PredictTicket<F = Attachment> {
    id: u64,
    file: F,
}

impl<F> PredictTicket<F> {
    /// The file to send as the `file` multipart part.
    #[must_use]
    pub fn file(&self) -> &F {
        &self.file
    }
}

/// Why [`UploadSession::begin_submit`] did not start a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitRejected {
    /// Nothing is picked.
    NoFile,
    /// A request is already in flight.
    Busy,
}

impl SubmitRejected {
    /// Feedback for the user. Overlapping submits are ignored silently.
    #[must_use]
    pub fn notice(self) -> Option<Notice> {
        match self {
            Self::NoFile => Some(Notice::warning(CHOOSE_FILE_MESSAGE)),
            Self::Busy => None,
        }
    }
}

/// State behind the upload widget: selection, preview, request, result.
#[derive(Clone, Debug)]
pub struct UploadSession<F = Attachment> {
    selected: Option<F>,
    preview: Option<String>,
    request: RequestState,
    result_label: Option<String>,
    selection_generation: u64,
    request_generation: u64,
}

impl<F> Default for UploadSession<F> {
    fn default() -> Self {
        Self {
            selected: None,
            preview: None,
            request: RequestState::Idle,
            result_label: None,
            selection_generation: 0,
            request_generation: 0,
        }
    }
}

impl<F: Clone> UploadSession<F> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a freshly picked file. It is submittable right away; its
    /// preview appears once [`finish_selection`](Self::finish_selection)
    /// lands with the returned ticket. Any read still pending for an earlier
    /// pick is superseded.
    pub fn begin_selection(&mut self, file: F) -> SelectionTicket {
        self.selection_generation += 1;
        self.selected = Some(file);
        self.preview = None;
        SelectionTicket(self.selection_generation)
    }

    /// Deliver the preview read for a pick, as a `data:` URI.
    ///
    /// Returns `true` when the preview was applied. Stale tickets and read
    /// failures return `false`; a failed read leaves no preview, raises no
    /// notice and keeps the file selected.
    pub fn finish_selection(
        &mut self,
        ticket: SelectionTicket,
        preview: Result<String, DecodeError>,
    ) -> bool {
        if ticket.0 != self.selection_generation {
            return false;
        }
        match preview {
            Ok(uri) => {
                self.preview = Some(uri);
                true
            }
            Err(_) => false,
        }
    }

    /// The picker was emptied: nothing is selected and pending reads are
    /// dropped.
    pub fn clear_selection(&mut self) {
        self.selection_generation += 1;
        self.selected = None;
        self.preview = None;
    }

    /// Start a prediction for the selected file.
    ///
    /// # Errors
    ///
    /// [`SubmitRejected::Busy`] while a request is pending and
    /// [`SubmitRejected::NoFile`] when nothing is selected. Neither changes
    /// state.
    pub fn begin_submit(&mut self) -> Result<PredictTicket<F>, SubmitRejected> {
        if self.request == RequestState::InFlight {
            return Err(SubmitRejected::Busy);
        }
        let file = self.selected.clone().ok_or(SubmitRejected::NoFile)?;
        self.request_generation += 1;
        self.request = RequestState::InFlight;
        self.result_label = None;
        Ok(PredictTicket {
            id: self.request_generation,
            file,
        })
    }

    /// Settle the request started by `ticket`.
    ///
    /// The trigger is restored on every path. A success reveals the label
    /// verbatim; a failure leaves the result region alone and yields exactly
    /// one error notice. Results for a ticket that is no longer pending are
    /// ignored.
    pub fn finish_submit(
        &mut self,
        ticket: &PredictTicket<F>,
        result: Result<Prediction, PredictError>,
    ) -> Option<Notice> {
        if self.request != RequestState::InFlight || ticket.id != self.request_generation {
            return None;
        }
        match result {
            Ok(prediction) => {
                self.request = RequestState::Succeeded;
                self.result_label = Some(prediction.label);
                None
            }
            Err(err) => {
                self.request = RequestState::Failed;
                Some(Notice::error(format!("Prediction failed: {err}")))
            }
        }
    }

    #[must_use]
    pub fn selected(&self) -> Option<&F> {
        self.selected.as_ref()
    }

    /// Data URI of the selected file.
    #[must_use]
    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    #[must_use]
    pub fn request_state(&self) -> RequestState {
        self.request
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.request == RequestState::InFlight
    }

    #[must_use]
    pub fn trigger(&self) -> Trigger {
        if self.is_busy() {
            Trigger {
                enabled: false,
                label: BUSY_LABEL,
            }
        } else {
            Trigger {
                enabled: true,
                label: IDLE_LABEL,
            }
        }
    }

    #[must_use]
    pub fn result_label(&self) -> Option<&str> {
        self.result_label.as_deref()
    }

    /// Whether the result region is shown.
    #[must_use]
    pub fn result_visible(&self) -> bool {
        self.result_label.is_some()
    }
}

impl UploadSession<Attachment> {
    /// Pick a file that is already in memory and preview it immediately.
    pub fn select_file(&mut self, file: Attachment) {
        let preview = file.data_uri();
        let ticket = self.begin_selection(file);
        self.finish_selection(ticket, Ok(preview));
    }
}
