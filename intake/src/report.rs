//! Fault-report form state.
//!
//! DESIGN
//! ======
//! [`ReportForm`] owns a [`ReportDraft`] and is the only thing that mutates
//! it. Submission is local: a valid draft is handed back to the caller as a
//! [`Report`] and the form resets. Wiring a report to a backend is the
//! caller's business (see [`Report::text_parts`] for the multipart layout the
//! CLI uses).
//!
//! STATE MACHINE
//! =============
//! `Editing -> Editing` when validation fails (fields kept) and
//! `Editing -> Submitted -> Editing` when it passes (fields cleared).

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;

use serde::Serialize;

use crate::attachment::{Attachment, DecodeError};
use crate::notice::Notice;

pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in all required fields.";
pub const SUBMITTED_MESSAGE: &str = "Feedback submitted successfully!";
pub const LOGGED_OUT_MESSAGE: &str = "Logged out successfully!";

/// Hostel a fault is reported for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Hostel {
    Sapphire,
    Pearl,
    Emerald,
    Diamond,
    Ruby,
    Coral,
}

impl Hostel {
    pub const ALL: [Self; 6] = [
        Self::Sapphire,
        Self::Pearl,
        Self::Emerald,
        Self::Diamond,
        Self::Ruby,
        Self::Coral,
    ];

    /// Option value as submitted by the form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sapphire => "sapphire",
            Self::Pearl => "pearl",
            Self::Emerald => "emerald",
            Self::Diamond => "diamond",
            Self::Ruby => "ruby",
            Self::Coral => "coral",
        }
    }

    /// Display text for the option.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Sapphire => "Sapphire",
            Self::Pearl => "Pearl",
            Self::Emerald => "Emerald",
            Self::Diamond => "Diamond",
            Self::Ruby => "Ruby",
            Self::Coral => "Coral",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|h| h.as_str() == value)
    }
}

/// Kind of fault being reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Electrical,
    Carpenter,
    Restroom,
    RoomWork,
    Vending,
    Plumbing,
    Other,
}

impl Category {
    pub const ALL: [Self; 7] = [
        Self::Electrical,
        Self::Carpenter,
        Self::Restroom,
        Self::RoomWork,
        Self::Vending,
        Self::Plumbing,
        Self::Other,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Electrical => "electrical",
            Self::Carpenter => "carpenter",
            Self::Restroom => "restroom",
            Self::RoomWork => "roomWork",
            Self::Vending => "vending",
            Self::Plumbing => "plumbing",
            Self::Other => "other",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Electrical => "Electrical",
            Self::Carpenter => "Carpenter",
            Self::Restroom => "Restroom",
            Self::RoomWork => "Room Work",
            Self::Vending => "Vending Machine",
            Self::Plumbing => "Plumbing",
            Self::Other => "Other",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }
}

/// Required scalar fields of the report. The optional image is set through
/// [`ReportForm::attach_image`] instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum FieldId {
    RollNumber,
    Name,
    Hostel,
    RoomNo,
    Category,
    Queries,
}

impl FieldId {
    pub const ALL: [Self; 6] = [
        Self::RollNumber,
        Self::Name,
        Self::Hostel,
        Self::RoomNo,
        Self::Category,
        Self::Queries,
    ];

    /// Element id / multipart part name for the field.
    #[must_use]
    pub fn dom_id(self) -> &'static str {
        match self {
            Self::RollNumber => "rollNumber",
            Self::Name => "name",
            Self::Hostel => "hostel",
            Self::RoomNo => "roomNo",
            Self::Category => "categories",
            Self::Queries => "queries",
        }
    }

    #[must_use]
    pub fn from_dom_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.dom_id() == id)
    }

    /// Placeholder / prompt text.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::RollNumber => "Roll number",
            Self::Name => "Name",
            Self::Hostel => "Select your hostel",
            Self::RoomNo => "Room no",
            Self::Category => "Select your category",
            Self::Queries => "Describe your queries...",
        }
    }
}

/// Rejected field update.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("`{value}` is not a valid option for {}", .field.dom_id())]
    UnknownOption { field: FieldId, value: String },
}

/// Unsubmitted form contents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReportDraft {
    pub roll_number: String,
    pub name: String,
    pub hostel: Option<Hostel>,
    pub room_no: String,
    pub category: Option<Category>,
    pub queries: String,
    pub image: Option<Attachment>,
}

impl ReportDraft {
    /// Current value of a field as the form control shows it. Unselected
    /// options read as `""`.
    #[must_use]
    pub fn field_value(&self, field: FieldId) -> &str {
        match field {
            FieldId::RollNumber => &self.roll_number,
            FieldId::Name => &self.name,
            FieldId::Hostel => self.hostel.map_or("", Hostel::as_str),
            FieldId::RoomNo => &self.room_no,
            FieldId::Category => self.category.map_or("", Category::as_str),
            FieldId::Queries => &self.queries,
        }
    }

    /// Required fields that are blank or unselected, in form order.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<FieldId> {
        FieldId::ALL
            .into_iter()
            .filter(|field| self.field_value(*field).trim().is_empty())
            .collect()
    }

    fn into_report(self, hostel: Hostel, category: Category) -> Report {
        Report {
            roll_number: self.roll_number,
            name: self.name,
            hostel,
            room_no: self.room_no,
            category,
            queries: self.queries,
            image: self.image,
        }
    }
}

/// A draft that passed validation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub roll_number: String,
    pub name: String,
    pub hostel: Hostel,
    pub room_no: String,
    #[serde(rename = "categories")]
    pub category: Category,
    pub queries: String,
    #[serde(skip)]
    pub image: Option<Attachment>,
}

impl Report {
    /// Text parts of the multipart body a report collaborator receives. The
    /// image, when present, travels as an extra file part named `image`.
    #[must_use]
    pub fn text_parts(&self) -> Vec<(&'static str, String)> {
        vec![
            (FieldId::RollNumber.dom_id(), self.roll_number.clone()),
            (FieldId::Name.dom_id(), self.name.clone()),
            (FieldId::Hostel.dom_id(), self.hostel.as_str().to_owned()),
            (FieldId::RoomNo.dom_id(), self.room_no.clone()),
            (FieldId::Category.dom_id(), self.category.as_str().to_owned()),
            (FieldId::Queries.dom_id(), self.queries.clone()),
        ]
    }
}

/// Result of [`ReportForm::submit`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; the draft is untouched.
    Rejected { missing: Vec<FieldId> },
    /// Validation passed; the form has been reset.
    Submitted(Box<Report>),
}

impl SubmitOutcome {
    #[must_use]
    pub fn notice(&self) -> Notice {
        match self {
            Self::Rejected { .. } => Notice::warning(REQUIRED_FIELDS_MESSAGE),
            Self::Submitted(_) => Notice::success(SUBMITTED_MESSAGE),
        }
    }
}

/// The fault-report form: draft plus the account dropdown beside it.
#[derive(Clone, Debug, Default)]
pub struct ReportForm {
    draft: ReportDraft,
    menu_open: bool,
    image_generation: u64,
}

/// Identifies one image pick; see [`ReportForm::begin_image`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageTicket(u64);

impl ReportForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn draft(&self) -> &ReportDraft {
        &self.draft
    }

    /// Set one scalar field. Select fields take their option value; `""`
    /// clears the selection.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::UnknownOption`] for a select value outside the
    /// fixed option set; the draft is left unchanged.
    pub fn update_field(&mut self, field: FieldId, value: impl Into<String>) -> Result<(), FieldError> {
        let value = value.into();
        match field {
            FieldId::RollNumber => self.draft.roll_number = value,
            FieldId::Name => self.draft.name = value,
            FieldId::RoomNo => self.draft.room_no = value,
            FieldId::Queries => self.draft.queries = value,
            FieldId::Hostel => self.draft.hostel = parse_option(field, &value, Hostel::parse)?,
            FieldId::Category => {
                self.draft.category = parse_option(field, &value, Category::parse)?;
            }
        }
        Ok(())
    }

    /// Set or clear the optional image. Supersedes any pick still being
    /// read.
    pub fn attach_image(&mut self, image: Option<Attachment>) {
        self.image_generation += 1;
        self.draft.image = image;
    }

    /// Start reading a newly picked image. The previous image is dropped
    /// straight away since the input no longer holds it.
    pub fn begin_image(&mut self) -> ImageTicket {
        self.attach_image(None);
        ImageTicket(self.image_generation)
    }

    /// Deliver the read started by `ticket`. Returns `true` when the image
    /// was attached. A read that fails, or that lands after a newer pick or
    /// a successful submit, attaches nothing.
    pub fn finish_image(
        &mut self,
        ticket: ImageTicket,
        image: Result<Attachment, DecodeError>,
    ) -> bool {
        if ticket.0 != self.image_generation {
            return false;
        }
        match image {
            Ok(image) => {
                self.draft.image = Some(image);
                true
            }
            Err(_) => false,
        }
    }

    /// Name of the attached image, for the upload label.
    #[must_use]
    pub fn selected_file_name(&self) -> Option<&str> {
        self.draft.image.as_ref().map(|image| image.file_name.as_str())
    }

    /// Validate and, when every required field is present, hand back the
    /// report and reset the draft.
    pub fn submit(&mut self) -> SubmitOutcome {
        let missing = self.draft.missing_fields();
        let (true, Some(hostel), Some(category)) =
            (missing.is_empty(), self.draft.hostel, self.draft.category)
        else {
            return SubmitOutcome::Rejected { missing };
        };
        let report = std::mem::take(&mut self.draft).into_report(hostel, category);
        self.image_generation += 1;
        SubmitOutcome::Submitted(Box::new(report))
    }

    #[must_use]
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_account_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Logout stub. No credentials exist to clear.
    #[must_use]
    pub fn logout(&self) -> Notice {
        Notice::info(LOGGED_OUT_MESSAGE)
    }
}

fn parse_option<T>(
    field: FieldId,
    value: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<Option<T>, FieldError> {
    if value.is_empty() {
        return Ok(None);
    }
    parse(value).map(Some).ok_or_else(|| FieldError::UnknownOption {
        field,
        value: value.to_owned(),
    })
}
