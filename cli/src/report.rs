//! `report` subcommand arguments and form filling.

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;

use std::path::PathBuf;

use clap::Args;
use intake::{FieldId, ReportForm};

use crate::CliError;
use crate::files::read_attachment;

/// Report fields default to empty so missing ones are reported together by
/// the form's validation instead of one at a time by clap.
#[derive(Args, Debug, Default)]
pub(crate) struct ReportArgs {
    #[arg(long, default_value = "")]
    pub roll_number: String,

    #[arg(long, default_value = "")]
    pub name: String,

    #[arg(long, default_value = "", help = "sapphire, pearl, emerald, diamond, ruby or coral")]
    pub hostel: String,

    #[arg(long, default_value = "")]
    pub room_no: String,

    #[arg(
        long,
        default_value = "",
        help = "electrical, carpenter, restroom, roomWork, vending, plumbing or other"
    )]
    pub category: String,

    #[arg(long, default_value = "")]
    pub queries: String,

    #[arg(long, help = "Optional image to attach")]
    pub image: Option<PathBuf>,

    #[arg(long, env = "INTAKE_REPORT_URL", help = "Deliver the validated report to this URL")]
    pub submit_to: Option<String>,
}

impl ReportArgs {
    fn value(&self, field: FieldId) -> &str {
        match field {
            FieldId::RollNumber => &self.roll_number,
            FieldId::Name => &self.name,
            FieldId::Hostel => &self.hostel,
            FieldId::RoomNo => &self.room_no,
            FieldId::Category => &self.category,
            FieldId::Queries => &self.queries,
        }
    }
}

/// Build a form from the arguments, one `update_field` per flag.
pub(crate) fn fill_form(args: &ReportArgs) -> Result<ReportForm, CliError> {
    let mut form = ReportForm::new();
    for field in FieldId::ALL {
        form.update_field(field, args.value(field))?;
    }
    if let Some(path) = &args.image {
        form.attach_image(Some(read_attachment(path)?));
    }
    Ok(form)
}
