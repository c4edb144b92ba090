use intake::{Category, Hostel, SubmitOutcome};

use super::*;

fn complete_args() -> ReportArgs {
    ReportArgs {
        roll_number: "22CS1042".to_owned(),
        name: "Asha Singh".to_owned(),
        hostel: "pearl".to_owned(),
        room_no: "A-101".to_owned(),
        category: "electrical".to_owned(),
        queries: "Socket sparks when used.".to_owned(),
        ..ReportArgs::default()
    }
}

#[test]
fn complete_args_submit() {
    let mut form = fill_form(&complete_args()).expect("form");
    let SubmitOutcome::Submitted(report) = form.submit() else {
        panic!("expected submission");
    };
    assert_eq!(report.hostel, Hostel::Pearl);
    assert_eq!(report.category, Category::Electrical);
    assert!(report.image.is_none());
}

#[test]
fn blank_args_are_collected_as_missing() {
    let args = ReportArgs {
        name: String::new(),
        category: String::new(),
        ..complete_args()
    };
    let mut form = fill_form(&args).expect("form");
    assert_eq!(
        form.submit(),
        SubmitOutcome::Rejected {
            missing: vec![FieldId::Name, FieldId::Category]
        }
    );
}

#[test]
fn unknown_hostel_is_a_field_error() {
    let args = ReportArgs {
        hostel: "topaz".to_owned(),
        ..complete_args()
    };
    assert!(matches!(fill_form(&args), Err(CliError::Field(_))));
}

#[test]
fn image_flag_attaches_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("leak.jpg");
    std::fs::write(&path, [0xff_u8, 0xd8]).expect("write");
    let args = ReportArgs {
        image: Some(path),
        ..complete_args()
    };
    let form = fill_form(&args).expect("form");
    assert_eq!(form.selected_file_name(), Some("leak.jpg"));
}

#[test]
fn missing_fields_error_lists_dom_ids() {
    let err = CliError::MissingFields {
        notice: intake::Notice::warning("Please fill in all required fields."),
        missing: vec![FieldId::RollNumber, FieldId::Hostel],
    };
    assert_eq!(
        err.to_string(),
        "Please fill in all required fields. (missing: rollNumber, hostel)"
    );
}
