use super::*;

#[test]
fn upload_label_prompts_when_nothing_attached() {
    assert_eq!(upload_label(None), ("+", "Upload image(Optional)".to_owned()));
}

#[test]
fn upload_label_names_attached_file() {
    assert_eq!(
        upload_label(Some("fan.jpg")),
        ("✓", "Image: fan.jpg".to_owned())
    );
}

#[test]
fn upload_label_resets_after_submit() {
    let mut form = ReportForm::new();
    form.attach_image(Some(intake::Attachment::new("fan.jpg", "image/jpeg", vec![1])));
    for field in FieldId::ALL {
        let value = match field {
            FieldId::Hostel => "ruby",
            FieldId::Category => "electrical",
            _ => "x",
        };
        form.update_field(field, value).expect("update");
    }
    assert!(matches!(form.submit(), SubmitOutcome::Submitted(_)));
    assert_eq!(upload_label(form.selected_file_name()).0, "+");
}

#[test]
fn options_follow_fixed_sets() {
    let hostels: Vec<_> = hostel_options().into_iter().map(|(value, _)| value).collect();
    assert_eq!(
        hostels,
        ["sapphire", "pearl", "emerald", "diamond", "ruby", "coral"]
    );
    let categories = category_options();
    assert_eq!(categories.len(), 7);
    assert!(categories.contains(&("roomWork", "Room Work")));
    assert!(categories.contains(&("vending", "Vending Machine")));
}

#[test]
fn upload_label_stays_reset_when_read_lands_after_submit() {
    let mut form = ReportForm::new();
    for field in FieldId::ALL {
        let value = match field {
            FieldId::Hostel => "pearl",
            FieldId::Category => "plumbing",
            _ => "x",
        };
        form.update_field(field, value).expect("update");
    }
    let ticket = form.begin_image();
    assert!(matches!(form.submit(), SubmitOutcome::Submitted(_)));
    form.finish_image(ticket, Ok(intake::Attachment::new("tap.jpg", "image/jpeg", vec![1])));
    assert_eq!(upload_label(form.selected_file_name()).0, "+");
}
