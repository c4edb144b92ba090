use super::*;

#[test]
fn default_has_nothing_to_show() {
    let state = NoticeState::default();
    assert!(state.current().is_none());
    assert_eq!(state.raised(), 0);
}

#[test]
fn push_replaces_current_notice() {
    let mut state = NoticeState::default();
    state.push(Notice::warning("Please choose an image first."));
    state.push(Notice::error("Prediction failed: server error (HTTP 500)"));
    assert_eq!(
        state.current(),
        Some(&Notice::error("Prediction failed: server error (HTTP 500)"))
    );
    assert_eq!(state.raised(), 2);
}

#[test]
fn dismiss_clears_but_keeps_count() {
    let mut state = NoticeState::default();
    state.push(Notice::success("Feedback submitted successfully!"));
    state.dismiss();
    assert!(state.current().is_none());
    assert_eq!(state.raised(), 1);
}
