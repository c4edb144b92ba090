use intake::{Category, Hostel};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;

fn photo() -> Attachment {
    Attachment::new("photo.png", "image/png", b"PNGDATA".to_vec())
}

fn report(image: Option<Attachment>) -> Report {
    Report {
        roll_number: "22CS1042".to_owned(),
        name: "Asha Singh".to_owned(),
        hostel: Hostel::Coral,
        room_no: "C-12".to_owned(),
        category: Category::Plumbing,
        queries: "Tap leaks overnight.".to_owned(),
        image,
    }
}

async fn only_request_body(server: &MockServer) -> String {
    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
    String::from_utf8_lossy(&requests[0].body).into_owned()
}

#[test]
fn endpoint_url_joins_without_double_slash() {
    assert_eq!(endpoint_url("http://h:8000/", "/predict"), "http://h:8000/predict");
    assert_eq!(endpoint_url("http://h:8000", "/predict"), "http://h:8000/predict");
}

#[tokio::test]
async fn predict_sends_file_part_and_reads_label() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "label": "Electrical Fault",
            "confidence": 0.9731,
            "steps": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let prediction = predict(&reqwest::Client::new(), &server.uri(), &photo())
        .await
        .expect("prediction");
    assert_eq!(prediction.label, "Electrical Fault");

    let body = only_request_body(&server).await;
    assert!(body.contains(r#"name="file"; filename="photo.png""#));
    assert!(body.contains("image/png"));
    assert!(body.contains("PNGDATA"));
}

#[tokio::test]
async fn predict_maps_non_success_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = predict(&reqwest::Client::new(), &server.uri(), &photo())
        .await
        .expect_err("status");
    assert_eq!(err, PredictError::Status(500));
}

#[tokio::test]
async fn predict_rejects_body_without_label() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "confidence": 1.0 })))
        .mount(&server)
        .await;

    let err = predict(&reqwest::Client::new(), &server.uri(), &photo())
        .await
        .expect_err("no label");
    assert_eq!(err, PredictError::MissingLabel);
}

#[tokio::test]
async fn predict_reports_unreachable_server_as_transport() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let uri = format!("http://{}", listener.local_addr().expect("addr"));
    drop(listener);

    let err = predict(&reqwest::Client::new(), &uri, &photo())
        .await
        .expect_err("unreachable");
    assert!(matches!(err, PredictError::Transport(_)));
}

#[tokio::test]
async fn submit_report_posts_named_parts() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/reports"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let url = format!("{}/reports", server.uri());
    submit_report(&reqwest::Client::new(), &url, &report(Some(photo())))
        .await
        .expect("delivered");

    let body = only_request_body(&server).await;
    for part in ["rollNumber", "name", "hostel", "roomNo", "categories", "queries"] {
        assert!(body.contains(&format!("name=\"{part}\"")), "missing part {part}");
    }
    assert!(body.contains("plumbing"));
    assert!(body.contains(r#"name="image"; filename="photo.png""#));
}

#[tokio::test]
async fn submit_report_without_image_has_no_image_part() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    submit_report(&reqwest::Client::new(), &server.uri(), &report(None))
        .await
        .expect("delivered");
    let body = only_request_body(&server).await;
    assert!(!body.contains(r#"name="image""#));
}

#[tokio::test]
async fn submit_report_surfaces_collaborator_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = submit_report(&reqwest::Client::new(), &server.uri(), &report(None))
        .await
        .expect_err("unavailable");
    assert!(matches!(err, CliError::CollaboratorStatus(503)));
}
