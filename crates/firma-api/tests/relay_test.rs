//! End-to-end tests for the relay's HTTP surface: token issuance, PDF intake,
//! gated download, gated deletion, and the error paths between them.

mod helpers;

use axum::http::StatusCode;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use helpers::{setup_test_app, setup_test_app_with_ttl};
use serde_json::{json, Value};

const PDF_BYTES: &[u8] = b"%PDF-1.4\n1 0 obj\n<< /Type /Catalog >>\nendobj\ntrailer\n%%EOF";

async fn upload_pdf(app: &helpers::TestApp, request_id: &str, filename: &str) {
    let res = app
        .server
        .post("/firmar")
        .json(&json!({
            "action": "firmar",
            "request_id": request_id,
            "pdf_base64": BASE64.encode(PDF_BYTES),
            "pdf_filename": filename,
        }))
        .await;
    res.assert_status_ok();
}

async fn issue_token(app: &helpers::TestApp, request_id: &str, filename: &str) -> String {
    let res = app
        .server
        .post("/token/generar")
        .json(&json!({ "request_id": request_id, "pdf_filename": filename }))
        .await;
    res.assert_status_ok();
    let body: Value = res.json();
    assert_eq!(body["status"], "success");
    body["access_token"].as_str().expect("token").to_string()
}

#[tokio::test]
async fn test_upload_download_round_trip() {
    let app = setup_test_app().await;

    upload_pdf(&app, "42", "report.pdf").await;
    let token = issue_token(&app, "42", "report.pdf").await;

    let res = app
        .server
        .post("/pdf/descargar")
        .json(&json!({ "pdf_filename": "report.pdf", "access_token": token }))
        .await;
    res.assert_status_ok();

    let body: Value = res.json();
    assert_eq!(body["status"], "success");
    let returned = BASE64
        .decode(body["pdf_base64"].as_str().expect("pdf_base64"))
        .expect("valid base64");
    assert_eq!(returned, PDF_BYTES);
}

#[tokio::test]
async fn test_upload_rejects_path_traversal() {
    let app = setup_test_app().await;

    let res = app
        .server
        .post("/firmar")
        .json(&json!({
            "action": "firmar",
            "request_id": "42",
            "pdf_base64": BASE64.encode(PDF_BYTES),
            "pdf_filename": "../../etc/passwd.pdf",
        }))
        .await;
    assert_eq!(res.status_code(), StatusCode::BAD_REQUEST);

    let body: Value = res.json();
    assert_eq!(body["status"], "error");
    assert_eq!(body["code"], "INVALID_INPUT");
    assert!(!app.state.storage.exists("passwd.pdf").await.unwrap());

    // A plain name passes the same gate.
    upload_pdf(&app, "42", "report.pdf").await;
}

#[tokio::test]
async fn test_upload_rejects_non_pdf_extension_and_bad_base64() {
    let app = setup_test_app().await;

    let res = app
        .server
        .post("/firmar")
        .json(&json!({
            "request_id": "42",
            "pdf_base64": BASE64.encode(PDF_BYTES),
            "pdf_filename": "report.exe",
        }))
        .await;
    assert_eq!(res.status_code(), StatusCode::BAD_REQUEST);

    let res = app
        .server
        .post("/firmar")
        .json(&json!({
            "request_id": "42",
            "pdf_base64": "not*base64*at*all",
            "pdf_filename": "report.pdf",
        }))
        .await;
    assert_eq!(res.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = res.json();
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("Invalid base64 payload"));
}

#[tokio::test]
async fn test_sign_sends_viewer_link_upstream() {
    let app = setup_test_app().await;

    upload_pdf(&app, "42", "acta.pdf").await;

    let (request_id, description) = app.upstream.last_call().expect("upstream call recorded");
    assert_eq!(request_id, "42");
    assert!(description.contains("href='http://localhost:4000/pdf/acta.pdf'"));
    assert!(description.contains(">acta.pdf</a>"));
}

#[tokio::test]
async fn test_token_scoped_to_filename() {
    let app = setup_test_app().await;

    upload_pdf(&app, "42", "report.pdf").await;
    upload_pdf(&app, "42", "other.pdf").await;
    let token = issue_token(&app, "42", "report.pdf").await;

    let res = app
        .server
        .post("/pdf/descargar")
        .json(&json!({ "pdf_filename": "other.pdf", "access_token": token }))
        .await;
    assert_eq!(res.status_code(), StatusCode::UNAUTHORIZED);

    // The mismatch must not invalidate the token for its own filename.
    let res = app
        .server
        .post("/pdf/descargar")
        .json(&json!({ "pdf_filename": "report.pdf", "access_token": token }))
        .await;
    res.assert_status_ok();
}

#[tokio::test]
async fn test_expired_and_unknown_tokens_rejected_identically_by_both_endpoints() {
    let app = setup_test_app_with_ttl(chrono::Duration::zero()).await;

    upload_pdf(&app, "42", "report.pdf").await;
    let expired = issue_token(&app, "42", "report.pdf").await;

    let download_expired = app
        .server
        .post("/pdf/descargar")
        .json(&json!({ "pdf_filename": "report.pdf", "access_token": expired }))
        .await;
    let delete_expired = app
        .server
        .post("/pdf/eliminar")
        .json(&json!({
            "request_id": "42",
            "pdf_filename": "report.pdf",
            "access_token": expired,
        }))
        .await;
    let download_unknown = app
        .server
        .post("/pdf/descargar")
        .json(&json!({ "pdf_filename": "report.pdf", "access_token": "no-such-token" }))
        .await;

    assert_eq!(download_expired.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(delete_expired.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(download_unknown.status_code(), StatusCode::UNAUTHORIZED);

    // Same error path: identical bodies for expiry and unknown, download and delete.
    let a: Value = download_expired.json();
    let b: Value = delete_expired.json();
    let c: Value = download_unknown.json();
    assert_eq!(a, b);
    assert_eq!(a, c);
    assert_eq!(a["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_delete_then_download_reports_not_found() {
    let app = setup_test_app().await;

    upload_pdf(&app, "42", "report.pdf").await;
    let token = issue_token(&app, "42", "report.pdf").await;

    let res = app
        .server
        .post("/pdf/eliminar")
        .json(&json!({
            "request_id": "42",
            "pdf_filename": "report.pdf",
            "access_token": token,
        }))
        .await;
    res.assert_status_ok();

    // The delete must also clear the ticket description upstream.
    let (request_id, description) = app.upstream.last_call().expect("upstream call recorded");
    assert_eq!(request_id, "42");
    assert_eq!(description, "");

    let fresh = issue_token(&app, "42", "report.pdf").await;
    let res = app
        .server
        .post("/pdf/descargar")
        .json(&json!({ "pdf_filename": "report.pdf", "access_token": fresh }))
        .await;
    assert_eq!(res.status_code(), StatusCode::NOT_FOUND);
    let body: Value = res.json();
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_delete_is_idempotent_on_missing_file() {
    let app = setup_test_app().await;

    let token = issue_token(&app, "42", "never-uploaded.pdf").await;
    let res = app
        .server
        .post("/pdf/eliminar")
        .json(&json!({
            "request_id": "42",
            "pdf_filename": "never-uploaded.pdf",
            "access_token": token,
        }))
        .await;
    res.assert_status_ok();
}

#[tokio::test]
async fn test_upstream_failure_surfaces_status_and_body_and_leaves_file() {
    let app = setup_test_app().await;
    app.upstream.fail_with(403, "technician key rejected");

    let res = app
        .server
        .post("/firmar")
        .json(&json!({
            "request_id": "42",
            "pdf_base64": BASE64.encode(PDF_BYTES),
            "pdf_filename": "report.pdf",
        }))
        .await;
    assert_eq!(res.status_code(), StatusCode::BAD_GATEWAY);

    let body: Value = res.json();
    assert_eq!(body["code"], "UPSTREAM_ERROR");
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("403"));
    assert!(message.contains("technician key rejected"));

    // The write is not rolled back; the widget retries and overwrites.
    assert!(app.state.storage.exists("report.pdf").await.unwrap());
}

#[tokio::test]
async fn test_token_issuance_requires_both_params() {
    let app = setup_test_app().await;

    let res = app
        .server
        .post("/token/generar")
        .json(&json!({ "request_id": "", "pdf_filename": "report.pdf" }))
        .await;
    assert_eq!(res.status_code(), StatusCode::BAD_REQUEST);

    // A missing field fails JSON validation with the same error shape.
    let res = app
        .server
        .post("/token/generar")
        .json(&json!({ "request_id": "42" }))
        .await;
    assert_eq!(res.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = res.json();
    assert_eq!(body["status"], "error");
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = setup_test_app().await;
    let res = app.server.get("/health").await;
    res.assert_status_ok();
    let body: Value = res.json();
    assert_eq!(body["status"], "ok");
}
