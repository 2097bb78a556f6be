mod common;

use actix_web::dev::ServiceResponse;
use actix_web::http::{header, StatusCode};
use actix_web::{test, web, App};
use company_formation_server::company;
use company_formation_server::company::models::FormationExample;
use company_formation_server::documents::extract::extract_text;
use serde_json::{json, Value};

use common::{bylaws_body, formation_request, test_app_state};

macro_rules! test_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(test_app_state()))
                .configure(company::config),
        )
        .await
    };
}

fn header_str<B>(resp: &ServiceResponse<B>, name: header::HeaderName) -> &str {
    resp.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

#[actix_web::test]
async fn test_form_company_json_returns_attachment() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/form-company")
        .set_json(formation_request("Acme Corp, Inc.", "DE", "corporation", "John Smith"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(header_str(&resp, header::CONTENT_TYPE), "application/pdf");
    let disposition = header_str(&resp, header::CONTENT_DISPOSITION).to_string();
    assert!(disposition.starts_with("attachment"), "{}", disposition);
    assert!(disposition.contains("Acme Corp, Inc._certificate.pdf"), "{}", disposition);

    let body = test::read_body(resp).await;
    let text = extract_text(&body).unwrap();
    assert!(text.contains("CERTIFICATE OF INCORPORATION"));
    assert!(text.contains("John Smith"));
}

#[actix_web::test]
async fn test_form_company_accepts_form_encoding() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/form-company")
        .set_form(formation_request("California Dreaming, LLC", "CA", "LLC", "Emily Chen"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    let text = extract_text(&body).unwrap();
    assert!(text.contains("ARTICLES OF ORGANIZATION"));
    assert!(text.contains("California Dreaming, LLC"));
}

#[actix_web::test]
async fn test_form_company_unsupported_state() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/form-company")
        .set_json(formation_request("Lone Star Widgets", "TX", "corporation", "Sam Houston"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Only Delaware and California entities are supported at this time");
    assert_eq!(body["kind"], "BadRequest");
}

#[actix_web::test]
async fn test_form_company_validation_errors() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/form-company")
        .set_json(json!({
            "company_name": "Acme <Corp>",
            "state_of_formation": "XX",
            "company_type": "partnership"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    let fields: Vec<&str> = body["fields"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|f| f["field"].as_str())
        .collect();
    for field in ["company_name", "state_of_formation", "company_type", "incorporator_name"] {
        assert!(fields.contains(&field), "{} not reported in {:?}", field, fields);
    }
}

#[actix_web::test]
async fn test_form_company_schema_lists_examples() {
    let app = test_app!();

    let req = test::TestRequest::get().uri("/form-company-schema").to_request();
    let examples: Vec<FormationExample> = test::call_and_read_body_json(&app, req).await;

    assert_eq!(examples.len(), 4);
    assert_eq!(examples[0].company_name, "Acme Corp, Inc.");
    assert!(examples.iter().all(|e| e.state_of_formation == "DE" || e.state_of_formation == "CA"));
}

#[actix_web::test]
async fn test_index_serves_form() {
    let app = test_app!();

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(header_str(&resp, header::CONTENT_TYPE).starts_with("text/html"));
    let body = test::read_body(resp).await;
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains(r#"<form action="/form-company" method="POST">"#));
}

#[actix_web::test]
async fn test_generate_bylaws_inline_pdf() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/generate-bylaws")
        .set_json(bylaws_body())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(header_str(&resp, header::CONTENT_TYPE), "application/pdf");
    let disposition = header_str(&resp, header::CONTENT_DISPOSITION).to_string();
    assert!(disposition.starts_with("inline"), "{}", disposition);
    assert!(disposition.contains("Test_Corporation_bylaws.pdf"), "{}", disposition);

    let body = test::read_body(resp).await;
    assert!(extract_text(&body).unwrap().contains("TEST CORPORATION"));
}

#[actix_web::test]
async fn test_generate_bylaws_rejects_invalid_fields() {
    let app = test_app!();

    let mut request = bylaws_body();
    request["quorum_percentage"] = json!(101);
    request["annual_meeting_month"] = json!("InvalidMonth");

    let req = test::TestRequest::post()
        .uri("/generate-bylaws")
        .set_json(request)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["fields"].as_array().unwrap().len(), 2);
    assert!(body["error"].as_str().unwrap().contains("quorum_percentage"));
}

#[actix_web::test]
async fn test_generate_bylaws_malformed_json() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/generate-bylaws")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload("{ malformed json ")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["kind"], "BadRequest");
}

#[actix_web::test]
async fn test_form_company_name_with_line_break_gets_safe_filename() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/form-company")
        .set_json(formation_request("Acme Corp\nInc", "DE", "corporation", "John Smith"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(header_str(&resp, header::CONTENT_TYPE), "application/pdf");
    let disposition = header_str(&resp, header::CONTENT_DISPOSITION).to_string();
    assert!(disposition.contains("Acme Corp_Inc_certificate.pdf"), "{}", disposition);
}

#[actix_web::test]
async fn test_generate_bylaws_name_with_line_break_gets_safe_filename() {
    let app = test_app!();

    let mut request = bylaws_body();
    request["company_name"] = json!("Test\r\nCorporation");
    let req = test::TestRequest::post()
        .uri("/generate-bylaws")
        .set_json(request)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let disposition = header_str(&resp, header::CONTENT_DISPOSITION).to_string();
    assert!(disposition.contains("Test__Corporation_bylaws.pdf"), "{}", disposition);
}

#[actix_web::test]
async fn test_whole_number_strings_accepted_for_bylaws() {
    let app = test_app!();

    let mut request = bylaws_body();
    request["board_size"] = json!(5.0);
    request["quorum_percentage"] = json!("51");
    let req = test::TestRequest::post()
        .uri("/generate-bylaws")
        .set_json(request)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    let text = extract_text(&body).unwrap();
    assert!(text.contains("consist of 5"));
    assert!(text.contains("51% of the outstanding shares"));
}
