use actix_web::error::{InternalError, JsonPayloadError, UrlencodedError};
use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{web, Either, HttpRequest, HttpResponse, Responder};

use crate::company::models::{formation_examples, formation_form_html, FormationExample};
use crate::documents::{
    BylawsRequest, CompanyFormationRequest, GeneratedDocument, Generator, GeneratorError,
    Validator,
};
use crate::{AppState, ErrorResponse};

const UNEXPECTED_ERROR: &str = "An unexpected error occurred";

fn pdf_response(doc: GeneratedDocument, disposition: DispositionType) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("application/pdf")
        .insert_header(ContentDisposition {
            disposition,
            parameters: vec![DispositionParam::Filename(doc.filename)],
        })
        .body(doc.pdf)
}

fn generator_error_response(err: &GeneratorError) -> HttpResponse {
    if err.is_client_error() {
        log::warn!("Rejected document request: {}", err);
        HttpResponse::BadRequest().json(ErrorResponse::bad_request(&err.to_string()))
    } else {
        log::error!("Document generation failed: {}", err);
        HttpResponse::InternalServerError().json(ErrorResponse::internal_error(UNEXPECTED_ERROR))
    }
}

#[utoipa::path(
    post,
    path = "/form-company",
    tag = "Company Formation",
    request_body(content = CompanyFormationRequest, description = "JSON or form-encoded formation data"),
    responses(
        (status = 200, description = "Formation certificate as a PDF attachment"),
        (status = 400, description = "Invalid input or unsupported jurisdiction", body = ErrorResponse),
        (status = 500, description = "Rendering failed", body = ErrorResponse)
    )
)]
pub async fn form_company(
    state: web::Data<AppState>,
    body: Either<web::Json<CompanyFormationRequest>, web::Form<CompanyFormationRequest>>,
) -> impl Responder {
    let request = match body {
        Either::Left(json) => json.into_inner(),
        Either::Right(form) => form.into_inner(),
    };

    let record = match request.validate() {
        Ok(record) => record,
        Err(errors) => {
            log::warn!("Rejected formation request: {}", errors);
            return HttpResponse::BadRequest().json(ErrorResponse::from_validation(&errors));
        }
    };

    match state.formation.generate(&record) {
        Ok(doc) => {
            log::info!(
                "Generated {} {} filing for '{}'",
                record.state_of_formation(),
                record.company_type(),
                record.company_name()
            );
            pdf_response(doc, DispositionType::Attachment)
        }
        Err(e) => generator_error_response(&e),
    }
}

#[utoipa::path(
    get,
    path = "/form-company-schema",
    tag = "Company Formation",
    responses(
        (status = 200, description = "Example formation requests", body = Vec<FormationExample>)
    )
)]
pub async fn form_company_schema() -> impl Responder {
    HttpResponse::Ok().json(formation_examples())
}

#[utoipa::path(
    get,
    path = "/",
    tag = "Company Formation",
    responses(
        (status = 200, description = "HTML form for submitting a formation request")
    )
)]
pub async fn company_form() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(formation_form_html())
}

#[utoipa::path(
    post,
    path = "/generate-bylaws",
    tag = "Bylaws",
    request_body = BylawsRequest,
    responses(
        (status = 200, description = "Corporate bylaws as a PDF"),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 500, description = "Rendering failed", body = ErrorResponse)
    )
)]
pub async fn generate_bylaws(
    state: web::Data<AppState>,
    body: web::Json<BylawsRequest>,
) -> impl Responder {
    let record = match body.validate() {
        Ok(record) => record,
        Err(errors) => {
            log::warn!("Rejected bylaws request: {}", errors);
            return HttpResponse::BadRequest().json(ErrorResponse::from_validation(&errors));
        }
    };

    match state.bylaws.generate(&record) {
        Ok(doc) => {
            log::info!(
                "Generated bylaws for '{}' with {} officer(s)",
                record.company_name(),
                record.officer_titles().len()
            );
            pdf_response(doc, DispositionType::Inline)
        }
        Err(e) => generator_error_response(&e),
    }
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(ErrorResponse::bad_request(&err.to_string()));
    InternalError::from_response(err, response).into()
}

fn form_error_handler(err: UrlencodedError, _req: &HttpRequest) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(ErrorResponse::bad_request(&err.to_string()));
    InternalError::from_response(err, response).into()
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::FormConfig::default().error_handler(form_error_handler))
        .service(web::resource("/").route(web::get().to(company_form)))
        .service(web::resource("/form-company").route(web::post().to(form_company)))
        .service(web::resource("/form-company-schema").route(web::get().to(form_company_schema)))
        .service(web::resource("/generate-bylaws").route(web::post().to(generate_bylaws)));
}
