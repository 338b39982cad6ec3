use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{web, HttpMessage, HttpRequest, HttpResponse, Responder};
use lazy_static::lazy_static;
use log::{error, info, warn};

use super::model::{RawFormationRequest, US_STATES_AND_TERRITORIES};
use super::FormationError;
use crate::{AppState, ErrorResponse};

lazy_static! {
    static ref FORM_HTML: String = render_form_html();
}

/// Decode a JSON body, or a urlencoded form body for any other content type.
pub fn parse_payload(
    content_type: &str,
    body: &[u8],
) -> Result<RawFormationRequest, FormationError> {
    let is_json = content_type == "application/json" || content_type.ends_with("+json");
    if is_json {
        serde_json::from_slice(body).map_err(|e| FormationError::Payload(e.to_string()))
    } else {
        serde_urlencoded::from_bytes(body).map_err(|e| FormationError::Payload(e.to_string()))
    }
}

#[utoipa::path(
    post,
    path = "/form-company",
    tag = "Formation",
    request_body = RawFormationRequest,
    responses(
        (status = 200, description = "application/zip archive with the PDF and text certificate"),
        (status = 400, description = "Invalid or unsupported request", body = ErrorResponse)
    )
)]
pub async fn form_company(
    req: HttpRequest,
    body: web::Bytes,
    state: web::Data<AppState>,
) -> impl Responder {
    let result = parse_payload(req.content_type(), &body)
        .and_then(|raw| {
            info!(
                "Executing form_company for '{}' ({} / {})",
                raw.company_name.as_deref().unwrap_or_default(),
                raw.state_of_formation.as_deref().unwrap_or_default(),
                raw.company_type.as_deref().unwrap_or_default(),
            );
            state.formation.form_company(&raw)
        });

    match result {
        Ok(package) => {
            info!(
                "Generated {} as {} ({} bytes)",
                package.title,
                package.filename,
                package.archive.len()
            );
            HttpResponse::Ok()
                .content_type("application/zip")
                .insert_header(ContentDisposition {
                    disposition: DispositionType::Attachment,
                    parameters: vec![DispositionParam::Filename(package.filename)],
                })
                .body(package.archive)
        }
        Err(e) => {
            match &e {
                FormationError::Render(_) | FormationError::Bundle(_) => {
                    error!("Document generation failed: {}", e)
                }
                _ => warn!("Rejected formation request: {}", e),
            }
            HttpResponse::BadRequest().json(ErrorResponse::new(&e.public_message()))
        }
    }
}

/// The four example payloads, one per supported filing.
pub fn example_payloads() -> Vec<RawFormationRequest> {
    vec![
        RawFormationRequest::new("Acme Corp, Inc.", "DE", "corporation", "John Smith"),
        RawFormationRequest::new("Smith & Sons, LLC", "DE", "LLC", "Jane Doe"),
        RawFormationRequest::new("Tech Innovators Co.", "CA", "corporation", "Michael Johnson"),
        RawFormationRequest::new("California Dreaming, LLC", "CA", "LLC", "Emily Chen"),
    ]
}

#[utoipa::path(
    get,
    path = "/form-company-schema",
    tag = "Formation",
    responses(
        (status = 200, description = "Example request payloads", body = Vec<RawFormationRequest>)
    )
)]
pub async fn form_company_schema() -> impl Responder {
    HttpResponse::Ok().json(example_payloads())
}

fn render_form_html() -> String {
    let state_options: String = US_STATES_AND_TERRITORIES
        .iter()
        .map(|code| format!(r#"<option value="{0}">{0}</option>"#, code))
        .collect::<Vec<_>>()
        .join("\n                ");

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Company Formation</title>
    <style>
        body {{ font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; padding: 20px; }}
        form {{ display: grid; gap: 15px; }}
        label {{ font-weight: bold; }}
        input, select {{ padding: 8px; font-size: 16px; }}
        button {{ background: #007bff; color: white; border: none; padding: 10px 20px; cursor: pointer; }}
        button:hover {{ background: #0056b3; }}
    </style>
</head>
<body>
    <h1>Company Formation</h1>
    <form action="/form-company" method="POST">
        <label for="company_name">Company Name:</label>
        <input type="text" id="company_name" name="company_name" required>

        <label for="state_of_formation">State of Formation:</label>
        <select id="state_of_formation" name="state_of_formation" required>
            <option value="">Select a state</option>
                {state_options}
        </select>

        <label for="company_type">Company Type:</label>
        <select id="company_type" name="company_type" required>
            <option value="">Select a type</option>
            <option value="corporation">Corporation</option>
            <option value="LLC">LLC</option>
        </select>

        <label for="incorporator_name">Incorporator Name:</label>
        <input type="text" id="incorporator_name" name="incorporator_name" required>

        <button type="submit">Submit</button>
    </form>
</body>
</html>
"#
    )
}

#[utoipa::path(
    get,
    path = "/",
    tag = "Formation",
    responses(
        (status = 200, description = "HTML form for manual submission")
    )
)]
pub async fn company_form() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(FORM_HTML.clone())
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(company_form)))
        .service(web::resource("/form-company").route(web::post().to(form_company)))
        .service(
            web::resource("/form-company-schema").route(web::get().to(form_company_schema)),
        );
}
