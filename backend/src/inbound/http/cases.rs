//! Patient case HTTP handlers.
//!
//! The admin surface publishes and lists cases; the public surface exposes
//! the same listing read-only for the donation site.

use actix_web::{get, post, web, HttpResponse};
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::{Case, CaseDraft, Error, ImageUpload};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// One uploaded image, carried inline as base64.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CaseImageBody {
    pub file_name: String,
    pub content_base64: String,
}

/// Body for `POST /admin/cases`.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublishCaseRequestBody {
    #[serde(default)]
    pub patient_id: Option<String>,
    pub patient_name: String,
    pub medical_condition: String,
    #[serde(default)]
    pub description: String,
    pub requested_amount: f64,
    pub images: Vec<CaseImageBody>,
}

fn field_for(error: &crate::domain::CaseValidationError) -> &'static str {
    use crate::domain::CaseValidationError as E;
    match error {
        E::EmptyPatientName => "patientName",
        E::EmptyMedicalCondition => "medicalCondition",
        E::NonFiniteRequestedAmount | E::NegativeRequestedAmount => "requestedAmount",
    }
}

fn decode_images(images: Vec<CaseImageBody>) -> Result<Vec<ImageUpload>, Error> {
    images
        .into_iter()
        .map(|image| {
            let bytes = base64::engine::general_purpose::STANDARD
                .decode(image.content_base64.as_bytes())
                .map_err(|_| {
                    Error::invalid_request("image content is not valid base64").with_details(
                        json!({ "field": "images", "fileName": image.file_name }),
                    )
                })?;
            Ok(ImageUpload {
                file_name: image.file_name,
                bytes,
            })
        })
        .collect()
}

/// Publish a new patient case with its images.
#[utoipa::path(
    post,
    path = "/admin/cases",
    request_body = PublishCaseRequestBody,
    responses(
        (status = 201, description = "Case published", body = Case),
        (status = 400, description = "Invalid case payload", body = Error),
        (status = 500, description = "Image upload failed", body = Error)
    ),
    tags = ["cases"],
    operation_id = "publishCase"
)]
#[post("/cases")]
pub async fn publish_case(
    state: web::Data<HttpState>,
    payload: web::Json<PublishCaseRequestBody>,
) -> ApiResult<HttpResponse> {
    let body = payload.into_inner();
    let draft = CaseDraft::try_new(
        body.patient_id,
        body.patient_name,
        body.medical_condition,
        body.description,
        body.requested_amount,
    )
    .map_err(|error| {
        Error::invalid_request(error.to_string())
            .with_details(json!({ "field": field_for(&error) }))
    })?;
    let images = decode_images(body.images)?;
    let case = state.cases.publish(draft, images).await?;
    Ok(HttpResponse::Created().json(case))
}

/// List every case for the admin dashboard, newest first.
#[utoipa::path(
    get,
    path = "/admin/cases",
    responses(
        (status = 200, description = "All cases", body = [Case]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["cases"],
    operation_id = "listAdminCases"
)]
#[get("/cases")]
pub async fn list_admin_cases(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Case>>> {
    Ok(web::Json(state.cases.list_all().await?))
}

/// List every case for the public donation site, newest first.
#[utoipa::path(
    get,
    path = "/public/cases",
    responses(
        (status = 200, description = "All cases", body = [Case]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["cases"],
    operation_id = "listPublicCases"
)]
#[get("/cases")]
pub async fn list_public_cases(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Case>>> {
    Ok(web::Json(state.cases.list_all().await?))
}
