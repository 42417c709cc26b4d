//! Donor registration handler.

use actix_web::{post, web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::domain::{Donator, Error};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// Body for `POST /donator/register`: the Google ID token obtained client
/// side.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequestBody {
    pub id_token: String,
}

/// Response body carrying the registered donator.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponseBody {
    pub message: String,
    pub donator: Donator,
    pub already_registered: bool,
}

/// Verify a Google ID token and register (or fetch) the donator.
///
/// Responds 201 for a new registration and 200 when the donator already
/// existed; both carry the stored record.
#[utoipa::path(
    post,
    path = "/donator/register",
    request_body = RegisterRequestBody,
    responses(
        (status = 201, description = "Donator registered", body = RegisterResponseBody),
        (status = 200, description = "Donator already registered", body = RegisterResponseBody),
        (status = 401, description = "Token verification failed", body = Error)
    ),
    tags = ["donators"],
    operation_id = "registerDonator"
)]
#[post("/register")]
pub async fn register(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterRequestBody>,
) -> ApiResult<HttpResponse> {
    let outcome = state
        .donors
        .register_or_fetch(payload.into_inner().id_token)
        .await?;
    let body = RegisterResponseBody {
        message: if outcome.already_registered {
            "Donator already registered".to_owned()
        } else {
            "Donator registered successfully".to_owned()
        },
        donator: outcome.donator,
        already_registered: outcome.already_registered,
    };
    let mut response = if outcome.already_registered {
        HttpResponse::Ok()
    } else {
        HttpResponse::Created()
    };
    Ok(response.json(body))
}
