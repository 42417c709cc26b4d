//! Admin HTTP handlers.
//!
//! ```text
//! POST /admin/login {"username":"carefund","password":"..."}
//! POST /admin/approve-donation {"id":"...","transactionId":"TXN1"}
//! POST /admin/reject-donation {"id":"...","reason":"..."}
//! GET  /admin/donations
//! ```
//!
//! Login is a static credential check only; no session is issued and the
//! other admin routes are not guarded, matching the behaviour this service
//! replaces.

use actix_web::{get, post, web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::ports::{ApproveDonationRequest, RejectDonationRequest};
use crate::domain::{Donation, Error};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// Credential body for `POST /admin/login`.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminLoginRequestBody {
    pub username: String,
    pub password: String,
}

/// Approval body for `POST /admin/approve-donation`.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApproveDonationRequestBody {
    pub id: String,
    pub transaction_id: String,
}

/// Rejection body for `POST /admin/reject-donation`.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RejectDonationRequestBody {
    pub id: String,
    pub reason: String,
}

/// Envelope returned by the decision endpoints.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DecisionResponseBody {
    pub message: String,
    pub donation: Donation,
}

/// Check the static admin credential pair.
#[utoipa::path(
    post,
    path = "/admin/login",
    request_body = AdminLoginRequestBody,
    responses(
        (status = 200, description = "Login success"),
        (status = 401, description = "Invalid credentials", body = Error)
    ),
    tags = ["admin"],
    operation_id = "adminLogin"
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: web::Json<AdminLoginRequestBody>,
) -> ApiResult<HttpResponse> {
    let body = payload.into_inner();
    if !state
        .admin
        .matches(body.username.as_str(), body.password.as_str())
    {
        return Err(Error::unauthorized("Invalid credentials"));
    }
    Ok(HttpResponse::Ok().json(json!({ "message": "Login successful" })))
}

/// Approve a pending donation.
#[utoipa::path(
    post,
    path = "/admin/approve-donation",
    request_body = ApproveDonationRequestBody,
    responses(
        (status = 200, description = "Donation approved", body = DecisionResponseBody),
        (status = 400, description = "Malformed donation id", body = Error),
        (status = 404, description = "Donation not found", body = Error),
        (status = 409, description = "Donation already decided", body = Error)
    ),
    tags = ["admin"],
    operation_id = "approveDonation"
)]
#[post("/approve-donation")]
pub async fn approve_donation(
    state: web::Data<HttpState>,
    payload: web::Json<ApproveDonationRequestBody>,
) -> ApiResult<web::Json<DecisionResponseBody>> {
    let body = payload.into_inner();
    let donation = state
        .donations
        .approve(ApproveDonationRequest {
            id: body.id,
            transaction_id: body.transaction_id,
        })
        .await?;
    Ok(web::Json(DecisionResponseBody {
        message: "Donation approved successfully".to_owned(),
        donation,
    }))
}

/// Reject a pending donation.
#[utoipa::path(
    post,
    path = "/admin/reject-donation",
    request_body = RejectDonationRequestBody,
    responses(
        (status = 200, description = "Donation rejected", body = DecisionResponseBody),
        (status = 400, description = "Malformed donation id", body = Error),
        (status = 404, description = "Donation not found", body = Error),
        (status = 409, description = "Donation already decided", body = Error)
    ),
    tags = ["admin"],
    operation_id = "rejectDonation"
)]
#[post("/reject-donation")]
pub async fn reject_donation(
    state: web::Data<HttpState>,
    payload: web::Json<RejectDonationRequestBody>,
) -> ApiResult<web::Json<DecisionResponseBody>> {
    let body = payload.into_inner();
    let donation = state
        .donations
        .reject(RejectDonationRequest {
            id: body.id,
            reason: body.reason,
        })
        .await?;
    Ok(web::Json(DecisionResponseBody {
        message: "Donation rejected".to_owned(),
        donation,
    }))
}

/// List every donation for the admin dashboard, newest first.
#[utoipa::path(
    get,
    path = "/admin/donations",
    responses(
        (status = 200, description = "All donations", body = [Donation]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["admin"],
    operation_id = "listDonations"
)]
#[get("/donations")]
pub async fn list_donations(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Donation>>> {
    Ok(web::Json(state.donations.list_all().await?))
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use actix_web::{http::StatusCode, test as actix_test, App};

    use super::*;
    use crate::domain::ports::MockDonationLifecycle;
    use crate::domain::{DonationStatus, EmailAddress};
    use crate::inbound::http::test_utils::{state_with, test_admin, TestPorts};

    fn approved_donation() -> Donation {
        Donation {
            id: uuid::Uuid::new_v4(),
            name: "A".to_owned(),
            email: EmailAddress::new("a@x.com").expect("valid email"),
            amount: 500.0,
            status: DonationStatus::Approved,
            rejection_reason: None,
            transaction_id: Some("TXN1".to_owned()),
            date: chrono::Utc::now(),
        }
    }

    #[actix_rt::test]
    async fn login_accepts_the_configured_pair() {
        let state = state_with(TestPorts::default());
        let app = actix_test::init_service(
            App::new()
                .app_data(actix_web::web::Data::new(state))
                .service(actix_web::web::scope("/admin").service(login)),
        )
        .await;

        let admin = test_admin();
        let request = actix_test::TestRequest::post()
            .uri("/admin/login")
            .set_json(serde_json::json!({
                "username": admin.username,
                "password": admin.password,
            }))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[actix_rt::test]
    async fn login_rejects_a_wrong_password() {
        let state = state_with(TestPorts::default());
        let app = actix_test::init_service(
            App::new()
                .app_data(actix_web::web::Data::new(state))
                .service(actix_web::web::scope("/admin").service(login)),
        )
        .await;

        let request = actix_test::TestRequest::post()
            .uri("/admin/login")
            .set_json(serde_json::json!({ "username": "carefund", "password": "wrong" }))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_rt::test]
    async fn approve_returns_the_updated_donation() {
        let mut lifecycle = MockDonationLifecycle::new();
        lifecycle
            .expect_approve()
            .times(1)
            .returning(|_| Ok(approved_donation()));

        let state = state_with(TestPorts {
            donations: Some(std::sync::Arc::new(lifecycle)),
            ..TestPorts::default()
        });
        let app = actix_test::init_service(
            App::new()
                .app_data(actix_web::web::Data::new(state))
                .service(actix_web::web::scope("/admin").service(approve_donation)),
        )
        .await;

        let request = actix_test::TestRequest::post()
            .uri("/admin/approve-donation")
            .set_json(serde_json::json!({
                "id": uuid::Uuid::new_v4().to_string(),
                "transactionId": "TXN1",
            }))
            .to_request();
        let body: serde_json::Value = actix_test::call_and_read_body_json(&app, request).await;
        assert_eq!(body["message"], "Donation approved successfully");
        assert_eq!(body["donation"]["status"], "Approved");
        assert_eq!(body["donation"]["transactionId"], "TXN1");
    }

    #[actix_rt::test]
    async fn reject_maps_not_found_to_404() {
        let mut lifecycle = MockDonationLifecycle::new();
        lifecycle
            .expect_reject()
            .returning(|_| Err(Error::not_found("donation not found")));

        let state = state_with(TestPorts {
            donations: Some(std::sync::Arc::new(lifecycle)),
            ..TestPorts::default()
        });
        let app = actix_test::init_service(
            App::new()
                .app_data(actix_web::web::Data::new(state))
                .service(actix_web::web::scope("/admin").service(reject_donation)),
        )
        .await;

        let request = actix_test::TestRequest::post()
            .uri("/admin/reject-donation")
            .set_json(serde_json::json!({
                "id": uuid::Uuid::new_v4().to_string(),
                "reason": "duplicate",
            }))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
