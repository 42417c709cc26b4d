//! Donation HTTP handlers (donor-facing).
//!
//! ```text
//! POST /donate {"amount":500,"name":"A","email":"a@x.com"}
//! POST /my-donations {"email":"a@x.com"}
//! ```
//!
//! `/donate` answers with a rendered confirmation page rather than JSON: the
//! donor scans the embedded QR code or taps the deep link to pay.

use actix_web::{post, web, HttpResponse};
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::domain::ports::SubmitDonationRequest;
use crate::domain::{Donation, Error};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// Submission body for `POST /donate`.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DonateRequestBody {
    /// Donation amount; validated by the lifecycle service.
    pub amount: Option<f64>,
    pub name: String,
    pub email: String,
}

/// Lookup body for `POST /my-donations`.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MyDonationsRequestBody {
    pub email: String,
}

fn confirmation_page(amount: f64, upi_link: &str, qr_png: &[u8]) -> String {
    let qr_data_uri = format!("data:image/png;base64,{}", BASE64_STANDARD.encode(qr_png));
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
           <meta charset=\"UTF-8\">\n\
           <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
           <title>Complete Your Donation</title>\n\
         </head>\n\
         <body>\n\
           <div style=\"text-align:center;margin-top:50px\">\n\
             <h1>Scan &amp; Pay</h1>\n\
             <p>Amount: \u{20b9}{amount}</p>\n\
             <img src=\"{qr_data_uri}\" width=\"200\" alt=\"UPI QR code\" />\n\
             <br><br>\n\
             <a href=\"{upi_link}\">Pay Now</a>\n\
           </div>\n\
         </body>\n\
         </html>\n"
    )
}

/// Record a donation intent and render the payment page.
#[utoipa::path(
    post,
    path = "/donate",
    request_body = DonateRequestBody,
    responses(
        (status = 200, description = "Confirmation page with QR code", content_type = "text/html"),
        (status = 400, description = "Invalid request", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["donations"],
    operation_id = "donate"
)]
#[post("/donate")]
pub async fn donate(
    state: web::Data<HttpState>,
    payload: web::Json<DonateRequestBody>,
) -> ApiResult<HttpResponse> {
    let body = payload.into_inner();
    let response = state
        .donations
        .submit(SubmitDonationRequest {
            name: body.name,
            email: body.email,
            amount: body.amount,
        })
        .await?;

    let page = confirmation_page(
        response.donation.amount,
        response.upi_link.as_str(),
        &response.qr_png,
    );
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(page))
}

/// List the caller's donations, newest first.
#[utoipa::path(
    post,
    path = "/my-donations",
    request_body = MyDonationsRequestBody,
    responses(
        (status = 200, description = "Donations for the donor", body = [Donation]),
        (status = 400, description = "Invalid request", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["donations"],
    operation_id = "myDonations"
)]
#[post("/my-donations")]
pub async fn my_donations(
    state: web::Data<HttpState>,
    payload: web::Json<MyDonationsRequestBody>,
) -> ApiResult<web::Json<Vec<Donation>>> {
    let donations = state
        .donations
        .list_by_email(payload.into_inner().email)
        .await?;
    Ok(web::Json(donations))
}
