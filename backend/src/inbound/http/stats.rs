//! Public statistics handler.

use actix_web::{get, web};

use crate::domain::ports::PublicStats;
use crate::domain::Error;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// Aggregate totals for the public landing page.
///
/// Recomputed from the store on every request.
#[utoipa::path(
    get,
    path = "/public/stats",
    responses(
        (status = 200, description = "Current totals", body = PublicStats),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["public"],
    operation_id = "publicStats"
)]
#[get("/stats")]
pub async fn public_stats(state: web::Data<HttpState>) -> ApiResult<web::Json<PublicStats>> {
    Ok(web::Json(state.stats.public_stats().await?))
}
