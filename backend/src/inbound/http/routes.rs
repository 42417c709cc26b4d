//! Route table for the HTTP adapter.

use actix_web::{web, HttpResponse};

use crate::inbound::http::{admin, cases, chat, donations, donors, stats};

/// Fallback page returned for unknown paths.
///
/// The service replaces a deployment where the admin dashboard was the
/// web root, so unmatched routes land there rather than on a JSON error.
const DASHBOARD_HTML: &str = include_str!("dashboard.html");

async fn dashboard_fallback() -> HttpResponse {
    HttpResponse::NotFound()
        .content_type("text/html; charset=utf-8")
        .body(DASHBOARD_HTML)
}

/// Register every route on the app.
///
/// Expects `HttpState` to be registered as app data.
pub fn configure(config: &mut web::ServiceConfig) {
    config
        .service(donations::donate)
        .service(donations::my_donations)
        .service(chat::chat)
        .service(web::scope("/donator").service(donors::register))
        .service(
            web::scope("/admin")
                .service(admin::login)
                .service(admin::approve_donation)
                .service(admin::reject_donation)
                .service(admin::list_donations)
                .service(cases::publish_case)
                .service(cases::list_admin_cases),
        )
        .service(
            web::scope("/public")
                .service(cases::list_public_cases)
                .service(stats::public_stats),
        )
        .default_service(web::route().to(dashboard_fallback));
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use actix_web::{http::StatusCode, test as actix_test, App};

    use super::*;
    use crate::inbound::http::test_utils::{state_with, TestPorts};

    #[actix_rt::test]
    async fn unknown_path_falls_back_to_the_dashboard() {
        let state = state_with(TestPorts::default());
        let app = actix_test::init_service(
            App::new()
                .app_data(actix_web::web::Data::new(state))
                .configure(configure),
        )
        .await;

        let request = actix_test::TestRequest::get()
            .uri("/no-such-page")
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_owned();
        assert!(content_type.starts_with("text/html"));
    }

    #[actix_rt::test]
    async fn all_read_routes_are_reachable() {
        let state = state_with(TestPorts::default());
        let app = actix_test::init_service(
            App::new()
                .app_data(actix_web::web::Data::new(state))
                .configure(configure),
        )
        .await;

        for uri in ["/admin/donations", "/admin/cases", "/public/cases", "/public/stats"] {
            let request = actix_test::TestRequest::get().uri(uri).to_request();
            let response = actix_test::call_service(&app, request).await;
            assert_eq!(response.status(), StatusCode::OK, "GET {uri}");
        }
    }
}
