//! Assistant chat proxy handler.

use actix_web::{post, web};
use serde::{Deserialize, Serialize};

use crate::domain::{ChatTurn, Error};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// Body for `POST /chat`: the conversation so far, oldest turn first.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequestBody {
    pub history: Vec<ChatTurn>,
}

/// One assistant reply.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponseBody {
    pub response: String,
}

/// Forward a conversation to the hosted completion API and return the reply.
#[utoipa::path(
    post,
    path = "/chat",
    request_body = ChatRequestBody,
    responses(
        (status = 200, description = "Assistant reply", body = ChatResponseBody),
        (status = 400, description = "Conversation has no user turn", body = Error),
        (status = 500, description = "Completion call failed", body = Error)
    ),
    tags = ["chat"],
    operation_id = "chat"
)]
#[post("/chat")]
pub async fn chat(
    state: web::Data<HttpState>,
    payload: web::Json<ChatRequestBody>,
) -> ApiResult<web::Json<ChatResponseBody>> {
    let reply = state.chat.respond(payload.into_inner().history).await?;
    Ok(web::Json(ChatResponseBody { response: reply }))
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use std::sync::Arc;

    use actix_web::{http::StatusCode, test as actix_test, App};

    use super::*;
    use crate::domain::ports::MockChatProxy;
    use crate::domain::ChatRole;
    use crate::inbound::http::test_utils::{state_with, TestPorts};

    #[actix_rt::test]
    async fn forwards_history_and_wraps_the_reply() {
        let mut proxy = MockChatProxy::new();
        proxy
            .expect_respond()
            .withf(|history| {
                history.len() == 1
                    && history[0].role == ChatRole::User
                    && history[0].text == "How do I donate?"
            })
            .returning(|_| Ok("Use the donate form.".to_owned()));

        let state = state_with(TestPorts {
            chat: Some(Arc::new(proxy)),
            ..TestPorts::default()
        });
        let app = actix_test::init_service(
            App::new()
                .app_data(actix_web::web::Data::new(state))
                .service(chat),
        )
        .await;

        let request = actix_test::TestRequest::post()
            .uri("/chat")
            .set_json(serde_json::json!({
                "history": [{ "role": "user", "text": "How do I donate?" }],
            }))
            .to_request();
        let body: serde_json::Value = actix_test::call_and_read_body_json(&app, request).await;
        assert_eq!(body, serde_json::json!({ "response": "Use the donate form." }));
    }

    #[actix_rt::test]
    async fn empty_history_maps_to_400() {
        let state = state_with(TestPorts::default());
        let app = actix_test::init_service(
            App::new()
                .app_data(actix_web::web::Data::new(state))
                .service(chat),
        )
        .await;

        let request = actix_test::TestRequest::post()
            .uri("/chat")
            .set_json(serde_json::json!({ "history": [] }))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
