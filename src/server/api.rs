use {
    super::ServerState,
    axum::{
        Json,
        extract::{Request, State},
        http::{HeaderValue, Method, StatusCode, header},
        middleware::Next,
        response::{IntoResponse, Response},
    },
    serde::{Deserialize, Serialize},
    std::sync::Arc,
};

/// Body of both placeholder endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// GET /api/ping
pub(crate) async fn ping(State(state): State<Arc<ServerState>>) -> Json<MessageResponse> {
    Json(MessageResponse {
        message: state.ping_message.clone(),
    })
}

/// GET /api/demo
pub(crate) async fn demo(State(state): State<Arc<ServerState>>) -> Json<MessageResponse> {
    Json(MessageResponse {
        message: state.demo_message.to_string(),
    })
}

const ALLOWED_METHODS: &str = "GET,HEAD,PUT,PATCH,POST,DELETE";

/// Any origin may call the API. Preflight requests are answered here.
pub(crate) async fn allow_any_origin(req: Request, next: Next) -> Response {
    let mut response = if req.method() == Method::OPTIONS {
        let mut preflight = StatusCode::NO_CONTENT.into_response();
        preflight.headers_mut().insert(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        );
        preflight
    } else {
        next.run(req).await
    };
    response.headers_mut().insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    response
}

#[cfg(test)]
mod tests {
    use {super::*, crate::config::SERVER, std::path::PathBuf};

    fn state(ping: &str) -> Arc<ServerState> {
        Arc::new(ServerState {
            ping_message: ping.to_string(),
            demo_message: SERVER.demo_message,
            spa_dir: PathBuf::from("unused"),
        })
    }

    #[tokio::test]
    async fn ping_echoes_configured_message() {
        let Json(body) = ping(State(state("pong"))).await;
        assert_eq!(body.message, "pong");
    }

    #[tokio::test]
    async fn demo_returns_static_payload() {
        let Json(body) = demo(State(state("ping"))).await;
        assert_eq!(body.message, SERVER.demo_message);
    }

    #[test]
    fn message_serializes_as_single_field() {
        let body = MessageResponse {
            message: "ping".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"message":"ping"}"#
        );
    }
}
