#![cfg(not(target_arch = "wasm32"))]

use {
    almasu::server::{MessageResponse, ServerConfig, serve_on},
    std::{fs, path::PathBuf},
    tokio::net::TcpListener,
};

struct Bundle {
    dir: PathBuf,
}

impl Bundle {
    fn new() -> Self {
        let dir = std::env::temp_dir().join(format!("almasu-spa-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(dir.join("pkg")).unwrap();
        fs::write(dir.join("index.html"), "<html>entry</html>").unwrap();
        fs::write(dir.join("pkg").join("almasu.js"), "export default 1;").unwrap();
        Self { dir }
    }
}

impl Drop for Bundle {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.dir);
    }
}

async fn start(config: ServerConfig) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { serve_on(listener, &config).await });
    format!("http://{}", addr)
}

#[tokio::test]
async fn api_answers_with_cors_header() {
    let base = start(ServerConfig {
        ping_message: "pong".to_string(),
        dev: true,
        ..Default::default()
    })
    .await;

    let resp = reqwest::get(format!("{}/api/ping", base)).await.unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
    let body: MessageResponse = resp.json().await.unwrap();
    assert_eq!(body.message, "pong");

    let demo: MessageResponse = reqwest::get(format!("{}/api/demo", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(!demo.message.is_empty());
}

#[tokio::test]
async fn bundle_files_and_history_fallback() {
    let bundle = Bundle::new();
    let base = start(ServerConfig {
        spa_dir: bundle.dir.clone(),
        ..Default::default()
    })
    .await;

    let js = reqwest::get(format!("{}/pkg/almasu.js", base)).await.unwrap();
    assert_eq!(js.status(), 200);
    assert_eq!(
        js.headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok()),
        Some("text/javascript; charset=utf-8")
    );
    assert_eq!(js.text().await.unwrap(), "export default 1;");

    for route in ["/", "/exchange-confirm", "/transaction-status?tx=1", "/no/such/page"] {
        let page = reqwest::get(format!("{}{}", base, route)).await.unwrap();
        assert_eq!(page.status(), 200, "route {}", route);
        assert_eq!(page.text().await.unwrap(), "<html>entry</html>");
    }
}

#[tokio::test]
async fn dev_mode_skips_static_files() {
    let bundle = Bundle::new();
    let base = start(ServerConfig {
        spa_dir: bundle.dir.clone(),
        dev: true,
        ..Default::default()
    })
    .await;

    let resp = reqwest::get(format!("{}/exchange-confirm", base)).await.unwrap();
    assert_eq!(resp.status(), 404);
}
