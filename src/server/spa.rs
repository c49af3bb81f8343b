use {
    super::ServerState,
    axum::{
        extract::State,
        http::{Method, StatusCode, Uri, header},
        response::{IntoResponse, Response},
    },
    std::{
        path::{Path, PathBuf},
        sync::Arc,
    },
};

/// Map a request path onto a file under `root`.
///
/// Returns `None` when the path tries to climb out of `root`.
pub fn resolve(root: &Path, request_path: &str) -> Option<PathBuf> {
    let mut resolved = root.to_path_buf();
    for part in request_path.split('/') {
        match part {
            "" | "." => continue,
            ".." => return None,
            p if p.contains('\\') || p.contains(':') => return None,
            p => resolved.push(p),
        }
    }
    Some(resolved)
}

pub fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("js" | "mjs") => "text/javascript; charset=utf-8",
        Some("wasm") => "application/wasm",
        Some("css") => "text/css; charset=utf-8",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("ico") => "image/x-icon",
        Some("txt") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}

async fn is_file(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|m| m.is_file())
        .unwrap_or(false)
}

async fn send_file(path: &Path) -> Response {
    match tokio::fs::read(path).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, content_type(path))], bytes).into_response(),
        Err(e) => {
            log::error!("Failed to read {}: {}", path.display(), e);
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

/// Fallback for everything outside `/api`: the bundle file if it exists,
/// otherwise the entry document so client-side routes resolve.
pub(crate) async fn serve_spa(
    State(state): State<Arc<ServerState>>,
    method: Method,
    uri: Uri,
) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }

    let Some(candidate) = resolve(&state.spa_dir, uri.path()) else {
        log::warn!("Rejected path outside bundle: {}", uri.path());
        return StatusCode::FORBIDDEN.into_response();
    };

    if is_file(&candidate).await {
        return send_file(&candidate).await;
    }
    send_file(&state.entry_document()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_nested_asset() {
        let root = Path::new("dist/spa");
        assert_eq!(
            resolve(root, "/pkg/almasu_bg.wasm"),
            Some(root.join("pkg").join("almasu_bg.wasm"))
        );
        assert_eq!(resolve(root, "/"), Some(root.to_path_buf()));
    }

    #[test]
    fn rejects_traversal() {
        let root = Path::new("dist/spa");
        assert_eq!(resolve(root, "/../Cargo.toml"), None);
        assert_eq!(resolve(root, "/pkg/../../secret"), None);
        assert_eq!(resolve(root, "/..\\secret"), None);
    }

    #[test]
    fn picks_content_type_by_extension() {
        assert_eq!(content_type(Path::new("a/index.html")), "text/html; charset=utf-8");
        assert_eq!(content_type(Path::new("pkg/app_bg.wasm")), "application/wasm");
        assert_eq!(content_type(Path::new("LICENSE")), "application/octet-stream");
    }
}
