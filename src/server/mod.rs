//! Preview server exposing the RSS feed endpoint

use anyhow::Result;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::Blog;

/// Server state
struct ServerState {
    blog: Blog,
}

/// Build the router: the feed route plus static files from the public
/// directory (where the feed stylesheet lives)
pub fn router(blog: &Blog) -> Router {
    let feed_route = format!("/{}", blog.config.feed.path.trim_start_matches('/'));
    let public_dir = blog.public_dir.clone();

    let state = Arc::new(ServerState { blog: blog.clone() });

    Router::new()
        .route(&feed_route, get(feed_handler))
        .fallback_service(ServeDir::new(public_dir).append_index_html_on_directories(true))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the preview server
pub async fn start(blog: &Blog, ip: &str, port: u16) -> Result<()> {
    let app = router(blog);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    let url = format!("http://{}:{}", ip, port);
    println!("Server running at {}", url);
    println!(
        "Feed available at {}/{}",
        url,
        blog.config.feed.path.trim_start_matches('/')
    );
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Serve the feed, re-reading the collection on every request
async fn feed_handler(State(state): State<Arc<ServerState>>) -> Response {
    let blog = state.blog.clone();
    match tokio::task::spawn_blocking(move || blog.render_feed(None)).await {
        Ok(Ok(xml)) => (
            [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
            xml,
        )
            .into_response(),
        Ok(Err(e)) => {
            tracing::error!("Feed generation failed: {:#}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, format!("{:#}", e)).into_response()
        }
        Err(e) => {
            tracing::error!("Feed task failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn state(blog: Blog) -> State<Arc<ServerState>> {
        State(Arc::new(ServerState { blog }))
    }

    #[tokio::test]
    async fn test_feed_endpoint() {
        let dir = TempDir::new().unwrap();
        let blog = Blog::new(dir.path()).unwrap();
        fs::create_dir_all(&blog.collection_dir).unwrap();
        fs::write(
            blog.collection_dir.join("hello-world.md"),
            "---\ntitle: Hello\npublishDate: \"2023-01-15\"\ndescription: First\n---\nBody\n",
        )
        .unwrap();

        let response = feed_handler(state(blog)).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/xml; charset=utf-8"
        );

        let body = body_string(response).await;
        assert!(body.contains("<link>https://blog.axelpadilla.me/hello-world/</link>"));
    }

    #[tokio::test]
    async fn test_feed_endpoint_reports_invalid_content() {
        let dir = TempDir::new().unwrap();
        let blog = Blog::new(dir.path()).unwrap();
        fs::create_dir_all(&blog.collection_dir).unwrap();
        fs::write(
            blog.collection_dir.join("bad.md"),
            "---\ntitle: Bad\npublishDate: not-a-date\ndescription: d\n---\n",
        )
        .unwrap();

        let response = feed_handler(state(blog)).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body_string(response).await.contains("malformed date"));
    }
}
