//! Local preview server for the generated blog

use anyhow::Result;
use axum::{
    extract::{Path as UrlPath, Request, State},
    http::{header, HeaderValue, StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use std::collections::HashSet;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower::ServiceExt;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::helpers::blog_url;
use crate::Blog;

/// Server state
struct ServerState {
    /// `public/<blog_dir>`
    blog_dir: PathBuf,
    /// Where unknown post URLs are sent
    blog_url: String,
    slugs: HashSet<String>,
    /// Site root without the trailing slash; empty when mounted at `/`
    root: String,
    files: ServeDir,
}

/// Start the preview server over an already generated public directory
pub async fn start(blog: &Blog, ip: &str, port: u16, open: bool) -> Result<()> {
    let app = router(blog)?;

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    let url = format!("http://{}:{}{}", ip, port, blog_url(&blog.config));
    println!("Server running at {}", url);
    println!("Press Ctrl+C to stop.");

    if open {
        if let Err(e) = open_browser(&url) {
            tracing::warn!("Failed to open browser: {}", e);
        }
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the router: post pages by slug, everything else from the public dir
pub fn router(blog: &Blog) -> Result<Router> {
    let slugs = blog
        .posts()?
        .all()
        .iter()
        .map(|p| p.slug.clone())
        .collect();

    let blog_dir_name = blog.config.blog_dir.trim_matches('/');
    let state = Arc::new(ServerState {
        blog_dir: blog.public_dir.join(blog_dir_name),
        blog_url: blog_url(&blog.config),
        slugs,
        root: blog.config.root.trim_end_matches('/').to_string(),
        files: ServeDir::new(&blog.public_dir).append_index_html_on_directories(true),
    });

    // Same URLs the generated pages link to, `root` included
    let post_route = format!("{}:slug", blog_url(&blog.config));
    let app = Router::new()
        .route(&post_route, get(post_handler))
        .route(&format!("{}/", post_route), get(post_handler))
        .fallback(static_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}

/// Serve a post page, or send the reader back to the blog list
async fn post_handler(
    State(state): State<Arc<ServerState>>,
    UrlPath(slug): UrlPath<String>,
) -> Response {
    if !state.slugs.contains(&slug) {
        tracing::debug!("Unknown post {:?}, redirecting to the blog list", slug);
        return Redirect::temporary(&state.blog_url).into_response();
    }

    let file = state.blog_dir.join(&slug).join("index.html");
    match tokio::fs::read_to_string(&file).await {
        Ok(content) => Html(content).into_response(),
        Err(e) => {
            tracing::warn!("Post page {:?} unavailable: {}", file, e);
            (StatusCode::NOT_FOUND, "Not found").into_response()
        }
    }
}

/// Serve a file from the public dir, with `root` stripped from the request path
async fn static_handler(State(state): State<Arc<ServerState>>, mut req: Request) -> Response {
    let mut target = match req.uri().path().strip_prefix(state.root.as_str()) {
        Some("") => "/".to_string(),
        Some(rest) if rest.starts_with('/') => rest.to_string(),
        _ => return (StatusCode::NOT_FOUND, "Not found").into_response(),
    };
    if let Some(query) = req.uri().query() {
        target.push('?');
        target.push_str(query);
    }
    match target.parse::<Uri>() {
        Ok(uri) => *req.uri_mut() = uri,
        Err(_) => return (StatusCode::BAD_REQUEST, "Bad request").into_response(),
    }

    let mut response = match state.files.clone().oneshot(req).await {
        Ok(response) => response.into_response(),
        Err(never) => match never {},
    };

    // Directory redirects from ServeDir are relative to the stripped path
    if response.status().is_redirection() {
        let rooted = response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .filter(|location| location.starts_with('/'))
            .and_then(|location| {
                HeaderValue::from_str(&format!("{}{}", state.root, location)).ok()
            });
        if let Some(location) = rooted {
            response.headers_mut().insert(header::LOCATION, location);
        }
    }

    response
}

/// Open a URL in the default browser
fn open_browser(url: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open").arg(url).spawn()?;
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open").arg(url).spawn()?;
    }

    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/c", "start", url])
            .spawn()?;
    }

    Ok(())
}
