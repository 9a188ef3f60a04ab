//! Serve command - preview a built site

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr, bail};
use tokio::net::TcpListener;

use crate::server::create_router;

/// Run the serve command.
pub async fn run(site_dir: &Path, port: u16) -> Result<()> {
    tracing::info!(?site_dir, port, "Starting preview server");

    if !site_dir.is_dir() {
        bail!("Site directory not found: {}", site_dir.display());
    }

    let app = create_router(site_dir);
    let addr = format!("127.0.0.1:{port}");

    let listener = TcpListener::bind(&addr)
        .await
        .wrap_err_with(|| format!("Failed to bind to {addr}"))?;

    println!();
    println!("  Preview server running at http://{addr}");
    println!("  Press Ctrl+C to stop");
    println!();

    axum::serve(listener, app).await.wrap_err("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_site_dir() {
        let result = run(Path::new("/nonexistent/public"), 0).await;
        assert!(result.unwrap_err().to_string().contains("not found"));
    }
}
