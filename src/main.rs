//! Portfolio Page
//!
//! Compiled to wasm (`dx build --features web`) this launches the Dioxus
//! app in the browser. Natively it renders a static HTML snapshot of the
//! page to stdout.

#[cfg(target_arch = "wasm32")]
fn main() {
    dioxus::logger::initialize_default();
    tracing::info!("Starting portfolio page v{}", env!("CARGO_PKG_VERSION"));
    dioxus::launch(portfolio_page::app::App);
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use std::io::Write;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Logs go to stderr so the snapshot on stdout stays clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portfolio_page=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Rendering portfolio snapshot v{}", env!("CARGO_PKG_VERSION"));

    let config = portfolio_page::config::load_config()?;
    tracing::info!(
        "Configuration loaded, owner: {}, {} skills",
        config.site.owner,
        config.skills.len()
    );

    let html = portfolio_page::app::render_page(config);
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "<!DOCTYPE html>")?;
    writeln!(stdout, "{}", html)?;
    Ok(())
}
