use project_links::project::adapter::outgoing::{ApiConfig, HttpProjectBackend};
use project_links::project::application::service::ProjectStore;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting project links...");

    let config = ApiConfig::from_env()?;
    info!("Using project API at {}", config.base_url);

    let backend = HttpProjectBackend::new(&config)?;
    let store = ProjectStore::new(backend);

    // Initial fetch; a failure leaves the list empty and is already logged.
    if store.load().await.is_err() {
        warn!("Starting with an empty project list");
    }

    for project in store.projects() {
        match &project.category {
            Some(category) => info!(
                "[{}] {} ({}) {}",
                project.id, project.title, category, project.link
            ),
            None => info!("[{}] {} {}", project.id, project.title, project.link),
        }
    }

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
        std::process::exit(1);
    }
}
