// src/main.rs

use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cropguard::admin::AdminRegistry;
use cropguard::chat::provider::{ChatProvider, DeepSeekProvider, OpenAiProvider};
use cropguard::chat::Dispatcher;
use cropguard::config::CONFIG;
use cropguard::credentials::FileCredentialStore;
use cropguard::scan::{FixtureClassifier, LeafClassifier};
use cropguard::server::{self, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing; RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&CONFIG.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting CropGuard backend");
    info!(
        "Providers: OpenAI ({}) / DeepSeek ({})",
        CONFIG.openai_model, CONFIG.deepseek_model
    );

    let credentials = if CONFIG.credentials_path.is_empty() {
        Arc::new(FileCredentialStore::new(FileCredentialStore::default_path()))
    } else {
        Arc::new(FileCredentialStore::new(CONFIG.credentials_path.clone()))
    };
    info!("Credential store: {}", credentials.path().display());

    let providers: Vec<Arc<dyn ChatProvider>> = vec![
        Arc::new(OpenAiProvider::from_config()),
        Arc::new(DeepSeekProvider::from_config()),
    ];
    let dispatcher = Arc::new(Dispatcher::new(credentials, providers));

    let classifier: Arc<dyn LeafClassifier> = match CONFIG.scan_seed {
        Some(seed) => {
            info!("Scan classifier seeded with {}", seed);
            Arc::new(FixtureClassifier::with_seed(seed))
        }
        None => Arc::new(FixtureClassifier::new()),
    };

    let state = AppState {
        dispatcher,
        classifier,
        admin: Arc::new(AdminRegistry::new()),
    };

    server::run(state).await
}
