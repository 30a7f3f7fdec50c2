use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use redink_locale::config::Config;
use redink_locale::i18n::{
    ContentLanguage, FileLocaleStore, FixedLanguage, I18n, PlatformLanguage, SystemLanguage,
};
use redink_locale::prompts::PromptTemplates;
use redink_locale::server::{self, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("redink_locale=info".parse()?),
        )
        .init();

    info!("Starting RedInk locale service");

    let config = Config::from_env()?;

    // Resolve the initial locale before anything reads it
    let store = Arc::new(FileLocaleStore::new(config.preferences_path()));
    let platform: Box<dyn PlatformLanguage> = match &config.lang_override {
        Some(tag) => Box::new(FixedLanguage::tag(tag)),
        None => Box::new(SystemLanguage),
    };
    let document = Arc::new(ContentLanguage::new());
    let i18n = Arc::new(I18n::init(
        store,
        platform.as_ref(),
        document.clone(),
        config.catalog_options(),
    ));

    let mut changes = i18n.subscribe();
    tokio::spawn(async move {
        while changes.changed().await.is_ok() {
            let locale = *changes.borrow_and_update();
            info!("Active locale is now {} ({})", locale, locale.display_name());
        }
    });

    let state = AppState {
        i18n,
        document,
        prompts: Arc::new(PromptTemplates::new(&config.prompts_dir)),
    };
    let app = server::router(state);

    let addr = format!("{}:{}", config.bind_address, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
