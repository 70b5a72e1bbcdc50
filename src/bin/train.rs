use alumni_chatbot::{
    config::Config,
    services::trainer::Trainer,
    storage::{Access, StatementStore},
    training_data::{load_corpus_dir, load_training_pairs},
};
use anyhow::Context;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env().context("invalid configuration")?;

    let corpora = load_corpus_dir(&config.corpus_dir)?;
    let pairs = load_training_pairs(&config.training_pairs)?;

    let store = StatementStore::open(&config.database_path, Access::ReadWrite)
        .await
        .with_context(|| format!("cannot open {}", config.database_path.display()))?;

    let trainer = Trainer::new(store.clone());
    tracing::info!(conversation = trainer.conversation(), "training started");

    trainer.train_corpus(&corpora).await?;
    trainer.train_pairs(&pairs).await?;

    let total = store.statement_count().await?;
    tracing::info!(total, "statements stored");
    store.close().await;

    println!("Training completed.");
    Ok(())
}
