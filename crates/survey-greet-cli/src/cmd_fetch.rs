use anyhow::{Context, Result};
use survey_greet::{
    FetchConfig, QuestionIds, RecordStore, ResponseSource, StoreConfig, SurveyClient,
};

pub fn run(store: StoreConfig) -> Result<()> {
    let config = FetchConfig::from_env()?;
    let client = SurveyClient::new(config).context("Failed to build HTTP client")?;
    run_with_source(&client, &RecordStore::new(store.json_path))
}

fn run_with_source(source: &dyn ResponseSource, store: &RecordStore) -> Result<()> {
    let count = survey_greet::fetch_and_store(source, store, &QuestionIds::default())
        .with_context(|| format!("Failed to fetch responses into {:?}", store.path()))?;
    log::info!("fetched {} responses", count);
    Ok(())
}
