use anyhow::{Context, Result};
use rand::Rng;
use survey_greet::{RecordStore, StoreConfig};

pub fn run(store: StoreConfig) -> Result<()> {
    let store = RecordStore::new(store.json_path);
    let text = render_random(&store, &mut rand::rng())?;
    println!("{}", text);
    Ok(())
}

fn render_random<R: Rng>(store: &RecordStore, rng: &mut R) -> Result<String> {
    survey_greet::pick_and_render(store, rng)
        .with_context(|| format!("Failed to pick a response from {:?}", store.path()))
}
