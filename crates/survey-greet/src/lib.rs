#![doc = include_str!("../README.md")]

pub mod client;
pub mod config;
pub mod error;
pub mod extract;
pub mod pick;
pub mod store;
pub mod types;

pub use client::{ResponseSource, SurveyClient};
pub use config::{FetchConfig, StoreConfig};
pub use error::{Error, Result};
pub use extract::{Lookup, extract_responses, lookup_answer};
pub use pick::{pick, render};
pub use store::RecordStore;
pub use types::{QuestionIds, Response};

use log::info;
use rand::Rng;

/// Fetch mode: pull one payload, flatten it, and replace the store.
///
/// The store is only touched once every entry has been extracted, so a
/// malformed payload leaves the previous file in place. Returns the number
/// of responses written.
pub fn fetch_and_store<S: ResponseSource + ?Sized>(
    source: &S,
    store: &RecordStore,
    ids: &QuestionIds,
) -> Result<usize> {
    let payload = source.fetch_payload()?;
    let responses = extract_responses(&payload, ids)?;
    store.write(&responses)?;
    info!(
        "stored {} responses in {}",
        responses.len(),
        store.path().display()
    );
    Ok(responses.len())
}

/// Pick mode: read the store and render one response chosen by `rng`.
pub fn pick_and_render<R: Rng>(store: &RecordStore, rng: &mut R) -> Result<String> {
    let responses = store.read()?;
    let chosen = pick(&responses, rng)?;
    Ok(render(chosen))
}
