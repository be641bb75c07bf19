//! Batch seeding utility.
//!
//! Loads conference seed files and pushes their contents through the running
//! backend's HTTP API: first the event itself, then its persons, locations,
//! tags and sessions (fanned out through a bounded number of in-flight
//! requests), and finally the session attachments.
//!
//! A seed file is JSON of the shape:
//!
//! ```json
//! {
//!   "event": {"name": "...", "description": "...", "start_time": "...", "end_time": "..."},
//!   "persons": {"<key>": {"name": "..."}},
//!   "locations": {"<key>": {"name": "..."}},
//!   "tags": {"<key>": {"name": "...", "color": "..."}},
//!   "sessions": {"<key>": {"title": "...", "description": "...", "start_time": "...", "end_time": "..."}},
//!   "session_adds": {"<session key>": {"persons": ["<key>"], "locations": ["<key>"], "tags": ["<key>"]}}
//! }
//! ```
//!
//! Keys are only meaningful within the file; they let `session_adds` refer to
//! entities whose real ids are assigned by the server during the run.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{anyhow, Context};
use clap::Parser;
use event_backend::api::dtos::envelope::OkEnvelope;
use futures_util::future;
use serde::Deserialize;
use serde_json::Value;
use tokio::sync::Semaphore;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "seed", about = "Pushes conference seed files through the HTTP API")]
struct Args {
    /// Base URL of the running backend.
    #[arg(long, env = "SERVER_URL", default_value = "http://localhost:8000")]
    server_url: String,

    /// Maximum number of in-flight requests.
    #[arg(long, default_value_t = 64)]
    concurrency: usize,

    /// Seed JSON files to push, in order.
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct SeedFile {
    event: Value,
    #[serde(default)]
    persons: BTreeMap<String, Value>,
    #[serde(default)]
    locations: BTreeMap<String, Value>,
    #[serde(default)]
    tags: BTreeMap<String, Value>,
    #[serde(default)]
    sessions: BTreeMap<String, Value>,
    #[serde(default)]
    session_adds: BTreeMap<String, SessionAdds>,
}

#[derive(Debug, Deserialize)]
struct SessionAdds {
    #[serde(default)]
    persons: Vec<String>,
    #[serde(default)]
    locations: Vec<String>,
    #[serde(default)]
    tags: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct CreatedEntity {
    id: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let client = reqwest::Client::new();
    let semaphore = Arc::new(Semaphore::new(args.concurrency));

    let mut total_requests = 0usize;
    let mut total_seconds = 0f64;

    for file in &args.files {
        info!(file = %file.display(), "processing seed file");

        let raw = std::fs::read_to_string(file)
            .with_context(|| format!("failed to read {}", file.display()))?;
        let seed: SeedFile = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse {}", file.display()))?;

        let (requests, seconds) = push_seed(&args.server_url, &client, &semaphore, &seed).await?;
        total_requests += requests;
        total_seconds += seconds;
    }

    if total_seconds > 0.0 {
        info!(
            requests = total_requests,
            rate = %format!("{:.1} req/s", total_requests as f64 / total_seconds),
            "done"
        );
    }
    Ok(())
}

async fn push_seed(
    server_url: &str,
    client: &reqwest::Client,
    semaphore: &Arc<Semaphore>,
    seed: &SeedFile,
) -> anyhow::Result<(usize, f64)> {
    // The event itself is one request; no need to meter it.
    let event: OkEnvelope<CreatedEntity> = client
        .post(format!("{server_url}/events"))
        .json(&seed.event)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    let event_id = event.data.id;
    info!(event_id = %event_id, "event created");

    // Phase one: persons, locations, tags and sessions, all fanned out at
    // once; each created id is recorded under its seed-file key.
    let collections: [(&str, &BTreeMap<String, Value>); 4] = [
        ("persons", &seed.persons),
        ("locations", &seed.locations),
        ("tags", &seed.tags),
        ("sessions", &seed.sessions),
    ];

    let mut tasks = Vec::new();
    for (collection, entries) in collections {
        for (key, payload) in entries {
            let url = format!("{server_url}/events/{event_id}/{collection}");
            tasks.push(async move {
                let _permit = semaphore.acquire().await?;
                let created: OkEnvelope<CreatedEntity> = client
                    .post(&url)
                    .json(payload)
                    .send()
                    .await?
                    .error_for_status()?
                    .json()
                    .await?;
                Ok::<_, anyhow::Error>((collection, key.as_str(), created.data.id))
            });
        }
    }

    let first_phase = tasks.len();
    let start = Instant::now();
    let results = future::join_all(tasks).await;
    let mut elapsed = start.elapsed().as_secs_f64();

    let mut created: BTreeMap<(&str, &str), String> = BTreeMap::new();
    for result in results {
        let (collection, key, id) = result?;
        created.insert((collection, key), id);
    }
    info!(
        requests = first_phase,
        rate = %format!("{:.1} req/s", first_phase as f64 / elapsed.max(f64::EPSILON)),
        "entities created"
    );

    // Phase two: attach persons, locations and tags to their sessions.
    let mut tasks = Vec::new();
    for (session_key, adds) in &seed.session_adds {
        let session_id = created
            .get(&("sessions", session_key.as_str()))
            .ok_or_else(|| anyhow!("session_adds references unknown session `{session_key}`"))?;

        let attachments: [(&str, &Vec<String>); 3] = [
            ("persons", &adds.persons),
            ("locations", &adds.locations),
            ("tags", &adds.tags),
        ];
        for (collection, keys) in attachments {
            for key in keys {
                let linked_id = created.get(&(collection, key.as_str())).ok_or_else(|| {
                    anyhow!("session_adds references unknown {collection} entry `{key}`")
                })?;
                let url = format!(
                    "{server_url}/events/{event_id}/sessions/{session_id}/{collection}/{linked_id}"
                );
                tasks.push(async move {
                    let _permit = semaphore.acquire().await?;
                    client.put(&url).send().await?.error_for_status()?;
                    Ok::<_, anyhow::Error>(())
                });
            }
        }
    }

    let second_phase = tasks.len();
    let start = Instant::now();
    let results = future::join_all(tasks).await;
    elapsed += start.elapsed().as_secs_f64();
    for result in results {
        result?;
    }
    info!(requests = second_phase, "session attachments pushed");

    Ok((first_phase + second_phase, elapsed))
}
