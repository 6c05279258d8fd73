//! CLI command definitions and handlers

use std::future::Future;

use clap::Subcommand;
use tokio::task::JoinSet;
use tracing::{error, info};

use crate::core::client::TranslatorClient;
use crate::core::errors::{Result, TranslatorError};

/// Phrases used when a command is given none
pub const DEMO_PHRASES: &[&str] = &[
    "the pen is on the table",
    "je suis un chien",
    "no tiengo dinero",
    "ciao amico",
];

/// Commands for the translator CLI
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Detect the language of each phrase
    Detect {
        /// Phrases to inspect (demo phrases if none given)
        phrases: Vec<String>,
    },

    /// Translate each phrase
    Translate {
        /// Target language (default: en)
        #[arg(short, long, default_value = "en")]
        to: String,

        /// Source language (auto-detect if not specified)
        #[arg(short, long)]
        from: Option<String>,

        /// Phrases to translate (demo phrases if none given)
        phrases: Vec<String>,
    },
}

/// Fall back to the demo phrases when none were supplied
pub fn phrases_or_demo(phrases: Vec<String>) -> Vec<String> {
    if phrases.is_empty() {
        DEMO_PHRASES.iter().map(|p| p.to_string()).collect()
    } else {
        phrases
    }
}

/// Detect every phrase concurrently, one task per phrase.
///
/// Results come back in input order.
pub async fn detect_all(
    client: &TranslatorClient,
    phrases: Vec<String>,
) -> Vec<(String, Result<String>)> {
    fan_out(phrases, |phrase| {
        let client = client.clone();
        async move { client.detect(&phrase).await }
    })
    .await
}

/// Translate every phrase concurrently, one task per phrase.
///
/// Results come back in input order.
pub async fn translate_all(
    client: &TranslatorClient,
    phrases: Vec<String>,
    to: &str,
    from: Option<&str>,
) -> Vec<(String, Result<String>)> {
    let to = to.to_string();
    let from = from.map(|f| f.to_string());
    fan_out(phrases, |phrase| {
        let client = client.clone();
        let to = to.clone();
        let from = from.clone();
        async move { client.translate(&phrase, &to, from.as_deref()).await }
    })
    .await
}

/// Spawn `op` once per phrase and pair every phrase with its outcome.
///
/// A task that panics or is cancelled yields `TaskFailed` for its phrase.
async fn fan_out<F, Fut>(phrases: Vec<String>, op: F) -> Vec<(String, Result<String>)>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<String>> + Send + 'static,
{
    let mut tasks = JoinSet::new();
    for (index, phrase) in phrases.iter().enumerate() {
        let fut = op(phrase.clone());
        tasks.spawn(async move { (index, fut.await) });
    }

    let mut slots: Vec<Option<Result<String>>> = phrases.iter().map(|_| None).collect();
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((index, result)) => slots[index] = Some(result),
            Err(e) => error!("Request task did not complete: {}", e),
        }
    }

    phrases
        .into_iter()
        .zip(slots)
        .map(|(phrase, slot)| {
            let result = slot.unwrap_or_else(|| {
                Err(TranslatorError::TaskFailed {
                    message: "request task panicked or was cancelled".to_string(),
                })
            });
            (phrase, result)
        })
        .collect()
}

/// Handle detect command
pub async fn handle_detect(client: &TranslatorClient, phrases: Vec<String>) -> anyhow::Result<()> {
    let phrases = phrases_or_demo(phrases);
    info!("Detecting language of {} phrases", phrases.len());

    let results = detect_all(client, phrases).await;
    report(results)
}

/// Handle translate command
pub async fn handle_translate(
    client: &TranslatorClient,
    phrases: Vec<String>,
    to: String,
    from: Option<String>,
) -> anyhow::Result<()> {
    let phrases = phrases_or_demo(phrases);
    info!("Translating {} phrases to {}", phrases.len(), to);

    let results = translate_all(client, phrases, &to, from.as_deref()).await;
    report(results)
}

fn report(results: Vec<(String, Result<String>)>) -> anyhow::Result<()> {
    let total = results.len();
    let mut failures = 0;

    for (phrase, result) in results {
        match result {
            Ok(output) => println!("'{}' -> '{}'", phrase, output),
            Err(e) => {
                error!("'{}' failed: {}", phrase, e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{} of {} requests failed", failures, total);
    }

    Ok(())
}
