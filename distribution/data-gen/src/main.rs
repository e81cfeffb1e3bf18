//! Demo session database seeder
//!
//! Drives the real session store to produce a signed-in demo profile with
//! tutorial progress, for screenshots and QA builds. Can also sweep the
//! catalog and report dead external links.

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use conecta::catalog::Catalog;
use conecta::database::SessionDatabase;
use conecta::models::StoredProfile;
use conecta::tutorials;
use demo_data::{DEMO_COMPLETIONS, DEMO_PROFILE};
use futures::StreamExt;
use rand::Rng;
use rusqlite::params;
use std::path::Path;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the SQLite session database to seed
    #[arg(short, long, default_value = "DemoSession.sqlite")]
    db_path: String,

    /// Demo account name (defaults to the shared demo profile)
    #[arg(long)]
    name: Option<String>,

    /// Demo account e-mail
    #[arg(long)]
    email: Option<String>,

    /// Mark the first N tutorials completed instead of the demo pattern
    #[arg(long)]
    completed: Option<usize>,

    /// Delete an existing database before seeding
    #[arg(long)]
    reset: bool,

    /// Check every catalog URL and report failures instead of seeding
    #[arg(long)]
    check_urls: bool,

    /// Concurrency limit for URL checks
    #[arg(short = 'C', long, default_value_t = 4)]
    concurrency: usize,
}

/// Backdate a completion directly via SQL (seeded data only)
fn set_completed_at_direct(db_path: &str, tutorial_id: i64, timestamp_unix: i64) -> Result<()> {
    let conn = rusqlite::Connection::open(db_path)?;
    let timestamp = chrono::DateTime::from_timestamp(timestamp_unix, 0).unwrap_or_else(Utc::now);
    let timestamp_str = timestamp.format("%Y-%m-%d %H:%M:%S%.f").to_string();
    conn.execute(
        "UPDATE completed_tutorials SET completedAt = ?1 WHERE tutorialId = ?2",
        params![timestamp_str, tutorial_id],
    )?;
    Ok(())
}

fn seed_session(args: &Args) -> Result<()> {
    if args.reset && Path::new(&args.db_path).exists() {
        std::fs::remove_file(&args.db_path)
            .with_context(|| format!("removing {}", args.db_path))?;
    }

    let db = SessionDatabase::open(&args.db_path)
        .with_context(|| format!("opening {}", args.db_path))?;

    let profile = StoredProfile::new(
        DEMO_PROFILE.user_id,
        args.name.clone().unwrap_or_else(|| DEMO_PROFILE.name.to_string()),
        args.email.clone().unwrap_or_else(|| DEMO_PROFILE.email.to_string()),
        Some(DEMO_PROFILE.role.to_string()),
    );
    db.save_profile(&profile)?;
    tracing::info!(name = %profile.name, "seeded demo profile");

    let now = Utc::now().timestamp();
    let mut rng = rand::thread_rng();

    match args.completed {
        Some(count) => {
            let ids: Vec<i64> = tutorials::QUICK_TUTORIALS
                .iter()
                .map(|t| t.id)
                .chain(tutorials::COURSE_TUTORIALS.iter().map(|t| t.id))
                .take(count)
                .collect();
            for (i, id) in ids.iter().enumerate() {
                db.set_tutorial_completed(*id, true)?;
                // Spread completions over the past week with some jitter
                let offset = -((i as i64 + 1) * 86_400) - rng.gen_range(0..3600);
                set_completed_at_direct(&args.db_path, *id, now + offset)?;
            }
            tracing::info!(count = ids.len(), "seeded tutorial completions");
        }
        None => {
            for completion in DEMO_COMPLETIONS {
                db.set_tutorial_completed(completion.tutorial_id, true)?;
                set_completed_at_direct(
                    &args.db_path,
                    completion.tutorial_id,
                    now + completion.offset,
                )?;
            }
            tracing::info!(count = DEMO_COMPLETIONS.len(), "seeded demo completions");
        }
    }

    println!("Seeded {} for {}", args.db_path, profile.name);
    Ok(())
}

async fn check_urls(concurrency: usize) -> Result<()> {
    let catalog = Catalog::builtin();
    let client = reqwest::Client::new();

    let checks = futures::stream::iter(catalog.entries().iter().map(|entry| {
        let client = client.clone();
        async move {
            let result = client.head(&entry.url).send().await;
            (entry.title.clone(), entry.url.clone(), result)
        }
    }))
    .buffer_unordered(concurrency.max(1))
    .collect::<Vec<_>>()
    .await;

    let mut failures = 0usize;
    for (title, url, result) in checks {
        match result {
            Ok(response) if response.status().is_success() || response.status().is_redirection() => {
                tracing::debug!(%title, %url, status = %response.status(), "ok");
            }
            Ok(response) => {
                failures += 1;
                println!("{title}: {url} -> {}", response.status());
            }
            Err(e) => {
                failures += 1;
                println!("{title}: {url} -> {e}");
            }
        }
    }

    if failures == 0 {
        println!("All {} catalog URLs reachable", catalog.len());
    } else {
        println!("{failures} catalog URL(s) failed");
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    if args.check_urls {
        check_urls(args.concurrency).await
    } else {
        seed_session(&args)
    }
}
