use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use sqlx::postgres::PgPoolOptions;

use rental_listings::application::{HomeRepository, PhotoAudit};
use rental_listings::infrastructure::{
    identity::ObjectIdGenerator, persistence::PostgresHomeStore, storage::S3BlobStore,
};
use rental_listings::Config;

/// Report photo blobs that no stored home references
#[derive(Parser)]
struct Cli {
    #[arg(long)]
    database_url: Option<String>,

    /// Bucket to scan, defaults to PHOTO_BUCKET
    #[arg(long)]
    bucket: Option<String>,

    #[arg(long)]
    pretty: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = Config::from_env();
    if let Some(url) = cli.database_url {
        config.database_url = url;
    }
    if let Some(bucket) = cli.bucket {
        config.photo_bucket = bucket;
    }

    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&config.database_url)
        .await
        .context("connecting to database")?;

    let blobs = Arc::new(S3BlobStore::new(&config.s3()));
    let repository = Arc::new(HomeRepository::new(
        Arc::new(PostgresHomeStore::new(pool)),
        blobs.clone(),
        Arc::new(ObjectIdGenerator::new()),
        config.photo_bucket.clone(),
    ));

    let report = PhotoAudit::new(repository, blobs)
        .run()
        .await
        .context("auditing photo bucket")?;

    let output = if cli.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{}", output);

    Ok(if report.is_clean() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
