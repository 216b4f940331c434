//! Subcommands that work on the location database.

use std::path::Path;

use anyhow::Context;
use log::{info, warn};
use pic2map::{
    photos::{filter_gps_metadata, TreeExplorer},
    AppConfig, LocationDb, LocationRow,
};

/// Stores the location of every geotagged picture under `directory`.
/// Returns the number of rows inserted.
pub async fn add(config: &AppConfig, directory: &Path) -> anyhow::Result<u64> {
    let directory = directory
        .canonicalize()
        .with_context(|| format!("unable to resolve {:?}", directory))?;
    info!("Adding image files from {:?}...", directory);

    let base = directory.clone();
    let rows = tokio::task::spawn_blocking(move || -> pic2map::Result<Vec<LocationRow>> {
        let paths = TreeExplorer::new(&base).paths()?;
        let records = filter_gps_metadata(&paths);
        info!(
            "{} picture files with GPS metadata found under {:?}",
            records.len(),
            base
        );

        Ok(records
            .iter()
            .filter_map(|metadata| match metadata.to_row() {
                Ok(row) => Some(row),
                Err(e) => {
                    warn!("Skipping {}: {}", metadata.source_file, e);
                    None
                }
            })
            .collect())
    })
    .await??;

    if rows.is_empty() {
        return Ok(0);
    }

    let db = LocationDb::from_config(&config.database).await?;
    let inserted = db.insert(&rows).await?;
    db.close().await;
    Ok(inserted)
}

/// Removes the rows of every picture under `directory`. Returns the number
/// of rows removed.
pub async fn remove(config: &AppConfig, directory: &Path) -> anyhow::Result<u64> {
    let directory = directory
        .canonicalize()
        .with_context(|| format!("unable to resolve {:?}", directory))?;
    info!("Removing image files from {:?}...", directory);

    let db = LocationDb::from_config(&config.database).await?;
    let removed = db.delete(&directory.to_string_lossy()).await?;
    db.close().await;
    Ok(removed)
}

pub async fn count(config: &AppConfig) -> anyhow::Result<u64> {
    info!("Getting image files in the database...");

    let db = LocationDb::from_config(&config.database).await?;
    let file_count = db.count().await?;
    db.close().await;
    Ok(file_count)
}
