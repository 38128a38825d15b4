use super::{batch_file::read_delimited, table::Table};
use std::{path::PathBuf, time::Duration};

/// Where the downloadable sample batch file comes from: a bundled local file,
/// falling back to a public spreadsheet export. Both are best effort.
pub struct SampleDataSource {
    local_path: PathBuf,
    remote_url: Option<String>,
    client: reqwest::Client,
}

impl SampleDataSource {
    pub fn new(
        local_path: impl Into<PathBuf>,
        remote_url: Option<String>,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            local_path: local_path.into(),
            remote_url,
            client: reqwest::Client::builder().timeout(timeout).build()?,
        })
    }

    /// CSV bytes of the sample file, or `None` when no source is reachable.
    pub async fn load(&self) -> Option<Vec<u8>> {
        match tokio::fs::read(&self.local_path).await {
            Ok(bytes) if read_delimited(&bytes, b',').is_ok() => return Some(bytes),
            Ok(_) => tracing::warn!(
                "Sample file {} is not valid CSV, trying remote source",
                self.local_path.display()
            ),
            Err(e) => tracing::debug!(
                "Sample file {} unavailable: {}",
                self.local_path.display(),
                e
            ),
        }

        let url = self.remote_url.as_deref()?;
        match fetch_csv(&self.client, url).await {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to download sample data from {}", url);
                None
            }
        }
    }
}

pub async fn fetch_csv(client: &reqwest::Client, url: &str) -> anyhow::Result<Vec<u8>> {
    let bytes = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .bytes()
        .await?;
    Ok(bytes.to_vec())
}

/// Downloads a CSV document and parses it into a table.
pub async fn fetch_table(url: &str, timeout: Duration) -> anyhow::Result<Table> {
    let client = reqwest::Client::builder().timeout(timeout).build()?;
    let bytes = fetch_csv(&client, url).await?;
    Ok(read_delimited(&bytes, b',')?)
}
