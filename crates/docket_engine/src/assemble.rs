//! Dataset assembler: both chambers, listing order, full overwrite.

use std::io;
use std::path::PathBuf;

use docket_logging::docket_info;
use thiserror::Error;
use url::Url;

use crate::decode::{decode_page, DecodedPage};
use crate::extract::extract_meeting_records;
use crate::fetch::{FetchSettings, Fetcher, ReqwestFetcher};
use crate::heuristic::strip_author_fragments;
use crate::listing::discover_meeting_links;
use crate::record::{BillRecord, Chamber};
use crate::store::{write_dataset, StoreError};
use crate::types::FailureKind;

/// Production site. Overridable for tests and mirrors.
pub const BASE_URL: &str = "https://capitol.texas.gov";

#[derive(Debug, Clone)]
pub struct ScrapeSettings {
    pub base_url: String,
    pub output_dir: PathBuf,
    pub fetch: FetchSettings,
}

impl Default for ScrapeSettings {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            output_dir: PathBuf::from("."),
            fetch: FetchSettings::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("fetch failed for {url}: {kind}: {message}")]
    Fetch {
        url: String,
        kind: FailureKind,
        message: String,
    },
    #[error("invalid base url {0:?}")]
    InvalidBaseUrl(String),
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    #[error("runtime error: {0}")]
    Runtime(#[from] io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeSummary {
    pub record_count: usize,
    pub output_path: PathBuf,
}

/// Scrape both chambers into one flat record list.
///
/// Requests run strictly one at a time in listing order. Any fetch failure
/// aborts the whole run; there is no retry and no partial result. Given
/// identical responses the output is deterministic.
pub async fn assemble_records(
    fetcher: &dyn Fetcher,
    base_url: &str,
) -> Result<Vec<BillRecord>, ScrapeError> {
    let base =
        Url::parse(base_url).map_err(|_| ScrapeError::InvalidBaseUrl(base_url.to_string()))?;

    let mut records = Vec::new();
    for chamber in Chamber::ALL {
        let listing_url = chamber.listing_url(base_url);
        let listing = fetch_page(fetcher, &listing_url).await?;
        let links = discover_meeting_links(&listing.text, &base);
        docket_info!("{}: {} meeting pages discovered", chamber, links.len());

        for link in links {
            let page = fetch_page(fetcher, &link).await?;
            records.extend(extract_meeting_records(&page.text, chamber));
        }
    }

    strip_author_fragments(&mut records);
    Ok(records)
}

async fn fetch_page(fetcher: &dyn Fetcher, url: &str) -> Result<DecodedPage, ScrapeError> {
    let output = fetcher.fetch(url).await.map_err(|err| ScrapeError::Fetch {
        url: url.to_string(),
        kind: err.kind,
        message: err.message,
    })?;
    Ok(decode_page(
        &output.bytes,
        output.metadata.content_type.as_deref(),
    ))
}

/// Blocking entry point: scrape and overwrite the dataset file.
///
/// Owns its tokio runtime so callers stay synchronous.
pub fn run_scrape(settings: &ScrapeSettings) -> Result<ScrapeSummary, ScrapeError> {
    let fetcher = ReqwestFetcher::new(settings.fetch.clone()).map_err(|err| ScrapeError::Fetch {
        url: settings.base_url.clone(),
        kind: err.kind,
        message: err.message,
    })?;

    let runtime = tokio::runtime::Runtime::new()?;
    let records = runtime.block_on(assemble_records(&fetcher, &settings.base_url))?;

    let output_path = write_dataset(&settings.output_dir, &records)?;
    docket_info!("Wrote {} records to {:?}", records.len(), output_path);

    Ok(ScrapeSummary {
        record_count: records.len(),
        output_path,
    })
}
