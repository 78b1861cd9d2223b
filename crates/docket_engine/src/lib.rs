//! Docket engine: scrape pipeline and dataset persistence.
mod assemble;
mod decode;
mod extract;
mod fetch;
mod heuristic;
mod listing;
mod persist;
mod record;
mod store;
mod types;

pub use assemble::{assemble_records, run_scrape, ScrapeError, ScrapeSettings, ScrapeSummary, BASE_URL};
pub use decode::{decode_page, DecodedPage};
pub use extract::extract_meeting_records;
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use heuristic::{extract_weekday, split_author_caption, strip_author_fragments};
pub use listing::discover_meeting_links;
pub use persist::{ensure_output_dir, write_atomic, PersistError};
pub use record::{BillRecord, Chamber, ALL_COLUMNS, REQUIRED_COLUMNS};
pub use store::{load_dataset, write_dataset, write_grid, LoadedTable, StoreError, DATASET_FILENAME};
pub use types::{FailureKind, FetchError, FetchMetadata, FetchOutput};
