// Job postings: scraping plus platform/company/position extraction.
// Extraction is pure and synchronous; only the scraper performs I/O.

pub mod handlers;
pub mod metadata;
pub mod platforms;
pub mod scraper;
pub mod title;

pub use metadata::ExtractedMetadata;
pub use scraper::{ApifyScraper, JobScraper};
