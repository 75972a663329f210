pub mod error;
pub mod loader;

pub use error::{IngestError, Result};
pub use loader::{Dataset, load_csv, parse_csv_str};
