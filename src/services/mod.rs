pub mod listing;

pub use listing::{ListingService, OutputFormat};
