pub mod settings;

pub use settings::{AppConfig, EndpointConfig, TransportSettings};
