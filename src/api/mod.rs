pub mod games_client;

pub use games_client::GamesClient;
