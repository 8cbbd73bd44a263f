pub mod store_client;

pub use store_client::{get_store_client, StoreClient};
