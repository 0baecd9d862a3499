pub mod client;

pub use client::ApiHttpClient;
