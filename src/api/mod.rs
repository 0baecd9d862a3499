pub mod parsers;
pub mod ranked_client;
pub mod source;

pub use ranked_client::RankedClient;
pub use source::SeasonSource;
