// Representative lookup: postal normalization, the civic-data client and the
// resolver that turns its candidates into one representative.

pub mod civic_client;
pub mod handlers;
pub mod postal;
pub mod resolver;
