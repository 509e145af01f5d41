mod admin_mutations;
mod admin_queries;
mod portfolio_queries;
mod query_cache;
mod query_key;
mod view_scope;

pub use admin_mutations::{AdminMutations, MutationError};
pub use admin_queries::AdminQueries;
pub use portfolio_queries::PortfolioQueries;
pub use query_cache::{FetchTicket, QueryCache, DEFAULT_STALE_TIME};
pub use query_key::{QueryKey, RecordKey};
pub use view_scope::ViewScope;

pub(crate) use query_cache::run_query;
