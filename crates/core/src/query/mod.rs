mod engine;
mod filters;
mod params;

pub use engine::{query, QueryResult};
pub use filters::{next_sort, Filters, Page, SortDir, SortKey, SortSpec};
pub use params::{deserialize_query_state, serialize_query_state, QueryState};
