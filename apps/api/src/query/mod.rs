// Query Engine — shape-agnostic filtering, sorting, facets, and pagination
// over the canonical roster. Every function here is a pure, synchronous
// total function of (records, criteria); there is no I/O during evaluation.

pub mod criteria;
pub mod facets;
pub mod filter;
pub mod paging;
pub mod sort;

pub use criteria::Criteria;
pub use filter::filter;
pub use sort::SortKey;
