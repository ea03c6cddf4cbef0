//! Faceted search shared by every listing page.
//!
//! A query runs three pure stages in order: [`filter`] keeps matching
//! records, [`sort`] orders them stably, [`paginate`] cuts out one window.
//! Nothing is cached between calls; the same inputs always give the same page.

pub mod error;
pub mod filter;
pub mod page;
pub mod query;
pub mod sort;

pub use error::QueryError;
pub use filter::{filter, Choice, Criteria, Flag, Range, TextQuery};
pub use page::{paginate, Page, PageIndex, PageSize};
pub use query::{Encoder, ParamValue, Params, QueryParams, QueryState};
pub use sort::{collate, sort, SortKey};

/// Filter, sort, then paginate `records` according to `state`.
pub fn run<'a, R, C, K>(records: &'a [R], state: &QueryState<C, K>, size: PageSize) -> Page<&'a R>
where
    C: Criteria<R> + QueryParams + Default + PartialEq,
    K: SortKey<R> + ParamValue + Default,
{
    let matched = filter(records, state.criteria());
    let ordered = sort(matched, state.sort());
    paginate(&ordered, size, state.page())
}
