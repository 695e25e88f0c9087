//! Ordered fan-out with a concurrency ceiling.

use std::future::Future;

use futures::FutureExt;
use futures::stream::{self, StreamExt};

/// Run `work` over `items` with at most `limit` invocations in flight.
///
/// A slot is freed as soon as its invocation finishes, so a slow item does
/// not hold back the ones after it. Results come back in input order
/// regardless of completion order. Every started invocation runs to
/// completion; if any failed, the first failure in input order is returned
/// and the successful results are discarded.
///
/// A `limit` of zero is treated as one.
pub async fn run_bounded<I, F, Fut, T, E>(items: I, limit: usize, mut work: F) -> Result<Vec<T>, E>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let mut results: Vec<(usize, Result<T, E>)> = stream::iter(items.into_iter().enumerate())
        .map(|(index, item)| work(item).map(move |result| (index, result)))
        .buffer_unordered(limit.max(1))
        .collect()
        .await;

    results.sort_by_key(|(index, _)| *index);
    results.into_iter().map(|(_, result)| result).collect()
}
