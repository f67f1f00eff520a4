use std::collections::HashMap;
use std::future::Future;

use thiserror::Error;
use tokio::task::{JoinError, JoinSet};

#[derive(Debug, Error)]
pub enum ParallelError<E> {
    #[error("transform failed: {0}")]
    Transform(E),
    #[error("worker task failed: {0}")]
    Join(#[from] JoinError),
}

/// Applies an async fallible transform to every element concurrently and
/// returns the results in the original input order, regardless of the order
/// in which the transforms complete.
///
/// One task is spawned per element, tagged with its index; completions land
/// in an index-keyed map and the output is read back at `0..len`. Each index
/// is written at most once, and the map is only read after every task has
/// joined.
///
/// Fail-fast: the first transform error (or join failure) fails the whole
/// mapping with no partial results. Returning early drops the `JoinSet`,
/// which aborts any tasks still in flight.
pub async fn try_parallel_map<T, U, E, F, Fut>(
    items: impl IntoIterator<Item = T>,
    transform: F,
) -> Result<Vec<U>, ParallelError<E>>
where
    F: Fn(T) -> Fut,
    Fut: Future<Output = Result<U, E>> + Send + 'static,
    U: Send + 'static,
    E: Send + 'static,
{
    let mut tasks = JoinSet::new();
    for (index, item) in items.into_iter().enumerate() {
        let fut = transform(item);
        tasks.spawn(async move { (index, fut.await) });
    }

    let mut by_index = HashMap::with_capacity(tasks.len());
    while let Some(joined) = tasks.join_next().await {
        let (index, result) = joined?;
        match result {
            Ok(value) => {
                by_index.insert(index, value);
            }
            Err(e) => return Err(ParallelError::Transform(e)),
        }
    }

    let len = by_index.len();
    let mut ordered = Vec::with_capacity(len);
    for index in 0..len {
        let value = by_index
            .remove(&index)
            .expect("every index recorded exactly once");
        ordered.push(value);
    }
    Ok(ordered)
}
