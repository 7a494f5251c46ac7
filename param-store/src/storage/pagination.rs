use futures::{Stream, TryStreamExt, stream};
use tracing::debug;

use crate::domain::{NextToken, ParameterName};
use crate::storage::repository::{ParameterRepository, RepositoryError};

enum Cursor {
    Start,
    Next(NextToken),
    Done,
}

/// Lazily walks every page of a path listing.
///
/// Each page is requested exactly once, in order, and the stream ends after
/// the first page that carries no continuation token. The stream cannot be
/// restarted; build a new one to list again.
pub fn parameter_pages<'a, R>(
    repository: &'a R,
    path: &'a str,
) -> impl Stream<Item = Result<Vec<ParameterName>, RepositoryError>> + 'a
where
    R: ParameterRepository + ?Sized,
{
    stream::try_unfold(Cursor::Start, move |cursor| next_page(repository, path, cursor))
}

async fn next_page<R>(
    repository: &R,
    path: &str,
    cursor: Cursor,
) -> Result<Option<(Vec<ParameterName>, Cursor)>, RepositoryError>
where
    R: ParameterRepository + ?Sized,
{
    let sent = match cursor {
        Cursor::Done => return Ok(None),
        Cursor::Start => None,
        Cursor::Next(token) => Some(token),
    };

    let page = repository.list_page(path, sent.clone()).await?;
    debug!(path, entries = page.names.len(), last = page.is_last(), "Fetched parameter page");

    let next = match page.next_token {
        Some(token) if sent.as_ref() == Some(&token) => {
            return Err(RepositoryError::QueryFailed(format!(
                "pagination did not advance for path '{path}': token '{}' returned twice",
                token.as_str()
            )));
        }
        Some(token) => Cursor::Next(token),
        None => Cursor::Done,
    };

    Ok(Some((page.names, next)))
}

/// Concatenates every page under `path`, failing on the first page error.
pub async fn collect_names<R>(
    repository: &R,
    path: &str,
) -> Result<Vec<ParameterName>, RepositoryError>
where
    R: ParameterRepository + ?Sized,
{
    parameter_pages(repository, path).try_concat().await
}
