use crate::{Game, GameView};
use async_trait::async_trait;
use futures::future;
use itertools::Itertools;
use tracing::warn;

/// Receives what one seat may see of a [game](Game) after it changes.
///
/// # Errors
///
/// The implementor decides what a failed update means. Errors are collected by
/// [`send_updates`] and returned to the calling client code.
#[async_trait]
pub trait Observer<E> {
    /// # Returns
    ///
    /// The seat whose [view](GameView) this observer receives.
    fn position(&self) -> usize;

    /// Updates the observer with the [view](GameView) of its seat. May execute in parallel
    /// with the updates of other observers.
    async fn update_view<'a>(&self, view: &'a GameView<'a>) -> Result<(), E>;
}

/// Asynchronously sends the [view](GameView) of each observer's seat to every observer.
/// Observers of a seat which does not exist are skipped.
///
/// # Errors
///
/// Accumulates all errors from [`Observer::update_view`] into a vector.
pub async fn send_updates<O, E>(observers: &[O], game: &Game) -> Result<(), Vec<E>>
where
    O: Observer<E>,
{
    let views = observers
        .iter()
        .filter_map(|observer| {
            let position = observer.position();
            let view = game.view(position);
            if view.is_none() {
                warn!(position, "Skipped observer without a seat");
            }
            view.map(|view| (observer, view))
        })
        .collect_vec();
    let update_tasks = views
        .iter()
        .map(|(observer, view)| observer.update_view(view));

    let errors = future::join_all(update_tasks)
        .await
        .into_iter()
        .filter_map(Result::err)
        .collect_vec();
    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(())
}
