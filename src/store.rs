use crate::domain::UserStats;
use crate::domain::events::Event;
use tokio::sync::mpsc::Receiver;
use tokio::sync::watch;
use tokio::sync::watch::{Receiver as WatchReceiver, Sender as WatchSender};
use tracing::{debug, info, instrument, warn};

#[derive(Clone, PartialEq, Default, Debug)]
pub struct AppState {
    pub user_stats: Option<UserStats>,
    pub is_loading: bool,
}

/// Owns the user's statistics. Events arrive over a channel and every change is published as a snapshot.
#[derive(Debug)]
pub struct Store {
    state: AppState,
    rx: Receiver<Event>,
    notifier_tx: WatchSender<AppState>,
    notifier_rx: WatchReceiver<AppState>,
}

impl Store {
    pub fn new(rx: Receiver<Event>) -> Self {
        let state = AppState::default();
        let (notifier_tx, notifier_rx) = watch::channel::<AppState>(state.clone());

        Store {
            state,
            rx,
            notifier_tx,
            notifier_rx,
        }
    }

    pub fn notifier(&self) -> WatchReceiver<AppState> {
        self.notifier_rx.clone()
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Applies events until every sender is dropped.
    #[instrument(skip(self))]
    pub async fn listen(&mut self) {
        while let Some(event) = self.rx.recv().await {
            debug!("🔵 Received event: {:?}", event);
            if reduce(&mut self.state, event) {
                self.notifier_tx.send(self.state.clone()).unwrap_or_default();
            }
        }
        debug!("🔵 Event channel closed");
    }
}

/// Applies `event` to `state`, returning whether the state changed.
pub fn reduce(state: &mut AppState, event: Event) -> bool {
    match event {
        Event::UserStatsLoaded(stats) => {
            info!(user_id = stats.user_id, "🟢 Loaded stats, {} points", stats.total_points);
            state.user_stats = Some(stats);
            true
        }
        Event::LoadingChanged(is_loading) => {
            let changed = state.is_loading != is_loading;
            state.is_loading = is_loading;
            changed
        }
        Event::PointsAwarded(points) => {
            let Some(stats) = state.user_stats.as_mut() else {
                warn!("⚠️ Received {} points before any stats were loaded, ignoring", points);
                return false;
            };

            let previous = stats.total_points;
            stats.add_points(points);
            info!(user_id = stats.user_id, "🟢 Awarded {} points, now {}, was {}", points, stats.total_points, previous);
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tokio::sync::mpsc;

    fn stats(total_points: u64) -> UserStats {
        UserStats {
            total_points,
            ..UserStats::empty("default_user")
        }
    }

    #[test]
    fn points_are_ignored_without_stats() {
        let mut state = AppState::default();

        assert!(!reduce(&mut state, Event::PointsAwarded(10)));
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn points_accumulate_on_loaded_stats() {
        let mut state = AppState::default();
        reduce(&mut state, Event::UserStatsLoaded(stats(20)));

        reduce(&mut state, Event::PointsAwarded(10));
        reduce(&mut state, Event::PointsAwarded(5));

        assert_eq!(state.user_stats.map(|s| s.total_points), Some(35));
    }

    #[test]
    fn loading_only_changes_on_a_new_value() {
        let mut state = AppState::default();

        assert!(reduce(&mut state, Event::LoadingChanged(true)));
        assert!(!reduce(&mut state, Event::LoadingChanged(true)));
        assert!(reduce(&mut state, Event::LoadingChanged(false)));
    }

    #[test]
    fn loaded_stats_replace_previous_stats() {
        let mut state = AppState::default();
        reduce(&mut state, Event::UserStatsLoaded(stats(20)));
        reduce(&mut state, Event::UserStatsLoaded(stats(7)));

        assert_eq!(state.user_stats, Some(stats(7)));
    }

    #[tokio::test]
    async fn listen_publishes_snapshots() {
        let (tx, rx) = mpsc::channel(4);
        let mut store = Store::new(rx);
        let notifier = store.notifier();

        tx.send(Event::UserStatsLoaded(stats(20))).await.unwrap();
        tx.send(Event::PointsAwarded(10)).await.unwrap();
        drop(tx);

        store.listen().await;

        assert_eq!(store.state().user_stats, Some(stats(30)));
        assert_eq!(notifier.borrow().user_stats, Some(stats(30)));
    }
}
