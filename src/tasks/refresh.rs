/**
 * Task Refresh Broadcasting
 *
 * Every successful task mutation announces the owning user's ID on a
 * broadcast channel. Anything rendering a task list (a dashboard page,
 * a live view, a cache in front of the store) can subscribe and refetch
 * when an announcement lands for a user it cares about.
 *
 * # Delivery
 *
 * Announcements ride on `tokio::sync::broadcast`, so every subscriber
 * sees every event. Having no subscribers is the normal case, not an
 * error: the mutation has already committed by the time this fires, and
 * nothing here can or should undo it.
 */

use tokio::sync::broadcast;
use uuid::Uuid;

/// Broadcast channel capacity. Laggy subscribers that fall more than
/// this many events behind miss the oldest ones and simply refetch.
const REFRESH_CHANNEL_CAPACITY: usize = 100;

/// Broadcast sender announcing "this user's tasks changed".
pub type TaskRefreshBroadcast = broadcast::Sender<Uuid>;

/// Create the refresh channel, discarding the initial receiver.
///
/// Subscribers come and go via `TaskRefreshBroadcast::subscribe`.
pub fn refresh_channel() -> TaskRefreshBroadcast {
    broadcast::channel(REFRESH_CHANNEL_CAPACITY).0
}

/// Announce that a user's task list changed
///
/// # Arguments
/// * `refresh_tx` - The broadcast sender
/// * `owner_id` - The user whose tasks were mutated
///
/// # Returns
/// Number of active subscribers that received the announcement
pub fn notify_tasks_changed(refresh_tx: &TaskRefreshBroadcast, owner_id: Uuid) -> usize {
    match refresh_tx.send(owner_id) {
        Ok(subscriber_count) => {
            tracing::debug!(
                "[Tasks] Refresh announced for {} to {} subscribers",
                owner_id,
                subscriber_count
            );
            subscriber_count
        }
        Err(_) => {
            // No subscribers, that's okay
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_notify_with_subscriber() {
        let refresh_tx = refresh_channel();
        let mut rx = refresh_tx.subscribe();

        let owner_id = Uuid::new_v4();
        let count = notify_tasks_changed(&refresh_tx, owner_id);

        assert_eq!(count, 1);
        assert_eq!(rx.recv().await.unwrap(), owner_id);
    }

    #[tokio::test]
    async fn test_notify_without_subscribers() {
        let refresh_tx = refresh_channel();
        let count = notify_tasks_changed(&refresh_tx, Uuid::new_v4());
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn test_each_subscriber_sees_each_event() {
        let refresh_tx = refresh_channel();
        let mut rx1 = refresh_tx.subscribe();
        let mut rx2 = refresh_tx.subscribe();

        let first = Uuid::new_v4();
        let second = Uuid::new_v4();
        notify_tasks_changed(&refresh_tx, first);
        notify_tasks_changed(&refresh_tx, second);

        assert_eq!(rx1.recv().await.unwrap(), first);
        assert_eq!(rx1.recv().await.unwrap(), second);
        assert_eq!(rx2.recv().await.unwrap(), first);
        assert_eq!(rx2.recv().await.unwrap(), second);
    }
}
