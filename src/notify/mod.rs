/**
 * Owner Notification Channel
 *
 * The machine reports every state entry and every status query to exactly
 * one owner through a [`Notifier`]. Delivery is fire-and-forget: a notifier
 * must never block, and a gone owner is logged, not treated as an error.
 *
 * # Channels
 *
 * - `mpsc::UnboundedSender<Notification>`: a single owner task
 * - `broadcast::Sender<Notification>`: several observers share the feed
 * - [`FnNotifier`]: a plain callback
 */

use crate::shared::Notification;
use tokio::sync::{broadcast, mpsc};

/// Broadcast channel carrying owner notifications
pub type NotificationBroadcast = broadcast::Sender<Notification>;

/// Upward notification sink held by a machine instance
pub trait Notifier: Send + 'static {
    /// Deliver a notification without blocking
    fn notify(&self, notification: Notification);
}

impl Notifier for mpsc::UnboundedSender<Notification> {
    fn notify(&self, notification: Notification) {
        if let Err(e) = self.send(notification) {
            tracing::debug!(
                "[CONNECTIVITY] Owner dropped its receiver, {} notification lost",
                e.0.kind
            );
        }
    }
}

impl Notifier for broadcast::Sender<Notification> {
    fn notify(&self, notification: Notification) {
        match self.send(notification) {
            Ok(subscriber_count) => {
                tracing::trace!(
                    "[CONNECTIVITY] Notification broadcast to {} subscribers",
                    subscriber_count
                );
            }
            Err(e) => {
                // No subscribers, that's okay
                tracing::debug!("[CONNECTIVITY] No subscribers to receive {:?}", e.0.event);
            }
        }
    }
}

/// Callback notifier
pub struct FnNotifier<F>(pub F);

impl<F> Notifier for FnNotifier<F>
where
    F: Fn(Notification) + Send + 'static,
{
    fn notify(&self, notification: Notification) {
        (self.0)(notification)
    }
}

impl<F> std::fmt::Debug for FnNotifier<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FnNotifier")
    }
}

/// Unbounded single-owner notification channel
pub fn notification_channel() -> (
    mpsc::UnboundedSender<Notification>,
    mpsc::UnboundedReceiver<Notification>,
) {
    mpsc::unbounded_channel()
}
