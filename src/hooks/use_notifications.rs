// ============================================================================
// USE NOTIFICATIONS HOOK - The shared notifier every sync engine feeds
// ============================================================================

use yew::prelude::*;
use gloo_timers::callback::Timeout;

use crate::config::NotificationConfig;
use crate::models::Notification;
use crate::stores::NotificationQueue;
use crate::sync::NotificationIntent;

#[derive(Clone, PartialEq)]
pub struct UseNotificationsHandle {
    pub notifications: UseStateHandle<Vec<Notification>>,
    pub notify: Callback<NotificationIntent>,
    pub dismiss: Callback<u64>,
}

#[hook]
pub fn use_notifications() -> UseNotificationsHandle {
    let notifications = use_state(Vec::<Notification>::new);
    let queue = use_mut_ref(NotificationQueue::new);

    let dismiss = {
        let queue = queue.clone();
        let notifications = notifications.clone();
        Callback::from(move |id: u64| {
            queue.borrow_mut().dismiss(id);
            notifications.set(queue.borrow().items().to_vec());
        })
    };

    let notify = {
        let queue = queue.clone();
        let notifications = notifications.clone();
        let dismiss = dismiss.clone();
        Callback::from(move |intent: NotificationIntent| {
            let id = queue.borrow_mut().notify(intent.message, intent.severity);
            notifications.set(queue.borrow().items().to_vec());

            // Self-removal after the fixed TTL. If the user dismissed it
            // first, the late timeout is a no-op.
            let dismiss = dismiss.clone();
            Timeout::new(NotificationConfig::default().ttl_ms, move || {
                dismiss.emit(id);
            })
            .forget();
        })
    };

    UseNotificationsHandle {
        notifications,
        notify,
        dismiss,
    }
}
