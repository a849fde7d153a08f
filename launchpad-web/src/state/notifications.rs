//! Structured notification channel.
//!
//! Call sites push levelled notices; the toast stack owns presentation.
//! Notices dismiss themselves after a fixed delay or on click.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use crate::utils::constants::TOAST_DISMISS_MS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub level: NoticeLevel,
    pub message: String,
}

/// Global notification context
#[derive(Clone, Copy)]
pub struct NotificationContext {
    pub notices: RwSignal<Vec<Notice>>,
    next_id: StoredValue<u32>,
}

impl NotificationContext {
    pub fn new() -> Self {
        Self {
            notices: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(NoticeLevel::Info, message.into());
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(NoticeLevel::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(NoticeLevel::Error, message.into());
    }

    pub fn dismiss(&self, id: u32) {
        self.notices.update(|notices| notices.retain(|n| n.id != id));
    }

    fn push(&self, level: NoticeLevel, message: String) {
        let id = self.next_id.with_value(|id| *id);
        self.next_id.update_value(|next| *next += 1);

        self.notices.update(|notices| {
            notices.push(Notice { id, level, message });
        });

        let ctx = *self;
        leptos::task::spawn_local(async move {
            TimeoutFuture::new(TOAST_DISMISS_MS).await;
            ctx.dismiss(id);
        });
    }
}

pub fn provide_notification_context() -> NotificationContext {
    let context = NotificationContext::new();
    provide_context(context);
    context
}

pub fn use_notifications() -> NotificationContext {
    expect_context::<NotificationContext>()
}
