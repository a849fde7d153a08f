//! Toast stack rendering the notification channel.

use leptos::prelude::*;

use crate::state::notifications::{use_notifications, NoticeLevel};

#[component]
pub fn ToastStack() -> impl IntoView {
    let notifications = use_notifications();

    view! {
        <div class="toast-stack">
            {move || {
                notifications
                    .notices
                    .get()
                    .into_iter()
                    .map(|notice| {
                        let class = match notice.level {
                            NoticeLevel::Info => "toast toast-info",
                            NoticeLevel::Success => "toast toast-success",
                            NoticeLevel::Error => "toast toast-error",
                        };
                        let id = notice.id;
                        view! {
                            <div class=class on:click=move |_| notifications.dismiss(id)>
                                <p>{notice.message}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
