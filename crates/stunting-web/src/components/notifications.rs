/// Notification system for user feedback
///
/// Toasts for success, error, warning and info messages.

use leptos::*;
use uuid::Uuid;

use crate::types::{Notification, NotificationType};

/// Notification context for managing toast notifications
#[derive(Debug, Clone, Copy)]
pub struct NotificationContext {
    pub notifications: ReadSignal<Vec<Notification>>,
    pub show_success: Callback<(String, Option<String>)>,
    pub show_error: Callback<(String, Option<String>)>,
    pub show_warning: Callback<(String, Option<String>)>,
    pub show_info: Callback<(String, Option<String>)>,
    pub remove_notification: Callback<Uuid>,
}

/// Notification provider component
#[component]
pub fn NotificationProvider(children: Children) -> impl IntoView {
    let (notifications, set_notifications) = create_signal::<Vec<Notification>>(Vec::new());

    let remove_notification = move |id: Uuid| {
        set_notifications.update(|notifications| notifications.retain(|n| n.id != id));
    };

    let add_notification = move |kind: NotificationType, (title, message): (String, Option<String>)| {
        let notification = Notification::new(kind, title, message);
        if let Some(delay) = notification.dismiss_after {
            let id = notification.id;
            set_timeout(move || remove_notification(id), delay);
        }
        set_notifications.update(|notifications| notifications.push(notification));
    };

    let context = NotificationContext {
        notifications,
        show_success: Callback::new(move |args| add_notification(NotificationType::Success, args)),
        show_error: Callback::new(move |args| add_notification(NotificationType::Error, args)),
        show_warning: Callback::new(move |args| add_notification(NotificationType::Warning, args)),
        show_info: Callback::new(move |args| add_notification(NotificationType::Info, args)),
        remove_notification: Callback::new(remove_notification),
    };

    provide_context(context);

    view! {
        {children()}
        <NotificationContainer/>
    }
}

/// Hook to access notification context
pub fn use_notifications() -> NotificationContext {
    use_context::<NotificationContext>()
        .expect("NotificationContext must be provided by NotificationProvider")
}

#[component]
fn NotificationContainer() -> impl IntoView {
    let notifications = use_notifications();

    view! {
        <div class="fixed top-4 right-4 z-[1100] space-y-2 max-w-sm">
            <For
                each=move || notifications.notifications.get()
                key=|notification| notification.id
                children=move |notification| {
                    view! { <NotificationToast notification=notification/> }
                }
            />
        </div>
    }
}

#[component]
fn NotificationToast(notification: Notification) -> impl IntoView {
    let notifications = use_notifications();

    let (bg_class, border_class, text_class, mark) = match notification.notification_type {
        NotificationType::Success => ("bg-green-50", "border-green-200", "text-green-800", "✓"),
        NotificationType::Error => ("bg-red-50", "border-red-200", "text-red-800", "!"),
        NotificationType::Warning => ("bg-yellow-50", "border-yellow-200", "text-yellow-800", "⚠"),
        NotificationType::Info => ("bg-blue-50", "border-blue-200", "text-blue-800", "i"),
    };

    let notification_id = notification.id;

    view! {
        <div class=format!(
            "rounded-lg border p-4 shadow-lg transition-all duration-300 {} {}",
            bg_class, border_class
        )>
            <div class="flex">
                <div class=format!("flex-shrink-0 w-5 text-center font-bold {}", text_class)>
                    {mark}
                </div>
                <div class="ml-3 flex-1">
                    <h3 class=format!("text-sm font-medium {}", text_class)>
                        {notification.title.clone()}
                    </h3>
                    {notification.message.clone().map(|message| view! {
                        <div class=format!("mt-1 text-sm {}", text_class)>{message}</div>
                    })}
                </div>
                <div class="ml-4 flex-shrink-0">
                    <button
                        class=format!("inline-flex rounded-md p-1.5 focus:outline-none {}", text_class)
                        on:click=move |_| notifications.remove_notification.call(notification_id)
                    >
                        <span class="sr-only">"Tutup"</span>
                        "×"
                    </button>
                </div>
            </div>
        </div>
    }
}
