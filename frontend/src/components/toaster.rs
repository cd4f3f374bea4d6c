use crate::web::Timeout;
use growmate::Notification;
use leptos::prelude::*;

/// 通知自动消失的时间（毫秒）
const TOAST_DURATION_MS: u32 = 4000;

#[derive(Debug, Clone, PartialEq)]
struct Toast {
    id: u64,
    notification: Notification,
}

/// 当前显示的通知
///
/// 定时器和手动关闭可能先后移除同一条通知，`dismiss` 对不存在的 id 无副作用。
#[derive(Debug, Clone, Default, PartialEq)]
struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    fn push(&mut self, notification: Notification) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, notification });
        id
    }

    fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}

/// 通知队列，通过 Context 共享
#[derive(Clone, Copy)]
pub struct ToasterContext {
    queue: RwSignal<ToastQueue>,
}

impl ToasterContext {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
        }
    }

    pub fn push(&self, notification: Notification) {
        let mut id = 0;
        self.queue.update(|queue| id = queue.push(notification));

        let queue = self.queue;
        Timeout::schedule(TOAST_DURATION_MS, move || {
            queue.update(|q| q.dismiss(id));
        });
    }

    fn dismiss(&self, id: u64) {
        self.queue.update(|q| q.dismiss(id));
    }
}

pub fn use_toaster() -> ToasterContext {
    expect_context::<ToasterContext>()
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toaster = use_toaster();

    view! {
        <div class="toast toast-top toast-end z-50">
            <For
                each=move || toaster.queue.with(|q| q.toasts.clone())
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = if toast.notification.is_destructive() {
                        "alert alert-error shadow-lg"
                    } else {
                        "alert alert-success shadow-lg"
                    };
                    view! {
                        <div class=class on:click=move |_| toaster.dismiss(id)>
                            <div class="flex flex-col">
                                <span class="font-semibold">{toast.notification.title}</span>
                                <span class="text-sm">{toast.notification.description}</span>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_increasing() {
        let mut queue = ToastQueue::default();
        let a = queue.push(Notification::success("a", ""));
        let b = queue.push(Notification::failure("b", ""));
        assert!(b > a);
        assert_eq!(queue.toasts.len(), 2);
    }

    #[test]
    fn timer_after_manual_dismiss_is_harmless() {
        let mut queue = ToastQueue::default();
        let first = queue.push(Notification::success("Logged out", ""));
        let second = queue.push(Notification::success("Welcome", ""));

        // user closes the toast, then its timer fires
        queue.dismiss(first);
        queue.dismiss(first);

        assert_eq!(queue.toasts.len(), 1);
        assert_eq!(queue.toasts[0].id, second);
    }
}
