use dioxus::prelude::*;
use std::time::Duration;
use uuid::Uuid;

pub mod actions;

use super::api;
use crate::convert::form::{FormState, Toast};

const TOAST_LIFETIME: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, PartialEq)]
pub struct ToastEntry {
    pub id: Uuid,
    pub toast: Toast,
}

#[derive(Debug, Clone, Copy)]
pub struct State {
    pub form: Signal<FormState>,
    pub toasts: Signal<Vec<ToastEntry>>,
}

pub fn use_app_state() -> State {
    use_context_provider::<State>(|| State {
        form: Signal::new(FormState::new()),
        toasts: Signal::new(Vec::new()),
    })
}

impl State {
    /// Shows a toast that dismisses itself after a few seconds.
    pub fn push_toast(mut self, toast: Toast) {
        let id = Uuid::new_v4();
        self.toasts.with_mut(|toasts| toasts.push(ToastEntry { id, toast }));
        spawn(async move {
            api::sleep(TOAST_LIFETIME).await;
            self.dismiss_toast(id);
        });
    }

    pub fn dismiss_toast(mut self, id: Uuid) {
        self.toasts.with_mut(|toasts| toasts.retain(|entry| entry.id != id));
    }
}
