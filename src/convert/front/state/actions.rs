use dioxus::logger::tracing::error;
use dioxus::prelude::*;
use futures_util::{Future, StreamExt};

use super::State;
use crate::convert::client::ConvertClientTrait;
use crate::convert::form::{Clipboard, Toast, COPIED_INDICATOR_DURATION, COPY_FAILED};
use crate::convert::front::api;

fn use_action<T, F>(handler: &'static impl Fn(State, T) -> F) -> Coroutine<T>
where
    T: 'static,
    F: Future<Output = ()> + 'static,
{
    let state = use_context::<State>();
    use_coroutine(move |mut rx: UnboundedReceiver<T>| async move {
        while let Some(arg) = rx.next().await {
            handler(state, arg).await;
        }
    })
}

pub fn use_app_actions() {
    use_action::<ConvertAction, _>(&handle_convert);
    use_action::<CopyAction, _>(&handle_copy);
}

pub struct ConvertAction;
async fn handle_convert(mut state: State, _: ConvertAction) {
    let request = match state.form.with_mut(|form| form.begin_submit()) {
        Ok(request) => request,
        Err(toast) => {
            state.push_toast(toast);
            return;
        }
    };

    let result = api::client().convert(&request).await;
    let toast = state.form.with_mut(|form| form.finish_submit(result));
    state.push_toast(toast);
}

pub struct CopyAction;
async fn handle_copy(mut state: State, _: CopyAction) {
    let Some(text) = state.form.read().copy_text().map(str::to_owned) else {
        return;
    };

    if let Err(e) = api::WebClipboard.write_text(&text).await {
        error!("{}", e);
        state.push_toast(Toast::Error(COPY_FAILED));
        return;
    }

    let (ticket, toast) = state.form.with_mut(|form| form.mark_copied());
    state.push_toast(toast);
    spawn(async move {
        api::sleep(COPIED_INDICATOR_DURATION).await;
        state.form.with_mut(|form| form.clear_copied(ticket));
    });
}
