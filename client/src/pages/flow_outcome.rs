//! Carry out a resolved form flow: raise its toast, then navigate once the
//! redirect delay has passed and the page is still mounted.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::components::toaster::show_toast;
use crate::state::flow::FlowOutcome;
use crate::state::toast::ToastState;
use crate::util::cancel::CancelToken;

pub(crate) async fn follow<N>(outcome: FlowOutcome, token: CancelToken, toasts: RwSignal<ToastState>, navigate: N)
where
    N: Fn(&str, NavigateOptions),
{
    if let Some(notice) = outcome.notice() {
        show_toast(toasts, notice.clone());
    }
    let Some(redirect) = outcome.redirect() else {
        return;
    };
    if !redirect.delay.is_zero() {
        gloo_timers::future::sleep(redirect.delay).await;
    }
    if token.is_cancelled() {
        log::debug!("redirect to {} abandoned", redirect.path);
        return;
    }
    navigate(redirect.path, NavigateOptions::default());
}
