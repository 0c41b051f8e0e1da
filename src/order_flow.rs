//! Order Submission Sequencing

use std::future::Future;

use crate::toast::ToastKind;

/// Wait for `delay` to finish, then start the call built by `call`.
///
/// The call is not constructed until the delay has elapsed, so a fast
/// network never shortens the processing step.
pub async fn submit_after_delay<D, F, Fut, T>(delay: D, call: F) -> T
where
    D: Future<Output = ()>,
    F: FnOnce() -> Fut,
    Fut: Future<Output = T>,
{
    delay.await;
    call().await
}

/// How the order dialog settles once a submission finishes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub close_dialog: bool,
    pub reset_form: bool,
    pub submitting: bool,
    pub kind: ToastKind,
    pub title: &'static str,
    pub description: &'static str,
}

/// Success closes the dialog and clears the form. Failure keeps both so the
/// user can retry. The submitting flag is cleared either way.
pub fn submit_outcome<T, E>(result: &Result<T, E>) -> SubmitOutcome {
    match result {
        Ok(_) => SubmitOutcome {
            close_dialog: true,
            reset_form: true,
            submitting: false,
            kind: ToastKind::Success,
            title: "Заявка отправлена!",
            description: "Ожидайте, скоро с вами свяжутся",
        },
        Err(_) => SubmitOutcome {
            close_dialog: false,
            reset_form: false,
            submitting: false,
            kind: ToastKind::Error,
            title: "Ошибка",
            description: "Не удалось отправить заявку",
        },
    }
}
