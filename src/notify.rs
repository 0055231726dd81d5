//! Notifications
//!
//! Transient popups for success and failure, plus the delete confirmation.

use futures_util::future::{self, LocalBoxFuture};
use futures_util::FutureExt;
use sweetalert_bindings::{fire, Icon, SwalOptions};

/// Resolves when the popup is closed
pub type Dismissal = LocalBoxFuture<'static, ()>;

/// Success popups close themselves after this many milliseconds
pub const SUCCESS_TIMER_MS: u32 = 1500;

/// Popup surface used by the client and the views.
///
/// The popup is shown when the method is called; awaiting the returned
/// future is optional.
pub trait Notifier: Send + Sync {
    fn error(&self, message: &str) -> Dismissal;

    fn success(&self, message: &str) -> Dismissal;

    /// Ask before deleting a note; `true` only on explicit confirmation
    fn confirm_delete(&self) -> LocalBoxFuture<'static, bool>;
}

/// `Notifier` backed by SweetAlert2
#[derive(Debug, Clone, Copy, Default)]
pub struct SweetAlertNotifier;

impl SweetAlertNotifier {
    fn show(options: SwalOptions) -> Dismissal {
        match fire(&options) {
            Ok(pending) => pending.map(|_| ()).boxed_local(),
            Err(err) => {
                log::error!("Failed to show popup {:?}: {:?}", options.title, err);
                future::ready(()).boxed_local()
            }
        }
    }
}

impl Notifier for SweetAlertNotifier {
    fn error(&self, message: &str) -> Dismissal {
        Self::show(SwalOptions::new(Icon::Error, "Oops...", message))
    }

    fn success(&self, message: &str) -> Dismissal {
        Self::show(SwalOptions::new(Icon::Success, "Success!", message).timer(SUCCESS_TIMER_MS))
    }

    fn confirm_delete(&self) -> LocalBoxFuture<'static, bool> {
        let options = SwalOptions::new(Icon::Warning, "Are you sure?", "You won't be able to revert this!")
            .with_cancel("#d33")
            .confirm_button("Yes, delete it!", "#3c2e2e");
        match fire(&options) {
            Ok(pending) => pending
                .map(|result| match result {
                    Ok(result) => result.is_confirmed,
                    Err(err) => {
                        log::error!("Delete confirmation failed: {:?}", err);
                        false
                    }
                })
                .boxed_local(),
            Err(err) => {
                log::error!("Failed to show delete confirmation: {:?}", err);
                future::ready(false).boxed_local()
            }
        }
    }
}
