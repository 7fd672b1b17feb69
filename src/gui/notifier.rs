// src/gui/notifier.rs
use crate::controller::Notifier;

/// Queues alerts for the modal "Notice" window.
/// Confirmation is answered up front: the reset dialog only builds a
/// confirmed notifier after the user pressed "Yes".
pub struct GuiNotifier<'a> {
    alerts: &'a mut Vec<String>,
    confirmed: bool,
}

impl<'a> GuiNotifier<'a> {
    pub fn new(alerts: &'a mut Vec<String>) -> Self {
        Self { alerts, confirmed: false }
    }

    pub fn confirmed(alerts: &'a mut Vec<String>) -> Self {
        Self { alerts, confirmed: true }
    }
}

impl Notifier for GuiNotifier<'_> {
    fn notify(&mut self, msg: &str) {
        logf!("UI: alert {:?}", msg);
        self.alerts.push(s!(msg));
    }

    fn confirm(&mut self, _msg: &str) -> bool {
        self.confirmed
    }
}
