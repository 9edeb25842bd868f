//! Notifier implementations.

use std::sync::Mutex;

use chrono::NaiveDate;
use serde::Serialize;

use orderflow_fulfillment::{CollaboratorError, Notifier};

/// A notification as it would be delivered to the customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notification {
    Delay {
        lead_time_days: u32,
        product_name: String,
    },
    Expiration {
        product_name: String,
        expiry_date: NaiveDate,
    },
    OutOfStock {
        product_name: String,
    },
}

/// Emits every notification as a structured `tracing` event.
///
/// Stands in for a mail/SMS gateway; it never fails.
#[derive(Debug, Default, Copy, Clone)]
pub struct LoggingNotifier;

impl Notifier for LoggingNotifier {
    fn send_delay(&self, lead_time_days: u32, product_name: &str) -> Result<(), CollaboratorError> {
        tracing::info!(
            target: "orderflow::notifications",
            kind = "delay",
            product_name,
            lead_time_days,
            "delay notification"
        );
        Ok(())
    }

    fn send_expiration(
        &self,
        product_name: &str,
        expiry_date: NaiveDate,
    ) -> Result<(), CollaboratorError> {
        tracing::info!(
            target: "orderflow::notifications",
            kind = "expiration",
            product_name,
            %expiry_date,
            "expiration notification"
        );
        Ok(())
    }

    fn send_out_of_stock(&self, product_name: &str) -> Result<(), CollaboratorError> {
        tracing::info!(
            target: "orderflow::notifications",
            kind = "out_of_stock",
            product_name,
            "out of stock notification"
        );
        Ok(())
    }
}

/// Keeps every notification in memory, in send order.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    inner: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all(&self) -> Vec<Notification> {
        self.inner.lock().map(|v| v.clone()).unwrap_or_default()
    }

    pub fn clear(&self) {
        if let Ok(mut v) = self.inner.lock() {
            v.clear();
        }
    }

    fn push(&self, notification: Notification) -> Result<(), CollaboratorError> {
        self.inner
            .lock()
            .map_err(|_| CollaboratorError::Notifier("recorder lock poisoned".to_string()))?
            .push(notification);
        Ok(())
    }
}

impl Notifier for RecordingNotifier {
    fn send_delay(&self, lead_time_days: u32, product_name: &str) -> Result<(), CollaboratorError> {
        self.push(Notification::Delay {
            lead_time_days,
            product_name: product_name.to_string(),
        })
    }

    fn send_expiration(
        &self,
        product_name: &str,
        expiry_date: NaiveDate,
    ) -> Result<(), CollaboratorError> {
        self.push(Notification::Expiration {
            product_name: product_name.to_string(),
            expiry_date,
        })
    }

    fn send_out_of_stock(&self, product_name: &str) -> Result<(), CollaboratorError> {
        self.push(Notification::OutOfStock {
            product_name: product_name.to_string(),
        })
    }
}
