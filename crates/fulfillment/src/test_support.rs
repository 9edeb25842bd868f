//! Recording collaborators for unit tests.

use std::sync::Mutex;

use chrono::NaiveDate;

use orderflow_core::{Entity, ProductId};
use orderflow_products::Product;

use crate::collaborator::{CollaboratorError, Notifier, ProductWriter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Delay(u32, String),
    Expiration(String, NaiveDate),
    OutOfStock(String),
}

#[derive(Debug, Default)]
pub struct RecordingWriter {
    saved: Mutex<Vec<Product>>,
    fail_on: Option<ProductId>,
}

impl RecordingWriter {
    pub fn failing_on(product_id: ProductId) -> Self {
        Self {
            saved: Mutex::new(Vec::new()),
            fail_on: Some(product_id),
        }
    }

    pub fn saved(&self) -> Vec<Product> {
        self.saved.lock().unwrap().clone()
    }
}

impl ProductWriter for RecordingWriter {
    fn save(&self, product: &Product) -> Result<(), CollaboratorError> {
        if self.fail_on == Some(product.id()) {
            return Err(CollaboratorError::Writer(format!(
                "cannot save product {}",
                product.id()
            )));
        }
        self.saved.lock().unwrap().push(product.clone());
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<Sent>>,
    fail: bool,
}

impl RecordingNotifier {
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    fn record(&self, sent: Sent) -> Result<(), CollaboratorError> {
        if self.fail {
            return Err(CollaboratorError::Notifier("gateway unavailable".to_string()));
        }
        self.sent.lock().unwrap().push(sent);
        Ok(())
    }
}

impl Notifier for RecordingNotifier {
    fn send_delay(&self, lead_time_days: u32, product_name: &str) -> Result<(), CollaboratorError> {
        self.record(Sent::Delay(lead_time_days, product_name.to_string()))
    }

    fn send_expiration(
        &self,
        product_name: &str,
        expiry_date: NaiveDate,
    ) -> Result<(), CollaboratorError> {
        self.record(Sent::Expiration(product_name.to_string(), expiry_date))
    }

    fn send_out_of_stock(&self, product_name: &str) -> Result<(), CollaboratorError> {
        self.record(Sent::OutOfStock(product_name.to_string()))
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn days_from(today: NaiveDate, offset: i64) -> NaiveDate {
    today + chrono::Duration::days(offset)
}
