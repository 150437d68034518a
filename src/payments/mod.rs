use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::PaymentError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentMethod {
    Card,
    Wallet,
}

/// Payment method picker shown before monthly rent starts. Nothing is charged.
#[derive(Debug, Clone, Default)]
pub struct PaymentSetup {
    method: Option<PaymentMethod>,
}

impl PaymentSetup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, method: PaymentMethod) {
        self.method = Some(method);
    }

    pub fn method(&self) -> Option<PaymentMethod> {
        self.method
    }

    pub fn can_continue(&self) -> bool {
        self.method.is_some()
    }

    pub fn confirm(&self) -> Result<PaymentMethod, PaymentError> {
        let method = self.method.ok_or(PaymentError::NoMethodSelected)?;
        info!(?method, "payment method recorded");
        Ok(method)
    }
}
