//! Simulated payment step.

use crate::checkout::PaymentMethod;
use crate::money::Money;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How long the simulated payment takes.
pub const DEFAULT_PAYMENT_DELAY: Duration = Duration::from_secs(2);

/// Record of a processed payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub amount: Money,
    pub method: PaymentMethod,
    pub processed_at: DateTime<Utc>,
}

/// Takes payment for a checkout.
///
/// Processing cannot fail; a processor that needs to report declines would
/// add a failed checkout state first.
#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    async fn process(&self, amount: Money, method: PaymentMethod) -> PaymentReceipt;
}

/// Processor that always succeeds after a fixed delay on the tokio timer.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedPayment {
    delay: Duration,
}

impl SimulatedPayment {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Succeed without waiting.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedPayment {
    fn default() -> Self {
        Self::new(DEFAULT_PAYMENT_DELAY)
    }
}

#[async_trait]
impl PaymentProcessor for SimulatedPayment {
    async fn process(&self, amount: Money, method: PaymentMethod) -> PaymentReceipt {
        tracing::debug!(
            amount = %amount,
            method = %method,
            delay_ms = self.delay.as_millis() as u64,
            "processing simulated payment"
        );
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        PaymentReceipt {
            amount,
            method,
            processed_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_simulated_payment_waits_for_delay() {
        let processor = SimulatedPayment::default();
        let started = tokio::time::Instant::now();

        let receipt = processor
            .process(Money::from_dollars(295), PaymentMethod::PayPal)
            .await;

        assert!(started.elapsed() >= DEFAULT_PAYMENT_DELAY);
        assert_eq!(receipt.amount, Money::from_dollars(295));
        assert_eq!(receipt.method, PaymentMethod::PayPal);
    }

    #[tokio::test(start_paused = true)]
    async fn test_instant_payment_does_not_sleep() {
        let started = tokio::time::Instant::now();
        SimulatedPayment::instant()
            .process(Money::zero(), PaymentMethod::CreditCard)
            .await;
        assert_eq!(started.elapsed(), Duration::ZERO);
    }
}
