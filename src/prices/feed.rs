/// Price source capability and fallback composition
use crate::errors::TreasuryError;
use crate::logger::{self, LogTag};
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait PriceFeed: Send + Sync {
    /// Short name used in logs and errors
    fn name(&self) -> &str;

    /// Current USD price
    async fn fetch_price(&self) -> Result<f64, TreasuryError>;
}

/// Try `primary`, fall back to `fallback` on any primary failure
pub struct FallbackFeed {
    primary: Arc<dyn PriceFeed>,
    fallback: Arc<dyn PriceFeed>,
    name: String,
}

impl FallbackFeed {
    pub fn new(primary: Arc<dyn PriceFeed>, fallback: Arc<dyn PriceFeed>) -> Self {
        let name = format!("{}+{}", primary.name(), fallback.name());
        Self {
            primary,
            fallback,
            name,
        }
    }
}

#[async_trait]
impl PriceFeed for FallbackFeed {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch_price(&self) -> Result<f64, TreasuryError> {
        match self.primary.fetch_price().await {
            Ok(price) => Ok(price),
            Err(e) => {
                logger::warning(
                    LogTag::Pricing,
                    &format!("{}; trying {}", e, self.fallback.name()),
                );
                self.fallback.fetch_price().await
            }
        }
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Fixed-answer feed counting its calls
    pub struct StaticFeed {
        name: String,
        price: Option<f64>,
        pub calls: AtomicUsize,
    }

    impl StaticFeed {
        pub fn ok(name: &str, price: f64) -> Self {
            Self {
                name: name.to_string(),
                price: Some(price),
                calls: AtomicUsize::new(0),
            }
        }

        pub fn failing(name: &str) -> Self {
            Self {
                name: name.to_string(),
                price: None,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl PriceFeed for StaticFeed {
        fn name(&self) -> &str {
            &self.name
        }

        async fn fetch_price(&self) -> Result<f64, TreasuryError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.price
                .ok_or_else(|| TreasuryError::price_feed(&self.name, "unavailable"))
        }
    }
}
