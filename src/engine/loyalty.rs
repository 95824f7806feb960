//! Loyalty point ledger.

use std::sync::Arc;

use serde::Serialize;

use crate::storage::{KeyValueStore, LOYALTY_KEY};

pub const ADD_TO_CART_POINTS: u64 = 10;
pub const CHECKOUT_POINTS_PER_LINE: u64 = 50;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum LoyaltyTier {
    Debutant,
    Expert,
    Pro,
    Legende,
}

impl LoyaltyTier {
    pub fn for_points(points: u64) -> Self {
        match points {
            1000.. => Self::Legende,
            500.. => Self::Pro,
            200.. => Self::Expert,
            _ => Self::Debutant,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Debutant => "Débutant",
            Self::Expert => "Expert",
            Self::Pro => "Pro",
            Self::Legende => "Légende",
        }
    }

    /// Points needed to reach the next tier. `None` at the top.
    pub fn next_threshold(&self) -> Option<u64> {
        match self {
            Self::Debutant => Some(200),
            Self::Expert => Some(500),
            Self::Pro => Some(1000),
            Self::Legende => None,
        }
    }
}

/// Tier plus progress toward the next one, as shown on the badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct LoyaltyStatus {
    pub points: u64,
    pub tier: LoyaltyTier,
    pub next_threshold: Option<u64>,
    /// Whole percent of `points / next_threshold`, 100 at the top tier.
    pub progress_percent: u64,
}

impl LoyaltyStatus {
    pub fn for_points(points: u64) -> Self {
        let tier = LoyaltyTier::for_points(points);
        let next_threshold = tier.next_threshold();
        let progress_percent = next_threshold.map_or(100, |next| points.saturating_mul(100) / next);
        Self { points, tier, next_threshold, progress_percent }
    }
}

pub struct LoyaltyCounter {
    store: Arc<dyn KeyValueStore>,
    points: u64,
}

impl LoyaltyCounter {
    /// Load the persisted total. Missing or corrupt values read as zero.
    pub fn restore(store: Arc<dyn KeyValueStore>) -> Self {
        let points = match store.get(LOYALTY_KEY) {
            Ok(Some(raw)) => raw.trim().parse::<u64>().unwrap_or_else(|err| {
                tracing::warn!(key = LOYALTY_KEY, value = %raw, error = %err, "stored loyalty points are malformed, resetting to 0");
                0
            }),
            Ok(None) => 0,
            Err(err) => {
                tracing::warn!(key = LOYALTY_KEY, error = %err, "loyalty read failed, using 0");
                0
            }
        };
        Self { store, points }
    }

    pub fn points(&self) -> u64 { self.points }
    pub fn status(&self) -> LoyaltyStatus { LoyaltyStatus::for_points(self.points) }

    /// Add points, persist, and return the new total.
    pub fn award(&mut self, points: u64) -> u64 {
        self.points = self.points.saturating_add(points);
        if let Err(err) = self.store.set(LOYALTY_KEY, &self.points.to_string()) {
            tracing::error!(key = LOYALTY_KEY, error = %err, "failed to persist loyalty points");
        }
        self.points
    }
}
