//! Shared transaction record types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of a single dispensing transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefuelReceipt {
    /// Unique identifier
    pub id: String,

    /// Pump that served the transaction
    pub pump_id: u32,

    /// License plate of the served vehicle
    pub license_plate: String,

    /// Human-readable vehicle descriptor (e.g., "Car (Fuel: Regular Unleaded)")
    pub vehicle_description: String,

    /// Tank level before dispensing, in litres
    pub level_before: f64,

    /// Tank level after dispensing, in litres
    pub level_after: f64,

    /// Litres the vehicle's policy requested, before reserve constraints
    pub amount_needed: f64,

    /// Litres actually dispensed by the pump
    pub amount_dispensed: f64,

    /// Dispensed amount times the pump's price per litre
    pub total_cost: f64,

    /// Pump reserve remaining after this transaction, in litres
    pub reserve_after: f64,

    /// The vehicle's tank clamped at capacity during this refuel
    #[serde(default)]
    pub tank_full: bool,

    /// The requested amount exceeded the pump reserve (partial fill)
    #[serde(default)]
    pub reserve_shortfall: bool,

    /// When the transaction completed
    pub dispensed_at: DateTime<Utc>,
}

/// Aggregate results of a dispensing session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResults {
    /// Transaction receipts in dispensing order
    pub receipts: Vec<RefuelReceipt>,

    /// Total litres dispensed across all transactions
    pub total_dispensed_litres: f64,

    /// Total revenue across all transactions
    pub total_cost: f64,

    /// Session start time
    pub started_at: DateTime<Utc>,

    /// Session end time
    pub completed_at: DateTime<Utc>,
}

impl SessionResults {
    /// Build session results from collected receipts, computing totals
    pub fn new(
        receipts: Vec<RefuelReceipt>,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
    ) -> Self {
        let total_dispensed_litres = receipts.iter().map(|r| r.amount_dispensed).sum();
        let total_cost = receipts.iter().map(|r| r.total_cost).sum();

        Self {
            receipts,
            total_dispensed_litres,
            total_cost,
            started_at,
            completed_at,
        }
    }
}
