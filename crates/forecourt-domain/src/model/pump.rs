//! Fuel pump model: reserve management and dispensing

use chrono::Utc;
use forecourt_types::RefuelReceipt;
use serde::{Deserialize, Serialize};

use super::Vehicle;

/// A pump with a unit price and a finite fuel reserve
///
/// The reserve only changes through [`FuelPump::serve`] and never goes
/// negative: requests beyond the reserve degrade to a partial fill.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuelPump {
    pump_id: u32,
    price_per_litre: f64,
    fuel_reserve_litres: f64,
}

impl FuelPump {
    pub fn new(pump_id: u32, price_per_litre: f64, initial_reserve: f64) -> Self {
        Self {
            pump_id,
            price_per_litre,
            fuel_reserve_litres: initial_reserve.max(0.0),
        }
    }

    pub fn pump_id(&self) -> u32 {
        self.pump_id
    }

    pub fn price_per_litre(&self) -> f64 {
        self.price_per_litre
    }

    pub fn fuel_reserve_litres(&self) -> f64 {
        self.fuel_reserve_litres
    }

    /// Run a full refuel transaction against one vehicle
    ///
    /// Computes the vehicle's desired amount, dispenses as much of it as the
    /// reserve allows, and returns the receipt. This never fails; reserve
    /// shortfalls and tank clamps are recorded on the receipt.
    pub fn serve(&mut self, vehicle: &mut Vehicle) -> RefuelReceipt {
        let amount_needed = vehicle.required_refuel_amount();
        self.dispense(vehicle, amount_needed)
    }

    fn dispense(&mut self, vehicle: &mut Vehicle, amount: f64) -> RefuelReceipt {
        let level_before = vehicle.current_fuel_level();

        let reserve_shortfall = amount > self.fuel_reserve_litres;
        let dispensed = if reserve_shortfall {
            self.fuel_reserve_litres
        } else {
            amount
        };

        // Billed on what leaves the pump, even if the tank clamps below it
        let total_cost = dispensed * self.price_per_litre;
        self.fuel_reserve_litres -= dispensed;

        let outcome = vehicle.refuel(dispensed);

        RefuelReceipt {
            id: uuid::Uuid::new_v4().to_string(),
            pump_id: self.pump_id,
            license_plate: vehicle.license_plate().to_string(),
            vehicle_description: vehicle.description(),
            level_before,
            level_after: vehicle.current_fuel_level(),
            amount_needed: amount,
            amount_dispensed: dispensed,
            total_cost,
            reserve_after: self.fuel_reserve_litres,
            tank_full: outcome.tank_full,
            reserve_shortfall,
            dispensed_at: Utc::now(),
        }
    }
}
