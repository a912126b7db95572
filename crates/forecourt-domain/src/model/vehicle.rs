//! Vehicle model: tank state and kind-specific refuel policy

use serde::{Deserialize, Serialize};

/// Fixed tank capacity for cars, in litres
pub const CAR_CAPACITY_LITRES: f64 = 50.0;

/// Fixed tank capacity for trucks, in litres
pub const TRUCK_CAPACITY_LITRES: f64 = 200.0;

/// Trucks are refueled in bulk increments of this many litres
pub const TRUCK_REFUEL_INCREMENT_LITRES: f64 = 100.0;

const CAR_FUEL_LABEL: &str = "Regular Unleaded";

/// Vehicle kind with kind-specific attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleKind {
    Car,
    Truck { is_diesel: bool },
}

/// Outcome of a single refuel operation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RefuelOutcome {
    /// Litres actually added to the tank
    pub added_litres: f64,
    /// The tank clamped at capacity during this refuel
    pub tank_full: bool,
}

/// A vehicle with a fuel tank
///
/// Fields are private; the tank level changes only through [`Vehicle::refuel`],
/// which keeps it in `[0, capacity]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    license_plate: String,
    fuel_capacity: f64,
    current_fuel_level: f64,
    kind: VehicleKind,
}

impl Vehicle {
    /// Create a car with the fixed car capacity
    pub fn car(license_plate: impl Into<String>, current_fuel_level: f64) -> Self {
        Self::new(
            license_plate.into(),
            CAR_CAPACITY_LITRES,
            current_fuel_level,
            VehicleKind::Car,
        )
    }

    /// Create a truck with the fixed truck capacity
    pub fn truck(license_plate: impl Into<String>, current_fuel_level: f64, is_diesel: bool) -> Self {
        Self::new(
            license_plate.into(),
            TRUCK_CAPACITY_LITRES,
            current_fuel_level,
            VehicleKind::Truck { is_diesel },
        )
    }

    fn new(license_plate: String, fuel_capacity: f64, current_fuel_level: f64, kind: VehicleKind) -> Self {
        Self {
            license_plate,
            fuel_capacity,
            current_fuel_level: current_fuel_level.clamp(0.0, fuel_capacity),
            kind,
        }
    }

    pub fn license_plate(&self) -> &str {
        &self.license_plate
    }

    pub fn fuel_capacity(&self) -> f64 {
        self.fuel_capacity
    }

    pub fn current_fuel_level(&self) -> f64 {
        self.current_fuel_level
    }

    pub fn kind(&self) -> VehicleKind {
        self.kind
    }

    /// Add fuel to the tank, clamping at capacity
    ///
    /// Amounts of zero or less are silently ignored. The outcome reports the
    /// litres actually taken and whether the tank clamped, so callers can
    /// report without the model printing anything itself.
    pub fn refuel(&mut self, amount: f64) -> RefuelOutcome {
        if amount <= 0.0 {
            return RefuelOutcome {
                added_litres: 0.0,
                tank_full: false,
            };
        }

        let new_level = self.current_fuel_level + amount;
        if new_level > self.fuel_capacity {
            let added = self.fuel_capacity - self.current_fuel_level;
            self.current_fuel_level = self.fuel_capacity;
            RefuelOutcome {
                added_litres: added,
                tank_full: true,
            }
        } else {
            self.current_fuel_level = new_level;
            RefuelOutcome {
                added_litres: amount,
                tank_full: false,
            }
        }
    }

    /// Litres this vehicle wants, before any reserve constraint
    ///
    /// Cars top off exactly; trucks round the shortfall up to the next bulk
    /// increment. A full truck rounds up from zero to zero.
    pub fn required_refuel_amount(&self) -> f64 {
        let needed = self.fuel_capacity - self.current_fuel_level;
        match self.kind {
            VehicleKind::Car => needed,
            VehicleKind::Truck { .. } => {
                (needed / TRUCK_REFUEL_INCREMENT_LITRES).ceil() * TRUCK_REFUEL_INCREMENT_LITRES
            }
        }
    }

    /// Human-readable descriptor including kind-specific details
    pub fn description(&self) -> String {
        match self.kind {
            VehicleKind::Car => format!("Car (Fuel: {})", CAR_FUEL_LABEL),
            VehicleKind::Truck { is_diesel } => {
                format!("Truck (Diesel: {})", if is_diesel { "Yes" } else { "No" })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refuel_adds_fuel() {
        let mut car = Vehicle::car("ABC-123", 10.0);
        let outcome = car.refuel(20.0);

        assert!((car.current_fuel_level() - 30.0).abs() < f64::EPSILON);
        assert!((outcome.added_litres - 20.0).abs() < f64::EPSILON);
        assert!(!outcome.tank_full);
    }

    #[test]
    fn test_refuel_clamps_at_capacity() {
        let mut car = Vehicle::car("ABC-123", 40.0);
        let outcome = car.refuel(30.0);

        assert!((car.current_fuel_level() - CAR_CAPACITY_LITRES).abs() < f64::EPSILON);
        assert!((outcome.added_litres - 10.0).abs() < f64::EPSILON);
        assert!(outcome.tank_full);
    }

    #[test]
    fn test_refuel_exact_fill_is_not_flagged_full() {
        // Reaching capacity exactly does not overflow, so no clamp is signalled
        let mut car = Vehicle::car("ABC-123", 10.0);
        let outcome = car.refuel(40.0);

        assert!((car.current_fuel_level() - 50.0).abs() < f64::EPSILON);
        assert!(!outcome.tank_full);
    }

    #[test]
    fn test_refuel_ignores_zero_and_negative_amounts() {
        let mut car = Vehicle::car("ABC-123", 10.0);

        let outcome = car.refuel(0.0);
        assert!((car.current_fuel_level() - 10.0).abs() < f64::EPSILON);
        assert!((outcome.added_litres - 0.0).abs() < f64::EPSILON);

        let outcome = car.refuel(-5.0);
        assert!((car.current_fuel_level() - 10.0).abs() < f64::EPSILON);
        assert!((outcome.added_litres - 0.0).abs() < f64::EPSILON);
        assert!(!outcome.tank_full);
    }

    #[test]
    fn test_car_requires_exact_top_off() {
        let car = Vehicle::car("ABC-123", 10.0);
        assert!((car.required_refuel_amount() - 40.0).abs() < f64::EPSILON);

        let full = Vehicle::car("ABC-123", 50.0);
        assert!((full.required_refuel_amount() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_truck_requires_bulk_increments() {
        // 150 L short rounds up to 200 L
        let hauler = Vehicle::truck("XYZ-987", 50.0, true);
        assert!((hauler.required_refuel_amount() - 200.0).abs() < f64::EPSILON);

        // Exactly one increment short stays at one increment
        let hauler = Vehicle::truck("XYZ-987", 100.0, false);
        assert!((hauler.required_refuel_amount() - 100.0).abs() < f64::EPSILON);

        // 1 L short still rounds up to a whole increment
        let hauler = Vehicle::truck("XYZ-987", 199.0, false);
        assert!((hauler.required_refuel_amount() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_full_truck_requires_zero() {
        let full = Vehicle::truck("XYZ-987", 200.0, true);
        assert!((full.required_refuel_amount() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_truck_requirement_is_increment_multiple() {
        for level in [0.0, 12.5, 50.0, 99.9, 100.0, 150.0, 199.99] {
            let hauler = Vehicle::truck("XYZ-987", level, false);
            let amount = hauler.required_refuel_amount();
            let needed = hauler.fuel_capacity() - hauler.current_fuel_level();

            assert!(amount >= needed, "level {}: {} < {}", level, amount, needed);
            assert!(
                (amount % TRUCK_REFUEL_INCREMENT_LITRES).abs() < f64::EPSILON,
                "level {}: {} is not an increment multiple",
                level,
                amount
            );
            // Smallest such multiple
            assert!(amount - needed < TRUCK_REFUEL_INCREMENT_LITRES);
        }
    }

    #[test]
    fn test_descriptions() {
        let car = Vehicle::car("ABC-123", 10.0);
        assert_eq!(car.description(), "Car (Fuel: Regular Unleaded)");

        let diesel = Vehicle::truck("XYZ-987", 50.0, true);
        assert_eq!(diesel.description(), "Truck (Diesel: Yes)");

        let petrol = Vehicle::truck("QRS-555", 50.0, false);
        assert_eq!(petrol.description(), "Truck (Diesel: No)");
    }

    #[test]
    fn test_construction_clamps_initial_level() {
        let over = Vehicle::car("ABC-123", 80.0);
        assert!((over.current_fuel_level() - CAR_CAPACITY_LITRES).abs() < f64::EPSILON);

        let under = Vehicle::car("ABC-123", -3.0);
        assert!((under.current_fuel_level() - 0.0).abs() < f64::EPSILON);
    }
}
