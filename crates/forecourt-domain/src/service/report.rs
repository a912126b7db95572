//! Session reporting service
//!
//! Builds the formatted end-of-session summary from collected receipts.

use forecourt_types::SessionResults;
use std::collections::BTreeMap;

/// Generate a formatted summary report for a dispensing session
///
/// Contains transaction counts and totals, a per-transaction table, and the
/// remaining reserve of each pump seen during the session.
pub fn session_report(results: &SessionResults) -> String {
    let total = results.receipts.len();
    let full_tanks = results.receipts.iter().filter(|r| r.tank_full).count();
    let shortfalls = results.receipts.iter().filter(|r| r.reserve_shortfall).count();

    let mut report = String::new();

    report.push_str("==================================================\n");
    report.push_str("           Fuel Station Session Report            \n");
    report.push_str("==================================================\n\n");

    report.push_str("[Summary]\n");
    report.push_str(&format!("  Transactions:        {}\n", total));
    report.push_str(&format!(
        "  Fuel dispensed:      {:.2} L\n",
        results.total_dispensed_litres
    ));
    report.push_str(&format!("  Revenue:             ${:.2}\n", results.total_cost));
    report.push_str(&format!("  Tanks filled:        {}\n", full_tanks));
    report.push_str(&format!("  Reserve shortfalls:  {}\n", shortfalls));
    report.push('\n');

    if total > 0 {
        report.push_str("[Transactions]\n");
        report.push_str("-".repeat(68).as_str());
        report.push('\n');
        report.push_str(&format!(
            "{:<5} {:<10} {:<29} {:>9} {:>10}\n",
            "Pump", "Plate", "Vehicle", "Litres", "Cost"
        ));
        report.push_str("-".repeat(68).as_str());
        report.push('\n');

        for receipt in &results.receipts {
            report.push_str(&format!(
                "{:<5} {:<10} {:<29} {:>8.2}L {:>9.2}\n",
                receipt.pump_id,
                receipt.license_plate,
                receipt.vehicle_description,
                receipt.amount_dispensed,
                receipt.total_cost
            ));
        }
        report.push('\n');

        // Last receipt per pump carries its closing reserve
        let mut reserves: BTreeMap<u32, f64> = BTreeMap::new();
        for receipt in &results.receipts {
            reserves.insert(receipt.pump_id, receipt.reserve_after);
        }

        report.push_str("[Pump reserves]\n");
        for (pump_id, reserve) in &reserves {
            report.push_str(&format!("  Pump {}: {:>8.2} L remaining\n", pump_id, reserve));
        }
        report.push('\n');
    }

    report.push_str("==================================================\n");

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FuelPump, Vehicle};
    use chrono::Utc;

    fn demo_session() -> SessionResults {
        let started_at = Utc::now();

        let mut sedan = Vehicle::car("ABC-123", 10.0);
        let mut hauler = Vehicle::truck("XYZ-987", 50.0, true);
        let mut pump1 = FuelPump::new(1, 1.55, 500.0);
        let mut pump2 = FuelPump::new(2, 1.40, 50.0);

        let receipts = vec![
            pump1.serve(&mut sedan),
            pump1.serve(&mut hauler),
            pump2.serve(&mut sedan),
        ];

        SessionResults::new(receipts, started_at, Utc::now())
    }

    #[test]
    fn test_report_contains_totals() {
        let report = session_report(&demo_session());

        assert!(report.contains("Fuel Station Session Report"));
        assert!(report.contains("Transactions:        3"));
        assert!(report.contains("240.00 L"));
        assert!(report.contains("$372.00"));
    }

    #[test]
    fn test_report_lists_pump_reserves() {
        let report = session_report(&demo_session());

        assert!(report.contains("Pump 1:   260.00 L remaining"));
        assert!(report.contains("Pump 2:    50.00 L remaining"));
    }

    #[test]
    fn test_report_on_empty_session() {
        let results = SessionResults::new(Vec::new(), Utc::now(), Utc::now());
        let report = session_report(&results);

        assert!(report.contains("Transactions:        0"));
        assert!(!report.contains("[Transactions]"));
    }
}
