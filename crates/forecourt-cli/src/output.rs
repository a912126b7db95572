//! Output formatting module

use forecourt_domain::session_report;
use forecourt_types::{OutputFormat, RefuelReceipt, Result, SessionResults};

/// Print one transaction receipt in the requested format
///
/// Table output mirrors the pump's console protocol: header, vehicle info,
/// the shortfall/tank-full notices when they apply, then the dispensed
/// amount, cost, and remaining reserve, all with two-decimal litres.
pub fn output_receipt(output_format: OutputFormat, receipt: &RefuelReceipt) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(receipt)?;
        println!("{}", content);
    } else {
        println!("\n-------------------------------------------");
        println!("Pump {} serving {}", receipt.pump_id, receipt.license_plate);
        println!("Vehicle Type: {}", receipt.vehicle_description);
        println!(
            "Current Level: {:.2} L. Needs: {:.2} L.",
            receipt.level_before, receipt.amount_needed
        );

        if receipt.reserve_shortfall {
            println!(
                "ERROR: Not enough fuel! Only {:.2} L left in pump.",
                receipt.amount_dispensed
            );
        }
        if receipt.tank_full {
            println!("Tank is now full!");
        }

        println!(
            "Dispensed {:.2} L. Total Cost: ${:.2}",
            receipt.amount_dispensed, receipt.total_cost
        );
        println!(
            "Pump {} Reserve remaining: {:.2} L",
            receipt.pump_id, receipt.reserve_after
        );
    }

    Ok(())
}

/// Print session results in the requested format
pub fn output_session(output_format: OutputFormat, results: &SessionResults) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(results)?;
        println!("{}", content);
    } else {
        println!("{}", session_report(results));
    }

    Ok(())
}
