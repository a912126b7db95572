//! Command handlers

use chrono::Utc;
use forecourt_domain::{session_report, FuelPump, Vehicle};
use forecourt_domain::model::vehicle::{CAR_CAPACITY_LITRES, TRUCK_CAPACITY_LITRES};
use forecourt_types::{Error, OutputFormat, RefuelReceipt, Result, SessionResults};
use std::path::PathBuf;

use crate::cli::{Cli, Commands, KindArg};
use crate::output::{output_receipt, output_session};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let output_format = cli.format.unwrap_or_default();
    let verbose = cli.verbose;

    match cli.command {
        None => cmd_demo(output_format, verbose, None),

        Some(Commands::Demo { output }) => cmd_demo(output_format, verbose, output),

        Some(Commands::Refuel {
            kind,
            plate,
            level,
            diesel,
            pump_id,
            price,
            reserve,
        }) => cmd_refuel(
            output_format,
            verbose,
            kind,
            plate,
            level,
            diesel,
            pump_id,
            price,
            reserve,
        ),
    }
}

/// Run one transaction, reporting it in table mode and collecting the receipt
fn serve_and_print(
    pump: &mut FuelPump,
    vehicle: &mut Vehicle,
    output_format: OutputFormat,
    verbose: bool,
) -> Result<RefuelReceipt> {
    if verbose {
        eprintln!(
            "Serving {} at pump {} ({:.2} L in reserve)",
            vehicle.license_plate(),
            pump.pump_id(),
            pump.fuel_reserve_litres()
        );
    }

    let receipt = pump.serve(vehicle);

    // In JSON mode the session is printed once at the end
    if output_format == OutputFormat::Table {
        output_receipt(output_format, &receipt)?;
    }

    Ok(receipt)
}

fn cmd_demo(output_format: OutputFormat, verbose: bool, output: Option<PathBuf>) -> Result<()> {
    let started_at = Utc::now();

    // Sample fleet and pumps; the transaction sequence below is fixed
    let mut sedan = Vehicle::car("ABC-123", 10.0);
    let mut hauler = Vehicle::truck("XYZ-987", 50.0, true);

    let mut pump1 = FuelPump::new(1, 1.55, 500.0);
    let mut pump2 = FuelPump::new(2, 1.40, 50.0);

    if output_format == OutputFormat::Table {
        println!("<<< FUEL STATION MANAGEMENT SYSTEM DEMO >>>");
    }

    let mut receipts = Vec::new();
    receipts.push(serve_and_print(&mut pump1, &mut sedan, output_format, verbose)?);
    receipts.push(serve_and_print(&mut pump1, &mut hauler, output_format, verbose)?);
    receipts.push(serve_and_print(&mut pump2, &mut sedan, output_format, verbose)?);

    let results = SessionResults::new(receipts, started_at, Utc::now());

    if output_format == OutputFormat::Table {
        println!("\n<<< DEMO COMPLETE >>>");
        println!();
        println!(
            "Final check: Truck {} has {:.2} L of fuel.",
            hauler.license_plate(),
            hauler.current_fuel_level()
        );
        println!();
        println!("{}", session_report(&results));
    } else {
        output_session(output_format, &results)?;
    }

    if let Some(output_path) = output {
        let content = serde_json::to_string_pretty(&results)?;
        std::fs::write(&output_path, content)?;
        println!("Results saved to: {}", output_path.display());
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn cmd_refuel(
    output_format: OutputFormat,
    verbose: bool,
    kind: KindArg,
    plate: String,
    level: f64,
    diesel: bool,
    pump_id: u32,
    price: f64,
    reserve: f64,
) -> Result<()> {
    if price <= 0.0 {
        return Err(Error::InvalidPump(format!(
            "price per litre must be positive, got {}",
            price
        )));
    }
    if reserve < 0.0 {
        return Err(Error::InvalidPump(format!(
            "reserve must be non-negative, got {}",
            reserve
        )));
    }
    if level < 0.0 {
        return Err(Error::InvalidVehicle(format!(
            "fuel level must be non-negative, got {}",
            level
        )));
    }

    let mut vehicle = match kind {
        KindArg::Car => {
            if diesel {
                return Err(Error::InvalidVehicle(
                    "--diesel only applies to trucks".to_string(),
                ));
            }
            if level > CAR_CAPACITY_LITRES {
                return Err(Error::InvalidVehicle(format!(
                    "fuel level {} exceeds car capacity {}",
                    level, CAR_CAPACITY_LITRES
                )));
            }
            Vehicle::car(plate, level)
        }
        KindArg::Truck => {
            if level > TRUCK_CAPACITY_LITRES {
                return Err(Error::InvalidVehicle(format!(
                    "fuel level {} exceeds truck capacity {}",
                    level, TRUCK_CAPACITY_LITRES
                )));
            }
            Vehicle::truck(plate, level, diesel)
        }
    };

    let mut pump = FuelPump::new(pump_id, price, reserve);

    if verbose {
        eprintln!(
            "Serving {} at pump {} ({:.2} L in reserve)",
            vehicle.license_plate(),
            pump.pump_id(),
            pump.fuel_reserve_litres()
        );
    }

    let receipt = pump.serve(&mut vehicle);
    output_receipt(output_format, &receipt)?;

    Ok(())
}
