//! Interactive text menu over a parking attendant.

use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use chrono::Utc;
use tracing::debug;

use crate::metrics::encode_metrics;
use parking_core::{
    FeeStrategy, FirstAvailableStrategy, FlatFeeStrategy, HourlyFeeStrategy,
    LotSelectionStrategy, MostCapacityStrategy, MostFreeSpaceStrategy, ParkingAttendant,
    ParkingConfig, Ticket, Vehicle,
};

/// Ask for the lot layout and attendant name when no config file exists.
pub fn prompt_config<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<ParkingConfig> {
    let count = loop {
        let line = prompt(input, output, "Enter number of parking lots: ")?
            .context("input closed during setup")?;
        match line.parse::<usize>() {
            Ok(n) if n > 0 => break n,
            _ => writeln!(output, "Please enter a positive whole number")?,
        }
    };

    let mut capacities = Vec::with_capacity(count);
    for i in 1..=count {
        let capacity = loop {
            let line = prompt(input, output, &format!("Enter capacity for parking lot {}: ", i))?
                .context("input closed during setup")?;
            match line.parse::<usize>() {
                Ok(n) if n > 0 => break n,
                _ => writeln!(output, "Please enter a positive whole number")?,
            }
        };
        capacities.push(capacity);
    }

    let name = prompt(input, output, "Enter attendant name: ")?
        .context("input closed during setup")?;
    if name.is_empty() {
        bail!("attendant name cannot be empty");
    }

    Ok(ParkingConfig::with_capacities(name, &capacities))
}

/// The command loop. Generic over its streams so tests can script it.
pub struct Menu<R, W> {
    input: R,
    output: W,
    attendant: ParkingAttendant,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W, attendant: ParkingAttendant) -> Self {
        Self {
            input,
            output,
            attendant,
        }
    }

    pub fn attendant(&self) -> &ParkingAttendant {
        &self.attendant
    }

    /// Run until the user exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "Parking lot system ready with {} lots and attendant {}",
            self.attendant.parking_lots().len(),
            self.attendant.name()
        )?;

        loop {
            writeln!(self.output)?;
            writeln!(self.output, "Available commands:")?;
            writeln!(self.output, "1. Park car")?;
            writeln!(self.output, "2. Unpark car")?;
            writeln!(self.output, "3. Show parking lot status")?;
            writeln!(self.output, "4. Change parking strategy")?;
            writeln!(self.output, "5. Change fee strategy")?;
            writeln!(self.output, "6. Exit")?;
            writeln!(self.output, "7. Show metrics")?;

            let Some(choice) = self.prompt("\nEnter command number: ")? else {
                return Ok(());
            };

            match choice.as_str() {
                "1" => self.park()?,
                "2" => self.unpark()?,
                "3" => self.show_status()?,
                "4" => self.change_parking_strategy()?,
                "5" => self.change_fee_strategy()?,
                "6" => {
                    writeln!(self.output, "Thank you for using Parking Lot System")?;
                    return Ok(());
                }
                "7" => self.show_metrics()?,
                other => {
                    debug!(choice = other, "Invalid menu choice");
                    writeln!(self.output, "Invalid command")?;
                }
            }
        }
    }

    fn park(&mut self) -> io::Result<()> {
        let Some(plate) = self.prompt("Enter car license plate: ")? else {
            return Ok(());
        };

        match self.attendant.park_car(&Vehicle::new(plate)) {
            Ok(ticket) => writeln!(
                self.output,
                "Car parked successfully. Ticket number: {}",
                ticket.number
            ),
            Err(e) => writeln!(self.output, "Error parking car: {}", e),
        }
    }

    fn unpark(&mut self) -> io::Result<()> {
        let Some(number) = self.prompt("Enter ticket number: ")? else {
            return Ok(());
        };
        if number.is_empty() {
            return writeln!(self.output, "Ticket number cannot be empty");
        }

        match self
            .attendant
            .settle(&Ticket::from_number(number), Utc::now())
        {
            Ok(receipt) => {
                writeln!(
                    self.output,
                    "Car with license plate {} has been unparked",
                    receipt.vehicle
                )?;
                writeln!(
                    self.output,
                    "Parking duration: {}",
                    format_duration(receipt.duration)
                )?;
                writeln!(
                    self.output,
                    "Parking fee ({}): ${:.2}",
                    receipt.fee_strategy, receipt.fee
                )
            }
            Err(e) => writeln!(self.output, "Error unparking car: {}", e),
        }
    }

    fn show_status(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Parking Lot Status:")?;
        writeln!(self.output, "-----------------")?;
        for lot in self.attendant.parking_lots() {
            writeln!(
                self.output,
                "Parking lot {}: {}/{} spaces occupied",
                lot.id(),
                lot.occupied(),
                lot.capacity()
            )?;
        }
        writeln!(
            self.output,
            "Parking strategy: {}",
            self.attendant.strategy_name()
        )
    }

    fn show_metrics(&mut self) -> io::Result<()> {
        match encode_metrics() {
            Ok(text) => write!(self.output, "{}", text),
            Err(e) => writeln!(self.output, "Error reading metrics: {:#}", e),
        }
    }

    fn change_parking_strategy(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Available parking strategies:")?;
        writeln!(self.output, "1. Most Capacity First")?;
        writeln!(self.output, "2. Most Free Space First")?;
        writeln!(self.output, "3. First Available")?;
        let Some(choice) = self.prompt("Enter strategy number: ")? else {
            return Ok(());
        };

        let strategy: Arc<dyn LotSelectionStrategy> = match choice.as_str() {
            "1" => Arc::new(MostCapacityStrategy),
            "2" => Arc::new(MostFreeSpaceStrategy),
            "3" => Arc::new(FirstAvailableStrategy),
            _ => return writeln!(self.output, "Invalid strategy number"),
        };
        writeln!(self.output, "Changed to {} strategy", strategy.name())?;
        self.attendant.change_parking_strategy(strategy);
        Ok(())
    }

    fn change_fee_strategy(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Available fee strategies:")?;
        writeln!(self.output, "1. Hourly Rate")?;
        writeln!(self.output, "2. Flat Rate")?;
        let Some(choice) = self.prompt("Enter strategy number: ")? else {
            return Ok(());
        };

        let label = match choice.as_str() {
            "1" => "Enter hourly rate: $",
            "2" => "Enter flat rate: $",
            _ => return writeln!(self.output, "Invalid strategy number"),
        };
        let Some(raw_rate) = self.prompt(label)? else {
            return Ok(());
        };
        let rate = match raw_rate.parse::<f64>() {
            Ok(rate) if rate.is_finite() && rate >= 0.0 => rate,
            _ => return writeln!(self.output, "Invalid rate"),
        };

        let strategy: Arc<dyn FeeStrategy> = if choice == "1" {
            writeln!(self.output, "Changed to Hourly Rate strategy ({:.2}/hour)", rate)?;
            Arc::new(HourlyFeeStrategy::new(rate))
        } else {
            writeln!(self.output, "Changed to Flat Rate strategy (${:.2})", rate)?;
            Arc::new(FlatFeeStrategy::new(rate))
        };
        self.attendant.change_fee_strategy(strategy);
        Ok(())
    }

    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        prompt(&mut self.input, &mut self.output, message)
    }
}

/// Print `message`, then read one trimmed line. `None` on end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> io::Result<Option<String>> {
    write!(output, "{}", message)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Duration rounded to the nearest minute, e.g. `2h05m`.
fn format_duration(duration: Duration) -> String {
    let minutes = (duration.as_secs() + 30) / 60;
    format!("{}h{:02}m", minutes / 60, minutes % 60)
}
