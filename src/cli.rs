/*
 * This file is part of omenfanctl.
 *
 * Copyright (C) 2026 omenfanctl contributors
 *
 * omenfanctl is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * omenfanctl is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with omenfanctl. If not, see <https://www.gnu.org/licenses/>.
 */

//! Command Line Interface
//!
//! Two subcommands over the hp-wmi hwmon attributes: `status` reads fan
//! speeds and the pwm1_enable flag, `set` writes the flag.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{self, DevicePaths};
use crate::hwmon::{self, PwmMode, ALLOWED_STATES};

#[derive(Parser)]
#[command(name = "omenfanctl")]
#[command(version)]
#[command(about = "Fan control for HP Omen laptops using the hp_wmi hwmon interface")]
#[command(long_about = "Fan control for HP Omen laptops using the hp_wmi hwmon interface

EXAMPLES:
    omenfanctl status              Show fan speeds and pwm control status
    sudo omenfanctl set 0          Pin fans at max RPM
    sudo omenfanctl set 2          Return fans to automatic control

ENVIRONMENT VARIABLES:
    OMENFANCTL_HWMON_PATH    hwmon base directory (same as --hwmon-path)

FILES:
    /sys/devices/platform/hp-wmi/hwmon/hwmonN    attribute files read/written
    /etc/omenfanctl/logs.json                    event log when --logging is set")]
pub struct Cli {
    /// hwmon base directory holding fan1_input, fan2_input and pwm1_enable
    #[arg(long, value_name = "DIR")]
    pub hwmon_path: Option<PathBuf>,

    /// Append JSON event lines to /etc/omenfanctl/logs.json
    #[arg(long)]
    pub logging: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show current fan speeds and pwm control status
    Status,

    /// Set the pwm1_enable flag
    Set {
        /// State to set: '2' for Automatic, '0' for Manual (Max RPM)
        #[arg(value_parser = ALLOWED_STATES)]
        state: String,
    },
}

/// Dispatch a parsed command. `Ok(())` means exit 0; an error means the
/// failure was already reported on stderr and the process should exit 1.
pub fn execute_command(cli: &Cli) -> Result<(), ()> {
    let paths = match config::device_paths(cli.hwmon_path.as_deref()) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Err(());
        }
    };

    match &cli.command {
        Commands::Status => {
            cmd_status(&paths);
            Ok(())
        }
        Commands::Set { state } => cmd_set(&paths, state),
    }
}

/// Best-effort status report: attributes that fail to read are diagnosed on
/// stderr and omitted from the report, never fatal.
fn cmd_status(paths: &DevicePaths) {
    println!("=== HP Omen Fan Status ===");

    let snapshot = hwmon::read_status(paths);

    match snapshot.fan1_rpm {
        Ok(rpm) => println!("Fan 1 Speed: {} RPM", rpm),
        Err(e) => eprintln!("Error reading {}: {}", paths.fan1_input.display(), e),
    }
    match snapshot.fan2_rpm {
        Ok(rpm) => println!("Fan 2 Speed: {} RPM", rpm),
        Err(e) => eprintln!("Error reading {}: {}", paths.fan2_input.display(), e),
    }
    match snapshot.pwm_enable {
        Ok(raw) => {
            let mode = PwmMode::from_raw(&raw);
            println!("PWM Control (pwm1_enable): {} ({})", raw, mode);
        }
        Err(e) => eprintln!("Error reading {}: {}", paths.pwm1_enable.display(), e),
    }
}

fn cmd_set(paths: &DevicePaths, state: &str) -> Result<(), ()> {
    match hwmon::write_pwm_enable(paths, state) {
        Ok(()) => {
            println!("Wrote '{}' to {}", state, paths.pwm1_enable.display());
            println!("pwm1_enable set successfully.");
            Ok(())
        }
        Err(hwmon::HwmonError::InvalidState(s)) => {
            eprintln!(
                "Invalid state '{}'. Allowed values are: {}.",
                s,
                ALLOWED_STATES.join(", ")
            );
            Err(())
        }
        Err(hwmon::HwmonError::PermissionDenied { path }) => {
            eprintln!("Permission denied when writing to {}.", path.display());
            if unsafe { libc::geteuid() } != 0 {
                eprintln!(
                    "Try running with: sudo {} set {}",
                    std::env::args().next().unwrap_or_else(|| "omenfanctl".to_string()),
                    state
                );
            }
            Err(())
        }
        Err(e) => {
            eprintln!("Error writing to {}: {}", paths.pwm1_enable.display(), e);
            Err(())
        }
    }
}
