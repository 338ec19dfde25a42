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

use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use serde_json::json;
use thiserror::Error;

use crate::config::DevicePaths;
use crate::logger;

/// States accepted by `pwm1_enable` on the hp-wmi driver. "2" selects
/// automatic firmware control, "0" pins the fans at max RPM.
pub const ALLOWED_STATES: [&str; 2] = ["0", "2"];

#[derive(Error, Debug)]
pub enum HwmonError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("permission denied writing {path}")]
    PermissionDenied { path: PathBuf },
    #[error("invalid state '{0}', allowed values are: 0, 2")]
    InvalidState(String),
}

/// Fan-control policy as reported by `pwm1_enable`.
///
/// Values other than the two the driver is known to use are kept as
/// `Unknown` rather than coerced; status reports the raw value alongside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PwmMode {
    Automatic,
    ManualMax,
    Unknown,
}

impl PwmMode {
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "2" => PwmMode::Automatic,
            "0" => PwmMode::ManualMax,
            _ => PwmMode::Unknown,
        }
    }
}

impl fmt::Display for PwmMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PwmMode::Automatic => write!(f, "Automatic"),
            PwmMode::ManualMax => write!(f, "Manual (Max RPM)"),
            PwmMode::Unknown => write!(f, "Unknown"),
        }
    }
}

pub fn read_trimmed<P: AsRef<Path>>(p: P) -> io::Result<String> {
    let mut s = String::new();
    fs::File::open(p)?.read_to_string(&mut s)?;
    Ok(s.trim().to_string())
}

pub fn read_fan_rpm(path: &Path) -> Result<u64, HwmonError> {
    let raw = read_trimmed(path)?;
    raw.parse::<u64>()
        .map_err(|_| HwmonError::Parse(format!("'{}' is not a fan speed", raw)))
}

pub fn read_pwm_enable(path: &Path) -> Result<String, HwmonError> {
    Ok(read_trimmed(path)?)
}

/// Per-attribute read results for one status query. Each entry carries its
/// own failure so the reporter can decide per line what to render.
#[derive(Debug)]
pub struct StatusSnapshot {
    pub fan1_rpm: Result<u64, HwmonError>,
    pub fan2_rpm: Result<u64, HwmonError>,
    pub pwm_enable: Result<String, HwmonError>,
}

pub fn read_status(paths: &DevicePaths) -> StatusSnapshot {
    StatusSnapshot {
        fan1_rpm: read_fan_rpm(&paths.fan1_input),
        fan2_rpm: read_fan_rpm(&paths.fan2_input),
        pwm_enable: read_pwm_enable(&paths.pwm1_enable),
    }
}

/// Write a validated state to `pwm1_enable`, truncating previous content.
/// The driver treats the write as a mode-set, so repeating it is harmless.
pub fn write_pwm_enable(paths: &DevicePaths, state: &str) -> Result<(), HwmonError> {
    if !ALLOWED_STATES.contains(&state) {
        return Err(HwmonError::InvalidState(state.to_string()));
    }
    let path = &paths.pwm1_enable;
    match fs::write(path, state) {
        Ok(()) => {
            logger::log_event(
                "pwm_enable_write",
                json!({
                    "path": path.display().to_string(),
                    "state": state,
                }),
            );
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
            Err(HwmonError::PermissionDenied { path: path.clone() })
        }
        Err(e) => Err(e.into()),
    }
}
