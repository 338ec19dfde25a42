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

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

/// Default hp-wmi hwmon directory. The hwmon index is assigned by the kernel
/// at probe time and differs between hosts and boots; override it with
/// `--hwmon-path` or `OMENFANCTL_HWMON_PATH` when it doesn't match.
pub const DEFAULT_BASE_PATH: &str = "/sys/devices/platform/hp-wmi/hwmon/hwmon5";

pub const BASE_PATH_ENV: &str = "OMENFANCTL_HWMON_PATH";

/// The fixed attribute files this tool touches, rooted under one hwmon
/// chip directory.
#[derive(Debug, Clone)]
pub struct DevicePaths {
    pub fan1_input: PathBuf,
    pub fan2_input: PathBuf,
    pub pwm1_enable: PathBuf,
}

impl DevicePaths {
    pub fn new<P: AsRef<Path>>(base: P) -> Self {
        let base = base.as_ref();
        DevicePaths {
            fan1_input: base.join("fan1_input"),
            fan2_input: base.join("fan2_input"),
            pwm1_enable: base.join("pwm1_enable"),
        }
    }
}

/// Pick the hwmon base directory: explicit flag first, then the environment
/// variable, then the built-in default.
pub fn resolve_base_path(flag: Option<&Path>) -> PathBuf {
    if let Some(p) = flag {
        return p.to_path_buf();
    }
    if let Ok(p) = env::var(BASE_PATH_ENV) {
        return PathBuf::from(p);
    }
    PathBuf::from(DEFAULT_BASE_PATH)
}

/// Validate the base directory and build the attribute path set. A missing
/// directory is a configuration error, not a per-attribute read failure.
pub fn device_paths(flag: Option<&Path>) -> Result<DevicePaths> {
    let base = resolve_base_path(flag);
    if !base.is_dir() {
        bail!(
            "hwmon directory {} does not exist; the hp-wmi hwmon index is host-dependent, \
             point {} or --hwmon-path at the right hwmonN directory",
            base.display(),
            BASE_PATH_ENV
        );
    }
    Ok(DevicePaths::new(&base))
}
