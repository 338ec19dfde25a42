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

//! omenfanctl - Fan control CLI for HP Omen laptops
//!
//! This library provides the pieces behind the binary: resolving the hp-wmi
//! hwmon attribute paths, reading fan speeds and the pwm1_enable flag, and
//! writing the two supported control states.

pub mod cli;
pub mod config;
pub mod hwmon;
pub mod logger;
