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

mod cli;
mod config;
mod hwmon;
mod logger;

use clap::Parser;

fn main() {
    let args = cli::Cli::parse();

    // Optional logging to /etc/omenfanctl/logs.json
    if args.logging {
        logger::init_logging();
        logger::log_event(
            "startup",
            serde_json::json!({
                "args": std::env::args().collect::<Vec<_>>(),
            }),
        );
    }

    if cli::execute_command(&args).is_err() {
        std::process::exit(1);
    }
}
