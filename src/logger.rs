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

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use lazy_static::lazy_static;
use serde_json::{json, Value};

const DEFAULT_LOG_PATH: &str = "/etc/omenfanctl/logs.json";
const FALLBACK_LOG_PATH: &str = "/tmp/omenfanctl_logs.json";

lazy_static! {
    static ref LOG_FILE: Mutex<Option<File>> = Mutex::new(None);
}

fn now_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}

fn open_append(path: &str) -> Option<File> {
    if let Some(parent) = Path::new(path).parent() {
        let _ = fs::create_dir_all(parent);
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}

/// Open the event log. Events before init (or if init fails entirely) are
/// dropped; logging is opt-in and never blocks the tool's real work.
pub fn init_logging() {
    let file = open_append(DEFAULT_LOG_PATH).or_else(|| open_append(FALLBACK_LOG_PATH));
    if let Ok(mut guard) = LOG_FILE.lock() {
        *guard = file;
    }
}

pub fn log_event(event: &str, data: Value) {
    let line = json!({
        "ts_ms": now_millis(),
        "event": event,
        "data": data,
    })
    .to_string();

    if let Ok(mut guard) = LOG_FILE.lock() {
        if let Some(f) = guard.as_mut() {
            let _ = writeln!(f, "{}", line);
        }
    }
}
