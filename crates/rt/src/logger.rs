// Fennec - RISC-V SoC Bring-Up Runtime
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

//! Console-backed implementation of the `log` facade.

use core::fmt::Write;

use log::{LevelFilter, Log, Metadata, Record};

use crate::console::{self, ConsoleWriter};

struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut out = ConsoleWriter;
        let _ = writeln!(
            out,
            "[{:<5}] {}: {}",
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        console::flush();
    }
}

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Installs the console logger and sets the level filter.
///
/// Uses the racy setter: the SoC runs a single hart and rv32i has no
/// compare-and-swap. Calling this more than once keeps the first logger.
pub fn init(filter: LevelFilter) {
    unsafe {
        let _ = log::set_logger_racy(&LOGGER);
    }
    log::set_max_level(filter);
}
