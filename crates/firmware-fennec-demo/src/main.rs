// Fennec - RISC-V SoC Bring-Up Runtime
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

//! Bring-up demo: walks the LEDs, reads the board peripherals, and
//! exercises the formatted console end to end.

#![no_std]
#![no_main]

use fennec_rt::mmio;
use log::{info, LevelFilter};
use panic_halt as _;

const BLINK_SPINS: u32 = 10_000;

#[no_mangle]
extern "C" fn main() -> i32 {
    fennec_rt::logger::init(LevelFilter::Info);
    info!("fennec demo up");

    let freq = mmio::CLK_FREQ.read();
    fennec_rt::printf!("core clock: %u Hz\n", freq);

    mmio::SEG7.write(0xBEEF_BEEF);

    let start = fennec_rt::read_cycles();
    for step in 0u32..8 {
        mmio::LED.write(1 << (step % 4));
        for _ in 0..BLINK_SPINS {
            unsafe { riscv::asm::nop() };
        }
    }
    let elapsed = fennec_rt::read_cycles() - start;
    fennec_rt::printf!("blink walk: %llu cycles\n", elapsed);

    fennec_rt::printf!("switches: %08x  lfsr: %08x\n", mmio::SW.read(), mmio::LFSR.read());

    fennec_rt::finalize()
}
