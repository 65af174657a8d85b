// Fennec - RISC-V SoC Bring-Up Runtime
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

//! Memory-mapped register handles for the Fennec SoC.
//!
//! Every register the runtime touches is a named handle exposing only the
//! access direction the hardware supports. Handles cannot be constructed
//! outside this module, so there is no way to alias arbitrary addresses or
//! do pointer arithmetic over the register file.

use core::ptr;

use bitflags::bitflags;

/// A read-only word register at a fixed bus address.
#[derive(Clone, Copy)]
pub struct ReadOnly(usize);

impl ReadOnly {
    const fn new(addr: usize) -> Self {
        Self(addr)
    }

    /// Volatile read of the register.
    #[inline(always)]
    pub fn read(self) -> u32 {
        // Handles only ever name addresses in the SoC register file.
        unsafe { ptr::read_volatile(self.0 as *const u32) }
    }
}

/// A write-only word register at a fixed bus address.
#[derive(Clone, Copy)]
pub struct WriteOnly(usize);

impl WriteOnly {
    const fn new(addr: usize) -> Self {
        Self(addr)
    }

    /// Volatile write of the register.
    #[inline(always)]
    pub fn write(self, value: u32) {
        unsafe { ptr::write_volatile(self.0 as *mut u32, value) }
    }
}

/// Halt register; any write stops the SoC.
pub const HALT: WriteOnly = WriteOnly::new(0xf000_0000);
/// Host console transmit data register, one byte per write.
pub const TX_DATA: WriteOnly = WriteOnly::new(0xf000_0100);
/// Transmit handshake flag; non-zero means the channel accepts a byte.
pub const TX_READY: ReadOnly = ReadOnly::new(0xf000_0104);
/// Board LEDs, one bit per LED.
pub const LED: WriteOnly = WriteOnly::new(0xf000_0300);
/// Seven-segment display value.
pub const SEG7: WriteOnly = WriteOnly::new(0xf000_0400);
/// Push-button state, decoded by [`read_buttons`].
pub const BTN: ReadOnly = ReadOnly::new(0xf000_0500);
/// Slide-switch state.
pub const SW: ReadOnly = ReadOnly::new(0xf000_0600);
/// Free-running LFSR, a cheap entropy source.
pub const LFSR: ReadOnly = ReadOnly::new(0xf000_0700);
/// Core clock frequency in Hz.
pub const CLK_FREQ: ReadOnly = ReadOnly::new(0xf000_2000);
/// Cycle counter since reset, low 32 bits.
pub const CYCLE_LO: ReadOnly = ReadOnly::new(0xf000_2100);
/// Cycle counter since reset, high 32 bits.
pub const CYCLE_HI: ReadOnly = ReadOnly::new(0xf000_2104);

bitflags! {
    /// Push buttons as reported by the [`BTN`] register.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Buttons: u32 {
        const CENTER = 1 << 0;
        const UP     = 1 << 1;
        const DOWN   = 1 << 2;
        const LEFT   = 1 << 3;
        const RIGHT  = 1 << 4;
    }
}

/// Reads the current button state.
pub fn read_buttons() -> Buttons {
    Buttons::from_bits_truncate(BTN.read())
}
