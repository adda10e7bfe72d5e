//! The fixed four-register file
//!
//! The simulated CPU exposes exactly four registers — EAX, EBX, ECX, EDX —
//! addressed by the [`Register`] enum rather than by name strings, so a typo
//! can't invent a fifth register. The roles the visualization teaches:
//!
//! - **EAX**: return-address label on push/pop/return, arithmetic result
//!   otherwise (low half of a widening multiply)
//! - **EBX**: base address for memory loads
//! - **ECX**: loop counter
//! - **EDX**: high half of a widening multiply

use super::value::RegValue;
use std::fmt;

/// One of the four simulated registers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Register {
    Eax,
    Ebx,
    Ecx,
    Edx,
}

impl Register {
    /// All registers in display order
    pub const ALL: [Register; 4] = [Register::Eax, Register::Ebx, Register::Ecx, Register::Edx];

    /// Conventional uppercase name
    pub fn name(self) -> &'static str {
        match self {
            Register::Eax => "EAX",
            Register::Ebx => "EBX",
            Register::Ecx => "ECX",
            Register::Edx => "EDX",
        }
    }

    fn index(self) -> usize {
        match self {
            Register::Eax => 0,
            Register::Ebx => 1,
            Register::Ecx => 2,
            Register::Edx => 3,
        }
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The register file: a fixed slot per [`Register`]
///
/// Slots always exist; there is no way to remove one. [`RegisterFile::reset`]
/// sets every slot back to integer zero.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegisterFile {
    slots: [RegValue; 4],
}

impl RegisterFile {
    pub fn new() -> Self {
        RegisterFile::default()
    }

    /// Read a register
    pub fn get(&self, reg: Register) -> &RegValue {
        &self.slots[reg.index()]
    }

    /// Write a register
    pub fn set(&mut self, reg: Register, value: impl Into<RegValue>) {
        self.slots[reg.index()] = value.into();
    }

    /// Read a register as an integer, treating a label as 0
    pub fn int(&self, reg: Register) -> i64 {
        self.get(reg).as_int().unwrap_or(0)
    }

    /// Reset every register to integer zero
    pub fn reset(&mut self) {
        self.slots = Default::default();
    }
}
