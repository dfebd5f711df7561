use core::fmt;

use bitflags::bitflags;

/// How an interrupt line is sensed by the distributor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Signal level (the line stays asserted while the source is active).
    Level,
    /// Signal transition.
    Edge,
}

/// Security grouping of an interrupt line.
///
/// Group 0 interrupts belong to the secure state, Group 1 to the
/// non-secure state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecureGroup {
    Secure,
    NonSecure,
}

bitflags! {
    /// Trigger-type encoding used by the dispatcher side of the boot
    /// loader, one sense flag per value (same encoding as the Linux
    /// `IRQ_TYPE_*` constants carried in device trees).
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TriggerFlags: u32 {
        const EDGE_RISING = 0x1;
        const EDGE_FALLING = 0x2;
        const LEVEL_HIGH = 0x4;
        const LEVEL_LOW = 0x8;
    }
}

/// Errors reported by the driver. Callers decide whether a failure is
/// fatal to the boot; nothing here is retried internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IrqError {
    /// The interrupt ID is not below the distributor's line count.
    OutOfRange(u32),
    /// The dispatcher passed a trigger-type word this controller cannot
    /// express.
    UnsupportedTriggerType(u32),
}

impl fmt::Display for IrqError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IrqError::OutOfRange(irq) => write!(f, "interrupt {irq} out of range"),
            IrqError::UnsupportedTriggerType(raw) => {
                write!(f, "unsupported trigger type {raw:#x}")
            }
        }
    }
}
