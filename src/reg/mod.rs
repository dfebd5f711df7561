use tock_registers::{interfaces::*, registers::*};

pub mod gicc;
pub mod gicd;

/// Bit addressing for the distributor banks that pack one interrupt per
/// bit, 32 per word (enable, pending, group).
pub(crate) trait IrqBitWrite {
    /// Write only the interrupt's bit. Valid for the write-one-to-set and
    /// write-one-to-clear banks, where zero bits leave their interrupts
    /// untouched.
    fn write_irq_bit(&self, irq: u32);
    /// Read-modify-write the interrupt's bit. For plain read-write banks
    /// such as IGROUPR.
    fn modify_irq_bit(&self, irq: u32, set: bool);
}

pub(crate) trait IrqBitRead {
    fn irq_bit(&self, irq: u32) -> bool;
}

impl IrqBitWrite for [ReadWrite<u32>] {
    fn write_irq_bit(&self, irq: u32) {
        self[(irq / 32) as usize].set(1 << (irq % 32));
    }

    fn modify_irq_bit(&self, irq: u32, set: bool) {
        let index = (irq / 32) as usize;
        let bit = 1 << (irq % 32);
        let old = self[index].get();
        self[index].set(if set { old | bit } else { old & !bit });
    }
}

impl IrqBitRead for [ReadWrite<u32>] {
    fn irq_bit(&self, irq: u32) -> bool {
        self[(irq / 32) as usize].get() & (1 << (irq % 32)) != 0
    }
}
