use log::{debug, warn};
use tock_registers::interfaces::*;

use crate::define::{IrqError, SecureGroup, Trigger};
use crate::reg::{
    IrqBitRead, IrqBitWrite,
    gicc::{self, CpuInterfaceReg},
    gicd::DistributorReg,
};

/// Routing target used when probing finds no valid CPU bits: core 0.
const DEFAULT_CPU_MASK: u8 = 0x01;

/// Boot-time GICv2 driver over one distributor/CPU-interface pair.
///
/// All configuration runs single-threaded during early boot; no locking
/// is done around the read-modify-write sequences.
pub struct Gic {
    gicd: *mut DistributorReg,
    gicc: *mut CpuInterfaceReg,
    /// Valid distributor routing targets, one bit per CPU interface.
    /// Resolved once by [`Gic::init`].
    cpu_mask: u8,
    /// Interrupt line count reported by the distributor; every per-irq
    /// operation rejects ids at or above this.
    irq_lines: u32,
}

unsafe impl Send for Gic {}

impl Gic {
    /// `gicd`: Distributor register base address. `gicc`: CPU interface
    /// register base address.
    ///
    /// The driver is inert until [`Gic::init`] runs: the line count starts
    /// at zero, so every per-irq operation reports out of range.
    ///
    /// # Safety
    ///
    /// The caller must ensure both pointers are valid mappings of the
    /// GICv2 register frames for the whole lifetime of the driver.
    pub const unsafe fn new(gicd: *mut u8, gicc: *mut u8) -> Self {
        Self {
            gicd: gicd as _,
            gicc: gicc as _,
            cpu_mask: DEFAULT_CPU_MASK,
            irq_lines: 0,
        }
    }

    fn gicd(&self) -> &DistributorReg {
        unsafe { &*self.gicd }
    }

    fn gicc(&self) -> &CpuInterfaceReg {
        unsafe { &*self.gicc }
    }

    /// One-time initialization: read the supported line count and resolve
    /// the CPU target mask. Must run before the first [`Gic::irq_enable`].
    pub fn init(&mut self) {
        self.irq_lines = self.gicd().irq_lines();
        self.cpu_mask = self.probe_cpu_mask();
        debug!(
            "GICv2 @ {:p}: {} interrupt lines, cpu mask {:#04x}",
            self.gicd, self.irq_lines, self.cpu_mask
        );
    }

    /// Discover which CPU bits the distributor accepts as routing targets.
    ///
    /// The target bytes of the first 32 interrupts reset to the set of
    /// implemented CPU interfaces, so each probed word is folded down to
    /// one byte and the first non-zero fold wins.
    fn probe_cpu_mask(&self) -> u8 {
        for i in 0..8 {
            let mut word = self.gicd().ITARGETSR[i].get();
            word |= word >> 16;
            word |= word >> 8;
            if word & 0xff != 0 {
                return (word & 0xff) as u8;
            }
        }
        warn!("GIC CPU mask not found, routing to core 0");
        DEFAULT_CPU_MASK
    }

    fn check(&self, irq: u32) -> Result<(), IrqError> {
        if irq >= self.irq_lines {
            return Err(IrqError::OutOfRange(irq));
        }
        Ok(())
    }

    /// Interrupt lines supported by the distributor.
    pub fn irq_max(&self) -> u32 {
        self.irq_lines
    }

    /// The resolved CPU target mask.
    pub fn cpu_mask(&self) -> u8 {
        self.cpu_mask
    }

    /// Configure level- or edge-sensitivity for an interrupt line.
    pub fn set_trigger(&self, irq: u32, trigger: Trigger) -> Result<(), IrqError> {
        self.check(irq)?;
        let index = (irq / 16) as usize;
        let bit = 1 << ((irq % 16) * 2 + 1);
        let old = self.gicd().ICFGR[index].get();
        self.gicd().ICFGR[index].set(match trigger {
            Trigger::Edge => old | bit,
            Trigger::Level => old & !bit,
        });
        Ok(())
    }

    /// Mark an interrupt pending. Single write to the set-pending bank;
    /// other interrupts in the word are unaffected by hardware contract.
    pub fn set_pending(&self, irq: u32) -> Result<(), IrqError> {
        self.check(irq)?;
        self.gicd().ISPENDR.write_irq_bit(irq);
        Ok(())
    }

    /// Clear a pending interrupt.
    pub fn clear_pending(&self, irq: u32) -> Result<(), IrqError> {
        self.check(irq)?;
        self.gicd().ICPENDR.write_irq_bit(irq);
        Ok(())
    }

    pub fn is_pending(&self, irq: u32) -> Result<bool, IrqError> {
        self.check(irq)?;
        Ok(self.gicd().ISPENDR.irq_bit(irq))
    }

    /// Assign an interrupt to the secure (Group 0) or non-secure
    /// (Group 1) state via the group register.
    pub fn set_secure(&self, irq: u32, group: SecureGroup) -> Result<(), IrqError> {
        self.check(irq)?;
        self.gicd()
            .IGROUPR
            .modify_irq_bit(irq, group == SecureGroup::NonSecure);
        Ok(())
    }

    /// Enable an interrupt line and route it to the resolved CPU targets.
    ///
    /// Forces the CPU interface onto the plain IRQ signal path (FIQEn
    /// cleared), sets the enable bit, then rewrites only this interrupt's
    /// byte lane of the packed target word.
    pub fn irq_enable(&self, irq: u32) -> Result<(), IrqError> {
        self.check(irq)?;
        self.gicc().CTLR.modify(gicc::CTLR::FIQEn::CLEAR);
        self.gicd().ISENABLER.write_irq_bit(irq);

        let index = (irq / 4) as usize;
        let shift = (irq % 4) * 8;
        let word = self.gicd().ITARGETSR[index].get();
        self.gicd().ITARGETSR[index]
            .set((word & !(0xff << shift)) | ((self.cpu_mask as u32) << shift));
        Ok(())
    }

    /// Disable an interrupt line. Touches only the clear-enable bank.
    pub fn irq_disable(&self, irq: u32) -> Result<(), IrqError> {
        self.check(irq)?;
        self.gicd().ICENABLER.write_irq_bit(irq);
        Ok(())
    }

    pub fn irq_is_enabled(&self, irq: u32) -> Result<bool, IrqError> {
        self.check(irq)?;
        Ok(self.gicd().ISENABLER.irq_bit(irq))
    }

    /// Mask interrupts whose priority value is at or above `priority`
    /// (0xff admits everything).
    pub fn set_priority_mask(&self, priority: u8) {
        self.gicc()
            .PMR
            .write(gicc::PMR::Priority.val(priority as u32));
    }

    /// Claim the interrupt currently signaled to this CPU and return its
    /// id. Must precede the handler for that interrupt instance.
    pub fn acknowledge(&self) -> u32 {
        self.gicc().IAR.read(gicc::IAR::InterruptID)
    }

    /// Signal end of service for an acknowledged interrupt. The hardware
    /// tracks outstanding acknowledges per priority level, so pairs must
    /// complete in acknowledge order within a level.
    pub fn end_interrupt(&self, irq: u32) {
        self.gicc().EOIR.write(gicc::EOIR::EOIINTID.val(irq));
    }
}
