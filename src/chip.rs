//! Interrupt-chip capability consumed by the boot loader's generic
//! dispatcher.

use crate::define::{IrqError, Trigger, TriggerFlags};
use crate::gic::Gic;

/// Contract a generic interrupt dispatcher registers once and drives as a
/// trait object; the dispatcher owns the decision of when each operation
/// runs.
pub trait IrqChip {
    fn name(&self) -> &'static str;
    fn irq_enable(&self, irq: u32) -> Result<(), IrqError>;
    fn irq_disable(&self, irq: u32) -> Result<(), IrqError>;
    fn irq_set_type(&self, irq: u32, flow: TriggerFlags) -> Result<(), IrqError>;
}

impl IrqChip for Gic {
    fn name(&self) -> &'static str {
        "gic"
    }

    fn irq_enable(&self, irq: u32) -> Result<(), IrqError> {
        Gic::irq_enable(self, irq)
    }

    fn irq_disable(&self, irq: u32) -> Result<(), IrqError> {
        Gic::irq_disable(self, irq)
    }

    /// Both edge senses collapse to edge triggering and both level senses
    /// to level triggering; the GICv2 distributor cannot express the
    /// polarity. Anything else is rejected before the config register is
    /// touched.
    fn irq_set_type(&self, irq: u32, flow: TriggerFlags) -> Result<(), IrqError> {
        let trigger = if flow == TriggerFlags::EDGE_RISING || flow == TriggerFlags::EDGE_FALLING {
            Trigger::Edge
        } else if flow == TriggerFlags::LEVEL_HIGH || flow == TriggerFlags::LEVEL_LOW {
            Trigger::Level
        } else {
            return Err(IrqError::UnsupportedTriggerType(flow.bits()));
        };
        self.set_trigger(irq, trigger)
    }
}
