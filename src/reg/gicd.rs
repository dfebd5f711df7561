use tock_registers::{interfaces::*, register_bitfields, register_structs, registers::*};

register_structs! {
    /// Distributor register frame (GICv2, 4 KiB).
    #[allow(non_snake_case)]
    pub DistributorReg {
        /// Distributor Control Register.
        (0x0000 => pub CTLR: ReadWrite<u32>),
        /// Interrupt Controller Type Register.
        (0x0004 => pub TYPER: ReadOnly<u32, TYPER::Register>),
        /// Distributor Implementer Identification Register.
        (0x0008 => pub IIDR: ReadOnly<u32>),
        (0x000c => _rsv0),
        /// Interrupt Group Registers.
        (0x0080 => pub IGROUPR: [ReadWrite<u32>; 0x20]),
        /// Interrupt Set-Enable Registers (write one to set).
        (0x0100 => pub ISENABLER: [ReadWrite<u32>; 0x20]),
        /// Interrupt Clear-Enable Registers (write one to clear).
        (0x0180 => pub ICENABLER: [ReadWrite<u32>; 0x20]),
        /// Interrupt Set-Pending Registers (write one to set).
        (0x0200 => pub ISPENDR: [ReadWrite<u32>; 0x20]),
        /// Interrupt Clear-Pending Registers (write one to clear).
        (0x0280 => pub ICPENDR: [ReadWrite<u32>; 0x20]),
        /// Interrupt Set-Active Registers.
        (0x0300 => pub ISACTIVER: [ReadWrite<u32>; 0x20]),
        /// Interrupt Clear-Active Registers.
        (0x0380 => pub ICACTIVER: [ReadWrite<u32>; 0x20]),
        /// Interrupt Priority Registers.
        (0x0400 => pub IPRIORITYR: [ReadWrite<u8>; 1024]),
        /// Interrupt Processor Targets Registers, four 8-bit CPU target
        /// fields packed per word.
        (0x0800 => pub ITARGETSR: [ReadWrite<u32>; 0x100]),
        /// Interrupt Configuration Registers, 2-bit fields, 16 interrupts
        /// per word.
        (0x0c00 => pub ICFGR: [ReadWrite<u32>; 0x40]),
        (0x0d00 => _rsv1),
        (0x1000 => @END),
    }
}

impl DistributorReg {
    /// Total interrupt lines supported; ITLinesNumber encodes N/32 - 1.
    pub fn irq_lines(&self) -> u32 {
        (self.TYPER.read(TYPER::ITLinesNumber) + 1) * 32
    }
}

register_bitfields! [
    u32,
    /// Interrupt Controller Type Register
    pub TYPER [
        /// Number of interrupt lines supported, in units of 32
        ITLinesNumber OFFSET(0) NUMBITS(5) [],
        /// Number of CPU interfaces implemented minus one
        CPUNumber OFFSET(5) NUMBITS(3) [],
        /// Whether the GIC implements the Security Extensions
        SecurityExtn OFFSET(10) NUMBITS(1) [],
        /// Number of Lockable Shared Peripheral Interrupts
        LSPI OFFSET(11) NUMBITS(5) [],
    ],
];
