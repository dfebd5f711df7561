use tock_registers::{register_bitfields, register_structs, registers::*};

register_structs! {
    /// CPU interface register frame (GICv2).
    #[allow(non_snake_case)]
    pub CpuInterfaceReg {
        /// CPU Interface Control Register.
        (0x0000 => pub CTLR: ReadWrite<u32, CTLR::Register>),
        /// Interrupt Priority Mask Register.
        (0x0004 => pub PMR: ReadWrite<u32, PMR::Register>),
        /// Binary Point Register.
        (0x0008 => pub BPR: ReadWrite<u32>),
        /// Interrupt Acknowledge Register.
        (0x000c => pub IAR: ReadOnly<u32, IAR::Register>),
        /// End of Interrupt Register.
        (0x0010 => pub EOIR: WriteOnly<u32, EOIR::Register>),
        /// Running Priority Register.
        (0x0014 => pub RPR: ReadOnly<u32>),
        /// Highest Priority Pending Interrupt Register.
        (0x0018 => pub HPPIR: ReadOnly<u32>),
        (0x001c => _rsv0),
        /// CPU Interface Identification Register.
        (0x00fc => pub IIDR: ReadOnly<u32>),
        (0x0100 => @END),
    }
}

register_bitfields! [
    u32,
    /// CPU Interface Control Register
    pub CTLR [
        /// Enable Group 0 interrupts
        EnableGrp0 OFFSET(0) NUMBITS(1) [],
        /// Enable Group 1 interrupts
        EnableGrp1 OFFSET(1) NUMBITS(1) [],
        /// Acknowledge control for Group 1 interrupts
        AckCtl OFFSET(2) NUMBITS(1) [],
        /// Signal Group 0 interrupts with FIQ instead of IRQ
        FIQEn OFFSET(3) NUMBITS(1) [],
        /// Common binary point register
        CBPR OFFSET(4) NUMBITS(1) [],
        /// FIQ bypass disable for Group 0
        FIQBypDisGrp0 OFFSET(5) NUMBITS(1) [],
        /// IRQ bypass disable for Group 0
        IRQBypDisGrp0 OFFSET(6) NUMBITS(1) [],
        /// FIQ bypass disable for Group 1
        FIQBypDisGrp1 OFFSET(7) NUMBITS(1) [],
        /// IRQ bypass disable for Group 1
        IRQBypDisGrp1 OFFSET(8) NUMBITS(1) [],
    ],

    /// Interrupt Priority Mask Register
    pub PMR [
        Priority OFFSET(0) NUMBITS(8) [],
    ],

    /// Interrupt Acknowledge Register
    pub IAR [
        /// Interrupt ID
        InterruptID OFFSET(0) NUMBITS(10) [],
        /// Source CPU ID, SGIs only
        CPUID OFFSET(10) NUMBITS(3) [],
    ],

    /// End of Interrupt Register
    pub EOIR [
        /// End of interrupt ID
        EOIINTID OFFSET(0) NUMBITS(10) [],
        /// Source CPU ID, SGIs only
        CPUID OFFSET(10) NUMBITS(3) [],
    ],
];
