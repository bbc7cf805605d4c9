use crate::cpu::Cpu;

impl Cpu {
    // Covers the official NOP and the unofficial one-, two- and three-byte
    // variants; the operand bytes are consumed by the fetch logic either
    // way.
    pub(crate) fn nop(&mut self) -> u8 {
        0
    }
}
