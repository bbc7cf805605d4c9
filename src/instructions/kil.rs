use crate::cpu::Cpu;

impl Cpu {
    // KIL/JAM halts the real chip until reset. The latch lets the run loop
    // exit instead of spinning on the same address.
    pub(crate) fn kil(&mut self) -> u8 {
        self.halted = true;
        0
    }
}
