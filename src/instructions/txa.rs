use crate::cpu::Cpu;

impl Cpu {
    pub(crate) fn txa(&mut self) -> u8 {
        self.accumulator = self.x_register;
        self.accumulator
    }
}
