use crate::cpu::Cpu;

impl Cpu {
    pub(crate) fn tay(&mut self) -> u8 {
        self.y_register = self.accumulator;
        self.y_register
    }
}
