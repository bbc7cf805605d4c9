use crate::cpu::Cpu;
use crate::status::Status;

impl Cpu {
    pub(crate) fn cli(&mut self) -> u8 {
        self.status.remove(Status::INTERRUPT_DISABLE);
        0
    }
}
