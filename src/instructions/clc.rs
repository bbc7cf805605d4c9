use crate::cpu::Cpu;
use crate::status::Status;

impl Cpu {
    pub(crate) fn clc(&mut self) -> u8 {
        self.status.remove(Status::CARRY);
        0
    }
}
