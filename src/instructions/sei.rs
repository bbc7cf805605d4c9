use crate::cpu::Cpu;
use crate::status::Status;

impl Cpu {
    pub(crate) fn sei(&mut self) -> u8 {
        self.status.insert(Status::INTERRUPT_DISABLE);
        0
    }
}

#[cfg(test)]
mod tests {
    use crate::cpu::test_support::cpu_with_program;

    #[test]
    fn sei_is_idempotent_after_reset() {
        // Interrupts are already disabled at power-on; P stays 0x24.
        let mut cpu = cpu_with_program(&[0x78]); // SEI
        cpu.step().unwrap();
        assert_eq!(cpu.status.bits(), 0x24);
    }
}
