use crate::cpu::Cpu;
use crate::status::Status;

impl Cpu {
    pub(crate) fn sed(&mut self) -> u8 {
        self.status.insert(Status::DECIMAL);
        0
    }
}

#[cfg(test)]
mod tests {
    use crate::cpu::test_support::cpu_with_program;
    use crate::status::Status;

    #[test]
    fn sed_sets_the_decimal_flag() {
        let mut cpu = cpu_with_program(&[0xF8]); // SED
        cpu.step().unwrap();
        assert!(cpu.status.contains(Status::DECIMAL));
        assert_eq!(cpu.status.bits(), 0x2C);
    }
}
