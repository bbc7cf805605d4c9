use crate::cpu::Cpu;
use crate::status::Status;

impl Cpu {
    // The stack copy of P always carries the break and unused bits high.
    pub(crate) fn php(&mut self) -> u8 {
        self.push((self.status | Status::BREAK | Status::UNUSED).bits());
        0
    }
}

#[cfg(test)]
mod tests {
    use crate::cpu::test_support::cpu_with_program;

    #[test]
    fn php_pushes_p_with_b_and_u_set() {
        let mut cpu = cpu_with_program(&[0x08]); // PHP
        cpu.step().unwrap();
        // P is 0x24 after reset; the pushed copy gains 0x30.
        assert_eq!(cpu.read_u8(0x01FD), 0x34);
        // The in-register value is unchanged.
        assert_eq!(cpu.status.bits(), 0x24);
    }
}
