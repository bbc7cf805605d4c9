use nes6502::bus::Bus;
use nes6502::cpu::Cpu;
use nes6502::rom::Rom;
use nes6502::trace::trace;

fn main() {
    let path = std::env::args().nth(1).unwrap_or_else(|| "nestest.nes".to_string());
    let rom_data = std::fs::read(&path).expect("failed to read ROM file");
    let rom = Rom::parse(&rom_data).expect("failed to parse ROM");

    let mut cpu = Cpu::new(Bus::new(rom));
    cpu.reset();
    // nestest's automated mode starts at 0xC000 instead of the reset vector.
    cpu.program_counter = 0xC000;

    if let Err(err) = cpu.run_with_callback(|cpu| println!("{}", trace(cpu))) {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}
