//! Small machine-code programs run end to end through `Cpu::run`.

use anyhow::{ensure, Context, Result};
use lr35902::{Bus, Cpu, CpuError, Flag, Interrupt, OpcodeTable, Registers};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn boot(program: &[u8]) -> Cpu {
    init_logger();
    let mut cpu = Cpu::dmg();
    cpu.load(0x0100, program);
    cpu
}

#[test]
fn multiply_by_repeated_addition() -> Result<()> {
    let mut cpu = boot(&[
        0x3E, 0x00, // LD A,0
        0x06, 0x07, // LD B,7
        0x0E, 0x06, // LD C,6
        0x80, // loop: ADD A,B
        0x0D, // DEC C
        0x20, 0xFC, // JR NZ,loop
        0xEA, 0x00, 0xC0, // LD (0xC000),A
        0x76, // HALT
    ]);

    let steps = cpu.run(1_000).context("multiply program")?;
    ensure!(cpu.halted(), "program did not reach HALT");
    assert_eq!(steps, 23);
    assert_eq!(cpu.read8(0xC000), 42);
    assert_eq!(cpu.regs.pc, 0x010E);
    Ok(())
}

#[test]
fn bcd_counter_with_daa() -> Result<()> {
    let mut cpu = boot(&[
        0xAF, // XOR A
        0x06, 0x0F, // LD B,15
        0xC6, 0x01, // loop: ADD A,1
        0x27, // DAA
        0x05, // DEC B
        0x20, 0xFA, // JR NZ,loop
        0x76, // HALT
    ]);

    cpu.run(1_000)?;
    assert_eq!(cpu.regs.a, 0x15);
    assert_eq!(cpu.flag(Flag::C), 0);
    Ok(())
}

#[test]
fn subroutine_calls_update_memory_through_hl() -> Result<()> {
    let mut cpu = boot(&[
        0x31, 0xFE, 0xFF, // LD SP,0xFFFE
        0x21, 0x00, 0xC0, // LD HL,0xC000
        0xCD, 0x00, 0x02, // CALL 0x0200
        0xCD, 0x00, 0x02, // CALL 0x0200
        0x76, // HALT
    ]);
    cpu.load(0x0200, &[0x34, 0xC9]); // INC (HL); RET

    let steps = cpu.run(100)?;
    assert_eq!(steps, 9);
    assert_eq!(cpu.read8(0xC000), 2);
    assert_eq!(cpu.regs.sp, 0xFFFE);
    assert_eq!(cpu.regs.pc, 0x010D);
    Ok(())
}

#[test]
fn prefixed_instructions_inside_a_program() -> Result<()> {
    let mut cpu = boot(&[
        0x3E, 0x81, // LD A,0x81
        0xCB, 0x07, // RLC A
        0xCB, 0x47, // BIT 0,A
        0xCB, 0xBF, // RES 7,A
        0x76, // HALT
    ]);

    cpu.run(100)?;
    assert_eq!(cpu.regs.a, 0x03);
    assert_eq!(cpu.flag(Flag::Z), 0);
    assert_eq!(cpu.flag(Flag::H), 1);
    assert_eq!(cpu.flag(Flag::C), 1);
    assert_eq!(cpu.regs.pc, 0x0109);
    Ok(())
}

#[test]
fn unknown_opcode_stops_the_run() {
    let mut cpu = boot(&[0x00, 0x00, 0xFD, 0x00]);

    let err = cpu.run(100).unwrap_err();
    assert_eq!(
        err,
        CpuError::UnknownInstruction {
            table: OpcodeTable::Primary,
            bits: "11111101".to_string(),
        }
    );
    assert_eq!(cpu.regs.pc, 0x0102);
}

#[test]
fn program_can_raise_and_mask_interrupts() -> Result<()> {
    let mut cpu = boot(&[
        0xF3, // DI
        0x3E, 0x05, // LD A,0b101
        0xE0, 0xFF, // LDH (IE),A
        0x3E, 0x1F, // LD A,0x1F
        0xE0, 0x0F, // LDH (IF),A
        0xFB, // EI
        0x76, // HALT
    ]);

    cpu.run(100)?;
    assert!(cpu.ime());
    let bus = cpu.bus_mut();
    assert_eq!(
        bus.pending_interrupts(),
        vec![Interrupt::VBlank, Interrupt::Timer]
    );
    assert!(bus.is_interrupt_requested(Interrupt::Serial));
    assert!(!bus.is_interrupt_enabled(Interrupt::Serial));
    Ok(())
}

/// Bus that records every write, to show `Cpu` runs over any `Bus`.
#[derive(Default)]
struct RecordingBus {
    memory: Vec<u8>,
    writes: Vec<(u16, u8)>,
}

impl Bus for RecordingBus {
    fn read8(&mut self, addr: u16) -> u8 {
        self.memory[addr as usize]
    }

    fn write8(&mut self, addr: u16, value: u8) {
        self.writes.push((addr, value));
        self.memory[addr as usize] = value;
    }
}

#[test]
fn custom_bus_sees_stack_writes_high_byte_first() -> Result<()> {
    init_logger();
    let bus = RecordingBus {
        memory: vec![0; 0x10000],
        writes: Vec::new(),
    };
    let mut cpu = Cpu::with_bus(bus);
    cpu.regs = Registers::builder().sp(0xD000).pc(0x4000).build();
    cpu.bus_mut().memory[0x4000..0x4003].copy_from_slice(&[0xCD, 0x34, 0x12]);

    cpu.step()?;
    assert_eq!(cpu.regs.pc, 0x1234);
    assert_eq!(cpu.bus().writes, vec![(0xCFFF, 0x40), (0xCFFE, 0x03)]);
    Ok(())
}
