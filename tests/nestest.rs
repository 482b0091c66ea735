// nestest.nes conformance test (spec §8 scenario 1): runs the canonical
// nestest ROM in automation mode (PC forced to $C000) and compares this
// core's trace output, line for line, against nestest's golden log.
//
// The fixture files aren't checked into this repository; point
// NESTEST_ROM_PATH / NESTEST_LOG_PATH at a local copy to run this test.

mod common;

use nesframe::debug::trace;
use nesframe::{Bus, Cpu};
use std::path::PathBuf;

fn fixture_path(env_var: &str, default_name: &str) -> PathBuf {
    std::env::var(env_var).map(PathBuf::from).unwrap_or_else(|_| PathBuf::from("tests/fixtures").join(default_name))
}

#[test]
#[ignore] // run with: cargo test --test nestest -- --ignored --nocapture
fn nestest_trace_matches_golden_log() {
    let rom_path = fixture_path("NESTEST_ROM_PATH", "nestest.nes");
    let log_path = fixture_path("NESTEST_LOG_PATH", "nestest.log");

    let rom_bytes = std::fs::read(&rom_path).expect("failed to read nestest.nes");
    let golden_log = std::fs::read_to_string(&log_path).expect("failed to read nestest.log");
    let golden_lines: Vec<&str> = golden_log.lines().collect();

    // nestest's header declares 1 PRG bank but the ROM is meant to run
    // mirrored into both halves of $8000-$FFFF; `Cartridge::from_ines_bytes`
    // already mirrors a single 16 KiB bank via modulo in `Mapper0::cpu_read`,
    // so loading it straight through is equivalent to the mirrored-load the
    // original test harness does by hand.
    let cartridge = nesframe::cartridge::Cartridge::from_ines_bytes(&rom_bytes).expect("failed to parse nestest.nes");
    let mut bus = Bus::new(cartridge);
    let mut cpu = Cpu::new();
    cpu.pc = 0xC000; // nestest's automation entry point
    cpu.cycles = 7; // golden log starts counting from cycle 7

    let mut mismatches = Vec::new();
    for (instruction_num, golden_line) in golden_lines.iter().enumerate() {
        let mut trace_line = String::new();
        trace::format_line(&cpu, &bus, &peek_bytecode(&cpu, &bus), &mut trace_line);

        if !registers_and_cycles_match(&trace_line, golden_line) {
            mismatches.push((instruction_num + 1, trace_line.clone(), golden_line.to_string()));
            if mismatches.len() <= 10 {
                println!("mismatch at instruction {}:\n  expected: {golden_line}\n  actual:   {trace_line}", instruction_num + 1);
            }
        }

        let cycles = cpu.step(&mut bus, None);
        if cycles == 0 {
            break; // JAM: nestest's automation suite ends on an illegal opcode
        }

        let result_02 = bus.peek(0x02);
        let result_03 = bus.peek(0x03);
        if result_02 != 0 || result_03 != 0 {
            panic!("nestest reported failure: $02={result_02:02X} $03={result_03:02X}");
        }
    }

    assert!(mismatches.is_empty(), "{} trace line(s) diverged from the golden log", mismatches.len());
}

fn peek_bytecode(cpu: &Cpu, bus: &Bus) -> nesframe::cpu::Bytecode {
    use nesframe::cpu::opcodes::OPCODE_TABLE;
    let opcode = bus.peek(cpu.pc);
    let entry = &OPCODE_TABLE[opcode as usize];
    let len = entry.mode.byte_len();
    let mut bytes = [opcode, 0, 0];
    for i in 1..len {
        bytes[i as usize] = bus.peek(cpu.pc.wrapping_add(i as u16));
    }
    nesframe::cpu::Bytecode { opcode, mnemonic: entry.mnemonic, mode: entry.mode, bytes, len }
}

/// Compares everything up to and including `SP:xx`, then the `CYC:` value
/// separately — nestest.log also carries a `PPU:x,y` column this core's
/// coarse per-scanline PPU model can't reproduce dot-for-dot.
fn registers_and_cycles_match(actual: &str, expected: &str) -> bool {
    let actual_registers = actual.split("SP:").next().unwrap_or(actual);
    let expected_registers = expected.split("SP:").next().unwrap_or(expected);
    let actual_sp = actual.find("SP:").map(|i| &actual[i..i + 5]);
    let expected_sp = expected.find("SP:").map(|i| &expected[i..i + 5]);
    let actual_cyc = actual.split("CYC:").nth(1).map(str::trim);
    let expected_cyc = expected.split("CYC:").nth(1).map(str::trim);

    actual_registers == expected_registers && actual_sp == expected_sp && actual_cyc == expected_cyc
}

#[test]
fn trace_formatter_smoke_test() {
    let mut cart = nesframe::cartridge::Cartridge::blank_nrom();
    cart.prg_rom[0] = 0xA9; // LDA #$42
    cart.prg_rom[1] = 0x42;
    let mut bus = Bus::new(cart);
    let mut cpu = Cpu::new();
    cpu.pc = 0x8000;

    let mut trace_line = String::new();
    trace::format_line(&cpu, &bus, &peek_bytecode(&cpu, &bus), &mut trace_line);
    assert!(trace_line.starts_with("8000  A9 42"));
    assert!(trace_line.contains("LDA #$42"));

    cpu.step(&mut bus, None);
    assert_eq!(cpu.a, 0x42);
}
