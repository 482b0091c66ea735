// PPU Benchmarks
// Performance benchmarks for PPU rendering operations

use criterion::{criterion_group, criterion_main, Criterion};
use nesframe::cartridge::Cartridge;
use nesframe::Ppu;
use std::hint::black_box;

fn test_cartridge() -> Cartridge {
    let mut cart = Cartridge::blank_nrom();
    cart.chr_rom.fill(0xAA); // test pattern so background/sprite draw isn't all-zero tiles
    cart
}

/// One full frame of PPU stepping: 262 scanlines * 341 cycles = 89,342
/// cycles, the unit the bus hands the PPU once per CPU instruction.
fn bench_ppu_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("ppu_rendering");
    group.sample_size(20);

    group.bench_function("full_frame_via_step", |b| {
        let mut ppu = Ppu::new(test_cartridge());
        ppu.write_register(1, 0b0001_1110); // PPUMASK: show background and sprites

        b.iter(|| {
            ppu.step(black_box(89_342));
            black_box(ppu.framebuffer());
        });
    });

    group.finish();
}

/// PPU step at different granularities, the main performance-critical path.
fn bench_ppu_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("ppu_step");

    group.bench_function("single_step", |b| {
        let mut ppu = Ppu::new(test_cartridge());
        b.iter(|| {
            black_box(ppu.step(black_box(1)));
        });
    });

    group.bench_function("scanline_341_cycles", |b| {
        let mut ppu = Ppu::new(test_cartridge());
        b.iter(|| {
            ppu.step(black_box(341));
        });
    });

    group.finish();
}

/// Register access patterns: the CPU-visible `$2000-$2007` window.
fn bench_ppu_registers(c: &mut Criterion) {
    let mut group = c.benchmark_group("ppu_registers");

    group.bench_function("ppuctrl_write", |b| {
        let mut ppu = Ppu::new(test_cartridge());
        b.iter(|| {
            ppu.write_register(0, black_box(0b1001_0000));
        });
    });

    group.bench_function("ppustatus_read", |b| {
        let mut ppu = Ppu::new(test_cartridge());
        b.iter(|| {
            black_box(ppu.read_register(2));
        });
    });

    group.bench_function("ppudata_write_sequence", |b| {
        let mut ppu = Ppu::new(test_cartridge());
        b.iter(|| {
            ppu.write_register(6, 0x20); // high byte of VRAM address
            ppu.write_register(6, 0x00); // low byte
            for i in 0..32u8 {
                ppu.write_register(7, i);
            }
        });
    });

    group.finish();
}

/// OAM access via `$2003`/`$2004`.
fn bench_ppu_oam(c: &mut Criterion) {
    let mut group = c.benchmark_group("ppu_oam");

    group.bench_function("oam_write", |b| {
        let mut ppu = Ppu::new(test_cartridge());
        b.iter(|| {
            ppu.write_register(3, 0); // OAMADDR = 0
            for i in 0..=255u8 {
                ppu.write_register(4, i); // OAMDATA
            }
        });
    });

    group.bench_function("oam_read", |b| {
        let mut ppu = Ppu::new(test_cartridge());
        b.iter(|| {
            black_box(ppu.read_register(4));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_ppu_rendering, bench_ppu_step, bench_ppu_registers, bench_ppu_oam);
criterion_main!(benches);
