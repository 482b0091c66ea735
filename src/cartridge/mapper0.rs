//! Mapper 0 (NROM): fixed PRG bank(s), fixed CHR ROM/RAM, no bank switching.
//! The only mapper this core implements.

use super::{Cartridge, Mirroring};

pub struct Mapper0 {
    prg_rom: Vec<u8>,
    chr_mem: Vec<u8>,
    chr_is_ram: bool,
    mirroring: Mirroring,
}

impl Mapper0 {
    pub fn new(cartridge: Cartridge) -> Self {
        let chr_is_ram = cartridge.header.chr_rom_banks == 0;
        Mapper0 {
            prg_rom: cartridge.prg_rom,
            chr_mem: cartridge.chr_rom,
            chr_is_ram,
            mirroring: cartridge.mirroring,
        }
    }

    /// `0x8000..=0xFFFF`; a 16-KiB ROM is mirrored into both halves of the
    /// 32-KiB window via modulo.
    pub fn cpu_read(&self, address: u16) -> u8 {
        let index = (address - 0x8000) as usize;
        self.prg_rom[index % self.prg_rom.len()]
    }

    /// PRG ROM is read-only; writes are silently ignored.
    pub fn cpu_write(&mut self, _address: u16, _value: u8) {}

    pub fn ppu_read(&self, address: u16) -> u8 {
        self.chr_mem[address as usize]
    }

    pub fn ppu_write(&mut self, address: u16, value: u8) {
        if self.chr_is_ram {
            self.chr_mem[address as usize] = value;
        }
    }

    pub fn mirroring(&self) -> Mirroring {
        self.mirroring
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartridge::INesHeader;

    fn cartridge_with_prg(prg: Vec<u8>) -> Cartridge {
        let header = INesHeader {
            prg_rom_banks: (prg.len() / (16 * 1024)) as u8,
            chr_rom_banks: 1,
            mirroring: Mirroring::Horizontal,
            contains_prg_ram: false,
            contains_trainer: false,
            ignore_mirroring_control: false,
            mapper_number: 0,
            prg_ram_banks: 0,
            tv_system: crate::cartridge::TvSystem::Ntsc,
        };
        Cartridge { header, prg_rom: prg, chr_rom: vec![0; 8 * 1024], mirroring: Mirroring::Horizontal }
    }

    #[test]
    fn sixteen_kib_prg_mirrors_into_upper_half() {
        let mut prg = vec![0u8; 16 * 1024];
        prg[0] = 0xAB;
        let mapper = Mapper0::new(cartridge_with_prg(prg));
        assert_eq!(mapper.cpu_read(0x8000), 0xAB);
        assert_eq!(mapper.cpu_read(0xC000), 0xAB);
    }

    #[test]
    fn chr_ram_is_writable_when_no_chr_rom_banks_declared() {
        let header = INesHeader {
            prg_rom_banks: 1,
            chr_rom_banks: 0,
            mirroring: Mirroring::Horizontal,
            contains_prg_ram: false,
            contains_trainer: false,
            ignore_mirroring_control: false,
            mapper_number: 0,
            prg_ram_banks: 0,
            tv_system: crate::cartridge::TvSystem::Ntsc,
        };
        let cartridge = Cartridge {
            header,
            prg_rom: vec![0; 16 * 1024],
            chr_rom: vec![0; 8 * 1024],
            mirroring: Mirroring::Horizontal,
        };
        let mut mapper = Mapper0::new(cartridge);
        assert!(mapper.chr_is_ram);
        mapper.ppu_write(0x0010, 0x42);
        assert_eq!(mapper.ppu_read(0x0010), 0x42);
    }
}
