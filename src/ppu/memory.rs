//! Raw PPU memory-map access (`$0000-$3FFF`): pattern tables delegate to the
//! mapper, nametables apply cartridge mirroring, and palette writes apply
//! the `$3F00`/`$3F10` background-color alias. This is the address space
//! PPUDATA reads and writes through; register-level semantics (buffering,
//! latches) live in [`super::mod`].

use super::constants::NAMETABLE_SIZE;
use super::Ppu;
use crate::cartridge::Mirroring;

impl Ppu {
    /// Maps a `$2000-$2FFF` nametable address to one of the two physical
    /// 1-KiB VRAM banks the NES actually has, per cartridge mirroring:
    /// horizontal aliases logical tables {0,1} and {2,3}; vertical aliases
    /// {0,2} and {1,3}.
    pub(super) fn mirror_nametable_addr(&self, addr: u16) -> usize {
        let addr = (addr & 0x0FFF) as usize;
        let table = addr / NAMETABLE_SIZE;
        let offset = addr % NAMETABLE_SIZE;

        let physical = match self.mirroring {
            Mirroring::Horizontal => match table {
                0 | 1 => 0,
                _ => 1,
            },
            Mirroring::Vertical => match table {
                0 | 2 => 0,
                _ => 1,
            },
        };

        physical * NAMETABLE_SIZE + offset
    }

    /// `$3F10`/`$3F14`/`$3F18`/`$3F1C` alias `$3F00`/`$3F04`/`$3F08`/`$3F0C`
    /// — sprite palette entry 0 is always the universal background color.
    pub(super) fn mirror_palette_addr(&self, addr: u16) -> usize {
        let addr = (addr & 0x001F) as usize;
        if addr >= 16 && addr % 4 == 0 {
            addr - 16
        } else {
            addr
        }
    }

    pub(crate) fn mem_read(&self, addr: u16) -> u8 {
        let addr = addr & 0x3FFF;
        match addr {
            0x0000..=0x1FFF => self.mapper.ppu_read(addr),
            0x2000..=0x2FFF => self.nametables[self.mirror_nametable_addr(addr)],
            0x3000..=0x3EFF => self.nametables[self.mirror_nametable_addr(addr - 0x1000)],
            0x3F00..=0x3FFF => self.palette[self.mirror_palette_addr(addr)],
            _ => unreachable!(),
        }
    }

    pub(crate) fn mem_write(&mut self, addr: u16, data: u8) {
        let addr = addr & 0x3FFF;
        match addr {
            0x0000..=0x1FFF => self.mapper.ppu_write(addr, data),
            0x2000..=0x2FFF => {
                let idx = self.mirror_nametable_addr(addr);
                self.nametables[idx] = data;
            }
            0x3000..=0x3EFF => {
                let idx = self.mirror_nametable_addr(addr - 0x1000);
                self.nametables[idx] = data;
            }
            0x3F00..=0x3FFF => {
                let idx = self.mirror_palette_addr(addr);
                self.palette[idx] = data;
                // $3F00/$3F10 alias: a write through either mirror must be
                // visible at both so a read from the other returns the same
                // value (see the testable palette-aliasing property).
                if idx == 0 {
                    self.palette[0x10] = data;
                } else if idx == 0x10 {
                    self.palette[0] = data;
                }
            }
            _ => unreachable!(),
        }
    }
}
