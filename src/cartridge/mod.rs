//! iNES cartridge loading. Only mapper 0 (NROM) is supported; anything else
//! is a fatal [`EmulatorError::UnsupportedMapper`] at load time, matching the
//! component design's stated non-goal of bank-switching mappers.

pub mod mapper0;

use crate::error::EmulatorError;

const HEADER_SIZE: usize = 16;
const TRAINER_SIZE: usize = 512;
const PRG_BANK_SIZE: usize = 16 * 1024;
const CHR_BANK_SIZE: usize = 8 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mirroring {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TvSystem {
    Ntsc,
    Pal,
}

/// Parsed iNES header fields, kept around for diagnostics even though this
/// core only acts on a handful of them (mapper number, mirroring, sizes).
#[derive(Debug, Clone, Copy)]
pub struct INesHeader {
    pub prg_rom_banks: u8,
    pub chr_rom_banks: u8,
    pub mirroring: Mirroring,
    pub contains_prg_ram: bool,
    pub contains_trainer: bool,
    pub ignore_mirroring_control: bool,
    pub mapper_number: u8,
    pub prg_ram_banks: u8,
    pub tv_system: TvSystem,
}

/// A loaded cartridge image: header plus PRG/CHR banks, ready to be handed
/// to a mapper.
pub struct Cartridge {
    pub header: INesHeader,
    pub prg_rom: Vec<u8>,
    pub chr_rom: Vec<u8>,
    pub mirroring: Mirroring,
}

impl Cartridge {
    /// Parses a full iNES file: 16-byte header, optional 512-byte trainer
    /// (skipped — PRG-RAM is not supported by this core, per the component
    /// design), PRG ROM, then CHR ROM. Field layout follows the iNES
    /// flags6/flags7 byte exactly.
    pub fn from_ines_bytes(bytes: &[u8]) -> Result<Cartridge, EmulatorError> {
        if bytes.len() < HEADER_SIZE {
            return Err(EmulatorError::UnparseableRom(
                "file shorter than the 16-byte iNES header".into(),
            ));
        }

        let flags6 = bytes[6];
        let flags7 = bytes[7];
        let mirroring = if flags6 & 0x01 != 0 {
            Mirroring::Vertical
        } else {
            Mirroring::Horizontal
        };
        let header = INesHeader {
            prg_rom_banks: bytes[4],
            chr_rom_banks: bytes[5],
            mirroring,
            contains_prg_ram: (flags6 >> 1) & 0x01 != 0,
            contains_trainer: (flags6 >> 2) & 0x01 != 0,
            ignore_mirroring_control: (flags6 >> 3) & 0x01 != 0,
            mapper_number: ((flags6 >> 4) & 0x0F) | (flags7 & 0xF0),
            prg_ram_banks: bytes[8],
            tv_system: if bytes[9] & 0x01 != 0 { TvSystem::Pal } else { TvSystem::Ntsc },
        };

        if header.mapper_number != 0 {
            return Err(EmulatorError::UnsupportedMapper(header.mapper_number));
        }
        if header.contains_prg_ram {
            return Err(EmulatorError::UnparseableRom("PRG-RAM is not supported".into()));
        }

        let mut pos = HEADER_SIZE;
        if header.contains_trainer {
            pos += TRAINER_SIZE;
        }

        let prg_len = header.prg_rom_banks as usize * PRG_BANK_SIZE;
        if pos + prg_len > bytes.len() {
            return Err(EmulatorError::UnparseableRom(
                "declared PRG-ROM size exceeds file size".into(),
            ));
        }
        let prg_rom = bytes[pos..pos + prg_len].to_vec();
        pos += prg_len;

        let chr_len = header.chr_rom_banks as usize * CHR_BANK_SIZE;
        let chr_rom = if chr_len == 0 {
            // CHR-RAM: the header declares zero CHR-ROM banks, so the
            // cartridge supplies 8 KiB of writable pattern memory instead.
            vec![0u8; CHR_BANK_SIZE]
        } else {
            if pos + chr_len > bytes.len() {
                return Err(EmulatorError::UnparseableRom(
                    "declared CHR-ROM size exceeds file size".into(),
                ));
            }
            bytes[pos..pos + chr_len].to_vec()
        };

        Ok(Cartridge { header, prg_rom, chr_rom, mirroring })
    }

    /// A minimal mapper-0 cartridge (16 KiB PRG of zero bytes, 8 KiB CHR-RAM)
    /// used by unit tests that need a `Bus` but don't care about game data.
    pub fn blank_nrom() -> Cartridge {
        let header = INesHeader {
            prg_rom_banks: 1,
            chr_rom_banks: 0,
            mirroring: Mirroring::Horizontal,
            contains_prg_ram: false,
            contains_trainer: false,
            ignore_mirroring_control: false,
            mapper_number: 0,
            prg_ram_banks: 0,
            tv_system: TvSystem::Ntsc,
        };
        Cartridge {
            header,
            prg_rom: vec![0u8; PRG_BANK_SIZE],
            chr_rom: vec![0u8; CHR_BANK_SIZE],
            mirroring: Mirroring::Horizontal,
        }
    }
}
