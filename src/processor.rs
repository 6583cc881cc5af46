//! Per-chip descriptors: the segment layout and the vector and
//! peripheral register maps, selected by ROM image size.

use indexmap::IndexMap;
use thiserror::Error;

use crate::{sh7052, sh7055};

/// An error related to parsing the supplied ROM image.
#[derive(Debug, Error)]
pub enum RomError {
    #[error("invalid or unrecognized ROM image ({0:#x} bytes)")]
    UnrecognizedImage(usize),
}

/// A named annotation for a fixed on-chip address.
#[derive(Debug, Clone, Copy)]
pub struct MapEntry {
    pub name: &'static str,
    /// Field width in bytes: 1, 2, or 4.
    pub size: u32,
    pub comment: &'static str,
}

/// Everything the disassembler needs to know about one chip variant.
#[derive(Clone, Copy)]
pub struct Processor {
    pub name: &'static str,
    pub vectors: &'static IndexMap<u32, MapEntry>,
    pub registers: &'static IndexMap<u32, MapEntry>,
    /// On-chip RAM address range.
    pub ram: (u32, u32),
    /// On-chip peripheral register address range.
    pub io: (u32, u32),
}

/// Determine the chip variant from the ROM image size.
pub fn detect(phys: &[u8]) -> Result<Processor, RomError> {
    match phys.len() {
        // SH/7052F
        0x40000 => Ok(Processor {
            name: "SH7052",
            vectors: &sh7052::VECTORS,
            registers: &sh7052::REGISTERS,
            ram: (0xFFFF_8000, 0xFFFF_B000),
            io: (0xFFFF_E400, 0xFFFF_F860),
        }),
        // SH/7055F
        0x80000 => Ok(Processor {
            name: "SH7055",
            vectors: &sh7055::VECTORS,
            registers: &sh7055::REGISTERS,
            ram: (0xFFFF_6000, 0xFFFF_E000),
            io: (0xFFFF_E400, 0xFFFF_F860),
        }),
        n => Err(RomError::UnrecognizedImage(n)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_size_selects_the_chip() {
        assert_eq!(detect(&vec![0u8; 0x40000]).unwrap().name, "SH7052");
        assert_eq!(detect(&vec![0u8; 0x80000]).unwrap().name, "SH7055");
        assert!(matches!(
            detect(&vec![0u8; 0x1234]),
            Err(RomError::UnrecognizedImage(0x1234))
        ));
    }

    #[test]
    fn maps_carry_the_reset_vectors() {
        let processor = detect(&vec![0u8; 0x40000]).unwrap();
        let entry = processor.vectors.get(&0).unwrap();
        assert_eq!(entry.name, "v_power_on_pc");
        assert_eq!(entry.size, 4);
    }
}
