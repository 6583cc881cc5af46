//! Flow-sensitive register tracking: a best-effort record of what each
//! general register holds along one decoded path.
//!
//! Only two cases produce a known value: an immediate `mov` and a
//! pc-relative load from a statically known address. Anything else that
//! writes a destination register degrades it to unknown; precision is
//! deliberately abandoned rather than simulated.

use log::debug;

use crate::decode::Args;
use crate::field::Field;
use crate::memory::MemoryModel;
use crate::opcodes::Opcode;

/// Symbolic contents of the sixteen general registers.
#[derive(Debug, Clone, Default)]
pub struct RegisterFile {
    regs: [Option<u32>; 16],
}

impl RegisterFile {
    pub fn new() -> RegisterFile {
        RegisterFile::default()
    }

    pub fn get(&self, reg: u32) -> Option<u32> {
        self.regs.get(reg as usize).copied().flatten()
    }

    pub fn set(&mut self, reg: u32, value: Option<u32>) {
        if let Some(slot) = self.regs.get_mut(reg as usize) {
            *slot = value;
        }
    }
}

/// Update the register file for one decoded instruction at `location`.
///
/// A pc-relative load also materializes a scalar field of the load's
/// width at the referenced address (if nothing is claimed there yet) and
/// records the instruction as a reference to it.
pub fn track(
    opcode: &'static Opcode,
    args: &Args,
    location: u32,
    registers: &mut RegisterFile,
    model: &mut MemoryModel,
) {
    let mut nval = args.n;
    if nval.is_none() && opcode.args.1 == "r0" {
        nval = Some(0);
    }
    let Some(n) = nval else {
        return;
    };

    if opcode.mnemonic.starts_with("mov") {
        let mut mval = args.m;
        if mval.is_none() && opcode.args.0 == "r0" {
            mval = Some(0);
        }
        if mval.is_none() {
            if let Some(imm) = args.imm {
                registers.set(n, Some(imm));
                return;
            }
            if args.disp.is_some() && opcode.args.0.contains("pc") {
                if let Some(target) = args.target {
                    track_load(opcode, n, target, location, registers, model);
                    return;
                }
            }
        }
    }

    // Any write we cannot model exactly invalidates the register.
    registers.set(n, None);
}

fn track_load(
    opcode: &'static Opcode,
    n: u32,
    target: u32,
    location: u32,
    registers: &mut RegisterFile,
    model: &mut MemoryModel,
) {
    let existing = match model.get_field(target) {
        Ok(meta) => meta.cloned(),
        Err(err) => {
            debug!("untrackable load at {:#x}: {}", location, err);
            registers.set(n, None);
            return;
        }
    };

    let value = match existing {
        Some(field) => field.scalar_value(),
        None => {
            // Width follows the mnemonic suffix; suffixless loads (mova)
            // claim a single byte, which later table passes can absorb.
            let field = if opcode.mnemonic.ends_with(".l") {
                Field::long(target, model)
            } else if opcode.mnemonic.ends_with(".w") {
                Field::word(target, model)
            } else {
                Field::byte(target, model)
            };
            let value = field.scalar_value();
            if let Err(err) = model.set_field(field) {
                debug!("untrackable load at {:#x}: {}", location, err);
                registers.set(n, None);
                return;
            }
            value
        }
    };

    let _ = model.add_reference(target, location);
    registers.set(n, value);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode;
    use crate::memory::Segment;
    use crate::processor::Processor;
    use crate::{sh7052, sh7055};

    fn model_with_rom(bytes: Vec<u8>) -> MemoryModel {
        let processor = Processor {
            name: "TEST",
            vectors: &sh7052::VECTORS,
            registers: &sh7055::REGISTERS,
            ram: (0xFFFF_8000, 0xFFFF_B000),
            io: (0xFFFF_E400, 0xFFFF_F860),
        };
        let end = bytes.len() as u32;
        MemoryModel::with_segments(
            processor,
            vec![Segment::new("ROM", 0, end, Some(bytes))],
        )
    }

    fn step(word: u16, pc: u32, registers: &mut RegisterFile, model: &mut MemoryModel) {
        let (opcode, mut args) = decode::lookup(word).unwrap();
        decode::calculate_disp_target(opcode, &mut args, pc);
        track(opcode, &args, pc, registers, model);
    }

    #[test]
    fn immediate_loads_are_tracked() {
        let mut model = model_with_rom(vec![0; 0x20]);
        let mut registers = RegisterFile::new();
        step(0xE342, 0, &mut registers, &mut model); // mov #0x42, r3
        assert_eq!(registers.get(3), Some(0x42));
    }

    #[test]
    fn pc_relative_loads_materialize_a_field() {
        let mut bytes = vec![0u8; 0x20];
        bytes[0x10..0x14].copy_from_slice(&[0x00, 0x00, 0x12, 0x34]);
        let mut model = model_with_rom(bytes);
        let mut registers = RegisterFile::new();

        // mov.l @(3, pc), r1 at pc 2 reads the long at 0x10.
        step(0xD103, 2, &mut registers, &mut model);
        assert_eq!(registers.get(1), Some(0x1234));
        let field = model.get_field(0x10).unwrap().unwrap();
        assert_eq!(field.width(), 4);
        assert_eq!(model.get_references(0x10).unwrap(), &[2]);
    }

    #[test]
    fn unmodeled_writes_invalidate() {
        let mut model = model_with_rom(vec![0; 0x20]);
        let mut registers = RegisterFile::new();
        registers.set(2, Some(7));
        step(0x7201, 0, &mut registers, &mut model); // add #1, r2
        assert_eq!(registers.get(2), None);

        // An immediate logical op on the implicit r0 destination.
        registers.set(0, Some(1));
        step(0xC9FF, 0, &mut registers, &mut model); // and #0xFF, r0
        assert_eq!(registers.get(0), None);
    }

    #[test]
    fn loads_with_runtime_addresses_invalidate() {
        let mut model = model_with_rom(vec![0; 0x20]);
        let mut registers = RegisterFile::new();
        registers.set(4, Some(0x1234));
        step(0x6452, 0, &mut registers, &mut model); // mov.l @r5, r4
        assert_eq!(registers.get(4), None);
    }
}
