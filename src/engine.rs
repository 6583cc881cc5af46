//! The work-queue disassembly engine.
//!
//! Walks code paths from seed addresses, commits decoded instructions
//! into the memory model, and chases both direct and register-indirect
//! branch targets. Bad speculative targets are expected: every failure
//! along one path abandons only that path.

use log::{debug, warn};

use crate::decode::{self, DecodeError};
use crate::field::{CodeField, Field};
use crate::memory::MemoryModel;
use crate::opcodes::{DELAYED_BRANCHERS, LABEL_BRANCHERS, REGISTER_BRANCHERS};
use crate::registers::{self, RegisterFile};

/// A pending work item: an address to explore plus the address that
/// referred to it, when known. Seeded entry points have no referrer.
pub type Seed = (u32, Option<u32>);

/// Per-instruction hook for vendor-specific annotation.
///
/// Implementors carry their own accumulator state and may mutate the
/// model freely, including re-entrant calls back into [`disassemble`].
pub trait Annotator {
    fn visit(&mut self, code: &CodeField, registers: &RegisterFile, model: &mut MemoryModel);
}

/// Decode one instruction word at `location`, updating the register file
/// and materializing any data fields the instruction references.
pub fn disasm_single(
    word: u16,
    location: u32,
    registers: &mut RegisterFile,
    model: &mut MemoryModel,
) -> Result<CodeField, DecodeError> {
    let (opcode, mut args) = decode::lookup(word)?;
    decode::calculate_disp_target(opcode, &mut args, location);
    registers::track(opcode, &args, location, registers, model);
    let text = decode::format_instruction(opcode, &args);
    Ok(CodeField {
        location,
        opcode,
        args,
        text,
        comment: None,
    })
}

/// Drain the work queue, walking every reachable code path. An address
/// that already holds code is never re-walked; the new referrer is
/// recorded as a cross-reference and the item is dropped.
pub fn disassemble(seeds: Vec<Seed>, model: &mut MemoryModel, mut annotator: Option<&mut dyn Annotator>) {
    let mut queue: Vec<Seed> = seeds;

    while let Some((start, mut reference)) = queue.pop() {
        let already_code = match model.get_field(start) {
            Err(err) => {
                warn!(
                    "unable to retrieve location {:#x}, giving up on that path: {}",
                    start, err
                );
                continue;
            }
            Ok(Some(field)) if field.is_code() => Some(field.location()),
            Ok(_) => None,
        };
        if let Some(code_location) = already_code {
            if let Some(referrer) = reference {
                let _ = model.add_reference(code_location, referrer);
            }
            continue;
        }

        // Each independent path starts with an unknown register file.
        let mut registers = RegisterFile::new();
        let mut location = start;
        let mut branching = false;
        let mut countdown: i32 = 0;

        while !branching || countdown >= 0 {
            let word = match model.get_phys(location, 2) {
                Ok(bytes) => u16::from_be_bytes([bytes[0], bytes[1]]),
                Err(err) => {
                    debug!("stopping walk at {:#x}: {}", location, err);
                    break;
                }
            };

            let mut code = match disasm_single(word, location, &mut registers, model) {
                Ok(code) => code,
                Err(err) => {
                    warn!(
                        "unable to disassemble location {:#x}, giving up on that path: {}",
                        location, err
                    );
                    break;
                }
            };
            let mnemonic = code.opcode.mnemonic;

            // Resolve branch targets while this path's register values
            // are still in scope.
            let mut discovered: Option<Seed> = None;
            if REGISTER_BRANCHERS.contains(&mnemonic) {
                if let Some(m) = code.args.m {
                    if let Some(resolved) = registers.get(m) {
                        code.args.target = Some(resolved);
                        discovered = Some((resolved, Some(location)));
                    }
                }
            } else if LABEL_BRANCHERS.contains(&mnemonic) {
                if let Some(target) = code.args.target {
                    discovered = Some((target, Some(location)));
                }
            }

            if let Err(err) = model.set_field(Field::Code(code.clone())) {
                warn!(
                    "unable to place code at {:#x}, giving up on that path: {}",
                    location, err
                );
                break;
            }
            if let Some(seed) = discovered {
                queue.push(seed);
            }
            if let Some(referrer) = reference.take() {
                let _ = model.add_reference(location, referrer);
            }
            if let Some(hook) = annotator.as_deref_mut() {
                hook.visit(&code, &registers, model);
            }

            // A delayed branch executes exactly one more instruction
            // before the path ends.
            if DELAYED_BRANCHERS.contains(&mnemonic) {
                branching = true;
                countdown = 1;
            }
            if branching {
                countdown -= 1;
            }
            location = location.wrapping_add(2);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::Segment;
    use crate::processor::Processor;
    use crate::{sh7052, sh7055};
    use test_log::test;

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

    fn rom(words: &[(u32, u16)], size: usize) -> Vec<u8> {
        let mut bytes = vec![0u8; size];
        for &(location, word) in words {
            let be = word.to_be_bytes();
            bytes[location as usize] = be[0];
            bytes[location as usize + 1] = be[1];
        }
        bytes
    }

    fn mnemonic_at(model: &MemoryModel, location: u32) -> Option<&'static str> {
        model
            .get_field(location)
            .ok()
            .flatten()
            .and_then(|f| f.as_code())
            .map(|c| c.opcode.mnemonic)
    }

    #[test]
    fn resolves_register_indirect_calls() {
        // mov #0x10, r0 / mov.l @(3, pc), r1 / jsr @r1 / nop, with the
        // literal at 0x10 pointing at a second routine.
        let bytes = rom(
            &[
                (0x00, 0xE010), // mov #0x10, r0
                (0x02, 0xD103), // mov.l @(3, pc), r1 -> long at 0x10
                (0x04, 0x410B), // jsr @r1
                (0x06, 0x0009), // nop
                (0x12, 0x0020), // long 0x00000020
                (0x20, 0x000B), // rts
                (0x22, 0x0009), // nop
            ],
            0x40,
        );
        let mut model = model_with_rom(bytes);
        disassemble(vec![(0, None)], &mut model, None);

        for location in [0x00u32, 0x02, 0x04, 0x06] {
            assert!(mnemonic_at(&model, location).is_some(), "{:#x}", location);
        }

        // Exactly one long field was materialized at the literal pool.
        let literal = model.get_field(0x10).unwrap().unwrap();
        assert_eq!(literal.width(), 4);
        assert_eq!(literal.scalar_value(), Some(0x20));

        // The call target was resolved through the register file and
        // walked as its own path.
        let jsr = model.get_field(0x04).unwrap().unwrap().as_code().unwrap();
        assert_eq!(jsr.args.target, Some(0x20));
        assert_eq!(mnemonic_at(&model, 0x20), Some("rts"));
        // Referenced both by the call and by the literal that holds its
        // address.
        assert_eq!(model.get_references(0x20).unwrap(), &[0x04, 0x10]);
    }

    #[test]
    fn re_decoding_an_address_only_adds_a_reference() {
        let bytes = rom(&[(0x00, 0x0009), (0x02, 0x000B), (0x04, 0x0009)], 0x10);
        let mut model = model_with_rom(bytes);
        disassemble(vec![(0, None)], &mut model, None);
        let first = model.get_field(0).unwrap().unwrap().clone();

        disassemble(vec![(0, Some(0x8))], &mut model, None);
        let second = model.get_field(0).unwrap().unwrap();
        assert!(second.is_code());
        assert_eq!(second.location(), first.location());
        assert_eq!(model.get_references(0).unwrap(), &[0x8]);
    }

    #[test]
    fn delayed_branches_decode_exactly_one_more_slot() {
        // bra over a data word; the slot nop decodes, the word after the
        // slot does not.
        let bytes = rom(
            &[
                (0x00, 0xA001), // bra -> 0x6
                (0x02, 0x0009), // nop (delay slot)
                (0x04, 0xFFFF), // never decoded
                (0x06, 0x000B), // rts
                (0x08, 0x0009), // nop (delay slot)
            ],
            0x10,
        );
        let mut model = model_with_rom(bytes);
        disassemble(vec![(0, None)], &mut model, None);

        assert_eq!(mnemonic_at(&model, 0x00), Some("bra"));
        assert_eq!(mnemonic_at(&model, 0x02), Some("nop"));
        assert_eq!(mnemonic_at(&model, 0x04), None);
        assert_eq!(mnemonic_at(&model, 0x06), Some("rts"));
        assert_eq!(model.get_references(0x6).unwrap(), &[0x0]);
    }

    #[test]
    fn conditional_branches_fall_through() {
        let bytes = rom(
            &[
                (0x00, 0x8901), // bt -> 0x6
                (0x02, 0x0009), // nop, still decoded
                (0x04, 0x000B), // rts
                (0x06, 0x0009), // nop (delay slot)
                (0x08, 0x000B), // rts (branch target path)
                (0x0A, 0x0009),
            ],
            0x10,
        );
        let mut model = model_with_rom(bytes);
        disassemble(vec![(0, None)], &mut model, None);
        assert_eq!(mnemonic_at(&model, 0x02), Some("nop"));
        assert_eq!(mnemonic_at(&model, 0x04), Some("rts"));
        assert_eq!(mnemonic_at(&model, 0x06), Some("nop"));
    }

    #[test]
    fn bad_speculative_targets_abandon_only_their_path() {
        let bytes = rom(
            &[
                (0x00, 0xA7FF), // bra far outside the image
                (0x02, 0x0009), // nop (delay slot)
                (0x04, 0x000B),
            ],
            0x10,
        );
        let mut model = model_with_rom(bytes);
        disassemble(vec![(0, None), (0x100, Some(0)), (0x04, None)], &mut model, None);
        // The invalid seeds dropped quietly; the valid ones decoded.
        assert_eq!(mnemonic_at(&model, 0x00), Some("bra"));
        assert_eq!(mnemonic_at(&model, 0x04), Some("rts"));
    }

    #[test]
    fn code_over_larger_data_is_abandoned() {
        let bytes = rom(&[(0x00, 0x0009), (0x02, 0x0009)], 0x10);
        let mut model = model_with_rom(bytes);
        // A long spanning 0x02..0x06 blocks the walk one word in.
        let long = Field::long(0x02, &mut model);
        model.set_field(long).unwrap();
        let before = model.get_field(0x02).unwrap().unwrap().clone();

        disassemble(vec![(0x0, None)], &mut model, None);
        assert_eq!(mnemonic_at(&model, 0x00), Some("nop"));
        // The data object survived; the path just stopped.
        let after = model.get_field(0x02).unwrap().unwrap();
        assert_eq!(after.width(), before.width());
        assert!(!after.is_code());
    }
}
