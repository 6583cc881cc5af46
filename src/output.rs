//! Free-space collapsing and listing generation.
//!
//! Rendering walks the model range by range; the semantic content of
//! every line comes from the field render and comment contracts, this
//! module only decides ordering and separators.

use std::io::{self, Write};

use log::debug;

use crate::field::Field;
use crate::memory::MemoryModel;

const SEPARATOR: &str =
    "         ! ------------------------------------------------------------";

/// Runs of unclaimed 0xFF bytes longer than this collapse into a single
/// free-space field.
const FREE_SPACE_MIN: u32 = 0x1FF;

/// Collapse contiguous 0xFF padding in every backed segment.
pub fn scan_free_space(model: &mut MemoryModel) {
    for (start, end) in model.get_phys_ranges() {
        let mut skip = 0u32;
        let mut run = 0u32;
        for location in start..end {
            if skip > 0 {
                skip -= 1;
                continue;
            }
            let claimed = model.get_field(location).ok().flatten().map(|f| f.width());
            let padding = claimed.is_none()
                && model
                    .get_phys(location, 1)
                    .map(|b| b[0] == 0xFF)
                    .unwrap_or(false);
            if padding {
                run += 1;
                continue;
            }
            flush_run(model, location, run);
            run = 0;
            if let Some(width) = claimed {
                skip = width - 1;
            }
        }
        flush_run(model, end, run);
    }
}

fn flush_run(model: &mut MemoryModel, location: u32, run: u32) {
    if run > FREE_SPACE_MIN {
        debug!("free space at {:#x}..{:#x}", location - run, location);
        let _ = model.set_field(Field::free(location - run, run));
    }
}

/// Write the final annotated listing. Unclaimed bytes render as
/// throwaway byte fields; separators mark code/data transitions and
/// block boundaries after returns.
pub fn write_listing(
    model: &MemoryModel,
    out: &mut dyn Write,
    include_ram: bool,
) -> io::Result<()> {
    let ranges = if include_ram {
        model.all_ranges()
    } else {
        model.get_phys_ranges()
    };
    for (start, end) in ranges {
        let mut skip = 0u32;
        let mut in_code = false;
        for location in start..end {
            if skip > 0 {
                skip -= 1;
                continue;
            }
            let field = model.get_field(location).ok().flatten().cloned();
            let is_code = matches!(field, Some(Field::Code(_)));
            if in_code != is_code {
                in_code = is_code;
                writeln!(out, "{}", SEPARATOR)?;
            } else if in_code && location >= start + 4 {
                // A routine that starts right after a return gets its
                // own separator.
                if let Ok(Some(Field::Code(previous))) = model.get_field(location - 4) {
                    if previous.opcode.mnemonic == "rts" {
                        writeln!(out, "{}", SEPARATOR)?;
                    }
                }
            }

            let field = field.unwrap_or_else(|| Field::byte(location, model).with_prefix("unk"));
            skip = field.width() - 1;
            let is_free = matches!(field, Field::Free(_));
            if is_free {
                writeln!(out, "{}", SEPARATOR)?;
            }
            let line = field.listing_line(model);
            if !line.is_empty() {
                writeln!(out, "{}", line)?;
            }
            if is_free {
                writeln!(out, "{}", SEPARATOR)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine;
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

    #[test]
    fn padding_collapses_into_one_field() {
        let mut model = model_with_rom(vec![0xFF; 600]);
        scan_free_space(&mut model);
        let field = model.get_field(0).unwrap().unwrap();
        assert!(matches!(field, Field::Free(_)));
        assert_eq!(field.width(), 600);
        // Every subsequent byte resolves to the same object.
        assert_eq!(model.get_field(599).unwrap().unwrap().location(), 0);
    }

    #[test]
    fn short_runs_are_left_alone() {
        let mut bytes = vec![0u8; 0x400];
        for b in bytes[0x100..0x180].iter_mut() {
            *b = 0xFF;
        }
        let mut model = model_with_rom(bytes);
        scan_free_space(&mut model);
        assert!(model.get_field(0x100).unwrap().is_none());
    }

    #[test]
    fn claimed_bytes_interrupt_a_run() {
        let mut model = model_with_rom(vec![0xFF; 0x600]);
        let word = Field::word(0x300, &model);
        model.set_field(word).unwrap();
        scan_free_space(&mut model);

        let head = model.get_field(0x0).unwrap().unwrap();
        assert_eq!(head.width(), 0x300);
        let tail = model.get_field(0x302).unwrap().unwrap();
        assert_eq!(tail.location(), 0x302);
        assert_eq!(tail.width(), 0x600 - 0x302);
    }

    #[test]
    fn listing_renders_code_and_data_with_separators() {
        let mut bytes = vec![0u8; 0x10];
        bytes[0..2].copy_from_slice(&0x000Bu16.to_be_bytes()); // rts
        bytes[2..4].copy_from_slice(&0x0009u16.to_be_bytes()); // nop
        bytes[8] = 0x55;
        let mut model = model_with_rom(bytes);
        engine::disassemble(vec![(0, None)], &mut model, None);

        let mut out = Vec::new();
        write_listing(&model, &mut out, false).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("rts"));
        assert!(text.contains("nop"));
        // Unclaimed bytes render as throwaway data.
        assert!(text.contains(".byte 0x55"));
        // One separator before the code block, one after it.
        assert!(text.matches(SEPARATOR).count() >= 2);
    }
}
