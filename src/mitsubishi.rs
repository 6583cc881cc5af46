//! Mitsubishi ECU heuristics: calibration table and axis recognition,
//! MOVA jump-table expansion, and fixed annotations for well-known ROM
//! locations.
//!
//! Everything here is best-effort. Tables whose contents are referenced
//! out of discovery order may be skipped or partially annotated, and a
//! re-run of the heuristics can pick up more than the first pass.

use std::collections::HashMap;

use log::warn;

use crate::engine::{self, Annotator};
use crate::field::{CodeField, Field};
use crate::memory::MemoryModel;
use crate::opcodes::REGISTER_BRANCHERS;
use crate::registers::RegisterFile;

/// Shared lookup routines every supported calibration ROM carries.
const AXIS_LOOKUP: u32 = 0xCC6;
const TABLE_LOOKUP_BYTE: u32 = 0xC28;
const TABLE_LOOKUP_WORD: u32 = 0xE02;

/// Recognizes axis- and table-lookup calls as they are decoded.
///
/// The `axes` accumulator maps an axis's result address to the axis
/// structure's location, so tables discovered later can name the axes
/// they index with.
#[derive(Default)]
pub struct MitsuAnnotator {
    axes: HashMap<u32, u32>,
}

impl MitsuAnnotator {
    pub fn new() -> MitsuAnnotator {
        MitsuAnnotator::default()
    }
}

impl Annotator for MitsuAnnotator {
    fn visit(&mut self, code: &CodeField, registers: &RegisterFile, model: &mut MemoryModel) {
        if !REGISTER_BRANCHERS.contains(&code.opcode.mnemonic) {
            return;
        }
        let Some(m) = code.args.m else { return };
        let Some(routine) = registers.get(m) else {
            return;
        };
        // Axis and table lookups both take the data pointer in r4.
        let Some(table) = registers.get(4) else {
            return;
        };
        match routine {
            AXIS_LOOKUP => annotate_axis(code, table, model, &mut self.axes),
            TABLE_LOOKUP_BYTE | TABLE_LOOKUP_WORD => {
                annotate_table(code, routine, table, model, &self.axes)
            }
            _ => {}
        }
    }
}

/// Axis structure: result address, lookup value address, length word,
/// then `length` words of axis data.
fn annotate_axis(
    code: &CodeField,
    table: u32,
    model: &mut MemoryModel,
    axes: &mut HashMap<u32, u32>,
) {
    match model.get_field(table) {
        Ok(None) => {}
        _ => return,
    }

    let result = Field::long(table, model).with_comment("Result address");
    let result_value = result.scalar_value();
    if model.set_field(result).is_err() {
        return;
    }
    let lookup = Field::long(table.wrapping_add(4), model).with_comment("Lookup value address");
    let _ = model.set_field(lookup);
    let length = Field::word(table.wrapping_add(8), model).with_comment("Axis length");
    let axis_len = length.scalar_value().unwrap_or(0);
    let _ = model.set_field(length);

    let composite = model.new_composite(axis_len);
    let start = table.wrapping_add(10);
    let mut location = start;
    let end = start.wrapping_add(axis_len * 2);
    while location < end {
        let member = Field::word(location, model).with_member_of(composite);
        if model.set_field(member).is_err() {
            warn!("short axis: {:#x} (at {:#x})", table, location);
            break;
        }
        model.composite_mut(composite).members.push(location);
        location += 2;
    }

    let _ = model.add_reference(code.location, table);
    let _ = model.add_reference(table, code.location);
    if let Some(value) = result_value {
        axes.insert(value, table);
    }
}

/// Table structure: dimension header, adder, y-axis pointer, optional
/// x-axis pointer and row length for 3D tables, then the body.
fn annotate_table(
    code: &CodeField,
    routine: u32,
    table: u32,
    model: &mut MemoryModel,
    axes: &HashMap<u32, u32>,
) {
    match model.get_field(table) {
        Ok(None) => {}
        _ => return,
    }

    let width: u32 = if routine == TABLE_LOOKUP_BYTE { 1 } else { 2 };
    let header = scalar(width, table, model);
    let dims = header.scalar_value().unwrap_or(0);
    if model.set_field(header).is_err() {
        return;
    }
    let kind = if width == 1 { "byte" } else { "word" };
    let _ = model.set_comment(table, &format!("{}D {}-width table", dims, kind));

    let adder = scalar(width, table.wrapping_add(width), model).with_comment("Adder");
    let _ = model.set_field(adder);

    let yaxis = Field::long(table.wrapping_add(2 * width), model);
    let yaxis_value = yaxis.scalar_value();
    let mut yaxis = yaxis.with_comment("Y-Axis");
    let mut yaxis_len = 0u32;
    if let Some(&axis) = yaxis_value.and_then(|v| axes.get(&v)) {
        yaxis.set_comment(Some(format!("Y-Axis: 0x{:X}", axis)));
        yaxis_len = axis_length(axis, model);
    }
    let _ = model.set_field(yaxis);

    let mut position = 4 + width * 2;
    let mut xaxis_len = 1u32; // always at least one row
    if dims == 3 {
        let xaxis = Field::long(table.wrapping_add(position), model);
        let xaxis_value = xaxis.scalar_value();
        let mut xaxis = xaxis.with_comment("X-Axis");
        xaxis_len = 0;
        if let Some(&axis) = xaxis_value.and_then(|v| axes.get(&v)) {
            xaxis.set_comment(Some(format!("X-Axis: 0x{:X}", axis)));
            xaxis_len = axis_length(axis, model);
        }
        let _ = model.set_field(xaxis);
        position += 4;
        let row = scalar(width, table.wrapping_add(position), model).with_comment("Row length");
        let _ = model.set_field(row);
        position += width;
    }

    if yaxis_len > 0 {
        let composite = model.new_composite(yaxis_len);
        let start = table.wrapping_add(position);
        let end = start.wrapping_add(yaxis_len.wrapping_mul(xaxis_len).wrapping_mul(width));
        let mut location = start;
        while location < end {
            if model.location_isset(location)
                || (width == 2 && model.location_isset(location + 1))
            {
                // Happens on ROMs whose table contents are referenced
                // out of discovery order.
                warn!("short table: {:#x} (at {:#x})", table, location);
                break;
            }
            let member = scalar(width, location, model).with_member_of(composite);
            if model.set_field(member).is_err() {
                break;
            }
            model.composite_mut(composite).members.push(location);
            location += width;
        }
    }
}

fn scalar(width: u32, location: u32, model: &mut MemoryModel) -> Field {
    if width == 1 {
        Field::byte(location, model)
    } else {
        Field::word(location, model)
    }
}

fn axis_length(axis: u32, model: &MemoryModel) -> u32 {
    model
        .get_field(axis.wrapping_add(8))
        .ok()
        .flatten()
        .and_then(|f| f.scalar_value())
        .unwrap_or(0)
}

/// Expand a MOVA-addressed jump table: each word entry is an offset from
/// the table base to a handler, disassembled as its own path.
fn fixup_mova(code: &CodeField, model: &mut MemoryModel) {
    let Some(table) = code.args.target else { return };
    let mut offset = 0u32;
    loop {
        let entry = table.wrapping_add(offset);
        match model.get_field(entry) {
            Err(_) => break,
            Ok(Some(field)) if field.is_code() => break,
            Ok(_) => {}
        }
        let jumper = Field::word(entry, model);
        let Some(value) = jumper.scalar_value() else {
            break;
        };
        if model.set_field(jumper).is_err() {
            break;
        }
        let _ = model.add_reference(entry, code.location);

        let handler = table.wrapping_add(value);
        engine::disassemble(vec![(handler, Some(entry))], model, None);
        let label = model
            .get_label(handler)
            .ok()
            .flatten()
            .unwrap_or_else(|| format!("0x{:X}", handler));
        let _ = model.set_comment(entry, &format!("jsr {}", label));
        offset += 2;
    }
}

/// Walk the MUT (diagnostic variable) table: a 0xFFFFFFFF-terminated
/// array of longs, each naming one readable address.
fn fixup_mut(code: &CodeField, model: &mut MemoryModel) {
    let Some(target) = code.args.target else { return };
    let table = match model.get_field(target) {
        Ok(Some(pointer)) => match pointer.scalar_value() {
            Some(table) => table,
            None => return,
        },
        _ => return,
    };
    let mut index = 0u32;
    loop {
        let location = table.wrapping_add(index << 2);
        let entry = Field::long(location, model);
        let Some(value) = entry.scalar_value() else {
            break;
        };
        if value == 0xFFFF_FFFF {
            break;
        }
        if model.set_field(entry).is_err() {
            break;
        }
        let label = format!("MUT_{:X}", index);
        let _ = model.set_label(value, Some(&label));
        index += 1;
    }
    let _ = model.set_label(table, Some("MUT_TABLE"));
}

/// Scan decoded code for MOVA jump tables and the MUT table idiom: a
/// `mov.w` of the 0xBF marker, one `shll2`, then a `mov.l` of the table
/// pointer.
fn multiscan(model: &mut MemoryModel) {
    for (start, end) in model.get_phys_ranges() {
        let mut skip = 0u32;
        let mut movw_found = false;
        let mut shll2_found = false;
        let mut mut_found = false;
        for location in start..end {
            if skip > 0 {
                skip -= 1;
                continue;
            }
            let code = match model.get_field(location) {
                Ok(Some(field)) => {
                    skip = field.width() - 1;
                    field.as_code().cloned()
                }
                _ => None,
            };
            let Some(code) = code else { continue };
            let mnemonic = code.opcode.mnemonic;

            if mnemonic == "mova" {
                fixup_mova(&code, model);
            } else if !mut_found {
                if !movw_found && mnemonic == "mov.w" {
                    if let Some(target) = code.args.target {
                        let marker = model
                            .get_field(target)
                            .ok()
                            .flatten()
                            .and_then(|f| f.scalar_value());
                        if marker == Some(0xBF) {
                            movw_found = true;
                        }
                    }
                } else if movw_found && mnemonic == "shll2" {
                    if shll2_found {
                        movw_found = false;
                        shll2_found = false;
                    } else {
                        shll2_found = true;
                    }
                } else if movw_found && shll2_found {
                    if mnemonic == "mov.l" && code.args.target.is_some() {
                        fixup_mut(&code, model);
                        mut_found = true;
                    }
                    movw_found = false;
                    shll2_found = false;
                }
            }
        }
    }
}

/// One-shot fixups for well-known Mitsubishi ROM locations, followed by
/// the code-idiom scan.
pub fn fixups(model: &mut MemoryModel) {
    // Name the init, sp, and reset vector targets.
    for (vector, name) in [(0u32, "init"), (4, "sp"), (0x10, "reset")] {
        if let Ok(Some(field)) = model.get_field(vector) {
            if let Some(value) = field.scalar_value() {
                let _ = model.set_label(value, Some(name));
            }
        }
    }

    // Set the proper width for a couple of well-known items.
    for location in [0xF34u32, 0xF3C] {
        let word = Field::word(location, model);
        let _ = model.set_field(word);
    }

    // The ECU ID values.
    let mut location = 0xF40u32;
    while location < 0xF5B {
        let word = Field::word(location, model);
        if location == 0xF44 {
            let _ = model.set_label(location, Some("ECU_ID1"));
        } else if location == 0xF54 {
            let _ = model.set_label(location, Some("ECU_ID2"));
        }
        let _ = model.set_field(word);
        location += 2;
    }

    // ECU part number and the related fields after it.
    let part = Field::long(0xF6A, model);
    let _ = model.set_label(0xF6A, Some("ECU_part_number"));
    let _ = model.set_field(part);
    let mut location = 0xF6E;
    while location < 0xF89 {
        let long = Field::long(location, model);
        let _ = model.set_field(long);
        location += 4;
    }

    // Periphery bit words.
    let mut location = 0xF8A;
    while location < 0xF8A + 16 * 9 {
        let word = Field::word(location, model);
        if location == 0xFFA {
            let _ = model.set_label(location, Some("periphery_IMMOB"));
        } else {
            let label = format!("periphery_{:X}", location);
            let _ = model.set_label(location, Some(&label));
        }
        let _ = model.set_field(word);
        let mut inner = location + 2;
        while inner < location + 16 {
            let word = Field::word(inner, model);
            let _ = model.set_field(word);
            inner += 2;
        }
        location += 16;
    }

    // Immobilizer.
    let word = Field::word(0x3FFCE, model);
    let _ = model.set_field(word);
    let _ = model.set_label(0x3FFCE, Some("immobilizer"));

    // The shared lookup routines.
    let _ = model.set_label(TABLE_LOOKUP_BYTE, Some("tbl_lookup_byte"));
    let _ = model.set_label(AXIS_LOOKUP, Some("axis_lookup"));
    let _ = model.set_label(TABLE_LOOKUP_WORD, Some("tbl_lookup_word"));

    multiscan(model);
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

    fn put_word(bytes: &mut [u8], location: u32, word: u16) {
        bytes[location as usize..location as usize + 2].copy_from_slice(&word.to_be_bytes());
    }

    fn put_long(bytes: &mut [u8], location: u32, long: u32) {
        bytes[location as usize..location as usize + 4].copy_from_slice(&long.to_be_bytes());
    }

    #[test]
    fn axis_lookup_calls_annotate_the_axis_structure() {
        let mut bytes = vec![0u8; 0x2000];
        // mov.l @(1, pc), r3 -> literal at 0x8 holding the axis-lookup
        // routine address, mov.l @(2, pc), r4 -> literal at 0xC holding
        // the axis structure, then jsr @r3.
        put_word(&mut bytes, 0x0, 0xD301);
        put_word(&mut bytes, 0x2, 0xD402);
        put_word(&mut bytes, 0x4, 0x430B); // jsr @r3
        put_word(&mut bytes, 0x6, 0x0009); // nop
        put_long(&mut bytes, 0x8, AXIS_LOOKUP);
        put_long(&mut bytes, 0xC, 0x1000);
        // Axis structure at 0x1000.
        put_long(&mut bytes, 0x1000, 0xFFFF_9000); // result address
        put_long(&mut bytes, 0x1004, 0xFFFF_9004); // lookup value address
        put_word(&mut bytes, 0x1008, 3); // axis length
        put_word(&mut bytes, 0x100A, 0x1111);
        put_word(&mut bytes, 0x100C, 0x2222);
        put_word(&mut bytes, 0x100E, 0x3333);

        let mut model = model_with_rom(bytes);
        let mut annotator = MitsuAnnotator::new();
        engine::disassemble(vec![(0, None)], &mut model, Some(&mut annotator));

        let result = model.get_field(0x1000).unwrap().unwrap();
        assert_eq!(result.width(), 4);
        assert_eq!(result.comment(), Some("Result address"));
        let length = model.get_field(0x1008).unwrap().unwrap();
        assert_eq!(length.comment(), Some("Axis length"));
        assert_eq!(length.scalar_value(), Some(3));
        // The axis data became composite members.
        let member = model.get_field(0x100A).unwrap().unwrap();
        assert!(member.member_of().is_some());
        assert_eq!(annotator.axes.get(&0xFFFF_9000), Some(&0x1000));
    }

    #[test]
    fn table_lookup_calls_annotate_headers_and_body() {
        let mut bytes = vec![0u8; 0x2000];
        // First call registers the axis, second call the table.
        put_word(&mut bytes, 0x0, 0xD303); // mov.l @(3, pc), r3 -> 0x10
        put_word(&mut bytes, 0x2, 0xD404); // mov.l @(4, pc), r4 -> 0x14
        put_word(&mut bytes, 0x4, 0x430B); // jsr @r3
        put_word(&mut bytes, 0x6, 0x0009);
        put_word(&mut bytes, 0x8, 0xD303); // mov.l @(3, pc), r3 -> 0x18
        put_word(&mut bytes, 0xA, 0xD404); // mov.l @(4, pc), r4 -> 0x1C
        put_word(&mut bytes, 0xC, 0x430B); // jsr @r3
        put_word(&mut bytes, 0xE, 0x0009);
        put_long(&mut bytes, 0x10, AXIS_LOOKUP);
        put_long(&mut bytes, 0x14, 0x1000); // axis structure
        put_long(&mut bytes, 0x18, TABLE_LOOKUP_BYTE);
        put_long(&mut bytes, 0x1C, 0x1100); // table structure

        // Axis at 0x1000 with two entries, result address 0xFFFF9000.
        put_long(&mut bytes, 0x1000, 0xFFFF_9000);
        put_long(&mut bytes, 0x1004, 0xFFFF_9004);
        put_word(&mut bytes, 0x1008, 2);
        put_word(&mut bytes, 0x100A, 0x0A0A);
        put_word(&mut bytes, 0x100C, 0x0B0B);

        // 2D byte table at 0x1100 indexed by that axis: header, adder,
        // y-axis pointer, then the body at +6.
        bytes[0x1100] = 2; // dimensions
        bytes[0x1101] = 0; // adder
        put_long(&mut bytes, 0x1102, 0xFFFF_9000); // y-axis result address
        bytes[0x1106] = 0xAA;
        bytes[0x1107] = 0xBB;

        let mut model = model_with_rom(bytes);
        let mut annotator = MitsuAnnotator::new();
        engine::disassemble(vec![(0, None)], &mut model, Some(&mut annotator));

        let header = model.get_field(0x1100).unwrap().unwrap();
        assert_eq!(header.comment(), Some("2D byte-width table"));
        let yaxis = model.get_field(0x1102).unwrap().unwrap();
        assert_eq!(yaxis.comment(), Some("Y-Axis: 0x1000"));
        // Two body bytes, one per axis entry.
        let body = model.get_field(0x1106).unwrap().unwrap();
        assert_eq!(body.scalar_value(), Some(0xAA));
        assert!(body.member_of().is_some());
        assert!(model.get_field(0x1107).unwrap().unwrap().member_of().is_some());
    }

    #[test]
    fn mova_jump_tables_disassemble_their_handlers() {
        let mut bytes = vec![0u8; 0x200];
        put_word(&mut bytes, 0x0, 0xC701); // mova @(1, pc), r0 -> 0x8
        put_word(&mut bytes, 0x2, 0x000B); // rts
        put_word(&mut bytes, 0x4, 0x0009); // nop
        // Jump table at 0x8, running up to the first handler: offsets
        // from the table base to handlers at 0xC and 0x10.
        put_word(&mut bytes, 0x8, 0x0004);
        put_word(&mut bytes, 0xA, 0x0008);
        put_word(&mut bytes, 0xC, 0x000B); // rts
        put_word(&mut bytes, 0xE, 0x0009);
        put_word(&mut bytes, 0x10, 0x000B); // rts
        put_word(&mut bytes, 0x12, 0x0009);

        let mut model = model_with_rom(bytes);
        engine::disassemble(vec![(0, None)], &mut model, None);
        fixups(&mut model);

        // Table words claimed, handlers disassembled.
        let entry = model.get_field(0x8).unwrap().unwrap();
        assert_eq!(entry.width(), 2);
        assert!(!entry.is_code());
        assert!(entry.comment().unwrap().starts_with("jsr "));
        let entry = model.get_field(0xA).unwrap().unwrap();
        assert!(entry.comment().unwrap().starts_with("jsr "));
        assert!(model.get_field(0xC).unwrap().unwrap().is_code());
        assert!(model.get_field(0x10).unwrap().unwrap().is_code());
        // Each table entry references the mova that addressed it.
        assert_eq!(model.get_references(0x8).unwrap(), &[0x0]);
    }

    #[test]
    fn fixups_label_the_known_locations() {
        let mut bytes = vec![0u8; 0x40000];
        put_long(&mut bytes, 0x0, 0x800);
        put_long(&mut bytes, 0x10, 0x900);
        let mut model = model_with_rom(bytes);
        let long = Field::long(0x0, &mut model);
        model.set_field(long).unwrap();
        let long = Field::long(0x10, &mut model);
        model.set_field(long).unwrap();

        fixups(&mut model);
        assert_eq!(model.get_label(0x800).unwrap().unwrap(), "init");
        assert_eq!(model.get_label(0x900).unwrap().unwrap(), "reset");
        assert_eq!(model.get_label(0xF44).unwrap().unwrap(), "ECU_ID1");
        assert_eq!(model.get_label(0xF54).unwrap().unwrap(), "ECU_ID2");
        assert_eq!(model.get_label(0xCC6).unwrap().unwrap(), "axis_lookup");
        assert_eq!(model.get_label(0x3FFCE).unwrap().unwrap(), "immobilizer");
        // The periphery words carry their own location-derived names.
        assert_eq!(model.get_label(0xF8A).unwrap().unwrap(), "periphery_F8A");
        assert_eq!(
            model.get_label(0xFFA).unwrap().unwrap(),
            "periphery_IMMOB"
        );
    }
}
