//! End-to-end pipeline tests on synthetic SH7052-sized images: vector
//! seeding, the recursive walk, register-resolved calls, free-space
//! collapsing, and the final listing.

use sh2dasm::engine;
use sh2dasm::mitsubishi;
use sh2dasm::output;
use sh2dasm::processor::RomError;
use sh2dasm::rom::Rom;

fn put_word(bytes: &mut [u8], location: u32, word: u16) {
    bytes[location as usize..location as usize + 2].copy_from_slice(&word.to_be_bytes());
}

fn put_long(bytes: &mut [u8], location: u32, long: u32) {
    bytes[location as usize..location as usize + 4].copy_from_slice(&long.to_be_bytes());
}

/// A 256 KiB image with a power-on vector, one routine that calls a
/// second through a literal-pool pointer, and 0xFF padding everywhere
/// else.
fn synthetic_image() -> Vec<u8> {
    let mut bytes = vec![0xFFu8; 0x40000];
    for location in (0..0x400).step_by(4) {
        put_long(&mut bytes, location, 0xFFFF_FFFF);
    }
    put_long(&mut bytes, 0x0, 0x800); // power-on PC
    put_long(&mut bytes, 0x4, 0xFFFF_9000); // power-on SP, in RAM

    put_word(&mut bytes, 0x800, 0xE010); // mov #0x10, r0
    put_word(&mut bytes, 0x802, 0xD102); // mov.l @(2, pc), r1 -> 0x80C
    put_word(&mut bytes, 0x804, 0x410B); // jsr @r1
    put_word(&mut bytes, 0x806, 0x0009); // nop
    put_word(&mut bytes, 0x808, 0x000B); // rts
    put_word(&mut bytes, 0x80A, 0x0009); // nop (delay slot)
    put_long(&mut bytes, 0x80C, 0x900); // literal: second routine

    put_word(&mut bytes, 0x900, 0x000B); // rts
    put_word(&mut bytes, 0x902, 0x0009); // nop
    bytes
}

#[test]
fn unrecognized_images_are_rejected_up_front() {
    assert!(matches!(
        Rom::from_bytes(vec![0u8; 0x1000]),
        Err(RomError::UnrecognizedImage(0x1000))
    ));
}

#[test]
fn full_pipeline_produces_an_annotated_listing() {
    let mut rom = Rom::from_bytes(synthetic_image()).unwrap();
    rom.setup_vectors();
    let seeds = rom.entry_points();
    assert!(seeds.contains(&(0x800, Some(0))));
    // Vectors holding 0xFFFFFFFF point nowhere backed and do not seed.
    assert_eq!(seeds.len(), 1);

    engine::disassemble(seeds, &mut rom.model, None);
    mitsubishi::fixups(&mut rom.model);
    output::scan_free_space(&mut rom.model);

    // Both routines were walked; the call target was resolved through
    // the register file.
    let jsr = rom.model.get_field(0x804).unwrap().unwrap();
    assert_eq!(jsr.as_code().unwrap().args.target, Some(0x900));
    assert!(rom.model.get_field(0x900).unwrap().unwrap().is_code());

    let mut out = Vec::new();
    output::write_listing(&rom.model, &mut out, false).unwrap();
    let text = String::from_utf8(out).unwrap();

    // The vector table renders with its map names, and the entry point
    // picked up the Mitsubishi fixup label.
    assert!(text.contains("v_power_on_pc:"));
    assert!(text.contains("Power-on reset (PC)"));
    assert!(text.contains(".long init"));
    assert!(text.contains("00000800 init:"));

    // The second routine has no assigned name, so it synthesized one.
    assert!(text.contains("sub_900:"));
    assert!(text.contains("XREF: "));

    // Padding collapsed into .org directives instead of byte soup. The
    // tail run ends at the immobilizer word the fixups claimed.
    assert!(text.contains(".org 0x800"));
    assert!(text.contains(".org 0x3FFCE"));
}

#[test]
fn ram_segments_only_render_when_asked() {
    let mut rom = Rom::from_bytes(synthetic_image()).unwrap();
    rom.setup_vectors();

    let mut without = Vec::new();
    output::write_listing(&rom.model, &mut without, false).unwrap();
    let mut with = Vec::new();
    output::write_listing(&rom.model, &mut with, true).unwrap();

    let without = String::from_utf8(without).unwrap();
    let with = String::from_utf8(with).unwrap();
    assert!(!without.contains("FFFF9000"));
    assert!(with.contains("FFFF9000"));
    assert!(with.len() > without.len());
}
