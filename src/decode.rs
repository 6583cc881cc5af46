//! Pure instruction-word decoding: table lookup, operand extraction,
//! branch-target arithmetic, and mnemonic text rendering.

use thiserror::Error;

use crate::opcodes::{Opcode, OPCODES};

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("no matching instruction for {0:#06x}")]
    NoMatch(u16),
}

/// Operand fields decoded from one instruction word. An absent field is
/// `None`, which is distinct from a decoded zero: a fixed or implicit
/// register never shows up here at all.
#[derive(Debug, Clone, Default)]
pub struct Args {
    pub m: Option<u32>,
    pub n: Option<u32>,
    pub imm: Option<u32>,
    pub disp: Option<u32>,
    /// Branch or data-access target, filled in by
    /// [`calculate_disp_target`] or by register-value resolution.
    pub target: Option<u32>,
}

/// Find the first table entry matching `word` and decode its fields.
pub fn lookup(word: u16) -> Result<(&'static Opcode, Args), DecodeError> {
    for opcode in OPCODES {
        if word & opcode.mask == opcode.pattern {
            return Ok((opcode, parse_args(word, opcode)));
        }
    }
    Err(DecodeError::NoMatch(word))
}

fn field(word: u16, position: (u16, u32)) -> Option<u32> {
    let (mask, shift) = position;
    if mask == 0 {
        None
    } else {
        Some(((word & mask) >> shift) as u32)
    }
}

fn parse_args(word: u16, opcode: &Opcode) -> Args {
    Args {
        m: field(word, opcode.m),
        n: field(word, opcode.n),
        imm: field(word, opcode.imm),
        disp: if opcode.disp == 0 {
            None
        } else {
            Some((word & opcode.disp) as u32)
        },
        target: None,
    }
}

/// Resolve a displacement into an absolute target address.
///
/// The sign-bit position follows the displacement field width (12, 8, or
/// 4 bits); the byte multiplier follows the mnemonic suffix (`.b` one,
/// `.l` and `mova` four, everything else two); long-multiplier forms
/// mask the PC to 4-byte alignment before the +4. `mov`-class
/// displacements are treated as unsigned even though the sign bit is
/// computed first. The stored displacement is scaled by the multiplier.
pub fn calculate_disp_target(opcode: &Opcode, args: &mut Args, pc: u32) {
    let Some(disp) = args.disp else {
        return;
    };

    let sign: i64 = if opcode.disp & 0xF00 != 0 {
        0x800
    } else if opcode.disp & 0xF0 != 0 {
        0x80
    } else if opcode.disp & 0xF != 0 {
        0x8
    } else {
        0
    };

    let mult: i64 = if opcode.mnemonic.ends_with(".b") {
        1
    } else if opcode.mnemonic.ends_with(".l") || opcode.mnemonic == "mova" {
        4
    } else {
        2
    };

    let disp = disp as i64;
    let mut target = if disp & sign != 0 && !opcode.mnemonic.starts_with("mov") {
        -((sign << 1) - ((disp - sign) * mult))
    } else {
        disp * mult
    };
    if mult == 4 {
        target += ((pc & 0xFFFF_FFFC) as i64) + 4;
    } else {
        target += pc as i64 + 4;
    }

    args.target = Some(target as u32);
    args.disp = Some((disp * mult) as u32);
}

/// Render the instruction text from the opcode's operand templates.
pub fn format_instruction(opcode: &Opcode, args: &Args) -> String {
    let mut text = String::from(opcode.mnemonic);
    if !opcode.args.0.is_empty() {
        let mut operands = expand(opcode.args.0, args);
        if !opcode.args.1.is_empty() {
            operands.push_str(", ");
            operands.push_str(&expand(opcode.args.1, args));
        }
        text.push(' ');
        text.push_str(&operands);
    }
    text
}

fn expand(template: &str, args: &Args) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let Some(close) = rest[open..].find('}').map(|i| open + i) else {
            rest = &rest[open..];
            break;
        };
        match &rest[open + 1..close] {
            "m" => out.push_str(&args.m.unwrap_or(0).to_string()),
            "n" => out.push_str(&args.n.unwrap_or(0).to_string()),
            "imm" => out.push_str(&format!("0x{:X}", args.imm.unwrap_or(0))),
            "disp" => out.push_str(&format!("0x{:X}", args.disp.unwrap_or(0))),
            other => out.push_str(other),
        }
        rest = &rest[close + 1..];
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn immediate_mov_decodes_fields() {
        let (opcode, args) = lookup(0xE510).unwrap();
        assert_eq!(opcode.mnemonic, "mov");
        assert_eq!(args.n, Some(5));
        assert_eq!(args.imm, Some(0x10));
        // Fields the encoding does not carry are absent, not zero.
        assert_eq!(args.m, None);
        assert_eq!(args.disp, None);
        assert_eq!(format_instruction(opcode, &args), "mov #0x10, r5");
    }

    #[test]
    fn register_branch_decodes_m_in_the_high_nibble() {
        let (opcode, args) = lookup(0x450B).unwrap();
        assert_eq!(opcode.mnemonic, "jsr");
        assert_eq!(args.m, Some(5));
        assert_eq!(args.n, None);
        assert_eq!(format_instruction(opcode, &args), "jsr @r5");
    }

    #[test]
    fn exact_patterns_win_over_field_forms() {
        assert_eq!(lookup(0x000B).unwrap().0.mnemonic, "rts");
        assert_eq!(lookup(0x0009).unwrap().0.mnemonic, "nop");
        // 0x4008 is shll2 r0, not a two-register form.
        assert_eq!(lookup(0x4008).unwrap().0.mnemonic, "shll2");
    }

    #[test]
    fn unassigned_encodings_do_not_match() {
        assert!(matches!(lookup(0xF123), Err(DecodeError::NoMatch(_))));
    }

    #[test]
    fn branch_target_positive_displacement() {
        let (opcode, mut args) = lookup(0xA7FF).unwrap();
        assert_eq!(opcode.mnemonic, "bra");
        calculate_disp_target(opcode, &mut args, 0x1000);
        assert_eq!(args.target, Some(0x1000 + 4 + 0x7FF * 2));
        // The stored displacement is scaled by the multiplier.
        assert_eq!(args.disp, Some(0x7FF * 2));
    }

    #[test]
    fn branch_target_sign_extends() {
        let (opcode, mut args) = lookup(0xA800).unwrap();
        calculate_disp_target(opcode, &mut args, 0x1000);
        // Displacement 0x800 is -2048 words: pc + 4 - 0x1000.
        assert_eq!(args.target, Some(0x4));

        // An 8-bit conditional branch sign-extends from bit 7.
        let (opcode, mut args) = lookup(0x8BFE).unwrap();
        assert_eq!(opcode.mnemonic, "bf");
        calculate_disp_target(opcode, &mut args, 0x100);
        assert_eq!(args.target, Some(0x100));
    }

    #[test]
    fn mov_displacements_are_always_unsigned() {
        // Displacement 0xFF has the sign bit set, but mov-class loads
        // never sign-extend.
        let (opcode, mut args) = lookup(0x91FF).unwrap();
        assert_eq!(opcode.mnemonic, "mov.w");
        calculate_disp_target(opcode, &mut args, 0x100);
        assert_eq!(args.target, Some(0x100 + 4 + 0xFF * 2));
    }

    #[test]
    fn long_loads_align_the_pc() {
        let (opcode, mut args) = lookup(0xD102).unwrap();
        assert_eq!(opcode.mnemonic, "mov.l");
        calculate_disp_target(opcode, &mut args, 0x102);
        // PC is masked to 4-byte alignment before the +4.
        assert_eq!(args.target, Some(0x100 + 4 + 2 * 4));
    }

    #[test]
    fn mova_uses_the_long_multiplier() {
        let (opcode, mut args) = lookup(0xC703).unwrap();
        assert_eq!(opcode.mnemonic, "mova");
        calculate_disp_target(opcode, &mut args, 0x1002);
        assert_eq!(args.target, Some(0x1000 + 4 + 3 * 4));
    }
}
