//! The located-object taxonomy: scalar data, decoded code, and
//! free-space runs, plus their listing renderers.
//!
//! Scalar fields grouped into a [`Composite`] fold onto shared output
//! lines; only the leading member produces text.

use crate::decode::Args;
use crate::memory::{CompositeId, MemoryModel};
use crate::opcodes::Opcode;

/// A run of same-width scalar fields rendered as columns on shared lines
/// (calibration table rows, axis data).
#[derive(Debug, Clone)]
pub struct Composite {
    pub items_per_line: u32,
    /// Member locations, in placement order.
    pub members: Vec<u32>,
}

/// A claimed span of data bytes with a decoded big-endian value. The
/// value is absent when the segment has no backing bytes.
#[derive(Debug, Clone)]
pub struct ScalarField {
    pub location: u32,
    pub width: u32,
    pub value: Option<u32>,
    pub comment: Option<String>,
    pub unknown_prefix: &'static str,
    pub member_of: Option<CompositeId>,
}

/// A single decoded instruction word.
#[derive(Debug, Clone)]
pub struct CodeField {
    pub location: u32,
    pub opcode: &'static Opcode,
    pub args: Args,
    /// Rendered mnemonic text; direct branches carry a literal `label`
    /// placeholder resolved at render time.
    pub text: String,
    pub comment: Option<String>,
}

/// A collapsed run of unclaimed padding.
#[derive(Debug, Clone)]
pub struct FreeField {
    pub location: u32,
    pub width: u32,
    pub comment: Option<String>,
}

/// Everything that can occupy a byte span in the memory model.
#[derive(Debug, Clone)]
pub enum Field {
    Scalar(ScalarField),
    Code(CodeField),
    Free(FreeField),
}

impl Field {
    /// A one-byte datum at `location`.
    pub fn byte(location: u32, model: &MemoryModel) -> Field {
        Field::Scalar(ScalarField {
            location,
            width: 1,
            value: model.get_phys(location, 1).ok().map(|b| b[0] as u32),
            comment: None,
            unknown_prefix: "byte",
            member_of: None,
        })
    }

    /// A two-byte datum at `location`.
    pub fn word(location: u32, model: &MemoryModel) -> Field {
        Field::Scalar(ScalarField {
            location,
            width: 2,
            value: model
                .get_phys(location, 2)
                .ok()
                .map(|b| u16::from_be_bytes([b[0], b[1]]) as u32),
            comment: None,
            unknown_prefix: "word",
            member_of: None,
        })
    }

    /// A four-byte datum at `location`. When the decoded value is itself
    /// a valid address, the new field is registered as a reference to it.
    pub fn long(location: u32, model: &mut MemoryModel) -> Field {
        let value = model
            .get_phys(location, 4)
            .ok()
            .map(|b| u32::from_be_bytes([b[0], b[1], b[2], b[3]]));
        if let Some(value) = value {
            let _ = model.add_reference(value, location);
        }
        Field::Scalar(ScalarField {
            location,
            width: 4,
            value,
            comment: None,
            unknown_prefix: "long",
            member_of: None,
        })
    }

    pub fn free(location: u32, width: u32) -> Field {
        Field::Free(FreeField {
            location,
            width,
            comment: None,
        })
    }

    pub fn with_comment(mut self, comment: &str) -> Field {
        self.set_comment(Some(comment.to_string()));
        self
    }

    pub fn with_prefix(mut self, prefix: &'static str) -> Field {
        if let Field::Scalar(scalar) = &mut self {
            scalar.unknown_prefix = prefix;
        }
        self
    }

    pub fn with_member_of(mut self, id: CompositeId) -> Field {
        if let Field::Scalar(scalar) = &mut self {
            scalar.member_of = Some(id);
        }
        self
    }

    pub fn location(&self) -> u32 {
        match self {
            Field::Scalar(f) => f.location,
            Field::Code(f) => f.location,
            Field::Free(f) => f.location,
        }
    }

    pub fn width(&self) -> u32 {
        match self {
            Field::Scalar(f) => f.width,
            Field::Code(_) => 2,
            Field::Free(f) => f.width,
        }
    }

    pub fn comment(&self) -> Option<&str> {
        match self {
            Field::Scalar(f) => f.comment.as_deref(),
            Field::Code(f) => f.comment.as_deref(),
            Field::Free(f) => f.comment.as_deref(),
        }
    }

    pub fn set_comment(&mut self, comment: Option<String>) {
        match self {
            Field::Scalar(f) => f.comment = comment,
            Field::Code(f) => f.comment = comment,
            Field::Free(f) => f.comment = comment,
        }
    }

    /// The prefix used when synthesizing a label for this object.
    pub fn unknown_prefix(&self) -> &'static str {
        match self {
            Field::Scalar(f) => f.unknown_prefix,
            Field::Code(_) => "sub",
            Field::Free(_) => "unk",
        }
    }

    pub fn member_of(&self) -> Option<CompositeId> {
        match self {
            Field::Scalar(f) => f.member_of,
            _ => None,
        }
    }

    pub fn scalar_value(&self) -> Option<u32> {
        match self {
            Field::Scalar(f) => f.value,
            _ => None,
        }
    }

    pub fn is_code(&self) -> bool {
        matches!(self, Field::Code(_))
    }

    pub fn as_code(&self) -> Option<&CodeField> {
        match self {
            Field::Code(f) => Some(f),
            _ => None,
        }
    }

    /// The assembler text for this object. With `no_cmd` set only the
    /// bare value is produced, for folded composite members.
    pub fn instruction(&self, model: &MemoryModel, no_cmd: bool) -> String {
        match self {
            Field::Scalar(f) => f.instruction(model, no_cmd),
            Field::Code(f) => f.instruction(model, no_cmd),
            Field::Free(f) => format!(".org 0x{:X}", f.location + f.width),
        }
    }

    /// Free-text and value annotations for this object, one string per
    /// output line.
    pub fn generate_comments(&self, model: &MemoryModel) -> Vec<String> {
        let mut comments: Vec<String> = self
            .comment()
            .map(|c| c.split('\n').map(str::to_string).collect())
            .unwrap_or_default();
        match self {
            Field::Scalar(f) => {
                if f.width == 1 {
                    if let Some(value) = f.value {
                        if (value as u8).is_ascii_alphanumeric() {
                            comments.push(format!("'{}'", value as u8 as char));
                        }
                    }
                }
            }
            Field::Code(f) => f.target_comments(model, &mut comments),
            Field::Free(f) => comments.push(format!("{} bytes of free space", f.width)),
        }
        comments
    }

    /// The full listing line (or lines) for this object. Non-leading
    /// composite members yield an empty string: they fold into the line
    /// produced by their leader.
    pub fn listing_line(&self, model: &MemoryModel) -> String {
        if let Some(id) = self.member_of() {
            let composite = model.composite(id);
            if composite.members.first() == Some(&self.location()) {
                return composite_lines(id, model);
            }
            return String::new();
        }

        let location = self.location();
        let instruction = self.instruction(model, false);
        let label = label_column(model, location);
        let mut comments = self.generate_comments(model);
        comments.extend(model.generate_comments(location));

        let mut lines = Vec::new();
        if comments.is_empty() {
            lines.push(format!("{:08X} {:<16} {}", location, label, instruction));
        } else if instruction.len() > 21 {
            lines.push(format!("{:08X} {:<16} {}", location, label, instruction));
            for comment in comments {
                lines.push(format!("{:47} ! {}", "", comment));
            }
        } else {
            let first = comments.remove(0);
            lines.push(format!(
                "{:08X} {:<16} {:<21} ! {}",
                location, label, instruction, first
            ));
            for comment in comments {
                lines.push(format!("{:47} ! {}", "", comment));
            }
        }
        lines.join("\n")
    }
}

impl ScalarField {
    fn directive(&self) -> &'static str {
        match self.width {
            1 => ".byte",
            2 => ".word",
            _ => ".long",
        }
    }

    fn instruction(&self, model: &MemoryModel, no_cmd: bool) -> String {
        if self.width == 4 {
            let Some(value) = self.value else {
                return String::from(".long 0x00000000");
            };
            // Longs that point at a known location render its label.
            let text = model
                .get_label(value)
                .ok()
                .flatten()
                .unwrap_or_else(|| format!("0x{:08X}", value));
            if no_cmd {
                text
            } else {
                format!(".long {}", text)
            }
        } else {
            let value = self.value.unwrap_or(0);
            let hex = if self.width == 1 {
                format!("0x{:02X}", value)
            } else {
                format!("0x{:04X}", value)
            };
            if no_cmd {
                hex
            } else {
                format!("{} {}", self.directive(), hex)
            }
        }
    }
}

impl CodeField {
    fn instruction(&self, model: &MemoryModel, no_cmd: bool) -> String {
        if !no_cmd && self.text.contains("label") {
            if let Some(target) = self.args.target {
                let label = model
                    .get_label(target)
                    .ok()
                    .flatten()
                    .unwrap_or_else(|| format!("0x{:X}", target));
                return self.text.replace("label", &label);
            }
        }
        self.text.clone()
    }

    /// Annotate what a resolved target holds: the pointee of a long, the
    /// value of a byte or word, or just the target's name.
    fn target_comments(&self, model: &MemoryModel, comments: &mut Vec<String>) {
        let Some(target) = self.args.target else {
            return;
        };
        let Some(label) = model.get_label(target).ok().flatten() else {
            return;
        };
        let meta = model.get_field(target).ok().flatten();
        match meta {
            Some(Field::Scalar(scalar)) if scalar.width == 4 => {
                let pointee = match scalar.value {
                    Some(value) => model
                        .get_label(value)
                        .ok()
                        .flatten()
                        .unwrap_or_else(|| format!("0x{:X}", value)),
                    None => String::from("0x0"),
                };
                comments.push(format!("[{}] = {}", label, pointee));
            }
            Some(Field::Scalar(scalar)) if !self.text.contains("label") => {
                comments.push(format!("[{}] = 0x{:X}", label, scalar.value.unwrap_or(0)));
            }
            _ if !self.text.contains("label") => comments.push(label),
            _ => {}
        }
    }
}

fn label_column(model: &MemoryModel, location: u32) -> String {
    match model.get_label(location).ok().flatten() {
        Some(label) if !label.contains('+') => format!("{}:", label),
        _ => String::new(),
    }
}

fn composite_lines(id: CompositeId, model: &MemoryModel) -> String {
    let composite = model.composite(id);
    let mut val: Vec<String> = Vec::new();
    let mut label_used = false;
    let mut per_line = 1u32;
    for &location in &composite.members {
        let Some(member) = model.get_field(location).ok().flatten() else {
            continue;
        };
        if member.location() != location {
            // Clobbered by a later placement; render what remains.
            continue;
        }
        if per_line == 1 {
            let label = if label_used {
                String::new()
            } else {
                label_used = true;
                label_column(model, location)
            };
            val.push(format!("{:08X} {:<16} ", location, label));
            val.push(member.instruction(model, false));
        } else {
            val.push(member.instruction(model, true));
        }
        val.push(String::from(", "));
        per_line += 1;
        if per_line > composite.items_per_line {
            *val.last_mut().unwrap() = String::from("\n");
            per_line = 1;
        }
    }
    if val.last().map(String::as_str) == Some("\n") {
        val.pop();
    }
    val.join("")
}

#[cfg(test)]
mod tests {
    use super::*;
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
    fn scalar_rendering() {
        let mut bytes = vec![0u8; 0x10];
        bytes[0] = 0x41; // 'A'
        bytes[2] = 0x12;
        bytes[3] = 0x34;
        let model = model_with_rom(bytes);

        let byte = Field::byte(0, &model);
        assert_eq!(byte.instruction(&model, false), ".byte 0x41");
        assert_eq!(byte.instruction(&model, true), "0x41");
        assert_eq!(byte.generate_comments(&model), vec!["'A'"]);

        let word = Field::word(2, &model);
        assert_eq!(word.instruction(&model, false), ".word 0x1234");
    }

    #[test]
    fn long_renders_target_label() {
        let mut bytes = vec![0u8; 0x20];
        bytes[3] = 0x10; // points at 0x10
        let mut model = model_with_rom(bytes);
        let long = Field::long(0, &mut model);
        model.set_field(long).unwrap();
        model.set_label(0x10, Some("handler")).unwrap();

        let field = model.get_field(0).unwrap().unwrap().clone();
        assert_eq!(field.instruction(&model, false), ".long handler");
        // Constructing the long registered a reference to its pointee.
        assert_eq!(model.get_references(0x10).unwrap(), &[0]);
    }

    #[test]
    fn composite_members_fold_onto_shared_lines() {
        let bytes = vec![0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88];
        let mut model = model_with_rom(bytes);
        let id = model.new_composite(2);
        for location in [0u32, 2, 4, 6] {
            let member = Field::word(location, &model).with_member_of(id);
            model.set_field(member).unwrap();
            model.composite_mut(id).members.push(location);
        }

        let leader = model.get_field(0).unwrap().unwrap().clone();
        let text = leader.listing_line(&model);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains(".word 0x1122"));
        assert!(lines[0].contains("0x3344"));
        assert!(lines[1].contains(".word 0x5566"));

        // Non-leading members stay silent.
        let follower = model.get_field(2).unwrap().unwrap().clone();
        assert_eq!(follower.listing_line(&model), "");
    }

    #[test]
    fn free_space_renders_org() {
        let model = model_with_rom(vec![0xFF; 0x10]);
        let free = Field::free(0, 0x10);
        assert_eq!(free.instruction(&model, false), ".org 0x10");
        assert_eq!(
            free.generate_comments(&model),
            vec!["16 bytes of free space"]
        );
    }
}
