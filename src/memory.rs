//! The memory model: named address segments, typed located objects, and
//! per-byte label and cross-reference tracking.
//!
//! Every byte of the address space belongs to at most one located object.
//! A segment records that ownership in a slot array parallel to its
//! address range; the objects themselves live in an arena owned by the
//! model so that multi-byte spans can point back at their leading byte
//! without aliasing.

use crate::field::{Composite, Field};
use crate::processor::Processor;
use thiserror::Error;

pub type ObjectId = usize;
pub type CompositeId = usize;

/// Errors raised by memory-model operations.
#[derive(Debug, Error)]
pub enum SegmentError {
    /// The address falls outside every segment.
    #[error("invalid segment address: {0:#x}")]
    InvalidAddress(u32),
    /// The address is valid but its segment has no backing bytes.
    #[error("{0:#x} is not a physical location")]
    NotPhysical(u32),
    /// Placing the object would split an existing larger object.
    #[error("conflict with data at {0:#x}")]
    Conflict(u32),
}

/// Per-byte ownership state.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Slot {
    Empty,
    /// An object's span starts at this byte.
    Owner(ObjectId),
    /// The owning object starts this many bytes earlier.
    BackRef(u32),
}

/// A contiguous, named range of the address space, optionally backed by
/// image bytes. Unbacked segments (RAM, register space) still validate
/// addresses and hold labels and references.
pub struct Segment {
    pub name: &'static str,
    pub start: u32,
    pub end: u32,
    phys: Option<Vec<u8>>,
    slots: Vec<Slot>,
    xrefs: Vec<Vec<u32>>,
    labels: Vec<Option<String>>,
}

impl Segment {
    pub fn new(name: &'static str, start: u32, end: u32, phys: Option<Vec<u8>>) -> Segment {
        let len = (end - start) as usize;
        Segment {
            name,
            start,
            end,
            phys,
            slots: vec![Slot::Empty; len],
            xrefs: vec![Vec::new(); len],
            labels: vec![None; len],
        }
    }

    fn contains(&self, location: u32) -> bool {
        location >= self.start && location < self.end
    }

    fn index(&self, location: u32) -> usize {
        (location - self.start) as usize
    }
}

/// The full addressable space of one chip, as a set of disjoint segments.
pub struct MemoryModel {
    pub processor: Processor,
    segments: Vec<Segment>,
    objects: Vec<Option<Field>>,
    composites: Vec<Composite>,
}

impl MemoryModel {
    /// Build the standard ROM/RAM/REG layout for a chip from its image.
    pub fn new(processor: Processor, phys: Vec<u8>) -> MemoryModel {
        let end = phys.len() as u32;
        let segments = vec![
            Segment::new("ROM", 0, end, Some(phys)),
            Segment::new("RAM", processor.ram.0, processor.ram.1, None),
            Segment::new("REG", processor.io.0, processor.io.1, None),
        ];
        Self::with_segments(processor, segments)
    }

    /// Build the model from an explicit segment layout.
    pub fn with_segments(processor: Processor, segments: Vec<Segment>) -> MemoryModel {
        MemoryModel {
            processor,
            segments,
            objects: Vec::new(),
            composites: Vec::new(),
        }
    }

    fn segment(&self, location: u32) -> Result<&Segment, SegmentError> {
        self.segments
            .iter()
            .find(|s| s.contains(location))
            .ok_or(SegmentError::InvalidAddress(location))
    }

    fn segment_mut(&mut self, location: u32) -> Result<&mut Segment, SegmentError> {
        self.segments
            .iter_mut()
            .find(|s| s.contains(location))
            .ok_or(SegmentError::InvalidAddress(location))
    }

    /// The raw bytes backing `location..location + width`.
    pub fn get_phys(&self, location: u32, width: u32) -> Result<&[u8], SegmentError> {
        let seg = self.segment(location)?;
        let end = location
            .checked_add(width)
            .ok_or(SegmentError::InvalidAddress(location))?;
        if end > seg.end {
            return Err(SegmentError::InvalidAddress(location));
        }
        let phys = seg
            .phys
            .as_ref()
            .ok_or(SegmentError::NotPhysical(location))?;
        let idx = seg.index(location);
        Ok(&phys[idx..idx + width as usize])
    }

    fn owner_id(&self, location: u32) -> Result<Option<ObjectId>, SegmentError> {
        let seg = self.segment(location)?;
        match seg.slots[seg.index(location)] {
            Slot::Empty => Ok(None),
            Slot::Owner(id) => Ok(Some(id)),
            Slot::BackRef(k) => match seg.slots[seg.index(location - k)] {
                Slot::Owner(id) => Ok(Some(id)),
                _ => Ok(None),
            },
        }
    }

    /// The object whose span covers `location`, if any.
    pub fn get_field(&self, location: u32) -> Result<Option<&Field>, SegmentError> {
        Ok(self.owner_id(location)?.and_then(|id| self.objects[id].as_ref()))
    }

    pub fn field_mut(&mut self, location: u32) -> Result<Option<&mut Field>, SegmentError> {
        let id = self.owner_id(location)?;
        Ok(id.and_then(move |id| self.objects[id].as_mut()))
    }

    /// Replace the free-text comment on the object covering `location`.
    pub fn set_comment(&mut self, location: u32, comment: &str) -> Result<(), SegmentError> {
        if let Some(field) = self.field_mut(location)? {
            field.set_comment(Some(comment.to_string()));
        }
        Ok(())
    }

    /// Claim the span of `field`. Smaller objects fully inside the new
    /// span are absorbed (their comments and references move to the new
    /// object); an object that would be split is a hard conflict and the
    /// model is left untouched.
    pub fn set_field(&mut self, mut field: Field) -> Result<ObjectId, SegmentError> {
        let location = field.location();
        let width = field.width();
        let span_end = location
            .checked_add(width)
            .ok_or(SegmentError::InvalidAddress(location))?;
        if span_end > self.segment(location)?.end {
            return Err(SegmentError::InvalidAddress(location));
        }

        // First pass: find everything the span covers without touching it.
        let mut absorbed: Vec<ObjectId> = Vec::new();
        let mut at = location;
        while at < span_end {
            let seg = self.segment(at)?;
            match seg.slots[seg.index(at)] {
                Slot::Empty => at += 1,
                Slot::Owner(id) => match self.objects[id].as_ref() {
                    Some(existing) if existing.location() + existing.width() <= span_end => {
                        absorbed.push(id);
                        at += existing.width();
                    }
                    Some(_) => return Err(SegmentError::Conflict(at)),
                    None => at += 1,
                },
                // The owner starts before our span, so we would split it.
                Slot::BackRef(_) => return Err(SegmentError::Conflict(at)),
            }
        }

        // Absorb comments and references, then clear the old objects.
        let mut comments: Vec<String> = Vec::new();
        for id in absorbed {
            let old = match self.objects[id].take() {
                Some(old) => old,
                None => continue,
            };
            if let Some(comment) = old.comment() {
                comments.push(comment.to_string());
            }
            let refs = {
                let seg = self.segment(old.location())?;
                seg.xrefs[seg.index(old.location())].clone()
            };
            for reference in refs {
                self.add_reference(location, reference)?;
            }
            let seg = self.segment_mut(old.location())?;
            let idx = seg.index(old.location());
            for k in 0..old.width() as usize {
                seg.slots[idx + k] = Slot::Empty;
            }
        }
        if !comments.is_empty() {
            if let Some(own) = field.comment() {
                comments.insert(0, own.to_string());
            }
            field.set_comment(Some(comments.join("\n")));
        }

        let id = self.objects.len();
        self.objects.push(Some(field));
        let seg = self.segment_mut(location)?;
        let idx = seg.index(location);
        seg.slots[idx] = Slot::Owner(id);
        for k in 1..width as usize {
            seg.slots[idx + k] = Slot::BackRef(k as u32);
        }
        Ok(id)
    }

    /// Clear any established object covering `location`.
    pub fn unset_field(&mut self, location: u32) -> Result<(), SegmentError> {
        if let Some(id) = self.owner_id(location)? {
            if let Some(old) = self.objects[id].take() {
                let seg = self.segment_mut(old.location())?;
                let idx = seg.index(old.location());
                for k in 0..old.width() as usize {
                    seg.slots[idx + k] = Slot::Empty;
                }
            }
        }
        Ok(())
    }

    /// Record that `reference` reads or branches to `location`.
    /// References are kept in ascending order, deduplicated;
    /// self-references are dropped.
    pub fn add_reference(&mut self, location: u32, reference: u32) -> Result<(), SegmentError> {
        if reference == location {
            return Ok(());
        }
        let seg = self.segment_mut(location)?;
        let idx = seg.index(location);
        let refs = &mut seg.xrefs[idx];
        if let Err(pos) = refs.binary_search(&reference) {
            refs.insert(pos, reference);
        }
        Ok(())
    }

    pub fn get_references(&self, location: u32) -> Result<&[u32], SegmentError> {
        let seg = self.segment(location)?;
        Ok(&seg.xrefs[seg.index(location)])
    }

    /// The label for a location: the assigned name, or a synthesized
    /// `<prefix>_<hex>` when the location is referenced but unnamed.
    /// Mid-object locations resolve to `<base label>+<offset>`.
    pub fn get_label(&self, location: u32) -> Result<Option<String>, SegmentError> {
        let seg = self.segment(location)?;
        let mut meta = self.get_field(location)?;
        if meta.is_none() && location > seg.start {
            meta = self.get_field(location - 1)?;
        }
        let (base, prefix) = match meta {
            Some(field) => (field.location(), field.unknown_prefix()),
            None => (location, "unk"),
        };
        let idx = seg.index(base);
        let mut label = seg.labels[idx].clone();
        if label.is_none() && !seg.xrefs[idx].is_empty() {
            label = Some(format!("{}_{:X}", prefix, base));
        }
        if base < location {
            if let Some(l) = label {
                label = Some(format!("{}+{}", l, location - base));
            }
        }
        Ok(label)
    }

    pub fn set_label(&mut self, location: u32, label: Option<&str>) -> Result<(), SegmentError> {
        let seg = self.segment_mut(location)?;
        let idx = seg.index(location);
        seg.labels[idx] = label.map(str::to_string);
        Ok(())
    }

    /// Cross-reference comments for a location, wrapped for the listing
    /// comment column.
    pub fn generate_comments(&self, location: u32) -> Vec<String> {
        const MAX_XREFS: usize = 6;
        let refs = match self.get_references(location) {
            Ok(refs) if !refs.is_empty() => refs.to_vec(),
            _ => return Vec::new(),
        };
        let mut text = String::from("XREF: ");
        for (i, &reference) in refs.iter().enumerate() {
            let label = self
                .get_label(reference)
                .ok()
                .flatten()
                .unwrap_or_else(|| format!("0x{:X}", reference));
            text.push_str(&label);
            if i + 1 == MAX_XREFS {
                if refs.len() > MAX_XREFS {
                    text.push_str("...");
                }
                break;
            }
            if i + 1 != refs.len() {
                text.push_str(", ");
            }
        }
        wrap(&text, 29)
    }

    /// Backed address ranges, used for free-space scanning and output.
    pub fn get_phys_ranges(&self) -> Vec<(u32, u32)> {
        self.segments
            .iter()
            .filter(|s| s.phys.is_some())
            .map(|s| (s.start, s.end))
            .collect()
    }

    pub fn all_ranges(&self) -> Vec<(u32, u32)> {
        self.segments.iter().map(|s| (s.start, s.end)).collect()
    }

    pub fn get_segment_name(&self, location: u32) -> Result<&'static str, SegmentError> {
        Ok(self.segment(location)?.name)
    }

    pub fn location_isset(&self, location: u32) -> bool {
        matches!(self.get_field(location), Ok(Some(_)))
    }

    pub fn new_composite(&mut self, items_per_line: u32) -> CompositeId {
        self.composites.push(Composite {
            items_per_line,
            members: Vec::new(),
        });
        self.composites.len() - 1
    }

    pub fn composite(&self, id: CompositeId) -> &Composite {
        &self.composites[id]
    }

    pub fn composite_mut(&mut self, id: CompositeId) -> &mut Composite {
        &mut self.composites[id]
    }
}

fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if line.is_empty() {
            line.push_str(word);
        } else if line.len() + 1 + word.len() <= width {
            line.push(' ');
            line.push_str(word);
        } else {
            lines.push(std::mem::take(&mut line));
            line.push_str(word);
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{sh7052, sh7055};

    fn test_processor() -> Processor {
        Processor {
            name: "TEST",
            vectors: &sh7052::VECTORS,
            registers: &sh7055::REGISTERS,
            ram: (0xFFFF_8000, 0xFFFF_B000),
            io: (0xFFFF_E400, 0xFFFF_F860),
        }
    }

    fn model_with_rom(bytes: Vec<u8>) -> MemoryModel {
        let end = bytes.len() as u32;
        MemoryModel::with_segments(
            test_processor(),
            vec![
                Segment::new("ROM", 0, end, Some(bytes)),
                Segment::new("RAM", 0xFFFF_8000, 0xFFFF_B000, None),
            ],
        )
    }

    #[test]
    fn phys_reads_respect_segment_backing() {
        let model = model_with_rom(vec![0xAA, 0xBB, 0xCC, 0xDD]);
        assert_eq!(model.get_phys(0, 2).unwrap(), &[0xAA, 0xBB]);
        assert!(matches!(
            model.get_phys(0xFFFF_8000, 1),
            Err(SegmentError::NotPhysical(_))
        ));
        assert!(matches!(
            model.get_phys(0x1234_5678, 1),
            Err(SegmentError::InvalidAddress(_))
        ));
        // A read straddling the segment end is rejected.
        assert!(model.get_phys(3, 2).is_err());
    }

    #[test]
    fn placement_absorbs_smaller_objects() {
        let mut model = model_with_rom(vec![0; 0x20]);
        let inner = Field::byte(0x11, &model).with_comment("inner datum");
        model.set_field(inner).unwrap();
        assert!(model.add_reference(0x100, 0x4).is_err());
        model.add_reference(0x11, 0x8).unwrap();

        let outer = Field::long(0x10, &mut model);
        model.set_field(outer).unwrap();

        let field = model.get_field(0x11).unwrap().unwrap();
        assert_eq!(field.location(), 0x10);
        assert_eq!(field.width(), 4);
        assert_eq!(field.comment(), Some("inner datum"));
        // The absorbed reference now points at the new object.
        assert_eq!(model.get_references(0x10).unwrap(), &[0x8]);
    }

    #[test]
    fn placement_that_would_split_is_a_conflict() {
        let mut model = model_with_rom(vec![0; 0x20]);
        let long = Field::long(0x10, &mut model);
        model.set_field(long).unwrap();

        // One byte inside the long's span, not covering all of it.
        let result = model.set_field(Field::byte(0x11, &model));
        assert!(matches!(result, Err(SegmentError::Conflict(_))));

        // A span that covers the long's head but not its tail.
        let long = Field::long(0x18, &mut model);
        model.set_field(long).unwrap();
        let word = Field::word(0x16, &model);
        assert!(matches!(
            model.set_field(word),
            Err(SegmentError::Conflict(_))
        ));

        // The original objects are still intact.
        assert_eq!(model.get_field(0x12).unwrap().unwrap().location(), 0x10);
        assert_eq!(model.get_field(0x18).unwrap().unwrap().width(), 4);
    }

    #[test]
    fn no_partial_overlap_survives_any_placement_order() {
        let mut model = model_with_rom(vec![0; 0x40]);
        let placements = [(0x00u32, 4u32), (0x02, 2), (0x04, 1), (0x04, 4), (0x06, 2)];
        for &(location, width) in &placements {
            let field = match width {
                1 => Field::byte(location, &model),
                2 => Field::word(location, &model),
                _ => Field::long(location, &mut model),
            };
            let _ = model.set_field(field);
        }
        // Walk the segment: every byte is either unclaimed or inside
        // exactly one object whose span is internally consistent.
        let mut at = 0u32;
        while at < 0x40 {
            match model.get_field(at).unwrap() {
                Some(field) => {
                    assert!(field.location() <= at);
                    assert!(at < field.location() + field.width());
                    at = field.location() + field.width();
                }
                None => at += 1,
            }
        }
    }

    #[test]
    fn labels_synthesize_from_references() {
        let mut model = model_with_rom(vec![0; 0x20]);
        let long = Field::long(0x10, &mut model);
        model.set_field(long).unwrap();

        // No references, no assigned name: no label at all.
        assert_eq!(model.get_label(0x10).unwrap(), None);

        model.add_reference(0x10, 0x4).unwrap();
        assert_eq!(model.get_label(0x10).unwrap().unwrap(), "long_10");
        // Mid-object resolution appends the offset.
        assert_eq!(model.get_label(0x12).unwrap().unwrap(), "long_10+2");

        model.set_label(0x10, Some("entry")).unwrap();
        assert_eq!(model.get_label(0x10).unwrap().unwrap(), "entry");
        assert_eq!(model.get_label(0x12).unwrap().unwrap(), "entry+2");
    }

    #[test]
    fn unset_clears_the_whole_span() {
        let mut model = model_with_rom(vec![0; 0x10]);
        let long = Field::long(0x4, &mut model);
        model.set_field(long).unwrap();
        assert!(model.location_isset(0x6));
        assert_eq!(model.get_segment_name(0x6).unwrap(), "ROM");

        // Clearing through a mid-object address removes the owner too.
        model.unset_field(0x6).unwrap();
        assert!(!model.location_isset(0x4));
        assert!(!model.location_isset(0x7));
    }

    #[test]
    fn references_stay_sorted_and_deduplicated() {
        let mut model = model_with_rom(vec![0; 0x10]);
        model.add_reference(0x4, 0xC).unwrap();
        model.add_reference(0x4, 0x2).unwrap();
        model.add_reference(0x4, 0xC).unwrap();
        model.add_reference(0x4, 0x4).unwrap(); // self-reference, dropped
        assert_eq!(model.get_references(0x4).unwrap(), &[0x2, 0xC]);
    }

    #[test]
    fn xref_comments_are_capped_and_wrapped() {
        let mut model = model_with_rom(vec![0; 0x100]);
        for i in 0..8u32 {
            model.add_reference(0x80, i * 2).unwrap();
        }
        let comments = model.generate_comments(0x80);
        let joined = comments.join(" ");
        assert!(joined.starts_with("XREF: "));
        assert!(joined.ends_with("..."));
        for line in &comments {
            assert!(line.len() <= 29);
        }
    }
}
