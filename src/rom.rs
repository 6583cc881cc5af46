//! ROM container and run pipeline: chip detection, vector-table
//! pre-seeding, and entry-point collection.

use log::info;

use crate::engine::Seed;
use crate::field::Field;
use crate::memory::MemoryModel;
use crate::processor::{self, RomError};

/// The vector table occupies the first 0x400 bytes of every supported
/// chip, one long per entry.
pub const VECTOR_TABLE_END: u32 = 0x400;

pub struct Rom {
    pub model: MemoryModel,
}

impl Rom {
    /// Identify the chip from the image size and build the memory model.
    pub fn from_bytes(phys: Vec<u8>) -> Result<Rom, RomError> {
        let processor = processor::detect(&phys)?;
        info!("detected {} image ({:#x} bytes)", processor.name, phys.len());
        Ok(Rom {
            model: MemoryModel::new(processor, phys),
        })
    }

    /// Pre-define the vector table and the on-chip register map. Known
    /// vectors get their names and comments; `v_`-prefixed vector names
    /// propagate to their targets, minus the prefix.
    pub fn setup_vectors(&mut self) {
        let processor = self.model.processor;

        for location in (0..VECTOR_TABLE_END).step_by(4) {
            let entry = processor.vectors.get(&location);
            let size = entry.map_or(4, |e| e.size);
            let mut vector = scalar_for(size, location, &mut self.model);
            if let Some(entry) = entry {
                vector = vector.with_comment(entry.comment);
            }
            let value = vector.scalar_value();
            if self.model.set_field(vector).is_err() {
                continue;
            }
            let label = entry.map(|e| e.name);
            let _ = self.model.set_label(location, label);

            if let (Some(label), Some(value)) = (label, value) {
                if let Some(target_name) = label.strip_prefix("v_") {
                    let current = self.model.get_label(value).ok().flatten();
                    if current.as_deref().map_or(true, |l| l.starts_with("unk_")) {
                        let _ = self.model.set_label(value, Some(target_name));
                    }
                }
            }
        }

        for (&location, entry) in processor.registers.iter() {
            let field = scalar_for(entry.size, location, &mut self.model).with_comment(entry.comment);
            if self.model.set_field(field).is_ok() {
                let _ = self.model.set_label(location, Some(entry.name));
            }
        }
    }

    /// Entry points referenced by the vector table. Entries whose target
    /// is not backed by image bytes (stack pointers and the like) are
    /// skipped.
    pub fn entry_points(&self) -> Vec<Seed> {
        let mut seeds = Vec::new();
        for location in (0..VECTOR_TABLE_END).step_by(4) {
            let Ok(Some(field)) = self.model.get_field(location) else {
                continue;
            };
            let Some(value) = field.scalar_value() else {
                continue;
            };
            if self.model.get_phys(value, 1).is_ok() {
                seeds.push((value, Some(location)));
            }
        }
        seeds
    }
}

fn scalar_for(size: u32, location: u32, model: &mut MemoryModel) -> Field {
    match size {
        1 => Field::byte(location, model),
        2 => Field::word(location, model),
        _ => Field::long(location, model),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image_with_vector(vector: u32, target: u32) -> Vec<u8> {
        let mut phys = vec![0u8; 0x40000];
        phys[vector as usize..vector as usize + 4].copy_from_slice(&target.to_be_bytes());
        phys
    }

    #[test]
    fn vectors_are_labeled_and_propagated() {
        // Power-on PC vector points at 0x800.
        let mut phys = image_with_vector(0, 0x800);
        // Power-on SP vector points at RAM, which has no backing bytes.
        phys[4..8].copy_from_slice(&0xFFFF_9000u32.to_be_bytes());
        let mut rom = Rom::from_bytes(phys).unwrap();
        rom.setup_vectors();

        assert_eq!(
            rom.model.get_label(0).unwrap().unwrap(),
            "v_power_on_pc"
        );
        // The handler inherited the vector's name without the prefix.
        assert_eq!(rom.model.get_label(0x800).unwrap().unwrap(), "power_on_pc");

        // Unnamed vector slots still hold long fields.
        let field = rom.model.get_field(0x3FC).unwrap().unwrap();
        assert_eq!(field.width(), 4);
    }

    #[test]
    fn register_map_is_applied() {
        let mut rom = Rom::from_bytes(vec![0u8; 0x40000]).unwrap();
        rom.setup_vectors();
        let processor = rom.model.processor;
        let (&location, entry) = processor.registers.first().unwrap();
        assert_eq!(
            rom.model.get_label(location).unwrap().as_deref(),
            Some(entry.name)
        );
        // Register space has no backing, so the field has no value.
        let field = rom.model.get_field(location).unwrap().unwrap();
        assert_eq!(field.scalar_value(), None);
    }

    #[test]
    fn entry_points_skip_unbacked_targets() {
        let mut phys = image_with_vector(0, 0x800);
        phys[4..8].copy_from_slice(&0xFFFF_9000u32.to_be_bytes());
        let mut rom = Rom::from_bytes(phys).unwrap();
        rom.setup_vectors();

        let seeds = rom.entry_points();
        assert!(seeds.contains(&(0x800, Some(0))));
        assert!(!seeds.iter().any(|&(target, _)| target == 0xFFFF_9000));
        // The zero-filled vectors all point at address 0, which is
        // backed, so they seed too.
        assert!(seeds.contains(&(0, Some(8))));
    }
}
