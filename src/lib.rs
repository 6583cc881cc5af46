//! A disassembler for SuperH SH-2 engine-control ROMs.
//!
//! The crate rebuilds an annotated assembly listing from a raw firmware
//! image: a memory model tracks what occupies every byte of the address
//! space, a work-queue engine walks code paths outward from the vector
//! table (following register-indirect branches through a best-effort
//! register tracker), and optional vendor heuristics recognize
//! calibration tables and jump tables along the way.

#[macro_use]
extern crate lazy_static;

pub mod decode;
pub mod engine;
pub mod field;
pub mod memory;
pub mod mitsubishi;
pub mod opcodes;
pub mod output;
pub mod processor;
pub mod registers;
pub mod rom;
pub mod sh7052;
pub mod sh7055;
