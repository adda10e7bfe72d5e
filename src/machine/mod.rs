//! The register-machine model
//!
//! This module is the semantic core of the visualizer:
//! - [`value`]: tagged register contents ([`value::RegValue`] — int or label)
//! - [`registers`]: the fixed EAX/EBX/ECX/EDX file
//! - [`frame`]: stack frames and the call stack
//! - [`memory`]: the externally-seeded address → value table
//! - [`trace`]: diagnostic output from loop simulation
//! - [`engine`]: the [`engine::Machine`] that owns all of the above and
//!   implements the operations
//!
//! # Design
//!
//! The model is deliberately tiny and infallible: every operation is total,
//! with "failure" cases (empty-stack pop, unseeded address, unknown function
//! name) defined as benign no-ops or defaulted values. There is exactly one
//! `Machine` value, owned by whoever runs the event loop, and the UI renders
//! it through accessor methods — nothing here is global.

pub mod engine;
pub mod frame;
pub mod memory;
pub mod registers;
pub mod trace;
pub mod value;

pub use engine::Machine;
pub use frame::{CallStack, StackFrame};
pub use memory::{parse_memory_image, ImageError, Memory};
pub use registers::{Register, RegisterFile};
pub use trace::TraceLog;
pub use value::RegValue;
