#![allow(dead_code)] // Complete API module, not all methods currently used
//! Call stack implementation
//!
//! This module provides the simulated call stack:
//! - [`CallStack`]: the ordered stack of frames (top = most recently pushed)
//! - [`StackFrame`]: a single simulated function invocation
//!
//! # Frame lifecycle
//!
//! A frame is created by an explicit push or by a simulated call. Returning
//! from a function marks the top frame *inactive* without removing it, so the
//! learner can still see the frame sitting on the stack after control has
//! logically left it. Only an explicit pop removes a frame.

use super::value::RegValue;
use rustc_hash::FxHashMap;
use std::fmt;

/// One simulated function invocation
#[derive(Debug, Clone, PartialEq)]
pub struct StackFrame {
    /// Opaque label identifying where control would return to. Free-form:
    /// the model never parses it.
    pub return_address: String,
    /// Arguments passed to the simulated call, in order
    pub parameters: Vec<i64>,
    /// Local variables. No current operation populates this; it exists so a
    /// frame renders the same set of fields a real activation record would.
    pub locals: FxHashMap<String, i64>,
    inactive: bool,
}

impl StackFrame {
    pub fn new(
        return_address: impl Into<String>,
        parameters: Vec<i64>,
        locals: FxHashMap<String, i64>,
    ) -> Self {
        StackFrame {
            return_address: return_address.into(),
            parameters,
            locals,
            inactive: false,
        }
    }

    /// Mark this frame as logically returned-from. Idempotent.
    pub fn mark_inactive(&mut self) {
        self.inactive = true;
    }

    /// Whether this frame has been returned from (but not yet popped)
    pub fn is_inactive(&self) -> bool {
        self.inactive
    }

    /// The return address as a register value
    pub fn return_value(&self) -> RegValue {
        RegValue::Label(self.return_address.clone())
    }
}

impl fmt::Display for StackFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut locals: Vec<_> = self.locals.iter().collect();
        locals.sort_by_key(|(name, _)| name.as_str());
        let locals = locals
            .iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect::<Vec<_>>()
            .join(", ");
        write!(
            f,
            "return_address={} parameters={:?} locals={{{}}} inactive={}",
            self.return_address, self.parameters, locals, self.inactive
        )
    }
}

/// The call stack
#[derive(Debug, Clone, Default)]
pub struct CallStack {
    frames: Vec<StackFrame>,
}

impl CallStack {
    pub fn new() -> Self {
        CallStack { frames: Vec::new() }
    }

    /// Push a frame onto the top of the stack
    pub fn push(&mut self, frame: StackFrame) {
        self.frames.push(frame);
    }

    /// Pop the top frame, or None if the stack is empty
    pub fn pop(&mut self) -> Option<StackFrame> {
        self.frames.pop()
    }

    /// Get the current (top) frame
    pub fn top(&self) -> Option<&StackFrame> {
        self.frames.last()
    }

    /// Get a mutable reference to the top frame
    pub fn top_mut(&mut self) -> Option<&mut StackFrame> {
        self.frames.last_mut()
    }

    /// Get all frames, bottom first (for display)
    pub fn frames(&self) -> &[StackFrame] {
        &self.frames
    }

    /// Get the depth of the call stack
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Check if the stack is empty
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Remove every frame
    pub fn clear(&mut self) {
        self.frames.clear();
    }
}
