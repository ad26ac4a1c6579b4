// Copyright 2026 the Bargrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal retained-mark scene runtime for `bargrid`.
//!
//! This crate holds the pieces a renderer needs and chart code produces:
//! - **Marks** are drawable primitives (rect, text, path) with stable
//!   identity and an explicit `z_index` for paint ordering.
//! - **Scene** retains the previous frame's marks and turns each new frame
//!   into an enter/update/exit diff stream, so hosts can commit incrementally.
//!
//! Text shaping and layout are out of scope; text marks store unshaped
//! strings and report no intrinsic bounds.

#![no_std]

extern crate alloc;

mod mark;
mod scene;

pub use mark::{Mark, MarkId, MarkShape, PathShape, RectShape, TextAnchor, TextBaseline, TextShape};
pub use scene::{MarkDiff, Scene};
