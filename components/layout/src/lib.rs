#![no_std]
//! Flow layout for `FlowUI`.
//!
//! A flow arranges children left to right and wraps onto a new row whenever
//! the next child would cross the container's right edge, like words in a
//! paragraph or a row of tag chips:
//!
//! ```text
//! ┌──────────────────────────────┐
//! │ [Monday] [Tuesday] [Wednes…] │
//! │ [Thursday] [Friday]          │
//! │ [Saturday] [Sunday]          │
//! └──────────────────────────────┘
//! ```
//!
//! The crate contains:
//!
//! - the pure engine in [`flow`] ([`measure`], [`place`]),
//! - [`FlowLayout`], which speaks the two-pass [`Layout`] protocol, and the
//!   [`Flow`] container built on it,
//! - [`FlowCache`], an opt-in memo for hosts that repeat passes.
//!
//! # Example
//!
//! ```rust
//! use flowui_layout::{Point, Size, place};
//!
//! let result = place(&[Size::new(60.0, 10.0), Size::new(60.0, 10.0)], 2.0, 100.0);
//!
//! assert_eq!(result.offsets[1], Point::new(0.0, 12.0));
//! assert_eq!(result.total_size, Size::new(60.0, 22.0));
//! ```

extern crate alloc;

pub use flowui_core::layout::*;

pub mod cache;
pub mod container;
pub mod flow;

pub use cache::FlowCache;
pub use container::{Flow, FlowLayout, flow};
pub use flow::{DEFAULT_SPACING, FlowConfig, LayoutResult, measure, place};
