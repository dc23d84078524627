#![no_std]
//! Core types for `FlowUI`.
//!
//! This crate holds the value types every layout pass speaks in ([`Size`],
//! [`Point`], [`Rect`], [`ProposalSize`]) and the two traits that form the seam
//! between a host renderer and a custom container: [`SubView`] and [`Layout`].
//!
//! Nothing here allocates except [`Layout::place`], which returns one rect per
//! child.

extern crate alloc;

pub mod layout;

pub use layout::{Layout, Point, ProposalSize, Rect, Size, SubView};
