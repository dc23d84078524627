//! Single-entry memo for flow layout passes.
//!
//! Hosts often run the sizing and placement passes back to back with the same
//! inputs, sometimes several times a frame. [`FlowCache`] keeps the last
//! [`LayoutResult`] and hands it back when the key repeats. The engine is a
//! pure function, so a hit is always identical to a recomputation.

use alloc::vec::Vec;

use crate::{
    Size,
    flow::{self, LayoutResult},
};

#[derive(Debug, Clone)]
struct Entry {
    sizes: Vec<Size>,
    spacing: f32,
    container_width: f32,
    result: LayoutResult,
}

impl Entry {
    fn matches(&self, sizes: &[Size], spacing: f32, container_width: f32) -> bool {
        // Bitwise so that NaN keys still hit.
        self.spacing.to_bits() == spacing.to_bits()
            && self.container_width.to_bits() == container_width.to_bits()
            && self.sizes.len() == sizes.len()
            && self.sizes.iter().zip(sizes).all(|(a, b)| {
                a.width.to_bits() == b.width.to_bits() && a.height.to_bits() == b.height.to_bits()
            })
    }
}

/// Remembers the most recent flow layout keyed by its inputs.
#[derive(Debug, Clone, Default)]
pub struct FlowCache {
    entry: Option<Entry>,
    hits: u64,
    misses: u64,
}

impl FlowCache {
    /// Creates an empty cache.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entry: None,
            hits: 0,
            misses: 0,
        }
    }

    /// Same as [`flow::place`], reusing the stored result on an identical key.
    pub fn place(&mut self, sizes: &[Size], spacing: f32, container_width: f32) -> &LayoutResult {
        let entry = match self.entry.take() {
            Some(entry) if entry.matches(sizes, spacing, container_width) => {
                self.hits += 1;
                tracing::debug!(children = sizes.len(), "flow cache hit");
                entry
            }
            _ => {
                self.misses += 1;
                tracing::debug!(children = sizes.len(), "flow cache miss");
                Entry {
                    sizes: sizes.to_vec(),
                    spacing,
                    container_width,
                    result: flow::place(sizes, spacing, container_width),
                }
            }
        };

        &self.entry.insert(entry).result
    }

    /// Same as [`flow::measure`], sharing the entry used by [`Self::place`].
    pub fn measure(&mut self, sizes: &[Size], spacing: f32, container_width: f32) -> Size {
        self.place(sizes, spacing, container_width).total_size
    }

    /// Drops the stored result.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    /// Number of lookups answered from the stored result.
    #[must_use]
    pub const fn hits(&self) -> u64 {
        self.hits
    }

    /// Number of lookups that had to run the engine.
    #[must_use]
    pub const fn misses(&self) -> u64 {
        self.misses
    }
}
