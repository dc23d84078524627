//! Row-packing engine behind [`FlowLayout`](crate::FlowLayout).
//!
//! Children are laid out left to right in input order. When the next child
//! would cross the container's right edge, a new row starts below the tallest
//! child of the current row. A child that does not fit even on an empty row is
//! placed alone at `x = 0` and allowed to overflow; nothing is clipped, split,
//! reordered, or resized.
//!
//! [`measure`] and [`place`] share a single packing routine, so the size
//! reported during the sizing pass always matches the extent of the offsets
//! handed out during the placement pass.

use alloc::vec::Vec;

use flowui_core::{Point, Size, layout::non_negative};

/// Spacing between neighbouring children and between rows, in points.
pub const DEFAULT_SPACING: f32 = 8.0;

/// Tunables for one flow layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlowConfig {
    /// Horizontal gap between children on a row, and vertical gap between rows.
    #[cfg_attr(feature = "serde", serde(default = "default_spacing"))]
    pub spacing: f32,
}

#[cfg(feature = "serde")]
const fn default_spacing() -> f32 {
    DEFAULT_SPACING
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            spacing: DEFAULT_SPACING,
        }
    }
}

impl FlowConfig {
    /// Creates a config with the given spacing.
    #[must_use]
    pub const fn new(spacing: f32) -> Self {
        Self { spacing }
    }
}

/// Geometry produced by the placement pass.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutResult {
    /// Top-left corner of each child relative to the container origin, in
    /// input order.
    pub offsets: Vec<Point>,
    /// Bounding size of the whole arrangement.
    pub total_size: Size,
}

/// Computes the bounding size of `sizes` wrapped into rows no wider than
/// `container_width`.
///
/// `container_width` may be `f32::INFINITY` to keep every child on one row.
/// NaN or negative inputs are clamped to zero.
#[must_use]
pub fn measure(sizes: &[Size], spacing: f32, container_width: f32) -> Size {
    let total = pack(sizes, spacing, container_width, |_| {});
    tracing::debug!(
        children = sizes.len(),
        spacing,
        container_width,
        width = total.width,
        height = total.height,
        "flow measured"
    );
    total
}

/// Computes the offset of every child plus the bounding size.
///
/// `offsets[i]` always belongs to `sizes[i]`.
#[must_use]
pub fn place(sizes: &[Size], spacing: f32, container_width: f32) -> LayoutResult {
    let mut offsets = Vec::with_capacity(sizes.len());
    let total_size = pack(sizes, spacing, container_width, |offset| offsets.push(offset));
    tracing::debug!(
        children = sizes.len(),
        spacing,
        container_width,
        width = total_size.width,
        height = total_size.height,
        "flow placed"
    );
    LayoutResult {
        offsets,
        total_size,
    }
}

/// Greedy first-fit packer. `record` is called once per child, in order.
fn pack(
    sizes: &[Size],
    spacing: f32,
    container_width: f32,
    mut record: impl FnMut(Point),
) -> Size {
    let spacing = non_negative(spacing);
    let container_width = non_negative(container_width);

    let mut cursor = Point::zero();
    let mut line_height = 0.0_f32;
    let mut max_x = 0.0_f32;

    for (index, size) in sizes.iter().map(|size| size.sanitized()).enumerate() {
        // Wrap only strictly past the edge, and never against an empty row.
        if cursor.x > 0.0 && cursor.x + size.width > container_width {
            cursor.x = 0.0;
            cursor.y += line_height + spacing;
            line_height = 0.0;
            tracing::trace!(index, y = cursor.y, "flow wrapped to new row");
        }

        record(cursor);

        cursor.x += size.width;
        max_x = max_x.max(cursor.x);
        cursor.x += spacing;
        line_height = line_height.max(size.height);
    }

    Size::new(max_x, cursor.y + line_height)
}
