//! Flow container: plugs the row-packing engine into the [`Layout`] protocol.

use alloc::vec::Vec;

use crate::{
    Layout, ProposalSize, Rect, Size, SubView,
    flow::{self, DEFAULT_SPACING, FlowConfig},
};

/// Layout engine shared by the public [`Flow`] container.
///
/// Children are always asked for their natural size
/// ([`ProposalSize::UNSPECIFIED`]); the flow never squeezes or stretches them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowLayout {
    /// The gap between children on a row and between rows.
    pub spacing: f32,
}

impl Default for FlowLayout {
    fn default() -> Self {
        Self {
            spacing: DEFAULT_SPACING,
        }
    }
}

impl From<FlowConfig> for FlowLayout {
    fn from(config: FlowConfig) -> Self {
        Self::new(config.spacing)
    }
}

impl FlowLayout {
    /// Creates a flow layout with the given spacing.
    #[must_use]
    pub const fn new(spacing: f32) -> Self {
        Self { spacing }
    }
}

fn natural_sizes(children: &[&dyn SubView]) -> Vec<Size> {
    children
        .iter()
        .map(|child| child.size_that_fits(ProposalSize::UNSPECIFIED))
        .collect()
}

impl Layout for FlowLayout {
    fn size_that_fits(&self, proposal: ProposalSize, children: &[&dyn SubView]) -> Size {
        // An unspecified width means "lay out on a single row".
        let container_width = proposal.width_or(f32::INFINITY);
        flow::measure(&natural_sizes(children), self.spacing, container_width)
    }

    fn place(&self, bounds: Rect, children: &[&dyn SubView]) -> Vec<Rect> {
        let sizes = natural_sizes(children);
        let result = flow::place(&sizes, self.spacing, bounds.width());

        result
            .offsets
            .into_iter()
            .zip(sizes)
            .map(|(offset, size)| {
                Rect::new(offset, size.sanitized()).offset_by(bounds.origin())
            })
            .collect()
    }
}

/// A container that wraps its children into rows, like words in a paragraph.
#[derive(Debug, Clone)]
pub struct Flow<C> {
    layout: FlowLayout,
    contents: C,
}

impl<C> Flow<C> {
    /// Creates a flow with the provided spacing and children.
    pub const fn new(spacing: f32, contents: C) -> Self {
        Self {
            layout: FlowLayout::new(spacing),
            contents,
        }
    }

    /// Sets the spacing between children and rows.
    #[must_use]
    pub const fn spacing(mut self, spacing: f32) -> Self {
        self.layout.spacing = spacing;
        self
    }

    /// Returns the layout driving this container.
    #[must_use]
    pub const fn layout(&self) -> &FlowLayout {
        &self.layout
    }

    /// Returns the children.
    #[must_use]
    pub const fn contents(&self) -> &C {
        &self.contents
    }
}

impl<S: SubView> Flow<Vec<S>> {
    fn proxies<'a>(&'a self) -> Vec<&'a dyn SubView>
    where
        S: 'a,
    {
        self.contents
            .iter()
            .map(|child| child as &dyn SubView)
            .collect()
    }

    /// Sizing pass: how large the flow wants to be for `proposal`.
    #[must_use]
    pub fn size_that_fits(&self, proposal: ProposalSize) -> Size {
        self.layout.size_that_fits(proposal, &self.proxies())
    }

    /// Placement pass: one rect per child inside `bounds`, in child order.
    #[must_use]
    pub fn place(&self, bounds: Rect) -> Vec<Rect> {
        self.layout.place(bounds, &self.proxies())
    }
}

impl<S> FromIterator<S> for Flow<Vec<S>> {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        flow(iter.into_iter().collect())
    }
}

/// Convenience constructor using the default spacing of 8 points.
pub const fn flow<C>(contents: C) -> Flow<C> {
    Flow::new(DEFAULT_SPACING, contents)
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::Point;

    struct MockSubView {
        size: Size,
    }

    impl SubView for MockSubView {
        fn size_that_fits(&self, _proposal: ProposalSize) -> Size {
            self.size
        }
    }

    #[test]
    fn test_flow_size_unspecified_width_is_single_row() {
        let layout = FlowLayout::new(10.0);

        let child1 = MockSubView {
            size: Size::new(50.0, 30.0),
        };
        let child2 = MockSubView {
            size: Size::new(60.0, 40.0),
        };
        let children: Vec<&dyn SubView> = vec![&child1, &child2];

        let size = layout.size_that_fits(ProposalSize::UNSPECIFIED, &children);

        assert_eq!(size.width, 120.0); // 50 + 10 + 60
        assert_eq!(size.height, 40.0);
    }

    #[test]
    fn test_flow_place_offsets_by_bounds_origin() {
        let layout = FlowLayout::new(2.0);

        let child1 = MockSubView {
            size: Size::new(60.0, 10.0),
        };
        let child2 = MockSubView {
            size: Size::new(60.0, 10.0),
        };
        let children: Vec<&dyn SubView> = vec![&child1, &child2];

        let bounds = Rect::new(Point::new(16.0, 16.0), Size::new(100.0, 22.0));
        let rects = layout.place(bounds, &children);

        assert_eq!(rects[0], Rect::new(Point::new(16.0, 16.0), Size::new(60.0, 10.0)));
        assert_eq!(rects[1], Rect::new(Point::new(16.0, 28.0), Size::new(60.0, 10.0)));
    }

    #[test]
    fn test_flow_builder() {
        let container: Flow<Vec<MockSubView>> = (0..3)
            .map(|_| MockSubView {
                size: Size::new(10.0, 10.0),
            })
            .collect();

        assert_eq!(container.layout().spacing, DEFAULT_SPACING);
        assert_eq!(container.contents().len(), 3);

        let container = container.spacing(0.0);
        assert_eq!(
            container.size_that_fits(ProposalSize::new(Some(25.0), None)),
            Size::new(20.0, 20.0)
        );
    }

    #[test]
    fn test_layout_from_config() {
        assert_eq!(FlowLayout::from(FlowConfig::new(3.0)), FlowLayout::new(3.0));
        assert_eq!(FlowLayout::default().spacing, 8.0);
    }
}
