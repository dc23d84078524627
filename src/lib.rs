#![doc = include_str!("../README.md")]
#![no_std]

#[doc(inline)]
pub use flowui_layout::*;

pub mod prelude {
    //! Commonly used types for building and driving a flow container.
    //!
    //! ```rust
    //! use flowui::prelude::*;
    //!
    //! let size = measure(&[Size::new(10.0, 5.0), Size::new(10.0, 5.0)], 2.0, 100.0);
    //! assert_eq!(size, Size::new(22.0, 5.0));
    //! ```
    pub use flowui_core::{Layout, Point, ProposalSize, Rect, Size, SubView};
    pub use flowui_layout::{
        DEFAULT_SPACING, Flow, FlowCache, FlowConfig, FlowLayout, LayoutResult, flow, measure,
        place,
    };
}
