use clap::Args;
use color_eyre::eyre::Result;
use console::style;
use flowui_layout::{Point, ProposalSize, Rect, Size, SubView, flow};
use serde::Serialize;

use crate::{
    input,
    output::{self, points},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }
}

/// Approximate metrics of a bordered capsule button.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChipMetrics {
    pub char_width: f32,
    pub horizontal_padding: f32,
    pub height: f32,
}

impl Default for ChipMetrics {
    fn default() -> Self {
        Self {
            char_width: 8.5,
            horizontal_padding: 12.0,
            height: 34.0,
        }
    }
}

/// A capsule-shaped button sized from its label.
#[derive(Clone, Copy, Debug)]
pub struct Chip {
    pub day: Day,
    pub metrics: ChipMetrics,
}

impl SubView for Chip {
    #[allow(clippy::cast_precision_loss)]
    fn size_that_fits(&self, _proposal: ProposalSize) -> Size {
        let label = self.day.label().chars().count() as f32;
        Size::new(
            label.mul_add(self.metrics.char_width, 2.0 * self.metrics.horizontal_padding),
            self.metrics.height,
        )
    }
}

#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Screen width in points
    #[arg(short, long, default_value_t = 393.0, value_parser = input::parse_points)]
    pub width: f32,

    /// Gap between chips and between rows
    #[arg(short, long, default_value_t = flowui_layout::DEFAULT_SPACING, value_parser = input::parse_points)]
    pub spacing: f32,

    /// Inset around the flow on every edge
    #[arg(long, default_value_t = 16.0, value_parser = input::parse_points)]
    pub padding: f32,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct PlacedChip {
    pub label: &'static str,
    pub frame: Rect,
}

#[derive(Debug, Serialize)]
pub struct DemoLayout {
    pub size: Size,
    pub chips: Vec<PlacedChip>,
}

/// Lays out one chip per weekday inside a padded screen of `width` points.
pub fn layout(width: f32, spacing: f32, padding: f32, metrics: ChipMetrics) -> DemoLayout {
    let container = flow(
        Day::ALL
            .iter()
            .map(|&day| Chip { day, metrics })
            .collect::<Vec<_>>(),
    )
    .spacing(spacing);

    let inner_width = (width - 2.0 * padding).max(0.0);
    let size = container.size_that_fits(ProposalSize::new(Some(inner_width), None));
    let bounds = Rect::new(
        Point::new(padding, padding),
        Size::new(inner_width, size.height),
    );

    let chips = container
        .contents()
        .iter()
        .zip(container.place(bounds))
        .map(|(chip, frame)| PlacedChip {
            label: chip.day.label(),
            frame,
        })
        .collect();

    DemoLayout { size, chips }
}

pub fn run(args: &DemoArgs) -> Result<()> {
    let demo = layout(args.width, args.spacing, args.padding, ChipMetrics::default());
    tracing::info!(
        chips = demo.chips.len(),
        width = demo.size.width,
        height = demo.size.height,
        "laid out weekday chips"
    );

    if output::global_output_format().is_json() {
        return output::emit_json(&demo);
    }

    println!(
        "{}",
        style(format!("Weekdays on a {}pt screen", points(args.width))).bold()
    );

    let mut row_y = None;
    let mut line = String::new();
    for chip in &demo.chips {
        if row_y.is_some_and(|y| y != chip.frame.y()) {
            println!("{}", line.trim_end());
            line.clear();
        }
        row_y = Some(chip.frame.y());
        line.push_str(&format!("( {} ) ", chip.label));
    }
    if !line.is_empty() {
        println!("{}", line.trim_end());
    }

    println!(
        "{} {}x{}",
        style("size").bold(),
        points(demo.size.width),
        points(demo.size.height)
    );
    Ok(())
}
