use std::path::PathBuf;

use clap::Args;
use color_eyre::eyre::Result;
use console::style;
use flowui_layout::{LayoutResult, Point, Size, measure, place};
use serde::Serialize;

use crate::{
    input::{self, LayoutFile, Request},
    output::{self, points},
};

#[derive(Args, Debug, Default)]
pub struct PlaceArgs {
    /// Container width in points (`inf` keeps everything on one row)
    #[arg(short, long, value_parser = input::parse_points)]
    pub width: Option<f32>,

    /// Gap between children and between rows, in points
    #[arg(short, long, value_parser = input::parse_points)]
    pub spacing: Option<f32>,

    /// Read spacing, width, and child sizes from a TOML file
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Child sizes as WIDTHxHEIGHT, in order
    #[arg(value_parser = input::parse_size)]
    pub sizes: Vec<Size>,
}

impl PlaceArgs {
    fn into_request(self) -> Result<Request> {
        let file = self.file.as_deref().map(LayoutFile::load).transpose()?;
        Ok(Request::resolve(file, self.width, self.spacing, self.sizes))
    }
}

#[derive(Debug, Serialize)]
struct PlaceReport<'a> {
    spacing: f32,
    container_width: f32,
    #[serde(flatten)]
    result: &'a LayoutResult,
}

/// Pairs each offset with the size the engine actually placed there.
fn placements<'a>(
    result: &'a LayoutResult,
    sizes: &'a [Size],
) -> impl Iterator<Item = (Point, Size)> + 'a {
    result
        .offsets
        .iter()
        .copied()
        .zip(sizes.iter().map(|size| size.sanitized()))
}

pub fn run(args: PlaceArgs) -> Result<()> {
    let request = args.into_request()?;
    let result = place(&request.sizes, request.config.spacing, request.width);

    if output::global_output_format().is_json() {
        return output::emit_json(&PlaceReport {
            spacing: request.config.spacing,
            container_width: request.width,
            result: &result,
        });
    }

    for (index, (offset, size)) in placements(&result, &request.sizes).enumerate() {
        println!(
            "{}  x={}  y={}  {}x{}",
            style(format!("#{index}")).dim(),
            points(offset.x),
            points(offset.y),
            points(size.width),
            points(size.height),
        );
    }
    print_size(result.total_size);
    Ok(())
}

pub fn run_measure(args: PlaceArgs) -> Result<()> {
    let request = args.into_request()?;
    let size = measure(&request.sizes, request.config.spacing, request.width);

    if output::global_output_format().is_json() {
        return output::emit_json(&size);
    }

    print_size(size);
    Ok(())
}

fn print_size(size: Size) {
    println!(
        "{} {}x{}",
        style("size").bold(),
        points(size.width),
        points(size.height)
    );
}

#[cfg(test)]
mod tests {
    use std::{fs, path::Path};

    use serde_json::json;

    use super::*;
    use crate::input::InputError;

    fn args(width: f32, spacing: f32, sizes: &[(f32, f32)]) -> PlaceArgs {
        PlaceArgs {
            width: Some(width),
            spacing: Some(spacing),
            file: None,
            sizes: sizes.iter().map(|&(w, h)| Size::new(w, h)).collect(),
        }
    }

    #[test]
    fn test_place_report_json() {
        let request = args(100.0, 2.0, &[(60.0, 10.0), (60.0, 10.0)])
            .into_request()
            .unwrap();
        let result = place(&request.sizes, request.config.spacing, request.width);
        let report = PlaceReport {
            spacing: request.config.spacing,
            container_width: request.width,
            result: &result,
        };

        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            json!({
                "spacing": 2.0,
                "container_width": 100.0,
                "offsets": [{ "x": 0.0, "y": 0.0 }, { "x": 0.0, "y": 12.0 }],
                "total_size": { "width": 60.0, "height": 22.0 },
            })
        );
    }

    #[test]
    fn test_measure_reports_total_size_only() {
        let request = args(100.0, 2.0, &[(60.0, 10.0), (60.0, 10.0)])
            .into_request()
            .unwrap();
        let size = measure(&request.sizes, request.config.spacing, request.width);

        assert_eq!(size, Size::new(60.0, 22.0));
        assert_eq!(
            serde_json::to_value(size).unwrap(),
            json!({ "width": 60.0, "height": 22.0 })
        );
    }

    #[test]
    fn test_printed_sizes_match_placement() {
        let request = args(100.0, 2.0, &[(-5.0, 10.0), (f32::NAN, 3.0), (40.0, 10.0)])
            .into_request()
            .unwrap();
        let result = place(&request.sizes, request.config.spacing, request.width);
        let rows: Vec<_> = placements(&result, &request.sizes).collect();

        assert_eq!(
            rows,
            vec![
                (Point::new(0.0, 0.0), Size::new(0.0, 10.0)),
                (Point::new(2.0, 0.0), Size::new(0.0, 3.0)),
                (Point::new(4.0, 0.0), Size::new(40.0, 10.0)),
            ]
        );
        for (offset, size) in rows {
            assert!(offset.x + size.width <= result.total_size.width);
        }
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let args = PlaceArgs {
            file: Some(PathBuf::from("/nonexistent/flowui/layout.toml")),
            ..PlaceArgs::default()
        };

        let err = args.into_request().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<InputError>(),
            Some(InputError::Read { .. })
        ));
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let path =
            std::env::temp_dir().join(format!("flowui-malformed-{}.toml", std::process::id()));
        fs::write(&path, "sizes = 3").unwrap();

        let err = PlaceArgs {
            file: Some(path.clone()),
            ..PlaceArgs::default()
        }
        .into_request()
        .unwrap_err();
        let _ = fs::remove_file(&path);

        assert!(matches!(
            err.downcast_ref::<InputError>(),
            Some(InputError::Parse { .. })
        ));
    }

    #[test]
    fn test_bundled_weekdays_file_loads() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../demos/weekdays.toml");
        let file = LayoutFile::load(&path).unwrap();
        assert_eq!(file.sizes.len(), 7);

        let request = PlaceArgs {
            file: Some(path),
            ..PlaceArgs::default()
        }
        .into_request()
        .unwrap();

        assert_eq!(request.width, 361.0);
        assert_eq!(request.config.spacing, 8.0);
        assert_eq!(request.sizes, file.sizes);

        let result = place(&request.sizes, request.config.spacing, request.width);
        assert_eq!(result.offsets.len(), 7);
        assert!(result.total_size.width <= 361.0);
    }
}
