//! Output file naming.
//!
//! The output name encodes the run parameters after the source file's
//! base name:
//!
//! ```text
//! <basename>-l<lines>-s<scale>-b<roughness>-w<line_width>.png
//! ```
//!
//! The `b` field carries roughness (not background color) — a historic
//! quirk kept for compatibility with files produced by earlier runs.
//! The source extension stays inside the base name for the same reason
//! (`map.png` becomes `map.png-l100-....png`).

use std::path::Path;

use ridgemap_pipeline::RenderConfig;

/// Assemble the output file name for a run.
///
/// Numeric parameters print without a trailing `.0` so default runs
/// produce names like `map.png-l100-s50-b5-w3.png`.
#[must_use]
pub fn output_file_name(input: &Path, config: &RenderConfig) -> String {
    let base = input
        .file_name()
        .map_or_else(|| "output".to_owned(), |n| n.to_string_lossy().into_owned());
    format!(
        "{base}-l{}-s{}-b{}-w{}.png",
        config.line_count,
        fmt_num(config.scale),
        fmt_num(config.roughness),
        fmt_num(config.line_width),
    )
}

/// Format a float without a trailing `.0` when it is integral.
fn fmt_num(value: f32) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_run_name_round_trip() {
        let config = RenderConfig {
            line_count: 100,
            scale: 50.0,
            roughness: 5.0,
            line_width: 3.0,
            ..RenderConfig::default()
        };
        assert_eq!(
            output_file_name(Path::new("map.png"), &config),
            "map.png-l100-s50-b5-w3.png",
        );
    }

    #[test]
    fn directories_are_stripped_from_base_name() {
        let config = RenderConfig::default();
        assert_eq!(
            output_file_name(Path::new("/maps/alps/map.png"), &config),
            "map.png-l100-s50-b5-w3.png",
        );
    }

    #[test]
    fn fractional_parameters_keep_their_decimals() {
        let config = RenderConfig {
            line_count: 80,
            scale: 12.5,
            roughness: 2.5,
            line_width: 1.5,
            ..RenderConfig::default()
        };
        assert_eq!(
            output_file_name(Path::new("map.jpg"), &config),
            "map.jpg-l80-s12.5-b2.5-w1.5.png",
        );
    }

    #[test]
    fn b_field_is_roughness_not_background() {
        let config = RenderConfig {
            roughness: 9.0,
            background_color: [255, 0, 0, 255],
            ..RenderConfig::default()
        };
        let name = output_file_name(Path::new("x.png"), &config);
        assert!(name.contains("-b9-"), "got {name}");
    }
}
