//! Fitting a source page into a tile
//!
//! The page keeps its aspect ratio and is scaled to the tighter of the two
//! axis ratios. Width/height adjustments let the caller deliberately over-
//! or under-fill the tile. Offsets are relative to the tile origin and are
//! rounded to whole points, half to even.

use crate::options::Adjustments;
use crate::types::Alignment;

/// Scale and tile-relative offset for one page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub x_offset: f32,
    pub y_offset: f32,
    pub scale: f32,
}

/// Compute the transform that places a `source` page inside a `tile`.
///
/// # Arguments
/// * `source` - (width, height) of the source page in points
/// * `tile` - (width, height) of the destination tile in points
/// * `adjustments` - width/height fill adjustments and gutter offset
/// * `alignment` - vertical alignment within the tile
/// * `physical_page` - zero-based document index of the page, which
///   decides the direction of the gutter offset
pub fn compute_transform(
    source: (f32, f32),
    tile: (f32, f32),
    adjustments: &Adjustments,
    alignment: Alignment,
    physical_page: usize,
) -> Transform {
    let (page_width, page_height) = source;
    let (tile_width, tile_height) = tile;
    let width_adjust = adjustments.width as f32;
    let height_adjust = adjustments.height as f32;

    let scale = calculate_scale(
        page_width,
        page_height,
        tile_width + width_adjust,
        tile_height + height_adjust,
    );

    let mut x_offset = ((tile_width - page_width * scale) / 2.0).round_ties_even();
    let y_offset = match alignment {
        Alignment::Center => ((tile_height - page_height * scale) / 2.0).round_ties_even(),
        Alignment::Top => (tile_height - page_height * scale).round_ties_even(),
        Alignment::Bottom => (height_adjust / 2.0).round_ties_even(),
    };

    if let Some(hoffset) = adjustments.hoffset {
        if physical_page % 2 > 0 {
            x_offset -= hoffset as f32;
        } else {
            x_offset += hoffset as f32;
        }
    }

    Transform {
        x_offset,
        y_offset,
        scale,
    }
}

/// Largest scale that fits the source inside the target on both axes
fn calculate_scale(src_width: f32, src_height: f32, target_width: f32, target_height: f32) -> f32 {
    let scale_w = target_width / src_width;
    let scale_h = target_height / src_height;
    scale_w.min(scale_h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_fit() {
        // Source is 800x600, target is 400x400: width-limited
        assert!((calculate_scale(800.0, 600.0, 400.0, 400.0) - 0.5).abs() < 0.001);

        // Source is 400x800, target is 400x400: height-limited
        assert!((calculate_scale(400.0, 800.0, 400.0, 400.0) - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_letter_into_half_tabloid() {
        // Letter page into one half of a landscape letter sheet
        let t = compute_transform(
            (612.0, 792.0),
            (396.0, 612.0),
            &Adjustments::default(),
            Alignment::Center,
            0,
        );
        let expected = 396.0 / 612.0;
        assert!((t.scale - expected).abs() < 1e-6);
        assert_eq!(t.x_offset, 0.0);
        // (612 - 792 * 0.647) / 2 = 49.76...
        assert_eq!(t.y_offset, 50.0);
    }

    #[test]
    fn test_width_adjust_grows_scale() {
        let plain = compute_transform(
            (100.0, 100.0),
            (50.0, 200.0),
            &Adjustments::default(),
            Alignment::Center,
            0,
        );
        let grown = compute_transform(
            (100.0, 100.0),
            (50.0, 200.0),
            &Adjustments {
                width: 10,
                ..Default::default()
            },
            Alignment::Center,
            0,
        );
        assert!((plain.scale - 0.5).abs() < 1e-6);
        assert!((grown.scale - 0.6).abs() < 1e-6);
        // Overfilled tiles get a negative offset
        assert_eq!(grown.x_offset, -5.0);
    }
}
