use crate::design::SketchStatistics;

/// Flat extent of a drawing, in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub area: f64,
    pub perimeter: f64,
}

/// Dimensions of a polygon outline (closed ring, any winding order).
///
/// Area via the shoelace formula; fewer than three vertices yields a
/// zero area, which callers reject as degenerate.
pub fn polygon_dimensions(points: &[(f64, f64)]) -> Dimensions {
    if points.len() < 3 {
        return Dimensions {
            area: 0.0,
            perimeter: 0.0,
        };
    }

    let mut twice_area = 0.0;
    let mut perimeter = 0.0;
    for (i, &(x1, y1)) in points.iter().enumerate() {
        let (x2, y2) = points[(i + 1) % points.len()];
        twice_area += x1 * y2 - x2 * y1;
        perimeter += ((x2 - x1).powi(2) + (y2 - y1).powi(2)).sqrt();
    }

    Dimensions {
        area: twice_area.abs() / 2.0,
        perimeter,
    }
}

/// Dimensions of an axis-aligned bounding box.
pub fn bounds_dimensions(width: f64, height: f64) -> Dimensions {
    Dimensions {
        area: width * height,
        perimeter: 2.0 * (width + height),
    }
}

/// Estimated dimensions from freehand stroke statistics.
///
/// Each recorded point stands for `point_area` square meters of sail;
/// the perimeter is taken from the area-equivalent square since stroke
/// data carries no outline.
pub fn sketch_dimensions(statistics: SketchStatistics, point_area: f64) -> Dimensions {
    if statistics.path_count == 0 {
        return Dimensions {
            area: 0.0,
            perimeter: 0.0,
        };
    }
    let area = statistics.total_points as f64 * point_area;
    Dimensions {
        area,
        perimeter: 4.0 * area.max(0.0).sqrt(),
    }
}
