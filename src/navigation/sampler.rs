use crate::entities::{Coordinates, Path};

/// Clamps `progress` to `[0, 100]` and scales it to `[0, 1]`. NaN counts as 0.
pub fn progress_fraction(progress: f64) -> f64 {
    if progress.is_nan() {
        return 0.0;
    }

    progress.clamp(0.0, 100.0) / 100.0
}

/// Position along a polyline reached after walking a given share of its
/// length.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Locus {
    /// Inside segment `index -> index + 1`, `fraction` of the way along it.
    Along { index: usize, fraction: f64 },
    /// Past every segment; the final vertex.
    End,
}

/// Arc-length walk shared by `sample_at` and `prefix_up_to`.
fn locate(points: &[Coordinates], t: f64) -> Locus {
    let lengths: Vec<f64> = points
        .windows(2)
        .map(|pair| pair[0].distance(&pair[1]))
        .collect();
    let total: f64 = lengths.iter().sum();
    let target = total * t;

    let mut accumulated = 0.0;
    for (index, length) in lengths.iter().enumerate() {
        if accumulated + length >= target {
            let fraction = if *length > 0.0 {
                ((target - accumulated) / length).clamp(0.0, 1.0)
            } else {
                0.0
            };

            return Locus::Along { index, fraction };
        }
        accumulated += length;
    }

    Locus::End
}

fn interpolate(a: &Coordinates, b: &Coordinates, fraction: f64) -> Coordinates {
    if fraction <= 0.0 {
        *a
    } else if fraction >= 1.0 {
        *b
    } else {
        a.lerp(b, fraction)
    }
}

/// Arc-length parameterization over a `Path`, treating coordinates as planar.
///
/// Progress is a percentage; values outside `[0, 100]` are clamped.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathSampler;

impl PathSampler {
    pub fn new() -> Self {
        Self
    }

    /// The coordinate `progress` percent of the way along `path`.
    pub fn sample_at(&self, path: &Path, progress: f64) -> Coordinates {
        let points = path.points();
        let t = progress_fraction(progress);

        if points.len() == 1 || t <= 0.0 {
            return path.first();
        }
        if t >= 1.0 {
            return path.last();
        }

        match locate(points, t) {
            Locus::Along { index, fraction } => {
                interpolate(&points[index], &points[index + 1], fraction)
            }
            Locus::End => path.last(),
        }
    }

    /// The travelled part of `path`: every vertex already passed, ending at
    /// exactly the coordinate `sample_at` returns for the same progress.
    pub fn prefix_up_to(&self, path: &Path, progress: f64) -> Path {
        let points = path.points();
        let t = progress_fraction(progress);

        if points.len() == 1 || t <= 0.0 {
            return Path::single(path.first());
        }
        if t >= 1.0 {
            return path.clone();
        }

        match locate(points, t) {
            Locus::Along { index, fraction } => {
                let mut prefix = Path::single(points[0]);
                for point in &points[1..=index] {
                    prefix.push(*point);
                }

                let position = interpolate(&points[index], &points[index + 1], fraction);
                if position != prefix.last() {
                    prefix.push(position);
                }

                prefix
            }
            Locus::End => path.clone(),
        }
    }
}
