//! Partial address estimation.
//!
//! A syllable prefix pins the most significant digits of the cell number,
//! hence an interval of cell numbers, hence a region of the globe. The
//! estimator derives the region in O(1) from the deepest common ancestor of
//! the interval's extremes: it never enumerates the (possibly billions of)
//! cells inside the interval.

use crate::{
    address::{self, Syllable},
    config::Config,
    error::{AddressError, PrefixError},
    grid::Grid,
    number::CellNumber,
    ordering::CellOrdering,
    CELL_SPACE,
};
use h3o::{LatLng, Resolution};

/// Kilometers per degree of latitude (and of longitude at the equator).
const KM_PER_DEGREE: f64 = 111.32;

/// Padding factor over the average edge length at a resolution. Cells are
/// distorted: the largest circumradius exceeds the average edge length.
const RADIUS_FACTOR: f64 = 1.5;


// -----------------------------------------------------------------------------

/// An axis-aligned latitude/longitude rectangle.
///
/// `north > south` and `east > west` always hold. When the region crosses
/// the antimeridian, `east` (or `west`) extends past ±180° instead of
/// wrapping; [`Bounds::contains`] accounts for that.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    /// Northern edge, in degrees.
    north: f64,
    /// Southern edge, in degrees.
    south: f64,
    /// Eastern edge, in degrees (may exceed 180).
    east: f64,
    /// Western edge, in degrees (may fall below -180).
    west: f64,
}

impl Bounds {
    /// Northern edge, in degrees.
    #[must_use]
    pub const fn north(&self) -> f64 {
        self.north
    }

    /// Southern edge, in degrees.
    #[must_use]
    pub const fn south(&self) -> f64 {
        self.south
    }

    /// Eastern edge, in degrees. Exceeds 180 when the region crosses the
    /// antimeridian.
    #[must_use]
    pub const fn east(&self) -> f64 {
        self.east
    }

    /// Western edge, in degrees. Falls below -180 when the region crosses
    /// the antimeridian.
    #[must_use]
    pub const fn west(&self) -> f64 {
        self.west
    }

    /// Returns true if the region crosses the antimeridian.
    #[must_use]
    pub fn wraps_antimeridian(&self) -> bool {
        self.east > 180. || self.west < -180.
    }

    /// Returns true if the coordinate falls within the region.
    #[must_use]
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        if lat < self.south || lat > self.north {
            return false;
        }
        [lon, lon - 360., lon + 360.]
            .iter()
            .any(|&candidate| candidate >= self.west && candidate <= self.east)
    }

    /// Center of the region, with the longitude normalized to `(-180, 180]`.
    fn center(&self) -> LatLng {
        let lat = (self.north + self.south) / 2.;
        let mut lon = (self.east + self.west) / 2.;
        if lon > 180. {
            lon -= 360.;
        } else if lon <= -180. {
            lon += 360.;
        }
        LatLng::new(lat, lon).expect("finite bounds")
    }

    /// Area of the region under a local equirectangular approximation.
    fn area_km2(&self) -> f64 {
        let mid_lat = ((self.north + self.south) / 2.).to_radians();
        (self.north - self.south)
            * KM_PER_DEGREE
            * (self.east - self.west)
            * KM_PER_DEGREE
            * mid_lat.cos().abs()
    }
}

// -----------------------------------------------------------------------------

/// Location estimate derived from a syllable prefix.
#[derive(Clone, Debug, PartialEq)]
pub struct PrefixEstimate {
    /// Center of the bounding region.
    center: LatLng,
    /// Bounding region guaranteed to contain the prefixed location.
    bounds: Bounds,
    /// Estimated area of the region, in km².
    area_km2: f64,
    /// Confidence in `(0, 1]`, increasing with the prefix length.
    confidence: f64,
    /// Number of syllables in the prefix.
    completeness: u8,
    /// Syllables that can validly extend the prefix.
    refinements: Vec<Syllable>,
}

impl PrefixEstimate {
    /// Center of the bounding region.
    #[must_use]
    pub const fn center(&self) -> LatLng {
        self.center
    }

    /// Bounding region.
    ///
    /// Any coordinate whose full address starts with the prefix lies
    /// within these bounds.
    #[must_use]
    pub const fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Estimated area of the region, in km².
    #[must_use]
    pub const fn area_km2(&self) -> f64 {
        self.area_km2
    }

    /// Confidence in `(0, 1]`: grows as the prefix gets longer and the
    /// region shrinks relative to a base cell.
    #[must_use]
    pub const fn confidence(&self) -> f64 {
        self.confidence
    }

    /// Number of syllables in the prefix.
    #[must_use]
    pub const fn completeness(&self) -> u8 {
        self.completeness
    }

    /// Syllables that can validly extend the prefix.
    #[must_use]
    pub fn refinements(&self) -> &[Syllable] {
        &self.refinements
    }
}

// -----------------------------------------------------------------------------

/// Estimates the region covered by a syllable prefix.
pub(crate) fn estimate(
    prefix: &str,
    config: &Config,
    ordering: &CellOrdering,
    grid: Grid,
) -> Result<PrefixEstimate, PrefixError> {
    if prefix.is_empty() {
        return Err(PrefixError::Empty);
    }
    let digits = address::parse_digits(prefix, config)
        .map_err(PrefixError::from)?;
    let length = usize::from(config.address_length());
    if digits.len() >= length {
        let syllables =
            u8::try_from(digits.len().min(255)).expect("clamped length");
        if digits.len() == length {
            return Err(PrefixError::Complete { syllables });
        }
        return Err(PrefixError::TooLong {
            syllables,
            max: config.address_length(),
        });
    }

    let (lo, hi) = interval(&digits, config);
    if lo >= CELL_SPACE {
        return Err(AddressError::OutOfRange { value: lo }.into());
    }
    let hi = hi.min(CELL_SPACE - 1);

    let lo_path = CellNumber::new_unchecked(lo).to_path(ordering);
    let hi_path = CellNumber::new_unchecked(hi).to_path(ordering);

    let bounds = if lo_path.base() == hi_path.base() {
        let depth = lo_path.common_depth(&hi_path);
        let ancestor = grid
            .ancestor(&lo_path, depth)
            .map_err(AddressError::from)?;
        padded_rect(
            &[grid.center(ancestor)],
            cell_radius_km(Resolution::try_from(depth).expect("cell depth")),
        )
    } else {
        let centers = (ordering.position_of(lo_path.base())
            ..=ordering.position_of(hi_path.base()))
            .map(|position| {
                let cell = grid
                    .base_cell(ordering.cell_at(position))
                    .expect("ordering contains valid base cells");
                grid.center(cell)
            })
            .collect::<Vec<_>>();
        padded_rect(&centers, cell_radius_km(Resolution::Zero))
    };

    let completeness = u8::try_from(digits.len()).expect("short prefix");
    let area_km2 = bounds.area_km2();
    Ok(PrefixEstimate {
        center: bounds.center(),
        bounds,
        area_km2,
        confidence: confidence(area_km2, completeness, config),
        completeness,
        refinements: refinements(lo, &digits, config),
    })
}

/// Cell number interval pinned by the prefix digits, before clamping.
pub(crate) fn interval(digits: &[u32], config: &Config) -> (u64, u64) {
    let base = u64::from(config.syllable_count());
    let tail = u32::from(config.address_length()) - digits.len() as u32;
    let span = base.pow(tail);

    let lo = digits
        .iter()
        .fold(0_u64, |acc, &digit| acc * base + u64::from(digit))
        * span;
    (lo, lo + span - 1)
}

/// Smallest enclosing rectangle of the centers, padded by a cell radius.
fn padded_rect(centers: &[LatLng], radius_km: f64) -> Bounds {
    debug_assert!(!centers.is_empty(), "at least one center");

    let mut lons =
        centers.iter().map(|center| center.lng()).collect::<Vec<_>>();
    let spread = max(&lons) - min(&lons);
    if spread > 180. {
        // The centers straddle the antimeridian: move the western
        // hemisphere past 180 so the rectangle stays contiguous.
        for lon in &mut lons {
            if *lon < 0. {
                *lon += 360.;
            }
        }
    }
    let lats =
        centers.iter().map(|center| center.lat()).collect::<Vec<_>>();

    let pad_lat = radius_km / KM_PER_DEGREE;
    let north = (max(&lats) + pad_lat).min(90.);
    let south = (min(&lats) - pad_lat).max(-90.);

    // A region reaching near a pole wraps around it: every longitude is
    // inside, whatever the centers say. The generous cutoff also keeps the
    // small-angle padding below honest away from the poles.
    if max(&lats) + 3. * pad_lat >= 90. || min(&lats) - 3. * pad_lat <= -90. {
        return Bounds {
            north,
            south,
            east: 180.,
            west: -180.,
        };
    }

    // Longitude degrees shrink with latitude: pad at the worst (most
    // poleward) center so every cell keeps its full east-west extent.
    let worst_lat = lats
        .iter()
        .fold(0_f64, |acc, &lat| acc.max(lat.abs()))
        .to_radians();
    let pad_lon = radius_km / (KM_PER_DEGREE * worst_lat.cos());

    Bounds {
        north,
        south,
        east: max(&lons) + pad_lon,
        west: min(&lons) - pad_lon,
    }
}

/// Padded cell radius at a resolution, in kilometers.
fn cell_radius_km(resolution: Resolution) -> f64 {
    resolution.edge_length_km() * RADIUS_FACTOR
}

/// Confidence of an estimate, in `(0, 1)`.
///
/// Strictly increasing in the completeness level by construction: each
/// extra syllable contributes a full step, while the region's size
/// relative to a base cell only modulates within the step. Two prefixes of
/// the same address therefore always rank in length order, even when their
/// regions happen to coincide.
fn confidence(area_km2: f64, completeness: u8, config: &Config) -> f64 {
    let fraction = area_km2 / (area_km2 + Resolution::Zero.area_km2());
    (f64::from(completeness) - fraction)
        / f64::from(config.address_length())
}

/// Syllables that can validly extend the prefix.
fn refinements(lo: u64, digits: &[u32], config: &Config) -> Vec<Syllable> {
    let base = u64::from(config.syllable_count());
    let tail =
        u32::from(config.address_length()) - digits.len() as u32 - 1;
    let span = base.pow(tail);

    (0..config.syllable_count())
        .filter(|&syllable| lo + u64::from(syllable) * span < CELL_SPACE)
        .map(|syllable| Syllable::from_index(syllable, config))
        .collect()
}

fn min(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

fn max(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

#[cfg(test)]
#[path = "./estimate_tests.rs"]
mod tests;
