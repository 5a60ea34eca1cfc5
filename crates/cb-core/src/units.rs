// cb-core/src/units.rs

use uom::si::f64::MassDensity as UomMassDensity;

// Public canonical density type (SI, f64)
pub type Density = UomMassDensity;

/// 1 kg/L expressed in kg/m³.
pub const KG_PER_M3_PER_KG_PER_L: f64 = 1_000.0;

/// Density from kilograms per liter, the unit ingredient tables are written in.
#[inline]
pub fn kg_per_l(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v * KG_PER_M3_PER_KG_PER_L)
}

/// Inverse of [`kg_per_l`].
#[inline]
pub fn as_kg_per_l(d: Density) -> f64 {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    d.get::<kilogram_per_cubic_meter>() / KG_PER_M3_PER_KG_PER_L
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Tolerances, nearly_equal};

    #[test]
    fn kg_per_l_round_trip() {
        for v in [0.55, 0.8, 0.9, 1.0, 1.2] {
            assert!(nearly_equal(as_kg_per_l(kg_per_l(v)), v, Tolerances::default()));
        }
    }

    #[test]
    fn water_is_a_thousand_kg_per_cubic_meter() {
        use uom::si::mass_density::kilogram_per_cubic_meter;
        let water = kg_per_l(1.0);
        assert_eq!(water.get::<kilogram_per_cubic_meter>(), 1_000.0);
    }
}
