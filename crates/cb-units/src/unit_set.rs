//! A category of units sharing one SI base.

use std::fmt;

use cb_core::Real;

use crate::{SiBase, Unit, UnitError, UnitResult};

/// Result of a conversion: a magnitude and the unit text it is expressed in.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub magnitude: Real,
    pub unit: String,
}

impl Measurement {
    pub fn new(magnitude: Real, unit: impl Into<String>) -> Self {
        Self {
            magnitude,
            unit: unit.into(),
        }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.magnitude, self.unit)
    }
}

/// Ordered units of one category. Order is match priority: the first unit
/// whose aliases match wins, so overlapping aliases are resolved by placement.
#[derive(Debug, Clone)]
pub struct UnitSet {
    name: String,
    si_base: SiBase,
    units: Vec<Unit>,
}

impl UnitSet {
    pub fn new(name: impl Into<String>, si_base: SiBase) -> Self {
        Self {
            name: name.into(),
            si_base,
            units: Vec::new(),
        }
    }

    /// Append a unit. Its SI base must equal the set's.
    pub fn push(&mut self, unit: Unit) -> UnitResult<()> {
        if unit.si_base() != self.si_base {
            return Err(UnitError::CategoryMismatch {
                unit: unit.name().to_string(),
                expected: self.si_base,
                actual: unit.si_base(),
            });
        }
        self.units.push(unit);
        Ok(())
    }

    /// Builder form of [`UnitSet::push`].
    pub fn with_unit(mut self, unit: Unit) -> UnitResult<Self> {
        self.push(unit)?;
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn si_base(&self) -> SiBase {
        self.si_base
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// First unit, in insertion order, that matches `text`.
    pub fn find(&self, text: &str) -> Option<&Unit> {
        let found = self.units.iter().find(|unit| unit.matches(text));
        match found {
            Some(unit) => {
                tracing::trace!(set = %self.name, text, unit = unit.name(), "unit matched")
            }
            None => tracing::trace!(set = %self.name, text, "no unit matched"),
        }
        found
    }

    /// [`UnitSet::find`], failing with [`UnitError::UnmatchedUnit`] when nothing matches.
    pub fn resolve(&self, text: &str) -> UnitResult<&Unit> {
        self.find(text).ok_or_else(|| UnitError::UnmatchedUnit {
            text: text.to_string(),
            category: self.name.clone(),
        })
    }

    /// Convert `magnitude` from `from_text` to `to_text`.
    ///
    /// Without a target the result is in the SI base and carries its name.
    /// With a target the result carries `to_text` as given.
    pub fn convert(
        &self,
        magnitude: Real,
        from_text: &str,
        to_text: Option<&str>,
    ) -> UnitResult<Measurement> {
        let from = self.resolve(from_text)?;
        let si = from.to_si(magnitude)?;

        let Some(to_text) = to_text else {
            return Ok(Measurement::new(si, self.si_base.name()));
        };

        let to = self.resolve(to_text)?;
        let result = to.from_si(si)?;
        tracing::debug!(
            set = %self.name,
            magnitude,
            from = from.name(),
            to = to.name(),
            result,
            "converted within category"
        );
        Ok(Measurement::new(result, to_text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Conversion;
    use cb_core::{Tolerances, nearly_equal};

    fn small_volume_set() -> UnitSet {
        UnitSet::new("volume", SiBase::Liter)
            .with_unit(
                Unit::new("liter", SiBase::Liter, ["liter", "l"], Conversion::scale(1.0), false)
                    .unwrap(),
            )
            .unwrap()
            .with_unit(
                Unit::new(
                    "milliliter",
                    SiBase::Liter,
                    ["milliliter", "ml"],
                    Conversion::scale(0.001),
                    false,
                )
                .unwrap(),
            )
            .unwrap()
    }

    #[test]
    fn push_rejects_other_category() {
        let mut set = small_volume_set();
        let gram = Unit::new("gram", SiBase::Kilogram, ["gram"], Conversion::scale(0.001), false)
            .unwrap();
        assert!(matches!(
            set.push(gram),
            Err(UnitError::CategoryMismatch {
                expected: SiBase::Liter,
                actual: SiBase::Kilogram,
                ..
            })
        ));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn find_is_first_match_wins() {
        let set = small_volume_set()
            .with_unit(
                Unit::new("shadow", SiBase::Liter, ["l"], Conversion::scale(2.0), false).unwrap(),
            )
            .unwrap();
        assert_eq!(set.find("l").unwrap().name(), "liter");
        assert!(set.find("gallon").is_none());
    }

    #[test]
    fn convert_without_target_returns_si_base() {
        let set = small_volume_set();
        let m = set.convert(250.0, "ml", None).unwrap();
        assert!(nearly_equal(m.magnitude, 0.25, Tolerances::default()));
        assert_eq!(m.unit, "liter");
    }

    #[test]
    fn convert_with_target_keeps_target_text() {
        let set = small_volume_set();
        let m = set.convert(0.25, "Liters", Some("mL")).unwrap();
        assert!(nearly_equal(m.magnitude, 250.0, Tolerances::default()));
        assert_eq!(m.unit, "mL");
    }

    #[test]
    fn convert_reports_unmatched_units() {
        let set = small_volume_set();
        assert!(matches!(
            set.convert(1.0, "furlong", None),
            Err(UnitError::UnmatchedUnit { text, category }) if text == "furlong" && category == "volume"
        ));
        assert!(matches!(
            set.convert(1.0, "l", Some("furlong")),
            Err(UnitError::UnmatchedUnit { text, .. }) if text == "furlong"
        ));
    }

    #[test]
    fn measurement_display() {
        assert_eq!(Measurement::new(2.5, "cup").to_string(), "2.5 cup");
    }
}
