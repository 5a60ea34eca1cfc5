//! Process-wide unit registry.

use std::sync::{Arc, OnceLock};

use crate::tables::{MASS_UNITS, TEMPERATURE_UNITS, VOLUME_UNITS, build_set};
use crate::{SiBase, Unit, UnitError, UnitResult, UnitSet};

/// The three fixed categories: volume (liter), mass (kilogram) and
/// temperature (kelvin). Built once, read-only afterwards; share it via
/// [`UnitsHandler::shared`] or an `Arc` of your own.
#[derive(Debug, Clone)]
pub struct UnitsHandler {
    volume: UnitSet,
    mass: UnitSet,
    temperature: UnitSet,
}

static SHARED: OnceLock<Arc<UnitsHandler>> = OnceLock::new();

impl UnitsHandler {
    /// Build the registry from the built-in tables.
    pub fn new() -> UnitResult<Self> {
        let handler = Self::from_sets(
            build_set("volume", SiBase::Liter, &VOLUME_UNITS)?,
            build_set("mass", SiBase::Kilogram, &MASS_UNITS)?,
            build_set("temperature", SiBase::Kelvin, &TEMPERATURE_UNITS)?,
        )?;
        tracing::debug!(
            volume = handler.volume.len(),
            mass = handler.mass.len(),
            temperature = handler.temperature.len(),
            "built unit registry"
        );
        Ok(handler)
    }

    /// Build the registry from caller-supplied sets. Each set must carry the
    /// SI base of the slot it is placed in.
    pub fn from_sets(volume: UnitSet, mass: UnitSet, temperature: UnitSet) -> UnitResult<Self> {
        check_slot("volume", &volume, SiBase::Liter)?;
        check_slot("mass", &mass, SiBase::Kilogram)?;
        check_slot("temperature", &temperature, SiBase::Kelvin)?;
        Ok(Self {
            volume,
            mass,
            temperature,
        })
    }

    /// The built-in registry, constructed on first use.
    pub fn shared() -> UnitResult<Arc<Self>> {
        if let Some(handler) = SHARED.get() {
            return Ok(Arc::clone(handler));
        }
        let handler = Arc::new(Self::new()?);
        Ok(Arc::clone(SHARED.get_or_init(|| handler)))
    }

    pub fn volume(&self) -> &UnitSet {
        &self.volume
    }

    pub fn mass(&self) -> &UnitSet {
        &self.mass
    }

    pub fn temperature(&self) -> &UnitSet {
        &self.temperature
    }

    pub fn sets(&self) -> [&UnitSet; 3] {
        [&self.volume, &self.mass, &self.temperature]
    }

    /// Look a set up by category name, ignoring case.
    pub fn set(&self, category: &str) -> UnitResult<&UnitSet> {
        self.sets()
            .into_iter()
            .find(|set| set.name().eq_ignore_ascii_case(category.trim()))
            .ok_or_else(|| UnitError::UnknownCategory {
                name: category.to_string(),
            })
    }

    /// Every category in which `text` resolves, with the unit it resolves to.
    /// More than one entry means the text is ambiguous across categories.
    pub fn classify(&self, text: &str) -> Vec<(&UnitSet, &Unit)> {
        self.sets()
            .into_iter()
            .filter_map(|set| set.find(text).map(|unit| (set, unit)))
            .collect()
    }
}

fn check_slot(slot: &'static str, set: &UnitSet, expected: SiBase) -> UnitResult<()> {
    if set.si_base() == expected {
        Ok(())
    } else {
        Err(UnitError::SetMismatch {
            slot,
            set: set.name().to_string(),
            expected,
            actual: set.si_base(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_sets_have_expected_bases() {
        let uh = UnitsHandler::new().unwrap();
        assert_eq!(uh.volume().si_base(), SiBase::Liter);
        assert_eq!(uh.mass().si_base(), SiBase::Kilogram);
        assert_eq!(uh.temperature().si_base(), SiBase::Kelvin);
        assert_eq!(uh.volume().len(), 24);
        assert_eq!(uh.mass().len(), 3);
        assert_eq!(uh.temperature().len(), 3);
    }

    #[test]
    fn shared_returns_same_instance() {
        let a = UnitsHandler::shared().unwrap();
        let b = UnitsHandler::shared().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn from_sets_checks_slots() {
        let result = UnitsHandler::from_sets(
            UnitSet::new("mass", SiBase::Kilogram),
            UnitSet::new("mass", SiBase::Kilogram),
            UnitSet::new("temperature", SiBase::Kelvin),
        );
        assert!(matches!(
            result,
            Err(UnitError::SetMismatch { slot: "volume", .. })
        ));
    }

    #[test]
    fn set_by_name() {
        let uh = UnitsHandler::new().unwrap();
        assert_eq!(uh.set("Mass").unwrap().si_base(), SiBase::Kilogram);
        assert!(matches!(
            uh.set("length"),
            Err(UnitError::UnknownCategory { .. })
        ));
    }

    #[test]
    fn classify_reports_every_category() {
        let uh = UnitsHandler::new().unwrap();

        let cup = uh.classify("cup");
        assert_eq!(cup.len(), 1);
        assert_eq!(cup[0].0.name(), "volume");

        // "g" is both gallon and gram.
        let g: Vec<&str> = uh.classify("g").iter().map(|(set, _)| set.name()).collect();
        assert_eq!(g, ["volume", "mass"]);

        assert!(uh.classify("furlong").is_empty());
    }
}
