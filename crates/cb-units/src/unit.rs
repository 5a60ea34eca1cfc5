//! A single named, alias-matchable, affinely convertible unit.

use std::fmt;
use std::str::FromStr;

use cb_core::{AliasMatcher, MatchPolicy, Real, ensure_finite};

use crate::{UnitError, UnitResult};

/// SI category tag of a unit. The enumeration is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SiBase {
    Meter,
    Kilogram,
    Second,
    Liter,
    Kelvin,
    Unknown,
}

impl SiBase {
    pub const ALL: [SiBase; 6] = [
        SiBase::Meter,
        SiBase::Kilogram,
        SiBase::Second,
        SiBase::Liter,
        SiBase::Kelvin,
        SiBase::Unknown,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SiBase::Meter => "meter",
            SiBase::Kilogram => "kilogram",
            SiBase::Second => "second",
            SiBase::Liter => "liter",
            SiBase::Kelvin => "kelvin",
            SiBase::Unknown => "unknown",
        }
    }
}

impl fmt::Display for SiBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SiBase {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SiBase::ALL
            .into_iter()
            .find(|base| base.name() == s)
            .ok_or_else(|| UnitError::InvalidCategory { name: s.to_string() })
    }
}

/// How a unit maps onto its SI base.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Conversion {
    /// `si = magnitude * ratio + offset`
    Affine { ratio: Real, offset: Real },
    /// Placeholder with no defined SI value (package, bag, can).
    Unconvertible,
}

impl Conversion {
    /// Pure scaling, zero offset.
    pub const fn scale(ratio: Real) -> Self {
        Conversion::Affine { ratio, offset: 0.0 }
    }

    pub const fn affine(ratio: Real, offset: Real) -> Self {
        Conversion::Affine { ratio, offset }
    }
}

/// A unit such as cup, gram or fahrenheit.
///
/// Matching uses [`MatchPolicy::Prefix`]: see [`cb_core::alias`] for the exact
/// rule. Immutable once built.
#[derive(Debug, Clone)]
pub struct Unit {
    name: String,
    si_base: SiBase,
    conversion: Conversion,
    matcher: AliasMatcher,
}

impl Unit {
    /// Build a unit. An empty alias list means the canonical name is the only alias.
    ///
    /// Fails if the ratio is zero or any coefficient is non-finite.
    pub fn new<I, S>(
        name: impl Into<String>,
        si_base: SiBase,
        aliases: I,
        conversion: Conversion,
        case_sensitive: bool,
    ) -> UnitResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        if let Conversion::Affine { ratio, offset } = conversion {
            ensure_finite(ratio, "unit ratio")?;
            ensure_finite(offset, "unit offset")?;
            if ratio == 0.0 {
                return Err(UnitError::ZeroRatio { unit: name });
            }
        }

        let mut aliases: Vec<String> = aliases.into_iter().map(Into::into).collect();
        if aliases.is_empty() {
            aliases.push(name.clone());
        }
        let matcher = AliasMatcher::new(aliases, MatchPolicy::Prefix, case_sensitive)?;

        Ok(Self {
            name,
            si_base,
            conversion,
            matcher,
        })
    }

    /// Like [`Unit::new`] but with the SI base given by name, e.g. `"liter"`.
    pub fn with_base_name<I, S>(
        name: impl Into<String>,
        si_base: &str,
        aliases: I,
        conversion: Conversion,
        case_sensitive: bool,
    ) -> UnitResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let si_base = si_base.parse::<SiBase>()?;
        Self::new(name, si_base, aliases, conversion, case_sensitive)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn si_base(&self) -> SiBase {
        self.si_base
    }

    pub fn conversion(&self) -> Conversion {
        self.conversion
    }

    pub fn aliases(&self) -> &[String] {
        self.matcher.aliases()
    }

    pub fn case_sensitive(&self) -> bool {
        self.matcher.case_sensitive()
    }

    pub fn is_convertible(&self) -> bool {
        matches!(self.conversion, Conversion::Affine { .. })
    }

    /// True if `text` names this unit under the unit's own case rule.
    pub fn matches(&self, text: &str) -> bool {
        self.matcher.is_match(text)
    }

    /// Same as [`Unit::matches`] with the case rule overridden.
    pub fn matches_with(&self, text: &str, case_sensitive: bool) -> bool {
        self.matcher.is_match_with(text, case_sensitive)
    }

    pub fn to_si(&self, magnitude: Real) -> UnitResult<Real> {
        match self.conversion {
            Conversion::Affine { ratio, offset } => Ok(magnitude * ratio + offset),
            Conversion::Unconvertible => Err(self.unconvertible()),
        }
    }

    pub fn from_si(&self, si_magnitude: Real) -> UnitResult<Real> {
        match self.conversion {
            Conversion::Affine { ratio, offset } => Ok((si_magnitude - offset) / ratio),
            Conversion::Unconvertible => Err(self.unconvertible()),
        }
    }

    fn unconvertible(&self) -> UnitError {
        UnitError::Unconvertible {
            unit: self.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cb_core::{CoreError, Tolerances, nearly_equal};

    fn celsius() -> Unit {
        Unit::new(
            "celsius",
            SiBase::Kelvin,
            ["celsius", "C", "degC", "deg C"],
            Conversion::affine(1.0, 273.15),
            false,
        )
        .unwrap()
    }

    #[test]
    fn si_base_parse() {
        assert_eq!("liter".parse::<SiBase>().unwrap(), SiBase::Liter);
        assert_eq!("unknown".parse::<SiBase>().unwrap(), SiBase::Unknown);
        assert!(matches!(
            "litre".parse::<SiBase>(),
            Err(UnitError::InvalidCategory { name }) if name == "litre"
        ));
    }

    #[test]
    fn invalid_base_name_fails_construction() {
        let result = Unit::with_base_name(
            "cup",
            "gallon",
            ["cup"],
            Conversion::scale(0.2365882365),
            false,
        );
        assert!(matches!(result, Err(UnitError::InvalidCategory { .. })));
    }

    #[test]
    fn zero_ratio_is_rejected() {
        let result = Unit::new(
            "nothing",
            SiBase::Liter,
            ["nothing"],
            Conversion::scale(0.0),
            false,
        );
        assert!(matches!(result, Err(UnitError::ZeroRatio { unit }) if unit == "nothing"));
    }

    #[test]
    fn non_finite_ratio_is_rejected() {
        let result = Unit::new("nan", SiBase::Liter, ["nan"], Conversion::scale(f64::NAN), false);
        assert!(matches!(
            result,
            Err(UnitError::Core(CoreError::NonFinite { .. }))
        ));
    }

    #[test]
    fn canonical_name_is_default_alias() {
        let cup = Unit::new(
            "cup",
            SiBase::Liter,
            Vec::<String>::new(),
            Conversion::scale(0.2365882365),
            false,
        )
        .unwrap();
        assert_eq!(cup.aliases(), &["cup".to_string()]);
        assert!(cup.matches("cups"));
    }

    #[test]
    fn affine_conversion() {
        let c = celsius();
        assert!(nearly_equal(c.to_si(0.0).unwrap(), 273.15, Tolerances::default()));
        assert!(nearly_equal(c.to_si(100.0).unwrap(), 373.15, Tolerances::default()));
        assert!(nearly_equal(c.from_si(273.15).unwrap(), 0.0, Tolerances::default()));
    }

    #[test]
    fn matches_with_overrides_case() {
        let tsp = Unit::new(
            "teaspoon",
            SiBase::Liter,
            ["teaspoon", "t", "tsp"],
            Conversion::scale(4.92892159375e-3),
            true,
        )
        .unwrap();
        assert!(tsp.matches("tsp"));
        assert!(!tsp.matches("TSP"));
        assert!(tsp.matches_with("TSP", false));
    }

    #[test]
    fn unconvertible_unit_fails_both_ways() {
        let bag =
            Unit::new("bag", SiBase::Liter, ["bag"], Conversion::Unconvertible, false).unwrap();
        assert!(!bag.is_convertible());
        assert!(bag.matches("bags"));
        assert!(matches!(bag.to_si(1.0), Err(UnitError::Unconvertible { .. })));
        assert!(matches!(bag.from_si(1.0), Err(UnitError::Unconvertible { .. })));
    }
}
