//! A named substance with an optional density.

use std::sync::Arc;

use cb_core::{AliasMatcher, Density, MatchPolicy, Real, as_kg_per_l, ensure_positive, kg_per_l};
use cb_units::{Measurement, Unit, UnitsHandler};

use crate::{IngredientError, IngredientResult};

/// Target unit used when `Ingredient::convert` is given none.
pub const DEFAULT_TARGET_UNIT: &str = "liter";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Category {
    Volume,
    Mass,
}

/// An ingredient such as flour or butter.
///
/// Name matching uses [`MatchPolicy::Anywhere`]: an alias may occur anywhere
/// in the candidate and case matters. Unit matching, by contrast, is anchored.
#[derive(Debug, Clone)]
pub struct Ingredient {
    name: String,
    matcher: AliasMatcher,
    density: Option<Density>,
    units: Arc<UnitsHandler>,
}

impl Ingredient {
    pub fn new(
        name: impl Into<String>,
        density_kg_per_l: Option<Real>,
        units: Arc<UnitsHandler>,
    ) -> IngredientResult<Self> {
        Self::with_aliases(name, Vec::<String>::new(), density_kg_per_l, units)
    }

    /// Build with explicit aliases. An empty alias list means the name is the
    /// only alias. Density, when given, must be finite and positive.
    pub fn with_aliases<I, S>(
        name: impl Into<String>,
        aliases: I,
        density_kg_per_l: Option<Real>,
        units: Arc<UnitsHandler>,
    ) -> IngredientResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let density = match density_kg_per_l {
            Some(value) => match ensure_positive(value, "density") {
                Ok(value) => Some(kg_per_l(value)),
                Err(_) => {
                    return Err(IngredientError::InvalidDensity {
                        ingredient: name,
                        value,
                    });
                }
            },
            None => None,
        };

        let mut aliases: Vec<String> = aliases.into_iter().map(Into::into).collect();
        if aliases.is_empty() {
            aliases.push(name.clone());
        }
        let matcher = AliasMatcher::new(aliases, MatchPolicy::Anywhere, true)?;

        Ok(Self {
            name,
            matcher,
            density,
            units,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn aliases(&self) -> &[String] {
        self.matcher.aliases()
    }

    pub fn density(&self) -> Option<Density> {
        self.density
    }

    pub fn density_kg_per_l(&self) -> Option<Real> {
        self.density.map(as_kg_per_l)
    }

    pub fn units(&self) -> &Arc<UnitsHandler> {
        &self.units
    }

    /// True if any alias occurs anywhere in `text`.
    pub fn match_string(&self, text: &str) -> bool {
        self.matcher.is_match(text)
    }

    /// Convert `magnitude` between any pair of volume/mass units, bridging
    /// categories through this ingredient's density. `to_unit` defaults to
    /// [`DEFAULT_TARGET_UNIT`]. The result carries `to_unit` as given.
    pub fn convert(
        &self,
        magnitude: Real,
        from_unit: &str,
        to_unit: Option<&str>,
    ) -> IngredientResult<Measurement> {
        let to_unit = to_unit.unwrap_or(DEFAULT_TARGET_UNIT);

        let from = Lookup::new(&self.units, from_unit);
        let to = Lookup::new(&self.units, to_unit);
        from.ensure_matched()?;
        to.ensure_matched()?;
        let (from_category, from) = from.single()?;
        let (to_category, to) = to.single()?;

        let si = from.to_si(magnitude)?;
        let bridged = match (from_category, to_category) {
            (Category::Mass, Category::Mass) | (Category::Volume, Category::Volume) => si,
            (Category::Mass, Category::Volume) => si / self.require_density()?,
            (Category::Volume, Category::Mass) => si * self.require_density()?,
        };
        let result = to.from_si(bridged)?;

        tracing::debug!(
            ingredient = %self.name,
            magnitude,
            from = from.name(),
            to = to.name(),
            bridged = from_category != to_category,
            result,
            "converted ingredient quantity"
        );
        Ok(Measurement::new(result, to_unit))
    }

    fn require_density(&self) -> IngredientResult<Real> {
        self.density_kg_per_l()
            .ok_or_else(|| IngredientError::MissingDensity {
                ingredient: self.name.clone(),
            })
    }
}

/// Independent volume and mass lookups for one unit string.
struct Lookup<'a> {
    text: &'a str,
    volume: Option<&'a Unit>,
    mass: Option<&'a Unit>,
}

impl<'a> Lookup<'a> {
    fn new(units: &'a UnitsHandler, text: &'a str) -> Self {
        Self {
            text,
            volume: units.volume().find(text),
            mass: units.mass().find(text),
        }
    }

    fn ensure_matched(&self) -> IngredientResult<()> {
        if self.volume.is_none() && self.mass.is_none() {
            return Err(IngredientError::UnmatchedUnit {
                text: self.text.to_string(),
            });
        }
        Ok(())
    }

    fn single(&self) -> IngredientResult<(Category, &'a Unit)> {
        match (self.volume, self.mass) {
            (Some(unit), None) => Ok((Category::Volume, unit)),
            (None, Some(unit)) => Ok((Category::Mass, unit)),
            (Some(_), Some(_)) => Err(IngredientError::AmbiguousUnit {
                text: self.text.to_string(),
            }),
            (None, None) => Err(IngredientError::UnmatchedUnit {
                text: self.text.to_string(),
            }),
        }
    }
}
