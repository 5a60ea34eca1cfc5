//! Ordered ingredient registry and conversion dispatch.

use std::sync::{Arc, OnceLock};

use cb_core::Real;
use cb_units::{Measurement, UnitsHandler};

use crate::catalog::builtin_ingredients;
use crate::config::IngredientTable;
use crate::{Ingredient, IngredientError, IngredientResult};

/// Ingredients in registration order. Lookup is first-match-wins, so an entry
/// whose alias overlaps an earlier one is unreachable by name; no collision
/// check is made on insert.
///
/// `add` takes `&mut self`: build the registry first, then share it behind an
/// `Arc` (or a lock if it must keep growing).
#[derive(Debug, Clone)]
pub struct IngredientsHandler {
    units: Arc<UnitsHandler>,
    ingredients: Vec<Ingredient>,
}

static SHARED: OnceLock<Arc<IngredientsHandler>> = OnceLock::new();

impl IngredientsHandler {
    /// Registry seeded with the built-in catalog.
    pub fn new(units: Arc<UnitsHandler>) -> IngredientResult<Self> {
        let mut handler = Self::empty(units);
        for entry in builtin_ingredients() {
            handler.add_with_aliases(
                entry.name,
                entry.aliases.iter().copied(),
                entry.density_kg_per_l,
            )?;
        }
        Ok(handler)
    }

    /// Registry with no ingredients.
    pub fn empty(units: Arc<UnitsHandler>) -> Self {
        Self {
            units,
            ingredients: Vec::new(),
        }
    }

    /// Built-in registry over the shared unit registry, constructed on first use.
    pub fn shared() -> IngredientResult<Arc<Self>> {
        if let Some(handler) = SHARED.get() {
            return Ok(Arc::clone(handler));
        }
        let handler = Arc::new(Self::new(UnitsHandler::shared()?)?);
        Ok(Arc::clone(SHARED.get_or_init(|| handler)))
    }

    pub fn units(&self) -> &Arc<UnitsHandler> {
        &self.units
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }

    /// Append an ingredient whose only alias is its name.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        density_kg_per_l: Option<Real>,
    ) -> IngredientResult<()> {
        self.add_with_aliases(name, Vec::<String>::new(), density_kg_per_l)
    }

    pub fn add_with_aliases<I, S>(
        &mut self,
        name: impl Into<String>,
        aliases: I,
        density_kg_per_l: Option<Real>,
    ) -> IngredientResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ingredient =
            Ingredient::with_aliases(name, aliases, density_kg_per_l, Arc::clone(&self.units))?;
        tracing::trace!(name = ingredient.name(), "registered ingredient");
        self.ingredients.push(ingredient);
        Ok(())
    }

    /// Value-returning form of [`IngredientsHandler::add`].
    pub fn with_ingredient(
        mut self,
        name: impl Into<String>,
        density_kg_per_l: Option<Real>,
    ) -> IngredientResult<Self> {
        self.add(name, density_kg_per_l)?;
        Ok(self)
    }

    /// Append every entry of `table`, in file order. Returns how many were added.
    ///
    /// All or nothing: on error the registry is unchanged.
    pub fn extend_from_table(&mut self, table: &IngredientTable) -> IngredientResult<usize> {
        table.validate()?;
        let added = table
            .ingredients
            .iter()
            .map(|entry| {
                Ingredient::with_aliases(
                    entry.name.clone(),
                    entry.aliases.iter().cloned(),
                    entry.density_kg_per_l,
                    Arc::clone(&self.units),
                )
            })
            .collect::<IngredientResult<Vec<_>>>()?;
        let count = added.len();
        tracing::trace!(count, "registered ingredient table");
        self.ingredients.extend(added);
        Ok(count)
    }

    /// First ingredient, in registration order, whose aliases occur in `name`.
    pub fn find(&self, name: &str) -> Option<&Ingredient> {
        self.ingredients
            .iter()
            .find(|ingredient| ingredient.match_string(name))
    }

    /// Resolve `name` and delegate to [`Ingredient::convert`].
    pub fn convert(
        &self,
        name: &str,
        magnitude: Real,
        from_unit: &str,
        to_unit: &str,
    ) -> IngredientResult<Measurement> {
        let ingredient = self
            .find(name)
            .ok_or_else(|| IngredientError::UnmatchedIngredient {
                name: name.to_string(),
            })?;
        tracing::debug!(requested = name, matched = ingredient.name(), "resolved ingredient");
        ingredient.convert(magnitude, from_unit, Some(to_unit))
    }
}
