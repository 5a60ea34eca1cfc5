/// Static seed entry for the ingredient registry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IngredientCatalogEntry {
    pub name: &'static str,
    /// Empty means the name is the only alias.
    pub aliases: &'static [&'static str],
    /// kg/L at reference conditions.
    pub density_kg_per_l: Option<f64>,
}

const BUILTIN_INGREDIENTS: [IngredientCatalogEntry; 6] = [
    IngredientCatalogEntry {
        name: "flour",
        aliases: &[],
        density_kg_per_l: Some(0.55),
    },
    IngredientCatalogEntry {
        name: "salt",
        aliases: &[],
        density_kg_per_l: Some(1.2),
    },
    IngredientCatalogEntry {
        name: "sugar",
        aliases: &[],
        density_kg_per_l: Some(0.8),
    },
    IngredientCatalogEntry {
        name: "water",
        aliases: &[],
        density_kg_per_l: Some(1.0),
    },
    IngredientCatalogEntry {
        name: "butter",
        aliases: &[],
        density_kg_per_l: Some(0.9),
    },
    IngredientCatalogEntry {
        name: "vanilla",
        aliases: &[],
        density_kg_per_l: None,
    },
];

/// Built-in ingredients in registration (match priority) order.
pub fn builtin_ingredients() -> &'static [IngredientCatalogEntry] {
    &BUILTIN_INGREDIENTS
}
