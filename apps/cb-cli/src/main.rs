use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use cb_core::Real;
use cb_ingredients::{DEFAULT_TARGET_UNIT, IngredientResult, IngredientTable, IngredientsHandler};
use cb_units::{UnitSet, UnitsHandler};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cb-cli")]
#[command(about = "Cupboard CLI - kitchen unit and ingredient conversions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a quantity of an ingredient, bridging volume and mass by density
    Convert {
        /// Ingredient name (e.g., flour, "brown sugar")
        ingredient: String,
        /// Quantity in the source unit
        magnitude: Real,
        /// Source unit (e.g., cup, Tbsp, lb)
        from: String,
        /// Target unit (defaults to liter)
        to: Option<String>,
        /// Extra ingredient table (YAML or JSON)
        #[arg(long)]
        ingredients: Option<PathBuf>,
    },
    /// Convert within one category: volume, mass or temperature
    Unit {
        category: String,
        magnitude: Real,
        from: String,
        /// Target unit (defaults to the category's SI base)
        to: Option<String>,
    },
    /// List units and their aliases
    Units {
        /// Restrict to one category
        category: Option<String>,
    },
    /// List registered ingredients and densities
    Ingredients {
        /// Extra ingredient table (YAML or JSON)
        #[arg(long)]
        ingredients: Option<PathBuf>,
    },
    /// Show which categories and units a string resolves to
    Which { text: String },
}

fn main() -> IngredientResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            ingredient,
            magnitude,
            from,
            to,
            ingredients,
        } => cmd_convert(
            &ingredient,
            magnitude,
            &from,
            to.as_deref(),
            ingredients.as_deref(),
        ),
        Commands::Unit {
            category,
            magnitude,
            from,
            to,
        } => cmd_unit(&category, magnitude, &from, to.as_deref()),
        Commands::Units { category } => cmd_units(category.as_deref()),
        Commands::Ingredients { ingredients } => cmd_ingredients(ingredients.as_deref()),
        Commands::Which { text } => cmd_which(&text),
    }
}

fn load_ingredients(table_path: Option<&Path>) -> IngredientResult<Arc<IngredientsHandler>> {
    let Some(path) = table_path else {
        return IngredientsHandler::shared();
    };
    let table = IngredientTable::load(path)?;
    let mut handler = IngredientsHandler::new(UnitsHandler::shared()?)?;
    let added = handler.extend_from_table(&table)?;
    tracing::info!(path = %path.display(), added, "extended ingredient registry");
    Ok(Arc::new(handler))
}

fn cmd_convert(
    ingredient: &str,
    magnitude: Real,
    from: &str,
    to: Option<&str>,
    table_path: Option<&Path>,
) -> IngredientResult<()> {
    let handler = load_ingredients(table_path)?;
    let to = to.unwrap_or(DEFAULT_TARGET_UNIT);
    let result = handler.convert(ingredient, magnitude, from, to)?;
    println!("{} {} {} = {}", magnitude, from, ingredient, result);
    Ok(())
}

fn cmd_unit(category: &str, magnitude: Real, from: &str, to: Option<&str>) -> IngredientResult<()> {
    let units = UnitsHandler::shared()?;
    let result = units.set(category)?.convert(magnitude, from, to)?;
    println!("{} {} = {}", magnitude, from, result);
    Ok(())
}

fn print_set(set: &UnitSet) {
    println!("{} (SI base: {})", set.name(), set.si_base());
    for unit in set.units() {
        let note = if unit.is_convertible() {
            ""
        } else {
            " [not convertible]"
        };
        println!("  {:<14} {}{}", unit.name(), unit.aliases().join(", "), note);
    }
}

fn cmd_units(category: Option<&str>) -> IngredientResult<()> {
    let units = UnitsHandler::shared()?;
    match category {
        Some(category) => print_set(units.set(category)?),
        None => {
            for set in units.sets() {
                print_set(set);
            }
        }
    }
    Ok(())
}

fn cmd_ingredients(table_path: Option<&Path>) -> IngredientResult<()> {
    let handler = load_ingredients(table_path)?;
    println!("Ingredients (match priority order):");
    for ingredient in handler.ingredients() {
        let density = match ingredient.density_kg_per_l() {
            Some(d) => format!("{} kg/L", d),
            None => "no density".to_string(),
        };
        println!(
            "  {:<12} {:<14} aliases: {}",
            ingredient.name(),
            density,
            ingredient.aliases().join(", ")
        );
    }
    Ok(())
}

fn cmd_which(text: &str) -> IngredientResult<()> {
    let units = UnitsHandler::shared()?;
    let hits = units.classify(text);

    match hits.as_slice() {
        [] => println!("'{}' matches no unit", text),
        [(set, unit)] => println!("'{}' is {} ({})", text, unit.name(), set.name()),
        _ => {
            println!("'{}' is ambiguous:", text);
            for (set, unit) in &hits {
                println!("  {} ({})", unit.name(), set.name());
            }
        }
    }

    if let Some(ingredient) = IngredientsHandler::shared()?.find(text) {
        println!("'{}' names ingredient {}", text, ingredient.name());
    }
    Ok(())
}
