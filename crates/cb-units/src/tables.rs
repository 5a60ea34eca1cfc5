//! Fixed unit tables for the built-in volume, mass and temperature sets.
//!
//! Ratios are literal SI factors. US customary volumes follow the exact
//! definitions (1 gal = 231 in³ = 3.785411784 L, subdivided by 4 quarts,
//! 2 pints, 2 cups, 8 fl oz, 2 tbsp, 3 tsp). Table order is match priority.

use crate::{Conversion, SiBase, Unit, UnitResult, UnitSet};

pub const LITER_L: f64 = 1.0;
pub const DECILITER_L: f64 = 0.1;
pub const MILLILITER_L: f64 = 0.001;
pub const DROP_L: f64 = 0.050e-3;
pub const SMIDGEN_L: f64 = 0.116e-3;
pub const PINCH_L: f64 = 0.231e-3;
pub const DASH_L: f64 = 0.462e-3;
pub const SALTSPOON_L: f64 = 0.924e-3;
pub const COFFEESPOON_L: f64 = 0.924e-3;
pub const FLUID_DRAM_L: f64 = 0.924e-3;
pub const TEASPOON_L: f64 = 4.928_921_593_75e-3;
pub const DESSERTSPOON_L: f64 = 0.01;
pub const TABLESPOON_L: f64 = 14.786_764_781_25e-3;
pub const FLUID_OUNCE_L: f64 = 29.573_529_562_5e-3;
pub const WINEGLASS_L: f64 = 59.15e-3;
pub const TEACUP_L: f64 = 0.1189;
pub const CUP_L: f64 = 0.236_588_236_5;
pub const PINT_L: f64 = 0.473_176_473;
pub const QUART_L: f64 = 0.946_352_946;
pub const POTTLE_L: f64 = 1.892;
pub const GALLON_L: f64 = 3.785_411_784;

pub const KILOGRAM_KG: f64 = 1.0;
pub const GRAM_KG: f64 = 0.001;
pub const POUND_KG: f64 = 0.453_592_37;

/// Kelvin at 0 °F, as the Fahrenheit offset.
pub const FAHRENHEIT_OFFSET_K: f64 = 255.372;
pub const FAHRENHEIT_RATIO: f64 = 5.0 / 9.0;
pub const CELSIUS_OFFSET_K: f64 = 273.15;

/// Static description of a unit, turned into a [`Unit`] at registry build.
#[derive(Debug, Clone, Copy)]
pub struct UnitDef {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub conversion: Conversion,
    pub case_sensitive: bool,
}

impl UnitDef {
    const fn scaled(name: &'static str, aliases: &'static [&'static str], ratio: f64) -> Self {
        Self {
            name,
            aliases,
            conversion: Conversion::scale(ratio),
            case_sensitive: false,
        }
    }

    const fn case_sensitive(mut self) -> Self {
        self.case_sensitive = true;
        self
    }

    pub fn build(&self, si_base: SiBase) -> UnitResult<Unit> {
        Unit::new(
            self.name,
            si_base,
            self.aliases.iter().copied(),
            self.conversion,
            self.case_sensitive,
        )
    }
}

pub const VOLUME_UNITS: [UnitDef; 24] = [
    UnitDef::scaled("liter", &["liter", "litre", "l", "litr", "ltr"], LITER_L),
    UnitDef::scaled("deciliter", &["deciliter", "decilitre", "dl"], DECILITER_L),
    UnitDef::scaled("milliliter", &["milliliter", "millilitre", "ml", "cc"], MILLILITER_L),
    UnitDef::scaled("drop", &["drop", "d", "dr", "gt", "gtt"], DROP_L),
    UnitDef::scaled(
        "smidgen",
        &["smidgen", "smidge", "smidg", "smdgn", "smdg", "smi"],
        SMIDGEN_L,
    ),
    UnitDef::scaled("pinch", &["pinch"], PINCH_L),
    UnitDef::scaled("dash", &["dash", "dsh"], DASH_L),
    UnitDef::scaled("saltspoon", &["saltspoon", "scruple", "ssp"], SALTSPOON_L),
    UnitDef::scaled("coffeespoon", &["coffeespoon", "csp", "cfespn"], COFFEESPOON_L),
    UnitDef::scaled(
        "fluid dram",
        &["fluid dram", "fl.dr", "fl. dr", "fldr", "fl dr"],
        FLUID_DRAM_L,
    ),
    UnitDef::scaled("teaspoon", &["teaspoon", "Teaspoon", "t", "tsp", "ts"], TEASPOON_L)
        .case_sensitive(),
    UnitDef::scaled(
        "dessertspoon",
        &["dessertspoon", "dsp", "dstspn", "dssp", "dsspn", "dspn"],
        DESSERTSPOON_L,
    ),
    UnitDef::scaled(
        "tablespoon",
        &[
            "tablespoon",
            "Tablespoon",
            "tbl",
            "tblspn",
            "tbspn",
            "tb",
            "tbs",
            "tbsp",
            "T",
            "TB",
            "Tbsp",
            "Tblsp",
            "Tbl",
            "Tbs",
            "TBsp",
            "TBl",
        ],
        TABLESPOON_L,
    )
    .case_sensitive(),
    UnitDef::scaled(
        "fluid ounce",
        &["fluid ounce", "ounce", "fl oz", "floz", "fl. oz", "oz"],
        FLUID_OUNCE_L,
    ),
    UnitDef::scaled(
        "wineglass",
        &["wineglass", "wine glass", "wgf", "wg", "winegl", "wngl"],
        WINEGLASS_L,
    ),
    UnitDef::scaled("teacup", &["teacup", "gill", "tcf", "tc", "teac"], TEACUP_L),
    UnitDef::scaled("cup", &["cup", "c", "cu"], CUP_L),
    UnitDef::scaled(
        "pint",
        &["pint", "pnt", "p", "pt", "flpt", "fl pt", "fl. pt", "fl.pt"],
        PINT_L,
    ),
    UnitDef::scaled(
        "quart",
        &["quart", "q", "qt", "fl qt", "fl. qt", "fl.qt"],
        QUART_L,
    ),
    UnitDef::scaled("pottle", &["pottle", "ptl"], POTTLE_L),
    UnitDef::scaled("gallon", &["gallon", "g", "ga", "gal", "gall"], GALLON_L),
    UnitDef {
        name: "package",
        aliases: &["package"],
        conversion: Conversion::Unconvertible,
        case_sensitive: false,
    },
    UnitDef {
        name: "bag",
        aliases: &["bag"],
        conversion: Conversion::Unconvertible,
        case_sensitive: false,
    },
    UnitDef {
        name: "can",
        aliases: &["can", "cn"],
        conversion: Conversion::Unconvertible,
        case_sensitive: false,
    },
];

pub const MASS_UNITS: [UnitDef; 3] = [
    UnitDef::scaled("kilogram", &["kilogram", "kg", "kgr", "kigr"], KILOGRAM_KG),
    UnitDef::scaled("gram", &["gram", "g", "gr"], GRAM_KG),
    UnitDef::scaled("pound", &["pound", "lb", "lbs"], POUND_KG),
];

pub const TEMPERATURE_UNITS: [UnitDef; 3] = [
    UnitDef {
        name: "fahrenheit",
        aliases: &["fahrenheit", "F", "degF", "deg F"],
        conversion: Conversion::affine(FAHRENHEIT_RATIO, FAHRENHEIT_OFFSET_K),
        case_sensitive: false,
    },
    UnitDef {
        name: "celsius",
        aliases: &["celsius", "C", "degC", "deg C"],
        conversion: Conversion::affine(1.0, CELSIUS_OFFSET_K),
        case_sensitive: false,
    },
    UnitDef {
        name: "kelvin",
        aliases: &["kelvin", "K", "degK", "deg K"],
        conversion: Conversion::affine(1.0, 0.0),
        case_sensitive: false,
    },
];

/// Build a set from a table, preserving table order.
pub fn build_set(name: &str, si_base: SiBase, defs: &[UnitDef]) -> UnitResult<UnitSet> {
    let mut set = UnitSet::new(name, si_base);
    for def in defs {
        set.push(def.build(si_base)?)?;
    }
    Ok(set)
}
