//! Static alias table for lab parameter names.
//!
//! Keys are already normalized (lowercase ASCII alphanumerics). Petiole
//! nitrogen fractions keep their own canonical keys; only bare or
//! "available" nitrogen maps to `nitrogen`.

/// Canonical parameter keys consumed by calculators and dashboards.
pub const CANONICAL_KEYS: &[&str] = &[
    "ph",
    "ec",
    "organicCarbon",
    "organicMatter",
    "nitrogen",
    "total_nitrogen",
    "nitrate_nitrogen",
    "ammonical_nitrogen",
    "phosphorus",
    "potassium",
    "calcium",
    "magnesium",
    "sulfur",
    "calciumCarbonate",
    "iron",
    "manganese",
    "zinc",
    "copper",
    "boron",
    "molybdenum",
    "sodium",
    "chloride",
    "carbonate",
    "bicarbonate",
];

/// (normalized alias, canonical key)
pub(crate) const ALIASES: &[(&str, &str)] = &[
    // pH
    ("soilph", "ph"),
    ("phvalue", "ph"),
    ("phlevel", "ph"),
    ("soilreaction", "ph"),
    ("reaction", "ph"),
    ("ph12", "ph"),
    ("ph125", "ph"),
    ("phh2o", "ph"),
    ("phwater", "ph"),
    // Electrical conductivity
    ("electricalconductivity", "ec"),
    ("conductivity", "ec"),
    ("ecdsm", "ec"),
    ("ecmscm", "ec"),
    ("ece", "ec"),
    ("soilec", "ec"),
    ("salinity", "ec"),
    ("solublesalts", "ec"),
    // Organic carbon / matter
    ("oc", "organicCarbon"),
    ("organiccarbon", "organicCarbon"),
    ("orgcarbon", "organicCarbon"),
    ("soilorganiccarbon", "organicCarbon"),
    ("soc", "organicCarbon"),
    ("om", "organicMatter"),
    ("organicmatter", "organicMatter"),
    ("soilorganicmatter", "organicMatter"),
    ("som", "organicMatter"),
    // Nitrogen (soil, generic)
    ("n", "nitrogen"),
    ("availablenitrogen", "nitrogen"),
    ("availablen", "nitrogen"),
    ("nitrogenn", "nitrogen"),
    ("soilnitrogen", "nitrogen"),
    ("mineralnitrogen", "nitrogen"),
    // Nitrogen fractions (petiole)
    ("totalnitrogen", "total_nitrogen"),
    ("totaln", "total_nitrogen"),
    ("tn", "total_nitrogen"),
    ("kjeldahlnitrogen", "total_nitrogen"),
    ("tkn", "total_nitrogen"),
    ("nitratenitrogen", "nitrate_nitrogen"),
    ("nitraten", "nitrate_nitrogen"),
    ("no3n", "nitrate_nitrogen"),
    ("no3", "nitrate_nitrogen"),
    ("nitrate", "nitrate_nitrogen"),
    ("nitratesnitrogen", "nitrate_nitrogen"),
    ("ammonicalnitrogen", "ammonical_nitrogen"),
    ("ammoniacalnitrogen", "ammonical_nitrogen"),
    ("ammoniumnitrogen", "ammonical_nitrogen"),
    ("ammonicaln", "ammonical_nitrogen"),
    ("ammoniacaln", "ammonical_nitrogen"),
    ("nh4n", "ammonical_nitrogen"),
    ("nh4", "ammonical_nitrogen"),
    ("ammonium", "ammonical_nitrogen"),
    // Phosphorus
    ("p", "phosphorus"),
    ("availablephosphorus", "phosphorus"),
    ("availablep", "phosphorus"),
    ("olsenp", "phosphorus"),
    ("olsenphosphorus", "phosphorus"),
    ("brayp", "phosphorus"),
    ("phosphate", "phosphorus"),
    ("p2o5", "phosphorus"),
    ("phosphorous", "phosphorus"),
    // Potassium
    ("k", "potassium"),
    ("availablepotassium", "potassium"),
    ("availablek", "potassium"),
    ("exchangeablepotassium", "potassium"),
    ("exchangeablek", "potassium"),
    ("k2o", "potassium"),
    ("potash", "potassium"),
    // Secondary nutrients
    ("ca", "calcium"),
    ("exchangeablecalcium", "calcium"),
    ("exchangeableca", "calcium"),
    ("mg", "magnesium"),
    ("exchangeablemagnesium", "magnesium"),
    ("exchangeablemg", "magnesium"),
    ("s", "sulfur"),
    ("sulphur", "sulfur"),
    ("availablesulfur", "sulfur"),
    ("availablesulphur", "sulfur"),
    ("so4s", "sulfur"),
    ("sulfate", "sulfur"),
    ("sulphate", "sulfur"),
    // Free lime
    ("caco3", "calciumCarbonate"),
    ("calciumcarbonate", "calciumCarbonate"),
    ("freelime", "calciumCarbonate"),
    ("lime", "calciumCarbonate"),
    ("activelime", "calciumCarbonate"),
    ("totallime", "calciumCarbonate"),
    ("calciumcarbonatefreelime", "calciumCarbonate"),
    ("freelimecalciumcarbonate", "calciumCarbonate"),
    ("freelimecaco3", "calciumCarbonate"),
    // Micronutrients
    ("fe", "iron"),
    ("availableiron", "iron"),
    ("dtpafe", "iron"),
    ("mn", "manganese"),
    ("availablemanganese", "manganese"),
    ("dtpamn", "manganese"),
    ("zn", "zinc"),
    ("availablezinc", "zinc"),
    ("dtpazn", "zinc"),
    ("cu", "copper"),
    ("availablecopper", "copper"),
    ("dtpacu", "copper"),
    ("b", "boron"),
    ("availableboron", "boron"),
    ("hotwaterboron", "boron"),
    ("mo", "molybdenum"),
    ("availablemolybdenum", "molybdenum"),
    // Salts and anions
    ("na", "sodium"),
    ("exchangeablesodium", "sodium"),
    ("solublesodium", "sodium"),
    ("cl", "chloride"),
    ("chlorides", "chloride"),
    ("co3", "carbonate"),
    ("carbonates", "carbonate"),
    ("hco3", "bicarbonate"),
    ("bicarbonates", "bicarbonate"),
    ("hydrogencarbonate", "bicarbonate"),
    // "Name (Symbol)" headings
    ("phosphorusp", "phosphorus"),
    ("potassiumk", "potassium"),
    ("calciumca", "calcium"),
    ("magnesiummg", "magnesium"),
    ("sulfurs", "sulfur"),
    ("sulphurs", "sulfur"),
    ("ironfe", "iron"),
    ("manganesemn", "manganese"),
    ("zinczn", "zinc"),
    ("coppercu", "copper"),
    ("boronb", "boron"),
    ("molybdenummo", "molybdenum"),
    ("sodiumna", "sodium"),
    ("chloridecl", "chloride"),
    ("carbonateco3", "carbonate"),
    ("bicarbonatehco3", "bicarbonate"),
];
