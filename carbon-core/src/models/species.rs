/// Tree species the estimation generator picks from.
pub const SPECIES_CATALOG: [&str; 12] = [
    "English Oak",
    "Sugar Maple",
    "Scots Pine",
    "Silver Birch",
    "Norway Spruce",
    "Western Red Cedar",
    "European Ash",
    "European Beech",
    "White Willow",
    "Black Poplar",
    "American Elm",
    "Black Walnut",
];
