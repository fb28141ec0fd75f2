//! Field declarations of the burger recipe.

/// Host type name.
pub const RECIPE: &str = "BurgerRecipe";

pub const BUNS: &str = "buns";
pub const CHEESE: &str = "cheese";
pub const TOMATOES: &str = "tomatoes";
pub const CUTLETS: &str = "cutlets";
pub const EGGS: &str = "eggs";
pub const SAUCE: &str = "sauce";

/// Inclusive bounds per quantity field.
pub const BUNS_RANGE: (i64, i64) = (2, 3);
pub const CHEESE_RANGE: (i64, i64) = (0, 2);
pub const TOMATOES_RANGE: (i64, i64) = (0, 3);
pub const CUTLETS_RANGE: (i64, i64) = (1, 3);
pub const EGGS_RANGE: (i64, i64) = (0, 2);

/// Accepted sauces.
pub const SAUCES: [&str; 3] = ["ketchup", "mayo", "burger"];

/// Quantity fields in declaration order.
pub const QUANTITIES: [(&str, (i64, i64)); 5] = [
    (BUNS, BUNS_RANGE),
    (CHEESE, CHEESE_RANGE),
    (TOMATOES, TOMATOES_RANGE),
    (CUTLETS, CUTLETS_RANGE),
    (EGGS, EGGS_RANGE),
];
