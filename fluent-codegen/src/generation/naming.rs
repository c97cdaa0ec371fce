//! Names of the members a builder carries.

use fluent_model::property_stem;

/// The chaining method every builder declares.
pub const INIT_METHOD: &str = "init";

/// Parameter of `init` holding the product under construction.
pub const PRODUCT_PARAM: &str = "product";

/// Type variable of `init`, bounded by the product type.
pub const PRODUCT_TYPE_VAR: &str = "P";

/// Prefix of property setters.
pub const SETTER_PREFIX: &str = "with";

/// Terminal method on concrete builders.
pub const BUILD_METHOD: &str = "build";

/// Static factory on concrete products.
pub const BUILDER_FACTORY: &str = "builder";

/// Setter name for a property (`firstName` -> `withFirstName`).
///
/// Only the first character changes case, so `a_b` and `aB` stay distinct.
pub fn setter_name(property: &str) -> String {
    format!("{}{}", SETTER_PREFIX, property_stem(property))
}
