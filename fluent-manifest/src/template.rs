//! Starter fluent.toml written by `fluent init`.

/// Render a starter manifest for the given package.
pub fn starter(package: &str) -> String {
    format!(
        r#"[generator]
package = "{package}"
policy = "mutable"

[[class]]
name = "Entity"
abstract = true
doc = "Base of all persistent types"

[[class.field]]
name = "id"
type = "long"

[[class]]
name = "Customer"
extends = "Entity"

[[class.field]]
name = "name"
type = "string"

[[class.field]]
name = "emails"
type = "string[]"
"#
    )
}
