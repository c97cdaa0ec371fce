//! Java type mapper implementation.

use fluent_codegen::builder::{PrimitiveType, TypeMapper, TypeRef};

/// Maps language-agnostic [`TypeRef`]s to Java type syntax.
///
/// Types of the file's own package are written relative to it
/// (`Leaf.Builder`); anything else keeps its qualified name.
#[derive(Debug, Clone, Default)]
pub struct JavaTypeMapper {
    package: Option<String>,
}

impl JavaTypeMapper {
    /// Mapper for a file in `package` (`None` for the default package).
    pub fn for_package(package: Option<&str>) -> Self {
        Self {
            package: package.map(str::to_string),
        }
    }

    /// Boxed form used as a type argument.
    fn boxed(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::Primitive(p) => match p {
                PrimitiveType::String => "String",
                PrimitiveType::Int => "Integer",
                PrimitiveType::Long => "Long",
                PrimitiveType::Float => "Float",
                PrimitiveType::Double => "Double",
                PrimitiveType::Bool => "Boolean",
                PrimitiveType::Char => "Character",
                PrimitiveType::Byte => "Byte",
            }
            .to_string(),
            other => self.render_type(other),
        }
    }
}

impl TypeMapper for JavaTypeMapper {
    fn map_primitive(&self, ty: PrimitiveType) -> String {
        match ty {
            PrimitiveType::String => "String",
            PrimitiveType::Int => "int",
            PrimitiveType::Long => "long",
            PrimitiveType::Float => "float",
            PrimitiveType::Double => "double",
            PrimitiveType::Bool => "boolean",
            PrimitiveType::Char => "char",
            PrimitiveType::Byte => "byte",
        }
        .to_string()
    }

    fn map_array(&self, inner: &str) -> String {
        format!("{}[]", inner)
    }

    fn map_list(&self, inner: &TypeRef) -> String {
        format!("List<{}>", self.boxed(inner))
    }

    fn map_named(&self, name: &str) -> String {
        let Some(package) = &self.package else {
            return name.to_string();
        };
        name.strip_prefix(package.as_str())
            .and_then(|rest| rest.strip_prefix('.'))
            .filter(|rest| rest.starts_with(char::is_uppercase))
            .unwrap_or(name)
            .to_string()
    }

    fn map_unit(&self) -> String {
        "void".to_string()
    }
}
