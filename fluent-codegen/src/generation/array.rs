//! Varargs members for array-valued properties.

use super::Property;
use crate::builder::{FieldSpec, MethodSpec, ParamSpec, Statement, TypeRef, Value};

/// Builder field of the array type, initially null.
pub fn builder_field(property: &Property) -> FieldSpec {
    FieldSpec::new(&property.name, property.ty.clone())
        .protected()
        .initializer(Value::Null)
}

/// Setter taking zero or more elements and storing them as one array.
pub fn setter(property: &Property, builder: &TypeRef) -> MethodSpec {
    let element = property
        .element()
        .cloned()
        .unwrap_or_else(|| property.ty.clone());
    MethodSpec::new(&property.setter)
        .doc(property.setter_doc())
        .param(ParamSpec::variadic(&property.name, element))
        .returns(builder.clone())
        .statement(Statement::assign(
            Value::this_field(&property.name),
            Value::ident(&property.name),
        ))
        .statement(Statement::return_(Value::This))
}

/// Installs the whole array on the product.
pub fn init_statement(property: &Property, product: &Value) -> Statement {
    Statement::assign(
        Value::field(product.clone(), &property.name),
        Value::this_field(&property.name),
    )
}

#[cfg(test)]
mod tests {
    use fluent_model::{ElementType, FieldModel};

    use super::*;

    #[test]
    fn test_array_members() {
        let prop = Property::from_field(&FieldModel::array("tags", ElementType::string()));
        let builder = TypeRef::named("a.Leaf.Builder");

        let field = builder_field(&prop);
        assert_eq!(field.ty, TypeRef::array(TypeRef::string()));
        assert_eq!(field.initializer, Some(Value::Null));

        let method = setter(&prop, &builder);
        assert!(method.is_variadic());
        assert_eq!(method.params[0].ty, TypeRef::array(TypeRef::string()));
        assert_eq!(method.return_type, Some(builder));
    }
}
