//! Phase 2: fill one registered builder with its members.

use std::collections::HashSet;

use eyre::{Result, WrapErr};
use fluent_model::ClassHierarchy;
use tracing::{debug, trace};

use super::{
    BuilderDescriptor, BuilderRegistry, Property, PropertyPolicy, array,
    naming::{BUILD_METHOD, BUILDER_FACTORY, INIT_METHOD, PRODUCT_PARAM, PRODUCT_TYPE_VAR},
};
use crate::{
    builder::{GenericParam, MethodSpec, ParamSpec, Statement, TypeRef, Value},
    code_model::Emitter,
};

/// Generates the members of one class's builder.
///
/// Emitted members:
/// - a builder field and a `with<Name>` setter per own non-static field
/// - `protected <P extends Product> P init(final P product)` copying the
///   builder fields onto the product, then chaining to the superclass
///   builder's `init`
/// - overrides of every inherited setter, returning this builder type
/// - for concrete classes, `build()` on the builder and a static
///   `builder()` factory on the product
pub struct BuilderGenerator<'a> {
    hierarchy: &'a ClassHierarchy,
    registry: &'a BuilderRegistry,
    policy: &'a dyn PropertyPolicy,
    descriptor: &'a BuilderDescriptor,
}

impl<'a> BuilderGenerator<'a> {
    pub fn new(
        hierarchy: &'a ClassHierarchy,
        registry: &'a BuilderRegistry,
        policy: &'a dyn PropertyPolicy,
        descriptor: &'a BuilderDescriptor,
    ) -> Self {
        Self {
            hierarchy,
            registry,
            policy,
            descriptor,
        }
    }

    /// Emit every builder member for this class.
    pub fn build_properties<E: Emitter + ?Sized>(&self, emitter: &mut E) -> Result<()> {
        let class = self.hierarchy.class(self.descriptor.class);
        let builder = self.descriptor.builder;
        let product_ty = emitter.type_ref(self.descriptor.product);
        let builder_ty = emitter.type_ref(builder);
        let product = Value::ident(PRODUCT_PARAM);

        let properties: Vec<Property> = class.instance_fields().map(Property::from_field).collect();
        let mut setters: HashSet<String> = HashSet::new();
        let mut init_body = Vec::with_capacity(properties.len() + 1);

        for property in &properties {
            trace!(class = %class.name, property = %property.name, "builder property");
            let (field, setter, init) = if property.is_array() {
                (
                    array::builder_field(property),
                    array::setter(property, &builder_ty),
                    array::init_statement(property, &product),
                )
            } else {
                (
                    self.policy.builder_field(property),
                    self.policy.setter(property, &builder_ty),
                    self.policy.init_statement(property, &product),
                )
            };
            emitter
                .declare_field(builder, field)
                .wrap_err_with(|| format!("builder for '{}'", class.name))?;
            setters.insert(setter.signature());
            emitter
                .declare_method(builder, setter)
                .wrap_err_with(|| format!("builder for '{}'", class.name))?;
            init_body.push(init);
        }
        let fields: HashSet<String> = properties.iter().map(|p| p.name.clone()).collect();
        self.descriptor.set_properties(properties)?;

        let overrides = match self
            .registry
            .nearest_ancestor(self.hierarchy, self.descriptor.class)
        {
            Some(parent) => {
                emitter.set_extends(builder, parent.builder);
                init_body.push(Statement::return_(Value::super_call(
                    INIT_METHOD,
                    vec![product.clone()],
                )));
                self.inherited_setters(&builder_ty, &mut setters, fields)
            }
            None => {
                init_body.push(Statement::return_(product.clone()));
                Vec::new()
            }
        };

        let init = MethodSpec::new(INIT_METHOD)
            .protected()
            .generic(GenericParam::new(PRODUCT_TYPE_VAR).bound(product_ty.clone()))
            .param(ParamSpec::new(
                PRODUCT_PARAM,
                TypeRef::type_var(PRODUCT_TYPE_VAR),
            ))
            .returns(TypeRef::type_var(PRODUCT_TYPE_VAR))
            .statements(init_body);
        emitter
            .declare_method(builder, init)
            .wrap_err_with(|| format!("builder for '{}'", class.name))?;

        for method in overrides {
            emitter
                .declare_method(builder, method)
                .wrap_err_with(|| format!("builder for '{}'", class.name))?;
        }

        if !class.is_abstract {
            self.declare_build(emitter, &product_ty, &builder_ty)
                .wrap_err_with(|| format!("builder for '{}'", class.name))?;
        }

        debug!(
            class = %class.name,
            policy = self.policy.name(),
            is_abstract = class.is_abstract,
            "generated builder"
        );
        Ok(())
    }

    /// Overrides of every setter inherited from builder-bearing ancestors,
    /// nearest ancestor first. A setter whose erased signature is already
    /// declared at this level is not declared again; one that only shares
    /// its name is overloaded.
    ///
    /// `fields` holds the builder field names declared closer to this class.
    /// An override whose field is hidden by one of them delegates to the
    /// superclass setter instead of storing through `this`.
    fn inherited_setters(
        &self,
        builder_ty: &TypeRef,
        declared: &mut HashSet<String>,
        mut fields: HashSet<String>,
    ) -> Vec<MethodSpec> {
        let mut overrides = Vec::new();
        for ancestor in self.hierarchy.ancestors(self.descriptor.class) {
            if self.registry.for_class(self.hierarchy, ancestor).is_none() {
                continue;
            }
            let class = self.hierarchy.class(ancestor);
            for field in class.instance_fields() {
                let property = Property::from_field(field);
                let setter = if property.is_array() {
                    array::setter(&property, builder_ty)
                } else {
                    self.policy.setter(&property, builder_ty)
                };
                if !declared.insert(setter.signature()) {
                    continue;
                }
                let setter = if fields.contains(&property.name) {
                    trace!(class = %class.name, property = %property.name, "hidden builder field");
                    MethodSpec {
                        body: vec![
                            Statement::expr(Value::super_call(
                                property.setter.as_str(),
                                vec![Value::ident(&property.name)],
                            )),
                            Statement::return_(Value::This),
                        ],
                        ..setter
                    }
                } else {
                    setter
                };
                overrides.push(setter.annotate("Override"));
            }
            fields.extend(class.instance_fields().map(|f| f.name.clone()));
        }
        overrides
    }

    /// `build()` on the builder and the static `builder()` factory on the product.
    fn declare_build<E: Emitter + ?Sized>(
        &self,
        emitter: &mut E,
        product_ty: &TypeRef,
        builder_ty: &TypeRef,
    ) -> Result<()> {
        let class = self.hierarchy.class(self.descriptor.class);

        let build = MethodSpec::new(BUILD_METHOD)
            .doc(format!(
                "Creates a new {{@link {}}} populated from this builder.",
                class.simple_name()
            ))
            .returns(product_ty.clone())
            .statement(Statement::return_(Value::call_self(
                INIT_METHOD,
                vec![Value::new_instance(product_ty.clone())],
            )));
        emitter.declare_method(self.descriptor.builder, build)?;

        let factory = MethodSpec::new(BUILDER_FACTORY)
            .doc(format!(
                "Returns a new fluent builder for {{@link {}}}.",
                class.simple_name()
            ))
            .static_()
            .returns(builder_ty.clone())
            .statement(Statement::return_(Value::new_instance(builder_ty.clone())));
        emitter.declare_method(self.descriptor.product, factory)?;
        Ok(())
    }
}

/// Run a generator for every registered builder. Returns the number of
/// builders generated.
pub fn generate_builders<E: Emitter + ?Sized>(
    hierarchy: &ClassHierarchy,
    registry: &BuilderRegistry,
    policy: &dyn PropertyPolicy,
    emitter: &mut E,
) -> Result<usize> {
    let mut count = 0;
    for (_, descriptor) in registry.iter() {
        BuilderGenerator::new(hierarchy, registry, policy, descriptor).build_properties(emitter)?;
        count += 1;
    }
    Ok(count)
}

