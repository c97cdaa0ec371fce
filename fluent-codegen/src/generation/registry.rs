//! Phase 1: one empty builder type per class, before any member exists.
//!
//! Every generator resolves its superclass builder through the registry, so
//! all descriptors must exist before the first generator runs. The registry
//! is built once per run and only read afterwards.

use std::cell::OnceCell;

use eyre::{Result, bail};
use fluent_model::{ClassHierarchy, ClassId, SourceLocation};
use indexmap::IndexMap;
use tracing::{debug, warn};

use super::Property;
use crate::{
    builder::TypeSpec,
    code_model::{DeclarationConflict, Emitter, TypeId},
};

/// A class's builder: the declared builder type and what it builds.
#[derive(Debug)]
pub struct BuilderDescriptor {
    /// The class the builder belongs to.
    pub class: ClassId,
    /// The product type (the class itself in the code model).
    pub product: TypeId,
    /// The nested builder type.
    pub builder: TypeId,
    properties: OnceCell<Vec<Property>>,
}

impl BuilderDescriptor {
    fn new(class: ClassId, product: TypeId, builder: TypeId) -> Self {
        Self {
            class,
            product,
            builder,
            properties: OnceCell::new(),
        }
    }

    /// Properties the builder declares itself; `None` until generated.
    pub fn properties(&self) -> Option<&[Property]> {
        self.properties.get().map(Vec::as_slice)
    }

    /// Record the builder's own properties. Allowed exactly once.
    pub(crate) fn set_properties(&self, properties: Vec<Property>) -> Result<()> {
        if self.properties.set(properties).is_err() {
            bail!("builder properties for {:?} were already populated", self.class);
        }
        Ok(())
    }
}

/// A class whose builder could not be declared.
#[derive(Debug, Clone)]
pub struct BuilderConflict {
    pub class: ClassId,
    /// Qualified class name.
    pub name: String,
    /// Simple name of the builder type that collided.
    pub builder_name: String,
    pub location: Option<SourceLocation>,
    pub reason: DeclarationConflict,
}

impl BuilderConflict {
    /// Warning text reported for the skipped class.
    pub fn message(&self) -> String {
        format!(
            "Class \"{}\" already contains inner class \"{}\". Skipping generation of fluent builder.",
            self.name, self.builder_name
        )
    }
}

/// Map from qualified class name to builder descriptor.
#[derive(Debug, Default)]
pub struct BuilderRegistry {
    descriptors: IndexMap<String, BuilderDescriptor>,
    conflicts: Vec<BuilderConflict>,
}

impl BuilderRegistry {
    /// Declare an empty builder type inside every class of `hierarchy`.
    ///
    /// A class that already contains a type named `builder_name` is skipped
    /// and recorded as a conflict; other classes are unaffected. A class
    /// whose product type was never declared aborts the run.
    pub fn build<E: Emitter + ?Sized>(
        hierarchy: &ClassHierarchy,
        emitter: &mut E,
        builder_name: &str,
    ) -> Result<Self> {
        let mut registry = Self::default();

        for (id, class) in hierarchy.iter() {
            let Some(product) = emitter.find_type(&class.name) else {
                bail!("class '{}' has no declared type in the code model", class.name);
            };

            let spec = TypeSpec::class(builder_name)
                .static_()
                .doc(format!("Fluent builder for {{@link {}}}.", class.simple_name()));

            match emitter.declare_nested_type(product, spec) {
                Ok(builder) => {
                    debug!(class = %class.name, "registered builder");
                    registry
                        .descriptors
                        .insert(class.name.clone(), BuilderDescriptor::new(id, product, builder));
                }
                Err(reason) => {
                    warn!(class = %class.name, %reason, "skipping builder");
                    registry.conflicts.push(BuilderConflict {
                        class: id,
                        name: class.name.clone(),
                        builder_name: builder_name.to_string(),
                        location: class.location.clone(),
                        reason,
                    });
                }
            }
        }

        Ok(registry)
    }

    /// Look up the builder for a qualified class name.
    ///
    /// `None` means there is no builder for this type.
    pub fn get(&self, name: &str) -> Option<&BuilderDescriptor> {
        self.descriptors.get(name)
    }

    pub fn for_class(&self, hierarchy: &ClassHierarchy, id: ClassId) -> Option<&BuilderDescriptor> {
        hierarchy.get(id).and_then(|c| self.get(&c.name))
    }

    /// Builder of the nearest proper ancestor that has one.
    pub fn nearest_ancestor(
        &self,
        hierarchy: &ClassHierarchy,
        id: ClassId,
    ) -> Option<&BuilderDescriptor> {
        hierarchy
            .ancestors(id)
            .find_map(|ancestor| self.for_class(hierarchy, ancestor))
    }

    /// Classes skipped because their builder type collided.
    pub fn conflicts(&self) -> &[BuilderConflict] {
        &self.conflicts
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BuilderDescriptor)> {
        self.descriptors.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}
