//! Arena of classes with superclass links.

use indexmap::IndexMap;
use serde::Serialize;

use crate::{ClassModel, FieldModel};

/// Index of a class inside a [`ClassHierarchy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ClassId(pub usize);

/// All classes of one generation run, in declaration order.
///
/// Superclass references are ids into this arena. The hierarchy assumes
/// the superclass chain is acyclic; validation upstream guarantees it.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ClassHierarchy {
    classes: Vec<ClassModel>,
    #[serde(skip)]
    by_name: IndexMap<String, ClassId>,
}

impl ClassHierarchy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a class and return its id.
    ///
    /// A class whose name is already present replaces the lookup entry; the
    /// earlier class keeps its id.
    pub fn push(&mut self, class: ClassModel) -> ClassId {
        let id = ClassId(self.classes.len());
        self.by_name.insert(class.name.clone(), id);
        self.classes.push(class);
        id
    }

    pub fn get(&self, id: ClassId) -> Option<&ClassModel> {
        self.classes.get(id.0)
    }

    /// Like [`get`](Self::get) but for ids known to come from this arena.
    pub fn class(&self, id: ClassId) -> &ClassModel {
        &self.classes[id.0]
    }

    pub fn lookup(&self, name: &str) -> Option<ClassId> {
        self.by_name.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Iterate over `(id, class)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (ClassId, &ClassModel)> {
        self.classes
            .iter()
            .enumerate()
            .map(|(i, c)| (ClassId(i), c))
    }

    /// Direct superclass of `id`.
    pub fn superclass(&self, id: ClassId) -> Option<ClassId> {
        self.get(id).and_then(|c| c.superclass)
    }

    /// Proper ancestors of `id`, nearest first.
    pub fn ancestors(&self, id: ClassId) -> Ancestors<'_> {
        Ancestors {
            hierarchy: self,
            next: self.superclass(id),
            remaining: self.classes.len(),
        }
    }

    /// Link `id` to its superclass after both classes were pushed.
    pub fn set_superclass(&mut self, id: ClassId, superclass: Option<ClassId>) {
        if let Some(class) = self.classes.get_mut(id.0) {
            class.superclass = superclass;
        }
    }

    /// Direct subclasses of `id`, in declaration order.
    pub fn subclasses(&self, id: ClassId) -> impl Iterator<Item = ClassId> + '_ {
        self.iter()
            .filter(move |(_, c)| c.superclass == Some(id))
            .map(|(i, _)| i)
    }

    /// Classes without a superclass.
    pub fn roots(&self) -> impl Iterator<Item = ClassId> + '_ {
        self.iter()
            .filter(|(_, c)| c.superclass.is_none())
            .map(|(i, _)| i)
    }

    /// Every instance field visible on `id`: ancestors' first (root-most
    /// first), then the class's own.
    pub fn all_instance_fields(&self, id: ClassId) -> Vec<(ClassId, &FieldModel)> {
        let mut chain: Vec<ClassId> = self.ancestors(id).collect();
        chain.reverse();
        chain.push(id);
        chain
            .into_iter()
            .flat_map(|cid| self.class(cid).instance_fields().map(move |f| (cid, f)))
            .collect()
    }
}

/// Iterator over a class's ancestors, nearest first.
///
/// Stops after as many steps as there are classes, so a malformed cyclic
/// chain cannot loop forever.
pub struct Ancestors<'a> {
    hierarchy: &'a ClassHierarchy,
    next: Option<ClassId>,
    remaining: usize,
}

impl Iterator for Ancestors<'_> {
    type Item = ClassId;

    fn next(&mut self) -> Option<ClassId> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.next?;
        self.remaining -= 1;
        self.next = self.hierarchy.superclass(current);
        Some(current)
    }
}
