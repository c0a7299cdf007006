//! Class name to instance construction.

use std::collections::HashMap;

use crate::{WddxError, WddxObject};

/// Declared shape of a reconstructible class: its field names in
/// declaration order, and whether names outside that shape may be
/// attached dynamically.
#[derive(Debug, Clone)]
pub struct ClassSpec {
    name: String,
    fields: Vec<String>,
    open: bool,
}

impl ClassSpec {
    /// A closed class: only declared fields are settable.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            open: false,
        }
    }

    /// An open class: any field name may be attached.
    pub fn open(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            open: true,
        }
    }

    /// Declares a field. Declaration order is the encode order.
    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.fields.push(name.into());
        self
    }
}

/// Constructs zero-state instances from class names.
///
/// Construction must not run any user initialization logic: fields of a
/// fresh instance hold implementation-defined defaults (`Null` for
/// [`ClassRegistry`] instances).
pub trait ObjectFactory {
    fn construct(&self, class_name: &str) -> Result<WddxObject, WddxError>;
}

/// Name-to-shape registry populated by the host application.
///
/// Class resolution is an explicit registration step: a class name that
/// was never registered is a hard [`WddxError::UnknownClass`].
#[derive(Debug, Default)]
pub struct ClassRegistry {
    classes: HashMap<String, ClassSpec>,
}

impl ClassRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a class shape, replacing any previous registration for
    /// the same name.
    pub fn register(&mut self, spec: ClassSpec) {
        self.classes.insert(spec.name.clone(), spec);
    }

    pub fn contains(&self, class_name: &str) -> bool {
        self.classes.contains_key(class_name)
    }
}

impl ObjectFactory for ClassRegistry {
    fn construct(&self, class_name: &str) -> Result<WddxObject, WddxError> {
        match self.classes.get(class_name) {
            Some(spec) => Ok(WddxObject::with_shape(
                spec.name.clone(),
                spec.fields.clone(),
                spec.open,
            )),
            None => Err(WddxError::UnknownClass(class_name.to_string())),
        }
    }
}
