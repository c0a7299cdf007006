//! Reference-semantic class instances.

use std::cell::RefCell;
use std::rc::Rc;

use crate::{WddxError, WddxValue};

#[derive(Debug)]
struct ObjectBody {
    class_name: String,
    declared: Vec<(String, WddxValue)>,
    dynamic: Vec<(String, WddxValue)>,
    open: bool,
}

/// A class instance carried by [`WddxValue::Object`].
///
/// Instances are reference-semantic: cloning shares the underlying
/// object, and the encoder tracks instances by allocation identity
/// rather than structural equality, so two equal but distinct instances
/// do not collide. Declared fields keep declaration order; names outside
/// the declared shape live in a separate ordered overflow map, reachable
/// only on open instances (or via [`WddxObject::attach`]).
///
/// Equality is structural (class name plus all fields), with an identity
/// fast path. Comparing two *distinct* instances whose fields form a
/// reference cycle does not terminate.
#[derive(Debug, Clone)]
pub struct WddxObject {
    body: Rc<RefCell<ObjectBody>>,
}

impl WddxObject {
    /// Creates an open instance with no declared shape: any field name
    /// may be set or attached.
    pub fn new(class_name: impl Into<String>) -> Self {
        Self::build(class_name.into(), Vec::new(), true)
    }

    /// Creates a zero-state instance with the given declared field
    /// names, all preset to `Null`.
    pub(crate) fn with_shape(class_name: String, fields: Vec<String>, open: bool) -> Self {
        Self::build(class_name, fields, open)
    }

    fn build(class_name: String, fields: Vec<String>, open: bool) -> Self {
        Self {
            body: Rc::new(RefCell::new(ObjectBody {
                class_name,
                declared: fields
                    .into_iter()
                    .map(|name| (name, WddxValue::Null))
                    .collect(),
                dynamic: Vec::new(),
                open,
            })),
        }
    }

    /// The instance's fully qualified class name.
    pub fn class_name(&self) -> String {
        self.body.borrow().class_name.clone()
    }

    /// Whether field names outside the declared shape may be set.
    pub fn is_open(&self) -> bool {
        self.body.borrow().open
    }

    /// Returns the named field's current value, declared fields first.
    pub fn field(&self, name: &str) -> Option<WddxValue> {
        let body = self.body.borrow();
        body.declared
            .iter()
            .chain(body.dynamic.iter())
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.clone())
    }

    /// Sets a declared field, or attaches the name to the overflow map
    /// when the instance is open.
    pub fn set_field(&self, name: &str, value: WddxValue) -> Result<(), WddxError> {
        let mut body = self.body.borrow_mut();
        if let Some(slot) = body.declared.iter_mut().find(|(field, _)| field == name) {
            slot.1 = value;
            return Ok(());
        }
        if body.open {
            set_or_push(&mut body.dynamic, name, value);
            return Ok(());
        }
        Err(WddxError::UnknownField(
            body.class_name.clone(),
            name.to_string(),
        ))
    }

    /// Unconditionally attaches a field to the overflow map, regardless
    /// of the declared shape.
    pub fn attach(&self, name: &str, value: WddxValue) {
        set_or_push(&mut self.body.borrow_mut().dynamic, name, value);
    }

    /// All fields in order: declared fields in declaration order, then
    /// overflow fields in attachment order. The class-tag member is not
    /// a field and never appears here.
    pub fn fields(&self) -> Vec<(String, WddxValue)> {
        let body = self.body.borrow();
        body.declared
            .iter()
            .chain(body.dynamic.iter())
            .cloned()
            .collect()
    }

    /// Allocation identity used by the encoder's seen-set.
    pub(crate) fn identity(&self) -> usize {
        Rc::as_ptr(&self.body) as usize
    }
}

impl PartialEq for WddxObject {
    fn eq(&self, other: &Self) -> bool {
        if Rc::ptr_eq(&self.body, &other.body) {
            return true;
        }
        let a = self.body.borrow();
        let b = other.body.borrow();
        a.class_name == b.class_name && a.declared == b.declared && a.dynamic == b.dynamic
    }
}

fn set_or_push(fields: &mut Vec<(String, WddxValue)>, name: &str, value: WddxValue) {
    match fields.iter_mut().find(|(field, _)| field == name) {
        Some(slot) => slot.1 = value,
        None => fields.push((name.to_string(), value)),
    }
}
