//! Fixture-side objects.
//!
//! `NamedThing` is the one object type this side of the boundary defines;
//! `DerivedThing` extends it by holding one and forwarding, not by
//! inheriting. Both live behind shared handles, so mutation goes through
//! `&self` with interior mutability.

use std::any::Any;
use std::cell::RefCell;
use std::fmt;

use crate::bag::Bag;
use crate::capability::{HasAnonymous, HasName};
use crate::error::BridgeError;
use crate::value::{BoundaryObject, CheapClone, Str, Value};

fn default_anonymous() -> Bag {
    [("a", 1), ("b", 2)].into_iter().collect()
}

/// A mutable named object created on the fixture side of the boundary.
///
/// Fresh instances always carry a non-null `name`, a null `bar`, and the
/// two-entry `anonymous` bag the harness expects to find before any setter
/// runs. The name is taken as-is; validating it is the caller's business.
pub struct NamedThing {
    name: RefCell<Str>,
    bar: RefCell<Value>,
    anonymous: RefCell<Bag>,
}

impl NamedThing {
    pub fn new(name: impl Into<Str>) -> Self {
        Self {
            name: RefCell::new(name.into()),
            bar: RefCell::new(Value::Null),
            anonymous: RefCell::new(default_anonymous()),
        }
    }

    /// The nullable `bar` reference. Null until `set_bar` stores one.
    pub fn bar(&self) -> Value {
        self.bar.borrow().clone()
    }

    pub fn set_bar(&self, bar: Value) {
        *self.bar.borrow_mut() = bar;
    }

    /// Double a value: numbers add to themselves, strings concatenate.
    pub fn double(&self, x: &Value) -> Result<Value, BridgeError> {
        match x {
            Value::Number(n) => Ok(Value::Number(n + n)),
            Value::String(s) => Ok(Value::String(s.cheap_clone() + s.as_str())),
            other => Err(BridgeError::type_mismatch(
                "number or string",
                other.type_name(),
            )),
        }
    }

    /// Read the `name` of any value presenting that capability.
    pub fn get_name_of(&self, o: &dyn HasName) -> Str {
        o.name()
    }
}

impl HasName for NamedThing {
    fn name(&self) -> Str {
        self.name.borrow().cheap_clone()
    }

    fn set_name(&self, name: Str) {
        *self.name.borrow_mut() = name;
    }
}

impl HasAnonymous for NamedThing {
    fn anonymous(&self) -> Bag {
        self.anonymous.borrow().clone()
    }

    fn set_anonymous(&self, bag: Bag) {
        *self.anonymous.borrow_mut() = bag;
    }
}

impl BoundaryObject for NamedThing {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn type_label(&self) -> &'static str {
        "NamedThing"
    }
}

impl fmt::Display for NamedThing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name.borrow())
    }
}

/// A `NamedThing` extended by delegation.
///
/// Holds an inner `NamedThing` and forwards every capability to it, so a
/// `DerivedThing` satisfies each check the base type satisfies while
/// contributing one extra field.
pub struct DerivedThing {
    inner: NamedThing,
    y: f64,
}

impl DerivedThing {
    pub fn new(name: impl Into<Str>) -> Self {
        Self {
            inner: NamedThing::new(name),
            y: 42.0,
        }
    }

    /// The extra field the derived variant contributes.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// The delegate, for call-sites that want the base type.
    pub fn as_named_thing(&self) -> &NamedThing {
        &self.inner
    }

    pub fn bar(&self) -> Value {
        self.inner.bar()
    }

    pub fn set_bar(&self, bar: Value) {
        self.inner.set_bar(bar);
    }

    pub fn double(&self, x: &Value) -> Result<Value, BridgeError> {
        self.inner.double(x)
    }

    pub fn get_name_of(&self, o: &dyn HasName) -> Str {
        self.inner.get_name_of(o)
    }
}

impl HasName for DerivedThing {
    fn name(&self) -> Str {
        self.inner.name()
    }

    fn set_name(&self, name: Str) {
        self.inner.set_name(name);
    }
}

impl HasAnonymous for DerivedThing {
    fn anonymous(&self) -> Bag {
        self.inner.anonymous()
    }

    fn set_anonymous(&self, bag: Bag) {
        self.inner.set_anonymous(bag);
    }
}

impl BoundaryObject for DerivedThing {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn type_label(&self) -> &'static str {
        "DerivedThing"
    }
}

impl fmt::Display for DerivedThing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}
