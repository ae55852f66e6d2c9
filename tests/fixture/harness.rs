//! Reference implementation of the managed host side.
//!
//! `TestHost` plays the external collaborator: it owns the `ExportMe` type,
//! answers the object-model checks, and supplies capability doubles for the
//! invocation proxies.

use std::any::Any;
use std::cell::RefCell;

use bridge_fixture::{
    Bag, BoundaryObject, BridgeError, Direction, HasGetter, HasMethod, HasMethod2, HasNamedArgs,
    HasOptionalArgs, HasSetter, HostRuntime, ObjectRef, Str, TraceSink, Value,
};

/// Host-side opaque export type. The fixture only creates, type-checks,
/// and round-trips it; the harness alone looks inside.
pub struct ExportMe {
    pub name: Option<Str>,
}

impl BoundaryObject for ExportMe {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn type_label(&self) -> &'static str {
        "ExportMe"
    }
}

/// The reference host runtime.
pub struct TestHost;

impl HostRuntime for TestHost {
    fn create_export_me(&self) -> Result<Value, BridgeError> {
        Ok(Value::from(ObjectRef::new(ExportMe { name: None })))
    }

    fn create_export_me_named(&self, name: &str) -> Result<Value, BridgeError> {
        Ok(Value::from(ObjectRef::new(ExportMe {
            name: Some(Str::from(name)),
        })))
    }

    fn create_export_me_named2(&self, args: &Bag) -> Result<Value, BridgeError> {
        let name = args.require("name")?;
        let name = name
            .as_str()
            .ok_or_else(|| BridgeError::type_mismatch("string", name.type_name()))?;
        self.create_export_me_named(name)
    }

    fn is_export_me(&self, value: &Value) -> bool {
        matches!(value, Value::Object(obj) if obj.is_a::<ExportMe>())
    }

    fn is_host_object(&self, value: &Value) -> bool {
        // The reference host's object model consists of ExportMe alone.
        matches!(value, Value::Object(obj) if obj.is_a::<ExportMe>())
    }
}

/// Double implementing every invocation and accessor capability.
///
/// Invocation results encode what arrived, so the tests can tell argument
/// shapes apart: `named_args` and `optional_args` sum their inputs, with
/// 30 as the supplied default for an omitted trailing argument.
#[derive(Default)]
pub struct CallTarget {
    accessor: RefCell<Value>,
}

fn expect_number(value: &Value) -> Result<f64, BridgeError> {
    value
        .as_number()
        .ok_or_else(|| BridgeError::type_mismatch("number", value.type_name()))
}

impl HasMethod for CallTarget {
    fn method(&self) -> Result<Value, BridgeError> {
        Ok(Value::from("ok"))
    }
}

impl HasMethod2 for CallTarget {
    fn method2(&self, a: Value) -> Result<Value, BridgeError> {
        Ok(a)
    }
}

impl HasNamedArgs for CallTarget {
    fn named_args(&self, a: Value, named: &Bag) -> Result<Value, BridgeError> {
        let a = expect_number(&a)?;
        let b = expect_number(named.require("b")?)?;
        let c = expect_number(named.require("c")?)?;
        Ok(Value::from(a + b + c))
    }
}

impl HasOptionalArgs for CallTarget {
    fn optional_args(&self, a: Value, b: Value, c: Option<Value>) -> Result<Value, BridgeError> {
        let a = expect_number(&a)?;
        let b = expect_number(&b)?;
        let c = match &c {
            Some(value) => expect_number(value)?,
            None => 30.0,
        };
        Ok(Value::from(a + b + c))
    }
}

impl HasGetter for CallTarget {
    fn getter(&self) -> Result<Value, BridgeError> {
        Ok(self.accessor.borrow().clone())
    }
}

impl HasSetter for CallTarget {
    fn set_setter(&self, value: Value) -> Result<(), BridgeError> {
        *self.accessor.borrow_mut() = value;
        Ok(())
    }
}

/// Double whose members all fail, for asserting that failures cross the
/// boundary unchanged.
pub struct BrokenTarget;

impl HasMethod for BrokenTarget {
    fn method(&self) -> Result<Value, BridgeError> {
        Err(BridgeError::host("method exploded"))
    }
}

impl HasGetter for BrokenTarget {
    fn getter(&self) -> Result<Value, BridgeError> {
        Err(BridgeError::missing_member("BrokenTarget", "getter"))
    }
}

impl HasSetter for BrokenTarget {
    fn set_setter(&self, _value: Value) -> Result<(), BridgeError> {
        Err(BridgeError::missing_member("BrokenTarget", "setter"))
    }
}

/// Sink that records every boundary crossing.
#[derive(Default)]
pub struct RecordSink {
    pub events: RefCell<Vec<(&'static str, Direction)>>,
}

impl TraceSink for RecordSink {
    fn crossing(&self, op: &'static str, direction: Direction) {
        self.events.borrow_mut().push((op, direction));
    }
}
