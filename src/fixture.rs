//! Fixture context and boundary proxy operations.
//!
//! `Fixture` replaces the ambient globals of a scripting environment with
//! one explicit context object: the harness builds it once, against a
//! registered host runtime, and passes it by reference to every test. The
//! proxy methods are the operations the other side invokes to exercise
//! value marshalling, call shapes, and type checks.

use std::rc::Rc;

use crate::bag::Bag;
use crate::capability::{
    HasAnonymous, HasGetter, HasMethod, HasMethod2, HasName, HasNamedArgs, HasOptionalArgs,
    HasSetter,
};
use crate::error::BridgeError;
use crate::host::HostHandle;
use crate::thing::NamedThing;
use crate::trace::{Direction, NullSink, TraceSink};
use crate::value::{CheapClone, ObjectRef, Str, Value};

/// Process-wide fixture state, built once by the harness.
///
/// Singletons are initialized at construction and never reassigned. Nested
/// mutable state (the `foo` object's fields) may still change through the
/// setter proxies.
pub struct Fixture {
    host: HostHandle,
    trace: Rc<dyn TraceSink>,
    foo: ObjectRef,
    a_string: Value,
    a_num: Value,
    a_bool: Value,
    a_date: Value,
    a: Value,
}

impl Fixture {
    /// Build the fixture against a registered host runtime.
    pub fn new(host: HostHandle) -> Self {
        Self {
            host,
            trace: Rc::new(NullSink),
            foo: ObjectRef::new(NamedThing::new("made in JS")),
            a_string: Value::from("hello"),
            a_num: Value::from(123),
            a_bool: Value::from(true),
            a_date: Value::date_utc(2014, 10, 4),
            a: Value::Null,
        }
    }

    /// Install a sink observing boundary crossings.
    pub fn set_trace_sink(&mut self, sink: Rc<dyn TraceSink>) {
        self.trace = sink;
    }

    fn cross(&self, op: &'static str, direction: Direction) {
        self.trace.crossing(op, direction);
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Singletons
    // ═══════════════════════════════════════════════════════════════════════

    /// The shared `NamedThing` instance.
    pub fn foo(&self) -> &ObjectRef {
        &self.foo
    }

    pub fn a_string(&self) -> &Value {
        &self.a_string
    }

    pub fn a_num(&self) -> &Value {
        &self.a_num
    }

    pub fn a_bool(&self) -> &Value {
        &self.a_bool
    }

    pub fn a_date(&self) -> &Value {
        &self.a_date
    }

    /// The null singleton.
    pub fn a(&self) -> &Value {
        &self.a
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Property access
    // ═══════════════════════════════════════════════════════════════════════

    pub fn get_name(&self, e: &dyn HasName) -> Str {
        self.cross("get_name", Direction::Outbound);
        e.name()
    }

    pub fn set_name(&self, e: &dyn HasName, name: impl Into<Str>) {
        self.cross("set_name", Direction::Outbound);
        e.set_name(name.into());
    }

    pub fn get_anonymous(&self, e: &dyn HasAnonymous) -> Bag {
        self.cross("get_anonymous", Direction::Outbound);
        e.anonymous()
    }

    /// Replace the target's bag wholesale. No merging happens here or in
    /// any implementor.
    pub fn set_anonymous(&self, e: &dyn HasAnonymous, bag: Bag) {
        self.cross("set_anonymous", Direction::Outbound);
        e.set_anonymous(bag);
    }

    pub fn get_getter(&self, e: &dyn HasGetter) -> Result<Value, BridgeError> {
        self.cross("get_getter", Direction::Outbound);
        e.getter()
    }

    pub fn set_setter(&self, e: &dyn HasSetter, value: Value) -> Result<(), BridgeError> {
        self.cross("set_setter", Direction::Outbound);
        e.set_setter(value)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Method invocation
    // ═══════════════════════════════════════════════════════════════════════

    pub fn call_method(&self, e: &dyn HasMethod) -> Result<Value, BridgeError> {
        self.cross("call_method", Direction::Outbound);
        e.method()
    }

    pub fn call_method2(&self, e: &dyn HasMethod2, a: Value) -> Result<Value, BridgeError> {
        self.cross("call_method2", Direction::Outbound);
        e.method2(a)
    }

    /// Invoke `named_args` with one positional argument and the fixed
    /// `{b: 2, c: 3}` bag of named arguments.
    pub fn call_named_args(&self, e: &dyn HasNamedArgs) -> Result<Value, BridgeError> {
        self.cross("call_named_args", Direction::Outbound);
        let named: Bag = [("b", 2), ("c", 3)].into_iter().collect();
        e.named_args(Value::from(1), &named)
    }

    /// Invoke `optional_args` with all three arguments explicit.
    pub fn call_optional_args(&self, e: &dyn HasOptionalArgs) -> Result<Value, BridgeError> {
        self.cross("call_optional_args", Direction::Outbound);
        e.optional_args(Value::from(1), Value::from(2), Some(Value::from(3)))
    }

    /// Invoke `optional_args` with the trailing argument omitted, so the
    /// implementor's default becomes observable.
    pub fn call_optional_args2(&self, e: &dyn HasOptionalArgs) -> Result<Value, BridgeError> {
        self.cross("call_optional_args2", Direction::Outbound);
        e.optional_args(Value::from(1), Value::from(2), None)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Type & identity predicates
    // ═══════════════════════════════════════════════════════════════════════

    pub fn is_export_me(&self, e: &Value) -> bool {
        self.cross("is_export_me", Direction::Outbound);
        self.host.is_export_me(e)
    }

    pub fn is_host_object(&self, o: &Value) -> bool {
        self.cross("is_host_object", Direction::Outbound);
        self.host.is_host_object(o)
    }

    /// Strict null check. False for every non-null value, including zero,
    /// false, and empty strings or bags.
    pub fn is_null(&self, value: &Value) -> bool {
        self.cross("is_null", Direction::Inbound);
        value.is_null()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Round-trip
    // ═══════════════════════════════════════════════════════════════════════

    /// Return the argument unchanged. Object references stay
    /// reference-identical; primitives keep type and value.
    pub fn round_trip(&self, e: Value) -> Value {
        self.cross("round_trip", Direction::Inbound);
        e
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Host factories
    // ═══════════════════════════════════════════════════════════════════════

    pub fn create_export_me(&self) -> Result<Value, BridgeError> {
        self.cross("create_export_me", Direction::Outbound);
        self.host.create_export_me()
    }

    pub fn create_export_me_named(&self, name: &str) -> Result<Value, BridgeError> {
        self.cross("create_export_me_named", Direction::Outbound);
        self.host.create_export_me_named(name)
    }

    /// Construct through the named-bag constructor: the name travels as a
    /// single-entry `{name: ...}` bag instead of a positional argument.
    pub fn create_export_me_named2(&self, name: &str) -> Result<Value, BridgeError> {
        self.cross("create_export_me_named2", Direction::Outbound);
        let args: Bag = [("name", Value::from(name))].into_iter().collect();
        self.host.create_export_me_named2(&args)
    }

    pub fn create_export_me_optional(&self, name: &str) -> Result<Value, BridgeError> {
        self.cross("create_export_me_optional", Direction::Outbound);
        self.host.create_export_me_named(name)
    }
}

impl Fixture {
    /// Clone of the `foo` handle as a boundary value.
    pub fn foo_value(&self) -> Value {
        Value::Object(self.foo.cheap_clone())
    }
}
