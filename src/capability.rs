//! Capability traits for boundary call-sites.
//!
//! Each trait pins down one member access the other side may perform, in
//! place of duck typing: a value either presents the capability in its type
//! or the call does not compile. Host test doubles implement exactly the
//! capabilities their scenario exercises.
//!
//! Plain data properties (`name`, `anonymous`) are infallible: holding the
//! capability guarantees the access. Invocations and accessor-style
//! properties return `Result` so a double's failure can propagate to the
//! harness unchanged.

use crate::bag::Bag;
use crate::error::BridgeError;
use crate::value::{Str, Value};

/// Read/write access to a `name` property.
pub trait HasName {
    fn name(&self) -> Str;
    fn set_name(&self, name: Str);
}

/// Wholesale read/replace of an `anonymous` bag.
///
/// `set_anonymous` replaces the whole bag; it never merges.
pub trait HasAnonymous {
    fn anonymous(&self) -> Bag;
    fn set_anonymous(&self, bag: Bag);
}

/// Zero-argument `method()` invocation.
pub trait HasMethod {
    fn method(&self) -> Result<Value, BridgeError>;
}

/// One-argument `method2(a)` invocation.
pub trait HasMethod2 {
    fn method2(&self, a: Value) -> Result<Value, BridgeError>;
}

/// `named_args(a, named)` invocation: one positional argument plus a bag
/// of named arguments.
pub trait HasNamedArgs {
    fn named_args(&self, a: Value, named: &Bag) -> Result<Value, BridgeError>;
}

/// `optional_args(a, b, c?)` invocation with an optional trailing argument.
///
/// When `c` is `None` the implementor supplies its own default, so a caller
/// can observe whether the omitted-argument case crossed the boundary
/// distinctly from an explicit third argument.
pub trait HasOptionalArgs {
    fn optional_args(&self, a: Value, b: Value, c: Option<Value>) -> Result<Value, BridgeError>;
}

/// Accessor-style read of a `getter` property.
pub trait HasGetter {
    fn getter(&self) -> Result<Value, BridgeError>;
}

/// Accessor-style write of a `setter` property.
pub trait HasSetter {
    fn set_setter(&self, value: Value) -> Result<(), BridgeError>;
}
