//! Boundary contract with the managed host side.
//!
//! The host owns the `ExportMe` type and its object model; the fixture only
//! creates exports through these factories, type-checks values against the
//! host's types, and hands references back unchanged.
//!
//! Precondition: the host runtime is registered before any fixture
//! operation runs. [`crate::Fixture::new`] takes the handle as a parameter,
//! which is the whole of that registration; no call-time validation exists.

use std::rc::Rc;

use crate::bag::Bag;
use crate::error::BridgeError;
use crate::value::Value;

/// Shared handle to the host side of the boundary.
pub type HostHandle = Rc<dyn HostRuntime>;

/// Operations the managed host side must provide.
///
/// Beyond the factories and type checks, an implementation is expected to
/// marshal strings, numbers, booleans, dates, null, bags, and object
/// references losslessly, preserving object identity across a round trip.
pub trait HostRuntime {
    /// Default `ExportMe` constructor.
    fn create_export_me(&self) -> Result<Value, BridgeError>;

    /// `ExportMe.named(name)` constructor.
    fn create_export_me_named(&self, name: &str) -> Result<Value, BridgeError>;

    /// `ExportMe.named2(args)` constructor. The bag carries the
    /// construction arguments by name rather than by position.
    fn create_export_me_named2(&self, args: &Bag) -> Result<Value, BridgeError>;

    /// True iff the value's runtime type is, or derives from, `ExportMe`.
    fn is_export_me(&self, value: &Value) -> bool;

    /// True iff the value belongs to the host's managed object model.
    fn is_host_object(&self, value: &Value) -> bool;
}
