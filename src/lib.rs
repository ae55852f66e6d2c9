//! Interop conformance fixture for host/script boundary testing
//!
//! This crate is the native side of a two-sided interop boundary: a managed
//! host embeds it, registers a [`HostRuntime`], and drives the [`Fixture`]
//! operations to assert that values, call shapes, and type checks cross the
//! boundary intact.
//!
//! # Example
//!
//! ```
//! use bridge_fixture::{NamedThing, Value};
//!
//! let thing = NamedThing::new("made in JS");
//! assert_eq!(thing.double(&Value::from(21)).unwrap(), Value::from(42));
//! ```

pub mod bag;
pub mod capability;
pub mod error;
pub mod fixture;
pub mod host;
pub mod json;
pub mod thing;
pub mod trace;
pub mod value;

pub use bag::Bag;
pub use capability::{
    HasAnonymous, HasGetter, HasMethod, HasMethod2, HasName, HasNamedArgs, HasOptionalArgs,
    HasSetter,
};
pub use error::BridgeError;
pub use fixture::Fixture;
pub use host::{HostHandle, HostRuntime};
pub use thing::{DerivedThing, NamedThing};
pub use trace::{Direction, NullSink, TraceSink};
pub use value::{BoundaryObject, CheapClone, ObjectRef, Str, Value};
