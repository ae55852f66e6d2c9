//! Method invocation proxy tests

use bridge_fixture::{BridgeError, Value};

use super::fixture;
use super::harness::{BrokenTarget, CallTarget};

#[test]
fn test_call_method() {
    let f = fixture();
    let target = CallTarget::default();
    assert_eq!(f.call_method(&target).unwrap(), Value::from("ok"));
}

#[test]
fn test_call_method2_echoes_argument() {
    let f = fixture();
    let target = CallTarget::default();
    assert_eq!(
        f.call_method2(&target, Value::from(5)).unwrap(),
        Value::from(5)
    );
}

#[test]
fn test_call_method2_preserves_object_identity() {
    let f = fixture();
    let target = CallTarget::default();
    let arg = f.foo_value();
    let result = f.call_method2(&target, arg.clone()).unwrap();
    assert_eq!(result, arg);
}

#[test]
fn test_call_named_args_marshals_bag() {
    let f = fixture();
    let target = CallTarget::default();
    // 1 positional + {b: 2, c: 3} named.
    assert_eq!(f.call_named_args(&target).unwrap(), Value::from(6));
}

#[test]
fn test_optional_args_explicit_vs_omitted() {
    let f = fixture();
    let target = CallTarget::default();

    // All three explicit: 1 + 2 + 3.
    assert_eq!(f.call_optional_args(&target).unwrap(), Value::from(6));
    // Trailing argument omitted: the double supplies its default of 30.
    assert_eq!(f.call_optional_args2(&target).unwrap(), Value::from(33));
}

#[test]
fn test_method_failure_propagates_unchanged() {
    let f = fixture();
    let err = f.call_method(&BrokenTarget).unwrap_err();
    assert!(matches!(err, BridgeError::Host(_)));
    assert_eq!(err.to_string(), "host error: method exploded");
}
