// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for namespaced accessors.
//!
//! Every prefixed operation must read exactly the variable the plain accessor
//! reads under the joined name, with identical fallback behaviour.

use envtyped::prelude::*;
use std::time::Duration;

fn accessor(value: &str) -> Accessor<MapEnv> {
    Accessor::new(MapEnv::new().with_var("FOO_BAR", value))
}

#[test]
fn test_prefix_get() {
    for value in ["BAR", "1", "1.5", "0", "t", "no", "5s", ""] {
        let env = accessor(value);
        let foo = env.prefixed("FOO");

        assert_eq!(foo.lookup("BAR"), env.lookup("FOO_BAR"), "value: {}", value);
        assert_eq!(foo.get("BAR"), env.get("FOO_BAR"));
        assert_eq!(foo.get_string("BAR"), env.get_string("FOO_BAR"));
        assert_eq!(foo.get_bool("BAR"), env.get_bool("FOO_BAR"));
        assert_eq!(foo.get_i8("BAR"), env.get_i8("FOO_BAR"));
        assert_eq!(foo.get_i16("BAR"), env.get_i16("FOO_BAR"));
        assert_eq!(foo.get_i32("BAR"), env.get_i32("FOO_BAR"));
        assert_eq!(foo.get_i64("BAR"), env.get_i64("FOO_BAR"));
        assert_eq!(foo.get_isize("BAR"), env.get_isize("FOO_BAR"));
        assert_eq!(foo.get_u8("BAR"), env.get_u8("FOO_BAR"));
        assert_eq!(foo.get_u16("BAR"), env.get_u16("FOO_BAR"));
        assert_eq!(foo.get_u32("BAR"), env.get_u32("FOO_BAR"));
        assert_eq!(foo.get_u64("BAR"), env.get_u64("FOO_BAR"));
        assert_eq!(foo.get_usize("BAR"), env.get_usize("FOO_BAR"));
        assert_eq!(foo.get_f32("BAR"), env.get_f32("FOO_BAR"));
        assert_eq!(foo.get_f64("BAR"), env.get_f64("FOO_BAR"));
        assert_eq!(foo.get_duration("BAR"), env.get_duration("FOO_BAR"));
    }
}

#[test]
fn test_prefix_get_or() {
    for value in ["BAR", "1", "2.5", "0", "f", "yes", "250ms", ""] {
        let env = accessor(value);
        let foo = env.prefixed("FOO");

        assert_eq!(foo.get_or("BAR", "d"), env.get_or("FOO_BAR", "d"), "value: {}", value);
        assert_eq!(foo.get_string_or("BAR", "d"), env.get_string_or("FOO_BAR", "d"));
        assert_eq!(foo.get_bool_or("BAR", true), env.get_bool_or("FOO_BAR", true));
        assert_eq!(foo.get_i8_or("BAR", 1), env.get_i8_or("FOO_BAR", 1));
        assert_eq!(foo.get_i16_or("BAR", 1), env.get_i16_or("FOO_BAR", 1));
        assert_eq!(foo.get_i32_or("BAR", 1), env.get_i32_or("FOO_BAR", 1));
        assert_eq!(foo.get_i64_or("BAR", 1), env.get_i64_or("FOO_BAR", 1));
        assert_eq!(foo.get_isize_or("BAR", 1), env.get_isize_or("FOO_BAR", 1));
        assert_eq!(foo.get_u8_or("BAR", 1), env.get_u8_or("FOO_BAR", 1));
        assert_eq!(foo.get_u16_or("BAR", 1), env.get_u16_or("FOO_BAR", 1));
        assert_eq!(foo.get_u32_or("BAR", 1), env.get_u32_or("FOO_BAR", 1));
        assert_eq!(foo.get_u64_or("BAR", 1), env.get_u64_or("FOO_BAR", 1));
        assert_eq!(foo.get_usize_or("BAR", 1), env.get_usize_or("FOO_BAR", 1));
        assert_eq!(foo.get_f32_or("BAR", 1.5), env.get_f32_or("FOO_BAR", 1.5));
        assert_eq!(foo.get_f64_or("BAR", 1.5), env.get_f64_or("FOO_BAR", 1.5));
        assert_eq!(
            foo.get_duration_or("BAR", Duration::from_secs(3)),
            env.get_duration_or("FOO_BAR", Duration::from_secs(3))
        );
    }
}

#[test]
fn test_prefix_values() {
    let env = Accessor::new(
        MapEnv::new()
            .with_var("FOO_BAR", "BAR")
            .with_var("FOO_PORT", "8080")
            .with_var("FOO_FLAG", "Y")
            .with_var("FOO_WAIT", "1.5m"),
    );
    let foo = Prefix::new("FOO", &env);

    assert_eq!(foo.get_string("BAR"), "BAR");
    assert_eq!(foo.get_u16("PORT"), 8080);
    assert!(foo.get_bool("FLAG"));
    assert_eq!(foo.get_duration("WAIT"), Duration::from_secs(90));
    assert_eq!(foo.get_i32_or("MISSING", 7), 7);
    assert!(foo.get_bool_or("MISSING", true));
}

#[test]
fn test_prefix_uses_literal_underscore() {
    let env = Accessor::new(
        MapEnv::new()
            .with_var("foo_bar", "lower")
            .with_var("FOO__BAR", "double")
            .with_var("FOO_BAR", "upper"),
    );

    assert_eq!(env.prefixed("foo").get("bar"), "lower");
    assert_eq!(env.prefixed("FOO_").get("BAR"), "double");
    assert_eq!(env.prefixed("FOO").get("_BAR"), "double");
    assert_eq!(env.prefixed("FOO").get("BAR"), "upper");
    assert_eq!(env.prefixed("foo").get("BAR"), "");
}

#[test]
fn test_prefix_from_namespace() {
    let ns: Namespace = serde_json::from_str("\"FOO\"").unwrap();
    let env = accessor("configured");
    let foo = Prefix::new(ns.clone(), &env);

    assert_eq!(foo.namespace(), &ns);
    assert_eq!(foo.get("BAR"), "configured");
}

#[test]
fn test_prefix_resolution_and_strict_getter() {
    let env = accessor("abc");
    let foo = env.prefixed("FOO");

    assert!(foo.resolve::<i32>("BAR").is_invalid());
    assert!(foo.resolve::<i32>("MISSING").is_missing());

    let err = foo.try_get_as::<i32>("BAR").unwrap_err();
    assert!(err.to_string().contains("FOO_BAR"));
    assert_eq!(foo.try_get_as::<String>("BAR").unwrap(), "abc");
}
