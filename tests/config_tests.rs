/*
MIT License

Copyright (c) 2025 Ameyanagi

Reference data transcribed from the abacuskit post-processing utilities
for ABACUS electronic-structure calculations.
*/

use abacuskit_rs::config::{AxisSetting, ConfigError, OriginChoice, ResolverConfig, SettingPolicy};
use abacuskit_rs::{Resolver, SymmetryError};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_config_from_file() {
    let file = write_config(
        r#"{ "setting_policy": { "kind": "preferred", "origin": "two", "axes": "rhombohedral" } }"#,
    );
    let config = ResolverConfig::from_file(file.path()).unwrap();
    assert_eq!(
        config.setting_policy,
        SettingPolicy::Preferred {
            origin: OriginChoice::Two,
            axes: AxisSetting::Rhombohedral
        }
    );

    let resolver = Resolver::with_config(config);
    assert_eq!(resolver.hall_from_number(227), Ok("-F 4vw 2vw 3"));
    assert_eq!(resolver.hm_from_number(166), Ok("R-3m:R"));
}

#[test]
fn test_missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = ResolverConfig::from_file(dir.path().join("missing.json"));
    assert!(matches!(result, Err(ConfigError::IoError(_))));
}

#[test]
fn test_malformed_config_file() {
    let file = write_config("{ setting_policy: strict }");
    let result = ResolverConfig::from_file(file.path());
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn test_policies() {
    let strict = Resolver::new();
    assert!(strict.hall_from_number(70).unwrap_err().is_ambiguous());

    let first = Resolver::with_config(ResolverConfig::with_policy(SettingPolicy::FirstListed));
    assert_eq!(first.hall_from_number(70), Ok("F 2 2 -1d"));
    assert_eq!(first.hall_from_number(146), Ok("R 3"));
    assert_eq!(first.hm_from_number(14), Ok("P121/c1"));

    let preferred = Resolver::with_config(ResolverConfig::with_policy(SettingPolicy::Preferred {
        origin: OriginChoice::One,
        axes: AxisSetting::Hexagonal,
    }));
    assert_eq!(preferred.hm_from_number(227), Ok("Fd-3m:1"));
    assert_eq!(preferred.hm_from_number(167), Ok("R-3c:H"));

    // Out-of-range numbers are never rescued by a policy
    assert_eq!(first.hall_from_number(0), Err(SymmetryError::OutOfRange(0)));
}
