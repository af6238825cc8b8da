use std::fs;

use minimax_bot::config::{EvalTerms, SearchConfig, StalemateAdjust};
use minimax_bot::error::ConfigError;

#[test]
fn test_defaults() {
    let config = SearchConfig::default();
    assert_eq!(config.depth, 4);
    assert_eq!(config.eval, EvalTerms::MaterialAndPosition);
    assert_eq!(config.repetition_eval, EvalTerms::Material);
    assert_eq!(config.mate_bonus, 1000);
    assert_eq!(config.draw_bias, 100);
    assert_eq!(config.stalemate, StalemateAdjust::Bias);
    assert!(config.detect_repetition);
    assert!(config.order_moves);
    assert!(!config.order_all_nodes);
    assert!(config.mate_short_circuit);
    assert!(config.validate().is_ok());
}

#[test]
fn test_presets() {
    let material = SearchConfig::material_only();
    assert_eq!(material.eval, EvalTerms::Material);
    assert_eq!(material.mate_bonus, 0);
    assert_eq!(material.stalemate, StalemateAdjust::Off);
    assert!(!material.detect_repetition);
    assert!(!material.order_moves);

    let positional = SearchConfig::positional();
    assert_eq!(positional.eval, EvalTerms::MaterialAndPosition);
    assert_eq!(positional.draw_bias, 0);
}

#[test]
fn test_empty_toml_is_default() {
    assert_eq!(SearchConfig::from_toml_str("").unwrap(), SearchConfig::default());
}

#[test]
fn test_partial_toml() {
    let config = SearchConfig::from_toml_str(
        r#"
depth = 6
eval = "material"
stalemate = "damp"
order_all_nodes = true
"#,
    )
    .unwrap();
    assert_eq!(config.depth, 6);
    assert_eq!(config.eval, EvalTerms::Material);
    assert_eq!(config.stalemate, StalemateAdjust::Damp);
    assert!(config.order_all_nodes);
    // Untouched fields keep their defaults
    assert_eq!(config.mate_bonus, 1000);
    assert_eq!(config.repetition_eval, EvalTerms::Material);
}

#[test]
fn test_invalid_values_rejected() {
    let err = SearchConfig::from_toml_str("depth = 0").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "depth", .. }));

    let err = SearchConfig::from_toml_str("draw_bias = -1").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "draw_bias", .. }));

    let err = SearchConfig::from_toml_str("mate_bonus = -10").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "mate_bonus", .. }));
}

#[test]
fn test_malformed_toml_rejected() {
    assert!(matches!(
        SearchConfig::from_toml_str("depth = \"deep\""),
        Err(ConfigError::Parse(_))
    ));
    assert!(matches!(
        SearchConfig::from_toml_str("hash_mb = 64"),
        Err(ConfigError::Parse(_))
    ));
    assert!(matches!(
        SearchConfig::from_toml_str("stalemate = \"avoid\""),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_load_from_file() {
    let path = std::env::temp_dir().join(format!("minimax_bot_config_{}.toml", std::process::id()));
    fs::write(&path, "depth = 2\nmate_short_circuit = false\n").unwrap();
    let config = SearchConfig::load(&path);
    fs::remove_file(&path).unwrap();

    let config = config.unwrap();
    assert_eq!(config.depth, 2);
    assert!(!config.mate_short_circuit);
}

#[test]
fn test_load_missing_file() {
    let path = std::env::temp_dir().join("minimax_bot_no_such_config.toml");
    let err = SearchConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("minimax_bot_no_such_config.toml"));
}

#[test]
fn test_with_depth() {
    assert_eq!(SearchConfig::material_only().with_depth(7).depth, 7);
}
