//! Tests for the configuration module.

use super::*;
use std::path::PathBuf;

fn temp_config_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("planner-config-{}-{}.toml", name, std::process::id()))
}

#[test]
fn test_default_config() {
    let config = PlannerConfig::default();
    assert_eq!(config.common.log_level, "info");
    assert_eq!(config.search.num_playouts, 1000);
    assert_eq!(config.search.max_depth, 50);
}

#[test]
fn test_search_defaults() {
    let config = PlannerConfig::default();
    assert_eq!(config.search.num_playouts, 1000);
    assert!((config.search.max_planning_time - 0.0).abs() < f64::EPSILON);
    assert_eq!(config.search.max_depth, 50);
    assert_eq!(config.search.pruning_memory_size, 5000);
}

#[test]
fn test_uct_defaults() {
    let config = PlannerConfig::default();
    assert!((config.uct.exploration - 1.414).abs() < f64::EPSILON);
    assert!((config.uct.discount - 0.95).abs() < f64::EPSILON);
    assert_eq!(config.uct.seed, 0);
}

#[test]
fn test_parse_config_toml() {
    let toml_content = r#"
[common]
log_level = "debug"

[search]
num_playouts = 0
max_planning_time = 0.25
max_depth = 20
pruning_memory_size = 100

[uct]
exploration = 2.0
discount = 0.9
seed = 7
"#;
    let config: PlannerConfig = toml::from_str(toml_content).unwrap();
    assert_eq!(config.common.log_level, "debug");
    assert_eq!(config.search.num_playouts, 0);
    assert!((config.search.max_planning_time - 0.25).abs() < f64::EPSILON);
    assert_eq!(config.search.max_depth, 20);
    assert_eq!(config.search.pruning_memory_size, 100);
    assert!((config.uct.exploration - 2.0).abs() < f64::EPSILON);
    assert!((config.uct.discount - 0.9).abs() < f64::EPSILON);
    assert_eq!(config.uct.seed, 7);
}

#[test]
fn test_partial_config() {
    let toml_content = r#"
[search]
max_depth = 10
"#;
    let config: PlannerConfig = toml::from_str(toml_content).unwrap();
    assert_eq!(config.search.max_depth, 10);
    assert_eq!(config.search.num_playouts, 1000); // Default
    assert_eq!(config.common.log_level, "info"); // Default
    assert!((config.uct.discount - 0.95).abs() < f64::EPSILON); // Default
}

#[test]
fn test_negative_planning_time_parses() {
    // Rejected later by the search engine, not by the parser
    let config: PlannerConfig = toml::from_str("[search]\nmax_planning_time = -1.0\n").unwrap();
    assert!(config.search.max_planning_time < 0.0);
}

#[test]
fn test_search_env_overrides() {
    std::env::set_var("PLANNER_SEARCH_NUM_PLAYOUTS", "42");
    std::env::set_var("PLANNER_SEARCH_MAX_PLANNING_TIME", "1.5");
    std::env::set_var("PLANNER_UCT_SEED", "99");

    let config = apply_env_overrides(PlannerConfig::default());
    assert_eq!(config.search.num_playouts, 42);
    assert!((config.search.max_planning_time - 1.5).abs() < f64::EPSILON);
    assert_eq!(config.uct.seed, 99);

    std::env::remove_var("PLANNER_SEARCH_NUM_PLAYOUTS");
    std::env::remove_var("PLANNER_SEARCH_MAX_PLANNING_TIME");
    std::env::remove_var("PLANNER_UCT_SEED");
}

#[test]
fn test_unparseable_env_override_is_ignored() {
    std::env::set_var("PLANNER_SEARCH_MAX_DEPTH", "deep");

    let config = apply_env_overrides(PlannerConfig::default());
    assert_eq!(config.search.max_depth, 50);

    std::env::remove_var("PLANNER_SEARCH_MAX_DEPTH");
}

#[test]
fn test_log_level_env_override() {
    std::env::set_var("PLANNER_COMMON_LOG_LEVEL", "mcts=trace");

    let config = apply_env_overrides(PlannerConfig::default());
    assert_eq!(config.common.log_level, "mcts=trace");

    std::env::remove_var("PLANNER_COMMON_LOG_LEVEL");
}

#[test]
fn test_load_from_path() {
    let path = temp_config_path("load");
    std::fs::write(&path, "[search]\npruning_memory_size = 12\n").unwrap();

    let config = load_from_path(&path);
    assert_eq!(config.search.pruning_memory_size, 12);
    assert_eq!(config.search.max_depth, 50);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_load_from_path_falls_back_on_bad_toml() {
    let path = temp_config_path("bad");
    std::fs::write(&path, "[search\nnum_playouts = ").unwrap();

    let config = load_from_path(&path);
    assert_eq!(config.search.pruning_memory_size, 5000);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_load_from_missing_path_uses_defaults() {
    let config = load_from_path(&temp_config_path("missing"));
    assert_eq!(config.search.pruning_memory_size, 5000);
}

#[test]
fn test_config_clone() {
    let config = PlannerConfig::default();
    let cloned = config.clone();
    assert_eq!(config.search.num_playouts, cloned.search.num_playouts);
    assert_eq!(config.common.log_level, cloned.common.log_level);
}
