use schemapdf::infrastructure::observability::TracingConfig;

#[test]
fn given_default_config_when_created_then_environment_is_set() {
    let config = TracingConfig::default();
    assert!(!config.environment.is_empty());
}

#[test]
fn given_default_config_when_created_then_filter_targets_crate() {
    let config = TracingConfig::default();
    assert!(config.default_filter.contains("schemapdf=debug"));
}
