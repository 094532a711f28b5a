use valyu_tools::{ValyuConfig, API_KEY_ENV};

#[test]
fn config_defaults() {
    let config = ValyuConfig::default();
    assert_eq!(config.api_key, "");
    assert_eq!(config.base_url, "https://api.valyu.network");
    assert_eq!(config.max_results, 10);
    assert!((config.relevance_threshold - 0.5).abs() < f64::EPSILON);
    assert!(!config.fast_mode);
    assert_eq!(config.response_length, "medium");
}

#[test]
fn new_sets_api_key_and_keeps_defaults() {
    let config = ValyuConfig::new("my-key");
    assert_eq!(config.api_key, "my-key");
    assert_eq!(config.base_url, "https://api.valyu.network");
    assert_eq!(config.max_results, 10);
}

#[test]
fn config_builder() {
    let config = ValyuConfig::new("key")
        .with_base_url("https://custom.api.com")
        .with_max_results(3)
        .with_relevance_threshold(0.8)
        .with_fast_mode(true)
        .with_response_length("max");
    assert_eq!(config.api_key, "key");
    assert_eq!(config.base_url, "https://custom.api.com");
    assert_eq!(config.max_results, 3);
    assert!((config.relevance_threshold - 0.8).abs() < f64::EPSILON);
    assert!(config.fast_mode);
    assert_eq!(config.response_length, "max");
}

#[test]
fn out_of_range_values_pass_through() {
    // Values are forwarded uninspected; range checks are the API's concern.
    let config = ValyuConfig::new("key").with_relevance_threshold(7.5);
    assert!((config.relevance_threshold - 7.5).abs() < f64::EPSILON);
}

// Single test touching the process environment to avoid races between
// parallel tests in this binary.
#[test]
fn config_from_env() {
    std::env::set_var(API_KEY_ENV, "env-key");
    let config = ValyuConfig::from_env();
    assert_eq!(config.api_key, "env-key");
    assert_eq!(config.max_results, 10);

    std::env::remove_var(API_KEY_ENV);
    let config = ValyuConfig::from_env();
    assert_eq!(config.api_key, "");
}
