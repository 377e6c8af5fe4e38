use pgsql_mapper::{MapperConfig, PlaceholderStyle};

#[test]
fn defaults_when_empty() {
    let config: MapperConfig = toml::from_str("").unwrap();
    assert_eq!(config, MapperConfig::default());
    assert_eq!(config.placeholder_style, PlaceholderStyle::DollarNumbered);
    assert_eq!(config.default_namespace_id, "public");
    assert!(config.log_sql);
    assert_eq!(config.max_logged_sql_length, Some(200));
}

#[test]
fn reads_embedded_section() {
    #[derive(serde::Deserialize)]
    struct HostConfig {
        mapper: MapperConfig,
    }

    let raw = r#"
        [mapper]
        placeholder_style = "question_mark"
        default_namespace_id = ""
        log_sql = false
        max_logged_sql_length = 1000
    "#;
    let host: HostConfig = toml::from_str(raw).unwrap();
    assert_eq!(
        host.mapper,
        MapperConfig::new()
            .placeholder_style(PlaceholderStyle::QuestionMark)
            .default_namespace_id("")
            .log_sql(false)
            .max_logged_sql_length(1000)
    );
}

#[test]
fn rejects_unknown_placeholder_style() {
    let err = toml::from_str::<MapperConfig>(r#"placeholder_style = "colon""#);
    assert!(err.is_err());
}
