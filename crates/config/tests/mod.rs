//! Configuration loading tests
//!
//! Exercises TOML loading and the precedence of file values over network presets.

mod file_config_tests {
    use ballot_config::{ConfigError, Credentials, FileConfig, NetworkType, Settings};
    use std::io::Write;
    use std::time::Duration;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    /// A full file overrides every preset value
    #[test]
    fn test_file_overrides_preset() {
        let file = write_config(
            r#"
network = "local"
rpc_url = "http://10.0.0.5:8545"
chain_id = 1337
currency_symbol = "GO"
confirmations = 3
poll_interval_ms = 250
artifacts_dir = "build/artifacts"
"#,
        );

        let config = FileConfig::load(file.path()).unwrap();
        assert_eq!(config.network, Some(NetworkType::Local));

        let settings = Settings::new(NetworkType::Sepolia, Credentials::new("abc", None))
            .apply_file(&config);
        assert_eq!(settings.network.network_type, NetworkType::Local);
        assert_eq!(settings.network.endpoint, "http://10.0.0.5:8545");
        assert_eq!(settings.network.chain_id, 1337);
        assert_eq!(settings.network.currency_symbol, "GO");
        assert_eq!(settings.confirmations, 3);
        assert_eq!(settings.poll_interval, Duration::from_millis(250));
        assert_eq!(settings.artifacts_dir.to_str(), Some("build/artifacts"));
    }

    /// An empty file keeps the preset
    #[test]
    fn test_empty_file_keeps_preset() {
        let file = write_config("");
        let config = FileConfig::load(file.path()).unwrap();
        assert_eq!(config, FileConfig::default());

        let settings = Settings::new(NetworkType::Sepolia, Credentials::new("abc", None))
            .apply_file(&config);
        assert_eq!(
            settings.network.endpoint,
            "https://eth-sepolia.g.alchemy.com/v2/abc"
        );
    }

    /// Switching network in the file re-derives the endpoint with the same API key
    #[test]
    fn test_network_switch_uses_api_key() {
        let config = FileConfig::parse("network = \"mainnet\"").unwrap();
        let settings = Settings::new(NetworkType::Sepolia, Credentials::new("k1", None))
            .apply_file(&config);
        assert_eq!(
            settings.network.endpoint,
            "https://eth-mainnet.g.alchemy.com/v2/k1"
        );
        assert_eq!(settings.network.currency_symbol, "ETH");
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let file = write_config("netwrok = \"local\"\n");
        let err = FileConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileConfig::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("absent.toml"));
    }

    #[test]
    fn test_file_config_serializes_back() {
        let config = FileConfig {
            network: Some(NetworkType::Sepolia),
            confirmations: Some(2),
            ..FileConfig::default()
        };
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["network"], "sepolia");
        assert_eq!(json["confirmations"], 2);
    }
}
