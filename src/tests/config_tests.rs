#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::PathBuf;

    use crate::config::{
        ConfigError,
        ResolverConfig,
        DEFAULT_OWNER_MATCH_THRESHOLD,
        DEFAULT_SPATIAL_TOLERANCE,
        ENV_DATA_FILE,
        ENV_OWNER_THRESHOLD,
        ENV_SPATIAL_TOLERANCE,
    };

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = ResolverConfig::default();
        assert_eq!(config.owner_match_threshold, DEFAULT_OWNER_MATCH_THRESHOLD);
        assert_eq!(config.spatial_tolerance, DEFAULT_SPATIAL_TOLERANCE);
        assert_eq!(config.data_file, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_new_validates() {
        assert!(ResolverConfig::new(75.0, 0.0005).is_ok());
        assert!(matches!(
            ResolverConfig::new(101.0, 0.0001),
            Err(ConfigError::ThresholdOutOfRange(_))
        ));
        assert!(matches!(
            ResolverConfig::new(-5.0, 0.0001),
            Err(ConfigError::ThresholdOutOfRange(_))
        ));
        assert!(matches!(ResolverConfig::new(80.0, -0.1), Err(ConfigError::InvalidTolerance(_))));
    }

    #[test]
    fn test_from_file_fills_missing_keys_with_defaults() {
        let file = write_config("owner_match_threshold: 75\n");
        let config = ResolverConfig::from_file(file.path()).unwrap();
        assert_eq!(config.owner_match_threshold, 75.0);
        assert_eq!(config.spatial_tolerance, DEFAULT_SPATIAL_TOLERANCE);
    }

    #[test]
    fn test_from_file_reads_data_file() {
        let file = write_config(
            "owner_match_threshold: 78.5\nspatial_tolerance: 0.001\ndata_file: /srv/parcels.yaml\n"
        );
        let config = ResolverConfig::from_file(file.path()).unwrap();
        assert_eq!(config.owner_match_threshold, 78.5);
        assert_eq!(config.spatial_tolerance, 0.001);
        assert_eq!(config.data_file, Some(PathBuf::from("/srv/parcels.yaml")));
    }

    #[test]
    fn test_from_file_rejects_out_of_range_threshold() {
        let file = write_config("owner_match_threshold: 150\n");
        assert!(matches!(
            ResolverConfig::from_file(file.path()),
            Err(ConfigError::ThresholdOutOfRange(_))
        ));
    }

    #[test]
    fn test_from_file_rejects_unknown_keys() {
        let file = write_config("owner_threshold: 75\n");
        assert!(matches!(ResolverConfig::from_file(file.path()), Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = ResolverConfig::from_file(std::path::Path::new("/nonexistent/deedtrace.yaml"));
        assert!(matches!(result, Err(ConfigError::FileReadError(_))));
    }

    // The only test that touches DEEDTRACE_* variables, so it can't race another test
    #[test]
    fn test_env_overrides() {
        std::env::set_var(ENV_OWNER_THRESHOLD, "77");
        std::env::set_var(ENV_SPATIAL_TOLERANCE, "0.002");
        std::env::set_var(ENV_DATA_FILE, "/tmp/parcels.yaml");
        let config = ResolverConfig::default().with_env_overrides();

        std::env::set_var(ENV_OWNER_THRESHOLD, "not-a-number");
        let bad = ResolverConfig::default().with_env_overrides();

        std::env::set_var(ENV_OWNER_THRESHOLD, "120");
        let out_of_range = ResolverConfig::default().with_env_overrides();

        std::env::remove_var(ENV_OWNER_THRESHOLD);
        std::env::remove_var(ENV_SPATIAL_TOLERANCE);
        std::env::remove_var(ENV_DATA_FILE);

        let config = config.unwrap();
        assert_eq!(config.owner_match_threshold, 77.0);
        assert_eq!(config.spatial_tolerance, 0.002);
        assert_eq!(config.data_file, Some(PathBuf::from("/tmp/parcels.yaml")));
        assert!(matches!(bad, Err(ConfigError::InvalidEnvVar { .. })));
        assert!(matches!(out_of_range, Err(ConfigError::ThresholdOutOfRange(_))));
    }
}
