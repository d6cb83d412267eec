//! Tests for TOML configuration parsing.

use super::toml::{TomlConfig, default_config_template};

mod parsing {
    use super::*;

    #[test]
    fn parse_empty_config() {
        let config = TomlConfig::parse("").unwrap();

        assert!(config.account.username.is_none());
        assert!(config.group.name.is_none());
        assert!(config.launch.networks.is_empty());
        assert!(!config.launch.no_public);
        assert!(config.endpoints.identity.is_none());
    }

    #[test]
    fn parse_full_config() {
        let config = TomlConfig::parse(
            r#"
            [account]
            username = "jdoe"
            api_key = "secret"
            region = "DFW"

            [group]
            name = "web"
            cooldown = 120
            min = 1
            max = 5

            [launch]
            flavor = "performance1-1"
            image = "img-uuid"
            server_name = "web"
            networks = ["net-a", "net-b"]
            no_public = true
            no_service = false

            [launch.metadata]
            role = "web"
            env = "prod"

            [policy]
            name = "Scale Up"
            cooldown = 30
            change = 2

            [webhook]
            name = "Hook"

            [endpoints]
            identity = "http://localhost:5000/v2.0/tokens"
            autoscale = "http://localhost:9000/{region}/v1.0"
            "#,
        )
        .unwrap();

        assert_eq!(config.account.username.as_deref(), Some("jdoe"));
        assert_eq!(config.account.api_key.as_deref(), Some("secret"));
        assert_eq!(config.account.region.as_deref(), Some("DFW"));

        assert_eq!(config.group.name.as_deref(), Some("web"));
        assert_eq!(config.group.cooldown, Some(120));
        assert_eq!(config.group.min, Some(1));
        assert_eq!(config.group.max, Some(5));

        assert_eq!(config.launch.flavor.as_deref(), Some("performance1-1"));
        assert_eq!(config.launch.image.as_deref(), Some("img-uuid"));
        assert_eq!(config.launch.server_name.as_deref(), Some("web"));
        assert_eq!(config.launch.networks, vec!["net-a", "net-b"]);
        assert!(config.launch.no_public);
        assert!(!config.launch.no_service);

        let metadata = config.launch.metadata.unwrap();
        assert_eq!(metadata.get("role").map(String::as_str), Some("web"));
        assert_eq!(metadata.get("env").map(String::as_str), Some("prod"));

        assert_eq!(config.policy.name.as_deref(), Some("Scale Up"));
        assert_eq!(config.policy.cooldown, Some(30));
        assert_eq!(config.policy.change, Some(2));

        assert_eq!(config.webhook.name.as_deref(), Some("Hook"));

        assert_eq!(
            config.endpoints.identity.as_deref(),
            Some("http://localhost:5000/v2.0/tokens")
        );
        assert_eq!(
            config.endpoints.autoscale.as_deref(),
            Some("http://localhost:9000/{region}/v1.0")
        );
    }

    #[test]
    fn parse_negative_policy_change() {
        let config = TomlConfig::parse("[policy]\nchange = -3\n").unwrap();

        assert_eq!(config.policy.change, Some(-3));
    }
}

mod errors {
    use super::*;
    use crate::config::ConfigError;

    #[test]
    fn unknown_section_is_rejected() {
        let result = TomlConfig::parse("[server]\nname = \"x\"\n");

        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn unknown_field_is_rejected() {
        let result = TomlConfig::parse("[group]\nsize = 5\n");

        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn wrong_type_is_rejected() {
        let result = TomlConfig::parse("[group]\nmin = \"two\"\n");

        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn negative_bound_is_rejected() {
        let result = TomlConfig::parse("[group]\nmax = -1\n");

        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }
}

mod template {
    use super::*;

    #[test]
    fn template_parses_as_valid_config() {
        let template = default_config_template();
        let config = TomlConfig::parse(&template).unwrap();

        // Every value is commented out
        assert!(config.account.username.is_none());
        assert!(config.launch.metadata.is_none());
    }

    #[test]
    fn template_documents_every_section() {
        let template = default_config_template();

        for section in [
            "[account]",
            "[group]",
            "[launch]",
            "[policy]",
            "[webhook]",
            "[endpoints]",
        ] {
            assert!(template.contains(section), "Template should contain {section}");
        }
    }

    #[test]
    fn template_mentions_list_replacement() {
        let template = default_config_template();

        assert!(template.contains("REPLACES"));
    }
}

mod file_loading {
    use std::io::Write;
    use std::path::Path;
    use tempfile::NamedTempFile;

    use super::*;
    use crate::config::ConfigError;

    #[test]
    fn load_valid_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            [account]
            region = "LON"
        "#
        )
        .unwrap();

        let config = TomlConfig::load(file.path()).unwrap();
        assert_eq!(config.account.region.as_deref(), Some("LON"));
    }

    #[test]
    fn load_nonexistent_file_returns_error() {
        let path = Path::new("nonexistent_ascend_config_12345.toml");
        let result = TomlConfig::load(path);

        assert!(matches!(result, Err(ConfigError::FileRead { .. })));
    }

    #[test]
    fn load_invalid_toml_file_returns_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "this is not valid toml {{{{").unwrap();

        let result = TomlConfig::load(file.path());

        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }
}
