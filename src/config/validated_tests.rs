//! Tests for validated configuration.

use super::ConfigError;
use super::cli::Cli;
use super::document::ConfigDocument;
use super::validated::{ValidatedConfig, write_default_config};

use crate::api::Priority;

/// Helper to create CLI args from a slice
fn cli(args: &[&str]) -> Cli {
    let mut full_args = vec!["pushover"];
    full_args.extend(args);
    Cli::parse_from_iter(full_args)
}

/// Helper to parse a config document
fn doc(content: &str) -> ConfigDocument {
    ConfigDocument::parse(content).unwrap()
}

mod validation {
    use super::*;

    #[test]
    fn empty_sources_and_cli_name_all_three_fields() {
        let err = ValidatedConfig::from_raw(&cli(&["hello"]), &[]).unwrap_err();

        match err {
            ConfigError::MissingRequired { fields, .. } => {
                assert_eq!(fields, vec!["api_url", "api_user", "api_token"]);
            }
            other => panic!("expected MissingRequired, got {other:?}"),
        }
    }

    #[test]
    fn single_missing_field_named_alone() {
        let docs = [doc(
            "api_url = https://example.com/1/messages.json\napi_user = alice\n",
        )];

        let err = ValidatedConfig::from_raw(&cli(&["hello"]), &docs).unwrap_err();

        match err {
            ConfigError::MissingRequired { fields, .. } => {
                assert_eq!(fields, vec!["api_token"]);
            }
            other => panic!("expected MissingRequired, got {other:?}"),
        }
    }

    #[test]
    fn blank_value_counts_as_missing() {
        let docs = [doc(
            "api_url = https://example.com\napi_user = alice\napi_token\n",
        )];

        let err = ValidatedConfig::from_raw(&cli(&["hello"]), &docs).unwrap_err();

        assert!(matches!(err, ConfigError::MissingRequired { .. }));
    }

    #[test]
    fn invalid_url_is_rejected() {
        let docs = [doc(
            "api_url = not a url\napi_user = alice\napi_token = tok\n",
        )];

        let err = ValidatedConfig::from_raw(&cli(&["hello"]), &docs).unwrap_err();

        match err {
            ConfigError::InvalidUrl { url, .. } => assert_eq!(url, "not a url"),
            other => panic!("expected InvalidUrl, got {other:?}"),
        }
    }

    #[test]
    fn complete_sources_resolve() {
        let docs = [doc(
            "api_url = https://example.com/1/messages.json\n\
             api_user = alice\n\
             api_token = tok\n\
             api_device = phone, tablet\n",
        )];

        let config = ValidatedConfig::from_raw(&cli(&["hello"]), &docs).unwrap();

        assert_eq!(config.api_url.as_str(), "https://example.com/1/messages.json");
        assert_eq!(config.api_user, "alice");
        assert_eq!(config.api_token, "tok");
        assert_eq!(config.devices, vec!["phone", "tablet"]);
    }

    #[test]
    fn cli_only_configuration_is_sufficient() {
        let config = ValidatedConfig::from_raw(
            &cli(&[
                "--url",
                "https://example.com/1/messages.json",
                "-U",
                "alice",
                "-T",
                "tok",
                "hello",
            ]),
            &[],
        )
        .unwrap();

        assert_eq!(config.api_user, "alice");
        assert!(config.devices.is_empty());
    }

    #[test]
    fn display_redacts_the_token() {
        let config = ValidatedConfig::from_raw(
            &cli(&[
                "--url",
                "https://example.com/1/messages.json",
                "-U",
                "alice",
                "-T",
                "super-secret",
                "hello",
            ]),
            &[],
        )
        .unwrap();

        let rendered = config.to_string();
        assert!(!rendered.contains("super-secret"), "{rendered}");
    }
}

mod precedence {
    use super::*;

    #[test]
    fn cli_url_overrides_file() {
        let docs = [doc(
            "api_url = https://file.example.com\napi_user = alice\napi_token = tok\n",
        )];

        let config = ValidatedConfig::from_raw(
            &cli(&["--url", "https://cli.example.com", "hello"]),
            &docs,
        )
        .unwrap();

        assert_eq!(config.api_url.as_str(), "https://cli.example.com/");
    }

    #[test]
    fn preset_device_narrowing_survives_validation() {
        let docs = [doc(
            "api_url = https://example.com\n\
             api_user = alice\n\
             api_token = tok\n\
             api_device = phone, tablet, desk\n\
             \n\
             [work]\n\
             api_device = phone\n",
        )];

        let config =
            ValidatedConfig::from_raw(&cli(&["-p", "work", "hello"]), &docs).unwrap();

        assert_eq!(config.devices, vec!["phone"]);
    }

    #[test]
    fn incomplete_settings_rejected_before_any_send() {
        // Validation lives entirely in the config layer; the HTTP client is
        // only constructed after a ValidatedConfig exists.
        let docs = [doc("[work]\napi_device = phone\n")];

        let err = ValidatedConfig::from_raw(&cli(&["-p", "work", "hello"]), &docs).unwrap_err();

        assert!(matches!(err, ConfigError::MissingRequired { .. }));
    }
}

mod message_fields {
    use super::*;

    fn base_args<'a>(extra: &[&'a str]) -> Vec<&'a str> {
        let mut args = vec![
            "--url",
            "https://example.com/1/messages.json",
            "-U",
            "alice",
            "-T",
            "tok",
        ];
        args.extend(extra);
        args
    }

    #[test]
    fn message_words_joined_into_body() {
        let config =
            ValidatedConfig::from_raw(&cli(&base_args(&["backup", "finished"])), &[]).unwrap();

        assert_eq!(config.body.as_deref(), Some("backup finished"));
    }

    #[test]
    fn omitted_message_leaves_body_unset() {
        let config = ValidatedConfig::from_raw(&cli(&base_args(&[])), &[]).unwrap();

        assert_eq!(config.body, None);
    }

    #[test]
    fn title_and_priority_carried_through() {
        let config = ValidatedConfig::from_raw(
            &cli(&base_args(&["-t", "Backup", "--priority", "high", "done"])),
            &[],
        )
        .unwrap();

        assert_eq!(config.title.as_deref(), Some("Backup"));
        assert_eq!(config.priority, Priority::High);
    }

    #[test]
    fn priority_defaults_to_normal() {
        let config = ValidatedConfig::from_raw(&cli(&base_args(&["done"])), &[]).unwrap();

        assert_eq!(config.priority, Priority::Normal);
    }
}

mod loading {
    use super::*;

    #[test]
    fn explicit_config_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.conf");
        std::fs::write(
            &path,
            "api_url = https://example.com/1/messages.json\n\
             api_user = alice\n\
             api_token = tok\n",
        )
        .unwrap();

        let config = ValidatedConfig::load(&cli(&[
            "-c",
            path.to_str().unwrap(),
            "hello",
        ]))
        .unwrap();

        assert_eq!(config.api_user, "alice");
    }

    #[test]
    fn explicit_config_file_must_be_readable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.conf");

        let err = ValidatedConfig::load(&cli(&[
            "-c",
            path.to_str().unwrap(),
            "hello",
        ]))
        .unwrap_err();

        assert!(matches!(err, ConfigError::FileRead { .. }));
    }

    #[test]
    fn written_template_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pushover.conf");

        write_default_config(&path).unwrap();
        let doc = ConfigDocument::load(&path).unwrap();

        assert!(doc.defaults().get("api_url").is_some());
    }
}
