//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;

/// Write `contents` to a uniquely named file in the temp dir.
fn temp_config(name: &str, contents: &str) -> PathBuf {
    let path = env::temp_dir().join(format!("sshpick_test_{}_{name}", std::process::id()));
    fs::write(&path, contents).expect("Failed to write test config");
    path
}

/// RAII guard to ensure environment variable cleanup even under test parallelism.
struct EnvGuard(&'static str);

impl EnvGuard {
    fn new(name: &'static str) -> Self {
        env::remove_var(name);
        EnvGuard(name)
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        env::remove_var(self.0);
    }
}

// ===== Paths =====

#[test]
fn default_config_path_contains_sshpick_config_toml() {
    let Some(path) = default_config_path() else {
        return;
    };
    let path_str = path.to_string_lossy();
    assert!(
        path_str.contains("sshpick") && path_str.ends_with("config.toml"),
        "Path should contain 'sshpick' and end with 'config.toml', got: {}",
        path_str
    );
}

#[test]
fn default_log_path_ends_with_sshpick_log() {
    let path = default_log_path();
    assert!(
        path.to_string_lossy().ends_with("sshpick.log"),
        "Default log path should end with 'sshpick.log', got: {:?}",
        path
    );
}

// ===== File loading =====

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/config.toml");
    assert_eq!(
        result,
        Ok(None),
        "Missing config file should return Ok(None), not an error"
    );
}

#[test]
fn load_config_file_parses_valid_toml() {
    let config_path = temp_config(
        "valid.toml",
        r#"
records_file = "/srv/hosts.yml"
quit_after_connect = false
log_file_path = "/tmp/sshpick-test.log"
ssh_program = "mosh"
"#,
    );

    let config = load_config_file(&config_path)
        .expect("Should successfully parse valid TOML")
        .expect("Should return Some(ConfigFile) for existing file");

    assert_eq!(config.records_file, Some(PathBuf::from("/srv/hosts.yml")));
    assert_eq!(config.quit_after_connect, Some(false));
    assert_eq!(
        config.log_file_path,
        Some(PathBuf::from("/tmp/sshpick-test.log"))
    );
    assert_eq!(config.ssh_program.as_deref(), Some("mosh"));

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let config_path = temp_config("invalid.toml", "this is not valid TOML ][}{");

    let result = load_config_file(&config_path);
    match result {
        Err(ConfigError::ParseError { path, reason: _ }) => {
            assert_eq!(path, config_path);
        }
        _ => panic!("Expected ParseError, got {:?}", result),
    }

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_handles_partial_config() {
    let config_path = temp_config(
        "partial.toml",
        r#"
ssh_program = "autossh"
# Other fields omitted
"#,
    );

    let config = load_config_file(&config_path)
        .expect("Should parse partial config")
        .expect("File exists");
    assert_eq!(config.ssh_program.as_deref(), Some("autossh"));
    assert_eq!(config.quit_after_connect, None);
    assert_eq!(config.records_file, None);

    fs::remove_file(config_path).ok();
}

#[test]
fn config_file_rejects_unknown_fields() {
    let toml_with_unknown = r#"
ssh_program = "ssh"
theme = "should fail"
"#;

    let result: Result<ConfigFile, _> = toml::from_str(toml_with_unknown);
    assert!(
        result.is_err(),
        "Should reject TOML with unknown fields due to deny_unknown_fields"
    );
}

// ===== Merging =====

#[test]
fn resolved_config_default_has_expected_values() {
    let config = ResolvedConfig::default();

    assert_eq!(config.records_file, None);
    assert!(config.quit_after_connect);
    assert_eq!(config.ssh_program, "ssh");
    assert!(!config.log_file_path.as_os_str().is_empty());
}

#[test]
fn merge_config_uses_defaults_when_none() {
    assert_eq!(merge_config(None), ResolvedConfig::default());
}

#[test]
fn merge_config_overrides_with_config_file_values() {
    let config_file = ConfigFile {
        records_file: Some(PathBuf::from("/srv/hosts.yml")),
        quit_after_connect: Some(false),
        log_file_path: Some(PathBuf::from("/custom/path/to/app.log")),
        ssh_program: Some("mosh".to_string()),
    };

    let resolved = merge_config(Some(config_file));

    assert_eq!(resolved.records_file, Some(PathBuf::from("/srv/hosts.yml")));
    assert!(!resolved.quit_after_connect);
    assert_eq!(
        resolved.log_file_path,
        PathBuf::from("/custom/path/to/app.log")
    );
    assert_eq!(resolved.ssh_program, "mosh");
}

#[test]
fn merge_config_uses_defaults_for_none_fields() {
    let config_file = ConfigFile {
        ssh_program: Some("autossh".to_string()),
        ..ConfigFile::default()
    };

    let resolved = merge_config(Some(config_file));
    let defaults = ResolvedConfig::default();

    assert_eq!(resolved.ssh_program, "autossh");
    assert_eq!(resolved.records_file, defaults.records_file);
    assert_eq!(resolved.quit_after_connect, defaults.quit_after_connect);
    assert_eq!(resolved.log_file_path, defaults.log_file_path);
}

// ===== Environment =====

#[test]
#[serial(sshpick_records)]
fn apply_env_overrides_respects_sshpick_records() {
    let _guard = EnvGuard::new(RECORDS_ENV_VAR);
    env::set_var(RECORDS_ENV_VAR, "/env/hosts.yml");

    let result = apply_env_overrides(ResolvedConfig::default());

    assert_eq!(result.records_file, Some(PathBuf::from("/env/hosts.yml")));
}

#[test]
#[serial(sshpick_records)]
fn apply_env_overrides_ignores_empty_value() {
    let _guard = EnvGuard::new(RECORDS_ENV_VAR);
    env::set_var(RECORDS_ENV_VAR, "");

    let base = ResolvedConfig::default();
    assert_eq!(apply_env_overrides(base.clone()), base);
}

#[test]
#[serial(sshpick_records)]
fn apply_env_overrides_no_change_when_env_var_not_set() {
    let _guard = EnvGuard::new(RECORDS_ENV_VAR);

    let base = ResolvedConfig {
        ssh_program: "mosh".to_string(),
        ..ResolvedConfig::default()
    };
    let result = apply_env_overrides(base.clone());

    assert_eq!(
        result, base,
        "Config should be unchanged when SSHPICK_RECORDS not set"
    );
}

#[test]
#[serial(sshpick_config)]
fn load_config_with_precedence_prefers_explicit_path() {
    let _guard = EnvGuard::new(CONFIG_ENV_VAR);

    let explicit_path = temp_config("explicit.toml", r#"ssh_program = "explicit""#);
    let env_path = temp_config("env.toml", r#"ssh_program = "from-env""#);
    env::set_var(CONFIG_ENV_VAR, &env_path);

    let config = load_config_with_precedence(Some(explicit_path.clone()))
        .expect("Explicit config parses")
        .expect("Explicit config exists");
    assert_eq!(
        config.ssh_program.as_deref(),
        Some("explicit"),
        "Should use explicit path, not SSHPICK_CONFIG env var"
    );

    fs::remove_file(explicit_path).ok();
    fs::remove_file(env_path).ok();
}

#[test]
#[serial(sshpick_config)]
fn load_config_with_precedence_uses_env_var_when_no_explicit_path() {
    let _guard = EnvGuard::new(CONFIG_ENV_VAR);

    let env_path = temp_config("env_only.toml", r#"quit_after_connect = false"#);
    env::set_var(CONFIG_ENV_VAR, &env_path);

    let config = load_config_with_precedence(None)
        .expect("Env config parses")
        .expect("Env config exists");
    assert_eq!(config.quit_after_connect, Some(false));

    fs::remove_file(env_path).ok();
}

#[test]
#[serial(sshpick_config)]
fn load_config_with_precedence_env_var_to_missing_file_is_none() {
    let _guard = EnvGuard::new(CONFIG_ENV_VAR);
    env::set_var(CONFIG_ENV_VAR, "/nonexistent/sshpick/config.toml");

    assert_eq!(load_config_with_precedence(None), Ok(None));
}

// ===== CLI =====

#[test]
fn apply_cli_overrides_records_wins_over_env_and_file() {
    let base = ResolvedConfig {
        records_file: Some(PathBuf::from("/env/hosts.yml")),
        ..ResolvedConfig::default()
    };

    let result = apply_cli_overrides(base, Some(PathBuf::from("/cli/hosts.yml")), false);

    assert_eq!(result.records_file, Some(PathBuf::from("/cli/hosts.yml")));
    assert!(result.quit_after_connect);
}

#[test]
fn apply_cli_overrides_stay_disables_quit_after_connect() {
    let result = apply_cli_overrides(ResolvedConfig::default(), None, true);
    assert!(!result.quit_after_connect);
    assert_eq!(result.records_file, None);
}

#[test]
fn apply_cli_overrides_without_flags_is_identity() {
    let base = ResolvedConfig {
        quit_after_connect: false,
        ..ResolvedConfig::default()
    };
    assert_eq!(apply_cli_overrides(base.clone(), None, false), base);
}
