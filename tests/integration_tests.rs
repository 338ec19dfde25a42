/*
 * Integration tests for omenfanctl
 *
 * These tests drive the CLI dispatch and hwmon access together against
 * fake hwmon trees built in temporary directories.
 */

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use serial_test::serial;
use tempfile::TempDir;

use omenfanctl::cli::{execute_command, Cli, Commands};
use omenfanctl::config::{self, DevicePaths, BASE_PATH_ENV};
use omenfanctl::hwmon::{self, HwmonError, PwmMode};

fn fake_hwmon(fan1: &str, fan2: &str, pwm: &str) -> (TempDir, DevicePaths) {
    let dir = TempDir::new().unwrap();
    let paths = DevicePaths::new(dir.path());
    fs::write(&paths.fan1_input, fan1).unwrap();
    fs::write(&paths.fan2_input, fan2).unwrap();
    fs::write(&paths.pwm1_enable, pwm).unwrap();
    (dir, paths)
}

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn test_status_flow_all_attributes_present() {
    let (_dir, paths) = fake_hwmon("3200\n", "2800\n", "2\n");

    let snapshot = hwmon::read_status(&paths);
    assert_eq!(snapshot.fan1_rpm.unwrap(), 3200);
    assert_eq!(snapshot.fan2_rpm.unwrap(), 2800);

    let raw = snapshot.pwm_enable.unwrap();
    assert_eq!(raw, "2");
    assert_eq!(PwmMode::from_raw(&raw), PwmMode::Automatic);
}

#[test]
fn test_status_command_succeeds_with_all_reads_failing() {
    // Base dir exists but holds none of the attribute files
    let dir = TempDir::new().unwrap();
    let base = dir.path().to_str().unwrap().to_string();

    let cli = parse(&["omenfanctl", "--hwmon-path", &base, "status"]);
    assert!(execute_command(&cli).is_ok());
}

#[test]
fn test_status_command_fails_on_missing_base_dir() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("hwmon99");
    let base = missing.to_str().unwrap().to_string();

    let cli = parse(&["omenfanctl", "--hwmon-path", &base, "status"]);
    assert!(execute_command(&cli).is_err());
}

#[test]
fn test_set_command_writes_state() {
    let (dir, paths) = fake_hwmon("3200\n", "2800\n", "2\n");
    let base = dir.path().to_str().unwrap().to_string();

    let cli = parse(&["omenfanctl", "--hwmon-path", &base, "set", "0"]);
    assert!(execute_command(&cli).is_ok());
    assert_eq!(fs::read(&paths.pwm1_enable).unwrap(), b"0");

    let cli = parse(&["omenfanctl", "--hwmon-path", &base, "set", "2"]);
    assert!(execute_command(&cli).is_ok());
    assert_eq!(fs::read(&paths.pwm1_enable).unwrap(), b"2");
}

#[test]
fn test_set_command_repeated_writes_keep_mode() {
    let (dir, paths) = fake_hwmon("3200\n", "2800\n", "0\n");
    let base = dir.path().to_str().unwrap().to_string();

    for _ in 0..2 {
        let cli = parse(&["omenfanctl", "--hwmon-path", &base, "set", "2"]);
        assert!(execute_command(&cli).is_ok());
    }

    let raw = hwmon::read_pwm_enable(&paths.pwm1_enable).unwrap();
    assert_eq!(PwmMode::from_raw(&raw), PwmMode::Automatic);
}

#[test]
fn test_set_command_fails_on_unwritable_target() {
    use std::os::unix::fs::PermissionsExt;

    if unsafe { libc::geteuid() } == 0 {
        return;
    }

    let (dir, paths) = fake_hwmon("3200\n", "2800\n", "2\n");
    fs::set_permissions(&paths.pwm1_enable, fs::Permissions::from_mode(0o444)).unwrap();
    let base = dir.path().to_str().unwrap().to_string();

    let cli = parse(&["omenfanctl", "--hwmon-path", &base, "set", "0"]);
    assert!(execute_command(&cli).is_err());
    // Target content untouched
    assert_eq!(fs::read_to_string(&paths.pwm1_enable).unwrap(), "2\n");
}

#[test]
fn test_invalid_state_never_reaches_the_writer() {
    // The parser rejects it first
    assert!(Cli::try_parse_from(["omenfanctl", "set", "1"]).is_err());

    // And the writer re-validates defensively
    let (_dir, paths) = fake_hwmon("3200\n", "2800\n", "2\n");
    assert!(matches!(
        hwmon::write_pwm_enable(&paths, "1"),
        Err(HwmonError::InvalidState(_))
    ));
    assert_eq!(fs::read_to_string(&paths.pwm1_enable).unwrap(), "2\n");
}

#[test]
#[serial]
fn test_env_var_selects_base_dir() {
    let (dir, paths) = fake_hwmon("3200\n", "2800\n", "2\n");
    std::env::set_var(BASE_PATH_ENV, dir.path());

    let cli = parse(&["omenfanctl", "set", "0"]);
    assert!(execute_command(&cli).is_ok());
    assert_eq!(fs::read(&paths.pwm1_enable).unwrap(), b"0");

    std::env::remove_var(BASE_PATH_ENV);
}

#[test]
#[serial]
fn test_flag_overrides_env_var() {
    let (env_dir, env_paths) = fake_hwmon("3200\n", "2800\n", "2\n");
    let (flag_dir, flag_paths) = fake_hwmon("3200\n", "2800\n", "2\n");
    std::env::set_var(BASE_PATH_ENV, env_dir.path());
    let base = flag_dir.path().to_str().unwrap().to_string();

    let cli = parse(&["omenfanctl", "--hwmon-path", &base, "set", "0"]);
    assert!(execute_command(&cli).is_ok());

    assert_eq!(fs::read(&flag_paths.pwm1_enable).unwrap(), b"0");
    assert_eq!(fs::read_to_string(&env_paths.pwm1_enable).unwrap(), "2\n");

    std::env::remove_var(BASE_PATH_ENV);
}

#[test]
#[serial]
fn test_default_base_path_resolution() {
    std::env::remove_var(BASE_PATH_ENV);
    assert_eq!(
        config::resolve_base_path(None),
        PathBuf::from(config::DEFAULT_BASE_PATH)
    );
}

#[test]
fn test_mode_labels_end_to_end() {
    let cases = [
        ("2", "Automatic"),
        ("0", "Manual (Max RPM)"),
        ("1", "Unknown"),
        ("3", "Unknown"),
        ("max", "Unknown"),
    ];
    for (raw, label) in cases {
        let (_dir, paths) = fake_hwmon("3200\n", "2800\n", &format!("{}\n", raw));
        let read = hwmon::read_pwm_enable(&paths.pwm1_enable).unwrap();
        assert_eq!(read, raw);
        assert_eq!(PwmMode::from_raw(&read).to_string(), label);
    }
}

#[test]
fn test_cli_subcommand_shapes() {
    let cli = parse(&["omenfanctl", "status"]);
    assert!(matches!(cli.command, Commands::Status));

    let cli = parse(&["omenfanctl", "set", "2"]);
    match cli.command {
        Commands::Set { state } => assert_eq!(state, "2"),
        _ => panic!("expected Set"),
    }
}
