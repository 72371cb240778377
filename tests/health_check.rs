//! Integration tests for the health check system

use gpu_text::health::{self, HealthCheckRunner, SystemCheck, checks::*};

#[test]
fn test_all_health_checks() {
    let report = health::run_all_checks();

    // Print report for debugging if tests fail
    if !report.is_healthy() {
        eprintln!("\n{}", health::format_report(&report));
    }

    assert!(
        report.is_healthy(),
        "Health checks failed: {} failures, {} warnings",
        report.failed(),
        report.warned()
    );
}

#[test]
fn test_config_check() {
    let check = ConfigCheck::new();
    let result = check.check();

    assert!(
        result.status.is_ok(),
        "Config check failed: {}",
        result.message
    );
}

#[test]
fn test_window_config_check() {
    let check = WindowConfigCheck::new();
    let result = check.check();

    assert!(
        result.status.is_ok(),
        "Window config check failed: {}",
        result.message
    );
}

#[test]
fn test_shader_format_check() {
    let check = ShaderFormatCheck::new();
    let result = check.check();

    assert!(
        result.status.is_ok(),
        "Shader format check failed: {}",
        result.message
    );
}

#[test]
fn test_build_info_check() {
    let check = BuildInfoCheck::new();
    let result = check.check();

    assert!(
        result.status.is_ok(),
        "Build info check failed: {}",
        result.message
    );
}

#[test]
fn test_system_info_check() {
    let check = SystemInfoCheck::new();
    let result = check.check();

    assert!(
        result.status.is_ok(),
        "System info check failed: {}",
        result.message
    );
}

#[test]
fn test_graphics_backend_check_reports() {
    // Adapter availability depends on the host, so only the report shape
    // is asserted here
    let check = GraphicsBackendCheck::new();
    let result = check.check();

    assert!(!result.message.is_empty());
    assert!(result.details.is_some());
}

#[test]
fn test_runner_collects_all_checks() {
    let report = HealthCheckRunner::new()
        .add_check(ConfigCheck::new())
        .add_check(WindowConfigCheck::new())
        .run();

    assert_eq!(report.total(), 2, "Expected 2 checks in report");
    assert_eq!(
        report.passed() + report.warned() + report.failed(),
        report.total()
    );
}

#[test]
fn test_report_exit_codes() {
    let report = HealthCheckRunner::new().add_check(ConfigCheck::new()).run();

    if report.failed() > 0 {
        assert_eq!(report.exit_code(), 1);
    } else if report.warned() > 0 {
        assert_eq!(report.exit_code(), 2);
    } else {
        assert_eq!(report.exit_code(), 0);
    }
}
