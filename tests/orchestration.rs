//! Drives small orchestration routines through the port traits, the way
//! production code would, and checks what the mock runners observed.

use execmock::adapters::mock::files::TEST_DEFAULTS;
use execmock::defaults::load_step_defaults;
use execmock::ports::{ExecRunner, Execution, ShellRunner};
use execmock::{
    CaptureBuffer, DispatchError, ExecMockRunner, FakeFileSource, Failure, ShellMockRunner,
};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Builds a project and returns the version reported by the build tool.
fn build_and_report(runner: &mut dyn ExecRunner, out: &CaptureBuffer) -> Result<String, BoxError> {
    runner.set_dir("/workspace");
    runner.set_env(&["MAVEN_OPTS=-Xmx1g".to_string()]);
    runner.stdout(Box::new(out.clone()));
    runner.run_executable("mvn", &["--batch-mode", "install"])?;
    out.clear();
    runner.run_executable("mvn", &["help:evaluate", "-Dexpression=project.version", "-q"])?;
    Ok(out.contents().trim().to_string())
}

/// Starts a service, runs the integration suite against it, then stops it.
fn with_service(runner: &mut dyn ExecRunner) -> Result<(), BoxError> {
    let service = runner.run_executable_in_background("docker", &["run", "redis"])?;
    let result = runner.run_executable("npm", &["run", "integration"]);
    service.kill()?;
    service.wait()?;
    result
}

fn deploy(shell: &mut dyn ShellRunner) -> Result<(), BoxError> {
    shell.set_dir("/deploy");
    shell.add_to_env(&["CF_HOME=/tmp/cf".to_string()]);
    shell.run_shell("/bin/bash", "cf login && cf push app")
}

#[test]
fn build_reports_version_and_records_calls() {
    let mut runner = ExecMockRunner::new();
    runner.stdout_return.insert("mvn --batch-mode install".into(), "BUILD SUCCESS\n".into());
    runner.stdout_return.insert("help:evaluate".into(), "1.4.2\n".into());
    let out = CaptureBuffer::new();

    let version = build_and_report(&mut runner, &out).unwrap();

    assert_eq!(version, "1.4.2");
    assert_eq!(runner.dir, vec!["/workspace"]);
    assert_eq!(runner.env, vec!["MAVEN_OPTS=-Xmx1g"]);
    assert_eq!(runner.calls.len(), 2);
    assert_eq!(runner.calls[0].params, vec!["--batch-mode", "install"]);
}

#[test]
fn build_stops_at_first_failure() {
    let mut runner = ExecMockRunner::new();
    runner.should_fail_on_command.insert("mvn .*install".into(), Failure::from("exit status 1"));
    let out = CaptureBuffer::new();

    let err = build_and_report(&mut runner, &out).unwrap_err();

    assert_eq!(err.to_string(), "exit status 1");
    assert_eq!(runner.calls.len(), 1);
}

#[test]
fn service_is_killed_after_suite() {
    let mut runner = ExecMockRunner::new();

    with_service(&mut runner).unwrap();

    let background = &runner.calls[0];
    assert!(background.is_async);
    assert!(background.execution.as_ref().unwrap().is_killed());
    assert!(!runner.calls[1].is_async);
}

#[test]
fn service_is_killed_even_when_suite_fails() {
    let mut runner = ExecMockRunner::new();
    let failure = Failure::from("2 tests failed");
    runner.should_fail_on_command.insert("npm run integration".into(), failure.clone());

    let err = with_service(&mut runner).unwrap_err();

    match err.downcast_ref::<DispatchError>() {
        Some(DispatchError::Configured(got)) => assert!(got.ptr_eq(&failure)),
        other => panic!("expected configured failure, got {other:?}"),
    }
    assert!(runner.calls[0].execution.as_ref().unwrap().is_killed());
}

#[test]
fn deploy_runs_through_shell() {
    let mut shell = ShellMockRunner::new();
    let out = CaptureBuffer::new();
    shell.stdout(Box::new(out.clone()));
    shell.stdout_return.insert("cf push".into(), "app started\n".into());

    deploy(&mut shell).unwrap();

    assert_eq!(shell.dir, "/deploy");
    assert_eq!(shell.env, vec!["CF_HOME=/tmp/cf"]);
    assert_eq!(shell.shell, vec!["/bin/bash"]);
    assert_eq!(shell.calls, vec!["cf login && cf push app"]);
    assert_eq!(out.contents(), "app started\n");
}

#[test]
fn misconfigured_pattern_surfaces_as_error() {
    let mut shell = ShellMockRunner::new();
    shell.stdout_return.insert("cf push (".into(), "never".into());

    let err = deploy(&mut shell).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<DispatchError>(),
        Some(DispatchError::InvalidPattern { .. })
    ));
}

#[test]
fn step_defaults_come_from_fake_source() {
    let defaults = load_step_defaults(&FakeFileSource, TEST_DEFAULTS).unwrap();
    assert_eq!(defaults.general.test_param.as_deref(), Some("testValue"));
}
