//! Builder wired to the real locator, config file and console writer.

use std::fs;
use std::path::Path;

use task_runner::io::config::load_config;
use task_runner::{ConsoleIo, Error, PathLocator, ProcessBuilder, QuotingStyle, Verbosity};

fn install_tool(dir: &Path, name: &str) {
    fs::create_dir_all(dir).expect("create bin dir");
    let tool = dir.join(name);
    fs::write(&tool, "#!/bin/sh\n").expect("write tool");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&tool, fs::Permissions::from_mode(0o755)).expect("chmod tool");
    }
}

#[test]
fn resolves_tool_from_bin_dir_and_echoes_command() {
    let temp = tempfile::tempdir().expect("tempdir");
    let bin_dir = temp.path().join("vendor").join("bin");
    install_tool(&bin_dir, "grumphp");

    let config_path = temp.path().join("runner.toml");
    fs::write(&config_path, "[process]\ntimeout = 120\n").expect("write config");
    let config = load_config(&config_path).expect("load config");

    let io = ConsoleIo::new(Vec::new(), Verbosity::VeryVerbose);
    let builder = ProcessBuilder::new(PathLocator::default().with_bin_dir(&bin_dir), &io, &config)
        .with_quoting(QuotingStyle::Posix);

    let args = builder
        .create_arguments_for_command("grumphp")
        .expect("args")
        .add("run");
    let process = builder.build_process(&args).expect("process");

    let expected_path = bin_dir.join("grumphp").to_string_lossy().into_owned();
    assert_eq!(process.program(), expected_path);
    assert_eq!(process.timeout(), 120.0);
    assert_eq!(
        process.command_line(),
        format!("'{expected_path}' 'run'")
    );

    drop(builder);
    let echoed = String::from_utf8(io.into_inner()).expect("utf8");
    assert_eq!(echoed, format!("Command: {}\n", process.command_line()));
}

#[test]
fn missing_tool_is_reported_as_not_found() {
    let temp = tempfile::tempdir().expect("tempdir");
    let io = ConsoleIo::new(Vec::new(), Verbosity::Debug);
    let builder = ProcessBuilder::new(
        PathLocator::new([temp.path()]),
        &io,
        task_runner::RunnerConfig::default(),
    );

    let err = builder.create_arguments_for_command("phpunit").unwrap_err();
    assert_eq!(err, Error::command_not_found("phpunit"));

    drop(builder);
    assert!(io.into_inner().is_empty());
}

#[test]
fn process_converts_to_unstarted_command() {
    let temp = tempfile::tempdir().expect("tempdir");
    install_tool(temp.path(), "phpcs");

    let io = ConsoleIo::new(Vec::new(), Verbosity::Normal);
    let builder = ProcessBuilder::new(
        PathLocator::new([temp.path()]),
        &io,
        task_runner::RunnerConfig::default(),
    );
    let args = builder
        .create_arguments_for_command("phpcs")
        .expect("args")
        .add_optional_argument("--standard=%s", Some("PSR12"));
    let process = builder
        .build_process(&args)
        .expect("process")
        .with_working_dir(temp.path());

    let cmd = process.to_command();
    assert_eq!(cmd.get_program(), temp.path().join("phpcs").as_os_str());
    let cmd_args: Vec<_> = cmd.get_args().collect();
    assert_eq!(cmd_args, ["--standard=PSR12"]);
    assert_eq!(cmd.get_current_dir(), Some(temp.path()));
    assert_eq!(process.timeout(), 60.0);

    drop(builder);
    assert!(io.into_inner().is_empty());
}
