use fileman::cmd;
use fileman::error::CommandError;
use fileman::process::pack::CompressionAlgorithm;
use fileman::process::{self, Flow};
use fileman::session::Session;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn session_in(dir: &Path) -> Session {
    Session::new("tester".to_string(), dir.to_path_buf())
}

fn run(session: &mut Session, line: &str) -> (Result<Flow, CommandError>, String) {
    let mut buffer = Vec::new();
    let result = cmd::parse(line).and_then(|command| {
        process::execute(session, command, CompressionAlgorithm::Lz4, &mut buffer)
    });
    (result, String::from_utf8_lossy(&buffer).into_owned())
}

#[test]
fn add_creates_an_empty_regular_file() {
    let dir = tempdir().unwrap();
    let mut session = session_in(dir.path());

    let (result, output) = run(&mut session, "add foo.txt");
    assert!(matches!(result, Ok(Flow::Continue)));
    assert_eq!(output.trim_end(), "File created successfully");

    let meta = fs::metadata(dir.path().join("foo.txt")).unwrap();
    assert!(meta.is_file());
    assert_eq!(meta.len(), 0);
}

#[test]
fn add_over_an_existing_file_is_an_operation_failure() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("foo.txt"), b"keep").unwrap();

    let mut session = session_in(dir.path());
    let (result, _) = run(&mut session, "add foo.txt");
    assert!(matches!(result, Err(CommandError::OperationFailed(_))));
    // The original content survives the failed creation.
    assert_eq!(fs::read(dir.path().join("foo.txt")).unwrap(), b"keep");
}

#[test]
fn cat_streams_the_raw_bytes() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), b"line one\nline two\n").unwrap();

    let mut session = session_in(dir.path());
    let (result, output) = run(&mut session, "cat a.txt");
    assert!(matches!(result, Ok(Flow::Continue)));
    assert_eq!(output, "line one\nline two\n");
}

#[test]
fn cat_of_a_directory_is_invalid() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();

    let mut session = session_in(dir.path());
    let (result, _) = run(&mut session, "cat sub");
    assert!(matches!(result, Err(CommandError::InvalidInput)));
}

#[test]
fn cat_of_a_missing_file_is_an_operation_failure() {
    let dir = tempdir().unwrap();
    let mut session = session_in(dir.path());
    let (result, _) = run(&mut session, "cat ghost.txt");
    assert!(matches!(result, Err(CommandError::OperationFailed(_))));
}

#[test]
fn rn_renames_within_the_directory() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), b"payload").unwrap();

    let mut session = session_in(dir.path());
    let (result, output) = run(&mut session, "rn a.txt b.txt");
    assert!(matches!(result, Ok(Flow::Continue)));
    assert_eq!(output.trim_end(), "File renamed successfully");
    assert!(!dir.path().join("a.txt").exists());
    assert_eq!(fs::read(dir.path().join("b.txt")).unwrap(), b"payload");
}

#[test]
fn rn_of_a_missing_source_is_an_operation_failure() {
    let dir = tempdir().unwrap();
    let mut session = session_in(dir.path());
    let (result, _) = run(&mut session, "rn ghost.txt b.txt");
    assert!(matches!(result, Err(CommandError::OperationFailed(_))));
}

#[test]
fn cp_reproduces_bytes_and_keeps_the_original() {
    let dir = tempdir().unwrap();
    let dest = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), b"copy me exactly").unwrap();

    let mut session = session_in(dir.path());
    let line = format!("cp a.txt {}", dest.path().display());
    let (result, output) = run(&mut session, &line);
    assert!(matches!(result, Ok(Flow::Continue)));
    assert_eq!(output.trim_end(), "File copied successfully");

    assert_eq!(
        fs::read(dest.path().join("a.txt")).unwrap(),
        b"copy me exactly"
    );
    assert!(dir.path().join("a.txt").exists());
}

#[test]
fn cp_into_a_non_directory_is_invalid() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), b"x").unwrap();
    fs::write(dir.path().join("not_a_dir"), b"y").unwrap();

    let mut session = session_in(dir.path());
    let (result, _) = run(&mut session, "cp a.txt not_a_dir");
    assert!(matches!(result, Err(CommandError::InvalidInput)));
}

#[test]
fn cp_of_a_directory_source_is_invalid() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("srcdir")).unwrap();
    fs::create_dir(dir.path().join("destdir")).unwrap();

    let mut session = session_in(dir.path());
    let (result, _) = run(&mut session, "cp srcdir destdir");
    assert!(matches!(result, Err(CommandError::InvalidInput)));
}

#[test]
fn mv_reproduces_bytes_and_removes_the_original() {
    let dir = tempdir().unwrap();
    let dest = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), b"move me").unwrap();

    let mut session = session_in(dir.path());
    let line = format!("mv a.txt {}", dest.path().display());
    let (result, output) = run(&mut session, &line);
    assert!(matches!(result, Ok(Flow::Continue)));
    assert_eq!(output.trim_end(), "File moved successfully");

    assert_eq!(fs::read(dest.path().join("a.txt")).unwrap(), b"move me");
    assert!(!dir.path().join("a.txt").exists());
}

#[cfg(unix)]
#[test]
fn mv_failure_after_copy_leaves_the_duplicate_in_place() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().unwrap();
    let dest = tempdir().unwrap();
    let locked = dir.path().join("locked");
    fs::create_dir(&locked).unwrap();
    fs::write(locked.join("a.txt"), b"duplicated").unwrap();

    // Removing write permission on the parent makes the unlink step fail
    // after the copy has already streamed.
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o555)).unwrap();

    let mut session = session_in(dir.path());
    let line = format!("mv locked/a.txt {}", dest.path().display());
    let (result, _) = run(&mut session, &line);

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    if result.is_ok() {
        // A privileged user can unlink regardless of directory permissions;
        // the failure window cannot be simulated in that environment.
        return;
    }

    assert!(matches!(result, Err(CommandError::OperationFailed(_))));
    assert_eq!(fs::read(dest.path().join("a.txt")).unwrap(), b"duplicated");
    assert!(locked.join("a.txt").exists());
}

#[test]
fn rm_deletes_the_entry() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), b"x").unwrap();

    let mut session = session_in(dir.path());
    let (result, output) = run(&mut session, "rm a.txt");
    assert!(matches!(result, Ok(Flow::Continue)));
    assert_eq!(output.trim_end(), "File deleted successfully");
    assert!(!dir.path().join("a.txt").exists());
}

#[test]
fn rm_of_a_missing_entry_is_an_operation_failure() {
    let dir = tempdir().unwrap();
    let mut session = session_in(dir.path());
    let (result, _) = run(&mut session, "rm ghost.txt");
    assert!(matches!(result, Err(CommandError::OperationFailed(_))));
}

#[test]
fn missing_arguments_fail_before_touching_the_filesystem() {
    let dir = tempdir().unwrap();
    let mut session = session_in(dir.path());

    for line in ["cat", "add", "rn a.txt", "cp a.txt", "mv a.txt", "rm"] {
        let (result, output) = run(&mut session, line);
        assert!(
            matches!(result, Err(CommandError::InvalidInput)),
            "expected invalid input for {line:?}"
        );
        assert!(output.is_empty());
    }

    // Nothing was created along the way.
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}
