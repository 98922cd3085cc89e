use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn rust_ff() -> Command {
    Command::cargo_bin("rust-ff").unwrap()
}

#[test]
fn test_find_in_empty_dir() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    rust_ff()
        .arg("-m")
        .arg("files")
        .arg("")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    Ok(())
}

#[test]
fn test_files_with_end_anchor() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let root = dir.path().join("x");
    std::fs::create_dir_all(root.join("a"))?;
    std::fs::File::create(root.join("a/foo.log"))?;
    std::fs::File::create(root.join("bar.log"))?;
    std::fs::File::create(root.join("bar.log.old"))?;

    let output = rust_ff()
        .args(["-m", "files", "-E", "*.log"])
        .arg(&root)
        .assert()
        .success();

    let stdout = String::from_utf8(output.get_output().stdout.clone())?;
    let expected = format!(
        "{}\n{}\n",
        root.join("bar.log").display(),
        root.join("a/foo.log").display()
    );
    assert_eq!(stdout, expected);

    Ok(())
}

#[test]
fn test_substring_match_by_default() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    std::fs::File::create(dir.path().join("a.txt.bak"))?;
    std::fs::File::create(dir.path().join("notes.md"))?;

    rust_ff()
        .args(["-m", "files", "*.txt"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("a.txt.bak"))
        .stdout(predicate::str::contains("notes.md").not());

    Ok(())
}

#[test]
fn test_print0_and_prefix() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    std::fs::create_dir(dir.path().join("sub"))?;
    std::fs::File::create(dir.path().join("file"))?;

    let output = rust_ff()
        .args(["-0", "--prefix", "-v", "-B", "."])
        .arg(dir.path())
        .assert()
        .success();

    let stdout = String::from_utf8(output.get_output().stdout.clone())?;
    let records: Vec<&str> = stdout.split_terminator('\0').collect();
    assert!(records.contains(&format!("f: {}", dir.path().join("file").display()).as_str()));
    assert!(records.contains(&format!("d: {}", dir.path().join("sub").display()).as_str()));
    assert!(!stdout.contains('\n'));

    Ok(())
}

#[test]
fn test_regex_mode_ignore_case() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    std::fs::File::create(dir.path().join("README.md"))?;
    std::fs::File::create(dir.path().join("main.rs"))?;

    rust_ff()
        .args(["-g", "-i", "-m", "files", r"^readme\.(md|txt)$"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("README.md"))
        .stdout(predicate::str::contains("main.rs").not());

    Ok(())
}

#[cfg(unix)]
#[test]
fn test_exec_with_placeholders() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    std::fs::File::create(dir.path().join("data.csv"))?;

    rust_ff()
        .args(["-m", "files", "--no-display", "--verbose-exec", "-E", "*.csv"])
        .arg(dir.path())
        .args(["-x", "cp {path} {dirname}/backup-{basename}"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cp "));

    assert!(dir.path().join("backup-data.csv").exists());

    Ok(())
}

#[cfg(unix)]
#[test]
fn test_failing_command_does_not_stop_traversal() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    std::fs::File::create(dir.path().join("one"))?;
    std::fs::File::create(dir.path().join("two"))?;

    rust_ff()
        .args(["-m", "files", ""])
        .arg(dir.path())
        .args(["-x", "false"])
        .assert()
        .success()
        .stdout(predicate::str::contains("one"))
        .stdout(predicate::str::contains("two"));

    Ok(())
}

#[cfg(unix)]
#[test]
fn test_interactive_exec_reads_stdin() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    std::fs::File::create(dir.path().join("keep"))?;

    rust_ff()
        .args(["-m", "files", "--interactive-exec", "keep"])
        .arg(dir.path())
        .args(["-x", "rm {path}"])
        .write_stdin("what\nn\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Execute command on"));

    assert!(dir.path().join("keep").exists());

    Ok(())
}

#[cfg(unix)]
#[test]
fn test_exec_quoted_command_string() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    std::fs::File::create(dir.path().join("data.csv"))?;

    rust_ff()
        .args(["-m", "files", "--no-display", "-x", "cp {path} '{path}.my bak'", "csv"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(dir.path().join("data.csv.my bak").exists());

    Ok(())
}

#[cfg(target_os = "linux")]
#[test]
fn test_exec_on_non_utf8_name() -> Result<(), Box<dyn std::error::Error>> {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let dir = tempdir()?;
    let bad = dir.path().join(OsStr::from_bytes(b"bad\xffname.txt"));
    std::fs::File::create(&bad)?;

    let output = rust_ff()
        .args(["-m", "files", "name"])
        .arg(dir.path())
        .args(["-x", "rm {path}"])
        .assert()
        .success();

    let mut expected = bad.as_os_str().as_bytes().to_vec();
    expected.push(b'\n');
    assert_eq!(output.get_output().stdout, expected);
    assert!(!bad.exists());

    Ok(())
}

#[cfg(target_os = "linux")]
#[test]
fn test_parent_dir_source() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let root = dir.path().join("x");
    std::fs::create_dir_all(root.join("a"))?;
    std::fs::File::create(root.join("bar.log"))?;

    rust_ff()
        .current_dir(root.join("a"))
        .args(["-m", "dirs", "-B", "-E", "x", ".."])
        .assert()
        .success()
        .stdout(format!("{}\n", root.display()));

    rust_ff()
        .current_dir(root.join("a"))
        .args(["-m", "files", "bar", ".."])
        .assert()
        .success()
        .stdout(format!("{}\n", root.join("bar.log").display()));

    Ok(())
}

#[test]
fn test_missing_pattern() {
    rust_ff()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Pattern is missing"));
}

#[test]
fn test_invalid_source() {
    rust_ff()
        .args(["x", "/nonexistent/rust-ff/source"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("doesn't exist or is not a directory"));
}

#[test]
fn test_invalid_mode() {
    rust_ff()
        .args(["-m", "links", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Mode must be one of"));
}

#[test]
fn test_invalid_regex() {
    rust_ff()
        .args(["-g", "(unclosed"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid pattern"));
}

#[test]
fn test_help() {
    rust_ff()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--exec"));
}

#[cfg(unix)]
#[test]
fn test_permission_error() -> Result<(), Box<dyn std::error::Error>> {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir()?;
    let restricted_dir = dir.path().join("restricted");
    std::fs::create_dir(&restricted_dir)?;
    std::fs::File::create(dir.path().join("visible.txt"))?;

    let mut perms = std::fs::metadata(&restricted_dir)?.permissions();
    perms.set_mode(0o000);
    std::fs::set_permissions(&restricted_dir, perms)?;

    rust_ff()
        .args(["-m", "files", "visible"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("visible.txt"));

    let mut perms = std::fs::metadata(&restricted_dir)?.permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&restricted_dir, perms)?;

    Ok(())
}
