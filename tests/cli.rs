//! Integration tests for top-level CLI behavior.

use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};

use tfattach::state::parse_document;

fn run_tfattach(args: &[&str]) -> std::process::Output {
    let bin = env!("CARGO_BIN_EXE_tfattach");
    Command::new(bin).args(args).output().expect("failed to run tfattach binary")
}

/// A realistic two-module document. The instance/volume pair lives in the
/// second module, so commands must scan past the first one to find it.
const SAMPLE_STATE: &str = r#"{
    "version": 3,
    "terraform_version": "0.11.7",
    "serial": 2,
    "lineage": "7b2a9c55-f1d2-4b0e-8c1a-0e4f6a7b8c9d",
    "modules": [
        {
            "path": ["root"],
            "outputs": {},
            "resources": {
                "aws_security_group.other": {
                    "type": "aws_security_group",
                    "depends_on": [],
                    "primary": {
                        "id": "sg-00000000",
                        "attributes": {"id": "sg-00000000"},
                        "meta": {},
                        "tainted": false
                    },
                    "deposed": []
                }
            },
            "depends_on": []
        },
        {
            "path": ["root", "web"],
            "outputs": {},
            "resources": {
                "aws_instance.mysrv": {
                    "type": "aws_instance",
                    "depends_on": [],
                    "primary": {
                        "id": "i-11111111",
                        "attributes": {"id": "i-11111111"},
                        "meta": {},
                        "tainted": false
                    },
                    "deposed": [],
                    "provider": "provider.aws"
                },
                "aws_ebs_volume.mysrv_dsk0": {
                    "type": "aws_ebs_volume",
                    "depends_on": [],
                    "primary": {
                        "id": "vol-22222222",
                        "attributes": {"id": "vol-22222222"},
                        "meta": {},
                        "tainted": false
                    },
                    "deposed": []
                }
            },
            "depends_on": []
        }
    ]
}"#;

#[test]
fn show_prints_the_wrapped_record() {
    let output = run_tfattach(&[
        "show",
        "i-abc123",
        "mysrv_dsk0",
        "vol-123abc",
        "mysrv_dsk0_att",
        "/dev/sdg",
    ]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(output.status.success());
    assert!(stderr.is_empty());

    let expected = r#"{
    "aws_volume_attachment.mysrv_dsk0_att": {
        "type": "aws_volume_attachment",
        "depends_on": [
            "aws_ebs_volume.mysrv_dsk0"
        ],
        "primary": {
            "id": "vai-1474069414",
            "attributes": {
                "device_name": "/dev/sdg",
                "id": "vai-1474069414",
                "instance_id": "i-abc123",
                "volume_id": "vol-123abc"
            },
            "meta": {},
            "tainted": false
        },
        "deposed": []
    }
}
"#;
    assert_eq!(stdout, expected);
}

#[test]
fn import_injects_and_rewrites_the_state_file() {
    let dir = std::env::temp_dir().join("tfattach_cli_import");
    fs::create_dir_all(&dir).unwrap();
    let input = dir.join("in.tfstate");
    let output_path = dir.join("out.tfstate");
    fs::write(&input, SAMPLE_STATE).unwrap();

    let output = run_tfattach(&[
        "import",
        "-i",
        input.to_str().unwrap(),
        "-o",
        output_path.to_str().unwrap(),
        "mysrv",
        "mysrv_dsk0",
        "mysrv_dsk0_attch",
        "/dev/sdg",
    ]);

    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let written = fs::read_to_string(&output_path).unwrap();
    assert!(written.ends_with("}\n"));

    let doc = parse_document(&written, "out.tfstate").unwrap();
    assert_eq!(doc.version, 3);
    assert_eq!(doc.serial, 2);
    assert_eq!(doc.modules.len(), 2);
    assert!(doc.modules[0].resources.contains_key("aws_security_group.other"));

    let record = &doc.modules[1].resources["aws_volume_attachment.mysrv_dsk0_attch"];
    assert_eq!(record.kind, "aws_volume_attachment");
    assert_eq!(record.dependencies, vec!["aws_ebs_volume.mysrv_dsk0"]);
    assert_eq!(record.primary.id, "vai-1828529282");
    assert_eq!(record.primary.attributes["instance_id"], "i-11111111");
    assert_eq!(record.primary.attributes["volume_id"], "vol-22222222");
    assert_eq!(record.primary.attributes["device_name"], "/dev/sdg");

    // Cleanup
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn import_defaults_to_the_conventional_file_in_place() {
    let dir = std::env::temp_dir().join("tfattach_cli_import_default");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("terraform.tfstate"), SAMPLE_STATE).unwrap();

    let bin = env!("CARGO_BIN_EXE_tfattach");
    let output = Command::new(bin)
        .args(["import", "mysrv", "mysrv_dsk0", "mysrv_dsk0_attch", "/dev/sdg"])
        .current_dir(&dir)
        .output()
        .expect("failed to run tfattach binary");

    assert!(output.status.success());
    let written = fs::read_to_string(dir.join("terraform.tfstate")).unwrap();
    assert!(written.contains("aws_volume_attachment.mysrv_dsk0_attch"));
    assert!(written.contains("vai-1828529282"));

    // Cleanup
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn reimporting_the_same_attachment_is_idempotent() {
    let dir = std::env::temp_dir().join("tfattach_cli_import_idem");
    fs::create_dir_all(&dir).unwrap();
    let input = dir.join("in.tfstate");
    let first = dir.join("first.tfstate");
    let second = dir.join("second.tfstate");
    fs::write(&input, SAMPLE_STATE).unwrap();

    let output = run_tfattach(&[
        "import",
        "-i",
        input.to_str().unwrap(),
        "-o",
        first.to_str().unwrap(),
        "mysrv",
        "mysrv_dsk0",
        "mysrv_dsk0_attch",
        "/dev/sdg",
    ]);
    assert!(output.status.success());

    let output = run_tfattach(&[
        "import",
        "-i",
        first.to_str().unwrap(),
        "-o",
        second.to_str().unwrap(),
        "mysrv",
        "mysrv_dsk0",
        "mysrv_dsk0_attch",
        "/dev/sdg",
    ]);
    assert!(output.status.success());

    assert_eq!(fs::read_to_string(&first).unwrap(), fs::read_to_string(&second).unwrap());

    // Cleanup
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn import_fails_closed_when_no_module_has_the_pair() {
    let dir = std::env::temp_dir().join("tfattach_cli_import_missing");
    fs::create_dir_all(&dir).unwrap();
    let input = dir.join("in.tfstate");
    let output_path = dir.join("out.tfstate");
    fs::write(&input, SAMPLE_STATE).unwrap();

    let output = run_tfattach(&[
        "import",
        "-i",
        input.to_str().unwrap(),
        "-o",
        output_path.to_str().unwrap(),
        "mysrv",
        "missing_disk",
        "mysrv_dsk0_attch",
        "/dev/sdg",
    ]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("aws_instance.mysrv"));
    assert!(stderr.contains("aws_ebs_volume.missing_disk"));
    assert!(!output_path.exists());
    assert_eq!(fs::read_to_string(&input).unwrap(), SAMPLE_STATE);

    // Cleanup
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn import_streams_through_stdin_and_stdout() {
    let bin = env!("CARGO_BIN_EXE_tfattach");
    let args =
        ["import", "-i", "-", "-o", "-", "mysrv", "mysrv_dsk0", "mysrv_dsk0_attch", "/dev/sdg"];
    let mut child = Command::new(bin)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn tfattach binary");

    child
        .stdin
        .take()
        .expect("stdin handle")
        .write_all(SAMPLE_STATE.as_bytes())
        .expect("failed to write stdin");

    let output = child.wait_with_output().expect("failed to wait for tfattach binary");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    let doc = parse_document(&stdout, "standard output").unwrap();
    assert!(doc.modules[1].resources.contains_key("aws_volume_attachment.mysrv_dsk0_attch"));
}

#[test]
fn diff_previews_changes_without_writing() {
    let dir = std::env::temp_dir().join("tfattach_cli_diff");
    fs::create_dir_all(&dir).unwrap();
    let input = dir.join("in.tfstate");
    fs::write(&input, SAMPLE_STATE).unwrap();

    let output = run_tfattach(&[
        "diff",
        "-i",
        input.to_str().unwrap(),
        "-c",
        "no",
        "mysrv",
        "mysrv_dsk0",
        "mysrv_dsk0_attch",
        "/dev/sdg",
    ]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(
        stdout.contains("+ modules[1].resources[\"aws_volume_attachment.mysrv_dsk0_attch\"]: {")
    );
    assert!(stdout.contains("vai-1828529282"));
    assert_eq!(fs::read_to_string(&input).unwrap(), SAMPLE_STATE);

    // Cleanup
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn diff_reports_no_changes_once_the_record_exists() {
    let dir = std::env::temp_dir().join("tfattach_cli_diff_clean");
    fs::create_dir_all(&dir).unwrap();
    let input = dir.join("in.tfstate");
    let imported = dir.join("imported.tfstate");
    fs::write(&input, SAMPLE_STATE).unwrap();

    let output = run_tfattach(&[
        "import",
        "-i",
        input.to_str().unwrap(),
        "-o",
        imported.to_str().unwrap(),
        "mysrv",
        "mysrv_dsk0",
        "mysrv_dsk0_attch",
        "/dev/sdg",
    ]);
    assert!(output.status.success());

    let output = run_tfattach(&[
        "diff",
        "-i",
        imported.to_str().unwrap(),
        "-c",
        "no",
        "mysrv",
        "mysrv_dsk0",
        "mysrv_dsk0_attch",
        "/dev/sdg",
    ]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert_eq!(stdout, "No changes.\n");

    // Cleanup
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn help_lists_the_subcommands() {
    let output = run_tfattach(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("show"));
    assert!(stdout.contains("import"));
    assert!(stdout.contains("diff"));
}

#[test]
fn import_without_resource_names_shows_usage_error() {
    let output = run_tfattach(&["import"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("required"));
    assert!(stderr.contains("INSTANCE_NAME"));
}

#[test]
fn invalid_subcommand_exits_with_error() {
    let output = run_tfattach(&["nonsense"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("unrecognized subcommand"));
}
