use std::error::Error;
use std::fs;
use std::process::{Command, Output};
use tempfile::tempdir;

fn rsacrypt_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_rsacrypt"))
}

fn run(args: &[&str]) -> Output {
    rsacrypt_cmd()
        .args(args)
        .output()
        .expect("failed to run rsacrypt binary")
}

#[test]
fn version_flag_prints_build_information() {
    let output = run(&["--version"]);
    assert!(
        output.status.success(),
        "version command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.starts_with("rsacrypt "),
        "unexpected version line: {}",
        stdout
    );
    assert!(stdout.contains("build"), "missing build value: {}", stdout);
}

#[test]
fn running_without_subcommand_displays_help() {
    let output = rsacrypt_cmd()
        .output()
        .expect("failed to run rsacrypt binary");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage: rsacrypt"), "help missing usage: {}", stdout);
    assert!(stdout.contains("generate-keys"), "help missing commands: {}", stdout);
}

#[test]
fn unknown_subcommand_fails() {
    let output = run(&["scramble", "1", "2"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn invalid_number_fails() {
    let output = run(&["generate-keys", "five", "11"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn find_prime_prints_each_candidate() {
    let output = run(&["find-prime", "24"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout,
        "Testing 25... not prime\nTesting 27... not prime\nTesting 29... is a prime\n"
    );
}

#[test]
fn find_prime_reports_exhaustion() {
    let output = run(&["p", "4294967294"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Could not find a prime"), "stderr: {}", stderr);
}

#[test]
fn generate_keys_prints_key_pair() {
    let output = run(&["generate-keys", "5", "11"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Public key:  e = 3, n = 55"), "stdout: {}", stdout);
    assert!(stdout.contains("Private key: d = 27"), "stdout: {}", stdout);
}

#[test]
fn generate_keys_json_output() -> Result<(), Box<dyn Error>> {
    let output = run(&["g", "61", "53", "--json"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["public"]["e"], 7);
    assert_eq!(value["public"]["n"], 3233);
    assert_eq!(value["private"]["d"], 1783);
    Ok(())
}

#[test]
fn generate_keys_rejects_overflowing_modulus() {
    let output = run(&["generate-keys", "65537", "65539"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("too big"), "stderr: {}", stderr);
}

#[test]
fn cli_end_to_end_flow() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("letter.txt");
    let original = b"Dear reader, this letter travels in 11-bit blocks.\n".to_vec();
    fs::write(&file, &original)?;
    let path = file.to_str().unwrap();

    let encrypt = run(&["encrypt", "7", "3233", path]);
    assert!(
        encrypt.status.success(),
        "encrypt failed: {}",
        String::from_utf8_lossy(&encrypt.stderr)
    );
    assert!(String::from_utf8(encrypt.stdout)?.contains("Encrypted"));
    assert_ne!(fs::read(&file)?, original);

    let info = run(&["info", path, "--modulus", "3233"]);
    let info_stdout = String::from_utf8(info.stdout)?;
    assert!(info_stdout.contains(&format!("Recorded length: {} bytes", original.len())));
    assert!(info_stdout.contains("Result: passed"));

    let decrypt = run(&["decrypt", "1783", "3233", path, "--atomic"]);
    assert!(
        decrypt.status.success(),
        "decrypt failed: {}",
        String::from_utf8_lossy(&decrypt.stderr)
    );
    assert_eq!(fs::read(&file)?, original);

    Ok(())
}

#[test]
fn decrypt_corrupted_file_fails() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("broken.bin");
    fs::write(&file, [0xFFu8; 12])?;

    let output = run(&["d", "27", "55", file.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("corrupted"), "stderr: {}", stderr);
    assert_eq!(fs::read(&file)?, vec![0xFFu8; 12]);

    Ok(())
}

#[test]
fn encrypt_missing_file_fails() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nothing.txt");
    let output = run(&["encrypt", "3", "55", missing.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("Error:"));
}
