use std::process::Command;

fn swap_route() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_swap-route"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_does_not_read_configuration() {
    let output = swap_route()
        .arg("--help")
        .env("PARASWAP_API_URL", "ftp://not-http")
        .env("TIMEOUT_SECS", "0")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Usage"));
}

#[test]
fn test_invalid_environment_fails_before_any_output() {
    let output = swap_route()
        .arg("quote")
        .env("CHAIN_ID", "arbitrum-sepolia")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("CHAIN_ID"));
}
