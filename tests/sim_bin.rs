use std::process::Command;

fn run_sim(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(args)
        .output()
        .expect("failed to run sim binary")
}

#[test]
fn sim_binary_smoke() {
    let output = run_sim(&["--seed", "3"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["seed"], 3);
    assert!(v["status"].is_string());
    assert_ne!(v["status"], "Active");
    assert!(v["won"].is_boolean());
    assert!(v["turns"].as_u64().unwrap() > 0);
    assert!(v["limits"]["max_width"].is_u64());
}

#[test]
fn sim_binary_is_deterministic() {
    let a = run_sim(&["--seed", "11", "--width", "6", "--height", "5", "--mines", "4"]);
    let b = run_sim(&["--seed", "11", "--width", "6", "--height", "5", "--mines", "4"]);
    assert!(a.status.success());
    assert_eq!(a.stdout, b.stdout);
}

#[test]
fn sim_binary_rejects_too_many_mines() {
    let output = run_sim(&["--width", "3", "--height", "3", "--mines", "9"]);
    assert!(!output.status.success());
}
