use std::process::{Command, Output};

fn neuronet(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_neuronet"))
        .args(args)
        .output()
        .expect("failed to spawn neuronet")
}

#[test]
fn test_unknown_activation_exits_with_failure() {
    let out = neuronet(&["--activation", "relu", "eval", "1,2,3"]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("unsupported activation kind"),
        "stderr: {stderr}"
    );
}

#[test]
fn test_signal_count_mismatch_exits_with_failure() {
    let out = neuronet(&["--signals-count", "2", "eval", "1,2,3"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("invalid dimension"));
}

#[test]
fn test_json_eval_reports_non_finite_output() {
    // An infinite signal makes the linear sum inf, -inf or NaN whatever the weights.
    let out = neuronet(&[
        "--activation",
        "linear",
        "--signals-count",
        "2",
        "eval",
        "--json",
        "inf,0",
    ]);
    assert!(out.status.success());
    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let output = report["output"].as_str().expect("non-finite output as string");
    assert!(["NaN", "inf", "-inf"].contains(&output), "output: {output}");
    assert_eq!(report["activation"], "linear");
}

#[test]
fn test_seeded_weights_are_reproducible() {
    let first = neuronet(&["weights", "--seed", "5", "--signals-count", "4"]);
    let second = neuronet(&["--seed", "5", "--signals-count", "4", "weights"]);
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);

    let text = String::from_utf8(first.stdout).unwrap();
    let weights: Vec<f64> = text.lines().map(|l| l.parse().unwrap()).collect();
    assert_eq!(weights.len(), 4);
    assert!(weights.iter().all(|w| (-0.1..0.1).contains(w)));
}

#[test]
fn test_init_config_leaves_neuron_section_commented() {
    let out = neuronet(&["init-config"]);
    assert!(out.status.success());
    let text = String::from_utf8(out.stdout).unwrap();
    assert!(text.contains("[log]"));
    assert!(text.contains("# [neuron]"));
    assert!(!text.lines().any(|l| l.trim() == "[neuron]"));
}
