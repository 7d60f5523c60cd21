use std::process::Command;

fn replay(args: &[&str]) -> serde_json::Value {
    let output = Command::new(env!("CARGO_BIN_EXE_replay"))
        .args(args)
        .output()
        .expect("failed to run replay binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    serde_json::from_str(stdout.trim()).expect("invalid json")
}

#[test]
fn replay_binary_reports_win() {
    let v = replay(&["0", "3", "1", "4", "2"]);
    assert_eq!(v["winner"], "X");
    assert_eq!(v["status"], "Player X Wins!");
    assert_eq!(v["over"], true);
    assert_eq!(v["board"][0], "X");
    assert_eq!(v["board"][5], "");
    assert_eq!(v["renders"], 5);
}

#[test]
fn replay_binary_lists_rejections() {
    let v = replay(&["0", "0", "12", "4"]);
    assert_eq!(v["accepted"], 2);
    assert_eq!(v["rejected"].as_array().map(Vec::len), Some(2));
    assert_eq!(v["rejected"][0]["index"], 0);
    assert_eq!(v["status"], "Player X's Turn");
    assert!(v["winner"].is_null());
}
