use assert_cmd::Command;

fn probe(args: &[&str]) -> (bool, String, String) {
    let output = Command::cargo_bin("koushu-probe")
        .expect("binary exists")
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run koushu-probe");
    (
        output.status.success(),
        String::from_utf8_lossy(&output.stdout).into_owned(),
        String::from_utf8_lossy(&output.stderr).into_owned(),
    )
}

#[test]
fn startpos_lists_thirty_moves() {
    let (ok, stdout, _) = probe(&[]);
    assert!(ok);
    assert!(stdout.contains("legal moves (30):"));
    assert!(stdout.contains("terminal: no"));
    assert!(stdout.contains("sfen: lnsgkgsnl/1r5b1/ppppppppp/9/9/9/PPPPPPPPP/1B5R1/LNSGKGSNL b - 1"));
}

#[test]
fn replayed_mate_is_reported() {
    let (ok, stdout, _) = probe(&[
        "7g7f", "3c3d", "8h2b+", "7a6b", "2b3c", "4a4b", "B*2d", "3a2b", "3c4b",
    ]);
    assert!(ok);
    assert!(stdout.contains("check: yes (4b)"));
    assert!(stdout.contains("terminal: yes (mate)"));
    assert!(stdout.contains("legal moves (0):"));
}

#[test]
fn illegal_move_fails_with_reason() {
    let (ok, _, stderr) = probe(&["7g7e"]);
    assert!(!ok);
    assert!(stderr.contains("move 1: 7g7e is illegal"));
    assert!(stderr.contains("7e is not a legal destination"));
}

#[test]
fn from_square_lists_destinations() {
    let (ok, stdout, _) = probe(&["--from", "2h"]);
    assert!(ok);
    assert!(stdout.contains("destinations from 2h (6):"));
}

#[test]
fn json_report() {
    let (ok, stdout, _) = probe(&["--json", "7g7f"]);
    assert!(ok);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid json");
    assert_eq!(value["position"]["turn"], "backward");
    assert_eq!(value["legal"].as_array().map(|a| a.len()), Some(30));
}

#[test]
fn pawn_drop_mate_rule_flag() {
    let sfen = "7lk/9/7G1/9/9/9/9/9/4K4 b P 1";
    let (ok, _, _) = probe(&["--sfen", sfen, "P*1b"]);
    assert!(ok);

    let (ok, _, stderr) = probe(&["--sfen", sfen, "--forbid-pawn-drop-mate", "P*1b"]);
    assert!(!ok);
    assert!(stderr.contains("P*1b is illegal"));
}
