use chrono::NaiveTime;
use panelpi::replay::{replay_snapshots, ReplaySummary};
use panelpi::{Config, FileInfo};
use panelpi_status::FixedClock;
use std::io::{BufReader, Write};
use tempfile::TempDir;

#[test]
fn test_replay_with_settings_file() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("panel.toml");
    std::fs::write(
        &config_path,
        "[display]\nunknown_text = \"--\"\n\n[speed_factor]\nmin = 50.0\nmax = 150.0\n",
    )
    .unwrap();
    let config = Config::load_from_file(&config_path).unwrap();

    let input_path = dir.path().join("session.jsonl");
    let mut input = std::fs::File::create(&input_path).unwrap();
    writeln!(input, r#"{{"status":"A","fractionPrinted":42.5,"params":{{"speedFactor":180}}}}"#).unwrap();
    writeln!(input, r#"{{"status":"I"}}"#).unwrap();
    drop(input);

    let file = FileInfo::from_json(r#"{"fileName":"clip.gcode","size":2048,"filament":[]}"#).unwrap();
    let clock = FixedClock(NaiveTime::from_hms_opt(23, 59, 0).unwrap());
    let mut output = Vec::new();
    let summary = replay_snapshots(
        BufReader::new(std::fs::File::open(&input_path).unwrap()),
        Some(file),
        &config,
        Box::new(clock),
        &mut output,
    )
    .unwrap();
    assert_eq!(summary, ReplaySummary { applied: 2, skipped: 0 });

    let frames: Vec<serde_json::Value> = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(frames[0]["display"]["progress"]["label"], "42.5%");
    assert_eq!(frames[0]["display"]["durations"]["print"], "--");
    assert_eq!(frames[0]["display"]["file"]["size"], "2.0 KB");
    assert_eq!(frames[0]["display"]["file"]["filament_usage"], "--");
    assert_eq!(frames[0]["controls"]["start_stop"]["label"], "Stop Print");
    assert_eq!(frames[1]["controls"]["pause_resume"]["enabled"], false);
    assert_eq!(frames[1]["controls"]["start_stop"]["label"], "Print Another");
}
