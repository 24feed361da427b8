use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use cayley_search::jobs::{load_job_file, run_batch, TaskStatus};
use cayley_search::scenario::StructureKind;

fn unique_temp_dir(name: &str) -> PathBuf {
    let base = std::env::temp_dir().join("cayley_search_tests").join(name);
    let _ = fs::create_dir_all(&base);

    let pid = std::process::id();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();

    for i in 0..1000u32 {
        let p = base.join(format!("{pid}-{nanos}-{i}"));
        if fs::create_dir(&p).is_ok() {
            return p;
        }
    }

    panic!(
        "failed to create a unique temp dir under {}",
        base.display()
    );
}

#[test]
fn a_bad_task_does_not_stop_the_batch() {
    let dir = unique_temp_dir("batch_isolation");
    fs::write(dir.join("InputS.txt"), "2\n").unwrap();
    fs::write(dir.join("InputH.txt"), "0 3\n").unwrap();
    fs::write(
        dir.join("jobs.json"),
        r#"{
          "tasks": [
            { "kind": "semigroups", "input": "InputS.txt", "output": "out/s.txt" },
            { "kind": "abelian-groups", "n": -1, "output": "out/a.txt" },
            { "kind": "subgroups", "input": "InputH.txt", "output": "out/h.txt" },
            { "kind": "subgroups", "m": 2, "n": 2, "output": "out/h.json", "format": "json" },
            { "kind": "abelian-groups", "input": "missing.txt", "output": "out/missing.txt" }
          ]
        }"#,
    )
    .unwrap();

    let job = load_job_file(&dir.join("jobs.json")).unwrap();
    let outcomes = run_batch(&job, &dir);
    assert_eq!(outcomes.len(), 5);

    assert!(matches!(outcomes[0].status, TaskStatus::Completed { count: 8 }));
    assert!(matches!(outcomes[1].status, TaskStatus::Rejected { .. }));
    assert!(matches!(outcomes[2].status, TaskStatus::Rejected { .. }));
    assert!(matches!(outcomes[3].status, TaskStatus::Completed { count: 5 }));
    assert!(matches!(outcomes[4].status, TaskStatus::Rejected { .. }));

    let s = fs::read_to_string(dir.join("out/s.txt")).unwrap();
    assert!(s.ends_with("The total number of associative operations is 8\n"));

    let a = fs::read_to_string(dir.join("out/a.txt")).unwrap();
    assert_eq!(a, format!("{}\n", StructureKind::AbelianGroups.invalid_input_message()));

    let h = fs::read_to_string(dir.join("out/h.txt")).unwrap();
    assert_eq!(h, format!("{}\n", StructureKind::Subgroups.invalid_input_message()));

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.join("out/h.json")).unwrap()).unwrap();
    assert_eq!(json["count"], 5);

    let missing = fs::read_to_string(dir.join("out/missing.txt")).unwrap();
    assert_eq!(
        missing,
        format!("{}\n", StructureKind::AbelianGroups.invalid_input_message())
    );
}

#[test]
fn default_output_names_land_next_to_the_job_file() {
    let dir = unique_temp_dir("batch_defaults");
    fs::write(
        dir.join("jobs.json"),
        r#"{ "tasks": [ { "kind": "abelian-groups", "n": 3, "identity_at_zero": true } ] }"#,
    )
    .unwrap();

    let job = load_job_file(&dir.join("jobs.json")).unwrap();
    let outcomes = run_batch(&job, &dir);
    assert!(outcomes[0].is_completed());
    assert_eq!(outcomes[0].output, dir.join("abeliangroups_output.txt"));

    let text = fs::read_to_string(dir.join("abeliangroups_output.txt")).unwrap();
    assert_eq!(
        text,
        "Operation table number 1:\n\
         [ a₁ a₂ a₃ ]\n\
         [ a₂ a₃ a₁ ]\n\
         [ a₃ a₁ a₂ ]\n\
         \n\
         The total number of Abelian Groups is 1\n"
    );
}

#[test]
fn malformed_job_files_are_parse_errors() {
    let dir = unique_temp_dir("batch_malformed");
    fs::write(dir.join("jobs.json"), r#"{ "tasks": [ { "kind": "groups" } ] }"#).unwrap();
    let err = load_job_file(&dir.join("jobs.json")).unwrap_err();
    assert!(err.is_invalid_input());

    assert!(load_job_file(&dir.join("absent.json")).is_err());
}
