use std::path::PathBuf;

use cayley_search::enumerate;
use cayley_search::report::Structures;
use cayley_search::scenario::Request;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
struct Expected {
    count: usize,
    #[serde(default)]
    tables: Option<Vec<Vec<Vec<usize>>>>,
    #[serde(default)]
    subgroups: Option<Vec<Vec<(usize, usize)>>>,
}

#[derive(Debug, Clone, Deserialize)]
struct GoldenCase {
    request: Request,
    expected: Expected,
}

#[test]
fn golden_enumerations_match() {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("golden")
        .join("cases");

    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .expect("failed to read golden cases directory")
        .filter_map(|e| e.ok().map(|e| e.path()))
        .filter(|p| p.extension().map(|e| e == "json").unwrap_or(false))
        .collect();
    files.sort();

    assert!(!files.is_empty(), "no golden case JSONs found");

    for path in files {
        let bytes = std::fs::read(&path).expect("failed to read golden case file");
        let case: GoldenCase =
            serde_json::from_slice(&bytes).expect("failed to parse golden case JSON");

        let observed = enumerate(&case.request).unwrap();
        assert_eq!(observed.count, case.expected.count, "count mismatch for {}", path.display());

        match &observed.structures {
            Structures::Tables(tables) => {
                let rows: Vec<Vec<Vec<usize>>> = tables.iter().map(|t| t.to_rows()).collect();
                assert_eq!(
                    Some(rows),
                    case.expected.tables,
                    "table mismatch for {}",
                    path.display()
                );
            }
            Structures::Subgroups(subgroups) => {
                let sets: Vec<Vec<(usize, usize)>> = subgroups
                    .iter()
                    .map(|h| h.iter().map(|p| (p.x, p.y)).collect())
                    .collect();
                assert_eq!(
                    Some(sets),
                    case.expected.subgroups,
                    "subgroup mismatch for {}",
                    path.display()
                );
            }
        }
    }
}
