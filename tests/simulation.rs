//! End-to-end simulation tests
//!
//! Exercises the public surface the way a simulated session would:
//! construct from layout documents, query, mutate, and read content.

use std::fs;

use tempdir::TempDir;

use simfs::{
    FileUpdate, Filesystem, FsError, LayoutDocument, NewFile, PathError, ScenarioConfig, Settings,
};

fn merge_into_empty(doc: serde_json::Value) -> Filesystem {
    let doc: LayoutDocument = serde_json::from_value(doc).unwrap();
    let mut table = Filesystem::empty(Settings::default());
    table.merge_layout(doc);
    table
}

fn data_layout() -> serde_json::Value {
    serde_json::json!({
        "disks": {"sda": {"size": 8000000, "device": "/dev/sda"}},
        "partitions": {
            "p1": {"disk": "sda", "mount": "/data", "used": 1000}
        },
        "files": {
            "/data": {
                "logs": {
                    "filetype": "folder",
                    "content": {
                        "a.log": {"filetype": "file", "size": 200}
                    }
                }
            }
        }
    })
}

fn size_of(table: &Filesystem, path: &str) -> u64 {
    table.details(path).unwrap().unwrap().size
}

#[test]
fn test_data_partition_scenario_end_to_end() {
    let mut table = merge_into_empty(data_layout());

    // after merge: mount size is partition-derived, folder size is the
    // accumulated descendant total
    assert_eq!(size_of(&table, "/data"), 1000);
    assert_eq!(size_of(&table, "/data/logs"), 200);

    // resizing the file moves the delta up to, but not across, the mount
    table
        .update_file("/data/logs/a.log", FileUpdate::size(500))
        .unwrap();
    assert_eq!(size_of(&table, "/data/logs"), 500);
    assert_eq!(size_of(&table, "/data"), 1000);

    // a full session of add/resize/remove returns to the starting point
    table.add_file("/data/cache", NewFile::folder()).unwrap();
    table
        .add_file("/data/cache/blob", NewFile::file(4096))
        .unwrap();
    assert_eq!(size_of(&table, "/data/cache"), 4096);
    table.remove_file("/data/cache", true).unwrap();
    assert!(!table.exists("/data/cache").unwrap());
    assert_eq!(size_of(&table, "/data"), 1000);
}

#[test]
fn test_queries_on_mounts_files_and_folders() {
    let table = merge_into_empty(data_layout());

    assert!(table.exists("/data").unwrap());
    assert!(table.is_folder("/data").unwrap());
    assert!(!table.is_file("/data").unwrap());

    assert!(table.is_folder("/data/logs").unwrap());
    assert!(table.is_file("/data/logs/a.log").unwrap());

    // dotted input is normalized before lookup
    assert!(table.exists("/data/logs/../logs/a.log").unwrap());
    assert!(!table.exists("/data/../x").unwrap());

    // a missing path is an absent result, not an error
    assert!(table.details("/data/nothing").unwrap().is_none());

    // relative traversal past the top level is the one hard failure
    assert!(matches!(
        table.exists("../data"),
        Err(PathError::Traversal(_))
    ));
}

#[test]
fn test_children_of_matches_on_the_parent_relation() {
    let mut table = merge_into_empty(data_layout());
    // sibling with a shared string prefix and a deeper descendant
    table.add_file("/data/logs2", NewFile::folder()).unwrap();
    table
        .add_file("/data/logs/app", NewFile::folder())
        .unwrap();
    table
        .add_file("/data/logs/app/deep.log", NewFile::file(1))
        .unwrap();

    let children = table.children_of("/data/logs").unwrap();
    assert_eq!(children, vec!["/data/logs/a.log", "/data/logs/app"]);

    let top = table.children_of("/data").unwrap();
    assert_eq!(top, vec!["/data/logs", "/data/logs2"]);
}

#[test]
fn test_scenario_construction_and_content_read() {
    let dir = TempDir::new("simfs-e2e").unwrap();

    let layout_path = dir.path().join("disks_layout.json");
    fs::write(
        &layout_path,
        serde_json::to_string(&data_layout()).unwrap(),
    )
    .unwrap();

    // content lives under files_root/<scenario_name>/
    let files_root = dir.path().join("files");
    fs::create_dir_all(files_root.join("drill")).unwrap();
    fs::write(files_root.join("drill/incident.log"), "boom\nrecovered\n").unwrap();

    let settings = Settings {
        layout_path: layout_path.to_string_lossy().to_string(),
        files_root: files_root.to_string_lossy().to_string(),
    };

    let scenario: ScenarioConfig = serde_json::from_value(serde_json::json!({
        "scenario_name": "drill",
        "partitions": {
            "p2": {"disk": "sda", "mount": "/scratch", "used": 64}
        },
        "files": {
            "/scratch": {
                "incident.log": {
                    "filetype": "file",
                    "size": 15,
                    "real_filename": "incident.log"
                }
            }
        }
    }))
    .unwrap();

    let table = Filesystem::with_scenario(&settings, scenario).unwrap();
    assert_eq!(table.scenario_name(), Some("drill"));

    // both layers are present
    assert_eq!(size_of(&table, "/data"), 1000);
    assert_eq!(size_of(&table, "/scratch"), 64);

    let lines = table.read_file("/scratch/incident.log").unwrap().unwrap();
    assert_eq!(lines, vec!["boom".to_string(), "recovered".to_string()]);

    // absent outcomes: folder, no reference, missing path
    assert_eq!(table.read_file("/data/logs").unwrap(), None);
    assert_eq!(table.read_file("/data/logs/a.log").unwrap(), None);
    assert_eq!(table.read_file("/scratch/ghost").unwrap(), None);
}

#[test]
fn test_add_layout_applies_a_second_layer() {
    let dir = TempDir::new("simfs-e2e").unwrap();
    let base_path = dir.path().join("base.json");
    fs::write(&base_path, serde_json::to_string(&data_layout()).unwrap()).unwrap();

    let extra_path = dir.path().join("extra.json");
    fs::write(
        &extra_path,
        r#"{
            "partitions": {"p1": {"disk": "sda", "mount": "/data", "used": 2000}},
            "files": {"/data": {}}
        }"#,
    )
    .unwrap();

    let settings = Settings {
        layout_path: base_path.to_string_lossy().to_string(),
        files_root: "files".to_string(),
    };
    let mut table = Filesystem::new(&settings).unwrap();
    assert_eq!(size_of(&table, "/data"), 1000);

    let outcome = table.add_layout(Some(&extra_path)).unwrap();
    assert!(outcome.issues.is_empty());
    assert_eq!(size_of(&table, "/data"), 2000);
    // entries from the first layer survive
    assert_eq!(size_of(&table, "/data/logs"), 200);
}

#[test]
fn test_mutation_failures_are_typed_and_non_destructive() {
    let mut table = merge_into_empty(data_layout());

    assert!(matches!(
        table.remove_file("/data", true),
        Err(FsError::MountPoint(_))
    ));
    assert!(matches!(
        table.remove_file("/data/logs", false),
        Err(FsError::IsAFolder(_))
    ));
    assert!(matches!(
        table.remove_file("/data/ghost", false),
        Err(FsError::NotFound(_))
    ));
    assert!(matches!(
        table.add_file("/data/logs", NewFile::folder()),
        Err(FsError::AlreadyExists(_))
    ));

    // nothing drifted
    assert_eq!(table.entry_count(), 3);
    assert_eq!(size_of(&table, "/data"), 1000);
    assert_eq!(size_of(&table, "/data/logs"), 200);
}
