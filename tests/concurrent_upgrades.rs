/// A single registry shared by many threads, each upgrading its own baseline
mod common;

use std::thread;

use baseline_upgrade::prelude::*;
use common::baseline;
use serde_json::json;

#[test_log::test]
fn test_builtin_registry_is_shared_across_threads() {
    let registry = builtin_registry();

    let reports: Vec<UpgradeReport> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                scope.spawn(move || {
                    let mut doc = baseline(json!({ "exclude_regex": format!("dir{i}/.*") }));
                    let report = Upgrader::new(registry).upgrade(&mut doc).unwrap();
                    assert_eq!(
                        doc.get("exclude"),
                        Some(&json!({ "files": format!("dir{i}/.*"), "lines": null }))
                    );
                    report
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(reports.len(), 8);
    assert!(reports.iter().all(|r| r.to.to_string() == "0.12"));
}
