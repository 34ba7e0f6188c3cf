use fsim_core::pset::{Parameter, Pset};
use fsim_core::rng::{EngineKind, SeedEntry};
use fsim_core::InputTag;
use fsim_lint::lint_process;
use fsim_process::{demo_process, tracker_hit_process, validation_process};

fn check<'a>(report: &'a fsim_lint::LintReport, name: &str) -> &'a fsim_lint::LintCheck {
    report
        .checks
        .iter()
        .find(|check| check.name == name)
        .unwrap_or_else(|| panic!("missing check {name}"))
}

#[test]
fn built_in_presets_lint_clean() {
    for process in [
        demo_process(),
        tracker_hit_process(),
        validation_process().unwrap(),
    ] {
        let report = lint_process(&process);
        assert!(report.is_ok(), "{:?}", report);
        assert_eq!(report.checks.len(), 4);
    }
}

#[test]
fn validation_report_notes_shared_seeds_without_failing() {
    let report = lint_process(&validation_process().unwrap());
    let coverage = check(&report, "seed-coverage");
    assert!(coverage.ok);
    assert!(coverage.detail.contains("shared seeds"));
    assert!(coverage.detail.contains("918273"));
}

#[test]
fn broken_layer_profile_fails_the_geometry_check() {
    let mut process = demo_process();
    let producer = process.producers.get_mut("fastSimProducer").unwrap();
    let detector = producer.params.get_pset_mut("detectorDefinition").unwrap();
    // One thickness bin too many for two limits.
    let mut bad = Pset::new();
    bad.set("radius", 4.0);
    bad.set("limits", vec![0.0, 10.0]);
    bad.set("thickness", vec![0.1, 0.2]);
    detector.set("BarrelLayers", vec![bad]);

    let report = lint_process(&process);
    assert!(!report.is_ok());
    let profiles = check(&report, "layer-profiles");
    assert!(!profiles.ok);
    assert!(profiles.detail.contains("geom-profile-length"));
}

#[test]
fn orphan_seed_entry_fails_coverage() {
    let mut process = demo_process();
    process
        .random_seeds
        .set("ghostModule", SeedEntry::new(1, EngineKind::TRandom3));
    let report = lint_process(&process);
    let coverage = check(&report, "seed-coverage");
    assert!(!coverage.ok);
    assert!(coverage.detail.contains("ghostModule"));
}

#[test]
fn unregistered_product_instance_fails_tag_check() {
    let mut process = demo_process();
    let producer = process.producers.get_mut("fastSimProducer").unwrap();
    producer.params.insert(
        "feedback",
        Parameter::tracked(InputTag::with_instance("fastSimProducer", "NoSuchHits")),
    );
    let report = lint_process(&process);
    let tags = check(&report, "input-tags");
    assert!(!tags.ok);
    assert!(tags.detail.contains("NoSuchHits"));
}

#[test]
fn tags_naming_external_modules_are_ignored() {
    // generatorSmeared is produced outside this process; the demo preset
    // references it and must still lint clean.
    let process = demo_process();
    let report = lint_process(&process);
    assert!(check(&report, "input-tags").ok);
}

#[test]
fn schedule_with_undefined_path_fails() {
    let mut process = demo_process();
    process.set_schedule(vec!["demo", "missing_step"]);
    let report = lint_process(&process);
    let schedule = check(&report, "schedule-refs");
    assert!(!schedule.ok);
    assert!(schedule.detail.contains("missing_step"));
}

#[test]
fn report_serializes_for_tooling() {
    let report = lint_process(&demo_process());
    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"status\":\"ok\""));
    assert!(json.contains("layer-profiles"));
}
