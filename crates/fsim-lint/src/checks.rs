//! The individual consistency checks and their driver.

use std::collections::BTreeSet;

use fsim_geom::Geometry;
use fsim_process::Process;

use crate::report::{LintCheck, LintReport};

/// Runs every check against the process and collects the report.
pub fn lint_process(process: &Process) -> LintReport {
    LintReport::from_checks(vec![
        check_layer_profiles(process),
        check_seed_coverage(process),
        check_input_tags(process),
        check_schedule_refs(process),
    ])
}

/// Every detector definition carried by a producer must assemble into a
/// valid geometry: profile shapes, non-negative thickness, inside-out
/// ordering.
fn check_layer_profiles(process: &Process) -> LintCheck {
    let name = "layer-profiles";
    let mut findings = Vec::new();
    let mut inspected = 0usize;
    for (label, producer) in &process.producers {
        for key in ["detectorDefinition", "detectorLayers"] {
            if !producer.params.exists(key) {
                continue;
            }
            inspected += 1;
            let detector = match producer.params.get_pset(key) {
                Ok(detector) => detector,
                Err(err) => {
                    findings.push(format!("{label}.{key}: {}", err.info()));
                    continue;
                }
            };
            if let Err(err) = Geometry::from_pset(detector) {
                findings.push(format!("{label}.{key}: {}", err.info()));
            }
        }
    }
    if !findings.is_empty() {
        return LintCheck::fail(name, findings.join("; "));
    }
    LintCheck::pass(
        name,
        format!("{inspected} detector definition(s) assemble cleanly"),
    )
}

/// Every seed-table label must name an instantiated module. Shared seed
/// values are reported for information only; the source tables share them
/// on purpose.
fn check_seed_coverage(process: &Process) -> LintCheck {
    let name = "seed-coverage";
    let uncovered: Vec<&str> = process
        .random_seeds
        .entries
        .keys()
        .filter(|label| !process.is_instantiated(label))
        .map(String::as_str)
        .collect();
    if !uncovered.is_empty() {
        return LintCheck::fail(
            name,
            format!("seed entries without a module: {}", uncovered.join(", ")),
        );
    }

    let scheduled: BTreeSet<&str> = process
        .paths
        .values()
        .flat_map(|path| path.modules.iter().map(String::as_str))
        .collect();
    let mut notes = vec![format!(
        "{} seed entries cover instantiated modules",
        process.random_seeds.entries.len()
    )];
    let idle: Vec<&str> = process
        .random_seeds
        .entries
        .keys()
        .map(String::as_str)
        .filter(|label| !scheduled.contains(label))
        .collect();
    if !idle.is_empty() {
        notes.push(format!("not referenced from any path: {}", idle.join(", ")));
    }
    let shared = process.random_seeds.shared_seeds();
    if !shared.is_empty() {
        let rendered: Vec<String> = shared
            .iter()
            .map(|(seed, labels)| format!("{seed} <- {}", labels.join("/")))
            .collect();
        notes.push(format!("shared seeds (intentional): {}", rendered.join(", ")));
    }
    LintCheck::pass(name, notes.join("; "))
}

/// Input tags pointing at a producer defined in this process must use a
/// product instance that producer registers. Tags naming modules defined
/// elsewhere are out of scope.
fn check_input_tags(process: &Process) -> LintCheck {
    let name = "input-tags";
    let mut findings = Vec::new();
    let mut checked = 0usize;
    for (location, tag) in process.collect_input_tags() {
        let Some(producer) = process.producers.get(&tag.label) else {
            continue;
        };
        checked += 1;
        if !producer.registers(&tag.instance) {
            findings.push(format!(
                "{location}: {} does not register instance {:?}",
                tag.label, tag.instance
            ));
        }
    }
    if !findings.is_empty() {
        return LintCheck::fail(name, findings.join("; "));
    }
    LintCheck::pass(
        name,
        format!("{checked} tag(s) resolve to registered product instances"),
    )
}

/// The schedule must reference defined paths, and every path must reference
/// instantiated modules.
fn check_schedule_refs(process: &Process) -> LintCheck {
    let name = "schedule-refs";
    match process.resolve_schedule() {
        Ok(modules) => LintCheck::pass(
            name,
            format!(
                "schedule resolves to {} module step(s) over {} path(s)",
                modules.len(),
                process.paths.len()
            ),
        ),
        Err(err) => LintCheck::fail(name, err.info().to_string()),
    }
}
