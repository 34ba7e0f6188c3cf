use fsim_core::pset::{Parameter, Pset, Value};
use fsim_core::InputTag;
use fsim_process::modules::EdProducer;
use fsim_process::schedule::PathSpec;
use fsim_process::Process;
use proptest::prelude::*;

fn process_with_producer() -> Process {
    let mut process = Process::new("TEST");
    let mut producer = EdProducer::new("FastSimProducer");
    producer.params.set("beamPipeRadius", 0.0);
    let mut nested = Pset::new();
    nested.set("threshold", 1.5);
    producer.params.set("cuts", nested);
    process.set_producer("fastSimProducer", producer);
    process
}

#[test]
fn assign_overwrites_and_keeps_position() {
    let mut process = process_with_producer();
    process
        .assign("fastSimProducer.beamPipeRadius", Parameter::tracked(3.2))
        .unwrap();
    let params = process.module_params("fastSimProducer").unwrap();
    assert_eq!(params.get_double("beamPipeRadius").unwrap(), &3.2);
    // First-assignment position survives the overwrite.
    let names: Vec<&str> = params.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["beamPipeRadius", "cuts"]);
}

#[test]
fn assign_reaches_nested_sets() {
    let mut process = process_with_producer();
    process
        .assign("fastSimProducer.cuts.threshold", Parameter::tracked(9.0))
        .unwrap();
    let params = process.module_params("fastSimProducer").unwrap();
    let cuts = params.get_pset("cuts").unwrap();
    assert_eq!(cuts.get_double("threshold").unwrap(), &9.0);
}

#[test]
fn assign_to_unknown_module_fails() {
    let mut process = process_with_producer();
    let err = process
        .assign("nosuch.beamPipeRadius", Parameter::tracked(1.0))
        .unwrap_err();
    assert_eq!(err.info().code, "proc-module");
}

#[test]
fn assign_through_missing_intermediate_fails_for_regular_modules() {
    let mut process = process_with_producer();
    let err = process
        .assign("fastSimProducer.nosuch.threshold", Parameter::tracked(1.0))
        .unwrap_err();
    assert_eq!(err.info().code, "pset-missing");
}

#[test]
fn assign_creates_intermediates_for_externals() {
    let mut process = Process::new("TEST");
    process.declare_external("theMixObjects");
    process
        .assign(
            "theMixObjects.mixCH.input",
            Parameter::tracked(Value::VTag(vec![InputTag::new("fastSimProducer")])),
        )
        .unwrap();
    let overlay = process.module_params("theMixObjects").unwrap();
    let input = overlay.get_pset("mixCH").unwrap().get_vtag("input").unwrap();
    assert_eq!(input.len(), 1);
}

#[test]
fn malformed_dot_paths_are_rejected() {
    let mut process = process_with_producer();
    for path in ["fastSimProducer", "fastSimProducer.", ".radius", "a..b"] {
        let err = process
            .assign(path, Parameter::tracked(1.0))
            .unwrap_err();
        assert_eq!(err.info().code, "proc-dot-path", "path {path:?}");
    }
}

#[test]
fn append_extends_vstring_in_place() {
    let mut process = Process::new("TEST");
    process.declare_external("content");
    process
        .assign("content.outputCommands", Parameter::tracked(vec!["drop *"]))
        .unwrap();
    process
        .append("content.outputCommands", Value::from("keep *_x_*_*"))
        .unwrap();
    let overlay = process.module_params("content").unwrap();
    assert_eq!(
        overlay.get_vstring("outputCommands").unwrap(),
        &vec!["drop *".to_string(), "keep *_x_*_*".to_string()]
    );
}

#[test]
fn append_rejects_non_list_targets() {
    let mut process = process_with_producer();
    let err = process
        .append("fastSimProducer.beamPipeRadius", Value::from("x"))
        .unwrap_err();
    assert_eq!(err.info().code, "pset-type");

    let err = process
        .append("fastSimProducer.beamPipeRadius", Value::Double(1.0))
        .unwrap_err();
    assert_eq!(err.info().code, "proc-append");
}

#[test]
fn schedule_errors_name_the_offender() {
    let mut process = process_with_producer();
    process.set_path("demo", PathSpec::path(vec!["fastSimProducer"]));
    process.set_schedule(vec!["demo", "missing_step"]);
    let err = process.resolve_schedule().unwrap_err();
    assert_eq!(err.info().code, "proc-path");

    process.set_schedule(vec!["demo"]);
    process.set_path("demo", PathSpec::path(vec!["ghostModule"]));
    let err = process.resolve_schedule().unwrap_err();
    assert_eq!(err.info().code, "proc-module-ref");
}

#[test]
fn paths_run_in_declaration_order_without_a_schedule() {
    let mut process = process_with_producer();
    process.declare_external("other");
    process.set_path("b_first", PathSpec::path(vec!["fastSimProducer"]));
    process.set_path("a_second", PathSpec::end_path(vec!["other"]));
    assert_eq!(
        process.resolve_schedule().unwrap(),
        vec!["fastSimProducer".to_string(), "other".to_string()]
    );
}

proptest! {
    // Sequential overwrite: the last assignment to a name wins, regardless
    // of how many writes happen in between.
    #[test]
    fn last_assignment_wins(values in proptest::collection::vec(-1.0e6..1.0e6f64, 1..20)) {
        let mut process = process_with_producer();
        for value in &values {
            process
                .assign("fastSimProducer.beamPipeRadius", Parameter::tracked(*value))
                .unwrap();
        }
        let params = process.module_params("fastSimProducer").unwrap();
        prop_assert_eq!(params.get_double("beamPipeRadius").unwrap(), values.last().unwrap());
    }

    // Appends preserve order and never reorder earlier elements.
    #[test]
    fn appends_preserve_order(items in proptest::collection::vec("[a-z]{1,8}", 0..12)) {
        let mut process = Process::new("TEST");
        process.declare_external("content");
        process
            .assign("content.commands", Parameter::tracked(Vec::<String>::new()))
            .unwrap();
        for item in &items {
            process
                .append("content.commands", Value::from(item.clone()))
                .unwrap();
        }
        let overlay = process.module_params("content").unwrap();
        prop_assert_eq!(overlay.get_vstring("commands").unwrap(), &items);
    }
}
