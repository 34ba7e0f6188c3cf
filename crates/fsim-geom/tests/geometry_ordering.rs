use fsim_core::pset::Pset;
use fsim_geom::Geometry;

fn barrel_record(radius: f64) -> Pset {
    let mut rec = Pset::new();
    rec.set("radius", radius);
    rec.set("limits", vec![0.0, 30.0]);
    rec.set("thickness", vec![0.02]);
    rec
}

fn forward_record(z: Option<f64>) -> Pset {
    let mut rec = Pset::new();
    if let Some(z) = z {
        rec.set("z", z);
    }
    rec.set("limits", vec![4.0, 16.0]);
    rec.set("thickness", vec![0.05]);
    rec
}

fn detector(barrel: Vec<Pset>, forward: Vec<Pset>) -> Pset {
    let mut det = Pset::new();
    det.set("BarrelLayers", barrel);
    det.set("ForwardLayers", forward);
    det
}

#[test]
fn decreasing_radius_is_rejected() {
    let det = detector(
        vec![barrel_record(50.0), barrel_record(25.0)],
        vec![forward_record(Some(10.0))],
    );
    let err = Geometry::from_pset(&det).unwrap_err();
    assert_eq!(err.info().code, "geom-barrel-order");
    assert_eq!(err.info().context.get("layer").unwrap(), "1");
}

#[test]
fn decreasing_z_is_rejected() {
    let det = detector(
        vec![barrel_record(10.0)],
        vec![forward_record(Some(80.0)), forward_record(Some(74.0))],
    );
    let err = Geometry::from_pset(&det).unwrap_err();
    assert_eq!(err.info().code, "geom-forward-order");
}

#[test]
fn equal_positions_are_accepted() {
    // Records at the same position occur in the source tables (walls sitting
    // on top of each other).
    let det = detector(
        vec![barrel_record(55.1), barrel_record(55.1)],
        vec![forward_record(Some(28.799)), forward_record(Some(28.8))],
    );
    assert!(Geometry::from_pset(&det).is_ok());
}

#[test]
fn implicit_positions_are_skipped_by_ordering() {
    let det = detector(
        vec![barrel_record(10.0)],
        vec![
            forward_record(Some(50.0)),
            forward_record(None),
            forward_record(Some(65.1)),
        ],
    );
    let geometry = Geometry::from_pset(&det).unwrap();
    assert_eq!(geometry.forward_layers()[1].z, None);
    assert_eq!(geometry.max_z(), Some(65.1));
}

#[test]
fn missing_layer_families_are_an_error() {
    let err = Geometry::from_pset(&Pset::new()).unwrap_err();
    assert_eq!(err.info().code, "pset-missing");
}

#[test]
fn malformed_record_is_reported() {
    let mut rec = Pset::new();
    rec.set("radius", 10.0);
    rec.set("limits", vec![0.0, 5.0, 10.0]);
    rec.set("thickness", vec![0.01]);
    let det = detector(vec![rec], vec![]);
    let err = Geometry::from_pset(&det).unwrap_err();
    assert_eq!(err.info().code, "geom-profile-length");
}
