use fsim_geom::{
    tracker_material, tracker_material_no_active, tracker_material_test, BarrelLayer,
    ForwardLayer, Geometry,
};

#[test]
fn full_table_keeps_the_short_tid_rows() {
    // The TID rows carry five limits but only three thicknesses, as in the
    // source table, so whole-table assembly stops at the first of them.
    let err = Geometry::from_pset(&tracker_material()).unwrap_err();
    assert_eq!(err.info().code, "geom-profile-length");
    assert_eq!(err.info().context.get("limits").unwrap(), "5");
    assert_eq!(err.info().context.get("thickness").unwrap(), "3");
}

#[test]
fn full_table_record_counts() {
    let table = tracker_material();
    assert_eq!(table.get_vpset("BarrelLayers").unwrap().len(), 17);
    assert_eq!(table.get_vpset("ForwardLayers").unwrap().len(), 21);
}

#[test]
fn full_table_only_the_tid_rows_fail_per_record() {
    let table = tracker_material();
    for record in table.get_vpset("BarrelLayers").unwrap() {
        assert!(BarrelLayer::from_pset(record).is_ok());
    }
    let failing: Vec<usize> = table
        .get_vpset("ForwardLayers")
        .unwrap()
        .iter()
        .enumerate()
        .filter(|(_, record)| ForwardLayer::from_pset(*record).is_err())
        .map(|(idx, _)| idx)
        .collect();
    // TID1-3
    assert_eq!(failing, vec![6, 7, 8]);
}

#[test]
fn full_table_active_labels() {
    let table = tracker_material();
    let barrel_active: Vec<String> = table
        .get_vpset("BarrelLayers")
        .unwrap()
        .iter()
        .filter_map(|record| record.get_string("activeLayer").ok().cloned())
        .collect();
    assert_eq!(
        barrel_active,
        vec![
            "BPix1", "BPix2", "BPix3", "TIB1", "TIB2", "TIB3", "TIB4", "TOB1", "TOB2", "TOB3",
            "TOB4", "TOB5", "TOB6"
        ]
    );
}

#[test]
fn full_table_extents() {
    let table = tracker_material();
    let outermost = table
        .get_vpset("BarrelLayers")
        .unwrap()
        .iter()
        .map(|record| BarrelLayer::from_pset(record).unwrap())
        .last()
        .unwrap();
    assert_eq!(outermost.radius, 120.0);

    let last_z = table
        .get_vpset("ForwardLayers")
        .unwrap()
        .iter()
        .rev()
        .filter_map(|record| ForwardLayer::from_pset(record).ok())
        .find_map(|layer| layer.z)
        .unwrap();
    assert_eq!(last_z, 300.0);
}

#[test]
fn pixel_disks_have_no_explicit_position_in_full_table() {
    let table = tracker_material();
    let implicit: Vec<usize> = table
        .get_vpset("ForwardLayers")
        .unwrap()
        .iter()
        .enumerate()
        .filter(|(_, record)| !record.exists("z") && record.exists("activeLayer"))
        .map(|(idx, _)| idx)
        .collect();
    // FPix1/2, TID1-3, TEC1-9
    assert_eq!(implicit.len(), 14);
}

#[test]
fn no_active_table_assembles_with_explicit_positions() {
    let geometry = Geometry::from_pset(&tracker_material_no_active()).unwrap();
    assert_eq!(geometry.barrel_layers().len(), 17);
    assert_eq!(geometry.forward_layers().len(), 21);
    assert!(geometry.forward_layers().iter().all(|layer| layer.z.is_some()));
    assert!(geometry
        .barrel_layers()
        .iter()
        .all(|layer| layer.active_layer.is_none()));
}

#[test]
fn no_active_table_scales_tec_nuclear_interactions() {
    let geometry = Geometry::from_pset(&tracker_material_no_active()).unwrap();
    let scaled: Vec<f64> = geometry
        .forward_layers()
        .iter()
        .filter_map(|layer| layer.nuclear_interaction_thickness_factor)
        .collect();
    assert_eq!(scaled, vec![1.2; 9]);
}

#[test]
fn no_active_table_keeps_padded_tid_rows() {
    // The padded rows carry four thickness entries against five limits, so
    // they satisfy the bin-count invariant as written.
    let geometry = Geometry::from_pset(&tracker_material_no_active()).unwrap();
    let tid1 = &geometry.forward_layers()[6];
    assert_eq!(tid1.z, Some(80.0));
    assert_eq!(tid1.profile.thickness(), &[0.04, 0.08, 0.04, 0.04]);
}

#[test]
fn test_table_is_untracked() {
    let table = tracker_material_test();
    let barrel = table.get_vpset("BarrelLayers").unwrap();
    assert_eq!(barrel.len(), 3);
    assert!(!barrel[0].get("radius").unwrap().tracked);

    let geometry = Geometry::from_pset(&table).unwrap();
    assert_eq!(geometry.max_radius(), Some(100.0));
    assert_eq!(geometry.max_z(), Some(100.0));
}

#[test]
fn layer_thickness_lookup_uses_absolute_coordinate() {
    let table = tracker_material();
    let records = table.get_vpset("BarrelLayers").unwrap();
    let beam_pipe = BarrelLayer::from_pset(&records[0]).unwrap();
    assert_eq!(beam_pipe.thickness_at(-10.0), 0.0024);
    assert_eq!(beam_pipe.thickness_at(28.3), 0.0);
}
