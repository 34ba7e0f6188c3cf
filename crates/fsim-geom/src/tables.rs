//! Built-in tracker material tables.
//!
//! The numeric content is the tracker material description consumed by the
//! fast-simulation producers: one record per layer, a `limits` vector of bin
//! edges and a `thickness` vector of bin contents (radiation lengths),
//! transcribed verbatim from the source tables.

use fsim_core::pset::{Parameter, Pset, Value};

fn leaf(tracked: bool, value: impl Into<Value>) -> Parameter {
    if tracked {
        Parameter::tracked(value)
    } else {
        Parameter::untracked(value)
    }
}

fn barrel(
    records: &mut Vec<Pset>,
    tracked: bool,
    radius: f64,
    limits: &[f64],
    thickness: &[f64],
    active: Option<&str>,
) {
    let mut rec = Pset::new();
    rec.insert("radius", leaf(tracked, radius));
    rec.insert("limits", leaf(tracked, limits.to_vec()));
    rec.insert("thickness", leaf(tracked, thickness.to_vec()));
    if let Some(label) = active {
        rec.insert("activeLayer", leaf(tracked, label));
    }
    records.push(rec);
}

fn forward(
    records: &mut Vec<Pset>,
    tracked: bool,
    z: Option<f64>,
    limits: &[f64],
    thickness: &[f64],
    active: Option<&str>,
    nuclear_factor: Option<f64>,
) {
    let mut rec = Pset::new();
    if let Some(z) = z {
        rec.insert("z", leaf(tracked, z));
    }
    rec.insert("limits", leaf(tracked, limits.to_vec()));
    rec.insert("thickness", leaf(tracked, thickness.to_vec()));
    if let Some(label) = active {
        rec.insert("activeLayer", leaf(tracked, label));
    }
    if let Some(factor) = nuclear_factor {
        rec.insert("nuclearInteractionThicknessFactor", leaf(tracked, factor));
    }
    records.push(rec);
}

fn detector(barrel_layers: Vec<Pset>, forward_layers: Vec<Pset>) -> Pset {
    let mut det = Pset::new();
    det.set("BarrelLayers", barrel_layers);
    det.set("ForwardLayers", forward_layers);
    det
}

/// Full tracker material table with active-layer labels.
///
/// The TID rows carry five limits but only three thicknesses, as in the
/// source table, so they fail the bin-count invariant when assembled; read
/// records individually to work with the rest of the table.
pub fn tracker_material() -> Pset {
    let mut b = Vec::new();
    // beam pipe
    barrel(&mut b, true, 3.003, &[0.0, 28.3], &[0.0024], None);
    // pixel barrel 1-3
    barrel(&mut b, true, 4.425, &[0.0, 28.391], &[0.0217], Some("BPix1"));
    barrel(&mut b, true, 7.312, &[0.0, 28.391], &[0.0217], Some("BPix2"));
    barrel(&mut b, true, 10.177, &[0.0, 28.391], &[0.0217], Some("BPix3"));
    // pixel outside walls and cables
    barrel(
        &mut b,
        true,
        17.6,
        &[0.0, 27.5, 32.0, 65.0],
        &[0.0135, 0.095, 0.050],
        None,
    );
    // inner barrel 1-4
    barrel(
        &mut b,
        true,
        25.767,
        &[0.0, 35.0, 65.254],
        &[0.053, 0.0769],
        Some("TIB1"),
    );
    barrel(
        &mut b,
        true,
        34.104,
        &[0.0, 35.0, 65.231],
        &[0.053, 0.0769],
        Some("TIB2"),
    );
    barrel(
        &mut b,
        true,
        41.974,
        &[0.0, 35.0, 66.232],
        &[0.035, 0.0508],
        Some("TIB3"),
    );
    barrel(
        &mut b,
        true,
        49.907,
        &[0.0, 35.0, 66.355],
        &[0.04, 0.058],
        Some("TIB4"),
    );
    // outer barrel inside wall
    barrel(
        &mut b,
        true,
        55.1,
        &[0.0, 27.5, 30.5, 72.0, 108.2],
        &[0.009, 0.036, 0.009, 0.0495],
        None,
    );
    // outer barrel 1-6
    let tob_limits = [0.0, 18.0, 30.0, 36.0, 46.0, 55.0, 108.737];
    let tob_thick_a = [0.021, 0.06, 0.03, 0.06, 0.03, 0.06];
    let tob_thick_b = [0.0154, 0.044, 0.022, 0.044, 0.022, 0.044];
    barrel(&mut b, true, 60.937, &tob_limits, &tob_thick_a, Some("TOB1"));
    barrel(&mut b, true, 69.322, &tob_limits, &tob_thick_a, Some("TOB2"));
    barrel(&mut b, true, 78.081, &tob_limits, &tob_thick_b, Some("TOB3"));
    barrel(&mut b, true, 86.786, &tob_limits, &tob_thick_b, Some("TOB4"));
    barrel(&mut b, true, 96.569, &tob_limits, &tob_thick_b, Some("TOB5"));
    barrel(&mut b, true, 108.063, &tob_limits, &tob_thick_b, Some("TOB6"));
    // outer barrel outside cables and walls
    barrel(
        &mut b,
        true,
        120.0,
        &[0.0, 120.0, 299.9],
        &[0.042, 0.1596],
        None,
    );

    let mut f = Vec::new();
    // pixel barrel outside walls and cables (endcap)
    forward(
        &mut f,
        true,
        Some(28.799),
        &[4.2, 5.1, 7.1, 8.2, 10.0, 11.0, 11.9, 16.5],
        &[0.100, 0.00, 0.108, 0.00, 0.112, 0.02, 0.04],
        None,
        None,
    );
    forward(&mut f, true, Some(28.8), &[3.8, 16.5], &[0.012], None, None);
    // pixel disks 1-2, position supplied by the active layer
    forward(
        &mut f,
        true,
        None,
        &[4.825, 16.598],
        &[0.058],
        Some("FPix1"),
        None,
    );
    forward(
        &mut f,
        true,
        None,
        &[4.823, 16.598],
        &[0.058],
        Some("FPix2"),
        None,
    );
    // pixel endcap outside cables
    forward(
        &mut f,
        true,
        Some(65.1),
        &[6.5, 10.0, 11.0, 16.0, 17.61],
        &[0.150, 0.325, 0.250, 0.175],
        None,
        None,
    );
    // inner barrel outside cables and walls (endcap)
    forward(&mut f, true, Some(74.0), &[22.5, 53.9], &[0.130], None, None);
    // inner disks 1-3
    forward(
        &mut f,
        true,
        None,
        &[0.0, 22.2, 34.0, 42.0, 53.940],
        &[0.04, 0.08, 0.04],
        Some("TID1"),
        None,
    );
    forward(
        &mut f,
        true,
        None,
        &[0.0, 22.2, 34.0, 42.0, 53.942],
        &[0.04, 0.08, 0.04],
        Some("TID2"),
        None,
    );
    forward(
        &mut f,
        true,
        None,
        &[0.0, 22.2, 34.0, 42.0, 53.942],
        &[0.055, 0.110, 0.055],
        Some("TID3"),
        None,
    );
    // inner disks outside cables and walls
    forward(
        &mut f,
        true,
        Some(108.0),
        &[22.0, 24.0, 47.5, 54.943],
        &[0.111, 0.074, 0.185],
        None,
        None,
    );
    // outer barrel outside cables and walls (endcap)
    forward(
        &mut f,
        true,
        Some(115.0),
        &[55.0, 60.0, 62.0, 78.0, 92.0, 111.0],
        &[0.005, 0.009, 0.014, 0.016, 0.009],
        None,
        None,
    );
    // endcap disks 1-9
    let tec_limits_a = [21.87, 24.0, 34.0, 39.0, 111.395];
    let tec_thick_a = [0.100, 0.040, 0.080, 0.050];
    let tec_limits_b = [29.62, 32.0, 40.0, 41.0, 46.0, 111.395];
    forward(&mut f, true, None, &tec_limits_a, &tec_thick_a, Some("TEC1"), None);
    forward(&mut f, true, None, &tec_limits_a, &tec_thick_a, Some("TEC2"), None);
    forward(&mut f, true, None, &tec_limits_a, &tec_thick_a, Some("TEC3"), None);
    forward(
        &mut f,
        true,
        None,
        &tec_limits_b,
        &[0.115, 0.030, 0.050, 0.070, 0.050],
        Some("TEC4"),
        None,
    );
    forward(
        &mut f,
        true,
        None,
        &tec_limits_b,
        &[0.115, 0.030, 0.050, 0.070, 0.050],
        Some("TEC5"),
        None,
    );
    forward(
        &mut f,
        true,
        None,
        &tec_limits_b,
        &[0.125, 0.030, 0.050, 0.070, 0.050],
        Some("TEC6"),
        None,
    );
    forward(
        &mut f,
        true,
        None,
        &[29.71, 32.0, 60.0, 111.395],
        &[0.135, 0.030, 0.050],
        Some("TEC7"),
        None,
    );
    forward(
        &mut f,
        true,
        None,
        &[29.71, 32.0, 60.0, 111.395],
        &[0.150, 0.030, 0.050],
        Some("TEC8"),
        None,
    );
    forward(
        &mut f,
        true,
        None,
        &[29.91, 32.0, 60.0, 111.395],
        &[0.150, 0.030, 0.050],
        Some("TEC9"),
        None,
    );
    // endcaps outside cables and walls
    forward(
        &mut f,
        true,
        Some(300.0),
        &[
            4.42, 4.65, 4.84, 7.37, 10.99, 14.70, 16.24, 22.00, 28.50, 31.50, 36.0, 120.0,
        ],
        &[
            3.935, 0.483, 0.127, 0.089, 0.069, 0.124, 1.47, 0.924, 0.693, 0.294, 0.336,
        ],
        None,
        None,
    );

    detector(b, f)
}

/// Material table with no active-layer labels and explicit positions on
/// every forward record, untracked leaves throughout.
///
/// The TID thickness rows carry one more entry than the geometry uses; the
/// padding was added in the source to satisfy the bin-count invariant and is
/// kept here verbatim.
pub fn tracker_material_no_active() -> Pset {
    let mut b = Vec::new();
    barrel(&mut b, false, 3.003, &[0.0, 28.3], &[0.0024], None);
    barrel(&mut b, false, 4.425, &[0.0, 28.391], &[0.0217], None);
    barrel(&mut b, false, 7.312, &[0.0, 28.391], &[0.0217], None);
    barrel(&mut b, false, 10.177, &[0.0, 28.391], &[0.0217], None);
    barrel(
        &mut b,
        false,
        17.6,
        &[0.0, 27.5, 32.0, 65.0],
        &[0.0135, 0.095, 0.050],
        None,
    );
    barrel(
        &mut b,
        false,
        25.767,
        &[0.0, 35.0, 65.254],
        &[0.053, 0.0769],
        None,
    );
    barrel(
        &mut b,
        false,
        34.104,
        &[0.0, 35.0, 65.231],
        &[0.053, 0.0769],
        None,
    );
    barrel(
        &mut b,
        false,
        41.974,
        &[0.0, 35.0, 66.232],
        &[0.035, 0.0508],
        None,
    );
    barrel(
        &mut b,
        false,
        49.907,
        &[0.0, 35.0, 66.355],
        &[0.04, 0.058],
        None,
    );
    barrel(
        &mut b,
        false,
        55.1,
        &[0.0, 27.5, 30.5, 72.0, 108.2],
        &[0.009, 0.036, 0.009, 0.0495],
        None,
    );
    let tob_limits = [0.0, 18.0, 30.0, 36.0, 46.0, 55.0, 108.737];
    let tob_thick_a = [0.021, 0.06, 0.03, 0.06, 0.03, 0.06];
    let tob_thick_b = [0.0154, 0.044, 0.022, 0.044, 0.022, 0.044];
    barrel(&mut b, false, 60.937, &tob_limits, &tob_thick_a, None);
    barrel(&mut b, false, 69.322, &tob_limits, &tob_thick_a, None);
    barrel(&mut b, false, 78.081, &tob_limits, &tob_thick_b, None);
    barrel(&mut b, false, 86.786, &tob_limits, &tob_thick_b, None);
    barrel(&mut b, false, 96.569, &tob_limits, &tob_thick_b, None);
    barrel(&mut b, false, 108.063, &tob_limits, &tob_thick_b, None);
    barrel(
        &mut b,
        false,
        120.0,
        &[0.0, 120.0, 299.9],
        &[0.042, 0.1596],
        None,
    );

    let mut f = Vec::new();
    forward(
        &mut f,
        false,
        Some(28.799),
        &[4.2, 5.1, 7.1, 8.2, 10.0, 11.0, 11.9, 16.5],
        &[0.100, 0.00, 0.108, 0.00, 0.112, 0.02, 0.04],
        None,
        None,
    );
    forward(&mut f, false, Some(28.8), &[3.8, 16.5], &[0.012], None, None);
    forward(
        &mut f,
        false,
        Some(50.0),
        &[4.825, 16.598],
        &[0.058],
        None,
        None,
    );
    forward(
        &mut f,
        false,
        Some(53.0),
        &[4.823, 16.598],
        &[0.058],
        None,
        None,
    );
    forward(
        &mut f,
        false,
        Some(65.1),
        &[6.5, 10.0, 11.0, 16.0, 17.61],
        &[0.150, 0.325, 0.250, 0.175],
        None,
        None,
    );
    forward(&mut f, false, Some(74.0), &[22.5, 53.9], &[0.130], None, None);
    // padded TID rows, see module docs
    forward(
        &mut f,
        false,
        Some(80.0),
        &[0.0, 22.2, 34.0, 42.0, 53.940],
        &[0.04, 0.08, 0.04, 0.04],
        None,
        None,
    );
    forward(
        &mut f,
        false,
        Some(85.0),
        &[0.0, 22.2, 34.0, 42.0, 53.942],
        &[0.04, 0.08, 0.04, 0.04],
        None,
        None,
    );
    forward(
        &mut f,
        false,
        Some(90.0),
        &[0.0, 22.2, 34.0, 42.0, 53.942],
        &[0.055, 0.110, 0.055, 0.04],
        None,
        None,
    );
    forward(
        &mut f,
        false,
        Some(108.0),
        &[22.0, 24.0, 47.5, 54.943],
        &[0.111, 0.074, 0.185],
        None,
        None,
    );
    forward(
        &mut f,
        false,
        Some(115.0),
        &[55.0, 60.0, 62.0, 78.0, 92.0, 111.0],
        &[0.005, 0.009, 0.014, 0.016, 0.009],
        None,
        None,
    );
    let tec_limits_a = [21.87, 24.0, 34.0, 39.0, 111.395];
    let tec_thick_a = [0.100, 0.040, 0.080, 0.050];
    let tec_limits_b = [29.62, 32.0, 40.0, 41.0, 46.0, 111.395];
    forward(
        &mut f,
        false,
        Some(120.0),
        &tec_limits_a,
        &tec_thick_a,
        None,
        Some(1.2),
    );
    forward(
        &mut f,
        false,
        Some(125.0),
        &tec_limits_a,
        &tec_thick_a,
        None,
        Some(1.2),
    );
    forward(
        &mut f,
        false,
        Some(130.0),
        &tec_limits_a,
        &tec_thick_a,
        None,
        Some(1.2),
    );
    forward(
        &mut f,
        false,
        Some(135.0),
        &tec_limits_b,
        &[0.115, 0.030, 0.050, 0.070, 0.050],
        None,
        Some(1.2),
    );
    forward(
        &mut f,
        false,
        Some(140.0),
        &tec_limits_b,
        &[0.115, 0.030, 0.050, 0.070, 0.050],
        None,
        Some(1.2),
    );
    forward(
        &mut f,
        false,
        Some(145.0),
        &tec_limits_b,
        &[0.125, 0.030, 0.050, 0.070, 0.050],
        None,
        Some(1.2),
    );
    forward(
        &mut f,
        false,
        Some(150.0),
        &[29.71, 32.0, 60.0, 111.395],
        &[0.135, 0.030, 0.050],
        None,
        Some(1.2),
    );
    forward(
        &mut f,
        false,
        Some(155.0),
        &[29.71, 32.0, 60.0, 111.395],
        &[0.150, 0.030, 0.050],
        None,
        Some(1.2),
    );
    forward(
        &mut f,
        false,
        Some(160.0),
        &[29.91, 32.0, 60.0, 111.395],
        &[0.150, 0.030, 0.050],
        None,
        Some(1.2),
    );
    forward(
        &mut f,
        false,
        Some(300.0),
        &[
            4.42, 4.65, 4.84, 7.37, 10.99, 14.70, 16.24, 22.00, 28.50, 31.50, 36.0, 120.0,
        ],
        &[
            3.935, 0.483, 0.127, 0.089, 0.069, 0.124, 1.47, 0.924, 0.693, 0.294, 0.336,
        ],
        None,
        None,
    );

    detector(b, f)
}

/// Minimal three-layer table used by smoke-test drivers.
pub fn tracker_material_test() -> Pset {
    let mut b = Vec::new();
    barrel(&mut b, false, 10.0, &[0.0, 1.0], &[0.01], None);
    barrel(&mut b, false, 50.0, &[0.0, 5.0], &[0.05], None);
    barrel(&mut b, false, 100.0, &[0.0, 100.0], &[0.1], None);

    let mut f = Vec::new();
    forward(&mut f, false, Some(10.0), &[0.0, 1.0], &[0.01], None, None);
    forward(&mut f, false, Some(50.0), &[0.0, 5.0], &[0.05], None, None);
    forward(&mut f, false, Some(100.0), &[0.0, 100.0], &[0.1], None, None);

    detector(b, f)
}
