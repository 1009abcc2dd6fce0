//! # Heating curve chart demo
//!
//! Renders the calorMATIC 630 family of curves as a text table: one row per
//! outdoor temperature (warm → cold, as the published chart reads), one
//! column per labelled curve, plus the computed operating point for a typical
//! radiator circuit.

use heatcurve_core::calormatic::{self, SETPOINT_GUIDES};
use heatcurve_core::curve::{CircuitDemand, HeatingCurve};

/// Curves labelled on the published chart.
const LABELLED_CURVES: [f32; 8] = [0.2, 0.6, 1.0, 1.5, 2.0, 2.5, 3.0, 4.0];

fn main() {
    let curve = HeatingCurve::default();
    let demand = CircuitDemand::default();

    println!("calorMATIC 630 heating curves — {} °C room setpoint", demand.room_setpoint);
    println!("flow bounds {:.0}–{:.0} °C\n", demand.flow_min, demand.flow_max);

    // Header: one column per labelled curve.
    print!("{:>8} │", "outdoor");
    for s in LABELLED_CURVES {
        print!("{s:>7.1}");
    }
    println!();
    println!("{:─>8}─┼{:─>width$}", "", "", width = 7 * LABELLED_CURVES.len());

    // Body: outdoor axis warm → cold in 2.5 °C steps.
    let mut outdoor = calormatic::CHART_OUTDOOR_WARM;
    while outdoor >= calormatic::CHART_OUTDOOR_COLD {
        print!("{outdoor:>7.1} │");
        for flow in curve.curve_family(
            CircuitDemand { outdoor, ..demand },
            &LABELLED_CURVES,
        ) {
            print!("{flow:>7.1}");
        }
        println!();
        outdoor -= 2.5;
    }

    // The dashed setpoint guides from the chart, sampled at 0 °C outdoor.
    println!("\nsetpoint guides at 0 °C outdoor (curve 1.0, chart window):");
    for room in SETPOINT_GUIDES {
        let guide = calormatic::setpoint_guide(&curve, room, &[0.0])
            .next()
            .unwrap_or(f32::NAN);
        println!("  {room:>4.0} °C room → {guide:.1} °C flow");
    }

    // Current operating point, the number a controller would actually target.
    let flow = curve.flow_temperature(&demand);
    println!(
        "\noperating point: s={:.1}, room {:.1} °C, outdoor {:.1} °C → flow {flow:.1} °C",
        demand.steepness, demand.room_setpoint, demand.outdoor
    );
}
