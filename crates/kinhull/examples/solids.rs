//! Print hull counts for a few classic solids.
//!
//! Usage:
//!   cargo run -p kinhull --example solids
//!
//! Each line shows V (hull vertices), E, F and the Euler characteristic.

use kinhull::prelude::*;

fn main() {
    let mut cube = Vec::new();
    for x in [0.0, 1.0] {
        for y in [0.0, 1.0] {
            for z in [0.0, 1.0] {
                cube.push(Vec3::new(x, y, z));
            }
        }
    }
    let tetra = vec![
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(1.0, -1.0, -1.0),
        Vec3::new(-1.0, 1.0, -1.0),
        Vec3::new(-1.0, -1.0, 1.0),
    ];
    let sphere = draw_cloud(CloudKind::Sphere, 200, 2025);
    let cfg = HullCfg::default();
    for (name, pts) in [("tetrahedron", tetra), ("cube", cube), ("sphere-200", sphere)] {
        let faces = convex_hull_with(&pts, &cfg);
        let s = hull_stats(&faces);
        println!(
            "{name}: V={} E={} F={} chi={} closed={}",
            s.vertices,
            s.edges,
            s.faces,
            s.euler_characteristic(),
            is_closed_oriented(&faces)
        );
    }
}
