use super::*;
use crate::hull::{convex_hull_with, hull_stats};
use crate::geom3::HullCfg;
use nalgebra::{vector, Vector3};

#[test]
fn parses_two_batches() {
    let input = "2\n3\n0 0 0\n1 0 0\n0 1 0\n1\n-1.5 2e-3 4\n";
    let batches = parse_batches(input).unwrap();
    assert_eq!(batches.len(), 2);
    assert_eq!(batches[0].len(), 3);
    assert_eq!(batches[0][1], vector![1.0, 0.0, 0.0]);
    assert_eq!(batches[1], vec![vector![-1.5, 0.002, 4.0]]);
}

#[test]
fn empty_batches_are_allowed() {
    assert_eq!(parse_batches("1 0").unwrap(), vec![Vec::<Vector3<f64>>::new()]);
    assert!(parse_batches("0").unwrap().is_empty());
}

#[test]
fn reports_truncated_input() {
    let err = parse_batches("1\n2\n0 0 0\n1 1").unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedEnd { .. }));
    assert!(err.to_string().contains("point 1 in batch 0"));
    assert!(matches!(
        parse_batches("").unwrap_err(),
        ParseError::UnexpectedEnd { .. }
    ));
}

#[test]
fn reports_bad_tokens() {
    assert_eq!(
        parse_batches("x").unwrap_err(),
        ParseError::InvalidCount {
            token: "x".into(),
            what: "batch count"
        }
    );
    assert!(matches!(
        parse_batches("1 -3").unwrap_err(),
        ParseError::InvalidCount { what: "point count", .. }
    ));
    assert_eq!(
        parse_batches("1 1 0 nan 0").unwrap_err(),
        ParseError::InvalidCoordinate {
            token: "nan".into(),
            batch: 0,
            point: 0
        }
    );
}

#[test]
fn writes_count_then_triangles() {
    let pts = parse_batches("1 4  0 0 0  1 0 0  0 1 0  0 0 1").unwrap();
    let faces = convex_hull_with(&pts[0], &HullCfg::default());
    let mut buf = Vec::new();
    write_faces(&mut buf, &faces).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert_eq!(text, "4\n3 0 1 3\n3 0 2 1\n3 0 3 2\n3 1 2 3\n");
}

#[test]
fn written_points_parse_back() {
    let pts = vec![vector![0.25, -1.0, 3.5], vector![1e-3, 2.0, -0.125]];
    let mut buf = b"1\n".to_vec();
    write_points(&mut buf, &pts).unwrap();
    let parsed = parse_batches(std::str::from_utf8(&buf).unwrap()).unwrap();
    assert_eq!(parsed, vec![pts]);
}

#[test]
fn record_carries_counts() {
    let pts = [
        vector![0.0, 0.0, 0.0],
        vector![1.0, 0.0, 0.0],
        vector![0.0, 1.0, 0.0],
        vector![0.0, 0.0, 1.0],
    ];
    let faces = convex_hull_with(&pts, &HullCfg::default());
    let rec = HullRecord::new(0, pts.len(), &faces, hull_stats(&faces));
    assert_eq!(rec.faces.len(), 4);
    assert_eq!((rec.vertices, rec.edges, rec.euler), (4, 6, 2));
}
