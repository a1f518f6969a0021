//! Built-in fixture sets and the runner that checks them against `shclip`.
//!
//! Four sets: same-side predicate, polygon area, clipping, and clipping cases
//! whose raw output contains duplicated vertices. Extra clipping fixtures can be
//! loaded from JSON (`[{ "subject": [[x, y], ...], "clip": ..., "expected": ... }]`).

use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shclip::api::{polygon_from_pairs, same_cycle_eps};
use shclip::{intersect_polygons, is_same_side, polygon_area, Point2, Segment};

/// Tolerance for comparing areas and vertices.
pub const EPS: f64 = 1e-6;

pub struct SameSideCase {
    pub p1: Point2,
    pub p2: Point2,
    pub segment: Segment,
    pub expected: bool,
}

pub struct AreaCase {
    pub polygon: Vec<Point2>,
    pub expected: f64,
}

/// Subject/clip pair with the expected boundary (any rotation or direction).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClipFixture {
    pub subject: Vec<[f64; 2]>,
    pub clip: Vec<[f64; 2]>,
    pub expected: Vec<[f64; 2]>,
}

impl ClipFixture {
    fn new(subject: &[[f64; 2]], clip: &[[f64; 2]], expected: &[[f64; 2]]) -> Self {
        Self {
            subject: subject.to_vec(),
            clip: clip.to_vec(),
            expected: expected.to_vec(),
        }
    }
}

/// Result of one case.
#[derive(Clone, Debug, PartialEq)]
pub enum Verdict {
    Ok,
    BadResult(String),
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Ok => write!(f, "OK"),
            Verdict::BadResult(msg) => write!(f, "incorrect result: {msg}"),
        }
    }
}

/// Verdicts of one fixture set, in case order.
#[derive(Clone, Debug)]
pub struct SetReport {
    pub title: &'static str,
    pub verdicts: Vec<Verdict>,
}

impl SetReport {
    pub fn passed(&self) -> usize {
        self.verdicts.iter().filter(|v| **v == Verdict::Ok).count()
    }
    pub fn all_passed(&self) -> bool {
        self.passed() == self.verdicts.len()
    }
}

fn pt(x: f64, y: f64) -> Point2 {
    Point2::new(x, y)
}

pub fn same_side_cases() -> Vec<SameSideCase> {
    let diag = Segment::new(pt(1.0, 1.0), pt(4.0, 4.0));
    let falling = Segment::new(pt(-5.0, -2.0), pt(-1.0, -4.0));
    let anti = Segment::new(pt(-5.0, 5.0), pt(0.0, 0.0));
    let raw = [
        ((0.0, 1.0), (2.0, 1.0), diag, false),
        ((2.0, 1.0), (0.0, 1.0), diag, false),
        ((1.0, 3.0), (2.0, 6.0), diag, true),
        ((2.0, 6.0), (1.0, 3.0), diag, true),
        ((2.0, 2.0), (3.0, 3.0), diag, true),
        ((2.0, 2.0), (-1.0, -1.0), diag, true),
        ((2.0, 2.0), (5.0, 3.0), diag, true),
        ((2.0, 2.0), (1.0, 3.0), diag, true),
        ((2.0, 2.0), (1.0, 3.0), falling, true),
        ((0.0, 0.0), (1.0, 1.0), falling, true),
        ((0.0, 0.0), (-3.0, -4.0), falling, false),
        ((0.0, 0.0), (-10.0, 0.0), falling, false),
        ((2.0, 3.0), (-3.0, 4.0), anti, true),
        ((-4.0, 1.0), (-1.0, 4.0), anti, false),
    ];
    raw.into_iter()
        .map(|(a, b, segment, expected)| SameSideCase {
            p1: pt(a.0, a.1),
            p2: pt(b.0, b.1),
            segment,
            expected,
        })
        .collect()
}

pub fn area_cases() -> Vec<AreaCase> {
    let raw: Vec<(Vec<[f64; 2]>, f64)> = vec![
        (vec![[0.0, 0.0]], 0.0),
        (vec![[1.0, 1.0], [2.0, 2.0]], 0.0),
        (vec![[1.0, 1.0], [2.0, 2.0], [2.0, 0.0]], 1.0),
        (vec![[-1.0, -1.0], [2.0, -1.0], [2.0, 3.0], [-1.0, 3.0]], 12.0),
        (vec![[3.0, 4.0], [5.0, 11.0], [12.0, 8.0], [9.0, 5.0], [5.0, 6.0]], 30.0),
        (
            vec![
                [-5.0, 0.0],
                [-3.0, 0.0],
                [-2.0, -1.0],
                [0.0, -1.0],
                [0.0, 3.0],
                [-2.0, 1.0],
                [-3.0, 2.0],
            ],
            10.0,
        ),
        (
            vec![
                [-3.0, -2.0],
                [-4.0, -4.0],
                [-2.0, -3.0],
                [0.0, -3.0],
                [0.0, -5.0],
                [5.0, 0.0],
                [0.0, 0.0],
                [0.0, 2.0],
                [-1.0, 2.0],
                [-1.0, 1.0],
                [-6.0, 1.0],
            ],
            31.0,
        ),
        (STAR_12_111.to_vec(), 120.5),
        (STAR_16_222.to_vec(), 172.0),
        (STAR_20_111.to_vec(), 139.0),
    ];
    raw.into_iter()
        .map(|(pairs, expected)| AreaCase {
            polygon: polygon_from_pairs(&pairs),
            expected,
        })
        .collect()
}

const SQUARE: [[f64; 2]; 4] = [[2.0, 1.0], [4.0, 1.0], [4.0, 3.0], [2.0, 3.0]];
const FRAME: [[f64; 2]; 4] = [[1.0, 0.0], [5.0, 0.0], [5.0, 4.0], [1.0, 4.0]];
const NOTCHED: [[f64; 2]; 8] = [
    [2.0, 2.0],
    [3.0, 2.0],
    [3.0, 4.0],
    [4.0, 4.0],
    [4.0, 2.0],
    [5.0, 2.0],
    [5.0, 5.0],
    [2.0, 5.0],
];

/// Star polygons of the lab generator (`n` vertices, seed), as literals.
const STAR_12_111: [[f64; 2]; 12] = [
    [8.0, 0.0],
    [4.0, 5.0],
    [3.0, 5.0],
    [0.0, 6.0],
    [-3.0, 5.0],
    [-6.0, 4.0],
    [-8.0, -1.0],
    [-4.0, -3.0],
    [-4.0, -7.0],
    [0.0, -6.0],
    [0.0, -5.0],
    [4.0, -3.0],
];
const STAR_16_222: [[f64; 2]; 16] = [
    [8.0, 0.0],
    [9.0, 1.0],
    [7.0, 5.0],
    [3.0, 8.0],
    [1.0, 7.0],
    [0.0, 7.0],
    [-2.0, 6.0],
    [-6.0, 6.0],
    [-6.0, 2.0],
    [-5.0, 0.0],
    [-8.0, -2.0],
    [-5.0, -6.0],
    [-2.0, -5.0],
    [1.0, -9.0],
    [4.0, -5.0],
    [6.0, -5.0],
];
const STAR_20_111: [[f64; 2]; 18] = [
    [8.0, 0.0],
    [6.0, 2.0],
    [4.0, 4.0],
    [2.0, 6.0],
    [0.0, 7.0],
    [-3.0, 7.0],
    [-3.0, 4.0],
    [-7.0, 4.0],
    [-5.0, 2.0],
    [-5.0, 0.0],
    [-9.0, -3.0],
    [-4.0, -4.0],
    [-2.0, -8.0],
    [0.0, -6.0],
    [1.0, -7.0],
    [6.0, -6.0],
    [6.0, -5.0],
    [5.0, -3.0],
];
const STAR_14_12345: [[f64; 2]; 13] = [
    [5.0, 0.0],
    [6.0, 6.0],
    [4.0, 6.0],
    [0.0, 8.0],
    [-6.0, 6.0],
    [-5.0, 2.0],
    [-8.0, 2.0],
    [-6.0, 0.0],
    [-6.0, -3.0],
    [-3.0, -5.0],
    [0.0, -6.0],
    [2.0, -5.0],
    [4.0, -2.0],
];

pub fn clip_cases() -> Vec<ClipFixture> {
    vec![
        ClipFixture::new(
            &SQUARE,
            &[[3.0, 2.0], [5.0, 2.0], [5.0, 4.0], [3.0, 4.0]],
            &[[3.0, 2.0], [4.0, 2.0], [4.0, 3.0], [3.0, 3.0]],
        ),
        ClipFixture::new(
            &SQUARE,
            &[[5.0, 2.0], [7.0, 2.0], [7.0, 4.0], [5.0, 4.0]],
            &[],
        ),
        ClipFixture::new(
            &[
                [-1.0, 1.0],
                [0.0, 1.0],
                [0.0, 2.0],
                [1.0, 2.0],
                [1.0, 1.0],
                [2.0, 1.0],
                [2.0, 3.0],
                [-1.0, 3.0],
            ],
            &[[-1.0, 0.0], [2.0, 0.0], [2.0, 2.0], [-1.0, 2.0]],
            &[
                [-1.0, 2.0],
                [-1.0, 1.0],
                [0.0, 1.0],
                [0.0, 2.0],
                [1.0, 2.0],
                [1.0, 1.0],
                [2.0, 1.0],
                [2.0, 2.0],
            ],
        ),
        ClipFixture::new(&SQUARE, &FRAME, &SQUARE),
        ClipFixture::new(
            &FRAME,
            &SQUARE,
            &[[2.0, 3.0], [2.0, 1.0], [4.0, 1.0], [4.0, 3.0]],
        ),
        ClipFixture::new(
            &NOTCHED,
            &[[1.0, 3.0], [6.0, 3.0], [6.0, 6.0], [1.0, 6.0]],
            &[
                [2.0, 3.0],
                [3.0, 3.0],
                [3.0, 4.0],
                [4.0, 4.0],
                [4.0, 3.0],
                [5.0, 3.0],
                [5.0, 5.0],
                [2.0, 5.0],
            ],
        ),
        ClipFixture::new(
            &NOTCHED,
            &[[1.0, 1.0], [6.0, 1.0], [6.0, 3.0], [1.0, 3.0]],
            &[
                [2.0, 3.0],
                [2.0, 2.0],
                [3.0, 2.0],
                [3.0, 3.0],
                [4.0, 3.0],
                [4.0, 2.0],
                [5.0, 2.0],
                [5.0, 3.0],
            ],
        ),
        ClipFixture::new(
            &STAR_16_222,
            &[[-9.0, -3.0], [8.5, -3.0], [8.5, 4.0], [-9.0, 4.0]],
            &[
                [6.8, -3.0],
                [8.0, 0.0],
                [8.5, 0.5],
                [8.5, 2.0],
                [7.5, 4.0],
                [-6.0, 4.0],
                [-6.0, 2.0],
                [-5.0, 0.0],
                [-8.0, -2.0],
                [-7.25, -3.0],
            ],
        ),
        ClipFixture::new(
            &STAR_20_111,
            &[[-8.0, -5.0], [-6.0, -5.0], [-6.0, 5.0], [-8.0, 5.0]],
            &[
                [-6.0, 4.0],
                [-7.0, 4.0],
                [-6.0, 3.0],
                [-6.0, -0.75],
                [-8.0, -2.25],
                [-8.0, -3.2],
                [-6.0, -3.6],
            ],
        ),
        ClipFixture::new(
            &STAR_20_111,
            &[[4.0, -3.0], [-4.0, -7.0], [0.0, -7.0]],
            &[
                [4.0, -3.0],
                [-2.8, -6.4],
                [-2.5, -7.0],
                [-1.0, -7.0],
                [0.0, -6.0],
                [0.5, -6.5],
            ],
        ),
    ]
}

pub fn duplicate_clip_cases() -> Vec<ClipFixture> {
    vec![
        ClipFixture::new(
            &SQUARE,
            &[[4.0, 1.0], [6.0, 1.0], [6.0, 3.0], [4.0, 3.0]],
            &[[4.0, 1.0], [4.0, 3.0]],
        ),
        ClipFixture::new(
            &SQUARE,
            &[[5.0, 4.0], [3.0, 2.0], [5.0, 0.0], [7.0, 2.0]],
            &[[4.0, 3.0], [3.0, 2.0], [4.0, 1.0]],
        ),
        ClipFixture::new(
            &[
                [0.0, 0.0],
                [1.0, 0.0],
                [1.0, 1.0],
                [2.0, 1.0],
                [2.0, 0.0],
                [3.0, 0.0],
                [3.0, 4.0],
                [0.0, 4.0],
            ],
            &[[0.0, 0.0], [1.0, 0.0], [1.0, 5.0], [0.0, 5.0]],
            &[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [1.0, 4.0], [0.0, 4.0]],
        ),
        ClipFixture::new(
            &STAR_14_12345,
            &[[5.0, 7.0], [-7.0, 5.0], [-7.0, 0.0], [5.0, 0.0]],
            &[
                [5.0, 0.0],
                [5.0, 6.0],
                [4.0, 6.0],
                [2.75, 6.625],
                [-5.8, 5.2],
                [-5.0, 2.0],
                [-7.0, 2.0],
                [-7.0, 1.0],
                [-6.0, 0.0],
            ],
        ),
        ClipFixture::new(
            &STAR_16_222,
            &[[-9.0, -2.0], [8.0, -2.0], [8.0, 4.0], [-9.0, 4.0]],
            &[
                [7.2, -2.0],
                [8.0, 0.0],
                [8.0, 3.0],
                [7.5, 4.0],
                [-6.0, 4.0],
                [-6.0, 2.0],
                [-5.0, 0.0],
                [-8.0, -2.0],
            ],
        ),
    ]
}

/// Read extra clip fixtures from a JSON array.
pub fn load_clip_fixtures(path: &Path) -> Result<Vec<ClipFixture>> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
}

fn polygon_to_string(polygon: &[Point2]) -> String {
    polygon
        .iter()
        .map(|p| format!("({}, {})", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn check_same_side(case: &SameSideCase) -> Verdict {
    let got = is_same_side(case.p1, case.p2, &case.segment);
    if got == case.expected {
        Verdict::Ok
    } else {
        Verdict::BadResult(format!("{got} (expected: {})", case.expected))
    }
}

pub fn check_area(case: &AreaCase) -> Verdict {
    let got = polygon_area(&case.polygon);
    if (got - case.expected).abs() <= EPS {
        Verdict::Ok
    } else {
        Verdict::BadResult(format!("{got} (expected: {})", case.expected))
    }
}

pub fn check_clip(case: &ClipFixture) -> Verdict {
    let subject = polygon_from_pairs(&case.subject);
    let clip = polygon_from_pairs(&case.clip);
    let expected = polygon_from_pairs(&case.expected);
    match intersect_polygons(&subject, &clip) {
        Ok(got) if same_cycle_eps(&got, &expected, EPS) => Verdict::Ok,
        Ok(got) => Verdict::BadResult(format!(
            "{} (expected: {})",
            polygon_to_string(&got),
            polygon_to_string(&expected)
        )),
        Err(e) => Verdict::BadResult(e.to_string()),
    }
}

/// Run every built-in set plus `extra` clip fixtures (as a fifth set, if any).
pub fn run_all(extra: &[ClipFixture]) -> Vec<SetReport> {
    let mut reports = vec![
        SetReport {
            title: "IsSameSide tests",
            verdicts: same_side_cases().iter().map(check_same_side).collect(),
        },
        SetReport {
            title: "Polygon area tests",
            verdicts: area_cases().iter().map(check_area).collect(),
        },
        SetReport {
            title: "Sutherland-Hodgman tests",
            verdicts: clip_cases().iter().map(check_clip).collect(),
        },
        SetReport {
            title: "Sutherland-Hodgman tests with duplicates",
            verdicts: duplicate_clip_cases().iter().map(check_clip).collect(),
        },
    ];
    if !extra.is_empty() {
        reports.push(SetReport {
            title: "Extra Sutherland-Hodgman tests",
            verdicts: extra.iter().map(check_clip).collect(),
        });
    }
    reports
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn built_in_sets_all_pass() {
        let reports = run_all(&[]);
        assert_eq!(reports.len(), 4);
        let sizes: Vec<usize> = reports.iter().map(|r| r.verdicts.len()).collect();
        assert_eq!(sizes, vec![14, 10, 10, 5]);
        for r in &reports {
            assert!(r.all_passed(), "{}: {:?}", r.title, r.verdicts);
        }
    }

    #[test]
    fn wrong_expectation_is_reported() {
        let mut case = clip_cases().remove(0);
        case.expected.pop();
        match check_clip(&case) {
            Verdict::BadResult(msg) => assert!(msg.contains("expected")),
            Verdict::Ok => panic!("truncated expectation must fail"),
        }
        let bad_area = AreaCase {
            polygon: polygon_from_pairs(&[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]),
            expected: 1.0,
        };
        assert_eq!(
            check_area(&bad_area).to_string(),
            "incorrect result: 0.5 (expected: 1)"
        );
    }

    #[test]
    fn degenerate_clip_is_a_bad_result_not_a_panic() {
        let case = ClipFixture::new(&SQUARE, &[[0.0, 0.0], [1.0, 1.0]], &[]);
        assert!(matches!(check_clip(&case), Verdict::BadResult(_)));
    }

    #[test]
    fn extra_fixtures_load_from_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("extra.json");
        let fixtures = vec![duplicate_clip_cases().remove(0)];
        fs::write(&path, serde_json::to_vec(&fixtures).unwrap()).unwrap();
        let loaded = load_clip_fixtures(&path).unwrap();
        assert_eq!(loaded, fixtures);
        let reports = run_all(&loaded);
        assert_eq!(reports.len(), 5);
        assert!(reports[4].all_passed());
    }
}
