use crate::math::{Point, Real};
use crate::shape::{FaceId, HalfEdgeMesh, HalfEdgeTopology};

/// A face of the hull under construction together with the input points lying
/// in front of it.
///
/// `face` is set to `None` once the face has been absorbed by a merge, the
/// entry is then dropped at the end of the current iteration.
#[derive(Clone, Debug)]
pub(super) struct FaceOutsideSet {
    pub face: Option<FaceId>,
    pub points: Vec<u32>,
    /// None of `points` is further than `visibility_epsilon` from the face.
    ///
    /// The points are kept so they are partitioned again if the face is
    /// replaced later on.
    pub settled: bool,
}

impl FaceOutsideSet {
    pub fn new(face: FaceId) -> Self {
        Self {
            face: Some(face),
            points: Vec::new(),
            settled: false,
        }
    }

    /// The outside point furthest from the face plane, with its distance.
    ///
    /// Ties keep the point added first.
    pub fn furthest_point(
        &self,
        mesh: &HalfEdgeMesh,
        points: &[Point<Real>],
    ) -> Option<(u32, Real)> {
        let face = self.face?;
        let mut best = None;
        let mut best_dist = -Real::MAX;

        for id in &self.points {
            let dist = mesh.point_distance_to_face(face, &points[*id as usize]);

            if dist > best_dist {
                best_dist = dist;
                best = Some(*id);
            }
        }

        best.map(|id| (id, best_dist))
    }
}

/// Moves the outside points of `face` into `pool` and marks its entry as absorbed.
pub(super) fn release_outside_set(sets: &mut [FaceOutsideSet], face: FaceId, pool: &mut Vec<u32>) {
    for set in sets.iter_mut().filter(|set| set.face == Some(face)) {
        pool.append(&mut set.points);
        set.face = None;
    }
}

/// Assigns each candidate to the live face it is furthest in front of.
///
/// Points that are behind or on every face plane are inside the hull and
/// discarded.
pub(super) fn partition_points(
    mesh: &HalfEdgeMesh,
    sets: &mut [FaceOutsideSet],
    points: &[Point<Real>],
    candidates: impl IntoIterator<Item = u32>,
) {
    for id in candidates {
        let pt = &points[id as usize];
        let mut best = None;
        let mut best_dist = 0.0;

        for (i, set) in sets.iter().enumerate() {
            let Some(face) = set.face else {
                continue;
            };
            let dist = mesh.point_distance_to_face(face, pt);

            if dist > best_dist {
                best_dist = dist;
                best = Some(i);
            }
        }

        if let Some(i) = best {
            sets[i].points.push(id);
            sets[i].settled = false;
        }
    }
}
