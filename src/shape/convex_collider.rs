use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::half_edge::{
    EdgeId, FaceId, HalfEdge, HalfEdgeFace, HalfEdgeMesh, HalfEdgeTopology,
};
use crate::shape::SupportMap;
use crate::utils::{self, GeometryTolerance};

/// A convex polyhedron represented by its half-edge boundary.
///
/// Colliders are usually built from a point cloud with
/// [`convex_hull`](crate::transformation::convex_hull). Once built, a collider
/// is never mutated: rebuilding a shape means creating a new collider.
///
/// Every face is a planar convex polygon (coplanar triangles are merged), so
/// a cube has six quadrilateral faces, twelve edges and eight vertices.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Clone)]
pub struct ConvexCollider {
    vertices: Vec<Point<Real>>,
    edges: Vec<HalfEdge>,
    faces: Vec<HalfEdgeFace>,
    local_centroid: Point<Real>,
    tolerance: GeometryTolerance,
}

impl HalfEdgeTopology for ConvexCollider {
    #[inline]
    fn edge(&self, id: EdgeId) -> &HalfEdge {
        &self.edges[id.index()]
    }

    #[inline]
    fn face(&self, id: FaceId) -> &HalfEdgeFace {
        &self.faces[id.index()]
    }
}

impl ConvexCollider {
    /// Creates the collider from a finished construction arena.
    ///
    /// The robust directions of the edges are cached and the vertex list is
    /// derived once from the faces.
    pub(crate) fn from_half_edge_mesh(
        mut mesh: HalfEdgeMesh,
        tolerance: GeometryTolerance,
    ) -> Self {
        debug_assert!(mesh.has_consistent_links());
        mesh.update_robust_directions();
        let (vertices, edges, faces) = mesh.compact();
        let local_centroid = Self::vertex_average(&vertices);

        Self {
            vertices,
            edges,
            faces,
            local_centroid,
            tolerance,
        }
    }

    /// Creates a collider from convex polygons given as indices into `vertices`.
    ///
    /// Each polygon must be counter-clockwise when seen from outside and every
    /// directed edge must appear exactly once, with its opposite edge in another
    /// polygon. Returns `None` if the polygons do not form a closed surface or if
    /// a polygon is degenerate. Convexity is not checked.
    pub fn from_convex_polygons(vertices: &[Point<Real>], polygons: &[&[u32]]) -> Option<Self> {
        let mesh = HalfEdgeMesh::from_polygons(vertices, polygons)?;
        let tolerance = GeometryTolerance::from_points(vertices);
        Some(Self::from_half_edge_mesh(mesh, tolerance))
    }

    /// Creates a box centered at the origin with the given half-extents.
    ///
    /// # Panics
    ///
    /// Panics if one of the half-extents is not strictly positive.
    pub fn cuboid(half_extents: Vector<Real>) -> Self {
        // Vertex `i` has the sign of its x, y, z coordinates given by bits 0, 1, 2 of `i`.
        let vertices: Vec<_> = (0..8)
            .map(|i| {
                let sign = |bit: u32| if i & (1 << bit) != 0 { 1.0 } else { -1.0 };
                Point::new(
                    sign(0) * half_extents.x,
                    sign(1) * half_extents.y,
                    sign(2) * half_extents.z,
                )
            })
            .collect();
        let polygons: [&[u32]; 6] = [
            &[0, 4, 6, 2],
            &[1, 3, 7, 5],
            &[0, 1, 5, 4],
            &[2, 6, 7, 3],
            &[0, 2, 3, 1],
            &[4, 5, 7, 6],
        ];

        Self::from_convex_polygons(&vertices, &polygons)
            .expect("the half-extents of a box must be strictly positive")
    }

    fn vertex_average(vertices: &[Point<Real>]) -> Point<Real> {
        if vertices.is_empty() {
            return Point::origin();
        }

        let sum = vertices
            .iter()
            .fold(Vector::zeros(), |acc, pt| acc + pt.coords);
        Point::from(sum / vertices.len() as Real)
    }

    /// The faces of this collider.
    #[inline]
    pub fn halfedge_faces(&self) -> &[HalfEdgeFace] {
        &self.faces
    }

    /// All the half-edges of this collider. Each geometric edge appears twice.
    #[inline]
    pub fn halfedges(&self) -> &[HalfEdge] {
        &self.edges
    }

    /// The vertices of this collider, each distinct vertex appearing once.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The average of the vertices of this collider.
    #[inline]
    pub fn local_centroid(&self) -> Point<Real> {
        self.local_centroid
    }

    /// The centroid of this collider transformed by `pos`.
    #[inline]
    pub fn world_centroid(&self, pos: &Isometry<Real>) -> Point<Real> {
        pos * self.local_centroid
    }

    /// The tolerances this collider was built with.
    #[inline]
    pub fn tolerance(&self) -> &GeometryTolerance {
        &self.tolerance
    }

    /// The ids of all the faces.
    pub fn face_ids(&self) -> impl ExactSizeIterator<Item = FaceId> {
        (0..self.faces.len()).map(FaceId::from_index)
    }

    /// The ids of all the half-edges.
    pub fn edge_ids(&self) -> impl ExactSizeIterator<Item = EdgeId> {
        (0..self.edges.len()).map(EdgeId::from_index)
    }

    /// One half-edge per geometric edge: the one with the smallest id of its pair.
    pub fn unique_edge_ids(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edge_ids().filter(|id| *id < self.edges[id.index()].twin)
    }

    /// The world-space vertex maximizing `dot(v - plane_point, dir)`, with `v`
    /// transformed by `pos`.
    ///
    /// `plane_point` and `dir` are given in world space.
    pub fn support_point_toward_plane(
        &self,
        pos: &Isometry<Real>,
        plane_point: &Point<Real>,
        dir: &Vector<Real>,
    ) -> Point<Real> {
        let local_dir = pos.inverse_transform_vector(dir);
        let local_plane_point = pos.inverse_transform_point(plane_point);

        let mut best = 0;
        let mut best_dist = -Real::MAX;

        for (i, pt) in self.vertices.iter().enumerate() {
            let dist = utils::point_distance_to_plane(&local_dir, &local_plane_point, pt);

            if dist > best_dist {
                best_dist = dist;
                best = i;
            }
        }

        pos * self.vertices[best]
    }
}

impl SupportMap for ConvexCollider {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        utils::point_cloud_support_point(dir, &self.vertices)
    }
}
