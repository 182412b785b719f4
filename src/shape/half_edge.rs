//! Half-edge topology of convex polyhedra.
//!
//! Edges and faces live in arenas and reference each other through
//! [`EdgeId`] and [`FaceId`] indices. [`HalfEdgeMesh`] is the mutable,
//! slab-backed arena used while a hull is built; the finished
//! [`ConvexCollider`](crate::shape::ConvexCollider) stores a compacted,
//! read-only copy. Both implement [`HalfEdgeTopology`], which provides
//! the traversals.

use crate::math::{Point, Real, UnitVector, Vector, DEFAULT_EPSILON};
use crate::utils::{self, point_cloud_support_point, NewellPlane};
use hashbrown::hash_map::Entry;
use hashbrown::HashMap;
use slab::Slab;
use smallvec::SmallVec;

/// Index of a half-edge in its arena.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct EdgeId(pub u32);

/// Index of a face in its arena.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct FaceId(pub u32);

macro_rules! impl_arena_id(
    ($Id: ident) => {
        impl $Id {
            /// A sentinel id that does not reference anything.
            pub const INVALID: Self = Self(u32::MAX);

            /// Is this id different from [`Self::INVALID`]?
            #[inline]
            pub fn is_valid(self) -> bool {
                self != Self::INVALID
            }

            #[inline]
            pub(crate) fn index(self) -> usize {
                self.0 as usize
            }

            #[inline]
            pub(crate) fn from_index(index: usize) -> Self {
                Self(index as u32)
            }
        }
    }
);

impl_arena_id!(EdgeId);
impl_arena_id!(FaceId);

/// Small list of edges, typically the boundary of one face.
pub type EdgeList = SmallVec<[EdgeId; 8]>;

/// A directed edge of a face boundary.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct HalfEdge {
    /// The vertex this edge starts from.
    pub origin: Point<Real>,
    /// Index of `origin` in the vertex list of the mesh this edge belongs to.
    pub vertex: u32,
    /// The next edge, counter-clockwise around `face`.
    pub next: EdgeId,
    /// The previous edge, counter-clockwise around `face`.
    pub prev: EdgeId,
    /// The opposite edge, on the adjacent face.
    pub twin: EdgeId,
    /// The face this edge bounds.
    pub face: FaceId,
    /// Cached value of [`HalfEdgeTopology::robust_edge_direction`].
    ///
    /// Only meaningful once the topology is complete.
    pub robust_dir: Vector<Real>,
}

impl HalfEdge {
    /// An unlinked edge starting at `origin`.
    pub fn new(origin: Point<Real>, vertex: u32) -> Self {
        Self {
            origin,
            vertex,
            next: EdgeId::INVALID,
            prev: EdgeId::INVALID,
            twin: EdgeId::INVALID,
            face: FaceId::INVALID,
            robust_dir: Vector::zeros(),
        }
    }
}

/// A planar, convex polygon of the polyhedron boundary.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct HalfEdgeFace {
    /// Any edge of the boundary of this face.
    pub start_edge: EdgeId,
    /// The outward unit normal. The boundary winds counter-clockwise around it.
    pub normal: Vector<Real>,
    /// The average of the face vertices.
    pub centroid: Point<Real>,
}

/// Read access to a half-edge structure.
///
/// A well-formed topology satisfies `twin(twin(e)) == e`, `prev(next(e)) == e`,
/// and every edge reached by walking `next` from a face start edge belongs to
/// that face. Traversals on a topology violating these invariants are
/// programming errors.
pub trait HalfEdgeTopology {
    /// The edge with the given id.
    fn edge(&self, id: EdgeId) -> &HalfEdge;
    /// The face with the given id.
    fn face(&self, id: FaceId) -> &HalfEdgeFace;

    /// Calls `f` on every boundary edge of `face`, following the winding order.
    fn for_each_edge(&self, face: FaceId, mut f: impl FnMut(EdgeId, &HalfEdge)) {
        let start = self.face(face).start_edge;
        let mut curr = start;

        loop {
            let edge = self.edge(curr);
            let next = edge.next;
            f(curr, edge);
            curr = next;

            if curr == start {
                break;
            }
        }
    }

    /// Calls `f` on every boundary edge of `face`, against the winding order.
    fn for_each_edge_reverse(&self, face: FaceId, mut f: impl FnMut(EdgeId, &HalfEdge)) {
        let start = self.face(face).start_edge;
        let mut curr = start;

        loop {
            let edge = self.edge(curr);
            let prev = edge.prev;
            f(curr, edge);
            curr = prev;

            if curr == start {
                break;
            }
        }
    }

    /// The boundary edges of `face`, in winding order, starting with its start edge.
    fn face_edges(&self, face: FaceId) -> EdgeList {
        let mut result = EdgeList::new();
        self.for_each_edge(face, |id, _| result.push(id));
        result
    }

    /// The number of boundary edges of `face`.
    fn face_edge_count(&self, face: FaceId) -> usize {
        let mut count = 0;
        self.for_each_edge(face, |_, _| count += 1);
        count
    }

    /// The vertices of `face`, in winding order.
    fn face_vertices(&self, face: FaceId) -> SmallVec<[Point<Real>; 8]> {
        let mut result = SmallVec::new();
        self.for_each_edge(face, |_, edge| result.push(edge.origin));
        result
    }

    /// The face on the other side of `edge`.
    #[inline]
    fn twin_face(&self, edge: EdgeId) -> FaceId {
        self.edge(self.edge(edge).twin).face
    }

    /// The vertex `edge` ends at.
    #[inline]
    fn edge_end(&self, edge: EdgeId) -> Point<Real> {
        self.edge(self.edge(edge).next).origin
    }

    /// Direction of `edge` computed from the normals of its two adjacent faces.
    ///
    /// This is `normal(face) × normal(twin face)`. On a convex polyhedron it points
    /// the same way as the edge itself but stays accurate for very short edges.
    #[inline]
    fn robust_edge_direction(&self, edge: EdgeId) -> Vector<Real> {
        let e = self.edge(edge);
        let n1 = self.face(e.face).normal;
        let n2 = self.face(self.edge(e.twin).face).normal;
        n1.cross(&n2)
    }

    /// The normal of the face owning `edge`.
    ///
    /// `local_normal(edge)` and `local_normal(twin)` are the endpoints of the arc
    /// `edge` maps to on the Gauss map.
    #[inline]
    fn local_normal(&self, edge: EdgeId) -> Vector<Real> {
        self.face(self.edge(edge).face).normal
    }

    /// The normalized average of the two faces adjacent to `edge`.
    fn edge_normal(&self, edge: EdgeId) -> Option<UnitVector<Real>> {
        let twin = self.edge(edge).twin;
        UnitVector::try_new(
            self.local_normal(edge) + self.local_normal(twin),
            DEFAULT_EPSILON,
        )
    }

    /// Signed distance from `point` to the plane of `face`.
    #[inline]
    fn point_distance_to_face(&self, face: FaceId, point: &Point<Real>) -> Real {
        let f = self.face(face);
        utils::point_distance_to_plane(&f.normal, &f.centroid, point)
    }

    /// Is `point` further than `eps` in front of `face`?
    #[inline]
    fn is_point_visible_from_face(&self, face: FaceId, point: &Point<Real>, eps: Real) -> bool {
        self.point_distance_to_face(face, point) > eps
    }

    /// Sum of the widths of `face` along two tangent directions.
    ///
    /// The first tangent goes from the start vertex to the centroid, the second
    /// one is orthogonal to it within the face plane.
    fn face_extents(&self, face: FaceId) -> Real {
        let f = self.face(face);
        let vertices = self.face_vertices(face);
        let start = self.edge(f.start_edge).origin;

        let Some(forward) = (f.centroid - start).try_normalize(DEFAULT_EPSILON) else {
            return 0.0;
        };
        let right = f.normal.cross(&forward);

        let width = |dir: Vector<Real>| {
            let max = point_cloud_support_point(&dir, &vertices);
            let min = point_cloud_support_point(&-dir, &vertices);
            (max - f.centroid).dot(&dir) + (min - f.centroid).dot(&-dir)
        };

        width(forward) + width(right)
    }
}

/// A mutable half-edge arena.
///
/// Ids stay valid until the element they reference is removed. Removed slots
/// may be reused by later insertions.
#[derive(Clone, Debug, Default)]
pub struct HalfEdgeMesh {
    edges: Slab<HalfEdge>,
    faces: Slab<HalfEdgeFace>,
}

impl HalfEdgeTopology for HalfEdgeMesh {
    #[inline]
    fn edge(&self, id: EdgeId) -> &HalfEdge {
        &self.edges[id.index()]
    }

    #[inline]
    fn face(&self, id: FaceId) -> &HalfEdgeFace {
        &self.faces[id.index()]
    }
}

impl HalfEdgeMesh {
    /// An empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a closed mesh from polygons given as indices into `vertices`.
    ///
    /// Each polygon gets its Newell normal. Twins are matched through the
    /// opposite directed edge. Returns `None` if a polygon is degenerate, if a
    /// directed edge is used twice, or if one has no opposite.
    pub fn from_polygons(vertices: &[Point<Real>], polygons: &[&[u32]]) -> Option<Self> {
        let mut mesh = Self::new();
        let mut directed_edges = HashMap::new();

        for polygon in polygons {
            if polygon.len() < 3 {
                return None;
            }

            let pts: SmallVec<[Point<Real>; 8]> =
                polygon.iter().map(|i| vertices[*i as usize]).collect();
            let plane = NewellPlane::fit(&pts)?;
            let edges: SmallVec<[EdgeId; 8]> = polygon
                .iter()
                .map(|i| mesh.add_edge(vertices[*i as usize], *i))
                .collect();

            for k in 0..edges.len() {
                let next = (k + 1) % edges.len();
                mesh.link(edges[k], edges[next]);

                match directed_edges.entry((polygon[k], polygon[next])) {
                    Entry::Occupied(_) => return None,
                    Entry::Vacant(e) => {
                        let _ = e.insert(edges[k]);
                    }
                }
            }

            let _ = mesh.add_face(edges[0], *plane.normal);
        }

        for ((a, b), edge) in directed_edges.iter() {
            let twin = directed_edges.get(&(*b, *a))?;
            mesh.edge_mut(*edge).twin = *twin;
        }

        Some(mesh)
    }

    /// The number of live edges.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// The number of live faces.
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Does `id` reference a live face?
    pub fn contains_face(&self, id: FaceId) -> bool {
        self.faces.contains(id.index())
    }

    /// Does `id` reference a live edge?
    pub fn contains_edge(&self, id: EdgeId) -> bool {
        self.edges.contains(id.index())
    }

    /// Iterates through the ids of the live faces, in storage order.
    pub fn face_ids(&self) -> impl Iterator<Item = FaceId> + '_ {
        self.faces.iter().map(|(i, _)| FaceId::from_index(i))
    }

    /// Iterates through the ids of the live edges, in storage order.
    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edges.iter().map(|(i, _)| EdgeId::from_index(i))
    }

    /// Mutable access to an edge.
    #[inline]
    pub fn edge_mut(&mut self, id: EdgeId) -> &mut HalfEdge {
        &mut self.edges[id.index()]
    }

    /// Mutable access to a face.
    #[inline]
    pub fn face_mut(&mut self, id: FaceId) -> &mut HalfEdgeFace {
        &mut self.faces[id.index()]
    }

    /// Inserts an unlinked edge starting at `origin`.
    pub fn add_edge(&mut self, origin: Point<Real>, vertex: u32) -> EdgeId {
        EdgeId::from_index(self.edges.insert(HalfEdge::new(origin, vertex)))
    }

    /// Makes `b` follow `a`.
    #[inline]
    pub fn link(&mut self, a: EdgeId, b: EdgeId) {
        self.edge_mut(a).next = b;
        self.edge_mut(b).prev = a;
    }

    /// Makes `a` and `b` twins of each other.
    #[inline]
    pub fn set_twins(&mut self, a: EdgeId, b: EdgeId) {
        self.edge_mut(a).twin = b;
        self.edge_mut(b).twin = a;
    }

    /// Inserts a face bounded by the cycle containing `start_edge`.
    ///
    /// The boundary edges must already be linked. The centroid is computed and
    /// every boundary edge is assigned to the new face.
    pub fn add_face(&mut self, start_edge: EdgeId, normal: Vector<Real>) -> FaceId {
        let id = FaceId::from_index(self.faces.insert(HalfEdgeFace {
            start_edge,
            normal,
            centroid: Point::origin(),
        }));
        self.initialize_face(id);
        id
    }

    /// Recomputes the centroid of `face` and assigns its boundary edges to it.
    pub fn initialize_face(&mut self, face: FaceId) {
        let edges = self.face_edges(face);
        let mut sum = Vector::zeros();

        for e in &edges {
            let edge = self.edge_mut(*e);
            edge.face = face;
            sum += edge.origin.coords;
        }

        self.face_mut(face).centroid = Point::from(sum / edges.len() as Real);
    }

    /// Flips the winding and the normal of `face`.
    ///
    /// Every edge keeps its origin, so this is only meaningful for a face whose
    /// edges have no twins yet.
    pub fn invert_face(&mut self, face: FaceId) {
        let mut edges = EdgeList::new();
        self.for_each_edge_reverse(face, |id, _| edges.push(id));

        let n = edges.len();
        for i in 0..n {
            let new_next = edges[(i + 1) % n];
            let new_prev = edges[(i + n - 1) % n];
            let edge = self.edge_mut(edges[i]);
            edge.next = new_next;
            edge.prev = new_prev;
        }

        let f = self.face_mut(face);
        f.normal = -f.normal;
        f.start_edge = edges[0];
    }

    /// Removes an edge, clearing the twin link pointing back to it.
    pub fn remove_edge(&mut self, edge: EdgeId) {
        let twin = self.edge(edge).twin;

        if twin.is_valid() && self.contains_edge(twin) && self.edge(twin).twin == edge {
            self.edge_mut(twin).twin = EdgeId::INVALID;
        }

        let _ = self.edges.remove(edge.index());
    }

    /// Removes a face record without touching its edges.
    pub fn remove_face_record(&mut self, face: FaceId) {
        let _ = self.faces.remove(face.index());
    }

    /// Removes `face` and all its boundary edges.
    pub fn remove_face(&mut self, face: FaceId) {
        for edge in self.face_edges(face) {
            self.remove_edge(edge);
        }

        self.remove_face_record(face);
    }

    /// Recomputes the cached robust direction of every edge.
    pub fn update_robust_directions(&mut self) {
        let ids: Vec<_> = self.edge_ids().collect();

        for id in ids {
            let dir = self.robust_edge_direction(id);
            self.edge_mut(id).robust_dir = dir;
        }
    }

    /// Checks the local link invariants of every live edge.
    ///
    /// Returns `false` if a link is dangling, if `prev(next(e)) != e`, if
    /// `twin(twin(e)) != e`, or if an edge does not bound the face it claims to.
    pub fn has_consistent_links(&self) -> bool {
        for (i, edge) in self.edges.iter() {
            let id = EdgeId::from_index(i);

            if !self.contains_edge(edge.next)
                || !self.contains_edge(edge.prev)
                || !self.contains_edge(edge.twin)
                || !self.contains_face(edge.face)
            {
                return false;
            }

            if self.edge(edge.next).prev != id
                || self.edge(edge.prev).next != id
                || self.edge(edge.twin).twin != id
                || self.edge(edge.next).face != edge.face
            {
                return false;
            }
        }

        true
    }

    /// Moves the live elements into dense storage, returned as
    /// `(vertices, edges, faces)`.
    ///
    /// Ids are renumbered in storage order. Vertex indices are renumbered in
    /// order of first use so the returned vertex list contains every distinct
    /// edge origin exactly once.
    pub fn compact(&self) -> (Vec<Point<Real>>, Vec<HalfEdge>, Vec<HalfEdgeFace>) {
        let mut edge_map = vec![EdgeId::INVALID; self.edges.capacity()];
        let mut face_map = vec![FaceId::INVALID; self.faces.capacity()];

        for (new_id, (old_id, _)) in self.edges.iter().enumerate() {
            edge_map[old_id] = EdgeId::from_index(new_id);
        }

        for (new_id, (old_id, _)) in self.faces.iter().enumerate() {
            face_map[old_id] = FaceId::from_index(new_id);
        }

        let remap_edge = |id: EdgeId| {
            if id.is_valid() {
                edge_map[id.index()]
            } else {
                id
            }
        };

        let mut vertex_map = HashMap::new();
        let mut vertices = Vec::new();
        let mut edges = Vec::with_capacity(self.edges.len());

        for (_, edge) in self.edges.iter() {
            let vertex = *vertex_map.entry(edge.vertex).or_insert_with(|| {
                vertices.push(edge.origin);
                (vertices.len() - 1) as u32
            });

            edges.push(HalfEdge {
                origin: edge.origin,
                vertex,
                next: remap_edge(edge.next),
                prev: remap_edge(edge.prev),
                twin: remap_edge(edge.twin),
                face: if edge.face.is_valid() {
                    face_map[edge.face.index()]
                } else {
                    edge.face
                },
                robust_dir: edge.robust_dir,
            });
        }

        let faces = self
            .faces
            .iter()
            .map(|(_, face)| HalfEdgeFace {
                start_edge: remap_edge(face.start_edge),
                ..*face
            })
            .collect();

        (vertices, edges, faces)
    }
}
