//! Wireframe line-list generators
//!
//! Every generator returns world-space line segments. Turning them into
//! pixels is a separate step ([`LineList::project`]), so the geometry here
//! stays independent of any renderer.

use log::trace;

use crate::error::GeometryResult;
use crate::foundation::math::{constants, Vec3};
use crate::physics::collision::{perpendicular, Aabb, Obb, Plane, Segment, Shape, Sphere, Triangle};
use crate::render::camera::ScreenProjector;

/// Default grid half width
pub const GRID_HALF_WIDTH: f32 = 2.0;

/// Default grid cell count per side
pub const GRID_SUBDIVISION: u32 = 10;

/// Default lat/long step count for spheres
pub const SPHERE_SUBDIVISION: u32 = 20;

/// Default half size of a drawn plane quad
pub const PLANE_EXTENT: f32 = 2.0;

/// Default step count for Bézier curves
pub const BEZIER_SUBDIVISION: u32 = 32;

/// Box edges as corner index pairs (bottom face, top face, sides)
const BOX_EDGES: [(usize, usize); 12] = [
    (0, 1), (1, 3), (3, 2), (2, 0),
    (4, 5), (5, 7), (7, 6), (6, 4),
    (0, 4), (1, 5), (2, 6), (3, 7),
];

/// A batch of line segments `(start, end)`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineList {
    /// The segments, in draw order
    pub lines: Vec<(Vec3, Vec3)>,
}

impl LineList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty list with room for `capacity` lines
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            lines: Vec::with_capacity(capacity),
        }
    }

    /// Add one line
    pub fn push(&mut self, start: Vec3, end: Vec3) {
        self.lines.push((start, end));
    }

    /// Append every line of another list
    pub fn append(&mut self, other: LineList) {
        self.lines.extend(other.lines);
    }

    /// Number of lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True when there are no lines
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterate over the lines
    pub fn iter(&self) -> impl Iterator<Item = &(Vec3, Vec3)> {
        self.lines.iter()
    }

    /// Map every endpoint to screen space
    pub fn project(&self, projector: &ScreenProjector) -> LineList {
        let lines = self
            .lines
            .iter()
            .map(|(start, end)| (projector.project_point(start), projector.project_point(end)))
            .collect();
        LineList { lines }
    }

    /// Map every endpoint to screen space, failing on the first point with clip `w == 0`
    pub fn checked_project(&self, projector: &ScreenProjector) -> GeometryResult<LineList> {
        let lines = self
            .lines
            .iter()
            .map(|(start, end)| Ok((projector.checked_project_point(start)?, projector.checked_project_point(end)?)))
            .collect::<GeometryResult<Vec<_>>>()?;
        Ok(LineList { lines })
    }
}

impl IntoIterator for LineList {
    type Item = (Vec3, Vec3);
    type IntoIter = std::vec::IntoIter<(Vec3, Vec3)>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.into_iter()
    }
}

/// Square grid on the y = 0 plane
///
/// `subdivision + 1` lines run along z and as many along x. A subdivision
/// of 0 gives an empty list.
pub fn grid(half_width: f32, subdivision: u32) -> LineList {
    if subdivision == 0 {
        return LineList::new();
    }
    let every = (half_width * 2.0) / subdivision as f32;
    let mut list = LineList::with_capacity(2 * (subdivision as usize + 1));

    for index in 0..=subdivision {
        let x = -half_width + every * index as f32;
        list.push(Vec3::new(x, 0.0, -half_width), Vec3::new(x, 0.0, half_width));
    }
    for index in 0..=subdivision {
        let z = -half_width + every * index as f32;
        list.push(Vec3::new(-half_width, 0.0, z), Vec3::new(half_width, 0.0, z));
    }
    list
}

/// Latitude/longitude wireframe
///
/// Each cell contributes a line one latitude step up and one longitude
/// step around, so `2 * subdivision²` lines in total.
pub fn sphere(sphere: &Sphere, subdivision: u32) -> LineList {
    let lon_every = constants::TAU / subdivision as f32;
    let lat_every = constants::PI / subdivision as f32;
    let point = |lat: f32, lon: f32| {
        let (sin_lat, cos_lat) = lat.sin_cos();
        let (sin_lon, cos_lon) = lon.sin_cos();
        sphere.center + Vec3::new(cos_lat * cos_lon, sin_lat, cos_lat * sin_lon) * sphere.radius
    };

    let cells = subdivision as usize * subdivision as usize;
    let mut list = LineList::with_capacity(2 * cells);
    for lat_index in 0..subdivision {
        let lat = -constants::HALF_PI + lat_every * lat_index as f32;
        for lon_index in 0..subdivision {
            let lon = lon_index as f32 * lon_every;
            let a = point(lat, lon);
            list.push(a, point(lat + lat_every, lon));
            list.push(a, point(lat, lon + lon_every));
        }
    }
    list
}

/// Quad of half size `extent` centered on the plane's closest point to the origin
///
/// The corners are `±perp` and `±cross(normal, perp)`, drawn as a loop
/// through alternating directions.
pub fn plane(plane: &Plane, extent: f32) -> LineList {
    let center = plane.center();
    let first = perpendicular(&plane.normal).normalize();
    let second = plane.normal.cross(&first);
    let points = [first, -first, second, -second].map(|direction| center + direction * extent);

    let mut list = LineList::with_capacity(4);
    list.push(points[0], points[2]);
    list.push(points[2], points[1]);
    list.push(points[1], points[3]);
    list.push(points[3], points[0]);
    list
}

/// The three edges of a triangle
pub fn triangle(triangle: &Triangle) -> LineList {
    let [v0, v1, v2] = triangle.vertices;
    LineList {
        lines: vec![(v0, v1), (v1, v2), (v2, v0)],
    }
}

fn box_edges(corners: &[Vec3; 8]) -> LineList {
    LineList {
        lines: BOX_EDGES.iter().map(|&(a, b)| (corners[a], corners[b])).collect(),
    }
}

/// The twelve edges of an axis-aligned box
pub fn aabb(aabb: &Aabb) -> LineList {
    box_edges(&aabb.corners())
}

/// The twelve edges of an oriented box
pub fn obb(obb: &Obb) -> LineList {
    box_edges(&obb.corners())
}

/// A single line from start to end
pub fn segment(segment: &Segment) -> LineList {
    LineList {
        lines: vec![(segment.origin, segment.end())],
    }
}

/// Open polyline through `points`
pub fn polyline(points: &[Vec3]) -> LineList {
    LineList {
        lines: points.windows(2).map(|pair| (pair[0], pair[1])).collect(),
    }
}

/// Quadratic Bézier curve by nested linear interpolation
pub fn bezier(p0: &Vec3, p1: &Vec3, p2: &Vec3, subdivision: u32) -> LineList {
    let mut list = LineList::with_capacity(subdivision as usize);
    let mut previous = *p0;
    for index in 1..=subdivision {
        let t = index as f32 / subdivision as f32;
        let p0p1 = p0.lerp(p1, t);
        let p1p2 = p1.lerp(p2, t);
        let current = p0p1.lerp(&p1p2, t);
        list.push(previous, current);
        previous = current;
    }
    list
}

/// Wireframe for any shape, using the default subdivisions
///
/// Lines and rays have no finite extent; they are drawn over `t` in `[0, 1]`.
pub fn shape(shape: &Shape) -> LineList {
    let list = match shape {
        Shape::Sphere(s) => sphere(s, SPHERE_SUBDIVISION),
        Shape::Segment(s) => segment(s),
        Shape::Line(l) => segment(&Segment::new(l.origin, l.diff)),
        Shape::Ray(r) => segment(&Segment::new(r.origin, r.diff)),
        Shape::Plane(p) => plane(p, PLANE_EXTENT),
        Shape::Triangle(t) => triangle(t),
        Shape::Aabb(b) => aabb(b),
        Shape::Obb(b) => obb(b),
    };
    trace!("wireframe for {:?}: {} lines", shape.kind(), list.len());
    list
}
