//! Collision demo application
//!
//! Headless run of the collision scene: builds the camera, tests every
//! configured shape pair, and projects all wireframes to screen space.
//! Results go to the log.
//!
//! Usage: `collision_demo [config.toml | config.ron]`

use geom_core::core::config::{Config, ConfigError, DemoConfig};
use geom_core::debug::draw::{self, BEZIER_SUBDIVISION, GRID_HALF_WIDTH, GRID_SUBDIVISION, SPHERE_SUBDIVISION};
use geom_core::debug::LineList;
use geom_core::error::GeometryError;
use geom_core::foundation::logging;
use geom_core::foundation::math::{compose_hierarchy, EulerTransform, Mat4Ext, Vec3};
use geom_core::physics::collision::{intersect, query, Shape, Sphere};
use geom_core::render::ScreenProjector;
use log::{debug, info, warn};

/// Demo errors
#[derive(thiserror::Error, Debug)]
pub enum DemoError {
    /// Config could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Degenerate camera or unsupported query
    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),
}

/// Outcome of one pairwise query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResult {
    /// Which pair was tested
    pub label: &'static str,
    /// Whether the pair intersects
    pub hit: bool,
}

/// Everything one frame produced
#[derive(Debug, Default)]
pub struct FrameReport {
    /// Collision results in query order
    pub queries: Vec<QueryResult>,
    /// All projected wireframe lines
    pub screen_lines: LineList,
    /// Wireframes dropped because a point could not be projected
    pub skipped: usize,
}

/// The demo scene plus its precomputed screen mapping
pub struct CollisionDemo {
    config: DemoConfig,
    projector: ScreenProjector,
}

impl CollisionDemo {
    /// Validate the config and build the camera matrices
    pub fn new(config: DemoConfig) -> Result<Self, DemoError> {
        config.validate()?;
        let projector = ScreenProjector::checked_from_camera(&config.camera, &config.viewport).map_err(|err| {
            warn!("Camera transform cannot be inverted: {}", err);
            err
        })?;
        debug!("Viewport matrix: {:?}", projector.viewport.to_grid());
        Ok(Self { config, projector })
    }

    fn query_pairs(&self) -> Vec<(&'static str, Shape, Shape)> {
        let scene = &self.config.scene;
        vec![
            ("sphere vs plane", scene.sphere.into(), scene.plane.into()),
            ("segment vs plane", scene.segment.into(), scene.plane.into()),
            ("line vs plane", scene.line.into(), scene.plane.into()),
            ("ray vs plane", scene.ray.into(), scene.plane.into()),
            ("triangle vs segment", scene.triangle.into(), scene.segment.into()),
            ("triangle vs line", scene.triangle.into(), scene.line.into()),
            ("triangle vs ray", scene.triangle.into(), scene.ray.into()),
            ("aabb vs aabb", scene.aabb_a.into(), scene.aabb_b.into()),
            ("aabb vs sphere", scene.aabb_a.into(), scene.sphere.into()),
            ("aabb vs segment", scene.aabb_a.into(), scene.segment.into()),
            ("aabb vs line", scene.aabb_a.into(), scene.line.into()),
            ("aabb vs ray", scene.aabb_a.into(), scene.ray.into()),
            ("obb vs sphere", scene.obb.into(), scene.sphere.into()),
        ]
    }

    /// Run every configured pair through the collision tests
    pub fn run_queries(&self) -> Result<Vec<QueryResult>, DemoError> {
        self.query_pairs()
            .into_iter()
            .map(|(label, first, second)| {
                let hit = first.intersects(&second)?;
                info!("{}: {}", label, if hit { "hit" } else { "miss" });
                Ok(QueryResult { label, hit })
            })
            .collect()
    }

    fn log_contact_points(&self) {
        let scene = &self.config.scene;
        if let Some(point) = intersect::segment_plane_point(&scene.segment, &scene.plane) {
            debug!("Segment crosses plane at {:?}", point);
        }
        if let Some(point) = intersect::line_plane_point(&scene.line, &scene.plane) {
            debug!("Line crosses plane at {:?}", point);
        }
        if let Some(point) = intersect::triangle_ray_point(&scene.triangle, &scene.ray) {
            debug!("Ray enters triangle at {:?}", point);
        }
        if let Some((t_near, t_far)) = intersect::slab_interval(&scene.aabb_a, &scene.line.origin, &scene.line.diff) {
            debug!("Line inside box for t in [{}, {}]", t_near, t_far);
        }

        let center = scene.sphere.center;
        debug!(
            "Closest point to sphere center: {:?} on the segment's line, {:?} on the segment",
            query::closest_point(&center, &scene.segment),
            query::closest_point_on_segment(&center, &scene.segment)
        );
    }

    /// World positions of the hierarchy joints, parent first
    pub fn joint_positions(&self) -> Vec<Vec3> {
        let locals: Vec<_> = self.config.scene.hierarchy.iter().map(EulerTransform::to_matrix).collect();
        compose_hierarchy(&locals)
            .iter()
            .map(|world| world.transform_coord(&Vec3::zeros()))
            .collect()
    }

    /// Named world-space wireframes for the whole scene
    pub fn world_wireframes(&self) -> Vec<(&'static str, LineList)> {
        let scene = &self.config.scene;
        let [p0, p1, p2] = scene.bezier;
        let mut lists = vec![
            ("grid", draw::grid(GRID_HALF_WIDTH, GRID_SUBDIVISION)),
            ("sphere", draw::shape(&scene.sphere.into())),
            ("plane", draw::shape(&scene.plane.into())),
            ("segment", draw::shape(&scene.segment.into())),
            ("line", draw::shape(&scene.line.into())),
            ("ray", draw::shape(&scene.ray.into())),
            ("triangle", draw::shape(&scene.triangle.into())),
            ("aabb_a", draw::shape(&scene.aabb_a.into())),
            ("aabb_b", draw::shape(&scene.aabb_b.into())),
            ("obb", draw::shape(&scene.obb.into())),
            ("bezier", draw::bezier(&p0, &p1, &p2, BEZIER_SUBDIVISION)),
        ];

        let joints = self.joint_positions();
        for joint in &joints {
            let marker = Sphere::new(*joint, scene.joint_radius);
            lists.push(("joint", draw::sphere(&marker, SPHERE_SUBDIVISION)));
        }
        lists.push(("arm", draw::polyline(&joints)));
        lists
    }

    /// One full pass: queries, contact points, projected wireframes
    pub fn run(&self) -> Result<FrameReport, DemoError> {
        let queries = self.run_queries()?;
        self.log_contact_points();

        let mut report = FrameReport {
            queries,
            ..Default::default()
        };
        for (name, list) in self.world_wireframes() {
            match list.checked_project(&self.projector) {
                Ok(projected) => {
                    debug!("{}: {} screen lines", name, projected.len());
                    report.screen_lines.append(projected);
                }
                Err(err) => {
                    warn!("Skipping {} wireframe: {}", name, err);
                    report.skipped += 1;
                }
            }
        }
        Ok(report)
    }
}

fn load_config() -> Result<DemoConfig, ConfigError> {
    match std::env::args().nth(1) {
        Some(path) => DemoConfig::load_from_file(path),
        None => Ok(DemoConfig::default()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;
    logging::init_with_level(&config.log_level);

    info!("Starting collision demo");
    let demo = CollisionDemo::new(config)?;
    let report = demo.run()?;

    let hits = report.queries.iter().filter(|q| q.hit).count();
    info!(
        "{}/{} pairs intersect, {} screen lines, {} wireframes skipped",
        hits,
        report.queries.len(),
        report.screen_lines.len(),
        report.skipped
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use geom_core::render::Camera;

    fn hit(report: &FrameReport, label: &str) -> bool {
        report
            .queries
            .iter()
            .find(|q| q.label == label)
            .map(|q| q.hit)
            .unwrap_or_else(|| panic!("no query named {label}"))
    }

    #[test]
    fn test_default_scene() {
        let demo = CollisionDemo::new(DemoConfig::default()).unwrap();
        let report = demo.run().unwrap();

        assert_eq!(report.queries.len(), 13);
        assert!(!hit(&report, "sphere vs plane"));
        assert!(!hit(&report, "aabb vs aabb"));
        assert!(hit(&report, "aabb vs sphere"));
        assert!(hit(&report, "line vs plane"));
        assert!(hit(&report, "triangle vs ray"));
        assert!(hit(&report, "aabb vs line"));

        assert_eq!(report.skipped, 0);
        assert!(!report.screen_lines.is_empty());
        assert!(report
            .screen_lines
            .iter()
            .all(|(a, b)| a.iter().chain(b.iter()).all(|v| v.is_finite())));
    }

    #[test]
    fn test_joint_spacing_follows_hierarchy() {
        let demo = CollisionDemo::new(DemoConfig::default()).unwrap();
        let joints = demo.joint_positions();
        assert_eq!(joints.len(), 3);
        assert!((joints[0] - Vec3::new(0.2, 1.0, 0.0)).norm() < 1e-5);
        // unit scale: link lengths are the child translations
        assert!(((joints[1] - joints[0]).norm() - 0.4).abs() < 1e-5);
        assert!(((joints[2] - joints[1]).norm() - 0.3).abs() < 1e-5);
    }

    #[test]
    fn test_degenerate_camera_is_rejected() {
        let mut camera = Camera::default();
        camera.transform.scale = Vec3::zeros();
        let config = DemoConfig::default().with_camera(camera);
        assert!(matches!(
            CollisionDemo::new(config),
            Err(DemoError::Geometry(GeometryError::SingularMatrix))
        ));
    }
}
