use clash3d::bounding_volume::Aabb;
use clash3d::collision::{BackendCapabilities, GeometryBuilder, TessellationConfig};
use clash3d::math::{Point, Vector};
use clash3d::scene::ShapeDescription;
use clash3d::shape::{CollisionGeometry, GeometryType, Triangle};

fn shapes() -> Vec<ShapeDescription> {
    let tri = Triangle::new(
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 1.0),
    );

    vec![
        ShapeDescription::Box {
            size: Vector::new(0.2, 0.4, 0.6),
        },
        ShapeDescription::Sphere { radius: 0.25 },
        ShapeDescription::Ellipsoid {
            radii: Vector::new(0.1, 0.2, 0.3),
        },
        ShapeDescription::Cylinder {
            radius: 0.3,
            height: 1.5,
        },
        ShapeDescription::Plane {
            normal: Vector::new(0.0, 1.0, 1.0),
            offset: -0.5,
        },
        ShapeDescription::Mesh {
            triangles: vec![tri],
            scale: Vector::new(1.0, 2.0, 3.0),
        },
        ShapeDescription::SoftMesh {
            triangles: vec![tri],
        },
    ]
}

#[test]
fn building_is_deterministic() {
    for capabilities in [BackendCapabilities::all(), BackendCapabilities::empty()] {
        let builder = GeometryBuilder::new(capabilities);

        for shape in shapes() {
            let g1 = builder.try_build(&shape).unwrap();
            let g2 = builder.try_build(&shape.clone()).unwrap();
            assert_eq!(g1, g2, "{:?}", shape);
        }
    }
}

#[test]
fn native_primitives_keep_their_parameters() {
    let builder = GeometryBuilder::new(BackendCapabilities::all());
    let shapes = shapes();

    let cuboid = builder.try_build(&shapes[0]).unwrap();
    assert_eq!(
        cuboid.as_cuboid().unwrap().half_extents,
        Vector::new(0.1, 0.2, 0.3)
    );

    let ball = builder.try_build(&shapes[1]).unwrap();
    assert_eq!(ball.as_ball().unwrap().radius, 0.25);

    let halfspace = builder.try_build(&shapes[4]).unwrap();
    let halfspace = halfspace.as_halfspace().unwrap();
    assert_relative_eq!(
        *halfspace.normal,
        Vector::new(0.0, 1.0, 1.0).normalize(),
        epsilon = 1.0e-12
    );
    assert_eq!(halfspace.offset, -0.5);
}

#[test]
fn missing_capabilities_give_finalized_meshes() {
    let builder = GeometryBuilder::new(BackendCapabilities::empty());

    for shape in shapes() {
        let geometry = builder.try_build(&shape).unwrap();

        match shape {
            ShapeDescription::Sphere { .. } => {
                assert_eq!(geometry.geometry_type(), GeometryType::Ball)
            }
            _ => {
                let mesh = geometry.as_trimesh().unwrap();
                assert!(mesh.num_triangles() > 0);
                let aabb = Aabb::from_points(mesh.vertices());
                assert_eq!(&aabb, mesh.local_aabb());
            }
        }
    }
}

#[test]
fn tessellations_match_the_primitive_bounds() {
    let native = GeometryBuilder::new(BackendCapabilities::all());
    let meshes = GeometryBuilder::new(BackendCapabilities::empty());

    for shape in &shapes()[..4] {
        let expected = native.try_build(shape).unwrap().local_aabb();
        let actual = meshes.try_build(shape).unwrap().local_aabb();
        assert_relative_eq!(expected.mins, actual.mins, epsilon = 1.0e-9);
        assert_relative_eq!(expected.maxs, actual.maxs, epsilon = 1.0e-9);
    }
}

#[test]
fn plane_slab_lies_below_the_plane() {
    let builder = GeometryBuilder::new(BackendCapabilities::NATIVE_BOX);
    let normal = Vector::new(0.0, 1.0, 1.0).normalize();
    let geometry = builder
        .try_build(&ShapeDescription::Plane {
            normal: Vector::new(0.0, 1.0, 1.0),
            offset: -0.5,
        })
        .unwrap();

    let CollisionGeometry::TriMesh(mesh) = geometry else {
        panic!("expected a triangle mesh");
    };

    let heights: Vec<_> = mesh.vertices().iter().map(|v| v.coords.dot(&normal)).collect();
    let top = heights.iter().copied().fold(f64::MIN, f64::max);
    let bottom = heights.iter().copied().fold(f64::MAX, f64::min);
    assert_relative_eq!(top, -0.5, epsilon = 1.0e-9);
    assert_relative_eq!(bottom, -0.51, epsilon = 1.0e-9);
}

#[test]
fn tessellation_resolution_is_configurable() {
    let coarse = GeometryBuilder::new(BackendCapabilities::empty()).with_tessellation(
        TessellationConfig {
            cylinder_slices: 3,
            cylinder_stacks: 1,
            ..TessellationConfig::default()
        },
    );
    let fine = GeometryBuilder::new(BackendCapabilities::empty());
    let cylinder = ShapeDescription::Cylinder {
        radius: 1.0,
        height: 1.0,
    };

    let n_coarse = coarse.try_build(&cylinder).unwrap();
    let n_fine = fine.try_build(&cylinder).unwrap();
    assert!(
        n_coarse.as_trimesh().unwrap().num_triangles()
            < n_fine.as_trimesh().unwrap().num_triangles()
    );
}
