use log::{info, warn, LevelFilter};
use mx_math::*;

fn init_logger() {
    env_logger::Builder::new()
        .filter(Some(env!("CARGO_CRATE_NAME")), LevelFilter::Info)
        .filter(Some("mx_math"), LevelFilter::Trace)
        .parse_default_env()
        .try_init()
        .ok();
}

fn main() {
    init_logger();

    // Scale, then rotate a quarter turn in the xy-plane
    let mut transform = Matrix4::from_scale(&Vector4::new(2.0, 2.0, 2.0, 1.0));
    let rotation = Matrix2::from_rotation(to_radian(90.0));
    for row in 0..2 {
        for col in 0..2 {
            transform[(row, col)] = rotation[(row, col)] * 2.0;
        }
    }
    info!("transform: {transform}");
    info!("determinant: {}", transform.determinant());

    match transform.invert() {
        Some(inv) => {
            info!("inverse: {inv}");
            info!("transform * inverse == identity: {}", (transform * inv).equals(&Matrix4::identity()));
        },
        None => warn!("transform is singular"),
    }

    // A singular matrix has no inverse
    let singular = Matrix2::new(1.0, 2.0, 2.0, 4.0);
    if singular.invert().is_none() {
        info!("{singular} has no inverse");
    }

    let a = Vector3::new(1.0, 2.0, 3.0);
    let b = Vector3::new(4.0, 5.0, 6.0);
    info!("{a} x {b} = {}, {a} . {b} = {}", a.cross(&b), a.dot(&b));
    info!("angle between {a} and {b}: {} degrees", to_degree(a.angle(&b)));

    let mut dir = a;
    match dir.normalize() {
        Ok(dir) => info!("normalized: {dir}"),
        Err(err) => warn!("failed to normalize {a}: {err}"),
    }

    let mut zero = Vector3::zero();
    if let Some(err) = zero.normalize().err() {
        warn!("failed to normalize {zero}: {err}");
    }

    let mut point = Vector3::new(1.0, 0.0, 0.0);
    point.rotate_z(&Vector3::zero(), to_radian(90.0)).round();
    info!("rotated point: {point}");

    match point.get_by_name("q") {
        Ok(val) => info!("q: {val}"),
        Err(err) => warn!("{err}"),
    }
}
