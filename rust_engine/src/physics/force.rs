//! 受力累积
//!
//! 只往 `net_force` 上累加，清零由积分器负责。

use glam::Vec3;

use super::config::SpringStiffness;
use super::mass_point::{MassPoint, Spring};

/// 单根弹簧作用在 `first` 端的力（弹性 + 阻尼），`second` 端取反
pub fn spring_force(
    spring: &Spring,
    points: &[MassPoint],
    stiffness: &SpringStiffness,
    damping: f32,
) -> Vec3 {
    let first = &points[spring.first];
    let second = &points[spring.second];

    let offset = second.position - first.position;
    let dist = offset.length();
    // 两端重合时方向无定义，弹性力取零
    let dir = offset.normalize_or_zero();

    // 拉伸时指向 second（吸引），压缩时背离（排斥）
    // 符号取 (dist - rest)，旧版 (rest - dist) 会让拉伸的弹簧互相排斥，不要改回
    let elastic = stiffness.of(spring.spring_type) * (dist - spring.rest_length) * dir;
    let damping_force = -damping * (first.velocity - second.velocity);

    elastic + damping_force
}

/// 所有弹簧的内力，每根弹簧每次调用恰好贡献一次
pub fn apply_internal_forces(
    points: &mut [MassPoint],
    springs: &[Spring],
    stiffness: &SpringStiffness,
    damping: f32,
) {
    for spring in springs {
        let force = spring_force(spring, points, stiffness, damping);
        points[spring.first].net_force += force;
        points[spring.second].net_force -= force;
    }
}

/// 外力：重力 m·g
pub fn apply_external_forces(points: &mut [MassPoint], gravity: Vec3) {
    for point in points.iter_mut() {
        point.net_force += gravity * point.mass;
    }
}
