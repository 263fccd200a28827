//! 显式欧拉积分

use glam::Vec3;

use super::mass_point::MassPoint;

/// 以步长 `dt` 推进所有质点
///
/// 位置用更新前的速度推进，保持与既有轨迹逐位一致，不要改成半隐式。
/// 合力在消费后清零。`dt` 过大时显式欧拉可能发散，这里不做处理。
pub fn integrate(points: &mut [MassPoint], dt: f32) {
    for point in points.iter_mut() {
        let new_velocity = point.velocity + dt * point.net_force / point.mass;
        let new_position = point.position + dt * point.velocity;

        point.velocity = new_velocity;
        point.position = new_position;
        point.net_force = Vec3::ZERO;
    }
}
