//! 碰撞求解：地面 + 一个静态盒子
//!
//! 只修正速度（地面额外钳位高度），不把质点推出盒子。

use glam::Vec3;

use super::config::{BoxObstacle, ClothConfig, GroundPlane};
use super::mass_point::MassPoint;

/// 盒子上可供离开的五个面，声明顺序即深度相等时的优先级
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactPlane {
    /// y = max.y
    Top,
    /// x = min.x
    Front,
    /// x = max.x
    Back,
    /// z = min.z
    Left,
    /// z = max.z
    Right,
}

impl ContactPlane {
    /// 按优先级排列
    pub const ALL: [ContactPlane; 5] = [
        ContactPlane::Top,
        ContactPlane::Front,
        ContactPlane::Back,
        ContactPlane::Left,
        ContactPlane::Right,
    ];

    /// 法线所在轴：0 = X, 1 = Y, 2 = Z
    pub fn axis(self) -> usize {
        match self {
            ContactPlane::Top => 1,
            ContactPlane::Front | ContactPlane::Back => 0,
            ContactPlane::Left | ContactPlane::Right => 2,
        }
    }

    /// 点到该面的无符号距离
    pub fn depth(self, obstacle: &BoxObstacle, p: Vec3) -> f32 {
        match self {
            ContactPlane::Top => (p.y - obstacle.max.y).abs(),
            ContactPlane::Front => (p.x - obstacle.min.x).abs(),
            ContactPlane::Back => (p.x - obstacle.max.x).abs(),
            ContactPlane::Left => (p.z - obstacle.min.z).abs(),
            ContactPlane::Right => (p.z - obstacle.max.z).abs(),
        }
    }
}

/// 选出穿透最浅的面；深度相等时取优先级靠前的
pub fn select_exit_plane(obstacle: &BoxObstacle, p: Vec3) -> ContactPlane {
    let mut best = ContactPlane::Top;
    let mut best_depth = best.depth(obstacle, p);
    for plane in &ContactPlane::ALL[1..] {
        let depth = plane.depth(obstacle, p);
        if depth < best_depth {
            best = *plane;
            best_depth = depth;
        }
    }
    best
}

/// 地面：低于地面时钳位高度、清零 Y 速度
pub fn solve_ground(point: &mut MassPoint, ground: &GroundPlane) -> bool {
    if point.position.y < ground.height {
        point.position.y = ground.height;
        point.velocity.y = 0.0;
        return true;
    }
    false
}

/// 盒子：位于盒内时只清零最浅出口面法线方向上的速度
pub fn solve_obstacle(
    point: &mut MassPoint,
    position: Vec3,
    obstacle: &BoxObstacle,
) -> Option<ContactPlane> {
    if !obstacle.contains(position) {
        return None;
    }
    let plane = select_exit_plane(obstacle, position);
    point.velocity[plane.axis()] = 0.0;
    Some(plane)
}

/// 对所有质点求解碰撞并刷新颜色，返回本帧接触的质点数
pub fn solve_collisions(points: &mut [MassPoint], config: &ClothConfig) -> usize {
    let mut contacts = 0;
    for point in points.iter_mut() {
        // 盒子测试使用地面钳位前的位置
        let position = point.position;

        let grounded = solve_ground(point, &config.ground);
        let boxed = solve_obstacle(point, position, &config.obstacle).is_some();

        point.in_contact = grounded || boxed;
        point.color = if point.in_contact { config.contact_color } else { config.rest_color };
        if point.in_contact {
            contacts += 1;
        }
    }
    contacts
}
