//! 质点与弹簧

use glam::Vec3;

/// 弹簧类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpringType {
    /// 结构弹簧：右侧与下方相邻点
    Structural,
    /// 剪切弹簧：右下与左下对角点
    Shear,
    /// 弯曲弹簧：隔一格的右侧与下方点
    Flexion,
}

/// 布料质点
#[derive(Debug, Clone, PartialEq)]
pub struct MassPoint {
    pub mass: f32,
    pub position: Vec3,
    pub velocity: Vec3,
    /// 本帧累积合力，积分后清零
    pub net_force: Vec3,
    /// 可视化颜色，每帧由碰撞状态决定
    pub color: Vec3,
    /// 本帧是否被碰撞求解器修正过
    pub in_contact: bool,
}

impl MassPoint {
    pub fn new(mass: f32, position: Vec3, velocity: Vec3, color: Vec3) -> Self {
        Self {
            mass,
            position,
            velocity,
            net_force: Vec3::ZERO,
            color,
            in_contact: false,
        }
    }

    /// 动能 ½mv²
    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.velocity.length_squared()
    }
}

/// 弹簧，端点以质点数组下标引用
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub spring_type: SpringType,
    /// 构建时两端点的距离，之后不再更新
    pub rest_length: f32,
    pub first: usize,
    pub second: usize,
}

impl Spring {
    pub fn new(spring_type: SpringType, rest_length: f32, first: usize, second: usize) -> Self {
        Self { spring_type, rest_length, first, second }
    }

    /// 当前长度
    pub fn current_length(&self, points: &[MassPoint]) -> f32 {
        points[self.first].position.distance(points[self.second].position)
    }
}

/// 统计某类弹簧的数量
pub fn count_springs(springs: &[Spring], spring_type: SpringType) -> usize {
    springs.iter().filter(|s| s.spring_type == spring_type).count()
}
