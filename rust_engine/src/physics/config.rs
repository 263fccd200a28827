//! 布料物理配置
//!
//! 所有参数扁平化，默认值即调好的手感。
//! 求解器总是显式接收一份配置，全局实例只为 `PlaneCloth::new` 提供默认值。

use glam::Vec3;
use once_cell::sync::Lazy;
use std::sync::RwLock;

use super::mass_point::SpringType;

/// 各类弹簧的刚度
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringStiffness {
    pub structural: f32,
    pub shear: f32,
    /// 弯曲弹簧单位形变受力更小，需要更高刚度来压住褶皱
    pub flexion: f32,
}

impl SpringStiffness {
    /// 所有弹簧统一刚度
    pub fn uniform(value: f32) -> Self {
        Self { structural: value, shear: value, flexion: value }
    }

    /// 按弹簧类型取刚度
    pub fn of(&self, spring_type: SpringType) -> f32 {
        match spring_type {
            SpringType::Structural => self.structural,
            SpringType::Shear => self.shear,
            SpringType::Flexion => self.flexion,
        }
    }
}

impl Default for SpringStiffness {
    fn default() -> Self {
        Self { structural: 2000.0, shear: 2000.0, flexion: 2400.0 }
    }
}

/// 水平地面
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundPlane {
    /// 地面高度（Y 坐标）
    pub height: f32,
}

impl GroundPlane {
    pub fn new(height: f32) -> Self {
        Self { height }
    }
}

impl Default for GroundPlane {
    fn default() -> Self {
        Self::new(-17.0)
    }
}

/// 轴对齐的静态盒子障碍物
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxObstacle {
    pub min: Vec3,
    pub max: Vec3,
}

impl BoxObstacle {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// 开区间包含测试，正好落在面上的点不算穿透
    pub fn contains(&self, p: Vec3) -> bool {
        p.x > self.min.x && p.x < self.max.x
            && p.y > self.min.y && p.y < self.max.y
            && p.z > self.min.z && p.z < self.max.z
    }
}

impl Default for BoxObstacle {
    fn default() -> Self {
        // 底面埋在地面以下
        Self::new(Vec3::new(10.0, -18.0, 10.0), Vec3::new(20.0, -8.0, 20.0))
    }
}

/// 布料配置（扁平化，不嵌套）
#[derive(Debug, Clone)]
pub struct ClothConfig {
    // ========== 内力 ==========
    /// 弹簧刚度表
    pub stiffness: SpringStiffness,
    /// 阻尼系数（作用于两端的完整相对速度）
    pub damping: f32,

    // ========== 外力 ==========
    /// 重力加速度
    pub gravity: Vec3,

    // ========== 碰撞 ==========
    pub ground: GroundPlane,
    pub obstacle: BoxObstacle,

    // ========== 时间步 ==========
    /// 目标帧率，update 入口把原始 delta 乘以它
    pub frame_rate: f32,
    /// 积分前再除以的固定因子
    pub step_divisor: f32,
    /// 每帧内部子步数，默认 1
    pub substep_count: u32,

    // ========== 初始状态 ==========
    /// 质点质量
    pub point_mass: f32,
    /// 初始速度（轻微向下）
    pub initial_velocity: Vec3,

    // ========== 可视化 ==========
    pub rest_color: Vec3,
    pub contact_color: Vec3,

    // ========== 调试 ==========
    /// 是否输出每帧调试日志，默认 false
    pub debug_log: bool,
}

impl Default for ClothConfig {
    fn default() -> Self {
        Self {
            stiffness: SpringStiffness::default(),
            damping: 18.0,

            gravity: Vec3::new(0.0, -9.81, 0.0),

            ground: GroundPlane::default(),
            obstacle: BoxObstacle::default(),

            // 两个 120 互相抵消，有效步长约等于真实 delta
            frame_rate: 120.0,
            step_divisor: 120.0,
            substep_count: 1,

            point_mass: 1.0,
            initial_velocity: Vec3::new(0.0, -0.1, 0.0),

            rest_color: Vec3::splat(0.9),
            contact_color: Vec3::new(1.0, 0.0, 0.0),

            debug_log: false,
        }
    }
}

impl ClothConfig {
    /// 把一帧的原始 delta（秒）换算为单个子步的积分步长
    pub fn effective_step(&self, raw_delta: f32) -> f32 {
        let scaled = raw_delta * self.frame_rate;
        scaled / self.step_divisor / self.substep_count.max(1) as f32
    }
}

/// 全局配置实例
static CLOTH_CONFIG: Lazy<RwLock<ClothConfig>> = Lazy::new(|| {
    RwLock::new(ClothConfig::default())
});

/// 获取当前配置（只读副本）
pub fn get_config() -> ClothConfig {
    CLOTH_CONFIG
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .clone()
}

/// 手动设置配置（用于运行时调参）
pub fn set_config(config: ClothConfig) {
    *CLOTH_CONFIG.write().unwrap_or_else(|poisoned| poisoned.into_inner()) = config;
}

/// 重置为默认配置
pub fn reset_config() {
    set_config(ClothConfig::default());
}
