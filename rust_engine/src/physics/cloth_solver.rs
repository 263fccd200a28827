//! 布料求解器
//!
//! 拥有质点、弹簧、索引与配置，按固定顺序执行每帧流水线：
//! 受力累积 → 积分 → 碰撞。所有质点的受力必须先全部算完再开始积分。

use glam::Vec3;

use crate::Result;
use super::collision::solve_collisions;
use super::config::ClothConfig;
use super::force::{apply_external_forces, apply_internal_forces};
use super::integrator::integrate;
use super::mass_point::{count_springs, MassPoint, Spring, SpringType};
use super::topology::ClothTopology;

/// 布料物理状态（不依赖图形上下文）
pub struct ClothSolver {
    points: Vec<MassPoint>,
    /// 构建时的质点状态，用于 reset
    initial_points: Vec<MassPoint>,
    springs: Vec<Spring>,
    indices: Vec<u32>,
    width_num: usize,
    height_num: usize,
    config: ClothConfig,
    /// 最近一帧的接触质点数
    contact_count: usize,
}

impl ClothSolver {
    /// 使用给定配置构建
    pub fn with_config(
        origin: Vec3,
        width: f32,
        height: f32,
        width_num: usize,
        height_num: usize,
        config: ClothConfig,
    ) -> Result<Self> {
        let topology = ClothTopology::build(origin, width, height, width_num, height_num, &config)?;

        log::info!(
            "[布料] 构建完成: {}x{} 质点, 结构弹簧={}, 剪切弹簧={}, 弯曲弹簧={}, 索引={}",
            width_num,
            height_num,
            topology.spring_count(SpringType::Structural),
            topology.spring_count(SpringType::Shear),
            topology.spring_count(SpringType::Flexion),
            topology.indices.len(),
        );

        Ok(Self {
            initial_points: topology.points.clone(),
            points: topology.points,
            springs: topology.springs,
            indices: topology.indices,
            width_num,
            height_num,
            config,
            contact_count: 0,
        })
    }

    /// 推进一帧
    ///
    /// # 参数
    /// - `raw_delta`: 距上一帧的真实时间（秒），内部按配置换算步长
    pub fn step(&mut self, raw_delta: f32) {
        let dt = self.config.effective_step(raw_delta);
        for _ in 0..self.config.substep_count.max(1) {
            self.step_with_sub_step(dt);
        }

        if self.config.debug_log {
            log::debug!(
                "[布料] delta={:.5}, 子步长={:.5}, 接触质点={}",
                raw_delta, dt, self.contact_count
            );
        }
    }

    /// 以给定子步长执行一次完整流水线
    pub fn step_with_sub_step(&mut self, dt: f32) {
        apply_internal_forces(
            &mut self.points,
            &self.springs,
            &self.config.stiffness,
            self.config.damping,
        );
        apply_external_forces(&mut self.points, self.config.gravity);
        integrate(&mut self.points, dt);
        self.contact_count = solve_collisions(&mut self.points, &self.config);
    }

    /// 重置所有质点到构建时的状态
    pub fn reset(&mut self) {
        self.points.clone_from(&self.initial_points);
        self.contact_count = 0;
    }

    pub fn points(&self) -> &[MassPoint] {
        &self.points
    }

    pub fn springs(&self) -> &[Spring] {
        &self.springs
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn config(&self) -> &ClothConfig {
        &self.config
    }

    pub fn width_num(&self) -> usize {
        self.width_num
    }

    pub fn height_num(&self) -> usize {
        self.height_num
    }

    /// 某类弹簧的数量
    pub fn spring_count(&self, spring_type: SpringType) -> usize {
        count_springs(&self.springs, spring_type)
    }

    /// 最近一帧的接触质点数
    pub fn contact_count(&self) -> usize {
        self.contact_count
    }

    /// 总动能
    pub fn kinetic_energy(&self) -> f32 {
        self.points.iter().map(MassPoint::kinetic_energy).sum()
    }
}
