//! Cloth Engine - 质点-弹簧布料模拟核心
//!
//! 提供：
//! - 矩形网格拓扑构建（结构 / 剪切 / 弯曲弹簧）
//! - 弹簧内力、阻尼与重力累积
//! - 显式欧拉积分
//! - 地面与静态盒子碰撞
//! - 与图形后端解耦的顶点缓冲上传和绘制

pub mod cloth;
pub mod physics;
pub mod render;

pub use cloth::PlaneCloth;
pub use physics::{ClothConfig, ClothSolver, ClothTopology, MassPoint, Spring, SpringType};
pub use render::{ClothRenderer, ClothVertex, GpuBackend, ShaderSink};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClothError {
    #[error("invalid resolution {width_num}x{height_num}: both must be at least 2")]
    InvalidResolution { width_num: usize, height_num: usize },

    #[error("invalid extent {width}x{height}: must be finite and positive")]
    InvalidExtent { width: f32, height: f32 },

    #[error("GPU error: {0}")]
    Gpu(String),
}

pub type Result<T> = std::result::Result<T, ClothError>;
