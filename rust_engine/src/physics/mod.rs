//! 布料物理模块
//!
//! 质点-弹簧网络，每帧按固定顺序推进：
//!
//! | 阶段 | 模块 |
//! |------|------|
//! | 拓扑构建（仅一次） | `topology` |
//! | 弹簧内力 + 重力 | `force` |
//! | 显式欧拉积分 | `integrator` |
//! | 地面 / 盒子碰撞 | `collision` |

mod cloth_solver;
mod collision;
mod force;
mod integrator;
mod mass_point;
mod topology;
pub mod config;

pub use cloth_solver::ClothSolver;
pub use collision::{select_exit_plane, solve_collisions, ContactPlane};
pub use force::{apply_external_forces, apply_internal_forces, spring_force};
pub use integrator::integrate;
pub use mass_point::{count_springs, MassPoint, Spring, SpringType};
pub use topology::ClothTopology;
pub use config::{
    get_config, reset_config, set_config, BoxObstacle, ClothConfig, GroundPlane, SpringStiffness,
};
