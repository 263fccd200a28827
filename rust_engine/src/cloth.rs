//! 平面布料
//!
//! 组合物理求解器与渲染器：每帧先完整推进物理，再上传顶点并绘制。

use glam::Vec3;

use crate::physics::{get_config, ClothConfig, ClothSolver};
use crate::render::{ClothRenderer, GpuBackend, ShaderSink};
use crate::Result;

/// 可渲染的平面布料
pub struct PlaneCloth<B: GpuBackend> {
    solver: ClothSolver,
    renderer: ClothRenderer<B>,
}

impl<B: GpuBackend> PlaneCloth<B> {
    /// 使用全局配置创建
    pub fn new(
        backend: B,
        origin: Vec3,
        width: f32,
        height: f32,
        width_num: usize,
        height_num: usize,
    ) -> Result<Self> {
        Self::with_config(backend, origin, width, height, width_num, height_num, get_config())
    }

    /// 使用给定配置创建
    ///
    /// 拓扑非法时不会申请任何 GPU 资源
    pub fn with_config(
        backend: B,
        origin: Vec3,
        width: f32,
        height: f32,
        width_num: usize,
        height_num: usize,
        config: ClothConfig,
    ) -> Result<Self> {
        let solver =
            ClothSolver::with_config(origin, width, height, width_num, height_num, config)?;
        let renderer = ClothRenderer::new(backend, solver.points(), solver.indices())?;
        Ok(Self { solver, renderer })
    }

    /// 每帧更新
    ///
    /// # 参数
    /// - `shader`: 接收 model 矩阵与绘制调用
    /// - `delta_time`: 距上一帧的真实时间（秒），未缩放
    pub fn update<S: ShaderSink>(&mut self, shader: &mut S, delta_time: f32) {
        self.solver.step(delta_time);

        // 上传失败时物理结果照常保留，本帧绘制上一份顶点
        if let Err(e) = self.renderer.upload(self.solver.points()) {
            log::warn!("[布料] 顶点上传失败: {}", e);
        }
        self.renderer.draw(shader);
    }

    /// 重置到初始状态并同步顶点缓冲
    pub fn reset(&mut self) -> Result<()> {
        self.solver.reset();
        self.renderer.upload(self.solver.points())
    }

    pub fn solver(&self) -> &ClothSolver {
        &self.solver
    }

    pub fn renderer(&self) -> &ClothRenderer<B> {
        &self.renderer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::{reset_config, set_config, GroundPlane};
    use crate::render::mock::{GpuCall, RecordingBackend, RecordingShader};
    use crate::ClothError;

    fn config() -> ClothConfig {
        ClothConfig { ground: GroundPlane::new(-1000.0), ..ClothConfig::default() }
    }

    #[test]
    fn test_update_steps_uploads_and_draws() {
        let backend = RecordingBackend::default();
        let log = backend.log.clone();
        let mut cloth =
            PlaneCloth::with_config(backend, Vec3::ZERO, 1.0, 1.0, 2, 2, config()).unwrap();
        let mut shader = RecordingShader::default();

        cloth.update(&mut shader, 1.0 / 120.0);

        for (point, vertex) in cloth.solver().points().iter().zip(cloth.renderer().vertices()) {
            assert!(point.position.y < 0.0);
            assert_eq!(vertex.position, point.position.to_array());
        }
        assert_eq!(shader.draws, vec![(1, 2, 6)]);
        assert_eq!(shader.uniforms[0].0, "model");
        assert!(log.borrow().contains(&GpuCall::UpdateVertex { id: 1, bytes: 96 }));
    }

    #[test]
    fn test_invalid_resolution_allocates_nothing() {
        let backend = RecordingBackend::default();
        let log = backend.log.clone();
        let result = PlaneCloth::with_config(backend, Vec3::ZERO, 1.0, 1.0, 2, 1, config());
        assert!(matches!(result, Err(ClothError::InvalidResolution { .. })));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_upload_failure_keeps_physics() {
        let backend = RecordingBackend { fail_update: true, ..Default::default() };
        let mut cloth =
            PlaneCloth::with_config(backend, Vec3::ZERO, 1.0, 1.0, 3, 3, config()).unwrap();
        let mut shader = RecordingShader::default();

        cloth.update(&mut shader, 1.0 / 60.0);

        assert!(cloth.solver().points().iter().all(|p| p.position.y < 0.0));
        assert!(cloth.renderer().vertices().iter().all(|v| v.position[1] == 0.0));
        assert_eq!(shader.draws.len(), 1);
    }

    /// 全局配置只在这一个测试里修改
    #[test]
    fn test_new_reads_global_config() {
        set_config(ClothConfig { damping: 1.0, substep_count: 3, ..config() });
        let cloth =
            PlaneCloth::new(RecordingBackend::default(), Vec3::ZERO, 1.0, 1.0, 3, 3).unwrap();
        assert_eq!(cloth.solver().config().damping, 1.0);
        assert_eq!(cloth.solver().config().substep_count, 3);
        assert_eq!(cloth.solver().config().ground.height, -1000.0);

        reset_config();
        assert_eq!(get_config().damping, 18.0);
        let cloth =
            PlaneCloth::new(RecordingBackend::default(), Vec3::ZERO, 1.0, 1.0, 3, 3).unwrap();
        assert_eq!(cloth.solver().config().damping, 18.0);
        assert_eq!(cloth.solver().config().substep_count, 1);
        assert_eq!(cloth.solver().config().ground.height, -17.0);
    }

    #[test]
    fn test_drop_releases_buffers() {
        let backend = RecordingBackend::default();
        let log = backend.log.clone();
        {
            let mut cloth =
                PlaneCloth::with_config(backend, Vec3::ZERO, 1.0, 1.0, 2, 2, config()).unwrap();
            cloth.update(&mut RecordingShader::default(), 1.0 / 60.0);
            cloth.reset().unwrap();
            assert_eq!(cloth.solver().points()[0].position, Vec3::ZERO);
        }
        let calls = log.borrow();
        assert_eq!(&calls[calls.len() - 2..], &[GpuCall::Delete(1), GpuCall::Delete(2)]);
    }
}
