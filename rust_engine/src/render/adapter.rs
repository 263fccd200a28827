//! 布料渲染器
//!
//! 构建时申请顶点 / 索引缓冲，每帧覆盖上传顶点后绘制，Drop 时释放。

use glam::Mat4;

use crate::physics::MassPoint;
use crate::Result;
use super::vertex::{fill_vertices, ClothVertex};
use super::{BufferId, GpuBackend, ShaderSink};

/// 布料渲染器，独占其 GPU 缓冲
pub struct ClothRenderer<B: GpuBackend> {
    backend: B,
    vertex_buffer: BufferId,
    index_buffer: BufferId,
    index_count: usize,
    /// 最近一次成功上传的顶点
    uploaded: Vec<ClothVertex>,
    /// 待上传的顶点，上传成功后与 `uploaded` 交换
    pending: Vec<ClothVertex>,
}

impl<B: GpuBackend> ClothRenderer<B> {
    /// 申请 GPU 缓冲并写入初始顶点和索引
    pub fn new(mut backend: B, points: &[MassPoint], indices: &[u32]) -> Result<Self> {
        let mut uploaded = Vec::with_capacity(points.len());
        fill_vertices(points, &mut uploaded);

        let vertex_buffer = backend.create_vertex_buffer(
            bytemuck::cast_slice(&uploaded),
            &ClothVertex::LAYOUT,
        )?;
        let index_buffer = match backend.create_index_buffer(indices) {
            Ok(id) => id,
            Err(e) => {
                backend.delete_buffer(vertex_buffer);
                return Err(e);
            }
        };

        Ok(Self {
            backend,
            vertex_buffer,
            index_buffer,
            index_count: indices.len(),
            pending: Vec::with_capacity(uploaded.len()),
            uploaded,
        })
    }

    /// 上传当前质点状态，失败时保留上一份已上传的顶点
    pub fn upload(&mut self, points: &[MassPoint]) -> Result<()> {
        fill_vertices(points, &mut self.pending);
        self.backend
            .update_vertex_buffer(self.vertex_buffer, bytemuck::cast_slice(&self.pending))?;
        std::mem::swap(&mut self.uploaded, &mut self.pending);
        Ok(())
    }

    /// 设置 model 矩阵并绘制
    pub fn draw<S: ShaderSink>(&self, shader: &mut S) {
        shader.set_uniform_mat4("model", &Mat4::IDENTITY);
        shader.draw_indexed_triangles(self.vertex_buffer, self.index_buffer, self.index_count);
    }

    /// 最近一次成功上传的顶点
    pub fn vertices(&self) -> &[ClothVertex] {
        &self.uploaded
    }

    pub fn index_count(&self) -> usize {
        self.index_count
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: GpuBackend> Drop for ClothRenderer<B> {
    fn drop(&mut self) {
        self.backend.delete_buffer(self.vertex_buffer);
        self.backend.delete_buffer(self.index_buffer);
    }
}
