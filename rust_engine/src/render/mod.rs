//! 渲染适配层
//!
//! 物理核心不直接调用图形 API，只通过这里的两个 trait 与外部协作：
//! - `GpuBackend`：创建 / 更新 / 释放 GPU 缓冲
//! - `ShaderSink`：接收 model 矩阵并发起索引绘制

mod adapter;
mod vertex;

pub use adapter::ClothRenderer;
pub use vertex::{ClothVertex, VertexLayout};

use glam::Mat4;

use crate::Result;

/// GPU 缓冲句柄
pub type BufferId = u32;

/// GPU 缓冲后端
pub trait GpuBackend {
    /// 创建顶点缓冲并描述顶点属性，之后的更新复用同一布局
    fn create_vertex_buffer(&mut self, data: &[u8], layout: &VertexLayout) -> Result<BufferId>;

    /// 创建索引缓冲（u32）
    fn create_index_buffer(&mut self, indices: &[u32]) -> Result<BufferId>;

    /// 覆盖写入顶点缓冲
    fn update_vertex_buffer(&mut self, buffer: BufferId, data: &[u8]) -> Result<()>;

    /// 释放缓冲
    fn delete_buffer(&mut self, buffer: BufferId);
}

/// 着色器 / uniform 接收端
pub trait ShaderSink {
    fn set_uniform_mat4(&mut self, name: &str, value: &Mat4);

    /// 以三角形列表绘制
    fn draw_indexed_triangles(
        &mut self,
        vertex_buffer: BufferId,
        index_buffer: BufferId,
        index_count: usize,
    );
}
