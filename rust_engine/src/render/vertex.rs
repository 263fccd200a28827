//! 顶点格式

use bytemuck::{Pod, Zeroable};

use crate::physics::MassPoint;

/// 上传到 GPU 的顶点，字段顺序与步长跨帧不变
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct ClothVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

/// 顶点属性布局（字节）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexLayout {
    pub stride: usize,
    pub position_offset: usize,
    pub color_offset: usize,
}

impl ClothVertex {
    pub const LAYOUT: VertexLayout = VertexLayout {
        stride: std::mem::size_of::<ClothVertex>(),
        position_offset: std::mem::offset_of!(ClothVertex, position),
        color_offset: std::mem::offset_of!(ClothVertex, color),
    };
}

impl From<&MassPoint> for ClothVertex {
    fn from(point: &MassPoint) -> Self {
        Self {
            position: point.position.to_array(),
            color: point.color.to_array(),
        }
    }
}

/// 把质点写入复用的顶点数组
pub fn fill_vertices(points: &[MassPoint], out: &mut Vec<ClothVertex>) {
    out.clear();
    out.extend(points.iter().map(ClothVertex::from));
}
