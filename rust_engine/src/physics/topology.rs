//! 布料拓扑构建
//!
//! 生成矩形网格质点、三类弹簧和渲染用三角形索引。
//! 网格按行优先排列：下标 = w + h * width_num，w 沿 X，h 沿 Z。
//!
//! 弹簧循环在远端边界提前一格（弯曲弹簧两格）停止，
//! 最后一行/列的连接因此更稀疏。这是已知的边界松软，不做环绕或钳位。

use glam::Vec3;

use crate::{ClothError, Result};
use super::config::ClothConfig;
use super::mass_point::{count_springs, MassPoint, Spring, SpringType};

/// 构建完成的布料拓扑
#[derive(Debug, Clone)]
pub struct ClothTopology {
    pub points: Vec<MassPoint>,
    pub springs: Vec<Spring>,
    pub indices: Vec<u32>,
    pub width_num: usize,
    pub height_num: usize,
}

impl ClothTopology {
    /// 构建网格
    ///
    /// # 参数
    /// - `origin`: 网格 (0, 0) 点的位置
    /// - `width` / `height`: 物理尺寸，间距为 `width / width_num`
    /// - `width_num` / `height_num`: 两个方向的质点数，均需 >= 2
    pub fn build(
        origin: Vec3,
        width: f32,
        height: f32,
        width_num: usize,
        height_num: usize,
        config: &ClothConfig,
    ) -> Result<Self> {
        if width_num < 2 || height_num < 2 {
            return Err(ClothError::InvalidResolution { width_num, height_num });
        }
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ClothError::InvalidExtent { width, height });
        }

        let points = build_points(origin, width, height, width_num, height_num, config);
        let springs = build_springs(&points, width_num, height_num);
        let indices = build_indices(width_num, height_num);

        Ok(Self { points, springs, indices, width_num, height_num })
    }

    /// 网格下标
    pub fn index(&self, w: usize, h: usize) -> usize {
        w + h * self.width_num
    }

    /// 某类弹簧的数量
    pub fn spring_count(&self, spring_type: SpringType) -> usize {
        count_springs(&self.springs, spring_type)
    }
}

fn build_points(
    origin: Vec3,
    width: f32,
    height: f32,
    width_num: usize,
    height_num: usize,
    config: &ClothConfig,
) -> Vec<MassPoint> {
    let dw = width / width_num as f32;
    let dh = height / height_num as f32;

    let mut points = Vec::with_capacity(width_num * height_num);
    for h in 0..height_num {
        for w in 0..width_num {
            let position = Vec3::new(
                origin.x + w as f32 * dw,
                origin.y,
                origin.z + h as f32 * dh,
            );
            points.push(MassPoint::new(
                config.point_mass,
                position,
                config.initial_velocity,
                config.rest_color,
            ));
        }
    }
    points
}

fn build_springs(points: &[MassPoint], width_num: usize, height_num: usize) -> Vec<Spring> {
    let idx = |w: usize, h: usize| w + h * width_num;
    let link = |spring_type: SpringType, a: usize, b: usize| {
        Spring::new(spring_type, points[a].position.distance(points[b].position), a, b)
    };

    let mut springs = Vec::new();

    // 结构弹簧：右侧 + 下方
    for h in 0..height_num - 1 {
        for w in 0..width_num - 1 {
            let origin = idx(w, h);
            springs.push(link(SpringType::Structural, origin, idx(w + 1, h)));
            springs.push(link(SpringType::Structural, origin, idx(w, h + 1)));
        }
    }

    // 剪切弹簧：右下
    for h in 0..height_num - 1 {
        for w in 0..width_num - 1 {
            springs.push(link(SpringType::Shear, idx(w, h), idx(w + 1, h + 1)));
        }
    }

    // 剪切弹簧：左下
    for h in 0..height_num - 1 {
        for w in 1..width_num {
            springs.push(link(SpringType::Shear, idx(w, h), idx(w - 1, h + 1)));
        }
    }

    // 弯曲弹簧：隔一格向右
    for h in 0..height_num {
        for w in 0..width_num.saturating_sub(2) {
            springs.push(link(SpringType::Flexion, idx(w, h), idx(w + 2, h)));
        }
    }

    // 弯曲弹簧：隔一格向下
    for h in 0..height_num.saturating_sub(2) {
        for w in 0..width_num {
            springs.push(link(SpringType::Flexion, idx(w, h), idx(w, h + 2)));
        }
    }

    springs
}

/// 每个网格单元两个逆时针三角形
fn build_indices(width_num: usize, height_num: usize) -> Vec<u32> {
    let idx = |w: usize, h: usize| (w + h * width_num) as u32;

    let mut indices = Vec::with_capacity((width_num - 1) * (height_num - 1) * 6);
    for h in 0..height_num - 1 {
        for w in 0..width_num - 1 {
            indices.extend_from_slice(&[idx(w, h), idx(w + 1, h + 1), idx(w + 1, h)]);
            indices.extend_from_slice(&[idx(w, h), idx(w, h + 1), idx(w + 1, h + 1)]);
        }
    }
    indices
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn build(w: usize, h: usize) -> ClothTopology {
        ClothTopology::build(Vec3::ZERO, 4.0, 3.0, w, h, &ClothConfig::default()).unwrap()
    }

    #[test]
    fn test_rejects_small_resolution() {
        let config = ClothConfig::default();
        for (w, h) in [(1, 5), (5, 1), (0, 0), (1, 1)] {
            let err = ClothTopology::build(Vec3::ZERO, 1.0, 1.0, w, h, &config).unwrap_err();
            assert!(matches!(err, ClothError::InvalidResolution { .. }));
        }
    }

    #[test]
    fn test_rejects_bad_extent() {
        let config = ClothConfig::default();
        for (w, h) in [(0.0, 1.0), (1.0, -1.0), (f32::NAN, 1.0), (1.0, f32::INFINITY)] {
            let err = ClothTopology::build(Vec3::ZERO, w, h, 3, 3, &config).unwrap_err();
            assert!(matches!(err, ClothError::InvalidExtent { .. }));
        }
    }

    #[test]
    fn test_point_layout() {
        let config = ClothConfig::default();
        let origin = Vec3::new(1.0, 2.0, 3.0);
        let topo = ClothTopology::build(origin, 4.0, 3.0, 4, 3, &config).unwrap();
        assert_eq!(topo.points.len(), 12);

        let p = &topo.points[topo.index(2, 1)];
        assert_relative_eq!(p.position.x, 3.0);
        assert_relative_eq!(p.position.y, 2.0);
        assert_relative_eq!(p.position.z, 4.0);
        assert_eq!(p.mass, 1.0);
        assert_eq!(p.velocity, Vec3::new(0.0, -0.1, 0.0));
        assert_eq!(p.net_force, Vec3::ZERO);
    }

    #[test]
    fn test_spring_counts() {
        for (w, h) in [(2, 2), (3, 2), (4, 3), (5, 7)] {
            let topo = build(w, h);
            let cells = (w - 1) * (h - 1);
            assert_eq!(topo.spring_count(SpringType::Structural), 2 * cells);
            assert_eq!(topo.spring_count(SpringType::Shear), 2 * cells);
            assert_eq!(
                topo.spring_count(SpringType::Flexion),
                h * w.saturating_sub(2) + w * h.saturating_sub(2)
            );
            assert_eq!(topo.indices.len(), 6 * cells);
        }
    }

    #[test]
    fn test_rest_lengths_match_initial_distance() {
        let topo = build(5, 4);
        for spring in &topo.springs {
            assert_eq!(spring.rest_length, spring.current_length(&topo.points));
            assert!(spring.rest_length > 0.0);
        }
    }

    #[test]
    fn test_spring_neighbours() {
        let topo = build(4, 4);
        let has = |t: SpringType, a: usize, b: usize| {
            topo.springs.iter().any(|s| s.spring_type == t && s.first == a && s.second == b)
        };
        assert!(has(SpringType::Structural, 0, 1));
        assert!(has(SpringType::Structural, 0, 4));
        assert!(has(SpringType::Shear, 0, 5));
        assert!(has(SpringType::Shear, 1, 4));
        assert!(has(SpringType::Flexion, 0, 2));
        assert!(has(SpringType::Flexion, 0, 8));
        // 最后一列没有向下的结构弹簧
        assert!(!has(SpringType::Structural, 3, 7));
    }

    #[test]
    fn test_indices_cover_cells_counter_clockwise() {
        let topo = build(3, 3);
        assert_eq!(&topo.indices[..6], &[0, 4, 1, 0, 3, 4]);
        let max = topo.points.len() as u32;
        assert!(topo.indices.iter().all(|&i| i < max));

        // 从 +Y 看下去，网格平面内的三角形朝向一致
        for tri in topo.indices.chunks(3) {
            let a = topo.points[tri[0] as usize].position;
            let b = topo.points[tri[1] as usize].position;
            let c = topo.points[tri[2] as usize].position;
            let normal = (b - a).cross(c - a);
            assert!(normal.y > 0.0);
        }
    }
}
