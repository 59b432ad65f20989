use glam::Vec3;

/// The two wireframe primitives an orbit object can be drawn as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// Axis-aligned cube.
    Box,
    /// Latitude/longitude sphere.
    Sphere,
}

impl ShapeKind {
    /// Every kind, indexed by its numeric code.
    pub const ALL: [ShapeKind; 2] = [ShapeKind::Box, ShapeKind::Sphere];

    /// Decode a numeric shape code (`0` = box, `1` = sphere).
    ///
    /// Unknown codes yield `None`; callers skip such objects rather than
    /// treating them as a fault.
    #[must_use]
    pub fn from_code(code: u32) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }

    /// Numeric code of this kind (inverse of [`from_code`](Self::from_code)).
    #[must_use]
    pub fn code(self) -> u32 {
        match self {
            Self::Box => 0,
            Self::Sphere => 1,
        }
    }
}

/// A shape paired with its base size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Cube whose edge length is `size` at scale 1.
    Box {
        /// Base edge length.
        size: f32,
    },
    /// Sphere whose diameter is `size` at scale 1.
    Sphere {
        /// Base diameter.
        size: f32,
    },
}

impl Shape {
    /// Build a shape of the given kind.
    #[must_use]
    pub fn new(kind: ShapeKind, size: f32) -> Self {
        match kind {
            ShapeKind::Box => Self::Box { size },
            ShapeKind::Sphere => Self::Sphere { size },
        }
    }

    /// Which primitive this shape is drawn as.
    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Box { .. } => ShapeKind::Box,
            Self::Sphere { .. } => ShapeKind::Sphere,
        }
    }

    /// Base size before the pulse scale is applied.
    #[must_use]
    pub fn base_size(&self) -> f32 {
        match *self {
            Self::Box { size } | Self::Sphere { size } => size,
        }
    }
}

/// One static decorative shape: where it sits and what it looks like.
///
/// Immutable once created; the registry hands out shared references only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitObject {
    position: Vec3,
    shape: Shape,
}

impl OrbitObject {
    /// Create an object at `position`.
    #[must_use]
    pub fn new(position: Vec3, shape: Shape) -> Self {
        Self { position, shape }
    }

    /// World-space center.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Shape and base size.
    #[must_use]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Shortcut for `self.shape().kind()`.
    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        self.shape.kind()
    }

    /// Shortcut for `self.shape().base_size()`.
    #[must_use]
    pub fn base_size(&self) -> f32 {
        self.shape.base_size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_for_known_kinds() {
        for kind in ShapeKind::ALL {
            assert_eq!(ShapeKind::from_code(kind.code()), Some(kind));
        }
    }

    #[test]
    fn unknown_codes_decode_to_none() {
        assert_eq!(ShapeKind::from_code(2), None);
        assert_eq!(ShapeKind::from_code(u32::MAX), None);
    }

    #[test]
    fn shape_carries_kind_and_size() {
        let shape = Shape::new(ShapeKind::Sphere, 42.0);
        assert_eq!(shape, Shape::Sphere { size: 42.0 });
        assert_eq!(shape.kind(), ShapeKind::Sphere);
        assert_eq!(shape.base_size(), 42.0);
    }
}
