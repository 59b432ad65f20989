use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::object::{OrbitObject, Shape, ShapeKind};
use crate::options::SceneOptions;

/// Raw description of an object, as produced by an external source that
/// encodes the shape as a number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawObject {
    /// World-space center.
    pub position: Vec3,
    /// Numeric shape code, see [`ShapeKind::from_code`].
    pub shape_code: u32,
    /// Base size.
    pub size: f32,
}

/// Owns the fixed population of orbit objects.
///
/// Objects are stored by value in insertion order, which is also the
/// render order. Nothing is added or removed after construction.
#[derive(Debug, Clone, Default)]
pub struct ObjectRegistry {
    objects: Vec<OrbitObject>,
}

impl ObjectRegistry {
    /// Populate `count` objects from `rng`.
    ///
    /// Each position component is uniform in `[-spread, spread]`, the shape
    /// kind is uniform over [`ShapeKind::ALL`] and the base size is a whole
    /// number uniform in `[min_size, max_size)`.
    pub fn initialize<R: Rng>(
        count: usize,
        options: &SceneOptions,
        rng: &mut R,
    ) -> Self {
        let spread = if options.spread.is_finite() {
            options.spread.abs()
        } else {
            log::warn!(
                "spread {} is not finite, placing objects at the origin",
                options.spread
            );
            0.0
        };
        let sizes = if options.max_size > options.min_size {
            Some(options.min_size..options.max_size)
        } else {
            log::warn!(
                "max_size {} <= min_size {}, using a fixed size",
                options.max_size,
                options.min_size
            );
            None
        };

        let objects = (0..count)
            .map(|_| {
                let position = Vec3::new(
                    rng.random_range(-spread..=spread),
                    rng.random_range(-spread..=spread),
                    rng.random_range(-spread..=spread),
                );
                let kind = ShapeKind::ALL[rng.random_range(0..ShapeKind::ALL.len())];
                let size = match &sizes {
                    Some(range) => rng.random_range(range.clone()),
                    None => options.min_size,
                };
                OrbitObject::new(position, Shape::new(kind, size as f32))
            })
            .collect();

        Self { objects }
    }

    /// Populate from `options`, seeding the generator from
    /// [`SceneOptions::seed`] when set.
    #[must_use]
    pub fn from_options(options: &SceneOptions) -> Self {
        let registry = match options.seed {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                Self::initialize(options.object_count, options, &mut rng)
            }
            None => Self::initialize(options.object_count, options, &mut rand::rng()),
        };
        log::info!(
            "created {} orbit objects ({} boxes, {} spheres)",
            registry.len(),
            registry.count_of(ShapeKind::Box),
            registry.count_of(ShapeKind::Sphere),
        );
        registry
    }

    /// Build from raw records, silently skipping unknown shape codes.
    pub fn from_raw(records: impl IntoIterator<Item = RawObject>) -> Self {
        let objects = records
            .into_iter()
            .filter_map(|raw| {
                ShapeKind::from_code(raw.shape_code).map(|kind| {
                    OrbitObject::new(raw.position, Shape::new(kind, raw.size))
                })
            })
            .collect();
        Self { objects }
    }

    /// All objects in render order.
    #[must_use]
    pub fn objects(&self) -> &[OrbitObject] {
        &self.objects
    }

    /// Iterate objects in render order.
    pub fn iter(&self) -> std::slice::Iter<'_, OrbitObject> {
        self.objects.iter()
    }

    /// Object at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&OrbitObject> {
        self.objects.get(index)
    }

    /// Number of objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the registry holds no objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Number of objects of the given kind.
    #[must_use]
    pub fn count_of(&self, kind: ShapeKind) -> usize {
        self.objects.iter().filter(|o| o.kind() == kind).count()
    }
}

impl<'a> IntoIterator for &'a ObjectRegistry {
    type Item = &'a OrbitObject;
    type IntoIter = std::slice::Iter<'a, OrbitObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn default_population_respects_ranges() {
        let options = SceneOptions::default();
        let registry = ObjectRegistry::initialize(20, &options, &mut seeded(7));

        assert_eq!(registry.len(), 20);
        for object in &registry {
            let p = object.position();
            for c in [p.x, p.y, p.z] {
                assert!((-2000.0..=2000.0).contains(&c), "component {c} out of range");
            }
            let size = object.base_size();
            assert!((10.0..100.0).contains(&size), "size {size} out of range");
            assert_eq!(size.fract(), 0.0);
            assert!(ShapeKind::ALL.contains(&object.kind()));
        }
    }

    #[test]
    fn both_kinds_appear_in_a_large_population() {
        let options = SceneOptions::default();
        let registry = ObjectRegistry::initialize(500, &options, &mut seeded(1));
        assert!(registry.count_of(ShapeKind::Box) > 0);
        assert!(registry.count_of(ShapeKind::Sphere) > 0);
        assert_eq!(
            registry.count_of(ShapeKind::Box) + registry.count_of(ShapeKind::Sphere),
            500
        );
    }

    #[test]
    fn same_seed_gives_same_layout() {
        let options = SceneOptions {
            seed: Some(99),
            ..SceneOptions::default()
        };
        let a = ObjectRegistry::from_options(&options);
        let b = ObjectRegistry::from_options(&options);
        assert_eq!(a.objects(), b.objects());
    }

    #[test]
    fn from_options_uses_object_count() {
        let options = SceneOptions {
            object_count: 5,
            ..SceneOptions::default()
        };
        assert_eq!(ObjectRegistry::from_options(&options).len(), 5);
    }

    #[test]
    fn zero_count_is_empty() {
        let registry =
            ObjectRegistry::initialize(0, &SceneOptions::default(), &mut seeded(3));
        assert!(registry.is_empty());
        assert!(registry.get(0).is_none());
    }

    #[test]
    fn degenerate_size_range_still_initializes() {
        let options = SceneOptions {
            min_size: 50,
            max_size: 50,
            spread: 0.0,
            ..SceneOptions::default()
        };
        let registry = ObjectRegistry::initialize(4, &options, &mut seeded(5));
        for object in &registry {
            assert_eq!(object.base_size(), 50.0);
            assert_eq!(object.position(), Vec3::ZERO);
        }
    }

    #[test]
    fn inverted_size_range_at_the_u32_limit_uses_min_size() {
        let options = SceneOptions {
            min_size: u32::MAX,
            max_size: 0,
            ..SceneOptions::default()
        };
        let registry = ObjectRegistry::initialize(3, &options, &mut seeded(11));
        assert_eq!(registry.len(), 3);
        for object in &registry {
            assert_eq!(object.base_size(), u32::MAX as f32);
        }
    }

    #[test]
    fn non_finite_spread_places_objects_at_the_origin() {
        for spread in [f32::INFINITY, f32::NEG_INFINITY, f32::NAN] {
            let options = SceneOptions {
                spread,
                ..SceneOptions::default()
            };
            let registry = ObjectRegistry::initialize(3, &options, &mut seeded(13));
            for object in &registry {
                assert_eq!(object.position(), Vec3::ZERO, "spread {spread}");
            }
        }
    }

    #[test]
    fn raw_records_skip_unknown_codes() {
        let records = [
            RawObject { position: Vec3::X, shape_code: 0, size: 10.0 },
            RawObject { position: Vec3::Y, shape_code: 7, size: 20.0 },
            RawObject { position: Vec3::Z, shape_code: 1, size: 30.0 },
        ];
        let registry = ObjectRegistry::from_raw(records);

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.objects()[0].shape(), Shape::Box { size: 10.0 });
        assert_eq!(registry.objects()[1].shape(), Shape::Sphere { size: 30.0 });
        assert_eq!(registry.objects()[1].position(), Vec3::Z);
    }
}
