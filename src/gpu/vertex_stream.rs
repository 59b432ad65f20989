//! Per-frame vertex upload.
//!
//! The wireframe pass rebuilds its whole vertex list every frame.
//! [`VertexStream`] keeps one GPU buffer across frames and reallocates it
//! only when a frame outgrows it.

use std::marker::PhantomData;

/// Vertex capacity after growing to fit `needed`, or `None` when `capacity`
/// already fits. Growth at least doubles so a slowly rising count does not
/// reallocate every frame.
#[must_use]
pub fn grown_capacity(needed: usize, capacity: usize) -> Option<usize> {
    (needed > capacity).then(|| needed.max(capacity.saturating_mul(2)))
}

/// A vertex buffer refilled every frame. Never shrinks.
pub struct VertexStream<T> {
    buffer: wgpu::Buffer,
    label: &'static str,
    capacity: usize,
    count: usize,
    _vertex: PhantomData<T>,
}

impl<T: bytemuck::Pod> VertexStream<T> {
    /// Stream with room for `capacity` vertices (at least one).
    #[must_use]
    pub fn new(device: &wgpu::Device, label: &'static str, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            buffer: allocate::<T>(device, label, capacity),
            label,
            capacity,
            count: 0,
            _vertex: PhantomData,
        }
    }

    /// Replace the stream's contents with `vertices`.
    pub fn upload(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        vertices: &[T],
    ) {
        if let Some(capacity) = grown_capacity(vertices.len(), self.capacity) {
            log::debug!(
                "{}: growing from {} to {} vertices",
                self.label,
                self.capacity,
                capacity
            );
            self.buffer = allocate::<T>(device, self.label, capacity);
            self.capacity = capacity;
        }
        if !vertices.is_empty() {
            queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(vertices));
        }
        self.count = vertices.len();
    }

    /// Vertices in the last upload.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Buffer range holding the last upload, `None` if it was empty.
    #[must_use]
    pub fn slice(&self) -> Option<wgpu::BufferSlice<'_>> {
        (self.count > 0)
            .then(|| self.buffer.slice(..byte_size::<T>(self.count)))
    }
}

fn byte_size<T>(count: usize) -> wgpu::BufferAddress {
    (count * size_of::<T>()) as wgpu::BufferAddress
}

fn allocate<T>(
    device: &wgpu::Device,
    label: &'static str,
    capacity: usize,
) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size: byte_size::<T>(capacity),
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fitting_upload_keeps_the_buffer() {
        assert_eq!(grown_capacity(0, 16), None);
        assert_eq!(grown_capacity(16, 16), None);
    }

    #[test]
    fn small_overflow_doubles() {
        assert_eq!(grown_capacity(17, 16), Some(32));
    }

    #[test]
    fn large_overflow_jumps_to_the_needed_size() {
        assert_eq!(grown_capacity(400_000, 32_768), Some(400_000));
    }

    #[test]
    fn doubling_saturates() {
        assert_eq!(grown_capacity(usize::MAX, usize::MAX / 2 + 1), Some(usize::MAX));
    }

    #[test]
    fn byte_size_counts_whole_vertices() {
        assert_eq!(byte_size::<[f32; 7]>(3), 84);
    }
}
