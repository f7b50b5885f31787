//! Scoped render-resource lifecycle.
//!
//! Each analysis result gets its own GPU resources. [`SceneSlot`] holds at
//! most one live set and always releases it before acquiring the next, so a
//! new result fully replaces the old one and nothing leaks across meshes.

use fieldscope_core::Result;

use crate::scene::SceneInput;

/// A rendering engine that can build and tear down resources for one scene.
pub trait SceneBackend {
    /// Whatever the engine allocates per scene (buffers, materials, ...).
    type Resources;

    /// Allocates resources for `scene`.
    fn acquire(&mut self, scene: &SceneInput) -> Result<Self::Resources>;

    /// Frees resources previously returned by [`SceneBackend::acquire`].
    fn release(&mut self, resources: Self::Resources);
}

/// Owns the resources of the scene currently on screen.
pub struct SceneSlot<B: SceneBackend> {
    backend: B,
    current: Option<B::Resources>,
    generation: u64,
}

impl<B: SceneBackend> SceneSlot<B> {
    /// Creates an empty slot.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            current: None,
            generation: 0,
        }
    }

    /// Replaces the current scene with `scene`.
    ///
    /// The previous resources are released first. If acquisition fails the
    /// slot is left empty and the error is returned.
    pub fn present(&mut self, scene: &SceneInput) -> Result<&B::Resources> {
        self.clear();
        let resources = match self.backend.acquire(scene) {
            Ok(resources) => resources,
            Err(e) => {
                log::error!("failed to acquire resources for scene '{}': {e}", scene.name);
                return Err(e);
            }
        };
        self.generation += 1;
        log::debug!("presented scene '{}' (generation {})", scene.name, self.generation);
        Ok(&*self.current.insert(resources))
    }

    /// Releases the current resources, if any.
    pub fn clear(&mut self) {
        if let Some(resources) = self.current.take() {
            self.backend.release(resources);
        }
    }

    /// Returns whether a scene is live.
    pub fn is_occupied(&self) -> bool {
        self.current.is_some()
    }

    /// Returns the live resources.
    pub fn current(&self) -> Option<&B::Resources> {
        self.current.as_ref()
    }

    /// Number of scenes successfully presented so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns the backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Returns the backend mutably.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}

impl<B: SceneBackend> Drop for SceneSlot<B> {
    fn drop(&mut self) {
        self.clear();
    }
}
