use std::cell::OnceCell;

/// One-shot readiness flag for an asynchronously loaded asset. Once marked
/// ready it stays ready.
#[derive(Debug, Default)]
pub struct AssetReady(OnceCell<()>);

impl AssetReady {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the asset loaded. Returns `false` if it already was.
    pub fn mark_ready(&self) -> bool {
        self.0.set(()).is_ok()
    }

    pub fn is_ready(&self) -> bool {
        self.0.get().is_some()
    }
}
