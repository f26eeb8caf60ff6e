use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Identifier of one GPU handle registered with a [`ResourceLedger`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ResourceId(u64);

/// What a registered handle refers to.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ResourceKind {
    VertexBuffer,
    /// Attribute layout describing how vertex buffer bytes map to shader inputs.
    VertexArray,
    Program,
}

/// Registry of GPU handles that are currently alive in one context.
///
/// wgpu handles are reference counted and cannot be asked whether they still
/// exist; the ledger answers that question for the handles this crate owns.
#[derive(Debug, Default)]
pub struct ResourceLedger {
    next_id: AtomicU64,
    live: Mutex<HashMap<ResourceId, ResourceKind>>,
}

impl ResourceLedger {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Registers a new live handle. It is released when the returned
    /// [`ResourceHandle`] is dropped.
    pub fn register(self: &Arc<Self>, kind: ResourceKind) -> ResourceHandle {
        let id = ResourceId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.live().insert(id, kind);
        log::trace!("ledger: registered {kind:?} {id:?}");
        ResourceHandle {
            id,
            kind,
            ledger: Arc::clone(self),
        }
    }

    /// Returns `false` once the handle has been released.
    pub fn is_live(&self, id: ResourceId) -> bool {
        self.live().contains_key(&id)
    }

    pub fn live_count(&self, kind: ResourceKind) -> usize {
        self.live().values().filter(|k| **k == kind).count()
    }

    pub fn total_live(&self) -> usize {
        self.live().len()
    }

    fn release(&self, id: ResourceId) {
        if let Some(kind) = self.live().remove(&id) {
            log::trace!("ledger: released {kind:?} {id:?}");
        }
    }

    fn live(&self) -> MutexGuard<'_, HashMap<ResourceId, ResourceKind>> {
        self.live.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Ownership token for one registered handle.
#[derive(Debug)]
pub struct ResourceHandle {
    id: ResourceId,
    kind: ResourceKind,
    ledger: Arc<ResourceLedger>,
}

impl ResourceHandle {
    #[inline]
    pub fn id(&self) -> ResourceId {
        self.id
    }

    #[inline]
    pub fn kind(&self) -> ResourceKind {
        self.kind
    }
}

impl Drop for ResourceHandle {
    fn drop(&mut self) {
        self.ledger.release(self.id);
    }
}
