#![forbid(unsafe_code)]

//! Registry of mounted trackers and their parent links.
//!
//! Mounting a node subscribes it to viewport events dispatched through the
//! tree; unmounting a node drops it and every descendant along with their
//! measurements. Node ids are never reused.

use std::collections::{BTreeMap, BTreeSet};

use marquee_core::event::ViewportEvent;
use marquee_core::geometry::{PixelBox, ViewportSize};

use super::context::VisibilityContext;
use super::metrics::TrackerMetrics;
use super::observer::ObserverConfig;
use super::tracker::VisibilityTracker;

/// Handle to a mounted tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Host-side layout queries used during dispatch.
pub trait ElementMeasure {
    /// Current viewport size.
    fn viewport(&self) -> ViewportSize;

    /// Box of the element tracked by `node`, or `None` if it is not laid out.
    fn element_box(&self, node: NodeId, id: &str) -> Option<PixelBox>;
}

#[derive(Debug, Clone)]
struct TreeNode {
    parent: Option<NodeId>,
    tracker: VisibilityTracker,
}

/// Arena of mounted trackers.
#[derive(Debug, Clone, Default)]
pub struct TrackerTree {
    nodes: BTreeMap<NodeId, TreeNode>,
    next_id: u64,
    config: ObserverConfig,
}

impl TrackerTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ObserverConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Mount a top-level tracker.
    pub fn mount_root(&mut self, id: impl Into<String>) -> NodeId {
        self.insert(None, id.into())
    }

    /// Mount a tracker under `parent`. Returns `None` if `parent` is not
    /// mounted.
    pub fn mount(&mut self, parent: NodeId, id: impl Into<String>) -> Option<NodeId> {
        if !self.nodes.contains_key(&parent) {
            return None;
        }
        Some(self.insert(Some(parent), id.into()))
    }

    fn insert(&mut self, parent: Option<NodeId>, id: String) -> NodeId {
        let node = NodeId(self.next_id);
        self.next_id += 1;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "visibility.mount",
            id = id.as_str(),
            node = node.get(),
            parent = parent.map(NodeId::get)
        );
        self.nodes.insert(
            node,
            TreeNode {
                parent,
                tracker: VisibilityTracker::new(id, self.config),
            },
        );
        node
    }

    /// Unmount `node` and all of its descendants.
    ///
    /// Returns how many trackers were removed (0 if `node` is unknown).
    pub fn unmount(&mut self, node: NodeId) -> usize {
        if !self.nodes.contains_key(&node) {
            return 0;
        }
        // Children always have larger ids than their parents, so one ordered
        // pass finds the whole subtree.
        let mut doomed = BTreeSet::new();
        doomed.insert(node);
        for (id, entry) in self.nodes.range(node..) {
            if entry.parent.is_some_and(|p| doomed.contains(&p)) {
                doomed.insert(*id);
            }
        }
        for id in &doomed {
            if let Some(mut entry) = self.nodes.remove(id) {
                entry.tracker.disconnect();
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "visibility.unmount",
            node = node.get(),
            removed = doomed.len()
        );
        doomed.len()
    }

    pub fn is_mounted(&self, node: NodeId) -> bool {
        self.nodes.contains_key(&node)
    }

    /// Number of mounted trackers, each holding one live subscription.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(&node).and_then(|n| n.parent)
    }

    pub fn tracker(&self, node: NodeId) -> Option<&VisibilityTracker> {
        self.nodes.get(&node).map(|n| &n.tracker)
    }

    pub fn metrics(&self, node: NodeId) -> Option<&TrackerMetrics> {
        self.tracker(node).map(VisibilityTracker::metrics)
    }

    /// Feed a ratio from a native intersection observer.
    pub fn report_intersection(&mut self, node: NodeId, ratio: f64) -> bool {
        match self.nodes.get_mut(&node) {
            Some(entry) => {
                entry.tracker.on_intersection(ratio);
                true
            }
            None => false,
        }
    }

    /// Recompute every mounted tracker the host can measure.
    ///
    /// Returns how many trackers were updated.
    pub fn dispatch(&mut self, event: ViewportEvent, measure: &impl ElementMeasure) -> usize {
        let viewport = match event {
            ViewportEvent::Resize(size) => size,
            ViewportEvent::Scroll => measure.viewport(),
        };

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "visibility.dispatch",
            event = event.name(),
            nodes = self.nodes.len()
        )
        .entered();

        let mut updated = 0;
        for (node, entry) in &mut self.nodes {
            if let Some(element) = measure.element_box(*node, entry.tracker.id()) {
                entry.tracker.measure(viewport, element);
                updated += 1;
            }
        }
        updated
    }

    /// The context visible to `node`'s children: every ancestor's entry plus
    /// `node`'s own, ancestors applied first.
    pub fn context_for(&self, node: NodeId) -> Option<VisibilityContext> {
        let mut chain = Vec::new();
        let mut cursor = Some(node);
        while let Some(id) = cursor {
            let entry = self.nodes.get(&id)?;
            chain.push(&entry.tracker);
            cursor = entry.parent;
        }
        Some(
            chain
                .into_iter()
                .rev()
                .fold(VisibilityContext::root(), |ctx, tracker| tracker.context(&ctx)),
        )
    }
}
