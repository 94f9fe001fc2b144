use std::sync::Arc;

use parking_lot::RwLock;

use crate::math::JointTransform;

/// Index of a joint inside its [`Skeleton`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JointIndex(pub usize);

#[derive(Debug, Clone)]
pub struct Joint {
    pub name: String,
    pub parent: Option<JointIndex>,
}

/// Joint hierarchy. Joints are stored in an ordered array and reference their
/// parent by index.
#[derive(Debug, Clone, Default)]
pub struct Skeleton {
    joints: Vec<Joint>,
}

impl Skeleton {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a joint and returns its index.
    ///
    /// A parent index that does not exist (yet) is stored as-is and the joint
    /// is treated as a root by [`Skeleton::root_joints`].
    pub fn add_joint(&mut self, name: impl Into<String>, parent: Option<JointIndex>) -> JointIndex {
        let index = JointIndex(self.joints.len());
        self.joints.push(Joint {
            name: name.into(),
            parent,
        });
        index
    }

    #[inline]
    #[must_use]
    pub fn joint(&self, index: JointIndex) -> Option<&Joint> {
        self.joints.get(index.0)
    }

    #[inline]
    #[must_use]
    pub fn num_joints(&self) -> usize {
        self.joints.len()
    }

    #[must_use]
    pub fn find_joint_by_name(&self, name: &str) -> Option<JointIndex> {
        self.joints
            .iter()
            .position(|j| j.name == name)
            .map(JointIndex)
    }

    fn is_root(&self, index: usize) -> bool {
        match self.joints[index].parent {
            None => true,
            Some(parent) => parent.0 >= self.joints.len() || parent.0 == index,
        }
    }

    /// Joints without a valid parent, in index order.
    pub fn root_joints(&self) -> impl Iterator<Item = JointIndex> + '_ {
        (0..self.joints.len())
            .filter(move |&i| self.is_root(i))
            .map(JointIndex)
    }

    /// Number of joints below `index`, counted recursively.
    #[must_use]
    pub fn num_descendants(&self, index: JointIndex) -> usize {
        // Walk each joint's ancestor chain; the depth bound guards against cycles.
        let max_depth = self.joints.len();
        (0..self.joints.len())
            .filter(|&i| {
                let mut current = i;
                for _ in 0..max_depth {
                    if self.is_root(current) {
                        return false;
                    }
                    let Some(parent) = self.joints[current].parent else {
                        return false;
                    };
                    if parent == index {
                        return true;
                    }
                    current = parent.0;
                }
                false
            })
            .count()
    }
}

/// Shared actor data: skeleton, bind pose, and the cached motion-extraction
/// joint.
#[derive(Debug)]
pub struct Actor {
    pub name: String,
    skeleton: Skeleton,
    bind_pose: Vec<JointTransform>,
    // Written by the context resolver the first time the heuristic picks a joint.
    motion_extraction_joint: RwLock<Option<JointIndex>>,
}

impl Actor {
    /// Creates an actor whose bind pose is the identity for every joint.
    #[must_use]
    pub fn new(name: impl Into<String>, skeleton: Skeleton) -> Self {
        let bind_pose = vec![JointTransform::IDENTITY; skeleton.num_joints()];
        Self {
            name: name.into(),
            skeleton,
            bind_pose,
            motion_extraction_joint: RwLock::new(None),
        }
    }

    #[must_use]
    pub fn with_bind_pose(mut self, bind_pose: Vec<JointTransform>) -> Self {
        self.bind_pose = bind_pose;
        self
    }

    #[must_use]
    pub fn with_motion_extraction_joint(mut self, joint: JointIndex) -> Self {
        *self.motion_extraction_joint.get_mut() = Some(joint);
        self
    }

    #[inline]
    #[must_use]
    pub fn skeleton(&self) -> &Skeleton {
        &self.skeleton
    }

    /// Bind pose transform of `joint`, identity when the joint has none.
    #[must_use]
    pub fn bind_transform(&self, joint: JointIndex) -> JointTransform {
        self.bind_pose
            .get(joint.0)
            .copied()
            .unwrap_or(JointTransform::IDENTITY)
    }

    #[must_use]
    pub fn motion_extraction_joint(&self) -> Option<JointIndex> {
        *self.motion_extraction_joint.read()
    }

    pub fn set_motion_extraction_joint(&self, joint: Option<JointIndex>) {
        *self.motion_extraction_joint.write() = joint;
    }

    /// Picks the joint most likely to carry root motion: the root joint with
    /// the largest subtree. Ties go to the lowest index.
    #[must_use]
    pub fn find_best_motion_extraction_joint(&self) -> Option<JointIndex> {
        let mut best: Option<(JointIndex, usize)> = None;
        for root in self.skeleton.root_joints() {
            let descendants = self.skeleton.num_descendants(root);
            if best.is_none_or(|(_, count)| descendants > count) {
                best = Some((root, descendants));
            }
        }
        best.map(|(joint, _)| joint)
    }
}

/// One playing copy of an [`Actor`].
#[derive(Debug, Clone, Default)]
pub struct ActorInstance {
    actor: Option<Arc<Actor>>,
}

impl ActorInstance {
    #[must_use]
    pub fn new(actor: Arc<Actor>) -> Self {
        Self { actor: Some(actor) }
    }

    /// An instance that lost its actor, e.g. after the actor asset was unloaded.
    #[must_use]
    pub fn detached() -> Self {
        Self { actor: None }
    }

    #[inline]
    #[must_use]
    pub fn actor(&self) -> Option<&Arc<Actor>> {
        self.actor.as_ref()
    }
}
