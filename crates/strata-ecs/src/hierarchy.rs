//! Parent links between entities.
//!
//! Only the child-to-parent edge is stored. Child lists are derived on
//! demand by scanning [`Parent`] components, which is enough for the
//! infrequent structural operations gameplay code performs (grid
//! regeneration, compound-entity checks).

use bevy_ecs::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::trace;

/// Upper bound on ancestor walks. A longer chain means the hierarchy
/// contains a cycle.
const MAX_HIERARCHY_DEPTH: usize = 1024;

/// Links an entity to the entity it belongs to.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Parent(pub Entity);

/// Iterates the ancestors of `entity`, nearest first.
///
/// `parent_of` resolves one level of the hierarchy, typically
/// `|e| parents.get(e).ok().map(|p| p.0)` over a `Query<&Parent>`.
pub fn ancestors<F>(entity: Entity, parent_of: F) -> impl Iterator<Item = Entity>
where
    F: Fn(Entity) -> Option<Entity>,
{
    let first = parent_of(entity);
    std::iter::successors(first, move |e| parent_of(*e)).take(MAX_HIERARCHY_DEPTH)
}

/// Returns true if any ancestor of `entity` satisfies `pred`.
pub fn has_ancestor_with<F, P>(entity: Entity, parent_of: F, mut pred: P) -> bool
where
    F: Fn(Entity) -> Option<Entity>,
    P: FnMut(Entity) -> bool,
{
    ancestors(entity, parent_of).any(|ancestor| pred(ancestor))
}

/// Despawns every descendant of `root`, leaving `root` itself alive.
///
/// Returns the number of entities despawned.
pub fn despawn_descendants(world: &mut World, root: Entity) -> usize {
    let mut links = world.query::<(Entity, &Parent)>();
    let mut children: FxHashMap<Entity, Vec<Entity>> = FxHashMap::default();
    for (child, parent) in links.iter(world) {
        children.entry(parent.0).or_default().push(child);
    }

    let mut frontier = vec![root];
    let mut doomed = FxHashSet::default();
    while let Some(parent) = frontier.pop() {
        let Some(direct) = children.get(&parent) else {
            continue;
        };
        for &child in direct {
            if child != root && doomed.insert(child) {
                frontier.push(child);
            }
        }
    }

    let count = doomed.into_iter().filter(|&e| world.despawn(e)).count();
    trace!(?root, count, "despawned descendants");
    count
}
