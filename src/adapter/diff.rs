use std::{collections::HashMap, hash::Hash, slice};

/// One structural change to a displayed list.
///
/// Indices always refer to the list as it stands when the edit is applied,
/// so a script has to be replayed in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    Remove { index: usize },
    /// Take the item at `from` out, then put it back so that it sits at `to`.
    Move { from: usize, to: usize },
    /// Insert `new[index]` at `index`.
    Insert { index: usize },
    /// Same item as before at `index`, with different content.
    Change { index: usize },
}

/// The ordered edits that turn an old list into a new one.
///
/// Removals come first (highest index first), then moves, then insertions and
/// content changes, both in ascending order of their position in the new list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditScript {
    edits: Vec<Edit>,
}

impl EditScript {
    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    pub fn len(&self) -> usize {
        self.edits.len()
    }

    pub fn iter(&self) -> slice::Iter<'_, Edit> {
        self.edits.iter()
    }

    pub fn edits(&self) -> &[Edit] {
        &self.edits
    }

    pub fn removals(&self) -> usize {
        self.count(|e| matches!(e, Edit::Remove { .. }))
    }

    pub fn moves(&self) -> usize {
        self.count(|e| matches!(e, Edit::Move { .. }))
    }

    pub fn insertions(&self) -> usize {
        self.count(|e| matches!(e, Edit::Insert { .. }))
    }

    pub fn changes(&self) -> usize {
        self.count(|e| matches!(e, Edit::Change { .. }))
    }

    fn count(&self, predicate: impl Fn(&Edit) -> bool) -> usize {
        self.edits.iter().filter(|e| predicate(e)).count()
    }

    /// Replays the script on `list`, which must hold the old sequence that was diffed
    /// against `new`. Afterwards `list` equals `new`.
    pub fn apply_to<T: Clone>(&self, list: &mut Vec<T>, new: &[T]) {
        for edit in &self.edits {
            match *edit {
                Edit::Remove { index } => {
                    list.remove(index);
                }
                Edit::Move { from, to } => {
                    let item = list.remove(from);
                    list.insert(to, item);
                }
                Edit::Insert { index } => list.insert(index, new[index].clone()),
                Edit::Change { index } => list[index] = new[index].clone(),
            }
        }
    }
}

impl<'a> IntoIterator for &'a EditScript {
    type Item = &'a Edit;
    type IntoIter = slice::Iter<'a, Edit>;

    fn into_iter(self) -> Self::IntoIter {
        self.edits.iter()
    }
}

/// Computes the edit script from `old` to `new`.
///
/// `key` decides identity: items with equal keys are the same item, wherever they
/// sit. Items that are the same but not `==` are reported as changes. Items kept in
/// both lists are moved only when they fall outside the longest run that already
/// has the right relative order, so the number of moves is minimal.
pub fn diff<T, K, F>(old: &[T], new: &[T], key: F) -> EditScript
where
    T: PartialEq,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    if old == new {
        return EditScript::default();
    }

    let (old_index, new_index) = match (index_by_key(old, &key), index_by_key(new, &key)) {
        (Some(old_index), Some(new_index)) => (old_index, new_index),
        _ => {
            log::warn!(
                "Duplicate keys in list update, replacing all {} items with {}",
                old.len(),
                new.len()
            );
            return full_replacement(old.len(), new.len());
        }
    };

    let mut edits = Vec::new();

    for (index, item) in old.iter().enumerate().rev() {
        if !new_index.contains_key(&key(item)) {
            edits.push(Edit::Remove { index });
        }
    }

    // (old position, new position) of every kept item, in new order.
    let kept: Vec<(usize, usize)> = new
        .iter()
        .enumerate()
        .filter_map(|(new_pos, item)| {
            old_index
                .get(&key(item))
                .map(|&old_pos| (old_pos, new_pos))
        })
        .collect();
    push_moves(&kept, &mut edits);

    for (index, item) in new.iter().enumerate() {
        if !old_index.contains_key(&key(item)) {
            edits.push(Edit::Insert { index });
        }
    }

    for &(old_pos, new_pos) in &kept {
        if old[old_pos] != new[new_pos] {
            edits.push(Edit::Change { index: new_pos });
        }
    }

    EditScript { edits }
}

fn index_by_key<T, K, F>(items: &[T], key: &F) -> Option<HashMap<K, usize>>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut index = HashMap::with_capacity(items.len());
    for (pos, item) in items.iter().enumerate() {
        if index.insert(key(item), pos).is_some() {
            return None;
        }
    }
    Some(index)
}

fn full_replacement(old_len: usize, new_len: usize) -> EditScript {
    let removals = (0..old_len).rev().map(|index| Edit::Remove { index });
    let insertions = (0..new_len).map(|index| Edit::Insert { index });
    EditScript {
        edits: removals.chain(insertions).collect(),
    }
}

/// Emits the moves that put the kept items (already stripped of removals) into new order.
///
/// `kept[c]` is the c-th kept item in new order. Items on the longest increasing run
/// of old positions stay put; every other item is moved once, in new order, to sit
/// right after its predecessor `kept[c - 1]`, which is already in its final place.
///
/// Where a moved item lands is known up front: right after the nearest staying item
/// before it in new order (or at the front), behind the items moved there earlier.
/// Laying out those landing slots next to the original ones gives a fixed order over
/// all slots, and a `SlotCounter` turns a slot into a list index in O(log k).
fn push_moves(kept: &[(usize, usize)], edits: &mut Vec<Edit>) {
    let old_positions: Vec<usize> = kept.iter().map(|&(old_pos, _)| old_pos).collect();
    let stays = longest_increasing_run(&old_positions);
    if stays.iter().all(|&s| s) {
        return;
    }

    let k = kept.len();
    let mut by_old: Vec<usize> = (0..k).collect();
    by_old.sort_by_key(|&c| kept[c].0);
    let mut rank = vec![0; k];
    for (r, &c) in by_old.iter().enumerate() {
        rank[c] = r;
    }

    // Group 0 lands at the front, group r + 1 right after the item of rank r.
    let mut group = vec![0; k];
    let mut group_len = vec![0; k + 1];
    let mut current = 0;
    for c in 0..k {
        if stays[c] {
            current = rank[c] + 1;
        } else {
            group[c] = current;
            group_len[current] += 1;
        }
    }

    let mut group_start = vec![0; k + 1];
    let mut item_slot = vec![0; k];
    let mut next = group_len[0];
    for r in 0..k {
        item_slot[r] = next;
        group_start[r + 1] = next + 1;
        next += 1 + group_len[r + 1];
    }

    let mut occupied = SlotCounter::new(next);
    for &slot in &item_slot {
        occupied.insert(slot);
    }

    let mut landed = vec![0; k + 1];
    for c in 0..k {
        if stays[c] {
            continue;
        }
        let old_slot = item_slot[rank[c]];
        let from = occupied.before(old_slot);
        occupied.remove(old_slot);

        let g = group[c];
        let new_slot = group_start[g] + landed[g];
        landed[g] += 1;
        let to = occupied.before(new_slot);
        occupied.insert(new_slot);

        if from != to {
            edits.push(Edit::Move { from, to });
        }
    }
}

/// Fenwick tree over slots that are either occupied or empty.
struct SlotCounter {
    tree: Vec<usize>,
}

impl SlotCounter {
    fn new(slots: usize) -> Self {
        Self {
            tree: vec![0; slots + 1],
        }
    }

    fn insert(&mut self, slot: usize) {
        let mut i = slot + 1;
        while i < self.tree.len() {
            self.tree[i] += 1;
            i += i & i.wrapping_neg();
        }
    }

    fn remove(&mut self, slot: usize) {
        let mut i = slot + 1;
        while i < self.tree.len() {
            self.tree[i] -= 1;
            i += i & i.wrapping_neg();
        }
    }

    /// Number of occupied slots strictly before `slot`.
    fn before(&self, slot: usize) -> usize {
        let mut count = 0;
        let mut i = slot;
        while i > 0 {
            count += self.tree[i];
            i -= i & i.wrapping_neg();
        }
        count
    }
}

/// Marks the members of one longest strictly increasing subsequence of `values`.
///
/// Patience sorting with back links; the same input always marks the same run.
fn longest_increasing_run(values: &[usize]) -> Vec<bool> {
    let mut tails: Vec<usize> = Vec::new();
    let mut previous: Vec<Option<usize>> = vec![None; values.len()];

    for (i, &value) in values.iter().enumerate() {
        let slot = tails.partition_point(|&t| values[t] < value);
        if slot > 0 {
            previous[i] = Some(tails[slot - 1]);
        }
        if slot == tails.len() {
            tails.push(i);
        } else {
            tails[slot] = i;
        }
    }

    let mut members = vec![false; values.len()];
    let mut cursor = tails.last().copied();
    while let Some(i) = cursor {
        members[i] = true;
        cursor = previous[i];
    }
    members
}
