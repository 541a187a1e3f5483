//! Two-pointer dominance merge of frontier entry sequences.

use std::cmp::Ordering;

use crate::frontier::Entry;

/// Merge two dominance-free, weight-ascending entry sequences into one.
///
/// `previous` is the unmodified frontier from the prior step and `extended`
/// is the extend output for the same step. The merge walks both sequences
/// with one cursor each, always emitting the lighter head and discarding
/// entries the emitted one dominates (an entry dominates another when its
/// weight is no greater and its cost no smaller). Equal weights keep only
/// the higher-cost entry, ties favouring `previous`; the survivor is emitted
/// once its side's cursor reaches it again. Once one side is exhausted the
/// other side's remainder survives only where its cost strictly exceeds the
/// cost of the last emitted entry, which every remaining entry is at least
/// as heavy as.
///
/// The output is strictly ascending in both weight and cost. Item identity
/// is never inspected, only carried through for backtracking.
#[must_use]
pub fn merge(previous: &[Entry], extended: &[Entry]) -> Vec<Entry> {
    let mut merged = Vec::with_capacity(previous.len() + extended.len());
    let mut i = 0;
    let mut j = 0;
    loop {
        match (previous.get(i), extended.get(j)) {
            (Some(&prev), Some(&ext)) => match prev.weight.cmp(&ext.weight) {
                Ordering::Less => {
                    merged.push(prev);
                    i += 1;
                    // Remaining extended entries are all heavier, so any with
                    // cost at or below this one is dominated.
                    while extended.get(j).is_some_and(|e| e.cost <= prev.cost) {
                        j += 1;
                    }
                }
                Ordering::Equal => {
                    // Equal weight: only the higher-cost entry can survive,
                    // and it is emitted by a later branch.
                    if prev.cost >= ext.cost {
                        j += 1;
                    } else {
                        i += 1;
                    }
                }
                Ordering::Greater => {
                    merged.push(ext);
                    j += 1;
                    while previous.get(i).is_some_and(|e| e.cost <= ext.cost) {
                        i += 1;
                    }
                }
            },
            (None, Some(&ext)) => {
                push_if_improving(&mut merged, ext);
                j += 1;
            }
            (Some(&prev), None) => {
                push_if_improving(&mut merged, prev);
                i += 1;
            }
            (None, None) => break,
        }
    }
    merged
}

/// Emit a tail entry only when it improves on the best cost already emitted.
/// Anything else is dominated by a lighter entry already in the output.
fn push_if_improving(merged: &mut Vec<Entry>, entry: Entry) {
    if merged.last().is_none_or(|last| entry.cost > last.cost) {
        merged.push(entry);
    }
}
