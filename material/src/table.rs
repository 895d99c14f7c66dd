use std::mem::size_of;

use cozy_chess::Color;
use endgame::{EndgameRegistry, EVALUATE_KXK};
use log::debug;
use utils::{memory::prefetch, MaterialCounts, Position};

use crate::classify::is_kxk;
use crate::imbalance::imbalance;
use crate::scaling;
use crate::{Entry, MaterialConfig};

/// Direct-mapped cache of material evaluations, one per search worker.
///
/// Each key maps to exactly one slot. A different signature landing in an
/// occupied slot overwrites it, so a collision only costs a recomputation.
///
/// <https://www.chessprogramming.org/Material_Hash_Table>
pub struct MaterialTable {
    entries: Vec<Entry>,
    mask: usize,
}

impl MaterialTable {
    pub fn new(config: &MaterialConfig) -> Self {
        let capacity = config.table_size.max(1).next_power_of_two();

        debug!(
            "Material table: {} entries ({} KB)",
            capacity,
            capacity * size_of::<Entry>() / 1024
        );

        Self {
            entries: vec![Entry::default(); capacity],
            mask: capacity - 1,
        }
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.fill(Entry::default());
        debug!("Material table cleared");
    }

    /// Returns table fill rate in permille (0-1000), sampled over the first 1000 slots.
    pub fn hashfull(&self) -> u16 {
        const MAX_SAMPLE: usize = 1000;

        let sample_size = self.entries.len().min(MAX_SAMPLE);
        let filled = self.entries[..sample_size]
            .iter()
            .filter(|e| e.key != 0)
            .count();

        ((filled * 1000) / sample_size) as u16
    }

    // Warm the slot for an upcoming probe, e.g. right after a capture changes the material.
    #[inline(always)]
    pub fn prefetch(&self, key: u64) {
        unsafe {
            let ptr = self.entries.as_ptr().add(self.slot(key)) as *const u8;
            prefetch(ptr);
        }
    }

    #[inline(always)]
    fn slot(&self, key: u64) -> usize {
        (key as usize) & self.mask
    }

    #[inline(always)]
    pub fn probe<R>(&mut self, position: &Position, endgames: &R) -> &Entry
    where
        R: EndgameRegistry + ?Sized,
    {
        self.probe_material(position.material(), endgames)
    }

    /// Looks up the entry for this material, computing and storing it on a miss.
    pub fn probe_material<R>(&mut self, material: &MaterialCounts, endgames: &R) -> &Entry
    where
        R: EndgameRegistry + ?Sized,
    {
        let key = material.material_key();
        let slot = self.slot(key);

        if self.entries[slot].key != key {
            self.entries[slot] = compute(key, material, endgames);
        }

        &self.entries[slot]
    }
}

fn compute<R>(key: u64, material: &MaterialCounts, endgames: &R) -> Entry
where
    R: EndgameRegistry + ?Sized,
{
    let mut entry = Entry {
        key,
        value: imbalance(material),
        game_phase: material.game_phase(),
        ..Entry::default()
    };

    // A specialized evaluation for this exact signature, then the generic one
    // for mating a lone king. Either one is all the evaluator needs.
    if let Some(eval) = endgames.evaluator(key) {
        entry.evaluation_function = Some(eval);
        return entry;
    }

    if let Some(us) = Color::ALL.into_iter().find(|&c| is_kxk(material, c)) {
        entry.evaluation_function = Some(EVALUATE_KXK[us as usize]);
        return entry;
    }

    // Scaling routines never end the lookup. An exact match only claims the
    // side it favors; generic patterns may still fill the other side.
    if let Some(scale) = endgames.scaler(key) {
        entry.scaling_function[scale.strong_side as usize] = Some(scale);
    }

    scaling::assign_generic(material, &mut entry.scaling_function);
    scaling::assign_pawn_endings(material, &mut entry.scaling_function);

    entry.factor = scaling::drawish_factors(material);

    entry
}
