use crate::{
    catch::{CatchPerformanceAttributes, CatchScoreState},
    model::{beatmap::DifficultyAttributes, mods::GameMods},
};

pub(super) struct CatchPerformanceCalculator {
    attrs: DifficultyAttributes,
    mods: GameMods,
    state: CatchScoreState,
}

impl CatchPerformanceCalculator {
    pub const fn new(attrs: DifficultyAttributes, mods: GameMods, state: CatchScoreState) -> Self {
        Self { attrs, mods, state }
    }
}

impl CatchPerformanceCalculator {
    pub fn calculate(self) -> CatchPerformanceAttributes {
        let pp = if self.mods.unranked() {
            0.0
        } else {
            self.compute_value()
        };

        CatchPerformanceAttributes {
            difficulty: self.attrs,
            pp,
        }
    }

    fn compute_value(&self) -> f32 {
        let attributes = &self.attrs;

        // Relying heavily on aim
        let mut pp = (5.0 * (attributes.aim / 0.0049).max(1.0) - 4.0).powf(2.0) / 100_000.0;

        // Longer maps are worth more, "longer" meaning objects that count
        // towards combo
        let len_factor =
            self.state.combo_hits() as f32 * 0.5 + attributes.direction_change_count * 0.9;

        let len_bonus = 0.84 + 0.38 * (len_factor / 1700.0).min(1.0);

        pp *= len_bonus;

        // Penalize misses exponentially
        pp *= 0.96_f32.powf(self.state.misses as f32);

        // Combo scaling
        let map_max_combo = attributes.max_combo;

        if map_max_combo > 0.0 {
            pp *= ((self.state.max_combo as f32).powf(0.5) / map_max_combo.powf(0.5)).min(1.0);
        }

        // AR scaling
        let ar = attributes.ar;
        let mut ar_factor = 1.0;

        if ar > 9.0 {
            ar_factor += 0.1 * (ar - 9.0);
        }

        if ar > 10.0 {
            ar_factor += 0.1 * (ar - 10.0);
        } else if ar < 8.0 {
            ar_factor += 0.04 * (8.0 - ar);
        }

        pp *= ar_factor;

        // HD bonus, almost nothing on max AR and more the lower it is
        if self.mods.hd() {
            if ar <= 10.0 {
                pp *= 1.05 + 0.10 * (10.0 - ar);
            } else if ar > 10.0 {
                pp *= 1.01 + 0.04 * (11.0 - ar.min(11.0));
            }

            if ar <= 9.0 {
                pp *= 1.0 + 0.04 * (8.0 - ar);
            }
        }

        // FL bonus, length bonus applies again
        if self.mods.fl() {
            pp *= 1.35 * len_bonus;

            if ar > 8.0 {
                pp *= 0.1 * (ar - 8.0) + 1.0;
            }

            if ar < 8.0 {
                pp *= 0.06 * (8.0 - ar) + 1.0;
            }
        }

        // Accuracy scaling
        pp *= self.state.accuracy().powf(6.0);

        // HT penalty, slower catcher is easier to control
        if self.mods.ht() {
            pp *= 0.90;
        }

        // NF penalty
        if self.mods.nf() {
            pp *= 0.90;
        }

        // SO penalty
        if self.mods.so() {
            pp *= 0.95;
        }

        pp
    }
}
