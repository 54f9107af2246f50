use crate::{
    model::{
        beatmap::{DifficultyAttributes, ScoreVersion},
        mods::GameMods,
    },
    osu::{OsuPerformanceAttributes, OsuScoreState},
};

/// Adjusted to keep the final pp value scaled around what it used to be when
/// changing things.
pub const PERFORMANCE_BASE_MULTIPLIER: f32 = 1.12;

pub(super) struct OsuPerformanceCalculator {
    attrs: DifficultyAttributes,
    mods: GameMods,
    acc: f32,
    state: OsuScoreState,
}

impl OsuPerformanceCalculator {
    pub fn new(attrs: DifficultyAttributes, mods: GameMods, state: OsuScoreState) -> Self {
        Self {
            attrs,
            mods,
            acc: state.accuracy(),
            state,
        }
    }
}

impl OsuPerformanceCalculator {
    pub fn calculate(self) -> OsuPerformanceAttributes {
        let aim_value = self.compute_aim_value();
        let speed_value = self.compute_speed_value();
        let acc_value = self.compute_accuracy_value();

        let pp = if self.mods.unranked() {
            0.0
        } else {
            let total_hits = self.state.total_hits() as f32;
            let mut multiplier = PERFORMANCE_BASE_MULTIPLIER;

            // NF penalty
            if self.mods.nf() {
                multiplier *= (1.0 - 0.02 * self.state.misses as f32).max(0.9);
            }

            // SO penalty
            if self.mods.so() {
                multiplier *= 1.0 - (self.attrs.n_spinners as f32 / total_hits).powf(0.85);
            }

            (aim_value.powf(1.1) + speed_value.powf(1.1) + acc_value.powf(1.1)).powf(1.0 / 1.1)
                * multiplier
        };

        OsuPerformanceAttributes {
            difficulty: self.attrs,
            pp_acc: acc_value,
            pp_aim: aim_value,
            pp_speed: speed_value,
            pp,
        }
    }

    fn compute_aim_value(&self) -> f32 {
        let attrs = &self.attrs;

        // TD penalty
        let raw_aim = if self.mods.td() {
            attrs.aim.powf(0.8)
        } else {
            attrs.aim
        };

        let mut aim_value = (5.0 * (raw_aim / 0.0675).max(1.0) - 4.0).powf(3.0) / 100_000.0;

        let total_hits = self.state.total_hits();

        aim_value *= len_bonus(total_hits);

        // Penalize misses relative to the amount of objects, at least 3%
        if self.state.misses > 0 {
            let misses = self.state.misses as f32;

            aim_value *=
                0.97 * (1.0 - (misses / total_hits as f32).powf(0.775)).powf(misses);
        }

        aim_value *= self.combo_scaling();

        let ar = attrs.ar;

        let ar_factor = if ar > 10.33 {
            ar - 10.33
        } else if ar < 8.0 {
            0.025 * (8.0 - ar)
        } else {
            0.0
        };

        let ar_bonus = 1.0 + (0.03 + 0.37 * ar_total_hits_factor(total_hits)) * ar_factor;

        // HD bonus, more reward for lower AR
        if self.mods.hd() {
            aim_value *= 1.0 + 0.04 * (12.0 - ar);
        }

        let mut fl_bonus = 1.0;

        // FL bonus, based on the amount of objects
        if self.mods.fl() {
            fl_bonus = 1.0
                + 0.35 * (total_hits as f32 / 200.0).min(1.0)
                + if total_hits > 200 {
                    0.3 * ((total_hits - 200) as f32 / 300.0).min(1.0)
                        + if total_hits > 500 {
                            (total_hits - 500) as f32 / 1200.0
                        } else {
                            0.0
                        }
                } else {
                    0.0
                };
        }

        aim_value *= fl_bonus.max(ar_bonus);

        // Scale with accuracy slightly
        aim_value *= 0.5 + self.acc / 2.0;
        // and with accuracy difficulty
        aim_value *= 0.98 + attrs.od.powf(2.0) / 2500.0;

        aim_value
    }

    fn compute_speed_value(&self) -> f32 {
        let attrs = &self.attrs;

        let mut speed_value =
            (5.0 * (attrs.speed / 0.0675).max(1.0) - 4.0).powf(3.0) / 100_000.0;

        let total_hits = self.state.total_hits();

        speed_value *= len_bonus(total_hits);

        // Penalize misses relative to the amount of objects, at least 3%
        if self.state.misses > 0 {
            let misses = self.state.misses as f32;

            speed_value *= 0.97
                * (1.0 - (misses / total_hits as f32).powf(0.775)).powf(misses.powf(0.875));
        }

        speed_value *= self.combo_scaling();

        let ar = attrs.ar;

        let ar_factor = if ar > 10.33 { ar - 10.33 } else { 0.0 };

        speed_value *= 1.0 + (0.03 + 0.37 * ar_total_hits_factor(total_hits)) * ar_factor;

        // HD bonus, more reward for lower AR
        if self.mods.hd() {
            speed_value *= 1.0 + 0.04 * (12.0 - ar);
        }

        // Scale with accuracy and OD
        speed_value *= (0.95 + attrs.od.powf(2.0) / 750.0)
            * self.acc.powf((14.5 - attrs.od.max(8.0)) / 2.0);

        // Punish doubletapping through the amount of 50s
        let n50 = self.state.n50 as f32;
        let n50_threshold = total_hits as f32 / 500.0;

        speed_value *= 0.98_f32.powf(if n50 < n50_threshold {
            0.0
        } else {
            n50 - n50_threshold
        });

        speed_value
    }

    fn compute_accuracy_value(&self) -> f32 {
        let attrs = &self.attrs;

        // Only hit circles are considered by default since they focus on
        // hitting the timing window
        let (better_acc_percentage, n_objects_with_acc) = match attrs.score_version {
            ScoreVersion::V2 => (self.acc, self.state.total_hits()),
            ScoreVersion::V1 => {
                let n_circles = attrs.n_circles;

                let better_acc_percentage = if n_circles > 0 {
                    let total_hits = i64::from(self.state.total_hits());
                    let n300 = i64::from(self.state.n300) - (total_hits - i64::from(n_circles));

                    let numerator =
                        n300 * 6 + i64::from(self.state.n100) * 2 + i64::from(self.state.n50);

                    numerator as f32 / (i64::from(n_circles) * 6) as f32
                } else {
                    0.0
                };

                // It's possible to reach negative accuracy through this formula
                (better_acc_percentage.max(0.0), n_circles)
            }
        };

        let mut acc_value =
            1.52163_f32.powf(attrs.od) * better_acc_percentage.powf(24.0) * 2.83;

        // Bonus for many objects
        acc_value *= (n_objects_with_acc as f32 / 1000.0).powf(0.3).min(1.15);

        // HD bonus
        if self.mods.hd() {
            acc_value *= 1.08;
        }

        // FL bonus
        if self.mods.fl() {
            acc_value *= 1.02;
        }

        acc_value
    }

    fn combo_scaling(&self) -> f32 {
        let map_max_combo = self.attrs.max_combo;

        if map_max_combo > 0.0 {
            ((self.state.max_combo as f32).powf(0.8) / map_max_combo.powf(0.8)).min(1.0)
        } else {
            1.0
        }
    }
}

fn len_bonus(total_hits: u32) -> f32 {
    let total_hits = total_hits as f32;

    0.95 + 0.4 * (total_hits / 2000.0).min(1.0)
        + if total_hits > 2000.0 {
            (total_hits / 2000.0).log10() * 0.5
        } else {
            0.0
        }
}

fn ar_total_hits_factor(total_hits: u32) -> f32 {
    1.0 / (1.0 + (-(0.007 * (total_hits as f32 - 400.0))).exp())
}
