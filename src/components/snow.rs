use ratatui::style::Style;

use crate::{constants::snow, dice::Dice};

#[derive(Debug, Clone, PartialEq)]
pub struct Snowflake {
    pub x: usize,
    pub y: usize,
    pub glyph: char,
    pub style: Style,
}

impl Snowflake {
    pub fn new(x: usize, y: usize, glyph: char, style: Style) -> Self {
        Self { x, y, glyph, style }
    }
}

/// Falling snow over a `width x height` canvas.
///
/// Every live flake satisfies `x < width` and `y < height - 1`.
#[derive(Debug)]
pub struct Snowfall {
    width: usize,
    height: usize,
    spawn_chance: f64,
    drift_chance: f64,
    flakes: Vec<Snowflake>,
}

impl Snowfall {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, spawn_chance: snow::SPAWN_CHANCE, drift_chance: snow::DRIFT_CHANCE, flakes: Vec::new() }
    }

    pub fn spawn_chance(self, spawn_chance: f64) -> Self {
        Self { spawn_chance, ..self }
    }

    pub fn drift_chance(self, drift_chance: f64) -> Self {
        Self { drift_chance, ..self }
    }

    pub fn flakes(&self) -> &[Snowflake] {
        &self.flakes
    }

    /// Places a flake directly, clamping `x` into the canvas. Flakes already on the
    /// bottom row are dropped.
    pub fn insert(&mut self, mut flake: Snowflake) {
        if self.width == 0 {
            return;
        }
        flake.x = flake.x.min(self.width - 1);
        if flake.y + 1 < self.height {
            self.flakes.push(flake);
        }
    }

    /// One tick: maybe spawn a flake on the top row, then move every flake down a row.
    pub fn update<D: Dice>(&mut self, dice: &mut D) {
        if self.width > 0 && dice.chance(self.spawn_chance) {
            let glyph = *dice.pick(&snow::SNOWFLAKES);
            let style = *dice.pick(&snow::SNOWFLAKE_STYLES);
            let x = dice.index(self.width);
            self.flakes.push(Snowflake::new(x, 0, glyph, style));
        }

        let max_x = self.width.saturating_sub(1) as i64;
        for flake in self.flakes.iter_mut() {
            flake.y += 1;
            if dice.chance(self.drift_chance) {
                let x = flake.x as i64 + dice.step() as i64;
                flake.x = x.clamp(0, max_x) as usize;
            }
        }

        let height = self.height;
        self.flakes.retain(|flake| flake.y + 1 < height);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::dice::{scripted::ScriptedDice, RandomDice};

    fn flake(x: usize, y: usize) -> Snowflake {
        Snowflake::new(x, y, '*', snow::SNOWFLAKE_STYLES[0])
    }

    #[test]
    fn test_flake_falls_one_row() {
        let mut snowfall = Snowfall::new(60, 20);
        snowfall.insert(flake(30, 0));

        // No spawn, no drift
        snowfall.update(&mut ScriptedDice::new().chances([false, false]));

        assert_eq!(snowfall.flakes(), &[flake(30, 1)]);
    }

    #[test]
    fn test_flake_retired_at_bottom() {
        let mut snowfall = Snowfall::new(60, 20);
        snowfall.insert(flake(10, 18));
        snowfall.insert(flake(11, 17));

        snowfall.update(&mut ScriptedDice::new());

        assert_eq!(snowfall.flakes(), &[flake(11, 18)]);
    }

    #[test]
    fn test_spawned_flake_falls_same_tick() {
        let mut snowfall = Snowfall::new(60, 20);

        // Spawn: glyph 'o', bold cyan, column 42
        snowfall.update(&mut ScriptedDice::new().chances([true, false]).indices([2, 3, 42]));

        assert_eq!(snowfall.flakes(), &[Snowflake::new(42, 1, 'o', snow::SNOWFLAKE_STYLES[3])]);
    }

    #[test]
    fn test_drift_is_clamped() {
        let mut snowfall = Snowfall::new(60, 20);
        snowfall.insert(flake(0, 3));
        snowfall.insert(flake(59, 3));
        snowfall.insert(flake(30, 3));

        // step() rolls index 0 -> -1, index 2 -> +1
        let mut dice = ScriptedDice::new().chances([false, true, true, true]).indices([0, 2, 2]);
        snowfall.update(&mut dice);

        let xs = snowfall.flakes().iter().map(|f| f.x).collect::<Vec<_>>();
        assert_eq!(xs, vec![0, 59, 31]);
    }

    #[test]
    fn test_flakes_stay_in_bounds() {
        let (width, height) = (25, 10);
        let mut snowfall = Snowfall::new(width, height);
        let mut dice = RandomDice::seeded(2024);

        for _ in 0..500 {
            let before = snowfall.flakes().to_vec();
            snowfall.update(&mut dice);

            for flake in snowfall.flakes() {
                assert!(flake.x < width);
                assert!(flake.y < height - 1);
            }
            // Survivors keep their order and each moved down exactly one row
            let survivors = before.iter().filter(|f| f.y + 2 < height).collect::<Vec<_>>();
            for (old, new) in survivors.iter().zip(snowfall.flakes()) {
                assert_eq!(new.y, old.y + 1);
                assert!(new.x.abs_diff(old.x) <= 1);
            }
        }
    }

    #[test]
    fn test_tiny_canvas() {
        let mut snowfall = Snowfall::new(0, 20);
        snowfall.update(&mut ScriptedDice::new().chances([true]));
        assert!(snowfall.flakes().is_empty());

        let mut snowfall = Snowfall::new(10, 1);
        snowfall.update(&mut ScriptedDice::new().chances([true]));
        assert!(snowfall.flakes().is_empty());
    }
}
