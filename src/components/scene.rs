use ratatui::text::Text;

use crate::{
    components::{canvas::Canvas, presenter, snow::Snowfall, tree::TreeLayout},
    config::SceneConfig,
    dice::Dice,
};

/// Everything the animation owns between ticks.
#[derive(Debug)]
pub struct Scene<D: Dice> {
    width: usize,
    height: usize,
    tint_chance: f64,
    snowfall: Snowfall,
    dice: D,
    frame: Text<'static>,
}

impl<D: Dice> Scene<D> {
    pub fn new(config: &SceneConfig, dice: D) -> Self {
        let width = config.width as usize;
        let height = config.height as usize;
        let snowfall =
            Snowfall::new(width, height).spawn_chance(config.spawn_chance).drift_chance(config.drift_chance);

        Self { width, height, tint_chance: config.tint_chance, snowfall, dice, frame: Text::default() }
    }

    /// Runs one tick: move the snow, rebuild the tree, composite and present.
    pub fn advance(&mut self) -> &Text<'static> {
        self.snowfall.update(&mut self.dice);

        let layout = TreeLayout::generate(self.width, self.height, &mut self.dice);
        let canvas = Canvas::compose(self.width, self.height, &layout, self.snowfall.flakes());
        self.frame = presenter::present(&canvas, self.tint_chance, &mut self.dice);

        &self.frame
    }

    /// The most recently presented frame; empty until the first tick.
    pub fn frame(&self) -> &Text<'static> {
        &self.frame
    }

    pub fn snowfall(&self) -> &Snowfall {
        &self.snowfall
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::dice::{scripted::ScriptedDice, RandomDice};

    #[test]
    fn test_first_frame() {
        let mut scene = Scene::new(&SceneConfig::default(), ScriptedDice::new());
        assert_eq!(scene.frame().lines.len(), 0);

        let frame = scene.advance();
        assert_eq!(frame.lines.len(), 27);
        assert!(scene.snowfall().flakes().is_empty());
    }

    #[test]
    fn test_seeded_scenes_match() {
        let config = SceneConfig::default();
        let mut a = Scene::new(&config, RandomDice::seeded(42));
        let mut b = Scene::new(&config, RandomDice::seeded(42));

        for _ in 0..30 {
            assert_eq!(a.advance(), b.advance());
        }
        assert_eq!(a.snowfall().flakes(), b.snowfall().flakes());
    }

    #[test]
    fn test_config_probabilities_apply() {
        let config = SceneConfig { spawn_chance: 1.0, drift_chance: 0.0, ..SceneConfig::default() };
        let mut scene = Scene::new(&config, RandomDice::seeded(5));

        for tick in 1..=10 {
            scene.advance();
            assert_eq!(scene.snowfall().flakes().len(), tick);
        }
        // A flake spawned every tick and none has reached the bottom row yet
        let rows = scene.snowfall().flakes().iter().map(|f| f.y).collect::<Vec<_>>();
        assert_eq!(rows, (1..=10).rev().collect::<Vec<_>>());
    }
}
