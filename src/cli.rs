use clap::Parser;

use crate::{config::SceneConfig, utils::version};

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(short, long, value_name = "FLOAT", help = "Tick rate, i.e. number of frames per second")]
    pub tick_rate: Option<f64>,

    #[arg(long, value_name = "COLUMNS", help = "Scene width")]
    pub width: Option<u16>,

    #[arg(long, value_name = "ROWS", help = "Scene height")]
    pub height: Option<u16>,

    #[arg(short, long, value_name = "SEED", help = "Seed the random source for a repeatable animation")]
    pub seed: Option<u64>,

    #[arg(short, long, help = "Print frames as plain colored text instead of a full screen view")]
    pub plain: bool,
}

impl Cli {
    /// Command line values win over the configuration file.
    pub fn apply(&self, scene: &mut SceneConfig) {
        if let Some(tick_rate) = self.tick_rate {
            scene.tick_rate = tick_rate;
        }
        if let Some(width) = self.width {
            scene.width = width;
        }
        if let Some(height) = self.height {
            scene.height = height;
        }
    }
}
