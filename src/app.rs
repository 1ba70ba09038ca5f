use std::io::{self, Write};

use color_eyre::eyre::Result;
use ratatui::prelude::Rect;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::{self, UnboundedSender};
use tokio_util::sync::CancellationToken;

use crate::{
    action::Action,
    components::{
        presenter::{self, SceneView},
        scene::Scene,
    },
    config::{key_event_to_string, Config},
    constants::text,
    dice::RandomDice,
    tui,
};

#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    Running,
    Suspended,
    Terminating,
}

pub struct App {
    config: Config,
    mode: Mode,
    plain: bool,
    scene: Scene<RandomDice>,
    shutdown: CancellationToken,
}

impl App {
    pub fn new(config: Config, seed: Option<u64>, plain: bool) -> Result<Self> {
        config.scene.validate()?;

        let dice = match seed {
            Some(seed) => RandomDice::seeded(seed),
            None => RandomDice::from_entropy(),
        };
        let scene = Scene::new(&config.scene, dice);

        Ok(Self { config, mode: Mode::default(), plain, scene, shutdown: CancellationToken::new() })
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Cancels the animation; the run loop notices on its next iteration.
    pub fn shutdown_token(&self) -> CancellationToken {
        self.shutdown.clone()
    }

    pub async fn run(&mut self) -> Result<()> {
        let shutdown = self.shutdown.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                log::info!("Interrupted");
                shutdown.cancel();
            }
        });

        println!("{}", text::INTRO_TEXT);
        tokio::select! {
            _ = self.shutdown.cancelled() => {},
            _ = tokio::time::sleep(self.config.scene.start_delay()) => {},
        }

        if !self.shutdown.is_cancelled() {
            log::info!(
                "Starting {}x{} scene at {} ticks per second",
                self.config.scene.width,
                self.config.scene.height,
                self.config.scene.tick_rate
            );
            if self.plain {
                self.run_plain().await?;
            } else {
                self.run_tui().await?;
            }
        }

        self.mode = Mode::Terminating;
        println!("\n\n{}", text::FAREWELL_TEXT);
        Ok(())
    }

    async fn run_plain(&mut self) -> Result<()> {
        let mut stdout = io::stdout();
        let mut ticker = tokio::time::interval(self.config.scene.tick_interval());

        loop {
            tokio::select! {
                _ = self.shutdown.cancelled() => break,
                _ = ticker.tick() => {
                    let frame = self.scene.advance();
                    presenter::write_ansi(&mut stdout, frame)?;
                },
            }
        }
        stdout.flush()?;
        Ok(())
    }

    async fn run_tui(&mut self) -> Result<()> {
        let (action_tx, mut action_rx) = mpsc::unbounded_channel();

        for (key, action) in self.config.keybindings.iter() {
            log::debug!("{} -> {action}", key_event_to_string(key));
        }

        let mut tui = tui::Tui::new()?;
        tui.tick_rate(self.config.scene.tick_rate);
        tui.enter()?;

        loop {
            tokio::select! {
                _ = self.shutdown.cancelled() => action_tx.send(Action::Quit)?,
                maybe_event = tui.next() => match maybe_event {
                    Some(tui::Event::Tick) => action_tx.send(Action::Tick)?,
                    Some(tui::Event::Resize(x, y)) => action_tx.send(Action::Resize(x, y))?,
                    Some(tui::Event::Key(key)) => {
                        if let Some(action) = self.config.keybindings.get(&key) {
                            log::info!("Got action: {action:?}");
                            action_tx.send(action.clone())?;
                        }
                    },
                    Some(tui::Event::Error) => action_tx.send(Action::Error("Failed to read terminal event".into()))?,
                    Some(tui::Event::Init) => {},
                    None => action_tx.send(Action::Quit)?,
                },
            }

            while let Ok(action) = action_rx.try_recv() {
                if action != Action::Tick && action != Action::Render {
                    log::debug!("{action:?}");
                }
                self.update(&action, &action_tx)?;
                match action {
                    Action::Resize(w, h) => {
                        tui.resize(Rect::new(0, 0, w, h))?;
                        self.render(&mut tui)?;
                    },
                    Action::Render => self.render(&mut tui)?,
                    _ => {},
                }
            }

            match self.mode {
                Mode::Suspended => {
                    tui.suspend()?;
                    action_tx.send(Action::Resume)?;
                    tui.resume()?;
                },
                Mode::Terminating => {
                    tui.stop()?;
                    break;
                },
                Mode::Running => {},
            }
        }
        tui.exit()?;
        Ok(())
    }

    fn update(&mut self, action: &Action, action_tx: &UnboundedSender<Action>) -> Result<()> {
        match action {
            Action::Tick => {
                self.scene.advance();
                log::trace!("{} snowflakes falling", self.scene.snowfall().flakes().len());
                action_tx.send(Action::Render)?;
            },
            Action::Quit => {
                self.shutdown.cancel();
                self.mode = Mode::Terminating;
            },
            Action::Suspend => self.mode = Mode::Suspended,
            Action::Resume => self.mode = Mode::Running,
            Action::Error(e) => log::error!("{e}"),
            Action::Render | Action::Resize(..) => {},
        }
        Ok(())
    }

    fn render(&self, tui: &mut tui::Tui) -> Result<()> {
        let frame = self.scene.frame();
        tui.draw(|f| {
            f.render_widget(SceneView::new(frame), f.area());
        })?;

        Ok(())
    }
}
