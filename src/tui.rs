use std::{
    io::{stdout, Stdout},
    ops::{ControlFlow, Deref, DerefMut},
    time::Duration,
};

use color_eyre::eyre::Result;
use crossterm::{
    cursor,
    event::{
        DisableMouseCapture, EnableMouseCapture, Event as CrosstermEvent, EventStream, KeyEvent, KeyEventKind,
        MouseEvent,
    },
    terminal::{EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::{FutureExt, StreamExt};
use ratatui::backend::CrosstermBackend as Backend;
use tokio::{
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
    task::JoinHandle,
};
use tokio_util::sync::CancellationToken;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Error,
    Closed,
    Render,
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
}

/// Maps one item of the crossterm stream. `Break` means the stream is done and the event is the last one to send.
fn translate(maybe_event: Option<std::io::Result<CrosstermEvent>>) -> ControlFlow<Event, Option<Event>> {
    match maybe_event {
        Some(Ok(CrosstermEvent::Key(key))) if key.kind == KeyEventKind::Press => {
            ControlFlow::Continue(Some(Event::Key(key)))
        },
        Some(Ok(CrosstermEvent::Mouse(mouse))) => ControlFlow::Continue(Some(Event::Mouse(mouse))),
        Some(Ok(CrosstermEvent::Resize(x, y))) => ControlFlow::Continue(Some(Event::Resize(x, y))),
        Some(Ok(_)) => ControlFlow::Continue(None),
        Some(Err(_)) => ControlFlow::Continue(Some(Event::Error)),
        None => ControlFlow::Break(Event::Closed),
    }
}

/// Owns the terminal and a background task that turns crossterm input and the frame clock into [`Event`]s.
pub struct Tui {
    pub terminal: ratatui::Terminal<Backend<Stdout>>,
    pub task: JoinHandle<()>,
    pub cancellation_token: CancellationToken,
    pub event_rx: UnboundedReceiver<Event>,
    pub event_tx: UnboundedSender<Event>,
    render_period: Duration,
}

impl Tui {
    /// `render_period` must be non-zero.
    pub fn new(render_period: Duration) -> Result<Self> {
        let terminal = ratatui::Terminal::new(Backend::new(stdout()))?;
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let cancellation_token = CancellationToken::new();
        let task = tokio::spawn(async {});
        Ok(Self { terminal, task, cancellation_token, event_rx, event_tx, render_period })
    }

    pub fn start(&mut self) {
        self.cancel();
        self.cancellation_token = CancellationToken::new();
        let cancellation_token = self.cancellation_token.clone();
        let event_tx = self.event_tx.clone();
        let render_period = self.render_period;
        self.task = tokio::spawn(async move {
            let mut reader = EventStream::new();
            let mut render_interval = tokio::time::interval(render_period);
            loop {
                let render_delay = render_interval.tick();
                let crossterm_event = reader.next().fuse();
                let sent = tokio::select! {
                    _ = cancellation_token.cancelled() => break,
                    maybe_event = crossterm_event => match translate(maybe_event) {
                        ControlFlow::Continue(Some(event)) => event_tx.send(event),
                        ControlFlow::Continue(None) => Ok(()),
                        ControlFlow::Break(last) => {
                            let _ = event_tx.send(last);
                            break;
                        },
                    },
                    _ = render_delay => event_tx.send(Event::Render),
                };
                if sent.is_err() {
                    break;
                }
            }
        });
    }

    pub fn stop(&self) -> Result<()> {
        self.cancel();
        let mut counter = 0;
        while !self.task.is_finished() {
            std::thread::sleep(Duration::from_millis(1));
            counter += 1;
            if counter > 50 {
                self.task.abort();
            }
            if counter > 100 {
                log::error!("Failed to abort task in 100 milliseconds for unknown reason");
                break;
            }
        }
        Ok(())
    }

    pub fn enter(&mut self) -> Result<()> {
        crossterm::terminal::enable_raw_mode()?;
        crossterm::execute!(std::io::stdout(), EnterAlternateScreen, EnableMouseCapture, cursor::Hide)?;
        self.start();
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stop()?;
        if crossterm::terminal::is_raw_mode_enabled()? {
            self.flush()?;
        }
        restore()
    }

    pub fn cancel(&self) {
        self.cancellation_token.cancel();
    }

    pub fn suspend(&mut self) -> Result<()> {
        self.exit()?;
        #[cfg(not(windows))]
        signal_hook::low_level::raise(signal_hook::consts::signal::SIGTSTP)?;
        Ok(())
    }

    pub fn resume(&mut self) -> Result<()> {
        self.enter()?;
        Ok(())
    }

    pub async fn next(&mut self) -> Option<Event> {
        self.event_rx.recv().await
    }
}

/// Leaves raw mode and the alternate screen. Safe to call when the terminal was never entered.
pub fn restore() -> Result<()> {
    if crossterm::terminal::is_raw_mode_enabled()? {
        crossterm::execute!(std::io::stdout(), DisableMouseCapture, LeaveAlternateScreen, cursor::Show)?;
        crossterm::terminal::disable_raw_mode()?;
    }
    Ok(())
}

impl Deref for Tui {
    type Target = ratatui::Terminal<Backend<Stdout>>;

    fn deref(&self) -> &Self::Target {
        &self.terminal
    }
}

impl DerefMut for Tui {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.terminal
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        if let Err(e) = self.exit() {
            log::error!("Failed to restore terminal: {e:?}");
        }
    }
}
