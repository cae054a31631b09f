//! The simulation worker: sequential command processing plus the
//! dedicated-thread front-end.

use crate::body::BodySpec;
use crate::config::PhysicsConfig;
use crate::error::{PhysicsError, Result};
use crate::world::PhysicsWorld;
use bridge_proto::{BodyDescriptor, BodyState, Command, Event};
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::thread;

/// Processes commands against one exclusively-owned physics world.
///
/// The worker itself is synchronous; [`WorkerHandle`] runs it on a
/// dedicated thread. Until `init` arrives every other command fails with
/// [`PhysicsError::NotInitialized`]; after `init` any interleaving of
/// `addBody` and `step` is accepted.
pub struct SimulationWorker {
    config: PhysicsConfig,
    world: Option<PhysicsWorld>,
}

impl SimulationWorker {
    /// Create a worker with no world yet
    pub fn new(config: PhysicsConfig) -> Self {
        Self {
            config,
            world: None,
        }
    }

    /// Process one command, returning the event it produces (if any).
    ///
    /// `init` and `addBody` produce no event; `step` always produces a
    /// [`Event::SyncState`]. Failures leave the world and registry exactly
    /// as they were.
    pub fn handle(&mut self, command: Command) -> Result<Option<Event>> {
        match command {
            Command::Init => {
                // Replaces any prior world, discarding all tracked bodies.
                self.world = Some(PhysicsWorld::new(self.config.clone()));
                log::info!(
                    "simulation world initialized (gravity {:?})",
                    self.config.gravity
                );
                Ok(None)
            }
            Command::AddBody(desc) => {
                let world = self.world.as_mut().ok_or(PhysicsError::NotInitialized)?;
                let spec = BodySpec::resolve(&desc, world.config())?;
                world.add_body(spec)?;
                Ok(None)
            }
            Command::Step { dt } => {
                let world = self.world.as_mut().ok_or(PhysicsError::NotInitialized)?;
                Ok(Some(Event::SyncState {
                    meshes: world.step(dt),
                }))
            }
        }
    }

    /// Number of tracked bodies (0 before `init`)
    pub fn body_count(&self) -> usize {
        self.world.as_ref().map_or(0, PhysicsWorld::tracked_count)
    }
}

impl Default for SimulationWorker {
    fn default() -> Self {
        Self::new(PhysicsConfig::default())
    }
}

/// Handle to a worker running on its own named OS thread.
///
/// Commands are delivered over a channel and processed strictly one at a
/// time in arrival order, so a body added before a `step` is guaranteed to
/// appear in that step's result. Each request blocks until the worker's
/// single reply arrives; a long `step` therefore stalls only the caller
/// that issued it. Dropping the handle closes the command channel and
/// joins the thread.
pub struct WorkerHandle {
    commands: Option<Sender<Command>>,
    replies: Receiver<Result<Option<Event>>>,
    thread: Option<thread::JoinHandle<()>>,
}

impl WorkerHandle {
    /// Spawn a worker thread with the given configuration
    pub fn spawn(config: PhysicsConfig) -> Result<Self> {
        let (command_tx, command_rx) = unbounded::<Command>();
        let (reply_tx, reply_rx) = unbounded();

        let thread = thread::Builder::new()
            .name("physics-worker".to_string())
            .spawn(move || {
                let mut worker = SimulationWorker::new(config);
                while let Ok(command) = command_rx.recv() {
                    // A closed reply channel means the handle is gone.
                    if reply_tx.send(worker.handle(command)).is_err() {
                        break;
                    }
                }
                log::debug!("physics worker shutting down");
            })?;

        Ok(Self {
            commands: Some(command_tx),
            replies: reply_rx,
            thread: Some(thread),
        })
    }

    /// Create a fresh world, discarding any prior one
    pub fn init(&self) -> Result<()> {
        self.request(Command::Init).map(|_| ())
    }

    /// Register a body
    pub fn add_body(&self, descriptor: BodyDescriptor) -> Result<()> {
        self.request(Command::AddBody(descriptor)).map(|_| ())
    }

    /// Advance the simulation and collect the batched transforms
    pub fn step(&self, dt: f32) -> Result<Vec<BodyState>> {
        match self.request(Command::Step { dt })? {
            Some(Event::SyncState { meshes }) => Ok(meshes),
            None => Ok(Vec::new()),
        }
    }

    fn request(&self, command: Command) -> Result<Option<Event>> {
        let commands = self.commands.as_ref().ok_or(PhysicsError::WorkerClosed)?;
        commands
            .send(command)
            .map_err(|_| PhysicsError::WorkerClosed)?;
        self.replies.recv().map_err(|_| PhysicsError::WorkerClosed)?
    }
}

impl Drop for WorkerHandle {
    fn drop(&mut self) {
        // Closing the command channel ends the worker loop.
        drop(self.commands.take());
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}
