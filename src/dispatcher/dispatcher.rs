use crate::config::DispatcherConfig;
use crate::elevator::ElevatorController;
use crate::shared::{Direction, ElevatorSnapshot, Visit};
use crossbeam_channel as cbc;
use log::{debug, info, warn};

/**
 * Commands accepted by the dispatcher thread.
 *
 * - `RequestStop(floor)`:  Stop request from the car panel.
 * - `Call(floor, dir)`:    Landing call for `dir`.
 * - `Step`:                Advance the car by one stop.
 * - `Sweep`:               Advance until nothing is pending or the step limit is hit.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    RequestStop(u8),
    Call(u8, Direction),
    Step,
    Sweep,
}

/**
 * Owns a single `ElevatorController` and serializes every access to it.
 *
 * The controller itself has no locking. The dispatcher gives it exactly one
 * owner thread and feeds it through channels, so any number of producers can
 * submit commands concurrently.
 *
 * # Fields
 * - `controller`:      The car being dispatched.
 * - `max_sweep_steps`: Upper bound on advances performed for one `Sweep`.
 * - `command_rx`:      Receives commands from producers.
 * - `visit_tx`:        Sends every stop the car makes.
 * - `state_tx`:        Sends a snapshot after each handled command.
 * - `terminate_rx`:    Stops the loop.
 */
pub struct Dispatcher {
    controller: ElevatorController,
    max_sweep_steps: usize,
    command_rx: cbc::Receiver<Command>,
    visit_tx: cbc::Sender<Visit>,
    state_tx: cbc::Sender<ElevatorSnapshot>,
    terminate_rx: cbc::Receiver<()>,
}

impl Dispatcher {
    pub fn new(
        controller: ElevatorController,
        config: &DispatcherConfig,
        command_rx: cbc::Receiver<Command>,
        visit_tx: cbc::Sender<Visit>,
        state_tx: cbc::Sender<ElevatorSnapshot>,
        terminate_rx: cbc::Receiver<()>,
    ) -> Dispatcher {
        Dispatcher {
            controller,
            max_sweep_steps: config.max_sweep_steps,
            command_rx,
            visit_tx,
            state_tx,
            terminate_rx,
        }
    }

    /// Runs until terminated or every command sender is dropped. Returns the controller.
    pub fn run(mut self) -> ElevatorController {
        // Local handles so the loop body can borrow `self` mutably
        let terminate_rx = self.terminate_rx.clone();
        let command_rx = self.command_rx.clone();

        loop {
            cbc::select! {
                recv(terminate_rx) -> _ => {
                    debug!("dispatcher terminated");
                    break;
                }
                recv(command_rx) -> command => {
                    match command {
                        Ok(command) => self.handle_command(command),
                        Err(_) => {
                            debug!("command channel closed");
                            break;
                        }
                    }
                }
            }
        }
        self.controller
    }

    fn handle_command(&mut self, command: Command) {
        match command {
            Command::RequestStop(floor) => {
                if let Err(e) = self.controller.request_stop(floor) {
                    warn!("rejected stop request: {}", e);
                }
            }
            Command::Call(floor, direction) => {
                if let Err(e) = self.controller.call(floor, direction) {
                    warn!("rejected call: {}", e);
                }
            }
            Command::Step => {
                if let Some(visit) = self.controller.visit_next_floor() {
                    self.publish_visit(visit);
                }
            }
            Command::Sweep => {
                for visit in drive_to_rest(&mut self.controller, self.max_sweep_steps) {
                    self.publish_visit(visit);
                }
            }
        }
        if let Err(e) = self.state_tx.send(self.controller.snapshot()) {
            warn!("dropped state snapshot: {}", e);
        }
    }

    fn publish_visit(&self, visit: Visit) {
        if let Err(e) = self.visit_tx.send(visit) {
            warn!("dropped visit to floor {}: {}", visit.floor, e);
        }
    }
}

/**
 * Advances `controller` until `visit_next_floor` is a no-op or `max_steps`
 * advances were made, returning the visits in order.
 */
pub fn drive_to_rest(controller: &mut ElevatorController, max_steps: usize) -> Vec<Visit> {
    let mut visits = Vec::new();
    while visits.len() < max_steps {
        match controller.visit_next_floor() {
            Some(visit) => visits.push(visit),
            None => break,
        }
    }
    if controller.has_pending_work() && visits.len() == max_steps {
        warn!("sweep stopped after {} steps with work pending", max_steps);
    } else {
        info!("sweep finished at floor {} after {} stops", controller.current_floor(), visits.len());
    }
    visits
}
