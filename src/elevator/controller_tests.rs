/*
 * Unit tests for the elevator controller
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 * - initial state and setup overrides
 * - request_stop / call bookkeeping and errors
 * - visit_next_floor scenarios (stops only, calls only, both queues, empty)
 * - opposite-direction calls on both sides drain instead of bouncing
 * - randomized sweeps: termination within the drain bound and no skipped stops
 *
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod controller_tests {
    use crate::config::ElevatorConfig;
    use crate::elevator::ElevatorController;
    use crate::shared::Direction::{self, Down, Rest, Up};
    use crate::shared::{CallStatus, ElevatorError, StopStatus, Visit};

    fn setup_controller(floor: u8, direction: Direction) -> ElevatorController {
        let mut controller = ElevatorController::new(6);
        controller.set_current_floor(floor).unwrap();
        controller.set_current_direction(direction);
        controller
    }

    #[test]
    fn test_controller_init() {
        // Arrange
        let controller = ElevatorController::new(6);

        // Assert
        assert_eq!(controller.n_floors(), 6);
        assert_eq!(controller.current_floor(), 1);
        assert_eq!(controller.current_direction(), Rest);
        assert_eq!(controller.stops(), vec![StopStatus::None; 6]);
        assert_eq!(controller.calls(), vec![CallStatus::None; 6]);
        assert!(controller.is_idle());
    }

    #[test]
    fn test_controller_from_config() {
        let controller = ElevatorController::from_config(&ElevatorConfig { n_floors: 9 });

        assert_eq!(controller.n_floors(), 9);
        assert_eq!(controller.stops().len(), 9);
    }

    #[test]
    fn test_setup_overrides() {
        // Arrange
        let mut controller = ElevatorController::new(6);

        // Act
        controller.set_current_floor(5).unwrap();
        controller.set_current_direction(Up);

        // Assert
        assert_eq!(controller.current_floor(), 5);
        assert_eq!(controller.current_direction(), Up);
        assert_eq!(
            controller.set_current_floor(7),
            Err(ElevatorError::FloorOutOfRange { floor: 7, n_floors: 6 })
        );
        assert_eq!(controller.current_floor(), 5);
    }

    #[test]
    fn test_request_stop_adds_floor() {
        // Arrange
        let mut controller = ElevatorController::new(6);

        // Act
        controller.request_stop(5).unwrap();

        // Assert
        assert_eq!(controller.stop_status(5), Ok(StopStatus::Stop));
        assert!(controller.has_pending_work());
        assert!(!controller.is_idle());
    }

    #[test]
    fn test_request_stop_twice_does_nothing() {
        // Arrange
        let mut controller = ElevatorController::new(6);
        controller.call(3, Up).unwrap();
        controller.request_stop(5).unwrap();
        let before = controller.snapshot();

        // Act
        controller.request_stop(5).unwrap();

        // Assert
        assert_eq!(controller.snapshot(), before);
    }

    #[test]
    fn test_call_errors_leave_state_untouched() {
        let mut controller = ElevatorController::new(6);

        assert_eq!(controller.call(4, Rest), Err(ElevatorError::InvalidCallDirection(Rest)));
        assert_eq!(
            controller.call(0, Up),
            Err(ElevatorError::FloorOutOfRange { floor: 0, n_floors: 6 })
        );
        assert_eq!(
            controller.request_stop(8),
            Err(ElevatorError::FloorOutOfRange { floor: 8, n_floors: 6 })
        );
        assert!(controller.is_idle());
    }

    #[test]
    fn test_call_merges_directions() {
        let mut controller = ElevatorController::new(6);

        controller.call(5, Up).unwrap();
        controller.call(5, Down).unwrap();

        assert_eq!(
            controller.calls(),
            vec![
                CallStatus::None,
                CallStatus::None,
                CallStatus::None,
                CallStatus::None,
                CallStatus::Both,
                CallStatus::None
            ]
        );
    }

    #[test]
    fn test_visit_stops_on_the_way_down() {
        // Arrange
        let mut controller = setup_controller(6, Down);
        controller.request_stop(1).unwrap();
        controller.request_stop(5).unwrap();

        // Act
        let first = controller.visit_next_floor();

        // Assert
        assert_eq!(first, Some(Visit { floor: 5, direction: Down, serviced_call: false }));
        assert_eq!(controller.current_floor(), 5);
        assert_eq!(controller.stop_status(5), Ok(StopStatus::None));
        assert_eq!(controller.current_direction(), Down);

        // Act
        let second = controller.visit_next_floor();

        // Assert
        assert_eq!(second, Some(Visit { floor: 1, direction: Down, serviced_call: false }));
        assert_eq!(controller.stop_status(1), Ok(StopStatus::None));
        assert_eq!(controller.current_direction(), Rest);
        assert!(controller.is_idle());
    }

    #[test]
    fn test_visit_finishes_sweep_before_turning() {
        // Arrange: car at 3 going up, stops at 1 and 5
        let mut controller = setup_controller(3, Up);
        controller.request_stop(1).unwrap();
        controller.request_stop(5).unwrap();

        // Act & Assert
        controller.visit_next_floor();
        assert_eq!(controller.current_floor(), 5);
        controller.visit_next_floor();
        assert_eq!(controller.current_floor(), 1);
        assert_eq!(controller.current_direction(), Rest);
    }

    #[test]
    fn test_visit_same_direction_call_clears_it() {
        // Arrange
        let mut controller = setup_controller(6, Down);
        controller.call(2, Down).unwrap();

        // Act
        let visit = controller.visit_next_floor();

        // Assert
        assert_eq!(visit, Some(Visit { floor: 2, direction: Down, serviced_call: true }));
        assert_eq!(controller.call_status(2), Ok(CallStatus::None));
        assert!(controller.is_idle());
    }

    #[test]
    fn test_visit_both_call_leaves_opposite_direction() {
        // Arrange
        let mut controller = setup_controller(6, Down);
        controller.call(3, Up).unwrap();
        controller.call(3, Down).unwrap();

        // Act
        controller.visit_next_floor();

        // Assert
        assert_eq!(controller.current_floor(), 3);
        assert_eq!(controller.call_status(3), Ok(CallStatus::Up));
    }

    #[test]
    fn test_visit_opposite_call_is_not_cleared() {
        // Arrange
        let mut controller = setup_controller(2, Up);
        controller.call(5, Down).unwrap();

        // Act
        let visit = controller.visit_next_floor();

        // Assert
        assert_eq!(visit, Some(Visit { floor: 5, direction: Up, serviced_call: false }));
        assert_eq!(controller.current_floor(), 5);
        assert_eq!(controller.call_status(5), Ok(CallStatus::Down));
    }

    #[test]
    fn test_visit_serves_pending_call_in_place() {
        // Arrange: the car stopped at 5 for a down call it did not clear
        let mut controller = setup_controller(2, Up);
        controller.call(5, Down).unwrap();
        controller.visit_next_floor();

        // Act
        let visit = controller.visit_next_floor();

        // Assert
        assert_eq!(visit, Some(Visit { floor: 5, direction: Rest, serviced_call: true }));
        assert_eq!(controller.call_status(5), Ok(CallStatus::None));
        assert!(controller.is_idle());
        assert_eq!(controller.visit_next_floor(), None);
    }

    #[test]
    fn test_visit_with_empty_queues_is_noop() {
        // Arrange
        let mut controller = setup_controller(4, Up);

        // Act
        let visit = controller.visit_next_floor();

        // Assert
        assert_eq!(visit, None);
        assert_eq!(controller.current_floor(), 4);
        assert_eq!(controller.current_direction(), Rest);
    }

    #[test]
    fn test_visit_passes_through_stop_and_call() {
        // Arrange: stop and up call both on floor 4
        let mut controller = setup_controller(1, Rest);
        controller.request_stop(4).unwrap();
        controller.call(4, Up).unwrap();
        controller.call(6, Down).unwrap();

        // Act
        let visit = controller.visit_next_floor();

        // Assert
        assert_eq!(visit, Some(Visit { floor: 4, direction: Up, serviced_call: true }));
        assert_eq!(controller.stop_status(4), Ok(StopStatus::None));
        assert_eq!(controller.call_status(4), Ok(CallStatus::None));
        assert_eq!(controller.current_direction(), Up);
    }

    #[test]
    fn test_visit_mixed_queues_full_run() {
        // Arrange
        let mut controller = setup_controller(1, Rest);
        controller.request_stop(6).unwrap();
        controller.call(3, Down).unwrap();
        controller.call(4, Up).unwrap();
        controller.call(2, Up).unwrap();
        controller.call(2, Down).unwrap();

        // Act
        let floors: Vec<u8> = std::iter::from_fn(|| controller.visit_next_floor())
            .map(|v| v.floor)
            .collect();

        // Assert: up sweep 2, 4, 6 then down sweep 3, 2
        assert_eq!(floors, vec![2, 4, 6, 3, 2]);
        assert!(controller.is_idle());
    }

    #[test]
    fn test_visit_serves_own_floor_before_moving() {
        // Arrange: a stop on the car's floor and one further up
        let mut controller = setup_controller(3, Up);
        controller.request_stop(3).unwrap();
        controller.request_stop(5).unwrap();

        // Act
        let visit = controller.visit_next_floor();

        // Assert
        assert_eq!(visit, Some(Visit { floor: 3, direction: Up, serviced_call: false }));
        assert_eq!(controller.stop_status(3), Ok(StopStatus::None));
        assert_eq!(controller.current_direction(), Up);
        assert_eq!(controller.visit_next_floor().map(|v| v.floor), Some(5));
    }

    #[test]
    fn test_visit_opposite_calls_on_both_sides_drain() {
        // Arrange: each call is only reachable through the opposite-direction fallback
        let mut controller = setup_controller(3, Rest);
        controller.call(5, Down).unwrap();
        controller.call(2, Up).unwrap();
        let bound = drain_bound(&controller);

        // Act
        let visits: Vec<Visit> = std::iter::from_fn(|| controller.visit_next_floor())
            .take(bound + 1)
            .collect();

        // Assert
        assert_eq!(
            visits,
            vec![
                Visit { floor: 5, direction: Up, serviced_call: false },
                Visit { floor: 5, direction: Down, serviced_call: true },
                Visit { floor: 2, direction: Down, serviced_call: false },
                Visit { floor: 2, direction: Rest, serviced_call: true },
            ]
        );
        assert_eq!(visits.len(), bound);
        assert!(controller.is_idle());
    }

    #[test]
    fn test_visit_both_call_at_top_drains() {
        // Arrange
        let mut controller = setup_controller(6, Rest);
        controller.request_stop(5).unwrap();
        controller.call(1, Up).unwrap();
        controller.call(6, Up).unwrap();
        controller.call(6, Down).unwrap();
        let bound = drain_bound(&controller);

        // Act
        let visits: Vec<Visit> = std::iter::from_fn(|| controller.visit_next_floor())
            .take(bound + 1)
            .collect();

        // Assert
        assert_eq!(
            visits,
            vec![
                Visit { floor: 6, direction: Down, serviced_call: true },
                Visit { floor: 5, direction: Down, serviced_call: false },
                Visit { floor: 1, direction: Down, serviced_call: false },
                Visit { floor: 1, direction: Up, serviced_call: true },
                Visit { floor: 6, direction: Up, serviced_call: true },
            ]
        );
        assert!(controller.is_idle());
    }

    #[test]
    fn test_zero_floor_controller_is_inert() {
        let mut controller = ElevatorController::new(0);

        assert!(controller.request_stop(1).is_err());
        assert_eq!(controller.visit_next_floor(), None);
        assert!(controller.is_idle());
    }

    /// Small deterministic generator so the sweeps below are reproducible.
    struct Lcg(u64);

    impl Lcg {
        fn next(&mut self, bound: u64) -> u64 {
            self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (self.0 >> 33) % bound
        }
    }

    // Pending stops plus twice the pending call directions, `Both` counting as two.
    fn drain_bound(controller: &ElevatorController) -> usize {
        let stops = controller.stops().iter().filter(|s| s.is_pending()).count();
        let call_directions: usize = controller
            .calls()
            .iter()
            .map(|c| match c {
                CallStatus::Both => 2,
                CallStatus::None => 0,
                _ => 1,
            })
            .sum();
        stops + 2 * call_directions
    }

    fn random_controller(rng: &mut Lcg) -> ElevatorController {
        let mut controller = ElevatorController::new(6);
        controller.set_current_floor(rng.next(6) as u8 + 1).unwrap();
        controller.set_current_direction([Rest, Up, Down][rng.next(3) as usize]);
        for _ in 0..rng.next(9) {
            let floor = rng.next(6) as u8 + 1;
            match rng.next(3) {
                0 => controller.request_stop(floor).unwrap(),
                1 => controller.call(floor, Up).unwrap(),
                _ => controller.call(floor, Down).unwrap(),
            }
        }
        controller
    }

    #[test]
    fn test_random_sweeps_terminate() {
        let mut rng = Lcg(0x5eed);
        for _ in 0..500 {
            // Arrange
            let mut controller = random_controller(&mut rng);
            let start = controller.snapshot();
            let bound = drain_bound(&controller);
            let mut visits = 0;

            // Act
            while controller.visit_next_floor().is_some() {
                visits += 1;
                assert!(visits <= bound, "no termination within {} from {:?}", bound, start);
            }

            // Assert
            assert!(controller.is_idle(), "left work behind from {:?}", start);
        }
    }

    #[test]
    fn test_random_sweeps_never_skip_work() {
        let mut rng = Lcg(42);
        for _ in 0..500 {
            let mut controller = random_controller(&mut rng);
            for _ in 0..=drain_bound(&controller) {
                // Arrange
                let before = controller.clone();
                let from = before.current_floor();

                // Act
                let visit = match controller.visit_next_floor() {
                    Some(visit) => visit,
                    None => break,
                };

                // Assert
                let passed: Vec<u8> = match visit.direction {
                    Up => (from + 1..visit.floor).collect(),
                    Down => (visit.floor + 1..from).collect(),
                    Rest => Vec::new(),
                };
                for floor in passed {
                    assert_eq!(before.stop_status(floor), Ok(StopStatus::None), "skipped stop {}", floor);
                    assert!(
                        !before.call_status(floor).unwrap().matches(visit.direction),
                        "skipped call at {} going {}",
                        floor,
                        visit.direction
                    );
                }
                assert_eq!(controller.stop_status(visit.floor), Ok(StopStatus::None));
            }
            assert!(controller.is_idle());
        }
    }
}
