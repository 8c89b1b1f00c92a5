use u_disk_schedule::algorithms::{Algorithm, SweepContext};
use u_disk_schedule::config::SimulationConfig;
use u_disk_schedule::history::{self, HistoryStore, MemoryStore, NewRun};
use u_disk_schedule::metrics::SeekMetrics;
use u_disk_schedule::models::{Cylinder, Direction, DiskBounds};
use u_disk_schedule::parse::parse_requests;
use u_disk_schedule::simulator::Simulator;
use u_disk_schedule::workload::WorkloadGenerator;

const CLASSIC: [Cylinder; 8] = [98, 183, 37, 122, 14, 124, 65, 67];

fn workloads() -> Vec<(Vec<Cylinder>, Cylinder)> {
    let mut generator = WorkloadGenerator::new(DiskBounds::default(), 2024);
    let mut cases = vec![(CLASSIC.to_vec(), 50), (vec![50], 50), (vec![0, 199], 199)];
    for count in [1, 2, 5, 17, 40] {
        let head = generator.head();
        cases.push((generator.uniform(count), head));
        cases.push((generator.clustered(count, head, 10), head));
    }
    cases
}

fn contexts() -> [SweepContext; 2] {
    let right = SweepContext::new().with_bounds(DiskBounds::default());
    [right, right.with_direction(Direction::Left)]
}

fn sorted(mut v: Vec<Cylinder>) -> Vec<Cylinder> {
    v.sort_unstable();
    v
}

/// Sum of leg distances over the drawn path, leaving out return jumps.
fn counted_legs(positions: &[Cylinder], wrapped: &[bool]) -> Cylinder {
    positions
        .windows(2)
        .zip(&wrapped[1..])
        .filter(|&(_, &jump)| !jump)
        .map(|(leg, _)| (leg[1] - leg[0]).abs())
        .sum()
}

#[test]
fn test_total_matches_path_and_metrics() {
    for (requests, head) in workloads() {
        for ctx in contexts() {
            for algorithm in Algorithm::ALL {
                let result = algorithm.run(&requests, head, &ctx);
                let wrapped: Vec<bool> = result.path.visits().iter().map(|v| v.wrapped).collect();
                assert_eq!(
                    result.total_movement,
                    counted_legs(&result.positions(), &wrapped),
                    "{algorithm} from {head}"
                );
                let metrics = SeekMetrics::calculate(&result.path, requests.len(), 1.0).unwrap();
                assert_eq!(metrics.total_head_movement, result.total_movement);
            }
        }
    }
}

#[test]
fn test_every_request_serviced_once() {
    for (requests, head) in workloads() {
        for ctx in contexts() {
            for algorithm in Algorithm::ALL {
                let result = algorithm.run(&requests, head, &ctx);
                assert_eq!(
                    sorted(result.order.clone()),
                    sorted(requests.clone()),
                    "{algorithm} from {head}"
                );
                assert_eq!(result.positions()[0], head);
            }
        }
    }
}

#[test]
fn test_fcfs_preserves_input_order() {
    for (requests, head) in workloads() {
        let result = Algorithm::Fcfs.run(&requests, head, &SweepContext::new());
        assert_eq!(result.order, requests);
    }
}

#[test]
fn test_sstf_always_picks_nearest() {
    for (requests, head) in workloads() {
        let result = Algorithm::Sstf.run(&requests, head, &SweepContext::new());
        let mut pending = requests.clone();
        let mut position = head;
        for &next in &result.order {
            let nearest = pending.iter().map(|r| (r - position).abs()).min().unwrap();
            assert_eq!((next - position).abs(), nearest);
            let index = pending.iter().position(|&r| r == next).unwrap();
            pending.remove(index);
            position = next;
        }
        assert!(pending.is_empty());
    }
}

#[test]
fn test_look_never_exceeds_scan() {
    for (requests, head) in workloads() {
        for ctx in contexts() {
            let scan = Algorithm::Scan.run(&requests, head, &ctx);
            let look = Algorithm::Look.run(&requests, head, &ctx);
            assert!(look.total_movement <= scan.total_movement);
        }
    }
}

#[test]
fn test_scan_right_classic_path() {
    let result = Algorithm::Scan.run(&CLASSIC, 50, &SweepContext::new());
    let path = result.positions();
    let turn = path.iter().position(|&c| c == 199).unwrap();
    assert!(path[..=turn].windows(2).all(|w| w[0] <= w[1]));
    assert!(path[turn..].windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(result.total_movement, (199 - 50) + (199 - 14));
}

#[test]
fn test_circular_policies_skip_wrap_distance() {
    for (requests, head) in workloads() {
        for ctx in contexts() {
            for algorithm in [Algorithm::CScan, Algorithm::CLook] {
                let result = algorithm.run(&requests, head, &ctx);
                let moves = result.path.moves();
                let raw: Cylinder = moves.iter().map(|m| (m.to - m.from).abs()).sum();
                let jumps: Cylinder = moves
                    .iter()
                    .filter(|m| m.wrapped)
                    .map(|m| (m.to - m.from).abs())
                    .sum();
                assert!(moves.iter().filter(|m| m.wrapped).count() <= 1);
                assert_eq!(result.total_movement, raw - jumps);
            }
        }
    }
}

#[test]
fn test_empty_request_set() {
    let sim = Simulator::new(SimulationConfig::new());
    for algorithm in Algorithm::ALL {
        let run = sim.run(algorithm, &[]).unwrap();
        assert_eq!(run.result.positions(), vec![50]);
        assert!(run.result.order.is_empty());
        assert_eq!(run.result.total_movement, 0);
        assert_eq!(run.metrics.average_seek_distance, 0.0);
        assert_eq!(run.metrics.throughput, 0.0);
    }
}

#[test]
fn test_head_on_only_request_has_zero_throughput() {
    let sim = Simulator::new(SimulationConfig::new().with_head(70));
    for algorithm in [Algorithm::Fcfs, Algorithm::Sstf, Algorithm::Look, Algorithm::CLook] {
        let run = sim.run(algorithm, &[70]).unwrap();
        assert_eq!(run.metrics.total_head_movement, 0);
        assert_eq!(run.metrics.throughput, 0.0);
    }
}

#[test]
fn test_history_roundtrip_from_simulation() {
    let text = "98, 183, 37, 122, 14, 124, 65, 67";
    let requests = parse_requests(text).unwrap();
    let config = SimulationConfig::new()
        .with_direction(Direction::Left)
        .with_seek_time_ms(0.3);
    let sim = Simulator::new(config);
    let mut store = MemoryStore::new();

    for algorithm in Algorithm::ALL {
        let run = sim.run(algorithm, &requests).unwrap();
        store
            .insert(NewRun::from_simulation(&run, &config, text, None))
            .unwrap();
    }

    let records = store.fetch_all().unwrap();
    assert_eq!(records.len(), 6);
    assert_eq!(records[0].id, 6);
    assert_eq!(records[0].name, "C-LOOK_run");

    let back = history::from_csv(&history::to_csv(&records)).unwrap();
    assert_eq!(back, records);
    for (a, b) in back.iter().zip(&records) {
        assert_eq!(a.avg_seek.to_bits(), b.avg_seek.to_bits());
        assert_eq!(a.throughput.to_bits(), b.throughput.to_bits());
        assert_eq!(a.seek_ms.to_bits(), b.seek_ms.to_bits());
    }
}
