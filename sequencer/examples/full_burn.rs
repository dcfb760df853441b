use sequencer::*;

fn main() {
    let mut sim = Simulation::new();
    sim.begin_checks().unwrap();
    for report in sim.launch().unwrap() {
        println!("{:?} {}", report.outcome, report.snapshot);
    }
}
