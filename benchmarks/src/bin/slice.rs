use tidbits_benchmarks::{MicroBenchmarkArgs, SliceBenchmark};

fn main() {
    MicroBenchmarkArgs::<SliceBenchmark>::default("Slice").run();
}
