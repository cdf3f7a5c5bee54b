use tidbits_benchmarks::{MicroBenchmarkArgs, SetBenchmark};

fn main() {
    MicroBenchmarkArgs::<SetBenchmark>::default("Set").run();
}
