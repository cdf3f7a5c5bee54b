#[macro_use]
extern crate clap;

mod microbenchmarks;
pub use microbenchmarks::{
    print_result, shuffled, MicroBenchmark, MicroBenchmarkArgs,
    SetBenchmark, SliceBenchmark,
};
