use rand::SeedableRng;
use std::fs::File;
use std::io::Write;
use std::time::Instant;
use std::vec::IntoIter;
use tidbits::{Set, Slice};

mod args;
pub use args::MicroBenchmarkArgs;

pub fn shuffled(n: usize, seed: u8) -> IntoIter<usize> {
    let mut keys: Vec<usize> = (0..n).collect();
    let mut rng = rand::rngs::StdRng::from_seed([seed; 32]);
    rand::seq::SliceRandom::shuffle(keys.as_mut_slice(), &mut rng);
    keys.into_iter()
}

pub fn print_result(line: String, file: &mut Option<File>) {
    match file {
        None => println!("{}", line),
        Some(f) => {
            if let Err(e) = writeln!(f, "{}", line) {
                eprintln!("Failed to write benchmark result: {}", e);
            }
        }
    }
}

/// A family of microbenchmarks selectable from the command line.
pub trait MicroBenchmark: Copy + Sized + 'static {
    /// Command line names of the benchmarks with their help message.
    fn choices() -> &'static [(&'static str, &'static str)];
    /// Benchmark matching a command line name.
    fn from_name(name: &str) -> Option<Self>;
    fn header(self) -> &'static str;
    /// Run the benchmark on a container of `n` elements.
    fn run(self, n: usize, file: &mut Option<File>);
}

//-------------------------------------------------------------------------
//  Slice benchmarks
//-------------------------------------------------------------------------

#[derive(Clone, Copy)]
pub enum SliceBenchmark {
    Append,
    InsertAt,
    RemoveAt,
    Sort,
    Select,
}

impl SliceBenchmark {
    fn bench_append(n: usize, file: &mut Option<File>) {
        let mut slice = Slice::default();
        for value in shuffled(n, 0) {
            let t = Instant::now();
            slice.append(value);
            let t = t.elapsed().as_nanos();
            print_result(format!("slice {} {}", slice.len(), t), file);
        }
    }

    fn bench_insert_at(n: usize, file: &mut Option<File>) {
        let mut slice = Slice::default();
        for (i, value) in shuffled(n, 0).enumerate() {
            let idx = value % (i + 1);
            let t = Instant::now();
            slice.insert_at(idx, value);
            let t = t.elapsed().as_nanos();
            print_result(format!("slice {} {}", slice.len(), t), file);
        }
    }

    fn bench_remove_at(n: usize, file: &mut Option<File>) {
        let mut slice: Slice<usize> = shuffled(n, 0).collect();
        for value in shuffled(n, 1).rev() {
            let idx = value % slice.len();
            let t = Instant::now();
            slice.remove_at(idx);
            let t = t.elapsed().as_nanos();
            print_result(format!("slice {} {}", slice.len(), t), file);
        }
    }

    fn bench_sort(n: usize, file: &mut Option<File>) {
        for n in 1..n + 1 {
            let mut slice: Slice<usize> = shuffled(n, 0).collect();
            let t = Instant::now();
            slice.sort(|a, b| a.cmp(b));
            let t = t.elapsed().as_nanos();
            print_result(format!("slice {} {}", n, t), file);
        }
    }

    fn bench_select(n: usize, file: &mut Option<File>) {
        for n in 1..n + 1 {
            let slice: Slice<usize> = shuffled(n, 0).collect();
            let t = Instant::now();
            let even = slice.select(|v| v % 2 == 0);
            let t = t.elapsed().as_nanos();
            print_result(format!("slice {} {}", even.len(), t), file);
        }
    }
}

impl MicroBenchmark for SliceBenchmark {
    fn choices() -> &'static [(&'static str, &'static str)] {
        &[
            ("append", "Measure the time to append shuffled values one by one to an empty slice."),
            ("insert_at", "Measure the time to insert shuffled values one by one at random positions of a growing slice."),
            ("remove_at", "Fill a slice with shuffled values and measure the time to remove elements one by one at random positions."),
            ("sort", "Measure the time to sort shuffled slices of increasing lengths."),
            ("select", "Measure the time to filter the even values out of shuffled slices of increasing lengths."),
        ]
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "append" => Some(SliceBenchmark::Append),
            "insert_at" => Some(SliceBenchmark::InsertAt),
            "remove_at" => Some(SliceBenchmark::RemoveAt),
            "sort" => Some(SliceBenchmark::Sort),
            "select" => Some(SliceBenchmark::Select),
            _ => None,
        }
    }

    fn header(self) -> &'static str {
        match self {
            SliceBenchmark::Append => "# container slice.len nanoseconds",
            SliceBenchmark::InsertAt => "# container slice.len nanoseconds",
            SliceBenchmark::RemoveAt => "# container slice.len nanoseconds",
            SliceBenchmark::Sort => "# container slice.len nanoseconds",
            SliceBenchmark::Select => {
                "# container selected.len nanoseconds"
            }
        }
    }

    fn run(self, n: usize, file: &mut Option<File>) {
        match self {
            SliceBenchmark::Append => Self::bench_append(n, file),
            SliceBenchmark::InsertAt => Self::bench_insert_at(n, file),
            SliceBenchmark::RemoveAt => Self::bench_remove_at(n, file),
            SliceBenchmark::Sort => Self::bench_sort(n, file),
            SliceBenchmark::Select => Self::bench_select(n, file),
        }
    }
}

//-------------------------------------------------------------------------
//  Set benchmarks
//-------------------------------------------------------------------------

#[derive(Clone, Copy)]
pub enum SetBenchmark {
    Insert,
    Remove,
    Union,
    Intersection,
    SubsetOf,
}

impl SetBenchmark {
    /// Two half overlapping sets of `n` elements.
    fn overlapping(n: usize) -> (Set<usize>, Set<usize>) {
        let a: Set<usize> = shuffled(n, 0).collect();
        let b: Set<usize> = shuffled(n, 1).map(|v| v + n / 2).collect();
        (a, b)
    }

    fn bench_insert(n: usize, file: &mut Option<File>) {
        let mut set = Set::new();
        for value in shuffled(n, 0) {
            let t = Instant::now();
            set.insert(value);
            let t = t.elapsed().as_nanos();
            print_result(format!("set {} {}", set.len(), t), file);
        }
    }

    fn bench_remove(n: usize, file: &mut Option<File>) {
        let mut set: Set<usize> = shuffled(n, 0).collect();
        for value in shuffled(n, 1) {
            let t = Instant::now();
            set.remove(&value);
            let t = t.elapsed().as_nanos();
            print_result(format!("set {} {}", set.len(), t), file);
        }
    }

    fn bench_union(n: usize, file: &mut Option<File>) {
        for n in 1..n + 1 {
            let (a, b) = Self::overlapping(n);
            let t = Instant::now();
            let u = a.union(&b);
            let t = t.elapsed().as_nanos();
            print_result(format!("set {} {}", u.len(), t), file);
        }
    }

    fn bench_intersection(n: usize, file: &mut Option<File>) {
        for n in 1..n + 1 {
            let (a, b) = Self::overlapping(n);
            let t = Instant::now();
            let i = a.intersection(&b);
            let t = t.elapsed().as_nanos();
            print_result(format!("set {} {}", i.len(), t), file);
        }
    }

    fn bench_subset_of(n: usize, file: &mut Option<File>) {
        for n in 1..n + 1 {
            let a: Set<usize> = shuffled(n, 0).collect();
            let b: Set<usize> = shuffled(n + 1, 1).collect();
            let t = Instant::now();
            let subset = a.subset_of(&b);
            let t = t.elapsed().as_nanos();
            assert!(subset);
            print_result(format!("set {} {}", n, t), file);
        }
    }
}

impl MicroBenchmark for SetBenchmark {
    fn choices() -> &'static [(&'static str, &'static str)] {
        &[
            ("insert", "Measure the time to insert shuffled values one by one in an empty set."),
            ("remove", "Fill a set with shuffled values and measure the time to remove each value in a random order."),
            ("union", "Measure the time to compute the union of half overlapping sets of increasing sizes."),
            ("intersection", "Measure the time to compute the intersection of half overlapping sets of increasing sizes."),
            ("subset_of", "Measure the time to check that a set is a subset of a set with one more element, for increasing sizes."),
        ]
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "insert" => Some(SetBenchmark::Insert),
            "remove" => Some(SetBenchmark::Remove),
            "union" => Some(SetBenchmark::Union),
            "intersection" => Some(SetBenchmark::Intersection),
            "subset_of" => Some(SetBenchmark::SubsetOf),
            _ => None,
        }
    }

    fn header(self) -> &'static str {
        match self {
            SetBenchmark::Insert => "# container set.len nanoseconds",
            SetBenchmark::Remove => "# container set.len nanoseconds",
            SetBenchmark::Union => "# container union.len nanoseconds",
            SetBenchmark::Intersection => {
                "# container intersection.len nanoseconds"
            }
            SetBenchmark::SubsetOf => "# container set.len nanoseconds",
        }
    }

    fn run(self, n: usize, file: &mut Option<File>) {
        match self {
            SetBenchmark::Insert => Self::bench_insert(n, file),
            SetBenchmark::Remove => Self::bench_remove(n, file),
            SetBenchmark::Union => Self::bench_union(n, file),
            SetBenchmark::Intersection => Self::bench_intersection(n, file),
            SetBenchmark::SubsetOf => Self::bench_subset_of(n, file),
        }
    }
}
