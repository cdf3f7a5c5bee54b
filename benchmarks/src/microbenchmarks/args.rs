use super::{print_result, MicroBenchmark};
use clap::{App, Arg, ArgGroup, ArgMatches};
use std::fs::{File, OpenOptions};

pub struct MicroBenchmarkArgs<B: MicroBenchmark> {
    pub bench: B,
    pub count: usize,
    pub file: Option<File>,
    pub header: bool,
}

impl<B: MicroBenchmark> MicroBenchmarkArgs<B> {
    fn opt_arg<'a, 'b>(app: App<'a, 'b>) -> App<'a, 'b> {
        let names: Vec<&'static str> =
            B::choices().iter().map(|(name, _)| *name).collect();
        let g = ArgGroup::with_name("bench")
            .args(names.as_slice())
            .required(true)
            .multiple(false);

        B::choices()
            .iter()
            .fold(app, |app, (name, help)| {
                app.arg(Arg::with_name(name).long(name).help(help))
            })
            .group(g)
    }

    fn from_arg(args: &ArgMatches) -> B {
        B::choices()
            .iter()
            .find(|(name, _)| args.is_present(name))
            .and_then(|(name, _)| B::from_name(name))
            .expect("Unexpected benchmark name.")
    }

    pub fn base_app<'a, 'b>(app_name: &'a str) -> App<'a, 'b> {
        let app = App::new(app_name)
            .version(crate_version!())
            .author(crate_authors!());
        let count_arg = Arg::with_name("count")
            .short("c")
            .help("Number of elements in the container.")
            .takes_value(true)
            .required(false);
        let file_arg = Arg::with_name("output-file")
            .short("o")
            .help(
                "File where to write results. If not provided, results
are written to stdout.",
            )
            .takes_value(true)
            .required(false);
        let header_arg = Arg::with_name("with-header")
            .short("t")
            .help("Weather or not to print benchmark header.")
            .takes_value(false)
            .required(false);

        Self::opt_arg(app).arg(count_arg).arg(file_arg).arg(header_arg)
    }

    pub fn build(app: App) -> Self {
        let matches = app.get_matches();

        MicroBenchmarkArgs {
            bench: Self::from_arg(&matches),
            count: if let Some(c) = matches.value_of("count") {
                c.parse::<usize>().expect("Invalid format for arg 'count'")
            } else {
                1000usize
            },
            file: matches.value_of("output-file").map(|f| {
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(f)
                    .expect("Cannot open output file")
            }),
            header: matches.is_present("with-header"),
        }
    }

    pub fn default(app_name: &str) -> Self {
        let about = format!("Run a microbenchmark for {}.", app_name);
        let app = Self::base_app(app_name).about(about.as_str());
        Self::build(app)
    }

    /// Print the header if requested, then run the selected benchmark.
    pub fn run(mut self) {
        if self.header {
            print_result(String::from(self.bench.header()), &mut self.file);
        }
        self.bench.run(self.count, &mut self.file);
    }
}
