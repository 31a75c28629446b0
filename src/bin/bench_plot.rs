use bench_plot::plot_cli::parse_cli;
use bench_plot::BenchTimes;

fn main() {
    let csvin = match parse_cli() {
        Some(p) => p,
        None => {
            println!("Please include path to .csv file as command line argument");
            return;
        }
    };
    let mut bt = BenchTimes::from_csv(csvin).unwrap();
    bt.derive_labels();
    bt.plot("plot.pdf");
}
