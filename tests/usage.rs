use std::fs;
use std::process::Command;

/// Without the csv path the binary only prints guidance:
/// it exits cleanly and creates no plot file.
#[test]
fn no_argument_prints_usage_and_exits_zero() {
    let workdir = std::env::temp_dir().join("bench_plot_usage");
    fs::create_dir_all(&workdir).unwrap();
    let plot = workdir.join("plot.pdf");
    if plot.exists() {
        fs::remove_file(&plot).unwrap();
    }
    let output = Command::new(env!("CARGO_BIN_EXE_bench_plot"))
        .current_dir(&workdir)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "Please include path to .csv file as command line argument\n"
    );
    assert!(!plot.exists());
}

#[test]
fn missing_csv_file_exits_with_failure() {
    let output = Command::new(env!("CARGO_BIN_EXE_bench_plot"))
        .arg("does_not_exist.csv")
        .output()
        .unwrap();
    assert!(!output.status.success());
}
