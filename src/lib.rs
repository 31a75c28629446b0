use csv::Reader;
use plotly::common::{Mode, Title};
use plotly::layout::{Axis, AxisType};
use plotly::{ImageFormat, Layout, Plot, Scatter};
use std::fs::File;
use std::path::Path;
use std::{error::Error, fmt};
pub mod plot_cli;

// constants
pub const VERSION: Option<&'static str> = option_env!("CARGO_PKG_VERSION");
pub const MAGNITUDE_COLUMN: &str = "n_magnitude";
pub const TIME_COLUMN: &str = "execution_time_ms";

/// The main struct for the benchmark results.
/// One entry per csv row, kept in file order:
/// the order of the rows is the order of the plotted points.
#[derive(Debug, Clone)]
pub struct BenchTimes {
    pub magnitude: Vec<f64>,
    pub time_ms: Vec<f64>,
    pub label: Vec<String>,
}

impl BenchTimes {
    /// Initiate a new BenchTimes instance
    /// using the given capacity for the column vectors
    pub fn new(capacity: usize) -> BenchTimes {
        let magnitude: Vec<f64> = Vec::with_capacity(capacity);
        let time_ms: Vec<f64> = Vec::with_capacity(capacity);
        let label: Vec<String> = Vec::with_capacity(capacity);
        let benchtimes: BenchTimes = BenchTimes {
            magnitude,
            time_ms,
            label,
        };
        benchtimes
    }

    /// Initiate a BenchTimes from csv.
    /// The header must name both required columns, exact and case sensitive;
    /// additional columns are ignored.
    /// Labels are not derived here, see derive_labels.
    pub fn from_csv<P>(fin: P) -> Result<BenchTimes, Box<dyn Error>>
    where
        P: AsRef<Path>,
    {
        let file = File::open(fin)?;
        let mut reader = Reader::from_reader(file);
        let headers = reader.headers()?.clone();
        let imagnitude = headers
            .iter()
            .position(|h| h == MAGNITUDE_COLUMN)
            .ok_or(MissingColumnErr {
                name: MAGNITUDE_COLUMN,
            })?;
        let itime = headers
            .iter()
            .position(|h| h == TIME_COLUMN)
            .ok_or(MissingColumnErr { name: TIME_COLUMN })?;
        let mut benchtimes = BenchTimes::new(100usize);
        for record in reader.records() {
            let record = record?;
            benchtimes.magnitude.push(record[imagnitude].parse::<f64>()?);
            benchtimes.time_ms.push(record[itime].parse::<f64>()?);
        }
        Ok(benchtimes)
    }

    /// Derive the display label for each row,
    /// formatting the magnitude as 10^m with the default f64 formatting.
    /// Appended once, in row order, never mutated afterward.
    pub fn derive_labels(&mut self) {
        self.label = self
            .magnitude
            .iter()
            .map(|m| format!("10^{}", m))
            .collect();
    }

    /// Build the figure for the execution times.
    /// One line series, log scale on the time axis.
    /// The points are placed at their row index and ticked with the row label,
    /// so repeated magnitudes keep their own position instead of merging.
    pub fn figure(&self) -> Plot {
        let xpos: Vec<f64> = (0..self.label.len()).map(|i| i as f64).collect();
        let line = Scatter::new(xpos.clone(), self.time_ms.clone()).mode(Mode::Lines);
        let mut plot = Plot::new();
        plot.add_trace(line);
        plot.set_layout(
            Layout::new()
                .title(Title::new("Execution Times"))
                .x_axis(
                    Axis::new()
                        .title(Title::new("N Elements"))
                        .tick_values(xpos)
                        .tick_text(self.label.clone()),
                )
                .y_axis(
                    Axis::new()
                        .title(Title::new("Time (ms)"))
                        .type_(AxisType::Log),
                ),
        );
        plot
    }

    /// Plot the execution times to a pdf file at the given path,
    /// overwriting it when already present.
    pub fn plot<P>(&self, fout: P)
    where
        P: AsRef<Path>,
    {
        self.figure().write_image(fout, ImageFormat::PDF, 1600, 800, 1.0);
    }
}

impl fmt::Display for BenchTimes {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{},{}", MAGNITUDE_COLUMN, TIME_COLUMN)?;
        for (m, t) in self.magnitude.iter().zip(self.time_ms.iter()) {
            writeln!(f, "{},{}", m, t)?;
        }
        Ok(())
    }
}

/// An Error type for a csv header that lacks one of the required columns.
#[derive(Debug)]
pub struct MissingColumnErr {
    pub name: &'static str,
}
impl Error for MissingColumnErr {}
impl fmt::Display for MissingColumnErr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "csv header does not contain the required column {}",
            self.name
        )
    }
}
