use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Verilog statement that feeds one beat into the FIFO
pub const ASSIGN_STR: &str = "f_din <= ";

/// Verilog statement that waits one clock period
pub const CLK_STR: &str = "#CLK_PERIOD;";

/// Text layout of the output file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One beat per line, for `$readmemh`-style initializers
    #[default]
    Lines,
    /// One FIFO assignment plus a clock wait per beat
    Stimulus,
}

impl OutputFormat {
    pub fn render(&self, records: &[String]) -> Result<String, std::fmt::Error> {
        match self {
            OutputFormat::Lines => render_lines(records),
            OutputFormat::Stimulus => render_stimulus(records),
        }
    }
}

pub fn render_lines(records: &[String]) -> Result<String, std::fmt::Error> {
    let mut output = String::new();
    for record in records {
        writeln!(output, "{}", record)?;
    }
    Ok(output)
}

pub fn render_stimulus(records: &[String]) -> Result<String, std::fmt::Error> {
    let mut output = String::new();
    for record in records {
        writeln!(output, "{}'h{};", ASSIGN_STR, record)?;
        writeln!(output, "{}", CLK_STR)?;
    }
    Ok(output)
}
