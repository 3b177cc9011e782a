use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "numera",
    about = "numera — dense matrix arithmetic and Riemann integration",
    version,
    propagate_version = true,
    disable_help_subcommand = true
)]
pub struct NumeraCli {
    /// Global: path to config (TOML); default: ~/.numera/numera.toml
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the full matrix + integral demonstration
    ///
    /// Examples:
    ///   numera demo
    ///   numera --config my.toml demo
    Demo,

    /// Determinant of a matrix written as rows of comma-separated values
    ///
    /// Example: numera det "2,1,1;1,3,2;1,0,0"
    Det {
        #[arg(value_name = "MATRIX")]
        matrix: String,
    },

    /// Inverse of a matrix written as rows of comma-separated values
    ///
    /// Example: numera inv "2,1,1;1,3,2;1,0,0"
    Inv {
        #[arg(value_name = "MATRIX")]
        matrix: String,
    },

    /// Left Riemann sum of a named integrand over [a, b]
    ///
    /// Example: numera integrate x2 0 1 -n 1000
    Integrate {
        /// Integrand: x2, sin, or poly (see --coeffs)
        #[arg(value_name = "FUNC")]
        func: String,

        #[arg(value_name = "A", allow_hyphen_values = true)]
        a: f64,

        #[arg(value_name = "B", allow_hyphen_values = true)]
        b: f64,

        /// Number of subintervals (default from config)
        #[arg(short = 'n', long = "samples", value_name = "N")]
        samples: Option<usize>,

        /// Coefficients for poly: "a,b,c" meaning a*x^2 + b*x + c
        #[arg(long = "coeffs", value_name = "A,B,C")]
        coeffs: Option<String>,
    },
}
