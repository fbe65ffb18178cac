//! Command-line interface

use structopt::StructOpt;

#[derive(StructOpt, Debug)]
#[structopt(name = "generic_rectangle", about = "Area and perimeter of generic rectangles")]
pub struct Opts {
    /// Print the measurements as JSON
    #[structopt(long)]
    pub json: bool,

    /// Decimal places for floating-point values
    #[structopt(long, default_value = "2")]
    pub precision: u16,
}
