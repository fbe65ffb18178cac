mod cli;
mod error;
mod ops;
mod rectangle;
mod report;

use cli::Opts;
use error::Error;
use rectangle::Rectangle;
use report::Measurement;
use std::io::Write;
use structopt::StructOpt;

fn run<W: Write>(opts: &Opts, out: &mut W) -> Result<(), Error> {
    let rect1 = Rectangle::new(3, 4); // Rectangle with integers
    let rect2 = Rectangle::new(3.5, 4.5); // Rectangle with floats

    // same generic operators, instantiated once per element type
    let m1 = Measurement::measure(rect1, ops::mul::<i32>, ops::add::<i32>);
    let m2 = Measurement::measure(rect2, ops::mul::<f64>, ops::add::<f64>);

    if opts.json {
        report::write_json(out, &(m1, m2))?;
    } else {
        report::write_text(out, 1, &m1, None)?;
        report::write_text(out, 2, &m2, Some(usize::from(opts.precision)))?;
    }
    out.flush()?;
    Ok(())
}

fn main() -> Result<(), String> {
    let opts = Opts::from_args();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&opts, &mut out).map_err(|e| e.to_string())
}

#[cfg(test)]
mod test {
    use super::run;
    use crate::cli::Opts;
    use structopt::StructOpt;

    fn output(args: &[&str]) -> String {
        let opts = Opts::from_iter(args);
        let mut buf = Vec::new();
        run(&opts, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn default_output() {
        assert_eq!(
            "Rectangle 1: {Width:3 Height:4}\n\
             Area: 12\n\
             Perimeter: 14\n\
             Rectangle 2: {Width:3.5 Height:4.5}\n\
             Area: 15.75\n\
             Perimeter: 16.00\n",
            output(&["generic_rectangle"])
        );
    }

    #[test]
    fn zero_precision_output() {
        let out = output(&["generic_rectangle", "--precision", "0"]);
        assert!(out.ends_with("Area: 16\nPerimeter: 16\n"));
    }

    #[test]
    fn json_output() {
        let v: serde_json::Value =
            serde_json::from_str(&output(&["generic_rectangle", "--json"])).unwrap();
        assert_eq!(12, v[0]["area"]);
        assert_eq!(14, v[0]["perimeter"]);
        assert_eq!(15.75, v[1]["area"]);
        assert_eq!(16.0, v[1]["perimeter"]);
    }
}
